use chrono::Utc;
use diesel::prelude::*;

use crate::domain::preferences::{
    NewSeekerPreferences as DomainNewSeekerPreferences, SeekerPreferences as DomainSeekerPreferences,
};
use crate::models::preferences::{
    NewSeekerPreferences as DbNewSeekerPreferences, ReplaceSeekerPreferences,
    SeekerPreferences as DbSeekerPreferences,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PreferenceReader, PreferenceWriter};

impl PreferenceReader for DieselRepository {
    fn get_preferences(&self, user_id: i32) -> RepositoryResult<Option<DomainSeekerPreferences>> {
        use crate::schema::job_preferences;

        let mut conn = self.conn()?;
        let row = job_preferences::table
            .filter(job_preferences::user_id.eq(user_id))
            .first::<DbSeekerPreferences>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                let domain =
                    DomainSeekerPreferences::try_from(row).map_err(RepositoryError::from)?;
                Ok(Some(domain))
            }
            None => Ok(None),
        }
    }
}

impl PreferenceWriter for DieselRepository {
    fn upsert_preferences(
        &self,
        new_preferences: &DomainNewSeekerPreferences,
    ) -> RepositoryResult<DomainSeekerPreferences> {
        use crate::schema::job_preferences;

        let mut conn = self.conn()?;
        let insertable =
            DbNewSeekerPreferences::try_from(new_preferences).map_err(RepositoryError::from)?;

        let replacement = ReplaceSeekerPreferences {
            preferred_job_titles: insertable.preferred_job_titles.clone(),
            preferred_industries: insertable.preferred_industries.clone(),
            preferred_locations: insertable.preferred_locations.clone(),
            salary_expectation_min: insertable.salary_expectation_min,
            salary_expectation_max: insertable.salary_expectation_max,
            is_skipped: insertable.is_skipped,
            updated_at: Utc::now().naive_utc(),
        };

        let saved = diesel::insert_into(job_preferences::table)
            .values(&insertable)
            .on_conflict(job_preferences::user_id)
            .do_update()
            .set(&replacement)
            .get_result::<DbSeekerPreferences>(&mut conn)?;

        DomainSeekerPreferences::try_from(saved).map_err(RepositoryError::from)
    }
}
