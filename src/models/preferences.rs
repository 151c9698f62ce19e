use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::preferences::{
    NewSeekerPreferences as DomainNewSeekerPreferences, SeekerPreferences as DomainSeekerPreferences,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::job_preferences)]
pub struct SeekerPreferences {
    pub id: i32,
    pub user_id: i32,
    pub preferred_job_titles: String,
    pub preferred_industries: String,
    pub preferred_locations: String,
    pub salary_expectation_min: Option<i32>,
    pub salary_expectation_max: Option<i32>,
    pub is_skipped: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable row; the string lists are serialized to JSON text columns.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::job_preferences)]
pub struct NewSeekerPreferences {
    pub user_id: i32,
    pub preferred_job_titles: String,
    pub preferred_industries: String,
    pub preferred_locations: String,
    pub salary_expectation_min: Option<i32>,
    pub salary_expectation_max: Option<i32>,
    pub is_skipped: bool,
}

/// Replacement values applied when a seeker saves preferences again.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::job_preferences)]
pub struct ReplaceSeekerPreferences {
    pub preferred_job_titles: String,
    pub preferred_industries: String,
    pub preferred_locations: String,
    pub salary_expectation_min: Option<i32>,
    pub salary_expectation_max: Option<i32>,
    pub is_skipped: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<SeekerPreferences> for DomainSeekerPreferences {
    type Error = serde_json::Error;

    fn try_from(value: SeekerPreferences) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            preferred_job_titles: serde_json::from_str(&value.preferred_job_titles)?,
            preferred_industries: serde_json::from_str(&value.preferred_industries)?,
            preferred_locations: serde_json::from_str(&value.preferred_locations)?,
            salary_expectation_min: value.salary_expectation_min,
            salary_expectation_max: value.salary_expectation_max,
            is_skipped: value.is_skipped,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl TryFrom<&DomainNewSeekerPreferences> for NewSeekerPreferences {
    type Error = serde_json::Error;

    fn try_from(value: &DomainNewSeekerPreferences) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: value.user_id,
            preferred_job_titles: serde_json::to_string(&value.preferred_job_titles)?,
            preferred_industries: serde_json::to_string(&value.preferred_industries)?,
            preferred_locations: serde_json::to_string(&value.preferred_locations)?,
            salary_expectation_min: value.salary_expectation_min,
            salary_expectation_max: value.salary_expectation_max,
            is_skipped: value.is_skipped,
        })
    }
}
