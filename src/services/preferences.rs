use crate::domain::preferences::SeekerPreferences;
use crate::forms::preferences::SavePreferencesForm;
use crate::repository::{PreferenceReader, PreferenceWriter};
use crate::services::{ServiceError, ServiceResult};

/// Saves a seeker's preferences, replacing any previously stored record.
pub fn save_preferences<R>(repo: &R, form: SavePreferencesForm) -> ServiceResult<SeekerPreferences>
where
    R: PreferenceWriter + ?Sized,
{
    let record = form
        .into_new_preferences()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.upsert_preferences(&record).map_err(ServiceError::from)
}

/// Fetches the stored preferences of a seeker.
pub fn load_preferences<R>(repo: &R, user_id: i32) -> ServiceResult<SeekerPreferences>
where
    R: PreferenceReader + ?Sized,
{
    repo.get_preferences(user_id)?.ok_or(ServiceError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::MockPreferenceStore;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn stored(user_id: i32) -> SeekerPreferences {
        SeekerPreferences {
            id: 1,
            user_id,
            preferred_job_titles: vec!["React Developer".to_string()],
            preferred_industries: Vec::new(),
            preferred_locations: Vec::new(),
            salary_expectation_min: None,
            salary_expectation_max: None,
            is_skipped: false,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn save_preferences_sanitizes_and_upserts() {
        let mut repo = MockPreferenceStore::new();

        repo.expect_upsert_preferences()
            .times(1)
            .withf(|record| {
                assert_eq!(record.user_id, 9);
                assert_eq!(record.preferred_job_titles, vec!["React Developer"]);
                true
            })
            .returning(|record| Ok(stored(record.user_id)));

        let form = SavePreferencesForm {
            user_id: 9,
            preferred_job_titles: vec!["  React \t Developer ".to_string()],
            preferred_industries: Vec::new(),
            preferred_locations: Vec::new(),
            salary_expectation_min: None,
            salary_expectation_max: None,
            is_skipped: false,
        };

        let saved = save_preferences(&repo, form).expect("expected success");

        assert_eq!(saved.user_id, 9);
    }

    #[test]
    fn save_preferences_rejects_invalid_form() {
        let repo = MockPreferenceStore::new();

        let form = SavePreferencesForm {
            user_id: 9,
            preferred_job_titles: Vec::new(),
            preferred_industries: Vec::new(),
            preferred_locations: Vec::new(),
            salary_expectation_min: Some(120_000),
            salary_expectation_max: Some(80_000),
            is_skipped: false,
        };

        let result = save_preferences(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn load_preferences_maps_missing_record() {
        let mut repo = MockPreferenceStore::new();

        repo.expect_get_preferences().times(1).returning(|_| Ok(None));

        let result = load_preferences(&repo, 9);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
