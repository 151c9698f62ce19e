use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::preferences::NewSeekerPreferences;
use crate::forms::sanitize_inline_text;

/// Result type returned by the preference form helpers.
pub type PreferencesFormResult<T> = Result<T, PreferencesFormError>;

/// Errors that can occur while processing preference forms.
#[derive(Debug, Error)]
pub enum PreferencesFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The salary expectation bounds are inverted.
    #[error("salary_expectation_min cannot exceed salary_expectation_max")]
    InvertedSalaryRange,
}

/// JSON payload saved when a seeker submits the preference step. Saving again
/// replaces the previous record in full.
#[derive(Debug, Deserialize, Validate)]
pub struct SavePreferencesForm {
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[serde(default)]
    pub preferred_job_titles: Vec<String>,
    #[serde(default)]
    pub preferred_industries: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[validate(range(min = 0))]
    pub salary_expectation_min: Option<i32>,
    #[validate(range(min = 0))]
    pub salary_expectation_max: Option<i32>,
    #[serde(default)]
    pub is_skipped: bool,
}

impl SavePreferencesForm {
    /// Validates and sanitizes the payload into a domain upsert record.
    /// Blank list entries are dropped rather than rejected.
    pub fn into_new_preferences(self) -> PreferencesFormResult<NewSeekerPreferences> {
        self.validate()?;

        if let (Some(min), Some(max)) = (self.salary_expectation_min, self.salary_expectation_max)
        {
            if min > max {
                return Err(PreferencesFormError::InvertedSalaryRange);
            }
        }

        Ok(NewSeekerPreferences {
            user_id: self.user_id,
            preferred_job_titles: sanitize_list(self.preferred_job_titles),
            preferred_industries: sanitize_list(self.preferred_industries),
            preferred_locations: sanitize_list(self.preferred_locations),
            salary_expectation_min: self.salary_expectation_min,
            salary_expectation_max: self.salary_expectation_max,
            is_skipped: self.is_skipped,
        })
    }
}

fn sanitize_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| sanitize_inline_text(&value))
        .filter(|value| !value.is_empty())
        .collect()
}
