use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::job::{JobStatus, NewJob, UpdateJob};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a job title.
const TITLE_MAX_LEN: u64 = 256;

/// Result type returned by the job form helpers.
pub type JobFormResult<T> = Result<T, JobFormError>;

/// Errors that can occur while processing job forms.
#[derive(Debug, Error)]
pub enum JobFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided title is empty after sanitization.
    #[error("job title cannot be empty")]
    EmptyTitle,
    /// The salary bounds are inverted.
    #[error("salary_min cannot exceed salary_max")]
    InvertedSalaryRange,
}

/// JSON payload accepted when a recruiter posts a new job.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobForm {
    #[validate(range(min = 1))]
    pub recruiter_id: i32,
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0))]
    pub salary_min: Option<i32>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i32>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
}

impl CreateJobForm {
    /// Validates and sanitizes the payload into a domain `NewJob`.
    pub fn into_new_job(self) -> JobFormResult<NewJob> {
        self.validate()?;
        check_salary_range(self.salary_min, self.salary_max)?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(JobFormError::EmptyTitle);
        }

        Ok(NewJob {
            recruiter_id: self.recruiter_id,
            title,
            description: self.description.trim().to_string(),
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            location: self.location.map(|value| sanitize_inline_text(&value)),
            employment_type: self
                .employment_type
                .map(|value| sanitize_inline_text(&value)),
        })
    }
}

/// JSON payload accepted when a recruiter edits a job. Absent fields keep
/// their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobForm {
    #[validate(range(min = 1))]
    pub recruiter_id: i32,
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub status: Option<JobStatus>,
    #[validate(range(min = 0))]
    pub salary_min: Option<i32>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i32>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
}

impl UpdateJobForm {
    /// Validates and sanitizes the payload into a domain `UpdateJob`.
    pub fn into_update_job(self, updated_at: NaiveDateTime) -> JobFormResult<UpdateJob> {
        self.validate()?;
        check_salary_range(self.salary_min, self.salary_max)?;

        let title = match self.title {
            Some(raw) => {
                let sanitized = sanitize_inline_text(&raw);
                if sanitized.is_empty() {
                    return Err(JobFormError::EmptyTitle);
                }
                Some(sanitized)
            }
            None => None,
        };

        Ok(UpdateJob {
            title,
            description: self
                .description
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            status: self.status,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            location: self.location.map(|value| sanitize_inline_text(&value)),
            employment_type: self
                .employment_type
                .map(|value| sanitize_inline_text(&value)),
            tag_ids: None,
            updated_at,
        })
    }
}

/// Query parameters accepted by the public job browse endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseJobsQuery {
    pub location: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub employment_type: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Query parameters accepted by the recruiter job listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RecruiterJobsQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

fn check_salary_range(min: Option<i32>, max: Option<i32>) -> JobFormResult<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(JobFormError::InvertedSalaryRange);
        }
    }
    Ok(())
}
