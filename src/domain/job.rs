use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;
use crate::pagination::Pagination;

/// Lifecycle state of a posting. Only active jobs are browsable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
        }
    }
}

impl From<&str> for JobStatus {
    fn from(value: &str) -> Self {
        match value {
            "closed" => JobStatus::Closed,
            _ => JobStatus::Active,
        }
    }
}

/// Domain representation of a job posting together with its catalog tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    /// Unique identifier of the posting.
    pub id: i32,
    /// Identifier of the recruiter who owns the posting.
    pub recruiter_id: i32,
    /// Short title shown in listings.
    pub title: String,
    /// Free-text description the tag extractor runs over.
    pub description: String,
    /// Lifecycle state of the posting.
    pub status: JobStatus,
    /// Lower salary bound, if the recruiter provided one.
    pub salary_min: Option<i32>,
    /// Upper salary bound, if the recruiter provided one.
    pub salary_max: Option<i32>,
    /// Free-form location, absent for remote/unspecified postings.
    pub location: Option<String>,
    /// Employment type label (full-time, contract, ...).
    pub employment_type: Option<String>,
    /// Timestamp for when the posting was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the posting.
    pub updated_at: NaiveDateTime,
    /// Catalog tags derived from the description, at most three.
    pub tags: Vec<Tag>,
}

/// Payload required to insert a new posting. Status starts as `active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub recruiter_id: i32,
    pub title: String,
    pub description: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
}

/// Patch data applied when updating a posting. `None` fields keep the
/// stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    /// Replacement tag associations, set when the description changed. The
    /// old associations are swapped for these in the same transaction as the
    /// field update.
    pub tag_ids: Option<Vec<i32>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Query definition used to filter and paginate job listings.
#[derive(Debug, Clone)]
pub struct JobListQuery {
    /// Restrict to postings in this lifecycle state.
    pub status: Option<JobStatus>,
    /// Restrict to postings owned by this recruiter.
    pub recruiter_id: Option<i32>,
    /// Case-insensitive substring match on the location.
    pub location: Option<String>,
    /// Keep postings whose `salary_max` reaches at least this value.
    pub salary_min: Option<i32>,
    /// Keep postings whose `salary_min` stays at or below this value.
    pub salary_max: Option<i32>,
    /// Exact match on the employment type label.
    pub employment_type: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl JobListQuery {
    /// Construct a query that targets every posting.
    pub fn new() -> Self {
        Self {
            status: None,
            recruiter_id: None,
            location: None,
            salary_min: None,
            salary_max: None,
            employment_type: None,
            pagination: None,
        }
    }

    /// Restrict results to postings with the given status.
    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict results to postings owned by `recruiter_id`.
    pub fn recruiter(mut self, recruiter_id: i32) -> Self {
        self.recruiter_id = Some(recruiter_id);
        self
    }

    /// Filter by a substring of the location.
    pub fn location_like(mut self, term: impl Into<String>) -> Self {
        self.location = Some(term.into());
        self
    }

    /// Keep postings paying at least `amount` at the top of their range.
    pub fn salary_at_least(mut self, amount: i32) -> Self {
        self.salary_min = Some(amount);
        self
    }

    /// Keep postings starting at or below `amount`.
    pub fn salary_at_most(mut self, amount: i32) -> Self {
        self.salary_max = Some(amount);
        self
    }

    /// Exact-match filter on the employment type.
    pub fn employment_type(mut self, value: impl Into<String>) -> Self {
        self.employment_type = Some(value.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl Default for JobListQuery {
    fn default() -> Self {
        Self::new()
    }
}
