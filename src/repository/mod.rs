use crate::db::{DbConnection, DbPool};
use crate::domain::job::{Job, JobListQuery, NewJob, UpdateJob};
use crate::domain::preferences::{NewSeekerPreferences, SeekerPreferences};
use crate::domain::tag::{NewTag, Tag};

pub mod errors;
pub mod job;
pub mod preferences;
pub mod tag;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over the tag catalog.
pub trait TagReader {
    fn get_tag_by_name(&self, name: &str) -> RepositoryResult<Option<Tag>>;
}

/// Write operations over the tag catalog.
pub trait TagWriter {
    /// Insert the tag if its name is new, otherwise return the existing row.
    /// Racing duplicate inserts resolve to the first writer's row.
    fn ensure_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
}

/// Read-only operations over job postings.
pub trait JobReader {
    fn get_job_by_id(&self, id: i32) -> RepositoryResult<Option<Job>>;
    fn list_jobs(&self, query: JobListQuery) -> RepositoryResult<(usize, Vec<Job>)>;
    /// Every active posting with its tags resolved, for in-process scoring.
    fn list_active_jobs_with_tags(&self) -> RepositoryResult<Vec<Job>>;
}

/// Write operations over job postings and their tag associations.
pub trait JobWriter {
    fn create_job(&self, new_job: &NewJob, tag_ids: &[i32]) -> RepositoryResult<Job>;
    /// Patch a posting owned by `recruiter_id`. When `updates.tag_ids` is
    /// set, the old associations are replaced in the same transaction.
    fn update_job(
        &self,
        job_id: i32,
        recruiter_id: i32,
        updates: &UpdateJob,
    ) -> RepositoryResult<Job>;
    /// Atomically swap a posting's tag associations for `tag_ids`.
    fn replace_job_tags(&self, job_id: i32, tag_ids: &[i32]) -> RepositoryResult<()>;
    fn delete_job(&self, job_id: i32, recruiter_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over seeker preference records.
pub trait PreferenceReader {
    fn get_preferences(&self, user_id: i32) -> RepositoryResult<Option<SeekerPreferences>>;
}

/// Write operations over seeker preference records.
pub trait PreferenceWriter {
    /// Create the seeker's record or replace the existing one in full.
    fn upsert_preferences(
        &self,
        new_preferences: &NewSeekerPreferences,
    ) -> RepositoryResult<SeekerPreferences>;
}
