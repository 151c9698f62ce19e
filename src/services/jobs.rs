use chrono::Utc;

use crate::cache::TagCache;
use crate::domain::job::{Job, JobListQuery, JobStatus};
use crate::forms::jobs::{BrowseJobsQuery, CreateJobForm, RecruiterJobsQuery, UpdateJobForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{JobReader, JobWriter, TagReader, TagWriter};
use crate::services::extraction::resolve_description_tags;
use crate::services::{ServiceError, ServiceResult};

/// Data required to render a page of job listings.
pub struct JobsPageData {
    /// Paginated list of postings.
    pub jobs: Paginated<Job>,
    /// Total number of postings matching the filters.
    pub total: usize,
}

/// Creates a posting, deriving and persisting its description tags.
pub fn create_job<R, C>(repo: &R, cache: &C, form: CreateJobForm) -> ServiceResult<Job>
where
    R: JobWriter + TagReader + TagWriter + ?Sized,
    C: TagCache + ?Sized,
{
    let new_job = form
        .into_new_job()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let tags = resolve_description_tags(repo, cache, &new_job.description)?;
    let tag_ids: Vec<i32> = tags.iter().map(|tag| tag.id).collect();

    let job = repo
        .create_job(&new_job, &tag_ids)
        .map_err(ServiceError::from)?;

    log::info!("created job {} with {} tag(s)", job.id, job.tags.len());

    Ok(job)
}

/// Patches a posting owned by the requesting recruiter. When the description
/// actually changes, its tags are re-derived and the old associations are
/// replaced in the same transaction as the update.
pub fn update_job<R, C>(
    repo: &R,
    cache: &C,
    job_id: i32,
    form: UpdateJobForm,
) -> ServiceResult<Job>
where
    R: JobReader + JobWriter + TagReader + TagWriter + ?Sized,
    C: TagCache + ?Sized,
{
    let recruiter_id = form.recruiter_id;

    let existing = repo
        .get_job_by_id(job_id)?
        .filter(|job| job.recruiter_id == recruiter_id)
        .ok_or(ServiceError::NotFound)?;

    let mut updates = form
        .into_update_job(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    updates.tag_ids = match updates.description.as_deref() {
        Some(description) if description != existing.description => {
            let tags = resolve_description_tags(repo, cache, description)?;
            Some(tags.into_iter().map(|tag| tag.id).collect())
        }
        _ => None,
    };

    repo.update_job(job_id, recruiter_id, &updates)
        .map_err(ServiceError::from)
}

/// Fetches a single active posting for public display.
pub fn get_job<R>(repo: &R, job_id: i32) -> ServiceResult<Job>
where
    R: JobReader + ?Sized,
{
    repo.get_job_by_id(job_id)?
        .filter(|job| job.status == JobStatus::Active)
        .ok_or(ServiceError::NotFound)
}

/// Lists active postings with the browse filters applied.
pub fn browse_jobs<R>(repo: &R, query: BrowseJobsQuery) -> ServiceResult<JobsPageData>
where
    R: JobReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);

    let mut list_query = JobListQuery::new().status(JobStatus::Active);

    if let Some(term) = query.location {
        list_query = list_query.location_like(term);
    }
    if let Some(min) = query.salary_min {
        list_query = list_query.salary_at_least(min);
    }
    if let Some(max) = query.salary_max {
        list_query = list_query.salary_at_most(max);
    }
    if let Some(employment) = query.employment_type {
        list_query = list_query.employment_type(employment);
    }

    list_query = list_query.paginate(page, per_page);

    let (total, jobs) = repo.list_jobs(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(per_page);

    Ok(JobsPageData {
        jobs: Paginated::new(jobs, page, total_pages),
        total,
    })
}

/// Lists every posting owned by a recruiter, newest first. Unlike the public
/// browse listing, closed postings stay visible to their owner.
pub fn recruiter_jobs<R>(
    repo: &R,
    recruiter_id: i32,
    query: RecruiterJobsQuery,
) -> ServiceResult<JobsPageData>
where
    R: JobReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);

    let list_query = JobListQuery::new()
        .recruiter(recruiter_id)
        .paginate(page, per_page);

    let (total, jobs) = repo.list_jobs(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(per_page);

    Ok(JobsPageData {
        jobs: Paginated::new(jobs, page, total_pages),
        total,
    })
}

/// Hard-deletes a posting owned by the requesting recruiter.
pub fn remove_job<R>(repo: &R, job_id: i32, recruiter_id: i32) -> ServiceResult<()>
where
    R: JobWriter + ?Sized,
{
    repo.delete_job(job_id, recruiter_id)
        .map_err(ServiceError::from)
}
