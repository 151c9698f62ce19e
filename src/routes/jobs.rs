use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::cache::InMemoryTagCache;
use crate::forms::jobs::{BrowseJobsQuery, CreateJobForm, RecruiterJobsQuery, UpdateJobForm};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::jobs::{
    browse_jobs, create_job, get_job, recruiter_jobs, remove_job, update_job,
};
use crate::services::recommendations::{RecommendationQuery, recommend_jobs};

#[post("/v1/jobs")]
/// Create a posting; its description tags are derived and stored with it.
pub async fn api_create_job(
    repo: web::Data<DieselRepository>,
    cache: web::Data<InMemoryTagCache>,
    form: web::Json<CreateJobForm>,
) -> impl Responder {
    match create_job(repo.get_ref(), cache.get_ref(), form.into_inner()) {
        Ok(job) => HttpResponse::Created().json(job),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(message),
        Err(err) => {
            log::error!("Failed to create job: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/v1/jobs/{job_id}")]
/// Patch a posting; a changed description re-derives its tags.
pub async fn api_update_job(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    cache: web::Data<InMemoryTagCache>,
    form: web::Json<UpdateJobForm>,
) -> impl Responder {
    let job_id = path.into_inner();

    match update_job(repo.get_ref(), cache.get_ref(), job_id, form.into_inner()) {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(message),
        Err(err) => {
            log::error!("Failed to update job {job_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteJobQuery {
    pub recruiter_id: i32,
}

#[delete("/v1/jobs/{job_id}")]
pub async fn api_delete_job(
    path: web::Path<i32>,
    params: web::Query<DeleteJobQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let job_id = path.into_inner();

    match remove_job(repo.get_ref(), job_id, params.recruiter_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to delete job {job_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/jobs")]
/// Browse active postings with optional location, salary, and employment
/// type filters.
pub async fn api_browse_jobs(
    params: web::Query<BrowseJobsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match browse_jobs(repo.get_ref(), params.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(data.jobs),
        Err(err) => {
            log::error!("Failed to browse jobs: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/recruiters/{recruiter_id}/jobs")]
/// List a recruiter's own postings, closed ones included.
pub async fn api_recruiter_jobs(
    path: web::Path<i32>,
    params: web::Query<RecruiterJobsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let recruiter_id = path.into_inner();

    match recruiter_jobs(repo.get_ref(), recruiter_id, params.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(data.jobs),
        Err(err) => {
            log::error!("Failed to list jobs for recruiter {recruiter_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/jobs/recommended")]
/// Rank active postings against the seeker's stored preferences.
pub async fn api_recommended_jobs(
    params: web::Query<RecommendationQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match recommend_jobs(repo.get_ref(), params.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::error!("Failed to recommend jobs: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/jobs/{job_id}")]
pub async fn api_get_job(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let job_id = path.into_inner();

    match get_job(repo.get_ref(), job_id) {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to fetch job {job_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
