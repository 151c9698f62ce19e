use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::job::{
    Job as DomainJob, JobStatus, NewJob as DomainNewJob, UpdateJob as DomainUpdateJob,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::jobs)]
pub struct Job {
    pub id: i32,
    pub recruiter_id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::jobs)]
pub struct NewJob<'a> {
    pub recruiter_id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub status: &'a str,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub location: Option<&'a str>,
    pub employment_type: Option<&'a str>,
}

// `None` fields are skipped by diesel, giving COALESCE-style patches.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::jobs)]
pub struct UpdateJob<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub location: Option<&'a str>,
    pub employment_type: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::job_tags)]
#[diesel(belongs_to(Job))]
pub struct JobTag {
    pub id: i32,
    pub job_id: i32,
    pub tag_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::job_tags)]
pub struct NewJobTag {
    pub job_id: i32,
    pub tag_id: i32,
}

impl From<Job> for DomainJob {
    fn from(value: Job) -> Self {
        Self {
            id: value.id,
            recruiter_id: value.recruiter_id,
            title: value.title,
            status: JobStatus::from(value.status.as_str()),
            description: value.description,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            location: value.location,
            employment_type: value.employment_type,
            created_at: value.created_at,
            updated_at: value.updated_at,
            tags: Vec::new(),
        }
    }
}

impl<'a> From<&'a DomainNewJob> for NewJob<'a> {
    fn from(value: &'a DomainNewJob) -> Self {
        Self {
            recruiter_id: value.recruiter_id,
            title: value.title.as_str(),
            description: value.description.as_str(),
            status: JobStatus::Active.as_str(),
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            location: value.location.as_deref(),
            employment_type: value.employment_type.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateJob> for UpdateJob<'a> {
    fn from(value: &'a DomainUpdateJob) -> Self {
        Self {
            title: value.title.as_deref(),
            description: value.description.as_deref(),
            status: value.status.as_ref().map(JobStatus::as_str),
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            location: value.location.as_deref(),
            employment_type: value.employment_type.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
