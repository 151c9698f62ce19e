use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::job::{
    Job as DomainJob, JobListQuery, JobStatus, NewJob as DomainNewJob,
    UpdateJob as DomainUpdateJob,
};
use crate::domain::tag::Tag as DomainTag;
use crate::models::job::{
    Job as DbJob, NewJob as DbNewJob, NewJobTag as DbNewJobTag, UpdateJob as DbUpdateJob,
};
use crate::models::tag::Tag as DbTag;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, JobReader, JobWriter};

impl JobReader for DieselRepository {
    fn get_job_by_id(&self, id: i32) -> RepositoryResult<Option<DomainJob>> {
        use crate::schema::jobs;

        let mut conn = self.conn()?;
        let job = jobs::table
            .filter(jobs::id.eq(id))
            .first::<DbJob>(&mut conn)
            .optional()?;

        let Some(db_job) = job else {
            return Ok(None);
        };

        let mut domain: DomainJob = db_job.into();
        let mut tag_map = load_tags_for_jobs(&mut conn, &[domain.id])?;
        domain.tags = tag_map.remove(&domain.id).unwrap_or_default();

        Ok(Some(domain))
    }

    fn list_jobs(&self, query: JobListQuery) -> RepositoryResult<(usize, Vec<DomainJob>)> {
        use crate::schema::jobs;

        let mut conn = self.conn()?;

        let JobListQuery {
            status,
            recruiter_id,
            location,
            salary_min,
            salary_max,
            employment_type,
            pagination,
        } = query;

        let status_filter = status.map(|status| status.as_str().to_string());
        let location_pattern = location.as_ref().map(|term| format!("%{}%", term));

        let mut count_query = jobs::table.into_boxed::<diesel::sqlite::Sqlite>();
        let mut items_query = jobs::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(ref status_value) = status_filter {
            count_query = count_query.filter(jobs::status.eq(status_value.clone()));
            items_query = items_query.filter(jobs::status.eq(status_value.clone()));
        }

        if let Some(recruiter) = recruiter_id {
            count_query = count_query.filter(jobs::recruiter_id.eq(recruiter));
            items_query = items_query.filter(jobs::recruiter_id.eq(recruiter));
        }

        if let Some(ref pattern) = location_pattern {
            count_query = count_query.filter(jobs::location.like(pattern.clone()));
            items_query = items_query.filter(jobs::location.like(pattern.clone()));
        }

        // A posting missing a salary bound stays visible under salary filters.
        if let Some(min) = salary_min {
            count_query =
                count_query.filter(jobs::salary_max.ge(min).or(jobs::salary_max.is_null()));
            items_query =
                items_query.filter(jobs::salary_max.ge(min).or(jobs::salary_max.is_null()));
        }

        if let Some(max) = salary_max {
            count_query =
                count_query.filter(jobs::salary_min.le(max).or(jobs::salary_min.is_null()));
            items_query =
                items_query.filter(jobs::salary_min.le(max).or(jobs::salary_min.is_null()));
        }

        if let Some(ref employment) = employment_type {
            count_query = count_query.filter(jobs::employment_type.eq(employment.clone()));
            items_query = items_query.filter(jobs::employment_type.eq(employment.clone()));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        items_query = items_query.order((jobs::created_at.desc(), jobs::id.desc()));

        if let Some(pagination) = &pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_jobs = items_query.load::<DbJob>(&mut conn)?;

        if db_jobs.is_empty() {
            return Ok((total, Vec::new()));
        }

        let job_ids: Vec<i32> = db_jobs.iter().map(|job| job.id).collect();
        let mut tag_map = load_tags_for_jobs(&mut conn, &job_ids)?;

        let mut jobs = Vec::with_capacity(db_jobs.len());
        for db_job in db_jobs {
            let mut domain: DomainJob = db_job.into();
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
            jobs.push(domain);
        }

        Ok((total, jobs))
    }

    fn list_active_jobs_with_tags(&self) -> RepositoryResult<Vec<DomainJob>> {
        use crate::schema::jobs;

        let mut conn = self.conn()?;

        let db_jobs = jobs::table
            .filter(jobs::status.eq(JobStatus::Active.as_str()))
            .order((jobs::created_at.desc(), jobs::id.desc()))
            .load::<DbJob>(&mut conn)?;

        if db_jobs.is_empty() {
            return Ok(Vec::new());
        }

        let job_ids: Vec<i32> = db_jobs.iter().map(|job| job.id).collect();
        let mut tag_map = load_tags_for_jobs(&mut conn, &job_ids)?;

        let mut jobs = Vec::with_capacity(db_jobs.len());
        for db_job in db_jobs {
            let mut domain: DomainJob = db_job.into();
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
            jobs.push(domain);
        }

        Ok(jobs)
    }
}

impl JobWriter for DieselRepository {
    fn create_job(&self, new_job: &DomainNewJob, tag_ids: &[i32]) -> RepositoryResult<DomainJob> {
        use crate::schema::jobs;

        let mut conn = self.conn()?;

        conn.transaction::<DomainJob, RepositoryError, _>(|conn| {
            let db_new = DbNewJob::from(new_job);

            let created = diesel::insert_into(jobs::table)
                .values(&db_new)
                .get_result::<DbJob>(conn)?;

            let job_id = created.id;
            insert_job_tags(conn, job_id, tag_ids)?;

            let mut domain: DomainJob = created.into();
            let mut tag_map = load_tags_for_jobs(conn, &[job_id])?;
            domain.tags = tag_map.remove(&job_id).unwrap_or_default();

            Ok(domain)
        })
    }

    fn update_job(
        &self,
        job_id: i32,
        recruiter_id: i32,
        updates: &DomainUpdateJob,
    ) -> RepositoryResult<DomainJob> {
        use crate::schema::{job_tags, jobs};

        let mut conn = self.conn()?;

        conn.transaction::<DomainJob, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateJob::from(updates);

            let target = jobs::table
                .filter(jobs::id.eq(job_id))
                .filter(jobs::recruiter_id.eq(recruiter_id));

            let updated = diesel::update(target)
                .set(&db_updates)
                .get_result::<DbJob>(conn)?;

            if let Some(tag_ids) = updates.tag_ids.as_deref() {
                diesel::delete(job_tags::table.filter(job_tags::job_id.eq(job_id)))
                    .execute(conn)?;
                insert_job_tags(conn, job_id, tag_ids)?;
            }

            let mut domain: DomainJob = updated.into();
            let mut tag_map = load_tags_for_jobs(conn, &[job_id])?;
            domain.tags = tag_map.remove(&job_id).unwrap_or_default();

            Ok(domain)
        })
    }

    fn replace_job_tags(&self, job_id: i32, tag_ids: &[i32]) -> RepositoryResult<()> {
        use crate::schema::job_tags;

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(job_tags::table.filter(job_tags::job_id.eq(job_id))).execute(conn)?;
            insert_job_tags(conn, job_id, tag_ids)?;
            Ok(())
        })
    }

    fn delete_job(&self, job_id: i32, recruiter_id: i32) -> RepositoryResult<()> {
        use crate::schema::{job_tags, jobs};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let target = jobs::table
                .filter(jobs::id.eq(job_id))
                .filter(jobs::recruiter_id.eq(recruiter_id));

            let deleted = diesel::delete(target).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            diesel::delete(job_tags::table.filter(job_tags::job_id.eq(job_id))).execute(conn)?;

            Ok(())
        })
    }
}

fn insert_job_tags(
    conn: &mut SqliteConnection,
    job_id: i32,
    tag_ids: &[i32],
) -> RepositoryResult<()> {
    use crate::schema::job_tags;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let payload: Vec<DbNewJobTag> = tag_ids
        .iter()
        .map(|tag_id| DbNewJobTag {
            job_id,
            tag_id: *tag_id,
        })
        .collect();

    diesel::insert_into(job_tags::table)
        .values(&payload)
        .execute(conn)?;

    Ok(())
}

/// Batch-load the tags of the given jobs, keyed by job id. Tag order within a
/// job follows the association insertion order.
fn load_tags_for_jobs(
    conn: &mut SqliteConnection,
    job_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::schema::{job_tags, tags};

    if job_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = job_tags::table
        .inner_join(tags::table)
        .filter(job_tags::job_id.eq_any(job_ids))
        .order(job_tags::id.asc())
        .select((job_tags::job_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (job_id, tag) in rows {
        map.entry(job_id).or_default().push(tag.into());
    }

    Ok(map)
}
