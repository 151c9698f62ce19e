use std::time::Duration;

use mockall::mock;

use super::{
    JobReader, JobWriter, PreferenceReader, PreferenceWriter, RepositoryResult, TagReader,
    TagWriter,
};
use crate::cache::TagCache;
use crate::domain::{
    job::{Job, JobListQuery, NewJob, UpdateJob},
    preferences::{NewSeekerPreferences, SeekerPreferences},
    tag::{NewTag, Tag},
};

mock! {
    pub TagStore {}

    impl TagReader for TagStore {
        fn get_tag_by_name(&self, name: &str) -> RepositoryResult<Option<Tag>>;
    }

    impl TagWriter for TagStore {
        fn ensure_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    }
}

mock! {
    pub JobStore {}

    impl JobReader for JobStore {
        fn get_job_by_id(&self, id: i32) -> RepositoryResult<Option<Job>>;
        fn list_jobs(&self, query: JobListQuery) -> RepositoryResult<(usize, Vec<Job>)>;
        fn list_active_jobs_with_tags(&self) -> RepositoryResult<Vec<Job>>;
    }

    impl JobWriter for JobStore {
        fn create_job(&self, new_job: &NewJob, tag_ids: &[i32]) -> RepositoryResult<Job>;
        fn update_job(&self, job_id: i32, recruiter_id: i32, updates: &UpdateJob) -> RepositoryResult<Job>;
        fn replace_job_tags(&self, job_id: i32, tag_ids: &[i32]) -> RepositoryResult<()>;
        fn delete_job(&self, job_id: i32, recruiter_id: i32) -> RepositoryResult<()>;
    }

    impl TagReader for JobStore {
        fn get_tag_by_name(&self, name: &str) -> RepositoryResult<Option<Tag>>;
    }

    impl TagWriter for JobStore {
        fn ensure_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    }
}

mock! {
    pub Recommender {}

    impl JobReader for Recommender {
        fn get_job_by_id(&self, id: i32) -> RepositoryResult<Option<Job>>;
        fn list_jobs(&self, query: JobListQuery) -> RepositoryResult<(usize, Vec<Job>)>;
        fn list_active_jobs_with_tags(&self) -> RepositoryResult<Vec<Job>>;
    }

    impl PreferenceReader for Recommender {
        fn get_preferences(&self, user_id: i32) -> RepositoryResult<Option<SeekerPreferences>>;
    }
}

mock! {
    pub PreferenceStore {}

    impl PreferenceReader for PreferenceStore {
        fn get_preferences(&self, user_id: i32) -> RepositoryResult<Option<SeekerPreferences>>;
    }

    impl PreferenceWriter for PreferenceStore {
        fn upsert_preferences(&self, new_preferences: &NewSeekerPreferences) -> RepositoryResult<SeekerPreferences>;
    }
}

mock! {
    pub TagCache {}

    impl TagCache for TagCache {
        fn get(&self, key: &str) -> Option<Vec<String>>;
        fn set(&self, key: &str, value: &[String], ttl: Duration);
        fn clear(&self);
    }
}
