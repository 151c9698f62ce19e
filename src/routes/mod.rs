pub mod jobs;
pub mod preferences;
