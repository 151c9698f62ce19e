pub mod job;
pub mod preferences;
pub mod tag;
