use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A seeker's stated job preferences, at most one record per seeker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeekerPreferences {
    /// Unique identifier of the preference record.
    pub id: i32,
    /// Identifier of the seeker the record belongs to.
    pub user_id: i32,
    /// Job titles the seeker is interested in, in stated order.
    pub preferred_job_titles: Vec<String>,
    /// Industries the seeker is interested in, in stated order.
    pub preferred_industries: Vec<String>,
    /// Locations the seeker would accept. Empty means anywhere.
    pub preferred_locations: Vec<String>,
    /// Lower bound of the expected salary range.
    pub salary_expectation_min: Option<i32>,
    /// Upper bound of the expected salary range.
    pub salary_expectation_max: Option<i32>,
    /// Seeker chose to skip the preference step; scoring falls back to
    /// recency ordering.
    pub is_skipped: bool,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

impl SeekerPreferences {
    /// The preference-tag set scored against job tags: titles followed by
    /// industries, original order preserved.
    pub fn preferred_tags(&self) -> Vec<String> {
        self.preferred_job_titles
            .iter()
            .chain(self.preferred_industries.iter())
            .cloned()
            .collect()
    }
}

/// Payload saved on preference submission; replaces any existing record for
/// the same seeker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeekerPreferences {
    pub user_id: i32,
    pub preferred_job_titles: Vec<String>,
    pub preferred_industries: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub salary_expectation_min: Option<i32>,
    pub salary_expectation_max: Option<i32>,
    pub is_skipped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    #[test]
    fn preferred_tags_concatenates_titles_then_industries() {
        let preferences = SeekerPreferences {
            id: 1,
            user_id: 9,
            preferred_job_titles: vec!["React Developer".to_string()],
            preferred_industries: vec!["Fintech".to_string()],
            preferred_locations: Vec::new(),
            salary_expectation_min: None,
            salary_expectation_max: None,
            is_skipped: false,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        };

        assert_eq!(
            preferences.preferred_tags(),
            vec!["React Developer".to_string(), "Fintech".to_string()]
        );
    }
}
