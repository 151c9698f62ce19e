//! Preference-based ranking of active job postings.
//!
//! Scoring runs in application code over bulk-fetched jobs so the algorithm
//! stays unit-testable without a database.

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;
use crate::domain::preferences::SeekerPreferences;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{JobReader, PreferenceReader};
use crate::services::ServiceResult;

/// Query parameters accepted by the recommendation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    /// Seeker whose preferences drive the ranking.
    pub seeker_id: i32,
    /// Page number requested by the client (1-based).
    pub page: Option<usize>,
    /// Page size requested by the client.
    pub per_page: Option<usize>,
}

/// A job annotated with its preference-match score.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScoredJob {
    pub job: Job,
    /// Number of distinct job tags matching the preference-tag set.
    pub match_score: usize,
    /// Display form `"{score}/{preference tag count}"`.
    pub match_score_display: String,
}

/// Data returned to the recommendation endpoint.
#[derive(Debug, Serialize)]
pub struct RecommendationPageData {
    pub jobs: Paginated<ScoredJob>,
    /// Size of the seeker's preference-tag set, zero when absent or skipped.
    pub total_preferred_tags: usize,
}

/// Case-insensitive bidirectional substring match between a job tag name and
/// a preference entry. "React" matches the preference "React Developer" and
/// vice versa. Deliberately loose for short names; see DESIGN notes.
fn names_cross_match(tag_name: &str, preference: &str) -> bool {
    let tag_name = tag_name.to_lowercase();
    let preference = preference.to_lowercase();
    tag_name.contains(&preference) || preference.contains(&tag_name)
}

/// Count the job's tags that match any preference entry. Each job tag counts
/// at most once, however many preference entries it matches.
pub fn match_score(job: &Job, preferred: &[String]) -> usize {
    job.tags
        .iter()
        .filter(|tag| {
            preferred
                .iter()
                .any(|preference| names_cross_match(&tag.name, preference))
        })
        .count()
}

fn location_compatible(job: &Job, preferences: &SeekerPreferences) -> bool {
    if preferences.preferred_locations.is_empty() {
        return true;
    }
    match job.location.as_ref() {
        // Postings without a location stay visible everywhere.
        None => true,
        Some(location) => preferences.preferred_locations.contains(location),
    }
}

fn salary_compatible(job: &Job, preferences: &SeekerPreferences) -> bool {
    // A posting missing a bound is treated as compatible with that bound.
    let min_ok = match preferences.salary_expectation_min {
        Some(expected_min) => job.salary_max.is_none_or(|max| max >= expected_min),
        None => true,
    };
    let max_ok = match preferences.salary_expectation_max {
        Some(expected_max) => job.salary_min.is_none_or(|min| min <= expected_max),
        None => true,
    };
    min_ok && max_ok
}

/// Rank the active postings for a seeker.
///
/// Without a preference record, or when the seeker skipped the preference
/// step, every job scores zero and the ranking falls back to recency with no
/// location or salary filtering. Otherwise candidates are pre-filtered by the
/// non-empty preference fields and ordered by score descending, then creation
/// time descending, then id descending. That ordering is total, so
/// equal-scoring jobs never swap places between calls.
pub fn recommend_jobs<R>(repo: &R, query: RecommendationQuery) -> ServiceResult<RecommendationPageData>
where
    R: JobReader + PreferenceReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);

    let preferences = repo.get_preferences(query.seeker_id)?;
    let jobs = repo.list_active_jobs_with_tags()?;

    let (candidates, preferred) = match &preferences {
        Some(prefs) if !prefs.is_skipped => {
            let candidates: Vec<Job> = jobs
                .into_iter()
                .filter(|job| location_compatible(job, prefs) && salary_compatible(job, prefs))
                .collect();
            (candidates, prefs.preferred_tags())
        }
        // Fallback: recency ordering, no filtering, all-zero scores.
        _ => (jobs, Vec::new()),
    };

    let total_preferred_tags = preferred.len();
    let display_denominator = total_preferred_tags.max(1);

    let mut scored: Vec<ScoredJob> = candidates
        .into_iter()
        .map(|job| {
            let score = match_score(&job, &preferred);
            ScoredJob {
                match_score: score,
                match_score_display: format!("{score}/{display_denominator}"),
                job,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| b.job.created_at.cmp(&a.job.created_at))
            .then_with(|| b.job.id.cmp(&a.job.id))
    });

    let total = scored.len();
    let total_pages = total.div_ceil(per_page);
    let offset = (page - 1) * per_page;
    let items: Vec<ScoredJob> = scored.into_iter().skip(offset).take(per_page).collect();

    log::debug!(
        "recommended {total} candidate job(s) for seeker {} ({total_preferred_tags} preference tag(s))",
        query.seeker_id
    );

    Ok(RecommendationPageData {
        jobs: Paginated::new(items, page, total_pages),
        total_preferred_tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::job::JobStatus;
    use crate::domain::tag::{Tag, TagCategory};
    use crate::repository::mock::MockRecommender;

    fn datetime(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .unwrap_or_default()
    }

    fn tag(id: i32, name: &str, category: TagCategory) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            category,
            created_at: datetime(1, 0),
        }
    }

    fn job(id: i32, created_at: NaiveDateTime, tags: Vec<Tag>) -> Job {
        Job {
            id,
            recruiter_id: 1,
            title: format!("Job {id}"),
            description: String::new(),
            status: JobStatus::Active,
            salary_min: None,
            salary_max: None,
            location: None,
            employment_type: None,
            created_at,
            updated_at: created_at,
            tags,
        }
    }

    fn preferences(user_id: i32) -> SeekerPreferences {
        SeekerPreferences {
            id: 1,
            user_id,
            preferred_job_titles: Vec::new(),
            preferred_industries: Vec::new(),
            preferred_locations: Vec::new(),
            salary_expectation_min: None,
            salary_expectation_max: None,
            is_skipped: false,
            created_at: datetime(1, 0),
            updated_at: datetime(1, 0),
        }
    }

    #[test]
    fn missing_record_falls_back_to_recency() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences().times(1).returning(|_| Ok(None));
        repo.expect_list_active_jobs_with_tags().times(1).returning(|| {
            Ok(vec![
                job(1, datetime(1, 9), Vec::new()),
                job(2, datetime(3, 9), Vec::new()),
                job(3, datetime(2, 9), Vec::new()),
            ])
        });

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        let ids: Vec<i32> = data.jobs.items.iter().map(|entry| entry.job.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(data.jobs.items.iter().all(|entry| entry.match_score == 0));
        assert_eq!(data.total_preferred_tags, 0);
    }

    #[test]
    fn skipped_record_falls_back_to_recency() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences().times(1).returning(|user_id| {
            Ok(Some(SeekerPreferences {
                is_skipped: true,
                preferred_job_titles: vec!["React Developer".to_string()],
                ..preferences(user_id)
            }))
        });
        repo.expect_list_active_jobs_with_tags().times(1).returning(|| {
            Ok(vec![
                job(1, datetime(1, 9), vec![tag(1, "React", TagCategory::Skill)]),
                job(2, datetime(2, 9), Vec::new()),
            ])
        });

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        let ids: Vec<i32> = data.jobs.items.iter().map(|entry| entry.job.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(data.jobs.items.iter().all(|entry| entry.match_score == 0));
        assert_eq!(data.total_preferred_tags, 0);
    }

    #[test]
    fn preference_tags_rank_matching_jobs_first() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences().times(1).returning(|user_id| {
            Ok(Some(SeekerPreferences {
                preferred_job_titles: vec!["React Developer".to_string()],
                ..preferences(user_id)
            }))
        });
        repo.expect_list_active_jobs_with_tags().times(1).returning(|| {
            Ok(vec![
                job(
                    1,
                    datetime(5, 9),
                    vec![
                        tag(1, "Python", TagCategory::Skill),
                        tag(2, "Backend Developer", TagCategory::JobRole),
                    ],
                ),
                job(
                    2,
                    datetime(1, 9),
                    vec![
                        tag(3, "React", TagCategory::Skill),
                        tag(4, "JavaScript", TagCategory::Skill),
                    ],
                ),
            ])
        });

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        // The older React job outranks the newer non-matching one.
        assert_eq!(data.jobs.items[0].job.id, 2);
        assert_eq!(data.jobs.items[0].match_score, 1);
        assert_eq!(data.jobs.items[0].match_score_display, "1/1");
        assert_eq!(data.jobs.items[1].job.id, 1);
        assert_eq!(data.jobs.items[1].match_score, 0);
        assert_eq!(data.jobs.items[1].match_score_display, "0/1");
    }

    #[test]
    fn job_tag_counts_once_despite_multiple_preference_matches() {
        let reference = job(
            1,
            datetime(1, 9),
            vec![tag(1, "React Developer", TagCategory::JobRole)],
        );
        let preferred = vec!["React".to_string(), "Developer".to_string()];

        assert_eq!(match_score(&reference, &preferred), 1);
    }

    #[test]
    fn empty_preference_record_scores_zero_without_filtering() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences()
            .times(1)
            .returning(|user_id| Ok(Some(preferences(user_id))));
        repo.expect_list_active_jobs_with_tags().times(1).returning(|| {
            let mut located = job(1, datetime(2, 9), Vec::new());
            located.location = Some("Berlin".to_string());
            located.salary_min = Some(50_000);
            located.salary_max = Some(70_000);
            Ok(vec![located, job(2, datetime(1, 9), Vec::new())])
        });

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        assert_eq!(data.jobs.items.len(), 2);
        assert!(data.jobs.items.iter().all(|entry| entry.match_score == 0));
        assert_eq!(data.jobs.items[0].match_score_display, "0/1");
        assert_eq!(data.total_preferred_tags, 0);
    }

    #[test]
    fn location_filter_keeps_unlocated_jobs() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences().times(1).returning(|user_id| {
            Ok(Some(SeekerPreferences {
                preferred_locations: vec!["Berlin".to_string()],
                ..preferences(user_id)
            }))
        });
        repo.expect_list_active_jobs_with_tags().times(1).returning(|| {
            let mut berlin = job(1, datetime(3, 9), Vec::new());
            berlin.location = Some("Berlin".to_string());
            let mut munich = job(2, datetime(2, 9), Vec::new());
            munich.location = Some("Munich".to_string());
            let remote = job(3, datetime(1, 9), Vec::new());
            Ok(vec![berlin, munich, remote])
        });

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        let ids: Vec<i32> = data.jobs.items.iter().map(|entry| entry.job.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn salary_overlap_filter_treats_missing_bounds_as_compatible() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences().times(1).returning(|user_id| {
            Ok(Some(SeekerPreferences {
                salary_expectation_min: Some(60_000),
                salary_expectation_max: Some(90_000),
                ..preferences(user_id)
            }))
        });
        repo.expect_list_active_jobs_with_tags().times(1).returning(|| {
            let mut below = job(1, datetime(4, 9), Vec::new());
            below.salary_min = Some(30_000);
            below.salary_max = Some(50_000);
            let mut overlapping = job(2, datetime(3, 9), Vec::new());
            overlapping.salary_min = Some(80_000);
            overlapping.salary_max = Some(110_000);
            let mut above = job(3, datetime(2, 9), Vec::new());
            above.salary_min = Some(100_000);
            above.salary_max = Some(140_000);
            let unbounded = job(4, datetime(1, 9), Vec::new());
            Ok(vec![below, overlapping, above, unbounded])
        });

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        let ids: Vec<i32> = data.jobs.items.iter().map(|entry| entry.job.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn equal_scores_and_timestamps_order_deterministically() {
        let stamp = datetime(2, 9);
        let pool = vec![
            job(7, stamp, Vec::new()),
            job(9, stamp, Vec::new()),
            job(8, stamp, Vec::new()),
        ];

        let mut repo = MockRecommender::new();
        repo.expect_get_preferences().times(2).returning(|_| Ok(None));
        let pool_clone = pool.clone();
        repo.expect_list_active_jobs_with_tags()
            .times(2)
            .returning(move || Ok(pool_clone.clone()));

        let first = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");
        let second = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        let first_ids: Vec<i32> = first.jobs.items.iter().map(|entry| entry.job.id).collect();
        let second_ids: Vec<i32> = second.jobs.items.iter().map(|entry| entry.job.id).collect();
        assert_eq!(first_ids, vec![9, 8, 7]);
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn second_page_holds_entries_eleven_through_twenty() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences().times(1).returning(|_| Ok(None));
        repo.expect_list_active_jobs_with_tags().times(1).returning(|| {
            // 25 jobs, one per hour, newest has the highest id.
            Ok((1..=25)
                .map(|id| job(id, datetime(1, 0) + chrono::Duration::hours(i64::from(id)), Vec::new()))
                .collect())
        });

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            page: Some(2),
            per_page: Some(10),
        })
        .expect("expected success");

        let ids: Vec<i32> = data.jobs.items.iter().map(|entry| entry.job.id).collect();
        assert_eq!(ids, (6..=15).rev().collect::<Vec<i32>>());
        assert_eq!(data.jobs.page, 2);
        assert_eq!(data.jobs.pages, vec![1, 2, 3]);
    }

    #[test]
    fn empty_pool_yields_empty_page() {
        let mut repo = MockRecommender::new();

        repo.expect_get_preferences().times(1).returning(|_| Ok(None));
        repo.expect_list_active_jobs_with_tags()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let data = recommend_jobs(&repo, RecommendationQuery {
            seeker_id: 5,
            ..Default::default()
        })
        .expect("expected success");

        assert!(data.jobs.items.is_empty());
        assert!(data.jobs.pages.is_empty());
    }
}
