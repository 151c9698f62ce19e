//! Keyword-driven tag extraction over job descriptions.
//!
//! This is a heuristic substring matcher, not NLP: both dictionaries are
//! scanned in declared order so that repeated runs over the same text always
//! produce the same tag list, which downstream match scoring depends on.

use crate::cache::TagCache;
use crate::domain::tag::{NewTag, Tag, TagCategory};
use crate::repository::{TagReader, TagWriter};
use crate::services::ServiceResult;

/// Upper bound on tags derived from a single description.
pub const MAX_TAGS_PER_JOB: usize = 3;

/// Length of the normalized-text prefix used as the cache key.
const CACHE_KEY_PREFIX_LEN: usize = 50;

/// Technology keywords mapped to canonical skill tags, in scan order.
const SKILL_KEYWORDS: &[(&str, &str)] = &[
    ("react", "React"),
    ("node", "Node.js"),
    ("javascript", "JavaScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("aws", "AWS"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
];

/// Role phrases mapped to canonical role tags. Ordered from most specific to
/// most generic; only the first match is taken so that a generic fallback
/// ("engineer") never rides along with a specific phrase ("full stack").
const ROLE_KEYWORDS: &[(&str, &str)] = &[
    ("full stack", "Full Stack Developer"),
    ("frontend", "Frontend Developer"),
    ("backend", "Backend Developer"),
    ("devops", "DevOps Engineer"),
    ("data scientist", "Data Scientist"),
    ("developer", "Software Developer"),
    ("engineer", "Software Engineer"),
];

/// Derive up to [`MAX_TAGS_PER_JOB`] canonical tag names from free text.
///
/// Skills are collected first in dictionary order; a single role tag fills a
/// remaining slot. Empty or whitespace-only input yields an empty list.
pub fn extract_tag_names(description: &str) -> Vec<String> {
    let text = description.trim().to_lowercase();
    if text.is_empty() {
        return Vec::new();
    }

    let mut names: Vec<String> = Vec::new();

    for (keyword, tag) in SKILL_KEYWORDS {
        if names.len() >= MAX_TAGS_PER_JOB {
            break;
        }
        if text.contains(keyword) {
            names.push((*tag).to_string());
        }
    }

    if names.len() < MAX_TAGS_PER_JOB {
        for (keyword, tag) in ROLE_KEYWORDS {
            if text.contains(keyword) && !names.iter().any(|name| name == tag) {
                names.push((*tag).to_string());
                break;
            }
        }
    }

    names.truncate(MAX_TAGS_PER_JOB);
    names
}

/// Category a canonical tag name belongs to, derived from the dictionary
/// that produced it.
pub fn category_for(tag_name: &str) -> TagCategory {
    if SKILL_KEYWORDS.iter().any(|(_, tag)| *tag == tag_name) {
        TagCategory::Skill
    } else {
        TagCategory::JobRole
    }
}

/// Turn a job description into resolved catalog tags.
///
/// Consults the cache before extracting, stores the (possibly cached) name
/// list back under the description key, then resolves every name to a catalog
/// row, inserting missing ones. The returned tags preserve extraction order;
/// a catalog failure propagates instead of yielding a partial list.
pub fn resolve_description_tags<R, C>(
    repo: &R,
    cache: &C,
    description: &str,
) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + TagWriter + ?Sized,
    C: TagCache + ?Sized,
{
    let normalized = description.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(Vec::new());
    }

    let key = cache_key(&normalized);
    let names = match cache.get(&key) {
        Some(cached) => cached,
        None => extract_tag_names(description),
    };
    cache.set(&key, &names, cache.default_ttl());

    let mut tags = Vec::with_capacity(names.len());
    for name in &names {
        let tag = match repo.get_tag_by_name(name)? {
            Some(existing) => existing,
            None => repo.ensure_tag(&NewTag::new(name.clone(), category_for(name)))?,
        };
        tags.push(tag);
    }

    log::debug!("resolved {} tag(s) for description key {key}", tags.len());

    Ok(tags)
}

fn cache_key(normalized: &str) -> String {
    let prefix: String = normalized.chars().take(CACHE_KEY_PREFIX_LEN).collect();
    format!("tags:{prefix}")
}
