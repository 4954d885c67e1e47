use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, trace};
use validator::Validate;

use crate::core::education::round2;
use crate::core::similarity::{FuzzySimilarity, Similarity, Strategy};
use crate::error::MatchError;
use crate::models::{SkillMatch, SkillMatchResult, SkillRecord};

pub const REASON_EXACT: &str = "exact match";
pub const REASON_FUZZY: &str = "fuzzy match";
pub const REASON_MISSING: &str = "missing";

/// Threshold for the skill matcher
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SkillConfig {
    #[serde(default = "default_skill_threshold")]
    pub threshold: f64,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self { threshold: default_skill_threshold() }
    }
}

fn default_skill_threshold() -> f64 { 85.0 }

/// Aligns job skills with resume skills by normalized name
#[derive(Debug, Clone)]
pub struct SkillMatcher<S = FuzzySimilarity> {
    config: SkillConfig,
    similarity: S,
}

impl SkillMatcher<FuzzySimilarity> {
    pub fn new(config: SkillConfig) -> Self {
        Self::with_similarity(config, FuzzySimilarity)
    }
}

impl Default for SkillMatcher<FuzzySimilarity> {
    fn default() -> Self {
        Self::new(SkillConfig::default())
    }
}

impl<S: Similarity> SkillMatcher<S> {
    pub fn with_similarity(config: SkillConfig, similarity: S) -> Self {
        Self { config, similarity }
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// Match every distinct job skill against the distinct resume skills.
    ///
    /// One record per distinct job skill. The percentage counts matches
    /// against the full job list, duplicates included, and is 0 when the job
    /// lists no skills.
    pub fn match_skills(
        &self,
        resume: &[SkillRecord],
        job: &[SkillRecord],
    ) -> Result<SkillMatchResult, MatchError> {
        for skill in resume.iter().chain(job) {
            skill.validate()?;
        }

        let resume_set = dedup_by_name(resume);
        let job_set = dedup_by_name(job);

        let mut matched = 0usize;
        let mut records = Vec::with_capacity(job_set.len());

        for job_skill in &job_set {
            let mut best: Option<&SkillRecord> = None;
            let mut best_score = 0.0;

            for resume_skill in &resume_set {
                let score = self.similarity.score(
                    &job_skill.normalized_name,
                    &resume_skill.normalized_name,
                    Strategy::TokenSort,
                );
                trace!(
                    job_skill = %job_skill.normalized_name,
                    resume_skill = %resume_skill.normalized_name,
                    score,
                    "skill candidate"
                );
                if score > best_score {
                    best_score = score;
                    best = Some(resume_skill);
                }
            }

            match best {
                Some(resume_skill) if best_score >= self.config.threshold => {
                    matched += 1;
                    let reason = if best_score >= 100.0 { REASON_EXACT } else { REASON_FUZZY };
                    records.push(SkillMatch {
                        job_skill: job_skill.original_name.clone(),
                        resume_skill: Some(resume_skill.original_name.clone()),
                        category: job_skill.category.clone(),
                        score: best_score,
                        reason: reason.to_string(),
                    });
                }
                _ => records.push(SkillMatch {
                    job_skill: job_skill.original_name.clone(),
                    resume_skill: None,
                    category: job_skill.category.clone(),
                    score: 0.0,
                    reason: REASON_MISSING.to_string(),
                }),
            }
        }

        let percentage = if job.is_empty() {
            0.0
        } else {
            round2(matched as f64 / job.len() as f64 * 100.0)
        };

        debug!(
            job_skills = job_set.len(),
            resume_skills = resume_set.len(),
            matched,
            percentage,
            "skill match complete"
        );

        Ok(SkillMatchResult {
            match_percentage: percentage,
            matched_skills: records,
        })
    }
}

/// Collapse records sharing a normalized name. The last record wins but keeps
/// the position of the first occurrence.
fn dedup_by_name(skills: &[SkillRecord]) -> Vec<&SkillRecord> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(skills.len());
    let mut unique: Vec<&SkillRecord> = Vec::with_capacity(skills.len());

    for skill in skills {
        match positions.get(skill.normalized_name.as_str()) {
            Some(&idx) => unique[idx] = skill,
            None => {
                positions.insert(skill.normalized_name.as_str(), unique.len());
                unique.push(skill);
            }
        }
    }
    unique
}
