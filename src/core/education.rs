use serde::Deserialize;
use tracing::{debug, trace};
use validator::Validate;

use crate::core::similarity::{FuzzySimilarity, Similarity, Strategy};
use crate::error::MatchError;
use crate::models::{DegreeHeld, DegreeRequirement, EducationMatch, EducationMatchResult};

pub const REASON_DEGREE_AND_MAJOR: &str = "degree and major match";
pub const REASON_DEGREE_ONLY: &str = "degree match only";
pub const REASON_NO_MATCH: &str = "no match";

/// Thresholds for the education matcher
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EducationConfig {
    #[serde(default = "default_degree_threshold")]
    pub degree_threshold: f64,
    /// Accepted and reported, not applied to major scoring
    #[serde(default = "default_major_threshold")]
    pub major_threshold: f64,
}

impl Default for EducationConfig {
    fn default() -> Self {
        Self {
            degree_threshold: default_degree_threshold(),
            major_threshold: default_major_threshold(),
        }
    }
}

fn default_degree_threshold() -> f64 { 90.0 }
fn default_major_threshold() -> f64 { 80.0 }

/// Aligns job degree requirements with the degrees listed on a resume
#[derive(Debug, Clone)]
pub struct EducationMatcher<S = FuzzySimilarity> {
    config: EducationConfig,
    similarity: S,
}

impl EducationMatcher<FuzzySimilarity> {
    pub fn new(config: EducationConfig) -> Self {
        Self::with_similarity(config, FuzzySimilarity)
    }
}

impl Default for EducationMatcher<FuzzySimilarity> {
    fn default() -> Self {
        Self::new(EducationConfig::default())
    }
}

impl<S: Similarity> EducationMatcher<S> {
    pub fn with_similarity(config: EducationConfig, similarity: S) -> Self {
        Self { config, similarity }
    }

    pub fn config(&self) -> &EducationConfig {
        &self.config
    }

    /// Match every job requirement against the resume degrees.
    ///
    /// Produces exactly one record per job requirement, in input order. The
    /// percentage covers required items only and is 100 when none are required.
    pub fn match_education(
        &self,
        resume: &[DegreeHeld],
        job: &[DegreeRequirement],
    ) -> Result<EducationMatchResult, MatchError> {
        for item in resume {
            item.validate()?;
        }
        for item in job {
            item.validate()?;
        }

        let threshold = self.config.degree_threshold;
        let mut matched_required = 0usize;
        let mut records = Vec::with_capacity(job.len());

        for job_item in job {
            let job_degree = job_item.degree.to_lowercase();
            let job_major = non_empty(&job_item.major).map(str::to_lowercase);

            let mut best: Option<(&DegreeHeld, f64, f64)> = None;
            let mut best_score = 0.0;

            for res_item in resume {
                let degree_score = self.similarity.score(
                    &job_degree,
                    &res_item.degree.to_lowercase(),
                    Strategy::TokenSort,
                );
                if degree_score < threshold {
                    continue;
                }

                let major_score = match (&job_major, non_empty(&res_item.major)) {
                    (Some(job_major), Some(res_major)) => self.similarity.score(
                        job_major,
                        &res_major.to_lowercase(),
                        Strategy::TokenSort,
                    ),
                    _ => 0.0,
                };

                let combined = if major_score > 0.0 {
                    ((degree_score + major_score) / 2.0).floor()
                } else {
                    degree_score
                };

                trace!(
                    job_degree = %job_item.degree,
                    resume_degree = %res_item.degree,
                    degree_score,
                    major_score,
                    combined,
                    "education candidate"
                );

                if combined > best_score {
                    best_score = combined;
                    best = Some((res_item, combined, major_score));
                }
            }

            match best {
                Some((res_item, score, major_score)) if score >= threshold => {
                    if job_item.required {
                        matched_required += 1;
                    }
                    let reason = if major_score > 0.0 {
                        REASON_DEGREE_AND_MAJOR
                    } else {
                        REASON_DEGREE_ONLY
                    };
                    records.push(EducationMatch {
                        resume_degree: Some(res_item.degree.clone()),
                        resume_major: res_item.major.clone(),
                        job_degree: job_item.degree.clone(),
                        job_major: job_item.major.clone(),
                        required: job_item.required,
                        preferred: job_item.preferred,
                        degree_level: job_item.level(),
                        score,
                        reason: reason.to_string(),
                    });
                }
                _ => records.push(no_match(job_item)),
            }
        }

        let total_required = job.iter().filter(|j| j.required).count();
        let percentage = if total_required == 0 {
            100.0
        } else {
            round2(matched_required as f64 / total_required as f64 * 100.0)
        };

        debug!(
            job_items = job.len(),
            resume_items = resume.len(),
            matched_required,
            total_required,
            percentage,
            "education match complete"
        );

        Ok(EducationMatchResult {
            education_match_percentage: percentage,
            education_matches: records,
        })
    }
}

fn no_match(job_item: &DegreeRequirement) -> EducationMatch {
    EducationMatch {
        resume_degree: None,
        resume_major: None,
        job_degree: job_item.degree.clone(),
        job_major: job_item.major.clone(),
        required: job_item.required,
        preferred: job_item.preferred,
        degree_level: job_item.level(),
        score: 0.0,
        reason: REASON_NO_MATCH.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Round to two decimal places
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
