use std::collections::BTreeSet;

use serde::Deserialize;
use tracing::{debug, trace};
use validator::Validate;

use crate::core::levels::level_satisfies;
use crate::core::similarity::{FuzzySimilarity, Similarity, Strategy};
use crate::error::MatchError;
use crate::models::{ExperienceComparison, ExperienceHeld, ExperienceRequirement};

/// Per-strategy weights applied to normalized title similarity
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TitleWeights {
    #[serde(default = "default_token_sort_weight")]
    pub token_sort: f64,
    #[serde(default = "default_token_set_weight")]
    pub token_set: f64,
    #[serde(default = "default_partial_weight")]
    pub partial: f64,
}

impl Default for TitleWeights {
    fn default() -> Self {
        Self {
            token_sort: default_token_sort_weight(),
            token_set: default_token_set_weight(),
            partial: default_partial_weight(),
        }
    }
}

fn default_token_sort_weight() -> f64 { 0.7 }
fn default_token_set_weight() -> f64 { 0.8 }
fn default_partial_weight() -> f64 { 0.9 }

/// Weights of the four factors in the overall experience score
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FactorWeights {
    #[serde(default = "default_title_weight")]
    pub title: f64,
    #[serde(default = "default_years_weight")]
    pub years: f64,
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_level_weight")]
    pub level: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            years: default_years_weight(),
            skills: default_skills_weight(),
            level: default_level_weight(),
        }
    }
}

fn default_title_weight() -> f64 { 0.4 }
fn default_years_weight() -> f64 { 0.3 }
fn default_skills_weight() -> f64 { 0.2 }
fn default_level_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ExperienceConfig {
    #[serde(default)]
    pub title_weights: TitleWeights,
    #[serde(default)]
    pub factor_weights: FactorWeights,
}

/// Compares job experience requirements against resume experience entries
///
/// # Scoring
/// overall = (
///     title_score * 0.4 +     # best weighted title similarity
///     years_match * 0.3 +     # resume duration covers min years
///     skills_fraction * 0.2 + # share of required skills present
///     level_match * 0.1       # seniority at or above requirement
/// )
#[derive(Debug, Clone)]
pub struct ExperienceMatcher<S = FuzzySimilarity> {
    config: ExperienceConfig,
    similarity: S,
}

impl ExperienceMatcher<FuzzySimilarity> {
    pub fn new(config: ExperienceConfig) -> Self {
        Self::with_similarity(config, FuzzySimilarity)
    }
}

impl Default for ExperienceMatcher<FuzzySimilarity> {
    fn default() -> Self {
        Self::new(ExperienceConfig::default())
    }
}

impl<S: Similarity> ExperienceMatcher<S> {
    pub fn with_similarity(config: ExperienceConfig, similarity: S) -> Self {
        Self { config, similarity }
    }

    pub fn config(&self) -> &ExperienceConfig {
        &self.config
    }

    /// Pick the best resume experience for each job requirement.
    ///
    /// Requirements for which no experience scores above zero produce no
    /// record, so the output may be shorter than `job_requirements`.
    pub fn match_experiences(
        &self,
        job_requirements: &[ExperienceRequirement],
        resume_experiences: &[ExperienceHeld],
    ) -> Result<Vec<ExperienceComparison>, MatchError> {
        for req in job_requirements {
            req.validate()?;
        }
        for exp in resume_experiences {
            exp.validate()?;
            if !exp.duration_years.is_finite() {
                return Err(MatchError::InvalidInput(format!(
                    "duration_years for {:?} must be finite",
                    exp.job_title
                )));
            }
        }

        let mut comparisons = Vec::with_capacity(job_requirements.len());

        for job_req in job_requirements {
            let mut best: Option<ExperienceComparison> = None;
            let mut best_score = 0.0;

            for resume_exp in resume_experiences {
                let comparison = self.compare(job_req, resume_exp);
                trace!(
                    job_title = %job_req.title,
                    resume_title = %resume_exp.job_title,
                    overall = comparison.overall_match_score,
                    "experience candidate"
                );
                if comparison.overall_match_score > best_score {
                    best_score = comparison.overall_match_score;
                    best = Some(comparison);
                }
            }

            if let Some(comparison) = best {
                comparisons.push(comparison);
            }
        }

        debug!(
            job_requirements = job_requirements.len(),
            resume_experiences = resume_experiences.len(),
            matched = comparisons.len(),
            "experience match complete"
        );

        Ok(comparisons)
    }

    /// Score one resume experience against one job requirement
    pub fn compare(
        &self,
        job_req: &ExperienceRequirement,
        resume_exp: &ExperienceHeld,
    ) -> ExperienceComparison {
        let title_score = self.title_score(&job_req.title, &resume_exp.job_title);
        let years_match = resume_exp.duration_years >= f64::from(job_req.min_years);
        let (matching, missing) = skills_overlap(&job_req.skills, &resume_exp.skills);
        let level_match = level_satisfies(job_req.level, resume_exp.level);

        let skills_fraction = matching.len() as f64 / job_req.skills.len().max(1) as f64;
        let weights = &self.config.factor_weights;
        let overall = title_score * weights.title
            + indicator(years_match) * weights.years
            + skills_fraction * weights.skills
            + indicator(level_match) * weights.level;

        ExperienceComparison {
            job_title: job_req.title.clone(),
            resume_title: resume_exp.job_title.clone(),
            job_years: job_req.min_years,
            resume_years: resume_exp.duration_years,
            title_match_score: title_score,
            years_match,
            skills_match: matching,
            missing_skills: missing,
            level_match,
            overall_match_score: overall,
        }
    }

    /// Title similarity in [0, 1]; case-insensitive equality short-circuits to 1
    pub fn title_score(&self, job_title: &str, resume_title: &str) -> f64 {
        let job_title = job_title.to_lowercase();
        let resume_title = resume_title.to_lowercase();
        if job_title == resume_title {
            return 1.0;
        }

        let weights = &self.config.title_weights;
        [
            (Strategy::TokenSort, weights.token_sort),
            (Strategy::TokenSet, weights.token_set),
            (Strategy::Partial, weights.partial),
        ]
        .into_iter()
        .map(|(strategy, weight)| {
            self.similarity.score(&job_title, &resume_title, strategy) / 100.0 * weight
        })
        .fold(0.0, f64::max)
    }
}

/// Case-insensitive (matching, missing) split of the required skills, sorted
fn skills_overlap(
    required: &BTreeSet<String>,
    held: &BTreeSet<String>,
) -> (Vec<String>, Vec<String>) {
    let required: BTreeSet<String> = required.iter().map(|s| s.to_lowercase()).collect();
    let held: BTreeSet<String> = held.iter().map(|s| s.to_lowercase()).collect();

    let matching = required.intersection(&held).cloned().collect();
    let missing = required.difference(&held).cloned().collect();
    (matching, missing)
}

#[inline]
fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}
