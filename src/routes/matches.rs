use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use std::sync::Arc;
use validator::Validate;

use crate::config::Settings;
use crate::core::{EducationMatcher, ExperienceMatcher, SkillMatcher, TitleCatalog};
use crate::core::similarity::FuzzySimilarity;
use crate::error::MatchError;
use crate::models::{
    EducationMatchRequest, ErrorResponse, ExperienceMatchRequest, HealthResponse, MatchReport,
    MatchRequest, ResolveTitleRequest, SkillMatchRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub education: EducationMatcher,
    pub skills: SkillMatcher,
    pub experience: ExperienceMatcher,
    pub catalog: Arc<TitleCatalog>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        let matching = &settings.matching;
        Self {
            education: EducationMatcher::new(matching.education),
            skills: SkillMatcher::new(matching.skills),
            experience: ExperienceMatcher::new(matching.experience),
            catalog: Arc::new(TitleCatalog::with_similarity(
                settings.catalog.titles.clone(),
                settings.catalog.resolve_threshold,
                FuzzySimilarity,
            )),
        }
    }
}

impl ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_all))
        .route("/match/education", web::post().to(match_education))
        .route("/match/skills", web::post().to(match_skills))
        .route("/match/experience", web::post().to(match_experience))
        .route("/titles/resolve", web::post().to(resolve_title));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Education match endpoint
///
/// POST /api/v1/match/education
///
/// Request body:
/// ```json
/// {
///   "resume": [{ "degree": "Bachelor of Science", "major": "Physics" }],
///   "job": [{ "degree": "Bachelor of Science", "required": true }]
/// }
/// ```
async fn match_education(
    state: web::Data<AppState>,
    req: web::Json<EducationMatchRequest>,
) -> Result<HttpResponse, MatchError> {
    validate_request(&*req)?;
    tracing::info!(
        "Matching education: {} requirement(s) against {} degree(s)",
        req.job.len(),
        req.resume.len()
    );

    let result = state.education.match_education(&req.resume, &req.job)?;
    Ok(HttpResponse::Ok().json(result))
}

/// Skill match endpoint
///
/// POST /api/v1/match/skills
async fn match_skills(
    state: web::Data<AppState>,
    req: web::Json<SkillMatchRequest>,
) -> Result<HttpResponse, MatchError> {
    validate_request(&*req)?;
    tracing::info!(
        "Matching skills: {} job skill(s) against {} resume skill(s)",
        req.job.len(),
        req.resume.len()
    );

    let result = state.skills.match_skills(&req.resume, &req.job)?;
    Ok(HttpResponse::Ok().json(result))
}

/// Experience match endpoint
///
/// POST /api/v1/match/experience
async fn match_experience(
    state: web::Data<AppState>,
    req: web::Json<ExperienceMatchRequest>,
) -> Result<HttpResponse, MatchError> {
    validate_request(&*req)?;
    tracing::info!(
        "Matching experience: {} requirement(s) against {} entr(ies)",
        req.job_requirements.len(),
        req.resume_experiences.len()
    );

    let result = state
        .experience
        .match_experiences(&req.job_requirements, &req.resume_experiences)?;
    Ok(HttpResponse::Ok().json(result))
}

/// Combined match endpoint, runs each facet present in the request
///
/// POST /api/v1/match
async fn match_all(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> Result<HttpResponse, MatchError> {
    validate_request(&*req)?;

    let mut report = MatchReport::default();
    if let Some(education) = &req.education {
        report.education = Some(state.education.match_education(&education.resume, &education.job)?);
    }
    if let Some(skills) = &req.skills {
        report.skills = Some(state.skills.match_skills(&skills.resume, &skills.job)?);
    }
    if let Some(experience) = &req.experience {
        report.experience = Some(
            state
                .experience
                .match_experiences(&experience.job_requirements, &experience.resume_experiences)?,
        );
    }

    tracing::info!(
        "Combined match: education={}, skills={}, experience={}",
        report.education.is_some(),
        report.skills.is_some(),
        report.experience.is_some()
    );

    Ok(HttpResponse::Ok().json(report))
}

/// Title resolution endpoint
///
/// POST /api/v1/titles/resolve
async fn resolve_title(
    state: web::Data<AppState>,
    req: web::Json<ResolveTitleRequest>,
) -> Result<HttpResponse, MatchError> {
    validate_request(&*req)?;
    let resolution = state.catalog.resolve(&req.title);
    tracing::debug!("Resolved title {:?} -> {:?}", req.title, resolution.normalized_title);
    Ok(HttpResponse::Ok().json(resolution))
}

fn validate_request<T: Validate>(req: &T) -> Result<(), MatchError> {
    req.validate().map_err(|errors| {
        tracing::warn!("Validation failed: field_errors={:?}", errors);
        MatchError::from(errors)
    })
}
