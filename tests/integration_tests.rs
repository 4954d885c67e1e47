// Integration tests for Resume Match

use actix_web::{test as actix_test, web, App};
use resume_match::config::Settings;
use resume_match::core::{EducationMatcher, ExperienceMatcher, SkillMatcher, TitleEntry};
use resume_match::models::{
    DegreeHeld, DegreeRequirement, EducationMatchResult, ExperienceComparison, ExperienceHeld,
    ExperienceRequirement, SeniorityLevel, SkillMatchResult, SkillRecord, TitleResolution,
};
use resume_match::routes::{self, handle_json_payload_error, AppState};
use serde_json::{json, Value};

fn create_skill(name: &str) -> SkillRecord {
    SkillRecord {
        normalized_name: name.to_lowercase(),
        original_name: name.to_string(),
        category: "technical".to_string(),
        aliases: vec![],
        tags: vec![],
        related_skills: vec![],
    }
}

fn create_requirement(title: &str, years: u32, skills: &[&str], level: Option<SeniorityLevel>) -> ExperienceRequirement {
    ExperienceRequirement {
        title: title.to_string(),
        normalized_title: None,
        min_years: years,
        required: true,
        preferred: false,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        level,
    }
}

fn create_experience(title: &str, years: f64, skills: &[&str], level: Option<SeniorityLevel>) -> ExperienceHeld {
    ExperienceHeld {
        job_title: title.to_string(),
        normalized_title: None,
        duration_years: years,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        level,
    }
}

fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.catalog.titles = vec![TitleEntry {
        title: "Senior Data Engineer".to_string(),
        aliases: vec!["Senior ETL Engineer".to_string()],
        field: Some("data".to_string()),
    }];
    settings
}

#[test]
fn test_integration_end_to_end_matching() {
    let education = EducationMatcher::new(Default::default());
    let skills = SkillMatcher::new(Default::default());
    let experience = ExperienceMatcher::new(Default::default());

    let job_degrees = vec![DegreeRequirement {
        degree: "Bachelor of Science".to_string(),
        major: Some("Computer Science".to_string()),
        required: true,
        preferred: false,
        degree_level: None,
    }];
    let resume_degrees = vec![DegreeHeld {
        degree: "Bachelor of Science".to_string(),
        major: Some("Computer Science".to_string()),
        institution: Some("Tech Institute".to_string()),
        start_year: Some(2014),
        end_year: Some(2018),
        gpa: None,
        honors: Some("cum laude".to_string()),
    }];
    let edu = education.match_education(&resume_degrees, &job_degrees).unwrap();
    assert_eq!(edu.education_match_percentage, 100.0);
    assert_eq!(edu.education_matches[0].reason, "degree and major match");

    let job_skills = vec![create_skill("Python"), create_skill("Docker"), create_skill("Terraform"), create_skill("SQL")];
    let resume_skills = vec![create_skill("SQL"), create_skill("Python"), create_skill("Docker")];
    let sk = skills.match_skills(&resume_skills, &job_skills).unwrap();
    assert_eq!(sk.matched_skills.len(), job_skills.len());
    assert_eq!(sk.match_percentage, 75.0);

    let reqs = vec![
        create_requirement("Data Engineer", 3, &["python", "sql"], Some(SeniorityLevel::Senior)),
        create_requirement("Team Lead", 2, &[], Some(SeniorityLevel::Lead)),
    ];
    let history = vec![
        create_experience("Junior Analyst", 1.0, &["sql"], Some(SeniorityLevel::Junior)),
        create_experience("Senior Data Engineer", 4.0, &["python", "sql", "spark"], Some(SeniorityLevel::Senior)),
    ];
    let exp = experience.match_experiences(&reqs, &history).unwrap();
    assert_eq!(exp.len(), 2);
    assert_eq!(exp[0].resume_title, "Senior Data Engineer");
    assert!(exp[0].years_match);
    assert_eq!(exp[0].skills_match, vec!["python", "sql"]);
    assert!(exp[0].missing_skills.is_empty());
}

#[test]
fn test_integration_repeated_calls_identical() {
    let matcher = SkillMatcher::new(Default::default());
    let job = vec![create_skill("JavaScript"), create_skill("TypeScript"), create_skill("React")];
    let resume = vec![create_skill("Javascript"), create_skill("React Native")];

    let first = matcher.match_skills(&resume, &job).unwrap();
    let second = matcher.match_skills(&resume, &job).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_integration_matchers_shared_across_threads() {
    let matcher = std::sync::Arc::new(ExperienceMatcher::new(Default::default()));
    let reqs = vec![create_requirement("Backend Engineer", 2, &["go"], None)];
    let history = vec![create_experience("Backend Engineer", 3.0, &["go"], None)];

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = matcher.clone();
            let reqs = reqs.clone();
            let history = history.clone();
            std::thread::spawn(move || matcher.match_experiences(&reqs, &history).unwrap())
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert!((result[0].overall_match_score - 1.0).abs() < 1e-9);
    }
}

macro_rules! test_app {
    () => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::from_settings(&test_settings())))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test_app!();
    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_education_endpoint() {
    let app = test_app!();
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/match/education")
        .set_json(json!({
            "resume": [{ "degree": "Master of Business Administration" }],
            "job": [
                { "degree": "Master of Business Administration", "required": true },
                { "degree": "Doctor of Philosophy", "required": false, "preferred": true }
            ]
        }))
        .to_request();

    let result: EducationMatchResult = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(result.education_match_percentage, 100.0);
    assert_eq!(result.education_matches.len(), 2);
    assert_eq!(result.education_matches[1].reason, "no match");
}

#[actix_web::test]
async fn test_skills_endpoint() {
    let app = test_app!();
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/match/skills")
        .set_json(json!({
            "resume": [{ "normalized_name": "python", "original_name": "Python", "category": "language" }],
            "job": [
                { "normalized_name": "python", "original_name": "Python", "category": "language" },
                { "normalized_name": "kubernetes", "original_name": "Kubernetes", "category": "devops" }
            ]
        }))
        .to_request();

    let result: SkillMatchResult = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(result.match_percentage, 50.0);
    assert_eq!(result.matched_skills[1].category, "devops");
}

#[actix_web::test]
async fn test_experience_endpoint() {
    let app = test_app!();
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/match/experience")
        .set_json(json!({
            "job_requirements": [
                { "title": "Senior Backend Engineer", "min_years": 5, "skills": ["rust"], "level": "senior" }
            ],
            "resume_experiences": [
                { "job_title": "Backend Engineer", "duration_years": 6.5, "skills": ["Rust", "Go"], "level": "lead" }
            ]
        }))
        .to_request();

    let result: Vec<ExperienceComparison> = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(result.len(), 1);
    assert!(result[0].years_match);
    assert!(result[0].level_match);
    assert_eq!(result[0].skills_match, vec!["rust"]);
}

#[actix_web::test]
async fn test_combined_endpoint_omits_missing_facets() {
    let app = test_app!();
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({
            "skills": { "resume": [], "job": [] }
        }))
        .to_request();

    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["skills"]["match_percentage"], 0.0);
    assert!(body.get("education").is_none());
    assert!(body.get("experience").is_none());
}

#[actix_web::test]
async fn test_resolve_title_endpoint() {
    let app = test_app!();
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/titles/resolve")
        .set_json(json!({ "title": "Sr Data Engineer" }))
        .to_request();

    let resolution: TitleResolution = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(resolution.normalized_title.as_deref(), Some("Senior Data Engineer"));
    assert_eq!(resolution.field.as_deref(), Some("data"));
    assert_eq!(resolution.level, Some(SeniorityLevel::Senior));
}

#[actix_web::test]
async fn test_validation_error_returns_400() {
    let app = test_app!();
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/match/education")
        .set_json(json!({ "resume": [], "job": [{ "degree": "" }] }))
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(body["status_code"], 400);
}

#[actix_web::test]
async fn test_malformed_json_returns_400() {
    let app = test_app!();
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/match/skills")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();

    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}
