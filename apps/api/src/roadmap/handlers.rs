//! Axum route handlers for the Roadmap API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::catalog::Course;
use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::roadmap::generator::{advise, NO_COURSES_FOUND};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw request body. Fields stay loose so a missing key maps to 400, not 422.
#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub age: Option<Value>,
    pub qualification: Option<Value>,
    pub interest: Option<Value>,
    pub goal: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: String,
    pub recommended_courses: RecommendedCourses,
}

/// Either the matched courses or a placeholder sentence when nothing matched.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendedCourses {
    Courses(Vec<Course>),
    NoneFound(&'static str),
}

impl From<Vec<Course>> for RecommendedCourses {
    fn from(courses: Vec<Course>) -> Self {
        if courses.is_empty() {
            RecommendedCourses::NoneFound(NO_COURSES_FOUND)
        } else {
            RecommendedCourses::Courses(courses)
        }
    }
}

impl RoadmapRequest {
    /// Checks that all four fields are present and converts them to text.
    /// `null` counts as missing; numbers and booleans are stringified.
    pub fn into_profile(self) -> Result<UserProfile, AppError> {
        let fields = [
            ("age", &self.age),
            ("qualification", &self.qualification),
            ("interest", &self.interest),
            ("goal", &self.goal),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| matches!(value, None | Some(Value::Null)))
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(UserProfile {
            age: field_text("age", self.age)?,
            qualification: field_text("qualification", self.qualification)?,
            interest: field_text("interest", self.interest)?,
            goal: field_text("goal", self.goal)?,
        })
    }
}

fn field_text(name: &str, value: Option<Value>) -> Result<String, AppError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        _ => Err(AppError::Validation(format!(
            "Field '{name}' must be a string"
        ))),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-roadmap
///
/// Validates the profile, matches catalog courses, and asks the LLM for a roadmap.
/// A generation failure still yields 200 with the fallback roadmap text.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let profile = request.into_profile()?;

    info!("Generating roadmap for goal={:?}", profile.goal);
    let advice = advise(&state.catalog, state.generator.as_ref(), &profile).await;

    Ok(Json(RoadmapResponse {
        roadmap: advice.roadmap,
        recommended_courses: advice.courses.into(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::catalog::CourseCatalog;
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::roadmap::generator::tests::{sample_catalog, StubGenerator};
    use crate::roadmap::generator::ROADMAP_FALLBACK;
    use crate::routes::build_router;

    struct PanickingGenerator;

    #[async_trait]
    impl TextGenerator for PanickingGenerator {
        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            panic!("generator exploded");
        }
    }

    fn app(catalog: CourseCatalog, generator: Arc<dyn TextGenerator>) -> Router {
        build_router(AppState {
            catalog: Arc::new(catalog),
            generator,
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const FULL_BODY: &str =
        r#"{"age":"20","qualification":"BSc","interest":"python","goal":"backend developer"}"#;

    #[tokio::test]
    async fn test_generate_returns_roadmap_and_matched_course() {
        let stub = Arc::new(StubGenerator::replying("1. Learn Python"));
        let (status, body) = send(
            app(sample_catalog(), stub.clone()),
            post_json("/generate-roadmap", FULL_BODY),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"], "1. Learn Python");
        assert_eq!(
            body["recommended_courses"],
            json!([{"name": "Python Basics", "description": "Intro to Python", "tags": ["python"]}])
        );
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_goal_is_400_without_generation() {
        let stub = Arc::new(StubGenerator::replying("unused"));
        let (status, body) = send(
            app(sample_catalog(), stub.clone()),
            post_json(
                "/generate-roadmap",
                r#"{"age":"20","qualification":"BSc","interest":"python"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Missing required fields: goal");
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_listed_in_profile_order() {
        let stub = Arc::new(StubGenerator::replying("unused"));
        let (status, body) = send(
            app(sample_catalog(), stub.clone()),
            post_json("/generate-roadmap", r#"{"interest":"python"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Missing required fields: age, qualification, goal"
        );
    }

    #[tokio::test]
    async fn test_null_field_counts_as_missing() {
        let stub = Arc::new(StubGenerator::replying("unused"));
        let (status, _) = send(
            app(sample_catalog(), stub.clone()),
            post_json(
                "/generate-roadmap",
                r#"{"age":null,"qualification":"BSc","interest":"python","goal":"dev"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let stub = Arc::new(StubGenerator::replying("unused"));
        let (status, body) = send(
            app(sample_catalog(), stub.clone()),
            post_json("/generate-roadmap", "{not json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_matches_returns_placeholder() {
        let stub = Arc::new(StubGenerator::replying("roadmap"));
        let (status, body) = send(
            app(sample_catalog(), stub),
            post_json(
                "/generate-roadmap",
                r#"{"age":"40","qualification":"none","interest":"cooking","goal":"chef"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommended_courses"], "No relevant courses found.");
    }

    #[tokio::test]
    async fn test_generation_failure_still_returns_200_with_fallback() {
        let stub = Arc::new(StubGenerator::failing());
        let (status, body) = send(
            app(sample_catalog(), stub),
            post_json("/generate-roadmap", FULL_BODY),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"], ROADMAP_FALLBACK);
        assert!(body["recommended_courses"].is_array());
    }

    #[tokio::test]
    async fn test_numeric_age_is_accepted() {
        let stub = Arc::new(StubGenerator::replying("roadmap"));
        let (status, _) = send(
            app(sample_catalog(), stub.clone()),
            post_json(
                "/generate-roadmap",
                r#"{"age":20,"qualification":"BSc","interest":"python","goal":"dev"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let prompts = stub.prompts.lock().unwrap();
        assert!(prompts[0].1.contains("- Age: 20\n"));
    }

    #[tokio::test]
    async fn test_array_field_is_rejected() {
        let stub = Arc::new(StubGenerator::replying("unused"));
        let (status, body) = send(
            app(sample_catalog(), stub.clone()),
            post_json(
                "/generate-roadmap",
                r#"{"age":"20","qualification":"BSc","interest":["python"],"goal":"dev"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("interest"));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_versioned_route_behaves_the_same() {
        let stub = Arc::new(StubGenerator::replying("roadmap"));
        let (status, body) = send(
            app(sample_catalog(), stub),
            post_json("/api/v1/roadmap", FULL_BODY),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roadmap"], "roadmap");
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500_payload() {
        let (status, body) = send(
            app(sample_catalog(), Arc::new(PanickingGenerator)),
            post_json("/generate-roadmap", FULL_BODY),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "generator exploded");
    }

    #[tokio::test]
    async fn test_health() {
        let stub = Arc::new(StubGenerator::replying("unused"));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(sample_catalog(), stub), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "pathway");
    }
}
