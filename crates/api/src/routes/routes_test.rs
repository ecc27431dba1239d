#[cfg(test)]
mod tests {
    use crate::routes::api_router;
    use crate::state::AppState;
    use ai::testing::FakeModel;
    use ai::LanguageModel;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use common::Config;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "http://localhost".to_string(),
            simulated_latency_ms: 0,
        }
    }

    fn app_with_model(model: Option<Arc<dyn LanguageModel>>) -> Router {
        let store = processor::seed::store(Duration::ZERO);
        api_router(Arc::new(AppState::with_model(test_config(), store, model)))
    }

    fn app() -> Router {
        app_with_model(None)
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ai_enabled"], false);
    }

    #[tokio::test]
    async fn test_list_projects_filtered_by_status() {
        let (status, body) = send(app(), Method::GET, "/api/projects?status=open", None).await;
        assert_eq!(status, StatusCode::OK);
        let projects = body.as_array().unwrap();
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|p| p["status"] == "open"));
    }

    #[tokio::test]
    async fn test_missing_project_is_404() {
        let (status, body) = send(app(), Method::GET, "/api/projects/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }

    #[tokio::test]
    async fn test_save_then_fetch_profile() {
        let app = app();
        let input = json!({
            "name": "Linus",
            "email": "linus@example.com",
            "bio": "Kernel hacker",
            "skills": "C, Git",
            "avatarUrl": "https://example.com/l.png"
        });

        let (status, saved) = send(app.clone(), Method::PUT, "/api/profiles/user-9", Some(input)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["skills"], json!(["C", "Git"]));
        assert_eq!(saved["earnedBadgeIds"], json!(["profile-complete"]));
        assert_eq!(saved["points"], 50);

        let (status, fetched) = send(app, Method::GET, "/api/profiles/user-9", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Linus");
    }

    #[tokio::test]
    async fn test_patch_unknown_profile_is_404() {
        let (status, _) = send(
            app(),
            Method::PATCH,
            "/api/profiles/ghost",
            Some(json!({"bio": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_proposal() {
        let body = json!({
            "freelancerId": "freelancerA",
            "coverLetter": "I can start Monday.",
            "proposedRate": 750.0
        });
        let (status, receipt) = send(app(), Method::POST, "/api/projects/2/proposals", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(receipt["projectId"], "2");
        assert_eq!(receipt["proposedRate"], 750.0);
        assert_eq!(receipt["badgesEarned"], json!(["first-proposal"]));
    }

    #[tokio::test]
    async fn test_submit_feedback_and_read_stats() {
        let app = app();
        let body = json!({
            "projectId": "3",
            "authorId": "client-ghi",
            "recipientId": "freelancer1",
            "rating": 4,
            "comment": "Excellent brand guide",
            "authorRole": "client"
        });
        let (status, _) = send(app.clone(), Method::POST, "/api/feedback", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, summary) = send(app, Method::GET, "/api/users/freelancer1/feedback", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["stats"]["totalRatings"], 2);
        assert_eq!(summary["stats"]["averageRating"], 4.5);
        assert_eq!(summary["feedback"][0]["comment"], "Excellent brand guide");
    }

    #[tokio::test]
    async fn test_invalid_feedback_is_422() {
        let body = json!({
            "projectId": "3",
            "authorId": "client-ghi",
            "recipientId": "client-ghi",
            "rating": 5,
            "comment": "Talking to myself",
            "authorRole": "client"
        });
        let (status, body) = send(app(), Method::POST, "/api/feedback", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_catalogs() {
        let (status, badges) = send(app(), Method::GET, "/api/badges", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(badges.as_array().unwrap().len(), 14);
        assert_eq!(badges[0]["id"], "profile-complete");

        let (status, levels) = send(app(), Method::GET, "/api/levels", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(levels[0]["name"], "Newcomer");
        assert_eq!(levels[1]["name"], "Apprentice");
        assert_eq!(levels[1]["minPoints"], 100);
        assert_eq!(levels[1]["pointsToNextLevel"], 200);
        assert!(levels[4].get("pointsToNextLevel").is_none());
    }

    #[tokio::test]
    async fn test_progress() {
        let (status, body) = send(app(), Method::GET, "/api/profiles/freelancer1/progress", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["progress"]["level"], 2);
        assert_eq!(body["progress"]["pointsToNextLevel"], 25);
        assert_eq!(body["badges"].as_array().unwrap().len(), 4);
        assert_eq!(body["unearnedBadges"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_client_feedback_includes_client_authors() {
        let app = app();
        let body = json!({
            "projectId": "projB",
            "authorId": "client2",
            "recipientId": "client1",
            "rating": 2,
            "comment": "Slow to sign off",
            "authorRole": "client"
        });
        let (status, _) = send(app.clone(), Method::POST, "/api/feedback", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, users) = send(app.clone(), Method::GET, "/api/users/client1/feedback", None).await;
        let (_, clients) = send(app, Method::GET, "/api/clients/client1/feedback", None).await;
        assert_eq!(clients["stats"]["totalRatings"], 2);
        assert_eq!(clients, users);
    }

    #[tokio::test]
    async fn test_ai_disabled_is_503() {
        let body = json!({"proposal": "draft", "projectRequirements": "reqs"});
        let (status, body) = send(app(), Method::POST, "/api/ai/enhance-proposal", Some(body)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "ai_unavailable");
    }

    #[tokio::test]
    async fn test_enhance_proposal_with_model() {
        let model: Arc<dyn LanguageModel> =
            Arc::new(FakeModel::replying(r#"{"enhancedProposal": "Polished draft"}"#));
        let body = json!({"proposal": "draft", "projectRequirements": "reqs"});

        let (status, body) = send(
            app_with_model(Some(model)),
            Method::POST,
            "/api/ai/enhance-proposal",
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["enhancedProposal"], "Polished draft");
    }

    #[tokio::test]
    async fn test_model_failure_is_502() {
        let model: Arc<dyn LanguageModel> = Arc::new(FakeModel::failing());
        let (status, body) = send(
            app_with_model(Some(model)),
            Method::GET,
            "/api/profiles/mock-user-id/matches",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "upstream_error");
    }

    #[tokio::test]
    async fn test_matches_with_model() {
        let model: Arc<dyn LanguageModel> =
            Arc::new(FakeModel::replying(r#"{"matchedProjectIds": ["1"]}"#));
        let (status, body) = send(
            app_with_model(Some(model)),
            Method::GET,
            "/api/profiles/freelancer1/matches",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "1");
    }
}
