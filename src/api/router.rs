use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::metrics;
use super::state::AppState;
use super::team;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/team", post(team::create_team))
        .route("/team/login", post(team::login))
        .route("/team/{team_uri}", get(team::get_team))
        .route("/team/{team_uri}/csv", get(team::download_csv))
        .route("/metrics/team/count", get(metrics::team_count))
        .route("/metrics/feedback/count", get(metrics::feedback_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use base64::{engine::general_purpose::STANDARD, Engine};
    use tower::ServiceExt;

    use crate::config::AdminConfig;
    use crate::domain::board::{Feedback, FeedbackRepository};
    use crate::infrastructure::board::{
        InMemoryActionItemRepository, InMemoryFeedbackRepository, InMemoryThoughtRepository,
    };
    use crate::infrastructure::column::{ColumnInitializer, InMemoryColumnTitleRepository};
    use crate::infrastructure::password::Argon2Hasher;
    use crate::infrastructure::team::{InMemoryTeamRepository, TeamService};

    fn test_state() -> (AppState, Arc<InMemoryFeedbackRepository>) {
        let teams = Arc::new(InMemoryTeamRepository::new());
        let thoughts = Arc::new(InMemoryThoughtRepository::new());
        let action_items = Arc::new(InMemoryActionItemRepository::new());
        let columns = Arc::new(InMemoryColumnTitleRepository::new());
        let feedback = Arc::new(InMemoryFeedbackRepository::new());

        let team_service = Arc::new(TeamService::new(
            teams,
            thoughts,
            action_items,
            columns.clone(),
            ColumnInitializer::new(columns),
            Arc::new(Argon2Hasher::new()),
        ));

        let state = AppState::new(
            team_service,
            feedback.clone(),
            AdminConfig {
                username: "admin".to_string(),
                password: "admin-password".to_string(),
            },
        );

        (state, feedback)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn basic_auth_request(uri: &str, username: &str, password: &str) -> Request<Body> {
        let token = STANDARD.encode(format!("{}:{}", username, password));
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Basic {}", token))
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = test_state();
        let app = create_router(state);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_team_and_fetch() {
        let (state, _) = test_state();
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/team",
                r#"{"name": "My Team", "password": "pw"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_string(response).await;
        assert!(body.contains("\"uri\":\"my-team\""));
        assert!(!body.contains("pw"));

        let response = app
            .oneshot(Request::get("/api/team/my-team").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_duplicate_team_conflicts() {
        let (state, _) = test_state();
        let app = create_router(state);

        let request = r#"{"name": "My Team", "password": "pw"}"#;
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/team", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request("POST", "/api/team", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_login_flow() {
        let (state, _) = test_state();
        let app = create_router(state);

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/team",
                r#"{"name": "My Team", "password": "pw"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/team/login",
                r#"{"name": "My Team", "password": "pw"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/team/login",
                r#"{"name": "My Team", "password": "nope"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Missing password field deserializes to None and is rejected
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/team/login",
                r#"{"name": "My Team"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/team/login",
                r#"{"name": "Nobody", "password": "pw"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_team_count_requires_admin() {
        let (state, _) = test_state();
        let app = create_router(state);

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/team",
                r#"{"name": "My Team", "password": "pw"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(basic_auth_request(
                "/api/metrics/team/count",
                "admin",
                "admin-password",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "1");

        let response = app
            .oneshot(basic_auth_request(
                "/api/metrics/team/count",
                "not-admin",
                "not-admin-password",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_feedback_count() {
        let (state, feedback) = test_state();
        let app = create_router(state);

        feedback
            .save(Feedback::new(None, 4, "nice tool"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(basic_auth_request(
                "/api/metrics/feedback/count",
                "admin",
                "admin-password",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "1");

        let response = app
            .oneshot(basic_auth_request(
                "/api/metrics/feedback/count",
                "not-admin",
                "not-admin-password",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_csv_export() {
        let (state, _) = test_state();
        let app = create_router(state);

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/team",
                r#"{"name": "My Team", "password": "pw"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/team/my-team/csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv"
        );
        let body = body_string(response).await;
        assert!(body.starts_with("Column,Message,Likes,Completed,Assigned To"));

        let response = app
            .oneshot(
                Request::get("/api/team/unknown/csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
