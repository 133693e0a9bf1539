use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, panic_recovery_layer, security_headers_middleware};
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let environment = state.environment;

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User CRUD
        .merge(users::create_users_router())
        // Add state and middleware
        .with_state(state)
        .layer(panic_recovery_layer(environment))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::api::state::UserServiceTrait;
    use crate::config::{AppConfig, Environment};
    use crate::domain::{DomainError, User, UserId, UserInput};

    /// Service whose every call panics, standing in for an unexpected fault
    struct PanickingUserService;

    #[async_trait::async_trait]
    impl UserServiceTrait for PanickingUserService {
        async fn create(&self, _input: UserInput) -> Result<User, DomainError> {
            panic!("registry exploded")
        }
        async fn list(&self) -> Result<Vec<User>, DomainError> {
            panic!("registry exploded")
        }
        async fn get(&self, _id: UserId) -> Result<User, DomainError> {
            panic!("registry exploded")
        }
        async fn update(&self, _id: UserId, _input: UserInput) -> Result<User, DomainError> {
            panic!("registry exploded")
        }
        async fn delete(&self, _id: UserId) -> Result<(), DomainError> {
            panic!("registry exploded")
        }
        async fn count(&self) -> Result<usize, DomainError> {
            panic!("registry exploded")
        }
    }

    fn panicking_app(environment: Environment) -> Router {
        create_router(AppState::new(Arc::new(PanickingUserService), environment))
    }

    async fn get_request(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_router(crate::create_app_state(&AppConfig::default()));

        let health = get_request(app.clone(), "/health").await;
        assert_eq!(health.status(), StatusCode::OK);
        assert_eq!(body_json(health).await["status"], "healthy");

        let live = get_request(app.clone(), "/live").await;
        assert_eq!(live.status(), StatusCode::OK);

        let ready = get_request(app, "/ready").await;
        assert_eq!(ready.status(), StatusCode::OK);
        let body = body_json(ready).await;
        assert_eq!(body["checks"][0]["name"], "user_registry");
        assert_eq!(body["checks"][0]["message"], "0 users");
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let app = create_router(crate::create_app_state(&AppConfig::default()));

        let response = get_request(app, "/users").await;

        let headers = response.headers();
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert!(headers.contains_key(header::CACHE_CONTROL));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_router(crate::create_app_state(&AppConfig::default()));

        let response = get_request(app, "/accounts").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_panic_maps_to_generic_server_error() {
        let response = get_request(panicking_app(Environment::Production), "/users").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "server_error");
        assert_eq!(body["error"]["message"], "An unexpected error occurred");
        assert!(body["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn test_panic_details_exposed_in_development() {
        let response = get_request(panicking_app(Environment::Development), "/users/1").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["details"][0], "registry exploded");
    }
}
