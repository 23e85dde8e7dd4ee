use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use database::store::EntityStore;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::routes::{health, session, teacher, user};

/// Shared state handed to every handler: the injected entity store.
pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// Builds the application router over any entity store implementation.
/// Malformed numeric path ids are rejected by the `Path<i64>` extractor with
/// a 400 before any service runs.
pub fn app<S: EntityStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/session",
            get(session::get_sessions::<S>).post(session::create_session::<S>),
        )
        .route(
            "/api/session/{id}",
            get(session::get_session_by_id::<S>)
                .put(session::update_session::<S>)
                .delete(session::delete_session::<S>),
        )
        .route(
            "/api/session/{id}/participate/{user_id}",
            post(session::participate::<S>).delete(session::withdraw::<S>),
        )
        .route("/api/teacher", get(teacher::get_teachers::<S>))
        .route("/api/teacher/{id}", get(teacher::get_teacher_by_id::<S>))
        .route(
            "/api/user/{id}",
            get(user::get_user_by_id::<S>).delete(user::delete_user::<S>),
        )
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use chrono::Utc;
    use database::store::{EntityStore, MemoryStore};
    use models::session::CreateSession;
    use models::user::CreateUser;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn seeded_app() -> (Router, i64, i64) {
        let store = MemoryStore::new();
        let session = store
            .insert_session(CreateSession {
                name: "Morning flow".to_string(),
                date: Utc::now().naive_utc(),
                description: "A relaxing yoga session".to_string(),
                teacher_id: None,
            })
            .await
            .unwrap();
        let user = store
            .insert_user(CreateUser {
                email: "john@test.com".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                password: "password".to_string(),
                admin: false,
            })
            .await
            .unwrap();

        (app(AppState::new(store)), session.id, user.id)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn req(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (app, _, _) = seeded_app().await;
        let response = app.oneshot(get_req("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_session_found_and_not_found() {
        let (app, session_id, _) = seeded_app().await;

        let response = app
            .clone()
            .oneshot(get_req(&format!("/api/session/{session_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Morning flow");
        assert_eq!(body["users"], json!([]));

        let response = app.oneshot(get_req("/api/session/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_id_is_a_bad_request() {
        let (app, _, _) = seeded_app().await;

        let response = app
            .clone()
            .oneshot(get_req("/api/session/invalid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(req("DELETE", "/api/user/invalid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_and_update_session() {
        let (app, session_id, _) = seeded_app().await;

        let response = app
            .clone()
            .oneshot(json_req(
                "POST",
                "/api/session",
                json!({
                    "name": "Evening pilates",
                    "date": "2026-09-01T18:00:00",
                    "description": "Pilates class",
                    "teacher_id": 1
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Evening pilates");
        assert_eq!(body["teacher_id"], 1);

        // Payload id is ignored; the path id wins.
        let response = app
            .clone()
            .oneshot(json_req(
                "PUT",
                &format!("/api/session/{session_id}"),
                json!({
                    "id": 12345,
                    "name": "Renamed",
                    "date": "2026-09-01T18:00:00",
                    "description": "Still yoga",
                    "teacher_id": null
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], session_id);
        assert_eq!(body["name"], "Renamed");

        let response = app
            .oneshot(json_req(
                "PUT",
                "/api/session/999",
                json!({
                    "name": "Ghost",
                    "date": "2026-09-01T18:00:00",
                    "description": "",
                    "teacher_id": null
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_session_checks_existence() {
        let (app, session_id, _) = seeded_app().await;

        let response = app
            .clone()
            .oneshot(req("DELETE", &format!("/api/session/{session_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(req("DELETE", &format!("/api/session/{session_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn participate_maps_errors_to_statuses() {
        let (app, session_id, user_id) = seeded_app().await;
        let participate_uri = format!("/api/session/{session_id}/participate/{user_id}");

        let response = app
            .clone()
            .oneshot(req("POST", &participate_uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Double enrollment is a bad request.
        let response = app
            .clone()
            .oneshot(req("POST", &participate_uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Unknown user and unknown session are 404s.
        let response = app
            .clone()
            .oneshot(req("POST", &format!("/api/session/{session_id}/participate/999")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(req("POST", &format!("/api/session/999/participate/{user_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Withdraw, then a second withdraw is a bad request.
        let response = app
            .clone()
            .oneshot(req("DELETE", &participate_uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(req("DELETE", &participate_uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn user_response_hides_the_password() {
        let (app, _, user_id) = seeded_app().await;

        let response = app
            .oneshot(get_req(&format!("/api/user/{user_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["email"], "john@test.com");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn teacher_listing_and_lookup() {
        let store = MemoryStore::new();
        let teacher = store
            .insert_teacher(models::teacher::CreateTeacher {
                first_name: "Margot".to_string(),
                last_name: "Delahaye".to_string(),
            })
            .await
            .unwrap();
        let app = app(AppState::new(store));

        let response = app.clone().oneshot(get_req("/api/teacher")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body[0]["first_name"], "Margot");

        let response = app
            .clone()
            .oneshot(get_req(&format!("/api/teacher/{}", teacher.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_req("/api/teacher/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
