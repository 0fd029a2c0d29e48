//! HTTP REST API routes

mod error;
mod rule_routes;
mod stat_block_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Stat block routes
        .route(
            "/api/stat-blocks/validate",
            post(stat_block_routes::validate_stat_block),
        )
        .route("/api/stat-blocks/fix", post(stat_block_routes::fix_stat_block))
        .route(
            "/api/stat-blocks/scale",
            post(stat_block_routes::scale_stat_block),
        )
        .route(
            "/api/stat-blocks/audit",
            post(stat_block_routes::audit_stat_block),
        )
        // Rule table routes
        .route(
            "/api/rules/challenge-ratings",
            get(rule_routes::list_challenge_ratings),
        )
        .route(
            "/api/rules/challenge-ratings/{rating}",
            get(rule_routes::get_challenge_rating),
        )
        .route(
            "/api/rules/creature-types",
            get(rule_routes::list_creature_types),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;

    fn app() -> Router {
        create_routes().with_state(Arc::new(AppState::new(AppConfig::default())))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn goblin() -> Value {
        json!({
            "name": "Goblin Thug",
            "cr": "1/2",
            "xp": 300,
            "type": "Humanoid",
            "racial_hd": 2,
            "bab": 3
        })
    }

    #[tokio::test]
    async fn test_validate_returns_report() {
        let (status, body) = send(post_json("/api/stat-blocks/validate", goblin())).await;
        assert_eq!(status, StatusCode::OK);

        let report: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(report["basics"]["status"], "FAIL");
        assert_eq!(report["overall"]["valid"], false);
        assert_eq!(report["economy"]["messages"][0]["severity"], "info");
    }

    #[tokio::test]
    async fn test_fix_uses_requested_mode() {
        let (status, body) = send(post_json(
            "/api/stat-blocks/fix",
            json!({ "creature": goblin(), "mode": "fix_math" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);

        let outcome: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(outcome["creature"]["bab"], 1);
        assert!(outcome["changes"].as_array().is_some_and(|c| !c.is_empty()));
    }

    #[tokio::test]
    async fn test_fix_rejects_unknown_mode() {
        let (status, body) = send(post_json(
            "/api/stat-blocks/fix",
            json!({ "creature": goblin(), "mode": "rewrite" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().contains("Unknown fix mode"));
    }

    #[tokio::test]
    async fn test_scale_and_audit() {
        let (status, body) = send(post_json(
            "/api/stat-blocks/scale",
            json!({ "creature": goblin(), "target_xp": 800 }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let scaled: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(scaled["rating"], "3");
        assert_eq!(scaled["creature"]["xp"], 800);

        let (status, body) = send(post_json(
            "/api/stat-blocks/audit",
            json!({ "creature": goblin(), "target_rating": "3" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let audit: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(audit["creature"]["cr"], "3");
        assert!(audit["report"]["overall"].is_object());
    }

    #[tokio::test]
    async fn test_challenge_rating_lookup() {
        let (status, body) = send(get_request("/api/rules/challenge-ratings/1%2F2")).await;
        assert_eq!(status, StatusCode::OK);
        let row: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(row["xp"], 200);
        assert_eq!(row["benchmarks"]["hp"], 10);

        let (status, _) = send(get_request("/api/rules/challenge-ratings/40")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(get_request("/api/rules/challenge-ratings")).await;
        assert_eq!(status, StatusCode::OK);
        let rows: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(rows.len(), 30);
    }

    #[tokio::test]
    async fn test_creature_types() {
        let (status, body) = send(get_request("/api/rules/creature-types")).await;
        assert_eq!(status, StatusCode::OK);
        let types: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert!(types
            .iter()
            .any(|t| t["name"] == "Dragon" && t["bab_progression"] == "fast"));
    }
}
