//! Integration tests for the directory HTTP API
//!
//! Each test drives the full router (middleware included) in-process with
//! `tower::ServiceExt::oneshot`.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use records::{Record, RecordSet};
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn test_config() -> ServerConfig {
    ServerConfig {
        metrics_enabled: false,
        ..Default::default()
    }
}

fn sample_records() -> RecordSet {
    RecordSet::new(vec![
        Record::new(1, "João Silva", "Cardiologia", true).with_field("crm", "CRM-SP 12345"),
        Record::new(2, "Maria Souza", "Pediatria", false),
    ])
}

fn create_test_state(records: RecordSet) -> Arc<ServerState> {
    Arc::new(ServerState::with_records(test_config(), records))
}

fn app(records: RecordSet) -> Router {
    build_router(create_test_state(records))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_api_info() {
    let (status, body) = get(app(sample_records()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "carelist");
    assert!(body["endpoints"]["GET /professionals"].is_string());
}

#[tokio::test]
async fn test_list_all_professionals() {
    let (status, body) = get(app(sample_records()), "/professionals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["professionals"].as_array().unwrap().len(), 2);
    // Pass-through fields survive the round trip.
    assert_eq!(body["professionals"][0]["crm"], "CRM-SP 12345");
}

#[tokio::test]
async fn test_list_filtered_by_partial_specialty() {
    let (status, body) = get(app(sample_records()), "/professionals?specialty=cardio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["professionals"][0]["id"], 1);
}

#[tokio::test]
async fn test_list_filtered_by_availability() {
    let (_, body) = get(app(sample_records()), "/professionals?available=false").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["professionals"][0]["name"], "Maria Souza");

    let (_, body) = get(
        app(sample_records()),
        "/professionals?specialty=pediatria&available=true",
    )
    .await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_malformed_availability_is_ignored() {
    let (status, body) = get(app(sample_records()), "/professionals?available=sim").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_repeated_availability_uses_first_value() {
    let (status, body) = get(
        app(sample_records()),
        "/professionals?available=true&available=false",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["professionals"][0]["id"], 1);
}

#[tokio::test]
async fn test_get_professional_by_id() {
    let (status, body) = get(app(sample_records()), "/professionals/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 2, "name": "Maria Souza", "specialty": "Pediatria", "available": false})
    );
}

#[tokio::test]
async fn test_get_unknown_professional_is_404() {
    let (status, body) = get(app(sample_records()), "/professionals/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "professional not found");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_404() {
    let (status, body) = get(app(sample_records()), "/professionals/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "professional not found");
}

#[tokio::test]
async fn test_specialties() {
    let (status, body) = get(app(sample_records()), "/specialties").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total": 2,
            "specialties": [
                {"name": "Cardiologia", "totalCount": 1, "availableCount": 1},
                {"name": "Pediatria", "totalCount": 1, "availableCount": 0}
            ]
        })
    );
}

#[tokio::test]
async fn test_search_accented_term() {
    // q=joão, percent-encoded
    let (status, body) = get(app(sample_records()), "/search?q=jo%C3%A3o").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["term"], "joão");
    assert_eq!(body["total"], 1);
    assert_eq!(body["professionals"][0]["id"], 1);
}

#[tokio::test]
async fn test_search_scoped_by_type() {
    let (_, body) = get(app(sample_records()), "/search?q=cardio&type=specialty").await;
    assert_eq!(body["total"], 1);

    let (_, body) = get(app(sample_records()), "/search?q=cardio&type=name").await;
    assert_eq!(body["total"], 0);

    let (_, body) = get(app(sample_records()), "/search?q=maria&type=name").await;
    assert_eq!(body["professionals"][0]["id"], 2);
}

#[tokio::test]
async fn test_search_unrecognized_type_returns_nothing() {
    let (status, body) = get(app(sample_records()), "/search?q=maria&type=email").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["professionals"], json!([]));
}

#[tokio::test]
async fn test_search_repeated_parameters_use_first_value() {
    let (status, body) = get(app(sample_records()), "/search?q=joao&q=maria").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["term"], "joao");
    assert_eq!(body["total"], 1);
    assert_eq!(body["professionals"][0]["id"], 1);

    let (status, body) = get(app(sample_records()), "/search?q=joao&type=name&type=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["professionals"][0]["name"], "João Silva");
}

#[tokio::test]
async fn test_search_without_term_is_400() {
    for uri in ["/search", "/search?q=", "/search?type=name"] {
        let (status, body) = get(app(sample_records()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "search term 'q' is required");
    }
}

#[tokio::test]
async fn test_statistics() {
    let (status, body) = get(app(sample_records()), "/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "totalRecords": 2,
            "availableRecords": 1,
            "unavailableRecords": 1,
            "totalSpecialties": 2,
            "mostCommonSpecialty": {"name": "Cardiologia", "count": 1},
            "availabilityRate": "50.0%"
        })
    );
}

#[tokio::test]
async fn test_empty_dataset_answers_every_route() {
    let (status, body) = get(app(RecordSet::empty()), "/professionals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total": 0, "professionals": []}));

    let (_, body) = get(app(RecordSet::empty()), "/specialties").await;
    assert_eq!(body, json!({"total": 0, "specialties": []}));

    let (_, body) = get(app(RecordSet::empty()), "/statistics").await;
    assert_eq!(body["availabilityRate"], "0.0%");
    assert_eq!(body["mostCommonSpecialty"], Value::Null);

    let (_, body) = get(app(RecordSet::empty()), "/ready").await;
    assert_eq!(body["components"]["dataset"], "empty");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, body) = get(app(sample_records()), "/rota-inexistente").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "route not found");
}

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = get(app(sample_records()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(app(sample_records()), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"], 2);
    assert_eq!(body["components"]["dataset"], "loaded");
}

#[tokio::test]
async fn test_metrics_disabled_is_404() {
    let (status, _) = get(app(sample_records()), "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = app(sample_records())
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let response = app(sample_records())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_reload_swaps_dataset_for_new_requests() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 10, "nome": "Ana Conceição", "especialidade": "Ortopedia", "disponivel": true}}]"#
    )
    .unwrap();

    let config = ServerConfig {
        metrics_enabled: false,
        dataset_path: file.path().to_path_buf(),
        ..Default::default()
    };
    let state = Arc::new(ServerState::with_records(config, sample_records()));

    let (_, body) = get(build_router(Arc::clone(&state)), "/professionals").await;
    assert_eq!(body["total"], 2);

    assert_eq!(state.reload().unwrap(), 1);

    let (_, body) = get(build_router(Arc::clone(&state)), "/search?q=conceicao").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["professionals"][0]["name"], "Ana Conceição");
}

#[tokio::test]
async fn test_failed_reload_keeps_serving() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        metrics_enabled: false,
        dataset_path: dir.path().join("missing.json"),
        ..Default::default()
    };
    let state = Arc::new(ServerState::with_records(config, sample_records()));

    assert!(state.reload().is_err());

    let (_, body) = get(build_router(state), "/professionals").await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_state_new_with_missing_dataset_serves_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        metrics_enabled: false,
        dataset_path: dir.path().join("absent.json"),
        ..Default::default()
    };

    let state = Arc::new(ServerState::new(config));
    let (status, body) = get(build_router(state), "/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRecords"], 0);
}
