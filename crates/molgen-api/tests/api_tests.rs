//! Integration tests for the generator API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use molgen_api::router::build_router;
use molgen_api::state::AppState;
use molgen_core::templates::PseudocodeTemplates;
use molgen_core::{GenerateError, GeneratorFn, GeneratorRegistry};
use molgen_types::{AlgorithmCategory, GeneratedAlgorithm, ParameterInput};
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::new().unwrap())
}

fn post_generate(body: &str) -> Request<Body> {
    Request::post("/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn send(state: Arc<AppState>, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = build_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

fn to_json(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_generate_info_lists_six_algorithms() {
    let (status, bytes) = send(
        make_test_state(),
        Request::get("/generate").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    let listed: Vec<&str> = json["availableAlgorithms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        listed,
        [
            "molecular-similarity",
            "qsar-model",
            "compound-screening",
            "structure-optimization",
            "pharmacophore",
            "virtual-screening",
        ]
    );
    assert!(json["message"].is_string());
    assert!(json["version"].is_string());
    assert!(json["usage"].is_string());
}

#[tokio::test]
async fn test_generate_info_ignores_query() {
    let (status, bytes) = send(
        make_test_state(),
        Request::get("/generate?type=qsar-model").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(to_json(&bytes)["availableAlgorithms"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_every_category_generates_with_defaults() {
    let state = make_test_state();

    for category in AlgorithmCategory::ALL {
        let body = format!(r#"{{"type":"{}"}}"#, category.as_str());
        let (status, bytes) = send(Arc::clone(&state), post_generate(&body)).await;

        assert_eq!(status, StatusCode::OK, "{category}");
        let json = to_json(&bytes);
        assert_eq!(json["type"], category.as_str());
        assert!(json["name"].is_string());
        assert!(json["description"].is_string());
        assert!(json["parameters"].is_object());
        assert!(json["pseudocode"].is_string());
        assert!(json["complexity"].is_string());
        assert!(!json["useCases"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_molecular_similarity_defaults() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"molecular-similarity"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert_eq!(
        json["parameters"],
        json!({
            "similarityThreshold": 0.7,
            "method": "tanimoto",
            "maxResults": 100,
        })
    );
}

#[tokio::test]
async fn test_threshold_override() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"molecular-similarity","parameters":{"threshold":0.9}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert_eq!(json["parameters"]["similarityThreshold"], 0.9);
    assert_eq!(json["parameters"]["method"], "tanimoto");
    assert_eq!(json["parameters"]["maxResults"], 100);
}

#[tokio::test]
async fn test_method_is_interpolated() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"molecular-similarity","parameters":{"method":"dice"}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    let pseudocode = json["pseudocode"].as_str().unwrap();
    assert!(pseudocode.contains("dice_similarity(query_fp, fp)"));
    assert_eq!(json["parameters"]["method"], "dice");
}

#[tokio::test]
async fn test_undocumented_method_is_interpolated_verbatim() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"molecular-similarity","parameters":{"method":"<tversky>"}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert!(json["pseudocode"]
        .as_str()
        .unwrap()
        .contains("<tversky>_similarity(query_fp, fp)"));
}

#[tokio::test]
async fn test_max_compounds_is_interpolated_for_screening() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"virtual-screening","parameters":{"maxCompounds":2500}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert_eq!(json["parameters"]["maxCompounds"], 2500);
    assert!(json["pseudocode"].as_str().unwrap().contains("limit = 2500)"));
}

#[tokio::test]
async fn test_wrongly_typed_parameters_fall_back_to_defaults() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(
            r#"{"type":"molecular-similarity","parameters":{"threshold":"high","maxCompounds":null}}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert_eq!(json["parameters"]["similarityThreshold"], 0.7);
    assert_eq!(json["parameters"]["maxResults"], 100);
}

#[tokio::test]
async fn test_negative_max_compounds_is_echoed() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"molecular-similarity","parameters":{"maxCompounds":-5}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(to_json(&bytes)["parameters"]["maxResults"], -5);
}

#[tokio::test]
async fn test_fractional_iterations_are_echoed() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"qsar-model","parameters":{"iterations":2.5}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(to_json(&bytes)["parameters"]["maxIterations"], 2.5);
}

#[tokio::test]
async fn test_negative_limit_is_interpolated_for_screening() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"compound-screening","parameters":{"maxCompounds":-5}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert_eq!(json["parameters"]["maxCompounds"], -5);
    assert!(json["pseudocode"].as_str().unwrap().contains("limit = -5)"));
}

#[tokio::test]
async fn test_out_of_range_number_keeps_valid_type() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"qsar-model","parameters":{"threshold":1e400,"iterations":30}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert_eq!(json["type"], "qsar-model");
    assert_eq!(json["parameters"]["maxIterations"], 30);
}

#[tokio::test]
async fn test_out_of_range_threshold_falls_back_to_default() {
    let (status, bytes) = send(
        make_test_state(),
        post_generate(r#"{"type":"pharmacophore","parameters":{"threshold":-1e400}}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(to_json(&bytes)["parameters"]["matchThreshold"], 0.7);
}

#[tokio::test]
async fn test_default_parameter_records() {
    let state = make_test_state();
    let expected = [
        (
            "molecular-similarity",
            json!({ "similarityThreshold": 0.7, "method": "tanimoto", "maxResults": 100 }),
        ),
        (
            "qsar-model",
            json!({
                "modelType": "random-forest",
                "descriptors": [
                    "molecular_weight", "logp", "tpsa", "h_bond_donors",
                    "h_bond_acceptors", "rotatable_bonds", "aromatic_rings", "fraction_sp3",
                ],
                "crossValidationFolds": 5,
                "testSize": 0.2,
                "maxIterations": 1000,
            }),
        ),
        (
            "compound-screening",
            json!({
                "activityThreshold": 0.5,
                "filters": ["lipinski", "pains", "toxicity", "activity"],
                "maxCompounds": 1_000_000,
            }),
        ),
        (
            "structure-optimization",
            json!({
                "populationSize": 100,
                "generations": 1000,
                "mutationRate": 0.1,
                "crossoverRate": 0.8,
                "objectives": ["potency", "selectivity", "admet", "synthetic_accessibility"],
            }),
        ),
        (
            "pharmacophore",
            json!({
                "features": [
                    "hydrogen_bond_donor", "hydrogen_bond_acceptor", "hydrophobic",
                    "aromatic", "positive_ionizable", "negative_ionizable",
                ],
                "matchThreshold": 0.7,
                "distanceTolerance": 1.0,
                "maxResults": 100,
            }),
        ),
        (
            "virtual-screening",
            json!({
                "stages": [
                    "ligand_similarity", "pharmacophore_filter", "molecular_docking", "ml_rescoring",
                ],
                "consensusThreshold": 0.7,
                "similarityMethod": "tanimoto",
                "maxCompounds": 1_000_000,
            }),
        ),
    ];

    for (category, parameters) in expected {
        let body = format!(r#"{{"type":"{category}"}}"#);
        let (status, bytes) = send(Arc::clone(&state), post_generate(&body)).await;
        assert_eq!(status, StatusCode::OK, "{category}");
        assert_eq!(to_json(&bytes)["parameters"], parameters, "{category}");
    }
}

#[tokio::test]
async fn test_unknown_type_is_bad_request() {
    let (status, bytes) = send(make_test_state(), post_generate(r#"{"type":"docking"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(&bytes[..], br#"{"error":"Invalid algorithm type"}"#);
}

#[tokio::test]
async fn test_type_is_case_sensitive() {
    let (status, _) = send(
        make_test_state(),
        post_generate(r#"{"type":"Molecular-Similarity"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_type_is_bad_request() {
    let state = make_test_state();

    for body in [
        r#"{"parameters":{"threshold":0.5}}"#,
        r#"{"type":null}"#,
        r#"{"type":7}"#,
        "not json",
        "",
    ] {
        let (status, bytes) = send(Arc::clone(&state), post_generate(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert_eq!(to_json(&bytes)["error"], "Invalid algorithm type");
    }
}

#[tokio::test]
async fn test_no_body_and_no_content_type_is_bad_request() {
    let (status, bytes) = send(
        make_test_state(),
        Request::post("/generate").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(&bytes[..], br#"{"error":"Invalid algorithm type"}"#);
}

#[tokio::test]
async fn test_identical_requests_are_byte_identical() {
    let state = make_test_state();
    let body = r#"{"type":"pharmacophore","parameters":{"threshold":0.65,"maxCompounds":30}}"#;

    let (_, first) = send(Arc::clone(&state), post_generate(body)).await;
    let (_, second) = send(Arc::clone(&state), post_generate(body)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_generation_failure_is_server_error() {
    fn broken(
        _: &ParameterInput,
        _: &PseudocodeTemplates,
    ) -> Result<GeneratedAlgorithm, GenerateError> {
        Err(GenerateError::GenerationFailure("simulated fault".to_owned()))
    }

    let mut table: BTreeMap<AlgorithmCategory, GeneratorFn> = BTreeMap::new();
    table.insert(AlgorithmCategory::QsarModel, broken);
    let registry = GeneratorRegistry::with_generators(table).unwrap();
    let state = Arc::new(AppState::with_registry(registry).unwrap());

    let (status, bytes) = send(Arc::clone(&state), post_generate(r#"{"type":"qsar-model"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(&bytes[..], br#"{"error":"Failed to generate algorithm"}"#);

    // Recognized but unregistered categories fail the same way.
    let (status, bytes) = send(state, post_generate(r#"{"type":"pharmacophore"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(to_json(&bytes)["error"], "Failed to generate algorithm");
}

#[tokio::test]
async fn test_docs_html_by_default() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_docs_json_format() {
    let (status, bytes) = send(
        make_test_state(),
        Request::get("/docs?format=json").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = to_json(&bytes);
    assert_eq!(json["openapi"], "3.0.3");
    assert!(json["paths"]["/generate"]["post"].is_object());
    assert!(json["paths"]["/generate"]["get"].is_object());
    assert_eq!(
        json["components"]["schemas"]["AlgorithmType"]["enum"]
            .as_array()
            .unwrap()
            .len(),
        6
    );
}

#[tokio::test]
async fn test_docs_unknown_format_falls_back_to_html() {
    let (status, bytes) = send(
        make_test_state(),
        Request::get("/docs?format=yaml").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(std::str::from_utf8(&bytes).unwrap().starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
