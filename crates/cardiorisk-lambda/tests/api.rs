use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use cardiorisk_lambda::config::AppConfig;
use cardiorisk_lambda::router;
use cardiorisk_lambda::state::AppState;

fn app() -> axum::Router {
    router(AppState::new(AppConfig::default()))
}

async fn send(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(app(), "POST", uri, Some(body)).await
}

/// The 42-year-old Argentinian woman from the reference chart cell.
fn patient() -> Value {
    json!({
        "nombre": "María",
        "apellido": "Gómez",
        "pais": "AR",
        "genero": "F",
        "edad": 42,
        "colesterolTotal": 170,
        "presionSistolica": 115,
        "hipertensionArterial": "N",
        "imc": "N",
        "tabaquismo": "N",
        "apneaSueno": "N",
        "usoAlcohol": "ninguna",
        "insuficienciaCardiaca": "N",
        "enfermedadCoronaria": "N",
        "enfermedadRenal": "N",
        "enfermedadCerebrovascular": "N",
        "enfermedadVascular": "N",
        "diabetesMellitus": "N",
        "estaFatigado": "N",
        "subeEscaleras": "N",
        "caminaManzana": "N",
        "masCincoEnfermedades": "N",
        "perdidaPeso": "N"
    })
}

#[tokio::test]
async fn health() {
    let (status, body) = send(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn calculate_score_returns_all_fields() {
    let (status, body) = post("/calculate-score", patient()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "harms2afScore": 0,
            "mtaiwanScore": -2,
            "frailScore": 0,
            "frailInterpretation": "Robusto",
            "heartsScore": 1,
            "heartsRiskLevel": "Bajo",
            "heartsRiskColor": "green-500"
        })
    );
}

#[tokio::test]
async fn string_measurements_from_the_form_are_accepted() {
    let mut body = patient();
    body["edad"] = json!("42");
    body["colesterolTotal"] = json!("170");
    body["presionSistolica"] = json!("115");
    let (status, body) = post("/calculate-score", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heartsScore"], json!(1));
}

#[tokio::test]
async fn coronary_disease_override_over_http() {
    let mut body = patient();
    body["enfermedadCoronaria"] = json!("S");
    body["pais"] = json!("BR");
    let (status, body) = post("/calculate-score", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heartsScore"], json!(25));
    assert_eq!(body["heartsRiskLevel"], json!("Muy alto"));
    assert_eq!(body["heartsRiskColor"], json!("red-600"));
    // Coronary disease also counts toward mTaiwan-AF.
    assert_eq!(body["mtaiwanScore"], json!(-1));
}

#[tokio::test]
async fn age_ceiling_over_http() {
    let mut body = patient();
    body["edad"] = json!(76);
    let (status, body) = post("/calculate-score", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heartsScore"], json!(30));
    assert_eq!(body["heartsRiskLevel"], json!("Crítico"));
    assert_eq!(body["heartsRiskColor"], json!("red-900"));
}

#[tokio::test]
async fn unsupported_country_is_generic_500() {
    let mut body = patient();
    body["pais"] = json!("BR");
    let (status, body) = post("/calculate-score", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error al calcular el score" }));
}

#[tokio::test]
async fn invalid_code_is_generic_500() {
    let mut body = patient();
    body["genero"] = json!("X");
    let (status, body) = post("/calculate-score", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Error al calcular el score"));
    assert!(body.get("harms2afScore").is_none());
}

#[tokio::test]
async fn missing_field_is_generic_500() {
    let mut body = patient();
    body.as_object_mut().unwrap().remove("perdidaPeso");
    let (status, _) = post("/calculate-score", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn non_json_body_is_generic_500() {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate-score")
        .header("content-type", "text/plain")
        .body(Body::from("edad=42"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn configured_error_message_is_used() {
    let config = AppConfig {
        error_message: "Error calculating score".to_string(),
        ..AppConfig::default()
    };
    let mut body = patient();
    body["pais"] = json!("BR");
    let (status, body) = send(
        router(AppState::new(config)),
        "POST",
        "/calculate-score",
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Error calculating score"));
}

#[tokio::test]
async fn list_calculators() {
    let (status, body) = send(app(), "GET", "/calculators", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["harms2af", "mtaiwan", "frail", "hearts"]);
}

#[tokio::test]
async fn single_calculator_needs_only_its_fields() {
    let body = json!({
        "estaFatigado": "S",
        "subeEscaleras": "S",
        "caminaManzana": "S",
        "masCincoEnfermedades": "N",
        "perdidaPeso": "N"
    });
    let (status, body) = post("/calculators/frail", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": 3, "label": "Frágil" }));
}

#[tokio::test]
async fn hearts_calculator_includes_color() {
    let (status, body) = post("/calculators/hearts", patient()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "score": 1, "label": "Bajo", "color": "green-500" })
    );
}

#[tokio::test]
async fn unknown_calculator_is_404() {
    let (status, body) = post("/calculators/chads2vasc", patient()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("calculator not found: chads2vasc"));
}

#[tokio::test]
async fn legacy_score() {
    let body = json!({ "edad": 70, "colesterol": 250, "presionArterial": "150/95" });
    let (status, body) = post("/calculate-score/legacy", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": 55 }));
}

#[tokio::test]
async fn legacy_score_rejects_malformed_pressure() {
    let body = json!({ "edad": 70, "colesterol": 250, "presionArterial": "150-95" });
    let (status, body) = post("/calculate-score/legacy", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Error al calcular el score"));
}

#[tokio::test]
async fn lifetime_risk() {
    let body = json!({
        "genero": "M",
        "colesterolTotal": 250,
        "presionSistolica": 130,
        "tratamientoHipertension": "N",
        "diabetes": "S",
        "fumador": "N"
    });
    let (status, body) = post("/calculate-score/lifetime", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": 69 }));
}

#[tokio::test]
async fn widget_risk_summary() {
    let body = json!({
        "patients": [
            { "harms2afScore": 4, "mtaiwanScore": 2, "heartsScore": 25 },
            { "harms2afScore": 1, "mtaiwanScore": 0, "heartsScore": 3 },
            { "harms2afScore": 2 }
        ]
    });
    let (status, body) = post("/widget-risk-data", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPatients"], json!(3));
    assert_eq!(body["averageScores"], json!({ "harms2af": 2, "mtaiwan": 1, "hearts": 9 }));
    assert_eq!(body["highRiskPercentage"], json!(33));
    assert!(body["lastUpdate"].is_string());
}

#[tokio::test]
async fn widget_uses_configured_threshold() {
    let config = AppConfig {
        high_risk_threshold: 2,
        ..AppConfig::default()
    };
    let body = json!({ "patients": [{ "heartsScore": 3 }, { "heartsScore": 2 }] });
    let (status, body) = send(
        router(AppState::new(config)),
        "POST",
        "/widget-risk-data",
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["highRiskPercentage"], json!(50));
}
