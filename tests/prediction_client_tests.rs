use churn_form::{
    Error, FormController,
    config::{EndpointConfig, UiConfig},
    controller::SubmitOutcome,
    dom::ids,
    form::{SamplePreset, collect_form_data},
    prediction::{HttpPredictionClient, PredictionClient},
    render::Verdict,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

mod common;
use common::create_test_document;

fn client_for(server: &MockServer) -> HttpPredictionClient {
    HttpPredictionClient::new(&EndpointConfig::default(), Some(&server.uri()))
}

#[tokio::test]
async fn test_posts_json_to_predict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"AccountWeeks": 65.0, "DataUsage": 0.29})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "prediction": 1,
            "prediction_label": "Churn",
            "probability": {"churn": 72.15, "not_churn": 27.85},
            "input_features": {"AccountWeeks": 65, "DataUsage": 0.29}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let input = collect_form_data([("AccountWeeks", "65"), ("DataUsage", "0.29")]);
    let response = client.predict(&input).await.unwrap();

    assert!(response.success);
    assert!(response.is_churn());
    assert_eq!(response.probability.unwrap().churn, 72.15);
    assert_eq!(response.feature("AccountWeeks"), Some(65.0));
}

#[tokio::test]
async fn test_unparseable_field_is_sent_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({"RoamMins": null})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "Invalid value for feature: RoamMins"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = collect_form_data([("RoamMins", "n/a")]);
    let response = client_for(&server).predict(&input).await.unwrap();

    // A 4xx with a JSON body is an application reply, not a transport failure
    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Invalid value for feature: RoamMins")
    );
}

#[tokio::test]
async fn test_non_json_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&collect_form_data([("DayCalls", "110")]))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HttpPredictionClient::new(&EndpointConfig::default(), Some(&uri));
    let err = client
        .predict(&collect_form_data([("DayCalls", "110")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_configured_base_url_wins_over_origin() {
    let server = MockServer::start().await;
    let endpoint = EndpointConfig {
        base_url: Some(server.uri()),
        predict_path: "/api/v1/predict".to_string(),
    };

    let client = HttpPredictionClient::new(&endpoint, Some("http://page.invalid"));
    assert_eq!(client.url(), format!("{}/api/v1/predict", server.uri()));
}

#[tokio::test]
async fn test_full_submission_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "prediction": 0,
            "prediction_label": "Not Churn",
            "probability": {"churn": 8.31, "not_churn": 91.69},
            "input_features": {"ContractRenewal": 1, "CustServCalls": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = FormController::new(create_test_document(), UiConfig::default());
    controller.load_sample(SamplePreset::NotChurn).unwrap();

    let outcome = controller.submit(&client_for(&server)).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Rendered(Verdict::NotChurn));

    let doc = controller.document();
    assert_eq!(doc.text(ids::CHURN_PROB), Some("8.31%"));
    assert_eq!(doc.text(ids::NOT_CHURN_PROB), Some("91.69%"));
    assert!(doc.is_visible(ids::RESULTS_SECTION));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["AccountWeeks"], json!(128.0));
    assert_eq!(body["OverageFee"], json!(9.87));
}

#[tokio::test]
async fn test_reply_without_success_flag_shows_its_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Model exploded"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = FormController::new(create_test_document(), UiConfig::default());
    controller.load_sample(SamplePreset::Churn).unwrap();

    let outcome = controller.submit(&client_for(&server)).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Rejected("Model exploded".to_string()));

    let doc = controller.document();
    assert_eq!(doc.text(ids::ERROR_MESSAGE), Some("Model exploded"));
    assert!(doc.is_visible(ids::ERROR_SECTION));
    assert!(!doc.is_visible(ids::RESULTS_SECTION));
}

#[tokio::test]
async fn test_float_prediction_renders_churn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "prediction": 1.0,
            "probability": {"churn": 64.2, "not_churn": 35.8},
            "input_features": {"CustServCalls": 5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = FormController::new(create_test_document(), UiConfig::default());
    controller.load_sample(SamplePreset::Churn).unwrap();

    let outcome = controller.submit(&client_for(&server)).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Rendered(Verdict::Churn));
    assert_eq!(
        controller.document().text(ids::PREDICTION_LABEL),
        Some("Customer Will Churn")
    );
}
