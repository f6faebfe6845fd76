// End-to-end tests for GET /api/recipes
//
// The real Edamam and translation clients run against wiremock servers:
// - query translation and label translation
// - repeated-key serialization of health/excluded filters
// - provider failure shapes collapsing into one client-visible error

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use recetas::api::{app_state::AppState, create_router};
use recetas::config::{AppConfig, EdamamCredentials};
use recetas::error::SEARCH_ERROR_MESSAGE;
use recetas::observability::AppMetrics;
use recetas::providers::{RecipeProvider, Translator, create_recipe_provider, create_translator};
use recetas::services::create_recipe_search_service;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EDAMAM_PATH: &str = "/api/recipes/v2";

fn translation_body(text: &str) -> Value {
    json!([[[text, "source", null, null, 10]], null, "es"])
}

async fn mock_translation(server: &MockServer, source: &str, target: &str, translated: &str) {
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("tl", target))
        .and(query_param("q", source))
        .respond_with(ResponseTemplate::new(200).set_body_json(translation_body(translated)))
        .expect(1)
        .mount(server)
        .await;
}

fn build_app(edamam: &MockServer, translate: &MockServer) -> Router {
    let mut config = AppConfig::default();
    config.edamam.base_url = format!("{}{}", edamam.uri(), EDAMAM_PATH);
    config.edamam.timeout_secs = 5;
    config.translation.base_url = translate.uri();
    config.translation.timeout_secs = 5;

    let credentials = Some(EdamamCredentials {
        app_id: "test-app".into(),
        app_key: "test-key".into(),
        account_user: "test-user".into(),
    });

    let translator: Arc<dyn Translator> =
        Arc::from(create_translator(&config.translation).unwrap());
    let provider: Arc<dyn RecipeProvider> =
        Arc::from(create_recipe_provider(&config.edamam).unwrap());
    let metrics = Arc::new(AppMetrics::default());
    let service = create_recipe_search_service(credentials, translator, provider, metrics.clone());

    create_router(AppState::new(service, metrics))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_full_search_round_trip() {
    let edamam = MockServer::start().await;
    let translate = MockServer::start().await;

    mock_translation(&translate, "pollo", "en", "chicken").await;
    mock_translation(
        &translate,
        "Chicken Soup\nRice Bowl",
        "es",
        "Sopa de Pollo\nBol de Arroz",
    )
    .await;

    Mock::given(method("GET"))
        .and(path(EDAMAM_PATH))
        .and(query_param("type", "public"))
        .and(query_param("q", "chicken"))
        .and(query_param("app_id", "test-app"))
        .and(query_param("app_key", "test-key"))
        .and(header("Accept-Language", "en"))
        .and(header("Edamam-Account-User", "test-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "from": 1,
            "to": 2,
            "count": 2,
            "_links": { "next": { "href": "https://api.edamam.com/next", "title": "Next page" } },
            "hits": [
                { "recipe": { "label": "Chicken Soup", "calories": 310.2 }, "_links": { "self": { "href": "h1" } } },
                { "recipe": { "label": "Rice Bowl", "calories": 480.0 }, "_links": { "self": { "href": "h2" } } }
            ]
        })))
        .expect(1)
        .mount(&edamam)
        .await;

    let (status, body) = get(build_app(&edamam, &translate), "/api/recipes?ingredients=pollo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "from": 1,
            "to": 2,
            "count": 2,
            "_links": { "next": { "href": "https://api.edamam.com/next", "title": "Next page" } },
            "hits": [
                { "recipe": { "label": "Sopa de Pollo", "calories": 310.2 }, "_links": { "self": { "href": "h1" } } },
                { "recipe": { "label": "Bol de Arroz", "calories": 480.0 }, "_links": { "self": { "href": "h2" } } }
            ]
        })
    );
}

#[tokio::test]
async fn test_filters_are_sent_as_repeated_keys() {
    let edamam = MockServer::start().await;
    let translate = MockServer::start().await;

    mock_translation(&translate, "arroz", "en", "rice").await;
    mock_translation(&translate, "gluten", "en", "Gluten").await;
    mock_translation(&translate, "nueces", "en", "Nuts").await;

    Mock::given(method("GET"))
        .and(path(EDAMAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "hits": [] })))
        .expect(1)
        .mount(&edamam)
        .await;

    let (status, body) = get(
        build_app(&edamam, &translate),
        "/api/recipes?ingredients=arroz&diet=balanced&dishType=Soup&health=vegan&health=dairy-free&excluded=gluten&excluded=nueces",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 0, "hits": [] }));

    let requests = edamam.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let values = |key: &str| -> Vec<String> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    };

    assert_eq!(values("q"), vec!["rice"]);
    assert_eq!(values("diet"), vec!["balanced"]);
    assert_eq!(values("dishType"), vec!["Soup"]);
    assert_eq!(values("health"), vec!["vegan", "dairy-free"]);
    assert_eq!(values("excluded"), vec!["gluten", "nuts"]);
}

#[tokio::test]
async fn test_zero_hits_makes_no_label_translation() {
    let edamam = MockServer::start().await;
    let translate = MockServer::start().await;

    // Only the query translation is expected; wiremock verifies the count on drop.
    mock_translation(&translate, "pollo", "en", "chicken").await;

    Mock::given(method("GET"))
        .and(path(EDAMAM_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "from": 1, "to": 0, "count": 0, "hits": [] })),
        )
        .mount(&edamam)
        .await;

    let (status, body) = get(build_app(&edamam, &translate), "/api/recipes?ingredients=pollo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hits"], json!([]));
    assert_eq!(translate.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_provider_error_status_is_generic_500() {
    let edamam = MockServer::start().await;
    let translate = MockServer::start().await;

    mock_translation(&translate, "pollo", "en", "chicken").await;

    Mock::given(method("GET"))
        .and(path(EDAMAM_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": "error",
            "message": "Unauthorized app_id = test-app"
        })))
        .mount(&edamam)
        .await;

    let (status, body) = get(build_app(&edamam, &translate), "/api/recipes?ingredients=pollo").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": SEARCH_ERROR_MESSAGE }));
}

#[tokio::test]
async fn test_translation_failure_is_generic_500() {
    let edamam = MockServer::start().await;
    let translate = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&translate)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hits": [] })))
        .expect(0)
        .mount(&edamam)
        .await;

    let (status, body) = get(build_app(&edamam, &translate), "/api/recipes?ingredients=pollo").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": SEARCH_ERROR_MESSAGE }));
}
