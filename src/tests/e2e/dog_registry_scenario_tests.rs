use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::dogs::core::dog::{Dog, DogKind};
use crate::shell::errors::ErrorStyle;
use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn call(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&'static str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let response = app
        .clone()
        .oneshot(
            request
                .body(body.map(Body::from).unwrap_or_else(Body::empty))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

#[tokio::test]
async fn creates_fetches_and_filters_dogs_over_http() {
    let state = make_test_state(ErrorStyle::Status);
    let app = router(state.clone());

    let (status, created) = call(
        &app,
        "POST",
        "/dog",
        Some(r#"{"name":"Fido","kind":"terrier"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: Dog = serde_json::from_value(created).unwrap();
    assert_eq!(created.pk, 7);

    let (status, fetched) = call(&app, "GET", "/dog/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_value::<Dog>(fetched).unwrap(), created);

    let (_, dalmatians) = call(&app, "GET", "/dog?kind=dalmatian", None).await;
    let dalmatians: Vec<Dog> = serde_json::from_value(dalmatians).unwrap();
    let names: Vec<&str> = dalmatians.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Snoopy", "Rex", "Pongo"]);

    let (_, terriers) = call(&app, "GET", "/dogs/type/terrier", None).await;
    let terriers: Vec<Dog> = serde_json::from_value(terriers).unwrap();
    assert_eq!(terriers.len(), 2);
    assert_eq!(terriers.last(), Some(&created));

    let (status, patched) = call(&app, "PATCH", "/dog/7", Some(r#"{"kind":"bulldog"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_value::<Dog>(patched).unwrap(),
        Dog {
            name: "Fido".to_string(),
            pk: 7,
            kind: DogKind::Bulldog,
        }
    );

    let (status, _) = call(&app, "POST", "/post?dog_id=7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.posts.entries().await.len(), 3);

    let (status, missing) = call(&app, "GET", "/dogs/8", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, serde_json::json!({"error": "Dog not found"}));
}

#[tokio::test]
async fn reports_missing_dogs_in_the_body_when_configured() {
    let app = router(make_test_state(ErrorStyle::Body));

    let (status, json) = call(&app, "GET", "/dog/100", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"error": "Dog not found"}));
}
