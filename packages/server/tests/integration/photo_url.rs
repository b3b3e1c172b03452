use crate::common::{TestApp, routes};
use serde_json::json;

const URL: &str = "https://cdn.example.com/pets/rex.jpg";

#[tokio::test]
async fn registers_and_fetches_by_url() {
    let app = TestApp::spawn().await;
    let pet = app.create_pet("Rex", 1, 1).await;

    let res = app
        .post(routes::PHOTO_URL, &json!({"url": URL, "pet_id": pet}))
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body, json!({"url": URL, "pet_id": pet}));

    let fetched = app.get(&routes::photo_url(URL)).await;
    assert_eq!(fetched.status, 200, "{}", fetched.text);
    assert_eq!(fetched.body, res.body);

    let all = app.get(routes::PHOTO_URL).await;
    assert_eq!(all.status, 200);
    assert_eq!(all.body, json!([{"url": URL, "pet_id": pet}]));
}

#[tokio::test]
async fn duplicate_url_is_a_conflict() {
    let app = TestApp::spawn().await;

    let first = app
        .post(routes::PHOTO_URL, &json!({"url": URL, "pet_id": 1}))
        .await;
    assert_eq!(first.status, 201);

    let second = app
        .post(routes::PHOTO_URL, &json!({"url": URL, "pet_id": 2}))
        .await;
    assert_eq!(second.status, 409);
    assert_eq!(second.body["code"], "CONFLICT");

    let fetched = app.get(&routes::photo_url(URL)).await;
    assert_eq!(fetched.body["pet_id"], 1);
}

#[tokio::test]
async fn rejects_empty_url() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::PHOTO_URL, &json!({"url": "", "pet_id": 1}))
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_url_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app
        .get(&routes::photo_url("https://cdn.example.com/missing.png"))
        .await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}
