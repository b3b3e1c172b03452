use crate::common::{TestApp, routes};
use serde_json::json;

#[tokio::test]
async fn first_category_gets_id_one() {
    let app = TestApp::spawn().await;

    let res = app.post(routes::CATEGORY, &json!({"cat_name": "Dogs"})).await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body, json!({"id": 1, "cat_name": "Dogs"}));
}

#[tokio::test]
async fn duplicate_name_is_a_conflict() {
    let app = TestApp::spawn().await;
    app.create_category("Cats").await;

    let res = app.post(routes::CATEGORY, &json!({"cat_name": "Cats"})).await;
    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "CONFLICT");

    let all = app.get(routes::CATEGORY).await;
    assert_eq!(all.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn name_is_trimmed_before_uniqueness_check() {
    let app = TestApp::spawn().await;
    app.create_category("Birds").await;

    let res = app.post(routes::CATEGORY, &json!({"cat_name": "  Birds "})).await;
    assert_eq!(res.status, 409);
}

#[tokio::test]
async fn get_one_round_trips() {
    let app = TestApp::spawn().await;
    let id = app.create_category("Fish").await;

    let res = app.get(&routes::category(id)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({"id": id, "cat_name": "Fish"}));
}

#[tokio::test]
async fn wrong_type_is_a_validation_error() {
    let app = TestApp::spawn().await;

    let res = app.post(routes::CATEGORY, &json!({"cat_name": 17})).await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::category(9)).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}
