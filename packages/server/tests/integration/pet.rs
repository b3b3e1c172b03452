use crate::common::{TestApp, routes};
use serde_json::json;

#[tokio::test]
async fn create_update_and_fetch_scenario() {
    let app = TestApp::spawn().await;

    let category = app.post(routes::CATEGORY, &json!({"cat_name": "Dogs"})).await;
    assert_eq!(category.status, 201);
    assert_eq!(category.body, json!({"id": 1, "cat_name": "Dogs"}));

    let pet = app
        .post(
            routes::PET,
            &json!({"pet_name": "Rex", "category_id": 1, "status_id": 1}),
        )
        .await;
    assert_eq!(pet.status, 201, "{}", pet.text);
    assert_eq!(
        pet.body,
        json!({"id": 1, "pet_name": "Rex", "category_id": 1, "status_id": 1})
    );

    let updated = app
        .put(
            &routes::pet(1),
            &json!({"pet_name": "Rexy", "category_id": 1, "status_id": 2}),
        )
        .await;
    assert_eq!(updated.status, 200, "{}", updated.text);
    assert_eq!(updated.body["pet_name"], "Rexy");

    let fetched = app.get(&routes::pet(1)).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(
        fetched.body,
        json!({"id": 1, "pet_name": "Rexy", "category_id": 1, "status_id": 2})
    );
}

#[tokio::test]
async fn ids_are_unique_across_creates() {
    let app = TestApp::spawn().await;

    let mut ids = Vec::new();
    for name in ["Rex", "Fido", "Luna", "Max"] {
        ids.push(app.create_pet(name, 1, 1).await);
    }
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());

    let all = app.get(routes::PET).await;
    assert_eq!(all.status, 200);
    assert_eq!(all.body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn update_of_unknown_pet_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app
        .put(
            &routes::pet(77),
            &json!({"pet_name": "Ghost", "category_id": 1, "status_id": 1}),
        )
        .await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_is_a_full_replace() {
    let app = TestApp::spawn().await;
    let id = app.create_pet("Rex", 1, 1).await;

    let res = app.put(&routes::pet(id), &json!({"pet_name": "Rexy"})).await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");

    let unchanged = app.get(&routes::pet(id)).await;
    assert_eq!(unchanged.body["pet_name"], "Rex");
}

#[tokio::test]
async fn rejects_overlong_name() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::PET,
            &json!({"pet_name": "Sir Barksalot the Third", "category_id": 1, "status_id": 1}),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn non_numeric_id_is_a_validation_error() {
    let app = TestApp::spawn().await;

    let res = app.get("/pet/rex").await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_pet_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::pet(5)).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}
