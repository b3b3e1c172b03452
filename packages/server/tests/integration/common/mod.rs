use std::net::SocketAddr;

use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use petstore_server::config::{AppConfig, CorsConfig, DatabaseConfig, LogConfig, ServerConfig};
use petstore_server::state::AppState;

pub mod routes {
    pub const STATUS: &str = "/status";
    pub const CATEGORY: &str = "/category";
    pub const TAG: &str = "/tag";
    pub const TAG_PET: &str = "/tag_pet";
    pub const PET: &str = "/pet";
    pub const PHOTO_URL: &str = "/pet/photourl";
    pub const ORDER: &str = "/order";
    pub const USER: &str = "/user";
    pub const HEALTH: &str = "/health";
    pub const OPENAPI: &str = "/api-docs/openapi.json";
    pub const SCALAR: &str = "/scalar";

    pub fn status(id: i64) -> String {
        format!("/status/{id}")
    }

    pub fn category(id: i64) -> String {
        format!("/category/{id}")
    }

    pub fn tag(id: i64) -> String {
        format!("/tag/{id}")
    }

    pub fn pet(id: i64) -> String {
        format!("/pet/{id}")
    }

    /// The URL travels percent-encoded as a single path segment.
    pub fn photo_url(url: &str) -> String {
        format!("/pet/photourl/{}", urlencoding::encode(url))
    }

    pub fn order(id: i64) -> String {
        format!("/order/{id}")
    }

    pub fn user(id: i64) -> String {
        format!("/user/{id}")
    }
}

/// A running test server backed by its own SQLite database file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("petstore.db").display());

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig {
                url: db_url,
                max_connections: 1,
                min_connections: 1,
                connect_timeout_secs: 8,
                acquire_timeout_secs: 8,
                idle_timeout_secs: None,
                max_lifetime_secs: None,
                sqlx_logging: false,
            },
            log: LogConfig {
                level: "warn".to_string(),
            },
        };

        let db = petstore_server::database::init_db(&app_config.database)
            .await
            .expect("Failed to initialize test database");

        let state = AppState {
            db: db.clone(),
            config: app_config,
        };

        let app = petstore_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// POST a raw, possibly malformed, JSON body.
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Create a status via the API and return its `id`.
    pub async fn create_status(&self, dis: &str, value: &str) -> i64 {
        let res = self
            .post(routes::STATUS, &serde_json::json!({"dis": dis, "value": value}))
            .await;
        assert_eq!(res.status, 201, "create_status failed: {}", res.text);
        res.id()
    }

    /// Create a category via the API and return its `id`.
    pub async fn create_category(&self, name: &str) -> i64 {
        let res = self
            .post(routes::CATEGORY, &serde_json::json!({"cat_name": name}))
            .await;
        assert_eq!(res.status, 201, "create_category failed: {}", res.text);
        res.id()
    }

    /// Create a tag via the API and return its `id`.
    pub async fn create_tag(&self, name: &str) -> i64 {
        let res = self
            .post(routes::TAG, &serde_json::json!({"tag_name": name}))
            .await;
        assert_eq!(res.status, 201, "create_tag failed: {}", res.text);
        res.id()
    }

    /// Create a pet via the API and return its `id`.
    pub async fn create_pet(&self, name: &str, category_id: i64, status_id: i64) -> i64 {
        let res = self
            .post(
                routes::PET,
                &serde_json::json!({
                    "pet_name": name,
                    "category_id": category_id,
                    "status_id": status_id,
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_pet failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i64 {
        self.body["id"]
            .as_i64()
            .expect("response body should contain 'id'")
    }
}

/// A complete, valid user payload.
pub fn user_body(username: &str, password: &str) -> Value {
    serde_json::json!({
        "username": username,
        "firstname": "Alice",
        "lastname": "Liddell",
        "email": "alice@example.com",
        "password": password,
        "phone": "5550100",
        "userstatus": 1,
    })
}
