use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use contact_relay::config::{Config, SmtpConfig};
use contact_relay::email::Mailer;
use contact_relay::models::Contact;

#[derive(Debug, Clone, PartialEq)]
pub enum MailKind {
    Acknowledgment,
    OperatorNotice,
}

/// One attempted send, as seen by the stub mailer.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub kind: MailKind,
    pub to: String,
}

/// In-memory mailer: records every attempt, optionally failing all of them.
pub struct StubMailer {
    operator_to: String,
    sent: Mutex<Vec<SentMail>>,
    fail: AtomicBool,
}

impl StubMailer {
    pub fn new(operator_to: &str) -> Arc<Self> {
        Arc::new(Self {
            operator_to: operator_to.to_string(),
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        })
    }

    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, kind: MailKind, to: &str) -> Result<(), String> {
        self.sent.lock().unwrap().push(SentMail {
            kind,
            to: to.to_string(),
        });
        if self.fail.load(Ordering::SeqCst) {
            Err("stub mail transport failure".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Mailer for StubMailer {
    async fn send_acknowledgment(&self, contact: &Contact) -> Result<(), String> {
        self.record(MailKind::Acknowledgment, &contact.email)
    }

    async fn send_operator_notice(&self, _contact: &Contact) -> Result<(), String> {
        self.record(MailKind::OperatorNotice, &self.operator_to)
    }
}

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub mailer: Arc<StubMailer>,
    pub db_name: String,
}

pub const OPERATOR_EMAIL: &str = "operator@test.com";

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a contact form payload, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// All persisted contacts, oldest first.
    pub async fn stored_contacts(&self) -> Vec<Contact> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts ORDER BY submission_date")
            .fetch_all(&self.pool)
            .await
            .expect("failed to query contacts")
    }
}

/// Spawn a test app with a fresh temporary database and a stub mailer.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!(
        "contact_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        operator_email: OPERATOR_EMAIL.to_string(),
        site_name: "Test Studio".to_string(),
        site_url: "http://localhost/portfolio".to_string(),
        allowed_origin: None,
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            user: "test".to_string(),
            pass: "test".to_string(),
            from: "noreply@test.com".to_string(),
        },
    };

    let mailer = StubMailer::new(OPERATOR_EMAIL);
    let app = contact_relay::build_app(pool.clone(), config, mailer.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        mailer,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
