#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

use dashboard_login::application::services::{LoginService, LoginSettings};
use dashboard_login::domain::entities::{Credentials, REFRESH_TOKEN_KEY, TokenPair};
use dashboard_login::domain::ports::{Navigator, Notifier, TokenEndpoint, TokenStore};
use dashboard_login::domain::request_state::SubmitPolicy;
use dashboard_login::error::{LoginError, StoreResult};
use dashboard_login::infrastructure::http::HttpTokenEndpoint;
use dashboard_login::infrastructure::storage::MemoryTokenStore;

/// Password accepted by the stub for every username.
pub const VALID_PASSWORD: &str = "s3cret";

/// Usernames with this prefix get their response delayed.
pub const SLOW_PREFIX: &str = "slow-";

pub const SLOW_DELAY: Duration = Duration::from_millis(300);

type Requests = Arc<Mutex<Vec<Value>>>;

/// Token-obtain endpoint behaving like the backend's `/api/token/`.
///
/// - blank username or password → 400 with field errors
/// - username `malformed` → 200 without a `refresh` field
/// - username `garbage` → 200 with a non-JSON body
/// - password [`VALID_PASSWORD`] → 200 `{"access": "access-<user>", "refresh": "refresh-<user>"}`
/// - anything else → 401 `{"detail": ..}`
pub struct StubTokenService {
    base_url: String,
    requests: Requests,
}

impl StubTokenService {
    pub async fn spawn() -> Self {
        let requests: Requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/api/token/", post(obtain_pair))
            .with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_url(&self) -> Url {
        Url::parse(&format!("{}/api/token/", self.base_url)).unwrap()
    }

    /// JSON bodies received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn obtain_pair(
    State(requests): State<Requests>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    requests.lock().unwrap().push(body.clone());

    let username = body["username"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();

    if username.starts_with(SLOW_PREFIX) {
        tokio::time::sleep(SLOW_DELAY).await;
    }

    if username.is_empty() || password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            json!({"username": ["This field may not be blank."]}).to_string(),
        );
    }

    match username.as_str() {
        "malformed" => (StatusCode::OK, json!({"access": "only"}).to_string()),
        "garbage" => (StatusCode::OK, "<html>oops</html>".to_string()),
        _ if password == VALID_PASSWORD => (
            StatusCode::OK,
            json!({
                "access": format!("access-{username}"),
                "refresh": format!("refresh-{username}"),
            })
            .to_string(),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            json!({"detail": "No active account found with the given credentials"}).to_string(),
        ),
    }
}

/// URL on which nothing is listening.
pub async fn unreachable_token_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/api/token/")).unwrap()
}

/// Memory store that counts writes.
///
/// With a refresh delay, every `refresh_token` write sleeps first, leaving the
/// store holding a new access token next to the previous refresh token.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryTokenStore,
    writes: AtomicUsize,
    refresh_delay: Option<Duration>,
}

impl CountingStore {
    pub fn with_refresh_delay(delay: Duration) -> Self {
        Self {
            refresh_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn value(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }
}

#[async_trait]
impl TokenStore for CountingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.refresh_delay
            && key == REFRESH_TOKEN_KEY
        {
            tokio::time::sleep(delay).await;
        }
        self.inner.set(key, value).await
    }
}

/// In-process token endpoint answering every login with `A-<user>` / `R-<user>`
/// after a per-username delay.
#[derive(Default)]
pub struct DelayedEndpoint {
    delays: Vec<(String, Duration)>,
}

impl DelayedEndpoint {
    pub fn with_delay(mut self, username: &str, delay: Duration) -> Self {
        self.delays.push((username.to_string(), delay));
        self
    }
}

#[async_trait]
impl TokenEndpoint for DelayedEndpoint {
    async fn obtain_pair(&self, credentials: Credentials) -> Result<TokenPair, LoginError> {
        let delay = self
            .delays
            .iter()
            .find(|(username, _)| *username == credentials.username)
            .map(|(_, delay)| *delay)
            .unwrap_or_default();

        tokio::time::sleep(delay).await;

        Ok(TokenPair::new(
            format!("A-{}", credentials.username),
            format!("R-{}", credentials.username),
        ))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Login controller wired to a real HTTP endpoint and recording fakes.
pub struct Harness {
    pub service: LoginService,
    pub store: Arc<CountingStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn create_harness(token_url: Url, policy: SubmitPolicy) -> Harness {
    create_harness_with_store(token_url, policy, Arc::new(CountingStore::default()))
}

pub fn create_harness_with_store(
    token_url: Url,
    policy: SubmitPolicy,
    store: Arc<CountingStore>,
) -> Harness {
    let endpoint = HttpTokenEndpoint::new(token_url, Some(Duration::from_secs(5))).unwrap();
    create_harness_with_endpoint(Arc::new(endpoint), policy, store)
}

pub fn create_harness_with_endpoint(
    endpoint: Arc<dyn TokenEndpoint>,
    policy: SubmitPolicy,
    store: Arc<CountingStore>,
) -> Harness {
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let service = LoginService::new(
        endpoint,
        store.clone(),
        navigator.clone(),
        notifier.clone(),
        LoginSettings {
            submit_policy: policy,
            ..LoginSettings::default()
        },
    );

    Harness {
        service,
        store,
        navigator,
        notifier,
    }
}
