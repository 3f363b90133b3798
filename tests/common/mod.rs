#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use movie_plots::config::Config;
use movie_plots::routes::{RouterOptions, app_router};
use movie_plots::server::build_state;
use movie_plots::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const INCEPTION_PLOT: &str = "A thief who steals corporate secrets through the use of dream-sharing technology...";
pub const INCEPTION_PLOT_PT: &str = "Um ladrão que rouba segredos corporativos através do uso da tecnologia de compartilhamento de sonhos...";

/// Behaviour of the fake OMDB server.
#[derive(Clone)]
pub enum OmdbStub {
    Found { title: &'static str, plot: &'static str },
    NotFound(Option<&'static str>),
    Status(u16),
    /// Non-2xx status carrying OMDB's own failure payload.
    StatusWithFailure(u16, &'static str),
    Slow(Duration),
    Malformed,
}

/// Behaviour of the fake translation server.
#[derive(Clone)]
pub enum TranslateStub {
    Translated(&'static str),
    Status(u16),
    MissingField,
    Slow(Duration),
}

/// Records what a stub received.
#[derive(Default)]
pub struct Recorder {
    calls: AtomicUsize,
    requests: Mutex<Vec<Value>>,
}

impl Recorder {
    fn record(&self, request: Value) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Value> {
        self.requests.lock().unwrap().last().cloned()
    }
}

/// A running stub provider.
pub struct Stub {
    pub base_url: String,
    pub recorder: Arc<Recorder>,
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn omdb_handler(
    State((recorder, stub)): State<(Arc<Recorder>, OmdbStub)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    recorder.record(json!(params));

    match stub {
        OmdbStub::Found { title, plot } => Json(json!({
            "Title": title,
            "Year": "2010",
            "Plot": plot,
            "Response": "True"
        }))
        .into_response(),
        OmdbStub::NotFound(Some(message)) => {
            Json(json!({ "Response": "False", "Error": message })).into_response()
        }
        OmdbStub::NotFound(None) => Json(json!({ "Response": "False" })).into_response(),
        OmdbStub::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        OmdbStub::StatusWithFailure(code, message) => (
            StatusCode::from_u16(code).unwrap(),
            Json(json!({ "Response": "False", "Error": message })),
        )
            .into_response(),
        OmdbStub::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({ "Title": "Late", "Plot": "Too late", "Response": "True" }))
                .into_response()
        }
        OmdbStub::Malformed => "<html>not json</html>".into_response(),
    }
}

async fn translate_handler(
    State((recorder, stub)): State<(Arc<Recorder>, TranslateStub)>,
    Json(body): Json<Value>,
) -> Response {
    recorder.record(body);

    match stub {
        TranslateStub::Translated(text) => {
            Json(json!({ "translatedText": text })).into_response()
        }
        TranslateStub::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        TranslateStub::MissingField => Json(json!({ "error": "oops" })).into_response(),
        TranslateStub::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({ "translatedText": "tarde demais" })).into_response()
        }
    }
}

/// Starts a fake OMDB API answering on `/`.
pub async fn spawn_omdb(stub: OmdbStub) -> Stub {
    let recorder = Arc::new(Recorder::default());
    let router = Router::new()
        .route("/", get(omdb_handler))
        .with_state((recorder.clone(), stub));

    Stub {
        base_url: format!("{}/", serve(router).await),
        recorder,
    }
}

/// Starts a fake translation API answering on `/translate`.
pub async fn spawn_translate(stub: TranslateStub) -> Stub {
    let recorder = Arc::new(Recorder::default());
    let router = Router::new()
        .route("/translate", post(translate_handler))
        .with_state((recorder.clone(), stub));

    Stub {
        base_url: serve(router).await,
        recorder,
    }
}

pub fn create_test_config(omdb_url: &str, translate_url: &str) -> Config {
    Config {
        omdb_api_key: "test-api-key".to_string(),
        omdb_base_url: omdb_url.to_string(),
        translate_base_url: translate_url.to_string(),
        translate_api_key: None,
        translate_source: "en".to_string(),
        translate_target: "pt".to_string(),
        lookup_timeout_secs: 1,
        translate_timeout_secs: None,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        behind_proxy: false,
        allowed_origins: Vec::new(),
        rate_limit_per_minute: 100,
    }
}

pub fn create_test_state(omdb: &Stub, translate: &Stub) -> AppState {
    build_state(&create_test_config(&omdb.base_url, &translate.base_url)).unwrap()
}

/// Serves the full application router, as `server::run` does, and returns its base URL.
pub async fn serve_app(config: &Config) -> String {
    let state = build_state(config).unwrap();
    let app = app_router(state, &RouterOptions::from(config)).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            axum::ServiceExt::<axum::extract::Request>::into_make_service_with_connect_info::<
                SocketAddr,
            >(app),
        )
        .await
        .unwrap();
    });

    format!("http://{}", addr)
}

