mod common;

use common::{INCEPTION_PLOT, OmdbStub, spawn_omdb};
use movie_plots::domain::error::{MovieError, Provider};
use movie_plots::domain::providers::MovieLookup;
use movie_plots::infrastructure::omdb::OmdbClient;
use std::time::{Duration, Instant};
use url::Url;

fn client(base_url: &str, timeout: Duration) -> OmdbClient {
    OmdbClient::new(
        reqwest::Client::new(),
        Url::parse(base_url).unwrap(),
        "test-api-key",
        timeout,
    )
}

#[tokio::test]
async fn test_find_by_title_success() {
    let omdb = spawn_omdb(OmdbStub::Found {
        title: "Inception",
        plot: INCEPTION_PLOT,
    })
    .await;

    let movie = client(&omdb.base_url, Duration::from_secs(5))
        .find_by_title("Inception")
        .await
        .unwrap();

    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.plot, INCEPTION_PLOT);
    assert_eq!(omdb.recorder.calls(), 1);
}

#[tokio::test]
async fn test_find_by_title_sends_encoded_query() {
    let omdb = spawn_omdb(OmdbStub::Found {
        title: "Amélie",
        plot: "Amélie is an innocent and naive girl in Paris...",
    })
    .await;

    client(&omdb.base_url, Duration::from_secs(5))
        .find_by_title("Amélie & friends")
        .await
        .unwrap();

    let query = omdb.recorder.last_request().unwrap();
    assert_eq!(query["t"], "Amélie & friends");
    assert_eq!(query["apikey"], "test-api-key");
    assert_eq!(query["plot"], "full");
}

#[tokio::test]
async fn test_find_by_title_not_found_with_provider_message() {
    let omdb = spawn_omdb(OmdbStub::NotFound(Some("Movie not found!"))).await;

    let err = client(&omdb.base_url, Duration::from_secs(5))
        .find_by_title("Zzzxyqqq123")
        .await
        .unwrap_err();

    assert_eq!(err, MovieError::NotFound("Movie not found!".to_string()));
}

#[tokio::test]
async fn test_find_by_title_not_found_default_message() {
    let omdb = spawn_omdb(OmdbStub::NotFound(None)).await;

    let err = client(&omdb.base_url, Duration::from_secs(5))
        .find_by_title("Zzzxyqqq123")
        .await
        .unwrap_err();

    assert_eq!(err, MovieError::NotFound("movie not found".to_string()));
}

#[tokio::test]
async fn test_find_by_title_non_success_status() {
    let omdb = spawn_omdb(OmdbStub::Status(401)).await;

    let err = client(&omdb.base_url, Duration::from_secs(5))
        .find_by_title("Inception")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        MovieError::UpstreamUnavailable {
            provider: Provider::MovieLookup,
            status: Some(401),
        }
    );
}

#[tokio::test]
async fn test_find_by_title_error_status_wins_over_failure_flag() {
    let omdb = spawn_omdb(OmdbStub::StatusWithFailure(401, "Invalid API key!")).await;

    let err = client(&omdb.base_url, Duration::from_secs(5))
        .find_by_title("Inception")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        MovieError::UpstreamUnavailable {
            provider: Provider::MovieLookup,
            status: Some(401),
        }
    );
}

#[tokio::test]
async fn test_find_by_title_times_out() {
    let omdb = spawn_omdb(OmdbStub::Slow(Duration::from_secs(5))).await;

    let started = Instant::now();
    let err = client(&omdb.base_url, Duration::from_millis(200))
        .find_by_title("Inception")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        MovieError::Timeout {
            provider: Provider::MovieLookup
        }
    );
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_find_by_title_malformed_body() {
    let omdb = spawn_omdb(OmdbStub::Malformed).await;

    let err = client(&omdb.base_url, Duration::from_secs(5))
        .find_by_title("Inception")
        .await
        .unwrap_err();

    assert!(matches!(err, MovieError::Internal(_)));
}

#[tokio::test]
async fn test_find_by_title_unreachable() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}/", addr), Duration::from_secs(5))
        .find_by_title("Inception")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        MovieError::UpstreamUnavailable {
            provider: Provider::MovieLookup,
            status: None,
        }
    );
}
