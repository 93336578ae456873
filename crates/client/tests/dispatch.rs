use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use vizdiff_client::types::{CommentToPrBody, ConnectionParams, UpdateStatusBody};
use vizdiff_client::{NotifyError, ReviewApi};
use vizdiff_core::config::CommentBehavior;
use vizdiff_core::models::RunState;

#[derive(Clone, Default)]
struct Hits(Arc<AtomicUsize>);

impl Hits {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn status_body() -> UpdateStatusBody {
    UpdateStatusBody {
        params: ConnectionParams {
            owner: "ownerX".to_string(),
            repository: "repoA".to_string(),
            installation_id: "inst123".to_string(),
        },
        sha1: "abc123".to_string(),
        description: "Regression testing passed".to_string(),
        state: RunState::Success,
        report_url: None,
    }
}

fn comment_body() -> CommentToPrBody {
    CommentToPrBody {
        params: ConnectionParams {
            owner: "ownerX".to_string(),
            repository: "repoA".to_string(),
            installation_id: "inst123".to_string(),
        },
        sha1: "abc123".to_string(),
        behavior: CommentBehavior::Default,
        short_description: false,
        failed_items_count: 0,
        new_items_count: 0,
        deleted_items_count: 0,
        passed_items_count: 1,
        report_url: None,
    }
}

#[tokio::test]
async fn dispatch_sends_all_requests() {
    let hits = Hits::default();
    let router = Router::new()
        .route(
            "/api/update-status",
            post(|State(hits): State<Hits>| async move {
                hits.0.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }),
        )
        .with_state(hits.clone());
    let addr = serve(router).await;

    let api = ReviewApi::new(&format!("http://{addr}"), None).unwrap();
    let requests = vec![
        api.update_status_request(status_body()),
        api.update_status_request(status_body()),
    ];
    api.dispatch(requests, false).await.unwrap();
    assert_eq!(hits.count(), 2);
}

#[tokio::test]
async fn application_error_is_suppressed() {
    let router = Router::new().route(
        "/api/update-status",
        post(|| async { (StatusCode::NOT_FOUND, r#"{"message":"not found"}"#) }),
    );
    let addr = serve(router).await;

    let api = ReviewApi::new(&format!("http://{addr}"), None).unwrap();
    let requests = vec![api.update_status_request(status_body())];
    // Logged and suppressed: the aggregate call still resolves.
    api.dispatch(requests, false).await.unwrap();
}

#[tokio::test]
async fn transport_error_fails_aggregate() {
    let router = Router::new().route(
        "/api/update-status",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") }),
    );
    let addr = serve(router).await;

    let api = ReviewApi::new(&format!("http://{addr}"), None).unwrap();
    let requests = vec![api.update_status_request(status_body())];
    let err = api.dispatch(requests, false).await.unwrap_err();
    assert!(matches!(err, NotifyError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn rejected_endpoint_does_not_abort_siblings() {
    let hits = Hits::default();
    let router = Router::new()
        .route(
            "/api/update-status",
            post(|State(hits): State<Hits>| async move {
                hits.0.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }),
        )
        .route(
            "/api/comment-to-pr",
            post(|| async {
                (StatusCode::FORBIDDEN, r#"{"message":"installation not authorized"}"#)
            }),
        )
        .with_state(hits.clone());
    let addr = serve(router).await;

    let api = ReviewApi::new(&format!("http://{addr}"), None).unwrap();
    let requests =
        vec![api.update_status_request(status_body()), api.comment_to_pr_request(comment_body())];
    api.dispatch(requests, false).await.unwrap();
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // Nothing is listening on this port.
    let api = ReviewApi::new("http://127.0.0.1:9", None).unwrap();
    let requests = vec![api.update_status_request(status_body())];
    let err = api.dispatch(requests, false).await.unwrap_err();
    assert!(matches!(err, NotifyError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn dry_run_skips_network() {
    let hits = Hits::default();
    let router = Router::new()
        .route(
            "/api/update-status",
            post(|State(hits): State<Hits>| async move {
                hits.0.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }),
        )
        .with_state(hits.clone());
    let addr = serve(router).await;

    let api = ReviewApi::new(&format!("http://{addr}"), None).unwrap();
    let requests = vec![api.update_status_request(status_body())];
    api.dispatch(requests, true).await.unwrap();
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn dispatch_with_no_requests_resolves() {
    let api = ReviewApi::new("http://127.0.0.1:9", None).unwrap();
    api.dispatch(vec![], false).await.unwrap();
}
