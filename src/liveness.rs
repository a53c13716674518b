//! Keep-alive HTTP endpoint.
//!
//! Hosting platforms that keep the bot resident ping `GET /` and expect a
//! fixed 200 response. Nothing here touches the whitelist logic.

use axum::{Router, routing::get};
use log::{error, info};

/// Fixed body returned by the liveness route.
const ALIVE_BODY: &str = "✅ Nine SMP whitelist bot is alive!";

/// Builds the axum router with the single liveness route.
pub fn router() -> Router {
    Router::new().route("/", get(|| async { ALIVE_BODY }))
}

/// Serves the liveness endpoint on `0.0.0.0:<port>` until the process
/// terminates.
pub async fn serve(port: u16) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("liveness endpoint listening on port {}", port);
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Spawns the liveness server as a background task.
///
/// A serve failure only costs the keep-alive pings, so it is logged and the
/// bot keeps running.
pub fn spawn(port: u16) {
    tokio::spawn(async move {
        if let Err(e) = serve(port).await {
            error!("liveness endpoint failed: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_root_returns_ok_with_fixed_body() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], ALIVE_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_not_found() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
