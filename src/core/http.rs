//! HTTP endpoint server using Axum
//!
//! Serves the Discord interactions endpoint next to health and metrics.

use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

use crate::core::context::AppContext;
use crate::core::interactions::dispatch;
use crate::discord::verify::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::discord::{Interaction, InteractionResponse};
use crate::error::SignatureError;

pub async fn health_check(State(ctx): State<AppContext>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "uptime_seconds": ctx.start_time.elapsed().as_secs(),
        "profile_sessions": ctx.sessions.len().await,
        "service": "coinsignal-bot"
    }))
}

pub async fn metrics_handler(State(ctx): State<AppContext>) -> Result<String, StatusCode> {
    ctx.metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(ctx): State<AppContext>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    ctx.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    ctx.metrics.http_requests_in_flight.dec();

    ctx.metrics.http_requests_total.inc();
    ctx.metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Discord interactions endpoint. Unsigned or badly signed requests get 401,
/// which Discord also uses to probe the endpoint during setup.
async fn interactions_handler(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, StatusCode> {
    let verified = match (header(&headers, SIGNATURE_HEADER), header(&headers, TIMESTAMP_HEADER)) {
        (Some(signature), Some(timestamp)) => ctx.verifier.verify(signature, timestamp, &body),
        _ => Err(SignatureError::MissingHeaders),
    };
    if let Err(e) = verified {
        warn!(error = %e, "Rejected interaction request");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let interaction: Interaction = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Malformed interaction payload");
        StatusCode::BAD_REQUEST
    })?;

    Ok(Json(dispatch(&ctx, interaction).await))
}

pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/interactions", post(interactions_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    ctx.clone(),
                    metrics_middleware,
                )),
        )
        .with_state(ctx)
}

pub async fn start_server(ctx: AppContext, port: u16) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(ctx);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!("Interactions endpoint available at http://0.0.0.0:{}/interactions", port);
    axum::serve(listener, app).await?;

    Ok(())
}
