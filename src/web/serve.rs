use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, Response, StatusCode},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{MakeSpan, OnRequest, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::{App, AppState};

use super::{midware, routes::routes, Result, REQUEST_ID_HEADER};

/// The core async function returning a future that will serve this application.
///
/// Accepts an `App` (the `AppState` and a bound `TcpListener`) and serves the full router on it.
///
/// Current implementation might return an IO error from `axum::serve`
pub async fn serve(app: App) -> Result<()> {
    let App {
        app_state,
        listener,
    } = app;

    axum::serve(listener, app_router(app_state)).await?;

    Ok(())
}

/// All routes wrapped in the request-id, tracing and response mapping middleware.
pub fn app_router(app_state: AppState) -> Router {
    let x_request_id: HeaderName = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace_layer = build_trace_layer();

    Router::new().merge(routes(app_state)).layer(
        ServiceBuilder::new()
            // Set UUID per request
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            // Responses travel back up the stack, so the id gets copied onto whatever
            // the response mapper below returned, error responses included.
            .layer(PropagateRequestIdLayer::new(x_request_id))
            .layer(trace_layer)
            .layer(middleware::map_response(midware::response_mapper)),
    )
}

/// Request span carrying the request id, with one event on the way in and one on the way out.
fn build_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let req_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|id| id.to_str().ok())
                .unwrap_or_default()
                .to_string();

            tracing::info_span!(
                "request",
                req_id,
                method = %req.method(),
                uri = %req.uri()
            )
        })
        .on_request(|_req: &Request<Body>, _s: &Span| tracing::debug!("received"))
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let status = res.status().as_u16();

            match Outcome::from(res.status()) {
                Outcome::ServerError => tracing::error!(status, ?latency, "failed"),
                Outcome::Rejected => tracing::warn!(status, ?latency, "rejected"),
                Outcome::Served => tracing::info!(status, ?latency, "served"),
            }
        })
}

/// How a finished request is reported. Unknown activities and duplicate signups are
/// ordinary client mistakes, so 4xx is logged below server failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Served,
    Rejected,
    ServerError,
}

impl From<StatusCode> for Outcome {
    fn from(status: StatusCode) -> Self {
        if status.is_server_error() {
            Outcome::ServerError
        } else if status.is_client_error() {
            Outcome::Rejected
        } else {
            Outcome::Served
        }
    }
}
