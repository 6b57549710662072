//! HTTP transport for [`RecordsService`].
//!
//! Every request goes through the service's own route table; the router only
//! adapts methods, paths and bodies and writes the status with the JSON
//! envelope.

use std::future::Future;
use std::io;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method as HttpMethod, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response as HttpResponse};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::response::{Response, status};
use crate::route::Method;
use crate::service::RecordsService;

/// Router sending every request to `service`.
pub fn router(service: RecordsService) -> Router {
    Router::new().fallback(dispatch).with_state(service)
}

async fn dispatch(
    State(service): State<RecordsService>,
    method: HttpMethod,
    uri: Uri,
    body: Bytes,
) -> HttpResponse {
    let response = match method.as_str().parse::<Method>() {
        Ok(method) => service.handle(method, uri.path(), &body[..]),
        Err(err) => Response::error(status::BAD_REQUEST, err.to_string()),
    };
    into_http(&response)
}

fn into_http(response: &Response) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match response.to_json() {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            error!(error = %err, "response encoding failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Serves `service` on `listener` until `shutdown` completes.
///
/// Requests in flight are finished before returning.
pub async fn serve<F>(listener: TcpListener, service: RecordsService, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}
