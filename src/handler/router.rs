//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, then
//! dispatch to the entrypoint or the ordered subdirectory lookup.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    if state.access_log {
        logger::log_request(method, uri, req.version());
    }

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path,
        is_head,
        access_log: state.access_log,
    };

    let response = if ctx.path == "/" {
        static_files::serve_entrypoint(&ctx, &state.project).await
    } else {
        static_files::serve_lookup(&ctx, &state.project).await
    };

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}
