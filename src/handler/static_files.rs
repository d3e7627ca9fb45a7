//! Static file serving module
//!
//! Loads files resolved by `ProjectRoot` and turns them into responses
//! with MIME type detection.

use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use crate::project::ProjectRoot;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve the entrypoint file for the site root
pub async fn serve_entrypoint(
    ctx: &RequestContext<'_>,
    project: &ProjectRoot,
) -> Response<Full<Bytes>> {
    match load_entrypoint(project).await {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            http::build_file_response(content, content_type, ctx.is_head)
        }
        None => miss(ctx),
    }
}

/// Serve the first match for a relative path across the search order
pub async fn serve_lookup(
    ctx: &RequestContext<'_>,
    project: &ProjectRoot,
) -> Response<Full<Bytes>> {
    match load_lookup(project, ctx.path).await {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            http::build_file_response(content, content_type, ctx.is_head)
        }
        None => miss(ctx),
    }
}

fn miss(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    if ctx.access_log {
        logger::log_response(404, 0);
    }
    http::build_404_response()
}

/// Load the entrypoint file (`public/index.html` under the project root)
pub async fn load_entrypoint(project: &ProjectRoot) -> Option<(Vec<u8>, &'static str)> {
    let path = project.entrypoint();
    let content = fs::read(&path).await.ok()?;
    Some((content, content_type_of(&path)))
}

/// Load the first existing match for a request path
///
/// The path is lightly cleaned (leading slash stripped, `..` removed);
/// nothing stronger is promised for a dev-only tool.
pub async fn load_lookup(project: &ProjectRoot, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let clean_path = path.trim_start_matches('/').replace("..", "");
    // A leading slash can survive the `..` removal; a rooted path would
    // make `join` escape the project directory
    let clean_path = clean_path.trim_start_matches('/');
    if clean_path.is_empty() {
        return None;
    }

    let file_path = project.resolve(clean_path)?;
    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    Some((content, content_type_of(&file_path)))
}

fn content_type_of(path: &Path) -> &'static str {
    mime::get_content_type(path.extension().and_then(|e| e.to_str()))
}
