//! Logging helpers
//!
//! Prefixed stdout/stderr logging for server lifecycle, access log lines,
//! and build progress. Access log lines carry a CLF-style timestamp.

use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;
use std::path::Path;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, project_dir: &Path) {
    println!("======================================");
    println!("Dev server started");
    println!("Listening on: http://{addr}");
    println!("Project directory: {}", project_dir.display());
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] [{}] {method} {uri} {version:?}", timestamp());
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_warning(message: &str) {
    println!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_shutdown() {
    println!("\n[Server] Interrupt received, shutting down");
}

pub fn log_build_start(project_dir: &Path, out_dir: &Path) {
    println!(
        "[Build] Bundling '{}' into '{}'",
        project_dir.display(),
        out_dir.display()
    );
}

pub fn log_build_subdir(name: &str, entries: usize) {
    println!("[Build] Copied {entries} entries from '{name}/'");
}

pub fn log_build_done(out_dir: &Path, entries: usize) {
    println!("[Build] Done: {entries} entries in '{}'", out_dir.display());
}
