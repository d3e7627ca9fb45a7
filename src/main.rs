use clap::Parser;
use std::sync::Arc;

mod bundle;
mod cli;
mod config;
mod handler;
mod http;
mod logger;
mod project;
mod server;

fn main() {
    let parsed = cli::Cli::parse();
    let cli::Command::Run {
        project_dir,
        port,
        host,
        build,
        out,
    } = parsed.command;

    let project = match project::ProjectRoot::open(&project_dir) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if build {
        if let Err(e) = bundle::run(&project, out.as_deref()) {
            logger::log_error(&format!("Build failed: {e}"));
            std::process::exit(1);
        }
        return;
    }

    let mut cfg = match config::Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    cfg.apply_overrides(host.as_deref(), port);

    if let Err(e) = serve(&cfg, project) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn serve(
    cfg: &config::Config,
    project: project::ProjectRoot,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Single-threaded development server: current-thread runtime, with
    // spawn_local used per connection inside the accept loop
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let listener = server::create_reusable_listener(addr)?;
        let state = Arc::new(config::AppState::new(cfg, project));
        logger::log_server_start(&addr, state.project.path());
        server::run(listener, state).await
    })
}
