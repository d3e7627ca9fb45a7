//! Command-line interface
//!
//! Argument definitions for the `devserve` binary. Parsing errors and
//! `--help`/`--version` are handled by clap itself (usage errors exit 2).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "devserve",
    version,
    about = "Serve a static project during development, or bundle it for distribution"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve `project_dir` over HTTP, or bundle it when --build is given
    Run {
        /// Project directory containing some of: includes/, public/, src/
        project_dir: PathBuf,

        /// Port to listen on (overrides config file and environment)
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind (overrides config file and environment)
        #[arg(long)]
        host: Option<String>,

        /// Bundle the project into a flat output directory instead of serving
        #[arg(long)]
        build: bool,

        /// Output directory for --build (default: build-<project-basename>)
        #[arg(long, value_name = "DIR", requires = "build")]
        out: Option<PathBuf>,
    },
}
