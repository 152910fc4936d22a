//! # CLI Layer
//!
//! This is **one possible UI client** for the regimen library: an interactive menu.
//! It is the only place that knows about stdin, stdout and the terminal.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: `--verbose`, `--help`, `--version` via clap
//! 2. **Context Setup**: logging, colours, the file-backed `RegimenApi`
//! 3. **Menu Loop**: prompts and dispatch, see [`session`]
//! 4. **Output Formatting**: exercises, search results and messages, see [`render`]
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `menu`: Menu choices and the fixed screen texts
//! - `session`: The prompt/dispatch loop, generic over input and output
//! - `render`: Output formatting

mod menu;
mod render;
mod session;
pub mod setup;

use clap::Parser;
use console::Term;
use regimen::api::RegimenApi;
use regimen::config::RegimenConfig;
use regimen::error::Result;
use regimen::logging::init_logging;
use regimen::store::fs::FileStore;
use session::Session;
use setup::Cli;
use std::io::{self, IsTerminal};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let interactive = io::stdout().is_terminal();
    let config = RegimenConfig::default()
        .with_verbose(cli.verbose)
        .with_clear_screen(interactive);
    init_logging(&config);

    if !interactive {
        colored::control::set_override(false);
    }

    let api = RegimenApi::open(FileStore::new(&config.data_file));
    let screen = config.clear_screen.then(Term::stdout);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), api)
        .with_screen(screen)
        .run()
}
