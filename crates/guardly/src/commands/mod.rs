//! Command dispatch: bridges CLI args -> dashboard fetches -> output formatting.

pub mod client;
pub mod config_cmd;
pub mod dashboard;
pub mod filtering;
pub mod stats;
pub mod tls;
pub mod util;

use guardly_core::{ServerConfig, Session};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    session: &Session,
    server: &ServerConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Dashboard => dashboard::handle(session, global).await,
        Command::Stats(args) => stats::handle(session, args, global).await,
        Command::Client(args) => client::handle(session, args, global).await,
        Command::Tls => tls::handle(session, global).await,
        Command::Filtering => filtering::handle(session, global).await,
        Command::Watch(args) => dashboard::watch(session, args, server, global).await,
        // Config and Completions are handled before a session exists
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "does not take a server connection".into(),
        }),
    }
}
