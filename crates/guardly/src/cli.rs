//! Clap derive structures for the `guardly` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Entry point ──────────────────────────────────────────────────────

/// guardly -- terminal dashboard for AdGuard Home
#[derive(Debug, Parser)]
#[command(
    name = "guardly",
    version,
    about = "Inspect AdGuard Home DNS servers from the command line",
    long_about = "Fetches statistics, TLS and filtering status, and client details\n\
        from an AdGuard Home server and renders them as tables or structured data.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Shared flags ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "GUARDLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "GUARDLY_SERVER", global = true)]
    pub server: Option<String>,

    /// Username (overrides profile)
    #[arg(long, short = 'u', env = "GUARDLY_USERNAME", global = true)]
    pub username: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "GUARDLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Colorize output: auto, always or never
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Log more to stderr; repeat for more detail
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing except errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip TLS certificate verification
    #[arg(long, short = 'k', env = "GUARDLY_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "GUARDLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output selection ─────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// JSON on a single line
    JsonCompact,
    /// YAML
    Yaml,
    /// One identifier per line, for scripts
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

// ── Subcommands ──────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch everything and render the full dashboard
    #[command(alias = "dash", alias = "d")]
    Dashboard,

    /// Traffic statistics and top lists
    Stats(StatsArgs),

    /// Look up a single client by IP, MAC, or client ID
    #[command(alias = "cl")]
    Client(ClientArgs),

    /// TLS configuration and certificate status
    Tls,

    /// Filtering status and subscribed lists
    #[command(alias = "filters")]
    Filtering,

    /// Re-render the dashboard after every refresh
    Watch(WatchArgs),

    /// Inspect the config file and store profile passwords
    Config(ConfigArgs),

    /// Print a shell completion script
    Completions(CompletionsArgs),
}

// ── Command arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Rows to show per top list (table output)
    #[arg(long, short = 'n', default_value = "10")]
    pub top: usize,
}

#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Client identifier as the server ranks it (usually an IP)
    pub identifier: String,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Refresh period (e.g. 10s, 1m); overrides the profile
    #[arg(long, short = 'i')]
    pub interval: Option<humantime::Duration>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current configuration (passwords redacted)
    Show,

    /// Make a profile the default and save the config file
    Use {
        /// Profile name
        name: String,
    },

    /// Store the active profile's password in the system keyring
    SetPassword,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
