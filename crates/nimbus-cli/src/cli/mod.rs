//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No rendering logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nimbus",
    bin_name = "nimbus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render and inspect Nimbus Mustache views",
    long_about = "Nimbus renders Mustache views the way a Nimbus application does: \
                  templates from the views directory, partials from views/partials, \
                  and the app_name / base_url / year globals merged into every call.",
    after_help = "EXAMPLES:\n\
        \x20 nimbus render about --data '{\"title\": \"About us\"}'\n\
        \x20 nimbus render admin/index --views ./app/views -g theme=dark\n\
        \x20 nimbus exists home\n\
        \x20 nimbus list --format json\n\
        \x20 nimbus completions bash > /usr/share/bash-completion/completions/nimbus",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template with the configured globals.
    #[command(
        visible_alias = "r",
        about = "Render a template",
        after_help = "EXAMPLES:\n\
            \x20 nimbus render home\n\
            \x20 nimbus render about --data '{\"getVar\": {}}'\n\
            \x20 nimbus render report --data-file data.json --output report.html\n\
            \x20 nimbus render about.mustache --strip-extension"
    )]
    Render(RenderArgs),

    /// Check whether a template exists.
    #[command(
        about = "Check that a template exists",
        after_help = "EXAMPLES:\n\
            \x20 nimbus exists home\n\
            \x20 nimbus exists admin/index --views ./app/views"
    )]
    Exists(ExistsArgs),

    /// List templates and partials.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 nimbus list\n\
            \x20 nimbus list --templates-only\n\
            \x20 nimbus list --format json"
    )]
    List(ListArgs),

    /// Print the globals merged into every render.
    #[command(
        about = "Show view globals",
        after_help = "EXAMPLES:\n\
            \x20 nimbus globals\n\
            \x20 nimbus globals -g theme=dark --format json"
    )]
    Globals(GlobalsArgs),

    /// Initialise a Nimbus configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 nimbus init           # default location\n\
            \x20 nimbus init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nimbus completions bash > ~/.local/share/bash-completion/completions/nimbus\n\
            \x20 nimbus completions zsh  > ~/.zfunc/_nimbus\n\
            \x20 nimbus completions fish > ~/.config/fish/completions/nimbus.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Nimbus configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 nimbus config get app.app_name\n\
            \x20 nimbus config list\n\
            \x20 nimbus config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `nimbus render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template name relative to the views directory, e.g. `about` or
    /// `admin/index`.
    #[arg(value_name = "TEMPLATE", help = "Template name")]
    pub template: String,

    /// Render data as a JSON object.
    #[arg(
        short = 'd',
        long = "data",
        value_name = "JSON",
        conflicts_with = "data_file",
        help = "Render data as a JSON object"
    )]
    pub data: Option<String>,

    /// Read render data from a JSON file (`-` for stdin).
    #[arg(
        long = "data-file",
        value_name = "FILE",
        help = "Read render data from a JSON file ('-' for stdin)"
    )]
    pub data_file: Option<PathBuf>,

    /// Extra globals, `KEY=VALUE`. Values parse as JSON when possible.
    #[arg(
        short = 'g',
        long = "global",
        value_name = "KEY=VALUE",
        help = "Add a view global (repeatable)"
    )]
    pub globals: Vec<String>,

    /// Strip a trailing `.mustache` from the template name.
    #[arg(long = "strip-extension", help = "Strip a trailing .mustache from the name")]
    pub strip_extension: bool,

    /// Write the body to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file")]
    pub output: Option<PathBuf>,
}

// ── exists ────────────────────────────────────────────────────────────────────

/// Arguments for `nimbus exists`.
#[derive(Debug, Args)]
pub struct ExistsArgs {
    /// Template name; a trailing `.mustache` is ignored.
    #[arg(value_name = "TEMPLATE", help = "Template name")]
    pub template: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `nimbus list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Hide partials.
    #[arg(long = "templates-only", help = "Hide partials")]
    pub templates_only: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` and `globals` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON.
    Json,
}

// ── globals ───────────────────────────────────────────────────────────────────

/// Arguments for `nimbus globals`.
#[derive(Debug, Args)]
pub struct GlobalsArgs {
    /// Extra globals, `KEY=VALUE`.
    #[arg(
        short = 'g',
        long = "global",
        value_name = "KEY=VALUE",
        help = "Add a view global (repeatable)"
    )]
    pub globals: Vec<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `nimbus init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `nimbus.toml` in the current directory instead of the
    /// platform config location.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `nimbus completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `nimbus config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `app.app_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
