mod args;
mod cmd;
mod output;
mod root;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mcp-checklist",
    about = "Ensure a repository has an MCP agent checklist — report existing ones or generate one from README.md",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository path (used when neither --repo nor MCP_REPO_PATH is set)
    path: Option<PathBuf>,

    /// Repository path (defaults to MCP_REPO_PATH, then PATH, then the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    /// Do not write files; print the checklist that would be written
    #[arg(long, visible_alias = "dryrun")]
    dry_run: bool,

    /// Project language (python, javascript, go, rust, java, cpp)
    #[arg(long, global = true)]
    language: Option<String>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List existing checklists and the tasks they define
    Introduce,

    /// Install dependencies and run the test suite
    #[command(visible_alias = "tdd")]
    Bootstrap,

    /// Serve the checklist operations over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, env = "MCP_CHECKLIST_PORT", default_value = "8000")]
        port: u16,
    },
}

fn main() {
    let split = args::split_unknown(std::env::args_os(), &args::known_long_flags(&Cli::command()));
    let cli = Cli::parse_from(split.args);

    let default_level = match &cli.command {
        Some(Commands::Serve { .. }) => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !split.extras.is_empty() {
        tracing::debug!(extras = ?split.extras, "ignoring unrecognized flags");
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_repo = std::env::var_os(root::REPO_ENV);
    let repo = root::resolve_repo(
        cli.repo.as_deref(),
        env_repo.as_deref(),
        cli.path.as_deref(),
        &cwd,
    );
    let language = cli.language.as_deref();

    let result = match cli.command {
        None => cmd::ensure::run(&repo, cli.dry_run, language, cli.json),
        Some(Commands::Introduce) => cmd::introduce::run(&repo, cli.json),
        Some(Commands::Bootstrap) => cmd::bootstrap::run(&repo, language, cli.json),
        Some(Commands::Serve { host, port }) => cmd::serve::run(&host, port),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
