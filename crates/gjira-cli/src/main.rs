mod cmd;
mod output;
mod root;
mod wizard;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gjira",
    about = "Link the local git workflow to the issue tracker: branch from an issue, push with an issue-derived commit message",
    version
)]
struct Cli {
    /// `configure`, `push`, or a tracker issue key to branch from
    /// (omit to show the menu)
    #[arg(value_name = "ACTION")]
    action: Option<String>,

    /// Repository root (default: walk up from the current directory to .git/)
    #[arg(long, env = "GJIRA_ROOT")]
    root: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.action.as_deref() {
        Some("configure") => cmd::configure::run(),
        Some("push") => cmd::push::run(&root),
        Some(key) => cmd::branch::run(&root, key),
        None => cmd::menu::run(),
    };

    if let Err(e) = result {
        // Print the full error chain in the attention color
        output::error(&format!("error: {e:#}"));
        std::process::exit(1);
    }
}
