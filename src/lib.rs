//! Pushgate: a tiered pre-push validation gate.
//!
//! Runs a fixed list of checks against a project tree before a push is
//! allowed, and exits non-zero if any of them recorded an error.
//!
//! # Pipeline
//!
//! - **Fast tier**: required manifest, forbidden suppression directives, debug
//!   prints, hardcoded colors, nested dependency trees, sync-conflict copies,
//!   duplicate configs. Always runs.
//! - **Slow tier**: type check, lint, build. Runs only when the fast tier
//!   recorded no errors.
//!
//! Warnings are reported but never fail the gate.
//!
//! # Examples
//!
//! ```bash
//! # Run every check against the enclosing checkout
//! pushgate
//!
//! # Same, machine-readable
//! pushgate check --format json
//!
//! # Run automatically before each push
//! pushgate hook install
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: state, executor, pipeline, reporting, config, hook management
//! - [`checks`]: the check implementations and their fixed order

pub mod checks;
pub mod core;

use crate::core::check::CheckContext;
use crate::core::config;
use crate::core::console::{Console, Sink};
use crate::core::error::PushgateError;
use crate::core::executor::{CommandExecutor, ShellExecutor};
use crate::core::hook;
use crate::core::pipeline::Pipeline;
use crate::core::project;
use crate::core::report::{self, OutputFormat, Verdict};

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(
    name = "pushgate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate a project before pushing"
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run all checks (default)
    Check(CheckCli),
    /// List checks in execution order
    List,
    /// Manage the git pre-push hook
    Hook(HookCli),
}

#[derive(clap::Args, Debug)]
struct CheckCli {
    /// Project root (defaults to the enclosing git checkout).
    #[clap(long)]
    root: Option<PathBuf>,
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    format: String,
}

impl Default for CheckCli {
    fn default() -> Self {
        Self {
            root: None,
            format: "text".to_string(),
        }
    }
}

#[derive(clap::Args, Debug)]
struct HookCli {
    /// Project root (defaults to the enclosing git checkout).
    #[clap(long)]
    root: Option<PathBuf>,
    #[clap(subcommand)]
    command: HookCommand,
}

#[derive(Subcommand, Debug)]
enum HookCommand {
    /// Link .git/hooks/pre-push to this executable
    Install {
        /// Replace an existing pre-push hook
        #[clap(long)]
        force: bool,
    },
    /// Remove the pre-push hook link
    Uninstall,
}

/// Entry point for the binary. Returns the process exit code.
pub fn run() -> Result<i32, PushgateError> {
    let mut args = std::env::args();
    let argv0 = args.next().unwrap_or_default();

    // Git passes the remote name and URL to hooks; they are not ours to parse.
    if hook::invoked_as_hook(&argv0) {
        return run_check_cli(CheckCli::default());
    }

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Check(CheckCli::default())) {
        Command::Check(check) => run_check_cli(check),
        Command::List => {
            for check in Pipeline::standard().checks() {
                println!("{:<5} {}", check.tier.to_string(), check.name);
            }
            Ok(0)
        }
        Command::Hook(hook_cli) => {
            let cwd = std::env::current_dir()?;
            let root = project::resolve_root(hook_cli.root.as_deref(), &cwd)?;
            run_hook(&root, hook_cli.command)?;
            Ok(0)
        }
    }
}

fn run_check_cli(cli: CheckCli) -> Result<i32, PushgateError> {
    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(PushgateError::InvalidArgument)?;
    let cwd = std::env::current_dir()?;
    let root = project::resolve_root(cli.root.as_deref(), &cwd)?;

    let verdict = run_check(&root, format, &ShellExecutor::new())?;
    Ok(verdict.exit_code())
}

/// Load the project's config, run the standard pipeline and report it.
pub fn run_check(
    root: &Path,
    format: OutputFormat,
    executor: &dyn CommandExecutor,
) -> Result<Verdict, PushgateError> {
    let config = config::load_config(root)?;
    let console = Console::new(match format {
        OutputFormat::Text => Sink::Stdout,
        OutputFormat::Json => Sink::Stderr,
    });

    console.line(&report::banner());
    let ctx = CheckContext::new(root, &config, executor, console);
    let run = Pipeline::standard().run(&ctx);
    report::report(run, format, &console)
}

fn run_hook(root: &Path, command: HookCommand) -> Result<(), PushgateError> {
    match command {
        HookCommand::Install { force } => {
            let exe = std::env::current_exe()?;
            let path = hook::install_hook(root, &exe, force)?;
            println!("✓ Installed pre-push hook: {} -> {}", path.display(), exe.display());
        }
        HookCommand::Uninstall => {
            if hook::uninstall_hook(root)? {
                println!("✓ Removed pre-push hook");
            } else {
                println!("No pre-push hook found to remove");
            }
        }
    }
    Ok(())
}
