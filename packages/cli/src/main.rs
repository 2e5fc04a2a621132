mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    init, lint, project, reconcile, simulate, template, InitArgs, LintArgs, ProjectArgs,
    ReconcileArgs, SimulateArgs, TemplateArgs,
};

/// FlowCanvas CLI - inspect, check and replay graph-backed documents
#[derive(Parser, Debug)]
#[command(name = "flowcanvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file and starter documents
    Init(InitArgs),

    /// Print the graph a document projects to
    Project(ProjectArgs),

    /// Derive an updated document from an edited graph
    Reconcile(ReconcileArgs),

    /// Check documents for structural problems
    Lint(LintArgs),

    /// Replay events through a state machine
    Simulate(SimulateArgs),

    /// Print a starter document
    Template(TemplateArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Project(args) => project(args, &cwd),
        Command::Reconcile(args) => reconcile(args, &cwd),
        Command::Lint(args) => lint(args, &cwd),
        Command::Simulate(args) => simulate(args, &cwd),
        Command::Template(args) => template(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
