use super::{load_document, Format};
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use flowcanvas_linter::{lint_document, Diagnostic, DiagnosticLevel, LintOptions};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Document JSON file or directory (defaults to the configured documents dir)
    pub input: Option<PathBuf>,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Default)]
struct Totals {
    diagnostics: usize,
    errors: usize,
    warnings: usize,
}

pub fn lint(args: LintArgs, cwd: &str) -> Result<()> {
    let format = Format::parse(&args.format)?;
    let input = match args.input {
        Some(input) => input,
        None => Config::load(cwd)?.get_documents_dir(cwd),
    };

    let files = if input.is_file() {
        vec![input.clone()]
    } else if input.is_dir() {
        find_document_files(&input)
    } else {
        return Err(anyhow::anyhow!("Input path does not exist: {}", input.display()));
    };

    if format == Format::Text {
        println!("🔍 {} FlowCanvas Linter", "Starting".green().bold());
        println!("   Input: {}", input.display());
        println!();
    }

    let mut totals = Totals::default();
    let mut report = Vec::new();
    for file in &files {
        let diagnostics = match load_document(file) {
            Ok(document) => lint_document(&document, LintOptions::default()),
            Err(err) => {
                eprintln!("{} {:#}", "✗".red(), err);
                totals.errors += 1;
                continue;
            }
        };

        totals.diagnostics += diagnostics.len();
        totals.errors += count(&diagnostics, DiagnosticLevel::Error);
        totals.warnings += count(&diagnostics, DiagnosticLevel::Warning);

        match format {
            Format::Text => print_diagnostics(file, &diagnostics, args.verbose),
            Format::Json => report.push(serde_json::json!({
                "file": file.display().to_string(),
                "diagnostics": diagnostics,
            })),
        }
    }

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_summary(files.len(), &totals),
    }

    if totals.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn count(diagnostics: &[Diagnostic], level: DiagnosticLevel) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}

fn print_diagnostics(file: &Path, diagnostics: &[Diagnostic], verbose: bool) {
    if diagnostics.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), file.display());
        }
        return;
    }

    println!("{}", file.display());
    for diagnostic in diagnostics {
        if !verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        match &diagnostic.target {
            Some(target) => println!(
                "  {} [{}] {} {}",
                level_str,
                diagnostic.rule,
                diagnostic.message,
                format!("({})", target).dimmed()
            ),
            None => println!("  {} [{}] {}", level_str, diagnostic.rule, diagnostic.message),
        }

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }
    println!();
}

fn print_summary(files_checked: usize, totals: &Totals) {
    println!(
        "✨ {} Linting complete!",
        if totals.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", files_checked);
    println!("   Total diagnostics: {}", totals.diagnostics);

    if totals.errors > 0 {
        println!("   {} {}", "Errors:".red(), totals.errors);
    }
    if totals.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), totals.warnings);
    }
    if totals.errors == 0 && totals.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}

/// Every `.json` file under `dir` except the config file
fn find_document_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file()
                && path.extension().map(|e| e == "json").unwrap_or(false)
                && path.file_name().map(|name| name != DEFAULT_CONFIG_NAME).unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}
