use super::{load_document, Format};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use flowcanvas_interpreter::Interpreter;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// State machine document JSON file
    pub input: PathBuf,

    /// Events to fire, in order
    pub events: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn simulate(args: SimulateArgs, _cwd: &str) -> Result<()> {
    let format = Format::parse(&args.format)?;
    let document = load_document(&args.input)?;
    let fsm = document.as_fsm()?;
    let mut interpreter = Interpreter::new(fsm);

    if format == Format::Json {
        let mut steps = vec![interpreter.snapshot()];
        for event in &args.events {
            interpreter.trigger(event);
            steps.push(interpreter.snapshot());
        }
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    println!(
        "▶ {} {}",
        "Start".green().bold(),
        interpreter.active_state_id().unwrap_or("<no states>")
    );

    for event in &args.events {
        let from = interpreter.active_state_id().unwrap_or("<none>").to_string();
        if interpreter.trigger(event) {
            println!(
                "  {} --{}--> {}",
                from,
                event.cyan(),
                interpreter.active_state_id().unwrap_or("<none>").bright_white()
            );
        } else {
            println!("  {} {}: no transition for '{}'", "✗".yellow(), from, event);
        }
    }

    println!();
    println!(
        "   Active: {}",
        interpreter.active_state_id().unwrap_or("<none>").bright_white().bold()
    );
    println!("   History: {}", interpreter.history().join(" → "));

    let available: Vec<&str> = interpreter
        .available_transitions()
        .into_iter()
        .map(|transition| transition.trigger.as_str())
        .collect();
    if available.is_empty() {
        println!("   {}", "No further events".dimmed());
    } else {
        println!("   Next events: {}", available.join(", "));
    }

    Ok(())
}
