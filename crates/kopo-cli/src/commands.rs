use colored::Colorize;
use kopo_chaincode::{ChaincodeConfig, Function};
use kopo_shim::{KeyModification, MockStub};

use crate::cli::*;
use crate::scenario::{Outcome, Scenario, Step};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run(args) => cmd_run(args, cli.format),
        Command::Exec(args) => cmd_exec(args, cli.format),
        Command::Functions => cmd_functions(),
    }
}

fn cmd_run(args: RunArgs, format: OutputFormat) -> anyhow::Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let stub = MockStub::new("kopo");
    let outcomes = scenario.run(&stub);

    print_outcomes(&outcomes, format)?;
    for key in &args.history_keys {
        print_history(key, &stub.history(key), format)?;
    }

    let unmet = outcomes
        .iter()
        .filter(|o| o.expectation_met == Some(false))
        .count();
    if unmet > 0 {
        anyhow::bail!("{unmet} step(s) did not return the expected status");
    }
    Ok(())
}

fn cmd_exec(args: ExecArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = if args.quiet {
        ChaincodeConfig::quiet()
    } else {
        ChaincodeConfig::default()
    };
    let scenario = Scenario {
        config,
        init: args.init,
        steps: vec![Step {
            function: args.function,
            args: args.args,
            expect_status: None,
        }],
    };
    let outcomes = scenario.run(&MockStub::new("kopo"));
    print_outcomes(&outcomes, format)
}

fn cmd_functions() -> anyhow::Result<()> {
    println!("Functions:");
    for function in Function::ALL {
        let mode = if function.is_read_only() { "read" } else { "write" };
        println!("  {:<10} {}", function.name().yellow(), mode.dimmed());
    }
    Ok(())
}

fn print_outcomes(outcomes: &[Outcome], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcomes)?),
        OutputFormat::Text => {
            for outcome in outcomes {
                let status = if outcome.is_ok() {
                    outcome.status.to_string().green()
                } else {
                    outcome.status.to_string().red()
                };
                let detail = if outcome.is_ok() {
                    outcome.payload.clone()
                } else {
                    outcome.message.clone()
                };
                let mark = match outcome.expectation_met {
                    Some(true) => " ✓".green().to_string(),
                    Some(false) => " ✗ unexpected status".red().bold().to_string(),
                    None => String::new(),
                };
                println!("{} {} {}{}", status.bold(), outcome.label.cyan(), detail, mark);
            }
        }
    }
    Ok(())
}

fn print_history(key: &str, entries: &[KeyModification], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "key": key, "history": entries });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("History for {}:", key.bold());
            if entries.is_empty() {
                println!("  (none)");
            }
            for entry in entries {
                let value = if entry.is_delete {
                    "<deleted>".dimmed().to_string()
                } else {
                    entry.value_str()
                };
                println!(
                    "  {} {} {}",
                    entry.timestamp.to_rfc3339().dimmed(),
                    entry.tx_id.yellow(),
                    value
                );
            }
        }
    }
    Ok(())
}
