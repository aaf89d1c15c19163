use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kopo",
    about = "Run kopo chaincode against an in-memory ledger host",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a TOML scenario of init and invoke transactions
    Run(RunArgs),
    /// Run a single invocation, optionally after an init
    Exec(ExecArgs),
    /// List invocable function names
    Functions,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to the scenario file
    pub scenario: PathBuf,
    /// Print the history of these keys after the run
    #[arg(long = "history")]
    pub history_keys: Vec<String>,
}

#[derive(Args)]
pub struct ExecArgs {
    /// Initialize two balances first: A AVAL B BVAL
    #[arg(long, num_args = 4, value_names = ["A", "AVAL", "B", "BVAL"])]
    pub init: Option<Vec<String>>,
    /// Skip argument and history diagnostics
    #[arg(long)]
    pub quiet: bool,
    /// Function to invoke
    pub function: String,
    /// Function arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
