use clap::{Parser, Subcommand};
use std::process::ExitCode;

use pattern_demos::application::demos::Demo;
use pattern_demos::application::errors::DemoError;
use pattern_demos::domain::traits::Console;
use pattern_demos::infrastructure::adapters::{ConsoleAdapter, ScriptedConsole};
use pattern_demos::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "pattern-demos")]
#[command(about = "Classic design patterns as small console demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "pattern-demos.yaml")]
    config: String,

    /// Pre-scripted answer for a prompt (repeatable, used in order)
    #[arg(short, long = "answer", value_name = "TEXT")]
    answers: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Command pattern: smart-home remote with undo
    Command,
    /// Template method pattern: preparing hot drinks
    Template,
    /// Mediator pattern: chat room
    Mediator,
    /// Strategy and observer patterns: payments and currency rates
    Strategy,
    /// Decorator and adapter patterns: coffee shop orders and payments
    Decorator,
    /// Run every demo in order
    All,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let demos: Vec<Demo> = match cli.command {
        Commands::Command => vec![Demo::SmartHome],
        Commands::Template => vec![Demo::Recipes],
        Commands::Mediator => vec![Demo::Chat],
        Commands::Strategy => vec![Demo::Payments],
        Commands::Decorator => vec![Demo::CoffeeShop],
        Commands::All => Demo::ALL.to_vec(),
        Commands::Version => {
            println!("pattern-demos v{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Commands::InitConfig => return init_config(),
    };

    let result = load_config(&cli.config).and_then(|config| run_with_console(&demos, &config, cli.answers));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Demo failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run against the terminal, or against the scripted answers if any were given
fn run_with_console(demos: &[Demo], config: &Config, answers: Vec<String>) -> Result<(), DemoError> {
    if answers.is_empty() {
        return run_demos(demos, config, &ConsoleAdapter::new());
    }

    let console = ScriptedConsole::new(answers).with_echo(true);
    let result = run_demos(demos, config, &console);
    if console.remaining_answers() > 0 {
        tracing::warn!("{} scripted answers were not used", console.remaining_answers());
    }
    result
}

/// Defaults when the file is missing; a file that exists must be valid
fn load_config(config_path: &str) -> Result<Config, DemoError> {
    if !std::path::Path::new(config_path).exists() {
        tracing::debug!("No config at {}, using defaults", config_path);
        return Ok(Config::default());
    }

    let config = Config::load(config_path)?;
    tracing::info!("Loaded config from {}", config_path);
    Ok(config)
}

fn run_demos(demos: &[Demo], config: &Config, console: &dyn Console) -> Result<(), DemoError> {
    for demo in demos {
        demo.run(config, console)?;
    }
    tracing::info!("Finished {} demo(s)", demos.len());
    Ok(())
}

fn init_config() -> ExitCode {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to pattern-demos.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
