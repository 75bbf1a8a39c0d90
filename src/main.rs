use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;

// Use library instead of local modules
use lab_exercises::sessions::FAREWELL;
use lab_exercises::{logging, run_interactive, Config, Exercise, Prompter, DEFAULT_PRECISION};

/// Introductory lab exercises, each an interactive terminal program.
#[derive(Parser)]
#[command(name = "lab-exercises")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the built-in demonstration sections.
    #[arg(long, env = "LAB_NO_DEMO")]
    no_demo: bool,

    /// Decimal places for temperature results.
    #[arg(long, env = "LAB_PRECISION", default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Print bills as JSON instead of a receipt.
    #[arg(long)]
    json: bool,

    /// Log filter directive (logs go to stderr).
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Factorial of a non-negative integer (iterative and recursive).
    Factorial,
    /// Sort a list of numbers or words both ways.
    Sort,
    /// Tiered power bill for a customer class.
    Bill,
    /// In-memory user registration and login.
    Auth,
    /// Convert between Celsius, Fahrenheit and Kelvin.
    Temperature,
    /// Classify an age into child/teen/adult/senior.
    Age,
    /// Enter and display a student record.
    Student,
    /// Pick an exercise from a menu (default).
    Menu,
}

impl Commands {
    fn exercise(self) -> Option<Exercise> {
        match self {
            Commands::Factorial => Some(Exercise::Factorial),
            Commands::Sort => Some(Exercise::Sort),
            Commands::Bill => Some(Exercise::Bill),
            Commands::Auth => Some(Exercise::Auth),
            Commands::Temperature => Some(Exercise::Temperature),
            Commands::Age => Some(Exercise::Age),
            Commands::Student => Some(Exercise::Student),
            Commands::Menu => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::default()
        .with_precision(cli.precision)
        .with_demo(!cli.no_demo)
        .with_json(cli.json)
        .with_log_filter(cli.log_level);

    logging::init(&config.log_filter)?;
    tracing::debug!(?config, "starting lab exercises");

    // Ctrl-C ends any session with the same farewell as closed input
    ctrlc::set_handler(|| {
        tracing::info!("interrupted by signal");
        println!("\n{}", FAREWELL);
        std::process::exit(0);
    })
    .context("Failed to install Ctrl-C handler")?;

    let exercise = cli.command.and_then(Commands::exercise);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_interactive(exercise, &mut prompter, &config).context("Terminal I/O failed")?;

    Ok(())
}
