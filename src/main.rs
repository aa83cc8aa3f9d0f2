use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chick_it::cli::{
    exit_code, resolve_output, EXIT_CONFIG, EXIT_DOMAIN, EXIT_INPUT, EXIT_OUTPUT, EXIT_SUCCESS,
};
use chick_it::config::{self, ColorMode, OutputFormat};
use chick_it::freshness::{self, Measurement};
use chick_it::input;
use chick_it::output::{self, EvaluatedEgg};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    #[command(flatten)]
    Run(RunCommand),
}

/// Commands that read the config file before running.
#[derive(Subcommand, Debug)]
enum RunCommand {
    /// Evaluate a single egg
    #[command(allow_negative_numbers = true)]
    Eval {
        /// Weight (W) in grams
        weight: f64,
        /// Floating score (F): 0, 1, or 2
        float_score: f64,
        /// Candling score (C): 0, 1, or 2
        candle_score: f64,
    },
    /// Evaluate every measurement in a YAML file
    Batch {
        /// Path to the measurements file
        file: PathBuf,
        /// Validate all measurements first and evaluate none if any is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Enter a measurement interactively
    Prompt,
    /// Show the formula and grade thresholds
    Formula,
}

#[derive(Parser, Debug)]
#[command(name = "chick-it")]
#[command(about = "Egg Freshness Index (FI) calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/chick-it/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// When to use colors (overrides config)
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    let code = match cli.command {
        // init writes the config, so it must not require one to exist
        Commands::Init { force } => run_init(config_path, force),
        Commands::Run(command) => {
            let config = match config::load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let (format, color) = resolve_output(cli.format, cli.color, &config);
            let use_colors = output::should_use_colors(color);
            debug!(?format, use_colors, "resolved output settings");

            run_command(command, format, use_colors)
        }
    };

    std::process::exit(code);
}

fn run_init(config_path: Option<PathBuf>, force: bool) -> i32 {
    let path = match config_path {
        Some(p) => p,
        None => match config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                return EXIT_CONFIG;
            }
        },
    };

    match config::write_default_config(&path, force) {
        Ok(()) => {
            println!("Config written to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}

fn run_command(command: RunCommand, format: OutputFormat, use_colors: bool) -> i32 {
    match command {
        RunCommand::Eval {
            weight,
            float_score,
            candle_score,
        } => {
            let measurement = Measurement::new(weight, float_score, candle_score);
            run_single(&measurement, format, use_colors)
        }
        RunCommand::Batch { file, strict } => run_batch(&file, strict, format, use_colors),
        RunCommand::Prompt => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            match input::prompt_measurement(&mut stdin.lock(), &mut stdout) {
                Ok(measurement) => {
                    println!();
                    run_single(&measurement, format, use_colors)
                }
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    EXIT_INPUT
                }
            }
        }
        RunCommand::Formula => {
            println!("{}", output::format_thresholds(use_colors));
            EXIT_SUCCESS
        }
    }
}

fn run_single(measurement: &Measurement, format: OutputFormat, use_colors: bool) -> i32 {
    if !measurement.weight.is_finite() || measurement.weight <= 0.0 {
        warn!(weight = measurement.weight, "weight should be a positive number of grams");
    }

    let eggs = vec![EvaluatedEgg::evaluate(measurement)];

    if format == OutputFormat::Table {
        return match &eggs[0].outcome {
            Ok(result) => {
                println!("{}", output::format_result_detail(measurement, result, use_colors));
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("{}", output::format_error(e, use_colors));
                EXIT_DOMAIN
            }
        };
    }

    print_rows(&eggs, format, use_colors)
}

fn run_batch(file: &Path, strict: bool, format: OutputFormat, use_colors: bool) -> i32 {
    let batch = match input::load_batch(file) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    if strict {
        if let Err(errors) = freshness::validate_measurements(&batch.measurements) {
            eprintln!("Measurement errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            return EXIT_DOMAIN;
        }
    }

    let eggs: Vec<EvaluatedEgg> = batch.measurements.iter().map(EvaluatedEgg::evaluate).collect();
    print_rows(&eggs, format, use_colors)
}

/// Print rows in the chosen format. Exits non-zero if any row failed.
fn print_rows(eggs: &[EvaluatedEgg], format: OutputFormat, use_colors: bool) -> i32 {
    let rendered = match format {
        OutputFormat::Table => output::format_scored_table(eggs, use_colors),
        OutputFormat::Tsv => output::format_tsv(eggs),
        OutputFormat::Json => match output::format_json(eggs) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_OUTPUT;
            }
        },
    };
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    let code = exit_code(eggs);
    if code != EXIT_SUCCESS {
        let failed = eggs.iter().filter(|egg| egg.outcome.is_err()).count();
        debug!(failed, total = eggs.len(), "some measurements were invalid");
    }
    code
}
