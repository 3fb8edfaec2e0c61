use clap::{Parser, Subcommand};
use serde::Serialize;
use unitswap::config::{ToggleConfig, ValidationMode};
use unitswap::display::{DisplaySnapshot, MemoryDisplay};
use unitswap::toggle::UnitToggle;
use unitswap::units::{self, UnitSystem};

#[derive(Parser)]
#[command(name = "unitswap")]
#[command(about = "Switch body measurements between metric and imperial units", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the toggle control on a metric measurement card
    Toggle {
        /// Displayed height text in centimeters
        #[arg(long)]
        height: String,

        /// Displayed weight text in kilograms
        #[arg(long)]
        weight: String,

        /// Number of times to press the toggle
        #[arg(short, long, default_value_t = 1)]
        times: usize,

        /// Reject values that are not plain numbers
        #[arg(long)]
        strict: bool,

        /// Print each state as JSON
        #[arg(long)]
        json: bool,

        /// Config file (TOML)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print imperial display text for a metric height and weight
    Convert {
        /// Height in centimeters
        height_cm: f64,

        /// Weight in kilograms
        weight_kg: f64,
    },

    /// Convert imperial height text (e.g., "5 ft 11 in") to centimeters
    ToMetric {
        /// Height text
        height: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Toggle {
            height,
            weight,
            times,
            strict,
            json,
            config,
        } => toggle_card(&height, &weight, times, strict, json, config.as_deref()),
        Commands::Convert {
            height_cm,
            weight_kg,
        } => {
            convert(height_cm, weight_kg);
            Ok(())
        }
        Commands::ToMetric { height } => to_metric(&height),
    };

    if let Err(e) = result {
        log::warn!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct ToggleStep {
    press: usize,
    is_imperial: bool,
    system: UnitSystem,
    display: DisplaySnapshot,
}

fn toggle_card(
    height: &str,
    weight: &str,
    times: usize,
    strict: bool,
    json: bool,
    config_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => ToggleConfig::load_from_file(path)?,
        None => ToggleConfig::empty(),
    };
    if strict {
        config.validation = ValidationMode::Strict;
    }

    let mut display = MemoryDisplay::metric_page(height, weight);
    let mut toggle = UnitToggle::with_config(&config);

    let mut steps = vec![ToggleStep {
        press: 0,
        is_imperial: toggle.is_imperial(),
        system: toggle.system(),
        display: display.snapshot(),
    }];

    for press in 1..=times {
        toggle
            .toggle_units(&mut display)
            .map_err(|e| format!("Toggle {} failed: {}", press, e))?;
        steps.push(ToggleStep {
            press,
            is_imperial: toggle.is_imperial(),
            system: toggle.system(),
            display: display.snapshot(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        println!("[{}] {}", step.press, step.system);
        println!("{}\n", step.display);
    }

    Ok(())
}

fn convert(height_cm: f64, weight_kg: f64) {
    let height = units::centimeters_to_feet_inches(height_cm);
    let pounds = units::kilograms_to_pounds(weight_kg);

    println!("Height: {}", units::format_imperial_height(&height));
    println!("Weight: {} lb", units::to_fixed(pounds, 2));
}

fn to_metric(height: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = units::parse_imperial_height(height)?;
    println!("{} cm", units::to_fixed(parsed.to_centimeters(), 2));
    Ok(())
}
