use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tc_api::{CalculationService, HttpCalculationClient};
use tc_app::{AppError, AppResult, FormController, FormState, render_result, resolve_client_config};
use tc_core::{Property, Substance, available_second_properties};

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "ThermoCalc CLI - Thermodynamic property calculator", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the calculation service (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported substances
    Substances,
    /// List properties available as the second property
    Properties {
        /// First property already chosen
        #[arg(long)]
        first: Option<Property>,
    },
    /// Calculate the state for one property pair
    Calculate {
        #[arg(long)]
        substance: Substance,
        /// First property (pressure or temperature)
        #[arg(long)]
        first: Property,
        #[arg(long, allow_hyphen_values = true)]
        first_value: String,
        /// Second property (any property except the first)
        #[arg(long)]
        second: Property,
        #[arg(long, allow_hyphen_values = true)]
        second_value: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fill in the form field by field
    Interactive,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Substances => cmd_substances(),
        Commands::Properties { first } => cmd_properties(first),
        Commands::Calculate {
            substance,
            first,
            first_value,
            second,
            second_value,
            json,
        } => {
            let service = connect(cli.config.as_deref(), cli.base_url.as_deref())?;
            cmd_calculate(
                service,
                substance,
                first,
                &first_value,
                second,
                &second_value,
                json,
            )
        }
        Commands::Interactive => {
            let service = connect(cli.config.as_deref(), cli.base_url.as_deref())?;
            cmd_interactive(service)
        }
    }
}

fn connect(
    config_path: Option<&Path>,
    base_url: Option<&str>,
) -> AppResult<HttpCalculationClient> {
    let config = resolve_client_config(config_path, base_url)?;
    tracing::debug!(url = %config.calculate_url(), "using calculation service");
    Ok(HttpCalculationClient::new(config)?)
}

fn cmd_substances() -> AppResult<()> {
    println!("Supported substances:");
    for substance in Substance::ALL {
        println!("  {:<8} {}", substance.key(), substance.display_name());
    }
    Ok(())
}

fn cmd_properties(first: Option<Property>) -> AppResult<()> {
    if let Some(first) = first {
        if !first.is_first_choice() {
            return Err(AppError::InvalidInput(format!(
                "{} cannot be the first property",
                first.label()
            )));
        }
        println!("Second property options after {}:", first.label());
    } else {
        println!("Properties:");
    }
    for property in available_second_properties(first) {
        println!("  {:<16} {}", property.key(), property.label());
    }
    Ok(())
}

fn cmd_calculate<S: CalculationService>(
    service: S,
    substance: Substance,
    first: Property,
    first_value: &str,
    second: Property,
    second_value: &str,
    json: bool,
) -> AppResult<()> {
    let mut controller = FormController::new(service);
    controller.set_substance(Some(substance));
    controller.set_first_property(Some(first));
    if controller.state().first_property != Some(first) {
        return Err(AppError::InvalidInput(format!(
            "{} cannot be the first property",
            first.label()
        )));
    }
    controller.set_first_value(first_value);
    controller.set_second_property(Some(second));
    if controller.state().second_property != Some(second) {
        return Err(AppError::InvalidInput(format!(
            "{} is already the first property",
            second.label()
        )));
    }
    controller.set_second_value(second_value);

    let state = controller.submit();
    print_outcome(state, json)
}

fn cmd_interactive<S: CalculationService>(service: S) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut controller = FormController::new(service);

    let substance = choose(&mut input, "Substance", &Substance::ALL)?;
    controller.set_substance(Some(substance));

    let first = choose(&mut input, "First property", &Property::FIRST)?;
    controller.set_first_property(Some(first));
    let value = prompt(&mut input, &format!("{} value", first.label()))?;
    controller.set_first_value(value);

    let options = controller.available_second_properties();
    let second = choose(&mut input, "Second property", options.as_slice())?;
    controller.set_second_property(Some(second));
    let value = prompt(&mut input, &format!("{} value", second.label()))?;
    controller.set_second_value(value);

    println!("Calculating...");
    let state = controller.submit();
    print_outcome(state, false)
}

fn print_outcome(state: &FormState, json: bool) -> AppResult<()> {
    if let Some(message) = &state.error {
        return Err(AppError::Calculation(message.clone()));
    }
    let Some(result) = &state.results else {
        return Err(AppError::Calculation(tc_app::CALCULATION_FAILED.to_string()));
    };

    if json {
        let text = serde_json::to_string_pretty(result)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        println!("{text}");
    } else {
        print!("{}", render_result(result));
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> AppResult<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InvalidInput("input closed".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Ask until the answer names one of `options`, by number or by name.
fn choose<T>(input: &mut impl BufRead, label: &str, options: &[T]) -> AppResult<T>
where
    T: Copy + PartialEq + Display + FromStr,
{
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    loop {
        let answer = prompt(input, label)?;
        match parse_choice(&answer, options) {
            Some(choice) => return Ok(choice),
            None => println!("Please pick one of the listed options"),
        }
    }
}

fn parse_choice<T>(answer: &str, options: &[T]) -> Option<T>
where
    T: Copy + PartialEq + FromStr,
{
    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    answer
        .parse::<T>()
        .ok()
        .filter(|choice| options.contains(choice))
}
