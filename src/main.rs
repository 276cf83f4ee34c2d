use clap::Parser;
use pair_sum::utils::{logger, validation::Validate};
use pair_sum::{
    explain, explain_error, find_solution, format_positions, parse_sequence, parse_target,
    CliConfig, OutputFormat, PairSumError,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pair-sum CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ pair-sum failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", explain_error(&e));
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), PairSumError> {
    config.validate()?;

    let numbers = parse_sequence(&config.numbers)?;
    let target = parse_target(&config.target)?;
    tracing::debug!("Parsed {} numbers, target {}", numbers.len(), target);

    let solution = find_solution(&numbers, target)?;
    let positions = solution.positions;
    tracing::info!("✅ Found pair at positions {:?}", positions.as_array());

    match config.format {
        OutputFormat::Text => {
            println!("Output: {}", format_positions(&positions));
            println!("Explanation: {}", explain(&solution));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&solution)?);
        }
    }

    Ok(())
}
