use clap::Parser;
use pair_sum::utils::{
    logger,
    validation::{validate_path, Validate},
};
use pair_sum::{PairSumError, ProblemSet, Verdict};

#[derive(Parser)]
#[command(name = "pair-sum-batch")]
#[command(about = "Solve every problem in a TOML problem set")]
struct Args {
    /// Path to TOML problem set
    #[arg(short, long, default_value = "problems.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Exit with status 1 when a problem's expected answer is not returned
    #[arg(long)]
    fail_on_mismatch: bool,
}

/// Logs the failure with its context and exits with the error's category code.
fn exit_with(e: PairSumError, context: String) -> ! {
    let code = e.exit_code();
    let suggestion = e.recovery_suggestion();
    let message = e.user_friendly_message();

    let err = anyhow::Error::new(e).context(context);
    tracing::error!("❌ {:#}", err);
    tracing::error!("💡 Suggestion: {}", suggestion);
    eprintln!("❌ {}", message);
    std::process::exit(code);
}

fn main() {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting pair-sum batch solver");
    tracing::info!("📁 Loading problem set from: {}", args.config);

    let problem_set = match validate_path("config", &args.config)
        .and_then(|_| ProblemSet::from_file(&args.config))
    {
        Ok(problem_set) => problem_set,
        Err(e) => exit_with(e, format!("Failed to load problem set '{}'", args.config)),
    };

    if let Err(e) = problem_set.validate() {
        exit_with(e, "Problem set validation failed".to_string());
    }

    tracing::info!(
        "✅ Problem set '{}' loaded with {} problems",
        problem_set.problem_set.name,
        problem_set.problems.len()
    );

    let reports = problem_set.solve_all();
    let mut mismatches = 0;

    for report in &reports {
        let marker = match report.verdict {
            Verdict::Solved | Verdict::Matched => "✅",
            Verdict::Failed => "⚠️",
            Verdict::Mismatched => {
                mismatches += 1;
                "❌"
            }
        };
        println!("{} {}: {}", marker, report.name, report.message);
    }

    println!(
        "📊 {} problems, {} solved, {} mismatched",
        reports.len(),
        reports.iter().filter(|r| r.positions.is_some()).count(),
        mismatches
    );

    if args.fail_on_mismatch && mismatches > 0 {
        tracing::error!("❌ {} problem(s) did not match their expected answer", mismatches);
        std::process::exit(1);
    }
}
