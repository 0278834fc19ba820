use std::fs;

use clap::Parser;
use padcalc::{
    evaluator::{evaluate, evaluate_strict},
    keypad::KeypadConfig,
    run_keys,
    util::num::{DEFAULT_PRECISION, MAX_PRECISION, format_number},
};
use tracing_subscriber::{EnvFilter, fmt};

/// padcalc evaluates calculator input strictly left to right, the way a
/// pocket calculator does: `2+3*4` is 20.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells padcalc to read the contents from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Treats the contents as key presses (`0-9 + - * / . C AC =`) and prints
    /// both display lines.
    #[arg(short, long)]
    keys: bool,

    /// Reports division by zero and overflow as errors instead of printing
    /// `NaN` or `inf`.
    #[arg(short, long)]
    strict: bool,

    /// Maximum number of fractional digits in a result (at most 64).
    #[arg(short, long, default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
    precision: usize,

    /// Primary line shown before the first key press.
    #[arg(long, default_value = "0")]
    placeholder: String,

    /// Primary line shown when an evaluation fails.
    #[arg(long, default_value = "Error")]
    error_text: String,

    /// Logs every reduction step and key transition to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn parse_precision(text: &str) -> Result<usize, String> {
    let precision: usize = text.parse().map_err(|e| format!("{e}"))?;
    if precision > MAX_PRECISION {
        return Err(format!("precision must be at most {MAX_PRECISION}"));
    }
    Ok(precision)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "padcalc=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let contents = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let outcome = if args.keys {
        let config = KeypadConfig::default().with_placeholder(args.placeholder.as_str())
                                            .with_error_text(args.error_text.as_str())
                                            .with_precision(args.precision);
        run_keys(&contents, config).map(|screen| format!("{}\n{}", screen.secondary, screen.primary))
                                   .map_err(|e| e.to_string())
    } else {
        let expression = contents.trim();
        let result = if args.strict { evaluate_strict(expression) } else { evaluate(expression) };
        result.map(|value| format_number(value, args.precision))
              .map_err(|e| e.to_string())
    };

    match outcome {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
