//! Ceaser CLI - CSS `<time>` and `<easing-function>` parser/evaluator

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use serde::Serialize;
#[cfg(feature = "cli")]
use std::io::{self, Read};

#[cfg(feature = "cli")]
use ceaser::{parse_easing, parse_time, EasingSpec, EvalError, EvalResult};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ceaser")]
#[command(version)]
#[command(about = "CSS <time> and <easing-function> parser and evaluator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Classify an easing expression and print its parsed form as JSON
    Parse {
        /// Easing expression (reads from stdin if not provided)
        expr: Option<String>,
    },

    /// Evaluate an easing expression at one or more progress values
    Eval {
        /// Easing expression
        expr: String,

        /// Progress values to evaluate at
        #[arg(long = "at", num_args = 1.., value_name = "T")]
        at: Vec<f64>,

        /// Sample at n+1 evenly spaced points instead of --at values
        #[arg(short, long, conflicts_with = "at")]
        samples: Option<usize>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Parse a CSS <time> literal and print whole milliseconds
    Time {
        /// Time literal, e.g. "1.5s" or "-100ms" (reads stdin if omitted)
        literal: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct SamplePoint {
    t: f64,
    value: f64,
}

#[cfg(feature = "cli")]
fn read_input(arg: Option<String>) -> EvalResult<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim().to_string())
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> EvalResult<()> {
    match cli.command {
        Commands::Parse { expr } => {
            let text = read_input(expr)?;
            let spec = EasingSpec::parse(&text)
                .ok_or_else(|| EvalError::parse(format!("unrecognized easing: {}", text)))?;
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| EvalError::invalid(e.to_string()))?;
            println!("{}", json);
            Ok(())
        }
        Commands::Eval {
            expr,
            at,
            samples,
            json,
        } => {
            let easing = parse_easing(&expr)
                .ok_or_else(|| EvalError::parse(format!("unrecognized easing: {}", expr)))?;
            let points: Vec<f64> = if let Some(n) = samples {
                let divisions = n.max(1) as f64;
                (0..=n).map(|i| i as f64 / divisions).collect()
            } else if at.is_empty() {
                vec![0.0, 0.25, 0.5, 0.75, 1.0]
            } else {
                at
            };
            let results: Vec<SamplePoint> = points
                .iter()
                .map(|&t| SamplePoint {
                    t,
                    value: easing.evaluate(t),
                })
                .collect();
            if json {
                let out = serde_json::to_string_pretty(&results)
                    .map_err(|e| EvalError::invalid(e.to_string()))?;
                println!("{}", out);
            } else {
                for point in &results {
                    println!("{}\t{}", point.t, point.value);
                }
            }
            Ok(())
        }
        Commands::Time { literal } => {
            let text = read_input(literal)?;
            let ms = parse_time(Some(text.as_str()));
            if ms.is_nan() {
                return Err(EvalError::parse(format!("invalid time literal: {}", text)));
            }
            println!("{}", ms as i64);
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ceaser was built without the `cli` feature");
}
