use std::io::{self, BufRead};

use clap::Parser;
use fixity::{
    Calculator,
    interpreter::evaluator::core::{Evaluator, MAX_NESTING_DEPTH},
    validate::validate,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// fixity evaluates arithmetic expressions with prefix `~`, postfix `!` and
/// the infix operators `@ & $ % ^ * / + -`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the fully parenthesized expression tree next to each result.
    #[arg(short, long)]
    ast: bool,

    /// Skip the character and bracket pre-validation.
    #[arg(long)]
    no_validate: bool,

    /// Maximum nesting depth accepted by the parser and the evaluator. Values
    /// above the built-in ceiling are lowered to it.
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Expressions to evaluate. Reads one expression per line from standard
    /// input when none are given. A leading `-` is a literal sign, not a flag.
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set, for example
/// `RUST_LOG=fixity=debug`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Evaluates one expression and prints the outcome. Returns `false` on
/// failure.
fn run(calculator: &Calculator, args: &Args, source: &str) -> bool {
    if !args.no_validate
       && let Err(e) = validate(source, calculator.registry())
    {
        eprintln!("error: {e}");
        return false;
    }

    let outcome = if args.ast {
        calculator.parse(source).and_then(|expr| {
                                    let value = Evaluator::new(calculator.max_depth()).evaluate(&expr)?;
                                    Ok(format!("{expr} = {value}"))
                                })
    } else {
        calculator.evaluate(source)
                  .map(|value| format!("{} = {value}", source.trim()))
    };

    match outcome {
        Ok(line) => {
            println!("{line}");
            true
        },
        Err(e) => {
            eprintln!("error: {e}");
            false
        },
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let calculator = Calculator::new().unwrap_or_else(|e| {
                                          eprintln!("error: {e}");
                                          std::process::exit(2);
                                      })
                                      .with_max_depth(args.max_depth);

    let mut ok = true;
    if args.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.unwrap_or_else(|e| {
                               eprintln!("Failed to read standard input: {e}");
                               std::process::exit(1);
                           });
            if line.trim().is_empty() {
                continue;
            }
            ok &= run(&calculator, &args, &line);
        }
    } else {
        for source in &args.expressions {
            ok &= run(&calculator, &args, source);
        }
    }

    if !ok {
        std::process::exit(1);
    }
}
