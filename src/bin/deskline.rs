use log::{info, warn};
use std::env;
use std::process::ExitCode;

use deskline::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use deskline::endpoint::process_endpoints;
use deskline::numeric::{format_compact, format_fixed, parse_smart_input};

const USAGE: &str = "usage:
  deskline endpoints
  deskline format <value>
  deskline fixed <value> [precision]
  deskline parse <text> [context]";

fn main() -> ExitCode {
    // Initialize env before logging so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    env_logger::init();

    match dotenv {
        Ok(path) => info!("Environment variables loaded from {}", path.display()),
        Err(e) => warn!("Failed to load .env file: {}", e),
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["endpoints"] => {
            let endpoints = process_endpoints();
            match serde_json::to_string_pretty(endpoints) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to serialize endpoints: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        ["format", value] => println!("{}", format_compact(*value)),
        ["fixed", value] => println!("{}", format_fixed(*value, DEFAULT_PRECISION)),
        ["fixed", value, precision] => match precision.parse::<usize>() {
            Ok(precision) if precision <= MAX_PRECISION => {
                println!("{}", format_fixed(*value, precision))
            }
            _ => {
                eprintln!(
                    "precision must be an integer between 0 and {}, got '{}'",
                    MAX_PRECISION, precision
                );
                return ExitCode::from(2);
            }
        },
        ["parse", text] => println!("{}", parse_smart_input(*text, None)),
        ["parse", text, context] => match context.trim().parse::<f64>() {
            Ok(context) => println!("{}", parse_smart_input(*text, Some(context))),
            Err(_) => {
                eprintln!("context must be a number, got '{}'", context);
                return ExitCode::from(2);
            }
        },
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    }

    ExitCode::SUCCESS
}
