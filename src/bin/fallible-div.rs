//! Division demo: prints the quotient or the failure

use clap::Parser;
use fallible::{Diagnostic, divide, exit_codes::*};
use serde_json::json;
use std::{env, panic, process};

const VERSION: &str = fallible::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Divide two integers")]
struct Args {
    /// Dividend
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    dividend: i64,

    /// Divisor
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    divisor: i64,

    /// Print the result or diagnostic as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error, json:<level>)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    // Wrap main logic in catch_unwind for extra safety
    match panic::catch_unwind(run) {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in fallible-div");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("fallible-div {}", fallible::version::full_version());
        return EXIT_SUCCESS;
    }

    // Usage errors get their own exit code; --help is not a failure
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                EXIT_INVALID_ARGS
            } else {
                EXIT_SUCCESS
            };
        }
    };

    // Initialize logging with level if provided
    fallible::logger::JsonLogger::init_from(args.log_level.as_deref());
    log::debug!("dividing {} by {}", args.dividend, args.divisor);

    // The quotient is only reachable on success
    match divide(args.dividend, args.divisor) {
        Ok(result) => {
            if args.json {
                println!("{}", json!({ "result": result }));
            } else {
                println!("result: {result}");
            }
            EXIT_SUCCESS
        }
        Err(failure) => {
            if args.json {
                let diagnostic = Diagnostic::from(&failure);
                println!(
                    "{}",
                    serde_json::to_string(&diagnostic).unwrap_or_default()
                );
            } else {
                println!("{failure}");
            }
            exit_code_for(failure.classification())
        }
    }
}
