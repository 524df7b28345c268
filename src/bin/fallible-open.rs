//! File-open demo: reports errno-style diagnostics when the file is missing

use clap::Parser;
use fallible::{Diagnostic, diagnostics::errno, exit_codes::*, open_resource, report};
use serde_json::json;
use std::{env, panic, path::PathBuf, process};

const VERSION: &str = fallible::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Open a file for reading")]
struct Args {
    /// File to open
    #[arg(default_value = "example.txt")]
    path: PathBuf,

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
            eprintln!("Fatal: Unhandled panic in fallible-open");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("fallible-open {}", fallible::version::full_version());
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

    errno::clear_last_error();
    let outcome = open_resource(&args.path);
    // Read immediately: the next operation on this thread overwrites it.
    let code = errno::last_error();

    match outcome {
        Ok(resource) => {
            if args.json {
                println!("{}", json!({ "opened": args.path.display().to_string() }));
            } else {
                println!("open file success");
            }
            // process file...
            resource.release();
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
                println!("Failed to open file: {}", args.path.display());
                println!("ErrNo: {code}");
                // perror-style line on stderr, strerror-style line on stdout
                eprintln!("{}", report("Error", &failure));
                println!("Error: {}", failure.description().unwrap_or_default());
            }
            exit_code_for(failure.classification())
        }
    }
}
