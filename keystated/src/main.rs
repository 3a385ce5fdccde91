//! # Keyboard State Host
//!
//! Main entry point for replaying key scripts.

use keystated::{HostRuntime, HostRuntimeConfig, KeyScript, OutputFormat};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    if config.script.is_none() {
        let mut script_text = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut script_text) {
            eprintln!("Failed to read script from stdin: {}", e);
            process::exit(1);
        }
        config.script = Some(script_text);
    }

    let mut runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    let reports = runtime.run().unwrap_or_else(|e| {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    });

    for report in &reports {
        match runtime.render(report) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Output error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> Result<HostRuntimeConfig, String> {
    let mut config = HostRuntimeConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_path = &args[i];
                let script_text = fs::read_to_string(script_path)
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--format" | "-f" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --format".to_string());
                }
                config.format = match args[i].as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => return Err(format!("Invalid format: {}", other)),
                };
            }
            "--player" | "-p" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --player".to_string());
                }
                let player = KeyScript::parse_player(&args[i]).map_err(|e| e.to_string())?;
                config.player = Some(player);
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --script <FILE>      Key script file (default: read stdin)");
    eprintln!("  -f, --format <FORMAT>    Report format: text (default) or json");
    eprintln!("  -p, --player <N>         Player index for snapshot lines without one");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace event handling.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script demos/shift_scenario.keys", program);
    eprintln!("  echo 'tap DPAD_CENTER' | {} --format json", program);
}
