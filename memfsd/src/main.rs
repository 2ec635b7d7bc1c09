//! # MemFS Host Daemon
//!
//! Main entry point for the filesystem host.

use memfsd::{HostMode, HostRuntime, HostRuntimeConfig};
use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    if let Err(e) = runtime.run() {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<HostRuntimeConfig, String> {
    let mut config = HostRuntimeConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--listen" | "-l" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --listen".to_string());
                }
                config.listen = args[i].clone();
            }
            "--shell" => {
                config.mode = HostMode::Shell;
            }
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
    eprintln!("  -l, --listen <ADDR>      Listen address for HTTP mode (default 127.0.0.1:4080)");
    eprintln!("  --shell                  Run an interactive shell instead of the HTTP server");
    eprintln!("  -s, --script <FILE>      Seed script applied before starting");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --listen 0.0.0.0:4080", program);
    eprintln!("  {} --shell --script seed.mfs", program);
}
