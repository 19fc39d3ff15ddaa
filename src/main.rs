// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::process;

use anyhow::{anyhow, Result};
use chord_nebula::generators::{ChordGenerator, ChordShape, TargetGenerator};
use chord_nebula::music::scale::{Key, Mode};
use chord_nebula::replay::Script;
use chord_nebula::{Session, SessionConfig};
use tracing::Level;

fn print_usage() {
    println!("Chord Nebula - ear-training chord game engine");
    println!();
    println!("Usage: chord-nebula [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <FILE>                   Session configuration (YAML)");
    println!("  --script <FILE>                   Replay a YAML step script against a session");
    println!("  --progression <KEY> <MODE> [N]    Print the next N chords (default 12)");
    println!("  --verbose                         Debug logging");
    println!("  --help                            Show this help message");
}

fn print_progression(tonic: &str, mode: &str, count: usize) -> Result<()> {
    let mode = Mode::from_str(mode).ok_or_else(|| anyhow!("Invalid mode: {}", mode))?;
    let key = Key::new(tonic, mode)?;
    let mut generator = ChordGenerator::new(key.clone(), ChordShape::Voiced);

    println!("{}:", key);
    for _ in 0..count {
        let target = generator.next_target();
        let degree = target.degree.map_or("", |d| d.label);
        let notes: Vec<String> = target.display_notes.iter().map(|n| n.to_string()).collect();
        println!("  {:<5} {:<8} {}", degree, target.label, notes.join(" "));
    }
    Ok(())
}

fn replay(config_path: Option<&str>, script_path: &str) -> Result<()> {
    let config = match config_path {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig {
            input_device: Some("script".to_string()),
            ..Default::default()
        },
    };
    let script = Script::load(script_path)?;

    let mut session = Session::start(&config)?;
    for event in script.run(&mut session)? {
        println!("{}", event);
    }

    println!();
    println!("Score: {}  Lives: {}", session.score(), session.lives());
    Ok(())
}

fn require<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Chord Nebula - ear-training chord game engine");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut config_path = None;
    let mut script_path = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                config_path = Some(require(&args, i + 1, "--config"));
                i += 1;
            }
            "--script" => {
                script_path = Some(require(&args, i + 1, "--script"));
                i += 1;
            }
            "--progression" => {
                let tonic = require(&args, i + 1, "--progression");
                let mode = require(&args, i + 2, "--progression");
                let count: usize = match args.get(i + 3).filter(|a| !a.starts_with("--")) {
                    Some(n) => n
                        .parse()
                        .map_err(|_| anyhow!("Invalid chord count: {}", n))?,
                    None => 12,
                };
                print_progression(tonic, mode, count)?;
                return Ok(());
            }
            "--verbose" | "-v" => {}
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    match script_path {
        Some(script) => replay(config_path, script)?,
        None => {
            let config = match config_path {
                Some(path) => SessionConfig::load(path)?,
                None => SessionConfig::default(),
            };
            let validated = config.validate()?;
            println!(
                "Configuration OK: {}, {}, input \"{}\"",
                validated.key(), validated.level(), validated.input_device()
            );
        }
    }

    Ok(())
}
