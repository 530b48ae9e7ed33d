// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Railyard CLI entrypoint.
//!
//! Reads a WSN grammar from a file (or stdin) and prints the railroad-diagram IR for one
//! production as JSON or as an indented outline. `RUST_LOG=debug` shows compaction decisions.

use std::collections::BTreeSet;
use std::error::Error;
use std::io::Read;

use railyard::{Diagram, DiagramIr, Grammar, PathKey};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<grammar-file> | -] [--start <name>] [--expand <path-key>]... [--expand-all] [--format json|outline]\n  {program} [<grammar-file> | -] --list-symbols\n  {program} [<grammar-file> | -] [--start <name>] --list-paths\n  {program} [<grammar-file> | -] --canonical\n  {program} --schema\n\nWithout a grammar file (or with `-`) the grammar is read from stdin.\n--start picks the production to draw (default: the first one).\n--expand draws the non-terminal at <path-key> inline; repeat it for several occurrences.\n--expand-all expands every occurrence reported by --list-paths.\n--schema prints the JSON schema of the diagram output."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Json,
    Outline,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Command {
    #[default]
    Diagram,
    ListSymbols,
    ListPaths,
    Canonical,
    Schema,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    input: Option<String>,
    start: Option<String>,
    expand: Vec<PathKey>,
    expand_all: bool,
    format: Option<OutputFormat>,
}

fn set_command(options: &mut CliOptions, command: Command) -> Result<(), ()> {
    if options.command != Command::Diagram {
        return Err(());
    }
    options.command = command;
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--start" => {
                if options.start.is_some() {
                    return Err(());
                }
                options.start = Some(args.next().ok_or(())?);
            }
            "--expand" => {
                let raw = args.next().ok_or(())?;
                let key = PathKey::new(raw).map_err(|_| ())?;
                options.expand.push(key);
            }
            "--expand-all" => {
                if options.expand_all {
                    return Err(());
                }
                options.expand_all = true;
            }
            "--format" => {
                if options.format.is_some() {
                    return Err(());
                }
                let format = match args.next().ok_or(())?.as_str() {
                    "json" => OutputFormat::Json,
                    "outline" => OutputFormat::Outline,
                    _ => return Err(()),
                };
                options.format = Some(format);
            }
            "--list-symbols" => set_command(&mut options, Command::ListSymbols)?,
            "--list-paths" => set_command(&mut options, Command::ListPaths)?,
            "--canonical" => set_command(&mut options, Command::Canonical)?,
            "--schema" => set_command(&mut options, Command::Schema)?,
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    let draws = !options.expand.is_empty() || options.expand_all || options.format.is_some();
    if draws && options.command != Command::Diagram {
        return Err(());
    }
    if options.command == Command::Schema && (options.input.is_some() || options.start.is_some())
    {
        return Err(());
    }

    Ok(options)
}

fn read_grammar(input: Option<&str>) -> Result<Grammar, Box<dyn Error>> {
    let source = match input {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    let grammar: Grammar = source.parse()?;
    log::debug!("parsed {} production(s)", grammar.productions().len());
    Ok(grammar)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "railyard".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        env_logger::init();

        if options.command == Command::Schema {
            let schema = schemars::schema_for!(DiagramIr);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }

        let grammar = read_grammar(options.input.as_deref())?;
        let diagram = Diagram::from_grammar(&grammar, options.start.as_deref());

        match options.command {
            Command::Canonical => println!("{grammar}"),
            Command::ListSymbols => {
                for name in grammar.start_symbols() {
                    println!("{name}");
                }
            }
            Command::ListPaths => {
                for path in diagram.all_expandable_paths()? {
                    println!("{path}");
                }
            }
            Command::Diagram => {
                let mut expanding: BTreeSet<PathKey> = options.expand.into_iter().collect();
                if options.expand_all {
                    expanding.extend(diagram.all_expandable_paths()?);
                }
                let ir = diagram.generate_diagram(&expanding)?;
                match options.format.unwrap_or_default() {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ir)?),
                    OutputFormat::Outline => print!("{}", ir.root.outline()),
                }
            }
            Command::Schema => {}
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("railyard: {err}");
        std::process::exit(1);
    }
}
