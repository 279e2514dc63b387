use apron::report::{EMERGENCY, aircraft_rows, gate_rows};
use apron::scenario::Scenario;
use apron::{ControlTower, SimResult};
use clap::Parser;
use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::Tabled;
use tabled::settings::Style;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,

    /// Run this many ticks, print the tables and exit instead of starting the shell
    #[arg(short, long, value_name = "N")]
    ticks: Option<u32>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow(),
            Level::Info => "info".green(),
            Level::Debug => "debug".blue(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!("[{}] {}", tag, record.args());
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: &str) -> io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait()?;
    Ok(())
}

fn print_table<T: Tabled>(rows: Vec<T>, empty: &str) {
    if rows.is_empty() {
        println!("{}", empty);
        return;
    }
    let count = rows.len();
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    let rendered = table.to_string();
    if count > 20 {
        if let Err(e) = paginate(&rendered) {
            log::warn!("pager unavailable: {}", e);
            println!("{}", rendered);
        }
    } else {
        println!("{}", rendered);
    }
}

fn print_aircraft(tower: &ControlTower) {
    let mut rows = aircraft_rows(tower);
    for row in rows.iter_mut().filter(|r| r.status == EMERGENCY) {
        row.callsign = row.callsign.red().bold().to_string();
        row.status = row.status.red().bold().to_string();
    }
    print_table(rows, "No aircraft under jurisdiction.");
}

fn print_gates(tower: &ControlTower) {
    for terminal in tower.terminals().iter().filter(|t| t.has_emergency()) {
        println!("{}", terminal.to_string().red());
    }
    print_table(gate_rows(tower), "No gates registered.");
}

/// Runs one shell command against the tower; returns false when the shell should exit.
fn run_command(tower: &mut ControlTower, parts: &[&str]) -> SimResult<bool> {
    match parts[0] {
        "ls" => print_aircraft(tower),
        "gates" => print_gates(tower),
        "tick" => {
            let ticks = parts.get(1).and_then(|n| n.parse::<u32>().ok()).unwrap_or(1);
            for _ in 0..ticks {
                tower.tick();
            }
            println!("Advanced {} tick(s).", ticks);
        }
        "advance" => {
            if let Some(callsign) = parts.get(1) {
                let task = tower.advance_task(callsign)?;
                println!("{} is now on {} ({}).", callsign, task, task.kind.description());
            } else {
                println!("Usage: advance <callsign>");
            }
        }
        "emergency" => {
            if let Some(callsign) = parts.get(1) {
                let aircraft = tower.aircraft_mut(callsign)?;
                aircraft.declare_emergency();
                println!("{}", aircraft.to_string().red().bold());
            } else {
                println!("Usage: emergency <callsign>");
            }
        }
        "clear" => {
            if let Some(callsign) = parts.get(1) {
                let aircraft = tower.aircraft_mut(callsign)?;
                aircraft.clear_emergency();
                println!("{}", aircraft);
            } else {
                println!("Usage: clear <callsign>");
            }
        }
        "help" | "?" => {
            println!("\nAvailable Commands:");
            println!("  ls                  - List aircraft under jurisdiction");
            println!("  gates               - List terminals, gates and their occupants");
            println!("  tick [n]            - Advance the simulation by [n] ticks (default 1)");
            println!("  advance <callsign>  - Move <callsign> on to its next task");
            println!("  emergency <callsign> - Declare an emergency on <callsign>");
            println!("  clear <callsign>    - Clear the emergency on <callsign>");
            println!("  help / ?            - Show this help menu");
            println!("  exit / quit         - Exit the simulator\n");
        }
        "exit" | "quit" => return Ok(false),
        _ => println!("Unknown command: {}", parts[0]),
    }
    Ok(true)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut tower = Scenario::load_from_file(&args.scenario)?.into_tower()?;
    println!("Tower online. Loaded scenario from {}", args.scenario.display());

    if let Some(ticks) = args.ticks {
        for _ in 0..ticks {
            tower.tick();
        }
        print_aircraft(&tower);
        print_gates(&tower);
        return Ok(());
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "gates", "tick", "advance", "emergency", "clear", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match run_command(&mut tower, &parts) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => println!("{}", format!("Error: {}", e).red()),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
