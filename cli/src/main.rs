mod logging;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use cli_table::{Cell, Style, Table, print_stdout};
use colored::Colorize;
use engine::command::Outcome;
use engine::command::parser::parse_command;
use engine::engine::Session;
use engine::storage::record::Record;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "food-catalog", about = "Sorted in-memory food catalog")]
struct Args {
    /// Run commands from a file instead of the interactive prompt
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    logging::init_logging(&args.log_level);

    debug!(script = ?args.script, "starting food catalog");
    let mut session = Session::new();

    let status: Result<(), Box<dyn std::error::Error>> = match &args.script {
        Some(path) => run_script(&mut session, path).map_err(Into::into),
        None => run_repl(&mut session).map_err(Into::into),
    };

    let released = session.finish();
    println!("The number of deleted food items is: {}", released);

    if let Err(e) = status {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

fn run_script(session: &mut Session, path: &Path) -> engine::error::Result<()> {
    let source = fs::read_to_string(path)?;

    for line in source.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("food> {}", line);
        run_line(session, line);
    }
    Ok(())
}

fn run_repl(session: &mut Session) -> Result<(), rustyline::error::ReadlineError> {
    let mut rl = rustyline::DefaultEditor::new()?;

    println!("Food catalog. Type commands, 'help' or 'exit'.");

    loop {
        let readline = rl.readline("food> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                let _ = rl.add_history_entry(line);

                if line == "help" {
                    print_help();
                    continue;
                }
                run_line(session, line);
            }
            Err(rustyline::error::ReadlineError::Interrupted)
            | Err(rustyline::error::ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn run_line(session: &mut Session, line: &str) {
    // 1. Parse
    match parse_command(line) {
        // 2. Execute
        Ok(cmd) => match session.execute(cmd) {
            Ok(outcome) => print_outcome(outcome),
            Err(e) => println!("{}", format!("Error: {}", e).red()),
        },
        Err(e) => println!("{}", format!("Command error: {}", e).red()),
    }
}

fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Message(msg) => println!("{}", msg),
        Outcome::Listing(records) if records.is_empty() => println!("The catalog is empty."),
        Outcome::Listing(records) => print_listing(&records),
    }
}

fn print_listing(records: &[Record]) {
    let table = records
        .iter()
        .map(|record| {
            vec![
                record.name.as_str().cell(),
                record.id.cell(),
                record.price.cell(),
            ]
        })
        .collect::<Vec<_>>()
        .table()
        .title(vec![
            "Name".cell().bold(true),
            "Id".cell().bold(true),
            "Price".cell().bold(true),
        ]);

    if let Err(e) = print_stdout(table) {
        eprintln!("Failed to print table: {}", e);
    }
}

fn print_help() {
    println!(
        "\
add <name> <id> <price>     insert a food record
find <id>                   show the record with this id
remove id <id>              delete by id
remove name <name>          delete every record with this name
rename <id> <new name>      rename and re-sort a record
reprice <id> <price>        change a record's price
list [table|json]           show the catalog in order
clear                       delete every record"
    );
}
