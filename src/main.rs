use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use spendbook::cli::dispatch_line;
use spendbook::config::{Settings, SpendbookPaths};
use spendbook::exchange::{ExchangeRateApi, RateProvider};
use spendbook::export::export_journal_csv;
use spendbook::models::Period;
use spendbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Free-text personal ledger",
    long_about = "spendbook keeps a running balance and per-month expense journals, \
                  driven by free-text command lines: \"250 taxi home\" records an \
                  expense, \"+ 1000 salary\" an income, \"bl\" shows the balance, \
                  \"month\" lists the current journal."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, env = "SPENDBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Write a period's journal as CSV to stdout and exit (YYYY.MM)
    #[arg(long, value_name = "PERIOD")]
    export: Option<String>,

    /// A single command line to run (omit to start the interactive loop)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    line: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => SpendbookPaths::with_base_dir(dir),
        None => SpendbookPaths::new()?,
    };
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    if let Some(period) = cli.export {
        let period = Period::parse(&period).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let entries = storage.journals.read_all(period)?;
        export_journal_csv(io::stdout().lock(), &entries)?;
        return Ok(());
    }

    let client = settings.exchange_api_key.as_ref().map(|key| ExchangeRateApi::new(key));
    let rates: Option<&dyn RateProvider> = client.as_ref().map(|c| c as &dyn RateProvider);

    if !cli.line.is_empty() {
        let line = cli.line.join(" ");
        println!("{}", dispatch_line(&line, &storage, &settings, rates));
        return Ok(());
    }

    repl(&storage, &settings, rates)
}

/// Interactive loop: one command line per iteration, quit/exit to stop
fn repl(storage: &Storage, settings: &Settings, rates: Option<&dyn RateProvider>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        println!("{}", dispatch_line(line, storage, settings, rates));
    }

    Ok(())
}
