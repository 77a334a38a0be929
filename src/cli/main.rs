#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use clap::Parser;
use crossterm::style::Stylize;

use iengine::{
    config::{Config, CycleGuard, Framing},
    io::Problem,
    procedures::{entails, truth_table::TruthTable, Method},
    reports::Report,
    types::err::{self},
};

/// Decide whether a knowledge base entails a query.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A file containing `TELL`, a knowledge base of clauses separated by `;`, `ASK`, and a query.
    file: PathBuf,

    /// The method used to decide entailment.
    #[arg(value_enum, ignore_case = true)]
    method: Method,

    /// Print the truth table enumerated by the TT method, with valid rows highlighted.
    #[arg(long)]
    table: bool,

    /// The greatest number of symbols the TT method will enumerate.
    #[arg(long)]
    symbol_limit: Option<usize>,

    /// The greatest depth of recursion when reading expressions, and for BC and DPLL.
    #[arg(long)]
    recursion_limit: Option<usize>,

    /// How BC guards against cyclic rules.
    #[arg(long, value_enum)]
    cycle_guard: Option<CycleGuard>,

    /// How DPLL reads a search as a verdict.
    #[arg(long, value_enum)]
    framing: Option<Framing>,

    /// Disable pure literal elimination during DPLL.
    #[arg(long)]
    no_pure_literals: bool,

    /// The most verbose level of log to print (to stderr).
    #[cfg(feature = "log")]
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,
}

fn main() {
    let args = Args::parse();

    #[cfg(feature = "log")]
    if let Err(e) = init_logger(args.log_level) {
        eprintln!("Unable to start logging: {e}");
    }

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let problem = match Problem::from_path(&args.file) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error reading problem: {e}");
            std::process::exit(1);
        }
    };

    let report = match args.table && args.method == Method::TT {
        true => tabulate(&problem, &config),
        false => entails(&problem.knowledge_base, &problem.query, args.method, &config),
    };

    match report {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// The default configuration, overridden by any flags given.
fn config_from_args(args: &Args) -> Result<Config, String> {
    let mut config = Config::default();

    if let Some(limit) = args.symbol_limit {
        if !config.symbol_limit.set(limit) {
            let (min, max) = config.symbol_limit.min_max();
            return Err(format!("{} must be within {min}..={max}", config.symbol_limit.name));
        }
    }

    if let Some(limit) = args.recursion_limit {
        if !config.recursion_limit.set(limit) {
            let (min, max) = config.recursion_limit.min_max();
            return Err(format!("{} must be within {min}..={max}", config.recursion_limit.name));
        }
    }

    if let Some(guard) = args.cycle_guard {
        config.cycle_guard.value = guard;
    }

    if let Some(framing) = args.framing {
        config.framing.value = framing;
    }

    if args.no_pure_literals {
        config.pure_literals.value = false;
    }

    Ok(config)
}

/// Prints each row of the truth table of the problem, and returns the report of the table.
fn tabulate(problem: &Problem, config: &Config) -> Result<Report, err::ErrorKind> {
    let table = TruthTable::new(&problem.knowledge_base, &problem.query, config)?;

    let headers = table
        .symbols()
        .iter()
        .map(|symbol| symbol.to_string())
        .chain(problem.knowledge_base.iter().cloned())
        .chain(std::iter::once(problem.query.clone()))
        .collect::<Vec<_>>();

    let widths = headers.iter().map(|header| header.len().max(1)).collect::<Vec<_>>();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| format!("{header:^width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{header_line}");
    println!("{}", "-".repeat(header_line.len()));

    let report = table.check(|row| {
        let line = row
            .values
            .iter()
            .chain(&row.clauses)
            .chain(std::iter::once(&row.query))
            .zip(&widths)
            .map(|(&value, &width)| {
                let value = match value {
                    true => "T",
                    false => "F",
                };
                format!("{value:^width$}")
            })
            .collect::<Vec<_>>()
            .join(" | ");

        match row.valid {
            true => println!("{}", line.green()),
            false => println!("{line}"),
        }
    });

    Ok(report)
}

#[cfg(feature = "log")]
fn init_logger(level: log::LevelFilter) -> Result<(), String> {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} [{t}] {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| e.to_string())?;

    log4rs::init_config(config).map_err(|e| e.to_string())?;
    Ok(())
}
