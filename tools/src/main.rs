//! report-runner: headless runner for the staffing & attrition analytics core.
//!
//! Usage:
//!   report-runner --db hr.db --report missing_personnel --year 2026
//!   report-runner --demo-seed 42 --report attrition_pareto --format json
//!   report-runner --db hr.db --import dataset.json
//!   report-runner --db hr.db --ipc-mode

use anyhow::Result;
use chrono::Datelike;
use staffing_core::{
    config::ReportConfig,
    dataset::Dataset,
    demo,
    engine::ReportEngine,
    error::AnalyticsError,
    reports::ReportParams,
    store::HrStore,
    table::ReportTable,
    types::FiscalYear,
};
use std::env;
use std::io::{self, BufRead, Write};

/// Reports whose year parameter is a historical cutoff rather than a
/// planning year.
const CUTOFF_REPORTS: &[&str] = &["attrition_pareto", "questionnaire"];

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    ListReports,
    Report {
        name: String,
        #[serde(default)]
        year: Option<FiscalYear>,
    },
    Quit,
}

#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let report = flag_value(&args, "--report");
    let year: Option<FiscalYear> = parse_arg(&args, "--year");
    let demo_seed: Option<u64> = parse_arg(&args, "--demo-seed");
    let import = flag_value(&args, "--import");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let list = args.iter().any(|a| a == "--list");
    let format = match flag_value(&args, "--format") {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    let config = match ReportConfig::load(data_dir) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{e}; using built-in report config");
            ReportConfig::default()
        }
    };

    let store = if db == ":memory:" {
        HrStore::in_memory()?
    } else {
        HrStore::open(db)?
    };
    store.migrate()?;

    if let Some(path) = import {
        let summary = Dataset::load(path)?.import_into(&store)?;
        if !ipc_mode {
            println!("imported {path}: {summary:?}");
        }
    }
    if let Some(seed) = demo_seed {
        let last_year = chrono::Local::now().year();
        let first_year = config.attrition_cutoff_year.min(last_year);
        demo::generate(seed, first_year, last_year)?.import_into(&store)?;
    }

    let engine = ReportEngine::build(&config);

    if ipc_mode {
        return run_ipc_loop(&engine, &store, &config);
    }

    if list {
        for info in engine.catalog() {
            let year = if info.needs_year { "  [year]" } else { "" };
            println!("{:<22} {}{year}", info.name, info.title);
        }
        return Ok(());
    }

    match report {
        Some("all") => {
            for info in engine.catalog() {
                let params = params_for(info.name, year, &config);
                match engine.run(info.name, &store, &params) {
                    Ok(table) => print_table(&table, format)?,
                    Err(e) => eprintln!("{}: {e}", info.name),
                }
            }
        }
        Some(name) => {
            let params = params_for(name, year, &config);
            let table = engine.run(name, &store, &params)?;
            print_table(&table, format)?;
        }
        None if import.is_none() && demo_seed.is_none() => {
            eprintln!("nothing to do: pass --report <name|all>, --list, --import or --ipc-mode");
        }
        None => {}
    }

    Ok(())
}

fn run_ipc_loop(engine: &ReportEngine, store: &HrStore, config: &ReportConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("skipping unparseable IPC command: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::ListReports => {
                writeln!(stdout, "{}", serde_json::to_string(&engine.catalog())?)?;
            }
            IpcCommand::Report { name, year } => {
                let params = params_for(&name, year, config);
                match engine.run(&name, store, &params) {
                    Ok(table) => writeln!(stdout, "{}", serde_json::to_string(&table)?)?,
                    Err(e) => {
                        let err_json = serde_json::json!({
                            "error": e.to_string(),
                            "kind": error_kind(&e),
                            "report": name,
                        });
                        writeln!(stdout, "{}", err_json)?;
                    }
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Year policy lives here, not in the core: planning reports default to
/// next calendar year, cutoff reports to the configured attrition cutoff.
fn params_for(report: &str, year: Option<FiscalYear>, config: &ReportConfig) -> ReportParams {
    let year = year.unwrap_or_else(|| {
        if CUTOFF_REPORTS.contains(&report) {
            config.attrition_cutoff_year
        } else {
            chrono::Local::now().year() + 1
        }
    });
    ReportParams::for_year(year)
}

fn error_kind(e: &AnalyticsError) -> &'static str {
    match e {
        AnalyticsError::MissingYearConstant { .. } => "missing_year_constant",
        AnalyticsError::EmptyDataset { .. } => "empty_dataset",
        AnalyticsError::DataIntegrity { .. } => "data_integrity",
        AnalyticsError::YearRequired { .. } => "year_required",
        AnalyticsError::ReportNotFound { .. } => "report_not_found",
        AnalyticsError::Database(_) => "database",
        AnalyticsError::Serialization(_) => "serialization",
        AnalyticsError::Other(_) => "other",
    }
}

fn print_table(table: &ReportTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", table.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(table)?),
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    flag_value(args, flag).and_then(|v| v.parse().ok())
}
