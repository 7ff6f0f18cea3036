// src/cli.rs
use std::path::PathBuf;

use crate::accessor::CaseAccessor;
use crate::case::CaseId;
use crate::config::{consts::CONFIG_FILE, AppConfig};
use crate::error::BoxError;
use crate::progress::{Progress, Stage};
use crate::scraper::HttpScraper;

const USAGE: &str = "\
Usage: doms_access [options] <command>

Commands:
  get <case_id>      Print a case record as JSON (scrapes it if not cached)
  list               Print every cached case id
  scrape <case_id>   Fetch a case page into the raw store only

Options:
  -c, --config <file>    Config file (default: ./doms_access.conf if present)
  -d, --dataset <file>   Cached dataset file, overrides dataset_path
  -p, --pretty           Pretty-print JSON output
  -h, --help             Show this help";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Get(CaseId),
    List,
    Scrape(CaseId),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub dataset: Option<PathBuf>,
    pub pretty: bool,
    pub command: Command,
}

pub fn parse_args<I>(args: I) -> Result<Args, BoxError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut dataset = None;
    let mut pretty = false;
    let mut command = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" | "--config"  => config = Some(PathBuf::from(args.next().ok_or("Missing value for --config")?)),
            "-d" | "--dataset" => dataset = Some(PathBuf::from(args.next().ok_or("Missing value for --dataset")?)),
            "-p" | "--pretty"  => pretty = true,
            "-h" | "--help"    => command = Some(Command::Help),
            "get" | "scrape" if command.is_none() => {
                let id = CaseId::from(args.next().ok_or_else(|| format!("Missing case id for {a}"))?);
                command = Some(if a == "get" { Command::Get(id) } else { Command::Scrape(id) });
            }
            "list" if command.is_none() => command = Some(Command::List),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    let command = command.ok_or("No command given (try --help)")?;
    Ok(Args { config, dataset, pretty, command })
}

pub fn run(args: Args) -> Result<(), BoxError> {
    if args.command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut cfg = match &args.config {
        Some(p) => AppConfig::load(p)?,
        None => AppConfig::load_or_default(CONFIG_FILE)?,
    };
    if let Some(d) = args.dataset {
        cfg.dataset_path = d;
    }

    if let Err(e) = crate::log::init(&cfg.log_file, cfg.log_level) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match args.command {
        Command::Get(id) => {
            let mut accessor = CaseAccessor::open(cfg)?;
            let mut progress = StderrProgress;
            let rec = accessor.get_case_with_progress(id, Some(&mut progress))?;
            println!("{}", rec.to_json(args.pretty));
        }
        Command::List => {
            let accessor = CaseAccessor::open(cfg)?;
            for id in accessor.dataset().case_ids() {
                println!("{id}");
            }
        }
        Command::Scrape(id) => {
            let written = HttpScraper::new(&cfg)?.fetch_to_store(&id)?;
            println!("{}", written.display());
        }
        Command::Help => {}
    }
    Ok(())
}

/// Stage lines on stderr so stdout stays pure JSON.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }

    fn stage_done(&mut self, stage: Stage) { eprintln!("  {stage} done"); }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, BoxError> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn get_with_options() {
        let a = args(&["--dataset", "cases.jsonl", "-p", "get", "A100"]).unwrap();
        assert_eq!(a.command, Command::Get(CaseId::from("A100")));
        assert_eq!(a.dataset, Some(PathBuf::from("cases.jsonl")));
        assert!(a.pretty);
        assert_eq!(a.config, None);
    }

    #[test]
    fn missing_command_or_id_is_an_error() {
        assert!(args(&[]).is_err());
        assert!(args(&["get"]).is_err());
        assert!(args(&["list", "get", "1"]).is_err());
        assert!(args(&["--bogus"]).is_err());
    }

    #[test]
    fn help_wins() {
        assert_eq!(args(&["--help"]).unwrap().command, Command::Help);
    }
}
