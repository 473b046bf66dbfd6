/*============================================================
  Synavera Project: Syn-OTA
  Module: synota_core::main
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Entry point for Syn-OTA Core. Reads an OTA update catalog,
    selects the entries for one device, and prints them as a
    report or as wiki table markup.

  Security / Safety Notes:
    Operates within user privileges. Reads one local catalog
    file and writes optional session logs only.

  Dependencies:
    clap for CLI parsing, chrono for log session stamps.

  Operational Scope:
    Invoked by operators maintaining firmware tables, or by
    scripts regenerating them from fresh catalogs.

  Revision History:
    2026-10-18 COD  Authored Syn-OTA Core runtime.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling with deterministic exits
    - Structured logging following Synavera cadence
    - Configurable execution via CLI and config file
============================================================*/

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};

use synota_core::device::{is_device_identifier, is_model_identifier, is_version_bound};
use synota_core::{
    render_report, render_wiki, sort_records, CatalogDocument, DeviceFamily, EntryFilter,
    FilterCriteria, Logger, Result, RowspanGrouper, SynotaConfig, SynotaError, WikiOptions,
};

/// Command-line arguments for Syn-OTA-Core.
#[derive(Debug, Parser)]
#[command(
    name = "Syn-OTA-Core",
    version,
    author = "Synavera Systems",
    about = "OTA update catalog parser for Syn-OTA"
)]
struct Cli {
    /// Include beta releases.
    #[arg(short = 'b', action = ArgAction::SetTrue)]
    betas: bool,
    /// Device identifier, e.g. iPhone8,1.
    #[arg(short = 'd', value_name = "DEVICE", num_args = 0..=1, default_missing_value = "")]
    device: Option<String>,
    /// Board model, e.g. N71AP.
    #[arg(short = 'm', value_name = "MODEL", num_args = 0..=1, default_missing_value = "")]
    model: Option<String>,
    /// Highest version to list (also accepted as `-max`).
    #[arg(long = "max", value_name = "VERSION", num_args = 0..=1, default_missing_value = "")]
    max_version: Option<String>,
    /// Lowest version to list (also accepted as `-min`).
    #[arg(long = "min", value_name = "VERSION", num_args = 0..=1, default_missing_value = "")]
    min_version: Option<String>,
    /// Catalog property list to read.
    #[arg(short = 'f', value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    file: Option<String>,
    /// Emit wiki markup instead of a report.
    #[arg(short = 'w', action = ArgAction::SetTrue)]
    wiki: bool,
    /// Wrap wiki rows in a complete table.
    #[arg(long, action = ArgAction::SetTrue)]
    full_table: bool,
    /// Require `-m` to be listed in each entry's supported models.
    #[arg(long, action = ArgAction::SetTrue)]
    check_model: bool,
    /// Override configuration file path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Explicit log file path.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
    /// Do not write a session log file.
    #[arg(long, action = ArgAction::SetTrue)]
    no_log_file: bool,
    /// Enable verbose logging to stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[Syn-OTA-Core] ERROR: {}", err);
            err.exit_code()
        }
    }
}

fn run() -> Result<ExitCode> {
    let (cli, ignored) = match parse_cli(normalize_legacy_args(std::env::args_os()))? {
        Parsed::Run(cli, ignored) => (cli, ignored),
        Parsed::Exit(code) => return Ok(code),
    };

    // Device shape first, so a broken config file never masks exit 1.
    let device = validated_device(&cli)?;
    let config = SynotaConfig::load_from_optional_path(cli.config.as_deref())?;
    let criteria = build_criteria(&cli, device, &config)?;
    let catalog_path = cli
        .file
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .ok_or(SynotaError::MissingFile)?;

    let log_path = if cli.no_log_file {
        None
    } else {
        let session_stamp = Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        cli.log
            .clone()
            .or_else(|| Some(config.log_dir().join(format!("core_{session_stamp}.log"))))
    };
    let logger = Logger::new(log_path, cli.verbose)?;
    logger.info(
        "INIT",
        format!("Syn-OTA Core v{} awakening.", env!("CARGO_PKG_VERSION")),
    );
    for arg in &ignored {
        logger.warn("ARGS", format!("Ignoring unrecognised argument `{arg}`"));
    }
    logger.debug("CRITERIA", format!("{criteria:?}"));

    let document = CatalogDocument::load(&catalog_path).inspect_err(|err| {
        logger.error("LOAD", err.to_string());
    })?;
    let assets = document.assets()?;
    logger.info(
        "LOAD",
        format!("{} assets in {}", assets.len(), catalog_path.display()),
    );

    let mut records = EntryFilter::new(&criteria, &logger).apply(assets)?;
    logger.info(
        "FILTER",
        format!("{} entries match {}", records.len(), criteria.device),
    );
    sort_records(&mut records);

    let family = DeviceFamily::of(&criteria.device);
    let output = if cli.wiki {
        let options = WikiOptions {
            family,
            full_table: cli.full_table || config.render.full_table,
        };
        render_wiki(&records, RowspanGrouper::count(&records), options)
    } else {
        render_report(&records, family)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    logger.info(
        "SUMMARY",
        format!(
            "entries={} warnings={}",
            records.len(),
            logger.warning_count()
        ),
    );
    logger.info("COMPLETE", "Catalog rendered.");
    logger.finalize()?;

    Ok(ExitCode::SUCCESS)
}

enum Parsed {
    Run(Cli, Vec<String>),
    Exit(ExitCode),
}

/// Parse arguments, dropping unrecognised flags the way the legacy parser
/// skipped them. Help and version requests print and exit cleanly.
fn parse_cli(mut args: Vec<OsString>) -> Result<Parsed> {
    let mut ignored = Vec::new();
    loop {
        let err = match Cli::try_parse_from(args.clone()) {
            Ok(cli) => return Ok(Parsed::Run(cli, ignored)),
            Err(err) => err,
        };
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                return Ok(Parsed::Exit(ExitCode::SUCCESS));
            }
            ErrorKind::UnknownArgument => {
                let position = match err.get(ContextKind::InvalidArg) {
                    Some(ContextValue::String(unknown)) => args
                        .iter()
                        .skip(1)
                        .position(|arg| arg.to_str() == Some(unknown.as_str())),
                    _ => None,
                };
                let Some(position) = position else {
                    return Err(SynotaError::Usage(err.to_string()));
                };
                let dropped = args.remove(position + 1);
                ignored.push(dropped.to_string_lossy().into_owned());
            }
            _ => return Err(SynotaError::Usage(err.to_string())),
        }
    }
}

fn validated_device(cli: &Cli) -> Result<String> {
    let device = cli.device.clone().unwrap_or_default();
    if !is_device_identifier(&device) {
        return Err(SynotaError::InvalidDevice(device));
    }
    Ok(device)
}

/// Validate the remaining identifiers and assemble the filter, in the
/// legacy check order.
fn build_criteria(cli: &Cli, device: String, config: &SynotaConfig) -> Result<FilterCriteria> {
    let check_model = cli.check_model || config.device_needs_model_check(&device)?;
    match &cli.model {
        Some(model) if !is_model_identifier(model) => {
            return Err(SynotaError::InvalidModel(model.clone()));
        }
        None if check_model => return Err(SynotaError::InvalidModel(String::new())),
        _ => {}
    }

    if let Some(max) = cli.max_version.as_ref().filter(|v| !is_version_bound(v)) {
        return Err(SynotaError::InvalidMaxVersion(max.clone()));
    }
    if let Some(min) = cli.min_version.as_ref().filter(|v| !is_version_bound(v)) {
        return Err(SynotaError::InvalidMinVersion(min.clone()));
    }

    Ok(FilterCriteria {
        device,
        model: cli.model.clone(),
        check_model,
        min_version: cli.min_version.clone(),
        max_version: cli.max_version.clone(),
        include_betas: cli.betas || config.filter.include_betas,
    })
}

/// Rewrite the single-dash `-max`/`-min` spellings to their long forms so
/// clap does not read them as `-m ax`.
fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-max") => OsString::from("--max"),
            Some("-min") => OsString::from("--min"),
            _ => arg,
        })
        .collect()
}
