//! pdfsweep command-line interface
//!
//! Runs a single sweep over a directory of PDFs. With no arguments it scans
//! `./PDFs` for `.pdf` files, deletes the ones that fail to open or have no
//! pages, and warns about file names with uppercase letters.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use pdfsweep::{DeletePolicy, ExitPolicy, Pipeline, ReportGenerator, ScanConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeletePolicyArg {
    /// Delete every file that fails validation (default)
    All,
    /// Delete only files the PDF parser rejected or that have no pages
    CorruptOnly,
}

impl From<DeletePolicyArg> for DeletePolicy {
    fn from(arg: DeletePolicyArg) -> Self {
        match arg {
            DeletePolicyArg::All => DeletePolicy::All,
            DeletePolicyArg::CorruptOnly => DeletePolicy::CorruptOnly,
        }
    }
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("quiet") {
        LogLevel::Error
    } else {
        matches.get_one::<LogLevel>("verbose").copied().unwrap_or(LogLevel::Info)
    };
    init_logging(log_level);

    info!("🚀 pdfsweep v{} - Starting...", env!("CARGO_PKG_VERSION"));

    let config = config_from_matches(&matches);
    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        return ExitCode::from(2);
    }

    let exit_policy = config.exit_policy;
    let pipeline = Pipeline::new(config);
    let report = match pipeline.execute() {
        Ok(report) => report,
        Err(e) => {
            error!("❌ Sweep failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut success = report.succeeded(exit_policy);

    if let Some(report_path) = matches.get_one::<PathBuf>("report") {
        match ReportGenerator::write_json(&report, report_path) {
            Ok(()) => info!("📋 Report generated: {}", report_path.display()),
            Err(e) => {
                error!("❌ Failed to write report {}: {}", report_path.display(), e);
                success = false;
            }
        }
    }

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_cli() -> Command {
    Command::new("pdfsweep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deletes unreadable PDFs from a directory tree and flags uppercase file names")
        .long_about(
            "Recursively scans ROOT for files ending in the given extension. Every file is \
             opened as a PDF; files that fail to open or have no pages are deleted. Valid \
             files whose names contain uppercase letters are reported with a warning.",
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(pdfsweep::config::DEFAULT_ROOT)
                .help("Directory to scan recursively"),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .value_name("EXT")
                .default_value(pdfsweep::config::DEFAULT_EXTENSION)
                .help("File name suffix to match, case-sensitive; a leading dot is added if missing"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Report invalid files without deleting them"),
        )
        .arg(
            Arg::new("delete-policy")
                .long("delete-policy")
                .value_parser(clap::value_parser!(DeletePolicyArg))
                .default_value("all")
                .help("Which invalid files may be deleted"),
        )
        .arg(
            Arg::new("fail-on-error")
                .long("fail-on-error")
                .action(ArgAction::SetTrue)
                .help("Exit with a failure status if any deletion failed"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Exit with a failure status if any invalid file was found"),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write a JSON report of the run"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_parser(clap::value_parser!(LogLevel))
                .default_value("info")
                .help("Set logging verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Suppress all output except errors"),
        )
}

fn config_from_matches(matches: &ArgMatches) -> ScanConfig {
    let mut config = ScanConfig::default().with_dry_run(matches.get_flag("dry-run"));

    if let Some(root) = matches.get_one::<PathBuf>("root") {
        config = config.with_root(root.clone());
    }
    if let Some(ext) = matches.get_one::<String>("extension") {
        config = config.with_extension(ext.clone());
    }
    if let Some(policy) = matches.get_one::<DeletePolicyArg>("delete-policy") {
        config = config.with_delete_policy((*policy).into());
    }

    let exit_policy = if matches.get_flag("strict") {
        ExitPolicy::FailOnInvalid
    } else if matches.get_flag("fail-on-error") {
        ExitPolicy::FailOnDeleteError
    } else {
        ExitPolicy::AlwaysSucceed
    };
    config.with_exit_policy(exit_policy)
}

fn init_logging(level: LogLevel) {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pdfsweep={}", filter_level)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(std::io::stdout().is_terminal())
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // lopdf panics are caught per file; log them instead of the default stderr banner.
    std::panic::set_hook(Box::new(|info| error!("💥 {}", info)));
}
