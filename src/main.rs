use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use finance_tracker::audit::AuditLogger;
use finance_tracker::cli::Shell;
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::form::ParsePolicy;
use finance_tracker::services::FinanceService;
use finance_tracker::store::FinanceStore;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Track income and expenses in an interactive shell",
    long_about = "finance-tracker keeps a list of income and expense records for the \
                  length of a session. Records are listed, added, edited and deleted \
                  from an interactive prompt; nothing is saved when the session ends."
)]
struct Cli {
    /// Start with no records instead of the sample data
    #[arg(long)]
    empty: bool,

    /// Reject form submissions with unparseable fields instead of keeping previous values
    #[arg(long)]
    strict: bool,

    /// Append every change to this audit log file
    #[arg(long, value_name = "PATH")]
    audit_log: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_default(&paths)?;
    if cli.empty {
        settings.seed_sample_data = false;
    }
    if cli.strict {
        settings.parse_policy = ParsePolicy::Strict;
    }
    tracing::debug!(?settings, base_dir = %paths.base_dir().display(), "loaded settings");

    let store = if settings.seed_sample_data {
        FinanceStore::with_sample_data()
    } else {
        FinanceStore::new()
    };

    let audit = match cli.audit_log {
        Some(path) => Some(AuditLogger::new(path)),
        None if settings.audit_enabled => Some(AuditLogger::new(paths.audit_log())),
        None => None,
    };

    let mut service = FinanceService::new(&store).with_policy(settings.parse_policy);
    if let Some(logger) = &audit {
        service = service.with_audit(logger.clone());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(service, settings, stdin.lock(), stdout.lock());
    if let Some(logger) = audit {
        shell = shell.with_audit_log(logger);
    }

    shell.run()?;
    Ok(())
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
