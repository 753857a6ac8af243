mod display;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use subhunt_core::config::{DEFAULT_DAYS_BACK, DEFAULT_MAX_RESULTS, DEFAULT_PACING_MS};
use subhunt_core::{ScanConfig, SubscriptionRecord, build_query, clamp_days_back};
use subhunt_mail::{GmailClient, JsonMailbox, MailService, Scanner};
use subhunt_report::{Summary, default_file_name, export_csv};

#[derive(Parser)]
#[command(name = "subhunt", version, about = "Find recurring charges hiding in your mailbox")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the mailbox search expression for a lookback window.
    Query {
        /// Lookback window in days (clamped to 30..=180).
        #[arg(long, env = "SUBHUNT_DAYS_BACK", default_value_t = DEFAULT_DAYS_BACK)]
        days: u32,
    },
    /// Scan a Gmail mailbox with an already-issued access token.
    Scan {
        /// OAuth access token with the gmail.readonly scope.
        #[arg(long, env = "GMAIL_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
        /// Override the Gmail API base URL.
        #[arg(long, env = "GMAIL_API_BASE_URL")]
        base_url: Option<String>,
        #[command(flatten)]
        scan: ScanArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Scan a JSON export of message metadata instead of a live mailbox.
    Audit {
        /// JSON array of `{id, headers: [{name, value}], snippet}` objects.
        file: PathBuf,
        #[command(flatten)]
        scan: ScanArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct ScanArgs {
    /// Lookback window in days (clamped to 30..=180).
    #[arg(long, env = "SUBHUNT_DAYS_BACK", default_value_t = DEFAULT_DAYS_BACK)]
    days: u32,
    /// Maximum number of messages processed per run.
    #[arg(long, env = "SUBHUNT_MAX_RESULTS", default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,
    /// Delay after each message fetch, in milliseconds.
    #[arg(long, env = "SUBHUNT_PACE_MS", default_value_t = DEFAULT_PACING_MS)]
    pace_ms: u64,
    /// Number of message fetches in flight at once.
    #[arg(long, env = "SUBHUNT_CONCURRENCY", default_value_t = 1)]
    concurrency: usize,
    /// Abort the whole run after this many seconds.
    #[arg(long, env = "SUBHUNT_TIMEOUT_SECS", default_value_t = 120)]
    timeout_secs: u64,
}

impl ScanArgs {
    fn config(&self) -> ScanConfig {
        ScanConfig {
            days_back: clamp_days_back(self.days),
            max_results: self.max_results,
            pacing: Duration::from_millis(self.pace_ms),
            concurrency: self.concurrency,
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Write the records to this CSV file.
    #[arg(long, conflicts_with = "export")]
    csv: Option<PathBuf>,
    /// Write the records to subscription_scan_YYYYMMDD.csv in the current directory.
    #[arg(long)]
    export: bool,
    /// Print the summary and records as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn csv_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.csv {
            return Some(path.clone());
        }
        self.export
            .then(|| PathBuf::from(default_file_name(chrono::Local::now().date_naive())))
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    records: &'a [SubscriptionRecord],
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    tracing::info!("subhunt v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Query { days } => {
            println!("{}", build_query(clamp_days_back(days)));
        }
        Command::Scan {
            token,
            base_url,
            scan,
            output,
        } => {
            let client = match base_url {
                Some(url) => GmailClient::with_base_url(url, token),
                None => GmailClient::new(token),
            };
            run_scan(&client, &scan, &output).await?;
        }
        Command::Audit { file, scan, output } => {
            let mailbox = JsonMailbox::load(&file)
                .await
                .with_context(|| format!("loading {}", file.display()))?;
            run_scan(&mailbox, &scan, &output).await?;
        }
    }
    Ok(())
}

async fn run_scan(
    service: &dyn MailService,
    args: &ScanArgs,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let config = args.config();
    tracing::info!(
        days_back = config.days_back,
        max_results = config.max_results,
        concurrency = config.concurrency,
        "starting scan"
    );

    let scanner = Scanner::new(service, config);
    let records = tokio::time::timeout(Duration::from_secs(args.timeout_secs), scanner.scan())
        .await
        .map_err(|_| anyhow::anyhow!("scan timed out after {}s", args.timeout_secs))?
        .context("mail service error")?;

    let summary = Summary::from_records(&records);
    if output.json {
        let report = JsonReport {
            summary: &summary,
            records: &records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_report(&summary, &records);
    }

    if let Some(path) = output.csv_path() {
        export_csv(&records, &path).with_context(|| format!("writing {}", path.display()))?;
        eprintln!("  Exported {} records to {}", records.len(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scan_args_are_clamped_into_config() {
        let cli = Cli::try_parse_from([
            "subhunt", "audit", "x.json", "--days", "400", "--pace-ms", "0",
        ])
        .unwrap();
        let Command::Audit { scan, .. } = cli.command else {
            panic!("expected audit");
        };
        let cfg = scan.config();
        assert_eq!(cfg.days_back, 180);
        assert_eq!(cfg.pacing, Duration::ZERO);
        assert_eq!(cfg.max_results, 60);
    }

    #[test]
    fn defaults_match_scan_config() {
        let cli = Cli::try_parse_from(["subhunt", "audit", "x.json"]).unwrap();
        let Command::Audit { scan, .. } = cli.command else {
            panic!("expected audit");
        };
        assert_eq!(scan.config(), ScanConfig::default());
    }

    #[test]
    fn csv_and_export_conflict() {
        let res = Cli::try_parse_from(["subhunt", "audit", "x.json", "--csv", "a.csv", "--export"]);
        assert!(res.is_err());
    }

    #[test]
    fn explicit_csv_path_wins() {
        let output = OutputArgs {
            csv: Some(PathBuf::from("out.csv")),
            export: false,
            json: false,
        };
        assert_eq!(output.csv_path(), Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn export_uses_dated_file_name() {
        let output = OutputArgs {
            csv: None,
            export: true,
            json: false,
        };
        let path = output.csv_path().unwrap();
        let name = path.to_string_lossy();
        assert!(name.starts_with("subscription_scan_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn no_csv_by_default() {
        let output = OutputArgs {
            csv: None,
            export: false,
            json: false,
        };
        assert!(output.csv_path().is_none());
    }
}
