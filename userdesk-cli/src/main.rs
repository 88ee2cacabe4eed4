use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use userdesk::{
    HttpUserRemote, InMemoryRemote, UiOptions, UserDesk, UserRemote,
    app::{DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD, DEFAULT_TITLE},
    remote::DEFAULT_ENDPOINT,
};

const DEFAULT_LOG_FILTER: &str = "userdesk=info";

#[derive(Debug, Parser)]
#[command(
    name = "userdesk",
    version,
    about = "Manage a remote user collection from the terminal"
)]
struct Cli {
    /// Collection endpoint (json-server style: ?_page=N&_limit=M, /{id})
    #[arg(
        short = 'u',
        long = "url",
        env = "USERDESK_URL",
        value_name = "URL",
        default_value = DEFAULT_ENDPOINT
    )]
    url: String,

    /// Users requested per page
    #[arg(
        long = "page-size",
        value_name = "N",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    page_size: u32,

    /// Rows left below the viewport at which the next page is requested
    #[arg(
        long = "scroll-threshold",
        value_name = "ROWS",
        default_value_t = DEFAULT_SCROLL_THRESHOLD
    )]
    scroll_threshold: usize,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Work against an in-memory collection of COUNT sample users instead of the network
    #[arg(long = "offline", value_name = "COUNT")]
    offline: Option<usize>,

    /// Artificial delay for every offline call
    #[arg(long = "latency-ms", value_name = "MS", default_value_t = 0, requires = "offline")]
    latency_ms: u64,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long = "log-file", env = "USERDESK_LOG", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Hide the key binding hints
    #[arg(long = "no-help")]
    no_help: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let remote = build_remote(&cli)?;
    let options = UiOptions::default()
        .with_page_size(cli.page_size)
        .with_scroll_threshold(cli.scroll_threshold)
        .with_help(!cli.no_help);

    let desk = UserDesk::from_arc(remote)
        .with_title(cli.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()))
        .with_options(options);

    desk.run().await.map_err(|err| eyre!("{err:#}"))
}

fn build_remote(cli: &Cli) -> Result<Arc<dyn UserRemote>> {
    if let Some(count) = cli.offline {
        let mut remote = InMemoryRemote::seeded(count);
        if cli.latency_ms > 0 {
            remote = remote.with_latency(Duration::from_millis(cli.latency_ms));
        }
        tracing::info!(count, latency_ms = cli.latency_ms, "using offline collection");
        return Ok(Arc::new(remote));
    }

    let remote = HttpUserRemote::parse(&cli.url)
        .wrap_err_with(|| format!("invalid collection endpoint '{}'", cli.url))?;
    tracing::info!(endpoint = %remote.endpoint(), "using remote collection");
    Ok(Arc::new(remote))
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_follow_library_constants() {
        let cli = Cli::try_parse_from(["userdesk"]).unwrap();
        assert_eq!(cli.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(cli.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
        assert!(cli.offline.is_none());
    }

    #[test]
    fn latency_requires_offline_mode() {
        assert!(Cli::try_parse_from(["userdesk", "--latency-ms", "50"]).is_err());
        let cli =
            Cli::try_parse_from(["userdesk", "--offline", "40", "--latency-ms", "50"]).unwrap();
        assert_eq!(cli.offline, Some(40));
        assert_eq!(cli.latency_ms, 50);
    }
}
