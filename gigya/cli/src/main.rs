//! Gigya CLI - call Gigya API methods from the shell

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result};
use gigya::{GigyaClient, GigyaConfig, TracingSink};
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod output;

/// Call a Gigya API method and print the response envelope
#[derive(Parser)]
#[command(name = "gigya", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,

    /// Gigya data center domain (overrides GIGYA_DOMAIN)
    #[arg(long, value_name = "DOMAIN")]
    domain: Option<String>,

    /// Method to call, e.g. socialize_getUserInfo
    #[arg(value_name = "METHOD")]
    method: String,

    /// Parameters as key=value; a bare key is sent as nil
    #[arg(value_name = "PARAMS")]
    params: Vec<String>,
}

const AFTER_HELP: &str = "\
CREDENTIALS:
  GIGYA_API_KEY and GIGYA_API_SECRET must be set, either in the environment
  or in a .env file in the current directory.

OUTPUT:
  The response envelope is printed as JSON. `null` means Gigya reported that
  a limit was reached; `false` means no response body was received.

  Examples:
    gigya socialize_getUserInfo UID=_guid_abc
    gigya gm_notifyAction UID=_guid_abc action=login
    gigya --domain eu1.gigya.com comments_getTopStreams
";

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,gigya=info".to_string(),
            2 => "info,gigya=debug".to_string(),
            _ => "debug,gigya=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    if !gigya::responds_to(&cli.method) {
        bail!("undefined method `{}`: expected socialize_*, gm_* or comments_*", cli.method);
    }
    let params = args::collect_params(&cli.params).map_err(|e| eyre!(e))?;

    let mut config = GigyaConfig::from_env()?;
    if let Some(domain) = cli.domain {
        config = config.with_domain(domain)?;
    }

    debug!(domain = config.domain(), "Loaded Gigya configuration");
    let client = GigyaClient::builder(config).sink(TracingSink).build()?;
    let outcome = client.call(&cli.method, params).await?;

    output::print_outcome(outcome, cli.pretty)?;
    Ok(())
}
