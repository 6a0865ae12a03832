use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shortlink::config::Config;
use shortlink::server;

/// In-memory URL shortener with visit analytics.
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN / PORT
    #[arg(short, long)]
    listen: Option<String>,

    /// Public base URL for short links, overrides BASE_URL
    #[arg(short, long)]
    base_url: Option<String>,

    /// Log format (`text` or `json`), overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url.trim_end_matches('/').to_string());
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.log_format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
