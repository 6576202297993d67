mod serve;
mod star;
mod util;

use clap::{
    builder::styling,
    Parser,
};
use color_eyre::eyre::Error;
use tracing_subscriber::EnvFilter;

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Blue.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Kosmoplot command line interface
///
/// `kosmoplot` runs the star catalog server and talks to a running one.
#[derive(Debug, Parser)]
#[command(version = clap::crate_version!(), styles = STYLES)]
pub enum Args {
    Serve(crate::serve::Args),
    Star(crate::star::Args),
}

impl Args {
    pub async fn run(self) -> Result<(), Error> {
        match self {
            Self::Serve(args) => args.run().await?,
            Self::Star(args) => args.run().await?,
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();

    let args = Args::parse();
    args.run().await?;

    Ok(())
}

/// Directives from `RUST_LOG`, or `info` if it is unset or can't be parsed.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
