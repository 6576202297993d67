mod import;

use std::path::PathBuf;

use chrono::Utc;
use color_eyre::eyre::{
    bail,
    Error,
};
use kosmoplot_client::ApiClient;
use kosmoplot_protocol::{
    filter::StarFilter,
    model::star::{
        NewStar,
        Star,
        StarId,
    },
};
use url::Url;

use crate::{
    star::import::import_stars,
    util::format_uptime,
};

/// Manage stars on a running server.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(
        long,
        short,
        env = "KOSMOPLOT_API_URL",
        default_value = "http://127.0.0.1:8000/"
    )]
    api_url: Url,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Create a star.
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        constellation: String,

        #[arg(long)]
        right_ascension: String,

        #[arg(long)]
        declination: String,

        #[arg(long, allow_negative_numbers = true)]
        apparent_magnitude: f64,

        #[arg(long, allow_negative_numbers = true)]
        absolute_magnitude: f64,

        #[arg(long)]
        distance_light_year: i64,

        #[arg(long)]
        spectral_class: Option<String>,
    },
    /// List stars, optionally filtered.
    ///
    /// If any constellation is given, names are ignored.
    List {
        #[arg(long)]
        name: Vec<String>,

        #[arg(long)]
        constellation: Vec<String>,
    },
    /// Show a single star as JSON.
    Get { id: StarId },
    /// Delete a star.
    Delete { id: StarId },
    /// Import stars from a CSV file.
    ///
    /// The header row must name the star fields (`name`, `constellation`,
    /// `right_ascension`, ...). `spectral_class` may be left empty.
    Import { path: PathBuf },
}

impl Args {
    pub async fn run(self) -> Result<(), Error> {
        let api = ApiClient::new(self.api_url)?;

        let Some(command) = self.command
        else {
            let status = api.status().await?;
            println!("Server version: {}", status.server_version);
            let uptime = Utc::now() - status.up_since;
            println!(
                "Uptime: {} (since {})",
                format_uptime(uptime),
                status.up_since
            );
            return Ok(());
        };

        match command {
            Command::Create {
                name,
                constellation,
                right_ascension,
                declination,
                apparent_magnitude,
                absolute_magnitude,
                distance_light_year,
                spectral_class,
            } => {
                let star = api
                    .create_star(&NewStar {
                        name,
                        constellation,
                        right_ascension,
                        declination,
                        apparent_magnitude,
                        absolute_magnitude,
                        distance_light_year,
                        spectral_class,
                    })
                    .await?;
                println!("{}", star.id);
            }
            Command::List {
                name,
                constellation,
            } => {
                let filter = StarFilter {
                    names: name,
                    constellations: constellation,
                };
                for star in api.list_stars(&filter).await? {
                    println!("{}", summary(&star));
                }
            }
            Command::Get { id } => {
                let Some(star) = api.get_star(id).await?
                else {
                    bail!("Star not found: {id}");
                };
                println!("{}", serde_json::to_string_pretty(&star)?);
            }
            Command::Delete { id } => {
                let Some(star) = api.delete_star(id).await?
                else {
                    bail!("Star not found: {id}");
                };
                println!("Deleted {}", summary(&star));
            }
            Command::Import { path } => import_stars(&api, path).await?,
        }

        Ok(())
    }
}

fn summary(star: &Star) -> String {
    format!(
        "{}  {} ({}), {} ly, m = {}",
        star.id, star.name, star.constellation, star.distance_light_year, star.apparent_magnitude
    )
}
