use std::net::SocketAddr;

use color_eyre::eyre::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::util::shutdown::graceful_shutdown;

/// Run the star catalog server.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(long, env = "ADDRESS", default_value = "127.0.0.1:8000")]
    address: SocketAddr,

    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost/kosmoplotdb"
    )]
    database_url: String,

    /// Keep stars in memory instead of the database. Nothing survives a
    /// restart.
    #[arg(long)]
    in_memory: bool,
}

impl Args {
    pub async fn run(self) -> Result<(), Error> {
        let shutdown = CancellationToken::new();
        graceful_shutdown(shutdown.clone());

        let builder = if self.in_memory {
            tracing::warn!("Using in-memory store");
            kosmoplot_server::Builder::default().with_in_memory()
        }
        else {
            kosmoplot_server::Builder::default()
                .with_connect_db(&self.database_url)
                .await?
        };
        let store = builder.store();
        let router = builder.build()?;

        tracing::info!("Listening at http://{}", self.address);
        let listener = TcpListener::bind(&self.address).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        if let Some(store) = store {
            store.close().await;
        }
        tracing::info!("Server stopped");

        Ok(())
    }
}
