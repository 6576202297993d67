use std::{
    io::Read,
    path::Path,
};

use color_eyre::eyre::Error;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use kosmoplot_client::ApiClient;
use kosmoplot_protocol::model::star::NewStar;

pub async fn import_stars(api: &ApiClient, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let stars = read_stars(file)?;
    tracing::info!(path = %path.display(), count = stars.len(), "Importing stars");

    let pb = ProgressBar::new(stars.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "{bar:40.blue} {pos}/{len} {msg}",
    )?);

    for star in &stars {
        pb.set_message(star.name.clone());
        api.create_star(star).await?;
        pb.inc(1);
    }

    pb.finish_with_message("done");

    Ok(())
}

pub fn read_stars(reader: impl Read) -> Result<Vec<NewStar>, csv::Error> {
    csv::Reader::from_reader(reader)
        .deserialize::<NewStar>()
        .collect()
}
