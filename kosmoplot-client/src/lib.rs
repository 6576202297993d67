use std::fmt::Display;

use kosmoplot_protocol::{
    filter::StarFilter,
    model::star::{
        NewStar,
        Star,
        StarId,
    },
    validate::ValidationErrors,
    ErrorResponse,
    ServerStatus,
};
use reqwest::{
    Response,
    StatusCode,
};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error")]
    Reqwest(#[from] reqwest::Error),

    #[error("the server rejected the star")]
    Rejected(#[from] ValidationErrors),

    #[error("not a base url: {0}")]
    InvalidApiUrl(Url),
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    api_url: Url,
}

impl ApiClient {
    pub fn new(api_url: Url) -> Result<Self, Error> {
        if api_url.cannot_be_a_base() {
            return Err(Error::InvalidApiUrl(api_url));
        }
        let client = reqwest::Client::new();
        Ok(Self { client, api_url })
    }

    fn url(&self) -> UrlBuilder {
        UrlBuilder {
            url: self.api_url.clone(),
        }
    }

    pub async fn status(&self) -> Result<ServerStatus, Error> {
        let status: ServerStatus = self
            .client
            .get(self.url().add("status").build())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(status)
    }

    pub async fn create_star(&self, star: &NewStar) -> Result<Star, Error> {
        let response = self
            .client
            .post(self.url().add("stars").add("").build())
            .json(star)
            .send()
            .await?;

        if response.status() == StatusCode::UNPROCESSABLE_ENTITY {
            let rejection: ErrorResponse<ValidationErrors> = response.json().await?;
            return Err(rejection.detail.into());
        }

        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn list_stars(&self, filter: &StarFilter) -> Result<Vec<Star>, Error> {
        let mut url = self.url().add("stars").add("").build();
        let query = filter.to_query();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let stars: Vec<Star> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(stars)
    }

    /// Returns `None` if the server has no star with this id.
    pub async fn get_star(&self, id: StarId) -> Result<Option<Star>, Error> {
        let response = self
            .client
            .get(self.url().add("stars").add(id).build())
            .send()
            .await?;
        optional_star(response).await
    }

    /// Returns the deleted star, or `None` if there was nothing to delete.
    pub async fn delete_star(&self, id: StarId) -> Result<Option<Star>, Error> {
        let response = self
            .client
            .delete(self.url().add("stars").add(id).build())
            .send()
            .await?;
        optional_star(response).await
    }
}

async fn optional_star(response: Response) -> Result<Option<Star>, Error> {
    if response.status() == StatusCode::NOT_FOUND {
        tracing::debug!(url = %response.url(), "Star not found");
        return Ok(None);
    }
    Ok(Some(response.error_for_status()?.json().await?))
}

struct UrlBuilder {
    url: Url,
}

impl UrlBuilder {
    /// Appends a path segment. An empty segment produces a trailing slash.
    pub fn add(mut self, segment: impl Display) -> Self {
        if let Ok(mut segments) = self.url.path_segments_mut() {
            segments.pop_if_empty().push(&segment.to_string());
        }
        self
    }

    pub fn build(self) -> Url {
        self.url
    }
}
