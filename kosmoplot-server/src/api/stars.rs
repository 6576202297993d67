use axum::{
    extract::{
        rejection::JsonRejection,
        Path,
        RawQuery,
        State,
    },
    routing,
    Json,
    Router,
};
use kosmoplot_protocol::{
    filter::StarFilter,
    model::star::{
        NewStar,
        Star,
        StarId,
    },
    validate::ValidationErrors,
};
use serde_json::Value;

use crate::{
    context::Context,
    error::Error,
};

pub fn router() -> Router<Context> {
    Router::new()
        .route("/stars", routing::get(list_stars).post(create_star))
        .route("/stars/", routing::get(list_stars).post(create_star))
        .route("/stars/:id", routing::get(get_star).delete(delete_star))
}

async fn create_star(
    State(context): State<Context>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Star>, Error> {
    let Json(body) =
        body.map_err(|rejection| ValidationErrors::invalid_json(rejection.body_text()))?;
    let star = NewStar::from_json(&body)?;

    let star = context.store.insert(star).await?;
    tracing::info!(id = %star.id, name = %star.name, "Created star");

    Ok(Json(star))
}

async fn list_stars(
    State(context): State<Context>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Star>>, Error> {
    let filter = query
        .as_deref()
        .map(StarFilter::from_query)
        .unwrap_or_default();

    let stars = context.store.list(&filter).await?;
    tracing::debug!(?filter, count = stars.len(), "Listed stars");

    Ok(Json(stars))
}

async fn get_star(
    State(context): State<Context>,
    Path(id): Path<String>,
) -> Result<Json<Star>, Error> {
    let id: StarId = id.parse()?;

    let star = context
        .store
        .get(id)
        .await?
        .ok_or(Error::StarNotFound(id))?;

    Ok(Json(star))
}

async fn delete_star(
    State(context): State<Context>,
    Path(id): Path<String>,
) -> Result<Json<Star>, Error> {
    let id: StarId = id.parse()?;

    let star = context
        .store
        .delete(id)
        .await?
        .ok_or(Error::StarNotFound(id))?;
    tracing::info!(%id, name = %star.name, "Deleted star");

    Ok(Json(star))
}
