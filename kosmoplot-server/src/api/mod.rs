mod stars;

use axum::{
    extract::State,
    http::StatusCode,
    response::{
        IntoResponse,
        Response,
    },
    routing,
    Json,
    Router,
};
use kosmoplot_protocol::{
    ErrorResponse,
    ServerStatus,
};

use crate::{
    context::Context,
    error::Error,
};

pub fn router() -> Router<Context> {
    Router::new()
        .route("/status", routing::get(get_status))
        .merge(stars::router())
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(errors) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Rejected star");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse::new(errors)),
                )
                    .into_response()
            }
            Error::InvalidStarId(_) | Error::StarNotFound(_) => {
                tracing::debug!(error = %self, "Star not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse::new("Star not found")),
                )
                    .into_response()
            }
            _ => {
                tracing::error!(error = ?self, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

async fn get_status(State(context): State<Context>) -> Json<ServerStatus> {
    Json(ServerStatus {
        server_version: semver_macro::env_version!("CARGO_PKG_VERSION"),
        up_since: context.up_since,
    })
}
