use kosmoplot_protocol::{
    model::star::{
        ParseStarIdError,
        StarId,
    },
    validate::ValidationErrors,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid star")]
    Validation(#[from] ValidationErrors),

    #[error("invalid star id")]
    InvalidStarId(#[from] ParseStarIdError),

    #[error("star not found: {0}")]
    StarNotFound(StarId),

    #[error("no star store configured")]
    NoStore,

    #[error("sqlx error")]
    Sqlx(#[from] sqlx::Error),

    #[error("sqlx migrate error")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),
}
