use async_trait::async_trait;
use kosmoplot_protocol::{
    filter::{
        Predicate,
        StarFilter,
    },
    model::star::{
        NewStar,
        Star,
        StarId,
    },
};
use sqlx::{
    types::Json,
    PgPool,
};
use uuid::Uuid;

use super::StarStore;
use crate::error::Error;

/// Stores each star as a JSONB document in the `star` table.
#[derive(Clone, Debug)]
pub struct PgStarStore {
    db: PgPool,
}

impl PgStarStore {
    /// Runs the embedded migrations, creating the `star` table if needed.
    pub async fn new(db: PgPool) -> Result<Self, Error> {
        sqlx::migrate!().run(&db).await?;
        Ok(Self { db })
    }

    pub async fn connect(database_url: &str) -> Result<Self, Error> {
        tracing::debug!("Connecting to database");
        let db = PgPool::connect(database_url).await?;
        Self::new(db).await
    }
}

#[derive(sqlx::FromRow)]
struct StarRow {
    id: Uuid,
    document: Json<NewStar>,
}

impl From<StarRow> for Star {
    fn from(row: StarRow) -> Self {
        Star::new(StarId(row.id), row.document.0)
    }
}

#[async_trait]
impl StarStore for PgStarStore {
    async fn insert(&self, star: NewStar) -> Result<Star, Error> {
        let row = sqlx::query_as::<_, StarRow>(
            r#"
            INSERT INTO star (document)
            VALUES ($1)
            RETURNING id, document
            "#,
        )
        .bind(Json(&star))
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn list(&self, filter: &StarFilter) -> Result<Vec<Star>, Error> {
        let rows = match filter.predicate() {
            Predicate::All => {
                sqlx::query_as::<_, StarRow>(
                    r#"
                    SELECT id, document
                    FROM star
                    ORDER BY seq
                    "#,
                )
                .fetch_all(&self.db)
                .await?
            }
            Predicate::NameIn(names) => {
                sqlx::query_as::<_, StarRow>(
                    r#"
                    SELECT id, document
                    FROM star
                    WHERE document->>'name' = ANY($1)
                    ORDER BY seq
                    "#,
                )
                .bind(names)
                .fetch_all(&self.db)
                .await?
            }
            Predicate::ConstellationIn(constellations) => {
                sqlx::query_as::<_, StarRow>(
                    r#"
                    SELECT id, document
                    FROM star
                    WHERE document->>'constellation' = ANY($1)
                    ORDER BY seq
                    "#,
                )
                .bind(constellations)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: StarId) -> Result<Option<Star>, Error> {
        let row = sqlx::query_as::<_, StarRow>(
            r#"
            SELECT id, document
            FROM star
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: StarId) -> Result<Option<Star>, Error> {
        let row = sqlx::query_as::<_, StarRow>(
            r#"
            DELETE FROM star
            WHERE id = $1
            RETURNING id, document
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn close(&self) {
        tracing::debug!("Closing database pool");
        self.db.close().await;
    }
}
