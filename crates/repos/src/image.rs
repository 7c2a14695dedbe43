use sqlx::Postgres;

use crate::error::{RepoError, handle_sql_error};
use data::image::{Image, NewImage};

pub struct ImagesRepo {}

impl ImagesRepo {
    pub async fn get_by_id(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        id: &str,
    ) -> Result<Option<Image>, RepoError> {
        sqlx::query_as::<_, Image>(
            r#"
                SELECT *
                FROM images
                WHERE images.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(handle_sql_error)
    }

    pub async fn create(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        image: NewImage,
    ) -> Result<String, RepoError> {
        sqlx::query_scalar::<_, String>(
            r#"
                INSERT INTO images
                  (
                    id,
                    file_name
                  )
                VALUES ($1, $2)
                RETURNING
                  id
            "#,
        )
        .bind(&image.id)
        .bind(&image.file_name)
        .fetch_one(executor)
        .await
        .map_err(handle_sql_error)
    }

    /// Flips the labeled flag. The replace flow only ever sets it to true;
    /// it is never cleared when an image ends up with zero annotations.
    pub async fn set_labeled(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        id: &str,
        is_labeled: bool,
    ) -> Result<(), RepoError> {
        sqlx::query(
            r#"
                UPDATE images
                SET is_labeled = $2
                WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(is_labeled)
        .execute(executor)
        .await
        .map_err(handle_sql_error)?;
        Ok(())
    }
}
