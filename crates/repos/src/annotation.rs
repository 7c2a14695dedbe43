use sqlx::Postgres;

use crate::error::{RepoError, handle_sql_error};
use data::annotation::{Annotation, NewAnnotation};

pub struct AnnotationsRepo {}

impl AnnotationsRepo {
    pub async fn get_by_id(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        id: uuid::Uuid,
    ) -> Result<Option<Annotation>, RepoError> {
        sqlx::query_as::<_, Annotation>(
            r#"
                SELECT *
                FROM annotations
                WHERE annotations.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(handle_sql_error)
    }

    /// All annotations stored for an image, in whatever order the database
    /// returns them. An unknown image id yields an empty list.
    pub async fn get_by_image_id(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        image_id: &str,
    ) -> Result<Vec<Annotation>, RepoError> {
        sqlx::query_as::<_, Annotation>(
            r#"
                SELECT *
                FROM annotations
                WHERE image_id = $1
            "#,
        )
        .bind(image_id)
        .fetch_all(executor)
        .await
        .map_err(handle_sql_error)
    }

    pub async fn create(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        annotation: NewAnnotation,
    ) -> Result<uuid::Uuid, RepoError> {
        sqlx::query_scalar::<_, uuid::Uuid>(
            r#"
                INSERT INTO annotations
                  (
                    image_id,
                    class_name,
                    class_id,
                    confidence,
                    x_min,
                    y_min,
                    x_max,
                    y_max,
                    segmentation
                  )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING
                  id
            "#,
        )
        .bind(&annotation.image_id)
        .bind(&annotation.class_name)
        .bind(annotation.class_id)
        .bind(annotation.confidence)
        .bind(annotation.x_min)
        .bind(annotation.y_min)
        .bind(annotation.x_max)
        .bind(annotation.y_max)
        .bind(&annotation.segmentation)
        .fetch_one(executor)
        .await
        .map_err(handle_sql_error)
    }

    /// Drops the entire annotation set of an image. Returns the number of
    /// rows removed.
    pub async fn delete_by_image_id(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        image_id: &str,
    ) -> Result<u64, RepoError> {
        sqlx::query(
            r#"
                DELETE FROM annotations
                WHERE image_id = $1
            "#,
        )
        .bind(image_id)
        .execute(executor)
        .await
        .map_err(handle_sql_error)
        .map(|result| result.rows_affected())
    }

    pub async fn count(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
    ) -> Result<i64, RepoError> {
        sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*)
                FROM annotations
            "#,
        )
        .fetch_one(executor)
        .await
        .map_err(handle_sql_error)
    }
}
