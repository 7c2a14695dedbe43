use std::sync::Arc;

use sqlx::PgPool;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use common::settings::Settings;
use data::annotation::{Annotation, NewAnnotation};
use data::image::{Image, NewImage};
use repos::annotation::AnnotationsRepo;
use repos::image::ImagesRepo;

/// Create a test image with a random id
pub async fn create_test_image(pool: &PgPool) -> Image {
    create_test_image_with_id(pool, &format!("img_{}", Uuid::new_v4())).await
}

/// Create a test image with a specific id
pub async fn create_test_image_with_id(pool: &PgPool, id: &str) -> Image {
    let new_image = NewImage {
        id: id.to_string(),
        file_name: format!("{id}.jpg"),
    };

    let image_id = ImagesRepo::create(pool, new_image)
        .await
        .expect("Failed to insert test image");

    ImagesRepo::get_by_id(pool, &image_id)
        .await
        .expect("Failed to retrieve created image")
        .expect("Created image not found")
}

/// Create a test annotation for an image, creating the image if none is given
pub async fn create_test_annotation(pool: &PgPool, image_id: Option<&str>) -> Annotation {
    let image_id = match image_id {
        Some(id) => id.to_string(),
        None => create_test_image(pool).await.id,
    };

    let new_annotation = NewAnnotation {
        image_id,
        class_name: "car".to_string(),
        class_id: 2,
        confidence: 0.9,
        x_min: 1.0,
        y_min: 2.0,
        x_max: 3.0,
        y_max: 4.0,
        segmentation: None,
    };

    let annotation_id = AnnotationsRepo::create(pool, new_annotation)
        .await
        .expect("Failed to insert test annotation");

    AnnotationsRepo::get_by_id(pool, annotation_id)
        .await
        .expect("Failed to retrieve created annotation")
        .expect("Created annotation not found")
}

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_level(true)
        .init();
}

pub fn create_settings() -> Arc<Settings> {
    Arc::new(Settings::default())
}

pub fn create_strict_settings() -> Arc<Settings> {
    let mut settings = Settings::default();
    settings.annotations.strict_bbox = true;
    Arc::new(settings)
}
