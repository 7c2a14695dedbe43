use data::image::NewImage;
use repos::error::RepoError;
use repos::image::ImagesRepo;
use sqlx::{Pool, Postgres};
use testware::create_test_image;

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_and_get_by_id(pool: Pool<Postgres>) {
    let new_image = NewImage {
        id: "img_0001".to_string(),
        file_name: "img_0001.jpg".to_string(),
    };

    let image_id = ImagesRepo::create(&pool, new_image.clone())
        .await
        .expect("Failed to create image");
    assert_eq!(image_id, new_image.id);

    let image = ImagesRepo::get_by_id(&pool, &image_id)
        .await
        .expect("Failed to get image by ID")
        .expect("Created image not found");

    assert_eq!(image.id, new_image.id);
    assert_eq!(image.file_name, new_image.file_name);
    assert!(!image.is_labeled);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_by_id_not_found(pool: Pool<Postgres>) {
    let not_found = ImagesRepo::get_by_id(&pool, "no_such_image")
        .await
        .expect("Failed to query with non-existent ID");

    assert!(not_found.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_duplicate_id(pool: Pool<Postgres>) {
    let image = create_test_image(&pool).await;

    let result = ImagesRepo::create(
        &pool,
        NewImage {
            id: image.id.clone(),
            file_name: "dup.jpg".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(RepoError::UniqueViolation(_, _))));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_set_labeled(pool: Pool<Postgres>) {
    let image = create_test_image(&pool).await;
    assert!(!image.is_labeled);

    ImagesRepo::set_labeled(&pool, &image.id, true)
        .await
        .expect("Failed to set labeled flag");

    let updated = ImagesRepo::get_by_id(&pool, &image.id)
        .await
        .expect("Failed to get image by ID")
        .expect("Image not found");
    assert!(updated.is_labeled);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_set_labeled_unknown_image(pool: Pool<Postgres>) {
    // Updating an unknown image is a no-op, not an error.
    ImagesRepo::set_labeled(&pool, "no_such_image", true)
        .await
        .expect("Failed to set labeled flag for unknown image");
}
