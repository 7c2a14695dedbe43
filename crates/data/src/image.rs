use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An image owned by the labeling tool. Images are created elsewhere; this
/// service only flips `is_labeled` when annotations are saved for one.
#[derive(Debug, Serialize, Deserialize, Clone, Default, sqlx::FromRow)]
pub struct Image {
    pub id: String,
    pub file_name: String,
    pub is_labeled: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NewImage {
    pub id: String,
    pub file_name: String,
}
