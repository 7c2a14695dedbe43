use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One labeled region of an image: an axis-aligned bounding box plus an
/// optional segmentation payload that is opaque to this layer.
#[derive(Debug, Serialize, Deserialize, Clone, Default, sqlx::FromRow)]
pub struct Annotation {
    pub id: uuid::Uuid,
    pub image_id: String,
    pub class_name: String,
    pub class_id: i32,
    pub confidence: f64,
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub segmentation: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Annotation {
    /// Bbox recombined in wire order.
    pub fn bbox(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NewAnnotation {
    pub image_id: String,
    pub class_name: String,
    pub class_id: i32,
    pub confidence: f64,
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub segmentation: Option<serde_json::Value>,
}
