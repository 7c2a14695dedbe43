use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;
use data::annotation::{Annotation, NewAnnotation};
use repos::annotation::AnnotationsRepo;
use repos::image::ImagesRepo;

pub struct AnnotationsApi;

/// One annotation as submitted by the labeling frontend. Everything except
/// the bbox is optional and falls back to a default.
#[derive(Debug, Deserialize)]
pub struct AnnotationPayload {
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    #[serde(default = "default_class_name")]
    pub class_name: String,
    #[serde(default)]
    pub class_id: i32,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub segmentation: Option<serde_json::Value>,
}

fn default_class_name() -> String {
    "unknown".to_string()
}

fn default_confidence() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct SaveAnnotationsRequest {
    #[serde(default)]
    pub annotations: Vec<AnnotationPayload>,
}

#[derive(Debug, Serialize)]
pub struct SaveAnnotationsResponse {
    pub message: String,
    pub image_id: String,
    pub count: usize,
}

/// Wire shape of one stored annotation, with the bbox recombined into a
/// four-element sequence.
#[derive(Debug, Serialize)]
pub struct AnnotationView {
    pub id: uuid::Uuid,
    pub class_name: String,
    pub class_id: i32,
    pub confidence: f64,
    pub bbox: [f64; 4],
    pub segmentation: Option<serde_json::Value>,
}

impl From<Annotation> for AnnotationView {
    fn from(annotation: Annotation) -> Self {
        Self {
            id: annotation.id,
            class_name: annotation.class_name,
            class_id: annotation.class_id,
            confidence: annotation.confidence,
            bbox: [
                annotation.x_min,
                annotation.y_min,
                annotation.x_max,
                annotation.y_max,
            ],
            segmentation: annotation.segmentation,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageAnnotationsResponse {
    pub annotations: Vec<AnnotationView>,
}

/// Body shape accepted by the single-annotation stub routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotationCreate {
    pub image_id: String,
    pub bbox: Vec<f64>,
    pub class_id: i32,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

impl AnnotationsApi {
    /// Get all annotations for a specific image.
    #[instrument(skip(state))]
    pub async fn get_for_image(
        State(state): State<AppState>,
        Path(image_id): Path<String>,
    ) -> Result<Json<ImageAnnotationsResponse>, ApiError> {
        let mut conn = state.repo.acquire().await?;

        let annotations = AnnotationsRepo::get_by_image_id(&mut *conn, &image_id).await?;

        Ok(Json(ImageAnnotationsResponse {
            annotations: annotations.into_iter().map(AnnotationView::from).collect(),
        }))
    }

    /// Replace the entire annotation set of an image with the submitted one.
    /// Destructive before constructive: the old set is dropped first, so a
    /// failure mid-insert leaves a partial set behind.
    #[instrument(skip(state, request), fields(submitted = request.annotations.len()))]
    pub async fn save_for_image(
        State(state): State<AppState>,
        Path(image_id): Path<String>,
        Json(request): Json<SaveAnnotationsRequest>,
    ) -> Result<Json<SaveAnnotationsResponse>, ApiError> {
        let mut conn = state.repo.acquire().await?;

        // Strict mode rejects the whole request before any state is touched;
        // a validation error must not destroy the existing set.
        if state.settings.annotations.strict_bbox {
            if let Some(index) = request
                .annotations
                .iter()
                .position(|payload| !matches!(payload.bbox.as_deref(), Some(bbox) if bbox.len() == 4))
            {
                return Err(ApiError::InvalidBbox(index));
            }
        }

        // An unknown image yields zero persisted annotations and an
        // unchanged labeled flag, not an error.
        let image = ImagesRepo::get_by_id(&mut *conn, &image_id).await?;

        let mut saved = 0;
        if image.is_some() {
            AnnotationsRepo::delete_by_image_id(&mut *conn, &image_id).await?;

            for payload in request.annotations {
                let bbox = match payload.bbox {
                    Some(bbox) if bbox.len() == 4 => bbox,
                    // Default policy: malformed bbox entries are dropped
                    // silently.
                    _ => continue,
                };

                let new_annotation = NewAnnotation {
                    image_id: image_id.clone(),
                    class_name: payload.class_name,
                    class_id: payload.class_id,
                    confidence: payload.confidence,
                    x_min: bbox[0],
                    y_min: bbox[1],
                    x_max: bbox[2],
                    y_max: bbox[3],
                    segmentation: payload.segmentation,
                };

                AnnotationsRepo::create(&mut *conn, new_annotation).await?;
                saved += 1;
            }

            // The labeled flag is only ever set here, never cleared: an
            // empty save leaves a previously labeled image labeled.
            if saved > 0 {
                ImagesRepo::set_labeled(&mut *conn, &image_id, true).await?;
            }
        }

        info!(%image_id, count = saved, "Annotations replaced");

        Ok(Json(SaveAnnotationsResponse {
            message: "Annotations saved successfully".to_string(),
            image_id,
            count: saved,
        }))
    }

    // The routes below are acknowledged but not implemented; they echo their
    // input and touch no persistence.
    // TODO: implement single-annotation CRUD once the frontend needs it.

    pub async fn list() -> Json<serde_json::Value> {
        Json(serde_json::json!({ "annotations": [] }))
    }

    pub async fn create(Json(annotation): Json<AnnotationCreate>) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": "Annotation created",
            "annotation": annotation,
        }))
    }

    pub async fn get(Path(annotation_id): Path<String>) -> Json<serde_json::Value> {
        Json(serde_json::json!({ "annotation_id": annotation_id }))
    }

    pub async fn update(
        Path(annotation_id): Path<String>,
        Json(_annotation): Json<AnnotationCreate>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": "Annotation updated",
            "annotation_id": annotation_id,
        }))
    }

    pub async fn remove(Path(annotation_id): Path<String>) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": "Annotation deleted",
            "annotation_id": annotation_id,
        }))
    }

    pub async fn update_for_image(
        Path((image_id, annotation_id)): Path<(String, String)>,
        Json(_annotation): Json<AnnotationCreate>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": "Annotation updated",
            "image_id": image_id,
            "annotation_id": annotation_id,
        }))
    }

    pub async fn remove_for_image(
        Path((image_id, annotation_id)): Path<(String, String)>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": "Annotation deleted",
            "image_id": image_id,
            "annotation_id": annotation_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults() {
        let payload: AnnotationPayload = serde_json::from_str("{}").unwrap();

        assert!(payload.bbox.is_none());
        assert_eq!(payload.class_name, "unknown");
        assert_eq!(payload.class_id, 0);
        assert_eq!(payload.confidence, 1.0);
        assert!(payload.segmentation.is_none());
    }

    #[test]
    fn test_payload_integer_bbox_coerced() {
        let payload: AnnotationPayload =
            serde_json::from_str(r#"{"bbox": [1, 2, 3, 4]}"#).unwrap();

        assert_eq!(payload.bbox, Some(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_save_request_defaults_to_empty() {
        let request: SaveAnnotationsRequest = serde_json::from_str("{}").unwrap();

        assert!(request.annotations.is_empty());
    }

    #[test]
    fn test_view_recombines_bbox() {
        let annotation = Annotation {
            x_min: 1.0,
            y_min: 2.0,
            x_max: 3.0,
            y_max: 4.0,
            ..Annotation::default()
        };

        let view = AnnotationView::from(annotation);
        assert_eq!(view.bbox, [1.0, 2.0, 3.0, 4.0]);
    }
}
