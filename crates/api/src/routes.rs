use axum::{
    Router,
    routing::{get, put},
};

use crate::annotations::AnnotationsApi;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Single-annotation CRUD (stubs)
        .route("/annotations", get(AnnotationsApi::list).post(AnnotationsApi::create))
        .route(
            "/annotations/{id}",
            get(AnnotationsApi::get)
                .put(AnnotationsApi::update)
                .delete(AnnotationsApi::remove),
        )
        // Per-image annotation set (functional)
        .route(
            "/annotations/{id}/annotations",
            get(AnnotationsApi::get_for_image).post(AnnotationsApi::save_for_image),
        )
        // Per-image single annotation (stubs)
        .route(
            "/annotations/{id}/annotations/{annotation_id}",
            put(AnnotationsApi::update_for_image).delete(AnnotationsApi::remove_for_image),
        )
        .route("/live", get(super::health::live))
        .route("/ready", get(super::health::ready))
}
