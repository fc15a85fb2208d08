use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::{json, Value};

use super::classifier::ClassifierPort;
use super::service::{AssessmentError, AssessmentService};

/// Router builder exposing the prediction endpoint.
pub fn assessment_router<C>(service: Arc<AssessmentService<C>>) -> Router
where
    C: ClassifierPort + 'static,
{
    Router::new()
        .route("/predict", post(predict_handler::<C>))
        .with_state(service)
}

pub(crate) async fn predict_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    payload: Result<axum::Json<Value>, JsonRejection>,
) -> Response
where
    C: ClassifierPort + 'static,
{
    if !service.is_ready() {
        return error_response(&AssessmentError::ModelUnavailable);
    }

    let axum::Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (rejection.status(), axum::Json(payload)).into_response();
        }
    };

    match service.assess_value(&payload) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) fn error_response(error: &AssessmentError) -> Response {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
