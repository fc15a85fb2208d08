use diabetes_risk::assessment::{AssessmentService, LogisticModel, ModelLoadError};
use diabetes_risk::config::ModelConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Classifier implementation bound by the running service.
pub(crate) type Classifier = LogisticModel;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) model_loaded: bool,
}

/// Load the classifier once for the lifetime of the process.
///
/// A missing or unreadable artifact leaves the service unbound rather than aborting startup, so
/// prediction requests answer with a model-unavailable error.
pub(crate) fn load_classifier(config: &ModelConfig) -> Option<Arc<Classifier>> {
    let Some(path) = config.artifact_path.as_deref() else {
        warn!("no classifier artifact configured (APP_MODEL_PATH); predictions are disabled");
        return None;
    };

    match LogisticModel::from_path(path) {
        Ok(model) => {
            info!(
                path = %path.display(),
                features = model.artifact().feature_names.len(),
                "classifier loaded"
            );
            Some(Arc::new(model))
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to load classifier");
            None
        }
    }
}

pub(crate) fn assessment_service(config: &ModelConfig) -> Arc<AssessmentService<Classifier>> {
    Arc::new(AssessmentService::with_classifier(load_classifier(config)))
}

/// Strict variant used by one-shot commands, where a missing model is fatal.
pub(crate) fn require_classifier(path: &Path) -> Result<Arc<Classifier>, ModelLoadError> {
    LogisticModel::from_path(path).map(Arc::new)
}
