use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::assessment::classifier::{ClassifierError, ClassifierPort};
use crate::assessment::domain::{FeatureVector, PatientRecord, REQUIRED_FIELDS};
use crate::assessment::service::AssessmentService;

/// Classifier double returning a fixed probability and counting invocations.
pub(super) struct StubClassifier {
    names: Vec<String>,
    probability: f64,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub(super) fn new(probability: f64) -> Self {
        let names = REQUIRED_FIELDS.iter().map(|field| field.to_string()).collect();
        Self::with_schema(probability, names)
    }

    pub(super) fn with_schema(probability: f64, names: Vec<String>) -> Self {
        Self {
            names,
            probability,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ClassifierPort for StubClassifier {
    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(u8::from(self.probability >= 0.5))
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.probability)
    }
}

/// Classifier whose backend always fails.
pub(super) struct BrokenClassifier {
    names: Vec<String>,
}

impl Default for BrokenClassifier {
    fn default() -> Self {
        Self {
            names: vec!["age".to_string()],
        }
    }
}

impl ClassifierPort for BrokenClassifier {
    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
        Err(ClassifierError::Backend("tensor runtime crashed".to_string()))
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64, ClassifierError> {
        Err(ClassifierError::Backend("tensor runtime crashed".to_string()))
    }
}

pub(super) fn service(
    probability: f64,
) -> (Arc<AssessmentService<StubClassifier>>, Arc<StubClassifier>) {
    let classifier = Arc::new(StubClassifier::new(probability));
    let service = Arc::new(AssessmentService::new(classifier.clone()));
    (service, classifier)
}

pub(super) fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

/// Request body from the reference end-to-end scenario.
pub(super) fn reference_request() -> Map<String, Value> {
    object(json!({
        "gender": "Female",
        "smoking_history": "never",
        "age": 45,
        "bmi": 32,
        "HbA1c_level": 7.0,
        "blood_glucose_level": 160,
        "hypertension": 1,
        "heart_disease": 0
    }))
}

/// Record with every factor in its lowest-risk branch.
pub(super) fn healthy_record() -> PatientRecord {
    PatientRecord {
        gender: "Male".to_string(),
        smoking_history: "never".to_string(),
        age: 34.0,
        bmi: 22.0,
        hba1c_level: 5.2,
        blood_glucose_level: 95.0,
        hypertension: 0,
        heart_disease: 0,
    }
}
