use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::classifier::{infer, ClassifierError, ClassifierPort};
use super::domain::PredictionResult;
use super::evaluation::{ClassifierRisk, ClinicalRuleEngine, FactorEvaluationError};
use super::features::{adapt, SchemaMismatch};
use super::response::assemble;
use super::validation::{FieldValidator, ValidationError};

/// Service composing validation, inference, and the clinical rule engine.
///
/// The classifier is bound once at construction and never replaced, so a service can be shared
/// behind an `Arc` by any number of concurrent requests.
pub struct AssessmentService<C> {
    validator: FieldValidator,
    rules: ClinicalRuleEngine,
    classifier: Option<Arc<C>>,
}

impl<C> AssessmentService<C>
where
    C: ClassifierPort + 'static,
{
    pub fn new(classifier: Arc<C>) -> Self {
        Self::with_classifier(Some(classifier))
    }

    /// Service with no classifier bound; every assessment fails with `ModelUnavailable`.
    pub fn unbound() -> Self {
        Self::with_classifier(None)
    }

    pub fn with_classifier(classifier: Option<Arc<C>>) -> Self {
        Self {
            validator: FieldValidator::new(),
            rules: ClinicalRuleEngine::new(),
            classifier,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    /// Assess a raw request body.
    pub fn assess(&self, input: &Map<String, Value>) -> Result<PredictionResult, AssessmentError> {
        self.run(input).map_err(|err| {
            warn!(error = %err, client_error = err.is_client_error(), "assessment failed");
            err
        })
    }

    fn run(&self, input: &Map<String, Value>) -> Result<PredictionResult, AssessmentError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(AssessmentError::ModelUnavailable)?;

        debug!(fields = input.len(), "received assessment request");

        let record = self.validator.validate(input)?;
        let features = adapt(&record, classifier.feature_names())?;
        let outcome = infer(&**classifier, &features)?;
        let risk = ClassifierRisk::from(outcome);
        let clinical = self.rules.evaluate(&record)?;
        let result = assemble(risk, clinical);

        info!(
            prediction = result.prediction,
            risk_level = %result.risk_level,
            advice = result.health_advice.len(),
            "assessment completed"
        );
        Ok(result)
    }

    /// Assess an arbitrary JSON value, rejecting anything that is not an object.
    pub fn assess_value(&self, input: &Value) -> Result<PredictionResult, AssessmentError> {
        match input {
            Value::Object(map) => self.assess(map),
            _ => Err(AssessmentError::MalformedRequest),
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatch),
    #[error("Model not loaded")]
    ModelUnavailable,
    #[error("inference failed: {0}")]
    Inference(#[from] ClassifierError),
    #[error(transparent)]
    FactorEvaluation(#[from] FactorEvaluationError),
    #[error("request body must be a JSON object")]
    MalformedRequest,
}

impl AssessmentError {
    /// Whether the failure is attributable to the caller's input.
    pub fn is_client_error(&self) -> bool {
        match self {
            AssessmentError::Validation(_)
            | AssessmentError::SchemaMismatch(_)
            | AssessmentError::FactorEvaluation(_)
            | AssessmentError::MalformedRequest => true,
            AssessmentError::ModelUnavailable | AssessmentError::Inference(_) => false,
        }
    }
}
