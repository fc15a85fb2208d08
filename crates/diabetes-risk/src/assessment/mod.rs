//! Diabetes risk assessment: request validation, classifier inference, and clinical rules.
//!
//! A request flows through the field validator into a typed `PatientRecord`, is adapted to the
//! classifier's declared feature schema, scored, and then interpreted twice: once into a coarse
//! risk band from the probability and once per clinical factor against fixed thresholds.

pub mod classifier;
pub mod domain;
pub mod evaluation;
pub mod features;
pub mod model;
pub(crate) mod response;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use classifier::{ClassifierError, ClassifierOutcome, ClassifierPort};
pub use domain::{
    FeatureValue, FeatureVector, PatientRecord, PredictionResult, RiskLevel, REQUIRED_FIELDS,
};
pub use evaluation::{
    ClassifierRisk, ClinicalAssessment, ClinicalFactor, ClinicalRuleEngine, FactorEvaluationError,
    HealthAdvice,
};
pub use features::SchemaMismatch;
pub use model::{LogisticModel, ModelArtifact, ModelLoadError};
pub use router::assessment_router;
pub use service::{AssessmentError, AssessmentService};
pub use validation::{FieldValidator, ValidationError};
