mod risk;
mod rules;

pub use risk::{risk_level, risk_score_percentage};
pub use rules::{
    describe, BmiCategory, ClinicalAssessment, ClinicalFactor, ClinicalRuleEngine,
    FactorEvaluationError, GlucoseCategory, Hba1cCategory, HealthAdvice, Presence,
};

#[cfg(test)]
pub(crate) use rules::{classify_bmi, classify_glucose, classify_hba1c};

use super::classifier::ClassifierOutcome;
use super::domain::RiskLevel;
use serde::{Deserialize, Serialize};

/// Classifier output interpreted into the coarse risk bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierRisk {
    pub prediction: u8,
    pub probability: f64,
    pub risk_score_percentage: f64,
    pub risk_level: RiskLevel,
}

impl From<ClassifierOutcome> for ClassifierRisk {
    fn from(outcome: ClassifierOutcome) -> Self {
        let percentage = risk_score_percentage(outcome.probability);
        Self {
            prediction: outcome.prediction,
            probability: outcome.probability,
            risk_score_percentage: percentage,
            risk_level: risk_level(percentage),
        }
    }
}
