use super::domain::PredictionResult;
use super::evaluation::{describe, ClassifierRisk, ClinicalAssessment};

/// Combine the classifier risk and the clinical rule output into the response record.
pub fn assemble(risk: ClassifierRisk, clinical: ClinicalAssessment) -> PredictionResult {
    PredictionResult {
        prediction: risk.prediction,
        probability: risk.probability,
        risk_score_percentage: risk.risk_score_percentage,
        risk_level: risk.risk_level,
        bmi_risk: describe(clinical.bmi.name(), clinical.bmi.risk()),
        hba1c_risk: describe(clinical.hba1c.name(), clinical.hba1c.risk()),
        glucose_risk: describe(clinical.glucose.name(), clinical.glucose.risk()),
        hypertension_risk: describe(clinical.hypertension.name(), clinical.hypertension.risk()),
        heart_disease_risk: describe(
            clinical.heart_disease.name(),
            clinical.heart_disease.risk(),
        ),
        health_advice: clinical
            .advice
            .iter()
            .map(|advice| advice.message().to_string())
            .collect(),
    }
}
