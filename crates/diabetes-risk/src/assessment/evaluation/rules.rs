use serde::{Deserialize, Serialize};

use super::super::domain::{PatientRecord, RiskLevel};

/// Clinical measurements evaluated independently of the classifier.
///
/// `Hypertension` and `HeartDisease` keep their error labels for reporting, but their flags
/// are plain integers that always map to a `Presence`, so no failure is raised for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalFactor {
    Bmi,
    Hba1c,
    Glucose,
    Hypertension,
    HeartDisease,
}

impl ClinicalFactor {
    /// Label used when a factor fails to evaluate.
    pub fn error_label(&self) -> &'static str {
        match self {
            ClinicalFactor::Bmi => "BMI Calculation Error",
            ClinicalFactor::Hba1c => "HbA1c Level Assessment Error",
            ClinicalFactor::Glucose => "Blood Glucose Level Assessment Error",
            ClinicalFactor::Hypertension => "Hypertension Risk Assessment Error",
            ClinicalFactor::HeartDisease => "Heart Disease Risk Assessment Error",
        }
    }
}

/// Failure attributed to one clinical factor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}: {detail}", .factor.error_label())]
pub struct FactorEvaluationError {
    pub factor: ClinicalFactor,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn risk(&self) -> RiskLevel {
        match self {
            BmiCategory::Normal => RiskLevel::Low,
            BmiCategory::Underweight | BmiCategory::Overweight => RiskLevel::Moderate,
            BmiCategory::Obese => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hba1cCategory {
    Normal,
    Prediabetes,
    Diabetic,
}

impl Hba1cCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Hba1cCategory::Normal => "Normal",
            Hba1cCategory::Prediabetes => "Prediabetes",
            Hba1cCategory::Diabetic => "Diabetic",
        }
    }

    pub fn risk(&self) -> RiskLevel {
        match self {
            Hba1cCategory::Normal => RiskLevel::Low,
            Hba1cCategory::Prediabetes => RiskLevel::Moderate,
            Hba1cCategory::Diabetic => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseCategory {
    Normal,
    Prediabetes,
    High,
}

impl GlucoseCategory {
    pub fn name(&self) -> &'static str {
        match self {
            GlucoseCategory::Normal => "Normal",
            GlucoseCategory::Prediabetes => "Prediabetes",
            GlucoseCategory::High => "High",
        }
    }

    pub fn risk(&self) -> RiskLevel {
        match self {
            GlucoseCategory::Normal => RiskLevel::Low,
            GlucoseCategory::Prediabetes => RiskLevel::Moderate,
            GlucoseCategory::High => RiskLevel::High,
        }
    }
}

/// Presence of a diagnosed condition (hypertension, heart disease).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Yes,
    No,
}

impl Presence {
    /// Only an exact `1` counts as present; any other integer reads as absent.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Presence::Yes
        } else {
            Presence::No
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Presence::Yes => "Yes",
            Presence::No => "No",
        }
    }

    pub fn risk(&self) -> RiskLevel {
        match self {
            Presence::Yes => RiskLevel::High,
            Presence::No => RiskLevel::Low,
        }
    }
}

/// Recommendation strings appended by triggered rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthAdvice {
    ReduceObesity,
    PreventDiabetes,
    ManageBloodSugar,
    ControlSugarIntake,
    SeekGlucoseGuidance,
    ManageBloodPressure,
    HeartHealthyLifestyle,
    QuitSmoking,
}

impl HealthAdvice {
    pub fn message(&self) -> &'static str {
        match self {
            HealthAdvice::ReduceObesity => {
                "Consider a healthy diet and exercise to reduce obesity-related risks."
            }
            HealthAdvice::PreventDiabetes => "Monitor your diet and exercise to prevent diabetes.",
            HealthAdvice::ManageBloodSugar => "Consult a doctor to manage high blood sugar levels.",
            HealthAdvice::ControlSugarIntake => {
                "Control sugar intake and maintain an active lifestyle."
            }
            HealthAdvice::SeekGlucoseGuidance => {
                "High blood glucose detected. Seek medical guidance."
            }
            HealthAdvice::ManageBloodPressure => {
                "Manage blood pressure with a healthy lifestyle and checkups."
            }
            HealthAdvice::HeartHealthyLifestyle => {
                "Heart disease detected. Follow a heart-healthy lifestyle."
            }
            HealthAdvice::QuitSmoking => {
                "Quit smoking to lower your risk of diabetes and cardiovascular diseases."
            }
        }
    }
}

/// Per-factor categorization plus the advice trail, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAssessment {
    pub bmi: BmiCategory,
    pub hba1c: Hba1cCategory,
    pub glucose: GlucoseCategory,
    pub hypertension: Presence,
    pub heart_disease: Presence,
    pub advice: Vec<HealthAdvice>,
}

/// Render a category as "<name> (<risk label>)".
pub fn describe(name: &str, risk: RiskLevel) -> String {
    format!("{name} ({})", risk.label())
}

fn measurement(factor: ClinicalFactor, value: f64) -> Result<f64, FactorEvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FactorEvaluationError {
            factor,
            detail: format!("measurement {value} is not a finite number"),
        })
    }
}

pub(crate) fn classify_bmi(bmi: f64) -> Result<BmiCategory, FactorEvaluationError> {
    let bmi = measurement(ClinicalFactor::Bmi, bmi)?;
    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if 18.5 <= bmi && bmi < 24.9 {
        BmiCategory::Normal
    } else if 25.0 <= bmi && bmi < 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Ok(category)
}

pub(crate) fn classify_hba1c(level: f64) -> Result<Hba1cCategory, FactorEvaluationError> {
    let level = measurement(ClinicalFactor::Hba1c, level)?;
    let category = if level < 5.7 {
        Hba1cCategory::Normal
    } else if 5.7 <= level && level < 6.5 {
        Hba1cCategory::Prediabetes
    } else {
        Hba1cCategory::Diabetic
    };
    Ok(category)
}

pub(crate) fn classify_glucose(level: f64) -> Result<GlucoseCategory, FactorEvaluationError> {
    let level = measurement(ClinicalFactor::Glucose, level)?;
    let category = if level < 140.0 {
        GlucoseCategory::Normal
    } else if 140.0 <= level && level < 199.0 {
        GlucoseCategory::Prediabetes
    } else {
        GlucoseCategory::High
    };
    Ok(category)
}

/// Stateless engine applying the clinical threshold rules to a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicalRuleEngine;

impl ClinicalRuleEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        record: &PatientRecord,
    ) -> Result<ClinicalAssessment, FactorEvaluationError> {
        let mut advice = Vec::new();

        let bmi = classify_bmi(record.bmi)?;
        if bmi == BmiCategory::Obese {
            advice.push(HealthAdvice::ReduceObesity);
        }

        let hba1c = classify_hba1c(record.hba1c_level)?;
        match hba1c {
            Hba1cCategory::Prediabetes => advice.push(HealthAdvice::PreventDiabetes),
            Hba1cCategory::Diabetic => advice.push(HealthAdvice::ManageBloodSugar),
            Hba1cCategory::Normal => {}
        }

        let glucose = classify_glucose(record.blood_glucose_level)?;
        match glucose {
            GlucoseCategory::Prediabetes => advice.push(HealthAdvice::ControlSugarIntake),
            GlucoseCategory::High => advice.push(HealthAdvice::SeekGlucoseGuidance),
            GlucoseCategory::Normal => {}
        }

        let hypertension = Presence::from_flag(record.hypertension);
        if hypertension == Presence::Yes {
            advice.push(HealthAdvice::ManageBloodPressure);
        }

        let heart_disease = Presence::from_flag(record.heart_disease);
        if heart_disease == Presence::Yes {
            advice.push(HealthAdvice::HeartHealthyLifestyle);
        }

        if record.is_active_smoker() {
            advice.push(HealthAdvice::QuitSmoking);
        }

        Ok(ClinicalAssessment {
            bmi,
            hba1c,
            glucose,
            hypertension,
            heart_disease,
            advice,
        })
    }
}
