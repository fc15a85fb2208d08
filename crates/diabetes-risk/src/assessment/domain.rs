use serde::{Deserialize, Serialize};

/// Input keys every assessment request must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "gender",
    "smoking_history",
    "age",
    "bmi",
    "HbA1c_level",
    "blood_glucose_level",
    "hypertension",
    "heart_disease",
];

/// Smoking history values that trigger cessation advice.
pub const ACTIVE_SMOKING_HISTORY: [&str; 2] = ["current", "former"];

/// Validated clinical measurements for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub gender: String,
    pub smoking_history: String,
    pub age: f64,
    pub bmi: f64,
    #[serde(rename = "HbA1c_level")]
    pub hba1c_level: f64,
    pub blood_glucose_level: f64,
    pub hypertension: i64,
    pub heart_disease: i64,
}

impl PatientRecord {
    /// Look up a field by its request key so the feature schema can be resolved at runtime.
    pub fn feature(&self, name: &str) -> Option<FeatureValue> {
        let value = match name {
            "gender" => FeatureValue::Text(self.gender.clone()),
            "smoking_history" => FeatureValue::Text(self.smoking_history.clone()),
            "age" => FeatureValue::Number(self.age),
            "bmi" => FeatureValue::Number(self.bmi),
            "HbA1c_level" => FeatureValue::Number(self.hba1c_level),
            "blood_glucose_level" => FeatureValue::Number(self.blood_glucose_level),
            "hypertension" => FeatureValue::Number(self.hypertension as f64),
            "heart_disease" => FeatureValue::Number(self.heart_disease as f64),
            _ => return None,
        };
        Some(value)
    }

    pub fn is_active_smoker(&self) -> bool {
        ACTIVE_SMOKING_HISTORY.contains(&self.smoking_history.as_str())
    }
}

/// Single classifier input value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
}

/// Ordered classifier input matching the declared feature schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    entries: Vec<(String, FeatureValue)>,
}

impl FeatureVector {
    pub fn push(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.entries.push((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value)
    }
}

/// Coarse three-tier bucket shared by the classifier score and the per-factor rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Final response record returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: f64,
    pub risk_score_percentage: f64,
    pub risk_level: RiskLevel,
    pub bmi_risk: String,
    pub hba1c_risk: String,
    pub glucose_risk: String,
    pub hypertension_risk: String,
    pub heart_disease_risk: String,
    pub health_advice: Vec<String>,
}
