//! Logistic-regression classifier loaded from a JSON artifact.
//!
//! The artifact carries its own feature schema, so the adapter always orders features the way
//! the exported model expects. Text features are scored through per-value weight tables and
//! unknown values contribute nothing to the linear score.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::classifier::{ClassifierError, ClassifierPort};
use super::domain::{FeatureValue, FeatureVector};

const DEFAULT_THRESHOLD: f64 = 0.5;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Serialized form of the exported model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub intercept: f64,
    #[serde(default)]
    pub coefficients: BTreeMap<String, f64>,
    #[serde(default)]
    pub categories: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Errors raised while loading a classifier artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("unable to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model feature '{0}' has neither a coefficient nor a category table")]
    UnmappedFeature(String),
    #[error("model threshold {0} must lie in [0, 1]")]
    InvalidThreshold(f64),
}

/// Immutable classifier shared by every request once loaded.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    artifact: ModelArtifact,
}

impl LogisticModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelLoadError> {
        if !(0.0..=1.0).contains(&artifact.threshold) {
            return Err(ModelLoadError::InvalidThreshold(artifact.threshold));
        }

        if let Some(unmapped) = artifact.feature_names.iter().find(|name| {
            !artifact.coefficients.contains_key(*name) && !artifact.categories.contains_key(*name)
        }) {
            return Err(ModelLoadError::UnmappedFeature(unmapped.clone()));
        }

        Ok(Self { artifact })
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelLoadError> {
        let artifact: ModelArtifact = serde_json::from_str(raw)?;
        Self::from_artifact(artifact)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    fn linear_score(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let mut score = self.artifact.intercept;
        for name in &self.artifact.feature_names {
            let value = features
                .get(name)
                .ok_or_else(|| ClassifierError::UnsupportedFeature {
                    feature: name.clone(),
                    detail: "feature missing from input vector".to_string(),
                })?;

            score += match value {
                FeatureValue::Number(number) => {
                    let weight = self.artifact.coefficients.get(name).ok_or_else(|| {
                        ClassifierError::UnsupportedFeature {
                            feature: name.clone(),
                            detail: "numeric value for a categorical feature".to_string(),
                        }
                    })?;
                    weight * number
                }
                FeatureValue::Text(text) => {
                    let table = self.artifact.categories.get(name).ok_or_else(|| {
                        ClassifierError::UnsupportedFeature {
                            feature: name.clone(),
                            detail: format!("text value '{text}' for a numeric feature"),
                        }
                    })?;
                    table.get(text).copied().unwrap_or(0.0)
                }
            };
        }
        Ok(score)
    }
}

impl ClassifierPort for LogisticModel {
    fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        let probability = self.predict_proba(features)?;
        Ok(u8::from(probability >= self.artifact.threshold))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let score = self.linear_score(features)?;
        Ok(sigmoid(score))
    }
}

fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}
