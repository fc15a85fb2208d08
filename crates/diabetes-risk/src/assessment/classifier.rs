use super::domain::FeatureVector;

/// Inference contract of the pretrained classifier.
///
/// Implementations are read-only once constructed and shared across requests, so both
/// inference calls must be deterministic for identical input.
pub trait ClassifierPort: Send + Sync {
    /// Feature names in the order the classifier consumes them.
    fn feature_names(&self) -> &[String];

    /// Binary label (0 or 1) for the given features.
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError>;

    /// Probability of the positive class.
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ClassifierError>;
}

/// Failures raised by a bound classifier while answering a request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(u8),
    #[error("classifier returned probability {0}, expected a value in [0, 1]")]
    ProbabilityOutOfRange(f64),
    #[error("feature '{feature}' has an unsupported value for this classifier: {detail}")]
    UnsupportedFeature { feature: String, detail: String },
    #[error("classifier unavailable: {0}")]
    Backend(String),
}

/// Output of a single inference round, checked against the port contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOutcome {
    pub prediction: u8,
    pub probability: f64,
}

/// Run both inference calls and reject values outside the contract.
pub fn infer<C>(
    classifier: &C,
    features: &FeatureVector,
) -> Result<ClassifierOutcome, ClassifierError>
where
    C: ClassifierPort + ?Sized,
{
    let prediction = classifier.predict(features)?;
    if prediction > 1 {
        return Err(ClassifierError::InvalidLabel(prediction));
    }

    let probability = classifier.predict_proba(features)?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(ClassifierError::ProbabilityOutOfRange(probability));
    }

    Ok(ClassifierOutcome {
        prediction,
        probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        names: Vec<String>,
        label: u8,
        probability: f64,
    }

    impl ClassifierPort for Fixed {
        fn feature_names(&self) -> &[String] {
            &self.names
        }

        fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
            Ok(self.label)
        }

        fn predict_proba(&self, _features: &FeatureVector) -> Result<f64, ClassifierError> {
            Ok(self.probability)
        }
    }

    fn fixed(label: u8, probability: f64) -> Fixed {
        Fixed {
            names: Vec::new(),
            label,
            probability,
        }
    }

    #[test]
    fn accepts_values_within_contract() {
        let outcome = infer(&fixed(1, 1.0), &FeatureVector::default()).expect("valid");
        assert_eq!(outcome.prediction, 1);
        assert_eq!(outcome.probability, 1.0);
    }

    #[test]
    fn rejects_non_binary_labels() {
        assert_eq!(
            infer(&fixed(2, 0.5), &FeatureVector::default()),
            Err(ClassifierError::InvalidLabel(2))
        );
    }

    #[test]
    fn rejects_probabilities_outside_unit_interval() {
        assert!(matches!(
            infer(&fixed(0, 1.2), &FeatureVector::default()),
            Err(ClassifierError::ProbabilityOutOfRange(_))
        ));
        assert!(matches!(
            infer(&fixed(0, f64::NAN), &FeatureVector::default()),
            Err(ClassifierError::ProbabilityOutOfRange(_))
        ));
    }
}
