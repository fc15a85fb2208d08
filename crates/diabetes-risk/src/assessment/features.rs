use super::domain::{FeatureVector, PatientRecord};

/// Raised when the classifier declares a feature the record cannot supply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Column mismatch: classifier expects feature '{feature}' not present on the record")]
pub struct SchemaMismatch {
    pub feature: String,
}

/// Select and order record fields according to the classifier's declared schema.
pub fn adapt<S>(record: &PatientRecord, schema: &[S]) -> Result<FeatureVector, SchemaMismatch>
where
    S: AsRef<str>,
{
    let mut features = FeatureVector::default();
    for name in schema {
        let name = name.as_ref();
        let value = record.feature(name).ok_or_else(|| SchemaMismatch {
            feature: name.to_string(),
        })?;
        features.push(name, value);
    }
    Ok(features)
}
