use super::super::domain::RiskLevel;

/// Probability expressed as a percentage, rounded to two decimals.
///
/// Rounding works on the exact decimal expansion of the scaled value with ties to even,
/// so 0.00015 (stored just below 0.015 once scaled) yields 0.01 rather than 0.02.
pub fn risk_score_percentage(probability: f64) -> f64 {
    let scaled = probability * 100.0;
    format!("{scaled:.2}").parse().unwrap_or(scaled)
}

/// Bucket a rounded percentage. The cascade order mirrors the published bands.
pub fn risk_level(percentage: f64) -> RiskLevel {
    if percentage < 30.0 {
        RiskLevel::Low
    } else if (30.0..70.0).contains(&percentage) {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}
