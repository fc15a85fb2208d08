use super::common::*;
use crate::assessment::evaluation::{
    classify_bmi, classify_glucose, classify_hba1c, describe, BmiCategory, ClinicalFactor,
    ClinicalRuleEngine, GlucoseCategory, Hba1cCategory, HealthAdvice, Presence,
};

#[test]
fn bmi_boundaries_follow_cascade() {
    assert_eq!(classify_bmi(18.49), Ok(BmiCategory::Underweight));
    assert_eq!(classify_bmi(18.5), Ok(BmiCategory::Normal));
    assert_eq!(classify_bmi(24.89), Ok(BmiCategory::Normal));
    assert_eq!(classify_bmi(25.0), Ok(BmiCategory::Overweight));
    assert_eq!(classify_bmi(29.89), Ok(BmiCategory::Overweight));
    assert_eq!(classify_bmi(29.9), Ok(BmiCategory::Obese));
    assert_eq!(classify_bmi(32.0), Ok(BmiCategory::Obese));
}

#[test]
fn bmi_gap_values_fall_through_to_obese() {
    assert_eq!(classify_bmi(24.9), Ok(BmiCategory::Obese));
    assert_eq!(classify_bmi(24.95), Ok(BmiCategory::Obese));
}

#[test]
fn hba1c_boundaries_follow_cascade() {
    assert_eq!(classify_hba1c(5.69), Ok(Hba1cCategory::Normal));
    assert_eq!(classify_hba1c(5.7), Ok(Hba1cCategory::Prediabetes));
    assert_eq!(classify_hba1c(6.49), Ok(Hba1cCategory::Prediabetes));
    assert_eq!(classify_hba1c(6.5), Ok(Hba1cCategory::Diabetic));
}

#[test]
fn glucose_boundaries_follow_cascade() {
    assert_eq!(classify_glucose(139.9), Ok(GlucoseCategory::Normal));
    assert_eq!(classify_glucose(140.0), Ok(GlucoseCategory::Prediabetes));
    assert_eq!(classify_glucose(198.9), Ok(GlucoseCategory::Prediabetes));
    assert_eq!(classify_glucose(199.0), Ok(GlucoseCategory::High));
}

#[test]
fn hba1c_at_diabetic_threshold_is_high_risk_with_advice() {
    let mut record = healthy_record();
    record.hba1c_level = 6.5;

    let assessment = ClinicalRuleEngine::new()
        .evaluate(&record)
        .expect("rules evaluate");

    assert_eq!(assessment.hba1c, Hba1cCategory::Diabetic);
    assert_eq!(
        describe(assessment.hba1c.name(), assessment.hba1c.risk()),
        "Diabetic (High Risk)"
    );
    assert_eq!(assessment.advice, vec![HealthAdvice::ManageBloodSugar]);
}

#[test]
fn glucose_at_prediabetes_threshold_is_moderate_risk_with_advice() {
    let mut record = healthy_record();
    record.blood_glucose_level = 140.0;

    let assessment = ClinicalRuleEngine::new()
        .evaluate(&record)
        .expect("rules evaluate");

    assert_eq!(assessment.glucose, GlucoseCategory::Prediabetes);
    assert_eq!(
        describe(assessment.glucose.name(), assessment.glucose.risk()),
        "Prediabetes (Moderate Risk)"
    );
    assert_eq!(assessment.advice, vec![HealthAdvice::ControlSugarIntake]);
}

#[test]
fn healthy_record_triggers_no_advice() {
    let assessment = ClinicalRuleEngine::new()
        .evaluate(&healthy_record())
        .expect("rules evaluate");

    assert_eq!(assessment.bmi, BmiCategory::Normal);
    assert_eq!(assessment.hba1c, Hba1cCategory::Normal);
    assert_eq!(assessment.glucose, GlucoseCategory::Normal);
    assert_eq!(assessment.hypertension, Presence::No);
    assert_eq!(assessment.heart_disease, Presence::No);
    assert!(assessment.advice.is_empty());
}

#[test]
fn advice_follows_evaluation_order_with_smoking_last() {
    let mut record = healthy_record();
    record.bmi = 35.0;
    record.hba1c_level = 6.0;
    record.blood_glucose_level = 250.0;
    record.hypertension = 1;
    record.heart_disease = 1;
    record.smoking_history = "current".to_string();

    let assessment = ClinicalRuleEngine::new()
        .evaluate(&record)
        .expect("rules evaluate");

    assert_eq!(
        assessment.advice,
        vec![
            HealthAdvice::ReduceObesity,
            HealthAdvice::PreventDiabetes,
            HealthAdvice::SeekGlucoseGuidance,
            HealthAdvice::ManageBloodPressure,
            HealthAdvice::HeartHealthyLifestyle,
            HealthAdvice::QuitSmoking,
        ]
    );
}

#[test]
fn overlapping_rules_keep_duplicate_themes() {
    let mut record = healthy_record();
    record.hba1c_level = 6.0;
    record.blood_glucose_level = 150.0;

    let assessment = ClinicalRuleEngine::new()
        .evaluate(&record)
        .expect("rules evaluate");

    assert_eq!(
        assessment.advice,
        vec![HealthAdvice::PreventDiabetes, HealthAdvice::ControlSugarIntake]
    );
}

#[test]
fn former_smokers_get_cessation_advice_but_unknown_values_do_not() {
    let engine = ClinicalRuleEngine::new();
    let mut record = healthy_record();

    record.smoking_history = "former".to_string();
    let former = engine.evaluate(&record).expect("rules evaluate");
    assert_eq!(former.advice, vec![HealthAdvice::QuitSmoking]);

    record.smoking_history = "ever".to_string();
    let unknown = engine.evaluate(&record).expect("rules evaluate");
    assert!(unknown.advice.is_empty());
}

#[test]
fn binary_flags_only_fire_on_one() {
    let mut record = healthy_record();
    record.hypertension = 2;
    record.heart_disease = -1;

    let assessment = ClinicalRuleEngine::new()
        .evaluate(&record)
        .expect("rules evaluate");

    assert_eq!(assessment.hypertension, Presence::No);
    assert_eq!(assessment.heart_disease, Presence::No);
}

#[test]
fn non_finite_measurement_is_attributed_to_its_factor() {
    let mut record = healthy_record();
    record.blood_glucose_level = f64::NAN;

    let err = ClinicalRuleEngine::new()
        .evaluate(&record)
        .expect_err("glucose cannot be evaluated");

    assert_eq!(err.factor, ClinicalFactor::Glucose);
    assert!(err
        .to_string()
        .starts_with("Blood Glucose Level Assessment Error"));
}

#[test]
fn every_factor_lands_in_exactly_one_branch() {
    let engine = ClinicalRuleEngine::new();
    for step in 0..=600 {
        let value = step as f64 / 2.0;
        let mut record = healthy_record();
        record.bmi = value / 5.0;
        record.hba1c_level = value / 30.0;
        record.blood_glucose_level = value;

        let assessment = engine.evaluate(&record).expect("finite values evaluate");
        assert!(!assessment.bmi.name().is_empty());
        assert!(!assessment.hba1c.name().is_empty());
        assert!(!assessment.glucose.name().is_empty());
    }
}
