use crate::infra::require_classifier;
use clap::Args;
use diabetes_risk::assessment::{AssessmentError, AssessmentService, PredictionResult};
use diabetes_risk::config::AppConfig;
use diabetes_risk::error::AppError;
use diabetes_risk::telemetry::{self, LogTarget};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Patient JSON document to assess, or `-` to read from stdin
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Classifier artifact path (defaults to APP_MODEL_PATH)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(model) = args.model {
        config.model.artifact_path = Some(model);
    }

    telemetry::init(&config.telemetry, LogTarget::Stderr)?;

    let path = config
        .model
        .artifact_path
        .as_deref()
        .ok_or(AssessmentError::ModelUnavailable)?;
    let service = AssessmentService::new(require_classifier(path)?);

    let document = read_document(&args.input)?;
    let result = service.assess_value(&document)?;
    println!("{}", render(&result)?);
    Ok(())
}

fn read_document(input: &Path) -> Result<Value, AppError> {
    let raw = if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn render(result: &PredictionResult) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(result)?)
}
