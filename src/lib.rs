//! Rule-based clinical mapping and risk scoring for thoracic oncology.
//!
//! Extracted entities (`{category, text, confidence}`) from an upstream NER
//! service are mapped onto a structured [`PatientProfile`]; the profile and a
//! diagnosis label from an image classifier feed a fixed, auditable risk model.
//!
//! - `models`: profile, entity, prediction and score types
//! - `mapping`: confidence gate, field resolver, severity scaler, merger, suggestions
//! - `risk`: risk aggregation and banding
//! - `session`: per-analysis working state
//! - `report`: JSON / CSV export

pub mod config;
pub mod error;
pub mod mapping;
pub mod models;
pub mod report;
pub mod risk;
pub mod session;

use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub use error::EngineError;
pub use mapping::{generate_suggestions, map_entities, Suggestion};
pub use models::{
    CancerPrediction, Entity, EntityCategory, PatientProfile, ProfileField, RiskAssessment,
    RiskScores, ScaleField, ScaleValue,
};
pub use report::DiagnosticReport;
pub use risk::compute_risk_scores;
pub use session::AnalysisSession;

/// Batch driver input: one entity list and an optional classifier result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub prediction: Option<CancerPrediction>,
}

/// Run one request through a fresh session.
pub fn analyze(request: AnalysisRequest) -> DiagnosticReport {
    let mut session = AnalysisSession::new();
    session.ingest(&request.entities);
    DiagnosticReport::from_session(&session, request.prediction)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Csv,
}

/// Binary entry point: `thoracic <request.json> [--csv]`.
pub fn run() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with_args(&args, &mut std::io::stdout().lock())
}

/// Parse arguments, analyze the request file and write the report to `out`.
pub fn run_with_args(args: &[String], out: &mut impl Write) -> Result<(), EngineError> {
    let mut path = None;
    let mut format = OutputFormat::Json;
    for arg in args {
        match arg.as_str() {
            "--csv" => format = OutputFormat::Csv,
            "--json" => format = OutputFormat::Json,
            flag if flag.starts_with("--") => {
                return Err(EngineError::Usage(format!("unknown flag {flag}")));
            }
            file if path.is_none() => path = Some(file),
            extra => {
                return Err(EngineError::Usage(format!("unexpected argument {extra}")));
            }
        }
    }
    let path = path.ok_or_else(|| {
        EngineError::Usage("thoracic <request.json> [--csv]".into())
    })?;

    let request = read_request(Path::new(path))?;
    let report = analyze(request);

    match format {
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
        OutputFormat::Csv => {
            writeln!(out, "{}", DiagnosticReport::csv_header())?;
            writeln!(out, "{}", report.to_csv_row())?;
        }
    }
    Ok(())
}

fn read_request(path: &Path) -> Result<AnalysisRequest, EngineError> {
    let raw = std::fs::read_to_string(path)?;
    let request: AnalysisRequest = serde_json::from_str(&raw)?;
    tracing::info!(entities = request.entities.len(), "Loaded analysis request");
    Ok(request)
}
