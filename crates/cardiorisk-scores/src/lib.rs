//! cardiorisk-scores
//!
//! Cardiovascular and frailty risk calculators. Pure functions over patient
//! answers and frozen chart tables. No I/O and no shared mutable state, so
//! every call is independent and deterministic.

pub mod bands;
pub mod calculators;
pub mod error;
pub mod legacy;
pub mod lifetime;
pub mod matrix;
pub mod scoring;
pub mod summary;

use cardiorisk_core::models::answers::PatientAnswers;
use cardiorisk_core::models::result::ScoreResult;

use error::ScoreError;
use scoring::{CalculatorInfo, CalculatorOutput};

/// Trait implemented by each risk calculator that works on a full set of
/// patient answers.
pub trait Calculator: Send + Sync {
    /// Unique identifier (e.g., "harms2af", "hearts").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "HARMS2-AF").
    fn name(&self) -> &str;

    /// Short summary of the scoring rules.
    fn description(&self) -> &str;

    /// Compute this calculator's score. Fails on the first answer it needs
    /// that is missing or invalid.
    fn evaluate(&self, answers: &PatientAnswers) -> Result<CalculatorOutput, ScoreError>;

    fn info(&self) -> CalculatorInfo {
        CalculatorInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Return all registered calculators.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(calculators::harms2af::Harms2Af),
        Box::new(calculators::mtaiwan::MTaiwanAf),
        Box::new(calculators::frail::Frail),
        Box::new(calculators::hearts::Hearts),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Result<Box<dyn Calculator>, ScoreError> {
    all_calculators()
        .into_iter()
        .find(|c| c.id() == id)
        .ok_or_else(|| ScoreError::UnknownCalculator(id.to_string()))
}

/// Compute every score for one patient. Either all scores are produced or
/// the first failure is returned; there is no partial result.
pub fn compute_scores(answers: &PatientAnswers) -> Result<ScoreResult, ScoreError> {
    let harms2af_score = calculators::harms2af::score(answers)?;
    let mtaiwan_score = calculators::mtaiwan::score(answers)?;
    let frail = calculators::frail::assess(answers)?;
    let hearts = calculators::hearts::assess(answers)?;

    Ok(ScoreResult {
        harms2af_score,
        mtaiwan_score,
        frail_score: frail.score,
        frail_interpretation: frail.category,
        hearts_score: hearts.score,
        hearts_risk_level: hearts.risk_level,
        hearts_risk_color: hearts.color(),
    })
}
