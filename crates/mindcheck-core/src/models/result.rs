use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::{Gad7Level, Phq9Level};

/// The scored outcome of one check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub phq9_score: u8,
    pub phq9_level: Phq9Level,
    pub suicidal_ideation_flag: bool,
    pub gad7_score: u8,
    pub gad7_level: Gad7Level,
    pub risk_flag: bool,
    /// Ordered for presentation. A questionnaire crisis message, when
    /// present, is always first.
    pub suggestions: Vec<String>,
}
