use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// PHQ-9 depression severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phq9Level {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Phq9Level {
    pub fn label(self) -> &'static str {
        match self {
            Phq9Level::Minimal => "Minimal",
            Phq9Level::Mild => "Mild",
            Phq9Level::Moderate => "Moderate",
            Phq9Level::ModeratelySevere => "Moderately severe",
            Phq9Level::Severe => "Severe",
        }
    }
}

impl fmt::Display for Phq9Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// GAD-7 anxiety severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gad7Level {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl Gad7Level {
    pub fn label(self) -> &'static str {
        match self {
            Gad7Level::Minimal => "Minimal",
            Gad7Level::Mild => "Mild",
            Gad7Level::Moderate => "Moderate",
            Gad7Level::Severe => "Severe",
        }
    }
}

impl fmt::Display for Gad7Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
