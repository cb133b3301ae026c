use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive integer range for an answer or a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Form field name, e.g. `phq9_1`.
    pub id: String,
    /// 1-based position.
    pub number: usize,
    pub text: String,
}

/// One selectable answer.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: &'static str,
}

/// Total-score interval mapped to a severity label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub range: ScoreRange,
    pub label: String,
}

/// "Over the last 2 weeks" frequency scale shared by PHQ-9 and GAD-7.
pub static FREQUENCY_OPTIONS: [ResponseOption; 4] = [
    ResponseOption { value: 0, label: "Not at all" },
    ResponseOption { value: 1, label: "Several days" },
    ResponseOption { value: 2, label: "More than half the days" },
    ResponseOption { value: 3, label: "Nearly every day" },
];

/// Map `score` through an ascending table of inclusive upper bounds. Scores
/// above the last bound get `top`.
pub(crate) fn classify<L: Copy>(upper_bounds: &[(u8, L)], top: L, score: u8) -> L {
    upper_bounds
        .iter()
        .find(|(max, _)| score <= *max)
        .map_or(top, |(_, level)| *level)
}

/// Expand an upper-bound table into closed bands ending at `max_total`.
pub(crate) fn bands<L: Copy>(
    upper_bounds: &[(u8, L)],
    top: L,
    max_total: u8,
    label: impl Fn(L) -> &'static str,
) -> Vec<SeverityBand> {
    let mut bands = Vec::with_capacity(upper_bounds.len() + 1);
    let mut min = 0;
    for &(max, level) in upper_bounds {
        bands.push(SeverityBand {
            range: ScoreRange { min, max },
            label: label(level).to_string(),
        });
        min = max + 1;
    }
    bands.push(SeverityBand {
        range: ScoreRange { min, max: max_total },
        label: label(top).to_string(),
    });
    bands
}

pub(crate) fn items(prefix: &str, texts: &[&str]) -> Vec<Item> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Item {
            id: format!("{prefix}_{}", i + 1),
            number: i + 1,
            text: text.to_string(),
        })
        .collect()
}
