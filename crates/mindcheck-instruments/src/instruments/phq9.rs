use serde::Serialize;

use mindcheck_core::models::severity::Phq9Level;

use crate::error::InstrumentError;
use crate::scoring::{self, Item, SeverityBand};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, 9 items rated 0–3. Total 0–27.
/// Item 9 asks about thoughts of death or self-harm.
pub struct Phq9;

/// Zero-based index of the self-harm item.
pub const SUICIDAL_IDEATION_ITEM: usize = 8;

const UPPER_BOUNDS: [(u8, Phq9Level); 4] = [
    (4, Phq9Level::Minimal),
    (9, Phq9Level::Mild),
    (14, Phq9Level::Moderate),
    (19, Phq9Level::ModeratelySevere),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phq9Score {
    pub score: u8,
    pub level: Phq9Level,
    pub suicidal_ideation: bool,
}

/// Score a full PHQ-9 response.
pub fn score_phq9(answers: &[u8]) -> Result<Phq9Score, InstrumentError> {
    let score = Phq9.total(answers)?;
    Ok(Phq9Score {
        score,
        level: phq9_level(score),
        suicidal_ideation: answers[SUICIDAL_IDEATION_ITEM] >= 1,
    })
}

pub fn phq9_level(score: u8) -> Phq9Level {
    scoring::classify(&UPPER_BOUNDS, Phq9Level::Severe, score)
}

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn prompt(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by any of the following problems?"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            scoring::items(
                "phq9",
                &[
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                    "Trouble concentrating on things, such as reading or watching television",
                    "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                    "Thoughts that you would be better off dead, or of hurting yourself in some way",
                ],
            )
        });
        &ITEMS
    }

    fn bands(&self) -> Vec<SeverityBand> {
        scoring::bands(&UPPER_BOUNDS, Phq9Level::Severe, self.max_total(), Phq9Level::label)
    }
}
