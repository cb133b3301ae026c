use serde::Serialize;

use mindcheck_core::models::severity::Gad7Level;

use crate::error::InstrumentError;
use crate::scoring::{self, Item, SeverityBand};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale, 7 items rated 0–3. Total 0–21.
pub struct Gad7;

const UPPER_BOUNDS: [(u8, Gad7Level); 3] = [
    (4, Gad7Level::Minimal),
    (9, Gad7Level::Mild),
    (14, Gad7Level::Moderate),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gad7Score {
    pub score: u8,
    pub level: Gad7Level,
}

/// Score a full GAD-7 response.
pub fn score_gad7(answers: &[u8]) -> Result<Gad7Score, InstrumentError> {
    let score = Gad7.total(answers)?;
    Ok(Gad7Score {
        score,
        level: gad7_level(score),
    })
}

pub fn gad7_level(score: u8) -> Gad7Level {
    scoring::classify(&UPPER_BOUNDS, Gad7Level::Severe, score)
}

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn prompt(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by the following problems?"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            scoring::items(
                "gad7",
                &[
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it is hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid, as if something awful might happen",
                ],
            )
        });
        &ITEMS
    }

    fn bands(&self) -> Vec<SeverityBand> {
        scoring::bands(&UPPER_BOUNDS, Gad7Level::Severe, self.max_total(), Gad7Level::label)
    }
}
