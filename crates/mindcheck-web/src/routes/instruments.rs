use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use mindcheck_instruments::scoring::{Item, ResponseOption, ScoreRange, SeverityBand};
use mindcheck_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    prompt: String,
    answer_range: ScoreRange,
    response_options: Vec<ResponseOption>,
    items: Vec<Item>,
    bands: Vec<SeverityBand>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        prompt: instrument.prompt().to_string(),
        answer_range: instrument.answer_range(),
        response_options: instrument.response_options().to_vec(),
        items: instrument.items().to_vec(),
        bands: instrument.bands(),
    }))
}
