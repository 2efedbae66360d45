// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::OrderRecord;

/// JSON pretty-printed: an array of named records.
pub(crate) fn build_json(records: &[OrderRecord]) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// CSV (header incluso grazie a serde).
pub(crate) fn build_csv(records: &[OrderRecord]) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in records {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}
