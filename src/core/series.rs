use indexmap::IndexMap;

use crate::core::timestamp::{TimestampFormat, parse_timestamp};
use crate::core::types::SamplePoint;
use crate::error::{ChartError, ChartResult};

/// One wire row: a single-entry timestamp-key to value map.
type RawEntry = IndexMap<String, f64>;

/// Parses the reference wire shape, a JSON array of single-key
/// timestamp-to-value maps, into an ordered sample list.
///
/// `IndexMap` keeps each row's key order stable, so the series order is
/// exactly the document order. Rows with zero or several keys are malformed.
/// Sortedness by time is the producer's contract and is not enforced here.
pub fn parse_series_json(input: &str, format: TimestampFormat) -> ChartResult<Vec<SamplePoint>> {
    let rows: Vec<RawEntry> = serde_json::from_str(input)
        .map_err(|err| ChartError::InvalidData(format!("malformed series document: {err}")))?;

    let mut samples = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if row.len() != 1 {
            return Err(ChartError::InvalidData(format!(
                "series entry {index} must map exactly one timestamp to one value, got {} keys",
                row.len()
            )));
        }
        let (key, value) = row.first().ok_or_else(|| {
            ChartError::InvalidData(format!("series entry {index} has no timestamp key"))
        })?;
        let time = parse_timestamp(key, format)?;
        samples.push(SamplePoint::new(time, *value));
    }
    Ok(samples)
}
