use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::daily::DailyRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid or empty data provided for CSV conversion.")]
    Empty,

    #[error("Record {0} is not an object.")]
    Malformed(usize),

    #[error("CSV conversion failed.")]
    Conversion(#[source] anyhow::Error),
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// Absent or null fields become empty cells.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(DailyRecord::FIELDS)
        .map_err(|e| ExportError::Conversion(e.into()))?;

    for (i, record) in records.iter().enumerate() {
        let value = serde_json::to_value(record).map_err(|e| ExportError::Conversion(e.into()))?;
        let Value::Object(fields) = value else {
            return Err(ExportError::Malformed(i));
        };
        let row = DailyRecord::FIELDS.iter().map(|name| cell(fields.get(*name)));
        wtr.write_record(row)
            .map_err(|e| ExportError::Conversion(e.into()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Conversion(anyhow::anyhow!("{}", e.error())))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Conversion(e.into()))
}
