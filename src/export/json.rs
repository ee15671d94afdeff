//! JSON export of chart datasets
//!
//! Output carries a schema version so external renderers can check
//! compatibility.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::ChartData;

/// Current chart export schema version
pub const CHART_SCHEMA_VERSION: &str = "1.0.0";

/// Chart datasets wrapped with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct ChartExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: &'a ChartData,
}

impl<'a> ChartExport<'a> {
    pub fn new(data: &'a ChartData) -> Self {
        Self {
            schema_version: CHART_SCHEMA_VERSION,
            exported_at: Utc::now(),
            data,
        }
    }
}

/// Write chart datasets as pretty-printed JSON
pub fn export_chart_json<W: Write>(data: &ChartData, writer: &mut W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ChartExport::new(data))
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
