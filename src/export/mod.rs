//! Export module for the finance tracker
//!
//! - CSV: report files named with a generation timestamp
//! - JSON: chart datasets for external renderers

pub mod csv;
pub mod json;

pub use self::csv::{report_file_name, write_report_file, REPORT_TIMESTAMP_FORMAT};
pub use self::json::{export_chart_json, ChartExport, CHART_SCHEMA_VERSION};
