//! Opportunity CSV Import
//!
//! Reads opportunities from a CRM export. Non-empty value cells are kept as
//! entered text so the aggregator applies its usual lenient parsing to them,
//! even when a cell happens to look like a plain number.

use std::io::Read;
use std::path::Path;

use super::error::{DataError, DataResult};
use crate::model::{MonetaryValue, Opportunity};

/// CSV importer with configurable column mapping
pub struct OpportunityCsvImporter {
    /// Column index holding the stage label (0-indexed)
    stage_column: Option<usize>,
    /// Column index holding the monetary value (0-indexed)
    value_column: Option<usize>,
    /// Whether the CSV has a header row
    has_header: bool,
}

/// Result of an import
#[derive(Debug, Default)]
pub struct OpportunityImport {
    pub opportunities: Vec<Opportunity>,
    pub rows_processed: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

impl Default for OpportunityCsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OpportunityCsvImporter {
    /// Create an importer that detects its columns from the header row
    pub fn new() -> Self {
        Self {
            stage_column: None,
            value_column: None,
            has_header: true,
        }
    }

    /// Set the stage column index
    pub fn with_stage_column(mut self, column: usize) -> Self {
        self.stage_column = Some(column);
        self
    }

    /// Set the value column index
    pub fn with_value_column(mut self, column: usize) -> Self {
        self.value_column = Some(column);
        self
    }

    /// Set whether the CSV has a header row
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Fill in any unset column from the header row
    pub fn auto_detect_columns(&mut self, headers: &csv::StringRecord) {
        for (idx, header) in headers.iter().enumerate() {
            let header_lower = header.trim().to_lowercase();

            if self.stage_column.is_none() && (header_lower == "stage" || header_lower == "status")
            {
                self.stage_column = Some(idx);
                continue;
            }

            if self.value_column.is_none()
                && matches!(header_lower.as_str(), "value" | "amount" | "deal value")
            {
                self.value_column = Some(idx);
            }
        }
    }

    /// Import opportunities from a CSV file
    pub fn import(self, path: &Path) -> DataResult<OpportunityImport> {
        let file = std::fs::File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_reader(file)
    }

    /// Import opportunities from CSV text
    pub fn import_str(self, data: &str) -> DataResult<OpportunityImport> {
        self.import_reader(data.as_bytes())
    }

    fn import_reader<R: Read>(mut self, source: R) -> DataResult<OpportunityImport> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_header)
            .flexible(true)
            .from_reader(source);

        if self.has_header {
            let headers = reader.headers()?.clone();
            self.auto_detect_columns(&headers);
        }

        let stage_column = self
            .stage_column
            .ok_or_else(|| DataError::MissingColumn("stage".to_string()))?;
        let value_column = self
            .value_column
            .ok_or_else(|| DataError::MissingColumn("value".to_string()))?;

        let mut result = OpportunityImport::default();

        for (line_num, record) in reader.records().enumerate() {
            let actual_line = if self.has_header {
                line_num + 2
            } else {
                line_num + 1
            };

            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    result.errors.push(format!("Line {}: {}", actual_line, e));
                    result.rows_failed += 1;
                    continue;
                }
            };

            let stage = match record.get(stage_column) {
                Some(s) => s.trim(),
                None => {
                    result
                        .errors
                        .push(format!("Line {}: missing stage column", actual_line));
                    result.rows_failed += 1;
                    continue;
                }
            };

            let value = record
                .get(value_column)
                .map(str::trim)
                .map(cell_value)
                .unwrap_or_default();

            result.opportunities.push(Opportunity {
                stage: (!stage.is_empty()).then(|| stage.to_string()),
                value,
            });
            result.rows_processed += 1;
        }

        tracing::debug!(
            processed = result.rows_processed,
            failed = result.rows_failed,
            "Imported opportunities from CSV"
        );

        Ok(result)
    }
}

/// Empty cells are missing; everything else stays text
fn cell_value(cell: &str) -> MonetaryValue {
    if cell.is_empty() {
        MonetaryValue::Missing
    } else {
        MonetaryValue::Text(cell.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::summarize;

    #[test]
    fn test_import_with_detected_columns() {
        let csv_data = "account,Stage,Amount
Lakeside Interiors,Proposal,\"$12,500\"
Harbor Design,Won,40000
Summit Health,Negotiation,30000.75";

        let result = OpportunityCsvImporter::new().import_str(csv_data).unwrap();

        assert_eq!(result.rows_processed, 3);
        assert_eq!(result.rows_failed, 0);
        assert_eq!(
            result.opportunities[0].value,
            MonetaryValue::Text("$12,500".to_string())
        );
        assert_eq!(
            result.opportunities[2].value,
            MonetaryValue::Text("30000.75".to_string())
        );

        let metrics = summarize(&result.opportunities, &[]);
        assert_eq!(metrics.projects, 2);
        assert_eq!(metrics.pipeline, "$43k");
    }

    #[test]
    fn test_numeric_looking_cells_stay_text() {
        let csv_data = "stage,value
Open,-500
Open,1e3";

        let result = OpportunityCsvImporter::new().import_str(csv_data).unwrap();

        assert_eq!(
            result.opportunities[0].value,
            MonetaryValue::Text("-500".to_string())
        );
        assert_eq!(
            result.opportunities[1].value,
            MonetaryValue::Text("1e3".to_string())
        );

        // "-500" reads as 500 and "1e3" as 13 under the text rule
        assert_eq!(summarize(&result.opportunities, &[]).pipeline, "$1k");
    }

    #[test]
    fn test_empty_cells() {
        let csv_data = "stage,value
Open,
,500";

        let result = OpportunityCsvImporter::new().import_str(csv_data).unwrap();

        assert_eq!(result.opportunities[0].value, MonetaryValue::Missing);
        assert_eq!(result.opportunities[1].stage, None);
        assert!(result.opportunities[1].is_active());
    }

    #[test]
    fn test_explicit_columns_without_header() {
        let csv_data = "1000,Open\n2000,Lost";

        let result = OpportunityCsvImporter::new()
            .with_header(false)
            .with_stage_column(1)
            .with_value_column(0)
            .import_str(csv_data)
            .unwrap();

        assert_eq!(result.rows_processed, 2);
        assert_eq!(result.opportunities[1].stage.as_deref(), Some("Lost"));
    }

    #[test]
    fn test_short_rows_are_reported() {
        let csv_data = "value,stage
100,Open
200";

        let result = OpportunityCsvImporter::new().import_str(csv_data).unwrap();

        assert_eq!(result.rows_processed, 1);
        assert_eq!(result.rows_failed, 1);
        assert!(result.errors[0].starts_with("Line 3"));
    }

    #[test]
    fn test_missing_column() {
        let err = OpportunityCsvImporter::new()
            .import_str("name,amount\nAcme,10")
            .unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(ref c) if c == "stage"));
    }
}
