//! Dashboard Data Loading
//!
//! Reads the collections a parent application would hand to the home view:
//! a JSON document with opportunities, orders, and the customer directory,
//! or a CSV export of opportunities.

pub mod csv_import;
pub mod error;

pub use csv_import::{OpportunityCsvImporter, OpportunityImport};
pub use error::{DataError, DataResult};

use std::path::Path;

use crate::model::DashboardData;

/// Parse a dashboard data JSON document
pub fn parse_json(content: &str) -> DataResult<DashboardData> {
    Ok(serde_json::from_str(content)?)
}

/// Load a dashboard data JSON file
pub fn load_json(path: &Path) -> DataResult<DashboardData> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data = parse_json(&content)?;
    tracing::debug!(
        path = ?path,
        opportunities = data.opportunities.len(),
        orders = data.orders.len(),
        customers = data.customer_directory.len(),
        "Loaded dashboard data"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MonetaryValue;

    const SAMPLE: &str = r#"{
        "opportunities": [
            {"stage": "Open", "value": 45000},
            {"stage": "Won", "value": 99999},
            {"stage": "Open", "value": "$5,000.50"}
        ],
        "orders": [{"id": "SO-1"}, {"id": "SO-2"}],
        "customerDirectory": [{"name": "Lakeside Interiors"}]
    }"#;

    #[test]
    fn test_parse_json() {
        let data = parse_json(SAMPLE).unwrap();
        assert_eq!(data.opportunities.len(), 3);
        assert_eq!(
            data.opportunities[2].value,
            MonetaryValue::Text("$5,000.50".to_string())
        );
        assert_eq!(data.orders.len(), 2);
        assert_eq!(data.customer_directory.len(), 1);
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let data = load_json(&path).unwrap();
        assert_eq!(data.active_opportunities().count(), 2);
    }

    #[test]
    fn test_load_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_json(&missing), Err(DataError::Io { .. })));

        assert!(matches!(
            parse_json(r#"{"opportunities": 5}"#),
            Err(DataError::Json(_))
        ));
    }
}
