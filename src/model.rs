//! Dashboard Data Model
//!
//! Input collections handed to the home view by its parent application.
//! Everything here is read-only from the view's point of view.

use serde::{Deserialize, Serialize};

/// Stage label marking an opportunity as closed and won
pub const STAGE_WON: &str = "Won";

/// Stage label marking an opportunity as closed and lost
pub const STAGE_LOST: &str = "Lost";

/// A sales pipeline record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Opportunity {
    /// Free-form lifecycle label
    #[serde(default)]
    pub stage: Option<String>,
    /// Monetary amount, numeric or as entered
    #[serde(default)]
    pub value: MonetaryValue,
}

impl Opportunity {
    /// Create an opportunity with a numeric amount
    pub fn new(stage: impl Into<String>, amount: f64) -> Self {
        Self {
            stage: Some(stage.into()),
            value: MonetaryValue::Amount(amount),
        }
    }

    /// Create an opportunity whose amount is free text (e.g. "$5,000.50")
    pub fn with_text(stage: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            stage: Some(stage.into()),
            value: MonetaryValue::Text(text.into()),
        }
    }

    /// Whether this opportunity still counts toward the active pipeline.
    ///
    /// A missing stage matches neither terminal label, so it is active.
    pub fn is_active(&self) -> bool {
        !matches!(self.stage.as_deref(), Some(STAGE_WON) | Some(STAGE_LOST))
    }
}

/// Monetary amount as supplied by the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonetaryValue {
    /// Already numeric
    Amount(f64),
    /// Textual, possibly with currency symbols and separators
    Text(String),
    /// Null or absent
    #[default]
    Missing,
}

impl From<f64> for MonetaryValue {
    fn from(amount: f64) -> Self {
        MonetaryValue::Amount(amount)
    }
}

impl From<&str> for MonetaryValue {
    fn from(text: &str) -> Self {
        MonetaryValue::Text(text.to_string())
    }
}

/// An order record. Only the count matters to the home view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(pub serde_json::Value);

/// A customer directory entry. Part of the input contract, not read by the
/// aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer(pub serde_json::Value);

/// Everything the parent application hands to the home view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default, alias = "customers")]
    pub customer_directory: Vec<Customer>,
}

impl DashboardData {
    /// Opportunities still in the active pipeline
    pub fn active_opportunities(&self) -> impl Iterator<Item = &Opportunity> {
        self.opportunities.iter().filter(|o| o.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_stages_are_inactive() {
        assert!(!Opportunity::new("Won", 1.0).is_active());
        assert!(!Opportunity::new("Lost", 1.0).is_active());
        assert!(Opportunity::new("Open", 1.0).is_active());
        assert!(Opportunity::new("won", 1.0).is_active());
        assert!(Opportunity::default().is_active());
    }

    #[test]
    fn test_value_deserializes_untagged() {
        let opps: Vec<Opportunity> = serde_json::from_str(
            r#"[
                {"stage": "Open", "value": 45000},
                {"stage": "Open", "value": "$5,000.50"},
                {"stage": "Open", "value": null},
                {"value": 12}
            ]"#,
        )
        .unwrap();

        assert_eq!(opps[0].value, MonetaryValue::Amount(45000.0));
        assert_eq!(opps[1].value, MonetaryValue::Text("$5,000.50".to_string()));
        assert_eq!(opps[2].value, MonetaryValue::Missing);
        assert_eq!(opps[3].stage, None);
    }

    #[test]
    fn test_dashboard_data_defaults() {
        let data: DashboardData =
            serde_json::from_str(r#"{"orders": [{"id": 1}, "loose", 3]}"#).unwrap();

        assert!(data.opportunities.is_empty());
        assert_eq!(data.orders.len(), 3);
        assert!(data.customer_directory.is_empty());
    }

    #[test]
    fn test_customer_directory_alias() {
        let data: DashboardData =
            serde_json::from_str(r#"{"customers": [{"name": "Acme"}]}"#).unwrap();
        assert_eq!(data.customer_directory.len(), 1);
    }
}
