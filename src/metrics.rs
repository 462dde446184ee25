//! Dashboard Metrics
//!
//! Derives the three summary numbers shown in the stats section:
//! active pipeline value, active project count, and order count.
//!
//! The aggregation is total: malformed monetary values contribute zero
//! instead of failing. [`audit`] reports those values separately so callers
//! can surface them as data-quality warnings without changing the totals.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{MonetaryValue, Opportunity, Order};

/// Summary numbers for the stats section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Active pipeline value, formatted in thousands (e.g. "$46k")
    pub pipeline: String,
    /// Number of active opportunities
    pub projects: usize,
    /// Number of orders
    pub orders: usize,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            pipeline: format_pipeline(0.0),
            projects: 0,
            orders: 0,
        }
    }
}

/// Compute the dashboard metrics from the input collections
pub fn summarize(opportunities: &[Opportunity], orders: &[Order]) -> DashboardMetrics {
    let (total, projects) = opportunities
        .iter()
        .filter(|o| o.is_active())
        .fold((0.0_f64, 0_usize), |(sum, count), o| {
            (sum + resolve_value(&o.value), count + 1)
        });

    DashboardMetrics {
        pipeline: format_pipeline(total),
        projects,
        orders: orders.len(),
    }
}

/// Resolve a monetary value to a number, degrading to zero when it can't be read
pub fn resolve_value(value: &MonetaryValue) -> f64 {
    match value {
        MonetaryValue::Amount(n) if n.is_finite() => *n,
        MonetaryValue::Amount(_) => 0.0,
        MonetaryValue::Text(text) => parse_amount(text).unwrap_or(0.0),
        MonetaryValue::Missing => 0.0,
    }
}

/// Parse a free-text amount such as "$5,000.50".
///
/// Every character other than an ASCII digit or '.' is dropped, then the
/// longest leading `digits[.digits]` prefix is parsed. Returns `None` when no
/// digits remain in that prefix.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, c) in cleaned.char_indices() {
        match c {
            '.' if !seen_dot => seen_dot = true,
            '.' => break,
            _ => seen_digit = true,
        }
        end = idx + 1;
    }

    if !seen_digit {
        return None;
    }

    cleaned[..end].parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Format a raw pipeline total in thousands: 45_678.0 -> "$46k"
///
/// Halves round up toward positive infinity, so -2_500.0 is "$-2k".
pub fn format_pipeline(total: f64) -> String {
    let thousands = (total / 1000.0 + 0.5).floor();
    // `as` saturates and folds -0.0 into 0
    format!("${}k", thousands as i64)
}

/// An active opportunity whose value degraded to zero
#[derive(Debug, Clone, PartialEq)]
pub struct UnreadableValue {
    /// Position in the input collection
    pub index: usize,
    pub stage: Option<String>,
    pub value: MonetaryValue,
}

/// Data-quality report for the active pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineAudit {
    /// Number of active opportunities inspected
    pub inspected: usize,
    pub unreadable: Vec<UnreadableValue>,
}

impl PipelineAudit {
    pub fn is_clean(&self) -> bool {
        self.unreadable.is_empty()
    }
}

/// List active opportunities whose value could not be read.
///
/// Explicit zeros (`0`, `"$0"`) are readable and not reported.
pub fn audit(opportunities: &[Opportunity]) -> PipelineAudit {
    let mut report = PipelineAudit::default();

    for (index, opp) in opportunities.iter().enumerate() {
        if !opp.is_active() {
            continue;
        }
        report.inspected += 1;

        let readable = match &opp.value {
            MonetaryValue::Amount(n) => n.is_finite(),
            MonetaryValue::Text(text) => parse_amount(text).is_some(),
            MonetaryValue::Missing => false,
        };

        if !readable {
            report.unreadable.push(UnreadableValue {
                index,
                stage: opp.stage.clone(),
                value: opp.value.clone(),
            });
        }
    }

    report
}

/// Caches the last computed metrics, keyed on the identity of the inputs.
///
/// Inputs are shared as `Arc<[T]>` and treated as immutable, so pointer
/// identity is enough to decide whether the cached value is still valid.
#[derive(Debug, Default)]
pub struct MetricsMemo {
    cached: Option<CachedMetrics>,
    recomputations: u64,
}

#[derive(Debug)]
struct CachedMetrics {
    opportunities: Arc<[Opportunity]>,
    orders: Arc<[Order]>,
    metrics: DashboardMetrics,
}

impl MetricsMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the metrics for these inputs, recomputing only if either
    /// collection is a different allocation than last time
    pub fn get(
        &mut self,
        opportunities: &Arc<[Opportunity]>,
        orders: &Arc<[Order]>,
    ) -> &DashboardMetrics {
        let hit = self.cached.as_ref().is_some_and(|c| {
            Arc::ptr_eq(&c.opportunities, opportunities) && Arc::ptr_eq(&c.orders, orders)
        });

        if !hit {
            tracing::trace!(
                opportunities = opportunities.len(),
                orders = orders.len(),
                "Recomputing dashboard metrics"
            );
            self.recomputations += 1;
            self.cached = None;
        }

        &self
            .cached
            .get_or_insert_with(|| CachedMetrics {
                opportunities: Arc::clone(opportunities),
                orders: Arc::clone(orders),
                metrics: summarize(opportunities, orders),
            })
            .metrics
    }

    /// How many times the metrics were actually computed
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drop the cached value
    pub fn clear(&mut self) {
        self.cached = None;
    }
}
