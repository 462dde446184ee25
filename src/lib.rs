//! # Dealer Home
//!
//! The home screen of a sales/dealer application: a header with an AI ask
//! box, a stats summary of the active pipeline, an action list, and a
//! quick-access grid.
//!
//! ## Modules
//!
//! - [`model`]: Input collections (opportunities, orders, customers)
//! - [`metrics`]: Pipeline aggregation and identity-keyed memoization
//! - [`navigation`]: Injected navigator and assistant capabilities
//! - [`catalog`]: Action items and quick-access shortcuts
//! - [`view`]: Composition root and interaction dispatch
//! - [`data`]: JSON and CSV loading
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use dealer_home::{summarize, Opportunity};
//!
//! let opportunities = vec![
//!     Opportunity::new("Open", 45_000.0),
//!     Opportunity::new("Won", 99_999.0),
//!     Opportunity::with_text("Open", "$5,000.50"),
//! ];
//!
//! let metrics = summarize(&opportunities, &[]);
//! assert_eq!(metrics.pipeline, "$50k");
//! assert_eq!(metrics.projects, 2);
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod metrics;
pub mod model;
pub mod navigation;
pub mod view;

pub use model::{Customer, DashboardData, MonetaryValue, Opportunity, Order, STAGE_LOST, STAGE_WON};

pub use metrics::{
    audit, format_pipeline, parse_amount, resolve_value, summarize, DashboardMetrics,
    MetricsMemo, PipelineAudit, UnreadableValue,
};

pub use navigation::{
    Assistant, DashboardEvent, EventLog, Navigator, Route, TracingNavigator, UnknownRoute,
};

pub use catalog::{default_actions, default_shortcuts, ActionCategory, ActionItem, Shortcut};

pub use view::{HeaderModel, HomeView, Interaction, StatCard, StatKind};

pub use data::{DataError, DataResult, OpportunityCsvImporter, OpportunityImport};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig};
