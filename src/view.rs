//! Home View Model
//!
//! The composition root of the home screen: turns the parent's data and the
//! configured lists into the models each presentation component renders,
//! and routes user interactions to the injected callbacks.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::catalog::{ActionItem, Shortcut};
use crate::config::Config;
use crate::metrics::{summarize, DashboardMetrics};
use crate::model::DashboardData;
use crate::navigation::{Assistant, Navigator, Route};

/// Header model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderModel {
    pub greeting: String,
    pub date_label: String,
    pub user_name: String,
    pub ask_placeholder: String,
}

impl HeaderModel {
    pub fn new(user_name: &str, ask_placeholder: &str, now: NaiveDateTime) -> Self {
        Self {
            greeting: greeting_for_hour(now.hour()).to_string(),
            date_label: now.format("%A, %B %-d").to_string(),
            user_name: user_name.to_string(),
            ask_placeholder: ask_placeholder.to_string(),
        }
    }
}

/// Greeting for the local hour of day
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// The three cards in the stats section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Pipeline,
    Projects,
    Orders,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [StatKind::Pipeline, StatKind::Projects, StatKind::Orders];

    /// Stable lowercase identifier, same as the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            StatKind::Pipeline => "pipeline",
            StatKind::Projects => "projects",
            StatKind::Orders => "orders",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Pipeline => "Active Pipeline",
            StatKind::Projects => "Projects",
            StatKind::Orders => "Orders",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            StatKind::Pipeline => Route::Sales,
            StatKind::Projects => Route::Projects,
            StatKind::Orders => Route::Orders,
        }
    }
}

/// One card in the stats section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: String,
    pub value: String,
    pub route: String,
}

/// Build the stats cards for a set of metrics
pub fn stat_cards(metrics: &DashboardMetrics) -> Vec<StatCard> {
    StatKind::ALL
        .into_iter()
        .map(|kind| {
            let value = match kind {
                StatKind::Pipeline => metrics.pipeline.clone(),
                StatKind::Projects => metrics.projects.to_string(),
                StatKind::Orders => metrics.orders.to_string(),
            };
            StatCard {
                kind,
                label: kind.label().to_string(),
                value,
                route: kind.route().as_str().to_string(),
            }
        })
        .collect()
}

/// A discrete user action on the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    StatCard(StatKind),
    ViewAllActions,
    Action(String),
    Shortcut(String),
    AskAi(String),
    VoiceActivate,
}

/// Everything the home screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub header: HeaderModel,
    pub metrics: DashboardMetrics,
    pub stats: Vec<StatCard>,
    pub actions: Vec<ActionItem>,
    pub shortcuts: Vec<Shortcut>,
}

impl HomeView {
    /// Assemble the home view from the parent's data and the configured lists
    pub fn compose(data: &DashboardData, config: &Config, now: NaiveDateTime) -> Self {
        let metrics = summarize(&data.opportunities, &data.orders);
        tracing::debug!(
            pipeline = %metrics.pipeline,
            projects = metrics.projects,
            orders = metrics.orders,
            "Composed home view"
        );

        Self {
            header: HeaderModel::new(
                &config.dashboard.user_name,
                &config.dashboard.ask_placeholder,
                now,
            ),
            stats: stat_cards(&metrics),
            metrics,
            actions: config.actions.clone(),
            shortcuts: config.shortcuts.clone(),
        }
    }

    /// Route an interaction to exactly one callback. See [`dispatch`].
    pub fn dispatch(
        &self,
        interaction: &Interaction,
        navigator: &dyn Navigator,
        assistant: &dyn Assistant,
    ) -> bool {
        dispatch(interaction, &self.actions, &self.shortcuts, navigator, assistant)
    }
}

/// Route an interaction to exactly one callback.
///
/// Action and shortcut ids are looked up in the given lists. Returns `false`
/// without invoking anything when the interaction names an unknown item or
/// carries a blank query.
pub fn dispatch(
    interaction: &Interaction,
    actions: &[ActionItem],
    shortcuts: &[Shortcut],
    navigator: &dyn Navigator,
    assistant: &dyn Assistant,
) -> bool {
    match interaction {
        Interaction::StatCard(kind) => {
            navigator.go(kind.route().as_str());
            true
        }
        Interaction::ViewAllActions => {
            navigator.go(Route::Tasks.as_str());
            true
        }
        Interaction::Action(id) => match actions.iter().find(|a| &a.id == id) {
            Some(action) => {
                navigator.go(&action.route);
                true
            }
            None => {
                tracing::warn!(id = %id, "Unknown action item");
                false
            }
        },
        Interaction::Shortcut(id) => match shortcuts.iter().find(|s| &s.id == id) {
            Some(shortcut) => {
                navigator.go(&shortcut.route);
                true
            }
            None => {
                tracing::warn!(id = %id, "Unknown shortcut");
                false
            }
        },
        Interaction::AskAi(query) => {
            let query = query.trim();
            if query.is_empty() {
                return false;
            }
            assistant.ask(query);
            true
        }
        Interaction::VoiceActivate => {
            assistant.activate_voice();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Opportunity, Order};
    use crate::navigation::{DashboardEvent, EventLog};
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 8)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap()
    }

    fn sample_view() -> HomeView {
        let data = DashboardData {
            opportunities: vec![
                Opportunity::new("Open", 45_000.0),
                Opportunity::new("Won", 99_999.0),
                Opportunity::with_text("Open", "$5,000.50"),
            ],
            orders: vec![Order::default(); 3],
            customer_directory: Vec::new(),
        };
        HomeView::compose(&data, &Config::default(), at(9))
    }

    #[test]
    fn test_greeting_for_hour() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(16), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn test_header_model() {
        let header = HeaderModel::new("Jordan", "Ask...", at(14));
        assert_eq!(header.greeting, "Good afternoon");
        assert_eq!(header.date_label, "Friday, March 8");
        assert_eq!(header.user_name, "Jordan");
    }

    #[test]
    fn test_compose_stats() {
        let view = sample_view();
        let values: Vec<_> = view.stats.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["$50k", "2", "3"]);

        let routes: Vec<_> = view.stats.iter().map(|c| c.route.as_str()).collect();
        assert_eq!(routes, vec!["sales", "projects", "orders"]);
    }

    #[test]
    fn test_sales_card_navigates_once() {
        let view = sample_view();
        let log = EventLog::new();

        assert!(view.dispatch(&Interaction::StatCard(StatKind::Pipeline), &log, &log));
        assert_eq!(log.events(), vec![DashboardEvent::Navigate("sales".to_string())]);
    }

    #[test]
    fn test_view_all_and_shortcuts() {
        let view = sample_view();
        let log = EventLog::new();

        view.dispatch(&Interaction::ViewAllActions, &log, &log);
        view.dispatch(&Interaction::Shortcut("dealer-directory".to_string()), &log, &log);
        view.dispatch(&Interaction::Action("order-summit".to_string()), &log, &log);

        assert_eq!(
            log.routes(),
            vec!["tasks", "resources/dealer-directory", "orders"]
        );
    }

    #[test]
    fn test_unknown_items_invoke_nothing() {
        let view = sample_view();
        let log = EventLog::new();

        assert!(!view.dispatch(&Interaction::Shortcut("nope".to_string()), &log, &log));
        assert!(!view.dispatch(&Interaction::Action("nope".to_string()), &log, &log));
        assert!(!view.dispatch(&Interaction::AskAi("   ".to_string()), &log, &log));
        assert!(log.is_empty());
    }

    #[test]
    fn test_dispatch_against_configured_lists() {
        let actions = vec![ActionItem::new(
            "rma",
            "Process return",
            "Chair arm cracked",
            crate::catalog::ActionCategory::Other("Warranty".to_string()),
            "package",
            Route::Orders,
        )];
        let log = EventLog::new();

        assert!(dispatch(&Interaction::Action("rma".to_string()), &actions, &[], &log, &log));
        assert!(!dispatch(&Interaction::Shortcut("samples".to_string()), &actions, &[], &log, &log));
        assert_eq!(log.routes(), vec!["orders"]);
    }

    #[test]
    fn test_stat_kind_key_matches_serialized_form() {
        for kind in StatKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::json!(kind.key()));
        }
    }

    #[test]
    fn test_assistant_interactions() {
        let view = sample_view();
        let log = EventLog::new();

        view.dispatch(&Interaction::AskAi("  top dealers this month ".to_string()), &log, &log);
        view.dispatch(&Interaction::VoiceActivate, &log, &log);

        assert_eq!(
            log.events(),
            vec![
                DashboardEvent::AskAi("top dealers this month".to_string()),
                DashboardEvent::VoiceActivate,
            ]
        );
    }
}
