//! Action and Shortcut Catalog
//!
//! The lists shown in the action list and the quick-access grid. They ship
//! with built-in defaults and can be replaced from the config file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::navigation::Route;

/// Kind of work an action item represents.
///
/// Read from free text; labels that match no known kind are kept as
/// [`ActionCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionCategory {
    FollowUp,
    Quote,
    Order,
    Sample,
    Task,
    Other(String),
}

impl ActionCategory {
    /// Badge text
    pub fn label(&self) -> &str {
        match self {
            ActionCategory::FollowUp => "Follow-up",
            ActionCategory::Quote => "Quote",
            ActionCategory::Order => "Order",
            ActionCategory::Sample => "Sample",
            ActionCategory::Task => "Task",
            ActionCategory::Other(label) => label,
        }
    }

    /// Tailwind classes for the category badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ActionCategory::FollowUp => "bg-blue-900 text-blue-300",
            ActionCategory::Quote => "bg-purple-900 text-purple-300",
            ActionCategory::Order => "bg-green-900 text-green-300",
            ActionCategory::Sample => "bg-amber-900 text-amber-300",
            ActionCategory::Task => "bg-sky-900 text-sky-300",
            ActionCategory::Other(_) => "bg-gray-700 text-gray-300",
        }
    }
}

impl From<String> for ActionCategory {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "follow-up" | "followup" | "follow up" => ActionCategory::FollowUp,
            "quote" => ActionCategory::Quote,
            "order" => ActionCategory::Order,
            "sample" | "samples" => ActionCategory::Sample,
            "task" => ActionCategory::Task,
            _ => ActionCategory::Other(label),
        }
    }
}

impl From<ActionCategory> for String {
    fn from(category: ActionCategory) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An item in the "things to do" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: ActionCategory,
    /// Icon reference understood by the frontend
    pub icon: String,
    /// Where activating the item takes the user
    #[serde(default = "default_action_route")]
    pub route: String,
}

fn default_action_route() -> String {
    Route::Tasks.as_str().to_string()
}

impl ActionItem {
    pub fn new(
        id: &str,
        title: &str,
        subtitle: &str,
        category: ActionCategory,
        icon: &str,
        route: Route,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            category,
            icon: icon.to_string(),
            route: route.as_str().to_string(),
        }
    }
}

/// A tile in the quick-access grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub route: String,
}

impl Shortcut {
    pub fn new(id: &str, label: &str, icon: &str, route: Route) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            route: route.as_str().to_string(),
        }
    }
}

/// Built-in action items
pub fn default_actions() -> Vec<ActionItem> {
    vec![
        ActionItem::new(
            "follow-up-lakeside",
            "Follow up with Lakeside Interiors",
            "Quote sent 3 days ago",
            ActionCategory::FollowUp,
            "phone",
            Route::Tasks,
        ),
        ActionItem::new(
            "quote-harbor",
            "Finalize quote for Harbor Design Group",
            "Due Friday",
            ActionCategory::Quote,
            "file-text",
            Route::Sales,
        ),
        ActionItem::new(
            "order-summit",
            "Confirm ship date for Summit Health order",
            "Awaiting dealer confirmation",
            ActionCategory::Order,
            "package",
            Route::Orders,
        ),
        ActionItem::new(
            "samples-northwind",
            "Send finish samples to Northwind Architects",
            "Requested yesterday",
            ActionCategory::Sample,
            "palette",
            Route::Samples,
        ),
    ]
}

/// Built-in quick-access shortcuts
pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("new-lead", "New Lead", "user-plus", Route::NewLead),
        Shortcut::new(
            "dealer-directory",
            "Dealer Directory",
            "book-open",
            Route::DealerDirectory,
        ),
        Shortcut::new("samples", "Samples", "palette", Route::Samples),
        Shortcut::new("products", "Products", "grid", Route::Products),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shortcut_routes() {
        let routes: Vec<_> = default_shortcuts().into_iter().map(|s| s.route).collect();
        assert_eq!(
            routes,
            vec!["new-lead", "resources/dealer-directory", "samples", "products"]
        );
    }

    #[test]
    fn test_default_actions_have_unique_ids() {
        let actions = default_actions();
        let mut ids: Vec<_> = actions.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), actions.len());
    }

    #[test]
    fn test_action_route_defaults_to_tasks() {
        let item: ActionItem = toml::from_str(
            r#"
            id = "call"
            title = "Call back"
            subtitle = "Today"
            category = "Follow-up"
            icon = "phone"
            "#,
        )
        .unwrap();
        assert_eq!(item.route, "tasks");
        assert_eq!(item.category, ActionCategory::FollowUp);
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(ActionCategory::from("Follow-up".to_string()), ActionCategory::FollowUp);
        assert_eq!(ActionCategory::from("QUOTE".to_string()), ActionCategory::Quote);
        assert_eq!(ActionCategory::from("samples".to_string()), ActionCategory::Sample);
        assert_eq!(
            ActionCategory::from("Warranty".to_string()),
            ActionCategory::Other("Warranty".to_string())
        );
    }

    #[test]
    fn test_category_badge_and_label() {
        assert_eq!(ActionCategory::Quote.badge_class(), "bg-purple-900 text-purple-300");
        assert_eq!(ActionCategory::FollowUp.to_string(), "Follow-up");

        let other = ActionCategory::Other("Warranty".to_string());
        assert_eq!(other.label(), "Warranty");
        assert_eq!(other.badge_class(), "bg-gray-700 text-gray-300");
    }

    #[test]
    fn test_category_serde() {
        let item: ActionItem = toml::from_str(
            r#"
            id = "rma"
            title = "Process return"
            subtitle = "Chair arm cracked"
            category = "Warranty"
            icon = "package"
            "#,
        )
        .unwrap();
        assert_eq!(item.category, ActionCategory::Other("Warranty".to_string()));

        let json = serde_json::to_value(ActionCategory::FollowUp).unwrap();
        assert_eq!(json, serde_json::json!("Follow-up"));
    }
}
