//! Navigation and Assistant Capabilities
//!
//! The home view never resolves routes itself. It hands opaque route
//! identifiers to an injected [`Navigator`] and forwards AI queries and voice
//! activation to an injected [`Assistant`].

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

/// Routes the home view links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Sales,
    Projects,
    Orders,
    Tasks,
    NewLead,
    DealerDirectory,
    Samples,
    Products,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Sales,
        Route::Projects,
        Route::Orders,
        Route::Tasks,
        Route::NewLead,
        Route::DealerDirectory,
        Route::Samples,
        Route::Products,
    ];

    /// Identifier handed to the router
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Sales => "sales",
            Route::Projects => "projects",
            Route::Orders => "orders",
            Route::Tasks => "tasks",
            Route::NewLead => "new-lead",
            Route::DealerDirectory => "resources/dealer-directory",
            Route::Samples => "samples",
            Route::Products => "products",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known routes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Moves the user to another screen
pub trait Navigator {
    fn go(&self, route: &str);
}

/// Receives AI queries and voice activation from the header
pub trait Assistant {
    fn ask(&self, query: &str);
    fn activate_voice(&self);
}

/// Something the home view asked its parent to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    Navigate(String),
    AskAi(String),
    VoiceActivate,
}

/// Records every callback invocation in order
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<DashboardEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<DashboardEvent> {
        self.events.borrow().clone()
    }

    /// Routes navigated to, in order
    pub fn routes(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                DashboardEvent::Navigate(route) => Some(route.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn record(&self, event: DashboardEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Navigator for EventLog {
    fn go(&self, route: &str) {
        self.record(DashboardEvent::Navigate(route.to_string()));
    }
}

impl Assistant for EventLog {
    fn ask(&self, query: &str) {
        self.record(DashboardEvent::AskAi(query.to_string()));
    }

    fn activate_voice(&self) {
        self.record(DashboardEvent::VoiceActivate);
    }
}

/// Navigator and assistant that only emit log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn go(&self, route: &str) {
        tracing::info!(route, "Navigate");
    }
}

impl Assistant for TracingNavigator {
    fn ask(&self, query: &str) {
        tracing::info!(query, "Ask AI");
    }

    fn activate_voice(&self) {
        tracing::info!("Voice assistant activated");
    }
}
