//! Navigation Wiring
//!
//! Browser-side implementations of the home view's navigator and assistant.

use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use dealer_home::{Assistant, Navigator};

use crate::state::{GlobalState, Notice};

/// Router path for a route identifier
pub fn route_path(route: &str) -> String {
    format!("/{}", route.trim_start_matches('/'))
}

/// Navigator backed by the Leptos router
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    /// Must be created inside a `<Router>`
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn go(&self, route: &str) {
        (self.navigate)(&route_path(route));
    }
}

/// Assistant that records requests in global state
pub struct PageAssistant {
    state: GlobalState,
}

impl PageAssistant {
    pub fn new(state: GlobalState) -> Self {
        Self { state }
    }
}

impl Assistant for PageAssistant {
    fn ask(&self, query: &str) {
        web_sys::console::log_1(&format!("Ask AI: {}", query).into());
        self.state.last_query.set(Some(query.to_string()));
        self.state
            .show_notice(Notice::info("Question sent to your assistant"));
    }

    fn activate_voice(&self) {
        self.state.listening.set(true);
    }
}
