//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use dealer_home::{Config, DashboardData};

use crate::api;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Home screen configuration (lists, user name, data URL)
    pub config: StoredValue<Config>,
    /// Collections handed to the home view
    pub data: RwSignal<DashboardData>,
    /// Whether the initial data load is still running
    pub loading: RwSignal<bool>,
    /// Last question sent to the assistant
    pub last_query: RwSignal<Option<String>>,
    /// Voice assistant is listening
    pub listening: RwSignal<bool>,
    /// Status line in the notice bar
    pub notice: RwSignal<Option<Notice>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A short-lived status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.to_string(),
        }
    }

    /// How long the notice stays up
    pub fn duration_ms(&self) -> u32 {
        match self.kind {
            NoticeKind::Info => 3_000,
            NoticeKind::Error => 6_000,
        }
    }
}

/// Build the configuration, with local storage standing in for the
/// environment overrides the CLI reads
pub fn load_config() -> Config {
    let mut config = Config::default();
    config.apply_overrides(api::storage_get);
    config
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        config: store_value(load_config()),
        data: create_rw_signal(DashboardData::default()),
        loading: create_rw_signal(true),
        last_query: create_rw_signal(None),
        listening: create_rw_signal(false),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Fetch the dashboard data from the configured URL
    pub fn load_data(&self) {
        let state = self.clone();
        let url = self.config.with_value(|c| c.dashboard.data_url.clone());

        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_dashboard(&url).await {
                Ok(data) => state.data.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load {}: {}", url, e).into());
                    state.show_notice(Notice::error(&e));
                }
            }

            state.loading.set(false);
        });
    }

    /// Replace the current notice; it clears itself unless a newer one
    /// has taken its place by then
    pub fn show_notice(&self, notice: Notice) {
        let signal = self.notice;
        let shown = notice.clone();
        let duration = notice.duration_ms();
        signal.set(Some(notice));

        gloo_timers::callback::Timeout::new(duration, move || {
            if signal.with_untracked(|current| current.as_ref() == Some(&shown)) {
                signal.set(None);
            }
        })
        .forget();
    }
}
