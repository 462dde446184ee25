//! Home Page
//!
//! Composition root of the home screen: derives the metrics from the
//! loaded collections and routes every interaction the components report
//! through the shared dispatcher to the navigator and assistant.

use std::rc::Rc;

use leptos::*;

use dealer_home::view::{self, HeaderModel};
use dealer_home::{summarize, Assistant, Interaction, Navigator};

use crate::components::{ActionList, CardSkeleton, Header, QuickAccess, StatsSection};
use crate::navigation::{PageAssistant, RouterNavigator};
use crate::state::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator::new());
    let assistant: Rc<dyn Assistant> = Rc::new(PageAssistant::new(state.clone()));

    // Recomputed only when the data signal changes
    let data = state.data;
    let metrics = create_memo(move |_| data.with(|d| summarize(&d.opportunities, &d.orders)));

    let (header, actions, shortcuts) = state.config.with_value(|config| {
        (
            HeaderModel::new(
                &config.dashboard.user_name,
                &config.dashboard.ask_placeholder,
                chrono::Local::now().naive_local(),
            ),
            config.actions.clone(),
            config.shortcuts.clone(),
        )
    });

    let config = state.config;
    let on_interaction = Callback::new(move |interaction: Interaction| {
        config.with_value(|c| {
            view::dispatch(&interaction, &c.actions, &c.shortcuts, &*navigator, &*assistant);
        });
    });

    let loading = state.loading;
    let last_query = state.last_query;

    view! {
        <div class="space-y-8">
            <Header model=header on_interaction=on_interaction />

            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-3 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view()
                } else {
                    view! { <StatsSection metrics=metrics on_interaction=on_interaction /> }.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 gap-8">
                <ActionList items=actions on_interaction=on_interaction />
                <QuickAccess shortcuts=shortcuts on_interaction=on_interaction />
            </div>

            // Latest assistant request
            {move || last_query.get().map(|q| view! {
                <p class="text-sm text-gray-400">"Asked: " {q}</p>
            })}
        </div>
    }
}
