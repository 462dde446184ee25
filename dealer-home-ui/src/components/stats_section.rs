//! Stats Section Component
//!
//! Active pipeline, project, and order counts. Each card links to the
//! screen behind its number.

use leptos::*;

use dealer_home::view::stat_cards;
use dealer_home::{DashboardMetrics, Interaction, StatCard, StatKind};

use super::{is_activation_key, Icon};

/// Stats summary row
#[component]
pub fn StatsSection(
    #[prop(into)]
    metrics: Signal<DashboardMetrics>,
    #[prop(into)]
    on_interaction: Callback<Interaction>,
) -> impl IntoView {
    view! {
        <section>
            <div class="grid grid-cols-3 gap-4">
                {move || {
                    metrics.with(|m| stat_cards(m))
                        .into_iter()
                        .map(|card| view! { <StatCardView card=card on_interaction=on_interaction /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn StatCardView(card: StatCard, on_interaction: Callback<Interaction>) -> impl IntoView {
    let kind = card.kind;

    view! {
        <div
            role="button"
            tabindex="0"
            data-stat=kind.key()
            on:click=move |_| on_interaction.call(Interaction::StatCard(kind))
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    on_interaction.call(Interaction::StatCard(kind));
                }
            }
            class="bg-gray-800 rounded-lg p-4 hover:bg-gray-750 transition cursor-pointer border border-gray-700 hover:border-gray-600"
        >
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{card.label}</span>
                <Icon name=stat_icon(card.kind) class="text-lg" />
            </div>
            <div class="text-3xl font-bold mt-2">{card.value}</div>
        </div>
    }
}

fn stat_icon(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Pipeline => "trending-up",
        StatKind::Projects => "folder",
        StatKind::Orders => "shopping-cart",
    }
}
