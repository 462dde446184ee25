//! Action List Component
//!
//! The follow-ups, quotes, and orders waiting on the user.

use leptos::*;

use dealer_home::{ActionItem, Interaction};

use super::{is_activation_key, Icon};

/// Action list with a "View all" link to the task screen
#[component]
pub fn ActionList(
    items: Vec<ActionItem>,
    #[prop(into)]
    on_interaction: Callback<Interaction>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Action Items"</h2>
                <button
                    type="button"
                    data-role="view-all"
                    on:click=move |_| on_interaction.call(Interaction::ViewAllActions)
                    class="text-primary-400 hover:text-primary-300 text-sm font-medium"
                >
                    "View all →"
                </button>
            </div>

            {if items.is_empty() {
                view! {
                    <p class="text-gray-400 text-sm">"Nothing needs your attention"</p>
                }.into_view()
            } else {
                view! {
                    <ul class="space-y-2">
                        {items.into_iter()
                            .map(|item| view! { <ActionRow item=item on_interaction=on_interaction /> })
                            .collect_view()}
                    </ul>
                }.into_view()
            }}
        </section>
    }
}

#[component]
fn ActionRow(item: ActionItem, on_interaction: Callback<Interaction>) -> impl IntoView {
    let id = item.id.clone();
    let id_for_key = item.id.clone();

    view! {
        <li
            role="button"
            tabindex="0"
            data-action=item.id.clone()
            on:click=move |_| on_interaction.call(Interaction::Action(id.clone()))
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    on_interaction.call(Interaction::Action(id_for_key.clone()));
                }
            }
            class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0 cursor-pointer"
        >
            <div class="flex items-center space-x-3">
                <Icon name=item.icon class="text-2xl" />
                <div>
                    <p class="font-medium">{item.title}</p>
                    <p class="text-gray-400 text-sm">{item.subtitle}</p>
                </div>
            </div>
            <span class=format!("text-xs px-2 py-1 rounded-full {}", item.category.badge_class())>
                {item.category.to_string()}
            </span>
        </li>
    }
}
