//! Quick Access Component
//!
//! Grid of shortcuts to frequently used screens.

use leptos::*;

use dealer_home::{Interaction, Shortcut};

use super::{is_activation_key, Icon};

#[component]
pub fn QuickAccess(
    shortcuts: Vec<Shortcut>,
    #[prop(into)]
    on_interaction: Callback<Interaction>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Quick Access"</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {shortcuts.into_iter().map(|shortcut| {
                    let id = shortcut.id.clone();
                    let id_for_key = shortcut.id.clone();

                    view! {
                        <div
                            role="button"
                            tabindex="0"
                            data-shortcut=shortcut.id.clone()
                            on:click=move |_| on_interaction.call(Interaction::Shortcut(id.clone()))
                            on:keydown=move |ev| {
                                if is_activation_key(&ev.key()) {
                                    on_interaction.call(Interaction::Shortcut(id_for_key.clone()));
                                }
                            }
                            class="flex flex-col items-center justify-center bg-gray-700 hover:bg-gray-600 rounded-lg p-4 cursor-pointer transition-colors"
                        >
                            <Icon name=shortcut.icon class="text-3xl" />
                            <span class="mt-2 text-sm">{shortcut.label}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::rc::Rc;

    use wasm_bindgen_test::wasm_bindgen_test;

    use dealer_home::navigation::EventLog;
    use dealer_home::{default_shortcuts, view};

    use super::*;
    use crate::components::browser::{click, mount};

    #[wasm_bindgen_test]
    fn shortcut_dispatches_its_route() {
        let log = Rc::new(EventLog::new());
        let sink = Rc::clone(&log);
        let on_interaction = Callback::new(move |interaction: Interaction| {
            view::dispatch(&interaction, &[], &default_shortcuts(), &*sink, &*sink);
        });
        let root = mount(move || {
            view! { <QuickAccess shortcuts=default_shortcuts() on_interaction=on_interaction /> }
        });

        click(&root, "[data-shortcut='dealer-directory']");
        assert_eq!(log.routes(), vec!["resources/dealer-directory"]);
    }
}
