//! Header Component
//!
//! Greeting, date, and the AI ask box with its voice button.

use leptos::*;

use dealer_home::{HeaderModel, Interaction};

use super::{is_activation_key, Icon};

/// Home screen header
#[component]
pub fn Header(
    model: HeaderModel,
    /// Receives `AskAi` with the raw query and `VoiceActivate`
    #[prop(into)]
    on_interaction: Callback<Interaction>,
) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let submit = move || {
        on_interaction.call(Interaction::AskAi(query.get_untracked()));
        set_query.set(String::new());
    };

    view! {
        <header class="space-y-4">
            <div>
                <p class="text-sm text-gray-400">{model.date_label}</p>
                <h1 class="text-3xl font-bold">
                    {format!("{}, {}", model.greeting, model.user_name)}
                </h1>
            </div>

            <div class="flex items-center space-x-2 bg-gray-800 border border-gray-700 rounded-xl px-4 py-2">
                <Icon name="sparkles" class="text-lg text-primary-400" />
                <input
                    type="text"
                    placeholder=model.ask_placeholder
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if is_activation_key(&ev.key()) {
                            ev.prevent_default();
                            submit();
                        }
                    }
                    class="flex-1 bg-transparent focus:outline-none"
                />
                <button
                    type="button"
                    data-role="ask"
                    on:click=move |_| submit()
                    disabled=move || query.get().trim().is_empty()
                    class="px-3 py-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Ask"
                </button>
                <button
                    type="button"
                    aria-label="Voice assistant"
                    data-role="voice"
                    on:click=move |_| on_interaction.call(Interaction::VoiceActivate)
                    class="p-2 rounded-full hover:bg-gray-700 transition-colors"
                >
                    <Icon name="mic" class="text-lg" />
                </button>
            </div>
        </header>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use chrono::NaiveDate;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::components::browser::{click, mount, Recorded};

    fn model() -> HeaderModel {
        let now = NaiveDate::from_ymd_opt(2024, 3, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        HeaderModel::new("Jordan", "Ask anything...", now)
    }

    #[wasm_bindgen_test]
    fn voice_button_reports_voice_activate() {
        let recorded = Recorded::default();
        let on_interaction = recorded.callback();
        let root = mount(move || view! { <Header model=model() on_interaction=on_interaction /> });

        click(&root, "[data-role='voice']");
        assert_eq!(recorded.take(), vec![Interaction::VoiceActivate]);
    }

    #[wasm_bindgen_test]
    fn renders_greeting_and_date() {
        let root = mount(move || {
            view! { <Header model=model() on_interaction=Callback::new(|_: Interaction| {}) /> }
        });

        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Good morning, Jordan"));
        assert!(text.contains("Friday, March 8"));
    }
}
