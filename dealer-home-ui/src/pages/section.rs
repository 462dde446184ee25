//! Section Page
//!
//! Stand-in for the screens the home view links to.

use leptos::*;
use leptos_router::*;

/// Placeholder page for a routed section
#[component]
pub fn Section() -> impl IntoView {
    let location = use_location();
    let title = move || section_title(&location.pathname.get());

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">{title}</h1>
            <p class="text-gray-400 mb-6">"This screen lives in another part of the app."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}

/// Title for a route path: "/resources/dealer-directory" -> "Dealer Directory"
pub fn section_title(path: &str) -> String {
    let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    if last.is_empty() {
        return "Home".to_string();
    }

    last.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
