//! Notice Bar
//!
//! Bottom-right status area: the current notice plus a "Listening" pill
//! while the voice assistant is active.

use leptos::*;

use crate::state::{Notice, NoticeKind};

use super::Icon;

#[component]
pub fn NoticeBar(
    notice: RwSignal<Option<Notice>>,
    listening: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col items-end space-y-2">
            <Show when=move || listening.get()>
                <div class="flex items-center space-x-2 bg-gray-800 border border-primary-500 rounded-full pl-3 pr-1 py-1 shadow-lg">
                    <Icon name="mic" class="text-primary-400 animate-pulse" />
                    <span class="text-sm">"Listening"</span>
                    <button
                        type="button"
                        data-role="stop-listening"
                        aria-label="Stop listening"
                        on:click=move |_| listening.set(false)
                        class="px-2 rounded-full hover:bg-gray-700 text-gray-400"
                    >
                        "×"
                    </button>
                </div>
            </Show>

            {move || notice.get().map(|n| {
                let (glyph, class) = n.kind.style();
                view! {
                    <div
                        role="status"
                        class=format!("flex items-center space-x-2 px-4 py-2 rounded-lg shadow-lg text-sm {}", class)
                    >
                        <span>{glyph}</span>
                        <span>{n.text}</span>
                    </div>
                }
            })}
        </div>
    }
}

impl NoticeKind {
    /// Leading glyph and color classes
    pub fn style(&self) -> (&'static str, &'static str) {
        match self {
            NoticeKind::Info => ("✓", "bg-gray-700 text-white"),
            NoticeKind::Error => ("!", "bg-red-700 text-white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_styles_differ() {
        assert_ne!(NoticeKind::Info.style(), NoticeKind::Error.style());
    }
}
