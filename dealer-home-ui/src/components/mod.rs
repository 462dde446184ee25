//! UI Components
//!
//! Presentation components for the home screen. Each one renders its props
//! and reports user actions as [`Interaction`](dealer_home::Interaction)s
//! through its `on_interaction` callback; the page decides what they do.

pub mod action_list;
pub mod header;
pub mod icon;
pub mod loading;
pub mod notice;
pub mod quick_access;
pub mod stats_section;

pub use action_list::ActionList;
pub use header::Header;
pub use icon::Icon;
pub use loading::CardSkeleton;
pub use notice::NoticeBar;
pub use quick_access::QuickAccess;
pub use stats_section::StatsSection;

/// Keyboard activation for clickable cards
pub(crate) fn is_activation_key(key: &str) -> bool {
    key == "Enter"
}


/// Mounting and clicking helpers for the in-browser component tests
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::*;
    use wasm_bindgen::JsCast;

    use dealer_home::Interaction;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    /// Interactions reported by a mounted component
    #[derive(Clone, Default)]
    pub struct Recorded(Rc<RefCell<Vec<Interaction>>>);

    impl Recorded {
        pub fn callback(&self) -> Callback<Interaction> {
            let inner = Rc::clone(&self.0);
            Callback::new(move |interaction| inner.borrow_mut().push(interaction))
        }

        pub fn take(&self) -> Vec<Interaction> {
            self.0.borrow_mut().drain(..).collect()
        }
    }

    /// Mount a view into its own container under `<body>`
    pub fn mount<F, N>(f: F) -> web_sys::HtmlElement
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        let document = leptos::document();
        let root: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();
        mount_to(root.clone(), f);
        root
    }

    /// Click the first element under `root` matching `selector`
    pub fn click(root: &web_sys::HtmlElement, selector: &str) {
        let element = root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {}", selector));
        element.unchecked_into::<web_sys::HtmlElement>().click();
    }
}
