//! App Root Component
//!
//! Main application component with routing and global providers. Plays the
//! parent application's part: it loads the collections the home view
//! renders and resolves the routes the home view asks for.

use leptos::*;
use leptos_router::*;

use crate::components::NoticeBar;
use crate::pages::{Home, Section};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    state.load_data();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/resources/:section" view=Section />
                        <Route path="/:section" view=Section />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <NoticeBar notice=state.notice listening=state.listening />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Home"
            </A>
        </div>
    }
}
