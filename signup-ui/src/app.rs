//! App Root Component
//!
//! Page layout and the board state provider.

use leptos::*;

use crate::components::{ActivityList, SignupForm, StatusMessage};
use crate::state::board::{provide_board_state, BoardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_board_state();

    let state = use_context::<BoardState>().expect("BoardState not found");
    state.refresh();

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <StatusMessage />
            </section>
        </main>
    }
}
