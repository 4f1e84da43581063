//! Signup Form Component

use leptos::*;

use signup_board::Action;

use crate::state::board::BoardState;

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let form = state.form();
    let options = state.options();
    let selected = state.selected_activity();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.dispatch(Action::Submit);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    prop:value=move || form.get().email
                    on:input=move |ev| state.set_email(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| state.set_activity(event_target_value(&ev))
                >
                    {move || {
                        let selected = selected.get();
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let is_selected = option.value == selected;
                                view! {
                                    <option value=option.value selected=is_selected>
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
