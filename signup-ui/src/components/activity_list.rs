//! Activity List Component
//!
//! Activity cards with their participant rosters. Clicks are handled by one
//! listener on the list container, which decodes the clicked control's
//! `data-*` attributes into an [`Action`].

use leptos::*;
use wasm_bindgen::JsCast;

use signup_board::action::{ACTION_SELECTOR, ATTR_ACTION, ATTR_ACTIVITY, ATTR_EMAIL, ATTR_INDEX};
use signup_board::view::{LOADING_TEXT, LOAD_FAILED_TEXT, NO_PARTICIPANTS_TEXT, UNREGISTER_TITLE};
use signup_board::{Action, ActionKind, ActivityCard, ListState, ParticipantRow};

use crate::state::board::BoardState;

fn action_from_event(ev: &web_sys::MouseEvent) -> Option<Action> {
    action_from_target(ev.target()?)
}

/// Resolve the action of the nearest element carrying one
fn action_from_target(target: web_sys::EventTarget) -> Option<Action> {
    let target = target.dyn_into::<web_sys::Element>().ok()?;
    let element = target.closest(ACTION_SELECTOR).ok().flatten()?;

    Action::from_attributes(|name| element.get_attribute(name))
}

#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let board_view = state.view();

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(action) = action_from_event(&ev) {
            state.dispatch(action);
        }
    };

    view! {
        <div id="activities-list" on:click=on_click>
            {move || match board_view.get().list {
                ListState::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
                ListState::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_view(),
                ListState::Ready(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    // summary_markup escapes every server-supplied field
    let summary = card.summary_markup();

    let roster = if card.participants.is_empty() {
        view! { <p class="empty">{NO_PARTICIPANTS_TEXT}</p> }.into_view()
    } else {
        let rows = card
            .participants
            .into_iter()
            .map(participant_item)
            .collect_view();
        html::ul().attr(ATTR_ACTIVITY, card.name.clone()).child(rows).into_view()
    };

    view! {
        <div class="activity-card">
            <div class="activity-summary" inner_html=summary></div>
            <div class="participants">
                <h5>"Participants"</h5>
                {roster}
            </div>
        </div>
    }
}

fn participant_item(row: ParticipantRow) -> impl IntoView {
    let remove = html::button()
        .attr("type", "button")
        .attr("class", "delete-btn")
        .attr("title", UNREGISTER_TITLE)
        .attr(ATTR_ACTION, ActionKind::Unregister.as_str())
        .attr(ATTR_EMAIL, row.target.email.clone())
        .attr(ATTR_ACTIVITY, row.target.activity.clone())
        .attr(ATTR_INDEX, row.target.position.to_string())
        .child("\u{00d7}");

    view! {
        <li class="participant-item">
            <span class="participant-email">{row.email}</span>
            {remove}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_board::{Activity, ActivityCatalog, ParticipantRef, RefreshOutcome};
    use wasm_bindgen_test::*;

    use crate::api::GlooApi;

    fn mount_board() -> web_sys::Element {
        let container = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&container).unwrap();

        let catalog = ActivityCatalog::new(vec![Activity::new("Chess Club", 10)
            .description("Learn strategies")
            .participant("michael@mergington.edu")
            .participant("daniel@mergington.edu")]);

        mount_to(container.clone().unchecked_into(), move || {
            let state = BoardState::new(GlooApi::new(""));
            state
                .board
                .update(|b| b.apply_refresh(RefreshOutcome::Loaded(catalog)));
            provide_context(state);
            view! { <ActivityList /> }
        });

        container
    }

    fn find(container: &web_sys::Element, selector: &str) -> web_sys::Element {
        container.query_selector(selector).unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_remove_button_resolves_to_its_row() {
        let container = mount_board();
        let button = find(&container, ".participant-item:nth-child(2) .delete-btn");

        assert_eq!(button.get_attribute("type").as_deref(), Some("button"));
        assert_eq!(
            action_from_target(button.into()),
            Some(Action::Unregister(ParticipantRef::new(
                "Chess Club",
                "daniel@mergington.edu",
                1
            )))
        );
    }

    #[wasm_bindgen_test]
    fn test_click_outside_controls_is_ignored() {
        let container = mount_board();

        let email = find(&container, ".participant-item .participant-email");
        assert_eq!(email.text_content().as_deref(), Some("michael@mergington.edu"));
        assert_eq!(action_from_target(email.into()), None);

        let summary = find(&container, ".activity-summary h4");
        assert_eq!(action_from_target(summary.into()), None);
    }

    #[wasm_bindgen_test]
    fn test_markup_in_email_stays_text() {
        let container = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&container).unwrap();

        let catalog = ActivityCatalog::new(vec![
            Activity::new("Drama Club", 5).participant("<b>x</b>@mergington.edu")
        ]);
        mount_to(container.clone().unchecked_into(), move || {
            let state = BoardState::new(GlooApi::new(""));
            state
                .board
                .update(|b| b.apply_refresh(RefreshOutcome::Loaded(catalog)));
            provide_context(state);
            view! { <ActivityList /> }
        });

        assert!(container.query_selector("b").unwrap().is_none());
        let button = find(&container, ".delete-btn");
        assert_eq!(
            action_from_target(button.into()),
            Some(Action::Unregister(ParticipantRef::new(
                "Drama Club",
                "<b>x</b>@mergington.edu",
                0
            )))
        );
    }
}
