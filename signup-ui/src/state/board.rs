//! Board State
//!
//! Reactive state built on the `ActivityBoard` controller. Requests run as
//! local tasks; each outcome is folded into the board signal when it arrives.

use gloo_timers::callback::Timeout;
use leptos::*;

use signup_board::board::confirm_prompt;
use signup_board::{
    tasks, Action, ActivityBoard, BoardView, ParticipantRef, Prompter, SelectOption, SignupForm,
    StatusMessage, StatusTicket, HIDE_AFTER_MS,
};

use crate::api::{BrowserPrompter, GlooApi};

/// Board state provided to all components
#[derive(Clone, Copy)]
pub struct BoardState {
    pub board: RwSignal<ActivityBoard>,
    api: StoredValue<GlooApi>,
    /// Pending auto-hide timer. Replacing it cancels the previous one.
    hide_timer: StoredValue<Option<Timeout>>,
}

/// Provide board state to the component tree
pub fn provide_board_state() {
    provide_context(BoardState::new(GlooApi::from_storage()));
}

impl BoardState {
    pub fn new(api: GlooApi) -> Self {
        Self {
            board: create_rw_signal(ActivityBoard::new()),
            api: store_value(api),
            hide_timer: store_value(None),
        }
    }

    pub fn view(&self) -> Memo<BoardView> {
        let board = self.board;
        create_memo(move |_| board.with(|b| b.view().clone()))
    }

    pub fn form(&self) -> Memo<SignupForm> {
        let board = self.board;
        create_memo(move |_| board.with(|b| b.form().clone()))
    }

    pub fn options(&self) -> Memo<Vec<SelectOption>> {
        let board = self.board;
        create_memo(move |_| board.with(|b| b.view().options.clone()))
    }

    /// Only the dropdown selection, so email keystrokes do not touch the option list
    pub fn selected_activity(&self) -> Memo<String> {
        let board = self.board;
        create_memo(move |_| board.with(|b| b.form().activity.clone()))
    }

    pub fn status(&self) -> Memo<Option<StatusMessage>> {
        let board = self.board;
        create_memo(move |_| board.with(|b| b.status().current().cloned()))
    }

    pub fn set_email(&self, email: String) {
        self.board.update(|b| b.form_mut().email = email);
    }

    pub fn set_activity(&self, activity: String) {
        self.board.update(|b| b.form_mut().activity = activity);
    }

    /// Fetch the catalog and re-render the list and the dropdown
    pub fn refresh(&self) {
        let board = self.board;
        let api = self.api.get_value();

        board.update(|b| b.begin_refresh());
        spawn_local(async move {
            let outcome = tasks::load_catalog(&api).await;
            board.update(|b| b.apply_refresh(outcome));
        });
    }

    /// Submit the form with the values it holds at this moment
    pub fn submit_signup(&self) {
        let state = *self;
        let request = self.board.with_untracked(|b| b.signup_request());
        let api = self.api.get_value();

        spawn_local(async move {
            let outcome = tasks::sign_up(&api, &request).await;
            let Some(effects) = state.board.try_update(|b| b.apply_signup(outcome)) else {
                return;
            };

            state.schedule_hide(effects.ticket);
            if effects.refresh {
                state.refresh();
            }
        });
    }

    pub fn submit_unregister(&self, target: ParticipantRef) {
        self.unregister_with(target, BrowserPrompter);
    }

    fn unregister_with<P: Prompter + 'static>(&self, target: ParticipantRef, prompter: P) {
        if !prompter.confirm(&confirm_prompt(&target)) {
            return;
        }

        let board = self.board;
        let api = self.api.get_value();

        spawn_local(async move {
            let outcome = tasks::unregister(&api, &target).await;
            let alert = board
                .try_update(|b| b.apply_unregister(&target, outcome))
                .flatten();

            if let Some(alert) = alert {
                prompter.alert(&alert);
            }
        });
    }

    pub fn dispatch(&self, action: Action) {
        match action {
            Action::Submit => self.submit_signup(),
            Action::Unregister(target) => self.submit_unregister(target),
        }
    }

    /// Hide the current message after the display period, unless a newer one replaces it first
    fn schedule_hide(&self, ticket: StatusTicket) {
        self.hide_after(ticket, HIDE_AFTER_MS);
    }

    fn hide_after(&self, ticket: StatusTicket, millis: u32) {
        let board = self.board;
        let timer = Timeout::new(millis, move || {
            board.update(|b| {
                b.expire_status(ticket);
            });
        });

        self.hide_timer.update_value(|slot| *slot = Some(timer));
    }
}
