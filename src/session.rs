//! Board Session
//!
//! Drives an [`ActivityBoard`] against a transport and a set of dialogs. This
//! is the driver used outside the browser; the browser front end wires the
//! same tasks to reactive signals instead.

use crate::action::Action;
use crate::activity::ParticipantRef;
use crate::board::{confirm_prompt, ActivityBoard, RefreshPhase};
use crate::client::ActivityApi;
use crate::prompt::Prompter;
use crate::status::StatusTicket;
use crate::tasks;

/// Result of an unregister attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnregisterResult {
    /// The user declined the confirmation; nothing was sent
    Declined,
    Removed,
    /// The request failed and this text was shown in an alert
    Alerted(String),
}

/// Result of [`BoardSession::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Signup(StatusTicket),
    Unregister(UnregisterResult),
}

pub struct BoardSession<A, P> {
    api: A,
    prompter: P,
    board: ActivityBoard,
}

impl<A: ActivityApi, P: Prompter> BoardSession<A, P> {
    pub fn new(api: A, prompter: P) -> Self {
        Self {
            api,
            prompter,
            board: ActivityBoard::new(),
        }
    }

    pub fn board(&self) -> &ActivityBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut ActivityBoard {
        &mut self.board
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the catalog and re-render. Returns the resulting phase.
    pub async fn refresh(&mut self) -> RefreshPhase {
        self.board.begin_refresh();
        let outcome = tasks::load_catalog(&self.api).await;
        self.board.apply_refresh(outcome);
        self.board.phase()
    }

    /// Submit the form with its current values.
    ///
    /// On success the board is refreshed before returning. The returned ticket
    /// hides the status message when passed to [`ActivityBoard::expire_status`].
    pub async fn submit_signup(&mut self) -> StatusTicket {
        let request = self.board.signup_request();
        let outcome = tasks::sign_up(&self.api, &request).await;
        let effects = self.board.apply_signup(outcome);

        if effects.refresh {
            self.refresh().await;
        }
        effects.ticket
    }

    /// Confirm, then unregister `target`
    pub async fn submit_unregister(&mut self, target: ParticipantRef) -> UnregisterResult {
        if !self.prompter.confirm(&confirm_prompt(&target)) {
            return UnregisterResult::Declined;
        }

        let outcome = tasks::unregister(&self.api, &target).await;
        match self.board.apply_unregister(&target, outcome) {
            None => UnregisterResult::Removed,
            Some(alert) => {
                self.prompter.alert(&alert);
                UnregisterResult::Alerted(alert)
            }
        }
    }

    pub async fn dispatch(&mut self, action: Action) -> Dispatched {
        match action {
            Action::Submit => Dispatched::Signup(self.submit_signup().await),
            Action::Unregister(target) => Dispatched::Unregister(self.submit_unregister(target).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;
    use crate::board::{UNREGISTER_NETWORK_FAILURE, SIGNUP_NETWORK_FAILURE};
    use crate::status::StatusKind;
    use crate::tasks::testing::FakeApi;
    use crate::view::ListState;
    use std::cell::RefCell;

    #[derive(Default)]
    struct ScriptedPrompter {
        answer: bool,
        alerts: RefCell<Vec<String>>,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn fake() -> FakeApi {
        FakeApi::with(vec![
            Activity::new("Chess Club", 12)
                .schedule("Fridays, 3:30 PM - 5:00 PM")
                .participant("michael@mergington.edu")
                .participant("daniel@mergington.edu"),
            Activity::new("Programming Class", 20),
        ])
    }

    #[tokio::test]
    async fn test_refresh_renders_catalog() {
        let api = fake();
        let mut session = BoardSession::new(&api, ScriptedPrompter::answering(true));

        assert_eq!(session.refresh().await, RefreshPhase::Rendered);
        assert_eq!(session.board().view().cards().len(), 2);
        assert_eq!(
            session.board().view().card("Chess Club").unwrap().availability_text(),
            "10 spots left"
        );
    }

    #[tokio::test]
    async fn test_refresh_failure() {
        let api = fake();
        *api.offline.borrow_mut() = true;
        let mut session = BoardSession::new(&api, ScriptedPrompter::answering(true));

        assert_eq!(session.refresh().await, RefreshPhase::Failed);
        assert_eq!(session.board().view().list, ListState::Failed);
    }

    #[tokio::test]
    async fn test_signup_flow() {
        let api = fake();
        let mut session = BoardSession::new(&api, ScriptedPrompter::answering(true));
        session.refresh().await;

        session.board_mut().form_mut().email = "emma@mergington.edu".into();
        session.board_mut().form_mut().activity = "Programming Class".into();
        let ticket = session.submit_signup().await;

        let board = session.board();
        assert_eq!(board.form().email, "");
        assert_eq!(board.form().activity, "");
        let status = board.status().current().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "Signed up emma@mergington.edu for Programming Class");

        let programming = board.view().card("Programming Class").unwrap();
        assert_eq!(programming.participants[0].email, "emma@mergington.edu");
        assert_eq!(programming.availability_text(), "19 spots left");

        assert!(session.board_mut().expire_status(ticket));
    }

    #[tokio::test]
    async fn test_duplicate_signup_shows_detail_without_refresh() {
        let api = fake();
        let mut session = BoardSession::new(&api, ScriptedPrompter::answering(true));
        session.refresh().await;
        let calls_before = api.call_count();

        session.board_mut().form_mut().email = "michael@mergington.edu".into();
        session.board_mut().form_mut().activity = "Chess Club".into();
        session.submit_signup().await;

        assert_eq!(api.call_count(), calls_before + 1);
        assert_eq!(session.board().status().current().unwrap().text, "Student already signed up");
        assert_eq!(session.board().form().email, "michael@mergington.edu");
    }

    #[tokio::test]
    async fn test_signup_offline() {
        let api = fake();
        let mut session = BoardSession::new(&api, ScriptedPrompter::answering(true));
        session.refresh().await;
        *api.offline.borrow_mut() = true;

        session.submit_signup().await;
        assert_eq!(session.board().status().current().unwrap().text, SIGNUP_NETWORK_FAILURE);
        // The last good render stays on screen
        assert_eq!(session.board().view().cards().len(), 2);
    }

    #[tokio::test]
    async fn test_declined_unregister_sends_nothing() {
        let api = fake();
        let mut session = BoardSession::new(&api, ScriptedPrompter::answering(false));
        session.refresh().await;
        let calls_before = api.call_count();
        let view_before = session.board().view().clone();

        let target = ParticipantRef::new("Chess Club", "michael@mergington.edu", 0);
        let result = session.submit_unregister(target).await;

        assert_eq!(result, UnregisterResult::Declined);
        assert_eq!(api.call_count(), calls_before);
        assert_eq!(session.board().view(), &view_before);
    }

    #[tokio::test]
    async fn test_unregister_removes_only_target() {
        let api = fake();
        let prompter = ScriptedPrompter::answering(true);
        let mut session = BoardSession::new(&api, &prompter);
        session.refresh().await;
        let calls_before = api.call_count();

        let target = ParticipantRef::new("Chess Club", "michael@mergington.edu", 0);
        let result = session.submit_unregister(target).await;

        assert_eq!(result, UnregisterResult::Removed);
        assert_eq!(
            *prompter.asked.borrow(),
            vec!["Unregister michael@mergington.edu from Chess Club?".to_string()]
        );
        // No refresh after unregister
        assert_eq!(api.call_count(), calls_before + 1);

        let chess = session.board().view().card("Chess Club").unwrap();
        assert_eq!(chess.participants.len(), 1);
        assert_eq!(chess.participants[0].target.email, "daniel@mergington.edu");
        assert_eq!(chess.participants[0].target.position, 1);
        assert_eq!(chess.availability_text(), "10 spots left");
    }

    #[tokio::test]
    async fn test_unregister_failures_alert() {
        let api = fake();
        let prompter = ScriptedPrompter::answering(true);
        let mut session = BoardSession::new(&api, &prompter);
        session.refresh().await;

        let ghost = ParticipantRef::new("Chess Club", "ghost@mergington.edu", 0);
        let result = session.submit_unregister(ghost).await;
        assert_eq!(result, UnregisterResult::Alerted("Participant not found".into()));

        *api.offline.borrow_mut() = true;
        let target = ParticipantRef::new("Chess Club", "michael@mergington.edu", 0);
        let result = session.submit_unregister(target).await;
        assert_eq!(result, UnregisterResult::Alerted(UNREGISTER_NETWORK_FAILURE.into()));

        assert_eq!(prompter.alerts.borrow().len(), 2);
        assert_eq!(session.board().view().card("Chess Club").unwrap().participants.len(), 2);
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_kind() {
        let api = fake();
        let mut session = BoardSession::new(&api, ScriptedPrompter::answering(true));
        session.refresh().await;

        let action = Action::Unregister(ParticipantRef::new("Chess Club", "daniel@mergington.edu", 1));
        assert_eq!(
            session.dispatch(action).await,
            Dispatched::Unregister(UnregisterResult::Removed)
        );

        session.board_mut().form_mut().email = "sophie@mergington.edu".into();
        session.board_mut().form_mut().activity = "Chess Club".into();
        assert!(matches!(session.dispatch(Action::Submit).await, Dispatched::Signup(_)));
        assert!(session
            .board()
            .view()
            .card("Chess Club")
            .unwrap()
            .participants
            .iter()
            .any(|r| r.email == "sophie@mergington.edu"));
    }
}
