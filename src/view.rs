//! Board View-Model
//!
//! The rendered state of the activity list and the activity dropdown. Every
//! refresh produces a complete replacement; the only in-place edit is the
//! removal of a single participant row after a confirmed unregistration.

use crate::action::{ActionKind, ATTR_ACTION, ATTR_ACTIVITY, ATTR_EMAIL, ATTR_INDEX};
use crate::activity::{Activity, ActivityCatalog, ParticipantRef};
use crate::escape::escape_html;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const UNREGISTER_TITLE: &str = "Unregister participant";

/// One participant row with the data its removal control carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub target: ParticipantRef,
}

/// One rendered activity card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Computed at render time, not updated when a row is removed
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let participants = activity
            .participants
            .iter()
            .enumerate()
            .map(|(position, email)| ParticipantRow {
                email: email.clone(),
                target: ParticipantRef::new(&activity.name, email, position),
            })
            .collect();

        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    /// Heading, description, schedule and availability as escaped markup
    pub fn summary_markup(&self) -> String {
        format!(
            "<h4>{}</h4>\n<p>{}</p>\n<p><strong>Schedule:</strong> {}</p>\n<p><strong>Availability:</strong> {}</p>\n",
            escape_html(&self.name),
            escape_html(&self.description),
            escape_html(&self.schedule),
            self.availability_text(),
        )
    }

    fn participants_markup(&self) -> String {
        let mut html = String::from("<div class=\"participants\"><h5>Participants</h5>");

        if self.participants.is_empty() {
            html.push_str(&format!("<p class=\"empty\">{}</p>", NO_PARTICIPANTS_TEXT));
        } else {
            html.push_str(&format!("<ul {}=\"{}\">", ATTR_ACTIVITY, escape_html(&self.name)));
            for row in &self.participants {
                html.push_str(&format!(
                    "<li class=\"participant-item\"><span class=\"participant-email\">{email}</span>\
                     <button class=\"delete-btn\" {a}=\"{kind}\" {e}=\"{email}\" {act}=\"{activity}\" {i}=\"{index}\" title=\"{title}\">&times;</button></li>",
                    email = escape_html(&row.email),
                    a = ATTR_ACTION,
                    kind = ActionKind::Unregister.as_str(),
                    e = ATTR_EMAIL,
                    act = ATTR_ACTIVITY,
                    activity = escape_html(&row.target.activity),
                    i = ATTR_INDEX,
                    index = row.target.position,
                    title = UNREGISTER_TITLE,
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("</div>");
        html
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"activity-card\">\n{}{}\n</div>\n",
            self.summary_markup(),
            self.participants_markup()
        )
    }
}

/// Content of the activity list area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Nothing has been rendered yet
    Loading,
    Ready(Vec<ActivityCard>),
    Failed,
}

/// One entry in the activity dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }
}

/// The whole rendered board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub list: ListState,
    pub options: Vec<SelectOption>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            list: ListState::Loading,
            options: vec![SelectOption::placeholder()],
        }
    }

    /// Build a view that shows `catalog`
    pub fn from_catalog(catalog: &ActivityCatalog) -> Self {
        let mut view = Self::new();
        view.render_catalog(catalog);
        view
    }

    /// Replace both the list and the dropdown with `catalog`
    pub fn render_catalog(&mut self, catalog: &ActivityCatalog) {
        self.list = ListState::Ready(catalog.iter().map(ActivityCard::from_activity).collect());

        let mut options = Vec::with_capacity(catalog.len() + 1);
        options.push(SelectOption::placeholder());
        options.extend(catalog.iter().map(|a| SelectOption {
            value: a.name.clone(),
            label: a.name.clone(),
        }));
        self.options = options;
    }

    /// Show the load failure message. The dropdown keeps its prior options.
    pub fn render_failure(&mut self) {
        self.list = ListState::Failed;
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.list {
            ListState::Ready(cards) => cards,
            ListState::Loading | ListState::Failed => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|c| c.name == name)
    }

    /// Remove exactly the row `target` points at. Returns whether a row was removed.
    ///
    /// Rows are matched on their render-time position first; if the list has been
    /// edited since, the first row with the same email is taken instead.
    pub fn remove_participant(&mut self, target: &ParticipantRef) -> bool {
        let ListState::Ready(cards) = &mut self.list else {
            return false;
        };
        let Some(card) = cards.iter_mut().find(|c| c.name == target.activity) else {
            return false;
        };

        let index = card
            .participants
            .iter()
            .position(|row| row.target == *target)
            .or_else(|| card.participants.iter().position(|row| row.email == target.email));

        match index {
            Some(i) => {
                card.participants.remove(i);
                true
            }
            None => false,
        }
    }

    /// Markup for the list area
    pub fn to_html(&self) -> String {
        match &self.list {
            ListState::Loading => format!("<p>{}</p>\n", LOADING_TEXT),
            ListState::Failed => format!("<p>{}</p>\n", LOAD_FAILED_TEXT),
            ListState::Ready(cards) => cards.iter().map(ActivityCard::to_html).collect(),
        }
    }

    /// Markup for the dropdown's option set
    pub fn options_html(&self) -> String {
        self.options
            .iter()
            .map(|o| {
                format!(
                    "<option value=\"{}\">{}</option>\n",
                    escape_html(&o.value),
                    escape_html(&o.label)
                )
            })
            .collect()
    }
}
