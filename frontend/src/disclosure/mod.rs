//! Expandable detail panels. Each group keeps at most one panel open.

pub mod cards;

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

/// Which card family a panel belongs to; only the trigger wording differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVariant {
    Service,
    Team,
}

impl PanelVariant {
    pub fn label(self, state: PanelState) -> &'static str {
        match (self, state) {
            (_, PanelState::Expanded) => "Show Less",
            (PanelVariant::Service, PanelState::Collapsed) => "Learn More",
            (PanelVariant::Team, PanelState::Collapsed) => "Read More",
        }
    }

    /// Font Awesome class for the trigger icon, if the variant shows one.
    pub fn icon(self, state: PanelState) -> Option<&'static str> {
        match (self, state) {
            (PanelVariant::Service, PanelState::Collapsed) => Some("fas fa-chevron-down"),
            (PanelVariant::Service, PanelState::Expanded) => Some("fas fa-chevron-up"),
            (PanelVariant::Team, _) => None,
        }
    }

    pub fn details_class(self) -> &'static str {
        match self {
            PanelVariant::Service => "service-details",
            PanelVariant::Team => "team-details",
        }
    }
}

/// Element id of the detail panel for item `id`.
pub fn details_id(id: &str) -> String {
    format!("{}-details", id)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureAction {
    Toggle(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureGroup {
    open: Option<String>,
}

impl DisclosureGroup {
    /// Closes `id` if it is open, otherwise closes whatever is open and opens `id`.
    pub fn toggle(&mut self, id: &str) {
        if self.open.as_deref() == Some(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_owned());
        }
    }

    pub fn state_of(&self, id: &str) -> PanelState {
        if self.open.as_deref() == Some(id) {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }
}

impl Reducible for DisclosureGroup {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DisclosureAction::Toggle(id) => next.toggle(&id),
        }
        Rc::new(next)
    }
}
