pub mod anchors;
pub mod navbar;

use crate::config::{MOBILE_BREAKPOINT_PX, SCROLL_LOOKAHEAD_PX};
use std::rc::Rc;
use yew::Reducible;

/// In-page links shown in the navigation bar, as `(section id, label)`.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("team", "Team"),
    ("careers", "Careers"),
    ("contact", "Contact"),
];

/// Picks the section whose nav link should be highlighted.
///
/// `sections` are `(id, top offset)` pairs in document order. Every section
/// whose top, minus the look-ahead, is at or above `scroll_y` matches, and the
/// last match wins.
pub fn active_section<'a, I>(sections: I, scroll_y: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - SCROLL_LOOKAHEAD_PX {
            current = Some(id);
        }
    }
    current
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    Close,
    /// New `innerWidth` of the window, in CSS pixels.
    Resized(f64),
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> MenuState {
        match action {
            MenuAction::Toggle => MenuState { open: !self.open },
            MenuAction::Close => MenuState { open: false },
            MenuAction::Resized(width) if width > MOBILE_BREAKPOINT_PX => MenuState { open: false },
            MenuAction::Resized(_) => self,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
