//! Transient status banners.
//!
//! Each banner owns its own pair of timers: after
//! [`NOTIFICATION_DISPLAY_MS`] it starts its exit animation and
//! [`NOTIFICATION_EXIT_MS`] later it is removed. Banners are not queued or
//! capped.

pub mod provider;

use crate::config::{NOTIFICATION_DISPLAY_MS, NOTIFICATION_EXIT_MS};
use crate::utils::timer::Scheduler;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use yew::Reducible;

static NEXT_NOTIFICATION_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
}

impl NotificationKind {
    pub fn css_suffix(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Info => "fas fa-info-circle",
            NotificationKind::Success => "fas fa-check-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Info => "#f59e0b",
            NotificationKind::Success => "var(--primary-color)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
    pub leaving: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationAction {
    Show(Notification),
    /// Start the exit animation.
    Dismiss(u32),
    Remove(u32),
}

/// Banners currently on the page, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationList {
    pub items: Vec<Notification>,
}

impl NotificationList {
    pub fn apply(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::Show(notification) => self.items.push(notification),
            NotificationAction::Dismiss(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.leaving = true;
                }
            }
            NotificationAction::Remove(id) => self.items.retain(|item| item.id != id),
        }
    }
}

impl Reducible for NotificationList {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Shows a banner through `dispatch` and schedules its exit and removal.
/// Returns the banner id.
pub fn present<S, D>(scheduler: S, dispatch: D, message: String, kind: NotificationKind) -> u32
where
    S: Scheduler + Clone + 'static,
    D: Fn(NotificationAction) + 'static,
{
    let id = NEXT_NOTIFICATION_ID.fetch_add(1, Ordering::Relaxed);
    dispatch(NotificationAction::Show(Notification {
        id,
        message,
        kind,
        leaving: false,
    }));

    let exit_scheduler = scheduler.clone();
    S::detach(scheduler.after(NOTIFICATION_DISPLAY_MS, move || {
        dispatch(NotificationAction::Dismiss(id));
        S::detach(exit_scheduler.after(NOTIFICATION_EXIT_MS, move || {
            dispatch(NotificationAction::Remove(id));
        }));
    }));
    id
}
