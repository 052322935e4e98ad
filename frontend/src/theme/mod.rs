//! Background themes and the rotation state machine.
//!
//! A theme is a named background video. The active one rotates every
//! [`THEME_ROTATION_MS`](crate::config::THEME_ROTATION_MS) unless the visitor
//! picks one, which restarts the countdown.

pub mod provider;

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Space,
    Semiconductor,
    Pcb,
}

impl Theme {
    /// Declaration order, which is also the rotation order.
    pub const ALL: [Theme; 3] = [Theme::Space, Theme::Semiconductor, Theme::Pcb];

    /// Value of the `data-theme` attribute and of the selector option.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Space => "space",
            Theme::Semiconductor => "semiconductor",
            Theme::Pcb => "PCB",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Space => "Space",
            Theme::Semiconductor => "Semiconductor",
            Theme::Pcb => "PCB",
        }
    }

    pub fn video(self) -> &'static str {
        match self {
            Theme::Space => "./public/bg1.mp4",
            Theme::Semiconductor => "./public/bg2.mp4",
            Theme::Pcb => "./public/bg3.mp4",
        }
    }

    pub fn from_id(id: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|theme| theme.id() == id)
    }

    pub fn next(self) -> Theme {
        let index = Theme::ALL.iter().position(|theme| *theme == self).unwrap_or(0);
        Theme::ALL[(index + 1) % Theme::ALL.len()]
    }
}

/// Whether the video element has to be pointed at `theme`'s asset.
/// Compares against the raw `src` attribute, not the resolved URL.
pub fn video_needs_reload(current_src: Option<&str>, theme: Theme) -> bool {
    current_src != Some(theme.video())
}

/// The media element behind the page.
pub trait BackgroundVideo {
    fn source(&self) -> Option<String>;
    fn mute(&self);
    /// Points the element at `src` and restarts loading.
    fn play_source(&self, src: &str);
}

/// Mutes `video` and switches it to `theme`'s asset unless it already shows it.
/// Returns whether the source changed.
pub fn show_theme_video(video: &impl BackgroundVideo, theme: Theme) -> bool {
    // autoplay is only allowed while muted
    video.mute();
    if !video_needs_reload(video.source().as_deref(), theme) {
        return false;
    }
    video.play_source(theme.video());
    true
}

/// A control that displays the active theme id.
pub trait ThemeControl {
    fn shown(&self) -> String;
    fn show(&self, id: &str);
}

/// Writes `theme`'s id into `control` if it shows anything else.
pub fn sync_control(control: &impl ThemeControl, theme: Theme) {
    if control.shown() != theme.id() {
        control.show(theme.id());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    Select(Theme),
    Rotate,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeState {
    pub current: Theme,
    /// Bumped by every action, even when the theme stays the same. The
    /// rotation timer is re-armed whenever this changes.
    pub epoch: u64,
}

impl ThemeState {
    pub fn apply(&self, action: ThemeAction) -> ThemeState {
        let current = match action {
            ThemeAction::Select(theme) => theme,
            ThemeAction::Rotate => self.current.next(),
        };
        ThemeState {
            current,
            epoch: self.epoch.wrapping_add(1),
        }
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        log::debug!("Theme {:?} -> {} (epoch {})", action, next.current.id(), next.epoch);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::THEME_ROTATION_MS;
    use crate::utils::timer::manual::ManualScheduler;
    use crate::utils::timer::{Scheduler, TimerSlot};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeVideo {
        src: RefCell<Option<String>>,
        muted: Cell<bool>,
        loads: Cell<usize>,
        unmuted_loads: Cell<usize>,
    }

    impl BackgroundVideo for FakeVideo {
        fn source(&self) -> Option<String> {
            self.src.borrow().clone()
        }

        fn mute(&self) {
            self.muted.set(true);
        }

        fn play_source(&self, src: &str) {
            *self.src.borrow_mut() = Some(src.to_string());
            self.loads.set(self.loads.get() + 1);
            if !self.muted.get() {
                self.unmuted_loads.set(self.unmuted_loads.get() + 1);
            }
        }
    }

    /// Behaves like a `<select>` value property: the last write wins.
    #[derive(Default)]
    struct FakeSelect {
        value: RefCell<String>,
        writes: Cell<usize>,
    }

    impl ThemeControl for FakeSelect {
        fn shown(&self) -> String {
            self.value.borrow().clone()
        }

        fn show(&self, id: &str) {
            *self.value.borrow_mut() = id.to_string();
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn test_theme_ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_id(theme.id()), Some(theme));
        }
        assert_eq!(Theme::from_id("pcb"), None);
        assert_eq!(Theme::from_id("ocean"), None);
    }

    #[test]
    fn test_rotation_order_wraps() {
        assert_eq!(Theme::Space.next(), Theme::Semiconductor);
        assert_eq!(Theme::Semiconductor.next(), Theme::Pcb);
        assert_eq!(Theme::Pcb.next(), Theme::Space);
    }

    #[test]
    fn test_n_rotations_land_on_n_mod_3() {
        let mut state = ThemeState::default();
        for n in 1..=10 {
            state = state.apply(ThemeAction::Rotate);
            assert_eq!(state.current, Theme::ALL[n % 3]);
        }
    }

    #[test]
    fn test_selecting_same_theme_still_bumps_epoch() {
        let state = ThemeState::default();
        let once = state.apply(ThemeAction::Select(Theme::Pcb));
        let twice = once.apply(ThemeAction::Select(Theme::Pcb));
        assert_eq!(twice.current, Theme::Pcb);
        assert_ne!(once.epoch, twice.epoch);
    }

    #[test]
    fn test_video_reload_is_skipped_for_same_source() {
        assert!(video_needs_reload(None, Theme::Space));
        assert!(video_needs_reload(Some("./public/bg1.mp4"), Theme::Pcb));
        assert!(!video_needs_reload(Some("./public/bg3.mp4"), Theme::Pcb));
    }

    #[test]
    fn test_video_is_muted_before_it_loads() {
        let video = FakeVideo::default();
        assert!(show_theme_video(&video, Theme::Semiconductor));
        assert!(video.muted.get());
        assert_eq!(video.loads.get(), 1);
        assert_eq!(video.unmuted_loads.get(), 0);
        assert_eq!(video.source().as_deref(), Some("./public/bg2.mp4"));

        // an unmuted element gets muted even when the source stays
        video.muted.set(false);
        assert!(!show_theme_video(&video, Theme::Semiconductor));
        assert!(video.muted.get());
        assert_eq!(video.loads.get(), 1);
    }

    #[test]
    fn test_sync_control_only_writes_on_mismatch() {
        let select = FakeSelect::default();
        sync_control(&select, Theme::Pcb);
        assert_eq!(select.shown(), "PCB");
        sync_control(&select, Theme::Pcb);
        assert_eq!(select.writes.get(), 1);
    }

    /// Drives the state the way the provider does: every epoch change re-arms the slot.
    struct Harness {
        scheduler: ManualScheduler,
        state: Rc<RefCell<ThemeState>>,
        slot: TimerSlot<<ManualScheduler as Scheduler>::Handle>,
        armed_epoch: Option<u64>,
        video: FakeVideo,
        select: FakeSelect,
    }

    impl Harness {
        fn new() -> Self {
            let mut harness = Harness {
                scheduler: ManualScheduler::default(),
                state: Rc::new(RefCell::new(ThemeState::default())),
                slot: TimerSlot::default(),
                armed_epoch: None,
                video: FakeVideo::default(),
                select: FakeSelect::default(),
            };
            harness.settle();
            harness
        }

        fn dispatch(&mut self, action: ThemeAction) {
            let next = self.state.borrow().apply(action);
            *self.state.borrow_mut() = next;
            self.settle();
        }

        fn advance(&mut self, millis: u64) {
            let mut remaining = millis;
            while remaining > 0 {
                let step = remaining.min(1_000);
                self.scheduler.advance(step);
                remaining -= step;
                self.settle();
            }
        }

        fn settle(&mut self) {
            let state = self.state.borrow().clone();
            if self.armed_epoch == Some(state.epoch) {
                return;
            }
            show_theme_video(&self.video, state.current);
            sync_control(&self.select, state.current);
            let shared = self.state.clone();
            let scheduler = self.scheduler.clone();
            self.slot.replace(|| {
                scheduler.every(THEME_ROTATION_MS, move || {
                    let next = shared.borrow().apply(ThemeAction::Rotate);
                    *shared.borrow_mut() = next;
                })
            });
            self.armed_epoch = Some(state.epoch);
        }
    }

    #[test]
    fn test_only_one_rotation_timer_pending() {
        let mut harness = Harness::new();
        assert_eq!(harness.scheduler.pending(), 1);

        harness.dispatch(ThemeAction::Select(Theme::Pcb));
        assert_eq!(harness.scheduler.pending(), 1);
        harness.dispatch(ThemeAction::Select(Theme::Pcb));
        harness.dispatch(ThemeAction::Select(Theme::Space));
        assert_eq!(harness.scheduler.pending(), 1);

        harness.advance(THEME_ROTATION_MS as u64 * 4);
        assert_eq!(harness.scheduler.pending(), 1);
    }

    #[test]
    fn test_rotation_cycles_every_twenty_seconds() {
        let mut harness = Harness::new();
        harness.advance(19_000);
        assert_eq!(harness.state.borrow().current, Theme::Space);
        harness.advance(1_000);
        assert_eq!(harness.state.borrow().current, Theme::Semiconductor);
        harness.advance(20_000);
        assert_eq!(harness.state.borrow().current, Theme::Pcb);
        harness.advance(20_000);
        assert_eq!(harness.state.borrow().current, Theme::Space);
    }

    #[test]
    fn test_manual_selection_resets_countdown() {
        let mut harness = Harness::new();
        harness.advance(15_000);
        harness.dispatch(ThemeAction::Select(Theme::Semiconductor));

        // the old timer would have fired at 20s
        harness.advance(10_000);
        assert_eq!(harness.state.borrow().current, Theme::Semiconductor);
        harness.advance(10_000);
        assert_eq!(harness.state.borrow().current, Theme::Pcb);
        assert_eq!(harness.scheduler.now(), 35_000);
    }

    #[test]
    fn test_reselecting_same_theme_does_not_reload_video() {
        let mut harness = Harness::new();
        assert_eq!(harness.video.loads.get(), 1);

        harness.dispatch(ThemeAction::Select(Theme::Space));
        assert_eq!(harness.video.loads.get(), 1);
        assert_eq!(harness.armed_epoch, Some(1));

        harness.dispatch(ThemeAction::Select(Theme::Pcb));
        assert_eq!(harness.video.loads.get(), 2);
        assert_eq!(harness.video.unmuted_loads.get(), 0);
    }

    #[test]
    fn test_selector_follows_rotation_back_to_hand_picked_theme() {
        let mut harness = Harness::new();
        assert_eq!(harness.select.shown(), "space");

        // the visitor picks PCB in the drop-down
        *harness.select.value.borrow_mut() = "PCB".to_string();
        let action = Theme::from_id(&harness.select.shown()).map(ThemeAction::Select);
        assert_eq!(action, Some(ThemeAction::Select(Theme::Pcb)));
        harness.dispatch(ThemeAction::Select(Theme::Pcb));

        for expected in [Theme::Space, Theme::Semiconductor, Theme::Pcb] {
            harness.advance(THEME_ROTATION_MS as u64);
            assert_eq!(harness.state.borrow().current, expected);
            assert_eq!(harness.select.shown(), expected.id());
        }
    }
}
