use gloo_timers::callback::{Interval, Timeout};

/// Something that can run callbacks later. Dropping a handle cancels its timer.
pub trait Scheduler {
    type Handle;

    fn every(&self, millis: u32, tick: impl FnMut() + 'static) -> Self::Handle;

    fn after(&self, millis: u32, fire: impl FnOnce() + 'static) -> Self::Handle;

    /// Lets the timer run to completion without keeping the handle around.
    fn detach(handle: Self::Handle);
}

/// `setInterval` / `setTimeout` through gloo-timers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, millis: u32, tick: impl FnMut() + 'static) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, tick))
    }

    fn after(&self, millis: u32, fire: impl FnOnce() + 'static) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, fire))
    }

    fn detach(handle: BrowserTimer) {
        match handle {
            BrowserTimer::Interval(interval) => {
                let _ = interval.forget();
            }
            BrowserTimer::Timeout(timeout) => {
                let _ = timeout.forget();
            }
        }
    }
}

/// Holds at most one live timer. Arming a new one cancels the old one first.
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn replace(&mut self, arm: impl FnOnce() -> H) {
        self.cancel();
        self.handle = Some(arm());
    }

    pub fn cancel(&mut self) {
        // dropping the handle clears the timer
        self.handle.take();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::{Rc, Weak};

    enum Task {
        Once(Box<dyn FnOnce()>),
        Every(u32, Box<dyn FnMut()>),
    }

    struct Entry {
        id: u64,
        due: u64,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
        // ids cancelled while their callback was running
        cancelled: HashSet<u64>,
    }

    /// Virtual clock for driving timers deterministically in tests.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub(crate) struct ManualHandle {
        id: u64,
        clock: Option<Weak<RefCell<Clock>>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let Some(clock) = self.clock.take().and_then(|weak| weak.upgrade()) else {
                return;
            };
            let mut clock = clock.borrow_mut();
            let before = clock.entries.len();
            clock.entries.retain(|entry| entry.id != self.id);
            if clock.entries.len() == before {
                clock.cancelled.insert(self.id);
            }
        }
    }

    impl ManualScheduler {
        fn schedule(&self, delay: u32, task: Task) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay as u64;
            clock.entries.push(Entry { id, due, task });
            ManualHandle {
                id,
                clock: Some(Rc::downgrade(&self.clock)),
            }
        }

        pub(crate) fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub(crate) fn pending(&self) -> usize {
            self.clock.borrow().entries.len()
        }

        /// Moves the clock forward, firing every timer that comes due on the way.
        pub(crate) fn advance(&self, millis: u64) {
            let target = self.clock.borrow().now + millis;
            loop {
                let entry = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, entry)| entry.due <= target)
                        .min_by_key(|(_, entry)| (entry.due, entry.id))
                        .map(|(index, _)| index);
                    match next {
                        Some(index) => {
                            let entry = clock.entries.remove(index);
                            clock.now = entry.due;
                            entry
                        }
                        None => break,
                    }
                };
                match entry.task {
                    Task::Once(fire) => fire(),
                    Task::Every(period, mut tick) => {
                        tick();
                        let mut clock = self.clock.borrow_mut();
                        if !clock.cancelled.remove(&entry.id) {
                            let due = entry.due + period as u64;
                            clock.entries.push(Entry {
                                id: entry.id,
                                due,
                                task: Task::Every(period, tick),
                            });
                        }
                    }
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, millis: u32, tick: impl FnMut() + 'static) -> ManualHandle {
            self.schedule(millis, Task::Every(millis, Box::new(tick)))
        }

        fn after(&self, millis: u32, fire: impl FnOnce() + 'static) -> ManualHandle {
            self.schedule(millis, Task::Once(Box::new(fire)))
        }

        fn detach(mut handle: ManualHandle) {
            handle.clock = None;
        }
    }
}
