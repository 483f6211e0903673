use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::scheduler::{Scheduler, TaskHandle};

pub const DURATION_MS: u32 = 2000;
/// One frame at roughly 60 fps.
pub const FRAME_INTERVAL_MS: u32 = 16;
/// Upper bound (exclusive) of the random start delay.
pub const MAX_JITTER_MS: u32 = 200;

/// Linear count-up from 0 to `target` over [`DURATION_MS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: i64,
    frames: u32,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        let frames = if target > 0 { DURATION_MS / FRAME_INTERVAL_MS } else { 1 };
        Self { target, frames }
    }

    /// Reads a `data-target` value the way `parseInt` would: optional sign
    /// and leading digits, anything after is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let (sign, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (-1, &trimmed[1..]),
            Some(b'+') => (1, &trimmed[1..]),
            _ => (1, trimmed),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        let value: i64 = digits[..end].parse().ok()?;
        Some(Self::new(sign * value))
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Displayed value at `frame` (1-based); the last frame is exactly the target.
    pub fn value_at(&self, frame: u32) -> i64 {
        if frame >= self.frames {
            return self.target;
        }
        let scaled = i128::from(self.target) * i128::from(frame) / i128::from(self.frames);
        scaled as i64
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        (1..=self.frames).map(move |frame| self.value_at(frame))
    }
}

/// Text for a counter before its first frame: numeric targets start at 0,
/// anything else is shown unchanged.
pub fn initial_display(raw: &str) -> String {
    match CounterAnimation::parse(raw) {
        Some(_) => "0".to_string(),
        None => raw.to_string(),
    }
}

/// A running animation; dropping it stops the remaining frames.
pub struct CounterRun {
    _next_frame: Rc<RefCell<Option<TaskHandle>>>,
}

/// Shows 0 right away, then plays `animation` into `display` after `start_delay_ms`.
pub fn run<S: Scheduler>(
    scheduler: &S,
    animation: CounterAnimation,
    start_delay_ms: u32,
    display: Rc<dyn Fn(i64)>,
) -> CounterRun {
    display(0);
    let slot = Rc::new(RefCell::new(None));
    schedule_frame(
        scheduler.clone(),
        animation,
        1,
        start_delay_ms,
        display,
        Rc::downgrade(&slot),
    );
    CounterRun { _next_frame: slot }
}

fn schedule_frame<S: Scheduler>(
    scheduler: S,
    animation: CounterAnimation,
    frame: u32,
    delay_ms: u32,
    display: Rc<dyn Fn(i64)>,
    slot: Weak<RefCell<Option<TaskHandle>>>,
) {
    let Some(strong) = slot.upgrade() else {
        return;
    };
    let next = scheduler.clone();
    let handle = scheduler.schedule(
        delay_ms,
        Box::new(move || {
            display(animation.value_at(frame));
            if frame < animation.frames() {
                schedule_frame(next, animation, frame + 1, FRAME_INTERVAL_MS, display, slot);
            }
        }),
    );
    *strong.borrow_mut() = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(CounterAnimation::parse("1500").map(|a| a.target()), Some(1500));
        assert_eq!(CounterAnimation::parse(" 95%").map(|a| a.target()), Some(95));
        assert_eq!(CounterAnimation::parse("-3").map(|a| a.target()), Some(-3));
        assert_eq!(CounterAnimation::parse(""), None);
        assert_eq!(CounterAnimation::parse("n/a"), None);
        assert_eq!(CounterAnimation::parse("-"), None);
    }

    #[test]
    fn numeric_targets_start_from_zero() {
        assert_eq!(initial_display("1500+"), "0");
        assert_eq!(initial_display("-3"), "0");
        assert_eq!(initial_display("n/a"), "n/a");
    }

    #[test]
    fn frames_climb_to_the_exact_target() {
        for target in [0, 1, 7, 95, 124, 125, 126, 1500, 250_000] {
            let animation = CounterAnimation::new(target);
            let values: Vec<i64> = animation.values().collect();
            assert_eq!(values.last(), Some(&target));
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert!(values.iter().all(|v| *v <= target && *v >= 0));
        }
    }

    #[test]
    fn non_positive_targets_jump_straight_there() {
        let animation = CounterAnimation::new(-40);
        assert_eq!(animation.values().collect::<Vec<_>>(), vec![-40]);
    }

    #[test]
    fn run_resets_then_finishes_after_the_duration() {
        let scheduler = ManualScheduler::default();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = shown.clone();
        let _run = run(
            &scheduler,
            CounterAnimation::new(1500),
            120,
            Rc::new(move |v| sink.borrow_mut().push(v)),
        );
        assert_eq!(*shown.borrow(), vec![0]);

        scheduler.advance(119);
        assert_eq!(shown.borrow().len(), 1);

        scheduler.advance(u64::from(DURATION_MS));
        let shown = shown.borrow();
        assert_eq!(shown.last(), Some(&1500));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_the_run_stops_it() {
        let scheduler = ManualScheduler::default();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = shown.clone();
        let run = run(
            &scheduler,
            CounterAnimation::new(500),
            0,
            Rc::new(move |v| sink.borrow_mut().push(v)),
        );
        scheduler.advance(100);
        drop(run);
        let seen = shown.borrow().len();

        scheduler.advance(5000);
        assert_eq!(shown.borrow().len(), seen);
        assert_eq!(scheduler.pending(), 0);
    }
}
