use std::{
    sync::atomic::{AtomicBool, AtomicU8, Ordering},
    time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};

use crate::settings::Settings;

/// The fastest speed: no delay between turtle actions.
pub const MAX_SPEED: u8 = 100;

/// Start, stop, pause and speed flags shared between a running interpreter
/// and whoever controls it.
///
/// The interpreter checks [`is_running`](Self::is_running) before every node
/// and calls [`pace`](Self::pace) after every turtle action. Flags are
/// atomics; `pace` blocks on a condition variable that every setter
/// notifies, so a pause, a stop or a speed change takes effect immediately
/// even in the middle of a delay.
///
/// Speed maps linearly to the delay after each action: `0` waits until the
/// speed changes or the run stops, [`MAX_SPEED`] does not wait, and anything
/// in between waits `(MAX_SPEED - speed) * step`.
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// use turtle_logo::interpreter::control::RunControl;
///
/// let control = RunControl::new(100, Duration::from_millis(10));
/// assert!(control.is_running());
///
/// control.pause();
/// control.stop();
/// // a stopped run never blocks, even while paused
/// control.pace();
/// assert!(!control.is_running());
/// ```
#[derive(Debug)]
pub struct RunControl {
    running: AtomicBool,
    paused:  AtomicBool,
    speed:   AtomicU8,
    step:    Duration,
    gate:    Mutex<()>,
    wake:    Condvar,
}

impl RunControl {
    /// Creates a running, unpaused control. `speed` is clamped to
    /// `0..=MAX_SPEED`.
    #[must_use]
    pub fn new(speed: u8, step: Duration) -> Self {
        Self { running: AtomicBool::new(true),
               paused: AtomicBool::new(false),
               speed: AtomicU8::new(speed.min(MAX_SPEED)),
               step,
               gate: Mutex::new(()),
               wake: Condvar::new() }
    }

    /// Creates a control from the speed and step in `settings`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.speed, settings.step)
    }

    /// Marks the run as running and not paused.
    pub fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
        self.paused.store(false, Ordering::SeqCst);
        self.notify();
    }

    /// Asks the run to halt before its next node.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.notify();
    }

    /// Suspends the run after its current turtle action.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
        self.notify();
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.notify();
    }

    /// Changes the speed, clamped to `0..=MAX_SPEED`.
    pub fn set_speed(&self, speed: u8) {
        self.speed.store(speed.min(MAX_SPEED), Ordering::SeqCst);
        self.notify();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn speed(&self) -> u8 {
        self.speed.load(Ordering::SeqCst)
    }

    /// The delay `pace` applies at the current speed, or `None` when it
    /// waits indefinitely.
    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        match self.speed() {
            0 => None,
            speed => Some(self.step * u32::from(MAX_SPEED.saturating_sub(speed))),
        }
    }

    /// Waits out the delay after a turtle action.
    ///
    /// Returns at once when the run is stopped. While paused, or at speed
    /// `0`, blocks until another flag changes. The delay is measured from
    /// the call, so a speed change mid-wait shortens or extends it.
    pub fn pace(&self) {
        let started = Instant::now();
        let mut gate = self.gate.lock();
        loop {
            if !self.is_running() {
                return;
            }
            if self.is_paused() {
                self.wake.wait(&mut gate);
                continue;
            }
            let Some(delay) = self.delay() else {
                self.wake.wait(&mut gate);
                continue;
            };
            let deadline = started + delay;
            if Instant::now() >= deadline {
                return;
            }
            let _ = self.wake.wait_until(&mut gate, deadline);
        }
    }

    fn notify(&self) {
        let _gate = self.gate.lock();
        self.wake.notify_all();
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
