//! Cooperative countdown for the crisis stage.
//!
//! The execution model is single-threaded and event-driven: the host
//! calls [`Countdown::tick`] once per elapsed second (from whatever
//! scheduling primitive it has), and the countdown fires its callbacks on
//! that stack. There are no threads and no cancellation primitives beyond
//! [`Countdown::cancel`].

/// A cancelable countdown with per-second and expiry callbacks.
pub struct Countdown {
    remaining: u32,
    running: bool,
    on_tick: Box<dyn FnMut(u32)>,
    on_expire: Option<Box<dyn FnOnce()>>,
}

impl Countdown {
    /// Start a countdown of `duration_secs`.
    ///
    /// `on_tick(remaining)` runs after every tick, including the final one
    /// (with `remaining == 0`). `on_expire` runs exactly once, when the
    /// clock reaches zero — unless [`cancel`](Countdown::cancel) happens
    /// first.
    pub fn start(
        duration_secs: u32,
        on_tick: impl FnMut(u32) + 'static,
        on_expire: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            remaining: duration_secs,
            running: true,
            on_tick: Box::new(on_tick),
            on_expire: Some(Box::new(on_expire)),
        }
    }

    /// Advance the clock by one second. No-op once expired or canceled.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);
        (self.on_tick)(self.remaining);

        if self.remaining == 0 {
            self.running = false;
            if let Some(expire) = self.on_expire.take() {
                expire();
            }
        }
    }

    /// Stop the countdown without firing `on_expire`.
    pub fn cancel(&mut self) {
        self.running = false;
        self.on_expire = None;
    }

    /// Whether the countdown is still live.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl std::fmt::Debug for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Countdown")
            .field("remaining", &self.remaining)
            .field("running", &self.running)
            .finish()
    }
}
