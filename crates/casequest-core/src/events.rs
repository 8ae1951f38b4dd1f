//! Notifications the core emits for UI listeners.
//!
//! Dispatch is synchronous and single-threaded: `emit` walks the
//! listeners in subscription order on the caller's stack. Listeners
//! cannot unsubscribe; they live as long as the bus.

use casequest_logic::badges::Badge;

/// Everything a host UI might want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The scoring service applied a first-time award.
    PointsAwarded {
        task_key: String,
        points: u32,
        total_score: u32,
    },
    /// A badge was earned (its points arrive as a separate
    /// `PointsAwarded`).
    BadgeEarned { badge: Badge },
    /// The case was finalized.
    GameComplete { final_score: u32 },
}

/// Ordered fan-out of [`GameEvent`]s to boxed listeners.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn FnMut(&GameEvent)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; it sees every event emitted after subscription.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver `event` to every listener, in subscription order.
    pub fn emit(&mut self, event: &GameEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
