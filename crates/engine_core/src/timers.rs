//! Polled timers with explicit cancellation tokens.
//!
//! Every background activity a scene starts (counter ramps, screenshot
//! cycling, simulated submit delays) is registered in a [`TimerScope`] and
//! identified by the [`TimerToken`] handed back. The scope's owner polls
//! [`TimerScope::tick`] once per frame and cancels tokens when the condition
//! that started them lapses; `cancel_all` on unmount guarantees nothing fires
//! against a dead scene.

use thiserror::Error;

/// Handle to one timer inside a [`TimerScope`]. Cancelling an already-expired
/// token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("interval period must be positive, got {0}")]
    NonPositivePeriod(f32),
}

/// One timer firing reported by [`TimerScope::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerEvent {
    pub token: TimerToken,
    /// How many times the timer fired during this tick. Intervals can fire
    /// more than once when a frame spans several periods; delays fire once.
    pub fires: u32,
}

#[derive(Debug)]
enum TimerKind {
    Interval { period: f32, elapsed: f32 },
    Delay { remaining: f32 },
}

#[derive(Debug)]
struct ActiveTimer {
    token: TimerToken,
    kind: TimerKind,
}

/// Owns a set of timers and their lifecycle.
#[derive(Debug, Default)]
pub struct TimerScope {
    timers: Vec<ActiveTimer>,
    next_id: u64,
}

impl TimerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repeating timer firing every `period` seconds.
    pub fn interval(&mut self, period: f32) -> Result<TimerToken, TimerError> {
        if period <= 0.0 {
            return Err(TimerError::NonPositivePeriod(period));
        }
        let token = self.next_token();
        self.timers.push(ActiveTimer {
            token,
            kind: TimerKind::Interval {
                period,
                elapsed: 0.0,
            },
        });
        Ok(token)
    }

    /// Register a one-shot timer firing after `duration` seconds. The token
    /// expires when it fires.
    pub fn delay(&mut self, duration: f32) -> TimerToken {
        let token = self.next_token();
        self.timers.push(ActiveTimer {
            token,
            kind: TimerKind::Delay {
                remaining: duration.max(0.0),
            },
        });
        token
    }

    /// Advance all timers by `dt` seconds and report firings in registration
    /// order. Expired delays are removed.
    pub fn tick(&mut self, dt: f32) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        for timer in &mut self.timers {
            match &mut timer.kind {
                TimerKind::Interval { period, elapsed } => {
                    *elapsed += dt;
                    let mut fires = 0u32;
                    while *elapsed >= *period {
                        *elapsed -= *period;
                        fires += 1;
                    }
                    if fires > 0 {
                        events.push(TimerEvent {
                            token: timer.token,
                            fires,
                        });
                    }
                }
                TimerKind::Delay { remaining } => {
                    *remaining -= dt;
                    if *remaining <= 0.0 {
                        events.push(TimerEvent {
                            token: timer.token,
                            fires: 1,
                        });
                    }
                }
            }
        }
        self.timers.retain(|t| match t.kind {
            TimerKind::Delay { remaining } => remaining > 0.0,
            TimerKind::Interval { .. } => true,
        });
        events
    }

    /// Cancel one timer. Returns false if the token was already gone.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.token != token);
        self.timers.len() != before
    }

    /// Cancel every timer in the scope. Called on unmount.
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("cancelling {} pending timers", self.timers.len());
        }
        self.timers.clear();
    }

    pub fn is_active(&self, token: TimerToken) -> bool {
        self.timers.iter().any(|t| t.token == token)
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    fn next_token(&mut self) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_each_period() {
        let mut scope = TimerScope::new();
        let token = scope.interval(1.0).unwrap();
        assert!(scope.tick(0.5).is_empty());
        let events = scope.tick(0.6);
        assert_eq!(events, vec![TimerEvent { token, fires: 1 }]);
        assert!(scope.is_active(token));
    }

    #[test]
    fn interval_can_fire_multiple_times_per_tick() {
        let mut scope = TimerScope::new();
        let token = scope.interval(0.1).unwrap();
        let events = scope.tick(0.35);
        assert_eq!(events, vec![TimerEvent { token, fires: 3 }]);
    }

    #[test]
    fn delay_fires_once_then_expires() {
        let mut scope = TimerScope::new();
        let token = scope.delay(1.0);
        assert!(scope.tick(0.9).is_empty());
        assert_eq!(scope.tick(0.2), vec![TimerEvent { token, fires: 1 }]);
        assert!(!scope.is_active(token));
        assert!(scope.tick(5.0).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut scope = TimerScope::new();
        let token = scope.interval(0.5).unwrap();
        assert!(scope.cancel(token));
        assert!(!scope.cancel(token));
        assert!(scope.tick(10.0).is_empty());
    }

    #[test]
    fn cancel_all_empties_the_scope() {
        let mut scope = TimerScope::new();
        scope.interval(0.5).unwrap();
        scope.delay(2.0);
        scope.cancel_all();
        assert!(scope.is_empty());
        assert!(scope.tick(10.0).is_empty());
    }

    #[test]
    fn zero_period_is_rejected() {
        let mut scope = TimerScope::new();
        assert!(scope.interval(0.0).is_err());
    }
}
