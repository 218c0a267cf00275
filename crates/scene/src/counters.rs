//! Animated stat counters ("Journey Stats", "Certification Gallery").
//!
//! Each counter ramps from 0 to its target over a fixed-step interval and
//! then holds; the ramp starts once at mount and never replays. The board's
//! interval token lives in the owning composer's timer scope, so unmount
//! cancels the ramp with everything else.

use engine_core::{TimerEvent, TimerScope, TimerToken};

/// Ramp duration in seconds.
pub const RAMP_DURATION_SECS: f32 = 2.0;
/// Number of fixed steps across the ramp.
pub const RAMP_STEPS: u32 = 60;

/// One statistic ramping from 0 to `target` over `RAMP_STEPS` fixed steps.
#[derive(Debug, Clone, Copy)]
pub struct CounterRamp {
    target: u32,
    steps_done: u32,
}

impl CounterRamp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            steps_done: 0,
        }
    }

    /// Advance one fixed step; saturates at the full ramp.
    pub fn step(&mut self) {
        if self.steps_done < RAMP_STEPS {
            self.steps_done += 1;
        }
    }

    /// Value currently shown: the floored ramp fraction of the target. Hits
    /// the target exactly on the final step and holds there.
    pub fn display(&self) -> u32 {
        if self.steps_done >= RAMP_STEPS {
            self.target
        } else {
            let frac = self.steps_done as f32 / RAMP_STEPS as f32;
            ((self.target as f32 * frac) as u32).min(self.target)
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.display() == self.target
    }
}

/// A titled group of labelled counters driven by one interval token.
pub struct StatBoard {
    pub title: &'static str,
    counters: Vec<(&'static str, CounterRamp)>,
    token: TimerToken,
}

impl StatBoard {
    /// Register the board's interval in `scope` and start all ramps at 0.
    pub fn mount(
        title: &'static str,
        stats: &[(&'static str, u32)],
        scope: &mut TimerScope,
    ) -> Self {
        let token = scope
            .interval(RAMP_DURATION_SECS / RAMP_STEPS as f32)
            .expect("ramp step period is positive");
        Self {
            title,
            counters: stats
                .iter()
                .map(|&(label, target)| (label, CounterRamp::new(target)))
                .collect(),
            token,
        }
    }

    /// Feed one timer event; steps every counter once per fire when the
    /// event belongs to this board.
    pub fn on_timer(&mut self, event: &TimerEvent) {
        if event.token != self.token {
            return;
        }
        for _ in 0..event.fires {
            for (_, ramp) in &mut self.counters {
                ramp.step();
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.counters.iter().map(|(label, ramp)| (*label, ramp.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_monotone_and_bounded() {
        let mut ramp = CounterRamp::new(17);
        let mut last = 0;
        for _ in 0..RAMP_STEPS {
            ramp.step();
            let shown = ramp.display();
            assert!(shown >= last);
            assert!(shown <= 17);
            last = shown;
        }
        assert_eq!(ramp.display(), 17);
    }

    #[test]
    fn ramp_holds_after_completion() {
        let mut ramp = CounterRamp::new(4);
        for _ in 0..(RAMP_STEPS * 3) {
            ramp.step();
        }
        assert_eq!(ramp.display(), 4);
    }

    #[test]
    fn zero_target_is_immediately_done() {
        let ramp = CounterRamp::new(0);
        assert!(ramp.is_done());
        assert_eq!(ramp.display(), 0);
    }

    #[test]
    fn board_reaches_targets_after_full_duration() {
        let mut scope = TimerScope::new();
        let mut board = StatBoard::mount(
            "Journey Stats",
            &[("Years Learning", 17), ("Institutions", 4)],
            &mut scope,
        );
        // Drive two seconds of frames through the scope.
        let dt = 1.0 / 120.0;
        let mut elapsed = 0.0;
        while elapsed < RAMP_DURATION_SECS + 0.1 {
            for event in scope.tick(dt) {
                board.on_timer(&event);
            }
            elapsed += dt;
        }
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows, vec![("Years Learning", 17), ("Institutions", 4)]);
    }

    #[test]
    fn board_ignores_foreign_tokens() {
        let mut scope = TimerScope::new();
        let mut board = StatBoard::mount("Stats", &[("A", 5)], &mut scope);
        let other = scope.delay(0.1);
        board.on_timer(&TimerEvent {
            token: other,
            fires: 10,
        });
        assert_eq!(board.rows().next(), Some(("A", 0)));
    }
}
