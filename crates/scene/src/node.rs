//! Interactive node components.
//!
//! A node's transform is recomputed every frame as a pure function of
//! (elapsed time, interaction state, base placement); phase offsets derive
//! from the base position so nodes desynchronize without shared state. The
//! only smoothed quantity is the scale spring, which eases toward its
//! interaction target.

use content::RecordId;
use engine_core::Transform;
use glam::{Quat, Vec3};

/// Binds an entity to its content record.
#[derive(Debug, Clone, Copy)]
pub struct NodeBinding {
    pub id: RecordId,
}

/// Static placement a node animates around.
#[derive(Debug, Clone, Copy)]
pub struct BasePlacement {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl BasePlacement {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Interaction state of a node this frame, derived from the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    Hovered,
    Selected,
}

/// Per-axis sinusoidal position offset. Phases encode per-node
/// desynchronization (a phase of FRAC_PI_2 turns sin into cos).
#[derive(Debug, Clone, Copy)]
pub struct Bob {
    pub amp: Vec3,
    pub freq: Vec3,
    pub phase: Vec3,
}

impl Bob {
    pub const NONE: Bob = Bob {
        amp: Vec3::ZERO,
        freq: Vec3::ZERO,
        phase: Vec3::ZERO,
    };

    pub fn offset(&self, t: f32) -> Vec3 {
        Vec3::new(
            self.amp.x * (self.freq.x * t + self.phase.x).sin(),
            self.amp.y * (self.freq.y * t + self.phase.y).sin(),
            self.amp.z * (self.freq.z * t + self.phase.z).sin(),
        )
    }
}

/// One rotation channel: either steady turning or a bounded sway.
#[derive(Debug, Clone, Copy)]
pub enum SpinMode {
    None,
    /// angle = rate * t
    Turn { rate: f32 },
    /// angle = sin(rate * t) * amp
    Sway { rate: f32, amp: f32 },
}

impl SpinMode {
    pub fn angle(&self, t: f32) -> f32 {
        match self {
            SpinMode::None => 0.0,
            SpinMode::Turn { rate } => rate * t,
            SpinMode::Sway { rate, amp } => (rate * t).sin() * amp,
        }
    }
}

/// Rotation channels around Y (turntable) and X (wobble).
#[derive(Debug, Clone, Copy)]
pub struct SpinSet {
    pub y: SpinMode,
    pub x: SpinMode,
}

impl SpinSet {
    pub const NONE: SpinSet = SpinSet {
        y: SpinMode::None,
        x: SpinMode::None,
    };

    pub fn rotation(&self, t: f32) -> Quat {
        Quat::from_rotation_y(self.y.angle(t)) * Quat::from_rotation_x(self.x.angle(t))
    }
}

/// Full motion description of a node; spin may differ per interaction state.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub bob: Bob,
    pub idle: SpinSet,
    pub hovered: SpinSet,
    pub selected: SpinSet,
}

impl Motion {
    /// Same spin regardless of interaction.
    pub fn uniform(bob: Bob, spin: SpinSet) -> Self {
        Self {
            bob,
            idle: spin,
            hovered: spin,
            selected: spin,
        }
    }

    pub fn spin_for(&self, interaction: Interaction) -> SpinSet {
        match interaction {
            Interaction::Idle => self.idle,
            Interaction::Hovered => self.hovered,
            Interaction::Selected => self.selected,
        }
    }
}

/// Smoothed scale: eases toward the interaction's boost while hovered or
/// selected, back to the base scale otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ScaleSpring {
    pub current: f32,
    /// Multiplier while hovered (1.1-1.5 by section).
    pub boost_hover: f32,
    /// Multiplier while selected; usually the hover boost, larger for the
    /// holograms.
    pub boost_selected: f32,
    /// Approach rate; higher settles faster.
    pub rate: f32,
}

impl ScaleSpring {
    pub fn new(boost: f32) -> Self {
        Self {
            current: 1.0,
            boost_hover: boost,
            boost_selected: boost,
            rate: 10.0,
        }
    }

    pub fn with_selected_boost(mut self, boost: f32) -> Self {
        self.boost_selected = boost;
        self
    }

    pub fn target(&self, interaction: Interaction) -> f32 {
        match interaction {
            Interaction::Idle => 1.0,
            Interaction::Hovered => self.boost_hover,
            Interaction::Selected => self.boost_selected,
        }
    }

    pub fn advance(&mut self, interaction: Interaction, dt: f32) {
        let target = self.target(interaction);
        self.current += (target - self.current) * (self.rate * dt).min(1.0);
    }
}

/// Sphere used for ray picking, scaled by the node's current scale.
#[derive(Debug, Clone, Copy)]
pub struct PickSphere {
    pub radius: f32,
}

/// Everything needed to spawn one node entity.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub id: RecordId,
    pub base: BasePlacement,
    pub motion: Motion,
    /// Scale multiplier while hovered/selected.
    pub boost: f32,
    /// Override for the selected state; `None` reuses `boost`.
    pub boost_selected: Option<f32>,
    pub pick_radius: f32,
}

/// Compute a node's transform for this frame. Pure in (t, interaction,
/// base); the scale comes from the already-advanced spring.
pub fn node_transform(
    base: &BasePlacement,
    motion: &Motion,
    spring: &ScaleSpring,
    interaction: Interaction,
    t: f32,
) -> Transform {
    let spin = motion.spin_for(interaction);
    Transform {
        position: base.position + motion.bob.offset(t),
        rotation: base.rotation * spin.rotation(t),
        scale: Vec3::splat(base.scale * spring.current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_phase_desynchronizes_nodes() {
        let a = Bob {
            amp: Vec3::splat(1.0),
            freq: Vec3::splat(1.0),
            phase: Vec3::ZERO,
        };
        let b = Bob {
            amp: Vec3::splat(1.0),
            freq: Vec3::splat(1.0),
            phase: Vec3::splat(1.5),
        };
        assert_ne!(a.offset(2.0), b.offset(2.0));
    }

    #[test]
    fn transform_is_deterministic_in_time() {
        let base = BasePlacement::at(Vec3::new(0.0, 6.0, 0.0));
        let motion = Motion::uniform(
            Bob {
                amp: Vec3::new(0.3, 0.0, 0.3),
                freq: Vec3::new(0.8, 0.0, 0.6),
                phase: Vec3::new(6.0, 0.0, 6.0 + std::f32::consts::FRAC_PI_2),
            },
            SpinSet::NONE,
        );
        let spring = ScaleSpring::new(1.4);
        let t1 = node_transform(&base, &motion, &spring, Interaction::Idle, 3.25);
        let t2 = node_transform(&base, &motion, &spring, Interaction::Idle, 3.25);
        assert_eq!(t1, t2);
    }

    #[test]
    fn spring_settles_on_boost_and_back() {
        let mut spring = ScaleSpring::new(1.4);
        for _ in 0..200 {
            spring.advance(Interaction::Hovered, 1.0 / 60.0);
        }
        assert!((spring.current - 1.4).abs() < 1e-3);
        for _ in 0..200 {
            spring.advance(Interaction::Idle, 1.0 / 60.0);
        }
        assert!((spring.current - 1.0).abs() < 1e-3);
    }

    #[test]
    fn spring_is_stable_for_large_dt() {
        let mut spring = ScaleSpring::new(1.5);
        spring.advance(Interaction::Selected, 10.0);
        assert!(spring.current <= 1.5 + 1e-6);
    }
}
