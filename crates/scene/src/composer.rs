//! The Scene Composer: arena of nodes plus cross-node selection state.

use content::RecordId;
use engine_core::{TimerEvent, TimerScope, Transform};
use hecs::{Entity, World};

use crate::node::{
    node_transform, BasePlacement, Interaction, Motion, NodeBinding, NodeSpec, PickSphere,
    ScaleSpring,
};
use crate::pick::Ray;

/// Owns one scene's node entities and the only mutable shared state between
/// them: `selected` and `hovered`. Nodes never touch that state directly;
/// pointer events are routed through `handle_select` / `handle_hover` /
/// `handle_leave`.
pub struct Composer {
    world: World,
    selected: Option<RecordId>,
    hovered: Option<RecordId>,
    timers: TimerScope,
    mounted: bool,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            selected: None,
            hovered: None,
            timers: TimerScope::new(),
            mounted: true,
        }
    }

    /// Spawn one interactive node from its spec.
    pub fn spawn_node(&mut self, spec: NodeSpec) -> Entity {
        let mut spring = ScaleSpring::new(spec.boost);
        if let Some(boost) = spec.boost_selected {
            spring = spring.with_selected_boost(boost);
        }
        self.world.spawn((
            NodeBinding { id: spec.id },
            spec.base,
            spec.motion,
            spring,
            PickSphere {
                radius: spec.pick_radius,
            },
            Transform::from_position(spec.base.position),
        ))
    }

    /// Click entry point. Toggles: selecting the already-selected node
    /// clears it; anything else becomes the sole selection.
    pub fn handle_select(&mut self, id: RecordId) {
        if self.selected == Some(id) {
            log::debug!("deselect {id}");
            self.selected = None;
        } else {
            log::debug!("select {id}");
            self.selected = Some(id);
        }
    }

    /// Pointer-over entry point; last write wins.
    pub fn handle_hover(&mut self, id: RecordId) {
        self.hovered = Some(id);
    }

    /// Pointer-out entry point.
    pub fn handle_leave(&mut self) {
        self.hovered = None;
    }

    pub fn selected(&self) -> Option<RecordId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<RecordId> {
        self.hovered
    }

    pub fn is_active(&self, id: RecordId) -> bool {
        self.selected == Some(id)
    }

    pub fn is_hovered(&self, id: RecordId) -> bool {
        self.hovered == Some(id)
    }

    /// The record a detail panel should show: selection wins over hover.
    pub fn focus(&self) -> Option<(RecordId, bool)> {
        self.selected
            .map(|id| (id, true))
            .or_else(|| self.hovered.map(|id| (id, false)))
    }

    fn interaction_for(&self, id: RecordId) -> Interaction {
        if self.selected == Some(id) {
            Interaction::Selected
        } else if self.hovered == Some(id) {
            Interaction::Hovered
        } else {
            Interaction::Idle
        }
    }

    /// Advance every node for this frame. Nodes read only their own
    /// components plus the shared elapsed time, so iteration order cannot
    /// matter. No-op after unmount.
    pub fn update(&mut self, elapsed: f32, dt: f32) {
        if !self.mounted {
            return;
        }
        let selected = self.selected;
        let hovered = self.hovered;
        for (_, (binding, base, motion, spring, transform)) in self.world.query_mut::<(
            &NodeBinding,
            &BasePlacement,
            &Motion,
            &mut ScaleSpring,
            &mut Transform,
        )>() {
            let interaction = if selected == Some(binding.id) {
                Interaction::Selected
            } else if hovered == Some(binding.id) {
                Interaction::Hovered
            } else {
                Interaction::Idle
            };
            spring.advance(interaction, dt);
            *transform = node_transform(base, motion, spring, interaction, elapsed);
        }
    }

    /// Poll the composer's timers. Returns nothing after unmount.
    pub fn tick_timers(&mut self, dt: f32) -> Vec<TimerEvent> {
        if !self.mounted {
            return Vec::new();
        }
        self.timers.tick(dt)
    }

    pub fn timers_mut(&mut self) -> &mut TimerScope {
        &mut self.timers
    }

    /// Tear the scene down: cancel every pending timer and stop updating.
    /// Idempotent.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.timers.cancel_all();
            self.mounted = false;
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Closest-hit pick: exactly one node (or none) receives each pointer
    /// event, which is what stops hover from also reaching anything behind
    /// the node.
    pub fn pick(&self, ray: &Ray) -> Option<RecordId> {
        let mut best: Option<(f32, RecordId)> = None;
        for (_, (binding, sphere, transform)) in self
            .world
            .query::<(&NodeBinding, &PickSphere, &Transform)>()
            .iter()
        {
            let radius = sphere.radius * transform.scale.x;
            if let Some(t) = ray.sphere_hit(transform.position, radius) {
                if best.map_or(true, |(bt, _)| t < bt) {
                    best = Some((t, binding.id));
                }
            }
        }
        best.map(|(_, id)| id)
    }

    /// Current transform of a node, if it exists.
    pub fn node_transform_of(&self, id: RecordId) -> Option<Transform> {
        self.world
            .query::<(&NodeBinding, &Transform)>()
            .iter()
            .find(|(_, (binding, _))| binding.id == id)
            .map(|(_, (_, transform))| *transform)
    }

    /// Current interaction state of a node (for emissive boosts etc.).
    pub fn interaction(&self, id: RecordId) -> Interaction {
        self.interaction_for(id)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Bob, SpinSet};
    use glam::Vec3;

    fn spec(id: &'static str, pos: Vec3) -> NodeSpec {
        NodeSpec {
            id: RecordId(id),
            base: BasePlacement::at(pos),
            motion: Motion::uniform(Bob::NONE, SpinSet::NONE),
            boost: 1.4,
            boost_selected: None,
            pick_radius: 1.0,
        }
    }

    fn composer_with_two_nodes() -> Composer {
        let mut composer = Composer::new();
        composer.spawn_node(spec("a", Vec3::ZERO));
        composer.spawn_node(spec("b", Vec3::new(5.0, 0.0, 0.0)));
        composer
    }

    #[test]
    fn selection_is_exclusive() {
        let mut composer = composer_with_two_nodes();
        composer.handle_select(RecordId("a"));
        assert!(composer.is_active(RecordId("a")));
        composer.handle_select(RecordId("b"));
        assert!(composer.is_active(RecordId("b")));
        assert!(!composer.is_active(RecordId("a")));
    }

    #[test]
    fn selecting_active_node_toggles_it_off() {
        let mut composer = composer_with_two_nodes();
        composer.handle_select(RecordId("a"));
        composer.handle_select(RecordId("a"));
        assert_eq!(composer.selected(), None);
    }

    #[test]
    fn hover_does_not_persist_after_leave() {
        let mut composer = composer_with_two_nodes();
        composer.handle_hover(RecordId("a"));
        composer.handle_leave();
        composer.handle_hover(RecordId("a"));
        composer.update(0.0, 1.0 / 60.0);
        let after_rehover = composer.node_transform_of(RecordId("a")).unwrap();

        let mut fresh = composer_with_two_nodes();
        fresh.handle_hover(RecordId("a"));
        fresh.update(0.0, 1.0 / 60.0);
        let single_hover = fresh.node_transform_of(RecordId("a")).unwrap();

        assert_eq!(after_rehover, single_hover);
    }

    #[test]
    fn focus_prefers_selection_over_hover() {
        let mut composer = composer_with_two_nodes();
        composer.handle_hover(RecordId("a"));
        composer.handle_select(RecordId("b"));
        assert_eq!(composer.focus(), Some((RecordId("b"), true)));
    }

    #[test]
    fn unmount_cancels_pending_timers() {
        let mut composer = composer_with_two_nodes();
        composer.timers_mut().interval(0.5).unwrap();
        composer.timers_mut().delay(1.0);
        composer.unmount();
        assert!(composer.tick_timers(10.0).is_empty());
        assert!(!composer.is_mounted());
    }

    #[test]
    fn update_after_unmount_mutates_nothing() {
        let mut composer = composer_with_two_nodes();
        composer.handle_hover(RecordId("a"));
        composer.update(0.0, 1.0 / 60.0);
        let before = composer.node_transform_of(RecordId("a")).unwrap();
        composer.unmount();
        composer.update(100.0, 1.0);
        let after = composer.node_transform_of(RecordId("a")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn pick_returns_nearest_node_only() {
        let mut composer = Composer::new();
        composer.spawn_node(spec("near", Vec3::new(0.0, 0.0, -5.0)));
        composer.spawn_node(spec("far", Vec3::new(0.0, 0.0, -12.0)));
        composer.update(0.0, 1.0 / 60.0);
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert_eq!(composer.pick(&ray), Some(RecordId("near")));
    }

    #[test]
    fn pick_misses_when_ray_points_away() {
        let mut composer = composer_with_two_nodes();
        composer.update(0.0, 1.0 / 60.0);
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::new(0.0, 0.0, 1.0),
        };
        assert_eq!(composer.pick(&ray), None);
    }
}
