//! Section shell plumbing: the section list, the scene trait every shell
//! implements, the shared mesh library, and pointer routing.

use content::RecordId;
use glam::Vec3;
use input::InputState;
use renderer::{InstanceData, LineVertex, Mesh, OrbitConfig, OverlayTextBuilder, SceneLights};
use scene::{Composer, Ray};

/// The six full-viewport sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Skills,
    Experience,
    Projects,
    Certificates,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Certificates,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    pub fn previous(self) -> Section {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// Primitive meshes shared by every section; uploaded once at startup and
/// scaled per instance.
pub struct Meshes {
    /// Unit-radius UV sphere.
    pub sphere: Mesh,
    /// Low-poly unit sphere for stars and sparkles.
    pub sphere_low: Mesh,
    /// Unit cube.
    pub cuboid: Mesh,
    /// Unit-radius, unit-height cylinder.
    pub cylinder: Mesh,
    /// Unit-radius, unit-height cone.
    pub cone: Mesh,
    /// Ring radius 1.0, tube 0.04.
    pub torus: Mesh,
    /// Unit plane facing +Y.
    pub plane: Mesh,
}

impl Meshes {
    pub fn upload(device: &wgpu::Device) -> Self {
        Self {
            sphere: Mesh::sphere(device, 1.0, 32, 24),
            sphere_low: Mesh::sphere(device, 1.0, 8, 6),
            cuboid: Mesh::cuboid(device, 1.0, 1.0, 1.0),
            cylinder: Mesh::cylinder(device, 1.0, 1.0, 1.0, 16),
            cone: Mesh::cone(device, 1.0, 1.0, 16),
            torus: Mesh::torus(device, 1.0, 0.04, 32, 10),
            plane: Mesh::plane(device, 1.0),
        }
    }

    pub fn of(&self, kind: MeshKind) -> &Mesh {
        match kind {
            MeshKind::Sphere => &self.sphere,
            MeshKind::SphereLow => &self.sphere_low,
            MeshKind::Cuboid => &self.cuboid,
            MeshKind::Cylinder => &self.cylinder,
            MeshKind::Cone => &self.cone,
            MeshKind::Torus => &self.torus,
            MeshKind::Plane => &self.plane,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Sphere,
    SphereLow,
    Cuboid,
    Cylinder,
    Cone,
    Torus,
    Plane,
}

impl MeshKind {
    pub const ALL: [MeshKind; 7] = [
        MeshKind::Sphere,
        MeshKind::SphereLow,
        MeshKind::Cuboid,
        MeshKind::Cylinder,
        MeshKind::Cone,
        MeshKind::Torus,
        MeshKind::Plane,
    ];
}

/// Instances collected for one frame, grouped by mesh.
#[derive(Default)]
pub struct Batch {
    groups: [Vec<InstanceData>; 7],
}

impl Batch {
    pub fn push(&mut self, kind: MeshKind, instance: InstanceData) {
        self.groups[kind as usize].push(instance);
    }

    pub fn group(&self, kind: MeshKind) -> &[InstanceData] {
        &self.groups[kind as usize]
    }

    pub fn clear(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }
}

/// Side effects a scene requests; executed by the app after the update pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    OpenLink(String),
    ResetView,
}

/// Everything a shell sees during its per-frame update.
pub struct UpdateCtx<'a> {
    pub t: f32,
    pub dt: f32,
    pub input: &'a InputState,
    /// World ray under the cursor, when the pointer is over the viewport.
    pub pointer_ray: Option<Ray>,
    pub actions: &'a mut Vec<AppAction>,
}

/// One full-viewport scene. The viewer owns exactly one mounted scene at a
/// time; switching sections unmounts the old scene and builds the next.
pub trait SectionScene {
    /// Two-tone section title halves.
    fn title(&self) -> (&'static str, &'static str);
    fn subtitle(&self) -> &'static str;
    fn camera_config(&self) -> OrbitConfig;
    fn lights(&self) -> SceneLights;
    /// Scene background color.
    fn background(&self) -> [f32; 3] {
        [0.01, 0.01, 0.02]
    }
    /// Advance state: timers, picking, selection.
    fn update(&mut self, ctx: &mut UpdateCtx);
    /// Emit this frame's geometry.
    fn collect(&self, batch: &mut Batch, lines: &mut Vec<LineVertex>, t: f32);
    /// Emit this frame's overlay.
    fn overlay(&self, tb: &mut OverlayTextBuilder, sw: f32, sh: f32);
    /// Cancel timers and stop updating. Called when the section is left.
    fn unmount(&mut self);
    /// Scenes with text fields capture typing (disables hotkeys).
    fn wants_text_input(&self) -> bool {
        false
    }
}

/// What the pointer did to a composer this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    None,
    Hovered(RecordId),
    Left,
    Clicked(RecordId),
}

/// Route the pointer into a composer: closest-hit hover tracking plus click
/// selection. Returns what happened so shells can add side effects (e.g.
/// social links).
pub fn route_pointer(
    composer: &mut Composer,
    ray: Option<&Ray>,
    clicked: bool,
) -> PointerOutcome {
    let hit = ray.and_then(|r| composer.pick(r));
    let mut outcome = PointerOutcome::None;
    match hit {
        Some(id) => {
            if composer.hovered() != Some(id) {
                composer.handle_hover(id);
                outcome = PointerOutcome::Hovered(id);
            }
            if clicked {
                composer.handle_select(id);
                outcome = PointerOutcome::Clicked(id);
            }
        }
        None => {
            if composer.hovered().is_some() {
                composer.handle_leave();
                outcome = PointerOutcome::Left;
            }
        }
    }
    outcome
}

/// Instance helper: uniform scale at a position.
pub fn instance_at(position: Vec3, scale: Vec3, color: [f32; 4]) -> InstanceData {
    let model = glam::Mat4::from_scale_rotation_translation(scale, glam::Quat::IDENTITY, position);
    InstanceData::new(model.to_cols_array_2d(), color)
}

/// Instance placed relative to a node transform: `offset` and `scale` are in
/// the node's local space, so props follow the node's bob, spin and boost.
pub fn sub_instance(
    node: &engine_core::Transform,
    offset: Vec3,
    scale: Vec3,
    color: [f32; 4],
) -> InstanceData {
    let position = node.position + node.rotation * (offset * node.scale);
    let model = glam::Mat4::from_scale_rotation_translation(
        scale * node.scale,
        node.rotation,
        position,
    );
    InstanceData::new(model.to_cols_array_2d(), color)
}

/// `sub_instance` with an extra local rotation (tilted rings, mounted
/// frames).
pub fn sub_instance_rotated(
    node: &engine_core::Transform,
    offset: Vec3,
    rotation: glam::Quat,
    scale: Vec3,
    color: [f32; 4],
) -> InstanceData {
    let position = node.position + node.rotation * (offset * node.scale);
    let model = glam::Mat4::from_scale_rotation_translation(
        scale * node.scale,
        node.rotation * rotation,
        position,
    );
    InstanceData::new(model.to_cols_array_2d(), color)
}

/// Map a content decor prop onto a mesh + instance relative to its node.
pub fn prop_instance(
    node: &engine_core::Transform,
    prop: &content::DecorProp,
) -> (MeshKind, InstanceData) {
    use content::PropShape;
    let color = prop.color.with_alpha(1.0);
    let (kind, scale) = match prop.shape {
        PropShape::Sphere { radius } => (MeshKind::Sphere, Vec3::splat(radius)),
        PropShape::Box { w, h, d } => (MeshKind::Cuboid, Vec3::new(w, h, d)),
        PropShape::Cylinder { radius, height } => {
            (MeshKind::Cylinder, Vec3::new(radius, height, radius))
        }
        PropShape::Cone { radius, height } => (MeshKind::Cone, Vec3::new(radius, height, radius)),
        PropShape::Torus { radius, tube: _ } => (MeshKind::Torus, Vec3::splat(radius)),
    };
    (kind, sub_instance(node, prop.offset, scale, color))
}

/// Mount-time sparkle cloud around a node: static offsets, spun as a group.
pub struct SparkleField {
    pub offsets: Vec<Vec3>,
    pub color: [f32; 4],
    pub speed: f32,
}

impl SparkleField {
    pub fn generate(spec: &content::Sparkle, rng: &mut impl rand::Rng) -> Self {
        let offsets = (0..spec.count)
            .map(|_| {
                Vec3::new(
                    rng.gen::<f32>() - 0.5,
                    rng.gen::<f32>() - 0.5,
                    rng.gen::<f32>() - 0.5,
                ) * spec.scale
            })
            .collect();
        Self {
            offsets,
            color: spec.color.with_alpha(0.8),
            speed: spec.speed,
        }
    }

    /// Emit the cloud around `center` for this frame.
    pub fn collect(&self, batch: &mut Batch, center: Vec3, t: f32) {
        let spin = glam::Quat::from_rotation_y(t * self.speed);
        for offset in &self.offsets {
            batch.push(
                MeshKind::SphereLow,
                instance_at(center + spin * *offset, Vec3::splat(0.03), self.color).unlit(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use scene::{BasePlacement, Bob, Motion, NodeSpec, SpinSet};

    fn one_node_composer() -> Composer {
        let mut composer = Composer::new();
        composer.spawn_node(NodeSpec {
            id: RecordId("n"),
            base: BasePlacement::at(Vec3::new(0.0, 0.0, -5.0)),
            motion: Motion::uniform(Bob::NONE, SpinSet::NONE),
            boost: 1.2,
            boost_selected: None,
            pick_radius: 1.0,
        });
        composer.update(0.0, 1.0 / 60.0);
        composer
    }

    fn hit_ray() -> Ray {
        Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    #[test]
    fn pointer_over_then_away_hovers_and_leaves() {
        let mut composer = one_node_composer();
        assert_eq!(
            route_pointer(&mut composer, Some(&hit_ray()), false),
            PointerOutcome::Hovered(RecordId("n"))
        );
        let miss = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 1.0, 0.0),
        };
        assert_eq!(
            route_pointer(&mut composer, Some(&miss), false),
            PointerOutcome::Left
        );
        assert_eq!(composer.hovered(), None);
    }

    #[test]
    fn click_on_node_selects_it() {
        let mut composer = one_node_composer();
        assert_eq!(
            route_pointer(&mut composer, Some(&hit_ray()), true),
            PointerOutcome::Clicked(RecordId("n"))
        );
        assert!(composer.is_active(RecordId("n")));
        // Second click toggles it back off.
        route_pointer(&mut composer, Some(&hit_ray()), true);
        assert_eq!(composer.selected(), None);
    }

    #[test]
    fn click_on_empty_space_keeps_selection() {
        let mut composer = one_node_composer();
        route_pointer(&mut composer, Some(&hit_ray()), true);
        let miss = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 1.0, 0.0),
        };
        route_pointer(&mut composer, Some(&miss), true);
        assert!(composer.is_active(RecordId("n")));
    }

    #[test]
    fn section_order_is_stable() {
        assert_eq!(Section::Hero.next(), Section::Skills);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::Hero.previous(), Section::Hero);
        assert_eq!(Section::Contact.previous(), Section::Certificates);
    }
}
