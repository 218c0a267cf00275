//! Certificates Gallery: framed certificates in a museum setting with
//! pillars, a reflective floor, and the "Certification Gallery" counters.

use content::{DetailLevel, PanelSource, RecordId, CERTIFICATES, GALLERY_STATS};
use glam::Vec3;
use rand::Rng;
use renderer::{LineVertex, OrbitConfig, OverlayTextBuilder, SceneLights};
use scene::{
    BasePlacement, Bob, Composer, Interaction, Motion, NodeSpec, SpinMode, SpinSet, StatBoard,
};

use crate::overlay;
use crate::shell::{
    instance_at, route_pointer, sub_instance, sub_instance_rotated, Batch, MeshKind,
    SectionScene, SparkleField, UpdateCtx,
};

/// Museum pillar bases, mirrored around the gallery.
const PILLAR_POSITIONS: [Vec3; 4] = [
    Vec3::new(-10.0, 0.0, -5.0),
    Vec3::new(10.0, 0.0, -5.0),
    Vec3::new(-10.0, 0.0, 5.0),
    Vec3::new(10.0, 0.0, 5.0),
];

pub struct CertificatesScene {
    composer: Composer,
    stats: StatBoard,
    sparkles: Vec<(RecordId, SparkleField)>,
}

impl CertificatesScene {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut composer = Composer::new();
        let mut sparkles = Vec::new();

        for record in CERTIFICATES.iter() {
            composer.spawn_node(NodeSpec {
                id: record.id,
                base: BasePlacement::at(record.position)
                    .with_rotation(glam::Quat::from_rotation_y(record.y_rotation)),
                motion: Motion {
                    bob: Bob {
                        amp: Vec3::new(0.0, 0.1, 0.0),
                        freq: Vec3::new(0.0, 0.6, 0.0),
                        phase: Vec3::new(0.0, record.position.x, 0.0),
                    },
                    idle: SpinSet::NONE,
                    hovered: SpinSet::NONE,
                    selected: SpinSet {
                        y: SpinMode::Sway { rate: 0.5, amp: 0.1 },
                        x: SpinMode::None,
                    },
                },
                boost: 1.1,
                boost_selected: Some(1.3),
                pick_radius: 1.7,
            });
            sparkles.push((
                record.id,
                SparkleField::generate(
                    &content::Sparkle {
                        color: record.color,
                        count: 30,
                        scale: 4.0,
                        speed: 0.4,
                    },
                    rng,
                ),
            ));
        }

        let stats = StatBoard::mount(
            "Certification Gallery",
            &GALLERY_STATS,
            composer.timers_mut(),
        );

        Self {
            composer,
            stats,
            sparkles,
        }
    }
}

impl SectionScene for CertificatesScene {
    fn title(&self) -> (&'static str, &'static str) {
        ("Certificates", "Gallery")
    }

    fn subtitle(&self) -> &'static str {
        "A premium museum of academic achievements"
    }

    fn camera_config(&self) -> OrbitConfig {
        OrbitConfig {
            distance: 8.2,
            pitch: 0.25,
            min_distance: 5.0,
            max_distance: 15.0,
            min_pitch: -std::f32::consts::FRAC_PI_3,
            max_pitch: std::f32::consts::FRAC_PI_3,
            enable_pan: true,
            ..Default::default()
        }
    }

    fn lights(&self) -> SceneLights {
        SceneLights::new(0.3)
            .with_light(Vec3::new(0.0, 10.0, 5.0), [1.0, 0.84, 0.0], 1.0)
            .with_light(Vec3::new(5.0, 5.0, 5.0), [1.0, 1.0, 1.0], 0.8)
            .with_light(Vec3::new(-5.0, 5.0, 5.0), [1.0, 1.0, 1.0], 0.8)
            .with_light(Vec3::new(0.0, 8.0, 0.0), [1.0, 0.84, 0.0], 1.5)
    }

    fn background(&self) -> [f32; 3] {
        [0.02, 0.015, 0.01]
    }

    fn update(&mut self, ctx: &mut UpdateCtx) {
        route_pointer(
            &mut self.composer,
            ctx.pointer_ray.as_ref(),
            ctx.input.primary_clicked(),
        );
        for event in self.composer.tick_timers(ctx.dt) {
            self.stats.on_timer(&event);
        }
        self.composer.update(ctx.t, ctx.dt);
    }

    fn collect(&self, batch: &mut Batch, _lines: &mut Vec<LineVertex>, t: f32) {
        // Reflective floor with a faint pulse.
        let floor_alpha = 0.1 + (t * 0.5).sin() * 0.05;
        batch.push(
            MeshKind::Plane,
            instance_at(
                Vec3::new(0.0, -2.0, 0.0),
                Vec3::new(30.0, 1.0, 30.0),
                [0.1, 0.1, 0.1, floor_alpha],
            ),
        );

        // Pillars: shaft, capital, base.
        for position in PILLAR_POSITIONS {
            batch.push(
                MeshKind::Cylinder,
                instance_at(position, Vec3::new(0.35, 6.0, 0.35), [0.55, 0.27, 0.07, 1.0]),
            );
            batch.push(
                MeshKind::Cylinder,
                instance_at(
                    position + Vec3::new(0.0, 3.2, 0.0),
                    Vec3::new(0.5, 0.4, 0.5),
                    [0.8, 0.52, 0.25, 1.0],
                ),
            );
            batch.push(
                MeshKind::Cylinder,
                instance_at(
                    position + Vec3::new(0.0, -3.2, 0.0),
                    Vec3::new(0.5, 0.4, 0.5),
                    [0.8, 0.52, 0.25, 1.0],
                ),
            );
        }

        for record in CERTIFICATES.iter() {
            let Some(tr) = self.composer.node_transform_of(record.id) else {
                continue;
            };
            let focused = self.composer.interaction(record.id) != Interaction::Idle;

            // Frame, paper, accent border, content area: thin stacked slabs.
            batch.push(
                MeshKind::Cuboid,
                sub_instance(&tr, Vec3::ZERO, Vec3::new(3.0, 2.2, 0.1), [0.55, 0.27, 0.07, 1.0]),
            );
            batch.push(
                MeshKind::Cuboid,
                sub_instance(
                    &tr,
                    Vec3::new(0.0, 0.0, 0.06),
                    Vec3::new(2.8, 2.0, 0.01),
                    [1.0, 1.0, 0.97, 1.0],
                ),
            );
            batch.push(
                MeshKind::Cuboid,
                sub_instance(
                    &tr,
                    Vec3::new(0.0, 0.0, 0.07),
                    Vec3::new(2.6, 1.8, 0.01),
                    record.color.with_alpha(0.8),
                )
                .with_emissive(0.2),
            );
            batch.push(
                MeshKind::Cuboid,
                sub_instance(
                    &tr,
                    Vec3::new(0.0, 0.0, 0.08),
                    Vec3::new(2.4, 1.6, 0.01),
                    [1.0, 1.0, 1.0, 1.0],
                ),
            );
            // Holographic seal and grade badge.
            batch.push(
                MeshKind::Cylinder,
                sub_instance_rotated(
                    &tr,
                    Vec3::new(0.8, -0.6, 0.09),
                    glam::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
                    Vec3::new(0.15, 0.02, 0.15),
                    record.color.with_alpha(1.0),
                )
                .with_emissive(0.5),
            );
            batch.push(
                MeshKind::Sphere,
                sub_instance(
                    &tr,
                    Vec3::new(-0.8, 0.7, 0.09),
                    Vec3::splat(0.2),
                    [1.0, 0.84, 0.0, 1.0],
                )
                .with_emissive(0.3),
            );

            if focused {
                if let Some((_, field)) = self.sparkles.iter().find(|(id, _)| *id == record.id) {
                    field.collect(batch, tr.position, t);
                }
            }
        }
    }

    fn overlay(&self, tb: &mut OverlayTextBuilder, sw: f32, sh: f32) {
        let (first, second) = self.title();
        overlay::section_header(tb, sw, first, second, self.subtitle());

        overlay::info_panel(
            tb,
            24.0,
            sh * 0.32,
            250.0,
            "Museum Guide",
            &[
                ("Click certificates for details", overlay::CYAN),
                ("Hover for quick info", overlay::GREEN),
                ("Walk around the gallery", overlay::GOLD),
                ("Elite grades have special effects", overlay::PINK),
            ],
        );

        let legend_rows: Vec<([f32; 3], &str)> = CERTIFICATES
            .iter()
            .map(|c| (c.category.swatch().0, c.category.label()))
            .collect();
        overlay::legend_panel(tb, sw - 260.0 - 24.0, sh * 0.55, 260.0, "Categories", &legend_rows);

        let stat_rows: Vec<(&str, u32)> = self.stats.rows().collect();
        overlay::stat_panel(tb, 24.0, sh * 0.62, self.stats.title, &stat_rows);

        if let Some((id, selected)) = self.composer.focus() {
            if let Some(record) = CERTIFICATES.iter().find(|r| r.id == id) {
                let detail = if selected {
                    DetailLevel::Selected
                } else {
                    DetailLevel::Hover
                };
                overlay::node_panel(tb, sw, sh, &record.panel(detail), detail);
            }
        }

        overlay::cta_row(
            tb,
            sw,
            sh,
            &[
                ("View All Certificates", overlay::GOLD),
                ("Verify Credentials", overlay::CYAN),
            ],
        );
    }

    fn unmount(&mut self) {
        self.composer.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> CertificatesScene {
        CertificatesScene::new(&mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn hover_sparkles_appear_only_when_focused() {
        let mut scene = scene();
        scene.composer.update(0.5, 1.0 / 60.0);

        let mut batch = Batch::default();
        let mut lines = Vec::new();
        scene.collect(&mut batch, &mut lines, 0.5);
        let idle_count = batch.group(MeshKind::SphereLow).len();
        assert_eq!(idle_count, 0);

        scene.composer.handle_hover(CERTIFICATES[0].id);
        scene.composer.update(0.6, 1.0 / 60.0);
        let mut batch = Batch::default();
        scene.collect(&mut batch, &mut lines, 0.6);
        assert_eq!(batch.group(MeshKind::SphereLow).len(), 30);
    }

    #[test]
    fn frames_and_pillars_are_emitted() {
        let mut scene = scene();
        scene.composer.update(0.0, 1.0 / 60.0);
        let mut batch = Batch::default();
        let mut lines = Vec::new();
        scene.collect(&mut batch, &mut lines, 0.0);
        // 4 slabs per certificate.
        assert_eq!(batch.group(MeshKind::Cuboid).len(), CERTIFICATES.len() * 4);
        // 3 cylinders per pillar + 1 seal per certificate.
        assert_eq!(
            batch.group(MeshKind::Cylinder).len(),
            PILLAR_POSITIONS.len() * 3 + CERTIFICATES.len()
        );
    }

    #[test]
    fn gallery_counters_stop_after_unmount() {
        let mut scene = scene();
        scene.unmount();
        assert!(scene.composer.tick_timers(5.0).is_empty());
        let rows: Vec<_> = scene.stats.rows().collect();
        assert!(rows.iter().all(|(_, v)| *v == 0));
    }
}
