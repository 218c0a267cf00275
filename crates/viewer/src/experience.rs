//! Experience Journey: timeline nodes floating beside a DNA helix, with
//! environment props, sparkles, and the animated "Journey Stats" counters.

use content::{DetailLevel, PanelSource, RecordId, EXPERIENCES, JOURNEY_STATS};
use glam::Vec3;
use rand::Rng;
use renderer::{LineVertex, OrbitConfig, OverlayTextBuilder, SceneLights};
use scene::{
    BasePlacement, Bob, Composer, Helix, Interaction, Motion, NodeSpec, SpinSet, StatBoard,
};

use crate::overlay;
use crate::shell::{
    prop_instance, route_pointer, sub_instance, sub_instance_rotated, Batch, MeshKind,
    SectionScene, SparkleField, UpdateCtx,
};

pub struct ExperienceScene {
    composer: Composer,
    helix: Helix,
    stats: StatBoard,
    sparkles: Vec<(RecordId, SparkleField)>,
}

impl ExperienceScene {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut composer = Composer::new();
        let mut sparkles = Vec::new();

        for record in EXPERIENCES.iter() {
            composer.spawn_node(NodeSpec {
                id: record.id,
                base: BasePlacement::at(record.position),
                motion: Motion::uniform(
                    Bob {
                        amp: Vec3::new(0.3, 0.0, 0.3),
                        freq: Vec3::new(0.8, 0.0, 0.6),
                        // Phase from the node's own height desynchronizes the
                        // timeline without shared state; z runs on cosine.
                        phase: Vec3::new(
                            record.position.y,
                            0.0,
                            record.position.y + std::f32::consts::FRAC_PI_2,
                        ),
                    },
                    SpinSet::NONE,
                ),
                boost: 1.4,
                boost_selected: None,
                pick_radius: 1.1,
            });
            sparkles.push((
                record.id,
                SparkleField::generate(&record.environment.sparkle(), rng),
            ));
        }

        let stats = StatBoard::mount("Journey Stats", &JOURNEY_STATS, composer.timers_mut());

        Self {
            composer,
            helix: Helix::generate(80, 1.5, 12.0, 1.5, 15),
            stats,
            sparkles,
        }
    }
}

impl SectionScene for ExperienceScene {
    fn title(&self) -> (&'static str, &'static str) {
        ("Experience", "Journey")
    }

    fn subtitle(&self) -> &'static str {
        "Navigate through my educational and professional DNA"
    }

    fn camera_config(&self) -> OrbitConfig {
        OrbitConfig {
            distance: 12.0,
            min_distance: 8.0,
            max_distance: 20.0,
            min_pitch: -std::f32::consts::FRAC_PI_3,
            max_pitch: std::f32::consts::FRAC_PI_3,
            ..Default::default()
        }
    }

    fn lights(&self) -> SceneLights {
        SceneLights::new(0.3)
            .with_light(Vec3::new(10.0, 10.0, 10.0), [0.83, 0.69, 0.22], 1.2)
            .with_light(Vec3::new(-10.0, -10.0, -10.0), [0.0, 0.83, 1.0], 0.8)
            .with_light(Vec3::new(0.0, 0.0, 15.0), [0.98, 0.98, 0.98], 1.0)
            .with_light(Vec3::new(0.0, 12.0, 0.0), [0.0, 1.0, 0.53], 0.6)
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

    fn collect(&self, batch: &mut Batch, lines: &mut Vec<LineVertex>, t: f32) {
        // DNA helix strands + bridges, turning as one group.
        let turn = Helix::rotation(t);
        let strand = |points: &[Vec3], color: [f32; 4], lines: &mut Vec<LineVertex>| {
            for pair in points.windows(2) {
                lines.push(LineVertex::new((turn * pair[0]).to_array(), color));
                lines.push(LineVertex::new((turn * pair[1]).to_array(), color));
            }
        };
        strand(&self.helix.strand_a, [0.83, 0.69, 0.22, 0.8], lines);
        strand(&self.helix.strand_b, [0.0, 0.83, 1.0, 0.8], lines);
        for (a, b) in &self.helix.bridges {
            lines.push(LineVertex::new((turn * *a).to_array(), [0.0, 1.0, 0.53, 0.5]));
            lines.push(LineVertex::new((turn * *b).to_array(), [0.0, 1.0, 0.53, 0.5]));
        }

        for record in EXPERIENCES.iter() {
            let Some(tr) = self.composer.node_transform_of(record.id) else {
                continue;
            };
            let focused = self.composer.interaction(record.id) != Interaction::Idle;
            let color = record.color.with_alpha(1.0);

            // Main node sphere.
            batch.push(
                MeshKind::Sphere,
                sub_instance(&tr, Vec3::ZERO, Vec3::splat(0.6), color)
                    .with_emissive(if focused { 0.5 } else { 0.2 }),
            );
            // Orbital ring, tilted by the record's timeline angle.
            batch.push(
                MeshKind::Torus,
                sub_instance_rotated(
                    &tr,
                    Vec3::ZERO,
                    glam::Quat::from_rotation_z(record.y_rotation),
                    Vec3::splat(1.0),
                    record.color.with_alpha(0.8),
                )
                .with_emissive(0.4),
            );
            // Environment props.
            for prop in record.environment.props() {
                let (kind, instance) = prop_instance(&tr, prop);
                batch.push(kind, instance);
            }
            // Sparkle cloud.
            if let Some((_, field)) = self.sparkles.iter().find(|(id, _)| *id == record.id) {
                field.collect(batch, tr.position, t);
            }
        }
    }

    fn overlay(&self, tb: &mut OverlayTextBuilder, sw: f32, sh: f32) {
        let (first, second) = self.title();
        overlay::section_header(tb, sw, first, second, self.subtitle());

        overlay::info_panel(
            tb,
            24.0,
            sh * 0.3,
            250.0,
            "Navigation",
            &[
                ("Click nodes for details", overlay::CYAN),
                ("Hover for quick info", overlay::GREEN),
                ("Drag to rotate timeline", overlay::GOLD),
                ("DNA strands show growth", overlay::PINK),
            ],
        );

        // Timeline legend: every stage with its period.
        let mut rows: Vec<([f32; 3], String)> = Vec::new();
        for record in EXPERIENCES.iter() {
            rows.push((record.color.0, format!("{}  {}", record.period, record.title)));
        }
        let row_refs: Vec<([f32; 3], &str)> =
            rows.iter().map(|(c, s)| (*c, s.as_str())).collect();
        overlay::legend_panel(tb, sw - 300.0 - 24.0, sh * 0.62, 300.0, "Timeline Stages", &row_refs);

        let stat_rows: Vec<(&str, u32)> = self.stats.rows().collect();
        overlay::stat_panel(tb, 24.0, sh * 0.62, self.stats.title, &stat_rows);

        if let Some((id, selected)) = self.composer.focus() {
            if let Some(record) = EXPERIENCES.iter().find(|r| r.id == id) {
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
            &[("Auto Rotate", overlay::GOLD), ("Reset View", overlay::CYAN)],
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
    use scene::{RAMP_DURATION_SECS, RAMP_STEPS};

    fn scene() -> ExperienceScene {
        ExperienceScene::new(&mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn counters_reach_targets_after_the_ramp() {
        let mut scene = scene();
        let dt = RAMP_DURATION_SECS / RAMP_STEPS as f32;
        for _ in 0..(RAMP_STEPS + 5) {
            for event in scene.composer.tick_timers(dt) {
                scene.stats.on_timer(&event);
            }
        }
        for ((_, shown), (_, target)) in scene.stats.rows().zip(JOURNEY_STATS.iter()) {
            assert_eq!(shown, *target);
        }
    }

    #[test]
    fn counters_never_overshoot_mid_ramp() {
        let mut scene = scene();
        let dt = 1.0 / 90.0;
        let mut last: Vec<u32> = scene.stats.rows().map(|(_, v)| v).collect();
        for _ in 0..300 {
            for event in scene.composer.tick_timers(dt) {
                scene.stats.on_timer(&event);
            }
            let now: Vec<u32> = scene.stats.rows().map(|(_, v)| v).collect();
            for (i, value) in now.iter().enumerate() {
                assert!(*value >= last[i]);
                assert!(*value <= JOURNEY_STATS[i].1);
            }
            last = now;
        }
    }

    #[test]
    fn unmount_stops_the_stat_ramp() {
        let mut scene = scene();
        scene.unmount();
        assert!(scene.composer.tick_timers(10.0).is_empty());
    }

    #[test]
    fn every_stage_emits_node_and_props() {
        let mut scene = scene();
        scene.composer.update(0.5, 1.0 / 60.0);
        let mut batch = Batch::default();
        let mut lines = Vec::new();
        scene.collect(&mut batch, &mut lines, 0.5);
        let prop_spheres = EXPERIENCES
            .iter()
            .flat_map(|r| r.environment.props())
            .filter(|p| matches!(p.shape, content::PropShape::Sphere { .. }))
            .count();
        assert_eq!(
            batch.group(MeshKind::Sphere).len(),
            EXPERIENCES.len() + prop_spheres
        );
        assert_eq!(batch.group(MeshKind::Torus).len(), EXPERIENCES.len());
        assert!(!lines.is_empty());
    }
}
