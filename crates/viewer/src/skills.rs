//! Skills Constellation: four system stars with orbiting skill planets,
//! joined by slowly turning connection lines over a star field.

use content::{skills::planet_radius, DetailLevel, PanelContent, PanelSource, RecordId, SKILL_CONNECTIONS, SKILL_SYSTEMS};
use glam::Vec3;
use rand::Rng;
use renderer::{LineVertex, OrbitConfig, OverlayTextBuilder, SceneLights};
use scene::{BasePlacement, Bob, Composer, Interaction, Motion, NodeSpec, SpinMode, SpinSet, Starfield};

use crate::overlay;
use crate::shell::{route_pointer, sub_instance, Batch, MeshKind, SectionScene, UpdateCtx};

pub struct SkillsScene {
    composer: Composer,
    stars: Starfield,
}

impl SkillsScene {
    pub fn new(star_count: u32, rng: &mut impl Rng) -> Self {
        let mut composer = Composer::new();

        for system in SKILL_SYSTEMS.iter() {
            composer.spawn_node(NodeSpec {
                id: system.id(),
                base: BasePlacement::at(system.position),
                motion: Motion::uniform(
                    Bob::NONE,
                    SpinSet {
                        y: SpinMode::Turn { rate: 0.3 },
                        x: SpinMode::Sway { rate: 0.2, amp: 0.1 },
                    },
                ),
                boost: 1.05,
                boost_selected: None,
                pick_radius: 1.3,
            });
            for skill in system.skills {
                composer.spawn_node(NodeSpec {
                    id: skill.id(),
                    base: BasePlacement::at(system.position + skill.offset),
                    motion: Motion::uniform(
                        Bob::NONE,
                        SpinSet {
                            y: SpinMode::Turn { rate: 0.5 },
                            x: SpinMode::Sway { rate: 0.3, amp: 0.1 },
                        },
                    ),
                    boost: 1.2,
                    boost_selected: None,
                    pick_radius: planet_radius(skill.level) + 0.15,
                });
            }
        }

        Self {
            composer,
            stars: Starfield::generate(star_count as usize, 50.0, rng),
        }
    }

    fn focus_panel(&self) -> Option<(PanelContent, DetailLevel)> {
        let (id, selected) = self.composer.focus()?;
        let detail = if selected {
            DetailLevel::Selected
        } else {
            DetailLevel::Hover
        };
        for system in SKILL_SYSTEMS.iter() {
            if system.id() == id {
                return Some((system.panel(detail), detail));
            }
            for skill in system.skills {
                if skill.id() == id {
                    return Some((skill.panel(detail), detail));
                }
            }
        }
        None
    }

    fn emissive_for(&self, id: RecordId, low: f32, high: f32) -> f32 {
        match self.composer.interaction(id) {
            Interaction::Idle => low,
            Interaction::Hovered | Interaction::Selected => high,
        }
    }
}

impl SectionScene for SkillsScene {
    fn title(&self) -> (&'static str, &'static str) {
        ("Skills", "Constellation")
    }

    fn subtitle(&self) -> &'static str {
        "Explore my technical universe - hover over planets to discover skills"
    }

    fn camera_config(&self) -> OrbitConfig {
        OrbitConfig {
            distance: 20.0,
            min_distance: 10.0,
            max_distance: 50.0,
            auto_rotate: true,
            auto_rotate_speed: 0.03,
            enable_pan: true,
            ..Default::default()
        }
    }

    fn lights(&self) -> SceneLights {
        SceneLights::new(0.2)
            .with_light(Vec3::new(10.0, 10.0, 10.0), [0.83, 0.69, 0.22], 1.0)
            .with_light(Vec3::new(-10.0, -10.0, -10.0), [0.0, 0.83, 1.0], 0.5)
            .with_light(Vec3::new(0.0, 0.0, 15.0), [0.98, 0.98, 0.98], 0.8)
    }

    fn update(&mut self, ctx: &mut UpdateCtx) {
        route_pointer(
            &mut self.composer,
            ctx.pointer_ray.as_ref(),
            ctx.input.primary_clicked(),
        );
        self.composer.tick_timers(ctx.dt);
        self.composer.update(ctx.t, ctx.dt);
    }

    fn collect(&self, batch: &mut Batch, lines: &mut Vec<LineVertex>, t: f32) {
        // Background stars, drifting as one group.
        let drift = Starfield::drift_rotation(t);
        for p in &self.stars.positions {
            batch.push(
                MeshKind::SphereLow,
                crate::shell::instance_at(drift * *p, Vec3::splat(0.05), [0.98, 0.98, 0.98, 0.6])
                    .unlit(),
            );
        }

        // Connection lines between systems, turning slowly.
        let turn = glam::Quat::from_rotation_y(t * 0.05);
        for (a, b) in SKILL_CONNECTIONS {
            lines.push(LineVertex::new(
                (turn * SKILL_SYSTEMS[a].position).to_array(),
                [0.83, 0.69, 0.22, 0.3],
            ));
            lines.push(LineVertex::new(
                (turn * SKILL_SYSTEMS[b].position).to_array(),
                [0.83, 0.69, 0.22, 0.3],
            ));
        }

        for system in SKILL_SYSTEMS.iter() {
            if let Some(tr) = self.composer.node_transform_of(system.id()) {
                let emissive = self.emissive_for(system.id(), 0.2, 0.4);
                let color = system.color.with_alpha(1.0);
                batch.push(
                    MeshKind::Sphere,
                    sub_instance(&tr, Vec3::ZERO, Vec3::splat(0.8), color)
                        .with_emissive(emissive),
                );
                batch.push(
                    MeshKind::Torus,
                    sub_instance(&tr, Vec3::ZERO, Vec3::splat(1.2), system.color.with_alpha(0.7))
                        .with_emissive(0.3),
                );
            }
            for skill in system.skills {
                if let Some(tr) = self.composer.node_transform_of(skill.id()) {
                    let radius = planet_radius(skill.level);
                    let emissive = self.emissive_for(skill.id(), 0.1, 0.3);
                    batch.push(
                        MeshKind::Sphere,
                        sub_instance(&tr, Vec3::ZERO, Vec3::splat(radius), skill.color.with_alpha(1.0))
                            .with_emissive(emissive),
                    );
                    batch.push(
                        MeshKind::Torus,
                        sub_instance(
                            &tr,
                            Vec3::ZERO,
                            Vec3::splat(radius + 0.1),
                            skill.color.with_alpha(0.6),
                        )
                        .with_emissive(0.2),
                    );
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
            sh * 0.35,
            240.0,
            "Navigation",
            &[
                ("Drag to rotate view", overlay::CYAN),
                ("Hover planets for details", overlay::GREEN),
                ("Stars are skill categories", overlay::GOLD),
                ("Planet size shows proficiency", overlay::PINK),
            ],
        );

        let legend_rows: Vec<([f32; 3], &str)> = SKILL_SYSTEMS
            .iter()
            .map(|s| (s.color.0, s.name))
            .collect();
        overlay::legend_panel(tb, sw - 240.0 - 24.0, sh - 180.0, 240.0, "Skill Systems", &legend_rows);

        if let Some((panel, detail)) = self.focus_panel() {
            overlay::node_panel(tb, sw, sh, &panel, detail);
        }

        overlay::cta_row(
            tb,
            sw,
            sh,
            &[("Reset View", overlay::GOLD), ("Focus Mode", overlay::CYAN)],
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

    fn scene() -> SkillsScene {
        SkillsScene::new(100, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn spawns_one_node_per_star_and_planet() {
        let scene = scene();
        let nodes = scene.composer.world().len();
        let expected: usize = SKILL_SYSTEMS.iter().map(|s| 1 + s.skills.len()).sum();
        assert_eq!(nodes as usize, expected);
    }

    #[test]
    fn hovering_a_planet_surfaces_its_meter_panel() {
        let mut scene = scene();
        let id = SKILL_SYSTEMS[0].skills[0].id();
        scene.composer.handle_hover(id);
        let (panel, detail) = scene.focus_panel().unwrap();
        assert_eq!(detail, DetailLevel::Hover);
        assert_eq!(panel.meter, Some(SKILL_SYSTEMS[0].skills[0].level));
    }

    #[test]
    fn collect_emits_geometry_for_every_node() {
        let mut scene = scene();
        scene.composer.update(1.0, 1.0 / 60.0);
        let mut batch = Batch::default();
        let mut lines = Vec::new();
        scene.collect(&mut batch, &mut lines, 1.0);
        // 4 connections, two vertices each.
        assert_eq!(lines.len(), 8);
        let spheres = batch.group(MeshKind::Sphere).len();
        let expected: usize = SKILL_SYSTEMS.iter().map(|s| 1 + s.skills.len()).sum();
        assert_eq!(spheres, expected);
    }
}
