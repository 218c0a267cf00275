//! Projects Showcase: three holograms over a slowly turning grid floor.
//! Screenshots auto-cycle while a hologram has focus; digits 1-3 mirror the
//! carousel dots.

use std::collections::HashMap;

use content::{
    projects::SCREENSHOT_CYCLE_SECS, DetailLevel, PanelSource, RecordId, PROJECTS,
};
use engine_core::{TimerEvent, TimerScope, TimerToken};
use glam::Vec3;
use rand::Rng;
use renderer::{LineVertex, OrbitConfig, OverlayTextBuilder, SceneLights};
use scene::{
    grid_lines, ring_points, BasePlacement, Bob, Composer, Interaction, LineSeg, Motion,
    NodeSpec, SpinMode, SpinSet,
};

use crate::overlay;
use crate::shell::{
    prop_instance, route_pointer, sub_instance, Batch, MeshKind, SectionScene, SparkleField,
    UpdateCtx,
};

/// Advances screenshot indices on per-hologram timers. A hologram cycles
/// exactly while it is hovered or selected; its interval token is cancelled
/// the moment neither holds, so a selected hologram and a hovered one cycle
/// independently.
#[derive(Default)]
pub struct ScreenshotCycler {
    tokens: HashMap<RecordId, TimerToken>,
    indices: HashMap<RecordId, u32>,
}

impl ScreenshotCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current focus flags per hologram, in registry order.
    pub fn focus_flags(composer: &Composer) -> Vec<(RecordId, bool)> {
        PROJECTS
            .iter()
            .map(|r| {
                (
                    r.id,
                    composer.is_active(r.id) || composer.is_hovered(r.id),
                )
            })
            .collect()
    }

    /// Reconcile cycle timers with which holograms currently have focus.
    pub fn sync(&mut self, flags: &[(RecordId, bool)], timers: &mut TimerScope) {
        for &(id, wants_cycle) in flags {
            let has_cycle = self.tokens.contains_key(&id);
            if wants_cycle && !has_cycle {
                match timers.interval(SCREENSHOT_CYCLE_SECS) {
                    Ok(token) => {
                        self.tokens.insert(id, token);
                    }
                    Err(e) => log::error!("screenshot cycle timer: {e}"),
                }
            } else if !wants_cycle && has_cycle {
                if let Some(token) = self.tokens.remove(&id) {
                    timers.cancel(token);
                }
            }
        }
    }

    /// Step the matching project's screenshot on a timer firing.
    pub fn on_timer(&mut self, event: &TimerEvent) {
        let Some((id, _)) = self.tokens.iter().find(|(_, t)| **t == event.token) else {
            return;
        };
        let id = *id;
        let Some(record) = PROJECTS.iter().find(|p| p.id == id) else {
            return;
        };
        let index = self.indices.entry(id).or_insert(0);
        *index = (*index + event.fires) % record.screenshots;
    }

    pub fn index_of(&self, id: RecordId) -> u32 {
        self.indices.get(&id).copied().unwrap_or(0)
    }

    pub fn is_cycling(&self) -> bool {
        !self.tokens.is_empty()
    }
}

pub struct ProjectsScene {
    composer: Composer,
    cycler: ScreenshotCycler,
    grid: Vec<LineSeg>,
    sparkles: Vec<(RecordId, SparkleField)>,
}

impl ProjectsScene {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut composer = Composer::new();
        let mut sparkles = Vec::new();

        for record in PROJECTS.iter() {
            composer.spawn_node(NodeSpec {
                id: record.id,
                base: BasePlacement::at(record.position),
                motion: Motion {
                    bob: Bob {
                        amp: Vec3::new(0.0, 0.2, 0.0),
                        freq: Vec3::new(0.0, 0.8, 0.0),
                        phase: Vec3::new(0.0, record.position.x, 0.0),
                    },
                    idle: SpinSet {
                        y: SpinMode::Turn { rate: 0.1 },
                        x: SpinMode::None,
                    },
                    hovered: SpinSet {
                        y: SpinMode::Sway { rate: 0.5, amp: 0.2 },
                        x: SpinMode::None,
                    },
                    selected: SpinSet {
                        y: SpinMode::Turn { rate: 0.3 },
                        x: SpinMode::None,
                    },
                },
                boost: 1.2,
                boost_selected: Some(1.5),
                pick_radius: 1.9,
            });
            sparkles.push((
                record.id,
                SparkleField::generate(
                    &content::Sparkle {
                        color: record.color,
                        count: 50,
                        scale: 4.0,
                        speed: 0.8,
                    },
                    rng,
                ),
            ));
        }

        Self {
            composer,
            cycler: ScreenshotCycler::new(),
            grid: grid_lines(40.0, 20, -4.0, [0.0, 0.83, 1.0, 0.1]),
            sparkles,
        }
    }
}

impl SectionScene for ProjectsScene {
    fn title(&self) -> (&'static str, &'static str) {
        ("Projects", "Showcase")
    }

    fn subtitle(&self) -> &'static str {
        "Interactive holographic exhibition of my work"
    }

    fn camera_config(&self) -> OrbitConfig {
        OrbitConfig {
            distance: 15.0,
            min_distance: 10.0,
            max_distance: 25.0,
            enable_pan: true,
            ..Default::default()
        }
    }

    fn lights(&self) -> SceneLights {
        SceneLights::new(0.4)
            .with_light(Vec3::new(10.0, 10.0, 10.0), [0.83, 0.69, 0.22], 1.5)
            .with_light(Vec3::new(-10.0, -10.0, -10.0), [0.0, 0.83, 1.0], 1.0)
            .with_light(Vec3::new(0.0, 0.0, 15.0), [0.98, 0.98, 0.98], 1.2)
            .with_light(Vec3::new(0.0, 15.0, 0.0), [0.0, 1.0, 0.53], 0.8)
    }

    fn update(&mut self, ctx: &mut UpdateCtx) {
        route_pointer(
            &mut self.composer,
            ctx.pointer_ray.as_ref(),
            ctx.input.primary_clicked(),
        );

        // Carousel keys select/deselect the matching hologram.
        for (key, index) in [
            (input::KeyCode::Digit1, 0),
            (input::KeyCode::Digit2, 1),
            (input::KeyCode::Digit3, 2),
        ] {
            if ctx.input.is_key_pressed(key) {
                self.composer.handle_select(PROJECTS[index].id);
            }
        }

        let flags = ScreenshotCycler::focus_flags(&self.composer);
        self.cycler.sync(&flags, self.composer.timers_mut());
        for event in self.composer.tick_timers(ctx.dt) {
            self.cycler.on_timer(&event);
        }
        self.composer.update(ctx.t, ctx.dt);
    }

    fn collect(&self, batch: &mut Batch, lines: &mut Vec<LineVertex>, t: f32) {
        // Grid floor, drifting slowly.
        let drift = glam::Quat::from_rotation_y(t * 0.02)
            * glam::Quat::from_rotation_x((t * 0.01).sin() * 0.1);
        for seg in &self.grid {
            lines.push(LineVertex::new((drift * seg.a).to_array(), seg.color));
            lines.push(LineVertex::new((drift * seg.b).to_array(), seg.color));
        }

        for record in PROJECTS.iter() {
            let Some(tr) = self.composer.node_transform_of(record.id) else {
                continue;
            };
            let interaction = self.composer.interaction(record.id);
            let color = record.color.with_alpha(0.7);

            // Holographic display slab + darkened screen area.
            batch.push(
                MeshKind::Cuboid,
                sub_instance(&tr, Vec3::ZERO, Vec3::new(3.0, 2.0, 0.1), color).with_emissive(0.3),
            );
            batch.push(
                MeshKind::Cuboid,
                sub_instance(
                    &tr,
                    Vec3::new(0.0, 0.0, 0.06),
                    Vec3::new(2.8, 1.8, 0.02),
                    [0.0, 0.0, 0.0, 0.9],
                ),
            );
            // Setting props flanking the hologram.
            for prop in record.setting.props() {
                let (kind, instance) = prop_instance(&tr, prop);
                batch.push(kind, instance);
            }
            // Selected holograms get the data-point ring and sparkles.
            if interaction == Interaction::Selected {
                for point in ring_points(8, 2.5, 1.5, 0.5) {
                    batch.push(
                        MeshKind::SphereLow,
                        sub_instance(
                            &tr,
                            point,
                            Vec3::splat(0.08),
                            record.color.with_alpha(1.0),
                        )
                        .with_emissive(0.5),
                    );
                }
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
            "Interaction Guide",
            &[
                ("Click holograms for details", overlay::CYAN),
                ("Hover for quick preview", overlay::GREEN),
                ("Screenshots auto-cycle", overlay::GOLD),
                ("Drag to rotate view", overlay::PINK),
                ("Keys 1-3 jump to a project", overlay::GRAY),
            ],
        );

        overlay::info_panel(
            tb,
            sw - 250.0 - 24.0,
            sh * 0.2,
            250.0,
            "Portfolio Stats",
            &[
                ("Total Projects: 3", overlay::CYAN),
                ("Technologies: 8+", overlay::GREEN),
                ("Screenshots: 24", overlay::PINK),
                ("Code Lines: 10K+", overlay::GOLD),
            ],
        );

        let legend_rows: Vec<([f32; 3], &str)> = PROJECTS
            .iter()
            .map(|p| (p.color.0, p.setting.label()))
            .collect();
        overlay::legend_panel(tb, sw - 250.0 - 24.0, sh - 150.0, 250.0, "Project Types", &legend_rows);

        if let Some((id, selected)) = self.composer.focus() {
            if let Some(record) = PROJECTS.iter().find(|r| r.id == id) {
                let detail = if selected {
                    DetailLevel::Selected
                } else {
                    DetailLevel::Hover
                };
                let mut panel = record.panel(detail);
                panel.footer = format!(
                    "Screenshot {} of {}",
                    self.cycler.index_of(id) + 1,
                    record.screenshots
                );
                overlay::node_panel(tb, sw, sh, &panel, detail);
            }
        }

        // Carousel dots, filled for the selected project.
        let dot = 10.0;
        let gap = 18.0;
        let total = PROJECTS.len() as f32 * dot + (PROJECTS.len() - 1) as f32 * gap;
        let mut x = sw * 0.5 - total / 2.0;
        for record in PROJECTS.iter() {
            let filled = self.composer.is_active(record.id);
            let color = record.color.with_alpha(if filled { 1.0 } else { 0.35 });
            tb.add_rect(x, sh - 96.0, dot, dot, color);
            x += dot + gap;
        }

        overlay::cta_row(
            tb,
            sw,
            sh,
            &[
                ("View All Projects", overlay::GOLD),
                ("GitHub Repository", overlay::CYAN),
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

    fn scene() -> ProjectsScene {
        ProjectsScene::new(&mut StdRng::seed_from_u64(5))
    }

    fn drive(scene: &mut ProjectsScene, seconds: f32) {
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < seconds {
            let flags = ScreenshotCycler::focus_flags(&scene.composer);
            scene.cycler.sync(&flags, scene.composer.timers_mut());
            for event in scene.composer.tick_timers(dt) {
                scene.cycler.on_timer(&event);
            }
            elapsed += dt;
        }
    }

    #[test]
    fn screenshots_cycle_only_while_focused() {
        let mut scene = scene();
        let id = PROJECTS[0].id;

        drive(&mut scene, 5.0);
        assert_eq!(scene.cycler.index_of(id), 0);

        scene.composer.handle_hover(id);
        drive(&mut scene, SCREENSHOT_CYCLE_SECS * 2.5);
        assert_eq!(scene.cycler.index_of(id), 2);

        scene.composer.handle_leave();
        drive(&mut scene, 10.0);
        assert_eq!(scene.cycler.index_of(id), 2);
        assert!(!scene.cycler.is_cycling());
    }

    #[test]
    fn selected_and_hovered_holograms_cycle_independently() {
        let mut scene = scene();
        scene.composer.handle_select(PROJECTS[0].id);
        scene.composer.handle_hover(PROJECTS[1].id);
        drive(&mut scene, SCREENSHOT_CYCLE_SECS * 1.5);
        assert_eq!(scene.cycler.index_of(PROJECTS[0].id), 1);
        assert_eq!(scene.cycler.index_of(PROJECTS[1].id), 1);
        assert_eq!(scene.cycler.index_of(PROJECTS[2].id), 0);
    }

    #[test]
    fn cycle_wraps_at_screenshot_count() {
        let mut scene = scene();
        let id = PROJECTS[0].id;
        scene.composer.handle_select(id);
        let cycles = PROJECTS[0].screenshots as f32 + 1.5;
        drive(&mut scene, SCREENSHOT_CYCLE_SECS * cycles);
        assert!(scene.cycler.index_of(id) < PROJECTS[0].screenshots);
    }

    #[test]
    fn unmount_cancels_the_cycle_timer() {
        let mut scene = scene();
        scene.composer.handle_select(PROJECTS[1].id);
        drive(&mut scene, 0.1);
        assert!(scene.cycler.is_cycling());
        scene.unmount();
        assert!(scene.composer.tick_timers(60.0).is_empty());
    }

    #[test]
    fn selected_hologram_emits_data_ring() {
        let mut scene = scene();
        scene.composer.handle_select(PROJECTS[0].id);
        scene.composer.update(1.0, 1.0 / 60.0);
        let mut batch = Batch::default();
        let mut lines = Vec::new();
        scene.collect(&mut batch, &mut lines, 1.0);
        // 8 ring points + 50 sparkles on the low-poly mesh.
        assert_eq!(batch.group(MeshKind::SphereLow).len(), 58);
    }
}
