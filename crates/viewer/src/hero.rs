//! Hero section: name typography over a drifting particle field, the
//! morphing subtitle, and the journey globe.

use content::{
    profile::HERO_TITLE_CYCLE_SECS, RecordId, GLOBE_MARKERS, HERO_TAGLINE, HERO_TITLES,
    NAME_LINES,
};
use engine_core::TimerToken;
use glam::Vec3;
use rand::Rng;
use renderer::{LineVertex, OrbitConfig, OverlayTextBuilder, SceneLights};
use scene::{BasePlacement, Bob, Composer, Motion, NodeSpec, SpinMode, SpinSet, Starfield};

use crate::overlay;
use crate::shell::{
    instance_at, route_pointer, sub_instance, Batch, MeshKind, SectionScene, UpdateCtx,
};

const GLOBE_ID: RecordId = RecordId("journey-globe");
const GLOBE_RADIUS: f32 = 1.5;

pub struct HeroScene {
    composer: Composer,
    particles: Starfield,
    title_index: usize,
    title_token: TimerToken,
}

impl HeroScene {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut composer = Composer::new();

        composer.spawn_node(NodeSpec {
            id: GLOBE_ID,
            base: BasePlacement::at(Vec3::new(8.0, 0.0, -5.0)),
            motion: Motion::uniform(
                Bob::NONE,
                SpinSet {
                    y: SpinMode::Turn { rate: 0.2 },
                    x: SpinMode::None,
                },
            ),
            boost: 1.1,
            boost_selected: None,
            pick_radius: 1.7,
        });

        let title_token = composer
            .timers_mut()
            .interval(HERO_TITLE_CYCLE_SECS)
            .expect("title cycle period is positive");

        Self {
            composer,
            particles: Starfield::generate(2000, 25.0, rng),
            title_index: 0,
            title_token,
        }
    }

    pub fn current_title(&self) -> &'static str {
        HERO_TITLES[self.title_index % HERO_TITLES.len()]
    }
}

impl SectionScene for HeroScene {
    fn title(&self) -> (&'static str, &'static str) {
        (NAME_LINES[0].0, NAME_LINES[1].0)
    }

    fn subtitle(&self) -> &'static str {
        HERO_TAGLINE
    }

    fn camera_config(&self) -> OrbitConfig {
        OrbitConfig {
            distance: 10.0,
            auto_rotate: true,
            auto_rotate_speed: 0.05,
            enable_zoom: false,
            enable_pan: false,
            ..Default::default()
        }
    }

    fn lights(&self) -> SceneLights {
        SceneLights::new(0.3)
            .with_light(Vec3::new(10.0, 10.0, 10.0), [0.83, 0.69, 0.22], 1.0)
            .with_light(Vec3::new(-10.0, -10.0, -10.0), [0.0, 0.83, 1.0], 0.5)
            .with_light(Vec3::new(0.0, 10.0, 0.0), [0.98, 0.98, 0.98], 0.8)
    }

    fn update(&mut self, ctx: &mut UpdateCtx) {
        route_pointer(
            &mut self.composer,
            ctx.pointer_ray.as_ref(),
            ctx.input.primary_clicked(),
        );
        for event in self.composer.tick_timers(ctx.dt) {
            if event.token == self.title_token {
                self.title_index =
                    (self.title_index + event.fires as usize) % HERO_TITLES.len();
            }
        }
        self.composer.update(ctx.t, ctx.dt);
    }

    fn collect(&self, batch: &mut Batch, lines: &mut Vec<LineVertex>, t: f32) {
        // Gold particle field, swaying as one group.
        let sway = Starfield::sway_rotation(t);
        for p in &self.particles.positions {
            batch.push(
                MeshKind::SphereLow,
                instance_at(sway * *p, Vec3::splat(0.04), [0.83, 0.69, 0.22, 0.6]).unlit(),
            );
        }

        // Journey globe with the Oman -> India arc.
        if let Some(tr) = self.composer.node_transform_of(GLOBE_ID) {
            batch.push(
                MeshKind::Sphere,
                sub_instance(
                    &tr,
                    Vec3::ZERO,
                    Vec3::splat(GLOBE_RADIUS),
                    [0.04, 0.055, 0.15, 0.4],
                )
                .with_emissive(0.15),
            );
            for marker in GLOBE_MARKERS.iter() {
                batch.push(
                    MeshKind::Sphere,
                    sub_instance(
                        &tr,
                        marker.position,
                        Vec3::splat(0.05),
                        marker.color.with_alpha(1.0),
                    )
                    .with_emissive(0.5),
                );
            }
            // Connection between the markers, following the globe's spin.
            let world = |p: Vec3| tr.position + tr.rotation * (p * tr.scale);
            lines.push(LineVertex::new(
                world(GLOBE_MARKERS[0].position).to_array(),
                [0.83, 0.69, 0.22, 1.0],
            ));
            lines.push(LineVertex::new(
                world(GLOBE_MARKERS[1].position).to_array(),
                [0.83, 0.69, 0.22, 1.0],
            ));
        }
    }

    fn overlay(&self, tb: &mut OverlayTextBuilder, sw: f32, sh: f32) {
        // Stacked name typography.
        let (first, first_color) = NAME_LINES[0];
        let (second, second_color) = NAME_LINES[1];
        tb.add_text_centered(sw * 0.5, sh * 0.26, first, 6.0, first_color.with_alpha(1.0));
        tb.add_text_centered(
            sw * 0.5,
            sh * 0.26 + 58.0,
            second,
            5.0,
            second_color.with_alpha(1.0),
        );

        // Morphing subtitle.
        tb.add_text_centered(sw * 0.5, sh * 0.26 + 120.0, self.current_title(), 2.0, overlay::WHITE);
        tb.add_text_centered(sw * 0.5, sh * 0.26 + 150.0, HERO_TAGLINE, 1.0, overlay::GRAY);

        // Globe hover card.
        if self.composer.focus().is_some() {
            let rows = [
                (GLOBE_MARKERS[0].label, overlay::PINK),
                (GLOBE_MARKERS[1].label, overlay::GREEN),
            ];
            overlay::info_panel(tb, sw - 260.0 - 24.0, sh * 0.3, 260.0, "The Journey", &rows);
        }

        overlay::cta_row(
            tb,
            sw,
            sh,
            &[
                ("Explore My Work", overlay::GOLD),
                ("Download Resume", overlay::CYAN),
            ],
        );

        // Scroll hint with a bobbing tick.
        tb.add_text_centered(sw * 0.5, sh - 110.0, "Scroll to explore", 1.0, overlay::DIM);
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

    fn scene() -> HeroScene {
        HeroScene::new(&mut StdRng::seed_from_u64(42))
    }

    fn drive(scene: &mut HeroScene, seconds: f32) {
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < seconds {
            for event in scene.composer.tick_timers(dt) {
                if event.token == scene.title_token {
                    scene.title_index =
                        (scene.title_index + event.fires as usize) % HERO_TITLES.len();
                }
            }
            elapsed += dt;
        }
    }

    #[test]
    fn titles_cycle_and_wrap() {
        let mut scene = scene();
        assert_eq!(scene.current_title(), HERO_TITLES[0]);
        drive(&mut scene, HERO_TITLE_CYCLE_SECS + 0.1);
        assert_eq!(scene.current_title(), HERO_TITLES[1]);
        drive(&mut scene, HERO_TITLE_CYCLE_SECS * 3.0);
        assert_eq!(scene.current_title(), HERO_TITLES[0]);
    }

    #[test]
    fn title_cycle_stops_on_unmount() {
        let mut scene = scene();
        scene.unmount();
        drive(&mut scene, 10.0);
        assert_eq!(scene.current_title(), HERO_TITLES[0]);
    }

    #[test]
    fn particle_field_is_emitted() {
        let mut scene = scene();
        scene.composer.update(0.0, 1.0 / 60.0);
        let mut batch = Batch::default();
        let mut lines = Vec::new();
        scene.collect(&mut batch, &mut lines, 0.0);
        assert_eq!(batch.group(MeshKind::SphereLow).len(), 2000);
        // The journey arc.
        assert_eq!(lines.len(), 2);
    }
}
