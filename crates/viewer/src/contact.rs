//! Contact section: social link planets, the simulated contact form, the
//! location globe, and the resume download stub.

use content::{DetailLevel, PanelContent, PanelSource, RecordId, Rgb, CONTACT_INFO, SOCIAL_LINKS};
use engine_core::{TimerEvent, TimerScope, TimerToken};
use glam::Vec3;
use rand::Rng;
use renderer::{LineVertex, OrbitConfig, OverlayTextBuilder, SceneLights};
use scene::{BasePlacement, Bob, Composer, Motion, NodeSpec, SpinMode, SpinSet};

use crate::overlay;
use crate::shell::{
    route_pointer, sub_instance, sub_instance_rotated, AppAction, Batch, MeshKind,
    PointerOutcome, SectionScene, SparkleField, UpdateCtx,
};

/// Simulated network round trip.
pub const SUBMIT_DELAY_SECS: f32 = 2.0;
/// How long the thank-you state holds before the empty form returns.
pub const SUBMITTED_HOLD_SECS: f32 = 3.0;
/// Simulated resume download duration.
pub const DOWNLOAD_DELAY_SECS: f32 = 2.0;

pub const FIELD_LABELS: [&str; 4] = ["Your Name", "Your Email", "Subject", "Your Message"];

const LOCATION_ID: RecordId = RecordId("location");
const RESUME_ID: RecordId = RecordId("resume");

/// Contact form lifecycle. All transitions except submit are time-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Submitted,
}

/// Local-only form state: four fields, a focus index, and the simulated
/// submission machine. Delay tokens live in the owning composer's scope.
pub struct ContactForm {
    fields: [String; 4],
    focus: usize,
    phase: FormPhase,
    token: Option<TimerToken>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            focus: 0,
            phase: FormPhase::Idle,
            token: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn field(&self, index: usize) -> &str {
        &self.fields[index]
    }

    pub fn focused_field(&self) -> usize {
        self.focus
    }

    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|f| !f.trim().is_empty())
    }

    /// Submission requires every field and an idle form; `Submitting`
    /// swallows repeat submits.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Idle && self.is_complete()
    }

    pub fn type_str(&mut self, text: &str) {
        if self.phase == FormPhase::Idle && !text.is_empty() {
            self.fields[self.focus].push_str(text);
        }
    }

    pub fn backspace(&mut self) {
        if self.phase == FormPhase::Idle {
            self.fields[self.focus].pop();
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Try to submit. On success the form sits in `Submitting` until the
    /// delay token fires.
    pub fn submit(&mut self, timers: &mut TimerScope) -> bool {
        if !self.can_submit() {
            return false;
        }
        log::debug!("contact form submitted");
        self.phase = FormPhase::Submitting;
        self.token = Some(timers.delay(SUBMIT_DELAY_SECS));
        true
    }

    /// Drive the time-based transitions from the composer's timer events.
    pub fn on_timer(&mut self, event: &TimerEvent, timers: &mut TimerScope) {
        if self.token != Some(event.token) {
            return;
        }
        match self.phase {
            FormPhase::Submitting => {
                self.phase = FormPhase::Submitted;
                self.fields = Default::default();
                self.focus = 0;
                self.token = Some(timers.delay(SUBMITTED_HOLD_SECS));
            }
            FormPhase::Submitted => {
                self.phase = FormPhase::Idle;
                self.token = None;
            }
            FormPhase::Idle => {}
        }
    }
}

/// Resume download stub: a spinner state and nothing else.
#[derive(Default)]
pub struct ResumeDownload {
    token: Option<TimerToken>,
}

impl ResumeDownload {
    pub fn is_downloading(&self) -> bool {
        self.token.is_some()
    }

    pub fn start(&mut self, timers: &mut TimerScope) {
        if self.token.is_none() {
            log::info!("resume download requested (stub)");
            self.token = Some(timers.delay(DOWNLOAD_DELAY_SECS));
        }
    }

    pub fn on_timer(&mut self, event: &TimerEvent) {
        if self.token == Some(event.token) {
            self.token = None;
        }
    }
}

pub struct ContactScene {
    composer: Composer,
    form: ContactForm,
    download: ResumeDownload,
    sparkles: Vec<(RecordId, SparkleField)>,
    form_sparkles: SparkleField,
}

impl ContactScene {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut composer = Composer::new();
        let mut sparkles = Vec::new();

        for link in SOCIAL_LINKS.iter() {
            composer.spawn_node(NodeSpec {
                id: link.id,
                base: BasePlacement::at(link.position),
                motion: Motion::uniform(
                    Bob::NONE,
                    SpinSet {
                        y: SpinMode::Turn { rate: 0.5 },
                        x: SpinMode::None,
                    },
                ),
                boost: 1.3,
                boost_selected: None,
                pick_radius: 0.9,
            });
            sparkles.push((
                link.id,
                SparkleField::generate(
                    &content::Sparkle {
                        color: link.color,
                        count: 20,
                        scale: 1.5,
                        speed: 0.6,
                    },
                    rng,
                ),
            ));
        }

        // Location globe: hover or click expands the address card.
        composer.spawn_node(NodeSpec {
            id: LOCATION_ID,
            base: BasePlacement::at(Vec3::new(6.0, 0.0, 0.0)),
            motion: Motion::uniform(
                Bob::NONE,
                SpinSet {
                    y: SpinMode::Turn { rate: 0.2 },
                    x: SpinMode::None,
                },
            ),
            boost: 1.5,
            boost_selected: None,
            pick_radius: 1.7,
        });

        // Resume document.
        composer.spawn_node(NodeSpec {
            id: RESUME_ID,
            base: BasePlacement::at(Vec3::new(0.0, -3.0, 0.0)),
            motion: Motion::uniform(
                Bob::NONE,
                SpinSet {
                    y: SpinMode::Sway { rate: 0.5, amp: 0.3 },
                    x: SpinMode::None,
                },
            ),
            boost: 1.1,
            boost_selected: None,
            pick_radius: 1.4,
        });

        let form_sparkles = SparkleField::generate(
            &content::Sparkle {
                color: Rgb::from_hex(0xD4AF37),
                count: 30,
                scale: 3.0,
                speed: 0.3,
            },
            rng,
        );

        Self {
            composer,
            form: ContactForm::new(),
            download: ResumeDownload::default(),
            sparkles,
            form_sparkles,
        }
    }

    fn location_panel(&self) -> PanelContent {
        PanelContent {
            title: "Location".to_string(),
            body: CONTACT_INFO.location.to_string(),
            meta: CONTACT_INFO.timezone.to_string(),
            footer: CONTACT_INFO.availability.to_string(),
            accent: Rgb::from_hex(0x00FF88),
            ..Default::default()
        }
    }

    /// Animated form slab pose; decorative only, so it is not a node.
    fn form_transform(t: f32) -> engine_core::Transform {
        engine_core::Transform {
            position: Vec3::new(-6.0, (t * 0.5).sin() * 0.1, 0.0),
            rotation: glam::Quat::from_rotation_y((t * 0.3).sin() * 0.02),
            scale: Vec3::ONE,
        }
    }
}

impl SectionScene for ContactScene {
    fn title(&self) -> (&'static str, &'static str) {
        ("Let's", "Connect")
    }

    fn subtitle(&self) -> &'static str {
        "Ready to build something extraordinary together"
    }

    fn camera_config(&self) -> OrbitConfig {
        OrbitConfig {
            distance: 12.0,
            min_distance: 8.0,
            max_distance: 20.0,
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

    fn background(&self) -> [f32; 3] {
        [0.01, 0.015, 0.04]
    }

    fn update(&mut self, ctx: &mut UpdateCtx) {
        let outcome = route_pointer(
            &mut self.composer,
            ctx.pointer_ray.as_ref(),
            ctx.input.primary_clicked(),
        );

        // Social planets and the resume doc act on click instead of staying
        // selected: undo the toggle and run the side effect.
        if let PointerOutcome::Clicked(id) = outcome {
            if let Some(link) = SOCIAL_LINKS.iter().find(|l| l.id == id) {
                if self.composer.is_active(id) {
                    self.composer.handle_select(id);
                }
                ctx.actions.push(AppAction::OpenLink(link.target.uri()));
            } else if id == RESUME_ID {
                if self.composer.is_active(id) {
                    self.composer.handle_select(id);
                }
                self.download.start(self.composer.timers_mut());
            }
        }

        // Form editing.
        let typed = ctx.input.typed_chars().to_string();
        self.form.type_str(&typed);
        if ctx.input.is_key_pressed(input::KeyCode::Backspace) {
            self.form.backspace();
        }
        if ctx.input.is_key_pressed(input::KeyCode::Tab) {
            self.form.next_field();
        }
        if ctx.input.is_key_pressed(input::KeyCode::Enter) {
            self.form.submit(self.composer.timers_mut());
        }

        let events = self.composer.tick_timers(ctx.dt);
        for event in events {
            self.form.on_timer(&event, self.composer.timers_mut());
            self.download.on_timer(&event);
        }
        self.composer.update(ctx.t, ctx.dt);
    }

    fn collect(&self, batch: &mut Batch, _lines: &mut Vec<LineVertex>, t: f32) {
        // Social planets with rings and sparkles.
        for link in SOCIAL_LINKS.iter() {
            let Some(tr) = self.composer.node_transform_of(link.id) else {
                continue;
            };
            let hovered = self.composer.is_hovered(link.id);
            batch.push(
                MeshKind::Sphere,
                sub_instance(&tr, Vec3::ZERO, Vec3::splat(0.5), link.color.with_alpha(1.0))
                    .with_emissive(if hovered { 0.4 } else { 0.2 }),
            );
            batch.push(
                MeshKind::Torus,
                sub_instance(&tr, Vec3::ZERO, Vec3::splat(0.8), link.color.with_alpha(0.6))
                    .with_emissive(0.3),
            );
            if let Some((_, field)) = self.sparkles.iter().find(|(id, _)| *id == link.id) {
                field.collect(batch, tr.position, t);
            }
        }

        // Location globe with the Goa marker and pulse ring.
        if let Some(tr) = self.composer.node_transform_of(LOCATION_ID) {
            batch.push(
                MeshKind::Sphere,
                sub_instance(&tr, Vec3::ZERO, Vec3::splat(1.5), [0.25, 0.41, 0.88, 0.35])
                    .with_emissive(0.1),
            );
            batch.push(
                MeshKind::Cuboid,
                sub_instance(
                    &tr,
                    Vec3::new(0.3, 0.2, 1.4),
                    Vec3::new(0.4, 0.6, 0.1),
                    [1.0, 0.42, 0.21, 1.0],
                ),
            );
            batch.push(
                MeshKind::Sphere,
                sub_instance(
                    &tr,
                    Vec3::new(0.2, 0.0, 1.45),
                    Vec3::splat(0.08),
                    [0.0, 1.0, 0.53, 1.0],
                )
                .with_emissive(0.5),
            );
            batch.push(
                MeshKind::Torus,
                sub_instance_rotated(
                    &tr,
                    Vec3::new(0.2, 0.0, 1.45),
                    glam::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
                    Vec3::splat(0.15),
                    [0.0, 1.0, 0.53, 1.0],
                )
                .with_emissive(0.6 + (t * 3.0).sin() * 0.2),
            );
        }

        // Resume document; spins fast while "downloading".
        if let Some(tr) = self.composer.node_transform_of(RESUME_ID) {
            let mut doc = tr;
            if self.download.is_downloading() {
                doc.rotation = glam::Quat::from_rotation_y(t * 2.0);
            }
            batch.push(
                MeshKind::Cuboid,
                sub_instance(&doc, Vec3::ZERO, Vec3::new(1.5, 2.0, 0.1), [1.0, 1.0, 1.0, 1.0]),
            );
            for i in 0..8 {
                batch.push(
                    MeshKind::Cuboid,
                    sub_instance(
                        &doc,
                        Vec3::new(0.0, 0.7 - i as f32 * 0.2, 0.06),
                        Vec3::new(1.2, 0.05, 0.01),
                        [0.2, 0.2, 0.2, 1.0],
                    ),
                );
            }
            batch.push(
                MeshKind::Cone,
                sub_instance(
                    &doc,
                    Vec3::new(0.0, 0.0, 0.1),
                    Vec3::new(0.2, 0.3, 0.2),
                    [0.0, 0.83, 1.0, 1.0],
                )
                .with_emissive(0.3),
            );
        }

        // Form slab.
        let form_tr = Self::form_transform(t);
        batch.push(
            MeshKind::Cuboid,
            sub_instance(
                &form_tr,
                Vec3::ZERO,
                Vec3::new(5.0, 6.5, 0.15),
                [0.04, 0.055, 0.15, 0.9],
            ),
        );
        self.form_sparkles.collect(batch, form_tr.position, t);
    }

    fn overlay(&self, tb: &mut OverlayTextBuilder, sw: f32, sh: f32) {
        let (first, second) = self.title();
        overlay::section_header(tb, sw, first, second, self.subtitle());

        // Contact info card.
        let info_rows = [
            (CONTACT_INFO.email, overlay::CYAN),
            (CONTACT_INFO.phone, overlay::GREEN),
            ("Ponda, Goa", overlay::PINK),
            (CONTACT_INFO.timezone, overlay::GOLD),
        ];
        overlay::info_panel(tb, 24.0, sh * 0.18, 280.0, "Contact Info", &info_rows);

        // Availability card.
        overlay::info_panel(
            tb,
            sw - 260.0 - 24.0,
            sh * 0.18,
            260.0,
            "Available",
            &[
                ("Full-time opportunities", overlay::GREEN),
                ("Freelance projects", overlay::GREEN),
                ("Collaboration", overlay::GREEN),
                ("Consultation", overlay::GREEN),
            ],
        );

        // The form, drawn as an overlay panel.
        let form_x = 24.0;
        let form_y = sh * 0.44;
        let form_w = 300.0;
        match self.form.phase() {
            FormPhase::Submitted => {
                tb.add_panel(form_x, form_y, form_w, 90.0, overlay::GREEN);
                tb.add_text(form_x + 12.0, form_y + 16.0, "Message Sent!", 1.6, overlay::GREEN);
                tb.add_wrapped_text(
                    form_x + 12.0,
                    form_y + 42.0,
                    form_w - 24.0,
                    "Thank you for reaching out. I'll get back to you soon!",
                    1.0,
                    overlay::GRAY,
                );
            }
            phase => {
                let row_h = 30.0;
                let h = 66.0 + FIELD_LABELS.len() as f32 * row_h + 36.0;
                tb.add_panel(form_x, form_y, form_w, h, overlay::GOLD);
                tb.add_text(form_x + 12.0, form_y + 12.0, "Let's Connect", 1.6, overlay::GOLD);
                tb.add_text(
                    form_x + 12.0,
                    form_y + 34.0,
                    "Ready to create something amazing together?",
                    1.0,
                    overlay::GRAY,
                );
                let mut cy = form_y + 58.0;
                for (i, label) in FIELD_LABELS.iter().enumerate() {
                    let focused = self.form.focused_field() == i && phase == FormPhase::Idle;
                    let accent = if focused { overlay::GOLD } else { overlay::DIM };
                    tb.add_rect(form_x + 12.0, cy + 12.0, form_w - 24.0, 12.0, [0.0, 0.0, 0.0, 0.5]);
                    tb.add_border(form_x + 12.0, cy + 12.0, form_w - 24.0, 12.0, 1.0, accent);
                    let value = self.form.field(i);
                    let shown = if value.is_empty() && !focused {
                        (*label).to_string()
                    } else if focused {
                        format!("{value}_")
                    } else {
                        value.to_string()
                    };
                    let color = if value.is_empty() && !focused {
                        overlay::DIM
                    } else {
                        overlay::WHITE
                    };
                    tb.add_text(form_x + 16.0, cy + 14.0, &shown, 1.0, color);
                    cy += row_h;
                }
                let (button, color) = match phase {
                    FormPhase::Submitting => ("Sending...", overlay::DIM),
                    _ if self.form.is_complete() => ("Send Message  [Enter]", overlay::GOLD),
                    _ => ("Fill all fields to send", overlay::DIM),
                };
                tb.add_text(form_x + 12.0, cy + 8.0, button, 1.2, color);
                tb.add_text(
                    form_x + 12.0,
                    cy + 24.0,
                    "Tab: next field",
                    1.0,
                    overlay::DIM,
                );
            }
        }

        // Hover cards for socials / location / resume.
        if let Some((id, selected)) = self.composer.focus() {
            let detail = if selected {
                DetailLevel::Selected
            } else {
                DetailLevel::Hover
            };
            if let Some(link) = SOCIAL_LINKS.iter().find(|l| l.id == id) {
                overlay::node_panel(tb, sw, sh, &link.panel(detail), detail);
            } else if id == LOCATION_ID {
                overlay::node_panel(tb, sw, sh, &self.location_panel(), detail);
            } else if id == RESUME_ID {
                let panel = PanelContent {
                    title: "Resume".to_string(),
                    body: if self.download.is_downloading() {
                        "Downloading...".to_string()
                    } else {
                        "Click to download resume".to_string()
                    },
                    accent: Rgb::from_hex(0x00D4FF),
                    ..Default::default()
                };
                overlay::node_panel(tb, sw, sh, &panel, detail);
            }
        }

        overlay::cta_row(
            tb,
            sw,
            sh,
            &[
                ("Start a Project", overlay::GOLD),
                ("Schedule Call", overlay::CYAN),
            ],
        );
    }

    fn unmount(&mut self) {
        self.composer.unmount();
    }

    fn wants_text_input(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> (ContactForm, TimerScope) {
        let mut form = ContactForm::new();
        let scope = TimerScope::new();
        for (i, text) in ["Ada", "ada@example.com", "Hello", "A message"]
            .iter()
            .enumerate()
        {
            assert_eq!(form.focused_field(), i);
            form.type_str(text);
            form.next_field();
        }
        (form, scope)
    }

    fn drive(form: &mut ContactForm, scope: &mut TimerScope, seconds: f32) {
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < seconds {
            for event in scope.tick(dt) {
                form.on_timer(&event, scope);
            }
            elapsed += dt;
        }
    }

    #[test]
    fn full_submission_round_trip() {
        let (mut form, mut scope) = filled_form();
        assert!(form.submit(&mut scope));
        assert_eq!(form.phase(), FormPhase::Submitting);

        drive(&mut form, &mut scope, SUBMIT_DELAY_SECS + 0.1);
        assert_eq!(form.phase(), FormPhase::Submitted);
        for i in 0..4 {
            assert!(form.field(i).is_empty());
        }

        drive(&mut form, &mut scope, SUBMITTED_HOLD_SECS + 0.1);
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn empty_field_blocks_submission() {
        let mut form = ContactForm::new();
        let mut scope = TimerScope::new();
        form.type_str("only a name");
        assert!(!form.submit(&mut scope));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn double_submission_is_ignored_while_submitting() {
        let (mut form, mut scope) = filled_form();
        assert!(form.submit(&mut scope));
        assert!(!form.submit(&mut scope));
        drive(&mut form, &mut scope, 0.5);
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn typing_is_locked_outside_idle() {
        let (mut form, mut scope) = filled_form();
        form.submit(&mut scope);
        form.type_str("late input");
        drive(&mut form, &mut scope, SUBMIT_DELAY_SECS + 0.1);
        assert!(form.field(0).is_empty());
    }

    #[test]
    fn resume_download_spins_then_finishes() {
        let mut scope = TimerScope::new();
        let mut download = ResumeDownload::default();
        download.start(&mut scope);
        assert!(download.is_downloading());
        // A second click while downloading is a no-op.
        download.start(&mut scope);

        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < DOWNLOAD_DELAY_SECS + 0.1 {
            for event in scope.tick(dt) {
                download.on_timer(&event);
            }
            elapsed += dt;
        }
        assert!(!download.is_downloading());
    }

    #[test]
    fn unmounting_scene_with_pending_submission_fires_nothing() {
        let mut scene = ContactScene::new(&mut rand::rngs::mock::StepRng::new(1, 1));
        for text in ["a", "b", "c", "d"] {
            scene.form.type_str(text);
            scene.form.next_field();
        }
        scene.form.submit(scene.composer.timers_mut());
        scene.unmount();
        assert!(scene.composer.tick_timers(30.0).is_empty());
        assert_eq!(scene.form.phase(), FormPhase::Submitting);
    }
}
