//! Orbitfolio - an interactive 3D portfolio viewer.
//!
//! Six full-viewport scenes (hero, skills, experience, projects,
//! certificates, contact) rendered with wgpu; PageUp/PageDown moves between
//! sections, drag orbits the camera, clicking nodes expands them.

mod certificates;
mod config;
mod contact;
mod experience;
mod hero;
mod links;
mod overlay;
mod projects;
mod shell;
mod skills;

use anyhow::Result;
use engine_core::Time;
use glam::Vec2;
use input::{InputState, KeyCode, MouseButton};
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{LineMesh, LineVertex, OrbitCamera, OverlayTextBuilder, Renderer};
use scene::Ray;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::ViewerConfig;
use crate::shell::{AppAction, Batch, Meshes, MeshKind, Section, SectionScene};

/// Splash duration before the hero section appears.
const LOADING_SECS: f32 = 3.0;

/// Top-level viewer phase: the timed splash, then section browsing.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Loading { remaining: f32 },
    Browsing,
}

/// All viewer state: renderer, input, the mounted section scene.
struct ViewerState {
    config: ViewerConfig,
    renderer: Renderer,
    camera: OrbitCamera,
    input: InputState,
    time: Time,
    meshes: Meshes,
    rng: StdRng,

    phase: Phase,
    section: Section,
    scene: Box<dyn SectionScene>,

    batch: Batch,
    line_vertices: Vec<LineVertex>,
    actions: Vec<AppAction>,
    running: bool,
}

impl ViewerState {
    fn new(window: Arc<Window>, config: ViewerConfig) -> Result<Self> {
        if let Err(e) = content::validate_all() {
            // Registries are static data; a duplicate id is a packaging bug.
            log::error!("content registry validation failed: {e}");
            debug_assert!(false, "content registry validation failed: {e}");
        }

        let renderer = Renderer::new(window, config.vsync)?;
        let meshes = Meshes::upload(renderer.device());
        let mut rng = StdRng::from_entropy();

        let section = Section::Hero;
        let scene = build_scene(section, &config, &mut rng);
        let mut camera = OrbitCamera::new(scene.camera_config());
        let (w, h) = renderer.dimensions();
        camera.set_aspect(w, h);

        let mut state = Self {
            config,
            renderer,
            camera,
            input: InputState::new(),
            time: Time::new(),
            meshes,
            rng,
            phase: Phase::Loading {
                remaining: LOADING_SECS,
            },
            section,
            scene,
            batch: Batch::default(),
            line_vertices: Vec::new(),
            actions: Vec::new(),
            running: true,
        };
        state.apply_scene_environment();
        Ok(state)
    }

    fn apply_scene_environment(&mut self) {
        self.renderer.update_lights(&self.scene.lights());
        self.renderer.set_clear_color(self.scene.background());
    }

    /// Unmount the current scene and mount the requested section.
    fn switch_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        log::info!("switching section: {:?} -> {:?}", self.section, section);
        self.scene.unmount();
        self.section = section;
        self.scene = build_scene(section, &self.config, &mut self.rng);
        self.camera = OrbitCamera::new(self.scene.camera_config());
        let (w, h) = self.renderer.dimensions();
        self.camera.set_aspect(w, h);
        self.apply_scene_environment();
    }

    /// Handle a window event. Returns true if the app should exit.
    fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.running = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
                self.camera.set_aspect(size.width, size.height);
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state);
                    if event.state.is_pressed() {
                        self.handle_hotkey(key);
                    }
                }
                if let Some(text) = event.text {
                    if event.state.is_pressed() && self.scene.wants_text_input() {
                        self.input.process_text(text.as_str());
                    }
                }
                false
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_position((position.x, position.y));
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => {
                        self.input.process_scroll_lines(y);
                    }
                    winit::event::MouseScrollDelta::PixelDelta(pos) => {
                        self.input.process_scroll_pixels(pos.y);
                    }
                }
                false
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if let Err(e) = self.render() {
                    log::error!("render error: {e}");
                }
                self.renderer.window.request_redraw();
                false
            }
            _ => false,
        }
    }

    fn handle_hotkey(&mut self, key: KeyCode) {
        if self.phase != Phase::Browsing {
            return;
        }
        match key {
            KeyCode::Escape => self.running = false,
            KeyCode::PageDown | KeyCode::BracketRight => {
                self.switch_section(self.section.next());
            }
            KeyCode::PageUp | KeyCode::BracketLeft => {
                self.switch_section(self.section.previous());
            }
            // Letter hotkeys are disabled where a form captures text.
            KeyCode::KeyR if !self.scene.wants_text_input() => self.camera.reset(),
            _ => {}
        }
    }

    /// One frame of state advancement.
    fn update(&mut self) {
        self.time.update();
        let dt = self.time.delta_seconds().min(0.1);
        let t = self.time.elapsed_seconds();

        if let Phase::Loading { remaining } = self.phase {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                log::debug!("loading finished");
                self.phase = Phase::Browsing;
            } else {
                self.phase = Phase::Loading { remaining };
                self.input.begin_frame();
                return;
            }
        }

        // Camera: drag orbits, scroll zooms, secondary button pans.
        if self.input.is_mouse_held(MouseButton::Left) && self.input.is_dragging() {
            let sensitivity = 0.005 * self.config.sensitivity;
            self.camera.process_drag(self.input.cursor_delta(), sensitivity);
        }
        if self.input.is_mouse_held(MouseButton::Right) {
            self.camera.process_pan(self.input.cursor_delta());
        }
        let scroll = self.input.scroll_steps();
        if scroll != 0.0 {
            self.camera.process_scroll(scroll);
        }
        self.camera.update(dt);

        // Pointer ray for picking; suppressed mid-drag so orbiting does not
        // flicker hover states.
        let pointer_ray = if self.input.is_dragging() {
            None
        } else {
            let (w, h) = self.renderer.dimensions();
            let (origin, dir) = self.camera.cursor_ray(
                self.input.cursor_position(),
                Vec2::new(w as f32, h as f32),
            );
            Some(Ray { origin, dir })
        };

        let mut ctx = shell::UpdateCtx {
            t,
            dt,
            input: &self.input,
            pointer_ray,
            actions: &mut self.actions,
        };
        self.scene.update(&mut ctx);

        for action in self.actions.drain(..) {
            match action {
                AppAction::OpenLink(uri) => links::open_external(&uri),
                AppAction::ResetView => self.camera.reset(),
            }
        }

        self.input.begin_frame();
    }

    /// Render the frame: clear, scene geometry, lines, overlay.
    fn render(&mut self) -> Result<()> {
        self.renderer.update_camera(&self.camera);
        let (output, mut encoder) = self.renderer.begin_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.clear_pass(&mut encoder, &view);

        let t = self.time.elapsed_seconds();
        if self.phase == Phase::Browsing {
            self.batch.clear();
            self.line_vertices.clear();
            self.scene.collect(&mut self.batch, &mut self.line_vertices, t);

            for kind in MeshKind::ALL {
                self.renderer.render_instanced(
                    &mut encoder,
                    &view,
                    self.meshes.of(kind),
                    self.batch.group(kind),
                );
            }
            if !self.line_vertices.is_empty() {
                let lines = LineMesh::new(self.renderer.device(), &self.line_vertices);
                self.renderer.render_lines(&mut encoder, &view, &lines);
            }
        }

        let (sw, sh) = self.renderer.dimensions();
        let (sw, sh) = (sw as f32, sh as f32);
        let mut tb = OverlayTextBuilder::new(sw, sh);
        match self.phase {
            Phase::Loading { remaining } => build_loading_overlay(&mut tb, sw, sh, remaining),
            Phase::Browsing => {
                self.scene.overlay(&mut tb, sw, sh);
                build_section_indicator(&mut tb, sw, sh, self.section);
            }
        }
        self.renderer
            .render_overlay(&mut encoder, &view, &tb.vertices, &tb.indices);

        self.renderer.end_frame(output, encoder);
        Ok(())
    }
}

/// Construct a freshly mounted scene for one section.
fn build_scene(
    section: Section,
    config: &ViewerConfig,
    rng: &mut StdRng,
) -> Box<dyn SectionScene> {
    match section {
        Section::Hero => Box::new(hero::HeroScene::new(rng)),
        Section::Skills => Box::new(skills::SkillsScene::new(config.star_count, rng)),
        Section::Experience => Box::new(experience::ExperienceScene::new(rng)),
        Section::Projects => Box::new(projects::ProjectsScene::new(rng)),
        Section::Certificates => Box::new(certificates::CertificatesScene::new(rng)),
        Section::Contact => Box::new(contact::ContactScene::new(rng)),
    }
}

fn build_loading_overlay(tb: &mut OverlayTextBuilder, sw: f32, sh: f32, remaining: f32) {
    tb.add_rect(0.0, 0.0, sw, sh, [0.02, 0.025, 0.06, 1.0]);
    tb.add_text_centered(
        sw * 0.5,
        sh * 0.42,
        "Initializing Legendary Experience...",
        1.4,
        overlay::GOLD,
    );
    let progress = 1.0 - (remaining / LOADING_SECS).clamp(0.0, 1.0);
    tb.add_meter(sw * 0.5 - 160.0, sh * 0.5, 320.0, 4.0, progress, overlay::GOLD);
}

/// Right-edge section dots plus the section hotkey hint.
fn build_section_indicator(tb: &mut OverlayTextBuilder, sw: f32, sh: f32, current: Section) {
    let dot = 8.0;
    let gap = 14.0;
    let total = Section::ALL.len() as f32 * (dot + gap) - gap;
    let mut y = sh * 0.5 - total / 2.0;
    for section in Section::ALL {
        let alpha = if section == current { 1.0 } else { 0.3 };
        tb.add_rect(sw - 20.0, y, dot, dot, [0.83, 0.69, 0.22, alpha]);
        y += dot + gap;
    }
    tb.add_text(
        16.0,
        sh - 22.0,
        "PgUp/PgDn: sections   Drag: orbit   R: reset view",
        1.0,
        overlay::DIM,
    );
}

/// winit application wrapper; state is created once the event loop resumes.
struct App {
    state: Option<ViewerState>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let config = ViewerConfig::load();
            let mut window_attrs = Window::default_attributes()
                .with_title("Orbitfolio - Shreyash Desai")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    config.window_width,
                    config.window_height,
                ));
            if config.fullscreen {
                window_attrs = window_attrs
                    .with_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
            }

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            match ViewerState::new(window.clone(), config) {
                Ok(state) => {
                    self.state = Some(state);
                    window.request_redraw();
                }
                Err(e) => {
                    log::error!("Failed to initialize viewer: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                state.scene.unmount();
                state.config.save();
                event_loop.exit();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Orbitfolio");

    let event_loop = EventLoop::new()?;
    // Poll keeps the scenes animating even when no input arrives.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
