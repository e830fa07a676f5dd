use cgmath::{Matrix4, Point3};
use log::info;
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::gfx::{
    camera::{
        camera_controller::CameraController,
        camera_utils::{CameraManager, CameraUniform},
        fly_camera::{FlyCamera, FlyCameraSettings},
    },
    lighting::LightSet,
    scene::{Scene, SceneObject},
};

/// Editing step sizes for keyboard commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    /// Radians per key press
    pub rotation_step: f32,
    pub translation_step: f32,
    /// Multiplicative; the inverse scales down
    pub scale_factor: f32,
    pub reflection_step: f32,
    pub ambient_step: f32,
    pub camera_start: Point3<f32>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            rotation_step: 0.05,
            translation_step: 0.5,
            scale_factor: 1.1,
            reflection_step: 0.1,
            ambient_step: 0.1,
            camera_start: Point3::new(70.0, 4.0, 0.0),
        }
    }
}

/// Per-frame output handed to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
    pub camera_position: Point3<f32>,
    pub lights: LightSet,
    pub wireframe: bool,
    pub camera_uniform: CameraUniform,
}

/// Input context owning the scene and the camera
///
/// Window callbacks are forwarded here; nothing is reachable through globals.
pub struct Viewer {
    pub scene: Scene,
    pub camera_manager: CameraManager,
    pub settings: ViewerSettings,
    selected: Option<usize>,
    wireframe: bool,
    exit_requested: bool,
}

impl Viewer {
    pub fn new(scene: Scene, width: u32, height: u32) -> Self {
        Self::with_settings(
            scene,
            width,
            height,
            ViewerSettings::default(),
            FlyCameraSettings::default(),
        )
    }

    pub fn with_settings(
        scene: Scene,
        width: u32,
        height: u32,
        settings: ViewerSettings,
        camera_settings: FlyCameraSettings,
    ) -> Self {
        let camera = FlyCamera::with_settings(
            width.max(1) as f32,
            height.max(1) as f32,
            settings.camera_start,
            camera_settings,
        );
        Self {
            scene,
            camera_manager: CameraManager::new(camera, CameraController::new()),
            settings,
            selected: None,
            wireframe: false,
            exit_requested: false,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|index| self.scene.object(index))
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera_manager.camera
    }

    /// Returns true if the event was consumed
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key,
                    state,
                    ..
                },
                ..
            } => self.handle_physical_key(*physical_key, *state),
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                true
            }
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
                true
            }
            _ => false,
        }
    }

    pub fn handle_cursor(&mut self, x: f32, y: f32) {
        self.camera_manager.process_cursor(x, y);
    }

    /// Keys without a layout-independent code are not consumed
    pub fn handle_physical_key(&mut self, key: PhysicalKey, state: ElementState) -> bool {
        match key {
            PhysicalKey::Code(code) => {
                self.handle_key(code, state);
                true
            }
            PhysicalKey::Unidentified(_) => false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, state: ElementState) {
        if self.camera_manager.process_key(code, state) || state != ElementState::Pressed {
            return;
        }

        match code {
            KeyCode::Escape => self.exit_requested = true,
            KeyCode::KeyP => self.wireframe = !self.wireframe,
            KeyCode::KeyO => self.scene.sky_light.toggle(),
            KeyCode::KeyI => self.scene.sky_light.adjust_ambient(self.settings.ambient_step),
            KeyCode::KeyU => self.scene.sky_light.adjust_ambient(-self.settings.ambient_step),
            _ => {
                if let Some(index) = digit_index(code) {
                    self.select(index);
                } else {
                    self.edit_selected(code);
                }
            }
        }
    }

    fn select(&mut self, index: usize) {
        if let Some(object) = self.scene.object(index) {
            info!("Selected object {} {}", index, object.name());
            self.selected = Some(index);
        }
    }

    fn edit_selected(&mut self, code: KeyCode) {
        let settings = self.settings;
        let Some(object) = self.selected.and_then(|index| self.scene.object_mut(index)) else {
            return;
        };

        let step = settings.translation_step;
        match code {
            KeyCode::KeyZ => object.rotate(settings.rotation_step),
            KeyCode::KeyC => object.rotate(-settings.rotation_step),
            KeyCode::ArrowRight => object.move_by(step, 0.0, 0.0),
            KeyCode::ArrowLeft => object.move_by(-step, 0.0, 0.0),
            KeyCode::ArrowUp => object.move_by(0.0, 0.0, step),
            KeyCode::ArrowDown => object.move_by(0.0, 0.0, -step),
            KeyCode::KeyK => object.move_by(0.0, step, 0.0),
            KeyCode::KeyJ => object.move_by(0.0, -step, 0.0),
            KeyCode::KeyV => object.scale_by(settings.scale_factor),
            KeyCode::KeyB => object.scale_by(settings.scale_factor.recip()),
            KeyCode::KeyE => object.adjust_diffuse(settings.reflection_step),
            KeyCode::KeyR => object.adjust_diffuse(-settings.reflection_step),
            KeyCode::KeyT => object.adjust_specular(settings.reflection_step),
            KeyCode::KeyY => object.adjust_specular(-settings.reflection_step),
            KeyCode::KeyF => {
                if object.toggle_lights() {
                    info!("Toggled lights of {}", object.name());
                }
            }
            _ => (),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera_manager.camera.resize(width, height);
    }

    /// Advances one frame and gathers everything a renderer needs
    pub fn frame(&mut self) -> FrameData {
        self.camera_manager.update();
        self.scene.advance_frame();
        let lights = self.scene.collect_lights();

        let camera = &self.camera_manager.camera;
        FrameData {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            camera_position: camera.position(),
            lights,
            wireframe: self.wireframe,
            camera_uniform: camera.uniform,
        }
    }
}

fn digit_index(code: KeyCode) -> Option<usize> {
    let index = match code {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        KeyCode::Digit7 => 6,
        KeyCode::Digit8 => 7,
        KeyCode::Digit9 => 8,
        _ => return None,
    };
    Some(index)
}
