use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform, OPENGL_TO_WGPU_MATRIX};
use cgmath::*;
use log::debug;

/// Soft limits on where the camera may fly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCameraBounds {
    /// Positions must stay strictly inside this sphere around the origin (skybox radius)
    pub sky_radius: f32,
    /// Positions must stay strictly above this height (ground level)
    pub floor_height: f32,
}

impl Default for FlyCameraBounds {
    fn default() -> Self {
        Self {
            sky_radius: 198.0,
            floor_height: 1.0,
        }
    }
}

impl FlyCameraBounds {
    pub fn within_sky(&self, position: Point3<f32>, delta: Vector3<f32>) -> bool {
        (position + delta).to_vec().magnitude() < self.sky_radius
    }

    pub fn above_floor(&self, position: Point3<f32>, delta: Vector3<f32>) -> bool {
        (position + delta).y > self.floor_height
    }

    pub fn allows(&self, position: Point3<f32>, delta: Vector3<f32>) -> bool {
        self.within_sky(position, delta) && self.above_floor(position, delta)
    }
}

/// Tunables of the free-flying camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCameraSettings {
    /// Degrees of rotation per pixel of mouse travel
    pub sensitivity: f32,
    /// World units per frame
    pub speed: f32,
    /// Vertical field of view in degrees
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Pitch is clamped to plus or minus this many degrees
    pub pitch_limit: f32,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub bounds: FlyCameraBounds,
}

impl Default for FlyCameraSettings {
    fn default() -> Self {
        Self {
            sensitivity: 0.3,
            speed: 0.5,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            pitch_limit: 89.0,
            initial_yaw: -90.0,
            initial_pitch: 0.0,
            bounds: FlyCameraBounds::default(),
        }
    }
}

/// Movement keys held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    position: Point3<f32>,
    front: Vector3<f32>,
    up: Vector3<f32>,
    /// Degrees
    yaw: f32,
    /// Degrees, within the pitch limit
    pitch: f32,
    first_mouse: bool,
    last_x: f32,
    last_y: f32,
    width: f32,
    height: f32,
    pub settings: FlyCameraSettings,
    pub uniform: CameraUniform,
}

impl Camera for FlyCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.projection_matrix() * self.view_matrix()
    }
}

impl FlyCamera {
    pub fn new(width: f32, height: f32, position: Point3<f32>) -> Self {
        Self::with_settings(width, height, position, FlyCameraSettings::default())
    }

    pub fn with_settings(
        width: f32,
        height: f32,
        position: Point3<f32>,
        settings: FlyCameraSettings,
    ) -> Self {
        let mut camera = Self {
            position,
            front: -Vector3::unit_z(),
            up: Vector3::unit_y(),
            yaw: settings.initial_yaw,
            pitch: settings.initial_pitch.clamp(-settings.pitch_limit, settings.pitch_limit),
            first_mouse: true,
            last_x: width / 2.0,
            last_y: height / 2.0,
            width: width.max(1.0),
            height: height.max(1.0),
            settings,
            uniform: CameraUniform::default(),
        };
        camera.update_vectors();
        camera
    }

    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    /// Unit vector pointing to the camera's right
    pub fn right(&self) -> Vector3<f32> {
        self.front.cross(self.up).normalize()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Feeds one raw cursor sample
    ///
    /// The first sample only records the reference position so that acquiring
    /// the cursor does not make the view jump.
    pub fn process_mouse_movement(&mut self, x: f32, y: f32) {
        if self.first_mouse {
            self.last_x = x;
            self.last_y = y;
            self.first_mouse = false;
            return;
        }

        // Screen y grows downwards, pitch grows upwards
        let x_offset = (x - self.last_x) * self.settings.sensitivity;
        let y_offset = (self.last_y - y) * self.settings.sensitivity;
        self.last_x = x;
        self.last_y = y;

        self.add_yaw(x_offset);
        self.add_pitch(y_offset);
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.yaw += delta;
        self.update_vectors();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        let limit = self.settings.pitch_limit;
        self.pitch = (self.pitch + delta).clamp(-limit, limit);
        self.update_vectors();
    }

    /// Applies one frame of keyboard movement
    ///
    /// Every held direction is checked against the position at the start of the
    /// frame, and each delta that passes both bounds is applied.
    pub fn process_keyboard(&mut self, input: MovementInput) {
        let speed = self.settings.speed;
        let right = self.right();
        let candidates = [
            (input.forward, self.front * speed),
            (input.backward, -self.front * speed),
            (input.left, -right * speed),
            (input.right, right * speed),
        ];

        let base = self.position;
        let bounds = self.settings.bounds;
        let accepted = candidates
            .iter()
            .filter(|(held, delta)| *held && bounds.allows(base, *delta))
            .fold(Vector3::zero(), |total, (_, delta)| total + *delta);

        if accepted != Vector3::zero() {
            self.position = base + accepted;
            debug!(
                "camera at {:.3} {:.3} {:.3}",
                self.position.x, self.position.y, self.position.z
            );
        }
    }

    /// Recomputes `front` from yaw and pitch
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (Deg(self.yaw), Deg(self.pitch));
        self.front = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// OpenGL-convention perspective projection
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        perspective(
            Deg(self.settings.fovy),
            self.aspect(),
            self.settings.znear,
            self.settings.zfar,
        )
    }

    /// A zero-sized surface (minimized window) keeps the previous aspect
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width as f32;
        self.height = height as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.position.x, self.position.y, self.position.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}
