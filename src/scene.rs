use crate::constants::*;
use glam::{Mat3, Mat4, Vec3};
use rand::Rng;

/// SoA particle storage: immutable after generation, uploaded to the GPU once.
/// Per-frame floating motion happens in the vertex shader, not here.
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
}

impl ParticleField {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate `count` particles distributed uniformly over a spherical shell.
///
/// Radius is uniform in [PARTICLE_RADIUS_MIN, +SPAN); theta uniform in
/// [0, 2π); phi = acos(uniform(-1, 1)) so the shell has no polar clustering.
/// Colors are a discrete pick from the palette, sizes uniform in [0.5, 2.5).
pub fn generate_particles(rng: &mut impl Rng, count: usize) -> ParticleField {
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    let mut sizes = Vec::with_capacity(count);
    for _ in 0..count {
        let radius = PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN;
        let theta = rng.gen::<f32>() * std::f32::consts::TAU;
        let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();
        positions.push(Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        ));
        // 33/33/34 split across the three palette entries
        let pick = rng.gen::<f32>();
        let color = if pick < 0.33 {
            PALETTE[0]
        } else if pick < 0.66 {
            PALETTE[1]
        } else {
            PALETTE[2]
        };
        colors.push(color);
        sizes.push(PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN);
    }
    ParticleField {
        positions,
        colors,
        sizes,
    }
}

/// A rigid line segment between two random endpoints. Never repositioned,
/// only rotated as a whole by the per-line spin tracked in `SceneState`.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionLine {
    pub a: Vec3,
    pub b: Vec3,
}

fn endpoint_coord(rng: &mut impl Rng) -> f32 {
    (rng.gen::<f32>() * 2.0 - 1.0) * LINE_EXTENT
}

pub fn generate_lines(rng: &mut impl Rng, count: usize) -> Vec<ConnectionLine> {
    (0..count)
        .map(|_| ConnectionLine {
            a: Vec3::new(
                endpoint_coord(rng),
                endpoint_coord(rng),
                endpoint_coord(rng),
            ),
            b: Vec3::new(
                endpoint_coord(rng),
                endpoint_coord(rng),
                endpoint_coord(rng),
            ),
        })
        .collect()
}

/// Yaw direction alternates with index parity; roll is shared by all lines.
#[inline]
pub fn line_yaw_direction(index: usize) -> f32 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Pointer offset in scene units: client px from the viewport center / 100.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

#[inline]
pub fn pointer_offset(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> PointerOffset {
    PointerOffset {
        x: (client_x - viewport_w / 2.0) / POINTER_DIVISOR,
        y: (client_y - viewport_h / 2.0) / POINTER_DIVISOR,
    }
}

/// Field-scale pulse, sequenced inside the tick so there is no second timer
/// racing the render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pulse {
    Idle,
    Active { until: u64 },
}

/// Per-line accumulated rotation.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineSpin {
    pub yaw: f32,
    pub roll: f32,
}

/// All mutable scene state, owned by the frame loop. UI flags live elsewhere;
/// nothing outside the tick writes these fields.
pub struct SceneState {
    pub time: u64,
    pub field_yaw: f32,
    pub field_pitch: f32,
    pub pulse: Pulse,
    pub line_spins: Vec<LineSpin>,
    pub camera: Vec3,
}

impl SceneState {
    pub fn new(line_count: usize) -> Self {
        Self {
            time: 0,
            field_yaw: 0.0,
            field_pitch: 0.0,
            pulse: Pulse::Idle,
            line_spins: vec![LineSpin::default(); line_count],
            camera: Vec3::new(0.0, 0.0, CAMERA_Z),
        }
    }

    /// Advance one frame: time, field and line rotations, pulse, camera.
    pub fn tick(&mut self, pointer: PointerOffset, rng: &mut impl Rng) {
        self.time += 1;

        self.field_yaw += FIELD_YAW_PER_TICK;
        self.field_pitch += FIELD_PITCH_PER_TICK;

        if let Pulse::Active { until } = self.pulse {
            if self.time >= until {
                self.pulse = Pulse::Idle;
            }
        }
        if self.pulse == Pulse::Idle
            && self.time % PULSE_INTERVAL_TICKS == 0
            && rng.gen_bool(PULSE_PROBABILITY)
        {
            self.pulse = Pulse::Active {
                until: self.time + PULSE_DURATION_TICKS,
            };
        }

        for (i, spin) in self.line_spins.iter_mut().enumerate() {
            spin.yaw += LINE_YAW_PER_TICK * line_yaw_direction(i);
            spin.roll += LINE_ROLL_PER_TICK;
        }

        // Exponential smoothing toward the pointer-driven target; z is fixed.
        self.camera.x +=
            (pointer.x * POINTER_PARALLAX_SCALE - self.camera.x) * CAMERA_SMOOTHING;
        self.camera.y +=
            (-pointer.y * POINTER_PARALLAX_SCALE - self.camera.y) * CAMERA_SMOOTHING;
    }

    pub fn field_scale(&self) -> f32 {
        match self.pulse {
            Pulse::Active { .. } => PULSE_SCALE,
            Pulse::Idle => 1.0,
        }
    }

    /// Model matrix for the particle field: pitch/yaw rotation plus the pulse scale.
    pub fn field_model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.field_pitch)
            * Mat4::from_rotation_y(self.field_yaw)
            * Mat4::from_scale(Vec3::splat(self.field_scale()))
    }

    /// Rotate a line's endpoints by its accumulated spin.
    pub fn rotated_endpoints(&self, line: &ConnectionLine, index: usize) -> (Vec3, Vec3) {
        let spin = self.line_spins[index];
        let rot = Mat3::from_rotation_z(spin.roll) * Mat3::from_rotation_y(spin.yaw);
        (rot * line.a, rot * line.b)
    }
}

#[inline]
pub fn aspect(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

pub fn projection(width: u32, height: u32) -> Mat4 {
    Mat4::perspective_rh(
        CAMERA_FOV_DEG.to_radians(),
        aspect(width, height),
        CAMERA_NEAR,
        CAMERA_FAR,
    )
}

/// Camera always looks at the world origin.
pub fn view(camera: Vec3) -> Mat4 {
    Mat4::look_at_rh(camera, Vec3::ZERO, Vec3::Y)
}
