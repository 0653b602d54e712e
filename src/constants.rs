/// Scene and interaction tuning constants.
///
/// These express intended behavior (counts, ranges, per-tick increments)
/// and keep magic numbers out of the code.
// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_RADIUS_MIN: f32 = 30.0; // inner shell radius
pub const PARTICLE_RADIUS_SPAN: f32 = 20.0; // shell thickness
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;

// Palette: teal, warm gold, off-white (0x4d9f8d, 0xf0b88b, 0xe0e0e0)
pub const PALETTE: [[f32; 3]; 3] = [
    [0.302, 0.624, 0.553],
    [0.941, 0.722, 0.545],
    [0.878, 0.878, 0.878],
];

// Connection lines
pub const LINE_COUNT: usize = 50;
pub const LINE_EXTENT: f32 = 30.0; // endpoint coords in [-LINE_EXTENT, LINE_EXTENT)
pub const LINE_COLOR: [f32; 3] = [0.302, 0.624, 0.553];
pub const LINE_OPACITY: f32 = 0.2;

// Per-tick rotation increments (radians)
pub const FIELD_YAW_PER_TICK: f32 = 0.0005;
pub const FIELD_PITCH_PER_TICK: f32 = 0.0002;
pub const LINE_YAW_PER_TICK: f32 = 0.001; // sign alternates with line index
pub const LINE_ROLL_PER_TICK: f32 = 0.0005;

// Consciousness pulse: rolled every interval, active for the duration
pub const PULSE_INTERVAL_TICKS: u64 = 3000;
pub const PULSE_DURATION_TICKS: u64 = 500;
pub const PULSE_PROBABILITY: f64 = 0.3;
pub const PULSE_SCALE: f32 = 1.1;

// Camera
pub const CAMERA_Z: f32 = 50.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_SMOOTHING: f32 = 0.05; // per-tick lerp weight toward target
pub const POINTER_PARALLAX_SCALE: f32 = 0.05; // pointer offset -> camera target
pub const POINTER_DIVISOR: f32 = 100.0; // client px from viewport center -> offset units

// Atmosphere
pub const FOG_DENSITY: f32 = 0.0008; // exp2 falloff
pub const CLEAR_COLOR: [f64; 3] = [0.039, 0.059, 0.094]; // page background 0x0a0f18

// Voiceover simulation
pub const TYPEWRITER_DELAY_MS: i32 = 50;
pub const LISTEN_DURATION_MS: i32 = 15_000;
pub const LISTEN_LABEL_ACTIVE: &str = "Listening...";
pub const LISTEN_LABEL_REPLAY: &str = "Listen Again";

// Email modal
pub const CONFIRM_DISMISS_MS: i32 = 3000;
pub const JOIN_ENDPOINT: &str = "/api/join";
pub const CONFIRMATION_TEXT: &str = "Welcome home. We are connected.";

// Scroll reveals and parallax
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_STAGGER_MS: i32 = 100; // per-child delay within a section
pub const PARALLAX_FACTOR: f64 = 0.5; // hero offset per scrolled px
