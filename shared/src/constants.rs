// Weight validation
pub const WEIGHT_TOTAL: f64 = 100.0;
pub const WEIGHT_TOLERANCE: f64 = 0.01;

// Spin timing and rotation
pub const SPIN_DURATION_MS: u32 = 5000;       // Delay between starting a spin and resolving it
pub const MIN_EXTRA_ROTATION: f64 = 1800.0;   // 5 full turns
pub const MAX_EXTRA_ROTATION: f64 = 2160.0;   // Exclusive, up to one more turn
pub const POINTER_OFFSET_DEG: f64 = 140.0;    // Pointer rest position relative to the wheel's zero angle
pub const FULL_TURN_DEG: f64 = 360.0;

// Adaptive rebalancing
pub const REPEAT_KEEP_FACTOR: f64 = 0.7;      // Share of baseline kept by the last selected item
