pub mod adaptive;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod weighted_wheel;

pub use adaptive::AdaptiveWeightAdjuster;
pub use error::WheelError;
pub use weighted_wheel::*;
