pub mod use_wheel;

pub use use_wheel::*;
