//! Deterministic procedural terrain synthesis: two fixed generation profiles,
//! sinusoidal height and cloud samplers, and the decorative feature pass.

pub mod features;
pub mod generator;
pub mod height;
pub mod profile;

pub use features::{BlockSetter, place_world_features};
pub use generator::{GEN_CEILING_Y, GEN_FLOOR_Y, column_height, generate_chunk};
pub use profile::{ParseProfileError, ProfileSwitch, WorldProfile};
