//! Dicebox — Draw Engine and Multi-Draw & Selection Layer.
//!
//! Responsible for single-die uniform draws, the exploding-draw mechanic,
//! repeated sampling, and advantage/disadvantage pair selection. Every
//! operation takes the caller's generator by mutable reference and returns
//! plain integers.

pub mod application;
pub mod domain;

pub use domain::draw::{MAX_EXPLOSION_DRAWS, draw, explode, explode_from};
pub use domain::selection::{DrawPair, advantage, draw_many, explode_advantage, explode_many};
pub use domain::validation::{is_valid_die, truncate_die};
