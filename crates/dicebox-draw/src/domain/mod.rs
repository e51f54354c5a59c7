//! Domain logic for drawing dice.

pub mod draw;
pub mod requests;
pub mod selection;
pub mod validation;
