//! Application-level handlers that turn roll requests into outcomes.

pub mod roll_handlers;
