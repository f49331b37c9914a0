//! Domain layer
//!
//! Contains the post model and the ports the renderer depends on.
//! - `entities`: Domain models representing the fetched content
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
