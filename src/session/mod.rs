//! Host-facing orchestration: customization state, placement templates, and
//! the session that turns state changes into rebound scenes.

pub mod customizer;
