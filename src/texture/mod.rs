//! Texture synthesis: one immutable bitmap per customization state.

pub mod synth;
