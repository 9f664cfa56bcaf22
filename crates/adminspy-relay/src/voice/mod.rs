//! Per-participant voice routing.
//!
//! Privileged participants start out hearing every team; everybody else
//! hears only teammates. Privileged participants can flip their own mode
//! with the toggle command. Every change is pushed straight to the host's
//! voice sink, which is the only place the mode has any effect.

mod router;

#[cfg(test)]
mod tests;

pub use router::{VoiceRouter, VoiceTransition};
