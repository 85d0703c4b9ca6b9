//! Headless editor core (state/action/effect).

pub mod editor;
pub mod effect;
pub mod services;

pub use editor::{EditorAction, EditorState, SourceState};
pub use effect::Effect;
