//! Application state module

mod app_state;
mod autosave;
mod draft;
mod field;
mod toasts;

pub use app_state::*;
pub use autosave::*;
pub use draft::*;
pub use field::*;
pub use toasts::*;
