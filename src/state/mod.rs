//! Application state module

mod app_state;
mod carousel;
mod debounce;
mod forms;
mod navigation;
mod viewport;

pub use app_state::*;
pub use carousel::*;
pub use debounce::*;
pub use forms::*;
pub use navigation::*;
pub use viewport::*;
