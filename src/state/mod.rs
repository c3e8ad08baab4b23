//! Application state module

mod focus;
mod forms;
mod toast;

pub use focus::*;
pub use forms::*;
pub use toast::*;
