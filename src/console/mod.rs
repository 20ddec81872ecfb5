//! Text-menu front-end.
//!
//! The console validates and trims every value before handing it to the
//! registry, and reports registry failures as messages instead of aborting
//! the session.

mod input;
mod menu;

pub use input::Prompter;
pub use menu::{Command, Console};
