//! Event Handlers
//!
//! - keyboard: User keyboard input, mapped onto `App` commands

pub mod keyboard;

pub use keyboard::handle_key;
