//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers take `&mut App` and translate terminal events into App methods,
//! which in turn dispatch reducer actions.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
