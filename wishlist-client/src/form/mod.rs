//! Form-sync controller
//!
//! Keeps a single wishlist form in step with the remote resource. Every
//! user action issues one request and folds the outcome back into the form
//! state; rendering surfaces read that state one way and never get written
//! to directly.

mod controller;
mod render;
mod state;

pub use controller::FormController;
pub use render::{RESULT_HEADER, render_table, result_rows};
pub use state::FormState;
