//! Navigation logic for tripane.
//!
//! [`state::NavigationState`] owns the Location and Selection;
//! [`clipboard::ClipboardState`] owns the pending copy/cut transfer.

pub mod clipboard;
pub mod state;
