//! API route handlers.

mod announcements;
mod companies;

pub use announcements::*;
pub use companies::*;
