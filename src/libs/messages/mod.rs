//! User-facing message catalogue and output macros.
//!
//! Text is defined once in [`Message`]'s `Display` implementation; the
//! `msg_*!` macros in [`macros`] decide whether it goes to the console or to
//! `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
