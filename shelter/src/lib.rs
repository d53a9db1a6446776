//! Interactive record-keeper for pet adoption fees.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (record validation, the record
//!   store, action parsing, user-facing text). No I/O, fully testable in
//!   isolation.
//! - **[`io`]**: Side-effecting console access, generic over reader/writer so
//!   tests can substitute buffers.
//!
//! [`session`] drives the command loop on top of both, seeded from the
//! built-in [`config`].

pub mod config;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
