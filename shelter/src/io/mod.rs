//! I/O helpers for the shelter session.

pub mod console;
