//! Stable exit codes for the shelter binary.

/// Session ended by `exit` or by end of input.
pub const OK: i32 = 0;
/// Built-in configuration was invalid or the console failed mid-session.
pub const FAILED: i32 = 1;
