//! Test-only helpers for driving sessions against in-memory consoles.

use std::io::Cursor;

use anyhow::Result;

use crate::config::ShelterConfig;
use crate::core::store::RecordStore;
use crate::io::console::Console;
use crate::session::{Session, SessionEnd};

/// Configuration shipped with the binary.
pub fn builtin_config() -> ShelterConfig {
    ShelterConfig::builtin().expect("built-in config parses")
}

/// Store seeded from the built-in configuration.
pub fn seeded_store() -> RecordStore {
    builtin_config()
        .seeded_store()
        .expect("built-in config seeds a valid store")
}

/// Everything observable after a scripted session finishes.
#[derive(Debug)]
pub struct ScriptOutcome {
    pub end: Result<SessionEnd>,
    /// Prompts and messages exactly as written to the console.
    pub transcript: String,
    /// Store contents when the session stopped.
    pub store: RecordStore,
}

/// Run a full session with the built-in configuration, feeding `input` as stdin.
pub fn run_script(input: &[u8]) -> ScriptOutcome {
    run_script_with_config(input, &builtin_config())
}

/// Run a full session seeded and formatted by `config`, feeding `input` as stdin.
pub fn run_script_with_config(input: &[u8], config: &ShelterConfig) -> ScriptOutcome {
    let console = Console::new(Cursor::new(input.to_vec()), Vec::new());
    let mut session = Session::new(console, config).expect("session from config");
    let end = session.run();
    let store = session.store().clone();
    let (_, output) = session.into_console().into_parts();
    ScriptOutcome {
        end,
        transcript: String::from_utf8_lossy(&output).into_owned(),
        store,
    }
}
