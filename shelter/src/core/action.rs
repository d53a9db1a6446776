//! Command-loop actions and state transitions.

/// What the user asked for at the action prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Empty or whitespace-only input.
    Blank,
    Add,
    Fee,
    Exit,
    /// Anything else, kept as typed (trimmed) for diagnostics.
    Unknown(String),
}

/// Loop states. `Exiting` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Prompting,
    Adding,
    Querying,
    Exiting,
}

impl LoopState {
    pub fn is_terminal(self) -> bool {
        self == LoopState::Exiting
    }
}

/// Classify a raw action line. Matching ignores case and surrounding whitespace.
pub fn parse_action(raw: &str) -> Action {
    let normalized = raw.trim().to_lowercase();
    match normalized.as_str() {
        "" => Action::Blank,
        "add" => Action::Add,
        "fee" => Action::Fee,
        "exit" => Action::Exit,
        _ => Action::Unknown(raw.trim().to_string()),
    }
}

/// State entered when `action` is read while prompting.
///
/// `Adding` and `Querying` always fall back to `Prompting` once their flow
/// finishes, whether it succeeded or failed; see [`after_flow`].
pub fn transition(action: &Action) -> LoopState {
    match action {
        Action::Add => LoopState::Adding,
        Action::Fee => LoopState::Querying,
        Action::Exit => LoopState::Exiting,
        Action::Blank | Action::Unknown(_) => LoopState::Prompting,
    }
}

/// State after an add or fee flow completes.
pub fn after_flow(state: LoopState) -> LoopState {
    match state {
        LoopState::Exiting => LoopState::Exiting,
        LoopState::Prompting | LoopState::Adding | LoopState::Querying => LoopState::Prompting,
    }
}
