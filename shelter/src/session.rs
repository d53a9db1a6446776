//! The interactive command loop.
//!
//! One iteration reads an action, dispatches to the add/fee/exit flow, and
//! reports the outcome. Validation errors are caught inside each flow; any
//! other error escaping an iteration hits the outer boundary, which reports it
//! as unexpected and keeps looping. Only a console failure that cannot be
//! reported ends the session with an error.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::ShelterConfig;
use crate::core::action::{Action, LoopState, after_flow, parse_action, transition};
use crate::core::error::{ADD_NAME_REASON, ShelterError};
use crate::core::messages;
use crate::core::record::{parse_fee, validate_name};
use crate::core::store::RecordStore;
use crate::io::console::Console;

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit`.
    Exited,
    /// Input closed before `exit` was typed.
    EndOfInput,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    store: RecordStore,
    currency_symbol: String,
    state: LoopState,
    input_closed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session whose store is seeded from `config`.
    pub fn new(console: Console<R, W>, config: &ShelterConfig) -> Result<Self> {
        let store = config.seeded_store()?;
        Ok(Self::with_store(
            console,
            store,
            config.currency_symbol.clone(),
        ))
    }

    pub fn with_store(console: Console<R, W>, store: RecordStore, currency_symbol: String) -> Self {
        Self {
            console,
            store,
            currency_symbol,
            state: LoopState::Prompting,
            input_closed: false,
        }
    }

    /// Print the banner and loop until the state machine reaches `Exiting`.
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!(records = self.store.len(), "session started");
        self.console.say(messages::BANNER)?;
        while !self.state.is_terminal() {
            if let Err(err) = self.iteration() {
                if is_console_failure(&err) {
                    return Err(err);
                }
                self.report_unexpected(&err)?;
            }
        }
        let end = if self.input_closed {
            SessionEnd::EndOfInput
        } else {
            SessionEnd::Exited
        };
        info!(?end, records = self.store.len(), "session finished");
        Ok(end)
    }

    fn iteration(&mut self) -> Result<()> {
        let Some(line) = self.console.ask(messages::ACTION_PROMPT)? else {
            self.close_input();
            return Ok(());
        };
        let action = parse_action(&line);
        debug!(?action, "action read");
        self.state = transition(&action);

        match action {
            Action::Blank => {}
            Action::Unknown(_) => self.console.say(messages::INVALID_ACTION)?,
            Action::Exit => self.console.say(messages::FAREWELL)?,
            Action::Add => self.add_flow()?,
            Action::Fee => self.fee_flow()?,
        }
        self.state = after_flow(self.state);
        Ok(())
    }

    /// End of input behaves like an exit without the farewell.
    fn close_input(&mut self) {
        self.input_closed = true;
        self.state = LoopState::Exiting;
    }

    fn add_flow(&mut self) -> Result<()> {
        let Some(name) = self.console.ask(messages::NAME_PROMPT)? else {
            self.close_input();
            return Ok(());
        };
        let Some(fee_raw) = self.console.ask(messages::FEE_PROMPT)? else {
            self.close_input();
            return Ok(());
        };

        // Name problems are reported ahead of fee problems.
        let added = validate_name(&name, ADD_NAME_REASON)
            .and_then(|_| parse_fee(&fee_raw))
            .and_then(|fee| {
                self.store.add_animal(&name, fee)?;
                Ok(fee)
            });
        let line = match added {
            Ok(fee) => {
                debug!(name = name.trim(), fee, "animal added");
                messages::added(&name, &self.currency_symbol, fee)
            }
            Err(err) => {
                debug!(%err, "add rejected");
                messages::add_failed(&err)
            }
        };
        self.console.say(&line)
    }

    fn fee_flow(&mut self) -> Result<()> {
        let Some(name) = self.console.ask(messages::LOOKUP_PROMPT)? else {
            self.close_input();
            return Ok(());
        };

        let line = match self.store.adoption_fee(&name) {
            Ok(fee) => messages::fee_found(&name, &self.currency_symbol, fee),
            Err(err) => {
                debug!(%err, "lookup failed");
                messages::lookup_failed(&err)
            }
        };
        self.console.say(&line)
    }

    fn report_unexpected(&mut self, err: &anyhow::Error) -> Result<()> {
        warn!(error = %format!("{err:#}"), state = ?self.state, "unexpected error in command loop");
        let unexpected = ShelterError::Unexpected(err.root_cause().to_string());
        self.state = LoopState::Prompting;
        self.console.say(&messages::unexpected(&unexpected))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

/// True when the console itself is broken, so nothing more can be reported.
///
/// Undecodable input is not a console failure: the offending line has already
/// been consumed and the loop can carry on.
fn is_console_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() != io::ErrorKind::InvalidData)
}

/// Run a session on the process's stdin and stdout.
pub fn run_stdio(config: &ShelterConfig) -> Result<SessionEnd> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(console, config)?;
    session.run()
}
