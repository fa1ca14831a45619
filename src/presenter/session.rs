use crate::{Error, Result};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LockdownRequested,
}

/// Locked is terminal: no event leaves it.
#[derive(Debug)]
pub struct SessionStateMachine {
    state: SessionState,
}

impl SessionStateMachine {
    pub fn new() -> Self {
        debug!("Creating session in state {:?}", SessionState::Active);
        Self {
            state: SessionState::Active,
        }
    }

    pub fn current_state(&self) -> SessionState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == SessionState::Locked
    }

    pub fn transition(&mut self, event: SessionEvent) -> Result<SessionState> {
        let new_state = match (self.state, event) {
            (SessionState::Active, SessionEvent::LockdownRequested) => SessionState::Locked,
            (current, requested) => {
                warn!(
                    "Invalid session transition from {:?} with event {:?}",
                    current, requested
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", current),
                    requested: format!("{:?}", requested),
                });
            }
        };

        info!(
            "Session state transition: {:?} -> {:?} (event: {:?})",
            self.state, new_state, event
        );
        self.state = new_state;
        Ok(new_state)
    }
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
