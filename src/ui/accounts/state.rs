// SPDX-License-Identifier: MPL-2.0
//! Request lifecycle of a single view mount.
//!
//! `Idle → Loading → (Success | Error)`. The terminal states never move
//! back to `Loading`; a fresh mount creates a fresh machine.

use crate::error::FetchError;

/// Lifecycle of one fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Request completed with data.
    Success(T),
    /// Request failed; nothing from the response is kept.
    Error(FetchError),
}

/// Reason a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// `begin` was called on a machine that already left `Idle`.
    AlreadyStarted,
    /// `resolve` was called while not `Loading`.
    NotLoading,
}

impl<T> FetchState<T> {
    /// `Idle → Loading`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyStarted`] from any other state.
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        match self {
            FetchState::Idle => {
                *self = FetchState::Loading;
                Ok(())
            }
            _ => Err(TransitionError::AlreadyStarted),
        }
    }

    /// `Loading → Success | Error`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotLoading`] unless a request is in flight.
    pub fn resolve(&mut self, result: Result<T, FetchError>) -> Result<(), TransitionError> {
        if !self.is_loading() {
            return Err(TransitionError::NotLoading);
        }
        *self = match result {
            Ok(data) => FetchState::Success(data),
            Err(error) => FetchState::Error(error),
        };
        Ok(())
    }

    /// Whether the machine is waiting on a response.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Whether the machine reached `Success` or `Error`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Error(_))
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state: FetchState<u8> = FetchState::default();
        assert_eq!(state, FetchState::Idle);
        assert!(!state.is_loading());
        assert!(!state.is_terminal());
    }

    #[test]
    fn begin_moves_to_loading_once() {
        let mut state: FetchState<u8> = FetchState::default();
        assert_eq!(state.begin(), Ok(()));
        assert!(state.is_loading());
        assert_eq!(state.begin(), Err(TransitionError::AlreadyStarted));
    }

    #[test]
    fn resolve_success() {
        let mut state = FetchState::default();
        state.begin().unwrap();
        state.resolve(Ok(7_u8)).unwrap();
        assert_eq!(state.data(), Some(&7));
        assert!(state.is_terminal());
    }

    #[test]
    fn resolve_error() {
        let mut state: FetchState<u8> = FetchState::default();
        state.begin().unwrap();
        state.resolve(Err(FetchError::Timeout)).unwrap();
        assert_eq!(state.error(), Some(&FetchError::Timeout));
        assert!(state.data().is_none());
    }

    #[test]
    fn terminal_states_are_final() {
        let mut state = FetchState::default();
        state.begin().unwrap();
        state.resolve(Ok(1_u8)).unwrap();

        assert_eq!(state.resolve(Ok(2)), Err(TransitionError::NotLoading));
        assert_eq!(state.begin(), Err(TransitionError::AlreadyStarted));
        assert_eq!(state.data(), Some(&1));
    }

    #[test]
    fn resolve_without_begin_is_refused() {
        let mut state: FetchState<u8> = FetchState::default();
        assert_eq!(state.resolve(Ok(1)), Err(TransitionError::NotLoading));
        assert_eq!(state, FetchState::Idle);
    }
}
