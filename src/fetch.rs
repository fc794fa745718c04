//! Fetch State
//!
//! `Idle -> Loading -> Success | Failure` for one-shot remote loads.
//! Out-of-order transitions are ignored.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    /// Display string of the error that ended the load
    Failure(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    /// `Idle -> Loading`. Returns `false` if a load was already started.
    pub fn start(&mut self) -> bool {
        if !matches!(self, Self::Idle) {
            return false;
        }
        *self = Self::Loading;
        true
    }

    /// `Loading -> Success | Failure`. Ignored in any other state.
    pub fn finish<E: Display>(&mut self, result: Result<T, E>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Failure(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut state = FetchState::<Vec<u32>>::default();
        assert_eq!(state, FetchState::Idle);

        assert!(state.start());
        assert!(state.is_loading());

        assert!(state.finish(Ok::<_, String>(vec![1, 2, 3])));
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_path() {
        let mut state = FetchState::<Vec<u32>>::default();
        state.start();

        assert!(state.finish(Err::<Vec<u32>, _>("server responded with status 500")));
        assert_eq!(state.error(), Some("server responded with status 500"));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_start_only_once() {
        let mut state = FetchState::<()>::default();
        assert!(state.start());
        assert!(!state.start());

        state.finish(Ok::<_, String>(()));
        assert!(!state.start());
        assert_eq!(state, FetchState::Success(()));
    }

    #[test]
    fn test_finish_without_start_is_ignored() {
        let mut state = FetchState::<u32>::default();
        assert!(!state.finish(Ok::<_, String>(1)));
        assert_eq!(state, FetchState::Idle);
    }

    #[test]
    fn test_no_second_resolution() {
        let mut state = FetchState::<u32>::default();
        state.start();
        state.finish(Ok::<_, String>(1));

        assert!(!state.finish(Err::<u32, _>("late")));
        assert_eq!(state.data(), Some(&1));
    }
}
