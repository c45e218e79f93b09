use thiserror::Error;

/// Shown when the service rejects a lead without saying why.
pub const REJECTED_FALLBACK: &str = "Что-то пошло не так";

/// Shown whenever the request itself fails.
pub const NETWORK_FALLBACK: &str = "Ошибка сети. Попробуйте еще раз.";

/// Why a lead submission ended in `Failed`.
///
/// Both kinds render the same way in the form; the split only exists so
/// callers (and tests) can tell a user-correctable rejection from a
/// connectivity problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{message}")]
    ServiceRejected { message: String },
    #[error("{message}")]
    TransportFailure { message: String },
}

impl SubmissionError {
    pub fn rejected(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
        SubmissionError::ServiceRejected { message }
    }

    pub fn network() -> Self {
        SubmissionError::TransportFailure {
            message: NETWORK_FALLBACK.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionError::ServiceRejected { message }
            | SubmissionError::TransportFailure { message } => message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Lifecycle of one lead-capture attempt. Only `Failed` carries an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmissionError),
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::Submitting => SubmissionPhase::Submitting,
            SubmissionState::Succeeded => SubmissionPhase::Succeeded,
            SubmissionState::Failed(_) => SubmissionPhase::Failed,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(err) => Some(err.message()),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Enter `Submitting`. Returns false, leaving the state alone, when a
    /// submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    /// Record how the in-flight submission ended. Ignored unless
    /// `Submitting`, so a stray late result can't clobber a reset form.
    pub fn resolve(&mut self, outcome: Result<(), SubmissionError>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        *self = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(err) => SubmissionState::Failed(err),
        };
        true
    }

    /// "Send another request": only meaningful after a success.
    pub fn reset(&mut self) -> bool {
        if !matches!(self, SubmissionState::Succeeded) {
            return false;
        }
        *self = SubmissionState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_without_error() {
        let state = SubmissionState::default();
        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn begin_is_not_reentrant() {
        let mut state = SubmissionState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn begin_from_failed_clears_error() {
        let mut state = SubmissionState::Failed(SubmissionError::network());
        assert!(state.begin());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn resolve_outside_submitting_is_ignored() {
        let mut state = SubmissionState::Idle;
        assert!(!state.resolve(Err(SubmissionError::network())));
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn reset_only_from_succeeded() {
        let mut failed = SubmissionState::Failed(SubmissionError::rejected(None));
        assert!(!failed.reset());
        assert_eq!(failed.phase(), SubmissionPhase::Failed);

        let mut submitting = SubmissionState::Submitting;
        assert!(!submitting.reset());

        let mut done = SubmissionState::Succeeded;
        assert!(done.reset());
        assert_eq!(done, SubmissionState::default());
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        assert_eq!(SubmissionError::rejected(None).message(), REJECTED_FALLBACK);
        assert_eq!(
            SubmissionError::rejected(Some(String::new())).message(),
            REJECTED_FALLBACK
        );
        assert_eq!(
            SubmissionError::rejected(Some("Bad key".into())).to_string(),
            "Bad key"
        );
    }
}
