use log::{info, warn};

use crate::lead::form::{LeadField, LeadFormInput};
use crate::lead::service::{AccessKey, FormServiceResponse, FormTransport, LeadRequest, TransportError};
use crate::lead::state::{SubmissionError, SubmissionState};

/// Why `start` sent nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartBlocked {
    AlreadySubmitting,
    /// A required field is missing or malformed. The state is left alone.
    InvalidField { field: LeadField, hint: String },
}

/// The contact form's data and the state of its current submission.
///
/// The network call sits between `start` and `finish` so the UI can drive it
/// through its own message loop; `submit` does all three in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionWorkflow {
    pub input: LeadFormInput,
    state: SubmissionState,
}

impl SubmissionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Enter `Submitting` and build the request to send.
    pub fn start(&mut self, key: &AccessKey) -> Result<LeadRequest, StartBlocked> {
        if self.state.is_submitting() {
            warn!("Ignoring submit while a lead is already being sent");
            return Err(StartBlocked::AlreadySubmitting);
        }
        if let Err((field, hint)) = self.input.check() {
            info!("Lead form incomplete: {}", field.wire_name());
            return Err(StartBlocked::InvalidField { field, hint });
        }
        if !self.state.begin() {
            return Err(StartBlocked::AlreadySubmitting);
        }
        info!("Submitting lead form");
        Ok(LeadRequest::new(&self.input, key))
    }

    /// Apply the transport's answer to the in-flight submission.
    pub fn finish(&mut self, outcome: Result<FormServiceResponse, TransportError>) {
        let outcome = match outcome {
            Ok(response) => response.into_outcome(),
            Err(e) => {
                warn!("Lead submission failed in transport: {}", e);
                Err(SubmissionError::network())
            }
        };

        let accepted = outcome.is_ok();
        if !self.state.resolve(outcome) {
            return;
        }

        if accepted {
            info!("Lead accepted by form service");
            self.input.clear();
        } else if let Some(message) = self.state.error_message() {
            info!("Lead rejected: {}", message);
        }
    }

    /// One full attempt: exactly one request unless blocked by `start`.
    pub async fn submit<T: FormTransport + ?Sized>(
        &mut self,
        transport: &T,
        key: &AccessKey,
    ) -> Result<(), StartBlocked> {
        let request = self.start(key)?;
        let outcome = transport.send(&request).await;
        self.finish(outcome);
        Ok(())
    }

    pub fn reset(&mut self) {
        if self.state.reset() {
            info!("Lead form reset for another request");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::lead::state::{SubmissionPhase, NETWORK_FALLBACK, REJECTED_FALLBACK};

    /// Answers every request with a canned result and remembers what it got.
    struct ScriptedTransport {
        reply: fn() -> Result<FormServiceResponse, TransportError>,
        calls: Cell<usize>,
        last: RefCell<Option<LeadRequest>>,
    }

    impl ScriptedTransport {
        fn new(reply: fn() -> Result<FormServiceResponse, TransportError>) -> Self {
            ScriptedTransport {
                reply,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl FormTransport for ScriptedTransport {
        async fn send(&self, request: &LeadRequest) -> Result<FormServiceResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(request.clone());
            (self.reply)()
        }
    }

    fn ann() -> SubmissionWorkflow {
        let mut workflow = SubmissionWorkflow::new();
        workflow.input.name = "Ann".into();
        workflow.input.email = "a@b.com".into();
        workflow
    }

    fn key() -> AccessKey {
        AccessKey::new("test-key")
    }

    #[test]
    fn starts_idle() {
        let workflow = SubmissionWorkflow::new();
        assert_eq!(workflow.state().phase(), SubmissionPhase::Idle);
        assert_eq!(workflow.state().error_message(), None);
    }

    #[test]
    fn success_clears_the_form() {
        let transport = ScriptedTransport::new(|| Ok(FormServiceResponse::accepted()));
        let mut workflow = ann();

        block_on(workflow.submit(&transport, &key())).unwrap();

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(workflow.state(), &SubmissionState::Succeeded);
        assert!(workflow.input.is_empty());

        let sent = transport.last.borrow().clone().unwrap();
        assert_eq!(sent.get("name"), Some("Ann"));
        assert_eq!(sent.get("access_key"), Some("test-key"));
    }

    #[test]
    fn rejection_surfaces_server_message() {
        let transport =
            ScriptedTransport::new(|| Ok(FormServiceResponse::rejected(Some("Bad key"))));
        let mut workflow = ann();

        block_on(workflow.submit(&transport, &key())).unwrap();

        assert_eq!(workflow.state().phase(), SubmissionPhase::Failed);
        assert_eq!(workflow.state().error_message(), Some("Bad key"));
        assert!(matches!(
            workflow.state(),
            SubmissionState::Failed(SubmissionError::ServiceRejected { .. })
        ));
        // the visitor can fix and resend, so keep what they typed
        assert_eq!(workflow.input.name, "Ann");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let transport = ScriptedTransport::new(|| Ok(FormServiceResponse::rejected(None)));
        let mut workflow = ann();

        block_on(workflow.submit(&transport, &key())).unwrap();

        assert_eq!(workflow.state().error_message(), Some(REJECTED_FALLBACK));
    }

    #[test]
    fn transport_failure_uses_network_fallback() {
        let transport =
            ScriptedTransport::new(|| Err(TransportError::Network("offline".into())));
        let mut workflow = ann();

        block_on(workflow.submit(&transport, &key())).unwrap();

        assert_eq!(workflow.state().error_message(), Some(NETWORK_FALLBACK));
        assert!(matches!(
            workflow.state(),
            SubmissionState::Failed(SubmissionError::TransportFailure { .. })
        ));
    }

    #[test]
    fn malformed_response_uses_network_fallback() {
        let transport =
            ScriptedTransport::new(|| Err(TransportError::Malformed("expected value".into())));
        let mut workflow = ann();

        block_on(workflow.submit(&transport, &key())).unwrap();

        assert_eq!(workflow.state().error_message(), Some(NETWORK_FALLBACK));
    }

    #[test]
    fn second_submit_while_in_flight_sends_nothing() {
        let transport = ScriptedTransport::new(|| Ok(FormServiceResponse::accepted()));
        let mut workflow = ann();
        assert!(workflow.start(&key()).is_ok());
        let before = workflow.clone();

        let blocked = block_on(workflow.submit(&transport, &key()));

        assert_eq!(blocked, Err(StartBlocked::AlreadySubmitting));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(workflow, before);
    }

    #[test]
    fn blank_name_sends_nothing_and_stays_idle() {
        let transport = ScriptedTransport::new(|| Ok(FormServiceResponse::accepted()));
        let mut workflow = ann();
        workflow.input.name = "  ".into();

        let blocked = block_on(workflow.submit(&transport, &key()));

        assert_eq!(
            blocked,
            Err(StartBlocked::InvalidField {
                field: LeadField::Name,
                hint: "Укажите имя".into(),
            })
        );
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(workflow.state(), &SubmissionState::Idle);
        assert_eq!(workflow.input.email, "a@b.com");
    }

    #[test]
    fn invalid_email_after_failure_keeps_the_error() {
        let transport =
            ScriptedTransport::new(|| Err(TransportError::Network("offline".into())));
        let mut workflow = ann();
        block_on(workflow.submit(&transport, &key())).unwrap();
        workflow.input.email = "a-at-b.com".into();

        let blocked = block_on(workflow.submit(&transport, &key()));

        assert!(matches!(
            blocked,
            Err(StartBlocked::InvalidField { field: LeadField::Email, .. })
        ));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(workflow.state().error_message(), Some(NETWORK_FALLBACK));
    }

    #[test]
    fn reset_after_success_returns_to_initial_state() {
        let transport = ScriptedTransport::new(|| Ok(FormServiceResponse::accepted()));
        let mut workflow = ann();
        block_on(workflow.submit(&transport, &key())).unwrap();

        workflow.reset();

        assert_eq!(workflow, SubmissionWorkflow::new());
    }

    #[test]
    fn retry_after_failure_sends_again() {
        let transport =
            ScriptedTransport::new(|| Err(TransportError::Network("offline".into())));
        let mut workflow = ann();

        block_on(workflow.submit(&transport, &key())).unwrap();
        block_on(workflow.submit(&transport, &key())).unwrap();

        assert_eq!(transport.calls.get(), 2);
        assert_eq!(workflow.state().phase(), SubmissionPhase::Failed);
    }

    #[test]
    fn result_without_pending_submit_is_ignored() {
        let mut workflow = ann();
        workflow.finish(Ok(FormServiceResponse::accepted()));
        assert_eq!(workflow.state(), &SubmissionState::Idle);
        assert_eq!(workflow.input.name, "Ann");
    }
}
