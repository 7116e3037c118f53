use log::debug;

use super::attempt::{FormAttempt, FormStatus, Resolution, SendTicket};
use super::fields::LeadFields;
use super::sender::LeadSender;

/// Hands a validated ticket to the sender and pairs the outcome with the
/// ticket id so the attempt can tell it apart from superseded sends.
pub async fn deliver<F: LeadFields>(sender: &dyn LeadSender, ticket: SendTicket<F>) -> Resolution {
    let submission = ticket.fields.into_submission();
    debug!("Delivering {} submission {}", submission.kind(), ticket.id);
    let outcome = sender.send(submission).await;
    Resolution {
        id: ticket.id,
        outcome,
    }
}

/// Runs one submit trigger to completion: validate, send, resolve.
pub async fn run_attempt<F: LeadFields>(
    attempt: &mut FormAttempt<F>,
    sender: &dyn LeadSender,
) -> FormStatus {
    if let Some(ticket) = attempt.submit() {
        let resolution = deliver(sender, ticket).await;
        attempt.resolve(resolution);
    }
    attempt.status().clone()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::lead_capture::error::{FormError, SubmissionError};
    use crate::lead_capture::fields::{
        ContactField, ContactFields, EarlyAccessField, EarlyAccessFields, LeadSubmission,
    };
    use crate::lead_capture::sender::MockLeadSender;

    #[derive(Default)]
    struct RecordingSender {
        sent: RefCell<Vec<LeadSubmission>>,
    }

    #[async_trait(?Send)]
    impl LeadSender for RecordingSender {
        async fn send(&self, submission: LeadSubmission) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(submission);
            Ok(())
        }
    }

    #[test]
    fn early_access_success_clears_email() {
        let sender = RecordingSender::default();
        let mut attempt = FormAttempt::<EarlyAccessFields>::default();
        attempt.edit(EarlyAccessField::Email, "user@example.com".into());

        let status = block_on(run_attempt(&mut attempt, &sender));

        assert_eq!(status, FormStatus::Succeeded);
        assert_eq!(attempt.fields().email, "");
        assert_eq!(attempt.error_message(), None);
        assert_eq!(
            sender.sent.borrow().as_slice(),
            &[LeadSubmission::EarlyAccess(EarlyAccessFields {
                email: "user@example.com".into()
            })]
        );
    }

    #[test]
    fn invalid_email_never_reaches_sender() {
        let mut sender = MockLeadSender::new();
        sender.expect_send().never();
        let mut attempt = FormAttempt::<EarlyAccessFields>::default();
        attempt.edit(EarlyAccessField::Email, "bad-email".into());

        let status = block_on(run_attempt(&mut attempt, &sender));

        assert_eq!(status, FormStatus::Failed(FormError::InvalidEmail));
        assert_eq!(attempt.fields().email, "bad-email");
    }

    #[test]
    fn contact_success_resets_all_fields() {
        let sender = RecordingSender::default();
        let mut attempt = FormAttempt::<ContactFields>::default();
        attempt.edit(ContactField::Name, "Jane".into());
        attempt.edit(ContactField::Email, "jane@x.com".into());
        attempt.edit(ContactField::Message, "hello".into());

        let status = block_on(run_attempt(&mut attempt, &sender));

        assert_eq!(status, FormStatus::Succeeded);
        assert_eq!(attempt.fields(), &ContactFields::default());
        assert_eq!(sender.sent.borrow().len(), 1);
        assert_eq!(sender.sent.borrow()[0].kind(), "contact");
    }

    #[test]
    fn sender_failure_surfaces_generic_retry_message() {
        let mut sender = MockLeadSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(SubmissionError::TimedOut));
        let mut attempt = FormAttempt::<ContactFields>::default();
        attempt.edit(ContactField::Name, "Jane".into());
        attempt.edit(ContactField::Email, "jane@x.com".into());
        attempt.edit(ContactField::Message, "hello".into());

        let status = block_on(run_attempt(&mut attempt, &sender));

        assert_eq!(
            status,
            FormStatus::Failed(FormError::Submission(SubmissionError::TimedOut))
        );
        assert_eq!(
            attempt.error_message().as_deref(),
            Some("Something went wrong. Please try again.")
        );
        assert_eq!(attempt.fields().name, "Jane");
        assert_eq!(attempt.fields().message, "hello");
    }

    #[test]
    fn submit_another_after_success_stays_empty() {
        let sender = RecordingSender::default();
        let mut attempt = FormAttempt::<EarlyAccessFields>::default();
        attempt.edit(EarlyAccessField::Email, "user@example.com".into());
        block_on(run_attempt(&mut attempt, &sender));

        assert!(attempt.submit_another());

        assert_eq!(attempt.status(), &FormStatus::Idle);
        assert_eq!(attempt.error_message(), None);
        assert_eq!(attempt.fields().email, "");
    }

    #[test]
    fn second_trigger_during_flight_sends_once() {
        let sender = RecordingSender::default();
        let mut attempt = FormAttempt::<EarlyAccessFields>::default();
        attempt.edit(EarlyAccessField::Email, "user@example.com".into());

        let ticket = attempt.submit().unwrap();
        let snapshot = attempt.clone();
        assert_eq!(block_on(run_attempt(&mut attempt, &sender)), FormStatus::Submitting);
        assert_eq!(attempt, snapshot);
        assert!(sender.sent.borrow().is_empty());

        let resolution = block_on(deliver(&sender, ticket));
        attempt.resolve(resolution);
        assert_eq!(sender.sent.borrow().len(), 1);
        assert_eq!(attempt.status(), &FormStatus::Succeeded);
    }
}
