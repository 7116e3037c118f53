use std::rc::Rc;

use log::{debug, info, warn};
use yew::Reducible;

use super::error::{FormError, SubmissionError};
use super::fields::LeadFields;
use super::validate::is_valid_email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(FormError),
}

impl FormStatus {
    /// Present exactly when the status is `Failed`.
    pub fn error_message(&self) -> Option<String> {
        match self {
            FormStatus::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }
}

/// Snapshot of the fields taken when a submission passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SendTicket<F> {
    pub id: u64,
    pub fields: F,
}

/// Outcome of delivering the ticket with the same `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub id: u64,
    pub outcome: Result<(), SubmissionError>,
}

pub enum FormAction<F: LeadFields> {
    Edit(F::Field, String),
    Submit,
    Resolve(Resolution),
    SubmitAnother,
}

/// One lead-capture form's fields plus where it is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FormAttempt<F> {
    fields: F,
    status: FormStatus,
    in_flight: Option<SendTicket<F>>,
    submissions: u64,
}

impl<F: LeadFields> Default for FormAttempt<F> {
    fn default() -> Self {
        Self {
            fields: F::default(),
            status: FormStatus::Idle,
            in_flight: None,
            submissions: 0,
        }
    }
}

impl<F: LeadFields> FormAttempt<F> {
    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn error_message(&self) -> Option<String> {
        self.status.error_message()
    }

    /// The ticket awaiting delivery, if a validated submission is in flight.
    pub fn pending_send(&self) -> Option<SendTicket<F>> {
        self.in_flight.clone()
    }

    pub fn edit(&mut self, field: F::Field, value: String) -> bool {
        if self.fields.get(field) == value {
            return false;
        }
        self.fields.set(field, value);
        true
    }

    /// Enters `Submitting` from `Idle` or `Failed`. Returns false when the
    /// trigger is inert: already submitting, showing a success, or a
    /// required field is still blank.
    pub fn begin_submit(&mut self) -> bool {
        match self.status {
            FormStatus::Idle | FormStatus::Failed(_) => {}
            FormStatus::Submitting => {
                debug!("Submit ignored, submission {} still in flight", self.submissions);
                return false;
            }
            FormStatus::Succeeded => {
                debug!("Submit ignored until the form is reset");
                return false;
            }
        }
        if let Some(field) = self.fields.missing_required() {
            info!("Submit ignored, required field {:?} is empty", field);
            return false;
        }
        self.submissions += 1;
        self.transition(FormStatus::Submitting);
        true
    }

    /// Validates the email of a submission that has just entered
    /// `Submitting`. On success the field snapshot to deliver is returned;
    /// otherwise the form fails with its fields untouched.
    pub fn validate(&mut self) -> Option<SendTicket<F>> {
        if !self.status.is_submitting() || self.in_flight.is_some() {
            return None;
        }
        if !is_valid_email(self.fields.email()) {
            info!("Rejected submission {}: invalid email", self.submissions);
            self.transition(FormStatus::Failed(FormError::InvalidEmail));
            return None;
        }
        let ticket = SendTicket {
            id: self.submissions,
            fields: self.fields.clone(),
        };
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    pub fn submit(&mut self) -> Option<SendTicket<F>> {
        if self.begin_submit() {
            self.validate()
        } else {
            None
        }
    }

    /// Applies the result of delivering the in-flight ticket. Results for
    /// any other ticket are dropped.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        match &self.in_flight {
            Some(ticket) if ticket.id == resolution.id => {}
            _ => {
                debug!("Dropping stale resolution for submission {}", resolution.id);
                return false;
            }
        }
        self.in_flight = None;
        match resolution.outcome {
            Ok(()) => {
                self.fields = F::default();
                self.transition(FormStatus::Succeeded);
            }
            Err(err) => {
                warn!("Submission {} failed: {}", resolution.id, err);
                self.transition(FormStatus::Failed(FormError::Submission(err)));
            }
        }
        true
    }

    /// Leaves the success screen for a fresh, empty form.
    pub fn submit_another(&mut self) -> bool {
        if self.status != FormStatus::Succeeded {
            return false;
        }
        self.fields = F::default();
        self.transition(FormStatus::Idle);
        true
    }

    /// Returns whether anything changed.
    pub fn apply(&mut self, action: FormAction<F>) -> bool {
        match action {
            FormAction::Edit(field, value) => self.edit(field, value),
            FormAction::Submit => {
                let entered = self.begin_submit();
                self.validate();
                entered
            }
            FormAction::Resolve(resolution) => self.resolve(resolution),
            FormAction::SubmitAnother => self.submit_another(),
        }
    }

    fn transition(&mut self, next: FormStatus) {
        debug!("Form status {:?} -> {:?}", self.status, next);
        self.status = next;
    }
}

impl<F: LeadFields> Reducible for FormAttempt<F> {
    type Action = FormAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            next.into()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead_capture::fields::{
        ContactField, ContactFields, EarlyAccessField, EarlyAccessFields,
    };

    fn early_access(email: &str) -> FormAttempt<EarlyAccessFields> {
        let mut attempt = FormAttempt::default();
        attempt.edit(EarlyAccessField::Email, email.to_string());
        attempt
    }

    fn ok(id: u64) -> Resolution {
        Resolution { id, outcome: Ok(()) }
    }

    fn assert_error_invariant<F: LeadFields>(attempt: &FormAttempt<F>) {
        match attempt.status() {
            FormStatus::Failed(_) => assert!(attempt
                .error_message()
                .map_or(false, |m| !m.is_empty())),
            _ => assert_eq!(attempt.error_message(), None),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let attempt = FormAttempt::<ContactFields>::default();
        assert_eq!(attempt.status(), &FormStatus::Idle);
        assert_eq!(attempt.fields(), &ContactFields::default());
        assert_eq!(attempt.pending_send(), None);
        assert_error_invariant(&attempt);
    }

    #[test]
    fn valid_email_passes_through_submitting_then_succeeds() {
        let mut attempt = early_access("user@example.com");

        assert!(attempt.begin_submit());
        assert_eq!(attempt.status(), &FormStatus::Submitting);
        assert_error_invariant(&attempt);

        let ticket = attempt.validate().expect("valid email is dispatched");
        assert_eq!(ticket.fields.email, "user@example.com");
        assert_eq!(attempt.status(), &FormStatus::Submitting);

        assert!(attempt.resolve(ok(ticket.id)));
        assert_eq!(attempt.status(), &FormStatus::Succeeded);
        assert_eq!(attempt.fields().email, "");
        assert_eq!(attempt.pending_send(), None);
        assert_error_invariant(&attempt);
    }

    #[test]
    fn invalid_email_fails_from_submitting_and_keeps_value() {
        let mut attempt = early_access("bad-email");

        assert!(attempt.begin_submit());
        assert_eq!(attempt.status(), &FormStatus::Submitting);
        assert_eq!(attempt.validate(), None);

        assert_eq!(attempt.status(), &FormStatus::Failed(FormError::InvalidEmail));
        assert_eq!(
            attempt.error_message().as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(attempt.fields().email, "bad-email");
        assert_eq!(attempt.pending_send(), None);
        assert_error_invariant(&attempt);
    }

    #[test]
    fn failed_is_retryable_after_editing() {
        let mut attempt = early_access("bad-email");
        assert_eq!(attempt.submit(), None);

        attempt.edit(EarlyAccessField::Email, "good@example.com".into());
        assert!(matches!(attempt.status(), FormStatus::Failed(_)));

        let ticket = attempt.submit().expect("retry dispatches");
        assert_eq!(attempt.status(), &FormStatus::Submitting);
        assert_error_invariant(&attempt);
        assert!(attempt.resolve(ok(ticket.id)));
        assert_eq!(attempt.status(), &FormStatus::Succeeded);
    }

    #[test]
    fn send_failure_preserves_every_field() {
        let mut attempt = FormAttempt::<ContactFields>::default();
        attempt.edit(ContactField::Name, "Jane".into());
        attempt.edit(ContactField::Email, "jane@x.com".into());
        attempt.edit(ContactField::Message, "hello".into());

        let ticket = attempt.submit().unwrap();
        attempt.resolve(Resolution {
            id: ticket.id,
            outcome: Err(SubmissionError::Transport("offline".into())),
        });

        assert_eq!(
            attempt.error_message().as_deref(),
            Some("Something went wrong. Please try again.")
        );
        assert_eq!(attempt.fields(), &ticket.fields);
        assert!(attempt.submit().is_some());
    }

    #[test]
    fn submit_while_submitting_is_inert() {
        let mut attempt = early_access("user@example.com");
        let ticket = attempt.submit().unwrap();
        let before = attempt.clone();

        assert!(!attempt.begin_submit());
        assert_eq!(attempt.submit(), None);
        assert!(!attempt.apply(FormAction::Submit));
        assert_eq!(attempt, before);
        assert_eq!(attempt.pending_send(), Some(ticket));
    }

    #[test]
    fn blank_required_field_leaves_state_alone() {
        let mut attempt = FormAttempt::<ContactFields>::default();
        attempt.edit(ContactField::Email, "jane@x.com".into());
        let before = attempt.clone();

        assert_eq!(attempt.submit(), None);
        assert_eq!(attempt, before);
        assert_eq!(attempt.status(), &FormStatus::Idle);
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let mut attempt = early_access("user@example.com");
        let ticket = attempt.submit().unwrap();

        assert!(!attempt.resolve(ok(ticket.id + 1)));
        assert_eq!(attempt.status(), &FormStatus::Submitting);

        assert!(attempt.resolve(ok(ticket.id)));
        assert!(!attempt.resolve(ok(ticket.id)));
        assert_eq!(attempt.status(), &FormStatus::Succeeded);
    }

    #[test]
    fn submit_another_returns_to_clean_idle() {
        let mut attempt = early_access("user@example.com");
        assert!(!attempt.submit_another());

        let ticket = attempt.submit().unwrap();
        attempt.resolve(ok(ticket.id));
        assert!(!attempt.begin_submit());

        assert!(attempt.submit_another());
        assert_eq!(attempt.status(), &FormStatus::Idle);
        assert_eq!(attempt.fields().email, "");
        assert_error_invariant(&attempt);
    }

    #[test]
    fn edits_made_while_submitting_are_not_sent() {
        let mut attempt = early_access("user@example.com");
        let ticket = attempt.submit().unwrap();
        attempt.edit(EarlyAccessField::Email, "other@example.com".into());

        assert_eq!(attempt.pending_send().unwrap().fields.email, "user@example.com");
        attempt.resolve(ok(ticket.id));
        assert_eq!(attempt.fields().email, "");
    }

    #[test]
    fn reducer_keeps_identity_for_no_op_actions() {
        let state = Rc::new(FormAttempt::<EarlyAccessFields>::default());
        let same = Rc::clone(&state).reduce(FormAction::SubmitAnother);
        assert!(Rc::ptr_eq(&state, &same));

        let edited = state.reduce(FormAction::Edit(EarlyAccessField::Email, "x".into()));
        assert_eq!(edited.fields().email, "x");
    }
}
