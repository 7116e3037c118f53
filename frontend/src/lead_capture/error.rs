use thiserror::Error;

/// Failure reported by a [`LeadSender`](super::sender::LeadSender).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The backend answered but refused the lead (4xx/5xx, validation on its side).
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The request never got an answer: offline, DNS, CORS, connection reset.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The sender gave up waiting for the backend.
    #[error("submission timed out")]
    TimedOut,
}

/// Why a form is sitting in `Failed`. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Something went wrong. Please try again.")]
    Submission(#[source] SubmissionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FormError::Submission(SubmissionError::TimedOut).to_string(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn submission_failure_keeps_its_cause() {
        let err = FormError::Submission(SubmissionError::Rejected("quota".into()));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("submission rejected: quota"));
    }

    #[test]
    fn every_transport_failure_shows_the_retry_prompt() {
        for cause in [
            SubmissionError::Rejected("quota".into()),
            SubmissionError::Transport("offline".into()),
            SubmissionError::TimedOut,
        ] {
            assert_eq!(
                FormError::Submission(cause).to_string(),
                "Something went wrong. Please try again."
            );
        }
    }
}
