use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
#[cfg(test)]
use mockall::automock;

use crate::config;
use super::error::SubmissionError;
use super::fields::LeadSubmission;

/// Delivers a validated submission to whatever backend collects leads.
///
/// Implementations own transport concerns (retries, timeouts); any failure
/// they return puts the form into its retryable `Failed` state.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait LeadSender {
    async fn send(&self, submission: LeadSubmission) -> Result<(), SubmissionError>;
}

/// Stand-in backend: waits a fixed delay and accepts everything.
pub struct SimulatedSender {
    delay_ms: u32,
}

impl SimulatedSender {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(config::SIMULATED_SEND_DELAY_MS)
    }
}

#[async_trait(?Send)]
impl LeadSender for SimulatedSender {
    async fn send(&self, submission: LeadSubmission) -> Result<(), SubmissionError> {
        match serde_json::to_string(&submission) {
            Ok(body) => debug!("Simulating {} submission: {}", submission.kind(), body),
            Err(e) => warn!("Could not serialize {} submission: {}", submission.kind(), e),
        }
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// Context handle so forms can pick up whichever sender the app installed.
#[derive(Clone)]
pub struct LeadSenderContext(pub Rc<dyn LeadSender>);

impl LeadSenderContext {
    pub fn new(sender: impl LeadSender + 'static) -> Self {
        Self(Rc::new(sender))
    }
}

impl Default for LeadSenderContext {
    fn default() -> Self {
        Self::new(SimulatedSender::default())
    }
}

impl PartialEq for LeadSenderContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
