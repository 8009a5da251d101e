// Mock verification backend for testing
//
// Scripted responses are consumed in order; an empty script answers Ok(()).

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use subscribers_client::{Result, SubscribersError};
use tokio::sync::Notify;

use super::BaseVerificationService;

/// One scripted answer
#[derive(Debug, Clone)]
pub enum MockReply {
    Ok,
    Err(SubscribersError),
    Panic,
}

/// Arguments captured from a confirm call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmCallArgs {
    pub phone: String,
    pub code: String,
}

#[derive(Clone, Default)]
pub struct MockVerificationService {
    send_replies: Arc<Mutex<VecDeque<MockReply>>>,
    confirm_replies: Arc<Mutex<VecDeque<MockReply>>>,
    send_calls: Arc<Mutex<Vec<String>>>,
    confirm_calls: Arc<Mutex<Vec<ConfirmCallArgs>>>,
    gate: Option<Arc<Notify>>,
}

impl MockVerificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_send_reply(self, reply: MockReply) -> Self {
        self.send_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_confirm_reply(self, reply: MockReply) -> Self {
        self.confirm_replies.lock().unwrap().push_back(reply);
        self
    }

    /// Queue a non-2xx answer for the next send
    pub fn with_send_error(self, status: u16, message: &str) -> Self {
        self.with_send_reply(MockReply::Err(SubscribersError::Service {
            status,
            message: message.to_string(),
        }))
    }

    /// Queue a non-2xx answer for the next confirm
    pub fn with_confirm_error(self, status: u16, message: &str) -> Self {
        self.with_confirm_reply(MockReply::Err(SubscribersError::Service {
            status,
            message: message.to_string(),
        }))
    }

    pub fn with_send_transport_error(self, description: &str) -> Self {
        self.with_send_reply(MockReply::Err(SubscribersError::Transport(
            description.to_string(),
        )))
    }

    pub fn with_confirm_transport_error(self, description: &str) -> Self {
        self.with_confirm_reply(MockReply::Err(SubscribersError::Transport(
            description.to_string(),
        )))
    }

    /// Hold every call until the returned handle is notified once per call
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn send_calls(&self) -> Vec<String> {
        self.send_calls.lock().unwrap().clone()
    }

    pub fn confirm_calls(&self) -> Vec<ConfirmCallArgs> {
        self.confirm_calls.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.send_calls.lock().unwrap().len() + self.confirm_calls.lock().unwrap().len()
    }

    /// Suspend like a network call would, so observers see the pending state
    async fn wait_for_gate(&self) {
        match &self.gate {
            Some(gate) => gate.notified().await,
            None => tokio::task::yield_now().await,
        }
    }

    fn answer(reply: Option<MockReply>) -> Result<()> {
        match reply.unwrap_or(MockReply::Ok) {
            MockReply::Ok => Ok(()),
            MockReply::Err(e) => Err(e),
            MockReply::Panic => panic!("mock verification backend panicked"),
        }
    }
}

#[async_trait]
impl BaseVerificationService for MockVerificationService {
    async fn send_challenge(&self, phone: &str) -> Result<()> {
        self.send_calls.lock().unwrap().push(phone.to_string());
        let reply = self.send_replies.lock().unwrap().pop_front();
        self.wait_for_gate().await;
        Self::answer(reply)
    }

    async fn confirm_challenge(&self, phone: &str, code: &str) -> Result<()> {
        self.confirm_calls.lock().unwrap().push(ConfirmCallArgs {
            phone: phone.to_string(),
            code: code.to_string(),
        });
        let reply = self.confirm_replies.lock().unwrap().pop_front();
        self.wait_for_gate().await;
        Self::answer(reply)
    }
}
