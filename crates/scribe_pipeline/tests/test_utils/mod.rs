//! Test utilities for pipeline tests.
//!
//! `MockModel` stands in for the inference server with scripted replies.

use async_trait::async_trait;
use scribe_core::ChatMessage;
use scribe_error::{ModelError, ModelErrorKind, ScribeResult};
use scribe_interface::TextModel;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text
    Reply(String),
    /// Fail with this error
    Fail(ModelErrorKind),
}

impl MockBehavior {
    fn respond(&self) -> ScribeResult<String> {
        match self {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(kind) => Err(ModelError::new(kind.clone()).into()),
        }
    }
}

/// Scripted stand-in for a text model.
#[derive(Debug)]
pub struct MockModel {
    generate: MockBehavior,
    chat: MockBehavior,
    generate_calls: AtomicUsize,
    chat_calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_messages: Mutex<Vec<ChatMessage>>,
    last_temperatures: Mutex<Vec<f32>>,
}

impl MockModel {
    pub fn new(generate: MockBehavior, chat: MockBehavior) -> Self {
        Self {
            generate,
            chat,
            generate_calls: AtomicUsize::new(0),
            chat_calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_messages: Mutex::new(Vec::new()),
            last_temperatures: Mutex::new(Vec::new()),
        }
    }

    /// Both endpoints succeed with the given texts.
    pub fn replying(research: &str, chat: &str) -> Self {
        Self::new(
            MockBehavior::Reply(research.to_string()),
            MockBehavior::Reply(chat.to_string()),
        )
    }

    /// Both endpoints fail as if the server were down.
    pub fn unreachable() -> Self {
        let kind = ModelErrorKind::Transport("connection refused".to_string());
        Self::new(MockBehavior::Fail(kind.clone()), MockBehavior::Fail(kind))
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages.lock().unwrap().clone()
    }

    /// Temperatures in call order.
    pub fn temperatures(&self) -> Vec<f32> {
        self.last_temperatures.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockModel {
    async fn check_connection(&self) -> bool {
        matches!(self.generate, MockBehavior::Reply(_))
    }

    async fn list_models(&self) -> Vec<String> {
        vec!["mock".to_string()]
    }

    async fn generate_text(
        &self,
        prompt: &str,
        temperature: f32,
        _max_tokens: u32,
    ) -> ScribeResult<String> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.last_temperatures.lock().unwrap().push(temperature);
        self.generate.respond()
    }

    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> ScribeResult<String> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages;
        self.last_temperatures.lock().unwrap().push(temperature);
        self.chat.respond()
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
