use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::i18n::locale::{classify, Locale};

/// Two equivalent user-facing messages, one per supported language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualPair {
    pub english: Cow<'static, str>,
    pub other: Cow<'static, str>,
}

impl BilingualPair {
    pub const fn fixed(english: &'static str, other: &'static str) -> Self {
        Self { english: Cow::Borrowed(english), other: Cow::Borrowed(other) }
    }

    pub fn new(english: impl Into<String>, other: impl Into<String>) -> Self {
        Self { english: Cow::Owned(english.into()), other: Cow::Owned(other.into()) }
    }

    pub fn for_locale(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.english,
            Locale::Other => &self.other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutboundMessage {
    Text { text: String },
    /// A canned response identifier rendered by the host.
    Template { response: String },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn template(response: impl Into<String>) -> Self {
        Self::Template { response: response.into() }
    }
}

pub trait MessageSink: Send + Sync {
    fn emit(&self, message: OutboundMessage);
}

#[derive(Clone, Default)]
pub struct CollectingSink {
    messages: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl CollectingSink {
    pub fn messages(&self) -> Vec<OutboundMessage> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl MessageSink for CollectingSink {
    fn emit(&self, message: OutboundMessage) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }
}

/// Stateless: every call re-classifies the user's latest text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BilingualResponder;

impl BilingualResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn select<'a>(&self, user_text: &str, pair: &'a BilingualPair) -> &'a str {
        pair.for_locale(classify(user_text))
    }

    pub fn respond<S>(&self, sink: &S, user_text: &str, pair: &BilingualPair) -> Locale
    where
        S: MessageSink + ?Sized,
    {
        let locale = classify(user_text);
        sink.emit(OutboundMessage::text(pair.for_locale(locale)));
        locale
    }
}
