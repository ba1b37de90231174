pub mod catalog;
pub mod locale;
pub mod responder;

pub use locale::{classify, Locale};
pub use responder::{BilingualPair, BilingualResponder, CollectingSink, MessageSink, OutboundMessage};
