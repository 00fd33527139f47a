//! Handler chain result type.

/// What a handler decided. `Reply(text)` carries the text already sent to the chat so that
/// `after()` hooks can see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Not for this handler; try next.
    Ignore,
    /// Stop the chain; `text` was sent to the chat.
    Reply(String),
}

impl HandlerResponse {
    /// True when the handle phase must stop here.
    pub fn ends_chain(&self) -> bool {
        matches!(self, HandlerResponse::Stop | HandlerResponse::Reply(_))
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerResponse::Continue => "Continue",
            HandlerResponse::Stop => "Stop",
            HandlerResponse::Ignore => "Ignore",
            HandlerResponse::Reply(_) => "Reply",
        }
    }
}
