//! Structural JSON events.
//!
//! The engine consumes [`Token`]s. JSON text is turned into tokens by
//! [`json`](crate::json); any other source of well-formed events can feed
//! the engine directly through [`Engine::feed`](crate::Engine::feed) or
//! [`digest_tokens`](crate::digest_tokens).

use std::borrow::Cow;

use crate::error::Result;
use crate::number::Decimal;

/// A structural JSON event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Null,
    True,
    False,
    Number(Decimal),
    /// A string value, escapes already decoded.
    String(Cow<'a, str>),
    /// An object key, escapes already decoded.
    FieldName(Cow<'a, str>),
    StartObject,
    EndObject,
    StartArray,
    EndArray,
}

impl Token<'_> {
    /// Short human-readable name of the event kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Null => "null",
            Token::True => "true",
            Token::False => "false",
            Token::Number(_) => "number",
            Token::String(_) => "string",
            Token::FieldName(_) => "field name",
            Token::StartObject => "start of object",
            Token::EndObject => "end of object",
            Token::StartArray => "start of array",
            Token::EndArray => "end of array",
        }
    }

    /// Detach from the source text.
    pub fn into_owned(self) -> Token<'static> {
        match self {
            Token::Null => Token::Null,
            Token::True => Token::True,
            Token::False => Token::False,
            Token::Number(n) => Token::Number(n),
            Token::String(s) => Token::String(Cow::Owned(s.into_owned())),
            Token::FieldName(s) => Token::FieldName(Cow::Owned(s.into_owned())),
            Token::StartObject => Token::StartObject,
            Token::EndObject => Token::EndObject,
            Token::StartArray => Token::StartArray,
            Token::EndArray => Token::EndArray,
        }
    }
}

/// Consumer of a token stream.
pub trait TokenSink {
    fn feed(&mut self, token: Token<'_>) -> Result<()>;
}

/// Collects owned tokens.
impl TokenSink for Vec<Token<'static>> {
    fn feed(&mut self, token: Token<'_>) -> Result<()> {
        self.push(token.into_owned());
        Ok(())
    }
}
