//! The streaming digest engine.
//!
//! The engine folds a token stream into one [`Digest`] in a single pass.
//! It never holds the document, only a stack with one entry per open
//! container.
//!
//! ## Encoding
//!
//! - Scalars feed a one-byte type tag into the running hash, followed by the
//!   canonical number encoding for numbers, or the digest of the UTF-8 bytes
//!   for strings.
//! - Arrays feed `[`, their elements in order, then `]`.
//! - Objects feed `o`, then the XOR of one digest per (key, value) pair. XOR
//!   commutes, so key order does not matter. Since identical pair digests
//!   would cancel, a key may appear only once per object.
//!
//! Entering an object swaps the running hash for a fresh pair accumulator and
//! parks the outer hash in the object's [`Frame`]; leaving it restores the
//! outer hash and feeds it the fold.

use std::collections::HashSet;
use std::io;
use std::mem;

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::hasher::{Hasher, HasherFactory};
use crate::json;
use crate::token::{Token, TokenSink};

/// Single-byte type tags.
pub mod tags {
    pub const NULL: &[u8] = b"n";
    pub const TRUE: &[u8] = b"t";
    pub const FALSE: &[u8] = b"f";
    pub const NUMBER: &[u8] = b"i";
    pub const STRING: &[u8] = b"s";
    pub const OBJECT: &[u8] = b"o";
    pub const ARRAY_START: &[u8] = b"[";
    pub const ARRAY_END: &[u8] = b"]";
}

/// Configuration for the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of simultaneously open containers. `None` means
    /// unlimited.
    pub max_depth: Option<usize>,
}

/// Per-object state.
struct Frame<H> {
    /// The running hash of the enclosing scope, restored on exit.
    enclosing: H,
    /// XOR of the digests of all completed pairs.
    fold: Vec<u8>,
    seen_keys: HashSet<String>,
    /// A pair has been started and not yet folded.
    pair_pending: bool,
    /// A field name was read and its value has not started yet.
    awaiting_value: bool,
}

enum Scope<H> {
    Array,
    Object(Frame<H>),
}

/// Streaming digest state for one JSON document.
///
/// Feed tokens with [`feed`](Engine::feed) and read the result with
/// [`finish`](Engine::finish). Any error aborts the computation; the engine
/// must then be discarded.
pub struct Engine<F: HasherFactory> {
    factory: F,
    config: EngineConfig,
    /// The running hash of the current scope: the document hash at the
    /// root, the pair accumulator inside an object.
    sum: F::Output,
    /// Reused to digest individual strings and field names.
    scratch: F::Output,
    scopes: Vec<Scope<F::Output>>,
    output_size: usize,
    root_seen: bool,
}

impl<F: HasherFactory> Engine<F> {
    pub fn new(factory: F) -> Result<Self> {
        Self::with_config(factory, EngineConfig::default())
    }

    /// Fails with [`Error::DigestLength`] if the factory's first two
    /// instances disagree on their output size.
    pub fn with_config(factory: F, config: EngineConfig) -> Result<Self> {
        let sum = factory.create();
        let scratch = factory.create();
        let output_size = sum.output_size();
        if scratch.output_size() != output_size {
            return Err(Error::DigestLength {
                expected: output_size,
                actual: scratch.output_size(),
            });
        }
        Ok(Self {
            factory,
            config,
            sum,
            scratch,
            scopes: Vec::new(),
            output_size,
            root_seen: false,
        })
    }

    /// Number of currently open containers.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Consume one token.
    pub fn feed(&mut self, token: Token<'_>) -> Result<()> {
        let kind = token.kind_name();
        match token {
            Token::FieldName(name) => self.field_name(&name),
            Token::EndObject => self.end_object(),
            Token::EndArray => self.end_array(),
            Token::Null => self.scalar(kind, tags::NULL),
            Token::True => self.scalar(kind, tags::TRUE),
            Token::False => self.scalar(kind, tags::FALSE),
            Token::Number(number) => {
                self.scalar(kind, tags::NUMBER)?;
                self.sum.update(&number.canonical_bytes())
            }
            Token::String(s) => {
                self.begin_value(kind)?;
                self.string(&s)
            }
            Token::StartObject => {
                self.begin_value(kind)?;
                self.start_object()
            }
            Token::StartArray => {
                self.begin_value(kind)?;
                self.start_array()
            }
        }
    }

    /// Finalize the document hash.
    ///
    /// Fails if the token stream ended before the root value was complete.
    pub fn finish(mut self) -> Result<Digest> {
        if !self.scopes.is_empty() {
            return Err(Error::UnexpectedToken {
                token: "end of input",
                reason: "containers left open",
            });
        }
        if !self.root_seen {
            return Err(Error::UnexpectedToken {
                token: "end of input",
                reason: "no value",
            });
        }
        self.sum.finalize()
    }

    fn scalar(&mut self, kind: &'static str, tag: &[u8]) -> Result<()> {
        self.begin_value(kind)?;
        self.sum.update(tag)
    }

    /// Grammar check shared by every token that starts a value.
    fn begin_value(&mut self, kind: &'static str) -> Result<()> {
        match self.scopes.last_mut() {
            None => {
                if self.root_seen {
                    return Err(unexpected(kind, "second root value"));
                }
                self.root_seen = true;
            }
            Some(Scope::Array) => {}
            Some(Scope::Object(frame)) => {
                if !frame.awaiting_value {
                    return Err(unexpected(kind, "value where a field name is expected"));
                }
                frame.awaiting_value = false;
            }
        }
        Ok(())
    }

    fn string(&mut self, s: &str) -> Result<()> {
        self.sum.update(tags::STRING)?;
        self.scratch.reset();
        self.scratch.update(s.as_bytes())?;
        let digest = self.scratch.finalize()?;
        self.sum.update(digest.as_bytes())
    }

    fn field_name(&mut self, name: &str) -> Result<()> {
        let frame = match self.scopes.last_mut() {
            Some(Scope::Object(frame)) => frame,
            _ => {
                return Err(Error::UnexpectedToken {
                    token: "field name",
                    reason: "outside of an object",
                })
            }
        };
        if frame.awaiting_value {
            return Err(Error::UnexpectedToken {
                token: "field name",
                reason: "previous field has no value",
            });
        }
        if frame.seen_keys.contains(name) {
            return Err(Error::DuplicateKey(name.to_string()));
        }
        if frame.pair_pending {
            fold_pair(&mut self.sum, &mut frame.fold)?;
        }
        frame.seen_keys.insert(name.to_string());
        frame.pair_pending = true;
        frame.awaiting_value = true;

        self.string(name)
    }

    fn start_object(&mut self) -> Result<()> {
        self.check_depth()?;
        self.sum.update(tags::OBJECT)?;

        let pair = self.factory.create();
        if pair.output_size() != self.output_size {
            return Err(Error::DigestLength {
                expected: self.output_size,
                actual: pair.output_size(),
            });
        }
        let enclosing = mem::replace(&mut self.sum, pair);
        self.scopes.push(Scope::Object(Frame {
            enclosing,
            fold: vec![0u8; self.output_size],
            seen_keys: HashSet::new(),
            pair_pending: false,
            awaiting_value: false,
        }));
        Ok(())
    }

    fn end_object(&mut self) -> Result<()> {
        let mut frame = match self.scopes.pop() {
            Some(Scope::Object(frame)) => frame,
            Some(Scope::Array) => {
                return Err(Error::UnexpectedToken {
                    token: "end of object",
                    reason: "innermost open container is an array",
                })
            }
            None => {
                return Err(Error::UnexpectedToken {
                    token: "end of object",
                    reason: "no open object",
                })
            }
        };
        if frame.awaiting_value {
            return Err(Error::UnexpectedToken {
                token: "end of object",
                reason: "last field has no value",
            });
        }
        if frame.pair_pending {
            fold_pair(&mut self.sum, &mut frame.fold)?;
        }
        self.sum = frame.enclosing;
        self.sum.update(&frame.fold)
    }

    fn start_array(&mut self) -> Result<()> {
        self.check_depth()?;
        self.sum.update(tags::ARRAY_START)?;
        self.scopes.push(Scope::Array);
        Ok(())
    }

    fn end_array(&mut self) -> Result<()> {
        match self.scopes.pop() {
            Some(Scope::Array) => self.sum.update(tags::ARRAY_END),
            Some(Scope::Object(_)) => Err(Error::UnexpectedToken {
                token: "end of array",
                reason: "innermost open container is an object",
            }),
            None => Err(Error::UnexpectedToken {
                token: "end of array",
                reason: "no open array",
            }),
        }
    }

    fn check_depth(&self) -> Result<()> {
        match self.config.max_depth {
            Some(max) if self.scopes.len() >= max => Err(Error::DepthLimitExceeded(max)),
            _ => Ok(()),
        }
    }
}

/// `fold ^= sum.finalize()`, then make `sum` ready for the next pair.
fn fold_pair<H: Hasher>(sum: &mut H, fold: &mut [u8]) -> Result<()> {
    let digest = sum.finalize()?;
    if digest.len() != fold.len() {
        return Err(Error::DigestLength {
            expected: fold.len(),
            actual: digest.len(),
        });
    }
    for (acc, b) in fold.iter_mut().zip(digest.as_bytes()) {
        *acc ^= b;
    }
    sum.reset();
    Ok(())
}

fn unexpected(token: &'static str, reason: &'static str) -> Error {
    Error::UnexpectedToken { token, reason }
}

impl<F: HasherFactory> TokenSink for Engine<F> {
    fn feed(&mut self, token: Token<'_>) -> Result<()> {
        Engine::feed(self, token)
    }
}

/// Digest JSON text.
///
/// Every hasher the engine needs comes fresh from `factory`.
pub fn digest<F: HasherFactory>(json: &str, factory: F) -> Result<Digest> {
    digest_with_config(json, factory, EngineConfig::default())
}

/// Digest JSON text with explicit engine configuration.
pub fn digest_with_config<F: HasherFactory>(
    json: &str,
    factory: F,
    config: EngineConfig,
) -> Result<Digest> {
    let mut engine = Engine::with_config(factory, config)?;
    json::feed_str(json, &mut engine)?;
    engine.finish()
}

/// Digest JSON read from `reader`, without buffering the whole document.
pub fn digest_reader<R, F>(reader: R, factory: F, config: EngineConfig) -> Result<Digest>
where
    R: io::Read,
    F: HasherFactory,
{
    let mut engine = Engine::with_config(factory, config)?;
    json::feed_reader(reader, &mut engine)?;
    engine.finish()
}

/// Digest a token stream from any source.
///
/// The first error, from the source or from the engine, is returned.
pub fn digest_tokens<'a, I, F>(tokens: I, factory: F, config: EngineConfig) -> Result<Digest>
where
    I: IntoIterator<Item = Result<Token<'a>>>,
    F: HasherFactory,
{
    let mut engine = Engine::with_config(factory, config)?;
    for token in tokens {
        engine.feed(token?)?;
    }
    engine.finish()
}
