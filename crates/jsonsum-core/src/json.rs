//! JSON text as a token source.
//!
//! serde_json does the parsing. A [`DeserializeSeed`] walks the document in
//! order and hands each event to a [`TokenSink`] as soon as it is read, so
//! no document tree is built. Keys arrive one at a time with repeats intact,
//! and with serde_json's `arbitrary_precision` feature numbers that do not
//! fit a 64-bit integer arrive as their literal text.
//!
//! The parser rejects trailing characters after the root value, unpaired
//! UTF-16 surrogate escapes, and nesting deeper than 127 containers.

use std::borrow::Cow;
use std::fmt;
use std::io;

use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};

use crate::error::{Error, Result};
use crate::number::Decimal;
use crate::token::{Token, TokenSink};

/// Map key under which serde_json passes number text when
/// `arbitrary_precision` is enabled.
const NUMBER_KEY: &str = "$serde_json::private::Number";

/// Parse `json` and feed every event to `sink`.
pub fn feed_str<S: TokenSink>(json: &str, sink: &mut S) -> Result<()> {
    let mut de = serde_json::Deserializer::from_str(json);
    feed(&mut de, sink)
}

/// Parse JSON read from `reader` and feed every event to `sink`.
pub fn feed_reader<R: io::Read, S: TokenSink>(reader: R, sink: &mut S) -> Result<()> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    feed(&mut de, sink)
}

fn feed<'de, R, S>(de: &mut serde_json::Deserializer<R>, sink: &mut S) -> Result<()>
where
    R: serde_json::de::Read<'de>,
    S: TokenSink,
{
    let mut driver = Driver {
        sink,
        failure: None,
    };
    let parsed = ValueSeed(&mut driver)
        .deserialize(&mut *de)
        .and_then(|()| de.end());
    match (driver.failure, parsed) {
        (Some(err), _) => Err(err),
        (None, Err(err)) => Err(err.into()),
        (None, Ok(())) => Ok(()),
    }
}

/// Forwards tokens to the sink and keeps the sink's error, which would
/// otherwise be flattened into a serde_json message.
struct Driver<'s, S> {
    sink: &'s mut S,
    failure: Option<Error>,
}

impl<S: TokenSink> Driver<'_, S> {
    fn feed<E: de::Error>(&mut self, token: Token<'_>) -> std::result::Result<(), E> {
        self.sink.feed(token).map_err(|err| self.fail(err))
    }

    fn fail<E: de::Error>(&mut self, err: Error) -> E {
        let message = err.to_string();
        self.failure = Some(err);
        E::custom(message)
    }
}

struct ValueSeed<'d, 's, S>(&'d mut Driver<'s, S>);

impl<'de, S: TokenSink> DeserializeSeed<'de> for ValueSeed<'_, '_, S> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<(), D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de, S: TokenSink> Visitor<'de> for ValueSeed<'_, '_, S> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<(), E> {
        self.0.feed(Token::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<(), E> {
        self.0.feed(if v { Token::True } else { Token::False })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<(), E> {
        self.0.feed(Token::Number(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<(), E> {
        self.0.feed(Token::Number(Decimal::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<(), E> {
        self.0.feed(Token::String(Cow::Borrowed(v)))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.0.feed::<A::Error>(Token::StartArray)?;
        while seq.next_element_seed(ValueSeed(&mut *self.0))?.is_some() {}
        self.0.feed(Token::EndArray)
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut key = match map.next_key_seed(KeySeed)? {
            Some(key) if key == NUMBER_KEY => {
                return map.next_value_seed(NumberSeed(&mut *self.0));
            }
            Some(key) => key,
            None => {
                self.0.feed::<A::Error>(Token::StartObject)?;
                return self.0.feed(Token::EndObject);
            }
        };

        self.0.feed::<A::Error>(Token::StartObject)?;
        loop {
            self.0.feed::<A::Error>(Token::FieldName(key))?;
            map.next_value_seed(ValueSeed(&mut *self.0))?;
            match map.next_key_seed(KeySeed)? {
                Some(next) => key = next,
                None => break,
            }
        }
        self.0.feed(Token::EndObject)
    }
}

/// Reads an object key, borrowing from the input when it has no escapes.
struct KeySeed;

impl<'de> DeserializeSeed<'de> for KeySeed {
    type Value = Cow<'de, str>;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Visitor<'de> for KeySeed {
    type Value = Cow<'de, str>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object key")
    }

    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> std::result::Result<Self::Value, E> {
        Ok(Cow::Borrowed(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Ok(Cow::Owned(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
        Ok(Cow::Owned(v))
    }
}

/// Reads the literal text of a number.
struct NumberSeed<'d, 's, S>(&'d mut Driver<'s, S>);

impl<'de, S: TokenSink> DeserializeSeed<'de> for NumberSeed<'_, '_, S> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<(), D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de, S: TokenSink> Visitor<'de> for NumberSeed<'_, '_, S> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("number text")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<(), E> {
        match v.parse::<Decimal>() {
            Ok(number) => self.0.feed(Token::Number(number)),
            Err(err) => Err(self.0.fail(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(json: &str) -> Vec<Token<'static>> {
        let mut out = Vec::new();
        feed_str(json, &mut out).unwrap();
        out
    }

    fn parse_error(json: &str) -> String {
        let mut out = Vec::new();
        match feed_str(json, &mut out) {
            Err(Error::Parse(message)) => message,
            other => panic!("expected parse error for {json:?}, got {other:?}"),
        }
    }

    fn num(text: &str) -> Token<'static> {
        Token::Number(text.parse().unwrap())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(tokens("null"), vec![Token::Null]);
        assert_eq!(tokens(" true "), vec![Token::True]);
        assert_eq!(tokens("false\n"), vec![Token::False]);
        assert_eq!(tokens(r#""hi""#), vec![Token::String("hi".into())]);
    }

    #[test]
    fn test_numbers_are_exact() {
        assert_eq!(tokens("-1.5e3"), vec![num("-15e2")]);
        assert_eq!(tokens("42"), vec![num("42")]);
        assert_eq!(tokens("-7"), vec![num("-7")]);
        assert_eq!(tokens("-0"), vec![num("0")]);
        assert_eq!(tokens("0.1"), vec![num("1e-1")]);
        assert_eq!(
            tokens("123456789012345678901234567890.000"),
            vec![num("12345678901234567890123456789e1")]
        );
        assert_eq!(
            tokens("[18446744073709551615, 18446744073709551616]"),
            vec![
                Token::StartArray,
                num("18446744073709551615"),
                num("18446744073709551616"),
                Token::EndArray,
            ]
        );
    }

    #[test]
    fn test_nested_structure() {
        assert_eq!(
            tokens(r#"{"a": [1, {"b": null}], "c": {}}"#),
            vec![
                Token::StartObject,
                Token::FieldName("a".into()),
                Token::StartArray,
                num("1"),
                Token::StartObject,
                Token::FieldName("b".into()),
                Token::Null,
                Token::EndObject,
                Token::EndArray,
                Token::FieldName("c".into()),
                Token::StartObject,
                Token::EndObject,
                Token::EndObject,
            ]
        );
    }

    #[test]
    fn test_repeated_keys_are_reported() {
        assert_eq!(
            tokens(r#"{"a":1,"a":2}"#),
            vec![
                Token::StartObject,
                Token::FieldName("a".into()),
                num("1"),
                Token::FieldName("a".into()),
                num("2"),
                Token::EndObject,
            ]
        );
    }

    #[test]
    fn test_number_valued_fields() {
        assert_eq!(
            tokens(r#"{"x":2.50,"y":[1e2]}"#),
            vec![
                Token::StartObject,
                Token::FieldName("x".into()),
                num("25e-1"),
                Token::FieldName("y".into()),
                Token::StartArray,
                num("1e2"),
                Token::EndArray,
                Token::EndObject,
            ]
        );
    }

    #[test]
    fn test_escapes_are_decoded() {
        let toks = tokens(r#"["a\tb", "\u0009", "\"\\\/\b\f\n\r", "café", "😀"]"#);
        assert_eq!(toks[1], Token::String("a\tb".into()));
        assert_eq!(toks[2], Token::String("\t".into()));
        assert_eq!(toks[3], Token::String("\"\\/\u{8}\u{c}\n\r".into()));
        assert_eq!(toks[4], Token::String("café".into()));
        assert_eq!(toks[5], Token::String("😀".into()));
        assert_eq!(tokens(r#"{"a":1}"#)[1], Token::FieldName("a".into()));
    }

    #[test]
    fn test_malformed_input() {
        for json in [
            r#"{"test":"hi""#,
            r#"{"test":}"#,
            "",
            "   ",
            "[1,]",
            r#"{"a":1,}"#,
            "[1 2]",
            "[1}",
            "nul",
            "'a'",
            "01",
            "1.",
            "\"a\nb\"",
            r#""\x""#,
        ] {
            parse_error(json);
        }
    }

    #[test]
    fn test_trailing_characters_rejected() {
        parse_error("1 2");
        parse_error("{} x");
        parse_error("[1] [2]");
        assert_eq!(tokens("[1] \n"), vec![Token::StartArray, num("1"), Token::EndArray]);
    }

    #[test]
    fn test_unpaired_surrogates_rejected() {
        parse_error(r#""\ud800""#);
        parse_error(r#""\udc00""#);
        parse_error(r#""\ud800A""#);
        parse_error(r#"{"\ud800":1}"#);
    }

    #[test]
    fn test_nesting_limit() {
        let ok = format!("{}{}", "[".repeat(100), "]".repeat(100));
        assert_eq!(tokens(&ok).len(), 200);

        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert!(parse_error(&deep).contains("recursion limit"));
    }

    #[test]
    fn test_sink_error_is_returned_unchanged() {
        struct Refuse;
        impl TokenSink for Refuse {
            fn feed(&mut self, token: Token<'_>) -> Result<()> {
                match token {
                    Token::FieldName(name) => Err(Error::DuplicateKey(name.into_owned())),
                    _ => Ok(()),
                }
            }
        }

        let err = feed_str(r#"[{"k":1}]"#, &mut Refuse).unwrap_err();
        assert_eq!(err, Error::DuplicateKey("k".into()));
    }

    #[test]
    fn test_reader_input() {
        let mut out = Vec::new();
        feed_reader(&br#"{"k":[true,"v"]}"#[..], &mut out).unwrap();
        assert_eq!(out, tokens(r#"{"k":[true,"v"]}"#));

        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
        }
        let err = feed_reader(Broken, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Read(_)), "got {err:?}");
    }
}
