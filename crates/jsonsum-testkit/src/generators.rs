//! Proptest generators for property-based testing.
//!
//! Documents are generated as a [`Doc`] tree and rendered to text with a
//! [`Style`], so the same document can be spelled several ways: keys in a
//! different order, numbers in another notation, strings fully escaped.

use proptest::prelude::*;

/// A generated JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Doc {
    Null,
    Bool(bool),
    /// `mantissa × 10^exponent`.
    Number { mantissa: i64, exponent: i32 },
    String(String),
    Array(Vec<Doc>),
    /// Pairs in generation order. Keys are unique unless built by hand.
    Object(Vec<(String, Doc)>),
}

/// Order in which object keys are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyOrder {
    #[default]
    Generated,
    Reversed,
    /// Rotate the pair list left by this many places.
    Rotated(usize),
}

/// How numbers are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberSpelling {
    /// `<mantissa>e<exponent>`.
    #[default]
    Exponent,
    /// Positional decimal notation, no exponent.
    Plain,
    /// `<mantissa>.000e<exponent>`.
    Padded,
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub key_order: KeyOrder,
    pub numbers: NumberSpelling,
    /// Write every string character as a `\u` escape.
    pub escape_all: bool,
    /// Put whitespace around every token.
    pub spaced: bool,
}

/// Generate a string with characters that need escaping.
pub fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \\t\\n\"\\\\/éß€😀]{0,8}".prop_map(String::from)
}

/// Generate an object key.
pub fn key() -> impl Strategy<Value = String> {
    "[a-z\"\\\\é]{0,4}".prop_map(String::from)
}

/// Generate a scalar.
pub fn scalar() -> impl Strategy<Value = Doc> {
    prop_oneof![
        Just(Doc::Null),
        any::<bool>().prop_map(Doc::Bool),
        (-1_000_000i64..=1_000_000, -6i32..=6)
            .prop_map(|(mantissa, exponent)| Doc::Number { mantissa, exponent }),
        text().prop_map(Doc::String),
    ]
}

/// Generate a document up to four levels deep.
pub fn doc() -> impl Strategy<Value = Doc> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Doc::Array),
            prop::collection::btree_map(key(), inner, 0..6)
                .prop_map(|pairs| Doc::Object(pairs.into_iter().collect())),
        ]
    })
}

/// Generate a rendering style.
pub fn style() -> impl Strategy<Value = Style> {
    let key_order = prop_oneof![
        Just(KeyOrder::Generated),
        Just(KeyOrder::Reversed),
        (1usize..6).prop_map(KeyOrder::Rotated),
    ];
    let numbers = prop_oneof![
        Just(NumberSpelling::Exponent),
        Just(NumberSpelling::Plain),
        Just(NumberSpelling::Padded),
    ];
    (key_order, numbers, any::<bool>(), any::<bool>()).prop_map(
        |(key_order, numbers, escape_all, spaced)| Style {
            key_order,
            numbers,
            escape_all,
            spaced,
        },
    )
}

impl Doc {
    /// Render with the default style.
    pub fn to_json(&self) -> String {
        self.render(&Style::default())
    }

    /// Render with the given style.
    pub fn render(&self, style: &Style) -> String {
        let mut out = String::new();
        write_doc(&mut out, self, style);
        out
    }

    /// The same document with the first key of the outermost object
    /// repeated, or `None` if the root is not a non-empty object.
    pub fn with_duplicate_key(&self) -> Option<Doc> {
        match self {
            Doc::Object(pairs) if !pairs.is_empty() => {
                let mut pairs = pairs.clone();
                pairs.push((pairs[0].0.clone(), Doc::Null));
                Some(Doc::Object(pairs))
            }
            _ => None,
        }
    }
}

fn write_doc(out: &mut String, doc: &Doc, style: &Style) {
    let sep = if style.spaced { " " } else { "" };
    match doc {
        Doc::Null => out.push_str("null"),
        Doc::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Doc::Number { mantissa, exponent } => {
            out.push_str(&spell_number(*mantissa, *exponent, style.numbers))
        }
        Doc::String(s) => write_string(out, s, style.escape_all),
        Doc::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(sep);
                write_doc(out, item, style);
                out.push_str(sep);
            }
            out.push(']');
        }
        Doc::Object(pairs) => {
            let mut ordered: Vec<&(String, Doc)> = pairs.iter().collect();
            match style.key_order {
                KeyOrder::Generated => {}
                KeyOrder::Reversed => ordered.reverse(),
                KeyOrder::Rotated(n) if !ordered.is_empty() => {
                    let n = n % ordered.len();
                    ordered.rotate_left(n);
                }
                KeyOrder::Rotated(_) => {}
            }
            out.push('{');
            for (i, (key, value)) in ordered.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(sep);
                write_string(out, key, style.escape_all);
                out.push_str(sep);
                out.push(':');
                out.push_str(sep);
                write_doc(out, value, style);
                out.push_str(sep);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str, escape_all: bool) {
    if !escape_all {
        let quoted = serde_json::to_string(s).expect("serializing a str cannot fail");
        out.push_str(&quoted);
        return;
    }
    out.push('"');
    let mut units = [0u16; 2];
    for c in s.chars() {
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out.push('"');
}

/// Write `mantissa × 10^exponent` in the given notation.
pub fn spell_number(mantissa: i64, exponent: i32, spelling: NumberSpelling) -> String {
    match spelling {
        NumberSpelling::Exponent => format!("{}e{}", mantissa, exponent),
        NumberSpelling::Padded => format!("{}.000e{}", mantissa, exponent),
        NumberSpelling::Plain => {
            let sign = if mantissa < 0 { "-" } else { "" };
            let digits = mantissa.unsigned_abs().to_string();
            if mantissa == 0 {
                "0".to_string()
            } else if exponent >= 0 {
                format!("{}{}{}", sign, digits, "0".repeat(exponent as usize))
            } else {
                let frac_len = exponent.unsigned_abs() as usize;
                let padded = format!("{:0>width$}", digits, width = frac_len + 1);
                let (int, frac) = padded.split_at(padded.len() - frac_len);
                format!("{}{}.{}", sign, int, frac)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonsum_core::{digest, Sha256Hasher};

    #[test]
    fn test_spell_number() {
        assert_eq!(spell_number(12, 2, NumberSpelling::Plain), "1200");
        assert_eq!(spell_number(-12345, -2, NumberSpelling::Plain), "-123.45");
        assert_eq!(spell_number(5, -3, NumberSpelling::Plain), "0.005");
        assert_eq!(spell_number(0, -3, NumberSpelling::Plain), "0");
        assert_eq!(spell_number(-7, 1, NumberSpelling::Exponent), "-7e1");
        assert_eq!(spell_number(0, 4, NumberSpelling::Padded), "0.000e4");
    }

    #[test]
    fn test_render_styles() {
        let doc = Doc::Object(vec![
            ("a".into(), Doc::Number { mantissa: 15, exponent: -1 }),
            ("b".into(), Doc::Array(vec![Doc::Null, Doc::String("é".into())])),
        ]);
        assert_eq!(doc.to_json(), r#"{"a":15e-1,"b":[null,"é"]}"#);

        let style = Style {
            key_order: KeyOrder::Reversed,
            numbers: NumberSpelling::Plain,
            escape_all: true,
            spaced: false,
        };
        assert_eq!(
            doc.render(&style),
            r#"{"\u0062":[null,"\u00e9"],"\u0061":1.5}"#
        );
    }

    #[test]
    fn test_duplicate_key() {
        let doc = Doc::Object(vec![("k".into(), Doc::Bool(true))]);
        assert_eq!(
            doc.with_duplicate_key().unwrap().to_json(),
            r#"{"k":true,"k":null}"#
        );
        assert!(Doc::Array(vec![]).with_duplicate_key().is_none());
    }

    proptest! {
        #[test]
        fn test_every_rendering_parses(doc in doc(), style in style()) {
            let json = doc.render(&style);
            prop_assert!(digest(&json, Sha256Hasher::new).is_ok(), "failed on {}", json);
        }
    }
}
