//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the checksum must reproduce these digests
//! exactly. The equivalence and rejection cases pin the behavior that makes
//! the checksum structural.

/// A document with its expected checksums.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The JSON text.
    pub json: &'static str,
    /// Expected SHA-256 checksum (hex).
    pub sha256: &'static str,
    /// Expected CRC-32 checksum (hex, big-endian).
    pub crc32: &'static str,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "null",
            json: "null",
            sha256: "1b16b1df538ba12dc3f97edbb85caa7050d46c148134290feba80f8236c83db9",
            crc32: "7808a3d2",
        },
        GoldenVector {
            name: "true",
            json: "true",
            sha256: "e3b98a4da31a127d4bde6e43033f66ba274cab0eb7eb1c70ec41402bf6273dd8",
            crc32: "856a5aa8",
        },
        GoldenVector {
            name: "false",
            json: "false",
            sha256: "252f10c83610ebca1a059c0bae8255eba2f95be4d1d7bcfa89d7248a82d9f111",
            crc32: "76d32be0",
        },
        GoldenVector {
            name: "integer",
            json: "2",
            sha256: "ed810973eaa35a4a3a199f3c41184e10f8d00e425e6036e079887721fd5b1c7d",
            crc32: "7ed6f925",
        },
        GoldenVector {
            name: "zero",
            json: "0",
            sha256: "5c5467ce009ea354af8d88425fd90e72124a88732c86757b1a75cb3508d7a219",
            crc32: "7d522d4b",
        },
        GoldenVector {
            name: "string",
            json: r#""hi""#,
            sha256: "554779a109218176f87b4457dda85d39a46167952fe317f3e9c70675b5ef0aad",
            crc32: "d4eed936",
        },
        GoldenVector {
            name: "empty array",
            json: "[]",
            sha256: "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945",
            crc32: "0d4cbb29",
        },
        GoldenVector {
            name: "empty object",
            json: "{}",
            sha256: "2bdc0496095f267441ed066cc638833fa79a52b7f8deb80c952dfac373d0c636",
            crc32: "dd401781",
        },
        GoldenVector {
            name: "flat object",
            json: r#"{"hi":1,"ho":2}"#,
            sha256: "de2cb6a177865f744f59173d9ddb2f83fc209a4462c55098223a8581b9275bc5",
            crc32: "4dfcb6f5",
        },
        GoldenVector {
            name: "nested arrays",
            json: "[[],[2]]",
            sha256: "b1e34e12e465a4b411ab3585f5128834203a51c1ad4c3efc1caf6a95c71162d0",
            crc32: "7bcec8bd",
        },
        GoldenVector {
            name: "mixed array",
            json: r#"[{},"ho",{"hi":2}]"#,
            sha256: "71c5dcec05501cd68e8665df7a411c300ae53e1528a5099697eb123620f87ca0",
            crc32: "963ca78d",
        },
        GoldenVector {
            name: "nested objects",
            json: r#"{"a":{"c":{"hi":"ho"}},"b":{"d":{"x":1}}}"#,
            sha256: "28694589fdf13f1ac0dc20c0e69712f6e693185838cd9a4198f8e586ce7d691b",
            crc32: "b9e785a6",
        },
        GoldenVector {
            name: "realistic record",
            json: r#"{"entity":"Clayton High School","score":90,"violations":[5,-1.25e3],"open":true,"closed":null}"#,
            sha256: "9a7f9be962815b10eb99762c55668b50a67492fe2a0600644750dc7c737f97d7",
            crc32: "c9eba24f",
        },
    ]
}

/// A pair of documents and whether they must share a checksum.
#[derive(Debug, Clone)]
pub struct EquivalenceCase {
    pub name: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub equal: bool,
}

/// Pairs that pin the equivalence relation.
pub fn equivalence_cases() -> Vec<EquivalenceCase> {
    fn case(name: &'static str, left: &'static str, right: &'static str, equal: bool) -> EquivalenceCase {
        EquivalenceCase {
            name,
            left,
            right,
            equal,
        }
    }

    vec![
        case("key order does not matter", r#"{"hi":1,"ho":2}"#, r#"{"ho":2,"hi":1}"#, true),
        case(
            "nested key order does not matter",
            r#"{"a":{"x":[1,{"p":1,"q":2}],"y":null}}"#,
            r#"{"a":{"y":null,"x":[1,{"q":2,"p":1}]}}"#,
            true,
        ),
        case("number spelling does not matter", "2", "2.0", true),
        case("exponent spelling does not matter", "2e0", "20e-1", true),
        case("zero spelling does not matter", "0", "-0.0e5", true),
        case("whitespace does not matter", "[1, 2]", " [ 1,2 ]\n", true),
        case("string escapes are decoded", r#""\t""#, r#""\u0009""#, true),
        case("array nesting matters", "[[],[2]]", "[[[2]]]", false),
        case("object nesting matters", r#"[{},"ho",{"hi":2}]"#, r#"[{"ho":{"hi":2}}]"#, false),
        case("array order matters", "[1,2]", "[2,1]", false),
        case(
            "repeated objects in arrays do not cancel",
            r#"[{"1":1},{"1":1},{"1":1}]"#,
            r#"[{"1":1}]"#,
            false,
        ),
        case("identical values do not cancel", r#"{"a":1,"b":1}"#, r#"{"a":2,"b":2}"#, false),
        case(
            "identical subobjects do not cancel",
            r#"{"a":{"c":{"hi":"ho"}},"b":{"d":{"x":1}}}"#,
            r#"{"a":{"c":{"hi":"ho","extra":1}},"b":{"d":{"x":1,"extra":1}}}"#,
            false,
        ),
        case("type matters", r#"["1"]"#, "[1]", false),
        case("empty containers differ", "[]", "{}", false),
    ]
}

/// Expected failure class for a rejected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Parse,
    DuplicateKey,
}

/// Documents that must be rejected.
pub fn rejection_cases() -> Vec<(&'static str, Rejection)> {
    vec![
        (r#"{"test":"hi""#, Rejection::Parse),
        (r#"{"test":}"#, Rejection::Parse),
        ("", Rejection::Parse),
        ("[1,]", Rejection::Parse),
        ("[1] [2]", Rejection::Parse),
        (r#""\ud800""#, Rejection::Parse),
        (r#"{"1":1,"2":2,"1":1}"#, Rejection::DuplicateKey),
        (r#"[{"a":{"b":1,"b":1}}]"#, Rejection::DuplicateKey),
        (r#"{"a":1,"a":1}"#, Rejection::DuplicateKey),
    ]
}

/// Check a rejection against a core error.
pub fn matches_rejection(expected: Rejection, error: &jsonsum_core::Error) -> bool {
    matches!(
        (expected, error),
        (Rejection::Parse, jsonsum_core::Error::Parse(_))
            | (Rejection::DuplicateKey, jsonsum_core::Error::DuplicateKey(_))
    )
}
