// File: crates/chart-embed/src/variant.rs
// Summary: Variant-typed field values and their encoders (scalar-or-raw,
// raw code passthrough, scalar-or-structured padding, scalar-or-list).

use std::cell::Cell;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{ChartError, Result};

/// A field that legally holds a boolean, an integer, or a string.
/// Each kind keeps its native JSON form; there is no coercion between kinds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BoolIntString {
    Bool(bool),
    Int(i64),
    String(String),
}

impl From<bool> for BoolIntString {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for BoolIntString {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for BoolIntString {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for BoolIntString {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// Encode a scalar-or-raw-literal value to its textual JSON form.
pub fn encode_scalar(value: &BoolIntString) -> Result<String> {
    match value {
        BoolIntString::Bool(b) => Ok(b.to_string()),
        BoolIntString::Int(i) => Ok(i.to_string()),
        BoolIntString::String(s) => Ok(serde_json::to_string(s)?),
    }
}

/// An "indexable option" in Chart.js terms: one value applied uniformly, or a
/// per-index list. A one-element list collapses to the bare scalar on output,
/// matching the reference wire format.
#[derive(Clone, Debug, PartialEq)]
pub enum Indexable<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T: Serialize> Serialize for Indexable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Single(v) => v.serialize(serializer),
            Self::Many(vs) if vs.len() == 1 => vs[0].serialize(serializer),
            Self::Many(vs) => vs.serialize(serializer),
        }
    }
}

impl<T> From<T> for Indexable<T> {
    fn from(v: T) -> Self {
        Self::Single(v)
    }
}

impl<T> From<Vec<T>> for Indexable<T> {
    fn from(vs: Vec<T>) -> Self {
        Self::Many(vs)
    }
}

// Raw code placeholders survive the JSON pass as marker-wrapped strings and
// are spliced back to verbatim text by `expand_raw_tokens`. The markers are
// private-use codepoints serde_json passes through unescaped. Both are
// reserved: a body whose marker count does not match the number of
// placeholders actually emitted (a user string smuggling a marker, or a
// marker inside code text) fails serialization outright.
pub(crate) const RAW_OPEN: char = '\u{E000}';
pub(crate) const RAW_CLOSE: char = '\u{E001}';

thread_local! {
    // Placeholders emitted by `JsCode::serialize` since the last reset.
    static EMITTED_RAW_TOKENS: Cell<usize> = const { Cell::new(0) };
}

pub(crate) fn reset_raw_token_count() {
    EMITTED_RAW_TOKENS.with(|count| count.set(0));
}

/// Literal JavaScript carried through serialization without quoting or
/// escaping, e.g. an inline callback body. The type, not a runtime check,
/// keeps this text out of the generic string-quoting path.
#[derive(Clone, Debug, PartialEq)]
pub struct JsCode(String);

impl JsCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JsCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl Serialize for JsCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        EMITTED_RAW_TOKENS.with(|count| count.set(count.get() + 1));
        serializer.collect_str(&format_args!("{RAW_OPEN}{}{RAW_CLOSE}", self.0))
    }
}

/// Encode a dynamically-typed value through the raw-code passthrough rule:
/// strings are returned verbatim (no quotes, no escapes), anything else is
/// a caller error.
pub fn encode_raw(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(ChartError::UnsupportedType {
            expected: "string",
            found: value_kind(other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Rewrite every marker-wrapped raw code placeholder in a compact JSON body
/// into its verbatim text. The placeholder is a complete JSON string token,
/// so interior quotes and backslashes arrive escaped and are undone here.
///
/// Every marker char in the body must belong to a placeholder emitted by
/// `JsCode` during the same serialization; any other occurrence means a
/// caller string carried a reserved code point and could be mistaken for
/// (or corrupt) a placeholder, so the whole body is rejected.
pub(crate) fn expand_raw_tokens(body: &str) -> Result<String> {
    let emitted = EMITTED_RAW_TOKENS.with(Cell::get);
    let markers = body
        .chars()
        .filter(|&c| c == RAW_OPEN || c == RAW_CLOSE)
        .count();
    if markers != emitted * 2 {
        return Err(ChartError::ReservedCodePoint);
    }

    let open = format!("\"{RAW_OPEN}");
    let close = format!("{RAW_CLOSE}\"");
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(start) = rest.find(&open) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail
            .find(&close)
            .ok_or(ChartError::ReservedCodePoint)?
            + close.len();
        // The quoted token, markers included.
        let unescaped: String = serde_json::from_str(&tail[..end])?;
        out.push_str(&unescaped[RAW_OPEN.len_utf8()..unescaped.len() - RAW_CLOSE.len_utf8()]);
        rest = &rest[start + end..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Box padding: a single uniform integer or up to six independent edge
/// members. Both-forms-at-once is unrepresentable by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Padding {
    Uniform(i64),
    Object(PaddingObject),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaddingObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

impl PaddingObject {
    pub fn is_empty(&self) -> bool {
        self.left.is_none()
            && self.right.is_none()
            && self.top.is_none()
            && self.bottom.is_none()
            && self.x.is_none()
            && self.y.is_none()
    }
}

impl Serialize for Padding {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Padding::Uniform(v) => serializer.serialize_i64(*v),
            Padding::Object(o) if o.is_empty() => Err(S::Error::custom(
                "padding has neither a uniform value nor any object members",
            )),
            Padding::Object(o) => o.serialize(serializer),
        }
    }
}

/// Encode a padding value standalone: bare integer for the uniform form,
/// a JSON object of exactly the populated members otherwise.
pub fn encode_padding(value: Option<&Padding>) -> Result<String> {
    match value.ok_or(ChartError::MissingPadding)? {
        Padding::Uniform(v) => Ok(v.to_string()),
        Padding::Object(o) if o.is_empty() => Err(ChartError::EmptyPadding),
        Padding::Object(o) => Ok(serde_json::to_string(o)?),
    }
}
