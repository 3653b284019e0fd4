//! Token stream rendering for the command line: one line per token, or an
//! ESTree-flavoured JSON document.

use std::fmt::Write;

use serde_json::{Map, Value, json};

use crate::lexer::{Comment, Context, Token, TokenKind, TokenValue};
use crate::types::number_to_string;

fn type_name(kind: TokenKind) -> String {
    match kind {
        TokenKind::Keyword(_) => "Keyword".to_string(),
        TokenKind::EscapedKeyword(_) => "EscapedKeyword".to_string(),
        other => format!("{other:?}"),
    }
}

fn value_text(value: &TokenValue) -> Option<String> {
    match value {
        TokenValue::None => None,
        TokenValue::Name(name) => Some(name.clone()),
        TokenValue::String(s) => Some(format!("{:?}", s.to_rust_string())),
        TokenValue::Number(n) => Some(number_to_string(*n)),
        TokenValue::BigInt { value, .. } => Some(format!("{value}n")),
        TokenValue::Template { cooked: Some(cooked), .. } => {
            Some(format!("{:?}", cooked.to_rust_string()))
        }
        TokenValue::Template { cooked: None, raw } => {
            Some(format!("(invalid) raw {:?}", raw.to_rust_string()))
        }
        TokenValue::RegExp { pattern, flags } => Some(format!("/{pattern}/{flags}")),
    }
}

/// `line:column Kind value`, plus the raw text when it was captured.
pub fn format_token(token: &Token) -> String {
    let mut line = format!("{}:{} {}", token.line, token.column, type_name(token.kind));
    if let Some(value) = value_text(&token.value) {
        line.push(' ');
        line.push_str(&value);
    }
    if let Some(raw) = &token.raw {
        let _ = write!(line, " raw={raw:?}");
    }
    line
}

pub fn format_comment(comment: &Comment) -> String {
    format!(
        "{}:{} Comment({:?}) {:?}",
        comment.start_line, comment.start_column, comment.kind, comment.text
    )
}

/// Tokens and comments interleaved in source order, one per line.
pub fn render_text(tokens: &[Token], comments: &[Comment]) -> String {
    let mut out = String::new();
    let mut comments = comments.iter().peekable();
    for token in tokens {
        while let Some(comment) = comments.next_if(|c| c.start < token.start) {
            out.push_str(&format_comment(comment));
            out.push('\n');
        }
        out.push_str(&format_token(token));
        out.push('\n');
    }
    for comment in comments {
        out.push_str(&format_comment(comment));
        out.push('\n');
    }
    out
}

fn position(line: u32, column: u32) -> Value {
    json!({ "line": line, "column": column })
}

fn value_json(value: &TokenValue) -> Value {
    match value {
        TokenValue::None => Value::Null,
        TokenValue::Name(name) => json!(name),
        TokenValue::String(s) => json!(s.to_rust_string()),
        TokenValue::Number(n) => json!(n),
        TokenValue::BigInt { value, .. } => json!(value.to_string()),
        TokenValue::Template { cooked, raw } => json!({
            "cooked": cooked.as_ref().map(|c| c.to_rust_string()),
            "raw": raw.to_rust_string(),
        }),
        TokenValue::RegExp { .. } => Value::Null,
    }
}

pub fn token_to_json(token: &Token, context: Context) -> Value {
    let mut object = Map::new();
    object.insert("type".into(), json!(type_name(token.kind)));
    object.insert("value".into(), value_json(&token.value));
    match &token.value {
        TokenValue::BigInt { literal, .. } => {
            object.insert("bigint".into(), json!(literal));
        }
        TokenValue::RegExp { pattern, flags } => {
            object.insert("regex".into(), json!({ "pattern": pattern, "flags": flags }));
        }
        _ => {}
    }
    if let Some(raw) = &token.raw {
        object.insert("raw".into(), json!(raw));
    }
    object.insert("start".into(), json!(token.start));
    object.insert("end".into(), json!(token.end));
    if context.contains(Context::RANGES) {
        object.insert("range".into(), json!([token.start, token.end]));
    }
    if let Some(end) = token.end_location {
        object.insert(
            "loc".into(),
            json!({
                "start": position(token.line, token.column),
                "end": position(end.line, end.column),
            }),
        );
    }
    Value::Object(object)
}

pub fn comment_to_json(comment: &Comment, context: Context) -> Value {
    let mut object = Map::new();
    object.insert("type".into(), json!(format!("{:?}", comment.kind)));
    object.insert("value".into(), json!(comment.text));
    object.insert("start".into(), json!(comment.start));
    object.insert("end".into(), json!(comment.end));
    if context.contains(Context::RANGES) {
        object.insert("range".into(), json!([comment.start, comment.end]));
    }
    if context.contains(Context::LOCATIONS) {
        object.insert(
            "loc".into(),
            json!({
                "start": position(comment.start_line, comment.start_column),
                "end": position(comment.end_line, comment.end_column),
            }),
        );
    }
    Value::Object(object)
}

/// `{"tokens": [...], "comments": [...]}`.
pub fn render_json(tokens: &[Token], comments: &[Comment], context: Context) -> Value {
    json!({
        "tokens": tokens.iter().map(|t| token_to_json(t, context)).collect::<Vec<_>>(),
        "comments": comments.iter().map(|c| comment_to_json(c, context)).collect::<Vec<_>>(),
    })
}
