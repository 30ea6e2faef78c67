//! Single-pass tokenizer for the constrained markup dialect.
//!
//! Scans left to right by byte; `<` opens a tag that runs to the next
//! `>`, everything else is a text run up to the next `<`. Tag names
//! are lower-cased for case-insensitive matching. Only double-quoted
//! `name="value"` attributes are captured; single-quoted and unquoted
//! values are silently skipped. There is no comment handling: a
//! `<!-- -->` block is scanned as an ordinary tag whose body has no
//! leading name byte, so it produces no token at all. That is a
//! tolerance gap, not an error path; tokenization never fails.

use crate::token::Token;
use memchr::memchr;

/// Tokenizes `input` into a fully materialized token sequence.
///
/// The output is a `Vec`, not a lazy stream: the tree builder wants
/// plain single-pass consumption over a finite buffer.
pub fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            // Text run: everything up to the next tag open.
            let end = memchr(b'<', &bytes[i..]).map_or(bytes.len(), |rel| i + rel);
            let text = input[i..end].trim();
            if !text.is_empty() {
                out.push(Token::Text(text.to_string()));
            }
            i = end;
            continue;
        }

        // Tag: scan to the matching '>'. An unterminated tag at end of
        // input is dropped along with the rest of the buffer.
        let Some(rel) = memchr(b'>', &bytes[i + 1..]) else {
            break;
        };
        let body = &input[i + 1..i + 1 + rel];
        i += rel + 2;

        if let Some(rest) = body.strip_prefix('/') {
            let name = tag_name(rest);
            if !name.is_empty() {
                out.push(Token::Close(name));
            }
        } else if let Some(rest) = body.strip_suffix('/') {
            let name = tag_name(rest);
            if !name.is_empty() {
                out.push(Token::SelfClose(name));
            }
        } else {
            let name = tag_name(body);
            if !name.is_empty() {
                let attributes = parse_attributes(&body[name.len()..]);
                out.push(Token::Open { name, attributes });
            }
        }
    }
    out
}

// Leading run of tag-name characters, lower-cased. Stops at the first
// byte that cannot be part of a name, so `h1 class="x"` yields `h1`.
// A body that does not start with a name byte (e.g. `!-- note --`)
// yields the empty string and the token is dropped by the caller.
fn tag_name(body: &str) -> String {
    let end = body
        .bytes()
        .position(|b| !is_name_byte(b))
        .unwrap_or(body.len());
    body[..end].to_ascii_lowercase()
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

// `name="value"` pairs from an open-tag body. Anything that is not a
// double-quoted pair (bare attributes, single quotes, unquoted
// values) is skipped without being captured.
fn parse_attributes(body: &str) -> Vec<(String, String)> {
    let bytes = body.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let name_start = i;
        while i < bytes.len() && is_name_byte(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            // Not a name character; resynchronize one byte on.
            i += 1;
            continue;
        }
        let name = body[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue; // bare attribute, skipped
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'"' {
            // Single-quoted or unquoted value: consume it unrecorded.
            while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            continue;
        }
        i += 1;
        let value_start = i;
        let Some(rel) = memchr(b'"', &bytes[i..]) else {
            break; // unterminated quote: drop the tail
        };
        let value = body[value_start..value_start + rel].to_string();
        i = value_start + rel + 1;
        out.push((name, value));
    }
    out
}
