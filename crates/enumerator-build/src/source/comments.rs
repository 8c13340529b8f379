//! Lexer-level comment scanner.
//!
//! `syn` drops plain comments, so override lookups need their own pass over
//! the raw text. String, raw string, byte string and char literals are
//! skipped so comment markers inside them are never reported. Doc comments
//! are attributes in Rust and are not recorded.

///
/// RawComment
/// Byte offset of the opening marker plus the trimmed body.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawComment {
    pub offset: usize,
    pub text: String,
}

/// Scan `src` for plain line and block comments in file order.
#[must_use]
pub fn scan(src: &str) -> Vec<RawComment> {
    let bytes = src.as_bytes();
    let mut comments = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = src[i..].find('\n').map_or(src.len(), |n| i + n);
                let body = &src[i + 2..end];

                if !is_line_doc(body) {
                    comments.push(RawComment {
                        offset: i,
                        text: body.trim().to_string(),
                    });
                }
                i = end;
            }

            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = block_end(bytes, i);
                let inner_end = if end >= i + 4 && src[..end].ends_with("*/") {
                    end - 2
                } else {
                    end
                };
                let body = &src[i + 2..inner_end];

                if !is_block_doc(body) {
                    comments.push(RawComment {
                        offset: i,
                        text: body.trim().to_string(),
                    });
                }
                i = end;
            }

            b'"' => i = string_end(bytes, i + 1),

            b'r' | b'b' | b'c' if !follows_ident(bytes, i) => {
                i = prefixed_literal_end(bytes, i).unwrap_or(i + 1);
            }

            b'\'' => i = quote_end(src, i),

            _ => i += 1,
        }
    }

    comments
}

// `///` (but not `////`) and `//!` are doc comments
fn is_line_doc(body: &str) -> bool {
    (body.starts_with('/') && !body.starts_with("//")) || body.starts_with('!')
}

// `/** */` (but not `/***` or `/**/`) and `/*! */` are doc comments
fn is_block_doc(body: &str) -> bool {
    (body.starts_with('*') && !body.starts_with("**") && body.len() > 1) || body.starts_with('!')
}

fn follows_ident(bytes: &[u8], i: usize) -> bool {
    i > 0 && (bytes[i - 1].is_ascii_alphanumeric() || bytes[i - 1] == b'_')
}

// Index just past the `*/` closing the block opened at `start`, honoring nesting.
fn block_end(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    let mut i = start;

    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'/', b'*') => {
                depth += 1;
                i += 2;
            }
            (b'*', b'/') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return i;
                }
            }
            _ => i += 1,
        }
    }

    bytes.len()
}

// Index just past the closing quote of an escaped string whose body starts at `i`.
fn string_end(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }

    bytes.len()
}

// `r"…"`, `r#"…"#`, `b"…"`, `br#"…"#`, `c"…"`, `cr"…"`.
// Returns `None` when the prefix turns out to start an ordinary identifier.
fn prefixed_literal_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if matches!(bytes[i], b'b' | b'c') {
        i += 1;
        if bytes.get(i) == Some(&b'"') {
            return Some(string_end(bytes, i + 1));
        }
    }

    if bytes.get(i) != Some(&b'r') {
        return None;
    }
    i += 1;

    let mut hashes = 0;
    while bytes.get(i) == Some(&b'#') {
        hashes += 1;
        i += 1;
    }
    if bytes.get(i) != Some(&b'"') {
        return None;
    }
    i += 1;

    while i < bytes.len() {
        if bytes[i] == b'"'
            && bytes.len() >= i + 1 + hashes
            && bytes[i + 1..i + 1 + hashes].iter().all(|b| *b == b'#')
        {
            return Some(i + 1 + hashes);
        }
        i += 1;
    }

    Some(bytes.len())
}

// A quote starts either a char literal or a lifetime / label.
fn quote_end(src: &str, start: usize) -> usize {
    let bytes = src.as_bytes();

    // skip the backslash and the escaped byte, which may itself be a quote
    if bytes.get(start + 1) == Some(&b'\\') {
        let mut i = start + 3;
        while i < bytes.len() && bytes[i] != b'\'' {
            i += 1;
        }
        return (i + 1).min(bytes.len());
    }

    let Some(ch) = src[start + 1..].chars().next() else {
        return bytes.len();
    };
    let after = start + 1 + ch.len_utf8();

    if bytes.get(after) == Some(&b'\'') {
        after + 1
    } else {
        start + 1
    }
}
