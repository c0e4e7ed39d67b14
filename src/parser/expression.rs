//! Placeholder expression parser
//!
//! Parses `[{]{[tag][:fmt]}[}]` starting at an opening brace. Anything that is not
//! a complete, balanced, identifier-only expression is rejected so the caller can
//! emit the brace as plain text.

use super::ast::Expression;

/// A placeholder whose raw text reaches this many bytes is rejected
pub const MAX_RAW_LEN: usize = 63;
/// A tag reaching this many bytes is rejected
pub const MAX_TAG_LEN: usize = 31;
/// A format spec reaching this many bytes is rejected
pub const MAX_FMT_LEN: usize = 31;

/// Parse the placeholder at the start of `input`.
///
/// `input` must start with `{`. Returns `None` when the braces never balance, a
/// control character or non-identifier character appears in the tag, or one of
/// the length limits is hit.
pub fn parse_expression(input: &str) -> Option<Expression<'_>> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    let mut depth = 0usize;

    while bytes.get(pos) == Some(&b'{') {
        pos += 1;
        depth += 1;
        if pos >= MAX_RAW_LEN {
            return None;
        }
    }
    if depth == 0 {
        return None;
    }
    let opening = depth;

    let mut tag = String::new();
    let mut fmt: Option<String> = None;
    let mut chars = input[pos..].chars();

    while depth > 0 {
        // running out of input here means the expression is unterminated
        let c = chars.next()?;
        match c {
            c if (c as u32) < 32 => return None,
            c if c < '0' && fmt.is_none() => return None,
            '}' => depth -= 1,
            ':' => fmt = Some(String::new()),
            c => match fmt.as_mut() {
                Some(fmt) => fmt.push(c),
                None => tag.push(c),
            },
        }
        pos += c.len_utf8();

        let fmt_len = fmt.as_ref().map_or(0, String::len);
        if pos >= MAX_RAW_LEN || tag.len() >= MAX_TAG_LEN || fmt_len >= MAX_FMT_LEN {
            return None;
        }
    }

    Some(Expression {
        depth: opening,
        tag,
        fmt: fmt.unwrap_or_default(),
        raw: &input[..pos],
    })
}
