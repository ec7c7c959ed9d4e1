//! String-level passes that wrap the tokenizer/parser/generator pipeline.
//!
//! [`preprocess`] flattens the HTML line-break artifacts a contenteditable
//! input produces and hides backslash-escaped punctuation behind private-use
//! sentinels. [`restore_escapes`] undoes the sentinel substitution on the
//! generated markup.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Opens a sentinel. Followed by the decimal code point of the escaped char.
pub const SENTINEL_OPEN: char = '\u{E000}';
/// Closes a sentinel.
pub const SENTINEL_CLOSE: char = '\u{E001}';

static ESCAPED_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([1-~_*\[\]()`>#+=\-|{}.!])").unwrap());
static SENTINEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}([0-9]+)\x{E001}").unwrap());

// Safari wraps empty lines as <div><br></div>.
static EMPTY_DIV_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div><br[^>]*></div>").unwrap());
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br[^>]*>").unwrap());
static DIV_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</div>\s*<div>").unwrap());

/// Normalize HTML line breaks and substitute escaped punctuation.
pub fn preprocess(input: &str) -> String {
    let text = input.replace("&nbsp;", " ");
    let text = substitute_escapes(&text);

    let text = EMPTY_DIV_LINE_RE.replace_all(&text, "\n");
    let text = BR_RE.replace_all(&text, "\n");
    let text = DIV_BOUNDARY_RE.replace_all(&text, "\n");
    text.replace("<div>", "\n").replace("</div>", "")
}

/// Replace every `\c` for escapable `c` with a sentinel carrying `c`'s code point.
pub fn substitute_escapes(input: &str) -> String {
    ESCAPED_CHAR_RE
        .replace_all(input, |caps: &Captures<'_>| {
            let ch = caps[1].chars().next().unwrap_or_default();
            sentinel(ch)
        })
        .into_owned()
}

/// Replace every sentinel with the character it encodes.
///
/// Sentinels whose number is not a valid code point are left as they are.
/// Runs after HTML escaping, so an escaped `\<` inside code comes back as a raw `<`.
pub fn restore_escapes(input: &str) -> String {
    SENTINEL_RE
        .replace_all(input, |caps: &Captures<'_>| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn sentinel(ch: char) -> String {
    format!("{SENTINEL_OPEN}{}{SENTINEL_CLOSE}", u32::from(ch))
}

/// Escape text for use inside an HTML element or attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nbsp_becomes_space() {
        assert_eq!(preprocess("a&nbsp;b"), "a b");
    }

    #[test]
    fn br_variants_become_newlines() {
        assert_eq!(preprocess("a<br>b"), "a\nb");
        assert_eq!(preprocess("a<br/>b"), "a\nb");
        assert_eq!(preprocess("a<br class=\"x\">b"), "a\nb");
    }

    #[test]
    fn safari_empty_line_is_one_newline() {
        assert_eq!(preprocess("a<div><br></div>b"), "a\nb");
    }

    #[test]
    fn div_boundaries_collapse() {
        assert_eq!(preprocess("<div>a</div><div>b</div>"), "\na\nb");
        assert_eq!(preprocess("<div>a</div>  <div>b</div>"), "\na\nb");
    }

    #[test]
    fn escaped_punctuation_is_hidden() {
        assert_eq!(preprocess(r"\*x\*"), "\u{E000}42\u{E001}x\u{E000}42\u{E001}");
        assert_eq!(preprocess(r"\!"), "\u{E000}33\u{E001}");
    }

    #[test]
    fn unescapable_chars_keep_their_backslash() {
        assert_eq!(preprocess(r#"\" \0 \ "#), r#"\" \0 \ "#);
    }

    #[test]
    fn escaped_backslash_consumes_pair() {
        // `\\` escapes the backslash, the following `*` stays a marker.
        assert_eq!(preprocess(r"\\*"), "\u{E000}92\u{E001}*");
    }

    #[test]
    fn escaped_tag_is_not_a_line_break() {
        assert_eq!(restore_escapes(&preprocess(r"\<br>")), "<br>");
    }

    #[test]
    fn restore_inverts_substitution() {
        let input = r"\_a\* \[b\](c) \~ \` \> \# \+ \= \- \| \{ \} \. \!";
        let expected = "_a* [b](c) ~ ` > # + = - | { } . !";
        assert_eq!(restore_escapes(&substitute_escapes(input)), expected);
    }

    #[test]
    fn restore_keeps_invalid_code_points() {
        let surrogate = "\u{E000}55296\u{E001}";
        assert_eq!(restore_escapes(surrogate), surrogate);
    }

    #[test]
    fn html_escaping() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }
}
