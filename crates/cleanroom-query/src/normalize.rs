//! Query text normalization.
//!
//! Reduces surface syntax to a canonical token form so that queries
//! differing only in whitespace, case, or table aliasing classify
//! identically: whitespace runs collapse to single spaces, keywords are
//! uppercased, spacing around parentheses/commas is tightened, and
//! `alias.field` qualifiers are stripped down to `field`.
//!
//! Hand-rolled scanning on purpose; a real SQL parser is a non-goal.

/// Normalize free query text for matching.
pub fn normalize(text: &str) -> String {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();
    strip_qualifiers(&tighten_punctuation(&collapsed))
}

/// Drop spaces before `(`/`)`/`,` and after `(`/`,` so that
/// `COUNT ( DISTINCT key )` and `COUNT(DISTINCT key)` agree.
fn tighten_punctuation(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let next = chars.get(i + 1);
            if matches!(next, Some('(') | Some(')') | Some(',')) {
                continue;
            }
            if matches!(out.chars().last(), Some('(') | Some(',')) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Strip `alias.` qualifiers from column references (`T1.REGION` ->
/// `REGION`). A qualifier is an identifier directly followed by `.` and
/// another identifier; numeric literals (`100.0`) and quoted strings are
/// left alone.
fn strip_qualifiers(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    let mut in_quote = false;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            in_quote = !in_quote;
            out.push(c);
            i += 1;
            continue;
        }
        if !in_quote && is_ident_start(c) && !prev_is_ident(&chars, i) {
            let mut j = i;
            while j < chars.len() && is_ident_char(chars[j]) {
                j += 1;
            }
            if j < chars.len()
                && chars[j] == '.'
                && chars.get(j + 1).copied().map(is_ident_start).unwrap_or(false)
            {
                // Qualifier: drop the identifier and the dot.
                i = j + 1;
                continue;
            }
            out.extend(&chars[i..j]);
            i = j;
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn prev_is_ident(chars: &[char], i: usize) -> bool {
    i > 0 && (is_ident_char(chars[i - 1]) || chars[i - 1] == '.')
}
