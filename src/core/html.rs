// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner text of the first `open_pat ... close_pat` block, case-insensitive.
/// `open_pat` is a tag prefix like `"<title"`; the match starts after its `>`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Byte range of the next `o ... c` block at or after `from`, close tag included.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Drop every `o ... c` block (e.g. `<script`/`</script>`), keeping the rest.
pub fn remove_blocks_ci(s: &str, o: &str, c: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pos = 0usize;
    while let Some((start, end)) = next_tag_block_ci(s, o, c, pos) {
        out.push_str(&s[pos..start]);
        pos = end;
    }
    out.push_str(&s[pos..]);
    out
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_tag {
            if ch == '>' { in_tag = false; out.push(' '); }
            continue;
        }
        // A bare '<' (e.g. "a < b") is text; tags start with a letter, '/' or '!'
        let opens_tag = ch == '<'
            && matches!(chars.peek(), Some(c) if c.is_ascii_alphabetic() || *c == '/' || *c == '!');
        if opens_tag { in_tag = true; } else { out.push(ch); }
    }
    super::sanitize::normalize_ws(&out)
}
