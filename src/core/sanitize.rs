// src/core/sanitize.rs

/// Named entities we expect in court documents. Anything else is left as-is.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&aelig;", "æ"), ("&AElig;", "Æ"),
    ("&oslash;", "ø"), ("&Oslash;", "Ø"),
    ("&aring;", "å"), ("&Aring;", "Å"),
    ("&sect;", "§"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&lt;", "<"), ("&gt;", ">"),
    // last, so "&amp;lt;" stays "&lt;"
    ("&amp;", "&"),
];

pub fn normalize_entities(s: &str) -> String {
    let mut out = s!(s);
    for (from, to) in ENTITIES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Directory name for a case in the raw store. Keeps ASCII alphanumerics,
/// `-`, `_` and `.`; everything else becomes `_`. Never empty and never a
/// relative path component.
pub fn sanitize_case_dirname(case_id: &str) -> String {
    let mut out = String::with_capacity(case_id.len());
    for ch in case_id.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' { out.push(ch); }
        else { out.push('_'); }
    }
    if out.is_empty() || out.chars().all(|c| c == '.') {
        format!("case_{}", out.len())
    } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danish_entities_decode() {
        assert_eq!(normalize_entities("Højesteret &sect; 3, K&aring;re &amp; S&oslash;n"), "Højesteret § 3, Kåre & Søn");
        assert_eq!(normalize_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn case_dirnames_stay_inside_the_store() {
        assert_eq!(sanitize_case_dirname("1234"), "1234");
        assert_eq!(sanitize_case_dirname("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize_case_dirname(".."), "case_2");
        assert_eq!(sanitize_case_dirname(""), "case_0");
    }
}
