// src/core/sanitize.rs

/// Drop every whitespace character, inner ones included.
/// "소아과 의원" and "소아과의원" both become "소아과의원".
pub fn normalize_type(s: &str) -> String {
    s.chars().filter(|&c| !is_label_space(c)).collect()
}

/// Unicode whitespace plus the information separators U+001C..=U+001F.
fn is_label_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `None` accepts everything. Otherwise the label must equal a non-empty
/// allow-list entry after both are normalized. Case is not folded.
pub fn type_matches(label: &str, allowed: Option<&[&str]>) -> bool {
    let Some(allowed) = allowed else { return true };

    let label = normalize_type(label);
    allowed.iter().any(|candidate| {
        let candidate = normalize_type(candidate);
        !candidate.is_empty() && candidate == label
    })
}
