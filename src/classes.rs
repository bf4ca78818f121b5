/// Merge a fixed base class list with optional caller classes.
///
/// Base tokens always come first, in their original order. Caller tokens are
/// appended after them; a caller token that is already present is skipped,
/// so the result never loses a base token and merging twice is a no-op.
pub fn merge_classes(base: &str, extra: Option<&str>) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in base
        .split_whitespace()
        .chain(extra.unwrap_or_default().split_whitespace())
    {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}
