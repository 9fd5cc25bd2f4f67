//! Small case helpers shared by both translation directions.

/// First character uppercase, the rest lowercase. `"x-ray"` → `"X-ray"`.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
