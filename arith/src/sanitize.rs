/// Characters that survive sanitization. `^` is kept so the caret spelling
/// of exponentiation reaches the parser alongside `**`.
pub const ALLOWED: &str = "0123456789+-*/().^";

/// Drops every character outside `ALLOWED`, preserving the order of the rest.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| ALLOWED.contains(*c)).collect()
}
