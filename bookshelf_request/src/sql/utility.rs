use crate::error::{SqlError, SqlResult};

const QUOTE: char = '"';
const LIKE_ESCAPE: char = '\\';

/// Quotes a possibly dotted identifier, e.g. `books.title` becomes
/// `"books"."title"`.
pub fn get_identifier(name: &str) -> SqlResult<String> {
    let mut result = String::new();
    for (i, part) in name.split('.').enumerate() {
        if part.is_empty() {
            return Err(SqlError::EmptyIdentifier);
        }
        if i > 0 {
            result.push('.');
        }
        result.push(QUOTE);
        // Embedded quotes are doubled.
        for c in part.chars() {
            if c == QUOTE {
                result.push(QUOTE);
            }
            result.push(c);
        }
        result.push(QUOTE);
    }
    Ok(result)
}

pub fn get_argument_parameter(argument: usize) -> String {
    format!("${argument}")
}

/// Escapes `%`, `_` and the escape character itself, so the value matches
/// literally inside a LIKE pattern.
pub fn escape_like(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            result.push(LIKE_ESCAPE);
        }
        result.push(c);
    }
    result
}
