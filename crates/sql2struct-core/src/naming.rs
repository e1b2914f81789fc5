//! Identifier transforms shared by the parser and the tag composer.

/// Converts a snake_case identifier into a PascalCase Go identifier.
///
/// The first character and every character following an underscore are
/// uppercased, then all underscores are removed: `err_code` becomes
/// `ErrCode`, `f_is_active` becomes `FIsActive`.
pub fn to_struct_name(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len());
    let mut upper_next = true;
    for c in identifier.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        upper_next = false;
    }
    result
}

/// Removes a configured prefix from an identifier.
///
/// Returns the identifier unchanged when the prefix is empty, not present,
/// or would leave nothing but underscores behind.
pub fn strip_prefix<'a>(prefix: &str, identifier: &'a str) -> &'a str {
    if prefix.is_empty() {
        return identifier;
    }
    match identifier.strip_prefix(prefix) {
        Some(rest) if rest.chars().any(|c| c != '_') => rest,
        Some(_) => {
            tracing::debug!(identifier, prefix, "prefix covers the whole identifier, keeping it");
            identifier
        }
        None => identifier,
    }
}

/// Strips `prefix` and PascalCases the remainder.
///
/// An identifier made only of underscores has no letters to keep; it becomes
/// one `X` per underscore so the Go name is never empty.
pub fn struct_name(prefix: &str, identifier: &str) -> String {
    let stripped = strip_prefix(prefix, identifier);
    let name = to_struct_name(stripped);
    if name.is_empty() && !stripped.is_empty() {
        "X".repeat(stripped.chars().count())
    } else {
        name
    }
}
