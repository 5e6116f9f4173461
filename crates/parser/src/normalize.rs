use deadstrip_graph::prefixes;

/// Turns a raw relocation `VALUE` token into the key used to look it up in
/// the symbol index.
///
/// This strips the decorations a calling convention or the compiler's own
/// grouping prefix add to a symbol name, so `_foo`, `.text$foo` and `foo`
/// all normalize to the same key.
pub fn normalize(raw: &str) -> &str {
    back_trim(front_trim(raw.trim_start()))
}

/// Strips a single leading decoration: the C `_` prefix, a fastcall `@...@`
/// wrapper, or one of the compiler's grouping prefixes.
fn front_trim(token: &str) -> &str {
    if let Some(rest) = token.strip_prefix('_') {
        return rest;
    }

    if let Some(rest) = token.strip_prefix('@') {
        return rest.split('@').next().unwrap_or(rest);
    }

    prefixes::strip_grouping_prefix(token)
}

/// Drops trailing whitespace, then a stdcall `@<digits>` suffix if present.
fn back_trim(token: &str) -> &str {
    let token = token.trim_end();
    let without_digits = token.trim_end_matches(|character: char| character.is_ascii_digit());

    if without_digits.len() != token.len() {
        if let Some(rest) = without_digits.strip_suffix('@') {
            return rest;
        }
    }

    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        assert_eq!(normalize("_foo"), "foo");
        assert_eq!(normalize("@bar@8"), "bar");
        assert_eq!(normalize(".text$baz"), "baz");
        assert_eq!(normalize("qux@12"), "qux");
        assert_eq!(normalize("  spaced  "), "spaced");
    }

    #[test]
    fn fastcall_convention() {
        assert_eq!(normalize("@fast@4"), "fast");
    }

    #[test]
    fn digits_without_at_sign_are_kept() {
        // Not a stdcall suffix: no `@` immediately before the digits.
        assert_eq!(normalize("item123"), "item123");
    }

    #[test]
    fn plain_c_symbol_is_unchanged() {
        assert_eq!(normalize("main"), "main");
    }
}
