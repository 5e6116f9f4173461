//! The compiler's per-symbol section naming convention for the COFF target.

/// Grouping prefixes the compiler uses when emitting one section per
/// function or datum (`-ffunction-sections`/`-fdata-sections` and friends).
/// A section whose name starts with one of these is a stripping candidate;
/// anything else is left alone.
pub const GROUPING_PREFIXES: &[&str] = &[".text$", ".rdata$", ".data$"];

/// Section names that, if they appear as a relocation's *source* section and
/// are not themselves inventoried, cause the whole relocation block to be
/// ignored rather than treated as an unknown origin.
pub const WEAK_SECTIONS: &[&str] = &[".rdata"];

/// Returns `true` if `name` starts with one of [`GROUPING_PREFIXES`].
pub fn has_grouping_prefix(name: &str) -> bool {
    GROUPING_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Strips the first matching entry of [`GROUPING_PREFIXES`] from the front of
/// `name`, if any. Returns `name` unchanged otherwise.
pub fn strip_grouping_prefix(name: &str) -> &str {
    for prefix in GROUPING_PREFIXES {
        if let Some(stripped) = name.strip_prefix(prefix) {
            return stripped;
        }
    }

    name
}

/// Returns `true` if `name` is in [`WEAK_SECTIONS`].
pub fn is_weak_section(name: &str) -> bool {
    WEAK_SECTIONS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_known_prefixes() {
        assert_eq!(strip_grouping_prefix(".text$main"), "main");
        assert_eq!(strip_grouping_prefix(".rdata$str"), "str");
        assert_eq!(strip_grouping_prefix(".data$blob"), "blob");
    }

    #[test]
    fn leaves_unknown_sections_untouched() {
        assert_eq!(strip_grouping_prefix(".bss"), ".bss");
        assert_eq!(strip_grouping_prefix("main"), "main");
    }

    #[test]
    fn recognizes_weak_sections() {
        assert!(is_weak_section(".rdata"));
        assert!(!is_weak_section(".rdata$str"));
    }
}
