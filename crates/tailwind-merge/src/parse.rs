/// A class token split into its variants, important flag and base class.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    /// Variants in the order they were written, e.g. `["hover", "md"]`
    pub variants: Vec<&'a str>,
    /// The class without variants and without the important marker
    pub base: &'a str,
    /// Whether the class has an important modifier (!)
    pub has_important: bool,
    /// Offset of the postfix modifier `/` within `base`
    pub postfix_position: Option<usize>,
    /// The token lacks the configured prefix and is not ours to merge
    pub is_external: bool,
}

impl<'a> ParsedClass<'a> {
    fn external() -> Self {
        ParsedClass {
            variants: Vec::new(),
            base: "",
            has_important: false,
            postfix_position: None,
            is_external: true,
        }
    }

    /// The base class with any postfix modifier cut off.
    pub fn base_without_postfix(&self) -> &'a str {
        match self.postfix_position {
            Some(position) => &self.base[..position],
            None => self.base,
        }
    }
}

/// Splits one class token. Separators and `/` only count outside of
/// `[...]` and `(...)`.
pub(crate) fn parse_class<'a>(
    class: &'a str,
    separator: &str,
    prefix: Option<&str>,
) -> ParsedClass<'a> {
    let class = match prefix {
        Some(prefix) => match class
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(separator))
        {
            Some(rest) => rest,
            None => return ParsedClass::external(),
        },
        None => class,
    };

    let mut variants: Vec<&str> = Vec::new();
    let mut bracket_depth: i32 = 0;
    let mut paren_depth: i32 = 0;
    let mut modifier_start = 0;
    let mut postfix_modifier_pos: Option<usize> = None;

    let bytes = class.as_bytes();
    let separator = separator.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if bracket_depth == 0 && paren_depth == 0 {
            if !separator.is_empty() && bytes[i..].starts_with(separator) {
                variants.push(&class[modifier_start..i]);
                i += separator.len();
                modifier_start = i;
                // A `/` inside a variant is part of the variant
                postfix_modifier_pos = None;
                continue;
            }

            if c == b'/' {
                postfix_modifier_pos.get_or_insert(i);
                i += 1;
                continue;
            }
        }

        match c {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth -= 1,
            b'(' => paren_depth += 1,
            b')' => paren_depth -= 1,
            _ => {}
        }
        i += 1;
    }

    let base_with_important = &class[modifier_start..];

    // Trailing ! is current syntax, leading ! is legacy
    let (base, has_important, base_start) =
        if let Some(stripped) = base_with_important.strip_suffix('!') {
            (stripped, true, modifier_start)
        } else if let Some(stripped) = base_with_important.strip_prefix('!') {
            (stripped, true, modifier_start + 1)
        } else {
            (base_with_important, false, modifier_start)
        };

    let postfix_position = postfix_modifier_pos.and_then(|pos| pos.checked_sub(base_start));

    ParsedClass {
        variants,
        base,
        has_important,
        postfix_position,
        is_external: false,
    }
}

/// Sort variants so that `hover:focus:x` and `focus:hover:x` share a
/// modifier context. Arbitrary variants and order-sensitive variants keep
/// their position; only the runs between them are sorted.
pub(crate) fn sort_modifiers<'a>(
    modifiers: &[&'a str],
    order_sensitive: &[String],
) -> Vec<&'a str> {
    let mut result: Vec<&'a str> = Vec::with_capacity(modifiers.len());
    let mut current_segment: Vec<&'a str> = Vec::new();

    for &modifier in modifiers {
        let is_arbitrary = modifier.starts_with('[');
        let is_order_sensitive = order_sensitive.iter().any(|name| name == modifier);

        if is_arbitrary || is_order_sensitive {
            current_segment.sort_unstable();
            result.append(&mut current_segment);
            result.push(modifier);
        } else {
            current_segment.push(modifier);
        }
    }

    current_segment.sort_unstable();
    result.append(&mut current_segment);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{Expect, expect};

    fn check(class: &str, separator: &str, prefix: Option<&str>, expected: Expect) {
        let parsed = parse_class(class, separator, prefix);
        expected.assert_eq(&format!("{parsed:#?}"));
    }

    #[test]
    fn test_parse_variants_important_and_postfix() {
        check(
            "hover:focus:bg-red-500/50!",
            ":",
            None,
            expect![[r#"
                ParsedClass {
                    variants: [
                        "hover",
                        "focus",
                    ],
                    base: "bg-red-500/50",
                    has_important: true,
                    postfix_position: Some(
                        10,
                    ),
                    is_external: false,
                }"#]],
        );
    }

    #[test]
    fn test_parse_ignores_structure_inside_brackets() {
        check(
            "[&:nth-child(3)]:py-[calc(1px/2)]",
            ":",
            None,
            expect![[r#"
                ParsedClass {
                    variants: [
                        "[&:nth-child(3)]",
                    ],
                    base: "py-[calc(1px/2)]",
                    has_important: false,
                    postfix_position: None,
                    is_external: false,
                }"#]],
        );
    }

    #[test]
    fn test_parse_legacy_important_shifts_postfix() {
        let parsed = parse_class("md:!text-lg/7", ":", None);
        assert_eq!(parsed.variants, vec!["md"]);
        assert_eq!(parsed.base, "text-lg/7");
        assert!(parsed.has_important);
        assert_eq!(parsed.postfix_position, Some(7));
        assert_eq!(parsed.base_without_postfix(), "text-lg");
    }

    #[test]
    fn test_parse_slash_in_variant_is_not_a_postfix() {
        let parsed = parse_class("group-hover/item:w-1/2", ":", None);
        assert_eq!(parsed.variants, vec!["group-hover/item"]);
        assert_eq!(parsed.base, "w-1/2");
        assert_eq!(parsed.postfix_position, Some(3));

        let parsed = parse_class("group-hover/item:p-2", ":", None);
        assert_eq!(parsed.postfix_position, None);
    }

    #[test]
    fn test_parse_first_slash_counts() {
        let parsed = parse_class("bg-red/50/50", ":", None);
        assert_eq!(parsed.postfix_position, Some(6));
    }

    #[test]
    fn test_parse_unbalanced_brackets_do_not_panic() {
        let parsed = parse_class("]]hover:p-2", ":", None);
        assert_eq!(parsed.variants, Vec::<&str>::new());
        assert_eq!(parsed.base, "]]hover:p-2");

        let parsed = parse_class("[hover:p-2", ":", None);
        assert!(parsed.variants.is_empty());
    }

    #[test]
    fn test_parse_multi_character_separator() {
        let parsed = parse_class("hover__focus__p-2", "__", None);
        assert_eq!(parsed.variants, vec!["hover", "focus"]);
        assert_eq!(parsed.base, "p-2");

        let parsed = parse_class("hover_p-2", "__", None);
        assert!(parsed.variants.is_empty());
        assert_eq!(parsed.base, "hover_p-2");
    }

    #[test]
    fn test_parse_prefix() {
        let parsed = parse_class("tw:hover:p-2", ":", Some("tw"));
        assert_eq!(parsed.variants, vec!["hover"]);
        assert_eq!(parsed.base, "p-2");
        assert!(!parsed.is_external);

        check(
            "hover:p-2",
            ":",
            Some("tw"),
            expect![[r#"
                ParsedClass {
                    variants: [],
                    base: "",
                    has_important: false,
                    postfix_position: None,
                    is_external: true,
                }"#]],
        );
        assert!(parse_class("twp-2", ":", Some("tw")).is_external);
    }

    #[test]
    fn test_sort_modifiers() {
        let order_sensitive = vec!["before".to_string()];
        assert_eq!(
            sort_modifiers(&["hover", "focus", "dark"], &order_sensitive),
            vec!["dark", "focus", "hover"]
        );
        assert_eq!(
            sort_modifiers(
                &["hover", "focus", "[&>*]", "md", "dark", "before", "b", "a"],
                &order_sensitive
            ),
            vec!["focus", "hover", "[&>*]", "dark", "md", "before", "a", "b"]
        );
        assert_eq!(
            sort_modifiers(&["before", "hover"], &[]),
            vec!["before", "hover"]
        );
    }
}
