/// Build a URL-safe slug from a display name: lowercase, alphanumerics and
/// underscores kept, whitespace collapsed into single hyphens, everything
/// else dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
        // other characters are dropped without breaking the word
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Wireless Mouse"), "wireless-mouse");
    }

    #[test]
    fn strips_special_characters() {
        assert_eq!(slugify("ACME 27\" Monitor (HDMI)"), "acme-27-monitor-hdmi");
    }

    #[test]
    fn collapses_whitespace_and_hyphen_runs() {
        assert_eq!(slugify("  USB--C   cable  "), "usb-c-cable");
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(slugify("Model_42 rev 2"), "model_42-rev-2");
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("- padded -"), "padded");
    }
}
