use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_WORDS
/// words a generated binding must never take
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words = Vec::new();

    // prelude names that would turn a binding into a pattern
    words.extend(vec!["Ok", "Err", "Some", "None"]);

    // rust
    // https://doc.rust-lang.org/reference/keywords.html
    words.extend(vec![
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]);

    words.into_iter().collect()
});

/// Check if an identifier is a reserved word.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_prelude_variants_are_reserved() {
        for word in ["match", "Self", "async", "None", "Ok"] {
            assert!(is_reserved_word(word), "{word}");
        }
    }

    #[test]
    fn ordinary_names_are_free() {
        for word in ["k", "input", "token", "text", "f"] {
            assert!(!is_reserved_word(word), "{word}");
        }
    }

    #[test]
    fn weak_keywords_are_free() {
        for word in ["union", "raw", "safe"] {
            assert!(!is_reserved_word(word), "{word}");
        }
    }
}
