//! Case conversion
//!
//! Words are split on `_`, `-`, whitespace and case boundaries. A run of
//! uppercase letters followed by a lowercase letter ends one letter early, so
//! `HTTPServer` splits as `http` + `Server` rather than letter by letter.
//! All-uppercase words are lowercased when split.
//!
//! `to_underscore(to_camel_case(s)) == s` holds for lowercase, word-separated
//! input. It does not hold for acronym input (`HTTP_server` comes back as
//! `http_server`), and callers must not rely on it there.

/// Split into words, dropping separators
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            flush(&mut current, &mut words);
            continue;
        }

        if c.is_uppercase() && i > 0 && !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let after_lower = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_uppercase() && next.is_some_and(char::is_lowercase);
            if after_lower || acronym_end {
                flush(&mut current, &mut words);
            }
        }

        current.push(c);
    }
    flush(&mut current, &mut words);

    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let word = std::mem::take(current);
    if word.chars().any(char::is_lowercase) {
        words.push(word);
    } else {
        words.push(word.to_lowercase());
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leave the rest untouched
pub fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `user_name` → `UserName`; words are joined with `glue`
pub fn to_camel_case(input: &str, glue: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(glue)
}

/// `user_name` → `userName` (variable names)
pub fn to_lower_camel_case(input: &str) -> String {
    decapitalize(&to_camel_case(input, ""))
}

/// `UserName` → `user_name`
pub fn to_underscore(input: &str) -> String {
    join_lowercase(input, "_")
}

/// `UserName` → `user-name`
pub fn to_hyphenated(input: &str) -> String {
    join_lowercase(input, "-")
}

fn join_lowercase(input: &str, separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
