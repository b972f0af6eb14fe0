//! Case conversion rules: upper, lower, title, sentence, toggle and the
//! identifier styles (camelCase, snake_case, kebab-case).
//!
//! Identifier styles work line by line so multi-line input keeps its shape.

pub fn upper_case(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower_case(input: &str) -> String {
    input.to_lowercase()
}

/// Lowercase everything, then capitalize the first character of each
/// whitespace-delimited word.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if c.is_whitespace() {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Lowercase everything, then capitalize the first alphanumeric character of
/// the text and of every sentence following `.`, `!` or `?`.
pub fn sentence_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if matches!(c, '.' | '!' | '?') {
            result.push(c);
            capitalize_next = true;
        } else if c.is_whitespace() {
            result.push(c);
        } else if capitalize_next && c.is_alphanumeric() {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            // A sentence that opens with a symbol (quote, bracket) is left alone
            result.extend(c.to_lowercase());
            capitalize_next = false;
        }
    }
    result
}

/// Swap the case of every character.
pub fn toggle_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_uppercase() {
            result.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Split a single line into words.
///
/// Any non-alphanumeric character separates words, as does a
/// lowercase-to-uppercase transition (`fooBar` -> `foo`, `Bar`).
pub fn split_into_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current_word = String::new();
    let mut prev_was_lowercase = false;

    for c in line.chars() {
        if !c.is_alphanumeric() {
            if !current_word.is_empty() {
                words.push(std::mem::take(&mut current_word));
            }
            prev_was_lowercase = false;
        } else if c.is_uppercase() && prev_was_lowercase {
            words.push(std::mem::take(&mut current_word));
            current_word.push(c);
            prev_was_lowercase = false;
        } else {
            current_word.push(c);
            prev_was_lowercase = c.is_lowercase();
        }
    }

    if !current_word.is_empty() {
        words.push(current_word);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn map_lines(input: &str, f: impl Fn(&str) -> String) -> String {
    input.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

pub fn camel_case(input: &str) -> String {
    map_lines(input, |line| {
        split_into_words(line)
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            })
            .collect()
    })
}

fn join_lowercase(line: &str, separator: &str) -> String {
    split_into_words(line)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn snake_case(input: &str) -> String {
    map_lines(input, |line| join_lowercase(line, "_"))
}

pub fn kebab_case(input: &str) -> String {
    map_lines(input, |line| join_lowercase(line, "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(upper_case("Hello World"), "HELLO WORLD");
        assert_eq!(lower_case("Hello World"), "hello world");
    }

    #[test]
    fn test_upper_expands_sharp_s() {
        assert_eq!(upper_case("straße"), "STRASSE");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello WORLD"), "Hello World");
        assert_eq!(title_case("one\ntwo  three"), "One\nTwo  Three");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            sentence_case("hELLO there. how ARE you?  fine!"),
            "Hello there. How are you?  Fine!"
        );
    }

    #[test]
    fn test_sentence_case_leading_whitespace() {
        assert_eq!(sentence_case("  hi. \n\nyo"), "  Hi. \n\nYo");
    }

    #[test]
    fn test_toggle_case() {
        assert_eq!(toggle_case("Hello World 42"), "hELLO wORLD 42");
    }

    #[test]
    fn test_split_into_words() {
        assert_eq!(
            split_into_words("parseHTTP request_body-v2"),
            vec!["parse", "HTTP", "request", "body", "v2"]
        );
        assert!(split_into_words("  --  ").is_empty());
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Hello big World"), "helloBigWorld");
        assert_eq!(camel_case("user_id\nfirst-name"), "userId\nfirstName");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Hello big World"), "hello_big_world");
        assert_eq!(snake_case("someValueHere"), "some_value_here");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("Hello, big World!"), "hello-big-world");
        assert_eq!(kebab_case("a b\n\nc d"), "a-b\n\nc-d");
    }
}
