/// Uppercase the first character of every word, leaving the rest as-is.
///
/// A word starts at an alphanumeric or `_` that follows anything else.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }

    out
}

pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("light rain"), "Light Rain");
        assert_eq!(capitalize_words("new york"), "New York");
        assert_eq!(capitalize_words("stoke-on-trent"), "Stoke-On-Trent");
        assert_eq!(capitalize_words("  overcast   clouds"), "  Overcast   Clouds");
    }

    #[test]
    fn keeps_existing_case_and_non_ascii() {
        assert_eq!(capitalize_words("LONDON"), "LONDON");
        assert_eq!(capitalize_words("são paulo"), "São Paulo");
        assert_eq!(capitalize_words("ürümqi"), "Ürümqi");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn one_decimal_rounds() {
        assert_eq!(one_decimal(15.2), "15.2");
        assert_eq!(one_decimal(15.0), "15.0");
        assert_eq!(one_decimal(-3.46), "-3.5");
        assert_eq!(one_decimal(59.36), "59.4");
    }
}
