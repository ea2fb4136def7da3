//! Parsing and validation of raw user text.
//!
//! The input form hands this module the exact strings the user typed:
//! comma-separated numbers, single integers, hash table keys. Everything is
//! validated here, before any run exists. Unparsable tokens are rejected
//! outright rather than silently dropped.

use rand::Rng;

use crate::error::{InputError, Result};
use crate::{MAX_INPUT_LEN, RANDOM_ARRAY_LEN};

/// Parse a comma-separated list of integers.
///
/// Rejects empty input, any token that is not an integer, and lists longer
/// than [`MAX_INPUT_LEN`].
pub fn parse_array(text: &str) -> Result<Vec<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let mut values = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        values.push(
            token
                .parse::<i64>()
                .map_err(|_| InputError::InvalidNumber(token.to_string()))?,
        );
    }

    if values.len() > MAX_INPUT_LEN {
        return Err(InputError::TooManyElements(values.len(), MAX_INPUT_LEN));
    }
    Ok(values)
}

/// Parse a single integer value.
pub fn parse_value(text: &str) -> Result<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    text.parse::<i64>()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}

/// Parse a non-negative index (list position, graph node id).
pub fn parse_index(text: &str) -> Result<usize> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    text.parse::<usize>()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}

/// Parse a hash table key: any non-empty trimmed string.
pub fn parse_key(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::EmptyKey);
    }
    Ok(text.to_string())
}

/// Generate a random array of [`RANDOM_ARRAY_LEN`] values in 1..=100.
pub fn random_array(rng: &mut impl Rng) -> Vec<i64> {
    (0..RANDOM_ARRAY_LEN).map(|_| rng.gen_range(1..=100)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_comma_separated_numbers() {
        assert_eq!(parse_array("64,34,25"), Ok(vec![64, 34, 25]));
        assert_eq!(parse_array(" 1 , -2 , 3 "), Ok(vec![1, -2, 3]));
        assert_eq!(parse_array("7"), Ok(vec![7]));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_array(""), Err(InputError::Empty));
        assert_eq!(parse_array("   "), Err(InputError::Empty));
        assert_eq!(parse_value(""), Err(InputError::Empty));
    }

    #[test]
    fn rejects_malformed_tokens_instead_of_filtering() {
        assert_eq!(
            parse_array("1,two,3"),
            Err(InputError::InvalidNumber("two".into()))
        );
        assert_eq!(
            parse_array("1,,3"),
            Err(InputError::InvalidNumber("".into()))
        );
        assert_eq!(
            parse_value("12.5"),
            Err(InputError::InvalidNumber("12.5".into()))
        );
    }

    #[test]
    fn rejects_oversized_arrays() {
        let text = (0..=MAX_INPUT_LEN)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(
            parse_array(&text),
            Err(InputError::TooManyElements(MAX_INPUT_LEN + 1, MAX_INPUT_LEN))
        );
    }

    #[test]
    fn parses_indices() {
        assert_eq!(parse_index("3"), Ok(3));
        assert_eq!(
            parse_index("-1"),
            Err(InputError::InvalidNumber("-1".into()))
        );
    }

    #[test]
    fn keys_must_be_nonempty() {
        assert_eq!(parse_key("  car "), Ok("car".to_string()));
        assert_eq!(parse_key("   "), Err(InputError::EmptyKey));
    }

    #[test]
    fn random_arrays_are_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = random_array(&mut rng);
        assert_eq!(values.len(), RANDOM_ARRAY_LEN);
        assert!(values.iter().all(|&v| (1..=100).contains(&v)));
    }
}
