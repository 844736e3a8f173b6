//! Tokenizer for command lines.
//!
//! Tokens are separated by runs of whitespace. Leading and trailing
//! whitespace is ignored and there is no quoting.

/// Splits a command line into its keyword and the remaining tokens.
///
/// Returns `None` for a blank line.
pub fn split_keyword(input: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = input.split_whitespace();
    let keyword = tokens.next()?;
    Some((keyword, tokens.collect()))
}
