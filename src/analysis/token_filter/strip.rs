//! Trimming of token edges.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trims Unicode whitespace from both ends of a token.
///
/// A token left with no text is stopped so it never reaches the vocabulary.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    pub fn new() -> Self {
        StripFilter
    }

    fn strip(token: Token) -> Token {
        let trimmed = token.text.trim();
        match trimmed.len() {
            0 => token.stop(),
            len if len == token.text.len() => token,
            _ => {
                let text = trimmed.to_string();
                token.with_text(text)
            }
        }
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            if token.is_stopped() {
                token
            } else {
                Self::strip(token)
            }
        })))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(filter: &StripFilter, words: &[&str]) -> Vec<Token> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        filter.filter(Box::new(tokens.into_iter())).unwrap().collect()
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let result = run(&StripFilter::new(), &["\u{a0}senate\t", "vote", " \u{2003} "]);

        assert_eq!(result[0].text, "senate");
        assert_eq!(result[1].text, "vote");
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_stopped_tokens_pass_untouched() {
        let tokens = vec![Token::new(" keep ", 0).stop()];
        let result: Vec<Token> = StripFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result[0].text, " keep ");
    }

    #[test]
    fn test_positions_survive() {
        let result = run(&StripFilter::new(), &["a", " b "]);
        assert_eq!(result[1].position, 1);
    }
}
