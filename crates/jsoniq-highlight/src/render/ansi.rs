use super::colors::Colors;
use crate::lexer::Token;

/// Writes tokens with ANSI colors; with [`Colors::OFF`] this is the plain input.
pub fn ansi<'s, I>(tokens: I, colors: Colors) -> String
where
    I: IntoIterator<Item = Token<'s>>,
{
    let mut out = String::new();
    for token in tokens {
        let color = colors.for_category(token.category);
        if color.is_empty() {
            out.push_str(token.lexeme);
        } else {
            out.push_str(color);
            out.push_str(token.lexeme);
            out.push_str(colors.reset);
        }
    }
    out
}
