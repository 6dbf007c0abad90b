//! Integer literal recognition.
//!
//! Accepts the literal forms of C's `strtol` with base 0: an optional sign,
//! then `0x`/`0X` hexadecimal, leading-zero octal, or decimal. Unlike
//! `strtol`, the whole token must be a single literal.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum IntLiteral {
    #[regex(r"[+-]?0[xX][0-9a-fA-F]+")]
    Hex,

    #[regex(r"[+-]?0[0-7]*")]
    Octal,

    #[regex(r"[+-]?[1-9][0-9]*")]
    Decimal,
}

impl IntLiteral {
    fn radix(self) -> u32 {
        match self {
            Self::Hex => 16,
            Self::Octal => 8,
            Self::Decimal => 10,
        }
    }
}

/// Parse a whole token as an `i64`.
///
/// Returns `None` for anything that is not exactly one literal, including
/// values that do not fit.
pub fn parse_integer(token: &str) -> Option<i64> {
    let mut lexer = IntLiteral::lexer(token);
    let literal = lexer.next()?.ok()?;
    if lexer.span() != (0..token.len()) || lexer.next().is_some() {
        return None;
    }

    let (negative, unsigned) = match token.as_bytes()[0] {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    let digits = match literal {
        IntLiteral::Hex => &unsigned[2..],
        IntLiteral::Octal | IntLiteral::Decimal => unsigned,
    };

    let magnitude = i128::from(u64::from_str_radix(digits, literal.radix()).ok()?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_integer("72"), Some(72));
        assert_eq!(parse_integer("-15"), Some(-15));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("0"), Some(0));
    }

    #[test]
    fn test_hex_and_octal() {
        assert_eq!(parse_integer("0x1f"), Some(31));
        assert_eq!(parse_integer("0XFF"), Some(255));
        assert_eq!(parse_integer("-0x10"), Some(-16));
        assert_eq!(parse_integer("010"), Some(8));
        assert_eq!(parse_integer("-07"), Some(-7));
    }

    #[test]
    fn test_rejects_partial_literals() {
        for token in ["", "soon", "12abc", "0x", "08", " 5", "5 ", "--5", "-", "1.5", "0x1g"] {
            assert_eq!(parse_integer(token), None, "accepted {token:?}");
        }
    }

    #[test]
    fn test_limits() {
        assert_eq!(parse_integer("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_integer("9223372036854775808"), None);
        assert_eq!(parse_integer("0xffffffffffffffffff"), None);
    }
}
