//! Lexer for format specs using logos

use logos::Logos;

/// Width and precision taken from a numeric run such as `12.30`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Numeric {
    pub width: usize,
    pub precision: usize,
}

/// Width and precision saturate here
pub const MAX_NUMERIC: usize = u16::MAX as usize;

impl Numeric {
    /// Parse `width[.fraction]`, stripping trailing zeros off the fraction.
    ///
    /// `8.2` gives precision 2, `12.30` gives precision 3 and `8.25` gives 25.
    pub fn parse(run: &str) -> Self {
        let (int_part, rest) = run.split_once('.').unwrap_or((run, ""));
        let fraction: &str = rest
            .find(|c: char| !c.is_ascii_digit())
            .map_or(rest, |end| &rest[..end]);

        Self {
            width: saturating_digits(int_part),
            precision: saturating_digits(fraction.trim_end_matches('0')),
        }
    }
}

fn saturating_digits(digits: &str) -> usize {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0usize, |acc, d| {
            (acc * 10 + usize::from(d - b'0')).min(MAX_NUMERIC)
        })
}

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Directive {
    // Width and precision (also switches floats to fixed-point)
    #[regex(r"[0-9][0-9.]*", |lex| Numeric::parse(lex.slice()))]
    Numeric(Numeric),

    #[token("#")]
    ShowBase,
    #[token("b")]
    BoolAlpha,
    #[token("D")]
    DecimalUpper,
    #[token("d")]
    Decimal,
    #[token("O")]
    OctalUpper,
    #[token("o")]
    Octal,
    #[token("X")]
    HexUpper,
    #[token("x")]
    Hex,
    #[token("f")]
    Fixed,
    #[token("<")]
    AlignLeft,
    #[token(">")]
    AlignRight,

    // Everything else is a fill character
    #[regex(r"[^0-9#bDdOoXxf<>]", |lex| lex.slice().chars().next())]
    Fill(char),
}

/// Lex a format spec into directives, in order
pub fn lex(fmt: &str) -> impl Iterator<Item = Directive> + '_ {
    Directive::lexer(fmt).filter_map(Result::ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(fmt: &str) -> Vec<Directive> {
        lex(fmt).collect()
    }

    #[test]
    fn test_base_directives() {
        assert_eq!(
            directives("#xXoOdD"),
            vec![
                Directive::ShowBase,
                Directive::Hex,
                Directive::HexUpper,
                Directive::Octal,
                Directive::OctalUpper,
                Directive::Decimal,
                Directive::DecimalUpper,
            ]
        );
    }

    #[test]
    fn test_fill_and_alignment() {
        assert_eq!(
            directives(".>10"),
            vec![
                Directive::Fill('.'),
                Directive::AlignRight,
                Directive::Numeric(Numeric {
                    width: 10,
                    precision: 0
                }),
            ]
        );
    }

    #[test]
    fn test_dot_fill_before_numeric() {
        assert_eq!(
            directives(".16.4"),
            vec![
                Directive::Fill('.'),
                Directive::Numeric(Numeric {
                    width: 16,
                    precision: 4
                }),
            ]
        );
    }

    #[test]
    fn test_numeric_parse() {
        assert_eq!(Numeric::parse("8"), Numeric { width: 8, precision: 0 });
        assert_eq!(Numeric::parse("8.2"), Numeric { width: 8, precision: 2 });
        assert_eq!(Numeric::parse("12.30"), Numeric { width: 12, precision: 3 });
        assert_eq!(Numeric::parse("8.25"), Numeric { width: 8, precision: 25 });
        assert_eq!(Numeric::parse("8.05"), Numeric { width: 8, precision: 5 });
        assert_eq!(Numeric::parse("1.2.3"), Numeric { width: 1, precision: 2 });
        assert_eq!(Numeric::parse("12."), Numeric { width: 12, precision: 0 });
    }

    #[test]
    fn test_numeric_saturates() {
        let numeric = Numeric::parse("99999999999999999999999999.9");
        assert_eq!(numeric.width, MAX_NUMERIC);
        assert_eq!(numeric.precision, 9);
    }

    #[test]
    fn test_unicode_fill() {
        assert_eq!(directives("é"), vec![Directive::Fill('é')]);
    }
}
