//! Format-spec interpretation
//!
//! A [`FormatSpec`] is the stream state a render carries from one placeholder to
//! the next. Each placeholder's directives are applied on top of it left to
//! right, so flags such as the base, the fill character or fixed-point notation
//! stay in effect for later placeholders. Only the width is single-use.

use super::lexer::{lex, Directive, Numeric};

/// Numeric base used for integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    #[default]
    Dec,
    Hex,
    Oct,
}

/// Which side padding goes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Not set; pads on the left like `Right`
    #[default]
    Default,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatSpec {
    /// Minimum rendered width in characters; 0 means no padding
    pub width: usize,
    /// Digits after the point (fixed) or significant digits (general).
    /// `None` means the default of 6.
    pub precision: Option<usize>,
    pub fill: char,
    pub alignment: Alignment,
    pub base: Base,
    pub uppercase: bool,
    /// Prefix hex with `0x` and octal with `0`
    pub show_base: bool,
    /// Render booleans as `true`/`false` instead of `1`/`0`
    pub bool_as_word: bool,
    /// Fixed-point instead of general float notation
    pub fixed: bool,
}

/// Precision used for floats until a spec sets one
pub const DEFAULT_PRECISION: usize = 6;

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            width: 0,
            precision: None,
            fill: ' ',
            alignment: Alignment::Default,
            base: Base::Dec,
            uppercase: false,
            show_base: false,
            bool_as_word: false,
            fixed: false,
        }
    }
}

impl FormatSpec {
    /// Interpret a format spec from a fresh state
    pub fn interpret(fmt: &str) -> Self {
        let mut spec = Self::default();
        spec.apply(fmt);
        spec
    }

    /// Layer the directives of `fmt` on top of this state.
    ///
    /// Every numeric run uses the width and precision of the first run in
    /// `fmt`.
    pub fn apply(&mut self, fmt: &str) {
        let first_numeric = lex(fmt).find_map(|d| match d {
            Directive::Numeric(numeric) => Some(numeric),
            _ => None,
        });

        for directive in lex(fmt) {
            match directive {
                Directive::Numeric(own) => {
                    let Numeric { width, precision } = first_numeric.unwrap_or(own);
                    self.width = width;
                    self.precision = Some(precision);
                    self.fixed = true;
                }
                Directive::ShowBase => self.show_base = true,
                Directive::BoolAlpha => self.bool_as_word = true,
                Directive::DecimalUpper => {
                    self.base = Base::Dec;
                    self.uppercase = true;
                }
                Directive::Decimal => self.base = Base::Dec,
                Directive::OctalUpper => {
                    self.base = Base::Oct;
                    self.uppercase = true;
                }
                Directive::Octal => self.base = Base::Oct,
                Directive::HexUpper => {
                    self.base = Base::Hex;
                    self.uppercase = true;
                }
                Directive::Hex => self.base = Base::Hex,
                Directive::Fixed => self.fixed = true,
                Directive::AlignLeft => self.alignment = Alignment::Left,
                Directive::AlignRight => self.alignment = Alignment::Right,
                Directive::Fill(c) => self.fill = c,
            }
        }
    }

    /// Take the single-use width, leaving 0 behind
    pub fn take_width(&mut self) -> usize {
        std::mem::take(&mut self.width)
    }

    pub fn precision_or_default(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Pad `text` to `width` characters with the fill character
    pub fn pad(&self, text: &str, width: usize) -> String {
        let len = text.chars().count();
        if len >= width {
            return text.to_string();
        }
        let padding: String = std::iter::repeat(self.fill).take(width - len).collect();
        match self.alignment {
            Alignment::Left => format!("{}{}", text, padding),
            Alignment::Right | Alignment::Default => format!("{}{}", padding, text),
        }
    }
}
