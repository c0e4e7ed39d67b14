//! Textual rendering of integers and floats

use super::spec::{Base, FormatSpec};

/// Render an unsigned magnitude in the spec's base
pub fn format_unsigned(n: u64, spec: &FormatSpec) -> String {
    match spec.base {
        Base::Dec => n.to_string(),
        Base::Hex => {
            let digits = if spec.uppercase {
                format!("{:X}", n)
            } else {
                format!("{:x}", n)
            };
            match (spec.show_base && n != 0, spec.uppercase) {
                (true, true) => format!("0X{}", digits),
                (true, false) => format!("0x{}", digits),
                (false, _) => digits,
            }
        }
        Base::Oct => {
            if spec.show_base && n != 0 {
                format!("0{:o}", n)
            } else {
                format!("{:o}", n)
            }
        }
    }
}

/// Render a signed integer of the given bit width.
///
/// Hex and octal show negative values as two's complement of that width.
pub fn format_signed(value: i64, bits: u32, spec: &FormatSpec) -> String {
    match spec.base {
        Base::Dec => value.to_string(),
        Base::Hex | Base::Oct => {
            let mask = if bits >= 64 {
                u64::MAX
            } else {
                (1u64 << bits) - 1
            };
            format_unsigned(value as u64 & mask, spec)
        }
    }
}

/// Render a float in fixed or general notation
pub fn format_float(value: f64, spec: &FormatSpec) -> String {
    let text = if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let inf = if value < 0.0 { "-inf" } else { "inf" };
        inf.to_string()
    } else if spec.fixed {
        format!("{:.*}", spec.precision_or_default(), value)
    } else {
        format_general(value, spec.precision_or_default())
    };

    if spec.uppercase {
        text.to_uppercase()
    } else {
        text
    }
}

/// `%g`-style rendering with `precision` significant digits and trailing
/// zeros removed
fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i64 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i64 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(fmt: &str) -> FormatSpec {
        FormatSpec::interpret(fmt)
    }

    #[test]
    fn test_hex_and_octal() {
        assert_eq!(format_unsigned(42, &spec("x")), "2a");
        assert_eq!(format_unsigned(42, &spec("#x")), "0x2a");
        assert_eq!(format_unsigned(42, &spec("#X")), "0X2A");
        assert_eq!(format_unsigned(42, &spec("o")), "52");
        assert_eq!(format_unsigned(42, &spec("#o")), "052");
        assert_eq!(format_unsigned(42, &spec("#d")), "42");
    }

    #[test]
    fn test_zero_has_no_prefix() {
        assert_eq!(format_unsigned(0, &spec("#x")), "0");
        assert_eq!(format_unsigned(0, &spec("#o")), "0");
    }

    #[test]
    fn test_negative_twos_complement() {
        assert_eq!(format_signed(-1, 32, &spec("x")), "ffffffff");
        assert_eq!(format_signed(-1, 8, &spec("X")), "FF");
        assert_eq!(format_signed(-1, 64, &spec("x")), "ffffffffffffffff");
        assert_eq!(format_signed(-42, 32, &spec("d")), "-42");
    }

    #[test]
    fn test_general_floats() {
        let spec = FormatSpec::default();
        assert_eq!(format_float(3.14159, &spec), "3.14159");
        assert_eq!(format_float(2.5, &spec), "2.5");
        assert_eq!(format_float(100.0, &spec), "100");
        assert_eq!(format_float(1234567.0, &spec), "1.23457e+06");
        assert_eq!(format_float(1e20, &spec), "1e+20");
        assert_eq!(format_float(0.0001, &spec), "0.0001");
        assert_eq!(format_float(0.00001, &spec), "1e-05");
        assert_eq!(format_float(0.0, &spec), "0");
        assert_eq!(format_float(-0.5, &spec), "-0.5");
    }

    #[test]
    fn test_fixed_floats() {
        assert_eq!(format_float(3.14159, &spec("8.2")), "3.14");
        assert_eq!(format_float(3.14159, &spec("8")), "3");
        assert_eq!(format_float(3.14159, &spec("f")), "3.141590");
    }

    #[test]
    fn test_uppercase_floats() {
        assert_eq!(format_float(1e20, &spec("X")), "1E+20");
        assert_eq!(format_float(f64::INFINITY, &spec("X")), "INF");
        assert_eq!(format_float(f64::NEG_INFINITY, &spec("")), "-inf");
        assert_eq!(format_float(f64::NAN, &spec("")), "nan");
    }
}
