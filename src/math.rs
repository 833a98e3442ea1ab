//! Arbitrary-precision kernels.
//!
//! Exact arithmetic (sums, products, quotients, remainders, integer powers,
//! factorials) stays on `BigDecimal`. The transcendental functions run on
//! MPFR floats through `rug` and are converted back with the requested number
//! of significant digits. Every public kernel takes the number of significant
//! digits the caller needs and works with a few guard digits on top of it.
//! Arguments outside of a function's domain produce an error, never a panic.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rug::float::Constant;
use rug::ops::Pow;
use rug::Float;

use crate::errors::*;

const GUARD_DIGITS: u64 = 20;
pub const MAX_FACTORIAL: u64 = 100_000;
/// Periodic functions refuse arguments with more integer digits than this
pub const MAX_ANGLE_DIGITS: i64 = 10_000;
/// `%` refuses operands whose quotient would have more digits than this
pub const MAX_QUOTIENT_DIGITS: i64 = 100_000;
// longer runs of padding zeros are rendered with an exponent
const MAX_PLAIN_ZEROS: i64 = 1_000;

fn ten_pow(n: u64) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

// decimal digits of |i|, estimated from the bit length; at most one short
fn digit_count(i: &BigInt) -> i64 {
    let bits = i.bits();
    if bits == 0 {
        return 1;
    }
    ((bits - 1) as f64 * std::f64::consts::LOG10_2).floor() as i64 + 1
}

// number of digits before the decimal point; zero or negative for |x| < 1
fn int_digits(x: &BigDecimal) -> i64 {
    let (i, scale) = x.as_bigint_and_exponent();
    digit_count(&i) - scale
}

// binary precision holding `digits` significant decimal digits
fn float_bits(digits: u64) -> u32 {
    (digits.saturating_mul(3322) / 1000).saturating_add(16).min(u32::MAX as u64) as u32
}

fn mul(a: &BigDecimal, b: &BigDecimal, prec: u64) -> BigDecimal {
    (a * b).with_prec(prec)
}

// the divisor must not be zero
fn div_raw(a: &BigDecimal, b: &BigDecimal, prec: u64) -> BigDecimal {
    if a.is_zero() {
        return BigDecimal::zero();
    }
    let (ia, sa) = a.as_bigint_and_exponent();
    let (ib, sb) = b.as_bigint_and_exponent();
    // shift the dividend so the integer quotient keeps at least prec+1 digits
    let k = (prec as i64 + 2 + digit_count(&ib) - digit_count(&ia)).max(0);
    let q = ia * ten_pow(k as u64) / ib;
    BigDecimal::new(q, sa - sb + k).with_prec(prec)
}

fn to_float(x: &BigDecimal, bits: u32) -> CalcResult<Float> {
    let (i, scale) = x.as_bigint_and_exponent();
    let text = format!("{}e{}", i, -scale);
    let parsed = Float::parse(&text).map_err(|_| CalcError::StrToDecimal(to_plain_string(x)))?;
    Ok(Float::with_val(bits, parsed))
}

fn from_float(f: &Float, prec: u64) -> CalcResult<BigDecimal> {
    if !f.is_finite() {
        return Err(CalcError::NotFinite(f.to_string()));
    }
    if f.is_zero() {
        return Ok(BigDecimal::zero());
    }
    // |f| = 0.digits * 10^exp
    let (negative, digits, exp) = f.to_sign_string_exp(10, Some(prec as usize));
    let exp = exp.unwrap_or(0) as i64;
    let mantissa =
        BigInt::from_str(&digits).map_err(|_| CalcError::StrToDecimal(f.to_string()))?;
    let mantissa = if negative { -mantissa } else { mantissa };
    Ok(BigDecimal::new(mantissa, digits.len() as i64 - exp))
}

/// Exact conversion of a typed number, e.g. `12`, `-3.5`, `.5` or `5.`
pub fn parse_decimal(text: &str) -> CalcResult<BigDecimal> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut dots = 0;
    let mut digits = 0;
    for ch in unsigned.chars() {
        match ch {
            '.' => dots += 1,
            '0'..='9' => digits += 1,
            _ => return Err(CalcError::StrToDecimal(text.to_string())),
        }
    }
    if dots > 1 || digits == 0 {
        return Err(CalcError::StrToDecimal(text.to_string()));
    }

    let mut s = text.trim_end_matches('.').to_string();
    if s.starts_with("-.") {
        s.insert(1, '0');
    } else if s.starts_with('.') {
        s.insert(0, '0');
    }
    BigDecimal::from_str(&s).map_err(|_| CalcError::StrToDecimal(text.to_string()))
}

pub fn from_f64(f: f64) -> CalcResult<BigDecimal> {
    if !f.is_finite() {
        return Err(CalcError::NotFinite(f.to_string()));
    }
    BigDecimal::from_str(&f.to_string()).map_err(|_| CalcError::StrToDecimal(f.to_string()))
}

/// Nearest double. Too large values become infinite, too small ones zero
pub fn to_f64(x: &BigDecimal) -> f64 {
    let (i, scale) = x.as_bigint_and_exponent();
    format!("{}e{}", i, -scale).parse::<f64>().unwrap_or(f64::NAN)
}

// all digits without an exponent, however many zeros that takes
fn plain(x: &BigDecimal) -> String {
    let (i, scale) = x.as_bigint_and_exponent();
    let sign = if i.is_negative() { "-" } else { "" };
    let digits = i.magnitude().to_string();
    if scale <= 0 {
        if i.is_zero() {
            return "0".to_string();
        }
        return format!("{}{}{}", sign, digits, "0".repeat((-scale) as usize));
    }

    let scale = scale as usize;
    let digits = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = digits.split_at(digits.len() - scale);
    format!("{}{}.{}", sign, int_part, frac_part)
}

/// Renders a decimal without exponent, e.g. `1E+3` as `1000`.
///
/// Values that would need more than a thousand padding zeros keep their
/// exponent instead: `1E+5000` is rendered as `1E+5000`.
pub fn to_plain_string(x: &BigDecimal) -> String {
    let (i, scale) = x.as_bigint_and_exponent();
    if i.is_zero() {
        return "0".to_string();
    }
    let leading = -int_digits(x);
    if -scale <= MAX_PLAIN_ZEROS && leading <= MAX_PLAIN_ZEROS {
        return plain(x);
    }

    let sign = if i.is_negative() { "-" } else { "" };
    let all = i.magnitude().to_string();
    let exponent = all.len() as i64 - 1 - scale;
    let digits = all.trim_end_matches('0');
    let (first, rest) = digits.split_at(1);
    let fraction = if rest.is_empty() { String::new() } else { format!(".{}", rest) };
    format!("{}{}{}E{:+}", sign, first, fraction, exponent)
}

/// Rounds half up to `digits` fractional digits and drops trailing zeros,
/// collapsing to an integer when nothing is left after the point
pub fn round_to_display(x: &BigDecimal, digits: u32) -> String {
    // below half a unit of the last shown digit
    if x.is_zero() || int_digits(x) < -(digits as i64) - 1 {
        return "0".to_string();
    }
    let rounded = x.with_scale_round(digits as i64, RoundingMode::HalfUp);
    let s = plain(&rounded);
    if s.contains('.') {
        let s = s.trim_end_matches('0').trim_end_matches('.');
        if s == "-0" {
            return "0".to_string();
        }
        return s.to_string();
    }
    s
}

fn to_integer(x: &BigDecimal) -> BigInt {
    x.with_scale(0).as_bigint_and_exponent().0
}

/// Sum rounded to `prec` digits. An operand too small to reach the last digit
/// of the other one is skipped, so the exponents are never aligned exactly
pub fn add(a: &BigDecimal, b: &BigDecimal, prec: u64) -> BigDecimal {
    if a.is_zero() {
        return b.with_prec(prec);
    }
    if b.is_zero() {
        return a.with_prec(prec);
    }
    let gap = int_digits(a) - int_digits(b);
    let limit = (prec + GUARD_DIGITS) as i64;
    if gap > limit {
        return a.with_prec(prec);
    }
    if gap < -limit {
        return b.with_prec(prec);
    }
    (a + b).with_prec(prec)
}

pub fn sub(a: &BigDecimal, b: &BigDecimal, prec: u64) -> BigDecimal {
    add(a, &-b, prec)
}

pub fn multiply(a: &BigDecimal, b: &BigDecimal, prec: u64) -> BigDecimal {
    mul(a, b, prec)
}

pub fn div(a: &BigDecimal, b: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    if b.is_zero() {
        return Err(CalcError::DividedByZero(to_plain_string(a)));
    }
    Ok(div_raw(a, b, prec))
}

/// Remainder of truncated division, the sign follows the dividend
pub fn rem(a: &BigDecimal, b: &BigDecimal) -> CalcResult<BigDecimal> {
    if b.is_zero() {
        return Err(CalcError::DividedByZero(to_plain_string(a)));
    }
    let gap = int_digits(a) - int_digits(b);
    // |a| < |b| even when both digit counts are one short
    if gap < -1 || a.is_zero() {
        return Ok(a.clone());
    }
    if gap > MAX_QUOTIENT_DIGITS {
        return Err(CalcError::ArgumentOutOfRange(
            "%".to_string(),
            to_plain_string(a),
            format!("|quotient| < 1E+{}", MAX_QUOTIENT_DIGITS),
        ));
    }
    let (ia, sa) = a.as_bigint_and_exponent();
    let (ib, sb) = b.as_bigint_and_exponent();
    let scale = sa.max(sb);
    let na = ia * ten_pow((scale - sa) as u64);
    let nb = ib * ten_pow((scale - sb) as u64);
    Ok(BigDecimal::new(na % nb, scale))
}

// runs an MPFR function on `x` carried with `prec` plus guard digits
fn through_float(
    x: &BigDecimal,
    prec: u64,
    f: impl FnOnce(Float) -> Float,
) -> CalcResult<BigDecimal> {
    let v = to_float(x, float_bits(prec + GUARD_DIGITS))?;
    from_float(&f(v), prec)
}

pub fn sqrt(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    if x.is_negative() {
        return Err(CalcError::InvalidArgument("√".to_string(), to_plain_string(x)));
    }
    through_float(x, prec, Float::sqrt)
}

pub fn ln(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    if !x.is_positive() {
        return Err(CalcError::InvalidArgument("ln".to_string(), to_plain_string(x)));
    }
    through_float(x, prec, Float::ln)
}

pub fn log10(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    if !x.is_positive() {
        return Err(CalcError::InvalidArgument("log₁₀".to_string(), to_plain_string(x)));
    }
    through_float(x, prec, Float::log10)
}

pub fn log2(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    if !x.is_positive() {
        return Err(CalcError::InvalidArgument("log₂".to_string(), to_plain_string(x)));
    }
    through_float(x, prec, Float::log2)
}

fn constant(c: Constant, prec: u64) -> BigDecimal {
    let v = Float::with_val(float_bits(prec + GUARD_DIGITS), c);
    from_float(&v, prec).unwrap_or_default()
}

pub fn pi(prec: u64) -> BigDecimal {
    constant(Constant::Pi, prec)
}

pub fn e(prec: u64) -> BigDecimal {
    let v = Float::with_val(float_bits(prec + GUARD_DIGITS), 1).exp();
    from_float(&v, prec).unwrap_or_default()
}

pub fn abs(x: &BigDecimal) -> BigDecimal {
    x.abs()
}

// the whole integer part must survive the conversion, so the precision grows
// with it up to MAX_ANGLE_DIGITS
fn periodic(
    name: &str,
    x: &BigDecimal,
    prec: u64,
    f: impl FnOnce(Float) -> Float,
) -> CalcResult<BigDecimal> {
    let digits = int_digits(x);
    if digits > MAX_ANGLE_DIGITS {
        return Err(CalcError::ArgumentOutOfRange(
            name.to_string(),
            to_plain_string(x),
            format!("|x| < 1E+{}", MAX_ANGLE_DIGITS),
        ));
    }
    let v = to_float(x, float_bits(prec + GUARD_DIGITS + digits.max(0) as u64))?;
    from_float(&f(v), prec)
}

pub fn sin(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    periodic("sin", x, prec, Float::sin)
}

pub fn cos(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    periodic("cos", x, prec, Float::cos)
}

pub fn tan(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    periodic("tan", x, prec, Float::tan)
}

pub fn atan(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    through_float(x, prec, Float::atan)
}

fn inverse_periodic(
    name: &str,
    x: &BigDecimal,
    prec: u64,
    f: impl FnOnce(Float) -> Float,
) -> CalcResult<BigDecimal> {
    let v = to_float(x, float_bits(prec + GUARD_DIGITS))?;
    if v.clone().abs() > 1 {
        return Err(CalcError::InvalidArgument(name.to_string(), to_plain_string(x)));
    }
    from_float(&f(v), prec)
}

pub fn asin(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    inverse_periodic("sin⁻¹", x, prec, Float::asin)
}

pub fn acos(x: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    inverse_periodic("cos⁻¹", x, prec, Float::acos)
}

fn powi(base: &BigDecimal, exponent: i64, prec: u64) -> CalcResult<BigDecimal> {
    if exponent == 0 {
        return Ok(BigDecimal::one());
    }
    if base.is_zero() && exponent < 0 {
        return Err(CalcError::DividedByZero("1".to_string()));
    }
    let wp = prec + GUARD_DIGITS;
    let mut n = exponent.unsigned_abs();
    let mut b = base.with_prec(wp);
    let mut result = BigDecimal::one();
    while n > 0 {
        if n & 1 == 1 {
            result = mul(&result, &b, wp);
        }
        n >>= 1;
        if n > 0 {
            b = mul(&b, &b, wp);
        }
    }
    if exponent < 0 {
        result = div_raw(&BigDecimal::one(), &result, wp);
    }
    Ok(result.with_prec(prec))
}

/// `base ^ exponent`. Integer exponents are computed by repeated squaring,
/// others on MPFR floats
pub fn pow(base: &BigDecimal, exponent: &BigDecimal, prec: u64) -> CalcResult<BigDecimal> {
    if exponent.is_integer() {
        if let Some(n) = to_integer(exponent).to_i64() {
            return powi(base, n, prec);
        }
    }
    if base.is_zero() {
        if exponent.is_positive() {
            return Ok(BigDecimal::zero());
        }
        return Err(CalcError::DividedByZero("1".to_string()));
    }
    if base.is_negative() {
        return Err(CalcError::InvalidArgument("^".to_string(), to_plain_string(base)));
    }
    // a large exponent magnifies the rounding error of the base
    let wp = prec + GUARD_DIGITS + int_digits(exponent).max(0) as u64;
    let b = to_float(base, float_bits(wp))?;
    let p = to_float(exponent, float_bits(wp))?;
    from_float(&b.pow(&p), prec)
}

/// Exact factorial of a non-negative integer
pub fn factorial(x: &BigDecimal) -> CalcResult<BigDecimal> {
    if !x.is_integer() {
        return Err(CalcError::OnlyInt("Factorial".to_string()));
    }
    if x.is_negative() {
        return Err(CalcError::NotForNegativeInt("!".to_string()));
    }
    let n = match to_integer(x).to_u64() {
        Some(n) if n <= MAX_FACTORIAL => n,
        _ => {
            return Err(CalcError::ArgumentOutOfRange(
                "!".to_string(),
                to_plain_string(x),
                format!("0..{}", MAX_FACTORIAL),
            ))
        }
    };
    let mut f = BigInt::one();
    for i in 2..=n {
        f *= i;
    }
    Ok(BigDecimal::from(f))
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::config::WORKING_PRECISION;

    const P: u64 = WORKING_PRECISION;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    // first `n` significant characters of the plain representation
    fn prefix(x: &BigDecimal, n: usize) -> String {
        to_plain_string(x).chars().take(n).collect()
    }

    // 0.5 ^ 1000000000, about 1E-301029996
    fn tiny() -> BigDecimal {
        pow(&d("0.5"), &d("1000000000"), P).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12"), Ok(d("12")));
        assert_eq!(parse_decimal("-3.5"), Ok(d("-3.5")));
        assert_eq!(parse_decimal(".5"), Ok(d("0.5")));
        assert_eq!(parse_decimal("-.5"), Ok(d("-0.5")));
        assert_eq!(parse_decimal("5."), Ok(d("5")));
        assert!(parse_decimal(".").is_err());
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("1.2.3").is_err());
        assert!(parse_decimal("1e5").is_err());
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(to_plain_string(&d("1E+3")), "1000");
        assert_eq!(to_plain_string(&d("0.00123")), "0.00123");
        assert_eq!(to_plain_string(&d("-12.5")), "-12.5");
        assert_eq!(to_plain_string(&d("-0.05")), "-0.05");
        assert_eq!(to_plain_string(&d("0")), "0");
        assert_eq!(to_plain_string(&d("1E+5000")), "1E+5000");
        assert_eq!(to_plain_string(&d("-2.50E-3000")), "-2.5E-3000");
    }

    #[test]
    fn test_round_to_display() {
        assert_eq!(round_to_display(&d("4.000"), 20), "4");
        assert_eq!(round_to_display(&d("0.125"), 2), "0.13");
        assert_eq!(round_to_display(&d("-0.125"), 2), "-0.13");
        assert_eq!(round_to_display(&d("2.50"), 20), "2.5");
        assert_eq!(round_to_display(&d("-0.0000001"), 3), "0");
        assert_eq!(round_to_display(&d("0.0005"), 3), "0.001");
        assert_eq!(round_to_display(&d("1E+5"), 20), "100000");
        assert_eq!(round_to_display(&d("1E-300000000"), 20), "0");
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(&d("2.5")), 2.5);
        assert_eq!(to_f64(&d("-1E+400")), f64::NEG_INFINITY);
        assert_eq!(to_f64(&d("1E-400")), 0.0);
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(add(&d("1.5"), &d("2.25"), P), d("3.75"));
        assert_eq!(sub(&d("1"), &d("3"), P), d("-2"));
        assert_eq!(add(&d("0"), &d("7"), P), d("7"));
        assert_eq!(add(&d("1"), &d("1E-200"), P), d("1"));
        assert_eq!(sub(&d("1E-200"), &d("1"), P), d("-1"));
        let expected = format!("1.{}1", "0".repeat(98));
        assert_eq!(round_to_display(&add(&d("1"), &d("1E-99"), P), 100), expected);
    }

    #[test]
    fn test_div_rem() {
        let v = div(&d("1"), &d("3"), P).unwrap();
        assert_eq!(prefix(&v, 12), "0.3333333333");
        assert_eq!(div(&d("10"), &d("4"), P), Ok(d("2.5")));
        assert!(div(&d("1"), &d("0"), P).is_err());
        assert_eq!(rem(&d("7"), &d("3")), Ok(d("1")));
        assert_eq!(rem(&d("-7"), &d("3")), Ok(d("-1")));
        assert_eq!(rem(&d("7.5"), &d("2")), Ok(d("1.5")));
        assert_eq!(rem(&d("0.001"), &d("7")), Ok(d("0.001")));
        assert!(rem(&d("7"), &d("0")).is_err());
        assert!(rem(&d("1"), &d("1E-200000")).is_err());
    }

    #[test]
    fn test_extreme_magnitudes() {
        let start = Instant::now();
        let tiny = tiny();
        assert!(tiny.is_positive());
        assert_eq!(add(&d("1"), &tiny, P), d("1"));
        assert_eq!(sub(&tiny, &d("1"), P), d("-1"));
        assert_eq!(rem(&tiny, &d("1")), Ok(tiny.clone()));
        assert!(rem(&d("1"), &tiny).is_err());
        assert_eq!(round_to_display(&tiny, 20), "0");
        assert!(to_plain_string(&tiny).ends_with("E-301029996"));
        assert_eq!(round_to_display(&sin(&tiny, P).unwrap(), 20), "0");
        assert_eq!(round_to_display(&cos(&tiny, P).unwrap(), 20), "1");
        assert_eq!(round_to_display(&atan(&tiny, P).unwrap(), 20), "0");
        let l = ln(&tiny, P).unwrap();
        assert_eq!(prefix(&l, 14), "-693147180.559");
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(&d("16"), P).unwrap().with_scale_round(30, RoundingMode::HalfUp), d("4"));
        let v = sqrt(&d("2"), P).unwrap();
        assert_eq!(prefix(&v, 22), "1.41421356237309504880");
        let v = sqrt(&d("1E+300"), P).unwrap();
        let ratio = div(&v, &d("1E+150"), P).unwrap();
        assert_eq!(round_to_display(&ratio, 50), "1");
        assert!(sqrt(&d("-1"), P).is_err());
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            prefix(&pi(P), 52),
            "3.14159265358979323846264338327950288419716939937510"
        );
        assert_eq!(
            prefix(&e(P), 52),
            "2.71828182845904523536028747135266249775724709369995"
        );
        assert_eq!(to_plain_string(&pi(P)).len(), 101);
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(prefix(&ln(&d("2"), P).unwrap(), 22), "0.69314718055994530941");
        assert_eq!(prefix(&ln(&d("10"), P).unwrap(), 22), "2.30258509299404568401");
        assert_eq!(ln(&d("1"), P), Ok(BigDecimal::zero()));
        assert!(ln(&d("0"), P).is_err());
        assert!(ln(&d("-2"), P).is_err());
        assert_eq!(round_to_display(&log10(&d("1000"), P).unwrap(), 40), "3");
        assert_eq!(round_to_display(&log2(&d("0.125"), P).unwrap(), 40), "-3");
        assert!(log10(&d("0"), P).is_err());
        assert!(log2(&d("-1"), P).is_err());
    }

    #[test]
    fn test_trigonometry() {
        assert_eq!(prefix(&sin(&d("1"), P).unwrap(), 22), "0.84147098480789650665");
        assert_eq!(prefix(&cos(&d("1"), P).unwrap(), 22), "0.54030230586813971740");
        assert_eq!(prefix(&tan(&d("1"), P).unwrap(), 22), "1.55740772465490223050");
        assert_eq!(round_to_display(&sin(&pi(P), P).unwrap(), 40), "0");
        assert_eq!(round_to_display(&cos(&pi(P), P).unwrap(), 40), "-1");
        assert_eq!(round_to_display(&sin(&d("0"), P).unwrap(), 40), "0");
        let big = sin(&d("1000000"), P).unwrap();
        assert_eq!(prefix(&big, 20), "-0.34999350217129295");
    }

    #[test]
    fn test_trigonometry_of_huge_arguments() {
        let start = Instant::now();
        let f1000 = factorial(&d("1000")).unwrap();
        assert_eq!(round_to_display(&sin(&f1000, P).unwrap(), 20), "-0.97280035638305425735");
        let f3000 = factorial(&d("3000")).unwrap();
        assert_eq!(round_to_display(&sin(&f3000, P).unwrap(), 20), "-0.88624304291074064819");
        assert!(start.elapsed() < Duration::from_secs(5));

        let huge = d("1E+20000");
        assert!(matches!(sin(&huge, P), Err(CalcError::ArgumentOutOfRange(..))));
        assert!(matches!(cos(&huge, P), Err(CalcError::ArgumentOutOfRange(..))));
        assert!(matches!(tan(&huge, P), Err(CalcError::ArgumentOutOfRange(..))));
        assert_eq!(
            round_to_display(&atan(&huge, P).unwrap(), 20),
            round_to_display(&mul(&pi(P), &d("0.5"), P), 20)
        );
    }

    #[test]
    fn test_inverse_trigonometry() {
        let quarter = mul(&pi(P), &d("0.25"), P);
        assert_eq!(
            round_to_display(&atan(&d("1"), P).unwrap(), 50),
            round_to_display(&quarter, 50)
        );
        assert_eq!(prefix(&atan(&d("0.5"), P).unwrap(), 22), "0.46364760900080611621");
        assert_eq!(prefix(&atan(&d("-10"), P).unwrap(), 23), "-1.47112767430373459185");
        let half_pi = mul(&pi(P), &d("0.5"), P);
        assert_eq!(
            round_to_display(&asin(&d("1"), P).unwrap(), 50),
            round_to_display(&half_pi, 50)
        );
        assert_eq!(prefix(&asin(&d("0.5"), P).unwrap(), 22), "0.52359877559829887307");
        assert_eq!(round_to_display(&acos(&d("1"), P).unwrap(), 50), "0");
        assert!(asin(&d("1.5"), P).is_err());
        assert!(acos(&d("-2"), P).is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(&d("2"), &d("10"), P), Ok(d("1024")));
        assert_eq!(round_to_display(&pow(&d("2"), &d("-2"), P).unwrap(), 20), "0.25");
        assert_eq!(pow(&d("0"), &d("0"), P), Ok(BigDecimal::one()));
        assert_eq!(pow(&d("0"), &d("2.5"), P), Ok(BigDecimal::zero()));
        assert_eq!(prefix(&pow(&d("2"), &d("0.5"), P).unwrap(), 22), "1.41421356237309504880");
        assert_eq!(round_to_display(&pow(&d("5"), &d("1.5"), P).unwrap(), 20), "11.18033988749894848205");
        assert!(pow(&d("-8"), &d("0.5"), P).is_err());
        assert!(pow(&d("0"), &d("-1"), P).is_err());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(&d("0")), Ok(d("1")));
        assert_eq!(factorial(&d("5")), Ok(d("120")));
        assert_eq!(factorial(&d("5.000")), Ok(d("120")));
        assert_eq!(factorial(&d("2.5")), Err(CalcError::OnlyInt("Factorial".to_string())));
        assert!(factorial(&d("-3")).is_err());
        assert!(factorial(&d("100001")).is_err());
    }
}
