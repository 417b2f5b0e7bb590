use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter, Write},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use error::{BigNumError, BigNumResult};
use utils::{decimal_digits, mag_add, mag_cmp, mag_sub, shift_mag, trim};

pub mod error;
mod macros;
pub mod random;
mod utils;

/// Maximum number of significant decimal digits a `BigNum` may hold.
/// Results that would need more report `CapacityExceeded` instead of
/// growing past the bound
pub const MAX_DIGITS: usize = 100;

/// Sign of a `BigNum`. Zero is always `Positive`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    // Sign of a product: positive iff the operand signs match
    fn mul(self, rhs: Self) -> Self::Output {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Arbitrary-precision signed decimal integer. Digits are stored
/// least-significant first and kept normalized: no high zero digits, and
/// zero is a single `0` digit with positive sign.
///
/// The operator impls panic on capacity overflow and division by zero,
/// like the built-in integer types do. Use the `checked_*` methods when
/// those conditions need to be handled
///
/// # Examples
/// ```
/// use decnum::BigNum;
///
/// let a = BigNum::from(123);
/// let b = BigNum::from(456);
///
/// assert_eq!((a + b).to_string(), "579");
/// assert_eq!((BigNum::from(5) - BigNum::from(10)).to_string(), "- 5");
/// assert_eq!((BigNum::from(999) * BigNum::from(999)).to_string(), "998001");
/// assert_eq!((BigNum::from(7) / BigNum::from(2)).to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigNum {
    sign: Sign,
    digits: Vec<u8>,
}

impl BigNum {
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            digits: vec![0],
        }
    }

    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            digits: vec![1],
        }
    }

    /// Create a `BigNum` from a native integer. `i128` covers every
    /// fixed-width int type, and 39 decimal digits always fit the
    /// capacity bound, so this is infallible. The `From` impls for the
    /// narrower int types all funnel through here
    pub fn from_int(n: i128) -> Self {
        let sign = if n < 0 { Sign::Negative } else { Sign::Positive };

        Self::normalized(sign, decimal_digits(n.unsigned_abs()))
    }

    /// Create a `BigNum` from raw digits, least-significant first.
    /// Rejects digits outside `[0, 9]` and normalized lengths above
    /// `MAX_DIGITS`. An empty slice is zero
    pub fn from_digits(sign: Sign, digits: &[u8]) -> BigNumResult<Self> {
        if let Some((i, &d)) = digits.iter().enumerate().find(|&(_, &d)| d > 9) {
            return Err(BigNumError::invalid_digit(d, i));
        }

        if digits.is_empty() {
            return Ok(Self::zero());
        }

        Self::checked(sign, digits.to_vec())
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Count of significant digits. At least 1, even for zero
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// The absolute value
    pub fn magnitude(&self) -> Self {
        Self {
            sign: Sign::Positive,
            digits: self.digits.clone(),
        }
    }

    /// A sign-flipped copy. The negation of zero is zero
    pub fn negate(&self) -> Self {
        Self::normalized(self.sign.flip(), self.digits.clone())
    }

    /// Multiply by `10^d` by inserting `d` low zero digits. No-op on zero
    pub fn shift_digits(&self, d: usize) -> BigNumResult<Self> {
        if self.is_zero() || d == 0 {
            return Ok(self.clone());
        }

        if self.digits.len() + d > MAX_DIGITS {
            return Err(BigNumError::capacity(self.digits.len() + d));
        }

        let mut digits = self.digits.clone();
        shift_mag(&mut digits, d);

        Ok(Self {
            sign: self.sign,
            digits,
        })
    }

    pub fn checked_add(&self, rhs: &Self) -> BigNumResult<Self> {
        if self.sign == rhs.sign {
            return Self::checked(self.sign, mag_add(&self.digits, &rhs.digits));
        }

        // Mixed signs reduce to a magnitude subtraction. The result takes
        // the sign of the larger-magnitude operand, and the difference of
        // two in-capacity magnitudes always fits
        match mag_cmp(&self.digits, &rhs.digits) {
            Ordering::Less => Ok(Self::normalized(
                rhs.sign,
                mag_sub(&rhs.digits, &self.digits),
            )),
            _ => Ok(Self::normalized(
                self.sign,
                mag_sub(&self.digits, &rhs.digits),
            )),
        }
    }

    /// `self - rhs`, rewritten as `self + (-rhs)` on a local copy
    pub fn checked_sub(&self, rhs: &Self) -> BigNumResult<Self> {
        self.checked_add(&rhs.negate())
    }

    /// Schoolbook multiplication by repeated addition: for each digit of
    /// `rhs` low to high, add the row that many times, then shift the row
    /// one place. Quadratic-ish on purpose, it mirrors the long-hand
    /// method digit for digit
    pub fn checked_mul(&self, rhs: &Self) -> BigNumResult<Self> {
        let mut acc = vec![0u8];
        let mut row = self.digits.clone();

        for (i, &d) in rhs.digits.iter().enumerate() {
            if i > 0 {
                shift_mag(&mut row, 1);
            }
            for _ in 0..d {
                acc = mag_add(&acc, &row);
            }
        }

        Self::checked(self.sign * rhs.sign, acc)
    }

    /// Long division, truncating toward zero; the remainder is discarded.
    /// Works the magnitudes digit by digit from the high end, counting
    /// how often the divisor can be subtracted from the running remainder
    pub fn checked_div(&self, rhs: &Self) -> BigNumResult<Self> {
        if rhs.is_zero() {
            return Err(BigNumError::division_by_zero());
        }

        let mut rem = vec![0u8];
        let mut quot = vec![0u8; self.digits.len()];

        for i in (0..self.digits.len()).rev() {
            shift_mag(&mut rem, 1);
            rem[0] = self.digits[i];

            while mag_cmp(&rem, &rhs.digits) != Ordering::Less {
                quot[i] += 1;
                rem = mag_sub(&rem, &rhs.digits);
            }
        }

        Self::checked(self.sign * rhs.sign, quot)
    }

    /// Normalize and apply the capacity bound, the common tail of every
    /// fallible operation
    fn checked(sign: Sign, mut digits: Vec<u8>) -> BigNumResult<Self> {
        trim(&mut digits);

        if digits.len() > MAX_DIGITS {
            return Err(BigNumError::capacity(digits.len()));
        }

        Ok(Self::normalized(sign, digits))
    }

    /// Trim high zeros and canonicalize zero's sign
    pub(crate) fn normalized(sign: Sign, mut digits: Vec<u8>) -> Self {
        trim(&mut digits);

        let sign = if digits == [0] { Sign::Positive } else { sign };

        Self { sign, digits }
    }
}

impl Default for BigNum {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (sign, _) => {
                let mag = mag_cmp(&self.digits, &other.digits);

                // For two negatives the larger magnitude is the smaller
                // value
                if sign == Sign::Negative {
                    mag.reverse()
                } else {
                    mag
                }
            }
        }
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BigNum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("- ")?;
        }

        for &d in self.digits.iter().rev() {
            f.write_char((b'0' + d) as char)?;
        }

        Ok(())
    }
}

impl Neg for BigNum {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for BigNum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(&rhs) {
            Ok(n) => n,
            Err(e) => panic!("Attempt to add BigNum with overflow: {}", e),
        }
    }
}

impl Sub for BigNum {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(&rhs) {
            Ok(n) => n,
            Err(e) => panic!("Attempt to subtract BigNum with overflow: {}", e),
        }
    }
}

impl Mul for BigNum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(&rhs) {
            Ok(n) => n,
            Err(e) => panic!("Attempt to multiply BigNum with overflow: {}", e),
        }
    }
}

impl Div for BigNum {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(&rhs) {
            Ok(n) => n,
            Err(e) => panic!("Attempt to divide BigNum: {}", e),
        }
    }
}

impl AddAssign for BigNum {
    fn add_assign(&mut self, rhs: Self) {
        *self = std::mem::take(self) + rhs;
    }
}

impl SubAssign for BigNum {
    fn sub_assign(&mut self, rhs: Self) {
        *self = std::mem::take(self) - rhs;
    }
}

impl MulAssign for BigNum {
    fn mul_assign(&mut self, rhs: Self) {
        *self = std::mem::take(self) * rhs;
    }
}

impl DivAssign for BigNum {
    fn div_assign(&mut self, rhs: Self) {
        *self = std::mem::take(self) / rhs;
    }
}

impl Sum for BigNum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BigNum::zero(), |acc, x| acc + x)
    }
}

impl Product for BigNum {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BigNum::one(), |acc, x| acc * x)
    }
}

bignum_math_impl!(u8);
bignum_math_impl!(u16);
bignum_math_impl!(u32);
bignum_math_impl!(u64);
bignum_math_impl!(i8);
bignum_math_impl!(i16);
bignum_math_impl!(i32);
bignum_math_impl!(i64);
