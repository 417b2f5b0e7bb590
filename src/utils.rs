use std::cmp::Ordering;

/// Decompose `n` into decimal digits, least-significant first. `0` yields
/// `[0]` so the result is never empty
pub fn decimal_digits(mut n: u128) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();

    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }

    digits
}

/// Drop non-significant high-order zeros, keeping at least one digit
pub fn trim(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Compare two trimmed magnitudes: longer wins, ties scan from the most
/// significant digit down
pub fn mag_cmp(a: &[u8], b: &[u8]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => (),
        ord => return ord,
    }

    for (&da, &db) in a.iter().rev().zip(b.iter().rev()) {
        match da.cmp(&db) {
            Ordering::Equal => (),
            ord => return ord,
        }
    }

    Ordering::Equal
}

/// Magnitude sum with carry. Output is trimmed
pub fn mag_add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0;

    for i in 0..len {
        let sum = carry + a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0);
        out.push(sum % 10);
        carry = sum / 10;
    }

    if carry > 0 {
        out.push(carry);
    }

    trim(&mut out);
    out
}

/// Magnitude difference with borrow. The caller must guarantee `a >= b`,
/// the borrow logic relies on it. Output is trimmed
pub fn mag_sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i8;

    for i in 0..a.len() {
        let mut v = a[i] as i8 - borrow - b.get(i).copied().unwrap_or(0) as i8;
        if v < 0 {
            v += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(v as u8);
    }

    trim(&mut out);
    out
}

/// Insert `d` low zero digits, multiplying the magnitude by `10^d`. No-op
/// on zero
pub fn shift_mag(digits: &mut Vec<u8>, d: usize) {
    if d == 0 || (digits.len() == 1 && digits[0] == 0) {
        return;
    }

    digits.splice(0..0, std::iter::repeat(0).take(d));
}
