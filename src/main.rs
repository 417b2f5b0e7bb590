use std::{
    error::Error,
    io::{self, BufRead},
};

use decnum::{error::BigNumResult, BigNum};

/// Regions a circle is cut into by the chords between `n` boundary
/// points: `(n^4 - 6n^3 + 23n^2 - 18n + 24) / 24`
fn circle_regions(n: i64) -> BigNumResult<BigNum> {
    let n1 = BigNum::from(n);
    let n2 = n1.checked_mul(&n1)?;
    let n3 = n2.checked_mul(&n1)?;
    let n4 = n3.checked_mul(&n1)?;

    let total = n4
        .checked_add(&n3.checked_mul(&BigNum::from(-6))?)?
        .checked_add(&n2.checked_mul(&BigNum::from(23))?)?
        .checked_add(&n1.checked_mul(&BigNum::from(-18))?)?
        .checked_add(&BigNum::from(24))?;

    total.checked_div(&BigNum::from(24))
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let cases: usize = lines
        .next()
        .ok_or("expected a test count on the first line")??
        .trim()
        .parse()?;

    for _ in 0..cases {
        let n: i64 = lines
            .next()
            .ok_or("expected one integer per test case")??
            .trim()
            .parse()?;

        println!("{}", circle_regions(n)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_region_counts() -> BigNumResult<()> {
        // 1, 2, 4, 8, 16, 31 is the classic sequence
        for (n, expected) in [(1, "1"), (2, "2"), (3, "4"), (4, "8"), (5, "16"), (6, "31")] {
            assert_eq!(circle_regions(n)?.to_string(), expected);
        }

        Ok(())
    }
}
