use rand::{
    distributions::uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
    Rng,
};

use crate::{BigNum, Sign};

/// Random generation for `BigNum` over rand's `Uniform` machinery. Digit
/// vectors are sampled by length and rejected until they land in range,
/// which skews toward longer magnitudes, so this is only useful for tests
/// and benches
pub struct BigNumSampler {
    low: BigNum,
    high: BigNum,
    inc: bool,
}

impl UniformSampler for BigNumSampler {
    type X = BigNum;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow().clone(), high.borrow().clone());

        if low >= high {
            panic!("Unable to create non-inclusive range with low >= high");
        }

        Self {
            low,
            high,
            inc: false,
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow().clone(), high.borrow().clone());

        if low > high {
            panic!("Unable to create inclusive range with low > high");
        }

        Self {
            low,
            high,
            inc: true,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        let max_len = self.low.num_digits().max(self.high.num_digits());
        let len_gen: UniformInt<usize> = UniformInt::new_inclusive(1, max_len);

        // Negative candidates are only worth generating when the range
        // actually reaches below zero
        let allow_negative = self.low.sign() == Sign::Negative;

        loop {
            let len = len_gen.sample(rng);
            let digits: Vec<u8> = (0..len).map(|_| rng.gen_range(0..10u8)).collect();
            let sign = if allow_negative && rng.gen::<bool>() {
                Sign::Negative
            } else {
                Sign::Positive
            };

            let candidate = BigNum::normalized(sign, digits);

            if candidate >= self.low
                && (candidate < self.high || (self.inc && candidate == self.high))
            {
                return candidate;
            }
        }
    }
}

impl SampleUniform for BigNum {
    type Sampler = BigNumSampler;
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let (low, high) = (BigNum::from(-50), BigNum::from(50));
        let dist: Uniform<BigNum> = Uniform::new_inclusive(low.clone(), high.clone());
        let rng = &mut thread_rng();

        let mut negatives = 0;

        for _ in 0..500 {
            let sample = dist.sample(rng);

            assert!(sample >= low && sample <= high);

            if sample.sign() == Sign::Negative {
                negatives += 1;
            }
        }

        // With 500 draws from a sign-symmetric range, never seeing a
        // negative means the sampler is broken, not unlucky
        assert!(negatives > 0);
    }

    #[test]
    fn exclusive_range_excludes_high() {
        let dist: Uniform<BigNum> = Uniform::new(BigNum::zero(), BigNum::from(10));
        let rng = &mut thread_rng();

        for _ in 0..200 {
            let sample = dist.sample(rng);
            assert!(sample >= BigNum::zero() && sample < BigNum::from(10));
        }
    }

    #[should_panic]
    #[test]
    fn empty_exclusive_range_panics() {
        let _ = BigNumSampler::new(BigNum::from(5), BigNum::from(5));
    }
}
