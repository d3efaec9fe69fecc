//! Lexicographic r-combinations of `{0, …, n-1}`.
//!
//! Counts are `BigUint`: the search asks for C(k+1, n-3) with `k` up to the
//! number of diagonals (≈ n²/2), which overflows `u64` long before n = 100.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CombinationError {
    #[error("cannot choose from an empty set")]
    EmptySet,
    #[error("combination size {r} exceeds set size {n}")]
    SizeExceedsSet { n: usize, r: usize },
}

/// Enumerator over all ascending r-subsets of `0..n` in lexicographic order.
///
/// ```
/// use minmax_tri::combin::Combinations;
///
/// let mut c = Combinations::new(4, 2).unwrap();
/// let mut seen = Vec::new();
/// while let Some(comb) = c.next_combination() {
///     seen.push(comb.to_vec());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], vec![0, 1]);
/// assert_eq!(seen[5], vec![2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    a: Vec<usize>,
    n: usize,
    r: usize,
    num_left: BigUint,
    total: BigUint,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Result<Self, CombinationError> {
        if n < 1 {
            return Err(CombinationError::EmptySet);
        }
        if r > n {
            return Err(CombinationError::SizeExceedsSet { n, r });
        }
        let total = binomial(n, r);
        let mut out = Self {
            a: Vec::with_capacity(r),
            n,
            r,
            num_left: BigUint::zero(),
            total,
        };
        out.reset();
        Ok(out)
    }

    /// Rewind to `[0, 1, …, r-1]` with all combinations pending.
    pub fn reset(&mut self) {
        self.a.clear();
        self.a.extend(0..self.r);
        self.num_left = self.total.clone();
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn r(&self) -> usize {
        self.r
    }

    /// C(n, r).
    #[inline]
    pub fn total(&self) -> &BigUint {
        &self.total
    }

    /// Combinations not yet returned.
    #[inline]
    pub fn num_left(&self) -> &BigUint {
        &self.num_left
    }

    #[inline]
    pub fn has_more(&self) -> bool {
        !self.num_left.is_zero()
    }

    /// Advance and return the next combination, or `None` once all
    /// `total()` combinations have been returned.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if !self.has_more() {
            return None;
        }
        if self.num_left != self.total {
            let (n, r) = (self.n, self.r);
            // has_more() guarantees some position is below its maximum
            let i = (0..r).rev().find(|&i| self.a[i] != n - r + i)?;
            self.a[i] += 1;
            for j in i + 1..r {
                self.a[j] = self.a[i] + j - i;
            }
        }
        self.num_left -= 1u32;
        Some(self.a.as_slice())
    }
}

/// `n!` as a big integer.
pub fn factorial(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, i| acc * BigUint::from(i))
}

/// `n! / (r! (n-r)!)`, or zero when `r > n`.
pub fn binomial(n: usize, r: usize) -> BigUint {
    if r > n {
        return BigUint::zero();
    }
    factorial(n) / (factorial(r) * factorial(n - r))
}
