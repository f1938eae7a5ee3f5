//! Divisibility, modular arithmetic and primes.

use crate::error::{AlgoError, Result};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Euclid's algorithm. `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Stein's algorithm: shifts and subtractions only.
pub fn binary_gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a | b;
    }
    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();
    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}

/// Least common multiple; `None` when it overflows `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)` and `g >= 0`.
///
/// `None` only when the gcd is `2^63` (both inputs in `{0, i64::MIN}`, not
/// both zero), which has no `i64` representation.
pub fn extended_gcd(a: i64, b: i64) -> Option<(i64, i64, i64)> {
    // i128 keeps `i64::MIN / -1` and the final negation exact.
    let (mut old_r, mut r) = (i128::from(a), i128::from(b));
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }
    if old_r < 0 {
        (old_r, old_x, old_y) = (-old_r, -old_x, -old_y);
    }
    Some((
        i64::try_from(old_r).ok()?,
        i64::try_from(old_x).ok()?,
        i64::try_from(old_y).ok()?,
    ))
}

/// `base^exp mod modulus` by square-and-multiply. `None` for a zero modulus.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }
    let m = u128::from(modulus);
    let mut result = 1 % m;
    let mut base = u128::from(base) % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    // result < modulus, so it fits.
    u64::try_from(result).ok()
}

/// `x` in `[0, modulus)` with `a*x ≡ 1 (mod modulus)`.
pub fn mod_inverse(a: i64, modulus: i64) -> Result<i64> {
    let not_invertible = AlgoError::NotInvertible { value: a, modulus };
    if modulus <= 0 {
        return Err(not_invertible);
    }
    let Some((g, x, _)) = extended_gcd(a.rem_euclid(modulus), modulus) else {
        return Err(not_invertible);
    };
    if g != 1 {
        debug!(a, modulus, gcd = g, "no modular inverse");
        return Err(not_invertible);
    }
    Ok(x.rem_euclid(modulus))
}

/// Primes `<= limit` by the sieve of Eratosthenes.
pub fn sieve(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return vec![];
    }
    let mut composite = vec![false; limit + 1];
    let mut p = 2;
    while p * p <= limit {
        if !composite[p] {
            for multiple in (p * p..=limit).step_by(p) {
                composite[multiple] = true;
            }
        }
        p += 1;
    }
    (2..=limit).filter(|&n| !composite[n]).collect()
}

/// Trial division by 2, 3 and numbers of the form `6k ± 1`.
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => return false,
        2 | 3 => return true,
        _ if n % 2 == 0 || n % 3 == 0 => return false,
        _ => {}
    }
    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Prime factors in ascending order, repeated by multiplicity.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut p = 2u64;
    while n > 1 && p <= n / p {
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Count of `k` in `1..=n` coprime to `n`.
pub fn euler_totient(n: u64) -> u64 {
    let mut factors = prime_factors(n);
    factors.dedup();
    factors.into_iter().fold(n, |phi, p| phi / p * (p - 1))
}

/// `n choose k`, multiplying and dividing in lockstep so every intermediate
/// is itself a binomial coefficient. `None` when the result overflows.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 0..k {
        let numerator = u128::from(n - i);
        let denominator = u128::from(i + 1);
        // Cancel first so the product only overflows if the answer does.
        let common = gcd_u128(result, denominator);
        let numerator = numerator / (denominator / common);
        result = (result / common).checked_mul(numerator)?;
    }
    Some(result)
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "gcd(48, 18):          {}", gcd(48, 18))?;
    writeln!(out, "binary gcd(48, 18):   {}", binary_gcd(48, 18))?;
    writeln!(out, "lcm(4, 6):            {:?}", lcm(4, 6))?;
    writeln!(out, "extended gcd(240, 46): {:?}", extended_gcd(240, 46))?;
    writeln!(out, "3^200 mod 13:         {:?}", mod_pow(3, 200, 13))?;
    match mod_inverse(3, 11) {
        Ok(inverse) => writeln!(out, "inverse of 3 mod 11:  {inverse}")?,
        Err(e) => writeln!(out, "inverse of 3 mod 11:  {e}")?,
    }
    match mod_inverse(4, 8) {
        Ok(inverse) => writeln!(out, "inverse of 4 mod 8:   {inverse}")?,
        Err(e) => writeln!(out, "inverse of 4 mod 8:   {e}")?,
    }
    writeln!(out, "primes up to 50:      {:?}", sieve(50))?;
    writeln!(out, "97 is prime:          {}", is_prime(97))?;
    writeln!(out, "factors of 360:       {:?}", prime_factors(360))?;
    writeln!(out, "totient(36):          {}", euler_totient(36))?;
    writeln!(out, "C(52, 5):             {:?}", binomial(52, 5))?;
    writeln!(out, "digit sum of 98765:   {}", digit_sum(98765))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_family() {
        let cases = [
            (48, 18, 6),
            (17, 5, 1),
            (0, 9, 9),
            (9, 0, 9),
            (0, 0, 0),
            (1 << 40, 1 << 12, 1 << 12),
        ];
        for (a, b, g) in cases {
            assert_eq!(gcd(a, b), g);
            assert_eq!(binary_gcd(a, b), g);
        }
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), Some(0));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn test_extended_gcd() {
        let cases = [
            (240, 46),
            (46, 240),
            (-12, 18),
            (7, 0),
            (0, -5),
            (i64::MIN, -1),
            (i64::MIN, 3),
            (i64::MAX, i64::MIN),
        ];
        for (a, b) in cases {
            let (g, x, y) = extended_gcd(a, b).unwrap();
            assert!(g >= 0);
            let combination = i128::from(a) * i128::from(x) + i128::from(b) * i128::from(y);
            assert_eq!(combination, i128::from(g));
            assert_eq!(g as u64, gcd(a.unsigned_abs(), b.unsigned_abs()));
        }
        assert_eq!(extended_gcd(i64::MIN, 0), None);
        assert_eq!(extended_gcd(i64::MIN, i64::MIN), None);
    }

    #[test]
    fn test_modular() {
        assert_eq!(mod_pow(2, 10, 1000), Some(24));
        assert_eq!(mod_pow(3, 200, 13), Some(9));
        assert_eq!(mod_pow(5, 0, 1), Some(0));
        assert_eq!(mod_pow(u64::MAX, 2, u64::MAX - 1), Some(1));
        assert_eq!(mod_pow(2, 3, 0), None);

        assert_eq!(mod_inverse(3, 11), Ok(4));
        assert_eq!(mod_inverse(-3, 11), Ok(7));
        assert_eq!(
            mod_inverse(4, 8),
            Err(AlgoError::NotInvertible { value: 4, modulus: 8 })
        );
        assert!(mod_inverse(1, 0).is_err());
    }

    #[test]
    fn test_primes() {
        assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(sieve(1).is_empty());
        let sieved = sieve(1_000);
        for n in 0..=1_000u64 {
            assert_eq!(is_prime(n), sieved.contains(&(n as usize)), "n = {n}");
        }
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
    }

    #[test]
    fn test_factors_and_totient() {
        assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factors(97), vec![97]);
        assert!(prime_factors(1).is_empty());
        assert_eq!(euler_totient(36), 12);
        assert_eq!(euler_totient(97), 96);
        assert_eq!(euler_totient(1), 1);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(52, 5), Some(2_598_960));
        assert_eq!(binomial(3, 7), Some(0));
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(
            binomial(100, 50),
            Some(100_891_344_545_564_193_334_812_497_256)
        );
        assert_eq!(binomial(200, 100), None);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(98765), 35);
        assert_eq!(digit_sum(0), 0);
    }
}
