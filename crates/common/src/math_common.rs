//! Integer number theory for arithmetic modulo k

/// Extended Euclidean algorithm to compute value^(-1) mod modulus
///
/// `value` may be negative; the result is the representative in
/// `0..modulus`. Returns `None` when `gcd(value, modulus) != 1` or the
/// modulus is not positive. Modulo 1 every value is congruent to 1, so the
/// inverse is 0.
pub fn mod_inverse(value: i64, modulus: i64) -> Option<i64> {
    if modulus <= 0 {
        return None;
    }

    let (mut old_r, mut r) = (value.rem_euclid(modulus), modulus);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(modulus))
}

/// Trial-division primality test
///
/// Values below 2 are not prime; 2 is the only even prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut m = 3;
    while m <= n / m {
        if n % m == 0 {
            return false;
        }
        m += 2;
    }
    true
}
