//! Prime sizing for slot arrays.

/// Returns whether `n` is prime.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Smallest odd prime that is `>= n`.
///
/// Even inputs are bumped to the next odd number first, so this never
/// returns 2; a slot array of two is never useful.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    /// Invariant: squares of primes are rejected; the loop bound must reach
    /// the square root inclusively.
    #[test]
    fn prime_squares_are_composite() {
        for p in [2usize, 3, 5, 7, 11, 13, 101] {
            assert!(!is_prime(p * p), "{} reported prime", p * p);
        }
    }

    #[test]
    fn next_prime_rounds_up() {
        assert_eq!(next_prime(0), 3);
        assert_eq!(next_prime(1), 3);
        assert_eq!(next_prime(2), 3);
        assert_eq!(next_prime(11), 11);
        assert_eq!(next_prime(12), 13);
        assert_eq!(next_prime(22), 23);
        assert_eq!(next_prime(46), 47);
        assert_eq!(next_prime(94), 97);
    }

    /// Invariant: `next_prime` is idempotent and never moves below its input.
    #[test]
    fn next_prime_is_monotone_and_idempotent() {
        for n in 0..2_000 {
            let p = next_prime(n);
            assert!(p >= n);
            assert!(is_prime(p));
            assert_eq!(next_prime(p), p);
        }
    }
}
