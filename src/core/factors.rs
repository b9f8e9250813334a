use std::collections::HashSet;

/// Enumerate the positive divisors of `n`
///
/// Trial division up to `floor(sqrt(n))`: every hit `i` contributes both
/// `i` and `n / i`, with the square root added only once.
///
/// # Arguments
/// * `n` - The number to factor
///
/// # Returns
/// Divisors in discovery order (not sorted). Empty for `n == 0`.
pub fn divisors(n: usize) -> Vec<usize> {
    let mut found = Vec::new();
    let max = integer_sqrt(n);

    for i in 1..=max {
        if n % i == 0 {
            found.push(i);
            if i != n / i {
                found.push(n / i);
            }
        }
    }

    found
}

/// Check whether `a` and `b` have a common divisor other than 1
///
/// Zero has no divisors here, so any comparison involving 0 is `false`.
#[inline]
pub fn shares_factor(a: usize, b: usize) -> bool {
    let a_divisors: HashSet<usize> = divisors(a).into_iter().collect();

    divisors(b)
        .into_iter()
        .any(|d| d != 1 && a_divisors.contains(&d))
}

/// `floor(sqrt(n))` without float rounding surprises on large inputs
#[inline]
fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
