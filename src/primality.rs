use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::Zero;

use crate::predicate::is_woodall;

/// 試し割りによる素数判定。n > 1 かつ [2, ⌊√n⌋] に約数がなければ素数。
pub fn is_prime(n: &BigInt) -> bool {
    let two = BigInt::from(2);
    if *n < two {
        return false;
    }
    if n.is_even() {
        return *n == two;
    }

    let limit = n.sqrt();
    let mut d = BigInt::from(3);
    while d <= limit {
        if (n % &d).is_zero() {
            return false;
        }
        d += &two;
    }
    true
}

/// ウッドール素数（素数かつウッドール数）か
pub fn is_woodall_prime(z: &BigInt) -> bool {
    // ウッドール判定の方が安いので先に行う
    is_woodall(z) && is_prime(z)
}
