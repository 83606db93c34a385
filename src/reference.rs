//! 参照実装（オラクル）。
//!
//! 上界を使わず k = 1 から k·2^k ≤ w の間だけ走査する素朴な判定。
//! 最適化版との差分検証専用で、本番経路からは呼ばない。

use num_bigint::{BigInt, BigUint};
use num_traits::One;

/// 素朴な判定。z < 1 の特別扱いはしない（w ≤ 0 なら k=1 で即超過する）。
pub fn naive_is_woodall(z: &BigInt) -> bool {
    naive_woodall_index(z).is_some()
}

/// 素朴な走査で k を求める
pub fn naive_woodall_index(z: &BigInt) -> Option<u64> {
    let w = z + BigInt::one();
    let mut k = 1u64;
    loop {
        let candidate = BigInt::from(BigUint::from(k) << k);
        if candidate == w {
            return Some(k);
        }
        if candidate > w {
            return None;
        }
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_small_members() {
        let members: Vec<i64> = (0i64..200).filter(|&z| naive_is_woodall(&BigInt::from(z))).collect();
        assert_eq!(members, vec![1, 7, 23, 63, 159]);
    }

    #[test]
    fn test_naive_non_positive() {
        // 最適化版と違い z < 1 を特別扱いしないが、結果は false になる
        for z in -1000i64..1 {
            assert!(!naive_is_woodall(&BigInt::from(z)), "naive accepted z={}", z);
        }
    }

    #[test]
    fn test_naive_index() {
        for k in 1u64..=40 {
            let z = BigInt::from(BigUint::from(k) << k) - 1;
            assert_eq!(naive_woodall_index(&z), Some(k));
        }
    }
}
