use num_bigint::{BigInt, BigUint};

use crate::bound::SearchBound;

/// z がウッドール数（z = k·2^k − 1, k ≥ 1）かを判定する。
///
/// z < 1 は常に false。それ以外は w = z + 1 に対し、
/// [`SearchBound`] が与える範囲 1..=max_k で k·2^k = w となる k を探す。
/// 負数・0・巨大な値を含む全整数で定義され、パニックしない。
pub fn is_woodall(z: &BigInt) -> bool {
    woodall_index(z).is_some()
}

/// z = k·2^k − 1 を満たす k を返す。k·2^k は k について狭義単調増加なので k は一意。
pub fn woodall_index(z: &BigInt) -> Option<u64> {
    let bound = SearchBound::for_candidate(z)?;
    let w = (z + 1u32).to_biguint()?;
    search(&w, bound.max_k())
}

/// 1..=max_k を順に調べる。k·2^k が w を超えた時点で打ち切る。
fn search(w: &BigUint, max_k: u64) -> Option<u64> {
    let mut k = 1u64;
    while k <= max_k {
        let candidate = BigUint::from(k) << k;
        if candidate == *w {
            return Some(k);
        }
        if candidate > *w {
            return None;
        }
        k += 1;
    }
    None
}

/// u64 入力の高速パス。u128 で計算するので BigUint を確保しない。
pub fn is_woodall_u64(z: u64) -> bool {
    woodall_index_u64(z).is_some()
}

/// [`woodall_index`] の u64 版
pub fn woodall_index_u64(z: u64) -> Option<u64> {
    if z < 1 {
        return None;
    }
    // z = u64::MAX でも w は u128 に収まる
    let w = z as u128 + 1;
    let max_k = SearchBound::for_w_u128(w).max_k();

    let mut k = 1u64;
    while k <= max_k {
        // w ≤ 2^64 なので k ≤ 64 の範囲で必ず超過する。k·2^k ≤ 2^70 は u128 に収まる
        let candidate = (k as u128) << k;
        if candidate == w {
            return Some(k);
        }
        if candidate > w {
            return None;
        }
        k += 1;
    }
    None
}
