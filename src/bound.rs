//! 探索範囲の上界。
//!
//! 補題: k ≥ 4 なら k² ≤ 2^k（k=4 で 16 ≤ 16、以降は帰納法）。
//!
//! 命題: W ≥ 63 かつ W = k·2^k − 1 なら k ≤ ∛(W+1)。
//! 補題より k² ≤ 2^k ⟹ k³ ≤ k·2^k ⟹ k³ − 1 ≤ W ⟹ k ≤ ∛(W+1)。
//!
//! W < 63 では補題の基底がまだ効かないので k ∈ {1, 2, 3} を直接調べる。

use num_bigint::{BigInt, BigUint};
use num_integer::Roots;
use num_traits::ToPrimitive;

/// 小ケース分岐の最大 k
pub const SMALL_CASE_MAX_K: u64 = 3;

/// 立方根上界が使える最小の w（W = 63 に対応）
pub const CUBE_ROOT_MIN_W: u64 = 64;

/// 候補 z に対する k の探索範囲 1..=max_k
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBound {
    /// w < 64: k ∈ {1, 2, 3}
    SmallCase,
    /// w ≥ 64: k ∈ {1, …, ⌊∛w⌋}
    CubeRoot(u64),
}

impl SearchBound {
    /// w = z + 1 から探索範囲を決める。w < 1 は呼び出し側で弾くこと。
    pub fn for_w(w: &BigUint) -> Self {
        if *w < BigUint::from(CUBE_ROOT_MIN_W) {
            SearchBound::SmallCase
        } else {
            // ∛w が u64 を超えるなら k·2^k はとうに w を超えている
            SearchBound::CubeRoot(icbrt(w).to_u64().unwrap_or(u64::MAX))
        }
    }

    /// 候補 z から探索範囲を決める。z < 1 は None。
    pub fn for_candidate(z: &BigInt) -> Option<Self> {
        let w = (z + 1u32).to_biguint()?;
        if w < BigUint::from(2u32) {
            return None;
        }
        Some(Self::for_w(&w))
    }

    /// u64 高速パス用
    pub fn for_w_u128(w: u128) -> Self {
        if w < CUBE_ROOT_MIN_W as u128 {
            SearchBound::SmallCase
        } else {
            SearchBound::CubeRoot(w.cbrt() as u64)
        }
    }

    #[inline]
    pub fn max_k(&self) -> u64 {
        match *self {
            SearchBound::SmallCase => SMALL_CASE_MAX_K,
            SearchBound::CubeRoot(k) => k,
        }
    }
}

/// ⌊∛w⌋ を整数演算で求める（浮動小数点の切り捨て誤差なし）。
pub fn icbrt(w: &BigUint) -> BigUint {
    w.cbrt()
}

/// k² ≤ 2^k を厳密に評価する。
pub fn square_le_pow2(k: u32) -> bool {
    let k_sq = BigUint::from(k) * k;
    let pow = BigUint::from(1u32) << k;
    k_sq <= pow
}
