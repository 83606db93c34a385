//! ウッドール数判定
//!
//! z = k·2^k − 1 (k ≥ 1) となる正整数 z をウッドール数と呼ぶ。
//! 判定は w = z + 1 について k ∈ 1..=⌊∛w⌋ だけを調べる（上界の証明は [`bound`]）。
//! 参照実装 [`reference`] との差分検証を [`verify`] で行う。

pub mod bound;
pub mod error;
pub mod predicate;
pub mod primality;
pub mod reference;
pub mod sequence;
pub mod verify;

pub use bound::{icbrt, SearchBound};
pub use error::WoodallError;
pub use predicate::{is_woodall, is_woodall_u64, woodall_index, woodall_index_u64};
pub use primality::{is_prime, is_woodall_prime};
pub use sequence::{woodall_number, WoodallSequence, KNOWN_WOODALL};
pub use verify::{verify_range, verify_range_parallel, VerifyResult};
