use num_bigint::{BigInt, BigUint};
use num_traits::One;
use woodall::reference::naive_is_woodall;
use woodall::*;

/// W_k とその前後を最適化版・参照実装の両方で検証するヘルパー
fn verify_woodall_neighbourhood(k: u32) {
    let w = BigInt::from(woodall_number(k).unwrap());
    assert_eq!(woodall_index(&w), Some(k as u64), "index mismatch for W_{}", k);
    assert!(naive_is_woodall(&w), "naive rejected W_{}", k);
    for n in [&w - 1, &w + 1] {
        assert!(!is_woodall(&n), "W_{} +/- 1 accepted", k);
        assert!(!naive_is_woodall(&n), "naive: W_{} +/- 1 accepted", k);
    }
}

/// u64 を超える最初の項 (k=59)
#[test]
fn test_first_beyond_u64() {
    let w = woodall_number(59).unwrap();
    assert!(w > BigUint::from(u64::MAX));
    verify_woodall_neighbourhood(59);
}

#[test]
fn test_k100() {
    verify_woodall_neighbourhood(100);
}

#[test]
fn test_k1000() {
    verify_woodall_neighbourhood(1000);
}

/// 約3000桁
#[test]
fn test_k10000() {
    verify_woodall_neighbourhood(10000);
}

/// 2^k − 1（メルセンヌ数）はウッドール数でない（k ≥ 2）
#[test]
fn test_mersenne_not_woodall() {
    for k in [2u32, 10, 64, 100, 1000] {
        let m = BigInt::from((BigUint::one() << k) - BigUint::one());
        assert!(!is_woodall(&m), "2^{} - 1", k);
        assert_eq!(is_woodall(&m), naive_is_woodall(&m));
    }
}

/// 立方根上界が u64 に収まらない巨大入力でもすぐに終わる
#[test]
fn test_huge_bound_saturates() {
    let z = (BigInt::one() << 400u32) + 12345;
    match SearchBound::for_candidate(&z) {
        Some(SearchBound::CubeRoot(k)) => assert_eq!(k, u64::MAX),
        other => panic!("unexpected bound {:?}", other),
    }
    assert!(!is_woodall(&z));
}

#[test]
fn test_index_large_agrees_with_naive() {
    for k in (60u32..=300).step_by(17) {
        let w = BigInt::from(woodall_number(k).unwrap());
        assert_eq!(woodall_index(&w), reference::naive_woodall_index(&w));
    }
}
