use std::str::FromStr;

use num_bigint::BigInt;
use thiserror::Error;

/// 入力の解析・範囲指定のエラー。判定関数そのものは全域で失敗しない。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WoodallError {
    #[error("integer を解析できません: {0}")]
    InvalidInteger(String),

    #[error("個数を解析できません: {0}")]
    InvalidCount(String),

    #[error("範囲が不正です: start={start} > end={end}")]
    InvalidRange { start: u64, end: u64 },
}

/// 10進の整数（符号付き、桁数無制限）を解析する
pub fn parse_integer(s: &str) -> Result<BigInt, WoodallError> {
    BigInt::from_str(s.trim()).map_err(|_| WoodallError::InvalidInteger(s.to_string()))
}

pub fn parse_u64(s: &str) -> Result<u64, WoodallError> {
    s.trim()
        .parse::<u64>()
        .map_err(|_| WoodallError::InvalidInteger(s.to_string()))
}

pub fn parse_count(s: &str) -> Result<usize, WoodallError> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| WoodallError::InvalidCount(s.to_string()))
}

/// start ≤ end を要求する
pub fn check_range(start: u64, end: u64) -> Result<(), WoodallError> {
    if start > end {
        return Err(WoodallError::InvalidRange { start, end });
    }
    Ok(())
}
