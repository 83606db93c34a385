use num_bigint::BigUint;

/// 公開されているウッドール数列の先頭 28 項（k = 1..=28, OEIS A003261）
pub const KNOWN_WOODALL: [u64; 28] = [
    1,
    7,
    23,
    63,
    159,
    383,
    895,
    2047,
    4607,
    10239,
    22527,
    49151,
    106495,
    229375,
    491519,
    1048575,
    2228223,
    4718591,
    9961471,
    20971519,
    44040191,
    92274687,
    192937983,
    402653183,
    838860799,
    1744830463,
    3623878655,
    7516192767,
];

/// W_k = k·2^k − 1。k = 0 は正の整数でないので None。
pub fn woodall_number(k: u32) -> Option<BigUint> {
    if k == 0 {
        return None;
    }
    Some((BigUint::from(k) << k) - 1u32)
}

/// (k, W_k) を k = 1 から順に返す無限列
#[derive(Debug, Clone)]
pub struct WoodallSequence {
    next_k: u32,
}

impl WoodallSequence {
    pub fn new() -> Self {
        WoodallSequence { next_k: 1 }
    }
}

impl Default for WoodallSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for WoodallSequence {
    type Item = (u32, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.next_k;
        let w = woodall_number(k)?;
        self.next_k = k.checked_add(1)?;
        Some((k, w))
    }
}
