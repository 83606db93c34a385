use num_bigint::BigInt;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, trace};

use crate::predicate::{is_woodall, is_woodall_u64};
use crate::reference::naive_is_woodall;

/// 並列検証のチャンク幅
pub const CHUNK_SIZE: u64 = 10_000;

/// 範囲検証の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyResult {
    /// 検証した整数の総数
    pub total_checked: u64,
    /// 範囲内のウッドール数（昇順）
    pub members: Vec<u64>,
    /// 最適化版・u64版・参照実装の判定が食い違った値（昇順）
    pub mismatches: Vec<u64>,
    /// 全て一致したか
    pub all_agree: bool,
}

impl VerifyResult {
    fn empty() -> Self {
        VerifyResult {
            all_agree: true,
            ..Default::default()
        }
    }
}

enum Verdict {
    Member,
    NonMember,
    Mismatch,
}

/// 1つの値について3つの判定を突き合わせる
fn check_one(z: u64) -> Verdict {
    let big = BigInt::from(z);
    let fast = is_woodall(&big);
    let small = is_woodall_u64(z);
    let naive = naive_is_woodall(&big);
    if fast != small || fast != naive {
        debug!(z, fast, small, naive, "predicate mismatch");
        return Verdict::Mismatch;
    }
    if fast {
        Verdict::Member
    } else {
        Verdict::NonMember
    }
}

/// [start, end] の全整数を参照実装と突き合わせる（シングルスレッド版）。
pub fn verify_range(start: u64, end: u64) -> VerifyResult {
    if start > end {
        return VerifyResult::empty();
    }

    let mut total_checked = 0u64;
    let mut members = Vec::new();
    let mut mismatches = Vec::new();

    for z in start..=end {
        match check_one(z) {
            Verdict::Member => members.push(z),
            Verdict::NonMember => {}
            Verdict::Mismatch => mismatches.push(z),
        }
        total_checked += 1;
    }

    debug!(start, end, total_checked, members = members.len(), "range verified");

    VerifyResult {
        total_checked,
        all_agree: mismatches.is_empty(),
        members,
        mismatches,
    }
}

/// [start, end] の全整数を参照実装と突き合わせる（並列版）。
/// Rayon でチャンク分割して並列処理。
/// progress_callback: (完了数, 総数) を定期的に呼ぶ（スレッドセーフ）。
pub fn verify_range_parallel(
    start: u64,
    end: u64,
    progress_callback: impl Fn(u64, u64) + Sync,
) -> VerifyResult {
    if start > end {
        return VerifyResult::empty();
    }

    // end - start + 1 は start=0, end=u64::MAX で溢れるので飽和させる
    let total = (end - start).saturating_add(1);
    let num_chunks = (end - start) / CHUNK_SIZE + 1;

    let global_done = AtomicU64::new(0);
    let global_members: Mutex<Vec<u64>> = Mutex::new(Vec::new());
    let global_mismatches: Mutex<Vec<u64>> = Mutex::new(Vec::new());

    (0..num_chunks).into_par_iter().for_each(|chunk_idx| {
        let chunk_start = start + chunk_idx * CHUNK_SIZE;
        let chunk_end = chunk_start.saturating_add(CHUNK_SIZE - 1).min(end);

        let mut local_members = Vec::new();
        let mut local_mismatches = Vec::new();
        let mut unreported = 0u64;

        for z in chunk_start..=chunk_end {
            match check_one(z) {
                Verdict::Member => local_members.push(z),
                Verdict::NonMember => {}
                Verdict::Mismatch => local_mismatches.push(z),
            }
            unreported += 1;

            // チャンク内でも定期的に進捗報告
            if unreported >= 1000 {
                let done = global_done.fetch_add(unreported, Ordering::Relaxed) + unreported;
                progress_callback(done, total);
                unreported = 0;
            }
        }

        if unreported > 0 {
            let done = global_done.fetch_add(unreported, Ordering::Relaxed) + unreported;
            progress_callback(done, total);
        }

        trace!(chunk_idx, chunk_start, chunk_end, "chunk done");

        // ロック汚染は他スレッドのパニック時のみ。結果は捨てずに回収する
        if !local_members.is_empty() {
            global_members
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .extend(local_members);
        }
        if !local_mismatches.is_empty() {
            global_mismatches
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .extend(local_mismatches);
        }
    });

    let total_checked = global_done.load(Ordering::Relaxed);
    let mut members = global_members.into_inner().unwrap_or_else(|e| e.into_inner());
    let mut mismatches = global_mismatches.into_inner().unwrap_or_else(|e| e.into_inner());
    members.sort_unstable();
    mismatches.sort_unstable();

    debug!(start, end, total_checked, members = members.len(), "parallel range verified");

    VerifyResult {
        total_checked,
        all_agree: mismatches.is_empty(),
        members,
        mismatches,
    }
}
