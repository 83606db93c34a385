use num_bigint::BigInt;
use std::env;
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use woodall::error::{check_range, parse_count, parse_integer, parse_u64};
use woodall::*;

fn print_usage() {
    eprintln!("ウッドール数判定 (z = k·2^k - 1)");
    eprintln!();
    eprintln!("使い方:");
    eprintln!("  woodall check <z>              z がウッドール数か判定");
    eprintln!("  woodall list <count>           先頭 count 項を表示");
    eprintln!("  woodall verify <start> <end>   参照実装との差分検証 (並列)");
    eprintln!();
    eprintln!("例:");
    eprintln!("  woodall check 7516192767       28·2^28-1");
    eprintln!("  woodall list 10");
    eprintln!("  woodall verify 0 10000000");
    eprintln!();
    eprintln!("ログ出力は RUST_LOG (例: RUST_LOG=debug) で制御します。");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "list" => cmd_list(&args[2..]),
        "verify" => cmd_verify(&args[2..]),
        _ => {
            eprintln!("不明なコマンド: {}", args[1]);
            print_usage();
            return;
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("エラー: {}", e);
            process::exit(2);
        }
    }
}

fn cmd_check(args: &[String]) -> Result<bool, WoodallError> {
    if args.is_empty() {
        eprintln!("使い方: woodall check <z>");
        return Ok(true);
    }

    let z = parse_integer(&args[0])?;
    println!("z = {}", z);

    let timer = Instant::now();
    let bound = SearchBound::for_candidate(&z);
    let index = woodall_index(&z);
    let elapsed = timer.elapsed();

    match bound {
        Some(SearchBound::SmallCase) => println!("探索範囲 = k ∈ {{1, 2, 3}}"),
        Some(SearchBound::CubeRoot(k)) => println!("探索範囲 = k ∈ 1..={} (⌊∛(z+1)⌋)", k),
        None => println!("探索範囲 = なし (z < 1)"),
    }

    match index {
        Some(k) => {
            println!("ウッドール数 = はい (k = {})", k);
            println!("{}·2^{} - 1 = {}", k, k, z);
            // 試し割りは √z に比例するので大きな z では省略
            if z.bits() <= 64 {
                println!("ウッドール素数 = {}", if is_prime(&z) { "はい" } else { "いいえ" });
            }
        }
        None => println!("ウッドール数 = いいえ"),
    }
    println!("計算時間 = {:?}", elapsed);
    Ok(true)
}

fn cmd_list(args: &[String]) -> Result<bool, WoodallError> {
    let count = match args.first() {
        Some(s) => parse_count(s)?,
        None => 10,
    };

    for (k, w) in WoodallSequence::new().take(count) {
        println!("W_{} = {}", k, w);
    }
    Ok(true)
}

fn cmd_verify(args: &[String]) -> Result<bool, WoodallError> {
    if args.len() < 2 {
        eprintln!("使い方: woodall verify <start> <end>");
        return Ok(true);
    }

    let start = parse_u64(&args[0])?;
    let end = parse_u64(&args[1])?;
    check_range(start, end)?;

    println!("差分検証: [{}, {}]", start, end);

    let timer = Instant::now();
    let result = verify_range_parallel(start, end, |done, total| {
        if done == total || done % 1_000_000 == 0 {
            eprint!("\x1b[2K\r  {}/{}", done, total);
        }
    });
    let elapsed = timer.elapsed();
    eprintln!();

    println!("検証数 = {}", result.total_checked);
    println!("ウッドール数 = {:?}", result.members);
    println!("計算時間 = {:?}", elapsed);

    if result.all_agree {
        println!("結果: 全て一致");
    } else {
        println!("結果: 不一致 {} 件", result.mismatches.len());
        for z in result.mismatches.iter().take(20) {
            println!("  z = {} (naive = {})", z, reference::naive_is_woodall(&BigInt::from(*z)));
        }
    }
    Ok(result.all_agree)
}
