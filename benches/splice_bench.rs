// Performance benchmarks for database loading, expansion and splice matching

use ids_splice::{run_batch, CharacterDatabase, SpliceMatcher};
use std::time::Instant;

/// Synthetic IDS source: every CJK ideograph in the range gets one ⿰ or ⿲
/// form built from a small pool of components
fn synthetic_ids(count: u32) -> String {
    let pool: Vec<char> = "木主口十人亻氵扌土日月火心女子寸".chars().collect();
    let mut ids = String::new();

    for c in pool.iter() {
        ids.push_str(&format!("U+{:04X}\t{}\t{}\n", *c as u32, c, c));
    }

    for n in 0..count {
        let code = 0x4E00 + n;
        let c = match char::from_u32(code) {
            Some(c) if !pool.contains(&c) => c,
            _ => continue,
        };
        let p = pool.len() as u32;
        let left = pool[(n % p) as usize];
        let mid = pool[((n / p) % p) as usize];
        let right = pool[((n / (p * p)) % p) as usize];

        let form = if n % 3 == 0 {
            format!("\u{2FF2}{}{}{}", left, mid, right)
        } else {
            format!("\u{2FF0}{}{}", left, mid)
        };
        ids.push_str(&format!("U+{:04X}\t{}\t{}[G]\n", code, c, form));
    }

    ids
}

fn main() {
    println!("🏃 IDS Splice Performance Benchmarks\n");

    let ids = synthetic_ids(20_000);

    let start = Instant::now();
    let db = CharacterDatabase::from_reader(ids.as_bytes()).expect("Failed to build database");
    let load = start.elapsed();

    println!("📚 DATABASE LOAD");
    println!("─────────────────");
    println!(
        "  {} in {:.3}ms\n",
        db.stats(),
        load.as_secs_f64() * 1000.0
    );

    bench_expand(&db);
    bench_find_match(&db);
    bench_batch(&db);

    println!("\n✅ Benchmarks completed!");
}

fn bench_expand(db: &CharacterDatabase) {
    println!("🌳 EXPANSION (depth-bounded)");
    println!("─────────────────────────────");

    let chars: Vec<char> = (0x4E00..0x4E00 + 2000).filter_map(char::from_u32).collect();

    let start = Instant::now();
    let mut total = 0usize;
    for &c in &chars {
        total += db.linear_sequences(c).len();
    }
    let duration = start.elapsed();

    println!(
        "  {} characters → {} sequences in {:.3}ms",
        chars.len(),
        total,
        duration.as_secs_f64() * 1000.0
    );
    println!();
}

fn bench_find_match(db: &CharacterDatabase) {
    println!("✂️  FIND MATCH (single pairs)");
    println!("─────────────────────────────");

    let matcher = SpliceMatcher::new(db);
    let pairs = vec![('林', '柱'), ('一', '丁'), ('人', '口'), ('伙', '伴')];

    for (a, b) in pairs {
        let start = Instant::now();
        let results = matcher.find_match(a, b);
        let duration = start.elapsed();

        println!(
            "  {}{:<8} → {} matches in {:.3}ms",
            a,
            b,
            results.len(),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_batch(db: &CharacterDatabase) {
    println!("📦 BATCH (vocabulary of adjacent pairs)");
    println!("────────────────────────────────────────");

    let chars: Vec<char> = (0x4E00..0x4E00 + 10_000).filter_map(char::from_u32).collect();
    let words: Vec<String> = chars
        .windows(2)
        .map(|w| w.iter().collect())
        .collect();

    let matcher = SpliceMatcher::new(db);
    let start = Instant::now();
    let summary = run_batch(&matcher, &words, std::io::sink(), 0).expect("Batch failed");
    let total = start.elapsed();

    println!(
        "  {} words, {} with matches in {:.3}ms ({:.4}ms avg)",
        summary.processed,
        summary.found,
        total.as_secs_f64() * 1000.0,
        (total.as_secs_f64() / summary.processed.max(1) as f64) * 1000.0
    );
}
