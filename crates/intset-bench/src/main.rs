//! Benchmark for intset parsing, set algebra and binary encoding.
//!
//! Reads a JSON array of integer arrays (`[[3,1,2],[7,5]]`) from the path
//! given as the first argument, or generates synthetic sets when no path is
//! given. Set `RUST_LOG=intset=debug` to see rejected inputs.

use std::fs;
use std::time::{Duration, Instant};

use intset::{CanonicalSet, canonicalize, parse_text, to_text};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SYNTHETIC_SETS: usize = 2_000;
const SYNTHETIC_LEN: usize = 1_000;
const ITERS: u32 = 10;

/// Fixed seed so runs are comparable.
const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

fn synthetic_sets() -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..SYNTHETIC_SETS)
        .map(|_| {
            (0..SYNTHETIC_LEN)
                .map(|_| rng.gen_range(0..100_000))
                .collect()
        })
        .collect()
}

fn load_sets(path: &str) -> Vec<Vec<i32>> {
    let json = fs::read_to_string(path).expect("Failed to read input file");
    serde_json::from_str(&json).expect("Failed to parse JSON")
}

fn per_iter(elapsed: Duration) -> Duration {
    elapsed / ITERS
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let raw = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading sets");
            load_sets(&path)
        }
        None => synthetic_sets(),
    };
    let total_elements: usize = raw.iter().map(Vec::len).sum();
    println!("Loaded {} sets, {} elements", raw.len(), total_elements);

    // Canonicalize
    let start = Instant::now();
    let sets: Vec<CanonicalSet> = raw.iter().cloned().map(canonicalize).collect();
    println!("\nCanonicalize: {:?}", start.elapsed());
    let distinct: usize = sets.iter().map(CanonicalSet::len).sum();
    println!("  {} distinct elements", distinct);

    // Text round trip; the text grammar has no negative numbers
    let texts: Vec<String> = sets
        .iter()
        .filter(|s| s.first().is_none_or(|v| v >= 0))
        .map(to_text)
        .collect();
    let text_bytes: usize = texts.iter().map(String::len).sum();

    let start = Instant::now();
    for _ in 0..ITERS {
        for text in &texts {
            parse_text(text).expect("Failed to parse");
        }
    }
    let parse_time = per_iter(start.elapsed());
    println!(
        "\nParse text: {:?} (avg of {} iterations)",
        parse_time, ITERS
    );
    println!(
        "  Throughput: {:.2} MB/s",
        (text_bytes as f64 / 1_000_000.0) / parse_time.as_secs_f64()
    );

    let start = Instant::now();
    for _ in 0..ITERS {
        for set in &sets {
            let _ = to_text(set);
        }
    }
    println!("Format text: {:?}", per_iter(start.elapsed()));

    // Set algebra over adjacent pairs
    let pairs: Vec<(&CanonicalSet, &CanonicalSet)> =
        sets.windows(2).map(|w| (&w[0], &w[1])).collect();

    let ops: [(&str, fn(&CanonicalSet, &CanonicalSet) -> CanonicalSet); 4] = [
        ("union", intset::union),
        ("intersection", intset::intersection),
        ("symmetric_difference", intset::symmetric_difference),
        ("difference", intset::difference),
    ];

    println!("\n=== Set algebra ({} pairs) ===", pairs.len());
    for (name, op) in ops {
        let start = Instant::now();
        let mut produced = 0;
        for _ in 0..ITERS {
            produced = pairs.iter().map(|(a, b)| op(a, b).len()).sum::<usize>();
        }
        println!(
            "  {:<22} {:?} ({} elements out)",
            name,
            per_iter(start.elapsed()),
            produced
        );
    }

    let start = Instant::now();
    let mut supersets = 0;
    for _ in 0..ITERS {
        supersets = pairs.iter().filter(|(a, b)| intset::is_superset(a, b)).count();
    }
    println!(
        "  {:<22} {:?} ({} true)",
        "is_superset",
        per_iter(start.elapsed()),
        supersets
    );

    // Binary layout
    let start = Instant::now();
    let encoded: Vec<Vec<u8>> = sets
        .iter()
        .map(|s| intset::encode_set(s).expect("Failed to encode"))
        .collect();
    let encode_time = start.elapsed();
    let encoded_bytes: usize = encoded.iter().map(Vec::len).sum();

    let start = Instant::now();
    let compressed: Vec<Vec<u8>> = sets
        .iter()
        .map(|s| intset::encode_set_compressed(s, 3).expect("Failed to compress"))
        .collect();
    let compress_time = start.elapsed();
    let compressed_bytes: usize = compressed.iter().map(Vec::len).sum();

    let start = Instant::now();
    for (bytes, set) in encoded.iter().zip(&sets) {
        let decoded = intset::decode_set(bytes).expect("Failed to decode");
        assert_eq!(&decoded, set);
    }
    let decode_time = start.elapsed();

    println!("\n=== Binary ===");
    println!(
        "Uncompressed: {} bytes, encode {:?}, decode {:?}",
        encoded_bytes, encode_time, decode_time
    );
    println!(
        "Compressed (level 3): {} bytes in {:?}",
        compressed_bytes, compress_time
    );
    println!(
        "  Compression ratio: {:.1}x",
        encoded_bytes as f64 / compressed_bytes as f64
    );

    println!("\n=== Summary ===");
    println!("Sets: {}", sets.len());
    println!(
        "Text size: {} bytes ({:.1} MB)",
        text_bytes,
        text_bytes as f64 / 1_000_000.0
    );
    println!(
        "Binary vs text: {:.1}% (uncompressed), {:.1}% (compressed)",
        100.0 * encoded_bytes as f64 / text_bytes as f64,
        100.0 * compressed_bytes as f64 / text_bytes as f64
    );
}
