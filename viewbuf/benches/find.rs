//! Substring search benchmarks.
//!
//! Compares `Buffer::find` (bloom-assisted Horspool) against a naive
//! window-by-window scan on random text and on a low-entropy haystack where
//! the last-byte shift rarely helps.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use viewbuf::{Buffer, Finder};

fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let needle = b"quixotic zephyr";

    for (name, alphabet) in [
        ("lowercase", &b"abcdefghijklmnopqrstuvwxyz "[..]),
        ("binary", &b"ab"[..]),
    ] {
        let mut text = random_text(1 << 20, alphabet, 42);
        let tail = text.len() - needle.len();
        text[tail..].copy_from_slice(needle);
        let buf = Buffer::from_vec(text);
        let finder = Finder::new(needle);

        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::new("horspool", name), &buf, |b, buf| {
            b.iter(|| buf.find(black_box(needle), 0, None))
        });
        group.bench_with_input(BenchmarkId::new("finder", name), &buf, |b, buf| {
            b.iter(|| buf.find_with(black_box(&finder), 0, None))
        });
        group.bench_with_input(BenchmarkId::new("naive", name), &buf, |b, buf| {
            b.iter(|| naive_find(buf, black_box(needle)))
        });
    }

    group.finish();
}

fn bench_find_byte(c: &mut Criterion) {
    let mut text = random_text(1 << 20, b"abcdefgh", 7);
    let last = text.len() - 1;
    text[last] = b'z';
    let buf = Buffer::from_vec(text);

    c.bench_function("find_byte", |b| b.iter(|| buf.find(black_box(b"z"), 0, None)));
}

criterion_group!(benches, bench_find, bench_find_byte);
criterion_main!(benches);
