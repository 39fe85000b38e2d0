//! Throughput benchmarks for the classical ciphers across text sizes

use classic_cipher::{PolyalphabeticCipher, RouteCipher};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const RUSSIAN_SAMPLE: &str = "ПРОВЕРКАКОРРЕКТНОСТИРАБОТЫШИФРАПРИБОЛЬШОМОБЪЕМЕТЕКСТА";
const LATIN_SAMPLE: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG ";

/// Letter counts: 1K, 64K, 1M
const SIZES: [usize; 3] = [1024, 65_536, 1_048_576];

fn sample_of(sample: &str, letters: usize) -> String {
    sample.chars().cycle().take(letters).collect()
}

fn benchmark_polyalphabetic(c: &mut Criterion) {
    let cipher = PolyalphabeticCipher::new("СЕКРЕТНЫЙКЛЮЧ").expect("valid key");
    let mut group = c.benchmark_group("polyalphabetic_throughput");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let text = sample_of(RUSSIAN_SAMPLE, size);
        let encrypted = cipher.encrypt(&text).expect("encrypt");

        group.bench_with_input(BenchmarkId::new("encrypt", size), &text, |b, text| {
            b.iter(|| std::hint::black_box(cipher.encrypt(text).expect("encrypt")));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &encrypted, |b, text| {
            b.iter(|| std::hint::black_box(cipher.decrypt(text).expect("decrypt")));
        });
    }

    group.finish();
}

fn benchmark_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_throughput");

    for columns in [4, 64] {
        let cipher = RouteCipher::new(columns).expect("valid key");
        for size in SIZES {
            group.throughput(Throughput::Elements(size as u64));
            let text = sample_of(LATIN_SAMPLE, size);
            let encrypted = cipher.encrypt(&text).expect("encrypt");
            let id = format!("{columns}_columns/{size}");

            group.bench_with_input(BenchmarkId::new("encrypt", &id), &text, |b, text| {
                b.iter(|| std::hint::black_box(cipher.encrypt(text).expect("encrypt")));
            });
            group.bench_with_input(BenchmarkId::new("decrypt", &id), &encrypted, |b, text| {
                b.iter(|| std::hint::black_box(cipher.decrypt(text).expect("decrypt")));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_polyalphabetic, benchmark_route);
criterion_main!(benches);
