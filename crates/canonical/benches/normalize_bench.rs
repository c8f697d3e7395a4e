use canonical::{normalize, TermMatcher};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [16, 128, 1024].iter() {
        let ascii = "cardiologia ".repeat(*size / 12 + 1);
        let accented = "João Conceição ".repeat(*size / 15 + 1);

        group.throughput(Throughput::Bytes(ascii.len() as u64));
        group.bench_function(format!("ascii_{size}"), |b| {
            b.iter(|| normalize(black_box(&ascii)))
        });

        group.throughput(Throughput::Bytes(accented.len() as u64));
        group.bench_function(format!("accented_{size}"), |b| {
            b.iter(|| normalize(black_box(&accented)))
        });
    }

    let term = TermMatcher::new("conceicao");
    let candidate = "Ana Conceição Gonçalves";
    group.bench_function("term_matches", |b| {
        b.iter(|| term.matches(black_box(candidate)))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
