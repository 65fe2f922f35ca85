use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notation_converter::interpreter::convert;
use notation_converter::interpreter::token::Notation;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let expressions = [
        ("3 + 4 * 2", Notation::Infix),
        ("12 + 3 * (4 - 5) / (6 - (7 + 8))", Notation::Infix),
        ("1 2 + 3 4 - * 5 6 / +", Notation::Postfix),
        ("- + * 1 2 / 3 4 - 5 6", Notation::Prefix),
        ("((((1 + 2) * 3) - 4) / 5) + 6 * 7 - 8 / 9", Notation::Infix),
    ];
    for (expression, notation) in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::new(notation.to_string(), expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| convert(expression, notation));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
