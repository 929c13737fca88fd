use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;

use freminal_terminal_emulator::screen::Screen;

fn sample_text(len: usize) -> String {
    "the quick brown fox jumps over the lazy dog "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_draw(bench: &mut Criterion) {
    let data = sample_text(8192);

    let mut group = bench.benchmark_group("draw");
    group.bench_with_input(BenchmarkId::from_parameter("8192_chars"), &data, |b, data| {
        b.iter(|| {
            let mut screen = Screen::new(50, 120, 2000).unwrap();
            for c in data.chars() {
                screen.draw(c);
            }
        });
    });
    group.finish();
}

fn bench_resize(bench: &mut Criterion) {
    let data = sample_text(8192);

    let mut group = bench.benchmark_group("resize");
    group.bench_with_input(BenchmarkId::from_parameter("reflow_8192_chars"), &data, |b, data| {
        b.iter(|| {
            let mut screen = Screen::new(50, 120, 2000).unwrap();
            for c in data.chars() {
                screen.draw(c);
            }
            screen.resize(30, 80).unwrap();
            screen.resize(50, 120).unwrap();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_draw, bench_resize);
criterion_main!(benches);
