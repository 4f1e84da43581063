//! Benchmarks for catalog decoding and board rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use signup_board::{Activity, ActivityCatalog, BoardView};

fn create_catalog(activities: usize, participants: usize) -> ActivityCatalog {
    ActivityCatalog::new(
        (0..activities)
            .map(|i| {
                (0..participants).fold(
                    Activity::new(format!("Activity {}", i), participants as u32 + 5)
                        .description("Weekly <session> & \"practice\"")
                        .schedule("Mondays, 3:30 PM - 5:00 PM"),
                    |activity, p| activity.participant(format!("student{}@mergington.edu", p)),
                )
            })
            .collect(),
    )
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000] {
        let json = serde_json::to_string(&create_catalog(size, 20)).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("catalog_{}", size), |b| {
            b.iter(|| serde_json::from_str::<ActivityCatalog>(black_box(&json)).unwrap())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1000] {
        let catalog = create_catalog(size, 20);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("view_model_{}", size), |b| {
            b.iter(|| BoardView::from_catalog(black_box(&catalog)))
        });

        let view = BoardView::from_catalog(&catalog);
        group.bench_function(format!("markup_{}", size), |b| {
            b.iter(|| black_box(&view).to_html())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_render);
criterion_main!(benches);
