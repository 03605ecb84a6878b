use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use hiretui::domain::{status::Badge, text::wrap_text};

const COPY: &str = "HireTrack keeps every resume, job and hiring process in one place, \
so your team always knows what happens next. Track applications from first contact to \
offer, schedule meetings without the back-and-forth, and let the pipeline insights \
point out what needs attention.";

const STATUSES: &[&str] = &[
    "completed",
    "approved",
    "hired",
    "processing",
    "in_progress",
    "scheduled",
    "failed",
    "rejected",
    "pending",
    "something-new",
];

fn benchmark(c: &mut Criterion) {
    c.bench_function("wrap-marketing-copy", |b| {
        b.iter(|| wrap_text(black_box(COPY), black_box(60)))
    });

    c.bench_function("badge-mapping", |b| {
        b.iter(|| {
            STATUSES
                .iter()
                .map(|s| Badge::from_status(black_box(s)))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
