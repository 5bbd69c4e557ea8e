//! Benchmarks for the per-frame animation path.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrollscape::animation::{RotationTween, TweenScheduler};
use scrollscape::engine::viewport::{DocumentMetrics, Viewport};
use scrollscape::options::{AnimationOptions, Options};
use scrollscape::renderer::RecordingRenderer;
use scrollscape::scene::builder::build_scene;
use scrollscape::util::clock::ManualClock;
use scrollscape::util::easing::EasingFunction;
use scrollscape::AnimationState;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::ExpoOut;
    c.bench_function("expo_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn tween_advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tween_advance");
    let mut options = Options::default();
    options.scene.seed = Some(1);
    options.scene.particle_count = 0;
    let animation = AnimationOptions::default();

    for count in [1_usize, 10, 100] {
        group.bench_function(format!("{count}_tweens"), |b| {
            b.iter_batched(
                || {
                    let mut scheduler = TweenScheduler::new();
                    for i in 0..count {
                        scheduler.start(RotationTween::kick(&animation, i % 3, 0.0));
                    }
                    (scheduler, build_scene(&options))
                },
                |(mut scheduler, mut scene)| {
                    scheduler.advance(black_box(1.2), &mut scene);
                    black_box(scene);
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let mut options = Options::default();
    options.scene.seed = Some(1);
    let viewport = Viewport::new(
        1280.0,
        720.0,
        1.0,
        2.0,
        &DocumentMetrics::for_sections(3, 720.0),
    );
    let clock = ManualClock::new();
    let mut state = AnimationState::new(options, viewport, Box::new(clock.clone()));
    let mut renderer = RecordingRenderer::new();
    let _ = state.handle_scroll(720.0);

    c.bench_function("frame_step", |b| {
        b.iter(|| {
            clock.advance(1.0 / 60.0);
            let _ = state.frame(&mut renderer);
            renderer.frames.clear();
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    tween_advance_benchmark,
    frame_benchmark
);
criterion_main!(benches);
