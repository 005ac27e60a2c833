// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use understory_reveal::{
    Appearance, AppearanceState, BoundaryPathBuilder, Configuration, Direction, PointerUpdate,
    RevealSurface, SnapshotMask, Styleable, TransitionCoordinator,
};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

struct NullSurface(Size);

impl RevealSurface for NullSurface {
    type Snapshot = ();

    fn bounds(&self) -> Rect {
        self.0.to_rect()
    }

    fn capture_snapshot(&mut self) -> Self::Snapshot {}

    fn present_snapshot(&mut self, mask: &SnapshotMask<()>) {
        black_box(mask.anchor());
    }

    fn apply_mask(&mut self, mask: &SnapshotMask<()>) {
        black_box(mask.clip_path());
    }

    fn dismiss_snapshot(&mut self, _: ()) {}
}

struct Flip(Appearance);

impl Styleable for Flip {
    fn toggle_active_appearance(&mut self, appearance: Appearance) {
        self.0 = appearance;
    }
}

fn coordinator(direction: Direction) -> TransitionCoordinator<NullSurface, Flip> {
    let mut c = TransitionCoordinator::new(
        NullSurface(Size::new(1170.0, 2532.0)),
        Flip(Appearance::Light),
        AppearanceState::default(),
        Configuration::default(),
    );
    c.set_direction(direction);
    c
}

fn bench_boundary(c: &mut Criterion) {
    let builder = BoundaryPathBuilder::new(Size::new(1170.0, 2532.0), 1.0);
    let mut group = c.benchmark_group("boundary");

    group.bench_function("interactive_all_directions", |b| {
        b.iter(|| {
            for direction in DIRECTIONS {
                black_box(builder.interactive(
                    direction,
                    black_box(Vec2::new(640.0, -1800.0)),
                    black_box(Point::new(400.0, 900.0)),
                ));
            }
        });
    });

    group.bench_function("random_curve", |b| {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        b.iter(|| black_box(builder.random(Direction::Down, &mut rng)));
    });

    group.finish();
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");
    let frame = Duration::from_millis(16);

    group.bench_function("drag_release_settle", |b| {
        b.iter_batched(
            || coordinator(Direction::Down),
            |mut reveal| {
                reveal.pointer_down(PointerUpdate::new((585.0, 0.0), 1, Duration::ZERO));
                for step in 1..=60_u32 {
                    let y = 25.0 * f64::from(step);
                    reveal.pointer_move(PointerUpdate::new((585.0, y), 1, frame * step));
                }
                reveal.pointer_up(PointerUpdate::new((585.0, 1500.0), 0, frame * 61));
                let mut frames = 0_u32;
                while reveal.tick(frame).is_none() && frames < 1000 {
                    frames += 1;
                }
                black_box(frames);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("automated_hill", |b| {
        b.iter_batched(
            || coordinator(Direction::Left),
            |mut reveal| {
                reveal.perform_automated_transition(false);
                while reveal.tick(frame).is_none() {}
                black_box(reveal.appearance());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_boundary, bench_transition);
criterion_main!(benches);
