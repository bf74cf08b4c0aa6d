// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for showcase navigation.
//!
//! Measures the performance of:
//! - Slide navigation with the autoplay timer re-armed on each step
//! - The gallery load-and-swap cycle (select, complete, restore)
//! - Keyboard shortcut resolution

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::domain::showcase::{ImageRecord, SlideRecord, View};
use iced_reel::showcase::gallery;
use iced_reel::showcase::input::{self, InputContext, Key};
use iced_reel::showcase::{Controller, Effect, Message, Setup};
use std::hint::black_box;
use std::path::PathBuf;

const ITEMS: usize = 50;

fn setup() -> Setup {
    Setup {
        slides: (0..ITEMS)
            .map(|i| SlideRecord {
                source: PathBuf::from(format!("slide-{i}.png")),
                caption: Some(format!("Slide {i}")),
            })
            .collect(),
        images: (0..ITEMS)
            .map(|index| ImageRecord {
                index,
                source: PathBuf::from(format!("image-{index}.png")),
                title: format!("Image {index}"),
                description: "Description".to_string(),
                category: "Category".to_string(),
                date: "2025".to_string(),
            })
            .collect(),
        views: View::ALL.to_vec(),
        ..Setup::default()
    }
}

/// Benchmark wrap-around slide navigation.
fn bench_slides(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_navigation");
    let (mut controller, _) = Controller::new(setup());

    group.bench_function("change_slide", |b| {
        b.iter(|| {
            black_box(controller.change_slide(black_box(1)));
        });
    });

    group.bench_function("go_to_slide_out_of_range", |b| {
        b.iter(|| {
            black_box(controller.go_to_slide(black_box(ITEMS as isize + 7)));
        });
    });

    group.finish();
}

/// Benchmark a full gallery step: select, finish the decode, restore.
fn bench_gallery_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_navigation");
    let (mut controller, _) = Controller::new(setup());
    let _ = controller.switch_view(View::Gallery);

    group.bench_function("next_image_cycle", |b| {
        b.iter(|| {
            for effect in controller.next_image() {
                if let Effect::DecodeImage(request) = effect {
                    for effect in controller.image_loaded(request.token, Ok(())) {
                        if let Effect::ScheduleRestore { token, .. } = effect {
                            black_box(controller.handle(Message::Gallery(
                                gallery::Message::RestorePresentation(token),
                            )));
                        }
                    }
                }
            }
        });
    });

    group.finish();
}

/// Benchmark keyboard shortcut resolution.
fn bench_resolve_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_navigation");
    let ctx = InputContext {
        overlay_open: false,
        view: View::Gallery,
    };
    let keys = [
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::Space,
        Key::Character("f".to_string()),
        Key::Character("x".to_string()),
    ];

    group.bench_function("resolve_key", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(input::resolve_key(black_box(key), ctx));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_slides, bench_gallery_cycle, bench_resolve_key);
criterion_main!(benches);
