//! Per-frame cost of the zoom controller.
#![allow(missing_docs, unused_results, clippy::panic)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use zoomrig::camera::{
    FollowTarget, NullNotifier, PanState, RigCamera, RotationState,
    TerrainAreaKind, TerrainFilter, TerrainQuery, ZoomController,
};
use zoomrig::options::ZoomOptions;

struct Hills;

impl TerrainQuery for Hills {
    fn height_at(&self, screen: Vec2, _filter: &TerrainFilter) -> Option<Vec3> {
        Some(Vec3::new(0.0, (screen.x * 0.01).sin() * 2.0, 0.0))
    }

    fn is_known_area(&self, _kind: &TerrainAreaKind) -> bool {
        true
    }
}

struct Neutral;

impl RotationState for Neutral {
    fn has_initial_rotation(&self) -> bool {
        true
    }
    fn is_rotating(&self) -> bool {
        false
    }
    fn initial_pitch(&self) -> f32 {
        50.0
    }
    fn reset_rotation(&mut self, _smooth: bool) {}
    fn rotation_speed(&self) -> f32 {
        4.0
    }
}

impl PanState for Neutral {
    fn is_following_target(&self) -> bool {
        false
    }
    fn last_pan_direction(&self) -> Vec3 {
        Vec3::ZERO
    }
    fn panning_speed(&self) -> f32 {
        4.0
    }
    fn set_follow_target(&mut self, _target: Option<FollowTarget>) {}
}

fn controller(config: ZoomOptions) -> ZoomController {
    match ZoomController::builder(config)
        .terrain(Hills)
        .rotation(Neutral)
        .pan(Neutral)
        .camera(RigCamera::default())
        .notifier(NullNotifier)
        .build()
    {
        Ok(controller) => controller,
        Err(e) => panic!("bench controller: {e}"),
    }
}

fn transform_apply_benchmark(c: &mut Criterion) {
    let mut zoom = controller(ZoomOptions::default());
    let mut flip = 1.0_f32;
    c.bench_function("apply_transform_mode", |b| {
        b.iter(|| {
            flip = -flip;
            zoom.record_zoom_input(black_box(flip));
            zoom.apply(black_box(1.0 / 60.0));
        })
    });
}

fn fov_apply_benchmark(c: &mut Criterion) {
    let mut zoom = controller(ZoomOptions {
        use_fov: true,
        min_height: 30.0,
        initial_height: 50.0,
        max_height: 70.0,
        ..ZoomOptions::default()
    });
    c.bench_function("apply_fov_mode", |b| {
        b.iter(|| {
            zoom.record_zoom_input(black_box(0.01));
            zoom.apply(black_box(1.0 / 60.0));
        })
    });
}

criterion_group!(benches, transform_apply_benchmark, fov_apply_benchmark);
criterion_main!(benches);
