use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastrum::clipper::{clip_triangles, perspective_clipping_planes, ClipTriangle};
use rastrum::colour::Colour;
use rastrum::math::{Orientation, Vec3, Vec4};
use rastrum::prelude::{Camera, CancellationToken, Cube, Rasteriser, RenderingOptions};
use rastrum::render::{FrameBuffer, Rasterizer, ScanlineRasterizer};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn small_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ]
}

fn medium_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ]
}

fn large_triangle() -> [Vec3; 3] {
    [
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(750.0, 100.0, 0.0),
        Vec3::new(400.0, 550.0, 0.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let scanline = ScanlineRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let mut buffer = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, Colour::WHITE);
            b.iter(|| {
                buffer.clear(Colour::WHITE);
                scanline.fill_triangle(black_box(*tri), Colour::RED, &mut buffer);
            });
        });
    }

    group.bench_function("edge", |b| {
        let mut buffer = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, Colour::WHITE);
        b.iter(|| {
            scanline.draw_edge(
                black_box(Vec3::new(10.0, 20.0, 0.0)),
                black_box(Vec3::new(790.0, 580.0, 0.5)),
                Colour::BLACK,
                &mut buffer,
            );
        });
    });

    group.finish();
}

fn benchmark_clipping(c: &mut Criterion) {
    let planes = perspective_clipping_planes(4.0, 3.0, 1.0, 100.0).unwrap();
    // One triangle inside, one crossing the near and right planes.
    let triangles: [ClipTriangle; 2] = [
        [
            Vec4::point(-0.5, -0.5, 5.0),
            Vec4::point(0.0, 0.5, 5.0),
            Vec4::point(0.5, -0.5, 5.0),
        ],
        [
            Vec4::point(-1.0, 0.0, -2.0),
            Vec4::point(0.0, 1.0, 6.0),
            Vec4::point(8.0, 0.0, 6.0),
        ],
    ];

    let mut group = c.benchmark_group("clipping");
    for (name, triangle) in [("inside", triangles[0]), ("crossing", triangles[1])] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &triangle, |b, tri| {
            let mut queue = Vec::with_capacity(16);
            let mut spare = Vec::with_capacity(16);
            b.iter(|| {
                queue.clear();
                queue.push(*tri);
                clip_triangles(&mut queue, &mut spare, black_box(&planes));
                queue.len()
            });
        });
    }
    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut cube = Cube::new(1.0).mesh().with_draw_edges(true);
    cube.set_position(Vec3::new(0.0, 0.0, 4.0));
    let camera = Camera::perspective(Vec3::ZERO, Orientation::default(), 4.0, 3.0, 2.0, 50.0);
    let mut rasteriser = Rasteriser::new(
        RenderingOptions::new()
            .with_size(BUFFER_WIDTH, BUFFER_HEIGHT)
            .with_camera(camera)
            .with_entity(cube),
    );
    let token = CancellationToken::new();

    c.bench_function("frame_cube", |b| {
        b.iter(|| pollster::block_on(rasteriser.render(&token)));
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_clipping,
    benchmark_frame
);
criterion_main!(benches);
