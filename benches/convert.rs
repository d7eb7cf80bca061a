use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use floatpix::image_io::{
    DynamicRange, FloatRgbaImage, RawPixelBuffer, WriteSource, normalize, rasterize,
};

fn gradient_image(width: usize, height: usize) -> FloatRgbaImage {
    let mut image = FloatRgbaImage::new(width, height);
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let v = ((x + y) % 256) as f32 / 255.0;
            image.put_rgba(x, y, [v * 4.0, v, v * 0.25, 1.0]);
        }
    }
    image
}

fn gradient_buffer(width: usize, height: usize, channels: usize) -> RawPixelBuffer {
    let data: Vec<f32> = (0..width * height * channels)
        .map(|i| (i % 512) as f32 / 511.0)
        .collect();
    RawPixelBuffer::from_samples(width, height, channels, data).unwrap()
}

fn benchmark_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_by_size");

    let sizes = vec![
        (128, 128, "128x128"),
        (512, 512, "512x512"),
        (1024, 1024, "1024x1024"),
    ];

    for (width, height, label) in sizes {
        let image = gradient_image(width, height);

        group.bench_with_input(BenchmarkId::new("ldr", label), &image, |b, image| {
            b.iter(|| rasterize(black_box(image).into(), DynamicRange::Ldr, 2.2));
        });

        group.bench_with_input(BenchmarkId::new("hdr", label), &image, |b, image| {
            b.iter(|| rasterize(black_box(image).into(), DynamicRange::Hdr, 2.2));
        });
    }

    group.finish();
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_by_channels");

    for channels in [3, 4] {
        let buffer = gradient_buffer(512, 512, channels);

        group.bench_with_input(
            BenchmarkId::from_parameter(channels),
            &buffer,
            |b, buffer| {
                b.iter(|| normalize(black_box(buffer)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_rasterize, benchmark_normalize);
criterion_main!(benches);
