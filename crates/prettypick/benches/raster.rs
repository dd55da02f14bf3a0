use criterion::{criterion_group, criterion_main, Criterion};
use prettypick::opt::Options;
use prettypick::raster::{alpha_bar, sv_square, Checkerboard};
use prettypick::{Channel, Picker, Rgb, Size};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    group.sample_size(50);

    let size = Size::new(200, 200);
    group.bench_function("sv-square", |b| b.iter(|| sv_square(197, size)));

    let checkerboard = Checkerboard::default();
    let size = Size::new(200, 11);
    group.bench_function("alpha-bar", |b| {
        b.iter(|| alpha_bar(Rgb::new(135, 206, 235), size, &checkerboard))
    });

    group.finish();

    let mut group = c.benchmark_group("edit");
    group.sample_size(20);

    let mut picker = Picker::new("sky blue", Options::with_alpha()).expect("known color name");
    let mut hue = 0_u16;
    group.bench_function("hue-field", |b| {
        b.iter(|| {
            hue = (hue + 1) % 361;
            picker.edit_channel(Channel::Hue, &hue.to_string())
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
