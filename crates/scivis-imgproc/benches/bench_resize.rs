use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use scivis_image::{Image, ImageSize, LogSink};
use scivis_imgproc::interpolation::InterpolationMode;
use scivis_imgproc::parallel::ExecutionStrategy;
use scivis_imgproc::resize::{upsample_into, ResampleConfig};

fn bench_upsample(c: &mut Criterion) {
    let mut group = c.benchmark_group("Upsample");

    for (width, height) in [(64, 56), (128, 112), (256, 224)].iter() {
        let new_size = ImageSize {
            width: width * 4,
            height: height * 4,
        };
        group.throughput(criterion::Throughput::Elements(new_size.area() as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<f32, 1>::from_fn(image_size, |x, y| [((x ^ y) % 17) as f32]);

        // output image
        let out = Image::<f32, 1>::from_size_val(new_size, 0.0).unwrap();

        for mode in InterpolationMode::ALL {
            for strategy in [ExecutionStrategy::Serial, ExecutionStrategy::ParallelRows] {
                let config = ResampleConfig { mode, strategy };
                let id = format!("{mode}_{strategy:?}");
                group.bench_with_input(
                    BenchmarkId::new(id, &parameter_string),
                    &(&image, &out),
                    |b, i| {
                        let (src, mut dst) = (i.0, i.1.clone());
                        b.iter(|| {
                            upsample_into(
                                black_box(src),
                                black_box(&mut dst),
                                black_box(&config),
                                &mut LogSink,
                            )
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_upsample);
criterion_main!(benches);
