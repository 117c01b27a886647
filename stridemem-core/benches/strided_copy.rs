use criterion::{criterion_group, criterion_main, Criterion};
use stridemem_core::{contiguous_strides, strided_copy, BackendDevice, CpuDevice, Dims};

fn bench_cpu_crop_256(c: &mut Criterion) {
    const N: usize = 512;
    const M: usize = 256;
    let dev = CpuDevice;
    let src = dev.storage_from_slice(&vec![1.0f32; N * N]).unwrap();
    let mut dst = dev.alloc::<f32>(M * M).unwrap();

    let src_stride = Dims::from([N, 1]);
    let extent = Dims::from([M, M]);
    let dst_stride = contiguous_strides(&extent);
    let src_offset = (N / 4) * N + N / 4;

    c.bench_function("cpu_crop_256x256", |bencher| {
        bencher.iter(|| {
            strided_copy(
                &dev,
                &src,
                src_offset,
                &src_stride,
                &extent,
                &dst_stride,
                &mut dst,
                0,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_cpu_crop_256);
criterion_main!(benches);
