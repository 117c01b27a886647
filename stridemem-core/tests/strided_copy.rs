use stridemem_core::{contiguous_strides, strided_copy, BackendDevice, CpuDevice, Dims};

#[test]
fn cpu_crop() {
    #[rustfmt::skip]
    let src = [
        0, 1, 2, 0, 0,
        0, 3, 4, 0, 0,
        0, 0, 0, 0, 0,
    ];

    let dev = CpuDevice;
    let src = dev.storage_from_slice(&src).unwrap();
    let mut dst = dev.alloc::<i32>(4).unwrap();

    strided_copy(
        &dev,
        &src,
        1,
        &Dims::from([5, 1]),
        &Dims::from([2, 2]),
        &Dims::from([2, 1]),
        &mut dst,
        0,
    )
    .unwrap();

    assert_eq!(dst.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn cpu_concat() {
    #[rustfmt::skip]
    let src = [
        1, 2,
        3, 4,
    ];

    let dev = CpuDevice;
    let src = dev.storage_from_slice(&src).unwrap();
    let mut dst = dev.alloc::<i32>(8).unwrap();

    let src_stride = Dims::from([2, 1]);
    let dst_extent = Dims::from([2, 2]);
    let dst_stride = Dims::from([4, 1]);

    strided_copy(&dev, &src, 0, &src_stride, &dst_extent, &dst_stride, &mut dst, 0).unwrap();
    strided_copy(&dev, &src, 0, &src_stride, &dst_extent, &dst_stride, &mut dst, 2).unwrap();

    #[rustfmt::skip]
    let expect = [
        1, 2, 1, 2,
        3, 4, 3, 4,
    ];
    assert_eq!(dst.as_slice(), &expect);
}

#[test]
fn rank1_is_contiguous_copy() {
    let data: Vec<u32> = (0..17).collect();
    let dev = CpuDevice;
    let src = dev.storage_from_slice(&data).unwrap();
    let mut dst = dev.alloc::<u32>(17).unwrap();

    strided_copy(
        &dev,
        &src,
        0,
        &Dims::from([1]),
        &Dims::from([17]),
        &Dims::from([1]),
        &mut dst,
        0,
    )
    .unwrap();

    assert_eq!(dst.as_slice(), data.as_slice());
}

#[test]
fn rank3_index_correspondence() {
    use rand::Rng;

    let mut rng = rand::rng();
    let data: Vec<f32> = (0..4 * 5 * 6).map(|_| rng.random()).collect();

    let dev = CpuDevice;
    let src = dev.storage_from_slice(&data).unwrap();

    let src_stride = Dims::from([30, 6, 1]);
    let extent = Dims::from([2, 3, 4]);
    let dst_stride = contiguous_strides(&extent);
    let mut dst = dev.alloc::<f32>(extent.numel()).unwrap();

    // Sub-block starting at source multi-index (1, 2, 1).
    let src_offset = 30 + 2 * 6 + 1;
    strided_copy(&dev, &src, src_offset, &src_stride, &extent, &dst_stride, &mut dst, 0).unwrap();

    let dst = dst.as_slice();
    for a in 0..2 {
        for b in 0..3 {
            for c in 0..4 {
                let got = dst[a * 12 + b * 4 + c];
                let want = data[src_offset + a * 30 + b * 6 + c];
                assert_eq!(got, want, "mismatch at index ({a}, {b}, {c})");
            }
        }
    }
}

#[test]
fn outer_dims_untouched() {
    let dev = CpuDevice;
    let src = dev.storage_from_slice(&[7i64; 4]).unwrap();
    // Destination rows are 4 wide but only 2 elements per row are written.
    let mut dst = dev.storage_from_slice(&[-1i64; 8]).unwrap();

    strided_copy(
        &dev,
        &src,
        0,
        &Dims::from([2, 1]),
        &Dims::from([2, 2]),
        &Dims::from([4, 1]),
        &mut dst,
        0,
    )
    .unwrap();

    assert_eq!(dst.as_slice(), &[7, 7, -1, -1, 7, 7, -1, -1]);
}

#[test]
fn zero_extent_is_noop() {
    let dev = CpuDevice;
    let src = dev.storage_from_slice(&[1.0f64; 6]).unwrap();
    let mut dst = dev.storage_from_slice(&[9.0f64; 6]).unwrap();

    strided_copy(
        &dev,
        &src,
        0,
        &Dims::from([3, 1]),
        &Dims::from([0, 3]),
        &Dims::from([3, 1]),
        &mut dst,
        0,
    )
    .unwrap();

    assert_eq!(dst.as_slice(), &[9.0; 6]);
}

#[test]
#[should_panic(expected = "rank")]
fn rank_mismatch_panics() {
    let dev = CpuDevice;
    let src = dev.storage_from_slice(&[0u8; 4]).unwrap();
    let mut dst = dev.alloc::<u8>(4).unwrap();

    let _ = strided_copy(
        &dev,
        &src,
        0,
        &Dims::from([2, 1]),
        &Dims::from([4]),
        &Dims::from([1]),
        &mut dst,
        0,
    );
}

#[cfg(feature = "cuda")]
mod cuda {
    use super::*;
    use stridemem_core::{BackendStorage, CudaDevice};

    #[test]
    fn gpu_crop() {
        #[rustfmt::skip]
        let src = [
            0, 1, 2, 0, 0,
            0, 3, 4, 0, 0,
            0, 0, 0, 0, 0,
        ];

        let dev = CudaDevice::new(0).unwrap();
        let src = dev.storage_from_slice(&src).unwrap();
        let mut dst = dev.alloc::<i32>(4).unwrap();

        strided_copy(
            &dev,
            &src,
            1,
            &Dims::from([5, 1]),
            &Dims::from([2, 2]),
            &Dims::from([2, 1]),
            &mut dst,
            0,
        )
        .unwrap();
        dev.synchronize().unwrap();

        let host = dst.to_cpu_storage().unwrap();
        assert_eq!(host.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn gpu_concat() {
        let dev = CudaDevice::new(0).unwrap();
        let src = dev.storage_from_slice(&[1, 2, 3, 4]).unwrap();
        let mut dst = dev.alloc::<i32>(8).unwrap();

        let src_stride = Dims::from([2, 1]);
        let dst_extent = Dims::from([2, 2]);
        let dst_stride = Dims::from([4, 1]);

        strided_copy(&dev, &src, 0, &src_stride, &dst_extent, &dst_stride, &mut dst, 0).unwrap();
        strided_copy(&dev, &src, 0, &src_stride, &dst_extent, &dst_stride, &mut dst, 2).unwrap();
        dev.synchronize().unwrap();

        let host = dst.to_cpu_storage().unwrap();
        assert_eq!(host.as_slice(), &[1, 2, 1, 2, 3, 4, 3, 4]);
    }

    /// Device output must match the host reference algorithm exactly.
    #[test]
    fn cross_space_equivalence() {
        let data: Vec<f32> = (0..60).map(|i| i as f32).collect();
        let src_stride = Dims::from([30, 6, 1]);
        let extent = Dims::from([2, 3, 4]);
        let dst_stride = contiguous_strides(&extent);
        let src_offset = 30 + 6;

        let cpu = CpuDevice;
        let host_src = cpu.storage_from_slice(&data).unwrap();
        let mut host_dst = cpu.alloc::<f32>(extent.numel()).unwrap();
        strided_copy(
            &cpu, &host_src, src_offset, &src_stride, &extent, &dst_stride, &mut host_dst, 0,
        )
        .unwrap();

        let gpu = CudaDevice::new(0).unwrap();
        let gpu_src = gpu.storage_from_slice(&data).unwrap();
        let mut gpu_dst = gpu.alloc::<f32>(extent.numel()).unwrap();
        strided_copy(
            &gpu, &gpu_src, src_offset, &src_stride, &extent, &dst_stride, &mut gpu_dst, 0,
        )
        .unwrap();
        gpu.synchronize().unwrap();

        let downloaded = gpu_dst.to_cpu_storage().unwrap();
        assert_eq!(downloaded.as_slice(), host_dst.as_slice());
    }
}
