use stridemem_core::{contiguous_strides, strided_copy, BackendDevice, CpuDevice, Dims};

fn main() {
    // A 3x5 buffer with a 2x2 block of interest starting at column 1.
    #[rustfmt::skip]
    let data = [
        0, 1, 2, 0, 0,
        0, 3, 4, 0, 0,
        0, 0, 0, 0, 0,
    ];

    let dev = CpuDevice;
    let src = dev.storage_from_slice(&data).unwrap();

    let extent = Dims::from([2, 2]);
    let mut dst = dev.alloc::<i32>(extent.numel()).unwrap();
    strided_copy(
        &dev,
        &src,
        1,
        &Dims::from([5, 1]),
        &extent,
        &contiguous_strides(&extent),
        &mut dst,
        0,
    )
    .unwrap();

    assert_eq!(dst.as_slice(), &[1, 2, 3, 4]);
    println!("cropped block: {:?}", dst.as_slice());
}
