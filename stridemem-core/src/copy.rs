use crate::{
    storage::{BackendDevice, BackendStorage},
    DType, Dims, Error, Result,
};

/// Copy a strided region of `dst_extent` elements from `src` to `dst`.
///
/// `src_stride`, `dst_extent` and `dst_stride` must have equal rank
/// `R >= 1`, with dimension 0 outermost. The element at destination
/// multi-index `(i0, .., i_{R-1})` receives the source element at the same
/// multi-index, each side resolving the index against its own strides and
/// base offset. The innermost dimension is the contiguous unit: the engine
/// issues one backend transfer of `dst_extent[R-1]` elements per
/// combination of outer indices, walking the outer dimensions
/// outermost-first in ascending index order. On an asynchronous backend
/// the transfers are enqueued in that order and the call returns before
/// they complete.
///
/// Offsets are in elements relative to the start of each buffer. Repeated
/// calls compose by offset: copying twice with destination offsets 0 and
/// `k` fills two disjoint regions of the same buffer.
///
/// # Panics
///
/// Panics on rank 0 or descriptor rank mismatch; these are caller contract
/// violations. Buffer footprints and innermost-dimension contiguity are
/// checked in debug builds only.
#[allow(clippy::too_many_arguments)]
pub fn strided_copy<T: DType, D: BackendDevice>(
    device: &D,
    src: &D::Storage<T>,
    src_offset: usize,
    src_stride: &Dims,
    dst_extent: &Dims,
    dst_stride: &Dims,
    dst: &mut D::Storage<T>,
    dst_offset: usize,
) -> Result<()> {
    let rank = dst_extent.rank();
    assert!(rank >= 1, "strided_copy: rank must be at least 1");
    assert_eq!(
        src_stride.rank(),
        rank,
        "strided_copy: src stride rank does not match extent rank"
    );
    assert_eq!(
        dst_stride.rank(),
        rank,
        "strided_copy: dst stride rank does not match extent rank"
    );

    if dst_extent.iter().any(|&e| e == 0) {
        return Ok(());
    }

    let inner = dst_extent[rank - 1];
    debug_assert!(
        inner <= 1 || (src_stride[rank - 1] == 1 && dst_stride[rank - 1] == 1),
        "strided_copy: innermost dimension must be contiguous on both sides"
    );
    debug_assert!(
        src_offset + footprint(src_stride, dst_extent) <= src.len(),
        "strided_copy: source region out of bounds"
    );
    debug_assert!(
        dst_offset + footprint(dst_stride, dst_extent) <= dst.len(),
        "strided_copy: destination region out of bounds"
    );

    // Odometer over the outer dimensions. `index[d]` is the current
    // position along dimension d; the last outer dimension advances
    // fastest, giving lexicographic (outermost-first, ascending) order.
    let mut index = vec![0usize; rank - 1];
    let mut src_pos = src_offset;
    let mut dst_pos = dst_offset;
    loop {
        device.copy(src, src_pos, dst, dst_pos, inner)?;

        let mut dim = rank - 1;
        loop {
            if dim == 0 {
                return Ok(());
            }
            dim -= 1;
            index[dim] += 1;
            src_pos += src_stride[dim];
            dst_pos += dst_stride[dim];
            if index[dim] < dst_extent[dim] {
                break;
            }
            // Carry: rewind this dimension and advance the next outer one.
            src_pos -= index[dim] * src_stride[dim];
            dst_pos -= index[dim] * dst_stride[dim];
            index[dim] = 0;
        }
    }
}

/// Element span covered by a strided region with all extents positive.
fn footprint(stride: &Dims, extent: &Dims) -> usize {
    let rank = extent.rank();
    let outer: usize = (0..rank - 1).map(|d| (extent[d] - 1) * stride[d]).sum();
    outer + extent[rank - 1]
}

/// Copy contiguous blocks between two buffers that agree on every
/// dimension except `axis`.
///
/// `src_stride_numel` and `dst_stride_numel` hold, per dimension `i`, the
/// element count of the sub-tensor spanning dimensions `i..R` (the
/// "stride numel" of a shape). Concatenation and splitting along an axis
/// reduce to this: for every combination of indices before the axis, one
/// contiguous block moves from `src_offset + i * src_stride_numel[axis]`
/// to `dst_offset + i * dst_stride_numel[axis]`. The block length is the
/// smaller of the two axis blocks, so the same call shape serves both
/// directions (small-into-large for concat, large-into-small for split).
///
/// Unlike [`strided_copy`], shape disagreements here are reported as
/// recoverable errors: callers typically hand this user-supplied tensors
/// whose dimensions have not been validated yet.
#[allow(clippy::too_many_arguments)]
pub fn copy_with_axis<T: DType, D: BackendDevice>(
    device: &D,
    axis: usize,
    src: &D::Storage<T>,
    src_offset: usize,
    src_stride_numel: &Dims,
    dst: &mut D::Storage<T>,
    dst_offset: usize,
    dst_stride_numel: &Dims,
) -> Result<()> {
    let rank = src_stride_numel.rank();
    if dst_stride_numel.rank() != rank {
        return Err(Error::RankMismatch {
            src: rank,
            dst: dst_stride_numel.rank(),
        });
    }
    if axis >= rank {
        return Err(Error::AxisOutOfRange { axis, rank });
    }

    let src_after = src_stride_numel[axis];
    let dst_after = dst_stride_numel[axis];
    if src_after == 0 || dst_after == 0 {
        return Ok(());
    }
    for dim in 0..rank {
        if dim == axis {
            continue;
        }
        // Before the axis the dimensions must agree as ratios over the
        // axis block size; after it the remaining sub-tensor sizes must
        // match exactly.
        let (s, d) = if dim < axis {
            (src_stride_numel[dim] / src_after, dst_stride_numel[dim] / dst_after)
        } else {
            (src_stride_numel[dim], dst_stride_numel[dim])
        };
        if s != d {
            return Err(Error::AxisDimMismatch {
                axis,
                dim,
                src: s,
                dst: d,
            });
        }
    }

    let before = src_stride_numel[0] / src_after;
    let block = src_after.min(dst_after);
    for i in 0..before {
        device.copy(
            src,
            src_offset + i * src_after,
            dst,
            dst_offset + i * dst_after,
            block,
        )?;
    }
    Ok(())
}
