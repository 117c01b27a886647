use std::borrow::Cow;

use crate::{cpu_storage::CpuStorage, DType, Result};

/// One allocation in one backend's memory space.
pub trait BackendStorage<T: DType> {
    /// Number of elements in the buffer.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bring the contents back to host memory.
    ///
    /// Waits for transfers already enqueued against this buffer, so the
    /// returned data reflects every copy issued before the call.
    fn to_cpu_storage(&self) -> Result<Cow<'_, CpuStorage<T>>>;
}

/// An execution backend: a memory space plus the copy primitives over it.
///
/// The strided copy engine is generic over this trait and never branches
/// on the backend kind itself; whether a transfer runs synchronously on
/// the host or is enqueued onto a device stream is decided entirely here.
pub trait BackendDevice: Clone {
    type Storage<X: DType>: BackendStorage<X>;

    /// Allocate a buffer of `len` elements in this backend's memory space.
    fn alloc<T: DType>(&self, len: usize) -> Result<Self::Storage<T>>;

    /// Upload a host slice into this backend's memory space.
    fn storage_from_slice<T: DType>(&self, data: &[T]) -> Result<Self::Storage<T>>;

    /// Contiguous transfer of `len` elements between two buffers of this
    /// memory space.
    ///
    /// On the host this blocks until the bytes have moved. On CUDA it
    /// enqueues the transfer onto the device's stream and returns
    /// immediately; transfers issued through one device execute in enqueue
    /// order, and [`BackendDevice::synchronize`] waits for completion.
    fn copy<T: DType>(
        &self,
        src: &Self::Storage<T>,
        src_offset: usize,
        dst: &mut Self::Storage<T>,
        dst_offset: usize,
        len: usize,
    ) -> Result<()>;

    /// Block until all work enqueued on this backend has completed.
    fn synchronize(&self) -> Result<()>;
}
