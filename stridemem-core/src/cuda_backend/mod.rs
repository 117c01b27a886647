use std::{borrow::Cow, ops::Deref, sync::Arc};

mod error;
use error::WrapErr;

use crate::{
    cpu_storage::CpuStorage,
    storage::{BackendDevice, BackendStorage},
    DType, Result,
};

/// One CUDA device with a single in-order stream.
///
/// All copies issued through this device are enqueued onto the same
/// stream, so they execute in enqueue order relative to each other. None
/// of them block the calling thread; call [`BackendDevice::synchronize`]
/// before inspecting destination memory.
#[derive(Clone)]
pub struct CudaDevice {
    context: Arc<cudarc::driver::CudaContext>,
    stream: Arc<cudarc::driver::CudaStream>,
    ordinal: usize,
}

impl CudaDevice {
    pub fn new(ordinal: usize) -> Result<Self> {
        let context = cudarc::driver::CudaContext::new(ordinal).w()?;
        let stream = context.new_stream().w()?;
        Ok(Self {
            context,
            stream,
            ordinal,
        })
    }

    /// Ordinal of the device whose memory space this context governs.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn context(&self) -> &Arc<cudarc::driver::CudaContext> {
        &self.context
    }

    pub(crate) fn stream(&self) -> Arc<cudarc::driver::CudaStream> {
        self.stream.clone()
    }
}

impl Deref for CudaDevice {
    type Target = Arc<cudarc::driver::CudaStream>;

    fn deref(&self) -> &Self::Target {
        &self.stream
    }
}

pub struct CudaStorage<T: DType> {
    slice: cudarc::driver::CudaSlice<T>,
    device: CudaDevice,
}

impl<T: DType> CudaStorage<T> {
    pub fn device(&self) -> &CudaDevice {
        &self.device
    }
}

impl<T: DType> BackendStorage<T> for CudaStorage<T> {
    fn len(&self) -> usize {
        self.slice.len()
    }

    fn to_cpu_storage(&self) -> Result<Cow<'_, CpuStorage<T>>> {
        let data = self.device.stream().memcpy_dtov(&self.slice).w()?;
        Ok(Cow::Owned(CpuStorage(data)))
    }
}

impl BackendDevice for CudaDevice {
    type Storage<X: DType> = CudaStorage<X>;

    fn alloc<T: DType>(&self, len: usize) -> Result<Self::Storage<T>> {
        let slice = unsafe { self.stream.alloc::<T>(len) }.w()?;
        Ok(CudaStorage {
            slice,
            device: self.clone(),
        })
    }

    fn storage_from_slice<T: DType>(&self, data: &[T]) -> Result<Self::Storage<T>> {
        let slice = self.stream.memcpy_stod(data).w()?;
        Ok(CudaStorage {
            slice,
            device: self.clone(),
        })
    }

    fn copy<T: DType>(
        &self,
        src: &Self::Storage<T>,
        src_offset: usize,
        dst: &mut Self::Storage<T>,
        dst_offset: usize,
        len: usize,
    ) -> Result<()> {
        let src_view = src.slice.slice(src_offset..src_offset + len);
        let mut dst_view = dst.slice.slice_mut(dst_offset..dst_offset + len);
        self.stream.memcpy_dtod(&src_view, &mut dst_view).w()
    }

    fn synchronize(&self) -> Result<()> {
        self.stream.synchronize().w()
    }
}
