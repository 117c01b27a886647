use std::borrow::Cow;

use crate::{
    storage::{BackendDevice, BackendStorage},
    DType, Result,
};

/// Host memory backend. Every copy executes synchronously in-line.
#[derive(Clone, Debug, Default)]
pub struct CpuDevice;

#[derive(Clone, Debug, PartialEq)]
pub struct CpuStorage<T: DType>(pub(crate) Vec<T>);

impl<T: DType> CpuStorage<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: DType> BackendStorage<T> for CpuStorage<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn to_cpu_storage(&self) -> Result<Cow<'_, CpuStorage<T>>> {
        Ok(Cow::Borrowed(self))
    }
}

impl BackendDevice for CpuDevice {
    type Storage<X: DType> = CpuStorage<X>;

    fn alloc<T: DType>(&self, len: usize) -> Result<Self::Storage<T>> {
        Ok(CpuStorage(vec![T::ZERO; len]))
    }

    fn storage_from_slice<T: DType>(&self, data: &[T]) -> Result<Self::Storage<T>> {
        Ok(CpuStorage(data.to_vec()))
    }

    fn copy<T: DType>(
        &self,
        src: &Self::Storage<T>,
        src_offset: usize,
        dst: &mut Self::Storage<T>,
        dst_offset: usize,
        len: usize,
    ) -> Result<()> {
        dst.0[dst_offset..dst_offset + len]
            .copy_from_slice(&src.0[src_offset..src_offset + len]);
        Ok(())
    }

    fn synchronize(&self) -> Result<()> {
        Ok(())
    }
}
