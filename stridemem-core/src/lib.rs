//! Strided multi-dimensional memory copy for CPU and CUDA buffers.
//!
//! The core primitive is [`strided_copy`]: it moves a logically rectangular
//! region between two buffers whose per-dimension element strides may
//! differ, and whose memory may live in different address spaces. Higher
//! level tensor operations such as cropping a sub-block out of a larger
//! buffer, or concatenating several buffers into one, reduce to calls of
//! this primitive with suitable offsets and strides.
//!
//! Physical transfers are delegated to a [`BackendDevice`]: the CPU backend
//! copies synchronously in-line, while the CUDA backend (feature `cuda`)
//! enqueues asynchronous copies onto a single stream and exposes
//! [`BackendDevice::synchronize`] to wait for completion.
//!
//! ```rust
//! use stridemem_core::{contiguous_strides, strided_copy, BackendDevice, CpuDevice, Dims};
//!
//! let dev = CpuDevice;
//! let src = dev.storage_from_slice(&[0, 1, 2, 0, 0, 0, 3, 4, 0, 0]).unwrap();
//! let mut dst = dev.alloc::<i32>(4).unwrap();
//!
//! // Crop the 2x2 block starting one element in.
//! let extent = Dims::from([2, 2]);
//! strided_copy(
//!     &dev,
//!     &src,
//!     1,
//!     &Dims::from([5, 1]),
//!     &extent,
//!     &contiguous_strides(&extent),
//!     &mut dst,
//!     0,
//! )
//! .unwrap();
//! assert_eq!(dst.as_slice(), &[1, 2, 3, 4]);
//! ```

mod copy;
mod cpu_storage;
#[cfg(feature = "cuda")]
mod cuda_backend;
mod dims;
mod dtype;
mod error;
mod storage;

pub use copy::{copy_with_axis, strided_copy};
pub use cpu_storage::{CpuDevice, CpuStorage};
#[cfg(feature = "cuda")]
pub use cuda_backend::{CudaDevice, CudaStorage};
pub use dims::{contiguous_strides, Dims};
pub use dtype::DType;
pub use error::{Error, Result};
pub use storage::{BackendDevice, BackendStorage};
