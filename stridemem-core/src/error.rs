use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Dimension `dim` disagrees between source and destination in a
    /// with-axis block copy.
    #[error("dimension {dim} mismatch copying along axis {axis}: src {src}, dst {dst}")]
    AxisDimMismatch {
        axis: usize,
        dim: usize,
        src: usize,
        dst: usize,
    },

    #[error("axis {axis} out of range for rank {rank}")]
    AxisOutOfRange { axis: usize, rank: usize },

    #[error("rank mismatch: src {src}, dst {dst}")]
    RankMismatch { src: usize, dst: usize },

    #[cfg(feature = "cuda")]
    #[error("cuda driver error: {0}")]
    Cuda(#[from] cudarc::driver::DriverError),

    #[error("{0}")]
    Msg(String),
}

pub type Result<T> = std::result::Result<T, Error>;
