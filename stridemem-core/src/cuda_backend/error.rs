use crate::{Error, Result};

pub(crate) trait WrapErr<O> {
    fn w(self) -> Result<O>;
}

impl<O> WrapErr<O> for std::result::Result<O, cudarc::driver::DriverError> {
    fn w(self) -> Result<O> {
        self.map_err(Error::Cuda)
    }
}
