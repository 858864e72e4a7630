//! Error types for `fisco-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid place code: {0:?} (want one letter and three digits)")]
  InvalidPlaceCode(String),

  #[error("unknown sex: {0:?} (want m/f or male/female)")]
  InvalidSex(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
