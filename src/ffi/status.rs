//! C-compatible status codes and the panic guard used by every entry point.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::EngineError;

/// Status returned by fallible FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GolStatus {
    Ok = 0,
    /// A required handle was null.
    InvalidHandle = -1,
    /// Width or height was zero or negative.
    InvalidDimension = -2,
    /// Coordinates outside the world.
    IndexOutOfRange = -3,
    /// Grid storage could not be allocated.
    AllocationFailure = -4,
    /// Any other rejected argument.
    InvalidArgument = -5,
    /// Serialized world text could not be parsed or described an invalid world.
    MalformedWorld = -6,
    /// Caller-provided buffer is too small; the required length is reported.
    BufferTooSmall = -7,
    /// Internal failure such as the step thread pool failing to start.
    InternalError = -8,
    /// A Rust panic was caught at the boundary.
    Panicked = -128,
}

impl From<&EngineError> for GolStatus {
    fn from(e: &EngineError) -> Self {
        match e {
            EngineError::InvalidDimension { .. } => GolStatus::InvalidDimension,
            EngineError::IndexOutOfRange { .. } => GolStatus::IndexOutOfRange,
            EngineError::AllocationFailure { .. } => GolStatus::AllocationFailure,
            EngineError::ChannelOutOfRange { .. }
            | EngineError::CellCountMismatch { .. }
            | EngineError::InvalidProbability(_) => GolStatus::InvalidArgument,
            EngineError::MalformedWorld(_) => GolStatus::MalformedWorld,
            EngineError::ThreadPool(_) => GolStatus::InternalError,
        }
    }
}

/// Run `f`, turning a panic into `on_panic` so nothing unwinds into the host.
pub(crate) fn guard<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("panic caught at FFI boundary");
            on_panic
        }
    }
}

/// Convert an engine result into a status, logging the failure.
pub(crate) fn status_of(result: Result<(), EngineError>) -> GolStatus {
    match result {
        Ok(()) => GolStatus::Ok,
        Err(e) => {
            tracing::warn!(error = %e, "engine call failed at FFI boundary");
            GolStatus::from(&e)
        }
    }
}
