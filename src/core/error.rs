#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Invalid stage configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    #[error("seek table has no buckets")]
    EmptySeekTable,

    #[error("bucket {index}: upper bound {upper} must be finite, increasing and at most 1")]
    BucketBound { index: usize, upper: f64 },

    #[error("bucket {index}: target {target_secs}s must be finite and non-negative")]
    BucketTarget { index: usize, target_secs: f64 },

    #[error("frame count must be at least 1")]
    NoFrames,

    #[error("frame period must be at least 1 ms")]
    ZeroFramePeriod,

    #[error("splash size {0} must be finite and positive")]
    SplashSize(f64),

    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("`{field}`: {value:?} is not a single CSS class name")]
    ClassName { field: &'static str, value: String },
}
