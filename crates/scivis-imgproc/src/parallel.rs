use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use scivis_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how parallel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows (chunks) in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small inputs, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Whether the work runs on the calling thread only.
    pub fn is_serial(&self) -> bool {
        matches!(self, ExecutionStrategy::Serial)
    }

    /// Run `op` in the context selected by the strategy.
    ///
    /// For [`ExecutionStrategy::Fixed`] the closure runs inside a freshly built
    /// pool, so every rayon iterator it drives uses that pool. The other
    /// strategies run it on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed pool cannot be built or has zero threads.
    pub fn install<R, F>(&self, op: F) -> Result<R, ParallelError>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match *self {
            ExecutionStrategy::Serial | ExecutionStrategy::ParallelRows => Ok(op()),
            ExecutionStrategy::Fixed(n) => {
                if n == 0 {
                    return Err(ParallelError::InvalidThreadCount(n));
                }
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ParallelError::BuildError(e.to_string()))?;

                Ok(pool.install(op))
            }
        }
    }
}

/// Apply a function to each pixel in the image in parallel.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    if src.as_slice().is_empty() {
        return;
    }

    src.as_slice()
        .par_chunks_exact(C1 * src.cols())
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * src.cols()))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each destination pixel with its `(x, y)` coordinate.
///
/// Rows are distributed over the thread pool unless the strategy is
/// [`ExecutionStrategy::Serial`].
///
/// # Errors
///
/// Returns an error if the strategy asks for an invalid thread pool.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) -> Result<(), ParallelError>
where
    T: Send + Sync,
{
    let cols = dst.cols();
    let dst_slice = dst.as_slice_mut();
    if dst_slice.is_empty() {
        return Ok(());
    }

    let row_op = |(y, row): (usize, &mut [T])| {
        row.chunks_exact_mut(C)
            .enumerate()
            .for_each(|(x, pixel)| f(x, y, pixel));
    };

    if strategy.is_serial() {
        dst_slice.chunks_exact_mut(C * cols).enumerate().for_each(row_op);
        return Ok(());
    }

    strategy.install(|| {
        dst_slice
            .par_chunks_exact_mut(C * cols)
            .enumerate()
            .for_each(row_op);
    })
}
