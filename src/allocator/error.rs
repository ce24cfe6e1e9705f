//! Allocation failures.

use thiserror::Error;

/// Why an allocator could not hand out storage.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocError {
    /// The requested element count does not fit in a layout.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The underlying allocator refused the request.
    #[error("out of memory: {size} bytes (align {align})")]
    OutOfMemory { size: usize, align: usize },
}
