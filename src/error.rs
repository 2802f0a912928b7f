use core::alloc::Layout;
use core::fmt;
use std::alloc::handle_alloc_error;

/// The reason the map could not grow its storage.
///
/// The map is left unchanged whenever this error is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity cannot be addressed on this platform.
    Overflow,
    /// The allocator could not provide memory for `layout`.
    AllocatorErr { layout: Layout },
}

impl AllocError {
    /// Classifies a failed `Vec<T>::try_reserve(additional)` on a vector of length `len`.
    pub(crate) fn for_vec<T>(len: usize, additional: usize) -> Self {
        match len.checked_add(additional).map(Layout::array::<T>) {
            Some(Ok(layout)) => AllocError::AllocatorErr { layout },
            _ => AllocError::Overflow,
        }
    }

    /// Diverges the way the standard collections do on growth failure.
    #[cold]
    pub(crate) fn raise(self) -> ! {
        match self {
            AllocError::Overflow => panic!("Allocation Error: capacity overflow"),
            AllocError::AllocatorErr { layout } => handle_alloc_error(layout),
        }
    }
}

impl From<hashbrown::TryReserveError> for AllocError {
    fn from(err: hashbrown::TryReserveError) -> Self {
        match err {
            hashbrown::TryReserveError::CapacityOverflow => AllocError::Overflow,
            hashbrown::TryReserveError::AllocError { layout } => {
                AllocError::AllocatorErr { layout }
            }
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::Overflow => f.write_str("capacity overflow"),
            AllocError::AllocatorErr { layout } => write!(
                f,
                "memory allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
        }
    }
}

impl std::error::Error for AllocError {}
