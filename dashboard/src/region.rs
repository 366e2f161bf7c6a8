//! Bounded views over static byte regions linked into the binary.
//!
//! Two ways in:
//!   - `EmbeddedRegion::new` wraps a `&'static [u8]` (what `include_bytes!` hands back).
//!   - `EmbeddedRegion::from_symbols` rebuilds the slice from the symbols `objcopy -I binary`
//!     emits for a blob:
//!       _binary_<name>_start  first byte of the data
//!       _binary_<name>_end    one past the last byte
//!       _binary_<name>_size   absolute symbol whose ADDRESS is the length
//!
//! The size symbol is zero-sized; reading through it is meaningless. Only its address carries
//! information.

use std::slice;

use thiserror::Error;

/// Static, immutable bytes with a known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedRegion {
    bytes: &'static [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("region end {end:#x} precedes start {start:#x}")]
    EndBeforeStart { start: usize, end: usize },
    #[error("size marker declares {declared} bytes but start/end span {spanned}")]
    SizeMismatch { declared: usize, spanned: usize },
}

impl EmbeddedRegion {
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }

    /// Rebuild a region from a linker start symbol and a size marker.
    ///
    /// The length is the address of `size_marker`, not anything stored behind it.
    ///
    /// ```ignore
    /// unsafe extern "C" {
    ///     static _binary_dashboard_html_start: u8;
    ///     static _binary_dashboard_html_size: u8;
    /// }
    ///
    /// let region = unsafe {
    ///     EmbeddedRegion::from_symbols(
    ///         &raw const _binary_dashboard_html_start,
    ///         &raw const _binary_dashboard_html_size,
    ///     )
    /// };
    /// ```
    ///
    /// # Safety
    ///
    /// `start` must be non-null and point to at least `size_marker.addr()` readable bytes that
    /// stay valid and unmodified for the rest of the process.
    pub unsafe fn from_symbols(start: *const u8, size_marker: *const u8) -> Self {
        let len = size_marker.addr();
        log::debug!("[region] linked region at {:p}, {} bytes", start, len);
        // SAFETY: upheld by the caller.
        let bytes = unsafe { slice::from_raw_parts(start, len) };
        Self { bytes }
    }

    /// Like [`from_symbols`](Self::from_symbols), but also takes the `_end` symbol and refuses
    /// to build the region unless `end - start` matches the declared size.
    ///
    /// # Safety
    ///
    /// `start` and `end` must delimit one readable allocation that lives for the rest of the
    /// process. The bounds are compared before anything is read.
    pub unsafe fn from_symbols_bounded(
        start: *const u8,
        end: *const u8,
        size_marker: *const u8,
    ) -> Result<Self, RegionError> {
        let declared = size_marker.addr();
        let spanned = end
            .addr()
            .checked_sub(start.addr())
            .ok_or(RegionError::EndBeforeStart {
                start: start.addr(),
                end: end.addr(),
            })?;
        if spanned != declared {
            return Err(RegionError::SizeMismatch { declared, spanned });
        }
        // SAFETY: `start..start + declared` equals `start..end`, which the caller vouches for.
        Ok(unsafe { Self::from_symbols(start, size_marker) })
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }
}
