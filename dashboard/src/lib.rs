//! pa-ws dashboard page, embedded into the binary at build time.
//!
//! `build.rs` stages the HTML (default `assets/dashboard.html`, override with the
//! `PAWS_DASHBOARD_HTML` build-time variable) and this crate links it in with `include_bytes!`.
//! Nothing is read from disk at runtime.

pub mod asset;
pub mod region;

pub use asset::AssetString;
pub use region::{EmbeddedRegion, RegionError};

const DASHBOARD_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/dashboard.html"));

/// Byte length of the dashboard as measured by the build script.
pub const DASHBOARD_LEN: usize = parse_len(env!("PAWS_DASHBOARD_LEN"));

/// Absolute path the dashboard was staged from.
pub const DASHBOARD_SOURCE: &str = env!("PAWS_DASHBOARD_SOURCE");

const _: () = assert!(
    DASHBOARD_BYTES.len() == DASHBOARD_LEN,
    "embedded dashboard length differs from the staged asset"
);

/// The embedded dashboard region.
pub static DASHBOARD: EmbeddedRegion = EmbeddedRegion::new(DASHBOARD_BYTES);

/// Fresh owned copy of the dashboard HTML.
///
/// Every call allocates; callers that need the page repeatedly keep their own copy.
pub fn dashboard_string() -> AssetString {
    let asset = AssetString::from_region(&DASHBOARD);
    log::trace!("[dashboard] materialized {} bytes", asset.len());
    asset
}

const fn parse_len(digits: &str) -> usize {
    let digits = digits.as_bytes();
    assert!(!digits.is_empty(), "PAWS_DASHBOARD_LEN is empty");
    let mut value = 0usize;
    let mut i = 0;
    while i < digits.len() {
        let d = digits[i];
        assert!(d.is_ascii_digit(), "PAWS_DASHBOARD_LEN is not a number");
        value = value * 10 + (d - b'0') as usize;
        i += 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_len() {
        assert_eq!(parse_len("0"), 0);
        assert_eq!(parse_len("13"), 13);
        assert_eq!(parse_len("1048576"), 1_048_576);
    }

    #[test]
    fn test_region_matches_recorded_length() {
        assert_eq!(DASHBOARD.len(), DASHBOARD_LEN);
        assert_eq!(dashboard_string().len(), DASHBOARD_LEN);
    }

    #[test]
    fn test_dashboard_string_copies_region() {
        let asset = dashboard_string();
        assert_eq!(asset.as_bytes(), DASHBOARD.as_bytes());
    }
}
