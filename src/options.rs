//! Configuration options for image fetching.
//!
//! Options are explicit structs with documented defaults, passed by
//! reference. Use struct-update syntax to override selected fields.

/// Options for fetching and decoding a single image candidate.
///
/// # Example
///
/// ```rust
/// use thumbpick::FetchOptions;
///
/// let options = FetchOptions {
///     retain_pixel_data: true,
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Keep the decoded RGBA8 pixel buffer on the resulting `ImageInfo`.
    ///
    /// Default: `false`
    pub retain_pixel_data: bool,
}

/// Options for fetching a batch of image candidates.
///
/// # Example
///
/// ```rust
/// use thumbpick::BatchOptions;
///
/// let options = BatchOptions {
///     require_all_succeed: true,
///     ..BatchOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Per-candidate fetch options.
    pub fetch_options: FetchOptions,

    /// Abort the whole batch on the first per-candidate failure instead of
    /// skipping the failed candidate.
    ///
    /// Default: `false`
    pub require_all_succeed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let options = BatchOptions::default();
        assert!(!options.fetch_options.retain_pixel_data);
        assert!(!options.require_all_succeed);
    }

    #[test]
    fn struct_update_syntax_overrides_selected_fields_only() {
        let options = BatchOptions {
            require_all_succeed: true,
            ..BatchOptions::default()
        };
        assert!(options.require_all_succeed);
        assert!(!options.fetch_options.retain_pixel_data);
    }
}
