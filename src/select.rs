//! Thumbnail selection policy.

use crate::error::{Error, Result};
use crate::model::ImageInfo;

/// Pick the single best thumbnail from a batch of resolved image infos.
///
/// Scans left to right. The first OpenGraph-tagged entry wins immediately,
/// independent of the order or size of any other candidate. Without an
/// OpenGraph entry the largest pixel area wins; ties keep the earliest-seen
/// entry. A non-empty input always produces a result.
///
/// Fails with `EmptyInput` when `infos` is empty.
pub fn select_thumbnail(infos: &[ImageInfo]) -> Result<&ImageInfo> {
    let mut best: Option<&ImageInfo> = None;

    for info in infos {
        if info.is_open_graph_image() {
            return Ok(info);
        }
        if best.is_none_or(|current| info.area() > current.area()) {
            best = Some(info);
        }
    }

    best.ok_or(Error::EmptyInput)
}
