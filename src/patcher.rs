use crate::{ApplyReport, Result, RewriteSet, RewriteStatus};
use simple_fs::{SPath, read_to_string};
use std::fs;
use tracing::debug;

/// Applies every rewrite of the set, in order, against the current state of the text.
///
/// Pure and infallible: a rule whose anchor is absent leaves the text unchanged
/// for that step and shows up in the report with a zero match count.
pub fn apply_rewrites(content: &str, rewrites: &RewriteSet) -> (String, ApplyReport) {
	debug!("applying {} rewrites", rewrites.len());

	let mut current = content.to_string();
	let mut items = Vec::new();

	for rewrite in rewrites {
		let mut status = RewriteStatus::from(rewrite);

		let (next, count) = rewrite.apply(&current);
		current = next;
		status.match_count = count;

		if status.applied() {
			debug!("rewrite '{}' replaced {} occurrence(s)", status.label(), count);
		} else {
			debug!("rewrite '{}' found no anchor, skipped", status.label());
		}

		items.push(status);
	}

	(current, ApplyReport { items })
}

/// Reads `page` fully into memory, applies the rewrites, and writes the result
/// back to the same path (truncating overwrite).
///
/// The write happens even when no rewrite matched; only file access failures
/// are errors. The read-apply-write cycle is not atomic.
pub fn patch_page(page: &SPath, rewrites: &RewriteSet) -> Result<ApplyReport> {
	let original = read_to_string(page)?;

	let (patched, report) = apply_rewrites(&original, rewrites);

	fs::write(page, &patched).map_err(|err| crate::Error::io_write_page(page.to_string(), err))?;

	Ok(report)
}

// region:    --- Tests


// endregion: --- Tests
