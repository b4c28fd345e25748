//! The collection drive page update: the fixed, ordered rule set that adds a
//! quantity field and EcoPoints copy to the ReturnBox section and renames the
//! MaterialBank form of the app page.

use crate::{Rewrite, RewriteSet};
use once_cell::sync::Lazy;
use regex::Regex;

// -- ReturnBox: the "Item ID or QR" field block, anchor for the quantity field insert.
static RE_RETURN_ITEM_BLOCK: Lazy<Regex> = Lazy::new(|| {
	Regex::new(
		r#"(<label class="block text-sm font-medium mb-2">Item ID or QR</label>\s*<input type="text" id="return-item-id"[^>]*/>\s*</div>)"#,
	)
	.unwrap()
});

// -- MaterialBank: the "List Material" heading followed by the form open tag.
static RE_MATERIAL_FORM_OPEN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r#"<h2 class="text-xl font-semibold mb-6">List Material</h2>\s*<form id="material-name""#).unwrap()
});

static RE_RETURN_HISTORY_HEADING: Lazy<Regex> =
	Lazy::new(|| Regex::new(r#"<h2 class="text-xl font-semibold mb-4">Return History</h2>"#).unwrap());

const QUANTITY_FIELD_INSERT: &str = r#"${1}

            <div>
              <label class="block text-sm font-medium mb-2">Quantity</label>
              <input type="number" id="return-quantity" class="input-premium w-full" min="1" value="1" required />
            </div>"#;

const ECOPOINTS_HEADING_AND_PANEL: &str = r#"<h2 class="text-xl font-semibold mb-4">Return History & EcoPoints</h2>
          <div class="bg-opacity-10 bg-sage-accent p-4 rounded mb-4 border border-sage-accent">
            <p class="text-sm text-muted mb-1">EcoPoints Earned</p>
            <p class="text-3xl font-bold sage-accent" id="returnbox-ecopoints">+20</p>
            <p class="text-xs text-muted mt-2">per item returned</p>
          </div>"#;

const MATERIAL_FORM_OPEN_RENAMED: &str = r#"<h2 class="text-xl font-semibold mb-6">List Material</h2>
          <form id="materialbank-form""#;

/// Builds the canonical rule set, in application order.
///
/// The MaterialBank form rename is a two-rule safeguard: the pattern rule
/// handles the heading-adjacent form tag, and the follow-up literal rule
/// catches the attribute pair when it appears in a different surrounding
/// shape, so the rename lands either way.
pub fn collection_drive_rewrites() -> RewriteSet {
	RewriteSet::new(vec![
		Rewrite::pattern(
			"returnbox quantity field",
			RE_RETURN_ITEM_BLOCK.clone(),
			QUANTITY_FIELD_INSERT,
			0,
		),
		Rewrite::pattern(
			"return history ecopoints heading",
			RE_RETURN_HISTORY_HEADING.clone(),
			ECOPOINTS_HEADING_AND_PANEL,
			1,
		),
		Rewrite::literal(
			"returnbox description",
			r#"<p class="text-muted text-lg">Track circular returns and measure reuse impact.</p>"#,
			r#"<p class="text-muted text-lg">Track circular returns, earn EcoPoints, and choose your collection method.</p>"#,
			1,
		),
		Rewrite::pattern(
			"materialbank form id (after heading)",
			RE_MATERIAL_FORM_OPEN.clone(),
			MATERIAL_FORM_OPEN_RENAMED,
			0,
		),
		Rewrite::literal(
			"materialbank form id (attribute)",
			r#"id="material-name" class="space-y-4">"#,
			r#"id="materialbank-form" class="space-y-4">"#,
			0,
		),
		Rewrite::literal(
			"materialbank description",
			r#"<p class="text-muted text-lg">Industrial reuse marketplace — Match waste with reusers in real-time.</p>"#,
			r#"<p class="text-muted text-lg">Industrial reuse marketplace — Match waste with reusers, earn EcoPoints, and organize collection.</p>"#,
			1,
		),
	])
}

// region:    --- Tests


// endregion: --- Tests
