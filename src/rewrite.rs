use regex::Regex;

/// One ordered find/replace rule.
///
/// A rewrite is a pure text substitution. Applying it to content that does not
/// contain its anchor returns the content unchanged with a count of zero; it
/// never errors and never checks that the surrounding markup stays well-formed.
#[derive(Debug, Clone)]
pub enum Rewrite {
	/// Regex substitution. The replacement may use `$n`/`${n}` capture groups.
	Pattern {
		label: String,
		regex: Regex,
		replacement: String,
		limit: usize,
	},

	/// Plain substring substitution, no pattern semantics.
	Literal {
		label: String,
		needle: String,
		replacement: String,
		limit: usize,
	},
}

impl Rewrite {
	/// Builds a regex rule. `limit` caps the number of occurrences replaced; `0` means all.
	pub fn pattern(label: impl Into<String>, regex: Regex, replacement: impl Into<String>, limit: usize) -> Self {
		Self::Pattern {
			label: label.into(),
			regex,
			replacement: replacement.into(),
			limit,
		}
	}

	/// Builds a substring rule. `limit` caps the number of occurrences replaced; `0` means all.
	pub fn literal(
		label: impl Into<String>,
		needle: impl Into<String>,
		replacement: impl Into<String>,
		limit: usize,
	) -> Self {
		Self::Literal {
			label: label.into(),
			needle: needle.into(),
			replacement: replacement.into(),
			limit,
		}
	}

	pub fn label(&self) -> &str {
		match self {
			Rewrite::Pattern { label, .. } => label,
			Rewrite::Literal { label, .. } => label,
		}
	}

	/// Applies the rule to `content`, returning the rewritten text and the
	/// number of occurrences that were replaced.
	///
	/// Counting follows the substitution engine (non-overlapping, left to
	/// right), so the count equals the replacements actually made.
	pub fn apply(&self, content: &str) -> (String, usize) {
		match self {
			Rewrite::Pattern {
				regex,
				replacement,
				limit,
				..
			} => {
				let found = regex.find_iter(content).count();
				if found == 0 {
					return (content.to_string(), 0);
				}

				let replaced = if *limit == 0 { found } else { found.min(*limit) };
				let new_content = regex.replacen(content, *limit, replacement.as_str()).into_owned();

				(new_content, replaced)
			}

			Rewrite::Literal {
				needle,
				replacement,
				limit,
				..
			} => {
				let found = content.matches(needle.as_str()).count();
				if found == 0 {
					return (content.to_string(), 0);
				}

				let (new_content, replaced) = if *limit == 0 {
					(content.replace(needle.as_str(), replacement), found)
				} else {
					(content.replacen(needle.as_str(), replacement, *limit), found.min(*limit))
				};

				(new_content, replaced)
			}
		}
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rewrite_literal_first_only() {
		// -- Setup & Fixtures
		let rewrite = Rewrite::literal("greeting", "hello", "goodbye", 1);
		let content = "hello world, hello again";

		// -- Exec
		let (new_content, count) = rewrite.apply(content);

		// -- Check
		assert_eq!(new_content, "goodbye world, hello again");
		assert_eq!(count, 1);
	}

	#[test]
	fn test_rewrite_literal_all() {
		// -- Setup & Fixtures
		let rewrite = Rewrite::literal("greeting", "hello", "goodbye", 0);
		let content = "hello world, hello again";

		// -- Exec
		let (new_content, count) = rewrite.apply(content);

		// -- Check
		assert_eq!(new_content, "goodbye world, goodbye again");
		assert_eq!(count, 2);
	}

	#[test]
	fn test_rewrite_pattern_capture_insert() {
		// -- Setup & Fixtures
		let regex = Regex::new(r"(<li>item</li>)").unwrap();
		let rewrite = Rewrite::pattern("list item", regex, "${1}<li>extra</li>", 0);
		let content = "<ul><li>item</li></ul>";

		// -- Exec
		let (new_content, count) = rewrite.apply(content);

		// -- Check
		// The anchor stays in place, the new fragment lands right after it.
		assert_eq!(new_content, "<ul><li>item</li><li>extra</li></ul>");
		assert_eq!(count, 1);
	}

	#[test]
	fn test_rewrite_no_anchor_is_noop() {
		// -- Setup & Fixtures
		let regex = Regex::new(r"never-present").unwrap();
		let pattern = Rewrite::pattern("absent pattern", regex, "x", 0);
		let literal = Rewrite::literal("absent literal", "also-never-present", "y", 1);
		let content = "some unrelated text";

		// -- Exec
		let (after_pattern, pattern_count) = pattern.apply(content);
		let (after_literal, literal_count) = literal.apply(content);

		// -- Check
		assert_eq!(after_pattern, content);
		assert_eq!(pattern_count, 0);
		assert_eq!(after_literal, content);
		assert_eq!(literal_count, 0);
	}
}

// endregion: --- Tests
