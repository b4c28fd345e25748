use crate::Rewrite;

/// Ordered collection of rewrite rules.
///
/// Order is semantic: later rules may assume fragments inserted by earlier
/// rules in the same set.
#[derive(Debug, Clone)]
pub struct RewriteSet {
	rewrites: Vec<Rewrite>,
}

impl RewriteSet {
	pub fn new(rewrites: Vec<Rewrite>) -> Self {
		Self { rewrites }
	}

	pub fn len(&self) -> usize {
		self.rewrites.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rewrites.is_empty()
	}
}

// region:    --- Iterators

impl RewriteSet {
	pub fn iter(&self) -> std::slice::Iter<'_, Rewrite> {
		self.rewrites.iter()
	}
}

impl IntoIterator for RewriteSet {
	type Item = Rewrite;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.rewrites.into_iter()
	}
}

impl<'a> IntoIterator for &'a RewriteSet {
	type Item = &'a Rewrite;
	type IntoIter = std::slice::Iter<'a, Rewrite>;

	fn into_iter(self) -> Self::IntoIter {
		self.rewrites.iter()
	}
}

// endregion: --- Iterators
