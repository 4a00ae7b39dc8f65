// SPDX-License-Identifier: MPL-2.0
//! In-memory image collection owned by the capture session.
//!
//! The collection is the single source of truth for every image the user has
//! picked or captured. It lives for the duration of the session and is never
//! written to disk. Insertion order is display order, most-recent-last.

use std::fmt;

/// Opaque handle to a locally addressable image resource (a URI).
///
/// Two entries may be equal: selecting the same photo twice produces two
/// references, and the collection keeps both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The underlying URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<std::path::PathBuf> for ImageRef {
    fn from(path: std::path::PathBuf) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

/// Deletion was requested for an index that is no longer valid.
///
/// The UI builds delete prompts asynchronously, so by the time the user
/// confirms, the index may be stale. Callers treat this as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The collection length at the time of the request.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for collection of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

/// Ordered collection of [`ImageRef`]s.
///
/// Grows only through [`append`](Self::append), shrinks only through
/// [`delete_at`](Self::delete_at). No gaps: deleting index `i` shifts every
/// later element down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCollection {
    items: Vec<ImageRef>,
}

impl ImageCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an image reference at the end. Never fails.
    pub fn append(&mut self, image: ImageRef) {
        self.items.push(image);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= count()` at call time; the
    /// collection is left unchanged.
    pub fn delete_at(&mut self, index: usize) -> Result<ImageRef, OutOfRange> {
        if index >= self.items.len() {
            return Err(OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Read-only view of the collection in insertion order.
    #[must_use]
    pub fn list(&self) -> &[ImageRef] {
        &self.items
    }

    /// Returns the image at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.items.get(index)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copies the current contents, for snapshot-mode galleries.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ImageRef> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(refs: &[&str]) -> ImageCollection {
        let mut collection = ImageCollection::new();
        for r in refs {
            collection.append(ImageRef::from(*r));
        }
        collection
    }

    #[test]
    fn new_collection_is_empty() {
        let collection = ImageCollection::new();
        assert_eq!(collection.count(), 0);
        assert!(collection.is_empty());
        assert!(collection.list().is_empty());
    }

    #[test]
    fn append_preserves_call_order() {
        let collection = collect(&["a", "b", "c"]);
        let uris: Vec<&str> = collection.list().iter().map(ImageRef::as_str).collect();
        assert_eq!(uris, ["a", "b", "c"]);
        assert_eq!(collection.count(), 3);
    }

    #[test]
    fn duplicates_are_kept() {
        let collection = collect(&["same", "same"]);
        assert_eq!(collection.count(), 2);
        assert_eq!(collection.list()[0], collection.list()[1]);
    }

    #[test]
    fn delete_at_removes_exactly_one_and_shifts() {
        let mut collection = collect(&["a", "b", "c"]);
        let removed = collection.delete_at(1).expect("index 1 is valid");
        assert_eq!(removed.as_str(), "b");
        let uris: Vec<&str> = collection.list().iter().map(ImageRef::as_str).collect();
        assert_eq!(uris, ["a", "c"]);
        assert_eq!(collection.count(), 2);
    }

    #[test]
    fn delete_at_first_and_last() {
        let mut collection = collect(&["a", "b", "c"]);
        assert_eq!(collection.delete_at(0).unwrap().as_str(), "a");
        assert_eq!(collection.delete_at(1).unwrap().as_str(), "c");
        let uris: Vec<&str> = collection.list().iter().map(ImageRef::as_str).collect();
        assert_eq!(uris, ["b"]);
    }

    #[test]
    fn delete_at_out_of_range_leaves_collection_unchanged() {
        let mut collection = collect(&["a", "b"]);
        let err = collection.delete_at(2).expect_err("index 2 is stale");
        assert_eq!(err, OutOfRange { index: 2, len: 2 });
        assert_eq!(collection.count(), 2);

        let err = collection.delete_at(usize::MAX).expect_err("way out of range");
        assert_eq!(err.len, 2);
        assert_eq!(collection.count(), 2);
    }

    #[test]
    fn delete_on_empty_collection_is_out_of_range() {
        let mut collection = ImageCollection::new();
        assert!(collection.delete_at(0).is_err());
        assert!(collection.is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_source() {
        let mut collection = collect(&["a"]);
        let snapshot = collection.snapshot();
        collection.append(ImageRef::from("b"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(collection.count(), 2);
    }

    #[test]
    fn out_of_range_display_names_both_sides() {
        let err = OutOfRange { index: 5, len: 2 };
        let text = format!("{}", err);
        assert!(text.contains('5'));
        assert!(text.contains('2'));
    }
}
