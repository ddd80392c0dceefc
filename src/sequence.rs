/// Relative value of an upload sequence. Lower priorities are discarded first.
pub type Priority = u32;

/// An "upload sequence": a run of cell values which must appear, contiguously
/// and in order, somewhere in the solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
    priority: Priority,
}

impl<T> Sequence<T> {
    pub fn new(items: impl IntoIterator<Item = T>, priority: Priority) -> Self {
        let items = items.into_iter().collect();
        Self { items, priority }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Sequence<T>
where
    T: PartialEq,
{
    /// Compute how many trailing items of this sequence remain unmatched after
    /// `value` is appended to a path which left `remaining` unmatched.
    ///
    /// A completed sequence (`remaining == 0`) stays complete. Otherwise the
    /// next expected item is `remaining` from the end: a match consumes it, and
    /// anything else throws away all progress.
    ///
    /// Progress is not re-aligned after a mismatch, so a sequence whose prefix
    /// reappears inside itself (`1A 1A 2B`) can be missed on paths like
    /// `1A 1A 1A 2B`.
    pub fn advance(&self, remaining: usize, value: &T) -> usize {
        debug_assert!(remaining <= self.items.len());
        match remaining {
            0 => 0,
            _ if self.items[self.items.len() - remaining] == *value => remaining - 1,
            _ => self.items.len(),
        }
    }

    /// `true` when this sequence appears as a contiguous run of the iterable.
    pub fn is_matched<'a>(&self, iter: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        if self.items.is_empty() {
            return true;
        }
        let values: Vec<&T> = iter.into_iter().collect();
        values
            .windows(self.items.len())
            .any(|window| window.iter().copied().eq(self.items.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sequence(items: &str) -> Sequence<&str> {
        Sequence::new(items.split_ascii_whitespace(), 1)
    }

    fn items(items: &str) -> Vec<&str> {
        items.split_ascii_whitespace().collect()
    }

    #[test]
    fn inner_example_bare() {
        let sequence = sequence("1A 2B 1A 3C");
        assert!(sequence.is_matched(&items("1A 2B 3C 1A 2B 1A 3C")));
    }

    #[test]
    fn inner_example_incomplete() {
        let sequence = sequence("1A 2B 1A 3C");
        assert!(!sequence.is_matched(&items("1A 2B 3C 1A 2B 1A")));
    }

    #[test]
    fn inner_example_too_long() {
        let sequence = sequence("1A 2B 1A 3C");
        assert!(sequence.is_matched(&items("1A 2B 3C 1A 2B 1A 3C 2B 3C 1A")));
    }

    #[test]
    fn shorter_input_never_matches() {
        let sequence = sequence("1A 2B 1A 3C");
        assert!(!sequence.is_matched(&items("1A 2B")));
    }

    #[rstest]
    #[case::first_item(3, "1A", 2)]
    #[case::middle_item(2, "2B", 1)]
    #[case::last_item(1, "3C", 0)]
    #[case::complete_stays_complete(0, "FF", 0)]
    #[case::mismatch_resets(1, "2B", 3)]
    #[case::mismatch_on_first_item(3, "FF", 3)]
    #[case::mismatch_equal_to_first_item_still_resets(2, "1A", 3)]
    fn advance(#[case] remaining: usize, #[case] value: &str, #[case] expected: usize) {
        let sequence = sequence("1A 2B 3C");
        assert_eq!(sequence.advance(remaining, &value), expected);
    }

    #[test]
    fn advancing_over_a_path_finds_the_run() {
        let sequence = sequence("1A 2B 3C");
        let remaining = items("FF 1A 2B 3C 7A")
            .iter()
            .fold(sequence.len(), |remaining, value| {
                sequence.advance(remaining, value)
            });
        assert_eq!(remaining, 0);
    }
}
