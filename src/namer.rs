use super::*;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Source of unique centroid names.
///
/// Hands out `centroid_0`, `centroid_1`, ... from a monotonically increasing
/// counter. Every centroid created through the same `Namer` without an
/// explicit name gets a distinct one. Clones share the same counter, so one
/// namer handed to several models keeps names unique across all of them.
/// Caller-supplied names pass through unchecked.
#[derive(Debug, Default, Clone)]
pub struct Namer(Arc<AtomicUsize>);

impl Namer {
    /// Starts counting from `first` instead of zero.
    pub fn starting_at(first: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(first)))
    }
    /// The requested name, or a fresh one when empty.
    pub fn name(&self, requested: &str) -> String {
        match requested.is_empty() {
            true => self.next(),
            false => requested.to_string(),
        }
    }
    /// A fresh auto-generated name, advancing the counter.
    pub fn next(&self) -> String {
        format!(
            "{}{}",
            CENTROID_NAME_PREFIX,
            self.0.fetch_add(1, Ordering::Relaxed)
        )
    }
    /// Counter value the next generated name will carry.
    pub fn peek(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_are_unique() {
        let namer = Namer::default();
        let names = (0..64).map(|_| namer.name("")).collect::<Vec<_>>();
        let unique = names.iter().collect::<std::collections::BTreeSet<_>>();
        assert_eq!(unique.len(), names.len());
        assert_eq!(names[0], "centroid_0");
        assert_eq!(names[1], "centroid_1");
        assert_eq!(namer.peek(), 64);
    }

    #[test]
    fn requested_names_pass_through() {
        let namer = Namer::starting_at(7);
        assert_eq!(namer.name("blue"), "blue");
        assert_eq!(namer.name(""), "centroid_7");
        assert_eq!(namer.peek(), 8);
    }

    #[test]
    fn clones_share_one_counter() {
        let namer = Namer::default();
        let other = namer.clone();
        assert_eq!(namer.name(""), "centroid_0");
        assert_eq!(other.name(""), "centroid_1");
        assert_eq!(namer.name(""), "centroid_2");
        assert_eq!(other.peek(), 3);
    }
}
