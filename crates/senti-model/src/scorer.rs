/// A sentiment model: maps text to a compound polarity score in [-1, 1].
///
/// Implementations must be deterministic and free of side effects; the same
/// text always yields the same score. Empty or whitespace-only text scores
/// 0.0. One instance is constructed per process and shared by reference
/// across every analysis run.
pub trait Scorer {
    fn score(&self, text: &str) -> f64;
}

impl<T: Scorer + ?Sized> Scorer for &T {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}
