//! Checksum Helpers
//!
//! 32-bit hashes with JVM `hashCode` semantics and the `31 * acc + h`
//! combiner used for snapshot hashes. All arithmetic wraps.

/// Value with a JVM-compatible 32-bit hash
pub trait JavaHash {
    fn java_hash(&self) -> i32;
}

impl JavaHash for i32 {
    fn java_hash(&self) -> i32 {
        *self
    }
}

impl JavaHash for i64 {
    fn java_hash(&self) -> i32 {
        (*self ^ ((*self as u64) >> 32) as i64) as i32
    }
}

impl JavaHash for bool {
    fn java_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl JavaHash for str {
    /// Polynomial hash over UTF-16 code units
    fn java_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
    }
}

impl JavaHash for String {
    fn java_hash(&self) -> i32 {
        self.as_str().java_hash()
    }
}

/// Order-sensitive combiner seeded at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCombiner {
    acc: i32,
}

impl HashCombiner {
    pub fn new() -> Self {
        Self { acc: 1 }
    }

    pub fn update<T: JavaHash + ?Sized>(&mut self, field: &T) -> &mut Self {
        self.acc = self.acc.wrapping_mul(31).wrapping_add(field.java_hash());
        self
    }

    pub fn finish(&self) -> i32 {
        self.acc
    }
}

impl Default for HashCombiner {
    fn default() -> Self {
        Self::new()
    }
}

/// Checksum of a single string, used for user summaries
pub fn compute_checksum(value: &str) -> i32 {
    value.java_hash()
}
