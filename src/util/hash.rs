#![cfg(test)]

use std::hash::{BuildHasher, Hasher};

/// A Hasher which folds everything it is given into one of `BUCKETS` values, so that sets using it
/// see constant collisions between unrelated keys.
#[derive(Debug)]
pub struct BadHasher {
    state: u64,
}

const BUCKETS: u64 = 3;

impl Hasher for BadHasher {
    fn finish(&self) -> u64 {
        self.state % BUCKETS
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut offset = 0_u64;
        for byte in bytes {
            self.state ^= (*byte as u64) << (offset * 8);
            offset = (offset + 1) % 8;
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BadHasherBuilder;

impl BuildHasher for BadHasherBuilder {
    type Hasher = BadHasher;

    fn build_hasher(&self) -> Self::Hasher {
        BadHasher { state: 0 }
    }
}
