//! The signature counter.

/// An increment-only sequence.
#[derive(Debug)]
pub struct Sequence(u64);

impl Sequence {
    /// Create a new sequence with the specified initial value.
    pub fn new(init: u64) -> Self {
        Self(init)
    }

    /// Advance the sequence by exactly one.
    pub fn inc(&mut self) {
        // A device would have to sign for millennia to overflow u64.
        self.0 = self
            .0
            .checked_add(1)
            .expect("signature counter overflow");
    }

    /// Obtain the current value of the sequence.
    pub fn get(&self) -> u64 {
        self.0
    }
}
