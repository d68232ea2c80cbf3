//! Simple type erasure.
//!
//! [Rollable] has no associated types, so `dyn Rollable` is a valid trait
//! object, but it is unsized and cannot be stored in a `Vec` directly.
//! [AnyRollable] is the sized, owned value that hides which die backs it, so
//! dice with unrelated random sources can share one collection.

pub mod dice;

pub trait Rollable {
    /// Draw once and return the face that came up.
    fn roll(&mut self) -> u32;
}

/// Owns one [Rollable] and forwards every roll to it.
pub struct AnyRollable {
    wrapped: Box<dyn Rollable>,
}

impl AnyRollable {
    pub fn new<D>(wrapped: D) -> Self
    where
        D: Rollable + 'static,
    {
        Self {
            wrapped: Box::new(wrapped),
        }
    }
}

impl Rollable for AnyRollable {
    fn roll(&mut self) -> u32 {
        crate::forward_log!("AnyRollable", "roll");
        self.wrapped.roll()
    }
}
