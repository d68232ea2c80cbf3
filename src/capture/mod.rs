//! What a closure sees depends on how it captured its environment.
//!
//! A `move` closure over a `Copy` value keeps the value it saw at definition
//! time. A closure that borrows reads whatever the variable holds when it
//! runs. For heap objects the choice is between owning the object ([Capture::Strong])
//! and holding a handle that may outlive it ([Capture::Weak], [Capture::Unowned]).

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use tracing::{debug, warn};

use crate::rollable::Rollable;

/// A deferred roll. `None` means the die it referred to is gone.
pub type RollResult = Box<dyn FnMut() -> Option<u32>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Keeps the die alive for as long as the closure exists.
    Strong,
    /// Doesn't keep the die alive; rolling after it's gone yields `None`.
    Weak,
    /// Doesn't keep the die alive and assumes it never goes away.
    /// Rolling after it's gone panics.
    Unowned,
}

/// Closure borrows `number`, so it sees the increment. Returns 1.
pub fn reference_capture() -> i32 {
    let number = Cell::new(0);
    let closure = || number.get();
    number.set(number.get() + 1);
    closure()
}

/// Closure copies `number` when it is created. Returns 0.
pub fn value_capture() -> i32 {
    let mut number = 0;
    let closure = move || number;
    number += 1;
    debug!(number, "incremented after capture");
    closure()
}

pub fn bind_roll<D>(dice: &Rc<RefCell<D>>, capture: Capture) -> RollResult
where
    D: Rollable + 'static,
{
    match capture {
        Capture::Strong => {
            let dice = Rc::clone(dice);
            Box::new(move || Some(dice.borrow_mut().roll()))
        }
        Capture::Weak => {
            let dice = Rc::downgrade(dice);
            Box::new(move || {
                let Some(dice) = dice.upgrade() else {
                    warn!("dice is gone");
                    return None;
                };
                let face = dice.borrow_mut().roll();
                Some(face)
            })
        }
        Capture::Unowned => {
            let dice = Rc::downgrade(dice);
            Box::new(move || {
                let Some(dice) = dice.upgrade() else {
                    panic!("attempted to read an unowned reference but the object was already deallocated");
                };
                let face = dice.borrow_mut().roll();
                Some(face)
            })
        }
    }
}

/// Binds a roll to a die that only lives inside this call.
pub fn detached_roll<D>(dice: D, capture: Capture) -> RollResult
where
    D: Rollable + 'static,
{
    let dice = Rc::new(RefCell::new(dice));
    bind_roll(&dice, capture)
}
