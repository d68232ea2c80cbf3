use rand::{rngs::ThreadRng, Rng};
use thiserror::Error;
use tracing::debug;

use super::Rollable;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("A die needs at least one side")]
    NoSides,
}

fn roll_up_to<R: Rng>(rng: &mut R, sides: u32) -> u32 {
    let face = rng.gen_range(1..=sides);
    debug!(sides, face, "rolled");
    face
}

pub struct SixSidedDice<R = ThreadRng> {
    rng: R,
}

impl SixSidedDice {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl<R: Rng> SixSidedDice<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Rollable for SixSidedDice<R> {
    fn roll(&mut self) -> u32 {
        roll_up_to(&mut self.rng, 6)
    }
}

pub struct TwentySidedDice<R = ThreadRng> {
    rng: R,
}

impl TwentySidedDice {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl<R: Rng> TwentySidedDice<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Rollable for TwentySidedDice<R> {
    fn roll(&mut self) -> u32 {
        roll_up_to(&mut self.rng, 20)
    }
}

/// Die with any positive number of sides.
pub struct Dice<R = ThreadRng> {
    sides: u32,
    rng: R,
}

impl Dice {
    pub fn new(sides: u32) -> Result<Self, Error> {
        Self::with_rng(sides, rand::thread_rng())
    }
}

impl<R: Rng> Dice<R> {
    pub fn with_rng(sides: u32, rng: R) -> Result<Self, Error> {
        if sides == 0 {
            return Err(Error::NoSides);
        }
        Ok(Self { sides, rng })
    }
}

impl<R: Rng> Rollable for Dice<R> {
    fn roll(&mut self) -> u32 {
        roll_up_to(&mut self.rng, self.sides)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::rollable::Rollable;

    use super::{Dice, Error, SixSidedDice, TwentySidedDice};

    #[test]
    fn zero_sides_is_rejected() {
        assert_eq!(Dice::new(0).err(), Some(Error::NoSides));
    }

    #[test]
    fn every_face_shows_up() {
        let mut d6 = SixSidedDice::with_rng(StdRng::seed_from_u64(42));
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[d6.roll() as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s), "faces seen: {:?}", seen);
    }

    #[test]
    fn d20_stays_in_range() {
        let mut d20 = TwentySidedDice::new();
        for _ in 0..500 {
            let face = d20.roll();
            assert!((1..=20).contains(&face));
        }
    }

    #[test]
    fn custom_dice_keep_their_sides() {
        let mut d100 = Dice::new(100).unwrap();
        assert_eq!(d100.sides, 100);
        for _ in 0..500 {
            assert!((1..=100).contains(&d100.roll()));
        }
    }
}
