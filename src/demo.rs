//! Console drivers for each playground. Output is for people, not parsers.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};
use url::Url;

use crate::capture::{self, Capture};
use crate::data_store::{
    discarding::DiscardingStore, memory::InMemoryStore, AnyDataStore, DataStore,
};
use crate::rollable::{
    dice::{Dice, SixSidedDice, TwentySidedDice},
    AnyRollable, Rollable,
};

/// Seeded dice get consecutive seeds so that two dice in one run don't
/// mirror each other.
fn with_source<D>(
    seed: Option<u64>,
    offset: u64,
    seeded: impl FnOnce(StdRng) -> D,
    fresh: impl FnOnce() -> D,
) -> D {
    match seed {
        Some(seed) => seeded(StdRng::seed_from_u64(seed.wrapping_add(offset))),
        None => fresh(),
    }
}

fn six_sided(seed: Option<u64>, offset: u64) -> AnyRollable {
    with_source(
        seed,
        offset,
        |rng| AnyRollable::new(SixSidedDice::with_rng(rng)),
        || AnyRollable::new(SixSidedDice::new()),
    )
}

pub fn capture_lists(seed: Option<u64>) {
    println!("== capture lists");
    println!("borrowed number: {}", capture::reference_capture());
    println!("copied number: {}", capture::value_capture());

    let mut weak = capture::detached_roll(six_sided(seed, 0), Capture::Weak);
    match weak() {
        Some(face) => println!("weak roll: {}", face),
        None => println!("weak roll: dice is gone"),
    }

    let mut strong = capture::detached_roll(six_sided(seed, 1), Capture::Strong);
    if let Some(face) = strong() {
        println!("strong roll: {}", face);
    }

    // invoking this one would panic, the die is already gone
    let _unowned = capture::detached_roll(six_sided(seed, 2), Capture::Unowned);
    println!("unowned roll: skipped, the referent was deallocated");
    info!("capture list demo done");
}

pub fn simple_erasure(seed: Option<u64>, extra_sides: &[u32]) {
    println!("== simple type erasure");
    let mut all_dice = vec![
        six_sided(seed, 0),
        with_source(
            seed,
            1,
            |rng| AnyRollable::new(TwentySidedDice::with_rng(rng)),
            || AnyRollable::new(TwentySidedDice::new()),
        ),
    ];
    for (i, &sides) in extra_sides.iter().enumerate() {
        let dice = with_source(
            seed,
            2 + i as u64,
            |rng| Dice::with_rng(sides, rng).map(AnyRollable::new),
            || Dice::new(sides).map(AnyRollable::new),
        );
        match dice {
            Ok(dice) => {
                debug!(sides, "added custom die");
                all_dice.push(dice)
            }
            Err(e) => warn!("Skipping die with {} sides: {}", sides, e),
        }
    }

    for dice in all_dice.iter_mut() {
        println!("{}", dice.roll());
    }
    info!(dice = all_dice.len(), "simple erasure demo done");
}

pub fn generic_erasure() -> anyhow::Result<()> {
    println!("== generic type erasure");
    let mut any_stores: Vec<AnyDataStore<Url>> = vec![
        AnyDataStore::new(InMemoryStore::new()),
        AnyDataStore::new(DiscardingStore::new()),
    ];
    let homepage = Url::parse("https://www.rust-lang.org/")?;
    for (i, store) in any_stores.iter_mut().enumerate() {
        store.store(homepage.clone(), "homepage");
        match store.fetch("homepage") {
            Some(url) => println!("store {}: homepage is {}", i, url),
            None => println!("store {}: nothing under homepage", i),
        }
    }
    info!(stores = any_stores.len(), "generic erasure demo done");
    Ok(())
}
