//! Dice behind an injectable randomness source.
//!
//! The engine only sees the [`Roll`] trait. [`Dice`] draws from any `rand`
//! generator, so a seeded `SmallRng` replays a game exactly; [`LoadedDice`]
//! replays a fixed list of faces.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::ConfigIssue;

/// Anything that can produce a die face in `1..=sides()`.
pub trait Roll {
    /// Roll once.
    fn roll(&mut self) -> u32;

    /// Number of faces.
    fn sides(&self) -> u32;
}

impl<T: Roll + ?Sized> Roll for &mut T {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }

    fn sides(&self) -> u32 {
        (**self).sides()
    }
}

fn check_sides(sides: u32) -> Result<(), ConfigIssue> {
    if sides < 2 {
        Err(ConfigIssue::TooFewSides(sides))
    } else {
        Ok(())
    }
}

/// Fair die with `sides` faces.
#[derive(Debug, Clone)]
pub struct Dice<R = SmallRng> {
    sides: u32,
    rng: R,
}

impl<R: Rng> Dice<R> {
    /// Wrap `rng` in a die with `sides` faces.
    pub fn new(sides: u32, rng: R) -> Result<Self, ConfigIssue> {
        check_sides(sides)?;
        Ok(Self { sides, rng })
    }
}

impl Dice<SmallRng> {
    /// Deterministic die: the same seed yields the same rolls.
    pub fn seeded(sides: u32, seed: u64) -> Result<Self, ConfigIssue> {
        Self::new(sides, SmallRng::seed_from_u64(seed))
    }

    /// Die seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy(sides: u32) -> Result<Self, ConfigIssue> {
        let mut seed_rng = rand::rng();
        Self::new(sides, SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> Roll for Dice<R> {
    fn roll(&mut self) -> u32 {
        self.rng.random_range(1..=self.sides)
    }

    fn sides(&self) -> u32 {
        self.sides
    }
}

/// Die that replays a scripted list of faces, starting over when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDice {
    sides: u32,
    faces: Vec<u32>,
    next: usize,
}

impl LoadedDice {
    pub fn new(sides: u32, faces: impl Into<Vec<u32>>) -> Result<Self, ConfigIssue> {
        check_sides(sides)?;
        let faces = faces.into();
        if faces.is_empty() {
            return Err(ConfigIssue::EmptyScript);
        }
        if let Some(&bad) = faces.iter().find(|&&f| f == 0 || f > sides) {
            return Err(ConfigIssue::FaceOutOfRange(bad));
        }
        Ok(Self {
            sides,
            faces,
            next: 0,
        })
    }

    /// How many faces have been rolled so far.
    pub fn rolled(&self) -> usize {
        self.next
    }
}

impl Roll for LoadedDice {
    fn roll(&mut self) -> u32 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }

    fn sides(&self) -> u32 {
        self.sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rolls_stay_in_range() {
        let mut dice = Dice::seeded(6, 7).unwrap();
        for _ in 0..500 {
            let r = dice.roll();
            assert!((1..=6).contains(&r));
        }
    }

    #[test]
    fn every_face_shows_up() {
        let mut dice = Dice::seeded(4, 99).unwrap();
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[(dice.roll() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = Dice::seeded(6, 12345).unwrap();
        let mut b = Dice::seeded(6, 12345).unwrap();
        let ra: Vec<u32> = (0..50).map(|_| a.roll()).collect();
        let rb: Vec<u32> = (0..50).map(|_| b.roll()).collect();
        assert_eq!(ra, rb);
    }

    #[test]
    fn rejects_one_sided_die() {
        assert_eq!(
            Dice::seeded(1, 0).unwrap_err(),
            ConfigIssue::TooFewSides(1)
        );
        assert_eq!(
            LoadedDice::new(0, vec![1]).unwrap_err(),
            ConfigIssue::TooFewSides(0)
        );
    }

    #[test]
    fn loaded_dice_cycles() {
        let mut dice = LoadedDice::new(6, vec![6, 6, 1]).unwrap();
        let rolls: Vec<u32> = (0..5).map(|_| dice.roll()).collect();
        assert_eq!(rolls, vec![6, 6, 1, 6, 6]);
        assert_eq!(dice.rolled(), 5);
    }

    #[test]
    fn loaded_dice_validates_faces() {
        assert_eq!(
            LoadedDice::new(6, vec![3, 7]).unwrap_err(),
            ConfigIssue::FaceOutOfRange(7)
        );
        assert_eq!(
            LoadedDice::new(6, Vec::new()).unwrap_err(),
            ConfigIssue::EmptyScript
        );
    }
}
