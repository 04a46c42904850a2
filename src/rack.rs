// Copyright (C) 2020-2025 Andy Kurnia.

use super::{bag, error, tile};

// A player's hand. Slot indices identify tiles; order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rack(Vec<tile::Tile>);

impl Rack {
    pub fn new() -> Rack {
        Rack(Vec::with_capacity(7))
    }

    pub fn from_tiles(tiles: Vec<tile::Tile>) -> Rack {
        Rack(tiles)
    }

    // Moves the named tiles out of the bag ('*' for a blank).
    pub fn take_from_bag(bag: &mut bag::Bag, letters: &str) -> error::Returns<Rack> {
        let mut rack = Rack::new();
        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            match bag.take_letter(c.to_ascii_lowercase()) {
                Some(tile) => rack.push(tile),
                None => {
                    // undo, so a failed load does not eat tiles.
                    bag.put_back(rack.0);
                    return_error!(format!("bag has no tile {:?} for rack {:?}", c, letters));
                }
            }
        }
        Ok(rack)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[tile::Tile] {
        &self.0
    }

    #[inline(always)]
    pub fn get(&self, slot: usize) -> tile::Tile {
        self.0[slot]
    }

    pub fn push(&mut self, tile: tile::Tile) {
        self.0.push(tile);
    }

    pub fn duplicate(&self) -> Rack {
        self.clone()
    }

    // Removes the given slots, returning those tiles. Panics on a bad slot.
    pub fn remove_slots(&mut self, slots: &[usize]) -> Vec<tile::Tile> {
        let mut sorted = slots.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), slots.len(), "duplicate rack slot in {:?}", slots);
        let mut removed = Vec::with_capacity(sorted.len());
        for &slot in sorted.iter().rev() {
            assert!(slot < self.0.len(), "rack slot {} out of range", slot);
            removed.push(self.0.remove(slot));
        }
        removed.reverse();
        removed
    }

    pub fn face_value(&self) -> i32 {
        self.0.iter().map(|t| t.score()).sum()
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in &self.0 {
            write!(f, "{}", t.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn take_from_bag_and_remove_slots() {
        let mut bag = bag::Bag::new(&alphabet::make_english_alphabet());
        let mut rack = Rack::take_from_bag(&mut bag, "cat*").unwrap();
        assert_eq!(bag.len(), 96);
        assert_eq!(rack.to_string(), "cat*");
        assert_eq!(rack.face_value(), 5);

        let copy = rack.duplicate();
        let removed = rack.remove_slots(&[3, 0]);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].letter(), b'c');
        assert!(removed[1].is_blank());
        assert_eq!(rack.to_string(), "at");
        assert_eq!(copy.to_string(), "cat*");
    }

    #[test]
    fn failed_take_returns_tiles() {
        let mut bag = bag::Bag::new(&alphabet::make_english_alphabet());
        assert!(Rack::take_from_bag(&mut bag, "zz").is_err());
        assert_eq!(bag.len(), 100);
    }
}
