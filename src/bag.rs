// Copyright (C) 2020-2021 Andy Kurnia. All rights reserved.

use super::{alphabet, error, rack, tile};
use rand::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct Bag(pub Vec<tile::Tile>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for kind in alphabet.iter() {
            for _ in 0..kind.freq {
                bag.push(tile::Tile::new(kind.label, kind.score));
            }
        }
        Bag(bag)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    // uniformly random, without replacement.
    pub fn draw_one(&mut self, rng: &mut dyn RngCore) -> Option<tile::Tile> {
        if self.0.is_empty() {
            None
        } else {
            let idx = rng.random_range(0..self.0.len());
            Some(self.0.swap_remove(idx))
        }
    }

    // fills the rack up to rack_size, or until the bag runs out.
    pub fn replenish(&mut self, rng: &mut dyn RngCore, rack: &mut rack::Rack, rack_size: usize) {
        for _ in 0..rack_size.saturating_sub(rack.len()).min(self.0.len()) {
            if let Some(tile) = self.draw_one(rng) {
                rack.push(tile);
            }
        }
    }

    // all or nothing.
    pub fn draw(&mut self, rng: &mut dyn RngCore, amount: usize) -> error::Returns<Vec<tile::Tile>> {
        if amount > self.0.len() {
            return_error!(format!(
                "cannot draw {} tiles, bag has only {}",
                amount,
                self.0.len()
            ));
        }
        Ok((0..amount).filter_map(|_| self.draw_one(rng)).collect())
    }

    pub fn put_back<II: IntoIterator<Item = tile::Tile>>(&mut self, tiles: II) {
        for mut tile in tiles {
            tile.unassign();
            self.0.push(tile);
        }
    }

    // Takes the tile for a board letter: lowercase takes that letter,
    // uppercase takes a blank and assigns the letter to it.
    pub fn take_letter(&mut self, label: char) -> Option<tile::Tile> {
        if !label.is_ascii_alphabetic() && label != alphabet::BLANK as char {
            return None;
        }
        let label = label as u8;
        if label.is_ascii_uppercase() {
            let pos = self.0.iter().rposition(|t| t.is_blank())?;
            Some(self.0.swap_remove(pos).assigned(label))
        } else {
            let pos = self
                .0
                .iter()
                .rposition(|t| t.letter() == label && t.is_blank() == (label == alphabet::BLANK))?;
            Some(self.0.swap_remove(pos))
        }
    }

    pub fn count(&self, label: u8) -> usize {
        self.0.iter().filter(|t| t.letter() == label).count()
    }
}
