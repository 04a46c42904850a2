// Copyright (C) 2020-2025 Andy Kurnia.

use super::alphabet;

// A blank keeps is_blank forever; its letter is alphabet::BLANK until assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: u8,
    score: i32,
    is_blank: bool,
}

impl Tile {
    pub fn new(letter: u8, score: i32) -> Tile {
        let is_blank = letter == alphabet::BLANK;
        Tile {
            letter: if is_blank {
                letter
            } else {
                letter.to_ascii_lowercase()
            },
            score: if is_blank { 0 } else { score },
            is_blank,
        }
    }

    pub fn blank() -> Tile {
        Tile::new(alphabet::BLANK, 0)
    }

    // lowercase letter used for word matching, alphabet::BLANK if unassigned.
    #[inline(always)]
    pub fn letter(&self) -> u8 {
        self.letter
    }

    #[inline(always)]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.is_blank
    }

    #[inline(always)]
    pub fn is_assigned(&self) -> bool {
        self.letter != alphabet::BLANK
    }

    pub fn assign(&mut self, letter: u8) {
        assert!(self.is_blank, "cannot assign {:?} to a lettered tile", letter as char);
        assert!(letter.is_ascii_alphabetic(), "invalid blank letter {}", letter);
        self.letter = letter.to_ascii_lowercase();
    }

    pub fn assigned(mut self, letter: u8) -> Tile {
        self.assign(letter);
        self
    }

    pub fn unassign(&mut self) {
        if self.is_blank {
            self.letter = alphabet::BLANK;
        }
    }

    // board text: lowercase for lettered tiles, uppercase for assigned blanks.
    #[inline(always)]
    pub fn label(&self) -> char {
        if self.is_blank && self.is_assigned() {
            self.letter.to_ascii_uppercase() as char
        } else {
            self.letter as char
        }
    }

    // display: uppercase for lettered tiles, lowercase for blanks.
    #[inline(always)]
    pub fn display_label(&self) -> char {
        if self.is_blank {
            self.letter as char
        } else {
            self.letter.to_ascii_uppercase() as char
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_round_trips_to_sentinel() {
        let mut tile = Tile::blank();
        assert!(tile.is_blank());
        assert!(!tile.is_assigned());
        assert_eq!(tile.label(), '*');
        tile.assign(b'Q');
        assert_eq!(tile.letter(), b'q');
        assert_eq!(tile.label(), 'Q');
        assert_eq!(tile.display_label(), 'q');
        assert_eq!(tile.score(), 0);
        tile.unassign();
        assert_eq!(tile, Tile::blank());
    }

    #[test]
    fn lettered_tiles_are_lowercase() {
        let tile = Tile::new(b'Q', 10);
        assert_eq!(tile.letter(), b'q');
        assert_eq!(tile.label(), 'q');
        assert_eq!(tile.display_label(), 'Q');
        assert_eq!(tile.score(), 10);
    }

    #[test]
    #[should_panic]
    fn lettered_tiles_cannot_be_assigned() {
        Tile::new(b'a', 1).assign(b'b');
    }
}
