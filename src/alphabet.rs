// Copyright (C) 2020-2025 Andy Kurnia.

use super::error;

// the letter carried by an unassigned blank tile.
pub const BLANK: u8 = b'*';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileKind {
    pub label: u8,
    pub freq: u8,
    pub score: i32,
}

#[derive(Clone, Debug)]
pub struct Alphabet {
    tiles: Box<[TileKind]>,
}

impl Alphabet {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &TileKind> {
        self.tiles.iter()
    }

    #[inline(always)]
    pub fn get(&self, label: u8) -> Option<&TileKind> {
        self.tiles.iter().find(|kind| kind.label == label)
    }

    // face value of a letter, None if the alphabet does not have it.
    #[inline(always)]
    pub fn score(&self, label: u8) -> Option<i32> {
        self.get(label).map(|kind| kind.score)
    }

    #[inline(always)]
    pub fn freq(&self, label: u8) -> u8 {
        self.get(label).map_or(0, |kind| kind.freq)
    }

    pub fn num_tiles(&self) -> u16 {
        self.tiles.iter().map(|kind| kind.freq as u16).sum()
    }

    pub fn check_num_tiles(&self, expected: u16) -> error::Returns<()> {
        let num_tiles = self.num_tiles();
        if num_tiles != expected {
            return_error!(format!(
                "tile table has {} tiles, expected {}",
                num_tiles, expected
            ));
        }
        Ok(())
    }

    // Parses lines of "<letter> <frequency> <points>".
    pub fn from_table(table: &str) -> error::Returns<Alphabet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(table.as_bytes());
        let mut tiles = Vec::<TileKind>::new();
        for (line_num, result) in (1..).zip(csv_reader.records()) {
            let record = result?;
            if record.len() != 3 {
                return_error!(format!(
                    "tile table line {}: need 3 fields, found {}",
                    line_num,
                    record.len()
                ));
            }
            let label = match record[0].as_bytes() {
                [c] if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
                [BLANK] => BLANK,
                _ => {
                    return_error!(format!(
                        "tile table line {}: invalid letter {:?}",
                        line_num, &record[0]
                    ));
                }
            };
            let freq = record[1].parse::<u8>().map_err(|e| {
                error::new(format!(
                    "tile table line {}: bad frequency {:?}: {}",
                    line_num, &record[1], e
                ))
            })?;
            let score = record[2].parse::<i32>().map_err(|e| {
                error::new(format!(
                    "tile table line {}: bad points {:?}: {}",
                    line_num, &record[2], e
                ))
            })?;
            if label == BLANK && score != 0 {
                return_error!(format!(
                    "tile table line {}: blank must be worth 0, not {}",
                    line_num, score
                ));
            }
            if tiles.iter().any(|kind| kind.label == label) {
                return_error!(format!(
                    "tile table line {}: duplicate letter {:?}",
                    line_num, label as char
                ));
            }
            tiles.push(TileKind { label, freq, score });
        }
        if tiles.is_empty() {
            return_error!("tile table is empty".into());
        }
        let alphabet = Alphabet {
            tiles: tiles.into_boxed_slice(),
        };
        log::debug!(
            "tile table: {} letters, {} tiles",
            alphabet.len(),
            alphabet.num_tiles()
        );
        Ok(alphabet)
    }
}

static ENGLISH_TILES: &[TileKind] = &[
    TileKind { label: BLANK, freq: 2, score: 0 },
    TileKind { label: b'a', freq: 9, score: 1 },
    TileKind { label: b'b', freq: 2, score: 3 },
    TileKind { label: b'c', freq: 2, score: 3 },
    TileKind { label: b'd', freq: 4, score: 2 },
    TileKind { label: b'e', freq: 12, score: 1 },
    TileKind { label: b'f', freq: 2, score: 4 },
    TileKind { label: b'g', freq: 3, score: 2 },
    TileKind { label: b'h', freq: 2, score: 4 },
    TileKind { label: b'i', freq: 9, score: 1 },
    TileKind { label: b'j', freq: 1, score: 8 },
    TileKind { label: b'k', freq: 1, score: 5 },
    TileKind { label: b'l', freq: 4, score: 1 },
    TileKind { label: b'm', freq: 2, score: 3 },
    TileKind { label: b'n', freq: 6, score: 1 },
    TileKind { label: b'o', freq: 8, score: 1 },
    TileKind { label: b'p', freq: 2, score: 3 },
    TileKind { label: b'q', freq: 1, score: 10 },
    TileKind { label: b'r', freq: 6, score: 1 },
    TileKind { label: b's', freq: 4, score: 1 },
    TileKind { label: b't', freq: 6, score: 1 },
    TileKind { label: b'u', freq: 4, score: 1 },
    TileKind { label: b'v', freq: 2, score: 4 },
    TileKind { label: b'w', freq: 2, score: 4 },
    TileKind { label: b'x', freq: 1, score: 8 },
    TileKind { label: b'y', freq: 2, score: 4 },
    TileKind { label: b'z', freq: 1, score: 10 },
];

pub fn make_english_alphabet() -> Alphabet {
    Alphabet {
        tiles: ENGLISH_TILES.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_100_tiles() {
        let alphabet = make_english_alphabet();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet.num_tiles(), 100);
        assert!(alphabet.check_num_tiles(100).is_ok());
        assert_eq!(alphabet.score(b'q'), Some(10));
        assert_eq!(alphabet.score(BLANK), Some(0));
        assert_eq!(alphabet.freq(b'e'), 12);
        assert_eq!(alphabet.score(b'#'), None);
    }

    #[test]
    fn table_parses() {
        let alphabet = Alphabet::from_table("* 2 0\na 3 1\r\nZ 1 10\n\n").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.num_tiles(), 6);
        assert_eq!(alphabet.score(b'z'), Some(10));
        assert!(alphabet.check_num_tiles(100).is_err());
    }

    #[test]
    fn bad_tables_fail() {
        assert!(Alphabet::from_table("").is_err());
        assert!(Alphabet::from_table("a 1").is_err());
        assert!(Alphabet::from_table("a x 1").is_err());
        assert!(Alphabet::from_table("ab 1 1").is_err());
        assert!(Alphabet::from_table("a 1 1\na 2 2").is_err());
        assert!(Alphabet::from_table("* 2 5").is_err());
    }
}
