// Copyright (C) 2020-2023 Andy Kurnia.

use super::{alphabet, board_layout, error};

// How far before an anchor a placement may start when the square before the
// anchor is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeftExtension {
    // up to one square per rack tile beyond the anchor's own.
    Full,
    // the anchor itself or the one square before it.
    Restricted,
}

pub struct StaticGameConfig {
    alphabet: alphabet::Alphabet,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    num_players: u8,
    num_zeros_to_end: u8,
    num_tiles: u16,
    bingo_bonus: i32,
    left_extension: LeftExtension,
}

pub enum GameConfig {
    Static(StaticGameConfig),
}

impl GameConfig {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    #[inline(always)]
    pub fn num_zeros_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_zeros_to_end,
        }
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            GameConfig::Static(x) => x.num_tiles,
        }
    }

    #[inline(always)]
    pub fn left_extension(&self) -> LeftExtension {
        match self {
            GameConfig::Static(x) => x.left_extension,
        }
    }

    // awarded when a placement empties the rack.
    #[inline(always)]
    pub fn bingo_bonus(&self, is_bingo: bool) -> i32 {
        match self {
            GameConfig::Static(x) => {
                if is_bingo {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }

    pub fn with_left_extension(mut self, left_extension: LeftExtension) -> Self {
        match &mut self {
            GameConfig::Static(x) => x.left_extension = left_extension,
        }
        self
    }
}

fn make_english_game_config_with_alphabet(alphabet: alphabet::Alphabet) -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        alphabet,
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        num_players: 2,
        num_zeros_to_end: 6,
        num_tiles: 100,
        bingo_bonus: 50,
        left_extension: LeftExtension::Full,
    })
}

pub fn make_common_english_game_config() -> GameConfig {
    make_english_game_config_with_alphabet(alphabet::make_english_alphabet())
}

// The standard game with letter frequencies and points from a tile table.
pub fn make_game_config_from_table(table: &str) -> error::Returns<GameConfig> {
    let alphabet = alphabet::Alphabet::from_table(table)?;
    let game_config = make_english_game_config_with_alphabet(alphabet);
    game_config
        .alphabet()
        .check_num_tiles(game_config.num_tiles())?;
    Ok(game_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_english() {
        let game_config = make_common_english_game_config();
        assert_eq!(game_config.rack_size(), 7);
        assert_eq!(game_config.num_players(), 2);
        assert_eq!(game_config.alphabet().num_tiles(), game_config.num_tiles());
        assert_eq!(game_config.bingo_bonus(true), 50);
        assert_eq!(game_config.bingo_bonus(false), 0);
        assert_eq!(game_config.left_extension(), LeftExtension::Full);
        let game_config = game_config.with_left_extension(LeftExtension::Restricted);
        assert_eq!(game_config.left_extension(), LeftExtension::Restricted);
    }

    #[test]
    fn table_must_fill_the_bag() {
        assert!(make_game_config_from_table("* 2 0\na 98 1\n").is_ok());
        assert!(make_game_config_from_table("* 2 0\na 97 1\n").is_err());
    }
}
