// Copyright (C) 2020-2025 Andy Kurnia.

use super::board;
use std::fmt::Write;

// What an empty cell shows: its remaining premium, or the star.
#[inline(always)]
pub fn empty_label(board: &board::Board, cell: &board::Cell) -> char {
    if cell.pos == board.center() {
        return '*';
    }
    match cell.word_multiplier {
        3 => '=',
        2 => '-',
        1 => match cell.letter_multiplier {
            3 => '"',
            2 => '\'',
            1 => ' ',
            _ => '?',
        },
        _ => '?',
    }
}

#[inline(always)]
pub fn board_label(board: &board::Board, cell: &board::Cell) -> char {
    cell.tile
        .map_or_else(|| empty_label(board, cell), |tile| tile.display_label())
}

pub fn format_board(board: &board::Board) -> String {
    let dim = board.dim();
    let mut s = String::new();
    s.push_str("  ");
    for c in 0..dim.cols {
        let _ = write!(s, " {}", ((c as u8) + 0x61) as char);
    }
    s.push('\n');
    s.push_str("  +");
    for _ in 1..dim.cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            if let Some(cell) = board.cell_at(c, r) {
                s.push(board_label(board, cell));
            }
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    s.push_str("  +");
    for _ in 1..dim.cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
    s.push_str("  ");
    for c in 0..dim.cols {
        let _ = write!(s, " {}", ((c as u8) + 0x61) as char);
    }
    s.push('\n');
    s
}

pub fn print_board(board: &board::Board) {
    print!("{}", format_board(board));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::make_common_english_game_config;

    #[test]
    fn premiums_and_tiles() {
        let game_config = make_common_english_game_config();
        let board = board::Board::new(&game_config);
        let s = format_board(&board);
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "   a b c d e f g h i j k l m n o");
        assert_eq!(lines[2], " 1|=     '       =       '     =|1");
        assert_eq!(lines[9], " 8|=     '       *       '     =|8");

        let board = board::Board::from_text(
            &game_config,
            "3\n3. .. 2.\n.. A b\n.3 .2 ..\n",
        )
        .unwrap();
        let s = format_board(&board);
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines[2], " 1|=   -|1");
        // centre square holds the blank
        assert_eq!(lines[3], " 2|  a B|2");
        assert_eq!(lines[4], " 3|\" '  |3");
    }
}
