// Copyright (C) 2020-2025 Andy Kurnia.

use super::{bag, error, game_config, matrix, tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: matrix::Pos,
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
    pub tile: Option<tile::Tile>,
}

impl Cell {
    fn new(pos: matrix::Pos) -> Cell {
        Cell {
            pos,
            word_multiplier: 1,
            letter_multiplier: 1,
            tile: None,
        }
    }

    #[inline(always)]
    pub fn x(&self) -> i8 {
        self.pos.x
    }

    #[inline(always)]
    pub fn y(&self) -> i8 {
        self.pos.y
    }

    #[inline(always)]
    pub fn has_tile(&self) -> bool {
        self.tile.is_some()
    }

    // "2." style token, '.' standing for 1.
    fn multiplier_token(&self) -> [char; 2] {
        let digit = |m: i8| {
            if m == 1 {
                '.'
            } else {
                (b'0' + m as u8) as char
            }
        };
        [digit(self.word_multiplier), digit(self.letter_multiplier)]
    }
}

// A rows x cols grid, exactly one Cell per position, stored row-major.
// The board owns the bag its tiles came from.
#[derive(Clone, Debug)]
pub struct Board {
    dim: matrix::Dim,
    cells: Box<[Cell]>,
    bag: bag::Bag,
}

fn parse_multiplier(c: u8, token: &str) -> error::Returns<i8> {
    match c {
        b'.' => Ok(1),
        b'1'..=b'3' => Ok((c - b'0') as i8),
        _ => {
            return_error!(format!("invalid multiplier in {:?}", token));
        }
    }
}

impl Board {
    // An empty board with the configured premium squares and a full bag.
    pub fn new(game_config: &game_config::GameConfig) -> Board {
        let board_layout = game_config.board_layout();
        let dim = board_layout.dim();
        let cells = dim
            .positions()
            .map(|pos| {
                let premium = board_layout.premium_at(pos.y, pos.x);
                Cell {
                    word_multiplier: premium.word_multiplier,
                    letter_multiplier: premium.letter_multiplier,
                    ..Cell::new(pos)
                }
            })
            .collect();
        Board {
            dim,
            cells,
            bag: bag::Bag::new(game_config.alphabet()),
        }
    }

    // Parses the dimension line followed by the rows.
    pub fn from_text(game_config: &game_config::GameConfig, text: &str) -> error::Returns<Board> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let size = match lines.next() {
            Some(line) => parse_size(line)?,
            None => {
                return_error!("board text is empty".into());
            }
        };
        let rows = lines.by_ref().take(size as usize).collect::<Vec<_>>();
        if lines.next().is_some() {
            return_error!(format!("board text has more than {} rows", size));
        }
        Board::from_rows(game_config, size, &rows)
    }

    pub fn from_rows(
        game_config: &game_config::GameConfig,
        size: i8,
        rows: &[&str],
    ) -> error::Returns<Board> {
        if rows.len() != size as usize {
            return_error!(format!("board: need {} rows, found {} rows", size, rows.len()));
        }
        let dim = matrix::Dim {
            rows: size,
            cols: size,
        };
        let mut bag = bag::Bag::new(game_config.alphabet());
        let mut cells = Vec::with_capacity(dim.len());
        for (row_num, row) in (0i8..).zip(rows.iter()) {
            let tokens = row.split_whitespace().collect::<Vec<_>>();
            if tokens.len() != size as usize {
                return_error!(format!(
                    "board row {} (0-based): need {} cols, found {} cols",
                    row_num,
                    size,
                    tokens.len()
                ));
            }
            for (col_num, token) in (0i8..).zip(tokens) {
                let mut cell = Cell::new(matrix::Pos::new(col_num, row_num));
                match token.as_bytes() {
                    &[w, l] => {
                        cell.word_multiplier = parse_multiplier(w, token)?;
                        cell.letter_multiplier = parse_multiplier(l, token)?;
                    }
                    &[c] if c.is_ascii_alphabetic() => match bag.take_letter(c as char) {
                        Some(tile) => cell.tile = Some(tile),
                        None => {
                            return_error!(format!(
                                "board row {} col {} (0-based): bag has no tile for {:?}",
                                row_num, col_num, token
                            ));
                        }
                    },
                    _ => {
                        return_error!(format!(
                            "board row {} col {} (0-based): invalid token {:?}",
                            row_num, col_num, token
                        ));
                    }
                }
                cells.push(cell);
            }
        }
        Ok(Board {
            dim,
            cells: cells.into_boxed_slice(),
            bag,
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // Panics for a position off the board.
    #[inline(always)]
    pub fn cell(&self, pos: matrix::Pos) -> &Cell {
        assert!(self.dim.contains(pos), "{:?} is off the board", pos);
        &self.cells[self.dim.at(pos)]
    }

    #[inline(always)]
    pub fn cell_mut(&mut self, pos: matrix::Pos) -> &mut Cell {
        assert!(self.dim.contains(pos), "{:?} is off the board", pos);
        &mut self.cells[self.dim.at(pos)]
    }

    pub fn cell_at(&self, x: i8, y: i8) -> Option<&Cell> {
        let pos = matrix::Pos::new(x, y);
        if self.dim.contains(pos) {
            Some(&self.cells[self.dim.at(pos)])
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn tile_at(&self, pos: matrix::Pos) -> Option<tile::Tile> {
        self.cell(pos).tile
    }

    #[inline(always)]
    pub fn has_tile(&self, pos: matrix::Pos) -> bool {
        self.cell(pos).has_tile()
    }

    #[inline(always)]
    pub fn neighbor_pos(&self, pos: matrix::Pos, direction: matrix::Direction) -> Option<matrix::Pos> {
        self.dim.step(pos, direction)
    }

    pub fn neighbor(&self, cell: &Cell, direction: matrix::Direction) -> Option<&Cell> {
        self.neighbor_pos(cell.pos, direction).map(|pos| self.cell(pos))
    }

    // the neighbor, only if it holds a tile.
    #[inline(always)]
    pub fn occupied_neighbor(&self, pos: matrix::Pos, direction: matrix::Direction) -> Option<matrix::Pos> {
        self.neighbor_pos(pos, direction).filter(|&next| self.has_tile(next))
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(Cell::has_tile)
    }

    pub fn num_tiles(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_tile()).count()
    }

    pub fn center(&self) -> matrix::Pos {
        matrix::Pos::new((self.dim.cols - 1) / 2, (self.dim.rows - 1) / 2)
    }

    // Empty cells next to a tile, row-major, no repeats.
    pub fn anchors(&self) -> Vec<matrix::Pos> {
        self.cells
            .iter()
            .filter(|cell| {
                !cell.has_tile()
                    && matrix::Direction::ALL
                        .iter()
                        .any(|&d| self.occupied_neighbor(cell.pos, d).is_some())
            })
            .map(|cell| cell.pos)
            .collect()
    }

    pub fn place(&mut self, pos: matrix::Pos, tile: tile::Tile) {
        let cell = self.cell_mut(pos);
        assert!(cell.tile.is_none(), "{:?} already has a tile", pos);
        cell.tile = Some(tile);
    }

    pub fn consume_multipliers(&mut self, pos: matrix::Pos) {
        let cell = self.cell_mut(pos);
        cell.word_multiplier = 1;
        cell.letter_multiplier = 1;
    }

    #[inline(always)]
    pub fn bag(&self) -> &bag::Bag {
        &self.bag
    }

    #[inline(always)]
    pub fn bag_mut(&mut self) -> &mut bag::Bag {
        &mut self.bag
    }

    // Independent deep copy, including its own bag.
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    // Rows of space-separated tokens. Tiles show their letter, empty cells
    // show word then letter multiplier with '.' for 1.
    pub fn render(&self) -> String {
        let mut s = String::with_capacity(self.cells.len() * 3);
        for cell in self.cells.iter() {
            match cell.tile {
                Some(tile) => {
                    s.push(' ');
                    s.push(tile.label());
                }
                None => s.extend(cell.multiplier_token()),
            }
            s.push(if cell.x() == self.dim.cols - 1 { '\n' } else { ' ' });
        }
        s
    }

    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.dim.rows, self.render())
    }
}

impl PartialEq for Board {
    // grids only; the bags may differ in order.
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.cells == other.cells
    }
}

pub fn parse_size(line: &str) -> error::Returns<i8> {
    let size = line
        .trim()
        .parse::<i8>()
        .map_err(|e| error::new(format!("bad board size {:?}: {}", line.trim(), e)))?;
    // columns are labelled a to z.
    if !(1..=26).contains(&size) {
        return_error!(format!("bad board size {}, need 1 to 26", size));
    }
    Ok(size)
}
