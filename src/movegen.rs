// Copyright (C) 2020-2025 Andy Kurnia.

use super::{board, game_config, matrix, play_scorer, rack, tile, trie};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub pos: matrix::Pos,
    pub tile: tile::Tile,
    // index into the rack the search was given.
    pub rack_slot: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    pub axis: matrix::Axis,
    // every square of the main word, in reading order.
    pub word: Box<[matrix::Pos]>,
    // the squares this move fills.
    pub placed: Box<[Placement]>,
    // lowercase, blanks as their assigned letters.
    pub spelled: String,
    pub score: i32,
    pub is_bingo: bool,
}

impl Play {
    pub fn rack_slots(&self) -> Vec<usize> {
        self.placed.iter().map(|p| p.rack_slot).collect()
    }

    pub fn placed_at(&self, pos: matrix::Pos) -> Option<&Placement> {
        self.placed.iter().find(|p| p.pos == pos)
    }
}

impl std::fmt::Display for Play {
    // "8d BANDiTS 76" across, "d8 ..." down, played-through letters in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(&first) = self.word.first() {
            let col = (b'a' + first.x as u8) as char;
            match self.axis {
                matrix::Axis::Across => write!(f, "{}{} ", first.y + 1, col)?,
                matrix::Axis::Down => write!(f, "{}{} ", col, first.y + 1)?,
            }
        }
        let mut inside = false;
        for (&pos, c) in self.word.iter().zip(self.spelled.chars()) {
            match self.placed_at(pos) {
                Some(placement) => {
                    if inside {
                        write!(f, ")")?;
                        inside = false;
                    }
                    write!(f, "{}", placement.tile.display_label())?;
                }
                None => {
                    if !inside {
                        write!(f, "(")?;
                        inside = true;
                    }
                    write!(f, "{}", c.to_ascii_uppercase())?;
                }
            }
        }
        if inside {
            write!(f, ")")?;
        }
        write!(f, " {}", self.score)
    }
}

// The word formed across axis through pos must be valid, if pos has
// perpendicular neighbors at all. Panics if pos has no tile.
pub fn cross_check(
    trie: &trie::Trie,
    board: &board::Board,
    pos: matrix::Pos,
    axis: matrix::Axis,
) -> bool {
    let Some(tile) = board.tile_at(pos) else {
        panic!("cross check on empty square {:?}", pos);
    };
    let perpendicular = axis.perpendicular();
    let mut before = Vec::new();
    let mut p = pos;
    while let Some(q) = board.occupied_neighbor(p, perpendicular.backward()) {
        before.push(board.tile_at(q).map_or(b'?', |t| t.letter()));
        p = q;
    }
    let mut after = Vec::new();
    let mut p = pos;
    while let Some(q) = board.occupied_neighbor(p, perpendicular.forward()) {
        after.push(board.tile_at(q).map_or(b'?', |t| t.letter()));
        p = q;
    }
    if before.is_empty() && after.is_empty() {
        return true;
    }
    let mut word = String::with_capacity(before.len() + 1 + after.len());
    word.extend(before.iter().rev().map(|&c| c as char));
    word.push(tile.letter() as char);
    word.extend(after.iter().map(|&c| c as char));
    trie.is_word(&word)
}

// Word built so far from the start square. Each step makes a new one.
#[derive(Clone, Default)]
struct Partial {
    spelled: String,
    word: Vec<matrix::Pos>,
    placed: Vec<Placement>,
    used_slots: u32,
}

impl Partial {
    fn extended(&self, pos: matrix::Pos, letter: u8, placement: Option<Placement>) -> Partial {
        let mut next = self.clone();
        next.spelled.push(letter as char);
        next.word.push(pos);
        if let Some(placement) = placement {
            next.used_slots |= 1 << placement.rack_slot;
            next.placed.push(placement);
        }
        next
    }

    #[inline(always)]
    fn uses(&self, slot: usize) -> bool {
        self.used_slots & (1 << slot) != 0
    }
}

// Owned exclusively by one search. Tentative tiles go on board, never on
// the caller's board.
struct Env<'a> {
    game_config: &'a game_config::GameConfig,
    trie: &'a trie::Trie,
    board: board::Board,
    rack: rack::Rack,
    is_anchor: Box<[bool]>,
    axis: matrix::Axis,
    best: play_scorer::BestPlay,
}

fn is_anchored(env: &Env, word: &[matrix::Pos]) -> bool {
    let dim = env.board.dim();
    word.iter().any(|&pos| env.is_anchor[dim.at(pos)])
}

fn record(env: &mut Env, partial: &Partial) {
    if partial.word.len() < 2
        || partial.placed.is_empty()
        || !is_anchored(env, &partial.word)
        || !env.trie.is_word(&partial.spelled)
    {
        return;
    }
    // every placed tile passed its cross check when it was placed.
    let placed = partial.placed.iter().map(|p| p.pos).collect::<Vec<_>>();
    // the rack is empty afterwards.
    let is_bingo = partial.placed.len() == env.rack.len();
    let score = play_scorer::compute_score(
        &env.board,
        env.game_config,
        &partial.word,
        env.axis,
        &placed,
        is_bingo,
    );
    let axis = env.axis;
    env.best.check_score(score, &partial.spelled, || Play {
        axis,
        word: partial.word.clone().into_boxed_slice(),
        placed: partial.placed.clone().into_boxed_slice(),
        spelled: partial.spelled.clone(),
        score,
        is_bingo,
    });
}

// pos has just been filled, by the board or by the search.
fn visit(env: &mut Env, pos: matrix::Pos, partial: &Partial) {
    let next = env.board.neighbor_pos(pos, env.axis.forward());
    if next.is_none_or(|p| !env.board.has_tile(p)) {
        record(env, partial);
    }
    if let Some(p) = next {
        extend_right(env, p, partial);
    }
}

fn extend_right(env: &mut Env, pos: matrix::Pos, partial: &Partial) {
    if let Some(tile) = env.board.tile_at(pos) {
        let next = partial.extended(pos, tile.letter(), None);
        if env.trie.is_viable_prefix(&next.spelled) {
            visit(env, pos, &next);
        }
        return;
    }
    for slot in 0..env.rack.len() {
        if partial.uses(slot) {
            continue;
        }
        let rack_tile = env.rack.get(slot);
        // an identical free tile in an earlier slot already covered this.
        if (0..slot).any(|s| !partial.uses(s) && env.rack.get(s) == rack_tile) {
            continue;
        }
        let letters = if rack_tile.is_blank() {
            env.trie.possible_next_letters(&partial.spelled)
        } else {
            vec![rack_tile.letter()]
        };
        for letter in letters {
            let tile = if rack_tile.is_blank() {
                rack_tile.assigned(letter)
            } else {
                rack_tile
            };
            let next = partial.extended(
                pos,
                letter,
                Some(Placement {
                    pos,
                    tile,
                    rack_slot: slot,
                }),
            );
            if !env.trie.is_viable_prefix(&next.spelled) {
                continue;
            }
            env.board.cell_mut(pos).tile = Some(tile);
            if cross_check(env.trie, &env.board, pos, env.axis) {
                visit(env, pos, &next);
            }
            env.board.cell_mut(pos).tile = None;
        }
    }
}

// Where words through this anchor may start along axis.
fn start_squares(env: &Env, anchor: matrix::Pos) -> Vec<matrix::Pos> {
    let board = &env.board;
    let back = env.axis.backward();
    if let Some(mut p) = board.occupied_neighbor(anchor, back) {
        // the whole run of tiles before the anchor is part of the word.
        while let Some(q) = board.occupied_neighbor(p, back) {
            p = q;
        }
        return vec![p];
    }
    let max_before = match env.game_config.left_extension() {
        game_config::LeftExtension::Full => env.rack.len().saturating_sub(1),
        game_config::LeftExtension::Restricted => 1,
    };
    let mut starts = vec![anchor];
    let mut s = anchor;
    for _ in 0..max_before {
        let Some(p) = board.neighbor_pos(s, back) else {
            break;
        };
        // starting at p would leave the tile before it out of the word.
        if board.occupied_neighbor(p, back).is_some() {
            break;
        }
        starts.push(p);
        s = p;
    }
    starts
}

pub struct Solver<'a> {
    game_config: &'a game_config::GameConfig,
    trie: &'a trie::Trie,
}

impl<'a> Solver<'a> {
    pub fn new(game_config: &'a game_config::GameConfig, trie: &'a trie::Trie) -> Self {
        Self { game_config, trie }
    }

    // The board's anchors; the centre square alone on an empty board.
    pub fn anchors(&self, board: &board::Board) -> Vec<matrix::Pos> {
        if board.is_empty() {
            vec![board.center()]
        } else {
            board.anchors()
        }
    }

    // Highest scoring legal play, or None if there is none. Mutates nothing.
    pub fn best_play(&self, board: &board::Board, rack: &rack::Rack) -> Option<Play> {
        assert!(rack.len() <= 32, "rack of {} tiles is too large", rack.len());
        let anchors = self.anchors(board);
        log::debug!("{} anchors, rack {}", anchors.len(), rack);
        if rack.is_empty() {
            return None;
        }
        let dim = board.dim();
        let mut is_anchor = vec![false; dim.len()].into_boxed_slice();
        for &anchor in &anchors {
            is_anchor[dim.at(anchor)] = true;
        }
        let mut env = Env {
            game_config: self.game_config,
            trie: self.trie,
            board: board.duplicate(),
            rack: rack.duplicate(),
            is_anchor,
            axis: matrix::Axis::Across,
            best: play_scorer::BestPlay::new(),
        };
        for axis in matrix::Axis::BOTH {
            env.axis = axis;
            // the search from a start square does not depend on the anchor.
            let mut started = vec![false; dim.len()];
            for &anchor in &anchors {
                for start in start_squares(&env, anchor) {
                    if !std::mem::replace(&mut started[dim.at(start)], true) {
                        extend_right(&mut env, start, &Partial::default());
                    }
                }
            }
        }
        env.best.into_play()
    }

    // best_play, then takes the played tiles off the rack. The board is left
    // for the caller to commit (see play_scorer::commit_play).
    pub fn solve(&self, board: &board::Board, rack: &mut rack::Rack) -> Option<Play> {
        let play = self.best_play(board, rack);
        match &play {
            Some(play) => {
                rack.remove_slots(&play.rack_slots());
                log::info!("best play {}, leaving {}", play, rack);
            }
            None => {
                log::info!("no legal move for rack {}", rack);
            }
        }
        play
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::{LeftExtension, make_common_english_game_config};
    use crate::matrix::{Axis, Pos};

    fn setup(board_text: &str, words: &[&str]) -> (game_config::GameConfig, board::Board, trie::Trie) {
        let game_config = make_common_english_game_config();
        let board = board::Board::from_text(&game_config, board_text).unwrap();
        let trie = trie::Trie::from_words(words.iter().copied()).unwrap();
        (game_config, board, trie)
    }

    const CAT_5: &str = "5
.. .. .. .. ..
.. .. .. .. ..
.. c a t ..
.. .. .. .. ..
.. .. .. .. ..
";

    #[test]
    fn cross_check_reads_both_sides() {
        let (_, mut board, trie) = setup(CAT_5, &["cat", "ate", "at"]);
        let pos = Pos::new(2, 3);
        board.place(pos, tile::Tile::new(b'e', 1));
        // below the a, the down word is "ae"
        assert!(!cross_check(&trie, &board, pos, Axis::Across));
        // read along the down axis the perpendicular run is empty
        assert!(cross_check(&trie, &board, pos, Axis::Down));
        let pos = Pos::new(4, 2);
        board.place(pos, tile::Tile::new(b'e', 1));
        assert!(!cross_check(&trie, &board, pos, Axis::Down));
        let (_, mut board, _) = setup(CAT_5, &[]);
        board.place(Pos::new(2, 1), tile::Tile::new(b'x', 8));
        let trie = trie::Trie::from_words(["xa"]).unwrap();
        assert!(cross_check(&trie, &board, Pos::new(2, 1), Axis::Across));
    }

    #[test]
    #[should_panic]
    fn cross_check_needs_a_tile() {
        let (_, board, trie) = setup(CAT_5, &["cat"]);
        cross_check(&trie, &board, Pos::new(0, 0), Axis::Across);
    }

    #[test]
    fn empty_board_anchors_at_center() {
        let game_config = make_common_english_game_config();
        let trie = trie::Trie::new();
        let solver = Solver::new(&game_config, &trie);
        let board = board::Board::new(&game_config);
        assert_eq!(solver.anchors(&board), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn best_play_leaves_inputs_alone() {
        let (game_config, board, trie) = setup(CAT_5, &["cat", "cats"]);
        let rack = rack::Rack::take_from_bag(&mut board.bag().clone(), "s").unwrap();
        let before = board.render();
        let solver = Solver::new(&game_config, &trie);
        let play = solver.best_play(&board, &rack).unwrap();
        assert_eq!(play.spelled, "cats");
        // the only tile is used up, so the bonus applies
        assert!(play.is_bingo);
        assert_eq!(play.to_string(), "3b (CAT)S 56");
        assert_eq!(board.render(), before);
        assert_eq!(rack.len(), 1);
    }

    #[test]
    fn solve_removes_played_slots() {
        let (game_config, board, trie) = setup(CAT_5, &["cat", "cats"]);
        let mut rack = rack::Rack::from_tiles(vec![
            tile::Tile::new(b'q', 10),
            tile::Tile::blank(),
            tile::Tile::new(b'z', 10),
        ]);
        let solver = Solver::new(&game_config, &trie);
        let play = solver.solve(&board, &mut rack).unwrap();
        assert_eq!(play.spelled, "cats");
        assert_eq!(play.score, 5);
        assert_eq!(play.rack_slots(), vec![1]);
        assert!(play.placed[0].tile.is_blank());
        assert_eq!(play.to_string(), "3b (CAT)s 5");
        assert_eq!(rack.to_string(), "qz");
    }

    #[test]
    fn single_letters_are_not_words() {
        let (game_config, board, trie) = setup(CAT_5, &["a", "cat"]);
        let rack = rack::Rack::from_tiles(vec![tile::Tile::new(b'a', 1)]);
        let solver = Solver::new(&game_config, &trie);
        assert!(solver.best_play(&board, &rack).is_none());
        assert!(solver.best_play(&board, &rack::Rack::new()).is_none());
    }

    #[test]
    fn left_extension_policies() {
        // "cats" across the top row must start two squares before the anchor.
        let text = "7
.. .. .. .. .. s ..
.. .. .. .. .. .. ..
.. .. .. .. .. .. ..
.. .. .. .. .. .. ..
.. .. .. .. .. .. ..
.. .. .. .. .. .. ..
.. .. .. .. .. .. ..
";
        let (game_config, board, trie) = setup(text, &["cats"]);
        let rack = rack::Rack::from_tiles(
            b"cat"
                .iter()
                .map(|&c| tile::Tile::new(c, game_config.alphabet().score(c).unwrap()))
                .collect(),
        );
        let play = Solver::new(&game_config, &trie)
            .best_play(&board, &rack)
            .unwrap();
        assert_eq!(play.spelled, "cats");
        assert_eq!(play.word.first(), Some(&Pos::new(2, 0)));
        assert_eq!(play.score, 6 + 50);

        let restricted = game_config.with_left_extension(LeftExtension::Restricted);
        assert!(
            Solver::new(&restricted, &trie)
                .best_play(&board, &rack)
                .is_none()
        );
    }

    #[test]
    fn restricted_still_reaches_one_square_back() {
        let (game_config, board, trie) = setup(CAT_5, &["cat", "oat"]);
        let game_config = game_config.with_left_extension(LeftExtension::Restricted);
        // "oat" down column 3 ending on the t: o two above, a one above.
        let rack = rack::Rack::from_tiles(vec![tile::Tile::new(b'o', 1), tile::Tile::new(b'a', 1)]);
        let play = Solver::new(&game_config, &trie)
            .best_play(&board, &rack)
            .unwrap();
        assert_eq!(play.spelled, "oat");
        assert_eq!(play.axis, Axis::Down);
        assert_eq!(
            &*play.word,
            &[Pos::new(3, 0), Pos::new(3, 1), Pos::new(3, 2)]
        );
    }
}
