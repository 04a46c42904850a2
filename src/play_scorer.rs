// Copyright (C) 2020-2021 Andy Kurnia.

use super::{board, game_config, matrix, movegen};

#[inline(always)]
fn tile_score(board: &board::Board, pos: matrix::Pos) -> i32 {
    match board.tile_at(pos) {
        Some(tile) => tile.score(),
        None => panic!("no tile to score at {:?}", pos),
    }
}

// Letter values times letter multipliers, times every word multiplier.
pub fn main_word_score(board: &board::Board, word: &[matrix::Pos]) -> i32 {
    let mut word_multiplier = 1i32;
    let mut word_score = 0i32;
    for &pos in word {
        let cell = board.cell(pos);
        word_score += tile_score(board, pos) * cell.letter_multiplier as i32;
        word_multiplier *= cell.word_multiplier as i32;
    }
    word_score * word_multiplier
}

// For each newly placed tile touching a perpendicular neighbor, its own
// letter value (with letter multiplier) counts once, plus the face value of
// every tile in the perpendicular runs on either side. Cross words get no
// word multiplier.
pub fn cross_word_score(
    board: &board::Board,
    axis: matrix::Axis,
    placed: &[matrix::Pos],
    word: &[matrix::Pos],
) -> i32 {
    let perpendicular = axis.perpendicular();
    let mut cross_score = 0i32;
    for &pos in placed {
        let mut added_same_tile = false;
        for direction in [perpendicular.backward(), perpendicular.forward()] {
            let mut next = board.occupied_neighbor(pos, direction);
            if next.is_some() && !added_same_tile {
                cross_score += tile_score(board, pos) * board.cell(pos).letter_multiplier as i32;
                added_same_tile = true;
            }
            while let Some(p) = next {
                if word.contains(&p) {
                    break;
                }
                cross_score += tile_score(board, p);
                next = board.occupied_neighbor(p, direction);
            }
        }
    }
    cross_score
}

// Score of a placement whose tiles are all on the board. Leaves the board alone.
pub fn compute_score(
    board: &board::Board,
    game_config: &game_config::GameConfig,
    word: &[matrix::Pos],
    axis: matrix::Axis,
    placed: &[matrix::Pos],
    is_bingo: bool,
) -> i32 {
    main_word_score(board, word)
        + game_config.bingo_bonus(is_bingo)
        + cross_word_score(board, axis, placed, word)
}

// As compute_score, then resets every scored square's multipliers to 1.
pub fn score_placement(
    board: &mut board::Board,
    game_config: &game_config::GameConfig,
    word: &[matrix::Pos],
    axis: matrix::Axis,
    placed: &[matrix::Pos],
    is_bingo: bool,
) -> i32 {
    let score = compute_score(board, game_config, word, axis, placed, is_bingo);
    for &pos in word {
        board.consume_multipliers(pos);
    }
    score
}

// Puts the play's tiles on the board and scores it, consuming multipliers.
pub fn commit_play(
    board: &mut board::Board,
    game_config: &game_config::GameConfig,
    play: &movegen::Play,
) -> i32 {
    for placement in play.placed.iter() {
        board.place(placement.pos, placement.tile);
    }
    let placed = play.placed.iter().map(|p| p.pos).collect::<Vec<_>>();
    let score = score_placement(
        board,
        game_config,
        &play.word,
        play.axis,
        &placed,
        play.is_bingo,
    );
    if score != play.score {
        log::warn!(
            "{} scored {} on commit, {} when found",
            play.spelled,
            score,
            play.score
        );
    }
    score
}

// The best candidate of one search.
#[derive(Default)]
pub struct BestPlay {
    best: Option<movegen::Play>,
}

impl BestPlay {
    pub fn new() -> Self {
        Self { best: None }
    }

    // Strictly higher score wins; an equal score wins with a smaller word.
    pub fn beats(&self, score: i32, spelled: &str) -> bool {
        match &self.best {
            None => true,
            Some(best) => {
                score > best.score || (score == best.score && spelled < best.spelled.as_str())
            }
        }
    }

    pub fn check_score<F: FnOnce() -> movegen::Play>(
        &mut self,
        score: i32,
        spelled: &str,
        make_play: F,
    ) -> bool {
        if self.beats(score, spelled) {
            let play = make_play();
            log::debug!("new best {} {} {:?}", play.spelled, play.score, play.axis);
            self.best = Some(play);
            true
        } else {
            false
        }
    }

    pub fn into_play(self) -> Option<movegen::Play> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::make_common_english_game_config;
    use crate::matrix::{Axis, Pos};
    use crate::tile::Tile;

    fn board(text: &str) -> board::Board {
        board::Board::from_text(&make_common_english_game_config(), text).unwrap()
    }

    fn row(y: i8, xs: std::ops::Range<i8>) -> Vec<Pos> {
        xs.map(|x| Pos::new(x, y)).collect()
    }

    #[test]
    fn main_word_multipliers() {
        let game_config = make_common_english_game_config();
        // c on DL, a plain, t under a double word.
        let mut b = board("3\n.2 .. 2.\n.. .. ..\n.. .. ..\n");
        let word = row(0, 0..3);
        for (&pos, letter) in word.iter().zip(*b"cat") {
            b.place(pos, Tile::new(letter, game_config.alphabet().score(letter).unwrap()));
        }
        assert_eq!(main_word_score(&b, &word), (3 * 2 + 1 + 1) * 2);
        assert_eq!(
            compute_score(&b, &game_config, &word, Axis::Across, &word, true),
            16 + 50
        );
        let mut copy = b.duplicate();
        assert_eq!(
            compute_score(&copy, &game_config, &word, Axis::Across, &word, false),
            compute_score(&b, &game_config, &word, Axis::Across, &word, false)
        );
        assert_eq!(
            score_placement(&mut copy, &game_config, &word, Axis::Across, &word, false),
            16
        );
        for &pos in &word {
            assert_eq!(copy.cell(pos).word_multiplier, 1);
            assert_eq!(copy.cell(pos).letter_multiplier, 1);
        }
        assert_eq!(main_word_score(&copy, &word), 5);
        assert_eq!(b.cell(Pos::new(0, 0)).letter_multiplier, 2);
    }

    #[test]
    fn blanks_score_nothing() {
        let game_config = make_common_english_game_config();
        let mut b = board("2\n.3 3.\n.. ..\n");
        let word = row(0, 0..2);
        b.place(word[0], Tile::blank().assigned(b'q'));
        b.place(word[1], Tile::new(b'i', 1));
        assert_eq!(
            compute_score(&b, &game_config, &word, Axis::Across, &word, false),
            3
        );
    }

    #[test]
    fn cross_words_add_face_values() {
        // s dropped on a double letter between "at" above and "e" below.
        let mut b = board("4\n.. a .. ..\n.. t .. ..\n.. .2 .. ..\n.. e .. ..\n");
        let s = Pos::new(1, 2);
        b.place(s, Tile::new(b's', 1));
        assert_eq!(cross_word_score(&b, Axis::Across, &[s], &[s]), 2 + 1 + 1 + 1);
        // no perpendicular neighbors: nothing
        let lone = Pos::new(3, 0);
        b.place(lone, Tile::new(b'z', 10));
        assert_eq!(cross_word_score(&b, Axis::Across, &[lone], &[lone]), 0);
    }

    #[test]
    fn best_play_tie_break() {
        let make = |spelled: &str, score| movegen::Play {
            axis: Axis::Across,
            word: Box::new([]),
            placed: Box::new([]),
            spelled: spelled.to_string(),
            score,
            is_bingo: false,
        };
        let mut best = BestPlay::new();
        assert!(best.check_score(10, "dog", || make("dog", 10)));
        assert!(!best.check_score(9, "ant", || make("ant", 9)));
        assert!(!best.check_score(10, "dog", || make("dog", 10)));
        assert!(!best.check_score(10, "emu", || make("emu", 10)));
        assert!(best.check_score(10, "cat", || make("cat", 10)));
        assert!(best.check_score(11, "zoo", || make("zoo", 11)));
        assert_eq!(best.into_play().unwrap().spelled, "zoo");
    }
}
