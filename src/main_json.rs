// Copyright (C) 2020-2025 Andy Kurnia.

use std::io::Read;
use wordsmith::{board, display, error, game_config, movegen, rack, trie};

// wordlist: path to one word per line.
// tiles: optional path to a tile table ("letter count points" lines).
// board: one string per row, in the board text format
//   ("3." triple word, ".2" double letter, "c" a tile, "C" a blank as c).
// rack: letters, '*' for a blank.
#[derive(serde::Deserialize)]
struct Question {
    wordlist: String,
    #[serde(default)]
    tiles: Option<String>,
    board: Vec<String>,
    rack: String,
}

pub fn main() -> error::Returns<()> {
    error::init_logger(false);
    let mut data = String::new();
    match std::env::args().nth(1) {
        Some(path) => data = std::fs::read_to_string(path)?,
        None => {
            std::io::stdin().read_to_string(&mut data)?;
        }
    }
    let question = serde_json::from_str::<Question>(&data)?;

    let trie = trie::Trie::from_word_list(&std::fs::read_to_string(&question.wordlist)?)?;
    let game_config = match &question.tiles {
        Some(path) => game_config::make_game_config_from_table(&std::fs::read_to_string(path)?)?,
        None => game_config::make_common_english_game_config(),
    };
    let size = match i8::try_from(question.board.len()) {
        Ok(size) if size > 0 => size,
        _ => {
            wordsmith::return_error!(format!("invalid board of {} rows", question.board.len()));
        }
    };
    let rows = question.board.iter().map(|s| s.as_str()).collect::<Vec<_>>();
    let mut board = board::Board::from_rows(&game_config, size, &rows)?;
    let rack = rack::Rack::take_from_bag(board.bag_mut(), &question.rack)?;
    display::print_board(&board);

    let solver = movegen::Solver::new(&game_config, &trie);
    let ret = match solver.best_play(&board, &rack) {
        Some(play) => {
            let first = play.word[0];
            // placed: row and col are 0-based, blank is true for a blank tile.
            let placed = play
                .placed
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "row": p.pos.y,
                        "col": p.pos.x,
                        "letter": (p.tile.letter() as char).to_string(),
                        "blank": p.tile.is_blank(),
                        "slot": p.rack_slot })
                })
                .collect::<Vec<_>>();
            serde_json::json!({
                "action": "play",
                "axis": play.axis,
                "row": first.y,
                "col": first.x,
                "word": play.spelled,
                "placed": placed,
                "bingo": play.is_bingo,
                "score": play.score,
                "notation": play.to_string() })
        }
        None => serde_json::json!({ "action": "none" }),
    };
    println!("{}", serde_json::to_string_pretty(&ret)?);

    Ok(())
}
