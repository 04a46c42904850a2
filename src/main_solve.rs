// Copyright (C) 2020-2025 Andy Kurnia.

use std::io::Read;
use wordsmith::{board, error, game_config, movegen, play_scorer, rack, trie};

fn load_game_config(tiles_path: Option<&String>) -> error::Returns<game_config::GameConfig> {
    match tiles_path {
        Some(path) => {
            game_config::make_game_config_from_table(&std::fs::read_to_string(path)?)
        }
        None => Ok(game_config::make_common_english_game_config()),
    }
}

pub fn main() -> error::Returns<()> {
    error::init_logger(false);
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 3 {
        println!(
            "args:
  wordlist.txt [tiles.txt]
    reads from stdin: board size, board rows, tray; repeated."
        );
        return Ok(());
    }
    let trie = trie::Trie::from_word_list(&std::fs::read_to_string(&args[1])?)?;
    let game_config = load_game_config(args.get(2))?;
    let solver = movegen::Solver::new(&game_config, &trie);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());
    while let Some(size_line) = lines.next() {
        let size = board::parse_size(size_line)?;
        let rows = lines.by_ref().take(size as usize).collect::<Vec<_>>();
        let mut board = board::Board::from_rows(&game_config, size, &rows)?;
        let tray = match lines.next() {
            Some(line) => line,
            None => return Err("tray line missing after board".into()),
        };
        let mut rack = rack::Rack::take_from_bag(board.bag_mut(), tray)?;

        println!("Input Board:");
        print!("{}", board.render());
        println!("Tray: {}", rack);
        match solver.solve(&board, &mut rack) {
            Some(play) => {
                let score = play_scorer::commit_play(&mut board, &game_config, &play);
                println!(
                    "Solution {} has {} points",
                    play.spelled.to_ascii_uppercase(),
                    score
                );
                println!("Solution Board:");
                print!("{}", board.render());
            }
            None => {
                println!("No legal move");
            }
        }
        println!();
    }
    Ok(())
}
