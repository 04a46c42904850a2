// Copyright (C) 2020-2025 Andy Kurnia.

use rand::prelude::*;
use wordsmith::{display, error, game_config, game_state, movegen, trie};

#[derive(serde::Serialize)]
struct MoveRow {
    game: usize,
    turn: usize,
    player: u8,
    rack: String,
    action: &'static str,
    play: String,
    score: i32,
    total: i32,
}

struct GameOutcome {
    game: usize,
    rows: Vec<MoveRow>,
    scores: Vec<i32>,
    winner: Option<usize>,
    final_board: String,
}

fn play_game(
    game_config: &game_config::GameConfig,
    trie: &trie::Trie,
    game: usize,
    seed: u64,
) -> GameOutcome {
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed.wrapping_add(game as u64));
    let solver = movegen::Solver::new(game_config, trie);
    let mut game_state = game_state::GameState::new(game_config);
    game_state.deal(&mut rng);
    let rack_size = game_config.rack_size() as usize;
    let mut rows = Vec::new();
    while !game_state.is_over() {
        let player = game_state.turn;
        let rack_before = game_state.current_player().rack.to_string();
        let mut rack = std::mem::take(&mut game_state.current_player_mut().rack);
        let found = solver.solve(&game_state.board, &mut rack);
        game_state.current_player_mut().rack = rack;
        let (action, play, score) = match found {
            Some(play) => {
                let score = game_state.play(&mut rng, &play);
                ("play", play.to_string(), score)
            }
            None => {
                // swap the whole rack when possible, otherwise pass.
                let slots = (0..game_state.current_player().rack.len()).collect::<Vec<_>>();
                if game_state.board.bag().len() >= rack_size
                    && game_state.exchange(&mut rng, &slots).is_ok()
                {
                    ("exchange", rack_before.clone(), 0)
                } else {
                    game_state.pass();
                    ("pass", String::new(), 0)
                }
            }
        };
        rows.push(MoveRow {
            game,
            turn: rows.len() + 1,
            player: player + 1,
            rack: rack_before,
            action,
            play,
            score,
            total: game_state.current_player().score,
        });
        game_state.next_turn();
    }
    game_state.finish();
    GameOutcome {
        game,
        rows,
        scores: game_state.players.iter().map(|p| p.score).collect(),
        winner: game_state.winner(),
        final_board: display::format_board(&game_state.board),
    }
}

#[tokio::main]
pub async fn main() -> error::Returns<()> {
    error::init_logger(false);
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        println!(
            "args:
  wordlist.txt [num_games [seed [moves.csv]]]
    computer plays itself, logging every move."
        );
        return Ok(());
    }
    let trie = std::sync::Arc::new(trie::Trie::from_word_list(&std::fs::read_to_string(
        &args[1],
    )?)?);
    let num_games = match args.get(2) {
        Some(s) => s.parse::<usize>()?,
        None => 1,
    };
    let seed = match args.get(3) {
        Some(s) => s.parse::<u64>()?,
        None => rand::rng().random(),
    };
    let csv_path = args.get(4).map_or("moves.csv", |s| s.as_str());
    let game_config = std::sync::Arc::new(game_config::make_common_english_game_config());

    let num_workers = num_cpus::get().min(num_games).max(1);
    log::info!(
        "{} games on {} workers, seed {}",
        num_games,
        num_workers,
        seed
    );
    let next_game = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let mut workers = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let game_config = std::sync::Arc::clone(&game_config);
        let trie = std::sync::Arc::clone(&trie);
        let next_game = std::sync::Arc::clone(&next_game);
        workers.push(tokio::task::spawn_blocking(move || {
            let mut outcomes = Vec::new();
            loop {
                let game = next_game.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                if game >= num_games {
                    break;
                }
                outcomes.push(play_game(&game_config, &trie, game, seed));
            }
            outcomes
        }));
    }
    let mut outcomes = Vec::with_capacity(num_games);
    for worker in workers {
        outcomes.extend(worker.await?);
    }
    outcomes.sort_unstable_by_key(|outcome| outcome.game);

    let mut csv_log = csv::Writer::from_path(csv_path)?;
    let mut wins = vec![0usize; game_config.num_players() as usize];
    let mut draws = 0usize;
    for outcome in &outcomes {
        for row in &outcome.rows {
            csv_log.serialize(row)?;
        }
        match outcome.winner {
            Some(p) => wins[p] += 1,
            None => draws += 1,
        }
        println!(
            "game {}: {} moves, scores {:?}, {}",
            outcome.game,
            outcome.rows.len(),
            outcome.scores,
            match outcome.winner {
                Some(p) => format!("player {} wins", p + 1),
                None => "draw".into(),
            }
        );
    }
    csv_log.flush()?;
    if let Some(last) = outcomes.last() {
        print!("{}", last.final_board);
    }
    println!("wins {:?}, draws {}, moves logged to {}", wins, draws, csv_path);
    Ok(())
}
