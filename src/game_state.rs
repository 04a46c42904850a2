// Copyright (C) 2020-2025 Andy Kurnia.

use super::{board, error, game_config, movegen, play_scorer, rack};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct GamePlayer {
    pub score: i32,
    pub rack: rack::Rack,
    // set by GameState::finish.
    pub score_before_tally: Option<i32>,
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig,
    pub players: Box<[GamePlayer]>,
    // owns the bag.
    pub board: board::Board,
    pub turn: u8,
    // consecutive turns that scored nothing.
    pub zero_turns: u8,
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig) -> Self {
        Self::with_board(game_config, board::Board::new(game_config))
    }

    pub fn with_board(game_config: &'a game_config::GameConfig, board: board::Board) -> Self {
        Self {
            game_config,
            players: (0..game_config.num_players())
                .map(|_| GamePlayer {
                    score: 0,
                    rack: rack::Rack::new(),
                    score_before_tally: None,
                })
                .collect(),
            board,
            turn: 0,
            zero_turns: 0,
        }
    }

    pub fn deal(&mut self, rng: &mut dyn RngCore) {
        let rack_size = self.game_config.rack_size() as usize;
        let bag = self.board.bag_mut();
        bag.shuffle(rng);
        for player in self.players.iter_mut() {
            bag.replenish(rng, &mut player.rack, rack_size);
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    #[inline(always)]
    pub fn current_player_mut(&mut self) -> &mut GamePlayer {
        &mut self.players[self.turn as usize]
    }

    // The play's tiles must already be off the current rack (movegen's solve
    // does that). Returns the committed score.
    pub fn play(&mut self, rng: &mut dyn RngCore, play: &movegen::Play) -> i32 {
        let score = play_scorer::commit_play(&mut self.board, self.game_config, play);
        let rack_size = self.game_config.rack_size() as usize;
        let current_player = &mut self.players[self.turn as usize];
        current_player.score += score;
        self.board
            .bag_mut()
            .replenish(rng, &mut current_player.rack, rack_size);
        if score == 0 {
            self.zero_turns += 1;
        } else {
            self.zero_turns = 0;
        }
        score
    }

    // Swaps the given rack slots for fresh tiles. Nothing changes on error.
    pub fn exchange(&mut self, rng: &mut dyn RngCore, slots: &[usize]) -> error::Returns<()> {
        let current_player = &mut self.players[self.turn as usize];
        if let Some(&slot) = slots.iter().find(|&&slot| slot >= current_player.rack.len()) {
            return_error!(format!(
                "cannot exchange slot {} of rack {}",
                slot, current_player.rack
            ));
        }
        let mut sorted = slots.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != slots.len() {
            return_error!(format!("repeated slot in {:?}", slots));
        }
        let bag = self.board.bag_mut();
        // draw before returning, so the exchanged tiles cannot come back.
        let drawn = bag.draw(rng, slots.len())?;
        let returned = current_player.rack.remove_slots(slots);
        for tile in drawn {
            current_player.rack.push(tile);
        }
        bag.put_back(returned);
        self.zero_turns += 1;
        Ok(())
    }

    pub fn pass(&mut self) {
        self.zero_turns += 1;
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        self.turn -= num_players & -((self.turn >= num_players) as i8) as u8;
    }

    pub fn is_over(&self) -> bool {
        (self.board.bag().is_empty() && self.players.iter().any(|p| p.rack.is_empty()))
            || self.zero_turns >= self.game_config.num_zeros_to_end()
    }

    // End-of-game adjustment for tiles left on racks. Applies once.
    pub fn finish(&mut self) {
        if self.players.iter().any(|p| p.score_before_tally.is_some()) {
            return;
        }
        let total_left = self
            .players
            .iter()
            .map(|p| p.rack.face_value())
            .sum::<i32>();
        for player in self.players.iter_mut() {
            player.score_before_tally = Some(player.score);
            let left = player.rack.face_value();
            if player.rack.is_empty() {
                player.score += total_left;
            } else {
                player.score -= left;
            }
        }
        log::debug!(
            "final scores {:?}",
            self.players.iter().map(|p| p.score).collect::<Vec<_>>()
        );
    }

    // Highest score; on a tie, the higher score before the tally. None for a
    // draw.
    pub fn winner(&self) -> Option<usize> {
        let key = |p: &GamePlayer| (p.score, p.score_before_tally.unwrap_or(p.score));
        let best = self.players.iter().map(key).max()?;
        let mut winners = (0..self.players.len()).filter(|&i| key(&self.players[i]) == best);
        match (winners.next(), winners.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }
}
