// Copyright (C) 2020-2025 Andy Kurnia.

use wordsmith::{board, display, error, game_config, movegen, play_scorer, rack, trie};

static HELP: &str = "commands:
  help                      this
  exit                      quit
  source file               run commands from file
  dict wordlist.txt         load a word list
  tiles tiles.txt           load a tile table (starts a new board)
  left full|restricted      how far placements may start before an anchor
  new                       empty standard board
  load board.txt            board in the text format
  rack letters              set the rack ('*' for a blank)
  solve                     find the best play
  commit                    put the last solved play on the board
  print                     show board and rack
  text                      show board in the text format";

struct Shell {
    game_config: game_config::GameConfig,
    trie: Option<trie::Trie>,
    board: board::Board,
    rack: rack::Rack,
    solved: Option<movegen::Play>,
}

impl Shell {
    fn new() -> Self {
        let game_config = game_config::make_common_english_game_config();
        let board = board::Board::new(&game_config);
        Self {
            game_config,
            trie: None,
            board,
            rack: rack::Rack::new(),
            solved: None,
        }
    }

    fn set_board(&mut self, board: board::Board) {
        self.board = board;
        self.rack = rack::Rack::new();
        self.solved = None;
    }

    fn print(&self) {
        display::print_board(&self.board);
        println!("rack: {}, bag: {} tiles", self.rack, self.board.bag().len());
    }

    fn handle(&mut self, strings: &[String]) -> error::Returns<()> {
        let arg = |i: usize| match strings.get(i) {
            Some(s) => Ok(s.as_str()),
            None => Err(error::new(format!("{} needs another arg", strings[0]))),
        };
        match strings[0].as_str() {
            "dict" => {
                let trie = trie::Trie::from_word_list(&std::fs::read_to_string(arg(1)?)?)?;
                println!("{} words", trie.len());
                self.trie = Some(trie);
            }
            "tiles" => {
                self.game_config = game_config::make_game_config_from_table(
                    &std::fs::read_to_string(arg(1)?)?,
                )?
                .with_left_extension(self.game_config.left_extension());
                self.set_board(board::Board::new(&self.game_config));
            }
            "left" => {
                let left_extension = match arg(1)? {
                    "full" => game_config::LeftExtension::Full,
                    "restricted" => game_config::LeftExtension::Restricted,
                    s => {
                        wordsmith::return_error!(format!("invalid left extension {:?}", s));
                    }
                };
                let game_config = std::mem::replace(
                    &mut self.game_config,
                    game_config::make_common_english_game_config(),
                );
                self.game_config = game_config.with_left_extension(left_extension);
                self.solved = None;
            }
            "new" => {
                self.set_board(board::Board::new(&self.game_config));
                self.print();
            }
            "load" => {
                let board =
                    board::Board::from_text(&self.game_config, &std::fs::read_to_string(arg(1)?)?)?;
                self.set_board(board);
                self.print();
            }
            "rack" => {
                let old_tiles = std::mem::take(&mut self.rack);
                let bag = self.board.bag_mut();
                bag.put_back(old_tiles.tiles().iter().copied());
                self.rack = rack::Rack::take_from_bag(bag, arg(1)?)?;
                self.solved = None;
                println!("rack: {}", self.rack);
            }
            "solve" => {
                let Some(trie) = &self.trie else {
                    wordsmith::return_error!("no word list, try dict".into());
                };
                let solver = movegen::Solver::new(&self.game_config, trie);
                self.solved = solver.best_play(&self.board, &self.rack);
                match &self.solved {
                    Some(play) => println!("{}", play),
                    None => println!("no legal move"),
                }
            }
            "commit" => {
                let Some(play) = self.solved.take() else {
                    wordsmith::return_error!("nothing solved".into());
                };
                self.rack.remove_slots(&play.rack_slots());
                let score = play_scorer::commit_play(&mut self.board, &self.game_config, &play);
                println!("{} scores {}", play.spelled, score);
                self.print();
            }
            "print" => {
                self.print();
            }
            "text" => {
                print!("{}", self.board.to_text());
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(())
    }
}

pub fn main() -> error::Returns<()> {
    error::init_logger(false);
    let mut shell = Shell::new();
    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "help" => {
                                println!("{}", HELP);
                            }
                            "exit" => {
                                break;
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                if let Err(err) = shell.handle(&strings) {
                                    println!("{}", err);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
