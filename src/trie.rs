// Copyright (C) 2020-2025 Andy Kurnia.

use super::error;

const NUM_LETTERS: usize = 26;

#[derive(Clone)]
struct Node {
    // 0 means no arc; the root is never a child.
    arcs: [u32; NUM_LETTERS],
    accepts: bool,
}

impl Node {
    fn new() -> Node {
        Node {
            arcs: [0; NUM_LETTERS],
            accepts: false,
        }
    }
}

// Prefix tree over lowercase a-z, nodes kept in one arena with the root at 0.
#[derive(Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    num_words: usize,
}

#[inline(always)]
fn letter_index(c: u8) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c - b'a') as usize)
    } else {
        None
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::new()],
            num_words: 0,
        }
    }

    // One word per line, any case. Blank lines are skipped, and so are words
    // no tiles can spell (apostrophes, accents, digits).
    pub fn from_word_list(giant_string: &str) -> error::Returns<Trie> {
        let mut trie = Trie::new();
        let mut num_skipped = 0usize;
        for (line_num, line) in (1..).zip(giant_string.lines()) {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !word.bytes().all(|c| c.is_ascii_alphabetic()) {
                log::debug!("word list line {}: skipping {:?}", line_num, word);
                num_skipped += 1;
                continue;
            }
            if let Err(e) = trie.insert(word) {
                return_error!(format!("word list line {}: {}", line_num, e));
            }
        }
        if num_skipped > 0 {
            log::warn!("skipped {} unplayable words", num_skipped);
        }
        log::info!("dictionary has {} words", trie.len());
        Ok(trie)
    }

    pub fn from_words<'a, II: IntoIterator<Item = &'a str>>(words: II) -> error::Returns<Trie> {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word)?;
        }
        Ok(trie)
    }

    pub fn insert(&mut self, word: &str) -> error::Returns<()> {
        if word.is_empty() {
            return Ok(());
        }
        let mut p = 0usize;
        for &c in word.as_bytes() {
            let Some(idx) = letter_index(c) else {
                return_error!(format!("invalid letter in {:?}", word));
            };
            let next = self.nodes[p].arcs[idx];
            p = if next != 0 {
                next as usize
            } else {
                let q = self.nodes.len();
                self.nodes.push(Node::new());
                self.nodes[p].arcs[idx] = q as u32;
                q
            };
        }
        if !self.nodes[p].accepts {
            self.nodes[p].accepts = true;
            self.num_words += 1;
        }
        Ok(())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    #[inline(always)]
    pub fn seek(&self, p: u32, letter: u8) -> Option<u32> {
        let next = self.nodes[p as usize].arcs[letter_index(letter)?];
        if next != 0 { Some(next) } else { None }
    }

    fn walk(&self, s: &str) -> Option<u32> {
        s.bytes().try_fold(0u32, |p, c| self.seek(p, c))
    }

    pub fn is_word(&self, s: &str) -> bool {
        !s.is_empty() && self.walk(s).is_some_and(|p| self.nodes[p as usize].accepts)
    }

    // true for the empty string.
    pub fn is_viable_prefix(&self, s: &str) -> bool {
        self.walk(s).is_some()
    }

    // Letters that extend prefix to a viable prefix, in alphabetical order.
    // An unreachable prefix has no extensions.
    pub fn possible_next_letters(&self, prefix: &str) -> Vec<u8> {
        match self.walk(prefix) {
            Some(p) => (b'a'..=b'z')
                .zip(self.nodes[p as usize].arcs.iter())
                .filter(|&(_, &arc)| arc != 0)
                .map(|(c, _)| c)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Trie {
        Trie::from_word_list("cat\nCATS\n\ncar\n  at \nat\n").unwrap()
    }

    #[test]
    fn words_and_prefixes() {
        let trie = small();
        assert_eq!(trie.len(), 4);
        for word in ["cat", "cats", "car", "at"] {
            assert!(trie.is_word(word));
            assert!(trie.is_word(&word.to_uppercase()));
            for end in 1..=word.len() {
                assert!(trie.is_viable_prefix(&word[..end]));
            }
        }
        assert!(!trie.is_word("ca"));
        assert!(!trie.is_word(""));
        assert!(!trie.is_word("dog"));
        assert!(!trie.is_word("c*t"));
        assert!(trie.is_viable_prefix(""));
        assert!(trie.is_viable_prefix("CA"));
        assert!(!trie.is_viable_prefix("cx"));
    }

    #[test]
    fn next_letters() {
        let trie = small();
        assert_eq!(trie.possible_next_letters(""), b"ac".to_vec());
        assert_eq!(trie.possible_next_letters("ca"), b"rt".to_vec());
        assert_eq!(trie.possible_next_letters("Cat"), b"s".to_vec());
        assert!(trie.possible_next_letters("cats").is_empty());
        assert!(trie.possible_next_letters("dog").is_empty());
    }

    #[test]
    fn unplayable_words_are_skipped_in_lists() {
        let trie = Trie::from_word_list("cat\ncat's\ncafé\n42\ncats\n").unwrap();
        assert_eq!(trie.len(), 2);
        assert!(trie.is_word("cat"));
        assert!(trie.is_word("cats"));
        assert!(!trie.is_viable_prefix("cat'"));
    }

    #[test]
    fn bad_words_are_rejected() {
        assert!(Trie::new().insert("don't").is_err());
        assert!(Trie::from_words(["cat", "café"]).is_err());
        assert!(Trie::new().insert("café").is_err());
        let mut trie = Trie::new();
        trie.insert("").unwrap();
        assert!(trie.is_empty());
    }
}
