use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::Chars,
};

use anyhow::{Context, Result};

use crate::error::GameError;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Trie {
    // few children per node; linear scan over a Vec
    next: Vec<(char, Box<Trie>)>,
    terminal: bool,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            next: Vec::new(),
            terminal: false,
        }
    }

    /// Reads one word per line. Blank lines and entries with non-alphabetic
    /// characters are skipped; everything else is lowercased.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open dictionary {}", path.display()))?;
        let mut result = Trie::new();
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("failed to read {}", path.display()))?;
            result.insert_normalized(&line);
        }
        Ok(result)
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = self;
        for c in word.chars() {
            let pos = match node.next.iter().position(|(ch, _)| *ch == c) {
                Some(pos) => pos,
                None => {
                    node.next.push((c, Box::new(Trie::new())));
                    node.next.len() - 1
                }
            };
            node = node.next[pos].1.as_mut();
        }
        node.terminal = true;
    }

    fn insert_normalized(&mut self, raw: &str) {
        let word = raw.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_alphabetic()) {
            return;
        }
        self.insert(&word.to_lowercase());
    }

    /// Entry node for traversal.
    pub fn root(&self) -> &Trie {
        self
    }

    pub fn child_for(&self, c: char) -> Result<&Trie, GameError> {
        self.next
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, child)| child.as_ref())
            .ok_or(GameError::NoSuchPrefix(c))
    }

    pub fn child_for_mut(&mut self, c: char) -> Result<&mut Trie, GameError> {
        self.next
            .iter_mut()
            .find(|(ch, _)| *ch == c)
            .map(|(_, child)| child.as_mut())
            .ok_or(GameError::NoSuchPrefix(c))
    }

    pub fn is_terminal_word(&self) -> bool {
        self.terminal
    }

    /// Consumes the terminal flag so the word at this node is reported once.
    pub fn clear_terminal(&mut self) {
        self.terminal = false;
    }

    fn isearch(&self, word: &mut Chars) -> bool {
        match word.next() {
            Some(c) => match self.child_for(c) {
                Ok(child) => child.isearch(word),
                Err(_) => false,
            },
            None => self.terminal,
        }
    }

    pub fn search(&self, word: &str) -> bool {
        self.isearch(&mut word.chars())
    }

    fn ihas_prefix(&self, prefix: &mut Chars) -> bool {
        match prefix.next() {
            Some(c) => match self.child_for(c) {
                Ok(child) => child.ihas_prefix(prefix),
                Err(_) => false,
            },
            None => true, // Empty prefix always exists
        }
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.ihas_prefix(&mut prefix.chars())
    }

    pub fn word_count(&self) -> usize {
        let below: usize = self.next.iter().map(|(_, child)| child.word_count()).sum();
        below + usize::from(self.terminal)
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty() && !self.terminal
    }
}

impl From<Vec<&str>> for Trie {
    fn from(words: Vec<&str>) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert_normalized(word)
        }

        result
    }
}

impl From<Vec<String>> for Trie {
    fn from(words: Vec<String>) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert_normalized(&word)
        }

        result
    }
}

impl From<String> for Trie {
    fn from(text: String) -> Self {
        let mut result = Trie::new();
        for word in text.lines() {
            result.insert_normalized(word);
        }
        result
    }
}
