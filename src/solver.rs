//! Exhaustive word search over a letter grid.
//!
//! A walk starts on any cell and at each step either stays where it is or
//! moves to an orthogonal neighbour. Cells may be revisited any number of
//! times, so `max_length` is the only thing bounding the search. Every prefix
//! whose lower-cased letters are in the dictionary is emitted, and the walk
//! keeps extending past it.
//!
//! Results come out in recursive pre-order: starting cells in row-major
//! order, then for each step the word itself, followed by the stay, left,
//! right, up and down subtrees.

use crate::debug_log;
use crate::dictionary::WordSet;
use crate::grid::{Grid, Position};
use std::ops::ControlFlow;

pub const DEFAULT_MAX_LENGTH: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Inclusive upper bound on the length of a candidate word.
    pub max_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// A pending branch: the letters walked so far and where the walk stands.
#[derive(Debug)]
struct Frame {
    word: String,
    len: usize,
    pos: Position,
}

/// Lazy iterator over every word reachable in a grid.
///
/// Each call to `next` only does the work needed to reach the next match, so
/// dropping the iterator early stops the search.
pub struct WordSearch<'a, D: ?Sized> {
    grid: &'a Grid,
    dictionary: &'a D,
    max_length: usize,
    start_index: usize,
    stack: Vec<Frame>,
    lowered: String,
}

impl<'a, D: WordSet + ?Sized> WordSearch<'a, D> {
    pub fn new(grid: &'a Grid, dictionary: &'a D, config: SearchConfig) -> Self {
        Self {
            grid,
            dictionary,
            max_length: config.max_length,
            start_index: 0,
            stack: Vec::new(),
            lowered: String::new(),
        }
    }

    /// Next starting cell in row-major order.
    fn next_start(&mut self) -> Option<Position> {
        let cols = self.grid.cols();
        if self.start_index >= self.grid.rows() * cols {
            return None;
        }
        let pos = Position::new(self.start_index / cols, self.start_index % cols);
        self.start_index += 1;
        Some(pos)
    }

    fn push_start(&mut self, pos: Position) {
        debug_log!("Starting walk at ({}, {})", pos.row, pos.col);
        self.stack.push(Frame {
            word: self.grid.letter(pos).to_string(),
            len: 1,
            pos,
        });
    }

    /// Queues the children of `frame` so they pop as stay, left, right, up,
    /// down.
    fn push_children(&mut self, frame: &Frame) {
        // Children would be abandoned on arrival anyway.
        if frame.len >= self.max_length {
            return;
        }

        let mut moves = [frame.pos; 5];
        let mut count = 1;
        for next in self.grid.neighbors(frame.pos) {
            moves[count] = next;
            count += 1;
        }

        for &pos in moves[..count].iter().rev() {
            let mut word = String::with_capacity(frame.word.len() + 1);
            word.push_str(&frame.word);
            word.push(self.grid.letter(pos));
            self.stack.push(Frame {
                word,
                len: frame.len + 1,
                pos,
            });
        }
    }

    fn is_word(&mut self, word: &str) -> bool {
        self.lowered.clear();
        self.lowered.extend(word.chars().flat_map(char::to_lowercase));
        self.dictionary.contains_word(&self.lowered)
    }
}

impl<D: WordSet + ?Sized> Iterator for WordSearch<'_, D> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = match self.stack.pop() {
                Some(frame) => frame,
                None => {
                    let start = self.next_start()?;
                    self.push_start(start);
                    continue;
                }
            };

            if frame.len > self.max_length {
                continue;
            }

            self.push_children(&frame);

            if self.is_word(&frame.word) {
                return Some(frame.word);
            }
        }
    }
}

/// Searches `grid` for every word in `dictionary` of at most `max_length`
/// letters.
///
/// The returned iterator is lazy; see [`WordSearch`].
pub fn search<'a, D: WordSet + ?Sized>(
    grid: &'a Grid,
    dictionary: &'a D,
    max_length: usize,
) -> WordSearch<'a, D> {
    WordSearch::new(grid, dictionary, SearchConfig { max_length })
}

/// Visitor form of [`search`]. Stops as soon as `visit` returns
/// `ControlFlow::Break`.
pub fn search_with<D, F>(grid: &Grid, dictionary: &D, max_length: usize, mut visit: F)
where
    D: WordSet + ?Sized,
    F: FnMut(&str) -> ControlFlow<()>,
{
    for word in search(grid, dictionary, max_length) {
        if visit(&word).is_break() {
            return;
        }
    }
}
