use crate::info_log;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Exact-match membership test over lowercase words.
pub trait WordSet {
    fn contains_word(&self, word: &str) -> bool;
}

/// Word list loaded once and shared read-only with every search.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary, lower-casing each word and dropping blanks.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSet for Dictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl WordSet for HashSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<T: WordSet + ?Sized> WordSet for &T {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    (!word.is_empty()).then(|| word.to_lowercase())
}

pub fn load_dictionary_from_str(data: &str) -> Dictionary {
    Dictionary::from_words(data.lines())
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = HashSet::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.insert(word);
        }
    }
    info_log!("Loaded {} dictionary words", words.len());
    Ok(Dictionary { words })
}
