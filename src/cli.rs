use crate::solver::DEFAULT_MAX_LENGTH;
use clap::Parser;
use clap::builder::TypedValueParser;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_GRID_FILE: &str = "input.txt";
pub const DEFAULT_DICTIONARY_FILE: &str = "Dictionary.txt";
const APP_DIR: &str = "word-grid-solver";

/// Finds every dictionary word reachable by orthogonal walks through a letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the grid file (rows like `| A G O I C|`)
    #[arg(short = 'i', long = "input", default_value = DEFAULT_GRID_FILE)]
    pub grid_path: PathBuf,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Longest word to look for
    #[arg(
        short = 'm',
        long = "max-length",
        default_value_t = DEFAULT_MAX_LENGTH,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub max_length: usize,

    /// Stop after this many results
    #[arg(short = 'n', long = "limit")]
    pub limit: Option<usize>,

    /// Print each word only once
    #[arg(short = 'u', long = "unique")]
    pub unique: bool,

    /// Print only the number of results
    #[arg(short = 'c', long = "count")]
    pub count: bool,

    /// Enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Picks the dictionary file: the explicit path if given, otherwise
/// `Dictionary.txt` in the working directory, otherwise the copy in the
/// user's data directory. Falls back to the working-directory name so the
/// error message points somewhere sensible.
#[must_use]
pub fn resolve_dictionary_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(DEFAULT_DICTIONARY_FILE);
    if local.is_file() {
        return local;
    }

    if let Some(data) = data_dictionary_path()
        && data.is_file()
    {
        return data;
    }

    local
}

fn data_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(DEFAULT_DICTIONARY_FILE))
}

/// Writes results one per line and returns how many were written.
pub fn write_words<W, I>(out: &mut W, words: I, unique: bool, count_only: bool) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut written = 0;
    for word in words {
        if unique && !seen.insert(word.clone()) {
            continue;
        }
        if !count_only {
            writeln!(out, "{word}")?;
        }
        written += 1;
    }
    if count_only {
        writeln!(out, "{written}")?;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["word-grid-solver"]).unwrap();
        assert_eq!(cli.grid_path, PathBuf::from("input.txt"));
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.max_length, 10);
        assert_eq!(cli.limit, None);
        assert!(!cli.unique);
        assert!(!cli.count);
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "word-grid-solver",
            "-i",
            "grid.txt",
            "-d",
            "words.txt",
            "-m",
            "6",
            "-n",
            "20",
            "-u",
            "-c",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.grid_path, PathBuf::from("grid.txt"));
        assert_eq!(cli.dictionary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.max_length, 6);
        assert_eq!(cli.limit, Some(20));
        assert!(cli.unique);
        assert!(cli.count);
        assert!(cli.debug);
    }

    #[test]
    fn test_parse_rejects_zero_max_length() {
        assert!(Cli::try_parse_from(["word-grid-solver", "-m", "0"]).is_err());
    }

    #[test]
    fn test_explicit_dictionary_path_wins() {
        let path = resolve_dictionary_path(Some(Path::new("/tmp/custom.txt")));
        assert_eq!(path, PathBuf::from("/tmp/custom.txt"));
    }

    #[test]
    fn test_write_words_keeps_duplicates() {
        let mut out = Vec::new();
        let n = write_words(&mut out, words(&["AA", "TEN", "AA"]), false, false).unwrap();
        assert_eq!(n, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "AA\nTEN\nAA\n");
    }

    #[test]
    fn test_write_words_unique() {
        let mut out = Vec::new();
        let n = write_words(&mut out, words(&["AA", "TEN", "AA"]), true, false).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "AA\nTEN\n");
    }

    #[test]
    fn test_write_words_count_only() {
        let mut out = Vec::new();
        let n = write_words(&mut out, words(&["AA", "TEN", "AA"]), true, true).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    }
}
