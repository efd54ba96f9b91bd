//! Word frequency indexing built from three differently ordered [`Tree`]s.
//!
//! Words are normalized and counted in an alphabetical tree. Stop words are then removed, and the
//! survivors are copied into a tree ordered by descending frequency and another ordered by
//! descending length.
//!
//! # Examples
//!
//! ```
//! use wordtree::words::{Config, WordIndex};
//!
//! let config = Config {
//!     frequency_threshold: 1,
//!     ..Config::default()
//! };
//! let index = WordIndex::build(config, "The cat sat on the mat. The cat!".as_bytes()).unwrap();
//!
//! assert_eq!(index.total_words(), 8);
//! assert_eq!(index.unique_words(), 3);
//! assert_eq!(
//!     index.by_frequency().in_order().map(|t| t.word()).collect::<Vec<_>>(),
//!     vec!["cat"]
//! );
//! assert_eq!(index.by_length().minimum().map(|t| t.word()), Ok("cat"));
//! ```

use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, BufRead};

use log::{debug, info};

use crate::ordering::Comparator;
use crate::tree::Tree;
use crate::util::ideal_height;

/// Words too common to be worth counting.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "all", "am", "an", "and", "any", "are", "as", "at", "be", "been", "but", "by",
    "can", "cannot", "could", "did", "do", "does", "else", "for", "from", "get", "got", "had",
    "has", "have", "he", "her", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "like", "more", "me", "my", "no", "now", "not", "of", "on", "one", "or", "our", "out",
    "said", "say", "says", "she", "so", "some", "than", "that", "thats", "the", "their", "them",
    "then", "there", "these", "they", "this", "to", "too", "us", "upon", "was", "we", "were",
    "what", "with", "when", "where", "which", "while", "who", "whom", "why", "will", "you", "your",
    "up", "down", "left", "right", "man", "woman", "would", "should", "dont", "after", "before",
    "im", "men",
];

/// Lower-cases `raw` and strips everything that isn't an ASCII letter. Returns `None` when
/// nothing is left.
///
/// # Examples
///
/// ```
/// use wordtree::words::normalize;
///
/// assert_eq!(normalize("Don't!").as_deref(), Some("dont"));
/// assert_eq!(normalize("1984"), None);
/// ```
pub fn normalize(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect();
    (!word.is_empty()).then_some(word)
}

/// A word and how many times it has been seen.
///
/// Tokens compare by word alone, so a freshly made token finds the counted one already in an
/// alphabetical tree.
#[derive(Clone, Debug)]
pub struct Token {
    word: String,
    count: usize,
}

impl Token {
    /// A token seen once.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            count: 1,
        }
    }

    /// The normalized word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// How many times the word occurred.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The number of letters in the word.
    pub fn length(&self) -> usize {
        self.word.len()
    }

    /// Records one more occurrence.
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Alphabetical by word.
    pub fn alphabetical() -> Comparator<Token> {
        Comparator::natural()
    }

    /// Most frequent first. Words seen equally often are alphabetical.
    pub fn by_frequency_desc() -> Comparator<Token> {
        Comparator::new(|a: &Token, b: &Token| {
            b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
        })
    }

    /// Longest first. Words of equal length are alphabetical.
    pub fn by_length_desc() -> Comparator<Token> {
        Comparator::new(|a: &Token, b: &Token| {
            b.length()
                .cmp(&a.length())
                .then_with(|| a.word.cmp(&b.word))
        })
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.word.cmp(&other.word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}

/// Tunables for building a [`WordIndex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// A word has to occur more than this many times to enter the frequency tree.
    pub frequency_threshold: usize,
    /// A word has to be longer than this to enter the length tree.
    pub length_threshold: usize,
    /// How many entries the report lists for the most frequent and longest words.
    pub top: usize,
    /// Words removed by [`WordIndex::remove_stop_words`].
    pub stop_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frequency_threshold: 2,
            length_threshold: 0,
            top: 10,
            stop_words: STOP_WORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Counts words into an alphabetical tree and indexes them again by frequency and by length.
pub struct WordIndex {
    config: Config,
    alphabetical: Tree<Token>,
    by_frequency: Tree<Token>,
    by_length: Tree<Token>,
    total_words: usize,
    stop_words_removed: usize,
}

impl WordIndex {
    /// An empty index.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            alphabetical: Tree::with_comparator(Token::alphabetical()),
            by_frequency: Tree::with_comparator(Token::by_frequency_desc()),
            by_length: Tree::with_comparator(Token::by_length_desc()),
            total_words: 0,
            stop_words_removed: 0,
        }
    }

    /// Reads all of `reader`, removes stop words and builds the secondary trees.
    ///
    /// # Errors
    ///
    /// Whatever `reader` fails with.
    pub fn build<R: BufRead>(config: Config, reader: R) -> io::Result<Self> {
        let mut index = Self::new(config);
        index.read(reader)?;
        index.remove_stop_words();
        index.build_secondary();
        Ok(index)
    }

    /// Counts every whitespace separated word in `reader`. Bytes that aren't valid UTF-8 are
    /// dropped from the word they appear in, the rest of the input is still read.
    ///
    /// # Errors
    ///
    /// Whatever `reader` fails with.
    pub fn read<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.split(b'\n') {
            let line = line?;
            for raw in String::from_utf8_lossy(&line).split_whitespace() {
                self.add_word(raw);
            }
        }
        info!(
            "read {} words, {} of them unique",
            self.total_words,
            self.alphabetical.size()
        );
        Ok(())
    }

    /// Normalizes `raw` and counts it. Returns `false` if nothing was left to count.
    pub fn add_word(&mut self, raw: &str) -> bool {
        let Some(word) = normalize(raw) else {
            return false;
        };
        self.total_words += 1;

        let token = Token::new(word);
        match self.alphabetical.find_mut(&token) {
            Some(seen) => seen.increment(),
            None => {
                self.alphabetical.insert(token);
            }
        }
        true
    }

    /// Deletes every configured stop word from the alphabetical tree and returns how many
    /// occurrences went with them.
    pub fn remove_stop_words(&mut self) -> usize {
        let stop_words = &self.config.stop_words;
        let found: Vec<Token> = self
            .alphabetical
            .level_order()
            .filter(|token| stop_words.iter().any(|stop| stop == token.word()))
            .cloned()
            .collect();

        let mut removed = 0;
        for token in &found {
            if let Some(token) = self.alphabetical.delete(token) {
                debug!("removed stop word {:?} x{}", token.word(), token.count());
                removed += token.count();
            }
        }
        self.stop_words_removed += removed;

        info!(
            "removed {} stop words ({} occurrences)",
            found.len(),
            removed
        );
        removed
    }

    /// Refills the frequency and length trees from the alphabetical tree, keeping only the words
    /// that pass the configured thresholds.
    pub fn build_secondary(&mut self) {
        self.by_frequency.clear();
        self.by_length.clear();

        for token in self.alphabetical.in_order() {
            if token.count() > self.config.frequency_threshold {
                self.by_frequency.insert(token.clone());
            }
            if token.length() > self.config.length_threshold {
                self.by_length.insert(token.clone());
            }
        }

        info!(
            "indexed {} words by frequency and {} by length",
            self.by_frequency.size(),
            self.by_length.size()
        );
    }

    /// The settings this index was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every counted word, alphabetically.
    pub fn alphabetical(&self) -> &Tree<Token> {
        &self.alphabetical
    }

    /// Frequent words, most frequent first.
    pub fn by_frequency(&self) -> &Tree<Token> {
        &self.by_frequency
    }

    /// Long words, longest first.
    pub fn by_length(&self) -> &Tree<Token> {
        &self.by_length
    }

    /// Every word read, stop words included.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Distinct words left after stop word removal.
    pub fn unique_words(&self) -> usize {
        self.alphabetical.size()
    }

    /// Occurrences of stop words removed so far.
    pub fn stop_words_removed(&self) -> usize {
        self.stop_words_removed
    }

    /// The mean length of the distinct words, rounded down. 0 when there are none.
    pub fn average_length(&self) -> usize {
        let total: usize = self.alphabetical.in_order().map(Token::length).sum();
        total.checked_div(self.unique_words()).unwrap_or(0)
    }

    /// A printable summary of this index.
    pub fn report(&self) -> Report<'_> {
        Report { index: self }
    }
}

/// Summary of a [`WordIndex`], written out by its `Display` implementation.
pub struct Report<'a> {
    index: &'a WordIndex,
}

impl Report<'_> {
    fn write_tokens<'t>(
        f: &mut fmt::Formatter<'_>,
        tokens: impl Iterator<Item = &'t Token>,
    ) -> fmt::Result {
        for token in tokens {
            writeln!(f, "{}:{}:{}", token, token.count(), token.length())?;
        }
        Ok(())
    }

    fn write_height(f: &mut fmt::Formatter<'_>, name: &str, tree: &Tree<Token>) -> fmt::Result {
        writeln!(
            f,
            "{} Tree: (Optimum Height: {}) (Actual Height: {})",
            name,
            ideal_height(tree.size()),
            tree.height()
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index;
        let top = index.config.top;

        writeln!(f, "Total Words: {}", index.total_words())?;
        writeln!(f, "Unique Words: {}", index.unique_words())?;
        writeln!(f, "Stop Words: {}", index.stop_words_removed())?;
        writeln!(f)?;

        writeln!(f, "{} Most Frequent", top)?;
        Self::write_tokens(f, index.by_frequency.in_order().take(top))?;
        writeln!(f)?;

        writeln!(f, "{} Longest", top)?;
        Self::write_tokens(f, index.by_length.in_order().take(top))?;
        writeln!(f)?;

        match index.by_length.minimum() {
            Ok(longest) => writeln!(f, "The longest word is {}", longest)?,
            Err(err) => writeln!(f, "No data for the longest word: {}", err)?,
        }
        writeln!(f, "The average word length is {}", index.average_length())?;
        writeln!(f)?;

        writeln!(f, "All")?;
        Self::write_tokens(f, index.alphabetical.in_order())?;
        writeln!(f)?;

        Self::write_height(f, "Alphabetic", &index.alphabetical)?;
        Self::write_height(f, "Frequency", &index.by_frequency)?;
        Self::write_height(f, "Length", &index.by_length)
    }
}
