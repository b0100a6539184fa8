//! Word counting on top of [`AvlTree`].
//!
//! Tokens are separated by whitespace as Java's `Character.isWhitespace`
//! defines it. Each token counts towards the total, then is normalized and
//! inserted into the tree, whose size gives the number of unique words.

use crate::config::{InsertMode, VocabConfig};
use crate::error::VocabError;
use crate::tree::AvlTree;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Path reported in errors raised while reading standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Strips everything that is not an ASCII letter or a space and lowercases
/// the rest.
///
/// A token made only of punctuation normalizes to the empty string.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns true for the characters that separate tokens.
///
/// Matches Java's `Character.isWhitespace`: Unicode space, line and
/// paragraph separators except the no-break spaces, plus the ASCII
/// control separators. U+0085 and the no-break spaces are part of a token.
pub fn is_token_separator(c: char) -> bool {
    match c {
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}

/// Splits `text` into non-empty tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_token_separator).filter(|t| !t.is_empty())
}

/// Totals for one input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCount {
    /// Tokens read, duplicates included.
    pub total: usize,
    /// Distinct normalized words.
    pub unique: usize,
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total words: {}, unique words: {}",
            self.total, self.unique
        )
    }
}

/// Distinct words seen so far, plus the running token total.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tree: AvlTree<String>,
    total: usize,
    config: VocabConfig,
}

impl Vocabulary {
    pub fn new(config: VocabConfig) -> Self {
        Self {
            tree: AvlTree::new(),
            total: 0,
            config,
        }
    }

    /// Counts one raw token and records its normalized form.
    pub fn add_token(&mut self, raw: &str) {
        self.total += 1;

        let word = normalize(raw);
        if word.is_empty() && self.config.skip_empty {
            log::debug!("skipping token {:?}, nothing left after normalizing", raw);
            return;
        }

        match self.config.mode {
            InsertMode::Balanced => self.tree.insert(word),
            InsertMode::Unbalanced => self.tree.unbalanced_insert(word),
        };
    }

    /// Reads every whitespace separated token from `reader`.
    ///
    /// Input is decoded lossily, so bytes that are not valid UTF-8 end up
    /// as replacement characters, which `normalize` drops. `name`
    /// identifies the source in errors.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R, name: &Path) -> Result<(), VocabError> {
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| VocabError::from_io(name, e))?;
            if read == 0 {
                return Ok(());
            }
            let text = String::from_utf8_lossy(&line);
            self.extend(tokens(&text));
        }
    }

    pub fn count(&self) -> WordCount {
        WordCount {
            total: self.total,
            unique: self.tree.len(),
        }
    }

    pub fn tree(&self) -> &AvlTree<String> {
        &self.tree
    }

    pub fn config(&self) -> &VocabConfig {
        &self.config
    }
}

impl<'a> Extend<&'a str> for Vocabulary {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.add_token(token);
        }
    }
}

/// Counts the words of an already open reader.
pub fn count_reader<R: BufRead>(reader: R, config: VocabConfig) -> Result<Vocabulary, VocabError> {
    let mut vocab = Vocabulary::new(config);
    vocab.read_from(reader, Path::new(STDIN_NAME))?;
    Ok(vocab)
}

/// Counts the words of the file at `path`.
pub fn count_path(path: impl AsRef<Path>, config: VocabConfig) -> Result<Vocabulary, VocabError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| VocabError::from_io(path, e))?;

    let mut vocab = Vocabulary::new(config);
    vocab.read_from(BufReader::new(file), path)?;
    log::debug!("{}: {}", path.display(), vocab.count());
    Ok(vocab)
}
