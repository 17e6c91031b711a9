//! Single-edit neighborhoods over the lowercase Latin alphabet.
//!
//! A neighbor of a word is any string reachable by exactly one of:
//! - **Insertion**: one letter added at any position
//! - **Deletion**: one character removed (only for words longer than one)
//! - **Transposition**: two adjacent characters swapped (only for words longer than one)
//! - **Substitution**: one character replaced by a letter
//!
//! Substituting a character with itself reproduces the source word, so the
//! source may appear in its own neighborhood. The corrector only expands
//! words that are not in the dictionary, so this never surfaces as a
//! suggestion.

use ahash::AHashSet;

/// Letters used for insertions and substitutions.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Builds the set of one-edit neighbors of a word.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateGenerator;

impl CandidateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// All distinct strings one edit away from `word`.
    ///
    /// `word` is expected to be lowercase already. The empty string yields
    /// only the 26 single-letter insertions.
    ///
    /// # Example
    /// ```rust
    /// use spellcheck::CandidateGenerator;
    ///
    /// let neighbors = CandidateGenerator::new().generate("teh");
    /// assert!(neighbors.contains("the"));
    /// assert!(neighbors.contains("te"));
    /// ```
    pub fn generate(&self, word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        let mut results =
            AHashSet::with_capacity((len + 1) * ALPHABET.len() + len * ALPHABET.len() + 2 * len);

        Self::insertions(&chars, &mut results);
        if len > 1 {
            Self::deletions(&chars, &mut results);
            Self::transpositions(&chars, &mut results);
        }
        Self::substitutions(&chars, &mut results);

        results
    }

    fn insertions(chars: &[char], out: &mut AHashSet<String>) {
        for i in 0..=chars.len() {
            for &c in ALPHABET.iter() {
                let mut edited = String::with_capacity(chars.len() + 1);
                edited.extend(&chars[..i]);
                edited.push(c);
                edited.extend(&chars[i..]);
                out.insert(edited);
            }
        }
    }

    fn deletions(chars: &[char], out: &mut AHashSet<String>) {
        for i in 0..chars.len() {
            let mut edited = String::with_capacity(chars.len());
            edited.extend(&chars[..i]);
            edited.extend(&chars[i + 1..]);
            out.insert(edited);
        }
    }

    fn transpositions(chars: &[char], out: &mut AHashSet<String>) {
        for i in 0..chars.len().saturating_sub(1) {
            let mut swapped = chars.to_vec();
            swapped.swap(i, i + 1);
            out.insert(swapped.into_iter().collect());
        }
    }

    fn substitutions(chars: &[char], out: &mut AHashSet<String>) {
        let mut buffer = chars.to_vec();
        for i in 0..chars.len() {
            for &c in ALPHABET.iter() {
                buffer[i] = c;
                out.insert(buffer.iter().collect());
            }
            buffer[i] = chars[i];
        }
    }
}
