//! Mutation rule tables for the hybrid strategy

/// Canonical suffix table: digits, years, symbols, common short strings
const SUFFIXES: &[&str] = &[
    "1", "12", "123", "1234", "12345", "123456",
    "!", "@", "#", "$", "!!", "@@",
    "0", "00", "01", "99", "007", "786", "143",
    "2020", "2021", "2022", "2023", "2024", "2025",
    "@123", "123!", "!123", "@2024", "@2025",
    "abc", "pass", "pwd",
];

const PREFIXES: &[&str] = &["1", "123", "!", "@", "#", "my", "the", "new", "old"];

/// letter -> digit/symbol leet substitutions
const LEET_MAP: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '$'),
    ('t', '7'),
    ('b', '6'),
];

/// Symbol substitution sets, each applied as a group
const SUBSTITUTION_SETS: &[&[(char, char)]] = &[
    &[('a', '@')],
    &[('o', '0')],
    &[('i', '1')],
    &[('s', '$')],
    &[('a', '@'), ('o', '0')],
    &[('i', '1'), ('s', '$')],
    &[('a', '@'), ('s', '$'), ('i', '1')],
];

/// Immutable mutation tables owned by a `HybridMutator`
///
/// Held as instance data rather than module-level statics so concurrent
/// runs never share mutable state; treat the tables as configuration data
/// when a caller needs a different rule set.
#[derive(Debug, Clone)]
pub struct MutationRules {
    suffixes: Vec<String>,
    prefixes: Vec<String>,
    leet_map: Vec<(char, char)>,
    substitution_sets: Vec<Vec<(char, char)>>,
}

impl Default for MutationRules {
    fn default() -> Self {
        Self::canonical()
    }
}

impl MutationRules {
    /// The canonical rule set
    pub fn canonical() -> Self {
        Self {
            suffixes: SUFFIXES.iter().map(|s| s.to_string()).collect(),
            prefixes: PREFIXES.iter().map(|s| s.to_string()).collect(),
            leet_map: LEET_MAP.to_vec(),
            substitution_sets: SUBSTITUTION_SETS.iter().map(|s| s.to_vec()).collect(),
        }
    }

    /// Build a fully custom rule set
    pub fn new(
        suffixes: Vec<String>,
        prefixes: Vec<String>,
        leet_map: Vec<(char, char)>,
        substitution_sets: Vec<Vec<(char, char)>>,
    ) -> Self {
        Self {
            suffixes,
            prefixes,
            leet_map,
            substitution_sets,
        }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Apply the full leet map to a word
    pub fn apply_leet(&self, word: &str) -> String {
        word.chars()
            .map(|c| {
                self.leet_map
                    .iter()
                    .find(|(from, _)| *from == c)
                    .map(|(_, to)| *to)
                    .unwrap_or(c)
            })
            .collect()
    }

    /// Apply each substitution set to `word`, one variant per set
    pub fn substitution_variants(&self, word: &str) -> Vec<String> {
        self.substitution_sets
            .iter()
            .map(|set| {
                word.chars()
                    .map(|c| {
                        set.iter()
                            .find(|(from, _)| *from == c)
                            .map(|(_, to)| *to)
                            .unwrap_or(c)
                    })
                    .collect()
            })
            .collect()
    }
}
