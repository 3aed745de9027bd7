//! Character classes a generated password may draw from.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?~";

/// One of the four fixed character categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes in guarantee order. Generation relies on this order
    /// when the requested length is shorter than the number of selected classes.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Returns `true` if `c` belongs to this class's fixed set.
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }
}

/// Builds the union pool of the given classes, concatenated in iteration order.
pub fn build_pool(classes: &[CharacterClass]) -> Vec<char> {
    let mut pool = Vec::new();
    for class in classes {
        pool.extend(class.chars().chars());
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.chars().count(), 30);
    }

    #[test]
    fn test_classes_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a == b {
                    continue;
                }
                assert!(!a.chars().chars().any(|c| b.contains(c)), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_build_pool_concatenates_in_order() {
        let pool = build_pool(&[CharacterClass::Digits, CharacterClass::Uppercase]);
        assert_eq!(pool.len(), 36);
        assert_eq!(pool[0], '0');
        assert_eq!(pool[10], 'A');
    }

    #[test]
    fn test_build_pool_empty() {
        assert!(build_pool(&[]).is_empty());
    }

    #[test]
    fn test_symbols_are_ascii_punctuation() {
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
    }
}
