// src/generators/charset.rs
//! Character alphabets used for password construction.
//!
//! Each category is disjoint from the others and is materialised once per
//! process, so indices into an alphabet are stable for the process lifetime.

use lazy_static::lazy_static;

use crate::models::GenerationConstraints;

const LOWERCASE_SOURCE: &str = "abcdefghijklmnopqrstuvwxyzабвгдеёжзийклмнопрстуфхцчшщъыьэюя";
const UPPERCASE_SOURCE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZАБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
const DIGITS_SOURCE: &str = "0123456789";
const SPECIAL_SOURCE: &str = "!@#$%^&*()-_=+<>?";

lazy_static! {
    static ref LOWERCASE: Vec<char> = LOWERCASE_SOURCE.chars().collect();
    static ref UPPERCASE: Vec<char> = UPPERCASE_SOURCE.chars().collect();
    static ref DIGITS: Vec<char> = DIGITS_SOURCE.chars().collect();
    static ref SPECIAL: Vec<char> = SPECIAL_SOURCE.chars().collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Digit,
        Category::Special,
    ];

    pub fn alphabet(self) -> &'static [char] {
        match self {
            Category::Lowercase => LOWERCASE.as_slice(),
            Category::Uppercase => UPPERCASE.as_slice(),
            Category::Digit => DIGITS.as_slice(),
            Category::Special => SPECIAL.as_slice(),
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(&c)
    }

    /// Category a character belongs to, if any.
    pub fn of(c: char) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.contains(c))
    }
}

/// Optional categories enabled by the constraints, in the order their
/// guaranteed characters are drawn. Lowercase is always on and is not listed.
pub fn optional_categories(constraints: &GenerationConstraints) -> Vec<Category> {
    let mut categories = Vec::with_capacity(3);
    if constraints.include_uppercase {
        categories.push(Category::Uppercase);
    }
    if constraints.include_digits {
        categories.push(Category::Digit);
    }
    if constraints.include_special {
        categories.push(Category::Special);
    }
    categories
}

/// Union of lowercase and every enabled category.
pub fn combined_charset(constraints: &GenerationConstraints) -> Vec<char> {
    let mut charset = Vec::with_capacity(charset_size(constraints));
    charset.extend_from_slice(Category::Lowercase.alphabet());
    for category in optional_categories(constraints) {
        charset.extend_from_slice(category.alphabet());
    }
    charset
}

pub fn charset_size(constraints: &GenerationConstraints) -> usize {
    Category::Lowercase.alphabet().len()
        + optional_categories(constraints)
            .iter()
            .map(|c| c.alphabet().len())
            .sum::<usize>()
}

// Upper-bound estimate; ignores the small bias from the guaranteed characters.
pub fn entropy_bits(constraints: &GenerationConstraints) -> f64 {
    constraints.length as f64 * (charset_size(constraints) as f64).log2()
}
