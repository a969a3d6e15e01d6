//! Input handling: turning raw text into normalized line records

pub mod tokenizer;

pub use tokenizer::{LineTokenizer, ASCII_PUNCTUATION};
