//! Tokenization, word-by-word gloss and sentence translation

pub mod assembler;
pub mod explain;
pub mod sentence;
pub mod tokenizer;
pub mod word;
