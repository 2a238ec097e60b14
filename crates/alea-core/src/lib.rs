//! `alea-core` — Secure randomness and Diceware primitives for ALEA.
//!
//! This crate is the audit target: zero network, zero async, zero protocol
//! dependencies. Everything builds on the OS CSPRNG; wordlist content
//! arrives through an injected [`source::WordlistSource`], so the core is
//! decoupled from any storage layout. No state survives a call — wordlists
//! are parsed fresh per request and discarded.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod random;
pub mod source;
pub mod string;

pub mod diceware;

pub use diceware::wordlist::Wordlist;
pub use diceware::{
    dice_count_for, generate_dice_rolls, generate_passphrase, DicewarePassphrase, WordlistId,
    DEFAULT_DICE_COUNT, DEFAULT_WORD_COUNT,
};
pub use error::RandomError;
pub use random::{
    secure_choice, secure_random_bytes, secure_random_float, secure_random_int, secure_shuffle,
};
pub use source::{DirSource, InMemorySource, WordlistSource};
pub use string::{
    generate_random_string, CharsetConfig, DEFAULT_STRING_LENGTH, MAX_STRING_LENGTH,
    MIN_STRING_LENGTH,
};
