//! `alea-tools` — the tool-call boundary over `alea-core`.
//!
//! One typed request/response pair and one callable per tool. This crate
//! owns parameter defaulting, canonical-identifier validation, and error
//! payload translation. Request routing and transport belong to the
//! surrounding dispatch layer and are not represented here — callers hand
//! each function a deserialized request (plus a wordlist source where one
//! is needed) and serialize whatever comes back.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod bytes;
pub mod lists;
pub mod numbers;
pub mod passphrase;
pub mod payload;
pub mod strings;

pub use bytes::{
    random_bytes, ByteEncoding, RandomBytesRequest, RandomBytesResult, DEFAULT_BYTE_COUNT,
    MAX_BYTE_COUNT,
};
pub use lists::{
    choose_from_list, shuffle_list, ChooseFromListRequest, ChooseFromListResult,
    ShuffleListRequest, ShuffleListResult,
};
pub use numbers::{
    random_float, random_integer, RandomFloatRequest, RandomFloatResult, RandomIntegerRequest,
    RandomIntegerResult, DEFAULT_FLOAT_MAX, DEFAULT_FLOAT_MIN,
};
pub use passphrase::{
    generate_passphrase, GeneratePassphraseRequest, GeneratePassphraseResult, MAX_WORD_COUNT,
};
pub use payload::{ErrorKind, ErrorPayload};
pub use strings::{
    random_string, random_uuid, RandomStringRequest, RandomStringResult, RandomUuidResult,
};
