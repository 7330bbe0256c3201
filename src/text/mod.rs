//! Typed text transforms
//!
//! Every function here takes `&str` plus typed parameters and returns a new
//! value. Nothing is mutated, nothing is cached, nothing touches I/O.
//!
//! Offsets and lengths count Unicode scalar values (`char`), never bytes.
//!
//! ## Categories
//!
//! - **case**: to_upper_case, to_lower_case, capitalize, to_title_case
//! - **shape**: trim, truncate, word_wrap, reverse
//! - **search**: replace_all, count_occurrences
//! - **extract**: extract_numbers, extract_urls
//! - **validate**: is_valid_email, is_alpha
//! - **rewrite**: slugify, remove_special_chars, mask
//! - **encoding**: to_base64, from_base64
//! - **random**: random, random_with
//!
//! Currency formatting lives in [`crate::locale`] because it is backed by a
//! swappable collaborator.

pub mod case;
pub mod encoding;
pub mod extract;
pub mod random;
pub mod rewrite;
pub mod search;
pub mod shape;
pub mod validate;

pub use case::{capitalize, to_lower_case, to_title_case, to_upper_case};
pub use encoding::{from_base64, to_base64};
pub use extract::{Number, extract_numbers, extract_urls};
pub use random::{DEFAULT_CHARSET, MAX_RANDOM_LENGTH, RandomSource, random, random_with};
pub use rewrite::{DEFAULT_MASK_CHAR, mask, remove_special_chars, slugify};
pub use search::{count_occurrences, replace_all};
pub use shape::{ELLIPSIS, reverse, trim, truncate, word_wrap};
pub use validate::{is_alpha, is_valid_email};
