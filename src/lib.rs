// Copyright 2026 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Strict decoder for the Recursive Length Prefix (RLP) encoding.
//!
//! Takes a byte buffer holding exactly one RLP item and yields either the
//! payload of a string or the payload slices of a list's direct sub-items,
//! borrowing from the input throughout. Anything truncated, oversize,
//! non-canonical or followed by trailing bytes is rejected with a
//! [`DecoderError`]; the decoder never panics on untrusted input.
//!
//! Nested structures are walked one level at a time: [`decode_list`] does
//! not descend into its elements, callers re-invoke the decoders on
//! whichever elements they expect to nest.
//!
//! ```
//! let dog = vec![0x83, b'd', b'o', b'g'];
//! assert_eq!(rlp_decoder::decode_string(&dog, 0), Ok(&b"dog"[..]));
//!
//! let pair = vec![0xc8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g'];
//! let items = rlp_decoder::decode_list(&pair, 0).unwrap();
//! assert_eq!(items, vec![&b"cat"[..], &b"dog"[..]]);
//! ```
//!
//! Hosts exposing the decoder to managed callers conventionally wrap the
//! error text with a `failed to RLP-decode string: ` or
//! `failed to RLP-decode list: ` prefix; the `Display` text of every
//! [`DecoderError`] kind is stable for that purpose.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod decode;
mod error;

pub use self::{
	decode::{decode_list, decode_string, read_prefix, Payload},
	error::DecoderError,
};

/// Greatest byte value that encodes itself; anything above is a header.
pub const SINGLE_BYTE_RANGE_END: u8 = 0x7f;
/// First short string header; on its own it encodes the empty string.
pub const SHORT_STRING_RANGE_START: u8 = 0x80;
/// Last short string header, a 55 byte payload.
pub const SHORT_STRING_RANGE_END: u8 = 0xb7;
/// First long string header, one length byte follows.
pub const LONG_STRING_RANGE_START: u8 = 0xb8;
/// Last long string header, eight length bytes follow.
pub const LONG_STRING_RANGE_END: u8 = 0xbf;
/// First short list header; on its own it encodes the empty list.
pub const SHORT_LIST_RANGE_START: u8 = 0xc0;
/// Last short list header, a 55 byte payload.
pub const SHORT_LIST_RANGE_END: u8 = 0xf7;
/// First long list header, one length byte follows.
pub const LONG_LIST_RANGE_START: u8 = 0xf8;

/// Longest payload a short form header may describe.
pub const MAX_SHORT_LENGTH_ALLOWED: u64 = 55;
/// Longest payload the decoder accepts, `2^63 - 1`.
pub const MAX_LONG_LENGTH_ALLOWED: u64 = (1 << 63) - 1;
