//! Binary payload codec
//!
//! Adaptive width classification and encoding, base64 conversion and data-URL
//! parsing. Everything here is synchronous and value-like: inputs are owned
//! or borrowed, outputs are fresh values, nothing is cached across calls.

pub mod base64;
pub mod buffer;
pub mod dataurl;
pub mod width;

pub use self::base64::{
    base64_to_buffer, base64_to_bytes, buffer_to_base64, bytes_to_base64, Alphabet,
};
pub use buffer::{encode, encode_text, latin1_bytes, latin1_text, BinaryBuffer};
pub use dataurl::{
    blob_to_data_url, data_url_to_blob, is_data_url, parse_data_url, DataUrlComponents,
};
pub use width::ElementWidth;
