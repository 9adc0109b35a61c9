#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use weierstrass::{curves, ecdsa, num_bigint::BigUint};
//!
//! let group = curves::nist_p256();
//! let private_key = BigUint::from(0x1234_5678u32);
//! let public_key = group.new_point_from_scalar(&private_key.clone().into());
//!
//! // `e` is the message digest as an integer, `k` a secret one-time nonce
//! let e = BigUint::from(0xc0ffee_u32);
//! let k = BigUint::from(0x0dd_ba11_u32);
//! let signature = ecdsa::sign(group, &private_key, &e, &k)?;
//!
//! assert!(ecdsa::verify(&public_key, &e, &signature));
//! # }
//! # Ok::<(), weierstrass::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod curves;
pub mod dev;
pub mod ecdsa;
pub mod field;

mod curve;
mod error;
mod point;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    curve::{CurveGroup, CurveParams},
    error::{Error, Result},
    point::{Coordinates, Point},
};
pub use num_bigint;
