//! # Gaia codec
//!
//! The application-level envelopes used to store accounts and the token
//! supply. Each envelope wraps exactly one payload out of a closed set of
//! concrete types (or nothing), and encodes as the standard protobuf `oneof`
//! so that existing consumers of the state can read it byte for byte.
//!
//! | Envelope    | Field | Payload                    |
//! |-------------|-------|----------------------------|
//! | [Account]   | 1     | `BaseAccount`              |
//! |             | 2     | `ContinuousVestingAccount` |
//! |             | 3     | `DelayedVestingAccount`    |
//! |             | 4     | `PeriodicVestingAccount`   |
//! |             | 5     | `ModuleAccount`            |
//! | [Supply]    | 1     | `Supply`                   |
//!
//! ## Getting Started
//!
//! ```
//! use gaia_codec::{proto::cosmos_sdk::x::auth::v1::BaseAccount, Account, Envelope};
//!
//! let account = Account::from(BaseAccount {
//!     account_number: 1,
//!     ..Default::default()
//! });
//!
//! // tag 0x0a (field 1, length-delimited), length 2, then the payload
//! let bytes = account.marshal();
//! assert_eq!(bytes, [0x0a, 0x02, 0x18, 0x01]);
//! assert_eq!(account.size(), bytes.len());
//!
//! let decoded = Account::unmarshal(&bytes).unwrap();
//! assert_eq!(decoded.base_account().unwrap().account_number, 1);
//! ```
//!
//! Fields the envelope doesn't recognise are skipped rather than rejected,
//! so newer writers can add payload types without breaking older readers.
//! A recognised field always replaces the current payload: if a stream
//! carries several, the last one wins.
//!
//! Both envelopes also implement [prost::Message], and [codec] frames
//! streams of them for [tokio_util::codec].
//!
//! ## Crate feature flags
//!
//! - `mocks`: random payload and envelope generators for tests.

pub mod codec;
pub(crate) mod constants;

mod account;
mod envelope;
mod error;
mod exported;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod proto;
mod supply;
mod wire;

pub use account::{Account, AccountSum};
pub use constants::{HEADER_SIZE, MAX_FRAME_SIZE};
pub use envelope::{Envelope, Registration, Variant};
pub use error::CodecError;
pub use exported::{ExportedAccount, ExportedSupply};
pub use supply::{Supply, SupplySum};
