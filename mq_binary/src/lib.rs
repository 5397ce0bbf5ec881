#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

//! Binary building blocks shared by the MQ structure crates: elementary MQ
//! types, fixed-width character fields and the structure byte view.

pub mod errors;
pub mod serde_helpers;
pub mod text;
pub mod types;
pub mod view;

pub use errors::ProtocolError;
pub use errors::Result;
pub use serde_helpers::to_hex;
pub use text::set_text;
pub use text::text;
pub use types::*;
pub use view::MqStruct;
