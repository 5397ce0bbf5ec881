#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

//! Library-mandated initial values for the IBM MQ client structures.
//!
//! Every structure has a `<NAME>_DEFAULT` constant equal to the C headers'
//! initialiser, and a `Default` impl returning it. Copy the default, then
//! override the fields you need:
//!
//! ```
//! use mq_default::*;
//!
//! let mut md = MQMD_DEFAULT;
//! md.Persistence = MQPER_PERSISTENT;
//! mq_binary::set_text(&mut md.ReplyToQ, "DEV.REPLY").unwrap();
//! assert_eq!(md.MsgType, MQMT_DATAGRAM);
//! ```

/// Implements [`mq_binary::MqStruct`] for a layout.
///
/// `= ID` names the eye-catcher constant, `versioned` exposes the numeric
/// `Version` field.
macro_rules! mq_struct {
    ($ty:ident) => {
        unsafe impl mq_binary::MqStruct for $ty {
            const NAME: &'static str = stringify!($ty);
        }
    };
    ($ty:ident, versioned) => {
        unsafe impl mq_binary::MqStruct for $ty {
            const NAME: &'static str = stringify!($ty);

            fn version(&self) -> Option<mq_binary::MQLONG> {
                Some(self.Version)
            }
        }
    };
    ($ty:ident = $id:path) => {
        unsafe impl mq_binary::MqStruct for $ty {
            const NAME: &'static str = stringify!($ty);
            const STRUC_ID: Option<[u8; 4]> = Some(*$id);
        }
    };
    ($ty:ident = $id:path, versioned) => {
        unsafe impl mq_binary::MqStruct for $ty {
            const NAME: &'static str = stringify!($ty);
            const STRUC_ID: Option<[u8; 4]> = Some(*$id);

            fn version(&self) -> Option<mq_binary::MQLONG> {
                Some(self.Version)
            }
        }
    };
}

pub mod catalog;
pub mod constants;
pub mod defaults;
#[cfg(feature = "exits")]
pub mod exits;
pub mod mqi;
#[cfg(feature = "pcf")]
pub mod pcf;

pub use catalog::DefaultEntry;
pub use catalog::entries;
pub use catalog::find;
pub use constants::*;
pub use defaults::*;
#[cfg(feature = "exits")]
pub use exits::*;
pub use mqi::*;
#[cfg(feature = "pcf")]
pub use pcf::*;

/// MQ client level whose headers the layouts and initialisers track.
pub const MQ_CLIENT_LEVEL: &str = "9.4.0.0";
