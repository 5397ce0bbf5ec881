//! Elementary data types of the MQ interface, with the widths the C headers use.

use std::ffi::c_char;
use std::ffi::c_void;

pub type MQBYTE = u8;
pub type MQCHAR = c_char;
pub type MQLONG = i32;
pub type MQULONG = u32;
pub type MQINT8 = i8;
pub type MQUINT8 = u8;
pub type MQINT16 = i16;
pub type MQUINT16 = u16;
pub type MQINT32 = i32;
pub type MQUINT32 = u32;
pub type MQINT64 = i64;
pub type MQUINT64 = u64;
pub type MQFLOAT32 = f32;
pub type MQFLOAT64 = f64;

pub type MQHCONN = MQLONG;
pub type MQHOBJ = MQLONG;
pub type MQHMSG = MQINT64;
pub type MQPID = MQLONG;
pub type MQTID = MQLONG;
pub type MQBOOL = MQLONG;

/// Untyped address. Never dereferenced by this workspace.
pub type MQPTR = *mut c_void;
pub type PMQCHAR = *mut MQCHAR;
pub type PMQLONG = *mut MQLONG;

pub type MQCHAR4 = [MQCHAR; 4];
pub type MQCHAR8 = [MQCHAR; 8];
pub type MQCHAR12 = [MQCHAR; 12];
pub type MQCHAR20 = [MQCHAR; 20];
pub type MQCHAR28 = [MQCHAR; 28];
pub type MQCHAR32 = [MQCHAR; 32];
pub type MQCHAR48 = [MQCHAR; 48];
pub type MQCHAR64 = [MQCHAR; 64];
pub type MQCHAR128 = [MQCHAR; 128];
pub type MQCHAR256 = [MQCHAR; 256];
pub type MQCHAR264 = [MQCHAR; 264];

pub type MQBYTE4 = [MQBYTE; 4];
pub type MQBYTE8 = [MQBYTE; 8];
pub type MQBYTE16 = [MQBYTE; 16];
pub type MQBYTE24 = [MQBYTE; 24];
pub type MQBYTE32 = [MQBYTE; 32];
pub type MQBYTE40 = [MQBYTE; 40];
pub type MQBYTE48 = [MQBYTE; 48];
pub type MQBYTE128 = [MQBYTE; 128];
