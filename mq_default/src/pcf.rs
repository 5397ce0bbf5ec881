//! Programmable Command Format headers and the installable-service
//! parameter blocks, with their initialisers.
//!
//! The variable-length PCF parameters end in a one-element value array. The
//! fixed `StrucLength` in each default excludes it, so `SIZE` is larger than
//! the default `StrucLength` for those structures.

use std::ptr::null_mut;

use mq_binary::*;

use crate::constants::*;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFH {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Version: MQLONG,
    pub Command: MQLONG,
    pub MsgSeqNumber: MQLONG,
    pub Control: MQLONG,
    pub CompCode: MQLONG,
    pub Reason: MQLONG,
    pub ParameterCount: MQLONG,
}

/// Byte string filter parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFBF {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub Operator: MQLONG,
    pub FilterValueLength: MQLONG,
    pub FilterValue: MQBYTE4,
}

/// Byte string parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFBS {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub StringLength: MQLONG,
    pub String: MQBYTE4,
}

/// Group parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFGR {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub ParameterCount: MQLONG,
}

/// Integer filter parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFIF {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub Operator: MQLONG,
    pub FilterValue: MQLONG,
}

/// Integer list parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFIL {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub Count: MQLONG,
    pub Values: [MQLONG; 1],
}

/// 64-bit integer list parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFIL64 {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub Count: MQLONG,
    pub Values: [MQINT64; 1],
}

/// Integer parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFIN {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub Value: MQLONG,
}

/// 64-bit integer parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFIN64 {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub Reserved: MQLONG,
    pub Value: MQINT64,
}

/// String filter parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFSF {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub Operator: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub FilterValueLength: MQLONG,
    pub FilterValue: MQCHAR4,
}

/// String list parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFSL {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Count: MQLONG,
    pub StringLength: MQLONG,
    pub Strings: MQCHAR4,
}

/// String parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCFST {
    pub Type: MQLONG,
    pub StrucLength: MQLONG,
    pub Parameter: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub StringLength: MQLONG,
    pub String: MQCHAR4,
}

/// Embedded PCF header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQEPH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub PCFHeader: MQCFH,
}

// ---------------------------------------------------------------------------
//  Installable services
// ---------------------------------------------------------------------------

/// MQZED: Entity Descriptor
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQZED {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub EntityNamePtr: PMQCHAR,
    pub EntityDomainPtr: PMQCHAR,
    pub SecurityId: MQBYTE40,
    pub CorrelationPtr: MQPTR,
}

/// MQZAC: Application Context
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQZAC {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ProcessId: MQPID,
    pub ThreadId: MQTID,
    pub ApplName: MQCHAR28,
    pub UserID: MQCHAR12,
    pub EffectiveUserID: MQCHAR12,
    pub Environment: MQLONG,
    pub CallerType: MQLONG,
    pub AuthenticationType: MQLONG,
    pub BindType: MQLONG,
}

/// MQZAD: Authority Data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQZAD {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ProfileName: MQCHAR48,
    pub ObjectType: MQLONG,
    pub AuthorityMask: MQLONG,
    pub EntityDataPtr: *mut MQZED,
    pub EntityType: MQLONG,
    pub Options: MQLONG,
}

/// MQZFP: Free Parameters
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQZFP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Reserved: MQBYTE8,
    pub CorrelationPtr: MQPTR,
}

/// MQZIC: Identity Context
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQZIC {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub UserIdentifier: MQCHAR12,
    pub AccountingToken: MQBYTE32,
    pub ApplIdentityData: MQCHAR32,
    pub PutApplType: MQLONG,
    pub PutApplName: MQCHAR28,
    pub PutDate: MQCHAR8,
    pub PutTime: MQCHAR8,
    pub ApplOriginData: MQCHAR4,
}

mq_struct!(MQCFH, versioned);
mq_struct!(MQCFBF);
mq_struct!(MQCFBS);
mq_struct!(MQCFGR);
mq_struct!(MQCFIF);
mq_struct!(MQCFIL);
mq_struct!(MQCFIL64);
mq_struct!(MQCFIN);
mq_struct!(MQCFIN64);
mq_struct!(MQCFSF);
mq_struct!(MQCFSL);
mq_struct!(MQCFST);
mq_struct!(MQEPH = MQEPH_STRUC_ID, versioned);
mq_struct!(MQZED = MQZED_STRUC_ID, versioned);
mq_struct!(MQZAC = MQZAC_STRUC_ID, versioned);
mq_struct!(MQZAD = MQZAD_STRUC_ID, versioned);
mq_struct!(MQZFP = MQZFP_STRUC_ID, versioned);
mq_struct!(MQZIC = MQZIC_STRUC_ID, versioned);

pub const MQCFH_DEFAULT: MQCFH = MQCFH {
    Type: MQCFT_COMMAND,
    StrucLength: MQCFH_STRUC_LENGTH,
    Version: MQCFH_VERSION_1,
    Command: 0,
    MsgSeqNumber: 1,
    Control: MQCFC_LAST,
    CompCode: MQCC_OK,
    Reason: MQRC_NONE,
    ParameterCount: 0,
};

pub const MQCFBF_DEFAULT: MQCFBF = MQCFBF {
    Type: MQCFT_BYTE_STRING_FILTER,
    StrucLength: MQCFBF_STRUC_LENGTH_FIXED,
    Parameter: 0,
    Operator: 0,
    FilterValueLength: 0,
    FilterValue: [0; 4],
};

pub const MQCFBS_DEFAULT: MQCFBS = MQCFBS {
    Type: MQCFT_BYTE_STRING,
    StrucLength: MQCFBS_STRUC_LENGTH_FIXED,
    Parameter: 0,
    StringLength: 0,
    String: [0; 4],
};

pub const MQCFGR_DEFAULT: MQCFGR =
    MQCFGR { Type: MQCFT_GROUP, StrucLength: MQCFGR_STRUC_LENGTH, Parameter: 0, ParameterCount: 0 };

pub const MQCFIF_DEFAULT: MQCFIF = MQCFIF {
    Type: MQCFT_INTEGER_FILTER,
    StrucLength: MQCFIF_STRUC_LENGTH,
    Parameter: 0,
    Operator: 0,
    FilterValue: 0,
};

pub const MQCFIL_DEFAULT: MQCFIL = MQCFIL {
    Type: MQCFT_INTEGER_LIST,
    StrucLength: MQCFIL_STRUC_LENGTH_FIXED,
    Parameter: 0,
    Count: 0,
    Values: [0],
};

pub const MQCFIL64_DEFAULT: MQCFIL64 = MQCFIL64 {
    Type: MQCFT_INTEGER64_LIST,
    StrucLength: MQCFIL64_STRUC_LENGTH_FIXED,
    Parameter: 0,
    Count: 0,
    Values: [0],
};

pub const MQCFIN_DEFAULT: MQCFIN =
    MQCFIN { Type: MQCFT_INTEGER, StrucLength: MQCFIN_STRUC_LENGTH, Parameter: 0, Value: 0 };

pub const MQCFIN64_DEFAULT: MQCFIN64 = MQCFIN64 {
    Type: MQCFT_INTEGER64,
    StrucLength: MQCFIN64_STRUC_LENGTH,
    Parameter: 0,
    Reserved: 0,
    Value: 0,
};

pub const MQCFSF_DEFAULT: MQCFSF = MQCFSF {
    Type: MQCFT_STRING_FILTER,
    StrucLength: MQCFSF_STRUC_LENGTH_FIXED,
    Parameter: 0,
    Operator: 0,
    CodedCharSetId: MQCCSI_DEFAULT,
    FilterValueLength: 0,
    FilterValue: text::nul(),
};

pub const MQCFSL_DEFAULT: MQCFSL = MQCFSL {
    Type: MQCFT_STRING_LIST,
    StrucLength: MQCFSL_STRUC_LENGTH_FIXED,
    Parameter: 0,
    CodedCharSetId: MQCCSI_DEFAULT,
    Count: 0,
    StringLength: 0,
    Strings: text::nul(),
};

pub const MQCFST_DEFAULT: MQCFST = MQCFST {
    Type: MQCFT_STRING,
    StrucLength: MQCFST_STRUC_LENGTH_FIXED,
    Parameter: 0,
    CodedCharSetId: MQCCSI_DEFAULT,
    StringLength: 0,
    String: text::nul(),
};

pub const MQEPH_DEFAULT: MQEPH = MQEPH {
    StrucId: text::chars(MQEPH_STRUC_ID),
    Version: MQEPH_VERSION_1,
    StrucLength: MQEPH_STRUC_LENGTH_FIXED,
    Encoding: 0,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: text::chars(MQFMT_NONE),
    Flags: MQEPH_NONE,
    PCFHeader: MQCFH { Type: MQCFT_NONE, Version: MQCFH_VERSION_3, ..MQCFH_DEFAULT },
};

pub const MQZED_DEFAULT: MQZED = MQZED {
    StrucId: text::chars(MQZED_STRUC_ID),
    Version: MQZED_VERSION_1,
    EntityNamePtr: null_mut(),
    EntityDomainPtr: null_mut(),
    SecurityId: MQSID_NONE,
    CorrelationPtr: null_mut(),
};

pub const MQZAC_DEFAULT: MQZAC = MQZAC {
    StrucId: text::chars(MQZAC_STRUC_ID),
    Version: MQZAC_VERSION_1,
    ProcessId: 0,
    ThreadId: 0,
    ApplName: text::nul(),
    UserID: text::nul(),
    EffectiveUserID: text::nul(),
    Environment: MQXE_OTHER,
    CallerType: MQXACT_EXTERNAL,
    AuthenticationType: MQZAT_INITIAL_CONTEXT,
    BindType: MQCNO_STANDARD_BINDING,
};

pub const MQZAD_DEFAULT: MQZAD = MQZAD {
    StrucId: text::chars(MQZAD_STRUC_ID),
    Version: MQZAD_VERSION_1,
    ProfileName: text::nul(),
    ObjectType: MQOT_NONE,
    AuthorityMask: MQZAO_NO_AUTHORITY,
    EntityDataPtr: null_mut(),
    EntityType: MQZAET_NONE,
    Options: 0,
};

pub const MQZFP_DEFAULT: MQZFP = MQZFP {
    StrucId: text::chars(MQZFP_STRUC_ID),
    Version: MQZFP_VERSION_1,
    Reserved: [0; 8],
    CorrelationPtr: null_mut(),
};

pub const MQZIC_DEFAULT: MQZIC = MQZIC {
    StrucId: text::chars(MQZIC_STRUC_ID),
    Version: MQZIC_VERSION_1,
    UserIdentifier: text::nul(),
    AccountingToken: MQACT_NONE,
    ApplIdentityData: text::nul(),
    PutApplType: MQAT_NO_CONTEXT,
    PutApplName: text::nul(),
    PutDate: text::nul(),
    PutTime: text::nul(),
    ApplOriginData: text::nul(),
};

macro_rules! impl_default {
    ($($ty:ident => $value:ident),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    $value
                }
            }
        )*
    };
}

impl_default!(
    MQCFH => MQCFH_DEFAULT,
    MQCFBF => MQCFBF_DEFAULT,
    MQCFBS => MQCFBS_DEFAULT,
    MQCFGR => MQCFGR_DEFAULT,
    MQCFIF => MQCFIF_DEFAULT,
    MQCFIL => MQCFIL_DEFAULT,
    MQCFIL64 => MQCFIL64_DEFAULT,
    MQCFIN => MQCFIN_DEFAULT,
    MQCFIN64 => MQCFIN64_DEFAULT,
    MQCFSF => MQCFSF_DEFAULT,
    MQCFSL => MQCFSL_DEFAULT,
    MQCFST => MQCFST_DEFAULT,
    MQEPH => MQEPH_DEFAULT,
    MQZED => MQZED_DEFAULT,
    MQZAC => MQZAC_DEFAULT,
    MQZAD => MQZAD_DEFAULT,
    MQZFP => MQZFP_DEFAULT,
    MQZIC => MQZIC_DEFAULT,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_header_default() {
        let cfh = MQCFH::default();
        assert_eq!(cfh.Type, MQCFT_COMMAND);
        assert_eq!(cfh.StrucLength, MQCFH::SIZE as MQLONG);
        assert_eq!(cfh.Version, 1);
        assert_eq!(cfh.MsgSeqNumber, 1);
        assert_eq!(cfh.Control, MQCFC_LAST);
        assert_eq!(cfh.ParameterCount, 0);
    }

    #[test]
    fn test_fixed_parameter_lengths_match_layout() {
        assert_eq!(MQCFIN_DEFAULT.StrucLength, MQCFIN::SIZE as MQLONG);
        assert_eq!(MQCFIN64_DEFAULT.StrucLength, MQCFIN64::SIZE as MQLONG);
        assert_eq!(MQCFGR_DEFAULT.StrucLength, MQCFGR::SIZE as MQLONG);
        assert_eq!(MQCFIF_DEFAULT.StrucLength, MQCFIF::SIZE as MQLONG);
    }

    #[test]
    fn test_variable_parameters_exclude_value_array() {
        assert_eq!(MQCFST_DEFAULT.StrucLength as usize, MQCFST::SIZE - 4);
        assert_eq!(MQCFSL_DEFAULT.StrucLength as usize, MQCFSL::SIZE - 4);
        assert_eq!(MQCFSF_DEFAULT.StrucLength as usize, MQCFSF::SIZE - 4);
        assert_eq!(MQCFBS_DEFAULT.StrucLength as usize, MQCFBS::SIZE - 4);
        assert_eq!(MQCFBF_DEFAULT.StrucLength as usize, MQCFBF::SIZE - 4);
        assert_eq!(MQCFIL_DEFAULT.StrucLength as usize, MQCFIL::SIZE - 4);
        assert_eq!(MQCFIL64_DEFAULT.StrucLength as usize, MQCFIL64::SIZE - 8);
        assert_eq!(MQCFIL64_DEFAULT.Type, MQCFT_INTEGER64_LIST);
    }

    #[test]
    fn test_embedded_header_default() {
        let eph = MQEPH_DEFAULT;
        assert_eq!(text::as_bytes(&eph.StrucId), b"EPH ");
        assert_eq!(eph.StrucLength, MQEPH::SIZE as MQLONG);
        assert_eq!(text::as_bytes(&eph.Format), MQFMT_NONE);
        assert_eq!(eph.PCFHeader.Type, MQCFT_NONE);
        assert_eq!(eph.PCFHeader.Version, MQCFH_VERSION_3);
        assert_eq!(eph.PCFHeader.StrucLength, 36);
        assert_eq!(eph.PCFHeader.MsgSeqNumber, 1);
        assert_eq!(eph.PCFHeader.Control, MQCFC_LAST);
    }

    #[test]
    fn test_installable_service_defaults() {
        assert_eq!(text::as_bytes(&MQZED_DEFAULT.StrucId), b"ZED ");
        assert!(MQZED_DEFAULT.EntityNamePtr.is_null());
        assert_eq!(MQZAC_DEFAULT.CallerType, MQXACT_EXTERNAL);
        assert_eq!(MQZAC_DEFAULT.Environment, MQXE_OTHER);
        assert_eq!(MQZAC_DEFAULT.ProcessId, 0);
        assert_eq!(MQZAC_DEFAULT.ThreadId, 0);
        assert_eq!(MQZAC_DEFAULT.AuthenticationType, MQZAT_INITIAL_CONTEXT);
        assert_eq!(MQZAC_DEFAULT.BindType, MQCNO_STANDARD_BINDING);
        assert!(text::as_bytes(&MQZAC_DEFAULT.UserID).iter().all(|&b| b == 0));

        let zad = MQZAD_DEFAULT;
        assert_eq!(text::as_bytes(&zad.StrucId), b"ZAD ");
        assert_eq!(zad.Version, MQZAD_VERSION_1);
        assert!(text::as_bytes(&zad.ProfileName).iter().all(|&b| b == 0));
        assert_eq!(zad.ObjectType, MQOT_NONE);
        assert_eq!(zad.AuthorityMask, MQZAO_NO_AUTHORITY);
        assert!(zad.EntityDataPtr.is_null());
        assert_eq!(zad.EntityType, MQZAET_NONE);
        assert_eq!(zad.Options, 0);
        assert!(MQZFP_DEFAULT.CorrelationPtr.is_null());
        assert_eq!(MQZIC_DEFAULT.PutApplType, MQAT_NO_CONTEXT);
        assert_eq!(MQZIC_DEFAULT.AccountingToken, [0; 32]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_layout_sizes() {
        assert_eq!(MQCFH::SIZE, 36);
        assert_eq!(MQCFBF::SIZE, 24);
        assert_eq!(MQCFIL64::SIZE, 24);
        assert_eq!(MQCFSL::SIZE, 28);
        assert_eq!(MQEPH::SIZE, 68);
        assert_eq!(MQZED::SIZE, 72);
        assert_eq!(MQZAC::SIZE, 84);
        assert_eq!(MQZAD::SIZE, 80);
        assert_eq!(MQZFP::SIZE, 24);
        assert_eq!(MQZIC::SIZE, 136);
    }
}
