//! Parameter blocks passed to API, channel, data-conversion, pre-connect,
//! publish and cluster-workload exits, with their initialisers.
//!
//! The cluster-workload records come in per-version layouts (`MQWDR1`,
//! `MQWQR3`, ...). The unnumbered layout is the latest version and the
//! latest numbered name is an alias of it, as with `MQMD2`.

use std::ptr::null_mut;

use mq_binary::text::chars;
use mq_binary::text::nul;
use mq_binary::*;

use crate::constants::*;
use crate::defaults::MQCHARV_DEFAULT;
use crate::mqi::*;

/// Configuration handle passed to API exits
pub type MQHCONFIG = *mut MQIEP;

// ---------------------------------------------------------------------------
//  API exits
// ---------------------------------------------------------------------------

/// MQACH: API exit chain area header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQACH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub ChainAreaLength: MQLONG,
    pub ExitInfoName: MQCHAR48,
    pub NextChainAreaPtr: *mut MQACH,
}

/// MQAXC: API exit context
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQAXC {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Environment: MQLONG,
    pub UserId: MQCHAR12,
    pub SecurityId: MQBYTE40,
    pub ConnectionName: MQCHAR264,
    pub LongMCAUserIdLength: MQLONG,
    pub LongRemoteUserIdLength: MQLONG,
    pub LongMCAUserIdPtr: MQPTR,
    pub LongRemoteUserIdPtr: MQPTR,
    pub ApplName: MQCHAR28,
    pub ApplType: MQLONG,
    pub ProcessId: MQPID,
    pub ThreadId: MQTID,
    // Ver:2
    pub ChannelName: MQCHAR20,
    pub Reserved1: MQBYTE4,
    pub pChannelDefinition: *mut MQCD,
}

/// MQAXP: API exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQAXP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub APICallerType: MQLONG,
    pub ExitUserArea: MQBYTE16,
    pub ExitData: MQCHAR32,
    pub ExitInfoName: MQCHAR48,
    pub ExitPDArea: MQBYTE48,
    pub QMgrName: MQCHAR48,
    pub ExitChainAreaPtr: *mut MQACH,
    pub Hconfig: MQHCONFIG,
    pub Function: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    // Ver:2
    pub ExitMsgHandle: MQHMSG,
}

/// MQXEPO: Exit entry point registration options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQXEPO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    pub ExitProperties: MQCHARV,
}

/// MQIEP: Interface entry points.
///
/// Entry points are stored as untyped addresses; the default leaves all of
/// them null.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQIEP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Flags: MQLONG,
    pub Reserved: MQPTR,
    pub MQBACK_Call: MQPTR,
    pub MQBEGIN_Call: MQPTR,
    pub MQBUFMH_Call: MQPTR,
    pub MQCB_Call: MQPTR,
    pub MQCLOSE_Call: MQPTR,
    pub MQCMIT_Call: MQPTR,
    pub MQCONN_Call: MQPTR,
    pub MQCONNX_Call: MQPTR,
    pub MQCRTMH_Call: MQPTR,
    pub MQCTL_Call: MQPTR,
    pub MQDISC_Call: MQPTR,
    pub MQDLTMH_Call: MQPTR,
    pub MQDLTMP_Call: MQPTR,
    pub MQGET_Call: MQPTR,
    pub MQINQ_Call: MQPTR,
    pub MQINQMP_Call: MQPTR,
    pub MQMHBUF_Call: MQPTR,
    pub MQOPEN_Call: MQPTR,
    pub MQPUT_Call: MQPTR,
    pub MQPUT1_Call: MQPTR,
    pub MQSET_Call: MQPTR,
    pub MQSETMP_Call: MQPTR,
    pub MQSTAT_Call: MQPTR,
    pub MQSUB_Call: MQPTR,
    pub MQSUBRQ_Call: MQPTR,
    pub MQXCLWLN_Call: MQPTR,
    pub MQXCNVC_Call: MQPTR,
    pub MQXDX_Call: MQPTR,
    pub MQXEP_Call: MQPTR,
    pub MQZEP_Call: MQPTR,
}

// ---------------------------------------------------------------------------
//  Channel, data-conversion and pre-connect exits
// ---------------------------------------------------------------------------

/// MQCXP: Channel exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCXP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub MaxSegmentLength: MQLONG,
    pub ExitUserArea: MQBYTE16,
    pub ExitData: MQCHAR32,
    pub MsgRetryCount: MQLONG,
    pub MsgRetryInterval: MQLONG,
    pub MsgRetryReason: MQLONG,
    pub HeaderLength: MQLONG,
    pub PartnerName: MQCHAR48,
    pub FAPLevel: MQLONG,
    pub CapabilityFlags: MQLONG,
    pub ExitNumber: MQLONG,
    // Ver:3
    pub ExitSpace: MQLONG,
    // Ver:4
    pub SSLCertUserid: MQCHAR12,
    pub SSLRemCertIssNameLength: MQLONG,
    pub SSLRemCertIssNamePtr: MQPTR,
    pub SecurityParms: *mut MQCSP,
    // Ver:5
    pub CurHdrCompression: MQLONG,
    pub CurMsgCompression: MQLONG,
    // Ver:6
    pub Hconn: MQHCONN,
    pub SharingConversations: MQBOOL,
    // Ver:7
    pub MCAUserSource: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    pub pEntryPoints: *mut MQIEP,
    // Ver:8
    pub RemoteProduct: MQCHAR4,
    pub RemoteVersion: MQCHAR8,
    #[cfg(target_pointer_width = "64")]
    pub _final_pad: [u8; 4],
}

/// MQDXP: Data-conversion exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQDXP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitOptions: MQLONG,
    pub AppOptions: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub DataLength: MQLONG,
    pub CompCode: MQLONG,
    pub Reason: MQLONG,
    pub ExitResponse: MQLONG,
    pub Hconn: MQHCONN,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    // Ver:2
    pub pEntryPoints: *mut MQIEP,
}

/// MQNXP: Pre-connect exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQNXP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub ExitDataLength: MQLONG,
    pub pExitDataPtr: PMQCHAR,
    pub pExitUserAreaPtr: MQPTR,
    pub ppMQCDArrayPtr: *mut *mut MQCD,
    pub MQCDArrayCount: MQLONG,
    pub MaxMQCDVersion: MQLONG,
}

// ---------------------------------------------------------------------------
//  Publish exits
// ---------------------------------------------------------------------------

/// MQPBC: Publication context
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQPBC {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub PubTopicString: MQCHARV,
    pub MsgDescPtr: *mut MQMD,
}

/// MQPSXP: Publish exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQPSXP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub Hconn: MQHCONN,
    pub ExitUserArea: MQBYTE16,
    pub ExitData: MQCHAR32,
    pub QMgrName: MQCHAR48,
    pub MsgHandle: MQHMSG,
    pub MsgDescPtr: *mut MQMD,
    pub MsgInPtr: MQPTR,
    pub MsgInLength: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    pub MsgOutPtr: MQPTR,
    pub MsgOutLength: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _final_pad: [u8; 4],
}

/// MQSBC: Subscription context
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQSBC {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub DestinationQMgrName: MQCHAR48,
    pub DestinationQName: MQCHAR48,
    pub SubType: MQLONG,
    pub SubOptions: MQLONG,
    pub ObjectName: MQCHARV,
    pub ObjectString: MQCHARV,
    pub SubTopicString: MQCHARV,
    pub SubName: MQCHARV,
    pub SelectionString: MQCHARV,
}

// ---------------------------------------------------------------------------
//  Cluster workload exits
// ---------------------------------------------------------------------------

/// MQWCR: Cluster workload cluster record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWCR {
    pub ClusterName: MQCHAR48,
    pub ClusterRecOffset: MQLONG,
    pub ClusterFlags: MQLONG,
}

/// MQWDR: Cluster workload destination record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWDR {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub QMgrFlags: MQLONG,
    pub QMgrIdentifier: MQCHAR48,
    pub QMgrName: MQCHAR48,
    pub ClusterRecOffset: MQLONG,
    pub ChannelState: MQLONG,
    pub ChannelDefOffset: MQLONG,
    // Ver:2
    pub DestSeqNumber: MQLONG,
    pub DestSeqFactor: MQINT64,
}

/// Version-1 destination record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWDR1 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub QMgrFlags: MQLONG,
    pub QMgrIdentifier: MQCHAR48,
    pub QMgrName: MQCHAR48,
    pub ClusterRecOffset: MQLONG,
    pub ChannelState: MQLONG,
    pub ChannelDefOffset: MQLONG,
}

pub type MQWDR2 = MQWDR;

/// MQWQR: Cluster workload queue record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWQR {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub QFlags: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrIdentifier: MQCHAR48,
    pub ClusterRecOffset: MQLONG,
    pub QType: MQLONG,
    pub QDesc: MQCHAR64,
    pub DefBind: MQLONG,
    pub DefPersistence: MQLONG,
    pub DefPriority: MQLONG,
    pub InhibitPut: MQLONG,
    // Ver:2
    pub CLWLQueuePriority: MQLONG,
    pub CLWLQueueRank: MQLONG,
    // Ver:3
    pub DefPutResponse: MQLONG,
    // Ver:4
    pub CapExpiry: MQLONG,
}

/// Version-1 queue record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWQR1 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub QFlags: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrIdentifier: MQCHAR48,
    pub ClusterRecOffset: MQLONG,
    pub QType: MQLONG,
    pub QDesc: MQCHAR64,
    pub DefBind: MQLONG,
    pub DefPersistence: MQLONG,
    pub DefPriority: MQLONG,
    pub InhibitPut: MQLONG,
}

/// Version-2 queue record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWQR2 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub QFlags: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrIdentifier: MQCHAR48,
    pub ClusterRecOffset: MQLONG,
    pub QType: MQLONG,
    pub QDesc: MQCHAR64,
    pub DefBind: MQLONG,
    pub DefPersistence: MQLONG,
    pub DefPriority: MQLONG,
    pub InhibitPut: MQLONG,
    pub CLWLQueuePriority: MQLONG,
    pub CLWLQueueRank: MQLONG,
}

/// Version-3 queue record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWQR3 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub QFlags: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrIdentifier: MQCHAR48,
    pub ClusterRecOffset: MQLONG,
    pub QType: MQLONG,
    pub QDesc: MQCHAR64,
    pub DefBind: MQLONG,
    pub DefPersistence: MQLONG,
    pub DefPriority: MQLONG,
    pub InhibitPut: MQLONG,
    pub CLWLQueuePriority: MQLONG,
    pub CLWLQueueRank: MQLONG,
    pub DefPutResponse: MQLONG,
}

pub type MQWQR4 = MQWQR;

/// MQWXP: Cluster workload exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWXP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub Flags: MQLONG,
    pub ExitUserArea: MQBYTE16,
    pub ExitData: MQCHAR32,
    pub MsgDescPtr: *mut MQMD,
    pub MsgBufferPtr: MQPTR,
    pub MsgBufferLength: MQLONG,
    pub MsgLength: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrName: MQCHAR48,
    pub DestinationCount: MQLONG,
    pub DestinationChosen: MQLONG,
    pub DestinationArrayPtr: *mut *mut MQWDR,
    pub QArrayPtr: *mut *mut MQWQR,
    // Ver:2
    pub CacheContext: MQPTR,
    pub CacheType: MQLONG,
    // Ver:3
    pub CLWLMRUChannels: MQLONG,
    // Ver:4
    pub pEntryPoints: *mut MQIEP,
}

/// Version-1 workload exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWXP1 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub Flags: MQLONG,
    pub ExitUserArea: MQBYTE16,
    pub ExitData: MQCHAR32,
    pub MsgDescPtr: *mut MQMD,
    pub MsgBufferPtr: MQPTR,
    pub MsgBufferLength: MQLONG,
    pub MsgLength: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrName: MQCHAR48,
    pub DestinationCount: MQLONG,
    pub DestinationChosen: MQLONG,
    pub DestinationArrayPtr: *mut *mut MQWDR,
    pub QArrayPtr: *mut *mut MQWQR,
}

/// Version-2 workload exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWXP2 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub Flags: MQLONG,
    pub ExitUserArea: MQBYTE16,
    pub ExitData: MQCHAR32,
    pub MsgDescPtr: *mut MQMD,
    pub MsgBufferPtr: MQPTR,
    pub MsgBufferLength: MQLONG,
    pub MsgLength: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrName: MQCHAR48,
    pub DestinationCount: MQLONG,
    pub DestinationChosen: MQLONG,
    pub DestinationArrayPtr: *mut *mut MQWDR,
    pub QArrayPtr: *mut *mut MQWQR,
    pub CacheContext: MQPTR,
    pub CacheType: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _final_pad: [u8; 4],
}

/// Version-3 workload exit parameter
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWXP3 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ExitId: MQLONG,
    pub ExitReason: MQLONG,
    pub ExitResponse: MQLONG,
    pub ExitResponse2: MQLONG,
    pub Feedback: MQLONG,
    pub Flags: MQLONG,
    pub ExitUserArea: MQBYTE16,
    pub ExitData: MQCHAR32,
    pub MsgDescPtr: *mut MQMD,
    pub MsgBufferPtr: MQPTR,
    pub MsgBufferLength: MQLONG,
    pub MsgLength: MQLONG,
    pub QName: MQCHAR48,
    pub QMgrName: MQCHAR48,
    pub DestinationCount: MQLONG,
    pub DestinationChosen: MQLONG,
    pub DestinationArrayPtr: *mut *mut MQWDR,
    pub QArrayPtr: *mut *mut MQWQR,
    pub CacheContext: MQPTR,
    pub CacheType: MQLONG,
    pub CLWLMRUChannels: MQLONG,
}

pub type MQWXP4 = MQWXP;

mq_struct!(MQACH = MQACH_STRUC_ID, versioned);
mq_struct!(MQAXC = MQAXC_STRUC_ID, versioned);
mq_struct!(MQAXP = MQAXP_STRUC_ID, versioned);
mq_struct!(MQXEPO = MQXEPO_STRUC_ID, versioned);
mq_struct!(MQIEP = MQIEP_STRUC_ID, versioned);
mq_struct!(MQCXP = MQCXP_STRUC_ID, versioned);
mq_struct!(MQDXP = MQDXP_STRUC_ID, versioned);
mq_struct!(MQNXP = MQNXP_STRUC_ID, versioned);
mq_struct!(MQPBC = MQPBC_STRUC_ID, versioned);
mq_struct!(MQPSXP = MQPSXP_STRUC_ID, versioned);
mq_struct!(MQSBC = MQSBC_STRUC_ID, versioned);
mq_struct!(MQWCR);
mq_struct!(MQWDR = MQWDR_STRUC_ID, versioned);
mq_struct!(MQWDR1 = MQWDR_STRUC_ID, versioned);
mq_struct!(MQWQR = MQWQR_STRUC_ID, versioned);
mq_struct!(MQWQR1 = MQWQR_STRUC_ID, versioned);
mq_struct!(MQWQR2 = MQWQR_STRUC_ID, versioned);
mq_struct!(MQWQR3 = MQWQR_STRUC_ID, versioned);
mq_struct!(MQWXP = MQWXP_STRUC_ID, versioned);
mq_struct!(MQWXP1 = MQWXP_STRUC_ID, versioned);
mq_struct!(MQWXP2 = MQWXP_STRUC_ID, versioned);
mq_struct!(MQWXP3 = MQWXP_STRUC_ID, versioned);

// ---------------------------------------------------------------------------
//  Initialisers
// ---------------------------------------------------------------------------

pub const MQACH_DEFAULT: MQACH = MQACH {
    StrucId: chars(MQACH_STRUC_ID),
    Version: MQACH_VERSION_1,
    StrucLength: MQACH_LENGTH_1,
    ChainAreaLength: 0,
    ExitInfoName: nul(),
    NextChainAreaPtr: null_mut(),
};

pub const MQAXC_DEFAULT: MQAXC = MQAXC {
    StrucId: chars(MQAXC_STRUC_ID),
    Version: MQAXC_VERSION_1,
    Environment: MQXE_OTHER,
    UserId: nul(),
    SecurityId: MQSID_NONE,
    ConnectionName: nul(),
    LongMCAUserIdLength: 0,
    LongRemoteUserIdLength: 0,
    LongMCAUserIdPtr: null_mut(),
    LongRemoteUserIdPtr: null_mut(),
    ApplName: nul(),
    ApplType: MQAT_DEFAULT,
    ProcessId: 0,
    ThreadId: 0,
    ChannelName: nul(),
    Reserved1: [0; 4],
    pChannelDefinition: null_mut(),
};

pub const MQAXP_DEFAULT: MQAXP = MQAXP {
    StrucId: chars(MQAXP_STRUC_ID),
    Version: MQAXP_VERSION_1,
    ExitId: MQXT_API_EXIT,
    ExitReason: MQXR_CONNECTION,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    APICallerType: MQXACT_EXTERNAL,
    ExitUserArea: MQXUA_NONE,
    ExitData: nul(),
    ExitInfoName: nul(),
    ExitPDArea: MQXPDA_NONE,
    QMgrName: nul(),
    ExitChainAreaPtr: null_mut(),
    Hconfig: null_mut(),
    Function: MQXF_INIT,
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    ExitMsgHandle: MQHM_NONE,
};

pub const MQXEPO_DEFAULT: MQXEPO = MQXEPO {
    StrucId: chars(MQXEPO_STRUC_ID),
    Version: MQXEPO_VERSION_1,
    Options: MQXEPO_NONE,
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    ExitProperties: MQCHARV_DEFAULT,
};

pub const MQIEP_DEFAULT: MQIEP = MQIEP {
    StrucId: chars(MQIEP_STRUC_ID),
    Version: MQIEP_VERSION_1,
    StrucLength: MQIEP_LENGTH_1,
    Flags: MQIEPF_NONE,
    Reserved: null_mut(),
    MQBACK_Call: null_mut(),
    MQBEGIN_Call: null_mut(),
    MQBUFMH_Call: null_mut(),
    MQCB_Call: null_mut(),
    MQCLOSE_Call: null_mut(),
    MQCMIT_Call: null_mut(),
    MQCONN_Call: null_mut(),
    MQCONNX_Call: null_mut(),
    MQCRTMH_Call: null_mut(),
    MQCTL_Call: null_mut(),
    MQDISC_Call: null_mut(),
    MQDLTMH_Call: null_mut(),
    MQDLTMP_Call: null_mut(),
    MQGET_Call: null_mut(),
    MQINQ_Call: null_mut(),
    MQINQMP_Call: null_mut(),
    MQMHBUF_Call: null_mut(),
    MQOPEN_Call: null_mut(),
    MQPUT_Call: null_mut(),
    MQPUT1_Call: null_mut(),
    MQSET_Call: null_mut(),
    MQSETMP_Call: null_mut(),
    MQSTAT_Call: null_mut(),
    MQSUB_Call: null_mut(),
    MQSUBRQ_Call: null_mut(),
    MQXCLWLN_Call: null_mut(),
    MQXCNVC_Call: null_mut(),
    MQXDX_Call: null_mut(),
    MQXEP_Call: null_mut(),
    MQZEP_Call: null_mut(),
};

pub const MQCXP_DEFAULT: MQCXP = MQCXP {
    StrucId: chars(MQCXP_STRUC_ID),
    Version: MQCXP_VERSION_1,
    ExitId: 0,
    ExitReason: 0,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    MaxSegmentLength: 0,
    ExitUserArea: MQXUA_NONE,
    ExitData: nul(),
    MsgRetryCount: 0,
    MsgRetryInterval: 0,
    MsgRetryReason: MQRC_NONE,
    HeaderLength: 0,
    PartnerName: nul(),
    FAPLevel: 0,
    CapabilityFlags: 0,
    ExitNumber: 0,
    ExitSpace: 0,
    SSLCertUserid: nul(),
    SSLRemCertIssNameLength: 0,
    SSLRemCertIssNamePtr: null_mut(),
    SecurityParms: null_mut(),
    CurHdrCompression: MQCOMPRESS_NONE,
    CurMsgCompression: MQCOMPRESS_NONE,
    Hconn: MQHC_UNUSABLE_HCONN,
    SharingConversations: 0,
    MCAUserSource: MQMCAS_USER_DEFINED,
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    pEntryPoints: null_mut(),
    RemoteProduct: nul(),
    RemoteVersion: nul(),
    #[cfg(target_pointer_width = "64")]
    _final_pad: [0; 4],
};

pub const MQDXP_DEFAULT: MQDXP = MQDXP {
    StrucId: chars(MQDXP_STRUC_ID),
    Version: MQDXP_VERSION_1,
    ExitOptions: 0,
    AppOptions: 0,
    Encoding: 0,
    CodedCharSetId: 0,
    DataLength: 0,
    CompCode: MQCC_OK,
    Reason: MQRC_NONE,
    ExitResponse: MQXDR_OK,
    Hconn: 0,
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    pEntryPoints: null_mut(),
};

pub const MQNXP_DEFAULT: MQNXP = MQNXP {
    StrucId: chars(MQNXP_STRUC_ID),
    Version: MQNXP_VERSION_1,
    ExitId: MQXT_PRECONNECT_EXIT,
    ExitReason: 0,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    ExitDataLength: 0,
    pExitDataPtr: null_mut(),
    pExitUserAreaPtr: null_mut(),
    ppMQCDArrayPtr: null_mut(),
    MQCDArrayCount: 0,
    MaxMQCDVersion: 0,
};

pub const MQPBC_DEFAULT: MQPBC = MQPBC {
    StrucId: chars(MQPBC_STRUC_ID),
    Version: MQPBC_VERSION_1,
    PubTopicString: MQCHARV_DEFAULT,
    MsgDescPtr: null_mut(),
};

pub const MQPSXP_DEFAULT: MQPSXP = MQPSXP {
    StrucId: chars(MQPSXP_STRUC_ID),
    Version: MQPSXP_VERSION_1,
    ExitId: MQXT_PUBLISH_EXIT,
    ExitReason: 0,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    Hconn: MQHC_UNUSABLE_HCONN,
    ExitUserArea: MQXUA_NONE,
    ExitData: nul(),
    QMgrName: nul(),
    MsgHandle: MQHM_NONE,
    MsgDescPtr: null_mut(),
    MsgInPtr: null_mut(),
    MsgInLength: 0,
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    MsgOutPtr: null_mut(),
    MsgOutLength: 0,
    #[cfg(target_pointer_width = "64")]
    _final_pad: [0; 4],
};

pub const MQSBC_DEFAULT: MQSBC = MQSBC {
    StrucId: chars(MQSBC_STRUC_ID),
    Version: MQSBC_VERSION_1,
    DestinationQMgrName: nul(),
    DestinationQName: nul(),
    SubType: 0,
    SubOptions: MQSO_NONE,
    ObjectName: MQCHARV_DEFAULT,
    ObjectString: MQCHARV_DEFAULT,
    SubTopicString: MQCHARV_DEFAULT,
    SubName: MQCHARV_DEFAULT,
    SelectionString: MQCHARV_DEFAULT,
};

pub const MQWCR_DEFAULT: MQWCR = MQWCR { ClusterName: nul(), ClusterRecOffset: 0, ClusterFlags: 0 };

pub const MQWDR_DEFAULT: MQWDR = MQWDR {
    StrucId: chars(MQWDR_STRUC_ID),
    Version: MQWDR_VERSION_1,
    StrucLength: MQWDR_LENGTH_1,
    QMgrFlags: MQQMF_NONE,
    QMgrIdentifier: nul(),
    QMgrName: nul(),
    ClusterRecOffset: 0,
    ChannelState: MQCHS_INACTIVE,
    ChannelDefOffset: 0,
    DestSeqNumber: 0,
    DestSeqFactor: 0,
};

pub const MQWDR1_DEFAULT: MQWDR1 = MQWDR1 {
    StrucId: chars(MQWDR_STRUC_ID),
    Version: MQWDR_VERSION_1,
    StrucLength: MQWDR_LENGTH_1,
    QMgrFlags: MQQMF_NONE,
    QMgrIdentifier: nul(),
    QMgrName: nul(),
    ClusterRecOffset: 0,
    ChannelState: MQCHS_INACTIVE,
    ChannelDefOffset: 0,
};

pub const MQWDR2_DEFAULT: MQWDR2 =
    MQWDR2 { Version: MQWDR_VERSION_2, StrucLength: MQWDR_LENGTH_2, ..MQWDR_DEFAULT };

pub const MQWQR_DEFAULT: MQWQR = MQWQR {
    StrucId: chars(MQWQR_STRUC_ID),
    Version: MQWQR_VERSION_1,
    StrucLength: MQWQR_LENGTH_1,
    QFlags: MQQF_NONE,
    QName: nul(),
    QMgrIdentifier: nul(),
    ClusterRecOffset: 0,
    QType: 0,
    QDesc: nul(),
    DefBind: MQBND_BIND_ON_OPEN,
    DefPersistence: MQPER_NOT_PERSISTENT,
    DefPriority: 0,
    InhibitPut: MQQA_PUT_ALLOWED,
    CLWLQueuePriority: 0,
    CLWLQueueRank: 0,
    DefPutResponse: MQPRT_SYNC_RESPONSE,
    CapExpiry: MQCEX_NOLIMIT,
};

pub const MQWQR1_DEFAULT: MQWQR1 = MQWQR1 {
    StrucId: chars(MQWQR_STRUC_ID),
    Version: MQWQR_VERSION_1,
    StrucLength: MQWQR_LENGTH_1,
    QFlags: MQQF_NONE,
    QName: nul(),
    QMgrIdentifier: nul(),
    ClusterRecOffset: 0,
    QType: 0,
    QDesc: nul(),
    DefBind: MQBND_BIND_ON_OPEN,
    DefPersistence: MQPER_NOT_PERSISTENT,
    DefPriority: 0,
    InhibitPut: MQQA_PUT_ALLOWED,
};

pub const MQWQR2_DEFAULT: MQWQR2 = MQWQR2 {
    StrucId: chars(MQWQR_STRUC_ID),
    Version: MQWQR_VERSION_2,
    StrucLength: MQWQR_LENGTH_2,
    QFlags: MQQF_NONE,
    QName: nul(),
    QMgrIdentifier: nul(),
    ClusterRecOffset: 0,
    QType: 0,
    QDesc: nul(),
    DefBind: MQBND_BIND_ON_OPEN,
    DefPersistence: MQPER_NOT_PERSISTENT,
    DefPriority: 0,
    InhibitPut: MQQA_PUT_ALLOWED,
    CLWLQueuePriority: 0,
    CLWLQueueRank: 0,
};

pub const MQWQR3_DEFAULT: MQWQR3 = MQWQR3 {
    StrucId: chars(MQWQR_STRUC_ID),
    Version: MQWQR_VERSION_3,
    StrucLength: MQWQR_LENGTH_3,
    QFlags: MQQF_NONE,
    QName: nul(),
    QMgrIdentifier: nul(),
    ClusterRecOffset: 0,
    QType: 0,
    QDesc: nul(),
    DefBind: MQBND_BIND_ON_OPEN,
    DefPersistence: MQPER_NOT_PERSISTENT,
    DefPriority: 0,
    InhibitPut: MQQA_PUT_ALLOWED,
    CLWLQueuePriority: 0,
    CLWLQueueRank: 0,
    DefPutResponse: MQPRT_SYNC_RESPONSE,
};

pub const MQWQR4_DEFAULT: MQWQR4 =
    MQWQR4 { Version: MQWQR_VERSION_4, StrucLength: MQWQR_LENGTH_4, ..MQWQR_DEFAULT };

pub const MQWXP_DEFAULT: MQWXP = MQWXP {
    StrucId: chars(MQWXP_STRUC_ID),
    Version: MQWXP_VERSION_1,
    ExitId: MQXT_CLUSTER_WORKLOAD_EXIT,
    ExitReason: 0,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    Flags: 0,
    ExitUserArea: MQXUA_NONE,
    ExitData: nul(),
    MsgDescPtr: null_mut(),
    MsgBufferPtr: null_mut(),
    MsgBufferLength: 0,
    MsgLength: 0,
    QName: nul(),
    QMgrName: nul(),
    DestinationCount: 0,
    DestinationChosen: 0,
    DestinationArrayPtr: null_mut(),
    QArrayPtr: null_mut(),
    CacheContext: null_mut(),
    CacheType: MQCLCT_DYNAMIC,
    CLWLMRUChannels: 0,
    pEntryPoints: null_mut(),
};

pub const MQWXP1_DEFAULT: MQWXP1 = MQWXP1 {
    StrucId: chars(MQWXP_STRUC_ID),
    Version: MQWXP_VERSION_1,
    ExitId: MQXT_CLUSTER_WORKLOAD_EXIT,
    ExitReason: 0,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    Flags: 0,
    ExitUserArea: MQXUA_NONE,
    ExitData: nul(),
    MsgDescPtr: null_mut(),
    MsgBufferPtr: null_mut(),
    MsgBufferLength: 0,
    MsgLength: 0,
    QName: nul(),
    QMgrName: nul(),
    DestinationCount: 0,
    DestinationChosen: 0,
    DestinationArrayPtr: null_mut(),
    QArrayPtr: null_mut(),
};

pub const MQWXP2_DEFAULT: MQWXP2 = MQWXP2 {
    StrucId: chars(MQWXP_STRUC_ID),
    Version: MQWXP_VERSION_2,
    ExitId: MQXT_CLUSTER_WORKLOAD_EXIT,
    ExitReason: 0,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    Flags: 0,
    ExitUserArea: MQXUA_NONE,
    ExitData: nul(),
    MsgDescPtr: null_mut(),
    MsgBufferPtr: null_mut(),
    MsgBufferLength: 0,
    MsgLength: 0,
    QName: nul(),
    QMgrName: nul(),
    DestinationCount: 0,
    DestinationChosen: 0,
    DestinationArrayPtr: null_mut(),
    QArrayPtr: null_mut(),
    CacheContext: null_mut(),
    CacheType: MQCLCT_DYNAMIC,
    #[cfg(target_pointer_width = "64")]
    _final_pad: [0; 4],
};

pub const MQWXP3_DEFAULT: MQWXP3 = MQWXP3 {
    StrucId: chars(MQWXP_STRUC_ID),
    Version: MQWXP_VERSION_3,
    ExitId: MQXT_CLUSTER_WORKLOAD_EXIT,
    ExitReason: 0,
    ExitResponse: MQXCC_OK,
    ExitResponse2: MQXR2_DEFAULT_CONTINUATION,
    Feedback: MQFB_NONE,
    Flags: 0,
    ExitUserArea: MQXUA_NONE,
    ExitData: nul(),
    MsgDescPtr: null_mut(),
    MsgBufferPtr: null_mut(),
    MsgBufferLength: 0,
    MsgLength: 0,
    QName: nul(),
    QMgrName: nul(),
    DestinationCount: 0,
    DestinationChosen: 0,
    DestinationArrayPtr: null_mut(),
    QArrayPtr: null_mut(),
    CacheContext: null_mut(),
    CacheType: MQCLCT_DYNAMIC,
    CLWLMRUChannels: 0,
};

pub const MQWXP4_DEFAULT: MQWXP4 = MQWXP4 { Version: MQWXP_VERSION_4, ..MQWXP_DEFAULT };

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
    MQACH => MQACH_DEFAULT,
    MQAXC => MQAXC_DEFAULT,
    MQAXP => MQAXP_DEFAULT,
    MQXEPO => MQXEPO_DEFAULT,
    MQIEP => MQIEP_DEFAULT,
    MQCXP => MQCXP_DEFAULT,
    MQDXP => MQDXP_DEFAULT,
    MQNXP => MQNXP_DEFAULT,
    MQPBC => MQPBC_DEFAULT,
    MQPSXP => MQPSXP_DEFAULT,
    MQSBC => MQSBC_DEFAULT,
    MQWCR => MQWCR_DEFAULT,
    MQWDR => MQWDR_DEFAULT,
    MQWDR1 => MQWDR1_DEFAULT,
    MQWQR => MQWQR_DEFAULT,
    MQWQR1 => MQWQR1_DEFAULT,
    MQWQR2 => MQWQR2_DEFAULT,
    MQWQR3 => MQWQR3_DEFAULT,
    MQWXP => MQWXP_DEFAULT,
    MQWXP1 => MQWXP1_DEFAULT,
    MQWXP2 => MQWXP2_DEFAULT,
    MQWXP3 => MQWXP3_DEFAULT,
);

#[cfg(test)]
mod tests {
    use mq_binary::text::as_bytes;

    use super::*;

    fn is_nul(field: &[MQCHAR]) -> bool {
        as_bytes(field).iter().all(|&b| b == 0)
    }

    #[test]
    fn test_api_exit_defaults() {
        let ach = MQACH_DEFAULT;
        assert_eq!(as_bytes(&ach.StrucId), b"ACH ");
        assert_eq!(ach.Version, 1);
        assert_eq!(ach.StrucLength, MQACH::SIZE as MQLONG);
        assert_eq!(ach.ChainAreaLength, 0);
        assert!(is_nul(&ach.ExitInfoName));
        assert!(ach.NextChainAreaPtr.is_null());

        let axc = MQAXC_DEFAULT;
        assert_eq!(as_bytes(&axc.StrucId), b"AXC ");
        assert_eq!(axc.Version, 1);
        assert_eq!(axc.Environment, MQXE_OTHER);
        assert!(is_nul(&axc.UserId));
        assert_eq!(axc.SecurityId, [0; 40]);
        assert!(is_nul(&axc.ConnectionName));
        assert!(axc.LongMCAUserIdPtr.is_null());
        assert!(axc.LongRemoteUserIdPtr.is_null());
        assert_eq!(axc.ApplType, MQAT_DEFAULT);
        assert!(is_nul(&axc.ChannelName));
        assert!(axc.pChannelDefinition.is_null());

        let axp = MQAXP_DEFAULT;
        assert_eq!(as_bytes(&axp.StrucId), b"AXP ");
        assert_eq!(axp.Version, 1);
        assert_eq!(axp.ExitId, MQXT_API_EXIT);
        assert_eq!(axp.ExitReason, MQXR_CONNECTION);
        assert_eq!(axp.ExitResponse, MQXCC_OK);
        assert_eq!(axp.ExitResponse2, MQXR2_DEFAULT_CONTINUATION);
        assert_eq!(axp.Feedback, MQFB_NONE);
        assert_eq!(axp.APICallerType, MQXACT_EXTERNAL);
        assert_eq!(axp.ExitUserArea, [0; 16]);
        assert_eq!(axp.ExitPDArea, [0; 48]);
        assert!(is_nul(&axp.QMgrName));
        assert!(axp.ExitChainAreaPtr.is_null());
        assert!(axp.Hconfig.is_null());
        assert_eq!(axp.Function, MQXF_INIT);
        assert_eq!(axp.ExitMsgHandle, MQHM_NONE);
    }

    #[test]
    fn test_entry_point_defaults() {
        let xepo = MQXEPO_DEFAULT;
        assert_eq!(as_bytes(&xepo.StrucId), b"XEPO");
        assert_eq!(xepo.Options, MQXEPO_NONE);
        assert_eq!(xepo.ExitProperties, MQCHARV_DEFAULT);

        let iep = MQIEP_DEFAULT;
        assert_eq!(as_bytes(&iep.StrucId), b"IEP ");
        assert_eq!(iep.StrucLength, MQIEP::SIZE as MQLONG);
        assert_eq!(iep.Flags, MQIEPF_NONE);
        // Everything after the four header fields is a null address.
        assert!(iep.as_bytes()[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_channel_exit_default() {
        let cxp = MQCXP_DEFAULT;
        assert_eq!(as_bytes(&cxp.StrucId), b"CXP ");
        assert_eq!(cxp.Version, 1);
        assert_eq!(cxp.ExitResponse, MQXCC_OK);
        assert_eq!(cxp.MsgRetryReason, MQRC_NONE);
        assert!(is_nul(&cxp.PartnerName));
        assert_eq!(cxp.ExitNumber, 0);
        assert!(cxp.SecurityParms.is_null());
        assert_eq!(cxp.CurHdrCompression, MQCOMPRESS_NONE);
        assert_eq!(cxp.CurMsgCompression, MQCOMPRESS_NONE);
        assert_eq!(cxp.Hconn, MQHC_UNUSABLE_HCONN);
        assert_eq!(cxp.MCAUserSource, MQMCAS_USER_DEFINED);
        assert!(cxp.pEntryPoints.is_null());
        assert!(is_nul(&cxp.RemoteProduct));
        assert!(is_nul(&cxp.RemoteVersion));
    }

    #[test]
    fn test_conversion_and_preconnect_defaults() {
        let dxp = MQDXP_DEFAULT;
        assert_eq!(as_bytes(&dxp.StrucId), b"DXP ");
        assert_eq!(dxp.CompCode, MQCC_OK);
        assert_eq!(dxp.Reason, MQRC_NONE);
        assert_eq!(dxp.ExitResponse, MQXDR_OK);
        assert_eq!(dxp.Hconn, 0);
        assert!(dxp.pEntryPoints.is_null());

        let nxp = MQNXP_DEFAULT;
        assert_eq!(as_bytes(&nxp.StrucId), b"NXP ");
        assert_eq!(nxp.ExitId, MQXT_PRECONNECT_EXIT);
        assert_eq!(nxp.ExitResponse, MQXCC_OK);
        assert!(nxp.pExitDataPtr.is_null());
        assert!(nxp.ppMQCDArrayPtr.is_null());
        assert_eq!(nxp.MQCDArrayCount, 0);
    }

    #[test]
    fn test_publish_exit_defaults() {
        let pbc = MQPBC_DEFAULT;
        assert_eq!(as_bytes(&pbc.StrucId), b"PBC ");
        assert_eq!(pbc.PubTopicString, MQCHARV_DEFAULT);
        assert!(pbc.MsgDescPtr.is_null());

        let psxp = MQPSXP_DEFAULT;
        assert_eq!(as_bytes(&psxp.StrucId), b"PSXP");
        assert_eq!(psxp.ExitId, MQXT_PUBLISH_EXIT);
        assert_eq!(psxp.Hconn, MQHC_UNUSABLE_HCONN);
        assert_eq!(psxp.MsgHandle, MQHM_NONE);
        assert!(psxp.MsgInPtr.is_null());
        assert!(psxp.MsgOutPtr.is_null());

        let sbc = MQSBC_DEFAULT;
        assert_eq!(as_bytes(&sbc.StrucId), b"SBC ");
        assert!(is_nul(&sbc.DestinationQMgrName));
        assert_eq!(sbc.SubOptions, MQSO_NONE);
        assert_eq!(sbc.SubTopicString, MQCHARV_DEFAULT);
        assert_eq!(sbc.SelectionString.VSCCSID, MQCCSI_APPL);
    }

    #[test]
    fn test_destination_record_versions() {
        assert!(is_nul(&MQWCR_DEFAULT.ClusterName));
        assert_eq!(MQWCR_DEFAULT.ClusterFlags, 0);

        assert_eq!(MQWDR_DEFAULT.Version, 1);
        assert_eq!(MQWDR_DEFAULT.StrucLength, MQWDR1::SIZE as MQLONG);
        assert_eq!(MQWDR_DEFAULT.ChannelState, MQCHS_INACTIVE);
        assert_eq!(MQWDR1_DEFAULT.as_bytes(), &MQWDR_DEFAULT.as_bytes()[..MQWDR1::SIZE]);

        assert_eq!(MQWDR2_DEFAULT.Version, 2);
        assert_eq!(MQWDR2_DEFAULT.StrucLength, MQWDR2::SIZE as MQLONG);
        assert_eq!(MQWDR2_DEFAULT.DestSeqFactor, 0);
    }

    #[test]
    fn test_queue_record_versions() {
        let wqr = MQWQR_DEFAULT;
        assert_eq!(as_bytes(&wqr.StrucId), b"WQR ");
        assert_eq!(wqr.DefBind, MQBND_BIND_ON_OPEN);
        assert_eq!(wqr.DefPersistence, MQPER_NOT_PERSISTENT);
        assert_eq!(wqr.InhibitPut, MQQA_PUT_ALLOWED);
        assert_eq!(wqr.DefPutResponse, MQPRT_SYNC_RESPONSE);
        assert_eq!(wqr.CapExpiry, MQCEX_NOLIMIT);

        let lengths = [
            (MQWQR1_DEFAULT.Version, MQWQR1_DEFAULT.StrucLength, MQWQR1::SIZE),
            (MQWQR2_DEFAULT.Version, MQWQR2_DEFAULT.StrucLength, MQWQR2::SIZE),
            (MQWQR3_DEFAULT.Version, MQWQR3_DEFAULT.StrucLength, MQWQR3::SIZE),
            (MQWQR4_DEFAULT.Version, MQWQR4_DEFAULT.StrucLength, MQWQR4::SIZE),
        ];
        for (i, (version, length, size)) in lengths.into_iter().enumerate() {
            assert_eq!(version, i as MQLONG + 1);
            assert_eq!(length as usize, size);
        }

        // Past the version and length fields every version shares its prefix.
        assert_eq!(MQWQR2_DEFAULT.as_bytes()[12..], MQWQR4_DEFAULT.as_bytes()[12..MQWQR2::SIZE]);
    }

    #[test]
    fn test_workload_exit_versions() {
        let wxp = MQWXP_DEFAULT;
        assert_eq!(as_bytes(&wxp.StrucId), b"WXP ");
        assert_eq!(wxp.Version, 1);
        assert_eq!(wxp.ExitId, MQXT_CLUSTER_WORKLOAD_EXIT);
        assert_eq!(wxp.ExitResponse, MQXCC_OK);
        assert!(wxp.MsgDescPtr.is_null());
        assert!(wxp.DestinationArrayPtr.is_null());
        assert_eq!(wxp.CacheType, MQCLCT_DYNAMIC);
        assert!(wxp.pEntryPoints.is_null());

        assert_eq!(MQWXP1_DEFAULT.Version, 1);
        assert_eq!(MQWXP2_DEFAULT.Version, 2);
        assert_eq!(MQWXP3_DEFAULT.Version, 3);
        assert_eq!(MQWXP4_DEFAULT.Version, 4);
        assert_eq!(MQWXP1_DEFAULT.as_bytes(), &MQWXP_DEFAULT.as_bytes()[..MQWXP1::SIZE]);
        assert_eq!(MQWXP3_DEFAULT.as_bytes()[8..], MQWXP_DEFAULT.as_bytes()[8..MQWXP3::SIZE]);
    }

    #[test]
    fn test_default_trait_matches_constants() {
        assert_eq!(MQAXP::default(), MQAXP_DEFAULT);
        assert_eq!(MQCXP::default(), MQCXP_DEFAULT);
        assert_eq!(MQIEP::default(), MQIEP_DEFAULT);
        assert_eq!(MQWXP2::default(), MQWXP2_DEFAULT);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_layout_sizes() {
        use std::mem::offset_of;

        assert_eq!(MQACH::SIZE, 72);
        assert_eq!(MQAXC::SIZE, 424);
        assert_eq!(offset_of!(MQAXC, LongMCAUserIdPtr), 336);
        assert_eq!(MQAXP::SIZE, 256);
        assert_eq!(offset_of!(MQAXP, ExitMsgHandle), 248);
        assert_eq!(MQXEPO::SIZE, 40);
        assert_eq!(MQIEP::SIZE, 264);
        assert_eq!(MQCXP::SIZE, 240);
        assert_eq!(offset_of!(MQCXP, SecurityParms), 184);
        assert_eq!(offset_of!(MQCXP, pEntryPoints), 216);
        assert_eq!(MQDXP::SIZE, 56);
        assert_eq!(MQNXP::SIZE, 64);
        assert_eq!(MQPBC::SIZE, 40);
        assert_eq!(MQPSXP::SIZE, 176);
        assert_eq!(MQSBC::SIZE, 232);
        assert_eq!(MQWCR::SIZE, 56);
        assert_eq!(MQWDR1::SIZE, 124);
        assert_eq!(MQWDR::SIZE, 136);
        assert_eq!(MQWQR1::SIZE, 200);
        assert_eq!(MQWQR2::SIZE, 208);
        assert_eq!(MQWQR3::SIZE, 212);
        assert_eq!(MQWQR::SIZE, 216);
        assert_eq!(MQWXP1::SIZE, 224);
        assert_eq!(MQWXP2::SIZE, 240);
        assert_eq!(MQWXP3::SIZE, 240);
        assert_eq!(MQWXP::SIZE, 248);
    }
}
