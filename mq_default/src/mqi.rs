//! MQI structure layouts.
//!
//! Field order and types follow the C headers at the latest structure version.
//! Where a C compiler pads before an 8-byte field on 64-bit targets the padding
//! is spelled out as a `_pad*` field, so no structure has implicit padding and
//! its byte image is fully defined.

use mq_binary::*;

use crate::constants::*;

// ---------------------------------------------------------------------------
//  MQCHARV: Variable-length string
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCHARV {
    pub VSPtr: MQPTR,
    pub VSOffset: MQLONG,
    pub VSBufSize: MQLONG,
    pub VSLength: MQLONG,
    pub VSCCSID: MQLONG,
}

// ---------------------------------------------------------------------------
//  MQMD: Message Descriptor
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQMD {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Report: MQLONG,
    pub MsgType: MQLONG,
    pub Expiry: MQLONG,
    pub Feedback: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Priority: MQLONG,
    pub Persistence: MQLONG,
    pub MsgId: MQBYTE24,
    pub CorrelId: MQBYTE24,
    pub BackoutCount: MQLONG,
    pub ReplyToQ: MQCHAR48,
    pub ReplyToQMgr: MQCHAR48,
    pub UserIdentifier: MQCHAR12,
    pub AccountingToken: MQBYTE32,
    pub ApplIdentityData: MQCHAR32,
    pub PutApplType: MQLONG,
    pub PutApplName: MQCHAR28,
    pub PutDate: MQCHAR8,
    pub PutTime: MQCHAR8,
    pub ApplOriginData: MQCHAR4,
    // Ver:2
    pub GroupId: MQBYTE24,
    pub MsgSeqNumber: MQLONG,
    pub Offset: MQLONG,
    pub MsgFlags: MQLONG,
    pub OriginalLength: MQLONG,
}

/// Version-1 message descriptor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQMD1 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Report: MQLONG,
    pub MsgType: MQLONG,
    pub Expiry: MQLONG,
    pub Feedback: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Priority: MQLONG,
    pub Persistence: MQLONG,
    pub MsgId: MQBYTE24,
    pub CorrelId: MQBYTE24,
    pub BackoutCount: MQLONG,
    pub ReplyToQ: MQCHAR48,
    pub ReplyToQMgr: MQCHAR48,
    pub UserIdentifier: MQCHAR12,
    pub AccountingToken: MQBYTE32,
    pub ApplIdentityData: MQCHAR32,
    pub PutApplType: MQLONG,
    pub PutApplName: MQCHAR28,
    pub PutDate: MQCHAR8,
    pub PutTime: MQCHAR8,
    pub ApplOriginData: MQCHAR4,
}

/// Version-2 message descriptor, layout identical to [`MQMD`].
pub type MQMD2 = MQMD;

/// MQMDE: Message Descriptor Extension
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQMDE {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub GroupId: MQBYTE24,
    pub MsgSeqNumber: MQLONG,
    pub Offset: MQLONG,
    pub MsgFlags: MQLONG,
    pub OriginalLength: MQLONG,
}

// ---------------------------------------------------------------------------
//  MQOD: Object Descriptor, and distribution list records
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQOD {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ObjectType: MQLONG,
    pub ObjectName: MQCHAR48,
    pub ObjectQMgrName: MQCHAR48,
    pub DynamicQName: MQCHAR48,
    pub AlternateUserId: MQCHAR12,
    // Ver:2
    pub RecsPresent: MQLONG,
    pub KnownDestCount: MQLONG,
    pub UnknownDestCount: MQLONG,
    pub InvalidDestCount: MQLONG,
    pub ObjectRecOffset: MQLONG,
    pub ResponseRecOffset: MQLONG,
    pub ObjectRecPtr: MQPTR,
    pub ResponseRecPtr: MQPTR,
    // Ver:3
    pub AlternateSecurityId: MQBYTE40,
    pub ResolvedQName: MQCHAR48,
    pub ResolvedQMgrName: MQCHAR48,
    // Ver:4
    pub ObjectString: MQCHARV,
    pub SelectionString: MQCHARV,
    pub ResObjectString: MQCHARV,
    pub ResolvedType: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _final_pad: [u8; 4],
}

/// MQOR: Object Record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQOR {
    pub ObjectName: MQCHAR48,
    pub ObjectQMgrName: MQCHAR48,
}

/// MQRR: Response Record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQRR {
    pub CompCode: MQLONG,
    pub Reason: MQLONG,
}

// ---------------------------------------------------------------------------
//  MQPMO / MQGMO: Put and Get Message Options
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQPMO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub Timeout: MQLONG,
    pub Context: MQHOBJ,
    pub KnownDestCount: MQLONG,
    pub UnknownDestCount: MQLONG,
    pub InvalidDestCount: MQLONG,
    pub ResolvedQName: MQCHAR48,
    pub ResolvedQMgrName: MQCHAR48,
    // Ver:2
    pub RecsPresent: MQLONG,
    pub PutMsgRecFields: MQLONG,
    pub PutMsgRecOffset: MQLONG,
    pub ResponseRecOffset: MQLONG,
    pub PutMsgRecPtr: MQPTR,
    pub ResponseRecPtr: MQPTR,
    // Ver:3
    pub OriginalMsgHandle: MQHMSG,
    pub NewMsgHandle: MQHMSG,
    pub Action: MQLONG,
    pub PubLevel: MQLONG,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQGMO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub WaitInterval: MQLONG,
    pub Signal1: MQLONG,
    pub Signal2: MQLONG,
    pub ResolvedQName: MQCHAR48,
    // Ver:2
    pub MatchOptions: MQLONG,
    pub GroupStatus: MQCHAR,
    pub SegmentStatus: MQCHAR,
    pub Segmentation: MQCHAR,
    pub Reserved1: MQCHAR,
    // Ver:3
    pub MsgToken: MQBYTE16,
    pub ReturnedLength: MQLONG,
    // Ver:4
    pub Reserved2: MQLONG,
    pub MsgHandle: MQHMSG,
}

// ---------------------------------------------------------------------------
//  Connection options and what hangs off them
// ---------------------------------------------------------------------------

/// MQCNO: Connect Options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCNO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    // Ver:2
    pub ClientConnOffset: MQLONG,
    pub ClientConnPtr: MQPTR,
    // Ver:3
    pub ConnTag: MQBYTE128,
    // Ver:4
    pub SSLConfigPtr: *mut MQSCO,
    pub SSLConfigOffset: MQLONG,
    // Ver:5
    pub ConnectionId: MQBYTE24,
    pub SecurityParmsOffset: MQLONG,
    pub SecurityParmsPtr: *mut MQCSP,
    // Ver:6
    pub CCDTUrlPtr: PMQCHAR,
    pub CCDTUrlOffset: MQLONG,
    pub CCDTUrlLength: MQLONG,
    pub Reserved: MQBYTE8,
    // Ver:7
    pub ApplName: MQCHAR28,
    pub Reserved2: MQBYTE4,
    // Ver:8
    pub BalanceParmsPtr: *mut MQBNO,
    pub BalanceParmsOffset: MQLONG,
    pub Reserved3: MQBYTE4,
}

/// MQCSP: Security Parameters
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCSP {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub AuthenticationType: MQLONG,
    pub Reserved1: MQBYTE4,
    pub CSPUserIdPtr: MQPTR,
    pub CSPUserIdOffset: MQLONG,
    pub CSPUserIdLength: MQLONG,
    pub Reserved2: MQBYTE8,
    pub CSPPasswordPtr: MQPTR,
    pub CSPPasswordOffset: MQLONG,
    pub CSPPasswordLength: MQLONG,
    // Ver:2
    pub Reserved3: MQBYTE8,
    pub InitialKeyPtr: MQPTR,
    pub InitialKeyOffset: MQLONG,
    pub InitialKeyLength: MQLONG,
    // Ver:3
    pub Reserved4: MQBYTE8,
    pub TokenPtr: MQPTR,
    pub TokenOffset: MQLONG,
    pub TokenLength: MQLONG,
}

/// MQSCO: SSL Configuration Options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQSCO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub KeyRepository: MQCHAR256,
    pub CryptoHardware: MQCHAR256,
    pub AuthInfoRecCount: MQLONG,
    pub AuthInfoRecOffset: MQLONG,
    pub AuthInfoRecPtr: *mut MQAIR,
    // Ver:2
    pub KeyResetCount: MQLONG,
    pub FipsRequired: MQLONG,
    // Ver:3
    pub EncryptionPolicySuiteB: [MQLONG; 4],
    // Ver:4
    pub CertificateValPolicy: MQLONG,
    // Ver:5
    pub CertificateLabel: MQCHAR64,
    // Ver:6
    pub Reserved1: MQBYTE4,
    pub KeyRepoPasswordPtr: PMQCHAR,
    pub KeyRepoPasswordOffset: MQLONG,
    pub KeyRepoPasswordLength: MQLONG,
}

/// MQAIR: Authentication Information Record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQAIR {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub AuthInfoType: MQLONG,
    pub AuthInfoConnName: MQCHAR264,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    pub LDAPUserNamePtr: PMQCHAR,
    pub LDAPUserNameOffset: MQLONG,
    pub LDAPUserNameLength: MQLONG,
    pub LDAPPassword: MQCHAR32,
    // Ver:2
    pub OCSPResponderURL: MQCHAR256,
}

/// MQBNO: Balancing Options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQBNO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub ApplType: MQLONG,
    pub Timeout: MQLONG,
    pub Options: MQLONG,
}

// ---------------------------------------------------------------------------
//  MQCD: Channel Definition
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCD {
    pub ChannelName: MQCHAR20,
    pub Version: MQLONG,
    pub ChannelType: MQLONG,
    pub TransportType: MQLONG,
    pub Desc: MQCHAR64,
    pub QMgrName: MQCHAR48,
    pub XmitQName: MQCHAR48,
    pub ShortConnectionName: MQCHAR20,
    pub MCAName: MQCHAR20,
    pub ModeName: MQCHAR8,
    pub TpName: MQCHAR64,
    pub BatchSize: MQLONG,
    pub DiscInterval: MQLONG,
    pub ShortRetryCount: MQLONG,
    pub ShortRetryInterval: MQLONG,
    pub LongRetryCount: MQLONG,
    pub LongRetryInterval: MQLONG,
    pub SecurityExit: MQCHAR128,
    pub MsgExit: MQCHAR128,
    pub SendExit: MQCHAR128,
    pub ReceiveExit: MQCHAR128,
    pub SeqNumberWrap: MQLONG,
    pub MaxMsgLength: MQLONG,
    pub PutAuthority: MQLONG,
    pub DataConversion: MQLONG,
    pub SecurityUserData: MQCHAR32,
    pub MsgUserData: MQCHAR32,
    pub SendUserData: MQCHAR32,
    pub ReceiveUserData: MQCHAR32,
    // Ver:2
    pub UserIdentifier: MQCHAR12,
    pub Password: MQCHAR12,
    pub MCAUserIdentifier: MQCHAR12,
    pub MCAType: MQLONG,
    pub ConnectionName: MQCHAR264,
    pub RemoteUserIdentifier: MQCHAR12,
    pub RemotePassword: MQCHAR12,
    // Ver:3
    pub MsgRetryExit: MQCHAR128,
    pub MsgRetryUserData: MQCHAR32,
    pub MsgRetryCount: MQLONG,
    pub MsgRetryInterval: MQLONG,
    // Ver:4
    pub HeartbeatInterval: MQLONG,
    pub BatchInterval: MQLONG,
    pub NonPersistentMsgSpeed: MQLONG,
    pub StrucLength: MQLONG,
    pub ExitNameLength: MQLONG,
    pub ExitDataLength: MQLONG,
    pub MsgExitsDefined: MQLONG,
    pub SendExitsDefined: MQLONG,
    pub ReceiveExitsDefined: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    pub MsgExitPtr: MQPTR,
    pub MsgUserDataPtr: MQPTR,
    pub SendExitPtr: MQPTR,
    pub SendUserDataPtr: MQPTR,
    pub ReceiveExitPtr: MQPTR,
    pub ReceiveUserDataPtr: MQPTR,
    // Ver:5
    pub ClusterPtr: MQPTR,
    pub ClustersDefined: MQLONG,
    pub NetworkPriority: MQLONG,
    // Ver:6
    pub LongMCAUserIdLength: MQLONG,
    pub LongRemoteUserIdLength: MQLONG,
    pub LongMCAUserIdPtr: MQPTR,
    pub LongRemoteUserIdPtr: MQPTR,
    pub MCASecurityId: MQBYTE40,
    pub RemoteSecurityId: MQBYTE40,
    // Ver:7
    pub SSLCipherSpec: MQCHAR32,
    pub SSLPeerNamePtr: MQPTR,
    pub SSLPeerNameLength: MQLONG,
    pub SSLClientAuth: MQLONG,
    pub KeepAliveInterval: MQLONG,
    pub LocalAddress: MQCHAR48,
    pub BatchHeartbeat: MQLONG,
    // Ver:8
    pub HdrCompList: [MQLONG; 2],
    pub MsgCompList: [MQLONG; 16],
    pub CLWLChannelRank: MQLONG,
    pub CLWLChannelPriority: MQLONG,
    pub CLWLChannelWeight: MQLONG,
    pub ChannelMonitoring: MQLONG,
    pub ChannelStatistics: MQLONG,
    // Ver:9
    pub SharingConversations: MQLONG,
    pub PropertyControl: MQLONG,
    pub MaxInstances: MQLONG,
    pub MaxInstancesPerClient: MQLONG,
    pub ClientChannelWeight: MQLONG,
    pub ConnectionAffinity: MQLONG,
    // Ver:10
    pub BatchDataLimit: MQLONG,
    pub UseDLQ: MQLONG,
    pub DefReconnect: MQLONG,
    // Ver:11
    pub CertificateLabel: MQCHAR64,
    // Ver:12
    pub SPLProtection: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _final_pad: [u8; 4],
}

// ---------------------------------------------------------------------------
//  Message handles and properties
// ---------------------------------------------------------------------------

/// MQPD: Property Descriptor
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQPD {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub Support: MQLONG,
    pub Context: MQLONG,
    pub CopyOptions: MQLONG,
}

/// MQIMPO: Inquire Message Property Options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQIMPO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub RequestedEncoding: MQLONG,
    pub RequestedCCSID: MQLONG,
    pub ReturnedEncoding: MQLONG,
    pub ReturnedCCSID: MQLONG,
    pub Reserved1: MQLONG,
    pub ReturnedName: MQCHARV,
    pub TypeString: MQCHAR8,
}

/// Options structures that carry nothing but an options word share this shape.
macro_rules! options_struct {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name {
                pub StrucId: MQCHAR4,
                pub Version: MQLONG,
                pub Options: MQLONG,
            }
        )*
    };
}

options_struct!(
    /// MQMHBO: Message Handle To Buffer Options
    MQMHBO,
    /// MQBMHO: Buffer To Message Handle Options
    MQBMHO,
    /// MQBO: Begin Options
    MQBO,
    /// MQCMHO: Create Message Handle Options
    MQCMHO,
    /// MQDMHO: Delete Message Handle Options
    MQDMHO,
    /// MQDMPO: Delete Message Property Options
    MQDMPO,
);

/// MQSMPO: Set Message Property Options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQSMPO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub ValueEncoding: MQLONG,
    pub ValueCCSID: MQLONG,
}

// ---------------------------------------------------------------------------
//  Publish/subscribe, status, callbacks
// ---------------------------------------------------------------------------

/// MQSRO: Subscription Request Options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQSRO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub NumPubs: MQLONG,
}

/// MQSD: Subscription Descriptor
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQSD {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub ObjectName: MQCHAR48,
    pub AlternateUserId: MQCHAR12,
    pub AlternateSecurityId: MQBYTE40,
    pub SubExpiry: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _pad1: [u8; 4],
    pub ObjectString: MQCHARV,
    pub SubName: MQCHARV,
    pub SubUserData: MQCHARV,
    pub SubCorrelId: MQBYTE24,
    pub PubPriority: MQLONG,
    pub PubAccountingToken: MQBYTE32,
    pub PubApplIdentityData: MQCHAR32,
    #[cfg(target_pointer_width = "64")]
    pub _pad2: [u8; 4],
    pub SelectionString: MQCHARV,
    pub SubLevel: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _pad3: [u8; 4],
    pub ResObjectString: MQCHARV,
}

/// MQSTS: Status Reporting Structure
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQSTS {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub CompCode: MQLONG,
    pub Reason: MQLONG,
    pub PutSuccessCount: MQLONG,
    pub PutWarningCount: MQLONG,
    pub PutFailureCount: MQLONG,
    pub ObjectType: MQLONG,
    pub ObjectName: MQCHAR48,
    pub ObjectQMgrName: MQCHAR48,
    pub ResolvedObjectName: MQCHAR48,
    pub ResolvedQMgrName: MQCHAR48,
    // Ver:2
    pub ObjectString: MQCHARV,
    pub SubName: MQCHARV,
    pub OpenOptions: MQLONG,
    pub SubOptions: MQLONG,
}

/// MQCBD: Callback Descriptor
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCBD {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub CallbackType: MQLONG,
    pub Options: MQLONG,
    pub CallbackArea: MQPTR,
    pub CallbackFunction: MQPTR,
    pub CallbackName: MQCHAR128,
    pub MaxMsgLength: MQLONG,
    #[cfg(target_pointer_width = "64")]
    pub _final_pad: [u8; 4],
}

/// MQCTLO: Control Callback Options
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCTLO {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Options: MQLONG,
    pub Reserved: MQLONG,
    pub ConnectionArea: MQPTR,
}

// ---------------------------------------------------------------------------
//  Message headers
// ---------------------------------------------------------------------------

/// MQCIH: CICS Bridge Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQCIH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub ReturnCode: MQLONG,
    pub CompCode: MQLONG,
    pub Reason: MQLONG,
    pub UOWControl: MQLONG,
    pub GetWaitInterval: MQLONG,
    pub LinkType: MQLONG,
    pub OutputDataLength: MQLONG,
    pub FacilityKeepTime: MQLONG,
    pub ADSDescriptor: MQLONG,
    pub ConversationalTask: MQLONG,
    pub TaskEndStatus: MQLONG,
    pub Facility: MQBYTE8,
    pub Function: MQCHAR4,
    pub AbendCode: MQCHAR4,
    pub Authenticator: MQCHAR8,
    pub Reserved1: MQCHAR8,
    pub ReplyToFormat: MQCHAR8,
    pub RemoteSysId: MQCHAR4,
    pub RemoteTransId: MQCHAR4,
    pub TransactionId: MQCHAR4,
    pub FacilityLike: MQCHAR4,
    pub AttentionId: MQCHAR4,
    pub StartCode: MQCHAR4,
    pub CancelCode: MQCHAR4,
    pub NextTransactionId: MQCHAR4,
    pub Reserved2: MQCHAR8,
    pub Reserved3: MQCHAR8,
    // Ver:2
    pub CursorPosition: MQLONG,
    pub ErrorOffset: MQLONG,
    pub InputItem: MQLONG,
    pub Reserved4: MQLONG,
}

/// MQDH: Distribution Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQDH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub PutMsgRecFields: MQLONG,
    pub RecsPresent: MQLONG,
    pub ObjectRecOffset: MQLONG,
    pub PutMsgRecOffset: MQLONG,
}

/// MQDLH: Dead-Letter Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQDLH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub Reason: MQLONG,
    pub DestQName: MQCHAR48,
    pub DestQMgrName: MQCHAR48,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub PutApplType: MQLONG,
    pub PutApplName: MQCHAR28,
    pub PutDate: MQCHAR8,
    pub PutTime: MQCHAR8,
}

/// MQIIH: IMS Information Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQIIH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub LTermOverride: MQCHAR8,
    pub MFSMapName: MQCHAR8,
    pub ReplyToFormat: MQCHAR8,
    pub Authenticator: MQCHAR8,
    pub TranInstanceId: MQBYTE16,
    pub TranState: MQCHAR,
    pub CommitMode: MQCHAR,
    pub SecurityScope: MQCHAR,
    pub Reserved: MQCHAR,
}

/// MQRFH: Rules and Formatting Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQRFH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
}

/// MQRFH2: Rules and Formatting Header 2
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQRFH2 {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub NameValueCCSID: MQLONG,
}

/// MQRMH: Reference Message Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQRMH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub ObjectType: MQCHAR8,
    pub ObjectInstanceId: MQBYTE24,
    pub SrcEnvLength: MQLONG,
    pub SrcEnvOffset: MQLONG,
    pub SrcNameLength: MQLONG,
    pub SrcNameOffset: MQLONG,
    pub DestEnvLength: MQLONG,
    pub DestEnvOffset: MQLONG,
    pub DestNameLength: MQLONG,
    pub DestNameOffset: MQLONG,
    pub DataLogicalLength: MQLONG,
    pub DataLogicalOffset: MQLONG,
    pub DataLogicalOffset2: MQLONG,
}

/// MQTM: Trigger Message
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQTM {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub QName: MQCHAR48,
    pub ProcessName: MQCHAR48,
    pub TriggerData: MQCHAR64,
    pub ApplType: MQLONG,
    pub ApplId: MQCHAR256,
    pub EnvData: MQCHAR128,
    pub UserData: MQCHAR128,
}

/// MQTMC2: Trigger Message 2, character format
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQTMC2 {
    pub StrucId: MQCHAR4,
    pub Version: MQCHAR4,
    pub QName: MQCHAR48,
    pub ProcessName: MQCHAR48,
    pub TriggerData: MQCHAR64,
    pub ApplType: MQCHAR4,
    pub ApplId: MQCHAR256,
    pub EnvData: MQCHAR128,
    pub UserData: MQCHAR128,
    pub QMgrName: MQCHAR48,
}

/// MQWIH: Work Information Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQWIH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub StrucLength: MQLONG,
    pub Encoding: MQLONG,
    pub CodedCharSetId: MQLONG,
    pub Format: MQCHAR8,
    pub Flags: MQLONG,
    pub ServiceName: MQCHAR32,
    pub ServiceStep: MQCHAR8,
    pub MsgToken: MQBYTE16,
    pub Reserved: MQCHAR32,
}

/// MQXQH: Transmission-Queue Header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQXQH {
    pub StrucId: MQCHAR4,
    pub Version: MQLONG,
    pub RemoteQName: MQCHAR48,
    pub RemoteQMgrName: MQCHAR48,
    pub MsgDesc: MQMD1,
}

mq_struct!(MQCHARV);
mq_struct!(MQMD = MQMD_STRUC_ID, versioned);
mq_struct!(MQMD1 = MQMD_STRUC_ID, versioned);
mq_struct!(MQMDE = MQMDE_STRUC_ID, versioned);
mq_struct!(MQOD = MQOD_STRUC_ID, versioned);
mq_struct!(MQOR);
mq_struct!(MQRR);
mq_struct!(MQPMO = MQPMO_STRUC_ID, versioned);
mq_struct!(MQGMO = MQGMO_STRUC_ID, versioned);
mq_struct!(MQCNO = MQCNO_STRUC_ID, versioned);
mq_struct!(MQCSP = MQCSP_STRUC_ID, versioned);
mq_struct!(MQSCO = MQSCO_STRUC_ID, versioned);
mq_struct!(MQAIR = MQAIR_STRUC_ID, versioned);
mq_struct!(MQBNO = MQBNO_STRUC_ID, versioned);
mq_struct!(MQCD, versioned);
mq_struct!(MQPD = MQPD_STRUC_ID, versioned);
mq_struct!(MQIMPO = MQIMPO_STRUC_ID, versioned);
mq_struct!(MQMHBO = MQMHBO_STRUC_ID, versioned);
mq_struct!(MQBMHO = MQBMHO_STRUC_ID, versioned);
mq_struct!(MQBO = MQBO_STRUC_ID, versioned);
mq_struct!(MQCMHO = MQCMHO_STRUC_ID, versioned);
mq_struct!(MQDMHO = MQDMHO_STRUC_ID, versioned);
mq_struct!(MQDMPO = MQDMPO_STRUC_ID, versioned);
mq_struct!(MQSMPO = MQSMPO_STRUC_ID, versioned);
mq_struct!(MQSRO = MQSRO_STRUC_ID, versioned);
mq_struct!(MQSD = MQSD_STRUC_ID, versioned);
mq_struct!(MQSTS = MQSTS_STRUC_ID, versioned);
mq_struct!(MQCBD = MQCBD_STRUC_ID, versioned);
mq_struct!(MQCTLO = MQCTLO_STRUC_ID, versioned);
mq_struct!(MQCIH = MQCIH_STRUC_ID, versioned);
mq_struct!(MQDH = MQDH_STRUC_ID, versioned);
mq_struct!(MQDLH = MQDLH_STRUC_ID, versioned);
mq_struct!(MQIIH = MQIIH_STRUC_ID, versioned);
mq_struct!(MQRFH = MQRFH_STRUC_ID, versioned);
mq_struct!(MQRFH2 = MQRFH_STRUC_ID, versioned);
mq_struct!(MQRMH = MQRMH_STRUC_ID, versioned);
mq_struct!(MQTM = MQTM_STRUC_ID, versioned);
mq_struct!(MQTMC2 = MQTMC_STRUC_ID);
mq_struct!(MQWIH = MQWIH_STRUC_ID, versioned);
mq_struct!(MQXQH = MQXQH_STRUC_ID, versioned);

#[cfg(all(test, target_pointer_width = "64"))]
mod tests {
    use std::mem::offset_of;
    use std::mem::size_of;

    use super::*;

    #[test]
    fn test_message_descriptor_layout() {
        assert_eq!(size_of::<MQMD1>(), 324);
        assert_eq!(size_of::<MQMD>(), 364);
        assert_eq!(offset_of!(MQMD, GroupId), 324);
        assert_eq!(size_of::<MQMDE>(), 72);
    }

    #[test]
    fn test_object_descriptor_layout() {
        assert_eq!(offset_of!(MQOD, RecsPresent), 168);
        assert_eq!(offset_of!(MQOD, ObjectRecPtr), 192);
        assert_eq!(offset_of!(MQOD, AlternateSecurityId), 208);
        assert_eq!(offset_of!(MQOD, ObjectString), 344);
        assert_eq!(size_of::<MQOD>(), 424);
        assert_eq!(size_of::<MQOR>(), 96);
        assert_eq!(size_of::<MQRR>(), 8);
    }

    #[test]
    fn test_message_options_layout() {
        assert_eq!(offset_of!(MQPMO, RecsPresent), 128);
        assert_eq!(offset_of!(MQPMO, OriginalMsgHandle), 160);
        assert_eq!(size_of::<MQPMO>(), 184);

        assert_eq!(offset_of!(MQGMO, MatchOptions), 72);
        assert_eq!(offset_of!(MQGMO, MsgToken), 80);
        assert_eq!(offset_of!(MQGMO, Reserved2), 100);
        assert_eq!(size_of::<MQGMO>(), 112);
    }

    #[test]
    fn test_connection_layout() {
        assert_eq!(offset_of!(MQCNO, ConnTag), 24);
        assert_eq!(offset_of!(MQCNO, SSLConfigPtr), 152);
        assert_eq!(offset_of!(MQCNO, SecurityParmsPtr), 192);
        assert_eq!(offset_of!(MQCNO, ApplName), 224);
        assert_eq!(size_of::<MQCNO>(), 272);

        assert_eq!(offset_of!(MQCSP, Reserved3), 56);
        assert_eq!(offset_of!(MQCSP, Reserved4), 80);
        assert_eq!(size_of::<MQCSP>(), 104);

        assert_eq!(offset_of!(MQSCO, AuthInfoRecPtr), 528);
        assert_eq!(offset_of!(MQSCO, CertificateLabel), 564);
        assert_eq!(offset_of!(MQSCO, KeyRepoPasswordPtr), 632);
        assert_eq!(size_of::<MQSCO>(), 648);

        assert_eq!(offset_of!(MQAIR, LDAPUserNamePtr), 280);
        assert_eq!(offset_of!(MQAIR, OCSPResponderURL), 328);
        assert_eq!(size_of::<MQAIR>(), 584);
        assert_eq!(size_of::<MQBNO>(), 20);
    }

    #[test]
    fn test_channel_definition_layout() {
        assert_eq!(offset_of!(MQCD, UserIdentifier), 984);
        assert_eq!(offset_of!(MQCD, MsgRetryExit), 1312);
        assert_eq!(offset_of!(MQCD, HeartbeatInterval), 1480);
        assert_eq!(offset_of!(MQCD, MsgExitPtr), 1520);
        assert_eq!(offset_of!(MQCD, ClusterPtr), 1568);
        assert_eq!(offset_of!(MQCD, LongMCAUserIdLength), 1584);
        assert_eq!(offset_of!(MQCD, SSLCipherSpec), 1688);
        assert_eq!(offset_of!(MQCD, HdrCompList), 1792);
        assert_eq!(offset_of!(MQCD, CertificateLabel), 1920);
        assert_eq!(size_of::<MQCD>(), 1992);
    }

    #[test]
    fn test_property_and_option_layouts() {
        assert_eq!(size_of::<MQCHARV>(), 24);
        assert_eq!(size_of::<MQPD>(), 24);
        assert_eq!(offset_of!(MQIMPO, ReturnedName), 32);
        assert_eq!(size_of::<MQIMPO>(), 64);
        assert_eq!(size_of::<MQMHBO>(), 12);
        assert_eq!(size_of::<MQDMPO>(), 12);
        assert_eq!(size_of::<MQSMPO>(), 20);
    }

    #[test]
    fn test_subscription_and_callback_layouts() {
        assert_eq!(size_of::<MQSRO>(), 16);
        assert_eq!(offset_of!(MQSD, ObjectString), 120);
        assert_eq!(offset_of!(MQSD, SubCorrelId), 192);
        assert_eq!(offset_of!(MQSD, SelectionString), 288);
        assert_eq!(offset_of!(MQSD, ResObjectString), 320);
        assert_eq!(size_of::<MQSD>(), 344);

        assert_eq!(offset_of!(MQSTS, ObjectString), 224);
        assert_eq!(size_of::<MQSTS>(), 280);
        assert_eq!(size_of::<MQCBD>(), 168);
        assert_eq!(size_of::<MQCTLO>(), 24);
    }

    #[test]
    fn test_header_layouts() {
        assert_eq!(offset_of!(MQCIH, CursorPosition), 164);
        assert_eq!(size_of::<MQCIH>(), 180);
        assert_eq!(size_of::<MQDH>(), 48);
        assert_eq!(size_of::<MQDLH>(), 172);
        assert_eq!(size_of::<MQIIH>(), 84);
        assert_eq!(size_of::<MQRFH>(), 32);
        assert_eq!(size_of::<MQRFH2>(), 36);
        assert_eq!(size_of::<MQRMH>(), 108);
        assert_eq!(size_of::<MQTM>(), 684);
        assert_eq!(size_of::<MQTMC2>(), 732);
        assert_eq!(size_of::<MQWIH>(), 120);
        assert_eq!(size_of::<MQXQH>(), 428);
    }
}
