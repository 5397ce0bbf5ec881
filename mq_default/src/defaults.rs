//! `*_DEFAULT` initialisers for the MQI structures.
//!
//! Character fields the C initialisers write as `""` are all NUL; fields they
//! spell out (formats, blank eye-catchers) carry those bytes. Pointers are null.

use std::ptr::null_mut;

use mq_binary::MQLONG;
use mq_binary::text::BLANK;
use mq_binary::text::blank;
use mq_binary::text::chars;
use mq_binary::text::nul;

use crate::constants::*;
use crate::mqi::*;

const fn compression_list<const N: usize>() -> [MQLONG; N] {
    let mut list = [MQCOMPRESS_NOT_AVAILABLE; N];
    list[0] = MQCOMPRESS_NONE;
    list
}

pub const MQCHARV_DEFAULT: MQCHARV =
    MQCHARV { VSPtr: null_mut(), VSOffset: 0, VSBufSize: 0, VSLength: 0, VSCCSID: MQCCSI_APPL };

// ---------------------------------------------------------------------------
//  Message descriptors
// ---------------------------------------------------------------------------

pub const MQMD_DEFAULT: MQMD = MQMD {
    StrucId: chars(MQMD_STRUC_ID),
    Version: MQMD_VERSION_1,
    Report: MQRO_NONE,
    MsgType: MQMT_DATAGRAM,
    Expiry: MQEI_UNLIMITED,
    Feedback: MQFB_NONE,
    Encoding: MQENC_NATIVE,
    CodedCharSetId: MQCCSI_Q_MGR,
    Format: chars(MQFMT_NONE),
    Priority: MQPRI_PRIORITY_AS_Q_DEF,
    Persistence: MQPER_PERSISTENCE_AS_Q_DEF,
    MsgId: MQMI_NONE,
    CorrelId: MQCI_NONE,
    BackoutCount: 0,
    ReplyToQ: nul(),
    ReplyToQMgr: nul(),
    UserIdentifier: nul(),
    AccountingToken: MQACT_NONE,
    ApplIdentityData: nul(),
    PutApplType: MQAT_NO_CONTEXT,
    PutApplName: nul(),
    PutDate: nul(),
    PutTime: nul(),
    ApplOriginData: nul(),
    GroupId: MQGI_NONE,
    MsgSeqNumber: 1,
    Offset: 0,
    MsgFlags: MQMF_NONE,
    OriginalLength: MQOL_UNDEFINED,
};

pub const MQMD1_DEFAULT: MQMD1 = MQMD1 {
    StrucId: chars(MQMD_STRUC_ID),
    Version: MQMD_VERSION_1,
    Report: MQRO_NONE,
    MsgType: MQMT_DATAGRAM,
    Expiry: MQEI_UNLIMITED,
    Feedback: MQFB_NONE,
    Encoding: MQENC_NATIVE,
    CodedCharSetId: MQCCSI_Q_MGR,
    Format: chars(MQFMT_NONE),
    Priority: MQPRI_PRIORITY_AS_Q_DEF,
    Persistence: MQPER_PERSISTENCE_AS_Q_DEF,
    MsgId: MQMI_NONE,
    CorrelId: MQCI_NONE,
    BackoutCount: 0,
    ReplyToQ: nul(),
    ReplyToQMgr: nul(),
    UserIdentifier: nul(),
    AccountingToken: MQACT_NONE,
    ApplIdentityData: nul(),
    PutApplType: MQAT_NO_CONTEXT,
    PutApplName: nul(),
    PutDate: nul(),
    PutTime: nul(),
    ApplOriginData: nul(),
};

pub const MQMD2_DEFAULT: MQMD2 = MQMD { Version: MQMD_VERSION_2, ..MQMD_DEFAULT };

pub const MQMDE_DEFAULT: MQMDE = MQMDE {
    StrucId: chars(MQMDE_STRUC_ID),
    Version: MQMDE_VERSION_2,
    StrucLength: MQMDE_LENGTH_2,
    Encoding: MQENC_NATIVE,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    Flags: MQMDEF_NONE,
    GroupId: MQGI_NONE,
    MsgSeqNumber: 1,
    Offset: 0,
    MsgFlags: MQMF_NONE,
    OriginalLength: MQOL_UNDEFINED,
};

// ---------------------------------------------------------------------------
//  Object descriptor and records
// ---------------------------------------------------------------------------

pub const MQOD_DEFAULT: MQOD = MQOD {
    StrucId: chars(MQOD_STRUC_ID),
    Version: MQOD_VERSION_1,
    ObjectType: MQOT_Q,
    ObjectName: nul(),
    ObjectQMgrName: nul(),
    DynamicQName: chars(b"AMQ.*"),
    AlternateUserId: nul(),
    RecsPresent: 0,
    KnownDestCount: 0,
    UnknownDestCount: 0,
    InvalidDestCount: 0,
    ObjectRecOffset: 0,
    ResponseRecOffset: 0,
    ObjectRecPtr: null_mut(),
    ResponseRecPtr: null_mut(),
    AlternateSecurityId: MQSID_NONE,
    ResolvedQName: nul(),
    ResolvedQMgrName: nul(),
    ObjectString: MQCHARV_DEFAULT,
    SelectionString: MQCHARV_DEFAULT,
    ResObjectString: MQCHARV_DEFAULT,
    ResolvedType: MQOT_NONE,
    #[cfg(target_pointer_width = "64")]
    _final_pad: [0; 4],
};

pub const MQOR_DEFAULT: MQOR = MQOR { ObjectName: nul(), ObjectQMgrName: nul() };

pub const MQRR_DEFAULT: MQRR = MQRR { CompCode: MQCC_OK, Reason: MQRC_NONE };

// ---------------------------------------------------------------------------
//  Put and get options
// ---------------------------------------------------------------------------

pub const MQPMO_DEFAULT: MQPMO = MQPMO {
    StrucId: chars(MQPMO_STRUC_ID),
    Version: MQPMO_VERSION_1,
    Options: MQPMO_NONE,
    Timeout: -1,
    Context: MQHO_NONE,
    KnownDestCount: 0,
    UnknownDestCount: 0,
    InvalidDestCount: 0,
    ResolvedQName: nul(),
    ResolvedQMgrName: nul(),
    RecsPresent: 0,
    PutMsgRecFields: MQPMRF_NONE,
    PutMsgRecOffset: 0,
    ResponseRecOffset: 0,
    PutMsgRecPtr: null_mut(),
    ResponseRecPtr: null_mut(),
    OriginalMsgHandle: MQHM_NONE,
    NewMsgHandle: MQHM_NONE,
    Action: MQACTP_NEW,
    PubLevel: MQPMO_PUB_LEVEL_DEFAULT,
};

pub const MQGMO_DEFAULT: MQGMO = MQGMO {
    StrucId: chars(MQGMO_STRUC_ID),
    Version: MQGMO_VERSION_1,
    Options: MQGMO_NO_WAIT,
    WaitInterval: 0,
    Signal1: 0,
    Signal2: 0,
    ResolvedQName: nul(),
    MatchOptions: MQMO_MATCH_MSG_ID | MQMO_MATCH_CORREL_ID,
    GroupStatus: MQGS_NOT_IN_GROUP,
    SegmentStatus: MQSS_NOT_A_SEGMENT,
    Segmentation: MQSEG_INHIBITED,
    Reserved1: BLANK,
    MsgToken: MQMTOK_NONE,
    ReturnedLength: MQRL_UNDEFINED,
    Reserved2: 0,
    MsgHandle: MQHM_NONE,
};

// ---------------------------------------------------------------------------
//  Connection, security, balancing
// ---------------------------------------------------------------------------

pub const MQCNO_DEFAULT: MQCNO = MQCNO {
    StrucId: chars(MQCNO_STRUC_ID),
    Version: MQCNO_VERSION_1,
    Options: MQCNO_NONE,
    ClientConnOffset: 0,
    ClientConnPtr: null_mut(),
    ConnTag: MQCT_NONE,
    SSLConfigPtr: null_mut(),
    SSLConfigOffset: 0,
    ConnectionId: MQCONNID_NONE,
    SecurityParmsOffset: 0,
    SecurityParmsPtr: null_mut(),
    CCDTUrlPtr: null_mut(),
    CCDTUrlOffset: 0,
    CCDTUrlLength: 0,
    Reserved: [0; 8],
    ApplName: nul(),
    Reserved2: [0; 4],
    BalanceParmsPtr: null_mut(),
    BalanceParmsOffset: 0,
    Reserved3: [0; 4],
};

pub const MQCSP_DEFAULT: MQCSP = MQCSP {
    StrucId: chars(MQCSP_STRUC_ID),
    Version: MQCSP_VERSION_1,
    AuthenticationType: MQCSP_AUTH_NONE,
    Reserved1: [0; 4],
    CSPUserIdPtr: null_mut(),
    CSPUserIdOffset: 0,
    CSPUserIdLength: 0,
    Reserved2: [0; 8],
    CSPPasswordPtr: null_mut(),
    CSPPasswordOffset: 0,
    CSPPasswordLength: 0,
    Reserved3: [0; 8],
    InitialKeyPtr: null_mut(),
    InitialKeyOffset: 0,
    InitialKeyLength: 0,
    Reserved4: [0; 8],
    TokenPtr: null_mut(),
    TokenOffset: 0,
    TokenLength: 0,
};

pub const MQSCO_DEFAULT: MQSCO = MQSCO {
    StrucId: chars(MQSCO_STRUC_ID),
    Version: MQSCO_VERSION_1,
    KeyRepository: nul(),
    CryptoHardware: nul(),
    AuthInfoRecCount: 0,
    AuthInfoRecOffset: 0,
    AuthInfoRecPtr: null_mut(),
    KeyResetCount: MQSCO_RESET_COUNT_DEFAULT,
    FipsRequired: MQSSL_FIPS_NO,
    EncryptionPolicySuiteB: [
        MQ_SUITE_B_NONE,
        MQ_SUITE_B_NOT_AVAILABLE,
        MQ_SUITE_B_NOT_AVAILABLE,
        MQ_SUITE_B_NOT_AVAILABLE,
    ],
    CertificateValPolicy: MQ_CERT_VAL_POLICY_DEFAULT,
    CertificateLabel: nul(),
    Reserved1: [0; 4],
    KeyRepoPasswordPtr: null_mut(),
    KeyRepoPasswordOffset: 0,
    KeyRepoPasswordLength: 0,
};

pub const MQAIR_DEFAULT: MQAIR = MQAIR {
    StrucId: chars(MQAIR_STRUC_ID),
    Version: MQAIR_VERSION_1,
    AuthInfoType: MQAIT_CRL_LDAP,
    AuthInfoConnName: nul(),
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    LDAPUserNamePtr: null_mut(),
    LDAPUserNameOffset: 0,
    LDAPUserNameLength: 0,
    LDAPPassword: nul(),
    OCSPResponderURL: nul(),
};

pub const MQBNO_DEFAULT: MQBNO = MQBNO {
    StrucId: chars(MQBNO_STRUC_ID),
    Version: MQBNO_VERSION_1,
    ApplType: MQBNO_BALTYPE_SIMPLE,
    Timeout: MQBNO_TIMEOUT_AS_DEFAULT,
    Options: MQBNO_OPTIONS_NONE,
};

// ---------------------------------------------------------------------------
//  Channel definition
// ---------------------------------------------------------------------------

pub const MQCD_DEFAULT: MQCD = MQCD {
    ChannelName: nul(),
    Version: MQCD_VERSION_6,
    ChannelType: MQCHT_SENDER,
    TransportType: MQXPT_LU62,
    Desc: nul(),
    QMgrName: nul(),
    XmitQName: nul(),
    ShortConnectionName: nul(),
    MCAName: nul(),
    ModeName: nul(),
    TpName: nul(),
    BatchSize: MQCD_BATCH_SIZE_DEFAULT,
    DiscInterval: MQCD_DISC_INTERVAL_DEFAULT,
    ShortRetryCount: MQCD_SHORT_RETRY_COUNT_DEFAULT,
    ShortRetryInterval: MQCD_SHORT_RETRY_INTERVAL_DEFAULT,
    LongRetryCount: MQCD_LONG_RETRY_COUNT_DEFAULT,
    LongRetryInterval: MQCD_LONG_RETRY_INTERVAL_DEFAULT,
    SecurityExit: nul(),
    MsgExit: nul(),
    SendExit: nul(),
    ReceiveExit: nul(),
    SeqNumberWrap: MQCD_SEQ_NUMBER_WRAP_DEFAULT,
    MaxMsgLength: MQCD_MAX_MSG_LENGTH_DEFAULT,
    PutAuthority: MQPA_DEFAULT,
    DataConversion: MQCDC_NO_SENDER_CONVERSION,
    SecurityUserData: nul(),
    MsgUserData: nul(),
    SendUserData: nul(),
    ReceiveUserData: nul(),
    UserIdentifier: nul(),
    Password: nul(),
    MCAUserIdentifier: nul(),
    MCAType: MQMCAT_PROCESS,
    ConnectionName: nul(),
    RemoteUserIdentifier: nul(),
    RemotePassword: nul(),
    MsgRetryExit: nul(),
    MsgRetryUserData: nul(),
    MsgRetryCount: MQCD_MSG_RETRY_COUNT_DEFAULT,
    MsgRetryInterval: MQCD_MSG_RETRY_INTERVAL_DEFAULT,
    HeartbeatInterval: MQCD_HEARTBEAT_INTERVAL_DEFAULT,
    BatchInterval: 0,
    NonPersistentMsgSpeed: MQNPMS_FAST,
    StrucLength: MQCD_LENGTH_6,
    ExitNameLength: MQ_EXIT_NAME_LENGTH,
    ExitDataLength: MQ_EXIT_DATA_LENGTH,
    MsgExitsDefined: 0,
    SendExitsDefined: 0,
    ReceiveExitsDefined: 0,
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    MsgExitPtr: null_mut(),
    MsgUserDataPtr: null_mut(),
    SendExitPtr: null_mut(),
    SendUserDataPtr: null_mut(),
    ReceiveExitPtr: null_mut(),
    ReceiveUserDataPtr: null_mut(),
    ClusterPtr: null_mut(),
    ClustersDefined: 0,
    NetworkPriority: 0,
    LongMCAUserIdLength: 0,
    LongRemoteUserIdLength: 0,
    LongMCAUserIdPtr: null_mut(),
    LongRemoteUserIdPtr: null_mut(),
    MCASecurityId: MQSID_NONE,
    RemoteSecurityId: MQSID_NONE,
    SSLCipherSpec: nul(),
    SSLPeerNamePtr: null_mut(),
    SSLPeerNameLength: 0,
    SSLClientAuth: MQSCA_REQUIRED,
    KeepAliveInterval: MQKAI_AUTO,
    LocalAddress: nul(),
    BatchHeartbeat: 0,
    HdrCompList: compression_list(),
    MsgCompList: compression_list(),
    CLWLChannelRank: 0,
    CLWLChannelPriority: 0,
    CLWLChannelWeight: MQCD_CLWL_CHANNEL_WEIGHT_DEFAULT,
    ChannelMonitoring: MQMON_OFF,
    ChannelStatistics: MQMON_OFF,
    SharingConversations: MQCD_SHARING_CONVERSATIONS_DEFAULT,
    PropertyControl: MQPROP_COMPATIBILITY,
    MaxInstances: MQCD_MAX_INSTANCES_DEFAULT,
    MaxInstancesPerClient: MQCD_MAX_INSTANCES_DEFAULT,
    ClientChannelWeight: 0,
    ConnectionAffinity: MQCAFTY_PREFERRED,
    BatchDataLimit: MQCD_BATCH_DATA_LIMIT_DEFAULT,
    UseDLQ: MQUSEDLQ_YES,
    DefReconnect: MQRCN_NO,
    CertificateLabel: nul(),
    SPLProtection: MQSPL_PASSTHRU,
    #[cfg(target_pointer_width = "64")]
    _final_pad: [0; 4],
};

/// Client-connection channel: TCP transport, one second heartbeat and the
/// client-side maximum message length.
pub const MQCD_CLIENT_CONN_DEFAULT: MQCD = MQCD {
    ChannelType: MQCHT_CLNTCONN,
    TransportType: MQXPT_TCP,
    MaxMsgLength: MQCD_CLIENT_MAX_MSG_LENGTH_DEFAULT,
    HeartbeatInterval: MQCD_CLIENT_HEARTBEAT_INTERVAL_DEFAULT,
    ..MQCD_DEFAULT
};

impl MQCD {
    pub const fn client_conn_default() -> Self {
        MQCD_CLIENT_CONN_DEFAULT
    }
}

// ---------------------------------------------------------------------------
//  Message handles and properties
// ---------------------------------------------------------------------------

pub const MQPD_DEFAULT: MQPD = MQPD {
    StrucId: chars(MQPD_STRUC_ID),
    Version: MQPD_VERSION_1,
    Options: MQPD_NONE,
    Support: MQPD_SUPPORT_OPTIONAL,
    Context: MQPD_NO_CONTEXT,
    CopyOptions: MQCOPY_DEFAULT,
};

pub const MQIMPO_DEFAULT: MQIMPO = MQIMPO {
    StrucId: chars(MQIMPO_STRUC_ID),
    Version: MQIMPO_VERSION_1,
    Options: MQIMPO_INQ_FIRST,
    RequestedEncoding: MQENC_NATIVE,
    RequestedCCSID: MQCCSI_APPL,
    ReturnedEncoding: MQENC_NATIVE,
    ReturnedCCSID: 0,
    Reserved1: 0,
    ReturnedName: MQCHARV_DEFAULT,
    TypeString: nul(),
};

pub const MQMHBO_DEFAULT: MQMHBO =
    MQMHBO { StrucId: chars(MQMHBO_STRUC_ID), Version: MQMHBO_VERSION_1, Options: MQMHBO_NONE };

pub const MQBMHO_DEFAULT: MQBMHO =
    MQBMHO { StrucId: chars(MQBMHO_STRUC_ID), Version: MQBMHO_VERSION_1, Options: MQBMHO_DELETE_PROPERTIES };

pub const MQBO_DEFAULT: MQBO = MQBO { StrucId: chars(MQBO_STRUC_ID), Version: MQBO_VERSION_1, Options: MQBO_NONE };

pub const MQCMHO_DEFAULT: MQCMHO =
    MQCMHO { StrucId: chars(MQCMHO_STRUC_ID), Version: MQCMHO_VERSION_1, Options: MQCMHO_DEFAULT_VALIDATION };

pub const MQDMHO_DEFAULT: MQDMHO =
    MQDMHO { StrucId: chars(MQDMHO_STRUC_ID), Version: MQDMHO_VERSION_1, Options: MQDMHO_NONE };

pub const MQDMPO_DEFAULT: MQDMPO =
    MQDMPO { StrucId: chars(MQDMPO_STRUC_ID), Version: MQDMPO_VERSION_1, Options: MQDMPO_DEL_FIRST };

pub const MQSMPO_DEFAULT: MQSMPO = MQSMPO {
    StrucId: chars(MQSMPO_STRUC_ID),
    Version: MQSMPO_VERSION_1,
    Options: MQSMPO_SET_FIRST,
    ValueEncoding: MQENC_NATIVE,
    ValueCCSID: MQCCSI_APPL,
};

// ---------------------------------------------------------------------------
//  Publish/subscribe, status, callbacks
// ---------------------------------------------------------------------------

pub const MQSRO_DEFAULT: MQSRO =
    MQSRO { StrucId: chars(MQSRO_STRUC_ID), Version: MQSRO_VERSION_1, Options: MQSRO_FAIL_IF_QUIESCING, NumPubs: 0 };

pub const MQSD_DEFAULT: MQSD = MQSD {
    StrucId: chars(MQSD_STRUC_ID),
    Version: MQSD_VERSION_1,
    Options: MQSO_NONE,
    ObjectName: nul(),
    AlternateUserId: nul(),
    AlternateSecurityId: MQSID_NONE,
    SubExpiry: MQEI_UNLIMITED,
    #[cfg(target_pointer_width = "64")]
    _pad1: [0; 4],
    ObjectString: MQCHARV_DEFAULT,
    SubName: MQCHARV_DEFAULT,
    SubUserData: MQCHARV_DEFAULT,
    SubCorrelId: MQCI_NONE,
    PubPriority: MQPRI_PRIORITY_AS_PUBLISHED,
    PubAccountingToken: MQACT_NONE,
    PubApplIdentityData: nul(),
    #[cfg(target_pointer_width = "64")]
    _pad2: [0; 4],
    SelectionString: MQCHARV_DEFAULT,
    SubLevel: 1,
    #[cfg(target_pointer_width = "64")]
    _pad3: [0; 4],
    ResObjectString: MQCHARV_DEFAULT,
};

pub const MQSTS_DEFAULT: MQSTS = MQSTS {
    StrucId: chars(MQSTS_STRUC_ID),
    Version: MQSTS_VERSION_1,
    CompCode: MQCC_OK,
    Reason: MQRC_NONE,
    PutSuccessCount: 0,
    PutWarningCount: 0,
    PutFailureCount: 0,
    ObjectType: MQOT_Q,
    ObjectName: nul(),
    ObjectQMgrName: nul(),
    ResolvedObjectName: nul(),
    ResolvedQMgrName: nul(),
    ObjectString: MQCHARV_DEFAULT,
    SubName: MQCHARV_DEFAULT,
    OpenOptions: 0,
    SubOptions: 0,
};

pub const MQCBD_DEFAULT: MQCBD = MQCBD {
    StrucId: chars(MQCBD_STRUC_ID),
    Version: MQCBD_VERSION_1,
    CallbackType: MQCBT_MESSAGE_CONSUMER,
    Options: MQCBDO_NONE,
    CallbackArea: null_mut(),
    CallbackFunction: null_mut(),
    CallbackName: nul(),
    MaxMsgLength: MQCBD_FULL_MSG_LENGTH,
    #[cfg(target_pointer_width = "64")]
    _final_pad: [0; 4],
};

pub const MQCTLO_DEFAULT: MQCTLO = MQCTLO {
    StrucId: chars(MQCTLO_STRUC_ID),
    Version: MQCTLO_VERSION_1,
    Options: MQCTLO_NONE,
    Reserved: MQWI_UNLIMITED,
    ConnectionArea: null_mut(),
};

// ---------------------------------------------------------------------------
//  Message headers
// ---------------------------------------------------------------------------

pub const MQCIH_DEFAULT: MQCIH = MQCIH {
    StrucId: chars(MQCIH_STRUC_ID),
    Version: MQCIH_VERSION_2,
    StrucLength: MQCIH_LENGTH_2,
    Encoding: 0,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    Flags: MQCIH_NONE,
    ReturnCode: MQCRC_OK,
    CompCode: MQCC_OK,
    Reason: MQRC_NONE,
    UOWControl: MQCUOWC_ONLY,
    GetWaitInterval: MQCGWI_DEFAULT,
    LinkType: MQCLT_PROGRAM,
    OutputDataLength: MQCODL_AS_INPUT,
    FacilityKeepTime: 0,
    ADSDescriptor: MQCADSD_NONE,
    ConversationalTask: MQCCT_NO,
    TaskEndStatus: MQCTES_NOSYNC,
    Facility: MQCFAC_NONE,
    Function: chars(MQCFUNC_NONE),
    AbendCode: nul(),
    Authenticator: nul(),
    Reserved1: nul(),
    ReplyToFormat: chars(MQFMT_NONE),
    RemoteSysId: nul(),
    RemoteTransId: nul(),
    TransactionId: nul(),
    FacilityLike: nul(),
    AttentionId: nul(),
    StartCode: chars(MQCSC_NONE),
    CancelCode: nul(),
    NextTransactionId: nul(),
    Reserved2: nul(),
    Reserved3: nul(),
    CursorPosition: 0,
    ErrorOffset: 0,
    InputItem: 0,
    Reserved4: 0,
};

pub const MQDH_DEFAULT: MQDH = MQDH {
    StrucId: chars(MQDH_STRUC_ID),
    Version: MQDH_VERSION_1,
    StrucLength: 0,
    Encoding: 0,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    Flags: MQDHF_NONE,
    PutMsgRecFields: MQPMRF_NONE,
    RecsPresent: 0,
    ObjectRecOffset: 0,
    PutMsgRecOffset: 0,
};

pub const MQDLH_DEFAULT: MQDLH = MQDLH {
    StrucId: chars(MQDLH_STRUC_ID),
    Version: MQDLH_VERSION_1,
    Reason: MQRC_NONE,
    DestQName: nul(),
    DestQMgrName: nul(),
    Encoding: 0,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    PutApplType: 0,
    PutApplName: nul(),
    PutDate: nul(),
    PutTime: nul(),
};

pub const MQIIH_DEFAULT: MQIIH = MQIIH {
    StrucId: chars(MQIIH_STRUC_ID),
    Version: MQIIH_VERSION_1,
    StrucLength: MQIIH_LENGTH_1,
    Encoding: 0,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    Flags: MQIIH_NONE,
    LTermOverride: nul(),
    MFSMapName: nul(),
    ReplyToFormat: chars(MQFMT_NONE),
    Authenticator: chars(MQIAUT_NONE),
    TranInstanceId: MQITII_NONE,
    TranState: MQITS_NOT_IN_CONVERSATION,
    CommitMode: MQICM_COMMIT_THEN_SEND,
    SecurityScope: MQISS_CHECK,
    Reserved: BLANK,
};

pub const MQRFH_DEFAULT: MQRFH = MQRFH {
    StrucId: chars(MQRFH_STRUC_ID),
    Version: MQRFH_VERSION_1,
    StrucLength: MQRFH_STRUC_LENGTH_FIXED,
    Encoding: MQENC_NATIVE,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    Flags: MQRFH_NONE,
};

pub const MQRFH2_DEFAULT: MQRFH2 = MQRFH2 {
    StrucId: chars(MQRFH_STRUC_ID),
    Version: MQRFH_VERSION_2,
    StrucLength: MQRFH_STRUC_LENGTH_FIXED_2,
    Encoding: MQENC_NATIVE,
    CodedCharSetId: MQCCSI_INHERIT,
    Format: chars(MQFMT_NONE),
    Flags: MQRFH_NONE,
    NameValueCCSID: MQCCSI_UTF8,
};

pub const MQRMH_DEFAULT: MQRMH = MQRMH {
    StrucId: chars(MQRMH_STRUC_ID),
    Version: MQRMH_VERSION_1,
    StrucLength: 0,
    Encoding: MQENC_NATIVE,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    Flags: MQRMHF_NOT_LAST,
    ObjectType: nul(),
    ObjectInstanceId: MQOII_NONE,
    SrcEnvLength: 0,
    SrcEnvOffset: 0,
    SrcNameLength: 0,
    SrcNameOffset: 0,
    DestEnvLength: 0,
    DestEnvOffset: 0,
    DestNameLength: 0,
    DestNameOffset: 0,
    DataLogicalLength: 0,
    DataLogicalOffset: 0,
    DataLogicalOffset2: 0,
};

pub const MQTM_DEFAULT: MQTM = MQTM {
    StrucId: chars(MQTM_STRUC_ID),
    Version: MQTM_VERSION_1,
    QName: nul(),
    ProcessName: nul(),
    TriggerData: nul(),
    ApplType: 0,
    ApplId: nul(),
    EnvData: nul(),
    UserData: nul(),
};

pub const MQTMC2_DEFAULT: MQTMC2 = MQTMC2 {
    StrucId: chars(MQTMC_STRUC_ID),
    Version: chars(MQTMC_VERSION_2),
    QName: nul(),
    ProcessName: nul(),
    TriggerData: nul(),
    ApplType: nul(),
    ApplId: nul(),
    EnvData: nul(),
    UserData: nul(),
    QMgrName: nul(),
};

pub const MQWIH_DEFAULT: MQWIH = MQWIH {
    StrucId: chars(MQWIH_STRUC_ID),
    Version: MQWIH_VERSION_1,
    StrucLength: MQWIH_LENGTH_1,
    Encoding: 0,
    CodedCharSetId: MQCCSI_UNDEFINED,
    Format: chars(MQFMT_NONE),
    Flags: MQWIH_NONE,
    ServiceName: blank(),
    ServiceStep: blank(),
    MsgToken: MQMTOK_NONE,
    Reserved: blank(),
};

pub const MQXQH_DEFAULT: MQXQH = MQXQH {
    StrucId: chars(MQXQH_STRUC_ID),
    Version: MQXQH_VERSION_1,
    RemoteQName: nul(),
    RemoteQMgrName: nul(),
    MsgDesc: MQMD1_DEFAULT,
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
    MQCHARV => MQCHARV_DEFAULT,
    MQMD => MQMD_DEFAULT,
    MQMD1 => MQMD1_DEFAULT,
    MQMDE => MQMDE_DEFAULT,
    MQOD => MQOD_DEFAULT,
    MQOR => MQOR_DEFAULT,
    MQRR => MQRR_DEFAULT,
    MQPMO => MQPMO_DEFAULT,
    MQGMO => MQGMO_DEFAULT,
    MQCNO => MQCNO_DEFAULT,
    MQCSP => MQCSP_DEFAULT,
    MQSCO => MQSCO_DEFAULT,
    MQAIR => MQAIR_DEFAULT,
    MQBNO => MQBNO_DEFAULT,
    MQCD => MQCD_DEFAULT,
    MQPD => MQPD_DEFAULT,
    MQIMPO => MQIMPO_DEFAULT,
    MQMHBO => MQMHBO_DEFAULT,
    MQBMHO => MQBMHO_DEFAULT,
    MQBO => MQBO_DEFAULT,
    MQCMHO => MQCMHO_DEFAULT,
    MQDMHO => MQDMHO_DEFAULT,
    MQDMPO => MQDMPO_DEFAULT,
    MQSMPO => MQSMPO_DEFAULT,
    MQSRO => MQSRO_DEFAULT,
    MQSD => MQSD_DEFAULT,
    MQSTS => MQSTS_DEFAULT,
    MQCBD => MQCBD_DEFAULT,
    MQCTLO => MQCTLO_DEFAULT,
    MQCIH => MQCIH_DEFAULT,
    MQDH => MQDH_DEFAULT,
    MQDLH => MQDLH_DEFAULT,
    MQIIH => MQIIH_DEFAULT,
    MQRFH => MQRFH_DEFAULT,
    MQRFH2 => MQRFH2_DEFAULT,
    MQRMH => MQRMH_DEFAULT,
    MQTM => MQTM_DEFAULT,
    MQTMC2 => MQTMC2_DEFAULT,
    MQWIH => MQWIH_DEFAULT,
    MQXQH => MQXQH_DEFAULT,
);
