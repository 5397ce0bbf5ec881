//! Named values used by the structure initialisers, and the handful of
//! neighbouring values callers reach for when overriding a default.

use mq_binary::MQBYTE;
use mq_binary::MQCHAR;
use mq_binary::MQHMSG;
use mq_binary::MQLONG;

// ---------------------------------------------------------------------------
//  Eye-catchers
// ---------------------------------------------------------------------------

pub const MQAIR_STRUC_ID: &[u8; 4] = b"AIR ";
pub const MQBMHO_STRUC_ID: &[u8; 4] = b"BMHO";
pub const MQBNO_STRUC_ID: &[u8; 4] = b"BNO ";
pub const MQBO_STRUC_ID: &[u8; 4] = b"BO  ";
pub const MQCBD_STRUC_ID: &[u8; 4] = b"CBD ";
pub const MQCIH_STRUC_ID: &[u8; 4] = b"CIH ";
pub const MQCMHO_STRUC_ID: &[u8; 4] = b"CMHO";
pub const MQCNO_STRUC_ID: &[u8; 4] = b"CNO ";
pub const MQCSP_STRUC_ID: &[u8; 4] = b"CSP ";
pub const MQCTLO_STRUC_ID: &[u8; 4] = b"CTLO";
pub const MQDH_STRUC_ID: &[u8; 4] = b"DH  ";
pub const MQDLH_STRUC_ID: &[u8; 4] = b"DLH ";
pub const MQDMHO_STRUC_ID: &[u8; 4] = b"DMHO";
pub const MQDMPO_STRUC_ID: &[u8; 4] = b"DMPO";
pub const MQGMO_STRUC_ID: &[u8; 4] = b"GMO ";
pub const MQIIH_STRUC_ID: &[u8; 4] = b"IIH ";
pub const MQIMPO_STRUC_ID: &[u8; 4] = b"IMPO";
pub const MQMD_STRUC_ID: &[u8; 4] = b"MD  ";
pub const MQMDE_STRUC_ID: &[u8; 4] = b"MDE ";
pub const MQMHBO_STRUC_ID: &[u8; 4] = b"MHBO";
pub const MQOD_STRUC_ID: &[u8; 4] = b"OD  ";
pub const MQPD_STRUC_ID: &[u8; 4] = b"PD  ";
pub const MQPMO_STRUC_ID: &[u8; 4] = b"PMO ";
pub const MQRFH_STRUC_ID: &[u8; 4] = b"RFH ";
pub const MQRMH_STRUC_ID: &[u8; 4] = b"RMH ";
pub const MQSCO_STRUC_ID: &[u8; 4] = b"SCO ";
pub const MQSD_STRUC_ID: &[u8; 4] = b"SD  ";
pub const MQSMPO_STRUC_ID: &[u8; 4] = b"SMPO";
pub const MQSRO_STRUC_ID: &[u8; 4] = b"SRO ";
pub const MQSTS_STRUC_ID: &[u8; 4] = b"STAT";
pub const MQTM_STRUC_ID: &[u8; 4] = b"TM  ";
pub const MQTMC_STRUC_ID: &[u8; 4] = b"TMC ";
pub const MQWIH_STRUC_ID: &[u8; 4] = b"WIH ";
pub const MQXQH_STRUC_ID: &[u8; 4] = b"XQH ";

pub const MQEPH_STRUC_ID: &[u8; 4] = b"EPH ";
pub const MQZAC_STRUC_ID: &[u8; 4] = b"ZAC ";
pub const MQZAD_STRUC_ID: &[u8; 4] = b"ZAD ";
pub const MQZED_STRUC_ID: &[u8; 4] = b"ZED ";
pub const MQZFP_STRUC_ID: &[u8; 4] = b"ZFP ";
pub const MQZIC_STRUC_ID: &[u8; 4] = b"ZIC ";

pub const MQACH_STRUC_ID: &[u8; 4] = b"ACH ";
pub const MQAXC_STRUC_ID: &[u8; 4] = b"AXC ";
pub const MQAXP_STRUC_ID: &[u8; 4] = b"AXP ";
pub const MQCXP_STRUC_ID: &[u8; 4] = b"CXP ";
pub const MQDXP_STRUC_ID: &[u8; 4] = b"DXP ";
pub const MQIEP_STRUC_ID: &[u8; 4] = b"IEP ";
pub const MQNXP_STRUC_ID: &[u8; 4] = b"NXP ";
pub const MQPBC_STRUC_ID: &[u8; 4] = b"PBC ";
pub const MQPSXP_STRUC_ID: &[u8; 4] = b"PSXP";
pub const MQSBC_STRUC_ID: &[u8; 4] = b"SBC ";
pub const MQWDR_STRUC_ID: &[u8; 4] = b"WDR ";
pub const MQWQR_STRUC_ID: &[u8; 4] = b"WQR ";
pub const MQWXP_STRUC_ID: &[u8; 4] = b"WXP ";
pub const MQXEPO_STRUC_ID: &[u8; 4] = b"XEPO";

// ---------------------------------------------------------------------------
//  Structure versions
// ---------------------------------------------------------------------------

pub const MQAIR_VERSION_1: MQLONG = 1;
pub const MQAIR_VERSION_2: MQLONG = 2;
pub const MQAIR_CURRENT_VERSION: MQLONG = 2;
pub const MQBMHO_VERSION_1: MQLONG = 1;
pub const MQBNO_VERSION_1: MQLONG = 1;
pub const MQBO_VERSION_1: MQLONG = 1;
pub const MQCBD_VERSION_1: MQLONG = 1;
pub const MQCD_VERSION_6: MQLONG = 6;
pub const MQCD_CURRENT_VERSION: MQLONG = 12;
pub const MQCIH_VERSION_2: MQLONG = 2;
pub const MQCMHO_VERSION_1: MQLONG = 1;
pub const MQCNO_VERSION_1: MQLONG = 1;
pub const MQCNO_CURRENT_VERSION: MQLONG = 8;
pub const MQCSP_VERSION_1: MQLONG = 1;
pub const MQCSP_CURRENT_VERSION: MQLONG = 3;
pub const MQCTLO_VERSION_1: MQLONG = 1;
pub const MQDH_VERSION_1: MQLONG = 1;
pub const MQDLH_VERSION_1: MQLONG = 1;
pub const MQDMHO_VERSION_1: MQLONG = 1;
pub const MQDMPO_VERSION_1: MQLONG = 1;
pub const MQGMO_VERSION_1: MQLONG = 1;
pub const MQGMO_CURRENT_VERSION: MQLONG = 4;
pub const MQIIH_VERSION_1: MQLONG = 1;
pub const MQIMPO_VERSION_1: MQLONG = 1;
pub const MQMD_VERSION_1: MQLONG = 1;
pub const MQMD_VERSION_2: MQLONG = 2;
pub const MQMD_CURRENT_VERSION: MQLONG = 2;
pub const MQMDE_VERSION_2: MQLONG = 2;
pub const MQMHBO_VERSION_1: MQLONG = 1;
pub const MQOD_VERSION_1: MQLONG = 1;
pub const MQOD_CURRENT_VERSION: MQLONG = 4;
pub const MQPD_VERSION_1: MQLONG = 1;
pub const MQPMO_VERSION_1: MQLONG = 1;
pub const MQPMO_CURRENT_VERSION: MQLONG = 3;
pub const MQRFH_VERSION_1: MQLONG = 1;
pub const MQRFH_VERSION_2: MQLONG = 2;
pub const MQRMH_VERSION_1: MQLONG = 1;
pub const MQSCO_VERSION_1: MQLONG = 1;
pub const MQSCO_CURRENT_VERSION: MQLONG = 6;
pub const MQSD_VERSION_1: MQLONG = 1;
pub const MQSMPO_VERSION_1: MQLONG = 1;
pub const MQSRO_VERSION_1: MQLONG = 1;
pub const MQSTS_VERSION_1: MQLONG = 1;
pub const MQSTS_CURRENT_VERSION: MQLONG = 2;
pub const MQTM_VERSION_1: MQLONG = 1;
pub const MQWIH_VERSION_1: MQLONG = 1;
pub const MQXQH_VERSION_1: MQLONG = 1;

/// `MQTMC2` carries its version as characters.
pub const MQTMC_VERSION_2: &[u8; 4] = b"   2";

pub const MQCFH_VERSION_1: MQLONG = 1;
pub const MQCFH_VERSION_3: MQLONG = 3;
pub const MQEPH_VERSION_1: MQLONG = 1;
pub const MQZAC_VERSION_1: MQLONG = 1;
pub const MQZAD_VERSION_1: MQLONG = 1;
pub const MQZED_VERSION_1: MQLONG = 1;
pub const MQZFP_VERSION_1: MQLONG = 1;
pub const MQZIC_VERSION_1: MQLONG = 1;

pub const MQACH_VERSION_1: MQLONG = 1;
pub const MQAXC_VERSION_1: MQLONG = 1;
pub const MQAXC_CURRENT_VERSION: MQLONG = 2;
pub const MQAXP_VERSION_1: MQLONG = 1;
pub const MQAXP_CURRENT_VERSION: MQLONG = 2;
pub const MQCXP_VERSION_1: MQLONG = 1;
pub const MQCXP_CURRENT_VERSION: MQLONG = 8;
pub const MQDXP_VERSION_1: MQLONG = 1;
pub const MQDXP_CURRENT_VERSION: MQLONG = 2;
pub const MQIEP_VERSION_1: MQLONG = 1;
pub const MQNXP_VERSION_1: MQLONG = 1;
pub const MQPBC_VERSION_1: MQLONG = 1;
pub const MQPSXP_VERSION_1: MQLONG = 1;
pub const MQSBC_VERSION_1: MQLONG = 1;
pub const MQWDR_VERSION_1: MQLONG = 1;
pub const MQWDR_VERSION_2: MQLONG = 2;
pub const MQWQR_VERSION_1: MQLONG = 1;
pub const MQWQR_VERSION_2: MQLONG = 2;
pub const MQWQR_VERSION_3: MQLONG = 3;
pub const MQWQR_VERSION_4: MQLONG = 4;
pub const MQWXP_VERSION_1: MQLONG = 1;
pub const MQWXP_VERSION_2: MQLONG = 2;
pub const MQWXP_VERSION_3: MQLONG = 3;
pub const MQWXP_VERSION_4: MQLONG = 4;
pub const MQXEPO_VERSION_1: MQLONG = 1;

// ---------------------------------------------------------------------------
//  Structure lengths
// ---------------------------------------------------------------------------

pub const MQCIH_LENGTH_2: MQLONG = 180;
pub const MQIIH_LENGTH_1: MQLONG = 84;
pub const MQMDE_LENGTH_2: MQLONG = 72;
pub const MQRFH_STRUC_LENGTH_FIXED: MQLONG = 32;
pub const MQRFH_STRUC_LENGTH_FIXED_2: MQLONG = 36;
pub const MQWIH_LENGTH_1: MQLONG = 120;

#[cfg(target_pointer_width = "64")]
pub const MQCD_LENGTH_6: MQLONG = 1688;

#[cfg(target_pointer_width = "32")]
pub const MQCD_LENGTH_6: MQLONG = 1648;

pub const MQCFH_STRUC_LENGTH: MQLONG = 36;
pub const MQCFBF_STRUC_LENGTH_FIXED: MQLONG = 20;
pub const MQCFBS_STRUC_LENGTH_FIXED: MQLONG = 16;
pub const MQCFGR_STRUC_LENGTH: MQLONG = 16;
pub const MQCFIF_STRUC_LENGTH: MQLONG = 20;
pub const MQCFIL_STRUC_LENGTH_FIXED: MQLONG = 16;
pub const MQCFIL64_STRUC_LENGTH_FIXED: MQLONG = 16;
pub const MQCFIN_STRUC_LENGTH: MQLONG = 16;
pub const MQCFIN64_STRUC_LENGTH: MQLONG = 24;
pub const MQCFSF_STRUC_LENGTH_FIXED: MQLONG = 24;
pub const MQCFSL_STRUC_LENGTH_FIXED: MQLONG = 24;
pub const MQCFST_STRUC_LENGTH_FIXED: MQLONG = 20;
pub const MQEPH_STRUC_LENGTH_FIXED: MQLONG = 68;

pub const MQWDR_LENGTH_1: MQLONG = 124;
pub const MQWDR_LENGTH_2: MQLONG = 136;
pub const MQWQR_LENGTH_1: MQLONG = 200;
pub const MQWQR_LENGTH_2: MQLONG = 208;
pub const MQWQR_LENGTH_3: MQLONG = 212;
pub const MQWQR_LENGTH_4: MQLONG = 216;

#[cfg(target_pointer_width = "64")]
pub const MQACH_LENGTH_1: MQLONG = 72;

#[cfg(target_pointer_width = "32")]
pub const MQACH_LENGTH_1: MQLONG = 68;

#[cfg(target_pointer_width = "64")]
pub const MQIEP_LENGTH_1: MQLONG = 264;

#[cfg(target_pointer_width = "32")]
pub const MQIEP_LENGTH_1: MQLONG = 140;

// ---------------------------------------------------------------------------
//  Encoding, character sets, formats
// ---------------------------------------------------------------------------

#[cfg(target_endian = "little")]
pub const MQENC_NATIVE: MQLONG = 0x0000_0222;

#[cfg(target_endian = "big")]
pub const MQENC_NATIVE: MQLONG = 0x0000_0111;

pub const MQCCSI_UNDEFINED: MQLONG = 0;
pub const MQCCSI_DEFAULT: MQLONG = 0;
pub const MQCCSI_Q_MGR: MQLONG = 0;
pub const MQCCSI_INHERIT: MQLONG = -2;
pub const MQCCSI_APPL: MQLONG = -3;
pub const MQCCSI_UTF8: MQLONG = 1208;

pub const MQFMT_NONE: &[u8; 8] = b"        ";
pub const MQFMT_STRING: &[u8; 8] = b"MQSTR   ";
pub const MQFMT_DEAD_LETTER_HEADER: &[u8; 8] = b"MQDEAD  ";
pub const MQFMT_RF_HEADER_2: &[u8; 8] = b"MQHRF2  ";
pub const MQFMT_XMIT_Q_HEADER: &[u8; 8] = b"MQXMIT  ";
pub const MQFMT_ADMIN: &[u8; 8] = b"MQADMIN ";

// ---------------------------------------------------------------------------
//  Byte-string sentinels
// ---------------------------------------------------------------------------

pub const MQMI_NONE: [MQBYTE; 24] = [0; 24];
pub const MQCI_NONE: [MQBYTE; 24] = [0; 24];
pub const MQGI_NONE: [MQBYTE; 24] = [0; 24];
pub const MQACT_NONE: [MQBYTE; 32] = [0; 32];
pub const MQSID_NONE: [MQBYTE; 40] = [0; 40];
pub const MQMTOK_NONE: [MQBYTE; 16] = [0; 16];
pub const MQCT_NONE: [MQBYTE; 128] = [0; 128];
pub const MQCONNID_NONE: [MQBYTE; 24] = [0; 24];
pub const MQCFAC_NONE: [MQBYTE; 8] = [0; 8];
pub const MQITII_NONE: [MQBYTE; 16] = [0; 16];
pub const MQOII_NONE: [MQBYTE; 24] = [0; 24];

pub const MQIAUT_NONE: &[u8; 8] = b"        ";
pub const MQCFUNC_NONE: &[u8; 4] = b"    ";
pub const MQCSC_NONE: &[u8; 4] = b"    ";

// ---------------------------------------------------------------------------
//  Message descriptor
// ---------------------------------------------------------------------------

pub const MQRO_NONE: MQLONG = 0;
pub const MQMT_REQUEST: MQLONG = 1;
pub const MQMT_REPLY: MQLONG = 2;
pub const MQMT_REPORT: MQLONG = 4;
pub const MQMT_DATAGRAM: MQLONG = 8;
pub const MQEI_UNLIMITED: MQLONG = -1;
pub const MQFB_NONE: MQLONG = 0;
pub const MQPRI_PRIORITY_AS_Q_DEF: MQLONG = -1;
pub const MQPRI_PRIORITY_AS_PARENT: MQLONG = -2;
pub const MQPRI_PRIORITY_AS_PUBLISHED: MQLONG = -3;
pub const MQPER_NOT_PERSISTENT: MQLONG = 0;
pub const MQPER_PERSISTENT: MQLONG = 1;
pub const MQPER_PERSISTENCE_AS_Q_DEF: MQLONG = 2;
pub const MQAT_NO_CONTEXT: MQLONG = 0;
pub const MQAT_UNIX: MQLONG = 6;
pub const MQAT_WINDOWS_NT: MQLONG = 11;

/// Application type of the platform the client runs on
#[cfg(windows)]
pub const MQAT_DEFAULT: MQLONG = MQAT_WINDOWS_NT;

#[cfg(not(windows))]
pub const MQAT_DEFAULT: MQLONG = MQAT_UNIX;
pub const MQMF_NONE: MQLONG = 0;
pub const MQOL_UNDEFINED: MQLONG = -1;
pub const MQMDEF_NONE: MQLONG = 0;

// ---------------------------------------------------------------------------
//  Objects, handles, completion
// ---------------------------------------------------------------------------

pub const MQOT_NONE: MQLONG = 0;
pub const MQOT_Q: MQLONG = 1;
pub const MQOT_TOPIC: MQLONG = 8;
pub const MQHO_NONE: MQLONG = 0;
pub const MQHM_NONE: MQHMSG = 0;
pub const MQCC_OK: MQLONG = 0;
pub const MQRC_NONE: MQLONG = 0;

// ---------------------------------------------------------------------------
//  Put / get
// ---------------------------------------------------------------------------

pub const MQPMO_NONE: MQLONG = 0;
pub const MQPMO_SYNCPOINT: MQLONG = 0x0000_0002;
pub const MQPMO_NO_SYNCPOINT: MQLONG = 0x0000_0004;
pub const MQPMO_NEW_MSG_ID: MQLONG = 0x0000_0040;
pub const MQPMRF_NONE: MQLONG = 0;
pub const MQACTP_NEW: MQLONG = 0;
pub const MQPMO_PUB_LEVEL_DEFAULT: MQLONG = 9;

pub const MQGMO_NO_WAIT: MQLONG = 0;
pub const MQGMO_WAIT: MQLONG = 0x0000_0001;
pub const MQGMO_PROPERTIES_AS_Q_DEF: MQLONG = 0;
pub const MQMO_MATCH_MSG_ID: MQLONG = 0x0000_0001;
pub const MQMO_MATCH_CORREL_ID: MQLONG = 0x0000_0002;
pub const MQGS_NOT_IN_GROUP: MQCHAR = b' ' as MQCHAR;
pub const MQSS_NOT_A_SEGMENT: MQCHAR = b' ' as MQCHAR;
pub const MQSEG_INHIBITED: MQCHAR = b' ' as MQCHAR;
pub const MQRL_UNDEFINED: MQLONG = -1;
pub const MQWI_UNLIMITED: MQLONG = -1;

// ---------------------------------------------------------------------------
//  Connection, security, balancing
// ---------------------------------------------------------------------------

pub const MQCNO_NONE: MQLONG = 0;
pub const MQCNO_STANDARD_BINDING: MQLONG = 0;
pub const MQCNO_CLIENT_BINDING: MQLONG = 0x0000_0800;
pub const MQCSP_AUTH_NONE: MQLONG = 0;
pub const MQCSP_AUTH_USER_ID_AND_PWD: MQLONG = 1;
pub const MQSCO_RESET_COUNT_DEFAULT: MQLONG = 0;
pub const MQSSL_FIPS_NO: MQLONG = 0;
pub const MQ_SUITE_B_NOT_AVAILABLE: MQLONG = 0;
pub const MQ_SUITE_B_NONE: MQLONG = 1;
pub const MQ_CERT_VAL_POLICY_DEFAULT: MQLONG = 0;
pub const MQAIT_CRL_LDAP: MQLONG = 1;
pub const MQBNO_BALTYPE_SIMPLE: MQLONG = 0;
pub const MQBNO_TIMEOUT_AS_DEFAULT: MQLONG = -1;
pub const MQBNO_OPTIONS_NONE: MQLONG = 0;

// ---------------------------------------------------------------------------
//  Properties, handles, subscriptions, callbacks
// ---------------------------------------------------------------------------

pub const MQPD_NONE: MQLONG = 0;
pub const MQPD_SUPPORT_OPTIONAL: MQLONG = 0x0000_0001;
pub const MQPD_NO_CONTEXT: MQLONG = 0;
pub const MQCOPY_DEFAULT: MQLONG = 0x0000_0016;
pub const MQIMPO_INQ_FIRST: MQLONG = 0;
pub const MQMHBO_NONE: MQLONG = 0;
pub const MQBO_NONE: MQLONG = 0;
pub const MQDMHO_NONE: MQLONG = 0;
pub const MQCMHO_DEFAULT_VALIDATION: MQLONG = 0;
pub const MQSMPO_SET_FIRST: MQLONG = 0;
pub const MQDMPO_DEL_FIRST: MQLONG = 0;
pub const MQBMHO_DELETE_PROPERTIES: MQLONG = 0x0000_0001;
pub const MQSRO_FAIL_IF_QUIESCING: MQLONG = 0x0000_2000;
pub const MQSO_NONE: MQLONG = 0;
pub const MQSO_CREATE: MQLONG = 0x0000_0002;
pub const MQCBT_MESSAGE_CONSUMER: MQLONG = 0x0000_0001;
pub const MQCBDO_NONE: MQLONG = 0;
pub const MQCBD_FULL_MSG_LENGTH: MQLONG = -1;
pub const MQCTLO_NONE: MQLONG = 0;

// ---------------------------------------------------------------------------
//  Headers
// ---------------------------------------------------------------------------

pub const MQCIH_NONE: MQLONG = 0;
pub const MQCRC_OK: MQLONG = 0;
pub const MQCUOWC_ONLY: MQLONG = 0x0000_0111;
pub const MQCGWI_DEFAULT: MQLONG = -2;
pub const MQCLT_PROGRAM: MQLONG = 1;
pub const MQCODL_AS_INPUT: MQLONG = -1;
pub const MQCADSD_NONE: MQLONG = 0;
pub const MQCCT_NO: MQLONG = 0;
pub const MQCTES_NOSYNC: MQLONG = 0;
pub const MQDHF_NONE: MQLONG = 0;
pub const MQIIH_NONE: MQLONG = 0;
pub const MQITS_NOT_IN_CONVERSATION: MQCHAR = b' ' as MQCHAR;
pub const MQICM_COMMIT_THEN_SEND: MQCHAR = b'0' as MQCHAR;
pub const MQISS_CHECK: MQCHAR = b'C' as MQCHAR;
pub const MQRFH_NONE: MQLONG = 0;
pub const MQRMHF_NOT_LAST: MQLONG = 0;
pub const MQWIH_NONE: MQLONG = 0;

// ---------------------------------------------------------------------------
//  Channel definition
// ---------------------------------------------------------------------------

pub const MQCHT_SENDER: MQLONG = 1;
pub const MQCHT_SERVER: MQLONG = 2;
pub const MQCHT_RECEIVER: MQLONG = 3;
pub const MQCHT_REQUESTER: MQLONG = 4;
pub const MQCHT_CLNTCONN: MQLONG = 6;
pub const MQCHT_SVRCONN: MQLONG = 7;
pub const MQXPT_LU62: MQLONG = 1;
pub const MQXPT_TCP: MQLONG = 2;
pub const MQPA_DEFAULT: MQLONG = 1;
pub const MQCDC_NO_SENDER_CONVERSION: MQLONG = 0;
pub const MQMCAT_PROCESS: MQLONG = 1;
pub const MQNPMS_FAST: MQLONG = 2;
pub const MQ_EXIT_NAME_LENGTH: MQLONG = 128;
pub const MQ_EXIT_DATA_LENGTH: MQLONG = 32;
pub const MQSCA_REQUIRED: MQLONG = 0;
pub const MQKAI_AUTO: MQLONG = -1;
pub const MQCOMPRESS_NOT_AVAILABLE: MQLONG = -1;
pub const MQCOMPRESS_NONE: MQLONG = 0;
pub const MQMON_OFF: MQLONG = 0;
pub const MQPROP_COMPATIBILITY: MQLONG = 0;
pub const MQCAFTY_PREFERRED: MQLONG = 1;
pub const MQUSEDLQ_YES: MQLONG = 2;
pub const MQRCN_NO: MQLONG = 0;
pub const MQSPL_PASSTHRU: MQLONG = 0;

pub const MQCD_BATCH_SIZE_DEFAULT: MQLONG = 50;
pub const MQCD_DISC_INTERVAL_DEFAULT: MQLONG = 6000;
pub const MQCD_SHORT_RETRY_COUNT_DEFAULT: MQLONG = 10;
pub const MQCD_SHORT_RETRY_INTERVAL_DEFAULT: MQLONG = 60;
pub const MQCD_LONG_RETRY_COUNT_DEFAULT: MQLONG = 999_999_999;
pub const MQCD_LONG_RETRY_INTERVAL_DEFAULT: MQLONG = 1200;
pub const MQCD_SEQ_NUMBER_WRAP_DEFAULT: MQLONG = 999_999_999;
pub const MQCD_MAX_MSG_LENGTH_DEFAULT: MQLONG = 4_194_304;
pub const MQCD_MSG_RETRY_COUNT_DEFAULT: MQLONG = 10;
pub const MQCD_MSG_RETRY_INTERVAL_DEFAULT: MQLONG = 1000;
pub const MQCD_HEARTBEAT_INTERVAL_DEFAULT: MQLONG = 300;
pub const MQCD_CLIENT_HEARTBEAT_INTERVAL_DEFAULT: MQLONG = 1;
pub const MQCD_CLIENT_MAX_MSG_LENGTH_DEFAULT: MQLONG = 104_857_600;
pub const MQCD_CLWL_CHANNEL_WEIGHT_DEFAULT: MQLONG = 50;
pub const MQCD_SHARING_CONVERSATIONS_DEFAULT: MQLONG = 10;
pub const MQCD_MAX_INSTANCES_DEFAULT: MQLONG = 999_999_999;
pub const MQCD_BATCH_DATA_LIMIT_DEFAULT: MQLONG = 5000;

// ---------------------------------------------------------------------------
//  PCF and installable services
// ---------------------------------------------------------------------------

pub const MQCFT_NONE: MQLONG = 0;
pub const MQCFT_COMMAND: MQLONG = 1;
pub const MQCFT_INTEGER: MQLONG = 3;
pub const MQCFT_STRING: MQLONG = 4;
pub const MQCFT_INTEGER_LIST: MQLONG = 5;
pub const MQCFT_STRING_LIST: MQLONG = 6;
pub const MQCFT_BYTE_STRING: MQLONG = 9;
pub const MQCFT_INTEGER_FILTER: MQLONG = 13;
pub const MQCFT_STRING_FILTER: MQLONG = 14;
pub const MQCFT_BYTE_STRING_FILTER: MQLONG = 15;
pub const MQCFT_GROUP: MQLONG = 20;
pub const MQCFT_INTEGER64: MQLONG = 23;
pub const MQCFT_INTEGER64_LIST: MQLONG = 25;
pub const MQCFC_LAST: MQLONG = 1;
pub const MQCFOP_LESS: MQLONG = 1;
pub const MQEPH_NONE: MQLONG = 0;

pub const MQXE_OTHER: MQLONG = 0;
pub const MQXACT_EXTERNAL: MQLONG = 1;
pub const MQZAT_INITIAL_CONTEXT: MQLONG = 0;
pub const MQZAET_NONE: MQLONG = 0;
pub const MQZAO_NO_AUTHORITY: MQLONG = 0;

// ---------------------------------------------------------------------------
//  Exits
// ---------------------------------------------------------------------------

pub const MQXT_API_EXIT: MQLONG = 2;
pub const MQXT_CHANNEL_SEC_EXIT: MQLONG = 11;
pub const MQXT_CLUSTER_WORKLOAD_EXIT: MQLONG = 20;
pub const MQXT_PUBLISH_EXIT: MQLONG = 22;
pub const MQXT_PRECONNECT_EXIT: MQLONG = 23;
pub const MQXR_CONNECTION: MQLONG = 3;
pub const MQXCC_OK: MQLONG = 0;
pub const MQXR2_DEFAULT_CONTINUATION: MQLONG = 0;
pub const MQXF_INIT: MQLONG = 1;
pub const MQXDR_OK: MQLONG = 0;
pub const MQHC_UNUSABLE_HCONN: MQLONG = -1;
pub const MQMCAS_USER_DEFINED: MQLONG = 0;
pub const MQXEPO_NONE: MQLONG = 0;
pub const MQIEPF_NONE: MQLONG = 0;
pub const MQCLCT_STATIC: MQLONG = 0;
pub const MQCLCT_DYNAMIC: MQLONG = 1;
pub const MQCHS_INACTIVE: MQLONG = 0;
pub const MQQF_NONE: MQLONG = 0;
pub const MQQMF_NONE: MQLONG = 0;
pub const MQBND_BIND_ON_OPEN: MQLONG = 0;
pub const MQQA_PUT_ALLOWED: MQLONG = 0;
pub const MQPRT_SYNC_RESPONSE: MQLONG = 1;
pub const MQCEX_NOLIMIT: MQLONG = -1;

pub const MQXUA_NONE: [MQBYTE; 16] = [0; 16];
pub const MQXPDA_NONE: [MQBYTE; 48] = [0; 48];
