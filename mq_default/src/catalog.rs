//! Runtime listing of every default constant with its byte image.

use mq_binary::MQLONG;
use mq_binary::MqStruct;
use tracing::debug;

use crate::defaults::*;
#[cfg(feature = "exits")]
use crate::exits::*;
#[cfg(feature = "pcf")]
use crate::pcf::*;

/// One `*_DEFAULT` constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEntry {
    /// Constant name, e.g. `MQMD_DEFAULT`
    pub name: &'static str,
    /// Structure the constant is a value of, e.g. `MQMD`
    pub structure: &'static str,
    pub struc_id: Option<[u8; 4]>,
    pub version: Option<MQLONG>,
    /// Cargo feature gating the constant, `None` for the MQI set
    pub feature: Option<&'static str>,
    pub bytes: Vec<u8>,
}

impl DefaultEntry {
    fn of<T: MqStruct>(name: &'static str, feature: Option<&'static str>, value: &T) -> Self {
        Self {
            name,
            structure: T::NAME,
            struc_id: T::STRUC_ID,
            version: value.version(),
            feature,
            bytes: value.to_bytes(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

macro_rules! catalog {
    ($feature:expr; $($value:ident),* $(,)?) => {
        vec![$(DefaultEntry::of(stringify!($value), $feature, &$value)),*]
    };
}

/// Every default: MQI structures first in header order, then the PCF and
/// exit sets when their features are enabled.
pub fn entries() -> Vec<DefaultEntry> {
    #[allow(unused_mut)]
    let mut entries = catalog!(None;
        MQCHARV_DEFAULT,
        MQMD_DEFAULT,
        MQMD1_DEFAULT,
        MQMD2_DEFAULT,
        MQMDE_DEFAULT,
        MQOD_DEFAULT,
        MQOR_DEFAULT,
        MQRR_DEFAULT,
        MQPMO_DEFAULT,
        MQGMO_DEFAULT,
        MQCNO_DEFAULT,
        MQCSP_DEFAULT,
        MQSCO_DEFAULT,
        MQAIR_DEFAULT,
        MQBNO_DEFAULT,
        MQCD_DEFAULT,
        MQCD_CLIENT_CONN_DEFAULT,
        MQPD_DEFAULT,
        MQIMPO_DEFAULT,
        MQMHBO_DEFAULT,
        MQBMHO_DEFAULT,
        MQBO_DEFAULT,
        MQCMHO_DEFAULT,
        MQDMHO_DEFAULT,
        MQDMPO_DEFAULT,
        MQSMPO_DEFAULT,
        MQSRO_DEFAULT,
        MQSD_DEFAULT,
        MQSTS_DEFAULT,
        MQCBD_DEFAULT,
        MQCTLO_DEFAULT,
        MQCIH_DEFAULT,
        MQDH_DEFAULT,
        MQDLH_DEFAULT,
        MQIIH_DEFAULT,
        MQRFH_DEFAULT,
        MQRFH2_DEFAULT,
        MQRMH_DEFAULT,
        MQTM_DEFAULT,
        MQTMC2_DEFAULT,
        MQWIH_DEFAULT,
        MQXQH_DEFAULT,
    );

    #[cfg(feature = "pcf")]
    entries.extend(catalog!(Some("pcf");
        MQCFH_DEFAULT,
        MQCFBF_DEFAULT,
        MQCFBS_DEFAULT,
        MQCFGR_DEFAULT,
        MQCFIF_DEFAULT,
        MQCFIL_DEFAULT,
        MQCFIL64_DEFAULT,
        MQCFIN_DEFAULT,
        MQCFIN64_DEFAULT,
        MQCFSF_DEFAULT,
        MQCFSL_DEFAULT,
        MQCFST_DEFAULT,
        MQEPH_DEFAULT,
        MQZED_DEFAULT,
        MQZAC_DEFAULT,
        MQZAD_DEFAULT,
        MQZFP_DEFAULT,
        MQZIC_DEFAULT,
    ));

    #[cfg(feature = "exits")]
    entries.extend(catalog!(Some("exits");
        MQACH_DEFAULT,
        MQAXC_DEFAULT,
        MQAXP_DEFAULT,
        MQCXP_DEFAULT,
        MQDXP_DEFAULT,
        MQNXP_DEFAULT,
        MQPBC_DEFAULT,
        MQPSXP_DEFAULT,
        MQSBC_DEFAULT,
        MQWCR_DEFAULT,
        MQWDR_DEFAULT,
        MQWDR1_DEFAULT,
        MQWDR2_DEFAULT,
        MQWQR_DEFAULT,
        MQWQR1_DEFAULT,
        MQWQR2_DEFAULT,
        MQWQR3_DEFAULT,
        MQWQR4_DEFAULT,
        MQWXP_DEFAULT,
        MQWXP1_DEFAULT,
        MQWXP2_DEFAULT,
        MQWXP3_DEFAULT,
        MQWXP4_DEFAULT,
        MQXEPO_DEFAULT,
        MQIEP_DEFAULT,
    ));

    entries
}

/// Looks a default up by constant name, `MQMD_DEFAULT`.
pub fn find(name: &str) -> Option<DefaultEntry> {
    let found = entries().into_iter().find(|entry| entry.name == name);
    if found.is_none() {
        debug!(name, "no default with this name");
    }
    found
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::mqi::MQMD;

    #[test]
    fn test_names_are_unique() {
        let entries = entries();
        let names: HashSet<_> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), entries.len());
        assert!(entries.iter().all(|e| e.name.ends_with("_DEFAULT")));
    }

    #[test]
    fn test_mqi_entries_present() {
        let entries = entries();
        assert!(entries.len() >= 42);
        assert_eq!(entries[1].name, "MQMD_DEFAULT");
        assert_eq!(entries[1].structure, "MQMD");
        assert_eq!(entries[..42].iter().filter(|e| e.feature.is_none()).count(), 42);
    }

    #[test]
    fn test_entry_image_matches_constant() {
        let entry = find("MQMD_DEFAULT").unwrap();
        assert_eq!(entry.bytes, MQMD_DEFAULT.to_bytes());
        assert_eq!(entry.size(), MQMD::SIZE);
        assert_eq!(entry.struc_id, Some(*b"MD  "));
        assert_eq!(entry.version, Some(1));
    }

    #[test]
    fn test_struc_id_leads_every_image() {
        for entry in entries() {
            if let Some(id) = entry.struc_id {
                assert_eq!(&entry.bytes[..4], &id, "{}", entry.name);
            }
        }
    }

    #[test]
    fn test_aliased_structure_keeps_its_layout_name() {
        let entry = find("MQMD2_DEFAULT").unwrap();
        assert_eq!(entry.structure, "MQMD");
        assert_eq!(entry.version, Some(2));

        let entry = find("MQCD_CLIENT_CONN_DEFAULT").unwrap();
        assert_eq!(entry.structure, "MQCD");
        assert!(entry.struc_id.is_none());
    }

    #[test]
    fn test_unknown_name() {
        assert!(find("MQXYZ_DEFAULT").is_none());
        assert!(find("mqmd_default").is_none());
    }

    #[cfg(feature = "pcf")]
    #[test]
    fn test_pcf_entries_follow_mqi() {
        let entries = entries();
        let cfh = entries.iter().position(|e| e.name == "MQCFH_DEFAULT").unwrap();
        let xqh = entries.iter().position(|e| e.name == "MQXQH_DEFAULT").unwrap();
        assert!(cfh > xqh);
        assert_eq!(find("MQZIC_DEFAULT").unwrap().feature, Some("pcf"));
    }

    #[cfg(feature = "exits")]
    #[test]
    fn test_exit_entries_follow_mqi() {
        let entries = entries();
        let exits: Vec<_> = entries.iter().filter(|e| e.feature == Some("exits")).collect();
        assert_eq!(exits.len(), 25);
        assert_eq!(exits[0].name, "MQACH_DEFAULT");
        assert_eq!(exits[24].name, "MQIEP_DEFAULT");

        let wdr2 = find("MQWDR2_DEFAULT").unwrap();
        assert_eq!(wdr2.structure, "MQWDR");
        assert_eq!(wdr2.version, Some(2));
        assert_eq!(wdr2.struc_id, Some(*b"WDR "));

        let wcr = find("MQWCR_DEFAULT").unwrap();
        assert!(wcr.struc_id.is_none());
        assert!(wcr.version.is_none());
    }
}
