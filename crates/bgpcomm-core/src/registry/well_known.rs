//! IANA well-known BGP communities.
//!
//! <https://www.iana.org/assignments/bgp-well-known-communities/>
//!
//! ```text
//! 0xFFFF0000  GRACEFUL_SHUTDOWN            RFC8326
//! 0xFFFF0001  ACCEPT_OWN                   RFC7611
//! 0xFFFF0002  ROUTE_FILTER_TRANSLATED_v4   draft-l3vpn-legacy-rtc
//! 0xFFFF0003  ROUTE_FILTER_v4              draft-l3vpn-legacy-rtc
//! 0xFFFF0004  ROUTE_FILTER_TRANSLATED_v6   draft-l3vpn-legacy-rtc
//! 0xFFFF0005  ROUTE_FILTER_v6              draft-l3vpn-legacy-rtc
//! 0xFFFF0006  LLGR_STALE                   draft-uttaro-idr-bgp-persistence
//! 0xFFFF0007  NO_LLGR                      draft-uttaro-idr-bgp-persistence
//! 0xFFFF0008  accept-own-nexthop           draft-agrewal-idr-accept-own-nexthop
//! 0xFFFF029A  BLACKHOLE                    RFC7999
//! 0xFFFFFF01  NO_EXPORT                    RFC1997
//! 0xFFFFFF02  NO_ADVERTISE                 RFC1997
//! 0xFFFFFF03  NO_EXPORT_SUBCONFED          RFC1997
//! 0xFFFFFF04  NOPEER                       RFC3765
//! ```

/// `(value, label)` pairs under ASN 65535, value written in decimal.
pub const WELL_KNOWN_COMMUNITIES: &[(&str, &str)] = &[
    ("0", "graceful shutdown"),
    ("1", "accept own"),
    ("2", "route filter translated v4"),
    ("3", "route filter v4"),
    ("4", "route filter translated v6"),
    ("5", "route filter v6"),
    ("6", "llgr stale"),
    ("7", "no llgr"),
    ("8", "accept-own-nexthop"),
    ("666", "blackhole"),
    ("1048321", "no export"),
    ("1048322", "no advertise"),
    ("1048323", "no export subconfed"),
    ("1048324", "nopeer"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn values_are_unique() {
        let values: HashSet<_> = WELL_KNOWN_COMMUNITIES.iter().map(|(v, _)| *v).collect();
        assert_eq!(values.len(), WELL_KNOWN_COMMUNITIES.len());
    }
}
