//! Stable source-id generation for opportunity cards.
//!
//! A source id is `{type}_{hash8}_{millis}`: the opportunity type, an 8-hex
//! FNV-1a digest of the source URL, and the creation timestamp in unix
//! milliseconds. The timestamp is the only non-deterministic component of a
//! card, so equality checks use [`comparison_key`], which strips it.

use chrono::Utc;

use crate::enums::OpportunityType;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the raw bytes.
#[must_use]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Build a source id for a card derived from `url`.
#[must_use]
pub fn source_id(ty: OpportunityType, url: &str) -> String {
    format!(
        "{}_{:08x}_{}",
        ty.as_str(),
        fnv1a(url.as_bytes()) & 0xffff_ffff,
        Utc::now().timestamp_millis()
    )
}

/// The deterministic prefix of a source id (`{type}_{hash8}`), with the
/// embedded timestamp removed. Two cards built from the same hit at
/// different times share the same comparison key.
#[must_use]
pub fn comparison_key(source_id: &str) -> &str {
    source_id
        .rfind('_')
        .map_or(source_id, |idx| &source_id[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fnv1a_known_vector() {
        // FNV-1a of the empty string is the offset basis.
        assert_eq!(fnv1a(b""), FNV_OFFSET);
        assert_ne!(fnv1a(b"a"), fnv1a(b"b"));
    }

    #[test]
    fn source_id_shape() {
        let id = source_id(OpportunityType::Grants, "https://grants.example/1");
        let parts: Vec<&str> = id.split('_').collect();
        // "grants" + hash + millis
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "grants");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[2].parse::<i64>().is_ok());
    }

    #[test]
    fn comparison_key_strips_timestamp_only() {
        let a = source_id(OpportunityType::LocalEvents, "https://e.example/x");
        let b = source_id(OpportunityType::LocalEvents, "https://e.example/x");
        assert_eq!(comparison_key(&a), comparison_key(&b));

        let other = source_id(OpportunityType::LocalEvents, "https://e.example/y");
        assert_ne!(comparison_key(&a), comparison_key(&other));
    }

    #[test]
    fn multi_segment_type_keeps_hash() {
        let id = source_id(OpportunityType::GovernmentContracts, "https://sam.example");
        let key = comparison_key(&id);
        assert!(key.starts_with("government_contracts_"));
        assert_eq!(key.split('_').count(), 3); // government + contracts + hash
    }
}
