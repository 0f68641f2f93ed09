//! Typed Uuids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::{Uuid, Variant};

/// Length of the hyphenated 8-4-4-4-12 form.
const HYPHENATED_LEN: usize = 36;

/// Parse `value` as a canonical hyphenated UUID.
///
/// Only the 8-4-4-4-12 grouping is accepted (any letter case). The version
/// nibble must be 1 through 5 and the variant nibble one of `8`, `9`, `a`,
/// `b`. Braced, URN and simple forms are rejected.
#[must_use]
pub fn parse_uuid(value: &str) -> Option<Uuid> {
    if value.len() != HYPHENATED_LEN {
        return None;
    }

    let uuid = Uuid::try_parse(value).ok()?;

    let version_ok = matches!(uuid.get_version_num(), 1..=5);
    let variant_ok = uuid.get_variant() == Variant::RFC4122;

    (version_ok && variant_ok).then_some(uuid)
}

/// Returns true when `value` is a canonical v1-v5 UUID.
#[must_use]
pub fn is_uuid(value: &str) -> bool {
    parse_uuid(value).is_some()
}

/// A [`Uuid`] tagged with the record type it identifies.
pub struct TypedUuid<T>(Uuid, PhantomData<T>);

impl<T> TypedUuid<T> {
    /// Wrap an existing [`Uuid`].
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    /// A fresh random (v4) id.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// The untyped [`Uuid`].
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Parse a canonical UUID string into a typed id.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        parse_uuid(value).map(Self::from_uuid)
    }
}

impl<T> Default for TypedUuid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedUuid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedUuid<T> {}

impl<T> Debug for TypedUuid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedUuid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedUuid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedUuid<T> {}

impl<T> Hash for TypedUuid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedUuid<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedUuid<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<Uuid> for TypedUuid<T> {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl<T> From<TypedUuid<T>> for Uuid {
    fn from(value: TypedUuid<T>) -> Self {
        value.into_uuid()
    }
}

impl<T> Serialize for TypedUuid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for TypedUuid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_nibbles(version: char, variant: char) -> String {
        format!(
            "{}-{}-{version}fff-{variant}fff-{}",
            "f".repeat(8),
            "f".repeat(4),
            "f".repeat(12)
        )
    }

    #[test]
    fn accepts_versions_one_to_five_with_rfc_variants() {
        for version in ['1', '2', '3', '4', '5'] {
            for variant in ['8', '9', 'a', 'b', 'A', 'B'] {
                let value = with_nibbles(version, variant);

                assert!(is_uuid(&value), "expected {value} to be accepted");
            }
        }
    }

    #[test]
    fn accepts_uppercase_hex() {
        assert!(
            is_uuid("6F9619FF-8B86-4011-B42D-00C04FC964FF"),
            "uppercase uuid should be accepted"
        );
    }

    #[test]
    fn rejects_invalid_version_nibble() {
        for version in ['0', '6', '7', 'f'] {
            let value = with_nibbles(version, '8');

            assert!(!is_uuid(&value), "expected {value} to be rejected");
        }
    }

    #[test]
    fn rejects_invalid_variant_nibble() {
        for variant in ['0', '7', 'c', 'f'] {
            let value = with_nibbles('4', variant);

            assert!(!is_uuid(&value), "expected {value} to be rejected");
        }
    }

    #[test]
    fn rejects_non_hyphenated_forms() {
        let hyphenated = with_nibbles('4', '8');
        let simple = hyphenated.replace('-', "");
        let braced = format!("{{{hyphenated}}}");
        let urn = format!("urn:uuid:{hyphenated}");

        for value in [simple, braced, urn] {
            assert!(!is_uuid(&value), "expected {value} to be rejected");
        }
    }

    #[test]
    fn rejects_wrong_length_and_misplaced_dashes() {
        let hyphenated = with_nibbles('4', '8');

        assert!(!is_uuid(""), "empty string is not a uuid");
        assert!(
            !is_uuid("ffffffff-ffff-4fff-8fff-fffffffffff"),
            "short value is not a uuid"
        );
        assert!(
            !is_uuid(&format!("{hyphenated}f")),
            "long value is not a uuid"
        );
        assert!(
            !is_uuid("ffffffff-ffff4-fff-8fff-ffffffffffff"),
            "misplaced dash is not a uuid"
        );
        assert!(
            !is_uuid("gfffffff-ffff-4fff-8fff-ffffffffffff"),
            "non-hex digit is not a uuid"
        );
    }

    #[test]
    fn typed_uuid_serializes_as_plain_string() -> Result<(), serde_json::Error> {
        struct Marker;

        let uuid = Uuid::new_v4();
        let typed = TypedUuid::<Marker>::from_uuid(uuid);

        let encoded = serde_json::to_string(&typed)?;
        let decoded: TypedUuid<Marker> = serde_json::from_str(&encoded)?;

        assert_eq!(encoded, format!("\"{uuid}\""));
        assert_eq!(decoded, typed);

        Ok(())
    }
}
