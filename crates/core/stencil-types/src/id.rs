//! Item identifiers.
//!
//! Every item in a content store carries a 128-bit identifier. Stores and
//! configuration files write them in several textual forms, so parsing is
//! liberal while display is always the braced upper-case form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::IdParseError;

/// A store-assigned item identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemId(Uuid);

impl ItemId {
    /// The empty identifier. Never refers to a real item.
    pub const NIL: ItemId = ItemId(Uuid::nil());

    /// Create an identifier from its 128-bit value.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Create an identifier from a [`Uuid`].
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying [`Uuid`].
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true for the nil sentinel.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse an identifier.
    ///
    /// Accepts the hyphenated, simple, braced (`{...}`), parenthesized
    /// (`(...)`) and hexadecimal struct (`{0x...,0x...,0x...,{0x..,...}}`)
    /// forms in either case, after trimming surrounding whitespace. The URN
    /// form is not an item id and is rejected.
    pub fn parse(input: &str) -> Result<Self, IdParseError> {
        let invalid = || IdParseError::InvalidId(input.to_string());
        let text = input.trim();

        if text.starts_with("{0x") || text.starts_with("{0X") {
            return parse_hex_struct(text).map(Self).ok_or_else(invalid);
        }
        if text.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("urn:")) {
            return Err(invalid());
        }

        let text = match text.strip_prefix('(') {
            Some(rest) => match rest.strip_suffix(')') {
                // Parentheses only wrap the hyphenated form
                Some(inner) if inner.len() == 36 => inner,
                _ => return Err(invalid()),
            },
            None => text,
        };
        Uuid::parse_str(text).map(Self).map_err(|_| invalid())
    }

    /// Parse an identifier, returning `None` instead of an error.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }
}

/// `{0xdddddddd,0xdddd,0xdddd,{0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd,0xdd}}`,
/// where each component may drop leading zeros.
fn parse_hex_struct(text: &str) -> Option<Uuid> {
    let inner = text.strip_prefix('{')?.strip_suffix("}}")?;
    let (head, tail) = inner.split_once(",{")?;

    let mut head = head.split(',');
    let d1 = hex_component(head.next()?, 8)?;
    let d2 = hex_component(head.next()?, 4)? as u16;
    let d3 = hex_component(head.next()?, 4)? as u16;
    if head.next().is_some() {
        return None;
    }

    let mut d4 = [0u8; 8];
    let mut bytes = tail.split(',');
    for byte in &mut d4 {
        *byte = hex_component(bytes.next()?, 2)? as u8;
    }
    if bytes.next().is_some() {
        return None;
    }

    Some(Uuid::from_fields(d1, d2, d3, &d4))
}

fn hex_component(token: &str, max_digits: usize) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))?;
    if digits.is_empty()
        || digits.len() > max_digits
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.braced())
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self)
    }
}

impl FromStr for ItemId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
