// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use serde_bytes::{ByteBuf as SerdeByteBuf, Bytes as SerdeBytes};

use crate::identity::PublicKey;
use crate::multiaddr::Multiaddr;
use crate::multihash::Multihash;
use crate::peer_id::PeerId;

/// Helper method for `serde` to serialize a value into its textual form when using a human
/// readable encoding (JSON), otherwise it serializes the binary form directly (CBOR).
fn serialize_text_or_bytes<S>(text: String, bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if serializer.is_human_readable() {
        serializer.serialize_str(&text)
    } else {
        SerdeBytes::new(bytes).serialize(serializer)
    }
}

/// Either the textual or the binary form of a value, depending on the deserializer.
enum TextOrBytes {
    Text(String),
    Bytes(Vec<u8>),
}

fn deserialize_text_or_bytes<'de, D>(deserializer: D) -> Result<TextOrBytes, D::Error>
where
    D: serde::Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        Ok(TextOrBytes::Text(String::deserialize(deserializer)?))
    } else {
        let bytes = <SerdeByteBuf>::deserialize(deserializer)?;
        Ok(TextOrBytes::Bytes(bytes.into_vec()))
    }
}

impl Serialize for PeerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_text_or_bytes(self.to_base58(), &self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for PeerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let result = match deserialize_text_or_bytes(deserializer)? {
            TextOrBytes::Text(text) => PeerId::from_base58(&text),
            TextOrBytes::Bytes(bytes) => PeerId::from_bytes(&bytes),
        };
        result.map_err(|err| SerdeError::custom(err.to_string()))
    }
}

impl Serialize for Multiaddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_text_or_bytes(self.to_string(), &self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Multiaddr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let result = match deserialize_text_or_bytes(deserializer)? {
            TextOrBytes::Text(text) => Multiaddr::parse(&text),
            TextOrBytes::Bytes(bytes) => Multiaddr::from_bytes(&bytes),
        };
        result.map_err(|err| SerdeError::custom(err.to_string()))
    }
}

impl Serialize for Multihash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_text_or_bytes(self.to_hex(), &self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = match deserialize_text_or_bytes(deserializer)? {
            TextOrBytes::Text(text) => {
                hex::decode(text).map_err(|err| SerdeError::custom(err.to_string()))?
            }
            TextOrBytes::Bytes(bytes) => bytes,
        };
        Multihash::from_bytes(&bytes).map_err(|err| SerdeError::custom(err.to_string()))
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_text_or_bytes(self.to_hex(), self.as_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let result = match deserialize_text_or_bytes(deserializer)? {
            TextOrBytes::Text(text) => text.parse(),
            TextOrBytes::Bytes(bytes) => PublicKey::try_from(bytes.as_slice()),
        };
        result.map_err(|err| SerdeError::custom(err.to_string()))
    }
}
