//! Identifier and money primitives shared by every model.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Scalar the server may emit either as a JSON string or as a JSON integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Unsigned(n) => n.to_string(),
            StringOrNumber::Signed(n) => n.to_string(),
        }
    }
}

/// Decode an optional field that is a string on some endpoints and an integer on others.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

/// Decode an optional flag that is a boolean on some endpoints and `0`/`1` on others.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(
        Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
            Flag::Bool(b) => b,
            Flag::Int(n) => n != 0,
        }),
    )
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                StringOrNumber::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }

        impl From<&$name> for $name {
            fn from(value: &$name) -> Self {
                value.clone()
            }
        }
    };
}

string_id! {
    /// Server-assigned listing id (also the contract id once a trade starts).
    ListingId
}

string_id! {
    /// Server-assigned trade id.
    TradeId
}

string_id! {
    /// Server-assigned buy order id.
    BuyOrderId
}

string_id! {
    /// 64-bit Steam account id.
    SteamId
}

string_id! {
    /// Steam inventory asset id.
    AssetId
}

/// An amount of money in the smallest currency unit (cents).
///
/// Every currency field in the SDK uses this type. It decodes from JSON integers and from
/// floats (rounded to the nearest cent) and always encodes as an integer. Amounts may be
/// negative, e.g. balance adjustments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Whole currency units, e.g. `Cents(1234)` is `12.34`.
    #[must_use]
    pub fn to_units(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl<'de> Deserialize<'de> for Cents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Amount {
            Int(i64),
            Float(f64),
        }

        // Float-to-int `as` saturates, so out-of-range amounts clamp instead of failing.
        Ok(match Amount::deserialize(deserializer)? {
            Amount::Int(n) => Self(n),
            Amount::Float(v) => Self(v.round() as i64),
        })
    }
}
