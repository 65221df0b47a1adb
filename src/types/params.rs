//! Enumerated endpoint parameters.
//!
//! Each parameter is a typed enum, but endpoints also accept the raw wire value (`"best_deal"`,
//! `0`, ...) through [`IntoParam`]. Raw values outside the accepted set are rejected with
//! [`Error::InvalidParameter`] before any request is sent.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Conversion of a typed or raw value into a validated endpoint parameter.
pub trait IntoParam<T> {
    fn into_param(self) -> Result<T, Error>;
}

macro_rules! string_param {
    (
        $(#[$meta:meta])*
        $name:ident as $param:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(Error::invalid_parameter($param, other)),
                }
            }
        }

        impl IntoParam<$name> for $name {
            fn into_param(self) -> Result<$name, Error> {
                Ok(self)
            }
        }

        impl IntoParam<$name> for &str {
            fn into_param(self) -> Result<$name, Error> {
                self.parse()
            }
        }

        impl IntoParam<$name> for String {
            fn into_param(self) -> Result<$name, Error> {
                self.parse()
            }
        }
    };
}

string_param! {
    /// Sort order for `GET /listings`.
    SortBy as "sort_by" {
        LowestPrice => "lowest_price",
        HighestPrice => "highest_price",
        MostRecent => "most_recent",
        ExpiresSoon => "expires_soon",
        LowestFloat => "lowest_float",
        HighestFloat => "highest_float",
        BestDeal => "best_deal",
        HighestDiscount => "highest_discount",
        FloatRank => "float_rank",
        NumBids => "num_bids",
    }
}

string_param! {
    /// Sale mechanism of a listing.
    ListingType as "type" {
        BuyNow => "buy_now",
        Auction => "auction",
    }
}

string_param! {
    /// Side of a trade from the authenticated account's point of view.
    TradeRole as "role" {
        Seller => "seller",
        Buyer => "buyer",
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::BestDeal
    }
}

impl Default for ListingType {
    fn default() -> Self {
        Self::BuyNow
    }
}

impl Default for TradeRole {
    fn default() -> Self {
        Self::Seller
    }
}

/// Listing category filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// No category filter.
    #[default]
    Any,
    Normal,
    StatTrak,
    Souvenir,
}

impl Category {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Any => 0,
            Self::Normal => 1,
            Self::StatTrak => 2,
            Self::Souvenir => 3,
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Any),
            1 => Ok(Self::Normal),
            2 => Ok(Self::StatTrak),
            3 => Ok(Self::Souvenir),
            other => Err(Error::invalid_parameter("category", other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl IntoParam<Category> for Category {
    fn into_param(self) -> Result<Category, Error> {
        Ok(self)
    }
}

impl IntoParam<Category> for u8 {
    fn into_param(self) -> Result<Category, Error> {
        Category::try_from(self)
    }
}
