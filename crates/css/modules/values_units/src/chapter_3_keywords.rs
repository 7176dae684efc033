//! CSS Values & Units Level 3 — §3.1 Pre-defined Keywords
//! Spec: <https://www.w3.org/TR/css-values-3/#keywords>
//!
//! Keyword-valued properties are modelled as closed unit-variant enums, each
//! variant backed by exactly one canonical lowercase string. Declare them with
//! [`keyword_enum!`](crate::keyword_enum).

use core::error::Error;
use core::fmt;
use log::debug;

/// A closed catalog of CSS keywords backed by canonical strings.
pub trait Keyword: Copy + Eq + fmt::Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Name of the value space, used in diagnostics (e.g. `vertical-align`).
    const PROPERTY: &'static str;

    /// Canonical lowercase serialization of this keyword.
    fn as_str(self) -> &'static str;

    /// Look up a member by its exact canonical string.
    ///
    /// # Errors
    /// Returns [`InvalidKeyword`] when `text` is not one of the canonical strings.
    /// Matching is case-sensitive: `Top` is rejected where `top` is accepted.
    fn from_keyword(text: &str) -> Result<Self, InvalidKeyword> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str() == text)
            .ok_or_else(|| reject::<Self>(text))
    }

    /// Look up a member the way CSS matches identifiers (ASCII case-insensitive).
    ///
    /// # Errors
    /// Returns [`InvalidKeyword`] when `text` matches no member.
    fn from_ident(text: &str) -> Result<Self, InvalidKeyword> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str().eq_ignore_ascii_case(text))
            .ok_or_else(|| reject::<Self>(text))
    }
}

fn reject<Catalog: Keyword>(text: &str) -> InvalidKeyword {
    debug!(target: "css_values_units", "rejected keyword `{text}` for {}", Catalog::PROPERTY);
    InvalidKeyword::new(Catalog::PROPERTY, text)
}

/// A string that is not a member of a keyword catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidKeyword {
    property: &'static str,
    value: String,
}

impl InvalidKeyword {
    /// Record `value` as rejected by the catalog named `property`.
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }

    /// The catalog that rejected the value.
    pub const fn property(&self) -> &'static str {
        self.property
    }

    /// The rejected input, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for InvalidKeyword {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "`{}` is not a valid {} keyword",
            self.value, self.property
        )
    }
}

impl Error for InvalidKeyword {}

#[doc(hidden)]
pub mod __private {
    pub use core::fmt;
    pub use core::str::FromStr;
    #[cfg(feature = "serde")]
    pub use serde;
}

/// Declare a keyword enum from a `Member => "canonical"` table.
///
/// The generated type is `Copy`, compares by member, implements
/// [`Keyword`](crate::Keyword), `Display` (canonical string, verbatim),
/// `FromStr`/`TryFrom<&str>` (exact match) and `AsRef<str>`. With the `serde`
/// feature it (de)serializes as its canonical string.
///
/// ```
/// css_values_units::keyword_enum! {
///     /// `text-transform` keywords.
///     pub enum TextTransform: "text-transform" {
///         Capitalize => "capitalize",
///         Uppercase => "uppercase",
///     }
/// }
///
/// assert_eq!("uppercase".parse::<TextTransform>(), Ok(TextTransform::Uppercase));
/// assert_eq!(TextTransform::Capitalize.to_string(), "capitalize");
/// ```
#[macro_export]
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $property:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Keyword for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const PROPERTY: &'static str = $property;

            #[inline]
            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl $crate::__private::fmt::Display for $name {
            fn fmt(
                &self,
                formatter: &mut $crate::__private::fmt::Formatter<'_>,
            ) -> $crate::__private::fmt::Result {
                formatter.write_str(<Self as $crate::Keyword>::as_str(*self))
            }
        }

        impl $crate::__private::FromStr for $name {
            type Err = $crate::InvalidKeyword;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                <Self as $crate::Keyword>::from_keyword(text)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::InvalidKeyword;

            fn try_from(text: &str) -> Result<Self, Self::Error> {
                <Self as $crate::Keyword>::from_keyword(text)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                <Self as $crate::Keyword>::as_str(*self)
            }
        }

        $crate::__keyword_serde!($name);
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __keyword_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
            where
                Ser: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(<Self as $crate::Keyword>::as_str(*self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
            where
                De: $crate::__private::serde::Deserializer<'de>,
            {
                let text = <String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <Self as $crate::Keyword>::from_keyword(&text)
                    .map_err(<De::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __keyword_serde {
    ($name:ident) => {};
}
