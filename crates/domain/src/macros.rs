//! Macro for giving wire enums a string form
//!
//! Query parameters (`deleteAs=mods`, `sort=hot`) and JSON tags share the
//! same lowercase names. This macro keeps the `as_str`, `Display` and
//! `FromStr` implementations in one place so they cannot drift apart.
//!
//! # Example
//!
//! ```rust
//! use discuit_domain::impl_wire_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Feed {
//!     Home,
//!     All,
//! }
//!
//! impl_wire_str_conversions!(Feed {
//!     Home => "home",
//!     All => "all",
//! });
//!
//! assert_eq!(Feed::Home.as_str(), "home");
//! assert_eq!("ALL".parse::<Feed>(), Ok(Feed::All));
//! ```

/// Implements `as_str`, `Display` and `FromStr` for wire enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire names
///
/// Parsing is case-insensitive; output is always the mapped string.
#[macro_export]
macro_rules! impl_wire_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::core::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(
                s: &str,
            ) -> ::core::result::Result<Self, <Self as ::core::str::FromStr>::Err> {
                match s.to_lowercase().as_str() {
                    $($str => ::core::result::Result::Ok(Self::$variant),)+
                    _ => ::core::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        ::core::stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestSort {
        Latest,
        Hot,
        Activity,
    }

    impl_wire_str_conversions!(TestSort {
        Latest => "latest",
        Hot => "hot",
        Activity => "activity",
    });

    #[test]
    fn test_as_str_matches_display() {
        for sort in [TestSort::Latest, TestSort::Hot, TestSort::Activity] {
            assert_eq!(sort.as_str(), sort.to_string());
        }
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(TestSort::from_str("latest").unwrap(), TestSort::Latest);
        assert_eq!(TestSort::from_str("HOT").unwrap(), TestSort::Hot);
        assert_eq!(TestSort::from_str("AcTiViTy").unwrap(), TestSort::Activity);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestSort::from_str("oldest");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestSort: oldest"));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(TestSort::from_str("").is_err());
    }

    mod with_result_alias {
        use std::str::FromStr;

        #[allow(unused_imports)]
        use crate::errors::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Shade {
            Light,
            Dark,
        }

        crate::impl_wire_str_conversions!(Shade {
            Light => "light",
            Dark => "dark",
        });

        #[test]
        fn test_expands_beside_single_param_result_alias() {
            assert_eq!(Shade::from_str("DARK").unwrap(), Shade::Dark);
            assert_eq!(Shade::Light.to_string(), "light");
            assert!(Shade::from_str("grey").is_err());
        }
    }
}
