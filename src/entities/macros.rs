//! Macros for reducing boilerplate when defining entities
//!
//! Dashboard enums are label-backed: each variant has one canonical display
//! string that is also its serialized form and its filter-dropdown value
//! (e.g. `JobStatus::InProgress` ⇄ `"In Progress"`).

/// Define an enum whose variants map 1:1 to canonical label strings.
///
/// Generates serde renames, `Display`, `FromStr`, a `label()` accessor and
/// an `ALL` constant listing every variant in declaration order (the order
/// dropdowns present them).
///
/// # Example
/// ```rust,ignore
/// label_enum!(
///     /// Urgency tier set by the homeowner when posting a job.
///     UrgencyLevel {
///         Standard => "Standard",
///         SameDay => "Same-Day",
///         Emergency => "Emergency",
///     }
/// );
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in dropdown presentation order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The canonical display label
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(format!(
                        concat!("unknown ", stringify!($name), " label: '{}'"),
                        other
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    label_enum!(
        /// Test enum with a multi-word label
        Sample {
            One => "One",
            TwoWords => "Two Words",
        }
    );

    #[test]
    fn test_label_and_display() {
        assert_eq!(Sample::TwoWords.label(), "Two Words");
        assert_eq!(Sample::One.to_string(), "One");
    }

    #[test]
    fn test_from_str_roundtrip() {
        assert_eq!("Two Words".parse::<Sample>(), Ok(Sample::TwoWords));
        assert!("two words".parse::<Sample>().is_err());
    }

    #[test]
    fn test_all_in_declaration_order() {
        assert_eq!(Sample::ALL, &[Sample::One, Sample::TwoWords]);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Sample::TwoWords).unwrap();
        assert_eq!(json, "\"Two Words\"");
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sample::TwoWords);
    }
}
