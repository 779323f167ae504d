//! Macros for declaring lifecycle enumerations.

/// Declare a fieldless status enum with fixed wire names.
///
/// Generates the enum (with serde derives using the wire names), an `ALL`
/// constant in declaration order, an inherent `as_str`, `Display`, a
/// `FromStr` that fails with [`StatusError::InvalidArgument`] for any other
/// name, and the [`Status`](crate::core::Status) implementation.
///
/// [`StatusError::InvalidArgument`]: crate::status::StatusError::InvalidArgument
///
/// # Example
///
/// ```
/// use orderline::status_enum;
/// use orderline::Status;
///
/// status_enum! {
///     pub enum ReturnStatus as "return status" {
///         Requested => "requested",
///         Approved => "approved",
///         Refunded => "refunded",
///     }
///     terminal: [Refunded]
/// }
///
/// let status: ReturnStatus = "approved".parse().unwrap();
/// assert_eq!(status, ReturnStatus::Approved);
/// assert!(ReturnStatus::Refunded.is_terminal());
/// assert!("lost".parse::<ReturnStatus>().is_err());
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }

        $(terminal: [$($terminal:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant
            ),*
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Stable wire name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),*
                }
            }
        }

        impl $crate::core::Status for $name {
            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn is_terminal(&self) -> bool {
                match self {
                    $($(Self::$terminal => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::status::StatusError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)*
                    other => Err($crate::status::StatusError::InvalidArgument {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Status;
    use crate::status::StatusError;

    status_enum! {
        enum TestStatus as "test status" {
            Open => "open",
            InReview => "in_review",
            Closed => "closed",
            Rejected => "rejected",
        }
        terminal: [Closed, Rejected]
    }

    #[test]
    fn status_enum_macro_generates_trait() {
        assert_eq!(TestStatus::InReview.as_str(), "in_review");
        assert!(!TestStatus::Open.is_terminal());
        assert!(TestStatus::Closed.is_terminal());
        assert!(TestStatus::Rejected.is_terminal());
    }

    #[test]
    fn all_keeps_declaration_order() {
        assert_eq!(
            TestStatus::ALL,
            &[
                TestStatus::Open,
                TestStatus::InReview,
                TestStatus::Closed,
                TestStatus::Rejected
            ]
        );
    }

    #[test]
    fn from_str_accepts_wire_names_only() {
        assert_eq!("in_review".parse::<TestStatus>(), Ok(TestStatus::InReview));

        let err = "InReview".parse::<TestStatus>().unwrap_err();
        assert_eq!(
            err,
            StatusError::InvalidArgument {
                kind: "test status",
                value: "InReview".to_string(),
            }
        );
    }

    #[test]
    fn status_enum_works_without_terminal_list() {
        status_enum! {
            enum MinimalStatus as "minimal status" {
                One => "one",
                Two => "two",
            }
        }

        assert!(!MinimalStatus::One.is_terminal());
        assert!(!MinimalStatus::Two.is_terminal());
        assert_eq!(MinimalStatus::Two.to_string(), "two");
    }
}
