//! Macros for ergonomic definition construction.

/// Generate a state enum and its `State` implementation.
///
/// Each variant's name doubles as its state name.
///
/// # Example
///
/// ```
/// use pushdown::core::State;
/// use pushdown::state_enum;
///
/// state_enum! {
///     pub enum Recognizer {
///         Reading,
///         Matching,
///         Accept,
///     }
/// }
///
/// assert_eq!(Recognizer::Matching.name(), "Matching");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
