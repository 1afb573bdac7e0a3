//! Macros for declaring enums the enum guard can validate.

/// Declares a fieldless enum and implements
/// [`IntegralEnum`](crate::validators::IntegralEnum) for it.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied and
/// every variant needs an explicit discriminant.
///
/// # Examples
///
/// ```
/// use fluent_guard::integral_enum;
/// use fluent_guard::validators::IntegralEnum;
///
/// integral_enum! {
///     /// Delivery priority.
///     pub enum Priority {
///         Low = 0,
///         Normal = 1,
///         Urgent = 10,
///     }
/// }
///
/// assert_eq!(Priority::Urgent.discriminant(), 10);
/// assert_eq!(Priority::from_discriminant(1), Some(Priority::Normal));
/// assert_eq!(Priority::from_discriminant(2), None);
/// ```
#[macro_export]
macro_rules! integral_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $crate::validators::IntegralEnum for $name {
            fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            #[allow(clippy::cast_lossless)]
            fn discriminant(self) -> i64 {
                self as i64
            }
        }
    };
}
