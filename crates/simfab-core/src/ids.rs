//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The value `0` is the reserved
//! *undefined* sentinel throughout the framework: a model type or model
//! instance with a zero ID has not been assigned one yet.  Legitimate IDs are
//! always non-zero.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID"; this is also the `Default`.
            pub const UNDEFINED: $name = $name(0);

            /// `true` for any non-sentinel ID.
            #[inline(always)]
            pub fn is_defined(self) -> bool {
                self.0 != 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Identifier for a *model type* — the class of a model, analogous to a
    /// Rust type.  Each concrete model type declares a distinct non-zero
    /// constant.
    pub struct ModelTypeId(u64);
}

typed_id! {
    /// Identifier for a *model instance* (entity) — one simulated actor.
    /// Assigned during initialisation and stable across re-initialisations
    /// of the same logical instance.
    pub struct ModelInstanceId(u64);
}
