//! Fixed-arity heterogeneous value groups.
//!
//! [`Tuple1`] through [`Tuple5`] hold exactly N values, expose them through
//! positional accessors (`t1()` .. `t5()`), and never change after
//! construction. Equality and ordering are not derived; compare elements
//! through the accessors.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::Arity;
//! use fnkit::tuple::Tuple3;
//!
//! let record = Tuple3::of("id", 7, true);
//! assert_eq!(*record.t2(), 7);
//! assert_eq!(record.arity(), 3);
//!
//! let (name, count, flag) = record.into_tuple();
//! assert_eq!((name, count, flag), ("id", 7, true));
//! ```

macro_rules! define_tuple {
    ($arity:literal; $($type:ident $accessor:ident),+) => {
        ::paste::paste! {
            #[doc = "An immutable group of " $arity " value(s)."]
            #[derive(Debug, Clone, Copy)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct [<Tuple $arity>]<$($type),+> {
                $($accessor: $type,)+
            }

            impl<$($type),+> [<Tuple $arity>]<$($type),+> {
                /// Creates the tuple from its elements, in order.
                #[inline]
                #[must_use]
                pub const fn of($($accessor: $type),+) -> Self {
                    Self { $($accessor),+ }
                }

                $(
                    #[doc = "Returns the `" $accessor "` element."]
                    #[inline]
                    #[must_use]
                    pub const fn $accessor(&self) -> &$type {
                        &self.$accessor
                    }
                )+

                /// Converts into a native Rust tuple.
                #[inline]
                #[must_use]
                pub fn into_tuple(self) -> ($($type,)+) {
                    ($(self.$accessor,)+)
                }
            }

            impl<$($type),+> From<($($type,)+)> for [<Tuple $arity>]<$($type),+> {
                fn from(($($accessor,)+): ($($type,)+)) -> Self {
                    Self::of($($accessor),+)
                }
            }

            impl<$($type),+> $crate::Arity for [<Tuple $arity>]<$($type),+> {
                const ARITY: usize = $arity;
            }
        }
    };
}

define_tuple!(1; T1 t1);
define_tuple!(2; T1 t1, T2 t2);
define_tuple!(3; T1 t1, T2 t2, T3 t3);
define_tuple!(4; T1 t1, T2 t2, T3 t3, T4 t4);
define_tuple!(5; T1 t1, T2 t2, T3 t3, T4 t4, T5 t5);
