//! Generator for the `FunctionN` family.
//!
//! Each arity gets a wrapper struct, an `IntoFunctionN` conversion trait and
//! the shared operations (`of`, `try_of`, `apply`, `and_then`,
//! `try_and_then`, `ptr_eq`, `into_fn`). Arity-specific extras live next to
//! the invocations in the parent module.

/// Defines `FunctionN`, `IntoFunctionN` and their common operations.
///
/// Invoked as `define_function!(2; T1 first, T2 second);`.
macro_rules! define_function {
    ($arity:literal; $($type:ident $argument:ident),*) => {
        ::paste::paste! {
            #[doc = "A shared, immutable wrapper around a callable taking " $arity " argument(s)."]
            ///
            /// The wrapped callable is always present once constructed. Cloning
            /// shares the callable; use `ptr_eq` to observe identity.
            pub struct [<Function $arity>]<$($type,)* R> {
                mapper: ::std::rc::Rc<dyn Fn($($type),*) -> R>,
            }

            #[doc = "Conversion into [`Function" $arity "`]."]
            ///
            /// Implemented for every closure or fn item of matching arity and for
            /// the wrapper itself, which converts into itself unchanged.
            pub trait [<IntoFunction $arity>]<$($type,)* R> {
                #[doc = "Converts `self` into a [`Function" $arity "`]."]
                fn [<into_function $arity>](self) -> [<Function $arity>]<$($type,)* R>;
            }

            impl<Callable, $($type,)* R> [<IntoFunction $arity>]<$($type,)* R> for Callable
            where
                Callable: Fn($($type),*) -> R + 'static,
            {
                #[inline]
                fn [<into_function $arity>](self) -> [<Function $arity>]<$($type,)* R> {
                    [<Function $arity>] {
                        mapper: ::std::rc::Rc::new(self),
                    }
                }
            }

            impl<$($type,)* R> [<IntoFunction $arity>]<$($type,)* R> for [<Function $arity>]<$($type,)* R> {
                #[inline]
                fn [<into_function $arity>](self) -> Self {
                    self
                }
            }

            impl<$($type: 'static,)* R: 'static> [<Function $arity>]<$($type,)* R> {
                /// Wraps a callable, or returns an existing wrapper unchanged.
                #[inline]
                #[must_use]
                pub fn of(callable: impl [<IntoFunction $arity>]<$($type,)* R>) -> Self {
                    callable.[<into_function $arity>]()
                }

                /// Like `of`, but reports an absent callable as an error.
                ///
                /// # Errors
                ///
                /// Returns [`IllegalArgumentError`](crate::IllegalArgumentError)
                /// when `callable` is `None`.
                pub fn try_of<Callable>(
                    callable: Option<Callable>,
                ) -> Result<Self, $crate::IllegalArgumentError>
                where
                    Callable: [<IntoFunction $arity>]<$($type,)* R>,
                {
                    $crate::error::require(callable, "mapper").map(Self::of)
                }

                /// Invokes the wrapped callable.
                #[inline]
                pub fn apply(&self, $($argument: $type),*) -> R {
                    (self.mapper)($($argument),*)
                }

                /// Returns a function that applies `self`, then feeds the result into `after`.
                #[must_use]
                pub fn and_then<V: 'static>(
                    self,
                    after: impl $crate::function::IntoFunction1<R, V>,
                ) -> [<Function $arity>]<$($type,)* V> {
                    let after = after.into_function1();
                    let mapper = self.mapper;
                    [<Function $arity>] {
                        mapper: ::std::rc::Rc::new(move |$($argument: $type),*| {
                            after.apply(mapper($($argument),*))
                        }),
                    }
                }

                /// Like `and_then`, but reports an absent continuation as an error.
                ///
                /// # Errors
                ///
                /// Returns [`IllegalArgumentError`](crate::IllegalArgumentError)
                /// when `after` is `None`.
                pub fn try_and_then<V: 'static, After>(
                    self,
                    after: Option<After>,
                ) -> Result<[<Function $arity>]<$($type,)* V>, $crate::IllegalArgumentError>
                where
                    After: $crate::function::IntoFunction1<R, V>,
                {
                    $crate::error::require(after, "after").map(|after| self.and_then(after))
                }

                /// Unwraps into a plain closure sharing the same callable.
                #[must_use]
                pub fn into_fn(self) -> impl Fn($($type),*) -> R {
                    let mapper = self.mapper;
                    move |$($argument: $type),*| mapper($($argument),*)
                }
            }

            impl<$($type,)* R> [<Function $arity>]<$($type,)* R> {
                /// Returns `true` if both wrappers share the same callable.
                #[inline]
                #[must_use]
                pub fn ptr_eq(&self, other: &Self) -> bool {
                    ::std::rc::Rc::ptr_eq(&self.mapper, &other.mapper)
                }
            }

            impl<$($type,)* R> Clone for [<Function $arity>]<$($type,)* R> {
                #[inline]
                fn clone(&self) -> Self {
                    Self {
                        mapper: ::std::rc::Rc::clone(&self.mapper),
                    }
                }
            }

            impl<$($type,)* R> ::std::fmt::Debug for [<Function $arity>]<$($type,)* R> {
                fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    formatter
                        .debug_struct(stringify!([<Function $arity>]))
                        .field("mapper", &"<function>")
                        .finish()
                }
            }

            impl<$($type,)* R> $crate::Arity for [<Function $arity>]<$($type,)* R> {
                const ARITY: usize = $arity;
            }
        }
    };
}

pub(crate) use define_function;
