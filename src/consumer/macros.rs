//! Generator for the `ConsumerN` family.

/// Defines `ConsumerN`, `IntoConsumerN` and their operations.
///
/// Invoked as `define_consumer!(2; T1 first, T2 second);`.
macro_rules! define_consumer {
    ($arity:literal; $($type:ident $argument:ident),+) => {
        ::paste::paste! {
            #[doc = "A shared wrapper around a side-effecting callable taking " $arity " argument(s) by reference."]
            pub struct [<Consumer $arity>]<$($type),+> {
                action: ::std::rc::Rc<dyn Fn($(&$type),+)>,
            }

            #[doc = "Conversion into [`Consumer" $arity "`]."]
            pub trait [<IntoConsumer $arity>]<$($type),+> {
                #[doc = "Converts `self` into a [`Consumer" $arity "`]."]
                fn [<into_consumer $arity>](self) -> [<Consumer $arity>]<$($type),+>;
            }

            impl<Callable, $($type),+> [<IntoConsumer $arity>]<$($type),+> for Callable
            where
                Callable: Fn($(&$type),+) + 'static,
            {
                #[inline]
                fn [<into_consumer $arity>](self) -> [<Consumer $arity>]<$($type),+> {
                    [<Consumer $arity>] {
                        action: ::std::rc::Rc::new(self),
                    }
                }
            }

            impl<$($type),+> [<IntoConsumer $arity>]<$($type),+> for [<Consumer $arity>]<$($type),+> {
                #[inline]
                fn [<into_consumer $arity>](self) -> Self {
                    self
                }
            }

            impl<$($type: 'static),+> [<Consumer $arity>]<$($type),+> {
                /// Wraps a callable, or returns an existing wrapper unchanged.
                #[inline]
                #[must_use]
                pub fn of(callable: impl [<IntoConsumer $arity>]<$($type),+>) -> Self {
                    callable.[<into_consumer $arity>]()
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
                    Callable: [<IntoConsumer $arity>]<$($type),+>,
                {
                    $crate::error::require(callable, "action").map(Self::of)
                }

                /// Returns a consumer that does nothing.
                #[must_use]
                pub fn noop() -> Self {
                    Self::of(|$(_: &$type),+| {})
                }

                /// Runs the wrapped action.
                #[inline]
                pub fn apply(&self, $($argument: &$type),+) {
                    (self.action)($($argument),+);
                }

                /// Returns a consumer that runs `self`, then `after`, on the same arguments.
                #[must_use]
                pub fn and_then(self, after: impl [<IntoConsumer $arity>]<$($type),+>) -> Self {
                    let after = after.[<into_consumer $arity>]();
                    let action = self.action;
                    Self {
                        action: ::std::rc::Rc::new(move |$($argument: &$type),+| {
                            action($($argument),+);
                            after.apply($($argument),+);
                        }),
                    }
                }

                /// Like `and_then`, but an absent continuation leaves `self` unchanged.
                ///
                /// Unlike every other combinator in this crate, a missing
                /// argument here is not an error: the returned consumer only
                /// runs `self`.
                #[must_use]
                pub fn and_then_optional<After>(self, after: Option<After>) -> Self
                where
                    After: [<IntoConsumer $arity>]<$($type),+>,
                {
                    match after {
                        Some(after) => self.and_then(after),
                        None => self,
                    }
                }
            }

            impl<$($type),+> [<Consumer $arity>]<$($type),+> {
                /// Returns `true` if both wrappers share the same action.
                #[inline]
                #[must_use]
                pub fn ptr_eq(&self, other: &Self) -> bool {
                    ::std::rc::Rc::ptr_eq(&self.action, &other.action)
                }
            }

            impl<$($type),+> Clone for [<Consumer $arity>]<$($type),+> {
                #[inline]
                fn clone(&self) -> Self {
                    Self {
                        action: ::std::rc::Rc::clone(&self.action),
                    }
                }
            }

            impl<$($type),+> ::std::fmt::Debug for [<Consumer $arity>]<$($type),+> {
                fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    formatter
                        .debug_struct(stringify!([<Consumer $arity>]))
                        .field("action", &"<function>")
                        .finish()
                }
            }

            impl<$($type),+> $crate::Arity for [<Consumer $arity>]<$($type),+> {
                const ARITY: usize = $arity;
            }
        }
    };
}

pub(crate) use define_consumer;
