//! family registration macros. see [`family!`] and [`members!`].
//!
//! [`family!`]: crate::family!
//! [`members!`]: crate::members!

/// registers a trait as the root of a clone family.
///
/// # Args
/// (
///     root: the root trait. it must list [`Cloneable`] as a supertrait
/// )
///
/// generates two impls:
///
/// - the root's own [`Member`] record (`dyn Root` counts as a member of
///   its own family, so [`clone_strict`] takes root handles too)
/// - `Clone for Box<dyn Root>`, delegating to [`clone`] - which is what
///   lets `#[derive(Clone)]` containers hold boxed family members
///
/// ```rust
/// use twinbox::Cloneable;
///
/// pub trait Figure: Cloneable {
///     fn area(&self) -> f64;
/// }
/// twinbox::family!(Figure);
/// ```
///
/// [`Cloneable`]: crate::Cloneable
/// [`Member`]: crate::Member
/// [`clone`]: crate::clone
/// [`clone_strict`]: crate::clone_strict
#[macro_export]
macro_rules! family {
    ($root:path) => {
        impl $crate::Member for dyn $root {
            type Root = dyn $root;
        }

        impl ::core::clone::Clone for ::std::boxed::Box<dyn $root> {
            fn clone(&self) -> Self {
                $crate::clone(&**self)
            }
        }
    };
}

/// records concrete types as members of a clone family.
///
/// # Args
/// (
///     root: the family root trait, as previously passed to [`family!`]
///     members: comma-separated concrete types implementing that root
/// )
///
/// each member gets a [`Member`] record pointing back at `dyn Root`, plus
/// a compile-time check that it really implements the root it claims (and
/// is `Clone`) - declaring yourself into somebody else's family is a type
/// error, not a latent bug.
///
/// ```rust
/// use twinbox::Cloneable;
///
/// pub trait Figure: Cloneable {
///     fn area(&self) -> f64;
/// }
/// twinbox::family!(Figure);
///
/// #[derive(Debug, Clone)]
/// struct Square {
///     side: f64,
/// }
///
/// impl Figure for Square {
///     fn area(&self) -> f64 {
///         self.side * self.side
///     }
/// }
///
/// #[derive(Debug, Clone)]
/// struct Circle {
///     radius: f64,
/// }
///
/// impl Figure for Circle {
///     fn area(&self) -> f64 {
///         std::f64::consts::PI * self.radius * self.radius
///     }
/// }
///
/// twinbox::members!(Figure: Square, Circle);
/// ```
///
/// [`family!`]: crate::family!
/// [`Member`]: crate::Member
#[macro_export]
macro_rules! members {
    ($root:path: $($member:ty),+ $(,)?) => {
        $(
            impl $crate::Member for $member {
                type Root = dyn $root;
            }

            // a member must implement the root it declares, and be Clone
            const _: fn(&$member) -> ::std::boxed::Box<dyn $root> =
                |it| ::std::boxed::Box::new(::core::clone::Clone::clone(it));
        )+
    };
}
