//! the small trait-object workarounds the rest of the crate leans on:
//! - getting `&dyn Any` (and with it the real `TypeId`) out of a `dyn Family`
//! - getting the actual type name of the value behind a trait object
//! - pinning down the *static* type of an expression in assertions

pub mod dyn_downcast;
pub mod dyn_typename;

// both are blanket-implemented for any T, so bounds on them never need
// spelling out by users
pub use dyn_downcast::AsAny;
pub use dyn_typename::TypeNamed;

use std::any::{Any, TypeId};

/// `TypeId` of the *static* type of `_value`, as inferred at the call
/// site.
///
/// the complement of `value.as_any().type_id()`: that one follows the
/// vtable to the dynamic type, this one freezes whatever the compiler
/// thinks the expression is. tests use the pair to pin both sides of a
/// clone:
///
/// ```rust
/// use std::any::TypeId;
/// use twinbox::util::static_type_of;
///
/// let boxed: Box<u32> = Box::new(1);
/// assert_eq!(static_type_of(&boxed), TypeId::of::<Box<u32>>());
/// ```
#[must_use]
pub fn static_type_of<T: Any>(_value: &T) -> TypeId {
    TypeId::of::<T>()
}
