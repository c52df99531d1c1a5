use std::any::Any;

/// upcast to [`Any`] from behind any trait object.
///
/// implemented for every `'static` type, so a `dyn Family` carries it in
/// its vtable (through the [`Cloneable`] supertrait) and hands out the
/// `&dyn Any` - and therefore the `TypeId` - of the *concrete* value it
/// wraps, not of the trait object.
///
/// [`Cloneable`]: crate::Cloneable
pub trait AsAny: 'static {
    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
