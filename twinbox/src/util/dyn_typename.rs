use std::any::{type_name, Any};

/// name of the dynamic type behind a reference, for diagnostics.
///
/// `type_name_of_val` on a `&dyn Trait` reports the trait object type
/// itself; going through the vtable reports the concrete type instead,
/// which is the one worth logging.
///
/// output is best-effort (rustc makes no promises about the exact shape of
/// type names) - put it in logs and error messages, never match on it.
pub trait TypeNamed {
    fn type_name(&self) -> &'static str;
}

impl<T: Any + 'static> TypeNamed for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}
