//! re-exports of `twinbox`'s traits. the utility ones come in as `_`, so
//! their methods (`as_any`, `type_name`) work without the names cluttering
//! your namespace.

pub use crate::family::{Cloneable, Member};
pub use crate::util::dyn_downcast::AsAny as _;
pub use crate::util::dyn_typename::TypeNamed as _;
