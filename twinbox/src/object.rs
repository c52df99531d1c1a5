//! the generic clone dispatcher.
//!
//! one operation, a few entry points. [`clone`] takes a handle of any
//! static type `T` - a concrete member or a `dyn Root` - fires the family's
//! copy hook through dynamic dispatch, and re-wraps the fresh allocation so
//! the caller gets a `Box<T>` back: the *static* type of the input handle,
//! never the family root. the *dynamic* type rides along untouched either
//! way.
//!
//! the rest is variations: [`clone_strict`] bolts on the compile-time
//! family-membership check, [`clone_handle`] clones through owning handles
//! (`Box`, `Rc`, `Arc`), and [`try_clone_as`] / [`clone_as_unchecked`]
//! clone while downcasting to a concrete member.

use std::any::{type_name, Any};
use std::ops::Deref;

use crate::error::WrongDynamicType;
use crate::family::{token, Cloneable, Member};

/// clone through any handle, keeping the handle's static type.
///
/// `T` is whatever the caller holds, not whatever the value is:
///
/// - `clone(&square)` is a `Box<Square>`
/// - `clone(figure)` for a `figure: &dyn Figure` is a `Box<dyn Figure>`
///   (whose contents are still, dynamically, a `Square`)
/// - `&mut` handles and references to temporaries coerce in as well
///
/// the copy is deep and independent: exactly one new allocation, the
/// source never mutated, and mutating either side afterwards cannot be
/// observed through the other.
///
/// any `T: Clone + 'static` is accepted here, family member or not; see
/// [`clone_strict`] for the picky version.
///
/// # Panics
///
/// debug builds assert that the copy hook returned the source's dynamic
/// type. the hook is sealed inside this crate, so the assert cannot
/// actually fire; release builds skip it.
#[must_use]
pub fn clone<T: ?Sized + Cloneable>(source: &T) -> Box<T> {
    trace!(
        "cloning a {} through a handle of static type {}",
        source.type_name(),
        type_name::<T>(),
    );

    let copy: Box<dyn Any> = source.raw_copy(token());
    debug_assert_eq!(
        (*copy).type_id(),
        source.as_any().type_id(),
        "copy hook produced the wrong dynamic type",
    );

    // graft the fresh allocation onto the shape of the source handle: the
    // data half of the (possibly fat) pointer comes from the copy, the
    // metadata half - the vtable, when T is a dyn type - from the source.
    // the assert above is what makes reusing the source vtable legal: both
    // pointers lead to the same concrete type.
    let mut grafted = source as *const T;
    let data = Box::into_raw(copy) as *mut ();
    unsafe {
        *(&mut grafted as *mut *const T as *mut *mut ()) = data;
        Box::from_raw(grafted as *mut T)
    }
}

/// [`clone`], restricted to declared family members.
///
/// the same operation with the membership precondition moved into the
/// signature: `T` must have been registered through [`family!`] /
/// [`members!`]. reach for this at API seams where "it happens to be
/// `Clone`" is not enough of a contract - handing it an unrelated type is
/// a type error, not a quiet extra allocation.
///
/// [`family!`]: crate::family!
/// [`members!`]: crate::members!
#[must_use]
pub fn clone_strict<T: ?Sized + Member>(source: &T) -> Box<T> {
    clone(source)
}

/// clone the *pointee* of an owning handle: `Box`, `Rc`, `Arc`, or a plain
/// reference.
///
/// sugar over `clone(&**handle)`, for callers holding their figures in
/// smart pointers. the result is typed by what the handle points at, so a
/// `Box<dyn Figure>` in means a fresh `Box<dyn Figure>` out - never a
/// boxed box.
#[must_use]
pub fn clone_handle<H: Deref>(handle: &H) -> Box<H::Target>
where
    H::Target: Cloneable,
{
    clone(&**handle)
}

/// clone while downcasting the copy to an expected concrete type.
///
/// for when the caller holds a root handle but knows - or wants to find
/// out - which member is behind it. a right guess gives `Box<V>`; a wrong
/// one drops the speculative copy and reports both type names.
///
/// ```rust
/// # use twinbox::{try_clone_as, Cloneable};
/// # pub trait Figure: Cloneable { fn area(&self) -> f64; }
/// # twinbox::family!(Figure);
/// # #[derive(Debug, Clone)]
/// # struct Square { side: f64 }
/// # impl Figure for Square { fn area(&self) -> f64 { self.side * self.side } }
/// # twinbox::members!(Figure: Square);
/// let figure: &dyn Figure = &Square { side: 4.0 };
///
/// let square = try_clone_as::<Square, _>(figure).unwrap();
/// assert_eq!(square.area(), 16.0);
/// ```
///
/// # Errors
///
/// [`WrongDynamicType`] if the dynamic type of `source` is not `V`.
pub fn try_clone_as<V, T>(source: &T) -> Result<Box<V>, WrongDynamicType>
where
    V: Any,
    T: ?Sized + Cloneable,
{
    source.raw_copy(token()).downcast().map_err(|_| {
        debug!(
            "refusing to clone a {} as a {}",
            source.type_name(),
            type_name::<V>(),
        );
        WrongDynamicType {
            expected: type_name::<V>(),
            found: source.type_name(),
        }
    })
}

/// [`try_clone_as`] minus the check.
///
/// # Safety
///
/// the dynamic type of `source` must be exactly `V`. when in doubt, ask
/// `source.as_any().is::<V>()` first - or better, stay on
/// [`try_clone_as`].
#[must_use]
pub unsafe fn clone_as_unchecked<V, T>(source: &T) -> Box<V>
where
    V: Any,
    T: ?Sized + Cloneable,
{
    source.raw_copy(token()).downcast().unwrap_unchecked()
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;
    use std::rc::Rc;

    use super::{clone, clone_handle, clone_strict, try_clone_as};
    use crate::util::{static_type_of, AsAny};
    use crate::Cloneable;

    pub trait Message: Cloneable {
        fn body(&self) -> String;
    }
    crate::family!(Message);

    #[derive(Debug, Clone)]
    struct Ping {
        seq: u32,
    }

    impl Message for Ping {
        fn body(&self) -> String {
            format!("ping {}", self.seq)
        }
    }

    /// zero-sized member, to keep the pointer grafting honest
    #[derive(Debug, Clone)]
    struct Heartbeat;

    impl Message for Heartbeat {
        fn body(&self) -> String {
            "heartbeat".to_owned()
        }
    }

    crate::members!(Message: Ping, Heartbeat);

    #[test]
    fn grafts_the_source_vtable_onto_the_copy() {
        let ping = Ping { seq: 7 };
        let msg: &dyn Message = &ping;

        let twin = clone(msg);

        assert_eq!(static_type_of(&twin), TypeId::of::<Box<dyn Message>>());
        assert!((*twin).as_any().is::<Ping>());
        assert_eq!(twin.body(), "ping 7");
    }

    #[test]
    fn survives_zero_sized_members() {
        let msg: &dyn Message = &Heartbeat;
        let twin = clone(msg);

        assert!((*twin).as_any().is::<Heartbeat>());
        assert_eq!(twin.body(), "heartbeat");
    }

    #[test]
    fn plain_clone_types_ride_along() {
        // the lenient entry point takes anything Clone + 'static,
        // registered family or not
        let twin = clone(&String::from("loose"));
        assert_eq!(*twin, "loose");
    }

    #[test]
    fn unregistered_members_still_dispatch() {
        // implementing the root is enough for the lenient path; members!
        // only gates clone_strict
        #[derive(Debug, Clone)]
        struct Probe;

        impl Message for Probe {
            fn body(&self) -> String {
                "probe".to_owned()
            }
        }

        let msg: &dyn Message = &Probe;
        let twin = clone(msg);
        assert_eq!(twin.body(), "probe");
    }

    #[test]
    fn strict_clone_accepts_members_and_root() {
        let ping = Ping { seq: 3 };

        let twin = clone_strict(&ping);
        assert_eq!(static_type_of(&twin), TypeId::of::<Box<Ping>>());

        let msg: &dyn Message = &ping;
        let twin = clone_strict(msg);
        assert_eq!(static_type_of(&twin), TypeId::of::<Box<dyn Message>>());
    }

    #[test]
    fn wrong_downcast_reports_both_names() {
        let msg: &dyn Message = &Ping { seq: 1 };
        let err = try_clone_as::<Heartbeat, _>(msg).unwrap_err();

        assert!(err.expected.ends_with("Heartbeat"));
        assert!(err.found.ends_with("Ping"));
    }

    #[test]
    fn handles_clone_their_pointee() {
        let handle: Rc<dyn Message> = Rc::new(Ping { seq: 2 });
        let twin = clone_handle(&handle);

        assert_eq!(static_type_of(&twin), TypeId::of::<Box<dyn Message>>());
        assert_eq!(twin.body(), "ping 2");
    }
}
