/// the one recoverable failure in the crate: [`try_clone_as`] was asked
/// for a concrete type the source does not actually contain.
///
/// both names come from [`std::any::type_name`], so they are for eyeballs
/// and logs, not for matching on.
///
/// [`try_clone_as`]: crate::try_clone_as
#[derive(Debug, thiserror::Error)]
#[error("cloned a {found}, but the caller asked for a {expected}")]
pub struct WrongDynamicType {
    /// the type requested at the call site
    pub expected: &'static str,
    /// the dynamic type the source turned out to hold
    pub found: &'static str,
}
