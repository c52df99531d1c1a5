//! twinbox - type-preserving deep copies for polymorphic trait objects.
//!
//! the pitch: you have a family of types behind a trait, and you want to
//! copy them through whatever handle you happen to hold. `&Square` should
//! give back a `Box<Square>`, `&dyn Figure` should give back a
//! `Box<dyn Figure>` - and in both cases the value inside must stay
//! whatever it dynamically was. no turbofish at the call site, no manual
//! downcasts, no accidentally flattening a value down to its root.
//!
//! opting a family in takes three lines:
//!
//! ```rust
//! use twinbox::{clone, Cloneable};
//!
//! pub trait Figure: Cloneable {
//!     fn area(&self) -> f64;
//! }
//! twinbox::family!(Figure);
//!
//! #[derive(Debug, Clone)]
//! struct Square {
//!     side: f64,
//! }
//!
//! impl Figure for Square {
//!     fn area(&self) -> f64 {
//!         self.side * self.side
//!     }
//! }
//! twinbox::members!(Figure: Square);
//!
//! let square = Square { side: 4.0 };
//!
//! // through the concrete handle: statically a Box<Square>
//! let twin = clone(&square);
//! assert_eq!(twin.area(), 16.0);
//!
//! // through the family root: statically a Box<dyn Figure>,
//! // dynamically still a Square
//! let figure: &dyn Figure = &square;
//! let twin = clone(figure);
//! assert_eq!(twin.area(), 16.0);
//! ```
//!
//! the registration also gives you `Clone for Box<dyn Figure>`, so boxed
//! family members slot straight into `#[derive(Clone)]` containers.
//!
//! everything is synchronous and stateless: one call, one allocation, the
//! source untouched.

pub mod error;
pub mod family;
mod macros;
pub mod object;
pub mod prelude;
pub mod util;

#[macro_use]
extern crate log;

pub use error::WrongDynamicType;
pub use family::{Cloneable, Member};
pub use object::{clone, clone_as_unchecked, clone_handle, clone_strict, try_clone_as};
