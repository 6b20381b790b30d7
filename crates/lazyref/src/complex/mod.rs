//! navigation into nested and repeated attributes
//!
//! | type                 | reference for property `p`                           |
//! |----------------------|------------------------------------------------------|
//! | [ComplexObject]      | `attr[0].p`                                          |
//! | [ComplexListItem]    | `attr.<index>.p`, or `tolist(attr)[<index>].p` for sets |
//! | [ComplexComputedList]| same as [ComplexListItem]                            |
//! | [StringMap] & co     | `attr["key"]` via `lookup`                           |
//!
//! Every type only knows its immediate parent and asks it for the extended path, nesting composes without any of
//! them knowing the full path.
mod computed_list;
mod list;
mod map;
mod object;

#[allow(deprecated)]
pub use computed_list::ComplexComputedList;
pub use list::{ComplexList, ComplexListItem};
pub use map::{AnyMap, BooleanMap, NumberMap, StringMap};
pub use object::ComplexObject;
