use crate::addressable::InterpolatingParent;
use crate::coerce::AttributeGetters;
use crate::reference::AttributePath;
use crate::token::{Shape, Token};

/// `attr["key"]`, the key is written as a quoted HCL string and escaped accordingly
fn lookup(parent: &dyn InterpolatingParent, attribute: &str, key: &str, shape: Shape) -> Token {
    let path = AttributePath::from(attribute).index_expr(hcl::Expression::String(key.to_string()));
    parent.get_attribute(path, shape)
}

macro_rules! map_lookup {
    ($(#[$meta:meta])* $name:ident => $shape:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<'a> {
            parent: &'a dyn InterpolatingParent,
            attribute: String,
        }

        impl<'a> $name<'a> {
            pub fn new(parent: &'a dyn InterpolatingParent, attribute: impl Into<String>) -> Self {
                Self {
                    parent,
                    attribute: attribute.into(),
                }
            }

            pub fn lookup(&self, key: &str) -> Token {
                lookup(self.parent, &self.attribute, key, $shape)
            }
        }
    };
}

map_lookup!(
    /// Map of strings
    StringMap => Shape::String
);
map_lookup!(
    /// Map of numbers
    NumberMap => Shape::Number
);
map_lookup!(
    /// Map of booleans
    BooleanMap => Shape::Boolean
);
map_lookup!(
    /// Map with values of any type
    AnyMap => Shape::Any
);
