//! typed coercion of deferred references
//!
//! [coerce] maps a reference and a declared [Shape] to the matching [Token] constructor. [AttributeGetters] offers
//! one getter per shape on every [InterpolatingParent].
use crate::addressable::InterpolatingParent;
use crate::reference::{AttributePath, Reference};
use crate::token::{Shape, Token};

pub fn coerce(reference: impl Into<Reference>, shape: Shape) -> Token {
    match shape {
        Shape::String => Token::as_string(reference),
        Shape::Number => Token::as_number(reference),
        Shape::Boolean => Token::as_boolean(reference),
        Shape::List => Token::as_list(reference),
        Shape::NumberList => Token::as_number_list(reference),
        Shape::StringMap => Token::as_string_map(reference),
        Shape::NumberMap => Token::as_number_map(reference),
        Shape::BooleanMap => Token::as_boolean_map(reference),
        Shape::AnyMap => Token::as_any_map(reference),
        Shape::Any => Token::as_any(reference),
    }
}

/// Typed getters, implemented for every [InterpolatingParent]
pub trait AttributeGetters: InterpolatingParent {
    fn get_attribute(&self, path: impl Into<AttributePath>, shape: Shape) -> Token {
        coerce(self.interpolation_for_attribute(path.into()), shape)
    }

    fn get_string_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::String)
    }

    fn get_number_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::Number)
    }

    fn get_boolean_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::Boolean)
    }

    fn get_list_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::List)
    }

    fn get_number_list_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::NumberList)
    }

    fn get_string_map_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::StringMap)
    }

    fn get_number_map_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::NumberMap)
    }

    fn get_boolean_map_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::BooleanMap)
    }

    fn get_any_map_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::AnyMap)
    }

    fn get_any_attribute(&self, path: impl Into<AttributePath>) -> Token {
        self.get_attribute(path, Shape::Any)
    }
}

impl<T: InterpolatingParent + ?Sized> AttributeGetters for T {}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn number_map_round_trip() {
        let original = Reference::parse("aws_instance.web.sizes").unwrap();

        let token = Token::as_number_map(original.clone());
        let coerced = coerce(token.clone(), Shape::NumberMap);

        assert_eq!(coerced, token);
        assert_eq!(coerced.reference(), &original);
    }

    #[test]
    fn dispatch_keeps_shape() {
        let reference = Reference::parse("var.anything").unwrap();
        for shape in [
            Shape::String,
            Shape::Number,
            Shape::Boolean,
            Shape::List,
            Shape::NumberList,
            Shape::StringMap,
            Shape::NumberMap,
            Shape::BooleanMap,
            Shape::AnyMap,
            Shape::Any,
        ] {
            let token = coerce(&reference, shape);
            assert_eq!(token.shape(), shape);
            assert_eq!(token.reference(), &reference);
        }
    }
}
