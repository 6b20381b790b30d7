//! deferred values
//!
//! A [Token] pairs a [Reference] with the [Shape] calling code expects the value to have once terraform resolved it.
//! Tokens never evaluate anything. In a configuration document they are written as `${<expression>}` which is
//! terraform's own interpolation syntax, so the encoded form can be located and decoded again without any shared
//! registry.
use crate::reference::Reference;
use hcl::template::{Element, Template};
use hcl::TemplateExpr;
use std::fmt::{Display, Formatter};

/// Declared shape of a deferred value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    String,
    Number,
    Boolean,
    List,
    NumberList,
    StringMap,
    NumberMap,
    BooleanMap,
    AnyMap,
    /// Untyped, used when the schema type is open ended
    Any,
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::String => f.write_str("string"),
            Shape::Number => f.write_str("number"),
            Shape::Boolean => f.write_str("bool"),
            Shape::List => f.write_str("list(string)"),
            Shape::NumberList => f.write_str("list(number)"),
            Shape::StringMap => f.write_str("map(string)"),
            Shape::NumberMap => f.write_str("map(number)"),
            Shape::BooleanMap => f.write_str("map(bool)"),
            Shape::AnyMap => f.write_str("map(any)"),
            Shape::Any => f.write_str("any"),
        }
    }
}

/// A value only known once terraform evaluates the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    reference: Reference,
    shape: Shape,
}

impl Token {
    /// Wraps `reference` with `shape`
    ///
    /// Passing a [Token] re-tags its reference, it is never wrapped twice.
    pub fn new(reference: impl Into<Reference>, shape: Shape) -> Self {
        Self {
            reference: reference.into(),
            shape,
        }
    }

    pub fn as_string(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::String)
    }

    pub fn as_number(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::Number)
    }

    pub fn as_boolean(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::Boolean)
    }

    pub fn as_list(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::List)
    }

    pub fn as_number_list(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::NumberList)
    }

    pub fn as_string_map(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::StringMap)
    }

    pub fn as_number_map(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::NumberMap)
    }

    pub fn as_boolean_map(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::BooleanMap)
    }

    pub fn as_any_map(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::AnyMap)
    }

    pub fn as_any(value: impl Into<Reference>) -> Self {
        Self::new(value, Shape::Any)
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn into_reference(self) -> Reference {
        self.reference
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Reference carried by an encoded token
    ///
    /// Returns `None` unless `text` consists of exactly one interpolation.
    pub fn decode(text: &str) -> Option<Reference> {
        let template = parse_template(text)?;
        match template.elements() {
            [Element::Interpolation(interpolation)] => {
                Some(Reference::new(interpolation.expr.clone()))
            }
            _ => None,
        }
    }

    /// Whether `text` holds at least one encoded token, possibly among literal text
    pub fn is_encoded(text: &str) -> bool {
        !Self::find_all(text).is_empty()
    }

    /// All references interpolated into `text`, in order of appearance
    pub fn find_all(text: &str) -> Vec<Reference> {
        // cheap pre-check, most configuration strings are plain literals
        if !text.contains("${") {
            return vec![];
        }

        let Some(template) = parse_template(text) else {
            return vec![];
        };

        template
            .elements()
            .iter()
            .filter_map(|element| match element {
                Element::Interpolation(interpolation) => {
                    Some(Reference::new(interpolation.expr.clone()))
                }
                _ => None,
            })
            .collect()
    }
}

fn parse_template(text: &str) -> Option<Template> {
    match Template::from_expr(&TemplateExpr::QuotedString(text.to_string())) {
        Ok(template) => Some(template),
        Err(error) => {
            tracing::trace!(%error, text, "not a template");
            None
        }
    }
}

/// The encoded form, `${<expression>}`
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${{{}}}", self.reference)
    }
}
