//! value representation
//!
//! Resource configuration is made of the following data types
//! - boolean (true/false)
//! - integer (signed, currently: i64)
//! - decimal (currently: f64)
//! - string (utf-8), which may embed encoded tokens such as `"web-${var.suffix}"`
//! - array ("list" of values)
//! - object (order-preserving "map"/"dictionary", where the key is of type string)
//! - token (a deferred value, see [Token])
//! - list item (a deferred reference to one element of a complex list)
//!
//! Additionally:
//! - there is no `null`/`None` value, unset attributes are omitted
//! - tokens and list items are serialized in their encoded form `"${...}"`
//!
use crate::reference::Reference;
use crate::token::Token;
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serializer,
};

/// All possible value types
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
    Array(Vec<Value>),
    Object(indexmap::IndexMap<String, Value>),
    Token(Token),
    /// Reference to an element of a complex list, see [crate::complex::ComplexListItem]
    ListItem(Token),
}

impl Value {
    pub fn is_list_item(&self) -> bool {
        matches!(self, Value::ListItem(_))
    }

    /// Whether this value or anything nested in it is deferred
    pub fn is_deferred(&self) -> bool {
        !self.references().is_empty()
    }

    /// Every deferred reference in this value, depth first
    ///
    /// Includes references embedded in strings.
    pub fn references(&self) -> Vec<Reference> {
        let mut references = vec![];
        self.collect_references(&mut references);
        references
    }

    fn collect_references(&self, references: &mut Vec<Reference>) {
        match self {
            Value::Boolean(_) | Value::Integer(_) | Value::Decimal(_) => {}
            Value::String(value) => references.extend(Token::find_all(value)),
            Value::Array(values) => values
                .iter()
                .for_each(|value| value.collect_references(references)),
            Value::Object(values) => values
                .values()
                .for_each(|value| value.collect_references(references)),
            Value::Token(token) | Value::ListItem(token) => {
                references.push(token.reference().clone())
            }
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<Token> for Value {
    fn from(value: Token) -> Self {
        Self::Token(value)
    }
}

impl From<&Token> for Value {
    fn from(value: &Token) -> Self {
        Self::Token(value.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<K: ToString, V: Into<Value>> From<indexmap::IndexMap<K, V>> for Value {
    fn from(value: indexmap::IndexMap<K, V>) -> Self {
        Value::Object(
            value
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}

impl<K: ToString, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        )
    }
}

impl serde::ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Boolean(value) => serializer.serialize_bool(*value),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Decimal(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::Array(value) => {
                let mut ser = serializer.serialize_seq(Some(value.len()))?;
                for element in value {
                    ser.serialize_element(element)?;
                }
                ser.end()
            }
            Value::Object(value) => {
                let mut ser = serializer.serialize_map(Some(value.len()))?;
                for (element_key, element_value) in value {
                    ser.serialize_entry(element_key, element_value)?;
                }
                ser.end()
            }
            Value::Token(token) | Value::ListItem(token) => {
                serializer.collect_str(token)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(text: &str) -> Token {
        Token::as_string(Reference::parse(text).unwrap())
    }

    #[test]
    fn tokens_serialize_encoded() {
        let value: Value = [
            ("subnet_id", Value::from(token("aws_subnet.main.id"))),
            ("name", Value::from("web")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"subnet_id":"${aws_subnet.main.id}","name":"web"}"#
        );
    }

    #[test]
    fn references_include_embedded_tokens() {
        let value = Value::Array(vec![
            Value::from("plain"),
            Value::from(format!("web-{}", token("var.suffix"))),
            Value::ListItem(token("aws_instance.web.disk.0")),
        ]);

        let references: Vec<_> = value.references().iter().map(ToString::to_string).collect();
        assert_eq!(references, vec!["var.suffix", "aws_instance.web.disk.0"]);
        assert!(value.is_deferred());
        assert!(!Value::from(42i64).is_deferred());
    }
}
