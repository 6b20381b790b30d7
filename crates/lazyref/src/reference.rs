//! reference expressions and the paths that extend them
//!
//! A [Reference] is the HCL expression terraform evaluates to obtain a deferred value, for example
//! `aws_instance.web.id` or `tolist(aws_instance.web.network_interface)[0].private_ip`.
//!
//! References are extended by appending [TraversalOperator]s. An [AttributePath] is the operator list a child
//! hands to its parent, a [PathSegment] is a single index or property that can be literal or deferred.
use crate::token::Token;
use hcl::{Expression, Identifier, Traversal, TraversalOperator};
use std::fmt::{Display, Formatter};

/// HCL expression naming a deferred value
#[derive(Debug, Clone, PartialEq)]
pub struct Reference(Expression);

impl Reference {
    pub fn new(expression: impl Into<Expression>) -> Self {
        let mut expression = expression.into();
        if let Expression::Traversal(traversal) = &mut expression {
            traversal.squash();
        }

        Self(expression)
    }

    /// Parses HCL expression syntax
    ///
    /// An encoded token (`${...}`) is accepted as well and yields the reference it carries.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if let Some(reference) = Token::decode(text) {
            return Ok(reference);
        }

        let expression: hcl_edit::expr::Expression = text.parse()?;
        Ok(Self::new(Expression::from(expression)))
    }

    pub fn expression(&self) -> &Expression {
        &self.0
    }

    pub fn into_expression(self) -> Expression {
        self.0
    }

    /// Appends `path` to this reference
    ///
    /// Traversals are extended in place so `a.b` extended by `.c` is `a.b.c` and not `(a.b).c`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn extend(&self, path: impl Into<AttributePath>) -> Reference {
        let path = path.into();
        if path.is_empty() {
            return self.clone();
        }

        let mut operators = path.into_operators();
        let expression = match &self.0 {
            Expression::Traversal(traversal) => {
                let mut traversal = traversal.as_ref().clone();
                traversal.operators.append(&mut operators);
                traversal
            }
            expression => Traversal::new(expression.clone(), operators),
        };

        let reference = Reference::new(expression);
        tracing::trace!(%reference, "extended reference");
        reference
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // formatting into a String only fails on writer io errors
        match hcl::format::to_string(&self.0) {
            Ok(formatted) => f.write_str(&formatted),
            Err(error) => {
                tracing::warn!(%error, "unable to format reference");
                write!(f, "{:?}", self.0)
            }
        }
    }
}

impl From<Expression> for Reference {
    fn from(value: Expression) -> Self {
        Reference::new(value)
    }
}

impl From<Traversal> for Reference {
    fn from(value: Traversal) -> Self {
        Reference::new(value)
    }
}

impl From<hcl::FuncCall> for Reference {
    fn from(value: hcl::FuncCall) -> Self {
        Reference::new(value)
    }
}

impl From<Token> for Reference {
    fn from(value: Token) -> Self {
        value.into_reference()
    }
}

impl From<&Token> for Reference {
    fn from(value: &Token) -> Self {
        value.reference().clone()
    }
}

impl From<&Reference> for Reference {
    fn from(value: &Reference) -> Self {
        value.clone()
    }
}

/// Indexes `base` by each of `segments`, left to right
///
/// Integer literals become `[n]`, identifier-like literals `.name`, any other literal a quoted key `["k"]` and
/// deferred segments `[<expr>]`.
pub fn property_access<S>(base: impl Into<Reference>, segments: impl IntoIterator<Item = S>) -> Reference
where
    S: Into<PathSegment>,
{
    let path = segments
        .into_iter()
        .fold(AttributePath::new(), |path, segment| {
            path.bracketed(&segment.into())
        });

    base.into().extend(path)
}

/// Ordered attribute/index operators relative to some owner
///
/// Attribute names are not validated, whatever is given ends up in the expression as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributePath(Vec<TraversalOperator>);

impl AttributePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: impl AsRef<str>) -> Self {
        self.0
            .push(TraversalOperator::GetAttr(Identifier::unchecked(name.as_ref())));
        self
    }

    /// `[n]`
    pub fn index(mut self, index: u64) -> Self {
        self.0
            .push(TraversalOperator::Index(Expression::Number(index.into())));
        self
    }

    /// `[<expr>]`
    pub fn index_expr(mut self, expression: impl Into<Expression>) -> Self {
        self.0.push(TraversalOperator::Index(expression.into()));
        self
    }

    /// Appends a segment in dotted form: `.2`, `.name` or `[<expr>]`
    pub fn dotted(mut self, segment: &PathSegment) -> Self {
        let operator = match segment {
            PathSegment::Literal(literal) => match literal_index(literal) {
                Some(index) => TraversalOperator::LegacyIndex(index),
                None => TraversalOperator::GetAttr(Identifier::unchecked(literal.as_str())),
            },
            PathSegment::Deferred(reference) => {
                TraversalOperator::Index(reference.expression().clone())
            }
        };

        self.0.push(operator);
        self
    }

    /// Appends a segment as an index, always bracketed: `[2]`, `["key"]` or `[<expr>]`
    pub fn indexed(mut self, segment: &PathSegment) -> Self {
        self.0.push(TraversalOperator::Index(segment.to_expression()));
        self
    }

    /// Appends a segment in bracketed form, see [property_access]
    pub fn bracketed(mut self, segment: &PathSegment) -> Self {
        let operator = match segment {
            PathSegment::Literal(literal) if Identifier::new(literal.as_str()).is_ok() => {
                TraversalOperator::GetAttr(Identifier::unchecked(literal.as_str()))
            }
            segment => TraversalOperator::Index(segment.to_expression()),
        };

        self.0.push(operator);
        self
    }

    pub fn join(mut self, mut other: AttributePath) -> Self {
        self.0.append(&mut other.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn operators(&self) -> &[TraversalOperator] {
        &self.0
    }

    pub fn into_operators(self) -> Vec<TraversalOperator> {
        self.0
    }
}

impl From<&str> for AttributePath {
    fn from(value: &str) -> Self {
        AttributePath::new().attr(value)
    }
}

impl From<String> for AttributePath {
    fn from(value: String) -> Self {
        AttributePath::new().attr(value)
    }
}

impl From<&String> for AttributePath {
    fn from(value: &String) -> Self {
        AttributePath::new().attr(value)
    }
}

impl From<Vec<TraversalOperator>> for AttributePath {
    fn from(value: Vec<TraversalOperator>) -> Self {
        Self(value)
    }
}

/// A list index or property that is either known now or only once terraform evaluates it
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Literal(String),
    Deferred(Reference),
}

impl PathSegment {
    /// The segment as a standalone expression: number, quoted string or the deferred expression
    pub fn to_expression(&self) -> Expression {
        match self {
            PathSegment::Literal(literal) => match literal_index(literal) {
                Some(index) => Expression::Number(index.into()),
                None => Expression::String(literal.clone()),
            },
            PathSegment::Deferred(reference) => reference.expression().clone(),
        }
    }
}

/// A literal that reads as a number only when it renders back unchanged, `"01"` stays text
fn literal_index(literal: &str) -> Option<u64> {
    literal
        .parse::<u64>()
        .ok()
        .filter(|index| index.to_string() == literal)
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Literal(literal) => f.write_str(literal),
            PathSegment::Deferred(reference) => reference.fmt(f),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        PathSegment::Literal(value.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        PathSegment::Literal(value)
    }
}

impl From<&String> for PathSegment {
    fn from(value: &String) -> Self {
        PathSegment::Literal(value.clone())
    }
}

impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        PathSegment::Literal(value.to_string())
    }
}

impl From<Reference> for PathSegment {
    fn from(value: Reference) -> Self {
        PathSegment::Deferred(value)
    }
}

impl From<Token> for PathSegment {
    fn from(value: Token) -> Self {
        PathSegment::Deferred(value.into_reference())
    }
}

impl From<&Token> for PathSegment {
    fn from(value: &Token) -> Self {
        PathSegment::Deferred(value.reference().clone())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Unable to parse reference expression")]
    InvalidExpression(#[from] hcl_edit::parser::Error),
}

trait TraversalExt {
    fn squash(&mut self);
}

impl TraversalExt for Traversal {
    /// Squash nested Traversals
    ///
    /// Turns `<foo.bar>.baz` into `foo.bar.baz`.
    fn squash(&mut self) {
        while let Traversal {
            expr: Expression::Traversal(inner),
            operators,
            ..
        } = self
        {
            inner.operators.append(operators);
            std::mem::swap(&mut self.operators, &mut inner.operators);

            self.expr = std::mem::replace(&mut inner.expr, Expression::Null);
            tracing::trace!(traversal=?self, "traversal squashed")
        }
    }
}
