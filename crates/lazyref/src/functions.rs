//! terraform function calls used while building references
use crate::reference::{PathSegment, Reference};
use hcl::{Expression, FuncCall, Identifier};

/// `tolist(<collection>)`, gives a set an order so it can be indexed
pub fn tolist(collection: impl Into<Reference>) -> Reference {
    call("tolist", [collection.into().into_expression()])
}

/// `element(<list>, <index>)`
///
/// Unlike indexing, `element` wraps around and works with an index only known at apply time.
pub fn element(list: impl Into<Reference>, index: impl Into<PathSegment>) -> Reference {
    call(
        "element",
        [list.into().into_expression(), index.into().to_expression()],
    )
}

/// `lookup(<map>, "<key>", <default>)`
pub fn lookup(
    map: impl Into<Reference>,
    key: impl Into<PathSegment>,
    default: impl Into<Expression>,
) -> Reference {
    let key = match key.into() {
        PathSegment::Literal(literal) => Expression::String(literal),
        PathSegment::Deferred(reference) => reference.into_expression(),
    };

    call("lookup", [map.into().into_expression(), key, default.into()])
}

fn call(name: &str, args: impl IntoIterator<Item = Expression>) -> Reference {
    let call = args
        .into_iter()
        .fold(FuncCall::builder(Identifier::unchecked(name)), |call, arg| {
            call.arg(arg)
        })
        .build();

    Reference::new(call)
}
