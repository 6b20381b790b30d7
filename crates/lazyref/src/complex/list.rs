use crate::addressable::{Addressable, InterpolatingParent};
use crate::functions;
use crate::reference::{AttributePath, PathSegment, Reference};
use crate::token::Token;
use crate::value::Value;

/// A repeated nested block or attribute collection
///
/// The only way in is [ComplexList::get], elements are never handed out as plain values.
#[derive(Debug, Clone)]
pub struct ComplexList<'a> {
    parent: &'a dyn InterpolatingParent,
    attribute: String,
    wraps_set: bool,
}

impl<'a> ComplexList<'a> {
    /// `wraps_set` marks collections without an order until terraform resolves them
    pub fn new(
        parent: &'a dyn InterpolatingParent,
        attribute: impl Into<String>,
        wraps_set: bool,
    ) -> Self {
        Self {
            parent,
            attribute: attribute.into(),
            wraps_set,
        }
    }

    pub fn wraps_set(&self) -> bool {
        self.wraps_set
    }

    /// Element at `index`, which may be a literal or a deferred reference
    pub fn get(&self, index: impl Into<PathSegment>) -> ComplexListItem<'a> {
        self.item_for_index(index, |item| item)
    }

    /// Element at `index`, wrapped by `factory`
    ///
    /// Generated code uses this to hand out its own typed item that wraps the [ComplexListItem].
    pub fn item_for_index<T>(
        &self,
        index: impl Into<PathSegment>,
        factory: impl FnOnce(ComplexListItem<'a>) -> T,
    ) -> T {
        let index = index.into();
        tracing::trace!(attribute = %self.attribute, %index, wraps_set = self.wraps_set, "list item");

        factory(ComplexListItem {
            parent: self.parent,
            attribute: self.attribute.clone(),
            index,
            wraps_set: self.wraps_set,
        })
    }
}

impl Addressable for ComplexList<'_> {
    fn fqn(&self) -> Token {
        Token::as_string(
            self.parent
                .interpolation_for_attribute(AttributePath::from(&self.attribute)),
        )
    }
}

/// One element of a [ComplexList]
#[derive(Debug, Clone)]
pub struct ComplexListItem<'a> {
    parent: &'a dyn InterpolatingParent,
    attribute: String,
    index: PathSegment,
    wraps_set: bool,
}

impl<'a> ComplexListItem<'a> {
    pub fn index(&self) -> &PathSegment {
        &self.index
    }

    pub fn wraps_set(&self) -> bool {
        self.wraps_set
    }

    /// Whether `value` is a reference to a list item
    pub fn is_complex_list_item(value: &Value) -> bool {
        value.is_list_item()
    }
}

impl InterpolatingParent for ComplexListItem<'_> {
    #[tracing::instrument(level = "trace", skip_all, fields(attribute = %self.attribute, index = %self.index))]
    fn interpolation_for_attribute(&self, path: AttributePath) -> Reference {
        element_reference(
            self.parent,
            &self.attribute,
            &self.index,
            self.wraps_set,
            path,
        )
    }
}

impl Addressable for ComplexListItem<'_> {
    fn fqn(&self) -> Token {
        Token::as_string(self.interpolation_for_attribute(AttributePath::new()))
    }
}

impl From<&ComplexListItem<'_>> for Value {
    fn from(value: &ComplexListItem<'_>) -> Self {
        Value::ListItem(value.fqn())
    }
}

impl From<ComplexListItem<'_>> for Value {
    fn from(value: ComplexListItem<'_>) -> Self {
        (&value).into()
    }
}

/// Reference to `path` below element `index` of `attribute`
///
/// Sets are converted with `tolist` before indexing: `tolist(attr)[index]<path>`.
/// Lists use the dotted form: `attr.index<path>`.
pub(super) fn element_reference(
    parent: &dyn InterpolatingParent,
    attribute: &str,
    index: &PathSegment,
    wraps_set: bool,
    path: AttributePath,
) -> Reference {
    if wraps_set {
        let collection = parent.interpolation_for_attribute(AttributePath::from(attribute));
        let element = AttributePath::new().indexed(index).join(path);
        return functions::tolist(collection).extend(element);
    }

    parent.interpolation_for_attribute(AttributePath::from(attribute).dotted(index).join(path))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coerce::AttributeGetters;
    use crate::complex::ComplexObject;
    use crate::resource::TerraformResource;
    use pretty_assertions::assert_eq;

    fn web() -> TerraformResource {
        TerraformResource::new("aws_instance", "web")
    }

    #[test]
    fn list_item_property() {
        let web = web();
        let list = ComplexList::new(&web, "network_interface", false);

        let ip = list.get("0").get_string_attribute("private_ip");
        assert_eq!(
            ip.reference().to_string(),
            "aws_instance.web.network_interface.0.private_ip"
        );
    }

    #[test]
    fn set_item_property() {
        let web = web();
        let list = ComplexList::new(&web, "network_interface", true);

        let ip = list.get("0").get_string_attribute("private_ip");
        assert_eq!(
            ip.reference().to_string(),
            "tolist(aws_instance.web.network_interface)[0].private_ip"
        );
    }

    #[test]
    fn set_vs_list_branching() {
        let web = web();

        let list = ComplexList::new(&web, "ebs_block_device", false);
        let set = ComplexList::new(&web, "ebs_block_device", true);

        assert_eq!(
            list.get("2").get_string_attribute("id").reference().to_string(),
            "aws_instance.web.ebs_block_device.2.id"
        );
        assert_eq!(
            set.get("2").get_string_attribute("id").reference().to_string(),
            "tolist(aws_instance.web.ebs_block_device)[2].id"
        );
    }

    #[test]
    fn keyed_set_item_is_bracketed() {
        let web = web();
        let set = ComplexList::new(&web, "network_interface", true);

        assert_eq!(
            set.get("key").get_string_attribute("p").reference().to_string(),
            r#"tolist(aws_instance.web.network_interface)["key"].p"#
        );
    }

    #[test]
    fn leading_zero_index_is_not_rewritten() {
        let web = web();
        let list = ComplexList::new(&web, "network_interface", false);
        let item = list.get("01");

        assert_eq!(
            item.get_string_attribute("private_ip").reference().to_string(),
            "aws_instance.web.network_interface.01.private_ip"
        );
        assert_eq!(
            item.fqn().reference().to_string(),
            "aws_instance.web.network_interface.01"
        );
    }

    #[test]
    fn property_access_is_idempotent() {
        let web = web();
        let item = ComplexList::new(&web, "network_interface", true).get("1");

        let first = item.get_string_attribute("private_ip");
        let second = item.get_string_attribute("private_ip");
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(item.fqn().to_string(), item.fqn().to_string());
    }

    #[test]
    fn fqn() {
        let web = web();

        let list = ComplexList::new(&web, "network_interface", false);
        assert_eq!(list.fqn().to_string(), "${aws_instance.web.network_interface}");
        assert_eq!(
            list.get("3").fqn().to_string(),
            "${aws_instance.web.network_interface.3}"
        );

        let set = ComplexList::new(&web, "network_interface", true);
        assert_eq!(set.fqn().to_string(), "${aws_instance.web.network_interface}");
        assert_eq!(
            set.get("3").fqn().to_string(),
            "${tolist(aws_instance.web.network_interface)[3]}"
        );
    }

    #[test]
    fn deferred_index() {
        let web = web();
        let index = Reference::parse("var.interface_index").unwrap();

        let list = ComplexList::new(&web, "network_interface", false);
        assert_eq!(
            list.get(index.clone())
                .get_string_attribute("private_ip")
                .reference()
                .to_string(),
            "aws_instance.web.network_interface[var.interface_index].private_ip"
        );

        let set = ComplexList::new(&web, "network_interface", true);
        let ip = set.get(index).get_string_attribute("private_ip");
        assert_eq!(
            ip.reference().to_string(),
            "tolist(aws_instance.web.network_interface)[var.interface_index].private_ip"
        );
        assert!(Token::decode(&ip.to_string()).is_some());
    }

    #[test]
    fn token_as_index() {
        let web = web();
        let pick = TerraformResource::new("random_integer", "pick").get_number_attribute("result");

        let item = ComplexList::new(&web, "disk", false).get(&pick);
        assert_eq!(
            item.fqn().to_string(),
            "${aws_instance.web.disk[random_integer.pick.result]}"
        );
    }

    #[test]
    fn nested_list_object_property() {
        let web = web();
        let list = ComplexList::new(&web, "network_interface", false);
        let item = list.get("1");
        let attachment = ComplexObject::new(&item, "attachment");

        assert_eq!(
            attachment
                .get_string_attribute("device_index")
                .reference()
                .to_string(),
            "aws_instance.web.network_interface.1.attachment[0].device_index"
        );
    }

    #[test]
    fn nested_set_object_property() {
        let web = web();
        let list = ComplexList::new(&web, "network_interface", true);
        let item = list.get("1");
        let attachment = ComplexObject::new(&item, "attachment");

        assert_eq!(
            attachment
                .get_string_attribute("device_index")
                .reference()
                .to_string(),
            "tolist(aws_instance.web.network_interface)[1].attachment[0].device_index"
        );
    }

    #[test]
    fn nested_lists() {
        let web = web();
        let outer = ComplexList::new(&web, "rule", false);
        let rule = outer.get("0");
        let inner = ComplexList::new(&rule, "condition", true);

        assert_eq!(
            inner.get("2").get_string_attribute("field").reference().to_string(),
            "tolist(aws_instance.web.rule.0.condition)[2].field"
        );
    }

    #[derive(Debug)]
    struct NetworkInterface<'a>(ComplexListItem<'a>);

    impl NetworkInterface<'_> {
        fn private_ip(&self) -> Token {
            self.0.get_string_attribute("private_ip")
        }
    }

    #[test]
    fn item_factory() {
        let web = web();
        let list = ComplexList::new(&web, "network_interface", false);

        let interface = list.item_for_index("4", NetworkInterface);
        assert_eq!(
            interface.private_ip().to_string(),
            "${aws_instance.web.network_interface.4.private_ip}"
        );
    }

    #[test]
    fn list_items_are_distinguishable_values() {
        let web = web();
        let item = ComplexList::new(&web, "network_interface", false).get("0");

        assert!(ComplexListItem::is_complex_list_item(&Value::from(&item)));
        assert!(!ComplexListItem::is_complex_list_item(&Value::from(item.fqn())));
        assert!(!ComplexListItem::is_complex_list_item(&Value::from("0")));
    }
}
