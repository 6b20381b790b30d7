#![allow(deprecated)]

use super::list::element_reference;
use crate::addressable::InterpolatingParent;
use crate::reference::{AttributePath, PathSegment, Reference};

/// An indexed element of a computed list
#[deprecated(note = "use ComplexList::get and ComplexListItem instead")]
#[derive(Debug, Clone)]
pub struct ComplexComputedList<'a> {
    parent: &'a dyn InterpolatingParent,
    attribute: String,
    index: PathSegment,
    wraps_set: bool,
}

impl<'a> ComplexComputedList<'a> {
    pub fn new(
        parent: &'a dyn InterpolatingParent,
        attribute: impl Into<String>,
        index: impl Into<PathSegment>,
        wraps_set: bool,
    ) -> Self {
        Self {
            parent,
            attribute: attribute.into(),
            index: index.into(),
            wraps_set,
        }
    }
}

impl InterpolatingParent for ComplexComputedList<'_> {
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::coerce::AttributeGetters;
    use crate::resource::TerraformResource;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_paths_as_list_items() {
        let web = TerraformResource::new("aws_instance", "web");

        let list = ComplexComputedList::new(&web, "network_interface", "0", false);
        assert_eq!(
            list.get_string_attribute("private_ip").reference().to_string(),
            "aws_instance.web.network_interface.0.private_ip"
        );

        let set = ComplexComputedList::new(&web, "network_interface", "0", true);
        assert_eq!(
            set.get_string_attribute("private_ip").reference().to_string(),
            "tolist(aws_instance.web.network_interface)[0].private_ip"
        );
    }
}
