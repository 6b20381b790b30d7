use crate::addressable::InterpolatingParent;
use crate::reference::{AttributePath, Reference};

/// A nested block that occurs exactly once
///
/// Terraform models single nested blocks as lists of one, so properties live at `attr[0]`.
#[derive(Debug, Clone)]
pub struct ComplexObject<'a> {
    parent: &'a dyn InterpolatingParent,
    attribute: String,
}

impl<'a> ComplexObject<'a> {
    pub fn new(parent: &'a dyn InterpolatingParent, attribute: impl Into<String>) -> Self {
        Self {
            parent,
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The whole block, without the synthetic index
    pub fn interpolation_as_list(&self) -> Reference {
        self.parent
            .interpolation_for_attribute(AttributePath::from(&self.attribute))
    }
}

impl InterpolatingParent for ComplexObject<'_> {
    #[tracing::instrument(level = "trace", skip_all, fields(attribute = %self.attribute))]
    fn interpolation_for_attribute(&self, path: AttributePath) -> Reference {
        self.parent.interpolation_for_attribute(
            AttributePath::from(&self.attribute).index(0).join(path),
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
    fn singleton_block() {
        let web = TerraformResource::new("aws_instance", "web");
        let options = ComplexObject::new(&web, "metadata_options");

        assert_eq!(
            options.get_string_attribute("http_tokens").reference().to_string(),
            "aws_instance.web.metadata_options[0].http_tokens"
        );
        assert_eq!(
            options.interpolation_as_list().to_string(),
            "aws_instance.web.metadata_options"
        );
    }

    #[test]
    fn nested_objects() {
        let cluster = TerraformResource::new("aws_eks_cluster", "main");
        let config = ComplexObject::new(&cluster, "kubernetes_network_config");
        let elastic = ComplexObject::new(&config, "elastic_load_balancing");

        assert_eq!(
            elastic.get_boolean_attribute("enabled").reference().to_string(),
            "aws_eks_cluster.main.kubernetes_network_config[0].elastic_load_balancing[0].enabled"
        );
    }
}
