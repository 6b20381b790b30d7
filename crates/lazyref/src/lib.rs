//! # lazyref - deferred references for terraform configuration
//!
//! ## Introduction for developers
//!
//! Read this to understand how `lazyref` works internally.
//!
//! ### The problem
//!
//! A program declares infrastructure resources and wires them together: the subnet of an instance is the `id` of a
//! subnet resource, a DNS record points at the `private_ip` of the first network interface of an instance. None of
//! these values exist while the program runs. They exist once terraform applied the configuration.
//!
//! So instead of values we hand out *references* and let terraform evaluate them:
//!
//! ```hcl
//! subnet_id  = "${aws_subnet.main.id}"
//! private_ip = "${aws_instance.web.network_interface.0.private_ip}"
//! ```
//!
//! ### Terms
//!
//! - [reference::Reference]: an HCL expression such as `aws_instance.web.id`
//! - [token::Token]: a reference plus the [token::Shape] the value will have (string, number, map of numbers, ...).
//!   Encoded as `${<expression>}`, terraform's own interpolation syntax.
//! - [addressable::InterpolatingParent]: anything that can answer "what is the reference of attribute `p` on me"
//! - [addressable::Addressable]: anything that has a reference of its own (`fqn`)
//!
//! ### Navigating nested attributes
//!
//! Nested and repeated blocks are represented by the types in [complex]. Each one only knows its immediate parent
//! and the attribute name it lives under. Asked for a property, it extends the path and asks its parent, which does
//! the same, until a [resource::TerraformResource] turns the path into a reference.
//!
//! **Example**
//!
//! ```
//! use lazyref::addressable::Addressable;
//! use lazyref::coerce::AttributeGetters;
//! use lazyref::complex::ComplexList;
//! use lazyref::resource::TerraformResource;
//!
//! let web = TerraformResource::new("aws_instance", "web");
//!
//! let interfaces = ComplexList::new(&web, "network_interface", false);
//! let ip = interfaces.get("0").get_string_attribute("private_ip");
//! assert_eq!(ip.to_string(), "${aws_instance.web.network_interface.0.private_ip}");
//!
//! // sets have no order until terraform resolves them, so they are converted first
//! let interfaces = ComplexList::new(&web, "network_interface", true);
//! let ip = interfaces.get("0").get_string_attribute("private_ip");
//! assert_eq!(ip.to_string(), "${tolist(aws_instance.web.network_interface)[0].private_ip}");
//! ```
//!
//! | navigation                        | list                             | set                                  |
//! |-----------------------------------|----------------------------------|--------------------------------------|
//! | `list.get("2")` `.fqn()`          | `attr.2`                         | `tolist(attr)[2]`                    |
//! | `list.get("2")` property `id`     | `attr.2.id`                      | `tolist(attr)[2].id`                 |
//! | `list.get(var.i)` property `id`   | `attr[var.i].id`                 | `tolist(attr)[var.i].id`             |
//! | [complex::ComplexObject] `id`     | `attr[0].id`                     |                                      |
//!
//! Nothing here validates attribute names or indices. Mistakes surface when terraform reads the configuration.
//!
//! ### Output
//!
//! Resources are collected in a [resource::Stack]. [resource::Stack::synth] builds a [value::Value] for the whole
//! configuration, which serializes via [serde] with every token in its encoded form.
//!
pub mod addressable;
pub mod coerce;
pub mod complex;
pub mod functions;
pub mod reference;
pub mod resource;
pub mod token;
pub mod value;
