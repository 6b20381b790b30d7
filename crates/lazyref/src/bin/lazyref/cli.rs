//! lazyref cli interface

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Formatter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the reference of a list element or one of its properties
    #[command(alias = "ref")]
    Reference(ReferenceCommand),

    /// Print the expression inside an encoded token such as "${aws_instance.web.id}"
    Decode(DecodeCommand),
}

#[derive(Parser, Debug)]
pub struct ReferenceCommand {
    #[clap(flatten)]
    pub output: OutputArgs,

    /// Resource address as <type>.<name>
    #[clap(short = 'r', long = "resource")]
    pub resource: String,

    /// Treat the resource as a data source
    #[clap(long = "data")]
    pub data: bool,

    /// Name of the list or set attribute
    #[clap(short = 'a', long = "attribute")]
    pub attribute: String,

    /// The attribute is a set and has to be converted before indexing
    #[clap(short = 's', long = "set")]
    pub set: bool,

    /// Literal element index
    #[clap(short = 'i', long = "index", default_value = "0")]
    pub index: String,

    /// Element index only known at apply time, as HCL expression
    #[clap(short = 'e', long = "index-expr", conflicts_with("index"))]
    pub index_expr: Option<String>,

    /// Property of the element, the element itself when omitted
    #[clap(short = 'p', long = "property")]
    pub property: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DecodeCommand {
    #[clap(flatten)]
    pub output: OutputArgs,

    /// Encoded token
    pub token: String,
}

#[derive(Parser, Debug)]
pub struct OutputArgs {
    #[arg(short = 'F', long = "output-format", default_value_t)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum OutputFormat {
    Json,
    #[default]
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}
