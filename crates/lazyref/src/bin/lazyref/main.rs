mod cli;

use anyhow::Context;
use lazyref::addressable::Addressable;
use lazyref::coerce::AttributeGetters;
use lazyref::complex::ComplexList;
use lazyref::reference::{PathSegment, Reference};
use lazyref::resource::TerraformResource;
use lazyref::token::Token;
use lazyref::value::Value;

fn main() {
    use clap::Parser;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("LAZYREF_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let command_result = match cli.command {
        cli::Command::Reference(reference_cli) => reference(reference_cli),
        cli::Command::Decode(decode_cli) => decode(decode_cli),
    };

    if let Err(e) = command_result {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}

pub fn reference(cli: cli::ReferenceCommand) -> anyhow::Result<()> {
    let (resource_type, name) = cli
        .resource
        .split_once('.')
        .context("--resource must be of the form <type>.<name>")?;

    let resource = if cli.data {
        TerraformResource::data(resource_type, name)
    } else {
        TerraformResource::new(resource_type, name)
    };

    let index: PathSegment = match &cli.index_expr {
        Some(expression) => Reference::parse(expression)
            .context("invalid --index-expr")?
            .into(),
        None => cli.index.as_str().into(),
    };

    let list = ComplexList::new(&resource, cli.attribute.as_str(), cli.set);
    let item = list.get(index);
    let token = match &cli.property {
        Some(property) => item.get_any_attribute(property),
        None => item.fqn(),
    };
    tracing::debug!(%token, "rendered");

    output(&cli.output, &describe(&token))
}

pub fn decode(cli: cli::DecodeCommand) -> anyhow::Result<()> {
    let Some(reference) = Token::decode(&cli.token) else {
        anyhow::bail!("not an encoded token: {}", cli.token);
    };

    output(&cli.output, &describe(&Token::as_any(reference)))
}

fn describe(token: &Token) -> Value {
    [
        ("expression", Value::from(token.reference().to_string())),
        ("token", Value::from(token.to_string())),
    ]
    .into_iter()
    .collect()
}

fn output(output: &cli::OutputArgs, value: &Value) -> anyhow::Result<()> {
    match output.format {
        cli::OutputFormat::Yaml => serde_yaml::to_writer(std::io::stdout(), value)?,
        cli::OutputFormat::Json => serde_json::to_writer_pretty(std::io::stdout(), value)?,
    };

    Ok(())
}
