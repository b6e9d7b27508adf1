//! `urlinfo parse [url]` – decompose a URL and print its components.

use anyhow::{Context, Result};
use clap::ValueEnum;
use urlinfo_core::config::OutputFormat;
use urlinfo_core::url_model::{AmbientContext, UrlRecord};

/// A single component of a decomposed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Full,
    Scheme,
    Username,
    Password,
    Host,
    Port,
    Authority,
    Base,
    Path,
    Dirname,
    Basename,
    Filename,
    Extension,
    Segments,
    Query,
    Parameters,
    Fragment,
    Hash,
}

impl Field {
    const ALL: [Field; 18] = [
        Field::Full,
        Field::Scheme,
        Field::Username,
        Field::Password,
        Field::Host,
        Field::Port,
        Field::Authority,
        Field::Base,
        Field::Path,
        Field::Dirname,
        Field::Basename,
        Field::Filename,
        Field::Extension,
        Field::Segments,
        Field::Query,
        Field::Parameters,
        Field::Fragment,
        Field::Hash,
    ];

    fn name(self) -> &'static str {
        match self {
            Field::Full => "full",
            Field::Scheme => "scheme",
            Field::Username => "username",
            Field::Password => "password",
            Field::Host => "host",
            Field::Port => "port",
            Field::Authority => "authority",
            Field::Base => "base",
            Field::Path => "path",
            Field::Dirname => "dirname",
            Field::Basename => "basename",
            Field::Filename => "filename",
            Field::Extension => "extension",
            Field::Segments => "segments",
            Field::Query => "query",
            Field::Parameters => "parameters",
            Field::Fragment => "fragment",
            Field::Hash => "hash",
        }
    }
}

pub fn run_parse(
    url: Option<&str>,
    context: &AmbientContext,
    field: Option<Field>,
    format: OutputFormat,
) -> Result<()> {
    let record = UrlRecord::resolve(url, context);
    tracing::debug!(url = %record, explicit = url.is_some(), "decomposed url");

    let out = match (field, format) {
        (Some(field), OutputFormat::Text) => render_field(&record, field),
        (Some(field), OutputFormat::Json) => {
            let value = serde_json::to_value(&record).context("serialize url record")?;
            serde_json::to_string_pretty(&value[field.name()]).context("serialize field")?
        }
        (None, OutputFormat::Text) => render_text(&record),
        (None, OutputFormat::Json) => {
            serde_json::to_string_pretty(&record).context("serialize url record")?
        }
    };
    println!("{out}");
    Ok(())
}

/// One component as plain text. Segments and parameters print one per line.
fn render_field(record: &UrlRecord, field: Field) -> String {
    match field {
        Field::Full => record.full().to_string(),
        Field::Scheme => record.scheme().to_string(),
        Field::Username => record.username().to_string(),
        Field::Password => record.password().to_string(),
        Field::Host => record.host().to_string(),
        Field::Port => record.port().map(|p| p.to_string()).unwrap_or_default(),
        Field::Authority => record.authority().to_string(),
        Field::Base => record.base().to_string(),
        Field::Path => record.path().to_string(),
        Field::Dirname => record.dirname().to_string(),
        Field::Basename => record.basename().to_string(),
        Field::Filename => record.filename().to_string(),
        Field::Extension => record.extension().to_string(),
        Field::Segments => record.segments().join("\n"),
        Field::Query => record.query().to_string(),
        Field::Parameters => record
            .parameters()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n"),
        Field::Fragment => record.fragment().to_string(),
        Field::Hash => record.hash().to_string(),
    }
}

/// Every component as a `name: value` line.
fn render_text(record: &UrlRecord) -> String {
    Field::ALL
        .iter()
        .map(|&field| {
            let value = match field {
                Field::Segments => format!("{:?}", record.segments()),
                Field::Parameters => format!("{:?}", record.parameters()),
                _ => render_field(record, field),
            };
            format!("{:<10} {}", format!("{}:", field.name()), value)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
