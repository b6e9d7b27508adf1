//! CLI for urlinfo.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use urlinfo_core::config::{self, OutputFormat};
use urlinfo_core::url_model::AmbientContext;

use commands::{
    run_completions, run_current, run_man, run_parse, run_segment, run_slug, Field,
};

/// Top-level CLI for urlinfo.
#[derive(Debug, Parser)]
#[command(name = "urlinfo")]
#[command(about = "urlinfo: inspect every component of a URL", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub context: ContextArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Request context overrides, used when no URL is given.
///
/// Take precedence over CGI environment variables, which take precedence over
/// the `[context]` table of the config file.
#[derive(Debug, Default, Args)]
pub struct ContextArgs {
    /// Server host name of the current request.
    #[arg(long, global = true, value_name = "HOST")]
    pub server_name: Option<String>,

    /// Server port of the current request (80 and 443 are left out of the URL).
    #[arg(long, global = true, value_name = "PORT")]
    pub server_port: Option<String>,

    /// Request path (and query) of the current request.
    #[arg(long, global = true, value_name = "PATH")]
    pub request_path: Option<String>,

    /// Whether the current request uses a secure transport (`--https` alone means true).
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub https: Option<bool>,
}

impl ContextArgs {
    /// Applies the flags that were given on top of `base`.
    pub fn apply(&self, mut base: AmbientContext) -> AmbientContext {
        if let Some(name) = &self.server_name {
            base.server_name = name.clone();
        }
        if let Some(port) = &self.server_port {
            base.server_port = port.clone();
        }
        if let Some(path) = &self.request_path {
            base.request_path = path.clone();
        }
        if let Some(https) = self.https {
            base.https = https;
        }
        base
    }
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a URL into its components.
    Parse {
        /// URL to decompose; the current request URL is used when omitted.
        url: Option<String>,

        /// Print only this component.
        #[arg(long, value_enum)]
        field: Option<Field>,

        /// Output format (defaults to the config file setting).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print the current request URL built from the request context.
    Current,

    /// Convert text into a URL-safe slug.
    Slug {
        /// Text to convert.
        text: String,
    },

    /// Split a URI path into segments.
    Segment {
        /// URI path, e.g. `/blog/2024/post`.
        uri: String,

        /// Print only the first segment.
        #[arg(long, conflicts_with = "last")]
        first: bool,

        /// Print only the last segment.
        #[arg(long)]
        last: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let env = cfg
            .base_context()
            .overlay_vars(|name| std::env::var(name).ok());
        let context = cli.context.apply(env);

        match cli.command {
            CliCommand::Parse { url, field, format } => {
                let format = format.map(OutputFormat::from).unwrap_or(cfg.format);
                run_parse(url.as_deref(), &context, field, format)?;
            }
            CliCommand::Current => run_current(&context)?,
            CliCommand::Slug { text } => run_slug(&text)?,
            CliCommand::Segment { uri, first, last } => run_segment(&uri, first, last)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
