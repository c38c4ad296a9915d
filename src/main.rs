//! Preview a translated and populated string from the command line.
//!
//! ```text
//! string-tags <TEXT> [VARS] [DOMAIN] [CONTEXT]
//! ```
//!
//! Settings are read from the nearest `.string-tags.json`, starting at the
//! current directory.

use std::io::Write;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use string_tags::config::ConfigManager;
use string_tags::{
    Localizer,
    TextDomain,
};
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "string-tags")]
#[command(version)]
#[command(about = "Translate a text and fill in its {tags}")]
struct Args {
    /// Source text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Variables as a JSON object, e.g. '{"name": "Ana"}'
    #[arg(value_name = "VARS", value_parser = parse_vars)]
    vars: Option<serde_json::Value>,

    /// Text domain to look the text up in
    #[arg(value_name = "DOMAIN")]
    domain: Option<String>,

    /// Translation context
    #[arg(value_name = "CONTEXT")]
    context: Option<String>,
}

impl Args {
    /// Domain, with an empty argument meaning none.
    fn text_domain(&self) -> Option<TextDomain> {
        self.domain.as_deref().filter(|raw| !raw.is_empty()).map(TextDomain::new)
    }

    /// Context, with an empty argument meaning none.
    fn context(&self) -> Option<&str> {
        self.context.as_deref().filter(|raw| !raw.is_empty())
    }
}

/// Parses the VARS argument. An empty string means no variables.
fn parse_vars(raw: &str) -> Result<serde_json::Value, serde_json::Error> {
    if raw.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(raw)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let output = render(&args)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write output")?;
    Ok(())
}

/// Loads settings and the catalog, then renders the requested text.
fn render(args: &Args) -> Result<String> {
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(&current_dir).context("Failed to load settings")?;

    let localizer = Localizer::from_config(&config_manager).context("Failed to load catalog")?;
    tracing::debug!(
        language = ?localizer.translator().language(),
        entries = localizer.translator().len(),
        "Catalog ready"
    );

    let vars = args.vars.clone().unwrap_or(serde_json::Value::Null);
    let domain = args.text_domain();
    Ok(localizer.st_with(&args.text, &vars, args.context(), domain.as_ref()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::error::ErrorKind;
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn text_only() {
        let args = Args::try_parse_from(["string-tags", "Hello {name}"]).unwrap();

        assert_that!(args.text, eq("Hello {name}"));
        assert_that!(args.vars, none());
        assert_that!(args.text_domain(), none());
        assert_that!(args.context(), none());
    }

    #[rstest]
    fn all_positionals() {
        let args = Args::try_parse_from([
            "string-tags",
            "Save",
            r#"{"name": "Ana"}"#,
            "site/templates/home.php",
            "menu",
        ])
        .unwrap();

        assert_eq!(args.vars, Some(json!({"name": "Ana"})));
        assert_eq!(args.text_domain(), Some(TextDomain::new("site/templates/home.php")));
        assert_that!(args.context(), some(eq("menu")));
    }

    #[rstest]
    fn empty_arguments_mean_not_given() {
        let args = Args::try_parse_from(["string-tags", "Save", "", "", "menu"]).unwrap();

        assert_eq!(args.vars, Some(serde_json::Value::Null));
        assert_that!(args.text_domain(), none());
        assert_that!(args.context(), some(eq("menu")));
    }

    #[rstest]
    #[case::invalid_vars_json(&["string-tags", "Hello", "{not json"], ErrorKind::ValueValidation)]
    #[case::missing_text(&["string-tags"], ErrorKind::MissingRequiredArgument)]
    #[case::too_many(&["string-tags", "a", "{}", "d", "c", "extra"], ErrorKind::UnknownArgument)]
    fn invalid_arguments_are_rejected(#[case] argv: &[&str], #[case] kind: ErrorKind) {
        let error = Args::try_parse_from(argv).unwrap_err();

        assert_eq!(error.kind(), kind);
    }
}
