use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use nabu_mail_render::config::Settings;
use nabu_mail_render::render::{RenderInterfaceRegistry, TemplateRenderInterface};
use nabu_mail_render::telemetry::init_tracing;
use nabu_mail_render::template::{Language, Params, TemplateStore};

/// Render a mail template from a JSON catalog
#[derive(Debug, Parser)]
#[command(name = "nabu-mail-render", version)]
struct Cli {
    /// JSON template catalog (defaults to `render.catalog`)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Template ID
    #[arg(long)]
    template: String,

    /// Language code (defaults to `render.default_language`)
    #[arg(long)]
    language: Option<String>,

    /// Render interface name (defaults to `render.interface`)
    #[arg(long)]
    interface: Option<String>,

    /// Macro value as name=value, repeatable
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Part of the message to print
    #[arg(long, value_enum, default_value_t = Part::All)]
    part: Part,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Part {
    Subject,
    Html,
    Text,
    All,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got `{raw}`")),
    }
}

fn render_part(
    render: &dyn TemplateRenderInterface,
    part: Part,
    params: &Params,
) -> Result<String> {
    let output = match part {
        Part::Subject => render.render_subject(Some(params))?,
        Part::Html => render.render_body_html(Some(params))?,
        Part::Text => render.render_body_text(Some(params))?,
        Part::All => serde_json::to_string_pretty(&render.render_message(Some(params))?)?,
    };
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new()?;
    init_tracing(&settings.log)?;

    let catalog = cli
        .catalog
        .or(settings.render.catalog)
        .context("no template catalog given (--catalog or render.catalog)")?;
    let store = TemplateStore::load_catalog(&catalog)?;

    let interface = cli.interface.unwrap_or(settings.render.interface);
    let language = Language::from(cli.language.unwrap_or(settings.render.default_language));

    let registry = RenderInterfaceRegistry::with_defaults();
    let mut render = registry.create(&interface)?;
    render.set_template(store.get(&cli.template)?);
    render.set_language(language);

    let params: Params = cli.params.into_iter().collect();

    let output = render_part(render.as_ref(), cli.part, &params);
    render.finish();

    println!("{}", output?);
    Ok(())
}
