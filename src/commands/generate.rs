//! Implementation of the `prd-outliner generate` and `prd-outliner prompt` commands.

use crate::cli::{FormArgs, GenerateArgs};
use crate::config::Config;
use crate::credentials;
use crate::error::Result;
use crate::export::MarkdownExport;
use crate::generation::OpenAiClient;
use crate::outline::GenerationParameters;
use crate::session::Outliner;

/// Execute the `prd-outliner generate` command.
///
/// Flags override config values. On success the outline goes to stdout;
/// the prompt (with `--show-prompt`) and export notices go to stderr.
pub fn cmd_generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let outliner = outliner_for(config, &args)?;
    let form = args.form.to_form(&config.sections);

    let secrets = args.secrets.clone().or_else(|| config.secrets_path());
    let credential = credentials::resolve_api_key(secrets.as_deref())?;

    let settings = config.client_settings();
    let generation = outliner.generate(&form, credential, |api_key| {
        OpenAiClient::new(&settings, api_key)
    })?;

    if args.show_prompt {
        eprintln!("--- prompt sent ---");
        eprintln!("{}", generation.prompt);
        eprintln!("-------------------");
    }

    let markdown = generation.outline.markdown();
    print!("{}", markdown);
    if !markdown.ends_with('\n') {
        println!();
    }

    if let Some(target) = args.output {
        let export = MarkdownExport::new(&generation.outline, config.output_file_name.as_str());
        let path = export.write_to(&target)?;
        eprintln!("Saved outline to {}", path.display());
    }

    Ok(())
}

/// Execute the `prd-outliner prompt` command.
pub fn cmd_prompt(config: &Config, args: FormArgs) -> Result<()> {
    let outliner = Outliner {
        builder: config.prompt_builder()?,
        ..Outliner::default()
    };
    let prompt = outliner.preview(&args.to_form(&config.sections))?;
    println!("{}", prompt);
    Ok(())
}

fn outliner_for(config: &Config, args: &GenerateArgs) -> Result<Outliner> {
    let params = GenerationParameters::new(
        args.model.unwrap_or(config.model),
        args.temperature.unwrap_or(config.temperature),
    )?;

    tracing::debug!(model = %params.model, temperature = params.temperature, "generation parameters");

    Ok(Outliner {
        builder: config.prompt_builder()?,
        params,
        on_empty: config.empty_completion(),
    })
}
