use std::path::Path;

use eyre::WrapErr;

use icon_core::models::observations::ClinicalObservations;
use icon_core::models::report::ScoreReport;
use icon_core::models::selections::ObservationSelections;
use icon_export::docx::generate_docx;
use icon_export::render::render_report;
use icon_scoring::{catalog, reference};

use crate::cli::{Cli, Commands, ConfigAction, OutputArgs};
use crate::config::{self, IconConfig};

/// Run a parsed command line and return what should be printed to stdout.
pub fn execute(cli: &Cli) -> eyre::Result<String> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    match &cli.command {
        Commands::Score {
            input,
            observations,
            output,
        } => {
            let config = config::load_or_default(&config_path)?;
            let mut selections = match input {
                Some(path) => read_selections(path)?,
                None => ObservationSelections::default(),
            };
            selections = selections.merge(observations.to_selections());

            let report = icon_scoring::score_selections(selections)
                .wrap_err("please complete all assessment fields with valid values")?;
            emit(&report, output, &config)
        }
        Commands::Demo { output } => {
            let config = config::load_or_default(&config_path)?;
            let report = icon_scoring::score(ClinicalObservations::demonstration())?;
            emit(&report, output, &config)
        }
        Commands::DacScale => Ok(format!("{}\n", reference::DAC_SCALE)),
        Commands::Guide => Ok(format!("{}\n", reference::interpretation_guide())),
        Commands::Components => Ok(components_table()),
        Commands::Config { action } => config_command(action, &config_path),
    }
}

fn read_selections(path: &Path) -> eyre::Result<ObservationSelections> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read observations from {}", path.display()))?;
    let selections = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("failed to parse observations in {}", path.display()))?;
    Ok(selections)
}

/// Render the report, honouring `--output` and `--docx`. Returns the text
/// destined for stdout (empty when the report went to a file).
fn emit(report: &ScoreReport, output: &OutputArgs, config: &IconConfig) -> eyre::Result<String> {
    let format = output.format.unwrap_or(config.default_format);
    let evaluator = config.evaluator_name.as_deref();
    let rendered = render_report(report, format, evaluator)?;

    if let Some(path) = &output.docx {
        let bytes = generate_docx(report, &config.document_styles, evaluator)?;
        write_file(path, &bytes)?;
        tracing::info!(path = %path.display(), "DOCX report written");
    }

    match &output.output {
        Some(path) => {
            write_file(path, rendered.as_bytes())?;
            tracing::info!(path = %path.display(), %format, "report written");
            Ok(String::new())
        }
        None => Ok(rendered),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> eyre::Result<()> {
    std::fs::write(path, bytes).wrap_err_with(|| format!("failed to write {}", path.display()))
}

fn components_table() -> String {
    let mut out = String::new();
    for c in catalog::components() {
        out.push_str(&format!(
            "{:<24} {:>3}-{:<3} {}\n",
            c.name, c.range.min, c.range.max, c.description
        ));
    }
    out.push_str(&format!("{:<24} {:>7}\n", "Maximum total", catalog::max_total()));
    out
}

fn config_command(action: &ConfigAction, path: &Path) -> eyre::Result<String> {
    match action {
        ConfigAction::Show => {
            let config = config::load_or_default(path)?;
            Ok(format!("{}\n", serde_json::to_string_pretty(&config)?))
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                ));
            }
            config::save_config(path, &IconConfig::new())?;
            Ok(format!("wrote {}\n", path.display()))
        }
        ConfigAction::Path => Ok(format!("{}\n", path.display())),
    }
}
