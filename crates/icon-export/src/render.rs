use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use icon_core::models::report::ScoreReport;

use crate::error::ExportError;

/// Results pane layout: component bullets, total, need, interpretation.
pub const TEXT_TEMPLATE: &str = "\
ICON COMPONENT SCORES:
{% for line in component_scores %}- {{ line.label }}: {{ line.points }} points
{% endfor %}
TOTAL ICON SCORE: {{ total_score }} points

TREATMENT NEED ASSESSMENT:
{{ treatment_need_label }}

INTERPRETATION:
{{ interpretation_text }}
";

pub const MARKDOWN_TEMPLATE: &str = "\
# ICON Assessment
{% if evaluator_name %}
Evaluator: {{ evaluator_name }}
{% endif %}
## Component Scores

{% for line in component_scores %}- {{ line.label }}: **{{ line.points }} points**
{% endfor %}
## Total ICON Score

**{{ total_score }} points**

## Treatment Need Assessment

**{{ treatment_need_label }}**

## Interpretation

{{ interpretation_text }}
";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Values available to a report template, on top of the report's own fields.
#[derive(Serialize)]
struct TemplateContext<'a> {
    #[serde(flatten)]
    report: &'a ScoreReport,
    treatment_need_label: &'a str,
    evaluator_name: Option<&'a str>,
}

/// Render a report in one of the built-in formats.
pub fn render_report(
    report: &ScoreReport,
    format: ReportFormat,
    evaluator_name: Option<&str>,
) -> Result<String, ExportError> {
    match format {
        ReportFormat::Text => render_template("report.txt", TEXT_TEMPLATE, report, evaluator_name),
        ReportFormat::Markdown => {
            render_template("report.md", MARKDOWN_TEMPLATE, report, evaluator_name)
        }
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Render a Tera template with a ScoreReport.
///
/// The report fields plus `treatment_need_label` and `evaluator_name` become
/// the template context variables. Autoescaping follows Tera's rules for
/// `template_name`, so `.txt` and `.md` names render verbatim.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ScoreReport,
    evaluator_name: Option<&str>,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(TemplateContext {
        report,
        treatment_need_label: report.treatment_need.label(),
        evaluator_name,
    })
    .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
