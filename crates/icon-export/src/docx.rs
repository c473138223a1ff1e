use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow,
};

use icon_core::models::report::ScoreReport;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document for a score report.
///
/// Layout:
/// - title, and the evaluator when known
/// - component table (one row per report line)
/// - total score and treatment need, each in their configured colour
/// - interpretation, with `- ` lines rendered as bullets
pub fn generate_docx(
    report: &ScoreReport,
    styles: &DocumentStyles,
    evaluator_name: Option<&str>,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    docx = docx.add_paragraph(heading_paragraph("ICON Assessment", "Heading1", styles));
    if let Some(name) = evaluator_name {
        docx = docx.add_paragraph(body_paragraph(&format!("Evaluator: {name}"), styles));
    }

    docx = docx
        .add_paragraph(heading_paragraph("Component Scores", "Heading2", styles))
        .add_table(component_table(report, styles));

    docx = docx
        .add_paragraph(heading_paragraph("Total ICON Score", "Heading2", styles))
        .add_paragraph(emphasis_paragraph(
            &format!("{} points", report.total_score),
            &styles.score_color,
            styles,
        ))
        .add_paragraph(heading_paragraph(
            "Treatment Need Assessment",
            "Heading2",
            styles,
        ))
        .add_paragraph(emphasis_paragraph(
            report.treatment_need.label(),
            &styles.need_color,
            styles,
        ))
        .add_paragraph(heading_paragraph("Interpretation", "Heading2", styles));

    for line in report.interpretation_text.lines() {
        let paragraph = match line.trim().strip_prefix("- ") {
            Some(item) => body_paragraph(&format!("\u{2022} {item}"), styles),
            None => body_paragraph(line.trim(), styles),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(
        bytes = buf.get_ref().len(),
        lines = report.component_scores.len(),
        "generated DOCX report"
    );
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(text, styles))
}

fn emphasis_paragraph(text: &str, color: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(text, styles).bold().color(color))
}

fn component_table(report: &ScoreReport, styles: &DocumentStyles) -> Table {
    let header = TableRow::new(vec![
        cell(Run::new().add_text("Component").bold()),
        cell(Run::new().add_text("Points").bold()),
    ]);

    let mut rows = vec![header];
    for line in &report.component_scores {
        rows.push(TableRow::new(vec![
            cell(body_run(&line.label, styles)),
            cell(body_run(&line.points.to_string(), styles)),
        ]));
    }
    Table::new(rows)
}

fn cell(run: Run) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}
