//! Plain-text report layout

use crate::core::models::TranslationReport;

/// Original, translation and gloss sections, in that order
pub fn render_report(report: &TranslationReport) -> String {
    let source = report.pair.source.display_name();
    let target = report.pair.target.display_name();

    format!(
        "Original ({}): {}\nTranslated ({}): {}\nWord-by-word Explanation (to {}):\n{}\n",
        source,
        report.original,
        target,
        report.translation.text(),
        target,
        report.gloss.render()
    )
}
