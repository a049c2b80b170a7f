use std::fmt::Write;

use crate::core::stats::RunStats;

/// Console summary printed after the seed file is written.
pub fn format_report(total: usize, stats: &RunStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "[*] Total questions: {total}");
    let _ = writeln!(
        out,
        "[*] Documents: {} processed, {} failed",
        stats.documents_ok, stats.documents_failed
    );

    let _ = writeln!(out, "\n[*] By category:");
    if stats.by_category.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (category, count) in stats.by_category.iter() {
        let _ = writeln!(out, "  - {category}: {count}");
    }

    let _ = writeln!(out, "\n[*] By type:");
    if stats.by_type.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (question_type, count) in stats.by_type.iter() {
        let _ = writeln!(out, "  - {question_type}: {count}");
    }

    out
}
