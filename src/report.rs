//! Plain-text rendering of traces and metrics.

use std::fmt::{self, Display, Write};

use crate::pool::{Metrics, Step, Trace};

const RULE_WIDTH: usize = 65;

/// Frame cells, e.g. `[ 1 ] [ 2 ] [ - ]`.
pub fn format_frames<P: Display>(frames: &[Option<P>]) -> String {
    frames
        .iter()
        .map(|frame| match frame {
            Some(page) => format!("[{:^3}]", page.to_string()),
            None => "[ - ]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One table row for the step at `index` (0-based, printed 1-based).
pub fn format_step<P: Display>(index: usize, step: &Step<P>) -> String {
    let evicted = step
        .evicted
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);

    format!(
        "{:<6}{:<8}{:<35}{:<8}{}",
        index + 1,
        step.page.to_string(),
        format_frames(&step.frames),
        if step.hit { "Hit" } else { "Miss" },
        evicted
    )
}

/// Full step table: header, one row per step, and the summary block.
///
/// # Example
/// ```
/// use pagesim::{report, simulate, Policy};
///
/// let trace = simulate(&[1, 2, 1], 2, Policy::Lru).unwrap();
/// let table = report::render_table(&trace);
/// assert!(table.contains("Algorithm: LRU | Frames: 2"));
/// assert!(table.contains("Hit Ratio      : 33.33%"));
/// ```
pub fn render_table<P: Display>(trace: &Trace<P>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_table(&mut out, trace);
    out
}

fn write_table<P: Display>(out: &mut String, trace: &Trace<P>) -> fmt::Result {
    writeln!(out, "Algorithm: {} | Frames: {}", trace.policy(), trace.capacity())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<6}{:<8}{:<35}{:<8}{}",
        "Step", "Page", "Frames", "Result", "Evicted"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for (index, step) in trace.iter().enumerate() {
        writeln!(out, "{}", format_step(index, step))?;
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    out.push_str(&render_summary(&trace.metrics()));
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Totals block printed under a table.
pub fn render_summary(metrics: &Metrics) -> String {
    format!(
        "Total Accesses : {}\nHits           : {}\nMisses         : {}\nHit Ratio      : {:.2}%\n",
        metrics.total(),
        metrics.hits,
        metrics.misses,
        metrics.hit_ratio * 100.0
    )
}

/// One summary row per trace, for side-by-side comparison.
pub fn render_comparison<P>(traces: &[Trace<P>]) -> String {
    let mut out = format!(
        "{:<10}{:>8}{:>8}{:>11}{:>11}\n",
        "Policy", "Hits", "Misses", "Evictions", "Hit Ratio"
    );
    out.push_str(&"-".repeat(48));
    out.push('\n');

    for trace in traces {
        let metrics = trace.metrics();
        out.push_str(&format!(
            "{:<10}{:>8}{:>8}{:>11}{:>10.2}%\n",
            trace.policy(),
            metrics.hits,
            metrics.misses,
            metrics.evictions,
            metrics.hit_ratio * 100.0
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{simulate, Policy};

    #[test]
    fn test_format_frames() {
        assert_eq!(format_frames(&[Some(1), None, Some(54)]), "[ 1 ] [ - ] [54 ]");
        assert_eq!(format_frames::<u32>(&[]), "");
    }

    #[test]
    fn test_format_step() {
        let step = Step {
            page: 4,
            frames: vec![Some(4), Some(2), Some(3)],
            hit: false,
            evicted: Some(1),
        };
        let row = format_step(3, &step);

        assert!(row.starts_with("4     4       [ 4 ] [ 2 ] [ 3 ]"));
        assert!(row.contains("Miss"));
        assert!(row.ends_with('1'));
    }

    #[test]
    fn test_render_table_rows() {
        let trace = simulate(&[1, 2, 3, 4], 3, Policy::Fifo).unwrap();
        let table = render_table(&trace);

        assert!(table.starts_with("Algorithm: FIFO | Frames: 3\n"));
        // Every row is a miss; the summary "Misses" line does not match
        assert_eq!(table.lines().filter(|l| l.contains("Miss ")).count(), 4);
        assert!(table.contains("Total Accesses : 4"));
        assert!(table.contains("Hit Ratio      : 0.00%"));
    }

    #[test]
    fn test_render_summary() {
        let trace = simulate(&[1, 1, 1, 2], 2, Policy::Lru).unwrap();
        let summary = render_summary(&trace.metrics());

        assert_eq!(
            summary,
            "Total Accesses : 4\nHits           : 2\nMisses         : 2\nHit Ratio      : 50.00%\n"
        );
    }

    #[test]
    fn test_render_comparison() {
        let traces: Vec<_> = Policy::ALL
            .iter()
            .map(|&policy| simulate(&[1, 2, 3, 1], 2, policy).unwrap())
            .collect();
        let out = render_comparison(&traces);

        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("FIFO"));
        assert!(out.contains("Optimal"));
    }
}
