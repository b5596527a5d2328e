//! Writing the summary CSV.
//!
//! Output is semicolon-delimited with `"` quoting under the minimal
//! quoting rule: a field is quoted only when it contains the delimiter,
//! the quote character, or a line break, and embedded quotes are doubled.
//! One header row, one data row, CRLF line endings, written beside the
//! discovered action log. The output is fully determined by the log, so
//! re-running on an unmodified run directory reproduces it byte for byte.

use std::fs;
use std::path::Path;

use crate::error::ReportError;
use crate::summary::SummaryRow;

/// Filename of the summary, placed next to the action log.
pub const OUTPUT_FILE_NAME: &str = "output.csv";

const DELIMITER: char = ';';
const QUOTE: char = '"';
const LINE_TERMINATOR: &str = "\r\n";

/// Output column order.
const COLUMNS: [&str; 30] = [
    "completeness",
    "score",
    "no_ticks",
    "agent_actions",
    "human_actions",
    "shelter1",
    "shelter2",
    "shelter3",
    "idle1",
    "idle2",
    "idle3",
    "idle4",
    "human_sent_messages_nr1",
    "human_sent_messages_nr2",
    "human_sent_messages_nr3",
    "human_sent_messages_nr4",
    "agent_sent_messages_nr1",
    "agent_sent_messages_nr2",
    "agent_sent_messages_nr3",
    "agent_sent_messages_nr4",
    "number_joint_1",
    "number_joint_2",
    "number_joint_3",
    "number_joint_4",
    "number_alone_1",
    "number_alone_2",
    "number_alone_3",
    "number_alone_4",
    "joint",
    "indiv",
];

/// Write the summary row (with its header) to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be written.
pub fn write_summary(path: &Path, row: &SummaryRow) -> Result<(), ReportError> {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(";"));
    out.push_str(LINE_TERMINATOR);

    let encoded: Vec<String> = data_fields(row).iter().map(|f| encode_field(f)).collect();
    out.push_str(&encoded.join(";"));
    out.push_str(LINE_TERMINATOR);

    fs::write(path, out)?;
    Ok(())
}

/// The data row's fields, in [`COLUMNS`] order.
fn data_fields(row: &SummaryRow) -> Vec<String> {
    let mut fields = vec![
        row.completeness.clone(),
        row.score.clone(),
        row.no_ticks.clone(),
        row.agent_actions.to_string(),
        row.human_actions.to_string(),
    ];
    fields.extend(row.shelter.iter().map(ToString::to_string));
    fields.extend(row.idle.iter().map(|ratio| format!("{ratio:.2}")));
    fields.extend(row.human_messages.iter().map(ToString::to_string));
    fields.extend(row.agent_messages.iter().map(ToString::to_string));
    fields.extend(row.joint_per_quarter.iter().map(ToString::to_string));
    fields.extend(row.solo_per_quarter.iter().map(ToString::to_string));
    fields.push(format_pairs(&row.joint_pairs));
    fields.push(format_pairs(&row.solo_pairs));
    fields
}

/// Render a sustained-pair list the way the downstream analysis tooling
/// expects it: `[['Action', 'target'], ...]`.
fn format_pairs(pairs: &[(String, String)]) -> String {
    let rendered: Vec<String> = pairs
        .iter()
        .map(|(action, target)| format!("['{action}', '{target}']"))
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// Minimal quoting: quote only when the field needs it.
fn encode_field(field: &str) -> String {
    let needs_quoting = field.contains(DELIMITER)
        || field.contains(QUOTE)
        || field.contains('\n')
        || field.contains('\r');
    if needs_quoting {
        format!("{QUOTE}{}{QUOTE}", field.replace(QUOTE, "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    use crate::discover::find_action_log;
    use crate::summary::summarize_log;

    use super::*;

    static UNIQUE: AtomicU64 = AtomicU64::new(0);

    fn temp_root(prefix: &str) -> PathBuf {
        let unique = UNIQUE.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        std::env::temp_dir().join(format!("gridsar-writer-{prefix}-{pid}-{unique}"))
    }

    #[test]
    fn plain_fields_stay_unquoted() {
        assert_eq!(encode_field("0.45"), "0.45");
        assert_eq!(encode_field("[['CarryObject', 'obj_3']]"), "[['CarryObject', 'obj_3']]");
    }

    #[test]
    fn delimiter_and_quote_force_quoting() {
        assert_eq!(encode_field("a;b"), "\"a;b\"");
        assert_eq!(encode_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn pair_list_rendering() {
        assert_eq!(format_pairs(&[]), "[]");
        let pairs = vec![
            ("CarryObjectTogether".to_owned(), "obj_7".to_owned()),
            ("Drop".to_owned(), "(2, 2)".to_owned()),
        ];
        assert_eq!(
            format_pairs(&pairs),
            "[['CarryObjectTogether', 'obj_7'], ['Drop', '(2, 2)']]"
        );
    }

    // -----------------------------------------------------------------------
    // End to end: discover, summarize, write, repeat
    // -----------------------------------------------------------------------

    const HEADER: &str = "agent_location;human_location;agent_action;agent_action_target;human_action;human_action_target;human_sent_messages;agent_sent_messages;score;tick_nr;completeness";

    fn fixture_log() -> String {
        let mut lines = vec![HEADER.to_owned()];
        for tick in 1..=10_u64 {
            let human_action = if tick == 2 { "MoveNorth" } else { "CarryObjectTogether" };
            let human_target = if tick == 2 { "(2, 2)" } else { "mild_victim_1" };
            lines.push(format!(
                "(0, 0);(5, 5);Idle;;{human_action};{human_target};1;1;55;{tick};0.4"
            ));
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    #[test]
    fn rerunning_an_unmodified_log_is_byte_identical() {
        let root = temp_root("idempotent");
        let world = root.join("session_1").join("run_1").join("world_1");
        let _ = fs::create_dir_all(&world);
        let _ = fs::write(world.join("action_log.csv"), fixture_log());

        let log = find_action_log(&root).unwrap();
        let out = log.with_file_name(OUTPUT_FILE_NAME);

        let row = summarize_log(&log).unwrap();
        write_summary(&out, &row).unwrap();
        let first = fs::read(&out).unwrap();

        let _ = fs::remove_file(&out);

        let row = summarize_log(&log).unwrap();
        write_summary(&out, &row).unwrap();
        let second = fs::read(&out).unwrap();

        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        assert!(text.starts_with("completeness;score;no_ticks;"));
        // One header row, one data row.
        assert_eq!(text.matches(LINE_TERMINATOR).count(), 2);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn data_row_matches_the_column_count() {
        let row = SummaryRow {
            completeness: "0.4".to_owned(),
            score: "55".to_owned(),
            no_ticks: "10".to_owned(),
            agent_actions: 1,
            human_actions: 2,
            shelter: [true, true, false],
            idle: [0.5, 0.0, 0.0, 0.0],
            human_messages: [10, 0, 0, 0],
            agent_messages: [10, 0, 0, 0],
            joint_per_quarter: [1, 0, 0, 0],
            solo_per_quarter: [0, 0, 0, 0],
            joint_pairs: vec![("CarryObjectTogether".to_owned(), "mild_victim_1".to_owned())],
            solo_pairs: Vec::new(),
        };
        assert_eq!(data_fields(&row).len(), COLUMNS.len());
    }
}
