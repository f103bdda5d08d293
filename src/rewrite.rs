use crate::catalog;
use crate::error::Result;
use crate::fs_utils::read_file_contents;
use regex::{Captures, Regex};
use std::path::Path;

/// Pattern for the malformed `benefitsHtml` fragments a buggy generator run
/// left behind (an empty `style=""` div, dropped in the middle of the
/// instructor object). Leading whitespace is part of the match so deletion
/// does not leave a blank line.
const MALFORMED_BLOCK: &str = r#"\s+benefitsHtml: `<div style=""[^`]*`"#;

/// Pattern for a record boundary missing its separator comma: the instructor
/// `description` field, the instructor's closing brace, the record's closing
/// brace, then the next record's opening brace with nothing but whitespace in
/// between.
const MISSING_SEPARATOR: &str = r#"(description: `[^`]+`)\s+\}\s+\}\s+\{"#;

/// Configuration for a patch run
#[derive(Debug, Clone)]
pub struct PatchConfig {
    /// Whether to run the benefits-insertion pass after the cleanup passes
    pub insert_benefits: bool,
    /// (course code, template body) pairs, applied in order
    pub rules: Vec<(String, String)>,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            insert_benefits: true,
            rules: catalog::ASSIGNMENTS
                .iter()
                .map(|(code, category)| ((*code).to_string(), category.template().to_string()))
                .collect(),
        }
    }
}

/// A course record located in the buffer
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRef {
    /// The course code carried by the record
    pub course_code: String,
    /// Starting byte position of the `courseCode` field
    pub start: usize,
    /// Ending byte position of the `courseCode` field
    pub end: usize,
    /// Whether a `benefitsHtml` field already appears before the next record
    pub has_benefits: bool,
}

/// Result of a full patch run over one buffer
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    /// The rewritten buffer
    pub content: String,
    /// Number of malformed `benefitsHtml` fragments deleted
    pub malformed_removed: usize,
    /// Number of record-separator commas inserted
    pub separators_added: usize,
    /// Course codes that received a benefits template
    pub benefits_inserted: Vec<String>,
}

/// Deletes every malformed `benefitsHtml` fragment from the buffer.
///
/// Returns the rewritten buffer and the number of fragments removed. A buffer
/// with no fragments comes back byte-identical.
///
/// # Errors
///
/// Returns `PatchError::Regex` if the pattern fails to compile.
pub fn remove_malformed_blocks(buffer: &str) -> Result<(String, usize)> {
    let pattern = Regex::new(MALFORMED_BLOCK)?;
    let count = pattern.find_iter(buffer).count();
    Ok((pattern.replace_all(buffer, "").into_owned(), count))
}

/// Inserts the separator comma at every record boundary that lost it.
///
/// Pure text substitution; the surrounding structure is not parsed or
/// validated.
///
/// # Errors
///
/// Returns `PatchError::Regex` if the pattern fails to compile.
pub fn normalize_record_separators(buffer: &str) -> Result<(String, usize)> {
    let pattern = Regex::new(MISSING_SEPARATOR)?;
    let count = pattern.find_iter(buffer).count();
    let fixed = pattern.replace_all(buffer, |caps: &Captures| {
        format!("{}\n    }}\n  }},\n  {{", &caps[1])
    });
    Ok((fixed.into_owned(), count))
}

/// Splices `template` into the record carrying `course_code`, after the
/// instructor block and before the record's closing brace.
///
/// The match is anchored on the literal course code followed (non-greedily,
/// across lines) by the `description` field and the record's doubled-brace
/// terminator. Records whose terminator has already been rewritten no longer
/// match, and a course code absent from the buffer yields the buffer
/// unchanged with a count of 0; neither case is an error.
///
/// Known limitation: because the span between anchor and terminator is a
/// non-greedy scan rather than a structural parse, a buffer that repeats the
/// terminator token in unexpected places can produce a match spanning more
/// than one record.
///
/// # Errors
///
/// Returns `PatchError::Regex` if the pattern fails to compile.
pub fn insert_benefits(
    buffer: &str,
    course_code: &str,
    template: &str,
) -> Result<(String, usize)> {
    let anchor = format!(
        r#"(?s)(courseCode: '{}'.*?description: `[^`]+`\s+\}})\s+\}}\}}(,?)"#,
        regex::escape(course_code)
    );
    let pattern = Regex::new(&anchor)?;
    let count = pattern.find_iter(buffer).count();
    let patched = pattern.replace_all(buffer, |caps: &Captures| {
        format!("{}\n    }},\n    {}\n  }}{}", &caps[1], template, &caps[2])
    });
    Ok((patched.into_owned(), count))
}

/// Runs the full patch pipeline over one buffer: fragment removal, separator
/// normalization, then one insertion per configured rule in listed order.
/// Later insertions do not re-validate earlier ones.
///
/// # Errors
///
/// Returns errors from the individual passes (pattern compilation only).
pub fn apply_patches(buffer: &str, config: &PatchConfig) -> Result<PatchOutcome> {
    let (content, malformed_removed) = remove_malformed_blocks(buffer)?;
    let (mut content, separators_added) = normalize_record_separators(&content)?;

    let mut benefits_inserted = Vec::new();
    if config.insert_benefits {
        for (course_code, template) in &config.rules {
            let (next, count) = insert_benefits(&content, course_code, template)?;
            if count > 0 {
                benefits_inserted.push(course_code.clone());
            }
            content = next;
        }
    }

    Ok(PatchOutcome {
        content,
        malformed_removed,
        separators_added,
        benefits_inserted,
    })
}

/// Finds all course records in the given buffer
///
/// # Errors
///
/// Returns `PatchError::Regex` if there's an error compiling the regex pattern.
pub fn find_records(buffer: &str) -> Result<Vec<RecordRef>> {
    let pattern = Regex::new(r"courseCode:\s*'([^']+)'")?;
    let mut anchors = Vec::new();

    for capture in pattern.captures_iter(buffer) {
        if let Some(full_match) = capture.get(0)
            && let Some(code_match) = capture.get(1)
        {
            anchors.push((
                full_match.start(),
                full_match.end(),
                code_match.as_str().to_string(),
            ));
        }
    }

    let mut records = Vec::new();
    for (i, (start, end, course_code)) in anchors.iter().enumerate() {
        // The record's remaining fields run up to the next anchor (or EOF).
        let scope_end = anchors.get(i + 1).map_or(buffer.len(), |next| next.0);
        records.push(RecordRef {
            course_code: course_code.clone(),
            start: *start,
            end: *end,
            has_benefits: buffer[*end..scope_end].contains("benefitsHtml"),
        });
    }

    Ok(records)
}

/// Reads a data file and runs the full patch pipeline over its contents.
/// Writing the result back is the caller's job.
///
/// # Errors
///
/// - `PatchError::FileNotFound` if the data file doesn't exist.
/// - Other errors from `read_file_contents` or `apply_patches`.
pub fn patch_file(path: &Path, config: &PatchConfig) -> Result<PatchOutcome> {
    let buffer = read_file_contents(path)?;
    apply_patches(&buffer, config)
}

#[cfg(test)]
#[allow(unused)]
const _: () = {};
