/// Two-phase document classifier.
///
/// Rules are tried strictly in catalog order and the first hit wins. For
/// each rule the filename phase runs first (token equality against the
/// rule's name tags); only if it misses does the content phase run
/// (substring search of the rule's content tags over the sampled rows).
/// Content is only consulted for spreadsheet extensions, loaded lazily,
/// and at most once per file no matter how many rules look at it.
pub mod tokens;

use crate::catalog::{DocumentTypeRule, RuleCatalog};
use crate::content::{sample_rows, FileContent, RowLimit};
use crate::model::is_spreadsheet_ext;

/// Which phases run. Both default on; frontends expose switches to
/// restrict matching to filenames or to content only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub match_names: bool,
    pub match_content: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            match_names: true,
            match_content: true,
        }
    }
}

/// How a rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOrigin {
    /// A name tag equalled a filename token.
    Filename,
    /// A content tag occurred in this sampled row.
    Content { row: String },
}

/// A successful classification: the winning rule and what matched.
#[derive(Debug)]
pub struct RuleMatch<'a> {
    pub rule: &'a DocumentTypeRule,
    pub origin: MatchOrigin,
}

/// Classify one file against the catalog.
///
/// Returns `None` when no rule matches — including every degraded case:
/// disabled phases, non-spreadsheet extensions in the content phase, lock
/// markers, and unreadable workbooks. Nothing in here fails loudly.
pub fn classify<'a>(
    catalog: &'a RuleCatalog,
    filename: &str,
    extension: &str,
    content: &FileContent<'_>,
    options: ClassifyOptions,
) -> Option<RuleMatch<'a>> {
    let filename_tokens = tokens::filename_tokens(filename);

    // Sampled lazily on the first rule that reaches the content phase,
    // then reused for every later rule. `None` = not sampled yet;
    // `Some(None)` = sampling failed (no table).
    let mut sampled: Option<Option<Vec<String>>> = None;

    for rule in catalog.rules() {
        if options.match_names
            && tokens::any_tag_matches_tokens(&filename_tokens, &rule.name_tags)
        {
            return Some(RuleMatch {
                rule,
                origin: MatchOrigin::Filename,
            });
        }

        if !options.match_content || !is_spreadsheet_ext(extension) {
            continue;
        }

        let rows = sampled
            .get_or_insert_with(|| content.table().map(|t| sample_rows(t, RowLimit::All)));
        let Some(rows) = rows else {
            continue;
        };

        let hit = rows.iter().find(|row| {
            rule.content_tags
                .iter()
                .any(|tag| row.contains(&tag.to_lowercase()))
        });
        if let Some(row) = hit {
            return Some(RuleMatch {
                rule,
                origin: MatchOrigin::Content { row: row.clone() },
            });
        }
    }

    None
}
