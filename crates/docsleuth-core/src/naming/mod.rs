/// Canonical estimate-name synthesis.
///
/// Three estimate kinds carry a naming convention: local estimates,
/// object estimates, and the summary estimate calculation. Each kind
/// owns its target phrases, its expected number shape, its name prefix,
/// and its unknown-number fallback. The synthesizer scans sampled
/// content rows for an estimate number and assembles
/// `{prefix}-{number}-{version}-(ex. {original}..)`.
use once_cell::sync::Lazy;
use regex::Regex;

/// How many leading rows are scanned for an estimate number.
pub const NUMBER_SCAN_ROWS: usize = 20;

/// Version token embedded in every synthesized name.
pub const DEFAULT_VERSION: &str = "БАЗ";

/// How many characters of the original filename survive in the
/// `(ex. ..)` suffix. Counted in characters, not bytes, so Cyrillic
/// filenames truncate cleanly.
const EX_NAME_CHARS: usize = 10;

static LOCAL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}(?:-\d{2})?$").unwrap());
static OBJECT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}(?:-\d{2})?$").unwrap());
static SUMMARY_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}$").unwrap());

/// The three spreadsheet-bearing estimate kinds that receive
/// synthesized names. Every other document type keeps its original
/// filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateKind {
    Local,
    Object,
    Summary,
}

impl EstimateKind {
    /// Maps a catalog display name onto an estimate kind,
    /// case-insensitively. Both `е` and `ё` spellings of the summary
    /// calculation are recognised.
    pub fn from_type_name(display_name: &str) -> Option<Self> {
        match display_name.to_lowercase().as_str() {
            "локальная смета" => Some(Self::Local),
            "объектная смета" => Some(Self::Object),
            "сводный сметный расчет" | "сводный сметный расчёт" => Some(Self::Summary),
            _ => None,
        }
    }

    /// Phrases that mark a row as number-bearing for this kind.
    /// Sampled rows are already lowercase, so the phrases are too.
    fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Local => &["локальн", "смета", "сметный"],
            Self::Object => &["объектн", "смета", "сметный"],
            Self::Summary => &["сводн", "смета", "сметный"],
        }
    }

    /// Shape an estimate number must have for this kind.
    fn number_pattern(self) -> &'static Regex {
        match self {
            Self::Local => &LOCAL_NUMBER,
            Self::Object => &OBJECT_NUMBER,
            Self::Summary => &SUMMARY_NUMBER,
        }
    }

    #[inline]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Local => "ЛС",
            Self::Object | Self::Summary => "ОС",
        }
    }

    /// Placeholder used when no row yields a valid number.
    #[inline]
    pub fn unknown_number(self) -> &'static str {
        match self {
            Self::Local => "??-??-??",
            Self::Object => "??-??",
            Self::Summary => "??",
        }
    }
}

/// Scans the leading sampled rows for this kind's estimate number.
///
/// A row is considered only when it contains one of the kind's phrases
/// and a `№` sign. The candidate is everything after the last `№`,
/// trimmed; the first candidate matching the kind's number shape wins.
/// A row with an unparsable candidate does not stop the scan.
pub fn extract_number(kind: EstimateKind, rows: &[String]) -> Option<String> {
    for row in rows.iter().take(NUMBER_SCAN_ROWS) {
        if !kind.phrases().iter().any(|phrase| row.contains(phrase)) {
            continue;
        }
        if !row.contains('№') {
            continue;
        }
        let candidate = row.rsplit('№').next().unwrap_or("").trim();
        if kind.number_pattern().is_match(candidate) {
            return Some(candidate.to_string());
        }
    }
    None
}

/// Builds the canonical base name (no extension) for a matched
/// estimate. `rows` are the sampled leading content rows;
/// `original_filename` survives, truncated, in the `(ex. ..)` suffix
/// so the source file stays identifiable after a rename.
pub fn synthesize(kind: EstimateKind, rows: &[String], original_filename: &str) -> String {
    let number =
        extract_number(kind, rows).unwrap_or_else(|| kind.unknown_number().to_string());
    let excerpt: String = original_filename.chars().take(EX_NAME_CHARS).collect();
    format!(
        "{}-{}-{}-(ex. {}..)",
        kind.prefix(),
        number,
        DEFAULT_VERSION,
        excerpt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampled(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    // ── Kind lookup ──────────────────────────────────────────────────────

    #[test]
    fn kind_lookup_is_case_insensitive() {
        assert_eq!(
            EstimateKind::from_type_name("Локальная смета"),
            Some(EstimateKind::Local)
        );
        assert_eq!(
            EstimateKind::from_type_name("ОБЪЕКТНАЯ СМЕТА"),
            Some(EstimateKind::Object)
        );
        assert_eq!(EstimateKind::from_type_name("Пояснительная записка"), None);
    }

    /// Both spellings of «расчёт» map to the summary kind.
    #[test]
    fn summary_kind_accepts_both_spellings() {
        assert_eq!(
            EstimateKind::from_type_name("Сводный сметный расчет"),
            Some(EstimateKind::Summary)
        );
        assert_eq!(
            EstimateKind::from_type_name("Сводный сметный расчёт"),
            Some(EstimateKind::Summary)
        );
    }

    // ── Number extraction ────────────────────────────────────────────────

    #[test]
    fn number_extraction_takes_first_valid_row() {
        let rows = sampled(&["прочее", "локальная смета №12-03-01"]);
        assert_eq!(
            extract_number(EstimateKind::Local, &rows).as_deref(),
            Some("12-03-01")
        );
    }

    /// An unparsable candidate does not stop the scan; a later valid
    /// row still wins.
    #[test]
    fn unparsable_candidate_keeps_scanning() {
        let rows = sampled(&["локальная смета №abc", "локальная смета №01-02"]);
        assert_eq!(
            extract_number(EstimateKind::Local, &rows).as_deref(),
            Some("01-02")
        );
    }

    #[test]
    fn candidate_is_taken_after_the_last_number_sign() {
        let rows = sampled(&["смета №55 раздел №12-07"]);
        assert_eq!(
            extract_number(EstimateKind::Local, &rows).as_deref(),
            Some("12-07")
        );
    }

    /// A row needs both a target phrase and a `№` sign before its tail
    /// is even considered.
    #[test]
    fn rows_missing_phrase_or_number_sign_are_ignored() {
        let rows = sampled(&["№12-03", "объектная смета без номера"]);
        assert_eq!(extract_number(EstimateKind::Object, &rows), None);
    }

    #[test]
    fn scan_stops_after_the_row_ceiling() {
        let mut rows: Vec<String> = (0..NUMBER_SCAN_ROWS).map(|_| "пусто".to_string()).collect();
        rows.push("локальная смета №12-03".to_string());
        assert_eq!(extract_number(EstimateKind::Local, &rows), None);
    }

    /// Per-kind number shapes: what parses for one kind can be invalid
    /// for another.
    #[test]
    fn number_shapes_differ_per_kind() {
        let summary = sampled(&["сводный сметный расчет №07"]);
        assert_eq!(
            extract_number(EstimateKind::Summary, &summary).as_deref(),
            Some("07")
        );

        let too_long = sampled(&["сводный сметный расчет №07-01"]);
        assert_eq!(extract_number(EstimateKind::Summary, &too_long), None);

        let object = sampled(&["объектная смета №03-02"]);
        assert_eq!(
            extract_number(EstimateKind::Object, &object).as_deref(),
            Some("03-02")
        );

        let local_short = sampled(&["локальная смета №03"]);
        assert_eq!(extract_number(EstimateKind::Local, &local_short), None);
    }

    // ── Synthesis ────────────────────────────────────────────────────────

    #[test]
    fn synthesized_name_embeds_number_version_and_origin() {
        let rows = sampled(&["прочее", "локальная смета №12-03-01"]);
        let name = synthesize(EstimateKind::Local, &rows, "myfile.xlsx");
        assert_eq!(name, "ЛС-12-03-01-БАЗ-(ex. myfile.xls..)");
    }

    #[test]
    fn missing_number_falls_back_to_placeholders() {
        assert_eq!(
            synthesize(EstimateKind::Local, &[], "смета.xlsx"),
            "ЛС-??-??-??-БАЗ-(ex. смета.xlsx..)"
        );
        assert_eq!(
            synthesize(EstimateKind::Object, &[], "смета.xlsx"),
            "ОС-??-??-БАЗ-(ex. смета.xlsx..)"
        );
        assert_eq!(
            synthesize(EstimateKind::Summary, &[], "смета.xlsx"),
            "ОС-??-БАЗ-(ex. смета.xlsx..)"
        );
    }

    /// The origin excerpt is truncated by characters, so Cyrillic
    /// filenames are never split mid-character.
    #[test]
    fn origin_excerpt_truncates_by_characters() {
        let name = synthesize(EstimateKind::Summary, &[], "сводный сметный расчет.xls");
        assert_eq!(name, "ОС-??-БАЗ-(ex. сводный см..)");
    }
}
