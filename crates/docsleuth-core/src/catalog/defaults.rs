/// Built-in default catalog — the starting point when no catalog file
/// exists yet, and the fallback when an existing file cannot be parsed.
///
/// Entry order matters: it is the classification precedence order.
use super::rule::DocumentTypeRule;
use super::RuleCatalog;

/// Build the default rule catalog.
///
/// The three estimate types (local, object, summary) are the ones the name
/// synthesizer understands; the explanatory note is a plain recognised type
/// with no synthesized name. Name tags carry the common Latin-с look-alike
/// misspellings seen in real archives.
pub fn default_catalog() -> RuleCatalog {
    let rules = vec![
        rule(
            "1",
            "Локальная смета",
            &["локальная смета", "лс", "лc"],
            &["локальная смета"],
            "ЛС-ГС-ПНо-ПНл-ВЕРНН-КОММ",
        ),
        rule(
            "2",
            "Объектная смета",
            &["объектная смета", "ос", "оc"],
            &["объектная смета"],
            "ОС-ГС-ПНо-ВЕРНН-КОММ",
        ),
        rule(
            "3",
            "Сводный сметный расчет",
            &["сводный сметный расчет", "сср"],
            &["сводный сметный расчет", "сводный сметный расчёт"],
            "ОС-ГС-ВЕРНН-КОММ",
        ),
        rule(
            "4",
            "Пояснительная записка",
            &["пояснительная записка", "пз"],
            &["пояснительная записка"],
            "ПЗ-ГС-ВЕРНН",
        ),
    ];
    RuleCatalog::new(rules)
}

fn rule(
    id: &str,
    display_name: &str,
    name_tags: &[&str],
    content_tags: &[&str],
    mask: &str,
) -> DocumentTypeRule {
    DocumentTypeRule {
        id: id.to_string(),
        display_name: display_name.to_string(),
        name_tags: name_tags.iter().map(|t| t.to_string()).collect(),
        content_tags: content_tags.iter().map(|t| t.to_string()).collect(),
        mask: mask.to_string(),
    }
}
