//! Entity engine seam

use veil_core::{EntityKind, RecognizerResult};

/// Fixture used to prove a freshly built engine has a working model.
/// Must yield at least one PERSON and one LOCATION.
pub const CANARY_TEXT: &str = "John Smith lives in Seattle";

/// Analyzer + anonymizer pair backing the entity layer
pub trait EntityEngine: Send + Sync {
    /// Short identifier for logs and status output
    fn name(&self) -> &str;

    /// Detect spans of the requested kinds only
    fn analyze(&self, text: &str, entities: &[EntityKind]) -> Vec<RecognizerResult>;

    /// Replace detected spans, resolving overlaps the engine's own way
    fn anonymize(&self, text: &str, results: &[RecognizerResult]) -> String;
}

/// Reduce `results` to a non-overlapping set ordered by start.
///
/// On overlap the higher score wins, then the longer span, then the earlier one.
/// Spans that are empty, out of range or not on char boundaries are dropped.
pub fn resolve_overlaps(text: &str, results: &[RecognizerResult]) -> Vec<RecognizerResult> {
    let mut candidates: Vec<RecognizerResult> = results
        .iter()
        .filter(|r| {
            !r.is_empty()
                && r.end <= text.len()
                && text.is_char_boundary(r.start)
                && text.is_char_boundary(r.end)
        })
        .cloned()
        .collect();

    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<RecognizerResult> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        // kept is sorted and disjoint, so only the last entry can overlap
        match kept.last() {
            Some(last) if last.overlaps(&candidate) => {
                if beats(&candidate, last) {
                    kept.pop();
                    kept.push(candidate);
                }
            }
            _ => kept.push(candidate),
        }
    }

    kept
}

fn beats(candidate: &RecognizerResult, incumbent: &RecognizerResult) -> bool {
    if candidate.score != incumbent.score {
        return candidate.score > incumbent.score;
    }
    candidate.len() > incumbent.len()
}

/// Replace every span with `<KIND>`
pub fn replace_spans(text: &str, results: &[RecognizerResult]) -> String {
    let spans = resolve_overlaps(text, results);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        output.push_str(&text[cursor..span.start]);
        output.push('<');
        output.push_str(span.kind.as_str());
        output.push('>');
        cursor = span.end;
    }
    output.push_str(&text[cursor..]);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: EntityKind, start: usize, end: usize, score: f32) -> RecognizerResult {
        RecognizerResult::new(kind, start, end, score)
    }

    #[test]
    fn test_replace_disjoint_spans() {
        let text = "John Smith lives in Seattle";
        let results = vec![
            result(EntityKind::Location, 20, 27, 0.85),
            result(EntityKind::Person, 0, 10, 0.85),
        ];

        assert_eq!(replace_spans(text, &results), "<PERSON> lives in <LOCATION>");
    }

    #[test]
    fn test_higher_score_wins() {
        let text = "Paris Hilton";
        let results = vec![
            result(EntityKind::Location, 0, 5, 0.9),
            result(EntityKind::Person, 0, 12, 0.6),
        ];

        assert_eq!(replace_spans(text, &results), "<LOCATION> Hilton");
    }

    #[test]
    fn test_longer_span_wins_on_tie() {
        let text = "Paris Hilton";
        let results = vec![
            result(EntityKind::Location, 0, 5, 0.85),
            result(EntityKind::Person, 0, 12, 0.85),
        ];

        assert_eq!(replace_spans(text, &results), "<PERSON>");
    }

    #[test]
    fn test_earlier_span_wins_full_tie() {
        let text = "abcdef";
        let results = vec![
            result(EntityKind::Person, 2, 5, 0.5),
            result(EntityKind::Location, 0, 3, 0.5),
        ];

        let kept = resolve_overlaps(text, &results);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].kind, EntityKind::Location);
    }

    #[test]
    fn test_invalid_spans_dropped() {
        let text = "héllo";
        let results = vec![
            result(EntityKind::Person, 2, 3, 1.0),
            result(EntityKind::Person, 0, 99, 1.0),
            result(EntityKind::Person, 3, 3, 1.0),
        ];

        assert!(resolve_overlaps(text, &results).is_empty());
        assert_eq!(replace_spans(text, &results), text);
    }
}
