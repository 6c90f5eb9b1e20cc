//! Content analytics over realistic text

use seo_outline::analysis::health::{self, Readability};
use seo_outline::analysis::metadata::{self, TitleTemplate};
use seo_outline::analysis::semantic;
use seo_outline::annotation::UnicodeAnnotator;

fn kws(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_short_and_long_sentence_mix() {
    let repeated = vec!["repeated"; 14].join(" ");
    let text = format!(
        "Short. This is a longer sentence with many more than twenty five words {repeated}."
    );
    let report = health::analyze(&text);

    assert_eq!(report.sentence_count, 2);
    assert_eq!(report.word_count, 27);
    assert_eq!(report.long_sentences, 1);
    assert_eq!(report.average_sentence_length, 13.5);
    assert_eq!(report.readability, Readability::NeedsImprovement);
}

#[test]
fn test_twenty_two_word_sentence_is_not_long() {
    let text = "Short. This is a longer sentence with many more than twenty five words repeated \
                repeated repeated repeated repeated repeated repeated repeated repeated repeated.";
    let report = health::analyze(text);

    assert_eq!(report.long_sentences, 0);
    assert_eq!(report.average_sentence_length, 11.5);
    assert_eq!(report.readability, Readability::NeedsImprovement);
}

#[test]
fn test_empty_text_average_is_zero() {
    for text in ["", "   ", "...!?"] {
        let report = health::analyze(text);
        assert_eq!(report.average_sentence_length, 0.0, "text {text:?}");
        assert_eq!(report.sentence_count, 0);
    }
}

#[test]
fn test_short_description_is_the_text() {
    let text = "Search engine optimization helps pages rank.\nIt rewards clear structure.";
    let meta = metadata::generate(text, &kws(&["SEO"]), &TitleTemplate::default());

    assert_eq!(meta.meta_description, text);
    assert!(!meta.meta_description.ends_with("..."));
    assert_eq!(meta.meta_title, "SEO | comprehensive guide");
    assert_eq!(meta.tags, kws(&["SEO"]));
}

#[test]
fn test_related_terms_for_arabic_text() {
    let text = "تحسين محركات البحث مهم للمواقع. تحسين المحتوى يجذب الزوار. الطقس جميل اليوم.";
    let annotator = UnicodeAnnotator::for_language("ar");
    let relations = semantic::extract(text, &kws(&["تحسين"]), &annotator);

    let related = &relations["تحسين"];
    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|t| t.count == 1));
    assert_eq!(related[0].term, "محركات");
    assert!(related.iter().all(|t| t.term != "الطقس"));
}

#[test]
fn test_keywords_missing_from_text_are_omitted() {
    let annotator = UnicodeAnnotator::for_language("en");
    let relations = semantic::extract(
        "Rust makes fast tools. Tools need tests.",
        &kws(&["Rust", "Python"]),
        &annotator,
    );
    assert!(relations.contains_key("Rust"));
    assert!(!relations.contains_key("Python"));
}
