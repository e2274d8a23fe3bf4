//! End-to-end pipeline scenarios: sampling, fallback charts and mode selection.

use std::collections::HashSet;

use social_cloud_core::analyzer::Analyzer;
use social_cloud_core::color::ColorScheme;
use social_cloud_core::config::{AppConfig, RenderConfig};
use social_cloud_core::platform::Platform;
use social_cloud_core::render::{select_renderer, FallbackRenderer, RenderMode, Renderer, Visual};
use social_cloud_core::sampler::WordSampler;
use social_cloud_core::vocabulary::Vocabulary;

const FACEBOOK_FINANCE: [&str; 17] = [
    "finance", "market", "growth", "trend", "analysis", "economy", "investment", "data", "future",
    "business", "strategy", "global", "technology", "community", "group", "share", "people",
];

#[test]
fn finance_on_facebook_falls_back_to_a_sorted_chart() {
    let vocabulary = Vocabulary::default();
    let words = WordSampler::new().sample(&vocabulary, "finance", Platform::Facebook, 500);

    assert_eq!(words.len(), 500);
    let allowed: HashSet<&str> = FACEBOOK_FINANCE.into_iter().collect();
    assert!(words.iter().all(|w| allowed.contains(w.as_str())));

    let visual = FallbackRenderer::default().render(&words, "Facebook WordCloud - finance", ColorScheme::Blues);
    let Visual::Chart(chart) = visual else {
        panic!("expected a chart");
    };
    assert!(chart.bars.len() <= 20);
    assert!(!chart.bars.is_empty());
    assert!(chart.bars.windows(2).all(|pair| pair[0].count >= pair[1].count));
    assert_eq!(chart.bars.iter().map(|b| b.count).sum::<usize>(), 500);
}

#[test]
fn zero_words_render_an_empty_chart() {
    let words = WordSampler::new().sample(&Vocabulary::default(), "finance", Platform::Reddit, 0);
    assert!(words.is_empty());

    let visual = FallbackRenderer::default().render(&words, "empty", ColorScheme::Oranges);
    match visual {
        Visual::Chart(chart) => assert!(chart.bars.is_empty()),
        Visual::Cloud(_) => panic!("expected a chart"),
    }
}

#[test]
fn fallback_ordering_is_idempotent() {
    let words = WordSampler::seeded(99).sample(&Vocabulary::default(), "finance", Platform::Twitter, 500);
    let renderer = FallbackRenderer::default();
    let first = renderer.render(&words, "T", ColorScheme::Cool);
    let second = renderer.render(&words, "T", ColorScheme::Cool);
    assert_eq!(first, second);
}

#[test]
fn unavailable_capability_drives_the_whole_analyzer_into_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let render = RenderConfig { font_path: Some(dir.path().join("none.ttf")), ..RenderConfig::default() };
    let (renderer, capability) = select_renderer(&render);
    assert_eq!(capability.mode, RenderMode::Fallback);

    let mut analyzer = Analyzer::new(Vocabulary::default(), WordSampler::seeded(1), renderer);
    let panels = analyzer.analyze("");
    assert_eq!(panels.len(), 3);
    assert!(panels.iter().all(|p| p.visual.mode() == RenderMode::Fallback));
    assert!(panels.iter().all(|p| p.title.ends_with("WordCloud - ")));
}

#[test]
fn configured_vocabulary_feeds_the_sampler() {
    let dir = tempfile::tempdir().unwrap();
    let vocabulary_path = dir.path().join("vocabulary.json");
    std::fs::write(
        &vocabulary_path,
        r#"{"generic": ["alpha"], "platforms": {"Twitter": ["beta"]}}"#,
    )
    .unwrap();
    let config_path = dir.path().join("social-cloud.json");
    std::fs::write(
        &config_path,
        format!(r#"{{"word_limit": 40, "vocabulary": {:?}}}"#, vocabulary_path.display().to_string()),
    )
    .unwrap();

    let config = AppConfig::load_or_default(&config_path).unwrap();
    let vocabulary = config.load_vocabulary().unwrap();
    let mut analyzer = Analyzer::new(vocabulary, WordSampler::seeded(3), Box::new(FallbackRenderer::default()))
        .with_word_limit(config.word_limit);

    let words = analyzer.sample("topic", Platform::Twitter);
    assert_eq!(words.len(), 40);
    assert!(words.iter().all(|w| ["topic", "alpha", "beta"].contains(&w.as_str())));
}
