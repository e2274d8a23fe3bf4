use std::path::PathBuf;

use social_cloud_core::analyzer::Analyzer;
use social_cloud_core::config::{AppConfig, DEFAULT_CONFIG_FILE};
use social_cloud_core::io::{build_output_path, save_png};
use social_cloud_core::render::{select_renderer, Visual};
use social_cloud_core::sampler::WordSampler;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Topic is the first argument, "finance" by default
    let topic = std::env::args().nth(1).unwrap_or_else(|| "finance".to_owned());

    // Load ./social-cloud.json if present, defaults otherwise
    let config = AppConfig::load_or_default(DEFAULT_CONFIG_FILE)?;

    // The capability probe runs once: it decides between word clouds
    // and frequency charts for the whole run
    let (renderer, capability) = select_renderer(&config.render);
    println!("Render mode: {}", capability.mode);
    if let Some(reason) = &capability.reason {
        println!("Word clouds unavailable: {}", reason);
    }

    // Words are sampled per platform from the configured vocabulary
    let mut analyzer = Analyzer::new(config.load_vocabulary()?, WordSampler::new(), renderer)
        .with_word_limit(config.word_limit);

    // Images land in ./out, created on first write
    let output_folder = PathBuf::from("out");
    for panel in analyzer.analyze(&topic) {
        println!();
        println!("✅ {}", panel.status());
        println!("{}", panel.title);

        match &panel.visual {
            Visual::Cloud(cloud) => {
                let path = build_output_path(&output_folder, panel.platform.name(), "png")?;
                save_png(&cloud.image, &path)?;
                println!("Word cloud written to {}", path.display());
            }
            Visual::Chart(chart) => {
                print!("{}", chart.to_text(40));
            }
        }

        if let Some(notice) = panel.visual.notice() {
            println!("⚠ {}", notice);
        }
    }

    Ok(())
}
