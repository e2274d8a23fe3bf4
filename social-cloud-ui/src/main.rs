use eframe::{egui, Frame};
use egui::{Align2, Color32, ColorImage, Context, FontId, Sense, TextureHandle, TextureOptions};

use social_cloud_core::analyzer::{Analyzer, Panel};
use social_cloud_core::config::{AppConfig, DEFAULT_CONFIG_FILE};
use social_cloud_core::platform::Platform;
use social_cloud_core::render::{select_renderer, BarChart, Capability, RenderMode, Visual};
use social_cloud_core::sampler::WordSampler;

/// Default bar color of the fallback chart.
const BAR_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

/// Height of one bar row in the fallback chart.
const BAR_ROW_HEIGHT: f32 = 22.0;

/// A rendered panel plus its uploaded texture (clouds only).
struct PanelView {
    panel: Panel,
    texture: Option<TextureHandle>,
}

/// Global UI state (MUST persist between frames in egui).
struct AnalyzerUI {
    analyzer: Analyzer,
    capability: Capability,

    topic: String,
    /// Topic the current panels were generated for.
    analyzed_topic: Option<String>,
    selected: Platform,
    panels: Vec<PanelView>,
}

impl AnalyzerUI {
    /// Builds the pipeline once: the renderer is probed here and kept for
    /// the whole session.
    fn new(config: AppConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let vocabulary = config
            .load_vocabulary()
            .map_err(|e| e.to_string())?;
        let (renderer, capability) = select_renderer(&config.render);
        let analyzer = Analyzer::new(vocabulary, WordSampler::new(), renderer)
            .with_word_limit(config.word_limit);

        Ok(Self {
            analyzer,
            capability,
            topic: "finance".to_owned(),
            analyzed_topic: None,
            selected: Platform::Facebook,
            panels: Vec::new(),
        })
    }

    /// Re-runs the whole pipeline for the current topic.
    fn regenerate(&mut self, ctx: &Context) {
        self.panels = self
            .analyzer
            .analyze(&self.topic)
            .into_iter()
            .map(|panel| {
                let texture = match &panel.visual {
                    Visual::Cloud(cloud) => {
                        let size = [cloud.image.width() as usize, cloud.image.height() as usize];
                        let image = ColorImage::from_rgba_unmultiplied(size, cloud.image.as_raw());
                        Some(ctx.load_texture(panel.title.clone(), image, TextureOptions::LINEAR))
                    }
                    Visual::Chart(_) => None,
                };
                PanelView { panel, texture }
            })
            .collect();
        self.analyzed_topic = Some(self.topic.clone());
    }

    /// Sidebar with the topic input.
    fn controls(&mut self, ui: &mut egui::Ui) -> bool {
        ui.heading("🔧 Controls");
        ui.separator();

        ui.label("Enter Topic");
        ui.text_edit_singleline(&mut self.topic);

        ui.add_space(8.0);
        ui.colored_label(
            Color32::DARK_GREEN,
            format!("{} words per platform", self.analyzer.word_limit()),
        );

        if self.capability.mode == RenderMode::Fallback {
            ui.add_space(8.0);
            let reason = self.capability.reason.as_deref().unwrap_or("unknown reason");
            ui.small(format!("Word clouds disabled: {reason}"));
        }

        ui.add_space(8.0);
        ui.button("Regenerate").clicked()
    }

    fn show_panel(ui: &mut egui::Ui, view: &PanelView) {
        ui.colored_label(Color32::DARK_GREEN, format!("✅ {}", view.panel.status()));
        ui.heading(&view.panel.title);

        match (&view.panel.visual, &view.texture) {
            (Visual::Cloud(_), Some(texture)) => {
                ui.add(
                    egui::Image::new(texture)
                        .max_width(ui.available_width())
                        .maintain_aspect_ratio(true),
                );
            }
            (Visual::Chart(chart), _) => {
                show_chart(ui, chart);
                if let Some(notice) = view.panel.visual.notice() {
                    ui.colored_label(Color32::from_rgb(200, 130, 0), format!("⚠ {notice}"));
                }
            }
            (Visual::Cloud(_), None) => {
                ui.label("Image not loaded");
            }
        }
    }
}

/// Paints a horizontal bar chart, first bar at the top.
///
/// An empty chart still reserves its title row and draws nothing else.
fn show_chart(ui: &mut egui::Ui, chart: &BarChart) {
    ui.label(egui::RichText::new(&chart.chart_title).strong());

    let width = ui.available_width().max(200.0);
    let height = BAR_ROW_HEIGHT * chart.bars.len() as f32;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    let painter = ui.painter_at(rect);

    let label_width = (width * 0.25).min(160.0);
    let bar_area = (rect.width() - label_width - 48.0).max(1.0);
    let max = chart.max_count().max(1) as f32;
    let text_color = ui.visuals().text_color();

    for (row, bar) in chart.bars.iter().enumerate() {
        let top = rect.top() + row as f32 * BAR_ROW_HEIGHT;
        let center_y = top + BAR_ROW_HEIGHT / 2.0;
        let left = rect.left() + label_width;

        painter.text(
            egui::pos2(left - 6.0, center_y),
            Align2::RIGHT_CENTER,
            &bar.label,
            FontId::proportional(13.0),
            text_color,
        );

        let length = bar_area * bar.count as f32 / max;
        let bar_rect = egui::Rect::from_min_size(
            egui::pos2(left, top + 3.0),
            egui::vec2(length, BAR_ROW_HEIGHT - 6.0),
        );
        painter.rect_filled(bar_rect, 0.0, BAR_COLOR);

        painter.text(
            egui::pos2(bar_rect.right() + 4.0, center_y),
            Align2::LEFT_CENTER,
            bar.count.to_string(),
            FontId::monospace(12.0),
            text_color,
        );
    }
}

impl eframe::App for AnalyzerUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        let mut regenerate = false;
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                regenerate = self.controls(ui);
            });

        // Same rerun model as a reactive page: any topic change re-samples
        // all platforms.
        if regenerate || self.analyzed_topic.as_deref() != Some(self.topic.as_str()) {
            self.regenerate(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🌐 Social Media Topic Analyzer");
            ui.label("Facebook • Twitter • Reddit | Word Analysis with Smart Visualization");
            ui.separator();

            ui.horizontal(|ui| {
                for platform in Platform::ALL {
                    ui.selectable_value(&mut self.selected, platform, platform.tab_label());
                }
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(view) = self.panels.iter().find(|v| v.panel.platform == self.selected) {
                    AnalyzerUI::show_panel(ui, view);
                } else {
                    ui.label("Enter a topic to start");
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::load_or_default(DEFAULT_CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using defaults: {e}");
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Social Media WordCloud Analyzer",
        options,
        Box::new(|_| Ok(Box::new(AnalyzerUI::new(config)?))),
    )
}
