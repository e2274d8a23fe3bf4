use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};
use serde::Deserialize;

use social_cloud_core::analyzer::panel_title;
use social_cloud_core::config::{AppConfig, DEFAULT_CONFIG_FILE};
use social_cloud_core::io::encode_png;
use social_cloud_core::platform::Platform;
use social_cloud_core::render::{select_renderer, BarChart, Capability, Renderer, Visual};
use social_cloud_core::sampler::WordSampler;
use social_cloud_core::vocabulary::Vocabulary;

/// Largest `count` accepted from a query; larger values are rejected
/// before any allocation.
const MAX_COUNT: usize = 100_000;

/// Query parameters for `/v1/words` and `/v1/render`
#[derive(Deserialize)]
struct AnalyzeParams {
	topic: Option<String>,
	platform: Option<String>,
	count: Option<usize>,
}

impl AnalyzeParams {
	/// Topic defaults to the empty string, which is a valid topic.
	fn topic(&self) -> &str {
		self.topic.as_deref().unwrap_or("")
	}

	fn platform(&self) -> Result<Platform, String> {
		match &self.platform {
			Some(name) => name.parse(),
			None => Err("Missing platform".to_owned()),
		}
	}

	/// Validates the whole query: platform name and word count.
	fn validate(&self) -> Result<Platform, String> {
		let platform = self.platform()?;
		match self.count {
			Some(count) if count > MAX_COUNT => Err(format!("count must be at most {MAX_COUNT}, got {count}")),
			_ => Ok(platform),
		}
	}
}

/// Immutable state shared by every worker.
///
/// The renderer is probed once at start-up; each request owns its own
/// sampler so no lock is needed.
struct SharedData {
	vocabulary: Vocabulary,
	renderer: Box<dyn Renderer>,
	capability: Capability,
	word_limit: usize,
}

impl SharedData {
	fn sample(&self, params: &AnalyzeParams, platform: Platform) -> Vec<String> {
		let count = params.count.unwrap_or(self.word_limit);
		WordSampler::new().sample(&self.vocabulary, params.topic(), platform, count)
	}

	/// Samples, renders and encodes one panel (CPU bound).
	fn render(&self, params: &AnalyzeParams, platform: Platform) -> Rendered {
		let words = self.sample(params, platform);
		let title = panel_title(platform, params.topic());
		match self.renderer.render(&words, &title, platform.color_scheme()) {
			Visual::Cloud(cloud) => match encode_png(&cloud.image) {
				Ok(bytes) => Rendered::Png(bytes),
				Err(e) => Rendered::Failed(e.to_string()),
			},
			Visual::Chart(chart) => Rendered::Chart(chart),
		}
	}
}

/// Body of a `/v1/render` response, built off the async workers.
enum Rendered {
	Png(Vec<u8>),
	Chart(BarChart),
	Failed(String),
}

/// HTTP GET endpoint `/v1/platforms`
#[get("/v1/platforms")]
async fn get_platforms() -> impl Responder {
	let names: Vec<&str> = Platform::ALL.iter().map(|p| p.name()).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

/// HTTP GET endpoint `/v1/mode`
///
/// Returns `primary` or `fallback`, as decided by the start-up probe.
#[get("/v1/mode")]
async fn get_mode(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().body(data.capability.mode.to_string())
}

/// HTTP GET endpoint `/v1/words`
///
/// Returns the sampled word sequence as a JSON array.
#[get("/v1/words")]
async fn get_words(data: web::Data<SharedData>, query: web::Query<AnalyzeParams>) -> impl Responder {
	let platform = match query.validate() {
		Ok(p) => p,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	HttpResponse::Ok().json(data.sample(&query, platform))
}

/// HTTP GET endpoint `/v1/render`
///
/// Samples and renders one platform panel:
/// - primary mode: `image/png` word cloud
/// - fallback mode: JSON bar chart
///
/// Rendering runs on the blocking thread pool.
#[get("/v1/render")]
async fn get_render(data: web::Data<SharedData>, query: web::Query<AnalyzeParams>) -> impl Responder {
	let platform = match query.validate() {
		Ok(p) => p,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mode_header = ("X-Render-Mode", data.renderer.mode().to_string());
	let params = query.into_inner();
	let rendered = match web::block(move || data.render(&params, platform)).await {
		Ok(rendered) => rendered,
		Err(e) => {
			error!("Render task failed: {e}");
			return HttpResponse::InternalServerError().body("Failed to render");
		}
	};

	match rendered {
		Rendered::Png(bytes) => HttpResponse::Ok()
			.content_type("image/png")
			.insert_header(mode_header)
			.body(bytes),
		Rendered::Chart(chart) => HttpResponse::Ok().insert_header(mode_header).json(chart),
		Rendered::Failed(e) => {
			error!("PNG encoding failed: {e}");
			HttpResponse::InternalServerError().body("Failed to encode image")
		}
	}
}

/// Main entry point for the server.
///
/// Loads the configuration, probes the renderer once and starts an
/// Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Configuration is read from `./social-cloud.json` when present.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = AppConfig::load_or_default(DEFAULT_CONFIG_FILE)
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
	let vocabulary = config
		.load_vocabulary()
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
	let (renderer, capability) = select_renderer(&config.render);

	let shared_data = web::Data::new(SharedData {
		vocabulary,
		renderer,
		capability,
		word_limit: config.word_limit,
	});

	info!("Listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		let cors = Cors::default()
			.allow_any_origin()
			.allowed_methods(vec!["GET"]);

		App::new()
			.wrap(cors)
			.app_data(shared_data.clone())
			.service(get_platforms)
			.service(get_mode)
			.service(get_words)
			.service(get_render)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
