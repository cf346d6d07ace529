use std::env;
use std::fs;

use zimage::{GenerationRequest, ZImageClient, ZImageConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    zimage::logger::init_with_config(
        zimage::logger::LoggerConfig::development().with_level(zimage::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking backend environment...");

    if let Ok(url) = env::var(zimage::config::BASE_URL_ENV) {
        log::info!("{}: {}", zimage::config::BASE_URL_ENV, url);
    } else {
        log::warn!(
            "No {} set, using {}",
            zimage::config::BASE_URL_ENV,
            zimage::config::DEFAULT_BASE_URL
        );
    }

    let config = ZImageConfig::from_env();
    let base_url = config.resolved_base_url();

    zimage::logger::log_startup_info("zimage", env!("CARGO_PKG_VERSION"), &base_url);

    log::info!("🔄 Creating Z-Image client...");
    let client = match ZImageClient::new(config) {
        Ok(client) => {
            log::info!("✅ Z-Image client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Z-Image client: {}", e);
            return Err(e.into());
        }
    };

    // Test 1: Health probe
    log::info!("🩺 Checking backend health...");

    match client.health().check().await {
        Ok(health) => {
            log::info!("✅ Backend reachable: status={}", health.status);
            if health.model_loaded {
                log::info!("✅ Pipeline is loaded and ready");
            } else {
                log::warn!("⚠️  Pipeline is not loaded yet, generation will fail with 503");
            }
        }
        Err(e) => {
            log::error!("❌ Health check failed: {}", e);
            log::warn!("💡 Is the backend running at {}?", base_url);
        }
    }

    // Test 2: Image generation
    log::info!("🎨 Testing image generation...");

    let request = GenerationRequest {
        prompt: "A serene landscape with mountains and a lake at sunset, digital art style"
            .to_string(),
        height: 1024,
        width: 1024,
        steps: 9,
        guidance_scale: 0.0,
        seed: 42,
        use_flash_attn_3: false,
    };

    let round_trip = zimage::logger::timer("generate");
    let result = client.image().generate(request).await;
    drop(round_trip);

    match result {
        Ok(response) => {
            log::info!("✅ Image generation successful!");
            log::info!(
                "📏 Image data length: {} characters",
                response.image_base64.len()
            );
            let data_uri = response.to_data_uri();
            log::debug!(
                "🔗 Data URI prefix: {}...",
                &data_uri[..40.min(data_uri.len())]
            );

            // Save image to file
            let filename = format!("generated_image_{}.png", chrono::Utc::now().timestamp());

            match response.to_bytes() {
                Ok(image_bytes) => match fs::write(&filename, image_bytes) {
                    Ok(_) => {
                        log::info!("💾 Image saved to: {}", filename);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to save image: {}", e);
                    }
                },
                Err(e) => {
                    log::error!("❌ Failed to decode base64 image: {}", e);
                }
            }
        }
        Err(e) => {
            log::error!("❌ Image generation failed: {}", e);
            log::warn!("💡 Check the backend logs; OOM errors surface here as the detail text");
        }
    }

    log::info!("🎉 Done!");
    log::info!("💡 Check the generated image file in the current directory");

    Ok(())
}
