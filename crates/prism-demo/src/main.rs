mod app;

use anyhow::Result;

use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::shader::ShaderSources;
use prism_engine::window::{Runtime, RuntimeConfig};

use app::DemoApp;

/// Shader directory, relative to the working directory.
const SHADER_DIR: &str = "shaders";
const SHADER_NAME: &str = "basic-render";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let sources = ShaderSources::load(SHADER_DIR, SHADER_NAME)?;

    let config = RuntimeConfig {
        title: "prism".to_string(),
        ..Default::default()
    };

    let gpu_init = GpuInit {
        sample_count: 16,
        ..Default::default()
    };

    log::info!(
        "starting {}x{} window, letterboxed to {}:{}",
        config.initial_size.width,
        config.initial_size.height,
        config.aspect.num,
        config.aspect.den
    );

    Runtime::run(config, gpu_init, DemoApp::new(sources))
}
