use floatpix::image_io::{ImageIo, IoConfig};
use floatpix::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting floatpix...");

    let config = IoConfig::builder().build();
    let pipeline = ImageIo::new(config);

    info!("Image I/O pipeline initialized");
    info!("Encoding gamma: {}", pipeline.config().gamma);

    match pipeline.convert_file("input.exr", "output.png") {
        Ok(_) => info!("Conversion successful!"),
        Err(e) => error!("Conversion failed: {}", e),
    }

    Ok(())
}
