use tsmo::detect;
use tsmo::{MultilevelThresholder, ThresholdParams};

#[cfg(feature = "tracing")]
use tsmo::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(false, log::LevelFilter::Info);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: threshold_image <image_path>");
        return Ok(());
    };

    let thresholder = MultilevelThresholder::new(ThresholdParams::default())?;
    let result = detect::threshold_path(&path, &thresholder)?;

    println!("valleys: {:?}", result.valleys);
    for (w, t) in result.windows.iter().zip(&result.thresholds) {
        println!("window [{}, {}) -> threshold {t}", w.start, w.end);
    }

    Ok(())
}
