use log::info;

use crate::codec::pixels::PixelGrid;
use crate::config::cases::TestCases;
use crate::config::network_config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::runner::cases::{run_cases, RunOutcome};
use crate::runner::run_mode::RunMode;

/// Result of the autoencoder harness: the run itself plus the decoded output image.
#[derive(Debug, Clone)]
pub struct ImageOutcome {
    pub run: RunOutcome,
    pub image: PixelGrid,
}

/// Trains (or evaluates) a network that reproduces one image.
///
/// Input and output widths are the image's pixel count; the hidden layers and
/// hyperparameters come from `config`. With `grayscale` the source image is
/// converted to grey before normalization. Only inference runs re-quantize
/// the decoded output to grey; a training run writes the raw output colours.
pub fn run_autoencoder(
    config: &NetworkConfig,
    image: &PixelGrid,
    grayscale: bool,
    mode: RunMode,
    seed: Option<u64>,
) -> Result<ImageOutcome> {
    let source = if grayscale { image.to_grayscale() } else { image.clone() };
    let input = source.to_input();
    info!("autoencoding {}x{} image ({} pixels)", image.width, image.height, input.len());

    let config = config.with_sizes(input.len(), input.len());
    let cases = TestCases::new(vec![input.clone()], vec![input]);
    let run = run_cases(&config, &cases, mode, seed)?;

    let output = run.outputs.first().map(Vec::as_slice).unwrap_or(&[]);
    let regray = grayscale && mode == RunMode::InferenceOnly;
    let image = PixelGrid::from_output(output, image.width, image.height, regray)?;
    Ok(ImageOutcome { run, image })
}

/// Trains (or evaluates) a network mapping each image to its target vector.
///
/// All images must have the same pixel count, which becomes the input width;
/// the output width comes from `config`.
pub fn run_classifier(
    config: &NetworkConfig,
    images: &[PixelGrid],
    targets: &[Vec<f64>],
    grayscale: bool,
    mode: RunMode,
    seed: Option<u64>,
) -> Result<RunOutcome> {
    let first = images.first().ok_or_else(|| NetworkError::shape("image set", 1, 0))?;
    let pixel_count = first.len();
    if let Some(odd) = images.iter().find(|img| img.len() != pixel_count) {
        return Err(NetworkError::shape("image pixel count", pixel_count, odd.len()));
    }
    info!("classifying {} image(s) of {} pixels", images.len(), pixel_count);

    let inputs = images
        .iter()
        .map(|img| if grayscale { img.to_grayscale().to_input() } else { img.to_input() })
        .collect();
    let config = config.with_sizes(pixel_count, config.output_size);
    run_cases(&config, &TestCases::new(inputs, targets.to_vec()), mode, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::report::StopReason;

    fn config() -> NetworkConfig {
        // Input and output widths are placeholders replaced by the pixel count.
        NetworkConfig::parse("1 1\n3\n1\n-0.5 0.5\n1.0\n200\n-1.0\n").unwrap()
    }

    fn image() -> PixelGrid {
        PixelGrid::new(2, 2, vec![0x000000, 0x404040, 0x808080, 0xC0C0C0]).unwrap()
    }

    #[test]
    fn autoencoder_sizes_network_from_pixels() {
        let outcome = run_autoencoder(&config(), &image(), false, RunMode::Train, Some(9)).unwrap();
        assert_eq!(outcome.run.topology.layers(), &[4, 3, 4]);
        assert_eq!(outcome.image.width, 2);
        assert_eq!(outcome.image.len(), 4);
        let report = outcome.run.report.unwrap();
        assert_eq!(report.stop_reason, StopReason::MaxEpochsReached);
        assert!(report.final_error < report.first_error);
    }

    #[test]
    fn training_writes_raw_output_colours() {
        let outcome = run_autoencoder(&config(), &image(), true, RunMode::Train, Some(2)).unwrap();
        let raw = PixelGrid::from_output(&outcome.run.outputs[0], 2, 2, false).unwrap();
        assert_eq!(outcome.image, raw);
    }

    #[test]
    fn inference_regrays_the_output() {
        let trained = run_autoencoder(&config(), &image(), true, RunMode::Train, Some(2)).unwrap();
        let pretrained = config().with_sizes(4, 4).with_weights(&trained.run.weights);
        let outcome = run_autoencoder(&pretrained, &image(), true, RunMode::InferenceOnly, None).unwrap();
        assert_eq!(outcome.run.outputs, trained.run.outputs);
        let grey = PixelGrid::from_output(&outcome.run.outputs[0], 2, 2, true).unwrap();
        assert_eq!(outcome.image, grey);
        for &p in &outcome.image.pixels {
            let (r, g, b) = ((p >> 16) & 0xFF, (p >> 8) & 0xFF, p & 0xFF);
            assert!(r == g && g == b);
        }
    }

    #[test]
    fn classifier_uses_config_output_width() {
        let images = vec![image(), image().to_grayscale()];
        let targets = vec![vec![0.0], vec![0.8]];
        let outcome = run_classifier(&config(), &images, &targets, false, RunMode::Train, Some(4)).unwrap();
        assert_eq!(outcome.topology.layers(), &[4, 3, 1]);
        assert_eq!(outcome.outputs.len(), 2);
    }

    #[test]
    fn classifier_rejects_mixed_sizes_and_bad_targets() {
        let small = PixelGrid::new(1, 1, vec![0]).unwrap();
        assert!(run_classifier(&config(), &[image(), small], &[vec![0.0], vec![1.0]], false, RunMode::Train, None).is_err());
        assert!(run_classifier(&config(), &[image()], &[vec![0.0, 1.0]], false, RunMode::Train, None).is_err());
        assert!(run_classifier(&config(), &[], &[], false, RunMode::Train, None).is_err());
    }
}
