use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Swap the two halves of a sequence so the middle sample lands at index
/// 0. For even lengths this is an exact halves swap and its own inverse;
/// odd lengths split at (n+1)/2.
pub fn fftshift<T: Copy>(input: &[T]) -> Vec<T> {
    let split = (input.len() + 1) / 2;
    let mut output = Vec::with_capacity(input.len());
    output.extend_from_slice(&input[split..]);
    output.extend_from_slice(&input[..split]);
    output
}

/// Frequency bins in transform output order, `[0, 1, …, n/2−1, −n/2, …,
/// −1]` scaled by `1/(n·time_step)`. The axis only depends on the sampling
/// parameters, so one run computes it once and shares it across signals.
pub fn frequency_axis(n: usize, time_step: f64) -> Vec<f64> {
    let scale = 1.0 / (n as f64 * time_step);
    let split = (n + 1) / 2;
    (0..n)
        .map(|i| {
            let bin = if i < split {
                i as f64
            } else {
                i as f64 - n as f64
            };
            bin * scale
        })
        .collect()
}

/// Plans a forward FFT of a fixed length once and applies it to amplitude
/// sequences, zero-centering each sequence before transforming.
pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f64>>,
}

impl SpectrumAnalyzer {
    pub fn new(len: usize) -> SpectrumAnalyzer {
        SpectrumAnalyzer {
            // nb: reusing the planner is recommended if a lot of these are
            // going to get constructed.
            fft: FftPlanner::new().plan_fft_forward(len),
        }
    }

    pub fn analyze(&self, amplitude: &[f64]) -> Spectrum {
        assert!(amplitude.len() == self.fft.len());
        let mut buf: Vec<Complex<f64>> = fftshift(amplitude)
            .into_iter()
            .map(|y| Complex { re: y, im: 0.0 })
            .collect();
        self.fft.process(&mut buf);
        Spectrum(buf)
    }
}

/// The complex transform of one amplitude sequence, index-aligned with the
/// axis from [`frequency_axis`].
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum(pub Vec<Complex<f64>>);

impl Spectrum {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Real parts; the view the gallery plots.
    pub fn real(&self) -> Vec<f64> {
        self.0.iter().map(|y| y.re).collect()
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.0.iter().map(|y| y.norm()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::catalog::cosine;
    use crate::sampling::SamplingConfig;

    #[test]
    fn fftshift_swaps_halves() {
        assert_eq!(
            fftshift(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            vec![4.0, 5.0, 6.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn fftshift_handles_odd_length() {
        assert_eq!(fftshift(&[1, 2, 3, 4, 5]), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn fftshift_is_self_inverse_for_even_length() {
        let original: Vec<f64> = (0..64).map(|i| (i as f64).sin()).collect();
        assert_eq!(fftshift(&fftshift(&original)), original);
    }

    #[test]
    fn frequency_axis_bin_ordering() {
        // n = 8, dt = 0.25 → scale = 1/2, bins [0..3, -4..-1]
        assert_eq!(
            frequency_axis(8, 0.25),
            vec![0.0, 0.5, 1.0, 1.5, -2.0, -1.5, -1.0, -0.5]
        );
    }

    #[test]
    fn analyzer_preserves_length() {
        let analyzer = SpectrumAnalyzer::new(16);
        let spectrum = analyzer.analyze(&[1.0; 16]);
        assert_eq!(spectrum.len(), 16);
    }

    #[test]
    fn cosine_spectrum_has_symmetric_peaks() {
        // Sample cos(t) over a window long enough to hold ~20 cycles, then
        // check the transform concentrates at ±1/(2π) Hz.
        let config = SamplingConfig {
            time_bound: 64.0,
            steps: 2048,
        };
        let grid = config.grid();
        let amplitude: Vec<f64> = grid.iter().map(cosine).collect();

        let analyzer = SpectrumAnalyzer::new(config.steps);
        let magnitudes = analyzer.analyze(&amplitude).magnitudes();
        let frequencies = frequency_axis(config.steps, config.grid_spacing());

        // dominant bin over the positive-frequency half (skip DC)
        let (peak, peak_magnitude) = magnitudes
            .iter()
            .copied()
            .enumerate()
            .take(config.steps / 2)
            .skip(1)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();

        let expected = 1.0 / (2.0 * PI);
        let bin_width = 1.0 / (config.steps as f64 * config.grid_spacing());
        assert!(
            (frequencies[peak] - expected).abs() <= 2.0 * bin_width,
            "peak at {} Hz, expected {} Hz",
            frequencies[peak],
            expected
        );

        // real input: mirrored negative-frequency peak of equal magnitude
        assert_relative_eq!(
            peak_magnitude,
            magnitudes[config.steps - peak],
            max_relative = 1e-9
        );

        // energy away from the two peaks stays small
        let mut sorted = magnitudes.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = sorted[sorted.len() / 2];
        assert!(
            peak_magnitude > 20.0 * median,
            "peak {} not dominant over median {}",
            peak_magnitude,
            median
        );
    }
}
