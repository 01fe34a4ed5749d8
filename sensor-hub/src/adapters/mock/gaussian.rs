use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Functionality to add some Gaussian noise.
#[derive(Clone)]
pub(super) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev
    pub(super) fn new(mean: f64, stdev: f64) -> Self {
        Self {
            normal: Normal::new(mean, stdev).unwrap(),
        }
    }

    /// Sample from distribution
    pub(super) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    // Adds noise to vector of samples
    pub(super) fn add_noise_vec(&self, rng: &mut StdRng, data: Vec<f64>) -> Vec<f64> {
        let mut result = Vec::with_capacity(data.len());
        for d in data {
            result.push(d + self.draw_sample(rng));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_gaussian_new() {
        let mean = 0.0;
        let stdev = 1.0;
        let noise = GaussianNoise::new(mean, stdev);
        assert_eq!(noise.normal.mean(), mean);
        assert_eq!(noise.normal.std_dev(), stdev);
    }

    #[test]
    fn test_add_noise_vec_preserves_length() {
        let mut rng = StdRng::from_entropy();
        let noise = GaussianNoise::new(0.0, 0.1);
        let noisy = noise.add_noise_vec(&mut rng, vec![1.0, 2.0, 3.0]);
        assert_eq!(noisy.len(), 3);
    }
}
