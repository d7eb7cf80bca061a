//! Pipeline configuration types

/// Gamma used when encoding linear values for low-dynamic-range output.
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Configuration for image reads and writes
#[derive(Debug, Clone)]
pub struct IoConfig {
    /// Gamma applied to R, G, B when encoding for LDR destinations
    pub gamma: f32,
    /// Whether to validate image dimensions before invoking the codec
    pub validate_dimensions: bool,
    /// Upper bound on either dimension, checked only when validation is on
    pub max_dimension: Option<usize>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl IoConfig {
    pub fn builder() -> IoConfigBuilder {
        IoConfigBuilder::default()
    }
}

/// Builder for IoConfig
#[derive(Default)]
pub struct IoConfigBuilder {
    gamma: Option<f32>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl IoConfigBuilder {
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> IoConfig {
        let default = IoConfig::default();
        IoConfig {
            gamma: self.gamma.unwrap_or(default.gamma),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
