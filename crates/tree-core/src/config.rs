use crate::constants::*;
use crate::error::ConfigError;

/// Shape parameters for one generated particle group.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    pub count: usize,
    pub radius: f32,
    pub height: f32,
    pub scatter_radius: f32,
    /// Lower bound of the normalized height window particles are spread over.
    pub min_height_frac: f32,
    /// Upper bound of the normalized height window.
    pub max_height_frac: f32,
}

impl LayoutParams {
    pub fn new(count: usize, radius: f32, height: f32, scatter_radius: f32) -> Self {
        Self {
            count,
            radius,
            height,
            scatter_radius,
            min_height_frac: 0.0,
            max_height_frac: 1.0,
        }
    }

    pub fn with_height_window(mut self, min: f32, max: f32) -> Self {
        self.min_height_frac = min;
        self.max_height_frac = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("radius", self.radius),
            ("height", self.height),
            ("scatter_radius", self.scatter_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        let (min, max) = (self.min_height_frac, self.max_height_frac);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(ConfigError::InvalidHeightWindow { min, max });
        }
        Ok(())
    }
}

/// Top-level knobs for building a [`crate::Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub leaf_count: usize,
    pub ornament_count: usize,
    pub gift_count: usize,
    pub tree_height: f32,
    pub tree_radius: f32,
    pub scatter_radius: f32,
    /// `None` draws fresh entropy; `Some` makes every layout reproducible.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            leaf_count: LEAF_COUNT,
            ornament_count: ORNAMENT_COUNT,
            gift_count: GIFT_COUNT,
            tree_height: TREE_HEIGHT,
            tree_radius: TREE_RADIUS,
            scatter_radius: SCATTER_RADIUS,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn leaf_layout(&self) -> LayoutParams {
        LayoutParams::new(
            self.leaf_count,
            self.tree_radius,
            self.tree_height,
            self.scatter_radius,
        )
    }

    pub fn ornament_layout(&self) -> LayoutParams {
        LayoutParams::new(
            self.ornament_count,
            self.tree_radius * ORNAMENT_RADIUS_FACTOR,
            self.tree_height,
            self.scatter_radius,
        )
    }

    pub fn gift_layout(&self) -> LayoutParams {
        LayoutParams::new(
            self.gift_count,
            self.tree_radius * GIFT_RADIUS_FACTOR,
            self.tree_height,
            self.scatter_radius,
        )
        .with_height_window(GIFT_MIN_HEIGHT_FRAC, GIFT_MAX_HEIGHT_FRAC)
    }
}
