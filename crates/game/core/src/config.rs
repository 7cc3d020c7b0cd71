use crate::error::ConfigError;

/// Tunable planner parameters.
///
/// None of these have a derivation; they are knobs. `distance_discount` trades
/// travel against payoff, `retarget_margin` is the hysteresis that keeps an
/// agent from flipping between near-tied destinations every turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Desirability lost per hop of distance.
    pub distance_discount: f64,
    /// Improvement a new candidate needs over the current target to replace it.
    pub retarget_margin: f64,
    /// Score added for every step onto a cell, on top of the cell's memory value.
    pub step_cost: i32,
}

impl PlannerConfig {
    pub const DEFAULT_DISTANCE_DISCOUNT: f64 = 0.5;
    pub const DEFAULT_RETARGET_MARGIN: f64 = 2.0;
    pub const DEFAULT_STEP_COST: i32 = -1;

    pub fn new() -> Self {
        Self {
            distance_discount: Self::DEFAULT_DISTANCE_DISCOUNT,
            retarget_margin: Self::DEFAULT_RETARGET_MARGIN,
            step_cost: Self::DEFAULT_STEP_COST,
        }
    }

    pub fn with_distance_discount(mut self, distance_discount: f64) -> Self {
        self.distance_discount = distance_discount;
        self
    }

    pub fn with_retarget_margin(mut self, retarget_margin: f64) -> Self {
        self.retarget_margin = retarget_margin;
        self
    }

    pub fn with_step_cost(mut self, step_cost: i32) -> Self {
        self.step_cost = step_cost;
        self
    }

    /// Both weights must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.distance_discount.is_finite() || self.distance_discount < 0.0 {
            return Err(ConfigError::InvalidDistanceDiscount(self.distance_discount));
        }
        if !self.retarget_margin.is_finite() || self.retarget_margin < 0.0 {
            return Err(ConfigError::InvalidRetargetMargin(self.retarget_margin));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
