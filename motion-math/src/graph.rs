//! Sampling of the analytic spring response for graph overlays.
//!
//! The graph maps half of its height to one unit of displacement and one
//! second of time, so the curve starts one unit below the center line and
//! settles onto it.

use glam::Vec2;

use crate::{
    Result, SpringError,
    numeric::{lerp, normalize, round},
    params::SpringParameters,
};

/// Sampled response graph, in canvas coordinates with y pointing down.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    /// Polyline of the response, one point per horizontal pixel.
    pub curve: Vec<Vec2>,
    /// Y of the release position (one unit below the target).
    pub start_guide: f32,
    /// Y of the target.
    pub target_guide: f32,
    /// Y one unit above the target.
    pub ceiling_guide: f32,
    /// Y of the peak overshoot line.
    pub overshoot_guide: f32,
    /// Peak normalized value, see [`crate::maximum_overshoot`].
    pub maximum: f32,
    /// Caption for the overshoot line, e.g. `Max: 116.3 %`.
    pub label: String,
}

/// Canvas geometry of a response graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseGraph {
    width: f32,
    height: f32,
}

impl ResponseGraph {
    /// Creates a graph of the given canvas size in pixels.
    ///
    /// # Errors
    ///
    /// [`SpringError::InvalidParameter`] for a non-positive or non-finite size.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpringError::InvalidParameter { name, value });
            }
        }
        Ok(Self { width, height })
    }

    fn range(&self) -> f32 {
        self.height * 0.5
    }

    /// Time in seconds at horizontal pixel `x`.
    pub fn time_at(&self, x: f32) -> f32 {
        normalize(0.0, self.range(), x)
    }

    /// Vertical pixel of a displacement relative to the target.
    pub fn y_of(&self, displacement: f32) -> f32 {
        lerp(self.range(), 0.0, displacement)
    }

    /// Samples the response of `params` across the canvas.
    ///
    /// # Errors
    ///
    /// Propagates [`SpringError::DivisionByZero`] for an underdamped spring
    /// with zero stiffness.
    pub fn sample(&self, params: SpringParameters) -> Result<GraphModel> {
        let response = params.response();
        let maximum = response.maximum_overshoot()?;

        let columns = self.width as u32;
        let mut curve = Vec::with_capacity(columns as usize + 1);
        curve.push(Vec2::new(0.0, self.y_of(-1.0)));
        curve.extend((1..=columns).map(|x| {
            let x = x as f32;
            Vec2::new(x, self.y_of(response.displacement(self.time_at(x))))
        }));

        Ok(GraphModel {
            curve,
            start_guide: self.y_of(-1.0),
            target_guide: self.y_of(0.0),
            ceiling_guide: self.y_of(1.0),
            overshoot_guide: self.y_of(maximum - 1.0),
            maximum,
            label: format!("Max: {:.1} %", round(maximum * 100.0, 1)),
        })
    }
}
