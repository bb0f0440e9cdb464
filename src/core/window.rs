pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y chart span ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Axis ranges for a (distance, height) chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl ChartWindow {
    /// Fits every point with some padding, then widens one axis so the chart keeps
    /// a fixed aspect. Heights start at zero (the ground); distances may go
    /// negative when wind blows the shot behind the launcher.
    pub fn fit(points: &[(f64, f64)]) -> Self {
        let (mut raw_min_x, mut raw_max_x, mut raw_max_y) = (0.0f64, 0.0f64, 0.0f64);
        for &(x, y) in points {
            raw_min_x = raw_min_x.min(x);
            raw_max_x = raw_max_x.max(x);
            raw_max_y = raw_max_y.max(y);
        }

        let raw_x_span = (raw_max_x - raw_min_x).max(1.0);
        let x_pad = raw_x_span * X_PADDING_RATIO;
        let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

        let mut x_span = raw_x_span + 2.0 * x_pad;
        let mut y_span = (raw_max_y + y_pad).max(1.0);
        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        // Extra horizontal room goes to the right, past the landing point.
        let x_min = if raw_min_x < 0.0 { raw_min_x - x_pad } else { 0.0 };
        Self {
            x_min,
            x_max: x_min + x_span,
            y_max: y_span,
        }
    }
}
