//! Concrete codomain maps

/// Settings for piecewise-linear contrast stretching.
///
/// The input interval is split at `(a, out_a)` and `(b, out_b)`: values
/// below `a` are compressed toward the interval floor, values between
/// `a` and `b` are stretched toward `[out_a, out_b]`, values above `b`
/// are compressed toward the interval ceiling. `a <= b` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastStretchingContext {
    pub a: i32,
    pub out_a: i32,
    pub b: i32,
    pub out_b: i32,
}

/// Settings for plane slicing: values inside `[lower, upper]` are lifted
/// to `upper`; with `constant` set, values outside the range are
/// flattened to the interval floor instead of passing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneSlicingContext {
    pub lower: i32,
    pub upper: i32,
    pub constant: bool,
}

/// One link of the codomain chain: a pure map from discrete value to
/// discrete value within the chain's working interval.
///
/// Every map clamps its own output; the chain deliberately does not
/// re-clamp between links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodomainMap {
    /// Reflects values within the interval.
    ReverseIntensity,
    ContrastStretching(ContrastStretchingContext),
    PlaneSlicing(PlaneSlicingContext),
}

impl CodomainMap {
    pub fn apply(&self, value: i32, interval_start: i32, interval_end: i32) -> i32 {
        let mapped = match self {
            CodomainMap::ReverseIntensity => interval_start + interval_end - value,
            CodomainMap::ContrastStretching(ctx) => {
                contrast_stretch(value, ctx, interval_start, interval_end)
            }
            CodomainMap::PlaneSlicing(ctx) => {
                if ctx.lower <= value && value <= ctx.upper {
                    ctx.upper
                } else if ctx.constant {
                    interval_start
                } else {
                    value
                }
            }
        };
        mapped.clamp(interval_start, interval_end)
    }
}

fn contrast_stretch(
    value: i32,
    ctx: &ContrastStretchingContext,
    interval_start: i32,
    interval_end: i32,
) -> i32 {
    if value < ctx.a {
        segment(value, interval_start, ctx.a, interval_start, ctx.out_a)
    } else if value < ctx.b {
        segment(value, ctx.a, ctx.b, ctx.out_a, ctx.out_b)
    } else {
        segment(value, ctx.b, interval_end, ctx.out_b, interval_end)
    }
}

/// Linear interpolation of `value` from `[x0, x1]` onto `[y0, y1]`.
fn segment(value: i32, x0: i32, x1: i32, y0: i32, y1: i32) -> i32 {
    if x1 == x0 {
        return y0;
    }
    let t = (value - x0) as f64 / (x1 - x0) as f64;
    (y0 as f64 + t * (y1 - y0) as f64).round() as i32
}
