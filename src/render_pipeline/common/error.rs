use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown plane slice code: {0}")]
    UnknownSlice(i32),

    #[error("Invalid pixel set dimensions: x={x}, y={y}, z={z}, c={c}, t={t}")]
    InvalidDimensions {
        x: usize,
        y: usize,
        z: usize,
        c: usize,
        t: usize,
    },

    #[error("Plane coordinates out of range: z={z} (sizeZ={size_z}), t={t} (sizeT={size_t})")]
    PlaneOutOfRange {
        z: usize,
        t: usize,
        size_z: usize,
        size_t: usize,
    },

    #[error(transparent)]
    Quantization(#[from] QuantizationError),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),
}

impl RenderError {
    /// Configuration errors are programming or settings bugs: not
    /// retryable, the render request must be fixed before resubmission.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RenderError::UnknownSlice(_)
                | RenderError::InvalidDimensions { .. }
                | RenderError::PlaneOutOfRange { .. }
                | RenderError::Quantization(_)
        )
    }

    /// Data-source errors may be transient; retry policy belongs to the
    /// caller, never to the renderer.
    pub fn is_data_source(&self) -> bool {
        matches!(self, RenderError::DataSource(_))
    }
}

/// Raised when a channel's quantization window cannot map raw values,
/// i.e. the window is degenerate (start >= end).
///
/// The render loop stamps the offending channel index before re-raising,
/// so callers can report which channel failed rather than a generic error.
#[derive(Error, Debug)]
#[error(
    "Degenerate quantization window [{window_start}, {window_end}]{}",
    channel_label(.channel)
)]
pub struct QuantizationError {
    pub window_start: f64,
    pub window_end: f64,
    pub channel: Option<usize>,
}

fn channel_label(channel: &Option<usize>) -> String {
    match channel {
        Some(c) => format!(" on channel {c}"),
        None => String::new(),
    }
}

impl QuantizationError {
    pub fn degenerate_window(window_start: f64, window_end: f64) -> Self {
        Self {
            window_start,
            window_end,
            channel: None,
        }
    }

    /// Attaches the channel index, keeping an already-set index.
    pub fn for_channel(mut self, channel: usize) -> Self {
        if self.channel.is_none() {
            self.channel = Some(channel);
        }
        self
    }
}

/// Failure to materialize a raw plane from the backing data source.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("IO error while fetching plane data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plane data unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
