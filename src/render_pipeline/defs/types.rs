//! Rendering definition types

use crate::render_pipeline::codomain::CodomainChain;
use crate::render_pipeline::quantum::QuantumStrategy;

/// How active channels are composited into the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingModel {
    /// Single-channel grey rendering; only the first active channel is
    /// ever read.
    Greyscale,
    /// Additive per-channel color compositing.
    Rgb,
    /// Channel color drives hue/saturation, pixel intensity drives
    /// brightness; contributions composite additively.
    Hsb,
}

/// Per-channel rendering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelBinding {
    active: bool,
    rgba: [u8; 4],
    quantum: QuantumStrategy,
}

impl ChannelBinding {
    pub fn new(active: bool, rgba: [u8; 4], quantum: QuantumStrategy) -> Self {
        Self {
            active,
            rgba,
            quantum,
        }
    }

    /// An active white binding with a linear window, the usual starting
    /// point before the user picks colors.
    pub fn greyscale(window_start: f64, window_end: f64) -> Self {
        Self::new(
            true,
            [255, 255, 255, 255],
            QuantumStrategy::linear(window_start, window_end),
        )
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn rgba(&self) -> [u8; 4] {
        self.rgba
    }

    pub fn set_rgba(&mut self, rgba: [u8; 4]) {
        self.rgba = rgba;
    }

    pub fn alpha(&self) -> u8 {
        self.rgba[3]
    }

    pub fn quantum(&self) -> &QuantumStrategy {
        &self.quantum
    }

    pub fn quantum_mut(&mut self) -> &mut QuantumStrategy {
        &mut self.quantum
    }
}

/// Aggregate rendering settings: the compositing model, one binding per
/// channel (ordered by channel index) and the codomain chain shared by
/// all channels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderingDef {
    model: RenderingModel,
    channels: Vec<ChannelBinding>,
    codomain: CodomainChain,
}

impl RenderingDef {
    pub fn builder() -> RenderingDefBuilder {
        RenderingDefBuilder::default()
    }

    pub fn model(&self) -> RenderingModel {
        self.model
    }

    pub fn set_model(&mut self, model: RenderingModel) {
        self.model = model;
    }

    pub fn channels(&self) -> &[ChannelBinding] {
        &self.channels
    }

    pub fn channel_mut(&mut self, index: usize) -> Option<&mut ChannelBinding> {
        self.channels.get_mut(index)
    }

    pub fn codomain(&self) -> &CodomainChain {
        &self.codomain
    }

    pub fn codomain_mut(&mut self) -> &mut CodomainChain {
        &mut self.codomain
    }
}

/// Builder for [`RenderingDef`].
#[derive(Default)]
pub struct RenderingDefBuilder {
    model: Option<RenderingModel>,
    channels: Vec<ChannelBinding>,
    codomain: Option<CodomainChain>,
}

impl RenderingDefBuilder {
    pub fn model(mut self, model: RenderingModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn channel(mut self, binding: ChannelBinding) -> Self {
        self.channels.push(binding);
        self
    }

    pub fn codomain(mut self, chain: CodomainChain) -> Self {
        self.codomain = Some(chain);
        self
    }

    pub fn build(self) -> RenderingDef {
        RenderingDef {
            model: self.model.unwrap_or(RenderingModel::Greyscale),
            channels: self.channels,
            codomain: self.codomain.unwrap_or_default(),
        }
    }
}
