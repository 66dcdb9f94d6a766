use tracing::{info, instrument};

use crate::render_pipeline::common::error::{RenderError, Result};
use crate::render_pipeline::defs::{RenderingDef, RenderingModel, SharedRenderingDef};
use crate::render_pipeline::plane::{PixelsDimensions, PlaneDef, PlaneSource};
use crate::render_pipeline::render::color;
use crate::render_pipeline::render::image::{RenderedImage, B_BAND, G_BAND, R_BAND};

/// Renders 2D slices of a pixel set into 8-bit sRGB images.
///
/// One renderer serves one pixel set: it holds the set's shape, the
/// plane data source and the shared rendering settings. Each call to
/// [`render`](Self::render) snapshots the settings at entry and works
/// from the copy, so interactive edits are never observed mid-render.
pub struct Renderer<S: PlaneSource> {
    source: S,
    dims: PixelsDimensions,
    settings: SharedRenderingDef,
}

impl<S: PlaneSource> Renderer<S> {
    pub fn new(source: S, dims: PixelsDimensions, settings: SharedRenderingDef) -> Self {
        Self {
            source,
            dims,
            settings,
        }
    }

    pub fn dims(&self) -> &PixelsDimensions {
        &self.dims
    }

    pub fn settings(&self) -> &SharedRenderingDef {
        &self.settings
    }

    /// Renders the requested plane under the current settings.
    ///
    /// On any failure no buffer is returned: a partially filled image
    /// could be displayed and misread as valid data.
    #[instrument(skip(self, plane_def), fields(
        slice = plane_def.slice().code(),
        z = plane_def.z(),
        t = plane_def.t(),
    ))]
    pub fn render(&self, plane_def: &PlaneDef) -> Result<RenderedImage> {
        self.validate_plane(plane_def)?;

        let def = {
            let _span = tracing::info_span!("snapshot_settings").entered();
            self.settings.snapshot()
        };

        let (size_x1, size_x2) = plane_def.slice().axis_sizes(&self.dims);
        let mut image = RenderedImage::new(size_x1, size_x2);

        {
            let _span = tracing::info_span!("render_model",
                model = ?def.model(),
                size_x1,
                size_x2,
            )
            .entered();
            match def.model() {
                RenderingModel::Greyscale => self.render_greyscale(&def, plane_def, &mut image)?,
                RenderingModel::Rgb => self.render_rgb(&def, plane_def, &mut image)?,
                RenderingModel::Hsb => self.render_hsb(&def, plane_def, &mut image)?,
            }
        }

        info!(size_x1, size_x2, "Plane rendered");
        Ok(image)
    }

    fn validate_plane(&self, plane_def: &PlaneDef) -> Result<()> {
        if plane_def.z() >= self.dims.size_z() || plane_def.t() >= self.dims.size_t() {
            return Err(RenderError::PlaneOutOfRange {
                z: plane_def.z(),
                t: plane_def.t(),
                size_z: self.dims.size_z(),
                size_t: self.dims.size_t(),
            });
        }
        Ok(())
    }

    /// Renders the first active channel in grey; later channels are
    /// never read, even when active. No active channel leaves the
    /// buffer black.
    fn render_greyscale(
        &self,
        def: &RenderingDef,
        plane_def: &PlaneDef,
        image: &mut RenderedImage,
    ) -> Result<()> {
        let Some((index, binding)) = def
            .channels()
            .iter()
            .enumerate()
            .find(|(_, b)| b.is_active())
        else {
            return Ok(());
        };

        let plane = self.source.plane(index, plane_def)?;
        let quantum = binding.quantum();
        let chain = def.codomain();
        let alpha = binding.alpha() as f64 / 255.0;

        for x2 in 0..image.size_x2() {
            for x1 in 0..image.size_x1() {
                let discrete = quantum
                    .quantize(plane.pixel_value(x1, x2))
                    .map_err(|e| e.for_channel(index))?;
                let value = (chain.transform(discrete) as f64 * alpha) as u8;
                let pixel = image.pixel_index(x1, x2);
                image.set_element(R_BAND, pixel, value);
                image.set_element(G_BAND, pixel, value);
                image.set_element(B_BAND, pixel, value);
            }
        }
        Ok(())
    }

    /// Composites every active channel additively, weighting the pixel
    /// value by the channel's color ratios. Band sums clamp to 255 only
    /// after all channels are in.
    fn render_rgb(
        &self,
        def: &RenderingDef,
        plane_def: &PlaneDef,
        image: &mut RenderedImage,
    ) -> Result<()> {
        let mut sums = vec![[0u16; 3]; image.pixel_count()];
        let chain = def.codomain();

        for (index, binding) in def.channels().iter().enumerate() {
            if !binding.is_active() {
                continue;
            }
            let plane = self.source.plane(index, plane_def)?;
            let quantum = binding.quantum();
            let rgba = binding.rgba();
            let alpha = rgba[3] as f64 / 255.0;
            let ratios = [
                rgba[R_BAND] as f64 / 255.0,
                rgba[G_BAND] as f64 / 255.0,
                rgba[B_BAND] as f64 / 255.0,
            ];

            for x2 in 0..image.size_x2() {
                for x1 in 0..image.size_x1() {
                    let discrete = quantum
                        .quantize(plane.pixel_value(x1, x2))
                        .map_err(|e| e.for_channel(index))?;
                    let scaled = chain.transform(discrete) as f64 * alpha;
                    let pixel = image.pixel_index(x1, x2);
                    for band in 0..3 {
                        sums[pixel][band] =
                            sums[pixel][band].saturating_add((scaled * ratios[band]) as u16);
                    }
                }
            }
        }

        write_clamped(image, &sums);
        Ok(())
    }

    /// Like the RGB model, but each channel's color supplies hue and
    /// saturation while the pixel value drives brightness; the per-pixel
    /// HSB contribution is converted to RGB before additive compositing.
    fn render_hsb(
        &self,
        def: &RenderingDef,
        plane_def: &PlaneDef,
        image: &mut RenderedImage,
    ) -> Result<()> {
        let mut sums = vec![[0u16; 3]; image.pixel_count()];
        let chain = def.codomain();

        for (index, binding) in def.channels().iter().enumerate() {
            if !binding.is_active() {
                continue;
            }
            let plane = self.source.plane(index, plane_def)?;
            let quantum = binding.quantum();
            let rgba = binding.rgba();
            let alpha = rgba[3] as f64 / 255.0;
            let (hue, saturation) =
                color::rgb_to_hue_saturation([rgba[R_BAND], rgba[G_BAND], rgba[B_BAND]]);
            let output_max = quantum.output_max() as f64;

            for x2 in 0..image.size_x2() {
                for x1 in 0..image.size_x1() {
                    let discrete = quantum
                        .quantize(plane.pixel_value(x1, x2))
                        .map_err(|e| e.for_channel(index))?;
                    let brightness =
                        (chain.transform(discrete) as f64 * alpha / output_max).clamp(0.0, 1.0);
                    let contribution = color::hsb_to_rgb(hue, saturation, brightness);
                    let pixel = image.pixel_index(x1, x2);
                    for band in 0..3 {
                        sums[pixel][band] = sums[pixel][band]
                            .saturating_add((contribution[band] * 255.0).round() as u16);
                    }
                }
            }
        }

        write_clamped(image, &sums);
        Ok(())
    }
}

fn write_clamped(image: &mut RenderedImage, sums: &[[u16; 3]]) {
    for (pixel, bands) in sums.iter().enumerate() {
        for (band, &sum) in bands.iter().enumerate() {
            image.set_element(band, pixel, sum.min(255) as u8);
        }
    }
}
