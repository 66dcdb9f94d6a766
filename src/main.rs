use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use stackrender_rs::logger;
use stackrender_rs::render_pipeline::{
    ChannelBinding, CodomainChain, CodomainMap, DataSourceError, PixelsDimensions, Plane2D,
    PlaneDef, PlaneSource, QuantumStrategy, RenderedImage, Renderer, RenderingDef, RenderingModel,
    SharedRenderingDef,
};

use tracing::info;

/// In-memory demo source: each channel gets a smooth gradient shifted by
/// its index, so the composited output shows all three models doing
/// something visibly different.
struct GradientSource {
    size_x1: usize,
    size_x2: usize,
}

impl PlaneSource for GradientSource {
    fn plane(&self, channel: usize, _def: &PlaneDef) -> Result<Plane2D, DataSourceError> {
        let mut data = Vec::with_capacity(self.size_x1 * self.size_x2);
        for x2 in 0..self.size_x2 {
            for x1 in 0..self.size_x1 {
                let ramp = (x1 + x2 * 2 + channel * 40) % 4096;
                data.push(ramp as f64);
            }
        }
        Ok(Plane2D::new(self.size_x1, self.size_x2, data))
    }
}

fn write_ppm(image: &RenderedImage, path: &str) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut out = BufWriter::new(file);
    write!(out, "P6\n{} {}\n255\n", image.size_x1(), image.size_x2())?;
    out.write_all(image.as_bytes())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting stackrender demo...");

    let dims = PixelsDimensions::new(512, 384, 1, 3, 1)?.with_pixel_sizes(0.2, 0.2, 1.0);
    let source = GradientSource {
        size_x1: dims.size_x(),
        size_x2: dims.size_y(),
    };

    let mut chain = CodomainChain::default();
    chain.add(CodomainMap::ReverseIntensity);

    let def = RenderingDef::builder()
        .model(RenderingModel::Rgb)
        .channel(ChannelBinding::new(
            true,
            [255, 0, 0, 255],
            QuantumStrategy::linear(0.0, 4095.0),
        ))
        .channel(ChannelBinding::new(
            true,
            [0, 255, 0, 255],
            QuantumStrategy::linear(0.0, 4095.0),
        ))
        .channel(ChannelBinding::new(
            true,
            [0, 0, 255, 200],
            QuantumStrategy::linear(512.0, 3584.0),
        ))
        .codomain(chain)
        .build();

    let settings = SharedRenderingDef::new(def);
    let renderer = Renderer::new(source, dims, settings);
    let plane = PlaneDef::xy(0, 0);

    for (model, path) in [
        (RenderingModel::Greyscale, "plane_greyscale.ppm"),
        (RenderingModel::Rgb, "plane_rgb.ppm"),
        (RenderingModel::Hsb, "plane_hsb.ppm"),
    ] {
        renderer.settings().edit(|d| d.set_model(model));
        match renderer.render(&plane) {
            Ok(image) => {
                write_ppm(&image, path)?;
                info!(
                    model = ?model,
                    path,
                    bytes = image.as_bytes().len(),
                    "Rendered plane written"
                );
            }
            Err(e) => tracing::error!("Rendering failed: {}", e),
        }
    }

    Ok(())
}
