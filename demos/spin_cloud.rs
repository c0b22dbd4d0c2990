//! Spin a helix of LEDs about a tilted axis
//!
//! Builds a point cloud, then for a few frames resets each working vector to
//! its point, rotates it and maps the result back by index. Set `RUST_LOG=debug`
//! to see the library's own logging.

use anyhow::Context;
use ledspace_core::PointCloud;
use tracing::info;
use tracing_subscriber::EnvFilter;

const POINTS: usize = 24;
const FRAMES: usize = 4;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cloud: PointCloud = (0..POINTS)
        .map(|i| {
            let t = i as f32 * 0.5;
            [t.cos(), t.sin(), i as f32 / POINTS as f32]
        })
        .collect();
    let (min, max) = cloud.bounds().context("cloud has no points")?;
    info!(points = cloud.len(), ?min, ?max, "cloud ready");

    let mut vectors = cloud.vectors();
    for frame in 0..FRAMES {
        let theta = frame as f32 * std::f32::consts::FRAC_PI_4;
        for (v, point) in vectors.iter_mut().zip(&cloud) {
            v.set(point.x(), point.y(), point.z())
                .rotate_about(theta, 1.0, 0.0, 1.0)
                .limit(1.0);
        }

        let highest = vectors
            .iter()
            .max_by(|a, b| a.z.total_cmp(&b.z))
            .context("no vectors to inspect")?;
        let source = cloud.source_of(highest)?;
        println!("frame {frame}: highest LED is #{} at {highest}", source.index());
    }

    Ok(())
}
