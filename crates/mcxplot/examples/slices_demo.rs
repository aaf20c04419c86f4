//! Demo showing orthogonal slices through a synthetic fluence volume.
//!
//! The field mimics a pencil beam entering a scattering medium from the top:
//! the value decays exponentially with depth and with distance from the beam
//! axis, and is shown on a logarithmic scale.

use mcxplot::*;

fn main() -> Result<()> {
    init()?;

    let dim = UVec3::new(60, 60, 60);
    let source = DVec3::new(29.5, 29.5, 0.0);
    let field = VolumeField::from_fn(dim, |i, j, k| {
        let p = DVec3::new(f64::from(i), f64::from(j), f64::from(k));
        let radial = (p - source).truncate().length();
        let depth = p.z;
        let fluence = (-0.08 * depth - 0.15 * radial).exp();
        fluence.max(1e-12).log10()
    })?;

    // Center slices on X and Y, a shallow one on Z
    let indices = SliceIndices {
        z: Some(10),
        ..SliceIndices::default()
    };
    let path = plot_3d_slices(&field, indices)?;
    println!("Slices written to {}", path.display());

    // The same figure with a different color map, exported as JSON
    set_options(Options {
        slice_colormap: "viridis".to_string(),
        ..options()
    })?;
    let figure = slices_figure(&field, indices, &options())?;
    let json_path = std::env::temp_dir().join("slices_demo.json");
    render_to_file(&figure, &json_path)?;
    println!("Figure JSON written to {}", json_path.display());

    shutdown();
    Ok(())
}
