//! Basic integration tests for mcxplot-rs.
//!
//! Note: mcxplot keeps its options in process-wide state, so everything that
//! initializes, reconfigures or shuts it down runs in a single test function.

use std::path::{Path, PathBuf};

use mcxplot::*;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mcxplot_basics_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn read_page(path: &Path) -> String {
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
    std::fs::read_to_string(path).expect("figure page should be readable")
}

/// Main integration test that runs all basic tests in sequence.
#[test]
fn test_basics() {
    let dir = scratch_dir();

    // Plotting works before init() with the default options.
    assert!(!is_initialized());
    assert_eq!(options(), Options::default());
    assert!(matches!(
        set_options(Options::default()),
        Err(McxPlotError::NotInitialized)
    ));

    init_with_options(Options {
        output_dir: Some(dir.clone()),
        ..Options::default()
    })
    .expect("init failed");
    assert!(is_initialized());
    assert!(matches!(init(), Err(McxPlotError::AlreadyInitialized)));

    // Test 1: Volume slices are written into the output directory
    {
        let field = VolumeField::from_fn(UVec3::new(6, 5, 4), |i, j, k| f64::from(i + j + k))
            .expect("valid field");
        let path = plot_3d_slices(&field, SliceIndices::default()).expect("plot failed");
        assert_eq!(path.parent(), Some(dir.as_path()));
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("volume_slices_"), "{file_name}");

        let page = read_page(&path);
        assert!(page.contains("Plotly.newPlot"));
        assert!(page.contains("3D Surface Slices of Logarithmic Data"));
        assert!(page.contains("width: 800px; height: 800px;"));
    }

    // Test 2: Mesh plot
    {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let faces = vec![UVec3::new(0, 1, 2)];
        let path = plot_mesh(&vertices, &faces, DEFAULT_MESH_COLOR, FilterThresholds::none())
            .expect("plot failed");
        let page = read_page(&path);
        assert!(page.contains(r#""type":"mesh3d""#));
        assert!(page.contains(r#""type":"scatter3d""#));
        assert!(page.contains("width: 700px; height: 700px;"));
    }

    // Test 3: Two figures in a row never share a file
    {
        let field = VolumeField::new(UVec3::ONE, vec![1.0]).expect("valid field");
        let a = plot_3d_slices(&field, SliceIndices::default()).expect("plot failed");
        let b = plot_3d_slices(&field, SliceIndices::default()).expect("plot failed");
        assert_ne!(a, b);
    }

    // Test 4: Changed options apply to the next figure
    {
        set_options(Options {
            output_dir: Some(dir.clone()),
            slice_title: "Fluence".to_string(),
            slice_colormap: "viridis".to_string(),
            ..Options::default()
        })
        .expect("set_options failed");

        let field = VolumeField::new(UVec3::ONE, vec![1.0]).expect("valid field");
        let page = read_page(&plot_3d_slices(&field, SliceIndices::default()).unwrap());
        assert!(page.contains("<title>Fluence</title>"));
        // First viridis stop
        assert!(page.contains("rgb(68,1,84)"));
    }

    // Test 5: Errors come back to the caller and write nothing
    {
        let before = std::fs::read_dir(&dir).unwrap().count();

        let field = VolumeField::new(UVec3::splat(2), vec![0.0; 8]).expect("valid field");
        let err = plot_3d_slices(&field, SliceIndices::new(0, 0, 2)).unwrap_err();
        assert!(matches!(
            err,
            McxPlotError::IndexOutOfRange {
                axis: 'z',
                index: 2,
                extent: 2
            }
        ));

        let err = plot_mesh(
            &[DVec3::ZERO],
            &[UVec3::new(0, 0, 1)],
            "blue",
            FilterThresholds::none(),
        )
        .unwrap_err();
        assert!(matches!(err, McxPlotError::InvalidFaceIndex { .. }));

        let err = plot_mesh(&[DVec3::ZERO], &[], "#zz0000", FilterThresholds::none()).unwrap_err();
        assert!(matches!(err, McxPlotError::InvalidColor(_)));

        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), before);
    }

    // Test 6: Unknown color map names surface as render errors
    {
        set_options(Options {
            output_dir: Some(dir.clone()),
            slice_colormap: "no-such-map".to_string(),
            ..Options::default()
        })
        .unwrap();
        let field = VolumeField::new(UVec3::ONE, vec![1.0]).unwrap();
        let err = plot_3d_slices(&field, SliceIndices::default()).unwrap_err();
        assert!(matches!(err, McxPlotError::RenderError(msg) if msg.contains("no-such-map")));
    }

    // Shutdown
    shutdown();
    assert!(!is_initialized());
    assert_eq!(options(), Options::default());

    let _ = std::fs::remove_dir_all(&dir);
}
