mod common;

use approx::assert_abs_diff_eq;
use camino::Utf8Path;
use sky_sim::catalogue_io::read_catalogue_file;
use sky_sim::config::SimConfig;
use sky_sim::reference::{resolve, ReferencePoint};
use sky_sim::sky_sim::{run, simulate};
use sky_sim::SkySimError;

use common::{assert_catalogue_close, FORMAT_EPS};

#[test]
fn test_resolve_andromeda() {
    let (ra, dec) = (14.215420962967535, 41.26916666666667);
    let m31 = resolve("00:42:44.3", "41:16:09").unwrap();

    assert_abs_diff_eq!(m31.ra_deg, ra, epsilon = 1. / 3600.);
    assert_abs_diff_eq!(m31.dec_deg, dec, epsilon = 1. / 3600.);
}

#[test]
fn test_resolve_malformed() {
    assert!(matches!(
        resolve("bad", "41:16:09"),
        Err(SkySimError::ParseError { .. })
    ));
}

#[test]
fn test_default_run_shape() {
    let config = SimConfig {
        seed: Some(2023),
        ..Default::default()
    };
    let catalogue = simulate(&config).unwrap();
    let m31 = ReferencePoint::andromeda().unwrap();

    assert_eq!(catalogue.len(), 1_000);
    for (pos, star) in catalogue.iter().enumerate() {
        assert_eq!(star.id, pos as u64);
        assert!((star.ra - m31.ra_deg).abs() < 1.0);
        assert!((star.dec - m31.dec_deg).abs() < 1.0);
    }
}

#[test]
fn test_seeded_runs_match() {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8Path::from_path(dir.path()).unwrap();

    let first = SimConfig {
        ra_deg: Some(83.63),
        dec_deg: Some(-5.39),
        count: 300,
        seed: Some(99),
        output: root.join("a.csv"),
        ..Default::default()
    };
    let second = SimConfig {
        output: root.join("b.csv"),
        ..first.clone()
    };

    let a = run(&first).unwrap();
    let b = run(&second).unwrap();
    assert_eq!(a, b);

    let a_file = read_catalogue_file(&first.output).unwrap();
    let b_file = read_catalogue_file(&second.output).unwrap();
    assert_eq!(a_file, b_file);
    assert_catalogue_close(&a_file, &a, FORMAT_EPS);

    let text_a = std::fs::read_to_string(&first.output).unwrap();
    let text_b = std::fs::read_to_string(&second.output).unwrap();
    assert_eq!(text_a, text_b);
}

#[test]
fn test_empty_run() {
    let dir = tempfile::tempdir().unwrap();
    let output = Utf8Path::from_path(dir.path()).unwrap().join("empty.csv");

    let config = SimConfig {
        count: 0,
        seed: Some(0),
        output: output.clone(),
        ..Default::default()
    };
    assert!(run(&config).unwrap().is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "id,ra,dec\n");
}

#[cfg(not(feature = "plot"))]
#[test]
fn test_plot_requires_feature() {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8Path::from_path(dir.path()).unwrap();

    let config = SimConfig {
        count: 5,
        output: root.join("catalog.csv"),
        plot: Some(root.join("preview.svg")),
        ..Default::default()
    };
    assert!(matches!(
        run(&config),
        Err(SkySimError::InvalidArgument(_))
    ));
    assert!(!config.output.exists());
}

#[cfg(feature = "plot")]
#[test]
fn test_plot_written() {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8Path::from_path(dir.path()).unwrap();

    let config = SimConfig {
        count: 50,
        seed: Some(3),
        output: root.join("catalog.csv"),
        plot: Some(root.join("preview.svg")),
        ..Default::default()
    };
    run(&config).unwrap();
    assert!(root.join("preview.svg").exists());
}
