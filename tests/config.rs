use std::io::Write;

use astronav::config::{
    AnomalyKind, ConfigError, find_body, find_scenario, load_bodies, load_scenarios,
};

#[test]
fn body_catalog_contains_earth_and_lutetia() {
    let bodies = load_bodies("configs/bodies").expect("bodies catalog");
    assert!(bodies.len() >= 4);

    let earth = find_body(&bodies, "earth").expect("case-insensitive lookup");
    assert!((earth.mu_m3_s2() - 3.986e14).abs() / 3.986e14 < 1e-3);
    assert!((earth.radius_m() - 6_378_136.6).abs() < 1.0);

    let lutetia = find_body(&bodies, "21 Lutetia").expect("alias lookup");
    assert_eq!(lutetia.name, "LUTETIA");

    assert!(matches!(
        find_body(&bodies, "VULCAN"),
        Err(ConfigError::UnknownBody(name)) if name == "VULCAN"
    ));
}

#[test]
fn scenarios_resolve_against_body_radius() {
    let bodies = load_bodies("configs/bodies").expect("bodies catalog");
    let scenarios = load_scenarios("configs/scenarios.yaml").expect("scenarios yaml");

    let leo = find_scenario(&scenarios, "leo_circular").expect("leo scenario");
    assert_eq!(leo.angle_units, "rad");
    assert_eq!(leo.anomaly, AnomalyKind::True);

    let survey = find_scenario(&scenarios, "lutetia_survey").expect("survey scenario");
    let body = find_body(&bodies, &survey.body).expect("scenario body");
    let elements = survey.resolved_elements(body);
    assert!((elements[0] - 15.0 * 62_000.0).abs() < 1e-6);
    assert_eq!(&elements[1..], &[0.1, 45.0, 15.0, 135.0, 77.0]);

    let molniya = find_scenario(&scenarios, "MOLNIYA").expect("molniya scenario");
    assert_eq!(molniya.anomaly, AnomalyKind::Mean);

    assert!(matches!(
        find_scenario(&scenarios, "missing"),
        Err(ConfigError::UnknownScenario(_))
    ));
}

#[test]
fn single_toml_and_yaml_files_load() {
    let dir = tempfile::tempdir().expect("tempdir");

    let toml_path = dir.path().join("phobos.toml");
    let mut f = std::fs::File::create(&toml_path).expect("create toml");
    writeln!(f, "name = \"PHOBOS\"\nmu_km3_s2 = 7.087e-4\nradius_km = 13.0").unwrap();
    let bodies = load_bodies(&toml_path).expect("toml body");
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].aliases.is_empty());

    let yaml_path = dir.path().join("scenarios.yaml");
    std::fs::write(
        &yaml_path,
        "- name: defaulted\n  body: PHOBOS\n  elements: [20000.0, 0.01, 1.0, 0.0, 0.0, 0.0]\n",
    )
    .unwrap();
    let scenarios = load_scenarios(&yaml_path).expect("yaml scenarios");
    assert_eq!(scenarios[0].angle_units, "deg");
    assert_eq!(scenarios[0].sma_body_radii, None);
}

#[test]
fn malformed_files_report_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let yaml_path = dir.path().join("bad.yaml");
    std::fs::write(&yaml_path, "- name: short\n  body: EARTH\n  elements: [1.0, 2.0]\n").unwrap();
    assert!(matches!(
        load_scenarios(&yaml_path),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        load_bodies(dir.path().join("absent.yaml")),
        Err(ConfigError::Io(_))
    ));
}
