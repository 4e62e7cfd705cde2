use configurator_core::*;

#[test]
fn defaults_match_demo_panel() {
    let p = ConfiguratorParams::default();
    assert!(p.shadows);
    assert_eq!(p.height(), 0.0);
    assert_eq!(p.exposure(), 0.5);
    assert_eq!(p.background.to_hex(), "#a3a3a3");
    assert_eq!(p.fov_degrees(), 56.0);
    assert!(!p.debug);
}

#[test]
fn setters_clamp_like_sliders() {
    let mut p = ConfiguratorParams::default();
    p.set_height(1.7).unwrap();
    assert_eq!(p.height(), 1.0);
    p.set_height(-0.2).unwrap();
    assert_eq!(p.height(), 0.0);
    p.set_exposure(9.0).unwrap();
    assert_eq!(p.exposure(), 5.0);
    p.set_fov_degrees(2.0).unwrap();
    assert_eq!(p.fov_degrees(), 10.0);
    p.set_fov_degrees(140.0).unwrap();
    assert_eq!(p.fov_degrees(), 100.0);
}

#[test]
fn non_finite_values_are_rejected_and_leave_state() {
    let mut p = ConfiguratorParams::default();
    assert_eq!(
        p.set_exposure(f32::NAN),
        Err(ParamsError::NonFinite { field: "exposure" })
    );
    assert_eq!(p.exposure(), 0.5);
    assert!(p.set_fov_degrees(f32::INFINITY).is_err());
    assert_eq!(p.fov_degrees(), 56.0);
}

#[test]
fn hex_colours_parse() {
    assert_eq!(Rgb::from_hex("#a3a3a3").unwrap(), Rgb::new(0xa3, 0xa3, 0xa3));
    assert_eq!(Rgb::from_hex("102030").unwrap(), Rgb::new(0x10, 0x20, 0x30));
    assert_eq!(Rgb::from_hex("#fA0").unwrap(), Rgb::new(0xff, 0xaa, 0x00));
    assert_eq!(Rgb::from_hex("  #000000 ").unwrap(), Rgb::new(0, 0, 0));
}

#[test]
fn bad_hex_colours_fail() {
    for input in ["", "#", "#12345", "#gg0000", "#1234567", "#ééé"] {
        match Rgb::from_hex(input) {
            Err(ParamsError::InvalidColor { input: got }) => assert_eq!(got, input),
            other => panic!("{input:?} parsed as {other:?}"),
        }
    }
    let mut p = ConfiguratorParams::default();
    assert!(p.set_background_hex("nope").is_err());
    assert_eq!(p.background.to_hex(), "#a3a3a3");
    p.set_background_hex("#737977").unwrap();
    assert_eq!(p.background, Rgb::new(0x73, 0x79, 0x77));
}

#[test]
fn scaled_colour_saturates() {
    let c = Rgb::new(100, 200, 10);
    assert_eq!(c.scaled(0.5), Rgb::new(50, 100, 5));
    assert_eq!(c.scaled(2.0), Rgb::new(200, 255, 20));
    assert_eq!(c.scaled(-1.0), Rgb::new(0, 0, 0));
    assert_eq!(c.scaled(f32::NAN), c);
}
