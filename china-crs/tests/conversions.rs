use approx::assert_abs_diff_eq;
use china_crs::geo::{out_of_china, GeoRect};
use china_crs::{lonlat, BdPoint, FrameKind, GcjPoint, GeoPoint, GeoPoint2d, WgsPoint};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Points covering the obfuscation area with a step of about one degree, avoiding its edges.
fn china_grid() -> impl Iterator<Item = (f64, f64)> {
    (74..135).flat_map(|lon| (4..54).map(move |lat| (lon as f64 + 0.37, lat as f64 + 0.21)))
}

/// Whole obfuscation area with a step of 0.1 degree.
fn dense_china_grid() -> impl Iterator<Item = (f64, f64)> {
    (737..=1350).flat_map(|lon| {
        (39..=535).map(move |lat| (f64::from(lon) / 10.0, f64::from(lat) / 10.0))
    })
}

#[test]
fn wgs_gcj_round_trip() {
    for (lon, lat) in dense_china_grid() {
        let gcj = GcjPoint::new(lon, lat);
        assert_abs_diff_eq!(gcj.to_wgs().to_gcj(), gcj, epsilon = 1e-4);

        let wgs = WgsPoint::new(lon, lat);
        assert_abs_diff_eq!(wgs.to_gcj().to_wgs(), wgs, epsilon = 1e-4);
    }
}

#[test]
fn round_trip_error_is_largest_in_the_north() {
    let gcj = GcjPoint::new(129.0, 53.5);
    let round_trip = gcj.to_wgs().to_gcj();
    let error = (round_trip.lon() - gcj.lon())
        .abs()
        .max((round_trip.lat() - gcj.lat()).abs());

    assert!(error > 5e-5, "{error}");
    assert!(error < 1e-4, "{error}");
}

#[test]
fn precise_wgs_gcj_round_trip() {
    for (lon, lat) in china_grid() {
        let gcj = GcjPoint::new(lon, lat);
        assert_abs_diff_eq!(
            gcj.to_wgs_precise(1e-9, 10).to_gcj(),
            gcj,
            epsilon = 1e-9
        );
    }
}

#[test]
fn gcj_bd_round_trip() {
    for (lon, lat) in china_grid() {
        let gcj = GcjPoint::new(lon, lat);
        assert_abs_diff_eq!(gcj.to_bd().to_gcj(), gcj, epsilon = 1e-5);
    }

    for lon in (-180..180).step_by(7) {
        for lat in (-89..90).step_by(7) {
            let gcj = GcjPoint::new(lon as f64 + 0.3, lat as f64 + 0.1);
            assert_abs_diff_eq!(gcj.to_bd().to_gcj(), gcj, epsilon = 1e-5);
        }
    }
}

#[test]
fn bypass_outside_of_china() {
    let rect = GeoRect::CHINA;
    let outside = [
        (rect.lon_min(), 30.0),
        (rect.lon_max(), 30.0),
        (100.0, rect.lat_min()),
        (100.0, rect.lat_max()),
        (rect.lon_min() - 10.0, 30.0),
        (rect.lon_max() + 10.0, 30.0),
        (100.0, rect.lat_min() - 10.0),
        (100.0, rect.lat_max() + 10.0),
        (-74.006, 40.7128),
        (0.0, 0.0),
        (1000.0, -1000.0),
    ];

    for (lon, lat) in outside {
        assert!(out_of_china(&lonlat!(lon, lat)));
        assert_eq!(WgsPoint::new(lon, lat).to_gcj(), GcjPoint::new(lon, lat));
        assert_eq!(GcjPoint::new(lon, lat).to_wgs(), WgsPoint::new(lon, lat));
    }
}

#[test]
fn obfuscation_inside_of_china() {
    for (lon, lat) in china_grid() {
        let wgs = WgsPoint::new(lon, lat);
        assert_ne!(wgs.to_gcj(), GcjPoint::new(lon, lat));
    }
}

#[test]
fn conversions_are_deterministic() {
    let wgs = WgsPoint::new(121.4737, 31.2304);
    let gcj = GcjPoint::new(121.4737, 31.2304);
    let bd = BdPoint::new(121.4737, 31.2304);

    for _ in 0..10 {
        let repeated = WgsPoint::new(121.4737, 31.2304).to_gcj();
        assert_eq!(wgs.to_gcj().lon().to_bits(), repeated.lon().to_bits());
        assert_eq!(wgs.to_gcj().lat().to_bits(), repeated.lat().to_bits());
        assert_eq!(wgs.to_bd(), WgsPoint::new(121.4737, 31.2304).to_bd());
        assert_eq!(gcj.to_wgs(), GcjPoint::new(121.4737, 31.2304).to_wgs());
        assert_eq!(bd.to_wgs(), BdPoint::new(121.4737, 31.2304).to_wgs());
    }
}

#[test]
fn composite_conversions_go_through_gcj() {
    for (lon, lat) in china_grid().step_by(13) {
        let wgs = WgsPoint::new(lon, lat);
        let via_gcj = wgs.to_gcj().to_bd();
        let direct = wgs.to_bd();
        assert_eq!(direct.lon().to_bits(), via_gcj.lon().to_bits());
        assert_eq!(direct.lat().to_bits(), via_gcj.lat().to_bits());

        let bd = BdPoint::new(lon, lat);
        assert_eq!(bd.to_wgs(), bd.to_gcj().to_wgs());
    }
}

#[test]
fn regression_fixtures() {
    let (lon, lat) = (128.543, 37.065);

    let gcj = GcjPoint::new(lon, lat);
    assert_abs_diff_eq!(
        gcj.to_wgs(),
        WgsPoint::new(128.53779452050244, 37.06434895051018),
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        gcj.to_bd(),
        BdPoint::new(128.54944656269413, 37.07113427883019),
        epsilon = 1e-9
    );

    let wgs = WgsPoint::new(lon, lat);
    assert_abs_diff_eq!(
        wgs.to_gcj(),
        GcjPoint::new(128.54820547949757, 37.065651049489816),
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        wgs.to_bd(),
        BdPoint::new(128.55468192918485, 37.07168344938498),
        epsilon = 1e-9
    );

    let bd = BdPoint::new(lon, lat);
    assert_abs_diff_eq!(
        bd.to_gcj(),
        GcjPoint::new(128.5365893261212, 37.058754503281534),
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        bd.to_wgs(),
        WgsPoint::new(128.53136876750008, 37.0580926428705),
        epsilon = 1e-9
    );

    let beijing = WgsPoint::new(116.404, 39.915);
    assert_abs_diff_eq!(
        beijing.to_gcj(),
        GcjPoint::new(116.41024449916938, 39.91640428150164),
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        beijing.to_bd(),
        BdPoint::new(116.41662724378733, 39.922699552216216),
        epsilon = 1e-9
    );
}

#[test]
fn runtime_frames() {
    init_logger();

    let point = lonlat!(116.404, 39.915);
    let from: FrameKind = "wgs84".parse().expect("known frame");
    let to: FrameKind = "bd09".parse().expect("known frame");

    let converted = from.transform(to, point);
    let back = to.transform(from, converted);

    assert_eq!(
        converted,
        GeoPoint2d::from(WgsPoint::new(116.404, 39.915).to_bd())
    );
    assert_abs_diff_eq!(back, point, epsilon = 1e-4);
}

#[test]
fn nan_passes_through() {
    let wgs = WgsPoint::new(f64::NAN, f64::NAN);
    let bd = wgs.to_bd();
    assert!(bd.lon().is_nan());
    assert!(bd.lat().is_nan());
    assert!(bd.to_wgs().lon().is_nan());
}
