use quadpath::{
    AnnotatedPoint, Path, Point, QuadCodec, QuadError, Rect, Region, coord, k_nearest,
};
use serde::{Deserialize, Serialize};

/// Test 1: Extreme coordinate values
#[test]
fn test_extreme_coordinates() {
    let codec = QuadCodec::world();

    let north_pole = Point::new(0.0, 90.0);
    let south_pole = Point::new(0.0, -90.0);
    let date_line_east = Point::new(180.0, 0.0);
    let date_line_west = Point::new(-180.0, 0.0);

    for point in [north_pole, south_pole, date_line_east, date_line_west] {
        let path = codec.encode(&point, 24).expect("Failed to encode extreme point");
        assert!(codec.decode(&path).contains(&point));
    }

    // No wrap-around: the east edge has no eastern neighbor
    let east_edge = codec.encode(&date_line_east, 10).unwrap();
    assert_eq!(codec.neighbor(&east_edge, 1, 0).unwrap(), None);
}

/// Test 2: Coordinates outside the region alias onto edge cells
#[test]
fn test_out_of_region_aliasing() {
    let region = Region::new(0.0, 0.0, 10.0, 10.0).unwrap();
    let codec = QuadCodec::new(region);

    let outside = Point::new(-50.0, 5.2);
    assert!(!region.contains(&outside));

    let path = codec.encode(&outside, 6).unwrap();
    let bbox = codec.bounding_box(&path);
    assert_eq!(bbox.min().x, 0.0);
    assert!(!codec.decode(&path).contains(&outside));
}

/// Test 3: Zero-area region
#[test]
fn test_zero_area_region() {
    let codec = QuadCodec::new(Region::new(3.0, 4.0, 3.0, 4.0).unwrap());
    let path = codec.encode(&Point::new(3.0, 4.0), 5).unwrap();
    let cell = codec.decode(&path);
    assert_eq!(cell.origin, Point::new(3.0, 4.0));
    assert_eq!((cell.error.x, cell.error.y), (0.0, 0.0));
}

/// Test 4: Malformed path strings never decode
#[test]
fn test_malformed_paths() {
    let codec = QuadCodec::world();
    for bad in ["E", "a", "AB C", "AAAA0", "ÅB"] {
        assert!(
            matches!(codec.decode_str(bad), Err(QuadError::InvalidPath { .. })),
            "{:?} should be rejected",
            bad
        );
    }
    assert!(codec.decode_str("").is_ok());
}

/// Test 5: Maximum precision still separates neighboring cells
#[test]
fn test_maximum_precision() {
    let codec = QuadCodec::world();
    let max = codec.max_precision();
    let point = Point::new(-74.0060, 40.7128);

    let path = codec.encode(&point, max).unwrap();
    assert_eq!(path.len(), max);

    let east = codec.neighbor(&path, 1, 0).unwrap().unwrap();
    assert_ne!(east, path);
    assert_eq!(codec.neighbor(&east, -1, 0).unwrap(), Some(path));
}

/// Test 6: Envelope hugging the region corner terminates
#[test]
fn test_envelope_at_region_corner() {
    let region = Region::new(-1.0, -1.0, 1.0, 1.0).unwrap();
    let codec = QuadCodec::new(region);
    let bbox = Rect::new(coord! { x: 0.9, y: 0.9 }, coord! { x: 5.0, y: 5.0 });

    let cells = codec.envelope(&bbox, 8).unwrap();
    // 0.9..1.0 spans 13 columns and 13 rows of 2/256-wide cells
    assert_eq!(cells.len(), 13 * 13);
}

/// Test 7: k larger than the input
#[test]
fn test_k_exceeds_points() {
    let codec = QuadCodec::world();
    let encode = |lng: f64, lat: f64| {
        let point = Point::new(lng, lat);
        AnnotatedPoint::unlabeled(point, codec.encode(&point, 6).unwrap())
    };

    let target = encode(0.0, 0.0);
    let points = vec![encode(1.0, 1.0), encode(-1.0, -1.0), encode(50.0, 50.0)];
    let results = k_nearest(&target, &points, 6, 1_000).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].point.point, Point::new(50.0, 50.0));
}

/// Test 8: Paths embed in serialized records as plain strings
#[test]
fn test_path_in_serialized_record() {
    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Record {
        name: String,
        cell: Path,
    }

    let codec = QuadCodec::world();
    let record = Record {
        name: "nyc".to_string(),
        cell: codec.encode(&Point::new(-74.0060, 40.7128), 8).unwrap(),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(&format!("\"cell\":\"{}\"", record.cell)));

    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);

    assert!(serde_json::from_str::<Record>(r#"{"name":"x","cell":"AQ"}"#).is_err());
}
