use quadpath::prelude::*;
use quadpath::coord;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see codec and envelope logging
    env_logger::init();

    println!("quadpath - Getting Started");
    println!("==========================\n");

    // Whole-globe codec
    let codec = QuadCodec::world();

    let nyc = Point::new(-74.0060, 40.7128);
    let path = codec.encode(&nyc, 12)?;
    let cell = codec.decode(&path);
    println!("NYC at precision 12: {}", path);
    println!(
        "  cell center ({:.5}, {:.5}), half-extent ({:.5}, {:.5})",
        cell.origin.x(),
        cell.origin.y(),
        cell.error.x,
        cell.error.y
    );

    // Adjacent cells
    let neighbors = codec.neighbors(&path)?;
    println!("  {} neighboring cells", neighbors.present().len());
    if let Some(north) = &neighbors.north {
        println!("  north neighbor: {}", north);
    }

    // Edge of the globe has no further neighbor
    let corner = codec.encode(&Point::new(180.0, 90.0), 4)?;
    println!(
        "Northeast corner {} has an eastern neighbor: {}",
        corner,
        codec.neighbor(&corner, 1, 0)?.is_some()
    );

    // Cells covering a bounding box
    let manhattan = Rect::new(coord! { x: -74.02, y: 40.70 }, coord! { x: -73.93, y: 40.80 });
    let cover = codec.envelope(&manhattan, 10)?;
    println!("\nManhattan is covered by {} cells at precision 10", cover.len());

    // Approximate nearest neighbors
    let precision = 16;
    let cities = [
        ("Brooklyn", -73.9442, 40.6782),
        ("Newark", -74.1724, 40.7357),
        ("Philadelphia", -75.1652, 39.9526),
        ("Boston", -71.0589, 42.3601),
        ("Los Angeles", -118.2437, 34.0522),
    ];
    let points = cities
        .iter()
        .map(|&(name, lng, lat)| {
            let point = Point::new(lng, lat);
            codec
                .encode(&point, precision)
                .map(|path| AnnotatedPoint::new(point, path, name))
        })
        .collect::<Result<Vec<_>>>()?;

    let target = AnnotatedPoint::unlabeled(nyc, codec.encode(&nyc, precision)?);
    println!("\nThree nearest cities to NYC:");
    for hit in k_nearest(&target, &points, precision, 3)? {
        println!("  {:<14} {:>10.1} km", hit.point.data, hit.distance / 1000.0);
    }

    // Custom region for finer cells over a small area
    let codec = CodecBuilder::new()
        .region(Region::new(-74.3, 40.4, -73.6, 41.0)?)
        .max_precision(20)
        .build()?;
    let local = codec.encode(&nyc, 8)?;
    println!("\nNYC in a metro-area region at precision 8: {}", local);
    println!("  cell bounds: {:?}", codec.bounding_box(&local));

    Ok(())
}
