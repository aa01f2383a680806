mod convex {
  use convex2d::algorithms::*;
  use convex2d::data::*;
  use convex2d::sampling::*;
  use convex2d::*;

  use claims::{assert_err, assert_ok};
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
  }

  // Equal as cyclic sequences.
  fn same_ring(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len()
      && (0..a.len()).any(|offset| (0..a.len()).all(|i| a[(i + offset) % a.len()] == b[i]))
  }

  #[test]
  fn square_hull() -> Result<(), Error> {
    let hull = convex_hull(pts(&[
      (1.0, 1.0),
      (-1.0, 1.0),
      (-1.0, -1.0),
      (1.0, -1.0),
      (0.0, 0.0),
    ]))?;
    let corners = pts(&[(-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (1.0, 1.0)]);
    assert!(same_ring(hull.vertices(), &corners));
    assert!(!hull.vertices().contains(&Point::new([0.0, 0.0])));
    assert!(point_in_polygon(&Point::new([0.0, 0.0]), &hull)?);
    Ok(())
  }

  #[test]
  fn colinear_hull() {
    assert_eq!(
      convex_hull(pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])),
      Err(Error::CollinearPoints)
    );
  }

  #[test]
  fn two_point_hull() {
    assert_eq!(
      convex_hull(pts(&[(0.0, 0.0), (3.0, 4.0)])),
      Err(Error::InsufficientPoints { count: 2 })
    );
  }

  #[test]
  fn unit_square_containment() -> Result<(), Error> {
    let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert!(point_in_polygon(&Point::new([0.5, 0.5]), &square)?);
    assert!(!point_in_polygon(&Point::new([2.0, 2.0]), &square)?);
    Ok(())
  }

  #[test]
  fn square_intersections() -> Result<(), Error> {
    let square = pts(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]);
    let overlapping = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    let disjoint = pts(&[(1.5, 1.0), (2.5, 1.0), (1.5, -1.0), (2.5, -1.0)]);
    assert!(do_intersect(&square, &overlapping)?);
    assert!(!do_intersect(&square, &disjoint)?);
    Ok(())
  }

  #[test]
  fn validated_polygons() -> Result<(), Error> {
    let square = ConvexPolygon::new(pts(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]))?;
    let shifted = square.translate(&Vector([1.5, 0.0]));
    assert!(square.intersects(&shifted));
    assert!(!square.intersects(&square.translate(&Vector([2.5, 0.0]))));
    assert_err!(ConvexPolygon::new(pts(&[
      (-1.0, -1.0),
      (-1.0, 1.0),
      (1.0, 1.0),
      (1.0, -1.0)
    ])));
    Ok(())
  }

  #[test]
  fn random_hulls() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(1);
    let distributions = [
      PointDistribution::Uniform {
        min: -2.0,
        max: 2.0,
      },
      PointDistribution::Normal {
        mean: 5.0,
        std_dev: 2.0,
      },
    ];
    for dist in distributions.iter() {
      for _ in 0..20 {
        let points = sample_points(dist, 200, &mut rng);
        let hull = convex_hull(points.clone())?;
        assert_ok!(hull.validate());
        for pt in hull.iter() {
          assert!(points.contains(pt));
        }
        assert!(point_in_polygon(&hull.centroid(), &hull)?);
        assert!(do_intersect(&hull, &hull)?);
        let again = convex_hull(hull.vertices().to_vec())?;
        assert!(same_ring(again.vertices(), hull.vertices()));
      }
    }
    Ok(())
  }

  #[test]
  fn square_with_random_interior() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut points = pts(&[(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)]);
    let inside = PointDistribution::Uniform {
      min: -1.0,
      max: 1.0,
    };
    points.extend(sample_points(&inside, 1000, &mut rng));
    let hull = convex_hull(points.clone())?;
    assert_eq!(hull.len(), 4);
    for pt in points.iter() {
      assert!(point_in_polygon(pt, &hull)?);
    }
    Ok(())
  }

  #[test]
  fn plotting_closes_ring() -> Result<(), Error> {
    let hull = convex_hull(pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]))?;
    let coords = hull.to_coordinates();
    assert_eq!(coords.len(), hull.len() + 1);
    assert_eq!(coords.xs.first(), coords.xs.last());
    assert_eq!(coords.ys.first(), coords.ys.last());
    Ok(())
  }
}
