use anyhow::Result;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use test_log::test;

use crate::error::Error;
use crate::prelude::*;

const SIZE: u32 = 100;

fn configs() -> [WorldGeometry; 4] {
    let size = Point::new(SIZE, SIZE);
    [
        WorldGeometry::with_wrapping(size, false, false),
        WorldGeometry::with_wrapping(size, true, false),
        WorldGeometry::with_wrapping(size, false, true),
        WorldGeometry::with_wrapping(size, true, true),
    ]
}

#[test]
fn wrap_is_idempotent_and_in_range() {
    let world = WorldGeometry::with_wrapping(Point::new(SIZE, SIZE), true, true);
    for v in -350..350 {
        let w = world.wrap_x(v);
        assert!((0..SIZE as i32).contains(&w), "wrap_x({v}) = {w}");
        assert_eq!(world.wrap_x(w), w);

        let f = v as f32 * 0.73;
        let wf = world.wrap_y(f);
        assert!((0. ..SIZE as f32).contains(&wf), "wrap_y({f}) = {wf}");
        assert_eq!(world.wrap_y(wf), wf);
    }
}

#[test]
fn diff_is_short_and_antisymmetric() {
    let world = WorldGeometry::new(SIZE, SIZE);
    let half = SIZE as i32 / 2;
    for a in (-150..150).step_by(7) {
        for b in (-150..150).step_by(11) {
            let d = world.diff_x(a, b);
            assert!(d.abs() <= half);
            assert_eq!(world.wrap_x(b + d), world.wrap_x(a));
            if d != -half {
                assert_eq!(d, -world.diff_x(b, a), "diff_x({a}, {b})");
            }
        }
    }
}

#[test]
fn diff_tie_maps_to_negative_half() {
    let world = WorldGeometry::new(SIZE, SIZE);
    assert_eq!(world.diff_x(50, 0), -50);
    assert_eq!(world.diff_x(0, 50), -50);
    assert_eq!(world.diff_x(50f32, 0.), -50.);
}

#[test]
fn extreme_cells_do_not_overflow() {
    let world = WorldGeometry::new(SIZE, SIZE);
    assert_eq!(world.diff_x(i32::MAX - 10, 0), 37);
    assert_eq!(world.nearest_to_x(i32::MIN + 5, i32::MAX - 5), i32::MIN);
    assert_eq!(world.diff_y(i32::MIN, 1), i32::MIN);
    assert_eq!(
        world.midpoint(Point::new(0, i32::MAX), Point::new(10, i32::MAX)),
        Point::new(5, SIZE as i32)
    );
}

#[test]
fn worked_example() {
    let world = WorldGeometry::new(SIZE, SIZE);
    assert_eq!(world.diff_x(5, 95), 10);
    assert_eq!(world.diff_x(95, 5), -10);
    let parts = world.split_rect(Rect::from_sides(90f32, 10., 105., 20.));
    assert_eq!(
        parts.as_slice(),
        &[
            Rect::from_sides(90., 10., 100., 20.),
            Rect::from_sides(0., 10., 5., 20.),
        ]
    );
}

#[test]
fn shapes_inside_world_are_one_fragment() {
    let rect: Rect = Rect::from_sides(10., 20., 30., 40.);
    let line = Line::new(Point::new(80., 10.), Point::new(15., 90.));
    let poly = Polygon::from_verts(vec![
        Point::new(10., 10.),
        Point::new(90., 20.),
        Point::new(50., 90.),
    ]);
    for world in configs() {
        assert_eq!(world.split_rect(rect).as_slice(), &[rect]);
        assert_eq!(world.split_line(line, true).as_slice(), &[line]);
        assert_eq!(world.split_poly(&poly).as_slice(), &[poly.clone()]);
    }
}

#[test]
fn seam_rect_reconstructs_original() {
    let world = WorldGeometry::new(SIZE, SIZE);
    let s = SIZE as f32;
    let rect = Rect::from_sides(s - 2., 0., s + 2., 5.);
    let parts = world.split_rect(rect);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].area() + parts[1].area(), rect.area());

    let rejoined = parts[0].union(parts[1].translate(Point::new(s, 0.)));
    assert_eq!(rejoined, rect);
}

#[test]
fn seam_line_fragments_meet_at_seam() {
    let world = WorldGeometry::with_wrapping(Point::new(SIZE, SIZE), true, true);
    let line = Line::new(Point::new(90., 30.), Point::new(113., 41.));
    let parts = world.split_line(line, false);
    assert_eq!(parts.len(), 2);
    assert_relative_eq!(world.wrap(parts[0].end()), parts[1].start());
    assert_relative_eq!(parts[0].end().x, SIZE as f32);
    assert_relative_eq!(
        parts[0].length() + parts[1].length(),
        line.length(),
        epsilon = 1e-4
    );
}

#[test]
fn straddling_polygon_splits_in_two() {
    let world = WorldGeometry::with_wrapping(Point::new(SIZE, SIZE), true, true);
    let hexagon = Polygon::from_verts(vec![
        Point::new(20., -6.),
        Point::new(26., -3.),
        Point::new(26., 3.),
        Point::new(20., 6.),
        Point::new(14., 3.),
        Point::new(14., -3.),
    ]);
    let parts = world.split_poly(&hexagon);
    assert_eq!(parts.len(), 2);
    assert_abs_diff_eq!(
        parts[0].convex_area() + parts[1].convex_area(),
        hexagon.convex_area(),
        epsilon = 1e-3
    );
}

#[test]
fn rect_intersection_is_symmetric() {
    let rects = [
        Rect::from_sides(95., 95., 105., 105.),
        Rect::from_sides(1., 1., 3., 3.),
        Rect::from_sides(-4., 40., 2., 60.),
        Rect::from_sides(97., 45., 99., 50.),
        Rect::from_sides(40., 97., 50., 103.),
        Rect::from_sides(45., 2., 46., 3.),
    ];
    for world in configs() {
        for a in &rects {
            for b in &rects {
                assert_eq!(
                    world.rect_intersects_rect(a, b),
                    world.rect_intersects_rect(b, a),
                    "{a:?} vs {b:?} in {world:?}"
                );
            }
        }
    }
}

#[test]
fn null_geometry_is_flat() {
    let world = WorldGeometry::null();
    let rect = Rect::from_sides(-50., -50., 250., 250.);
    let line = Line::new(Point::new(-500., 3.), Point::new(700., -9.));
    let poly = Polygon::from(rect);
    assert_eq!(world.split_rect(rect).as_slice(), &[rect]);
    assert_eq!(world.split_line(line, false).as_slice(), &[line]);
    assert_eq!(world.split_poly(&poly).as_slice(), &[poly.clone()]);
    assert!(!world.crosses_wrap(Point::new(-5f32, -5.), Point::new(500., 500.)));
    assert_eq!(world.diff_x(5, 95), -90);
    assert!(world.rect_contains(&rect, Point::new(200., -20.)));
    assert!(!world.rect_contains(&rect, Point::new(300., 0.)));
}

#[test]
fn config_round_trips_through_toml() -> Result<()> {
    let world = WorldGeometry::from_toml(
        r#"
        size = [3000, 2000]
        x_wraps = true
        "#,
    )?;
    assert_eq!(world, WorldGeometry::new(3000, 2000));

    let text = toml::to_string(&world)?;
    let back: WorldGeometry = toml::from_str(&text)?;
    assert_eq!(back, world);
    Ok(())
}

#[test]
fn config_ignores_wrapping_on_empty_axis() -> Result<()> {
    let world = WorldGeometry::from_toml("size = [0, 100]\nx_wraps = true\ny_wraps = true\n")?;
    assert!(!world.wraps_x());
    assert!(world.wraps_y());
    assert_eq!(world.wrap_x(-5), -5);
    Ok(())
}

#[test]
fn bad_config_is_an_error() {
    let err = WorldGeometry::from_toml("size = 12").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
