use super::*;
use crate::paint::palette::PALETTE;

fn center() -> Point {
    Point::new(400.0, 300.0)
}

#[test]
fn empty_selection_falls_back_to_default() {
    let c = radial_color(Point::new(10.0, 10.0), center(), 3.0, &ColorSelection::empty());
    assert_eq!(c, DEFAULT_COLOR);
}

#[test]
fn rings_cycle_through_selection_by_distance() {
    let sel = ColorSelection::new([0, 1, 4]).unwrap();
    let at = |d: f64| radial_color(center() + kurbo::Vec2::new(d, 0.0), center(), 0.0, &sel);
    assert_eq!(at(0.0), PALETTE[0]);
    assert_eq!(at(49.9), PALETTE[0]);
    assert_eq!(at(50.0), PALETTE[1]);
    assert_eq!(at(120.0), PALETTE[4]);
    assert_eq!(at(150.0), PALETTE[0]);
}

#[test]
fn clock_shifts_rings() {
    let sel = ColorSelection::new([0, 1]).unwrap();
    let p = center();
    assert_eq!(radial_color(p, center(), 0.0, &sel), PALETTE[0]);
    // 0.5 clock units shift by 50px: one full ring.
    assert_eq!(radial_color(p, center(), 0.5, &sel), PALETTE[1]);
    assert_eq!(radial_color(p, center(), 1.0, &sel), PALETTE[0]);
}

#[test]
fn same_inputs_give_same_color() {
    let sel = ColorSelection::new([2, 3]).unwrap();
    let p = Point::new(123.4, 567.8);
    let a = radial_color(p, center(), 0.4242, &sel);
    let b = radial_color(p, center(), 0.4242, &sel);
    assert_eq!(a, b);
}

#[test]
fn single_color_selection_is_uniform() {
    let sel = ColorSelection::single(3).unwrap();
    for d in [0.0, 33.0, 77.0, 501.0] {
        let p = center() + kurbo::Vec2::new(0.0, d);
        assert_eq!(radial_color(p, center(), 1.7, &sel), PALETTE[3]);
    }
}
