use super::*;
use proptest::prelude::*;

fn rect(w: i32, h: i32, x: i32, y: i32) -> Rectangle {
    Rectangle::new(w, h, Position::new(x, y)).unwrap()
}

#[test]
fn origin_is_zero_and_default() {
    assert_eq!(Position::origin(), Position::new(0, 0));
    assert_eq!(Position::ORIGIN, Position::default());
    assert_eq!(Rectangle::with_size(2, 3).unwrap().pos(), Position::ORIGIN);
}

#[test]
fn position_and_vector_translate() {
    let mut p = Position::new(1, 2);
    p += Vector::new(3, -4);
    assert_eq!(p, Position::new(4, -2));
    assert_eq!(Vector::new(1, 1) + p, Position::new(5, -1));
    assert_eq!(p.reflection(), Position::new(-2, 4));

    let mut v = Vector::new(1, 2);
    v.translate(Vector::new(10, 20));
    assert_eq!(v, Vector::new(11, 22));
    assert_eq!(v.reflection(), Vector::new(22, 11));
    assert_eq!(Position::new(5, 5) - Position::new(2, 7), Vector::new(3, -2));
    assert_eq!(-Vector::new(3, -2), Vector::new(-3, 2));
}

#[test]
fn nalgebra_round_trip() {
    let p: nalgebra::Point2<i32> = Position::new(3, -1).into();
    assert_eq!(p, nalgebra::Point2::new(3, -1));
    assert_eq!(Position::from(p), Position::new(3, -1));
    let v: nalgebra::Vector2<i32> = Vector::new(2, 5).into();
    assert_eq!(Vector::from(v), Vector::new(2, 5));
}

#[test]
fn area_examples() {
    assert_eq!(Rectangle::with_size(3, 5).unwrap().area(), 15);
    assert_eq!(Rectangle::with_size(0, 5).unwrap().area(), 0);
    assert_eq!(
        Rectangle::with_size(i32::MAX, i32::MAX).unwrap().area(),
        (i32::MAX as u64) * (i32::MAX as u64)
    );
}

#[test]
fn negative_size_is_rejected() {
    assert_eq!(
        Rectangle::with_size(-1, 5),
        Err(GeometryError::NegativeSize {
            width: -1,
            height: 5
        })
    );
    assert!(Rectangle::new(3, -2, Position::new(1, 1)).is_err());
}

#[test]
fn rectangle_reflection_and_translation() {
    let r = rect(4, 6, 1, 2);
    assert_eq!(r.reflection(), rect(6, 4, 2, 1));
    assert_eq!(r + Vector::new(1, -1), rect(4, 6, 2, 1));
    assert_eq!(Vector::new(1, -1) + r, rect(4, 6, 2, 1));
    let mut m = r;
    m += Vector::new(-1, -2);
    assert_eq!(m, rect(4, 6, 0, 0));
}

#[test]
fn split_horizontally_example() {
    let r = rect(4, 6, 0, 0);
    let (lower, upper) = r.split_horizontally(2).unwrap();
    assert_eq!(lower, rect(4, 2, 0, 0));
    assert_eq!(upper, rect(4, 4, 0, 2));
    assert_eq!(merge_horizontally(&lower, &upper).unwrap(), r);
}

#[test]
fn split_vertically_example() {
    let r = rect(4, 6, 1, 2);
    let (left, right) = r.split_vertically(1).unwrap();
    assert_eq!(left, rect(1, 6, 1, 2));
    assert_eq!(right, rect(3, 6, 2, 2));
    assert!(is_mergeable_vertically(&left, &right));
    assert_eq!(merge_vertically(&left, &right).unwrap(), r);
}

#[test]
fn split_at_bounds_gives_empty_parts() {
    let r = rect(4, 6, 0, 0);
    let (lower, upper) = r.split_horizontally(0).unwrap();
    assert_eq!(lower, rect(4, 0, 0, 0));
    assert_eq!(upper, r);
    let (left, right) = r.split_vertically(4).unwrap();
    assert_eq!(left, r);
    assert_eq!(right, rect(0, 6, 4, 0));
}

#[test]
fn split_cut_out_of_range() {
    let r = rect(4, 6, 0, 0);
    assert_eq!(
        r.split_horizontally(7),
        Err(GeometryError::CutOutOfRange { cut: 7, extent: 6 })
    );
    assert_eq!(
        r.split_horizontally(-1),
        Err(GeometryError::CutOutOfRange { cut: -1, extent: 6 })
    );
    // Vertical cuts are bounded by the width.
    assert!(r.split_vertically(5).is_err());
    assert!(r.split_vertically(4).is_ok());
}

#[test]
fn merge_rejects_non_adjacent() {
    let a = rect(4, 2, 0, 0);
    // gap
    assert_eq!(
        merge_horizontally(&a, &rect(4, 3, 0, 3)),
        Err(GeometryError::NotMergeable {
            axis: Axis::Horizontal
        })
    );
    // width mismatch
    assert!(!is_mergeable_horizontally(&a, &rect(5, 3, 0, 2)));
    // wrong order
    assert!(merge_horizontally(&rect(4, 3, 0, 2), &a).is_err());
    assert_eq!(
        merge_vertically(&a, &rect(1, 3, 4, 0)),
        Err(GeometryError::NotMergeable {
            axis: Axis::Vertical
        })
    );
}

#[test]
fn collection_split_example() {
    let mut rs = Rectangles::from(vec![rect(4, 6, 0, 0)]);
    rs.split_horizontally(0, 2).unwrap();
    assert_eq!(rs.size(), 2);
    assert_eq!(rs[0], rect(4, 2, 0, 0));
    assert_eq!(rs[1], rect(4, 4, 0, 2));
    rs.merge_adjacent(0, Axis::Horizontal).unwrap();
    assert_eq!(rs, Rectangles::from(vec![rect(4, 6, 0, 0)]));
}

#[test]
fn collection_split_inserts_after_index() {
    let mut rs: Rectangles = vec![rect(1, 1, 0, 0), rect(4, 4, 10, 0), rect(2, 2, 20, 0)]
        .into_iter()
        .collect();
    rs.split_vertically(1, 3).unwrap();
    let expected = Rectangles::from(vec![
        rect(1, 1, 0, 0),
        rect(3, 4, 10, 0),
        rect(1, 4, 13, 0),
        rect(2, 2, 20, 0),
    ]);
    assert_eq!(rs, expected);
}

#[test]
fn collection_errors_leave_it_unchanged() {
    let mut rs = Rectangles::from(vec![rect(4, 6, 0, 0)]);
    let before = rs.clone();
    assert_eq!(
        rs.split_horizontally(1, 2),
        Err(GeometryError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        rs.split_horizontally(0, 9),
        Err(GeometryError::CutOutOfRange { cut: 9, extent: 6 })
    );
    assert!(rs.merge_adjacent(0, Axis::Vertical).is_err());
    assert_eq!(rs, before);
    assert!(rs.get(3).is_err());
    assert!(Rectangles::new().get(0).is_err());
}

#[test]
#[should_panic]
fn collection_index_panics_out_of_range() {
    let rs = Rectangles::new();
    let _r = rs[0];
}

#[test]
fn collection_write_access() {
    let mut rs = Rectangles::from(vec![rect(1, 1, 0, 0), rect(2, 2, 0, 0)]);
    rs[1] = rect(3, 3, 1, 1);
    *rs.get_mut(0).unwrap() += Vector::new(5, 5);
    assert_eq!(rs.as_slice(), &[rect(1, 1, 5, 5), rect(3, 3, 1, 1)]);
}

#[test]
fn collection_translation_forms_agree() {
    let rs = Rectangles::from(vec![rect(1, 2, 0, 0), rect(3, 4, -1, 5)]);
    let v = Vector::new(2, -3);
    let expected: Rectangles = rs.iter().map(|r| *r + v).collect();
    assert_eq!(&rs + v, expected);
    assert_eq!(v + &rs, expected);
    assert_eq!(v + rs.clone(), expected);
    let mut moved = rs.clone();
    moved += v;
    assert_eq!(moved, expected);
    assert_eq!(rs + v, expected);
}

#[test]
fn collection_equality_is_order_sensitive() {
    let a = Rectangles::from(vec![rect(1, 1, 0, 0), rect(2, 2, 0, 0)]);
    let b = Rectangles::from(vec![rect(2, 2, 0, 0), rect(1, 1, 0, 0)]);
    assert_ne!(a, b);
}

#[test]
fn display_forms() {
    assert_eq!(Position::new(1, -2).to_string(), "(1, -2)");
    assert_eq!(Vector::new(3, 4).to_string(), "<3, 4>");
    let rs = Rectangles::from(vec![rect(4, 6, 0, 2), rect(1, 1, 0, 0)]);
    assert_eq!(rs.to_string(), "[4x6@(0, 2), 1x1@(0, 0)]");
    assert_eq!(
        GeometryError::NotMergeable {
            axis: Axis::Vertical
        }
        .to_string(),
        "rectangles are not vertically mergeable"
    );
}

fn arb_rect() -> impl Strategy<Value = Rectangle> {
    (0..1_000i32, 0..1_000i32, -10_000..10_000i32, -10_000..10_000i32)
        .prop_map(|(w, h, x, y)| rect(w, h, x, y))
}

fn arb_vector() -> impl Strategy<Value = Vector> {
    (-10_000..10_000i32, -10_000..10_000i32).prop_map(|(x, y)| Vector::new(x, y))
}

fn arb_rect_and_cut() -> impl Strategy<Value = (Rectangle, i32, Axis)> {
    (arb_rect(), any::<bool>()).prop_flat_map(|(r, horizontal)| {
        let (axis, extent) = if horizontal {
            (Axis::Horizontal, r.height())
        } else {
            (Axis::Vertical, r.width())
        };
        (Just(r), 0..=extent, Just(axis))
    })
}

proptest! {
    #[test]
    fn split_merge_round_trip((r, cut, axis) in arb_rect_and_cut()) {
        let (a, b) = r.split(cut, axis).unwrap();
        prop_assert_eq!(merge(&a, &b, axis).unwrap(), r);
    }

    #[test]
    fn split_preserves_area((r, cut, axis) in arb_rect_and_cut()) {
        let (a, b) = r.split(cut, axis).unwrap();
        prop_assert_eq!(a.area() + b.area(), r.area());
    }

    #[test]
    fn vertical_split_is_reflected_horizontal((r, cut, _axis) in arb_rect_and_cut()) {
        let cut = cut.min(r.width());
        let (a, b) = r.reflection().split_horizontally(cut).unwrap();
        prop_assert_eq!(r.split_vertically(cut).unwrap(), (a.reflection(), b.reflection()));
    }

    #[test]
    fn reflection_is_involution(r in arb_rect(), v in arb_vector()) {
        prop_assert_eq!(r.reflection().reflection(), r);
        prop_assert_eq!(r.pos().reflection().reflection(), r.pos());
        prop_assert_eq!(v.reflection().reflection(), v);
    }

    #[test]
    fn translation_composes(r in arb_rect(), v1 in arb_vector(), v2 in arb_vector()) {
        prop_assert_eq!((r + v1) + v2, r + (v1 + v2));
        prop_assert_eq!((v1 + v2) + v1, v1 + (v2 + v1));
        prop_assert_eq!(r + v1 + -v1, r);
    }

    #[test]
    fn collection_split_keeps_area_and_grows_by_one(
        rects in prop::collection::vec(arb_rect(), 1..8),
        pick in any::<prop::sample::Index>(),
        frac in 0.0..=1.0f64,
        horizontal in any::<bool>(),
    ) {
        let mut rs = Rectangles::from(rects);
        let i = pick.index(rs.size());
        let axis = if horizontal { Axis::Horizontal } else { Axis::Vertical };
        let extent = if horizontal { rs[i].height() } else { rs[i].width() };
        let cut = (f64::from(extent) * frac).floor() as i32;
        let (size, area) = (rs.size(), rs.total_area());
        rs.split(i, cut, axis).unwrap();
        prop_assert_eq!(rs.size(), size + 1);
        prop_assert_eq!(rs.total_area(), area);
    }
}
