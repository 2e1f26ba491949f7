//! Integration tests for ember-common crate.

use ember_common::{BytePos, Location, Span};

#[test]
fn test_span_from_usize() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.start, BytePos(5));
    assert_eq!(span.end, BytePos(15));
    assert_eq!(span.range(), 5..15);
    assert!(!span.is_empty());
}

#[test]
fn test_span_point_is_empty() {
    assert!(Span::point(7).is_empty());
    assert_eq!(Span::point(7).range(), 7..7);
}

#[test]
fn test_span_slices_multibyte_source() {
    let source = "'é' $";
    let span = Span::from_usize(5, 6);
    assert_eq!(&source[span.range()], "$");
}

#[test]
fn test_location_step() {
    let loc = Location::START.step('a').step('b');
    assert_eq!(loc, Location::new(0, 2));
    let loc = loc.step('\n');
    assert_eq!(loc, Location::new(1, 0));
    assert_eq!(loc.step('\r'), Location::new(1, 1));
}

#[test]
fn test_location_display() {
    assert_eq!(Location::new(3, 14).to_string(), "3:14");
}
