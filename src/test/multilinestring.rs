use geo::{line_string, MultiLineString as GeoMultiLineString};

use crate::geometry::{LineString, MultiLineString};
use crate::test::coords;

pub(crate) fn ml0() -> MultiLineString {
    MultiLineString::new(vec![
        LineString::new(coords(&[(0., 0.), (1., 1.)])),
        LineString::new(coords(&[(2., 2.), (3., 3.), (4., 4.)])),
    ])
}

pub(crate) fn ml0_geo() -> GeoMultiLineString {
    GeoMultiLineString::new(vec![
        line_string![
            (x: 0., y: 0.),
            (x: 1., y: 1.),
        ],
        line_string![
            (x: 2., y: 2.),
            (x: 3., y: 3.),
            (x: 4., y: 4.),
        ],
    ])
}
