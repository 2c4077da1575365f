use geo::polygon;

use crate::geometry::Polygon;
use crate::test::coords;

pub(crate) fn p0() -> Polygon {
    Polygon::new(vec![coords(&[
        (-111., 45.),
        (-111., 41.),
        (-104., 41.),
        (-104., 45.),
        (-111., 45.),
    ])])
}

pub(crate) fn p1() -> Polygon {
    Polygon::new(vec![
        coords(&[
            (-111., 45.),
            (-111., 41.),
            (-104., 41.),
            (-104., 45.),
            (-111., 45.),
        ]),
        coords(&[(-110., 44.), (-110., 42.), (-105., 42.), (-110., 44.)]),
    ])
}

pub(crate) fn p1_geo() -> geo::Polygon {
    polygon!(
        exterior: [
            (x: -111., y: 45.),
            (x: -111., y: 41.),
            (x: -104., y: 41.),
            (x: -104., y: 45.),
            (x: -111., y: 45.),
        ],
        interiors: [
            [
                (x: -110., y: 44.),
                (x: -110., y: 42.),
                (x: -105., y: 42.),
                (x: -110., y: 44.),
            ],
        ],
    )
}
