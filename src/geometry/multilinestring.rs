use crate::error::WKBResult;
use crate::geometry::hash::{hash_sequence, HashCode};
use crate::geometry::macros::{impl_from_sequence, impl_geometry_base};
use crate::geometry::{get_checked, LineString, WKBType, COUNT_SIZE};

/// An ordered sequence of line strings.
#[derive(Debug, Clone, Default)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    srid: u32,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self {
            line_strings,
            srid: 0,
        }
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Access line string `i`.
    pub fn line_string(&self, i: usize) -> WKBResult<&LineString> {
        get_checked(&self.line_strings, i)
    }

    pub(crate) fn body_length(&self) -> usize {
        self.line_strings
            .iter()
            .fold(COUNT_SIZE, |sum, ls| sum + ls.nested_length())
    }
}

impl_geometry_base!(MultiLineString, WKBType::MultiLineString);
impl_from_sequence!(MultiLineString, line_strings, LineString);

impl HashCode for MultiLineString {
    fn hash_code(&self) -> u32 {
        hash_sequence(WKBType::MultiLineString, &self.line_strings)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multilinestring::ml0;

    #[test]
    fn nested_byte_length() {
        // 5 + 4 + (5+4+2*16) + (5+4+3*16)
        assert_eq!(ml0().byte_length(), 107);
        assert_eq!(ml0().with_srid(4326).byte_length(), 111);
    }

    #[test]
    fn member_srid_is_not_counted() {
        let ml: MultiLineString = ml0()
            .line_strings()
            .iter()
            .cloned()
            .map(|ls| ls.with_srid(4326))
            .collect();
        assert_eq!(ml.byte_length(), 107);
        assert_eq!(ml, ml0());
    }
}
