/// Implements the SRID accessors, type tag, byte length and hashing shared by every geometry
/// struct. The struct needs a `srid: u32` field, a `body_length()` method and a
/// [`HashCode`](crate::geometry::HashCode) implementation.
macro_rules! impl_geometry_base {
    ($geom:ident, $wkb_type:expr) => {
        impl $geom {
            /// The WKB type tag of this geometry.
            pub fn identifier(&self) -> $crate::geometry::WKBType {
                $wkb_type
            }

            /// The spatial reference id. 0 means unspecified.
            pub fn srid(&self) -> u32 {
                self.srid
            }

            pub fn set_srid(&mut self, srid: u32) {
                self.srid = srid;
            }

            pub fn with_srid(mut self, srid: u32) -> Self {
                self.srid = srid;
                self
            }

            /// The number of bytes [`encode`](crate::io::wkb::encode) writes for this geometry
            /// as the outermost value, including its own header and SRID field.
            pub fn byte_length(&self) -> usize {
                $crate::geometry::header_size(self.srid) + self.body_length()
            }

            /// The number of bytes this geometry occupies when nested inside a multi geometry
            /// or collection, where no SRID is written.
            pub(crate) fn nested_length(&self) -> usize {
                $crate::geometry::HEADER_SIZE + self.body_length()
            }
        }

        impl std::hash::Hash for $geom {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_u32($crate::geometry::HashCode::hash_code(self));
            }
        }

        impl From<$geom> for $crate::geometry::Geometry {
            fn from(value: $geom) -> Self {
                $crate::geometry::Geometry::$geom(value)
            }
        }
    };
}

/// Implements construction from owned, borrowed and iterated sequences, plus structural
/// equality over the sequence (ignoring the SRID), for geometries backed by one `Vec` field.
macro_rules! impl_from_sequence {
    ($geom:ident, $field:ident, $item:ty) => {
        impl From<Vec<$item>> for $geom {
            fn from(value: Vec<$item>) -> Self {
                Self::new(value)
            }
        }

        impl From<&[$item]> for $geom {
            fn from(value: &[$item]) -> Self {
                Self::new(value.to_vec())
            }
        }

        impl FromIterator<$item> for $geom {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl PartialEq for $geom {
            fn eq(&self, other: &Self) -> bool {
                self.$field == other.$field
            }
        }
    };
}

pub(crate) use impl_from_sequence;
pub(crate) use impl_geometry_base;
