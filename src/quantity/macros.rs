/// Declare a unit-tagged newtype.
///
/// `precision` is the number of fractional digits used by [`Display`][std::fmt::Display]
/// when the caller does not ask for one explicitly, and it is ignored for integer containers.
///
/// Integer quantities are counted input, so they are parsed and compared natively.
/// Float quantities are computed amounts: they get a total order and in-place scaling.
macro_rules! quantity {
    (@newtype $name:ident, $container:ty, $suffix:literal, $precision:literal, [$($derive:path),* $(,)?]) => {
        #[repr(transparent)]
        #[derive(::std::clone::Clone, ::std::marker::Copy $(, $derive)*)]
        pub struct $name(pub $container);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let precision = formatter.precision().unwrap_or($precision);
                write!(formatter, "{:.*} {}", precision, self.0, $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, formatter)?;
                formatter.write_str($suffix)
            }
        }
    };

    ($name:ident, via: i64, suffix: $suffix:literal, precision: $precision:literal) => {
        quantity!(@newtype $name, i64, $suffix, $precision, [
            ::derive_more::FromStr,
            ::std::cmp::PartialEq,
            ::std::cmp::Eq,
            ::std::cmp::PartialOrd,
            ::std::cmp::Ord,
        ]);
    };

    ($name:ident, via: f64, suffix: $suffix:literal, precision: $precision:literal) => {
        quantity!(@newtype $name, f64, $suffix, $precision, []);
        total_order!($name);

        impl ::std::ops::MulAssign<f64> for $name {
            fn mul_assign(&mut self, factor: f64) {
                self.0 *= factor;
            }
        }
    };
}

/// Order `f64` quantities the way [`ordered_float::OrderedFloat`] does: `NaN` is the greatest.
macro_rules! total_order {
    ($name:ident) => {
        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::ordered_float::OrderedFloat(self.0).cmp(&::ordered_float::OrderedFloat(other.0))
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other).is_eq()
            }
        }

        impl ::std::cmp::Eq for $name {}
    };
}
