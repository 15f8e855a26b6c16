use std::collections::{BTreeSet, HashSet};

use serde::Deserialize;

use crate::time::Date;

/// Decides which dates can not host any work.
pub trait HolidaySource {
    #[must_use]
    fn is_excluded(&self, date: Date) -> bool;
}

impl<H: HolidaySource + ?Sized> HolidaySource for &H {
    fn is_excluded(&self, date: Date) -> bool {
        (**self).is_excluded(date)
    }
}

impl<H: HolidaySource + ?Sized> HolidaySource for Box<H> {
    fn is_excluded(&self, date: Date) -> bool {
        (**self).is_excluded(date)
    }
}

/// Nothing is excluded.
impl HolidaySource for () {
    fn is_excluded(&self, _date: Date) -> bool {
        false
    }
}

impl HolidaySource for [Date] {
    fn is_excluded(&self, date: Date) -> bool {
        self.contains(&date)
    }
}

impl HolidaySource for Vec<Date> {
    fn is_excluded(&self, date: Date) -> bool {
        self.as_slice().is_excluded(date)
    }
}

impl<S: std::hash::BuildHasher> HolidaySource for HashSet<Date, S> {
    fn is_excluded(&self, date: Date) -> bool {
        self.contains(&date)
    }
}

impl HolidaySource for BTreeSet<Date> {
    fn is_excluded(&self, date: Date) -> bool {
        self.contains(&date)
    }
}

/// The public holidays of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HolidayRegion {
    /// The German state Baden-Württemberg.
    #[default]
    #[serde(rename = "BW")]
    BadenWuerttemberg,
    #[serde(rename = "none")]
    None,
}

impl HolidaySource for HolidayRegion {
    fn is_excluded(&self, date: Date) -> bool {
        match self {
            Self::BadenWuerttemberg => date.is_holiday(),
            Self::None => false,
        }
    }
}

macro_rules! impl_holiday_source_for_tuple {
    ( $f:ident => $i:tt ) => {
        impl<$f: HolidaySource> HolidaySource for ($f,) {
            fn is_excluded(&self, date: Date) -> bool {
                self.$i.is_excluded(date)
            }
        }
    };
    ( $f:ident => $i:tt $(, $g:ident => $ig:tt )+ $(,)? ) => {
        impl<$f: HolidaySource $(, $g: HolidaySource )*> HolidaySource for ($f $(, $g)*) {
            fn is_excluded(&self, date: Date) -> bool {
                self.$i.is_excluded(date) $( || self.$ig.is_excluded(date) )*
            }
        }

        impl_holiday_source_for_tuple!( $( $g => $ig ),* );
    };
}

impl_holiday_source_for_tuple! {
    F => 5,
    E => 4,
    D => 3,
    C => 2,
    B => 1,
    A => 0,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_region() {
        // Tag der Arbeit
        assert!(HolidayRegion::BadenWuerttemberg.is_excluded(date!(2023:05:01)));
        assert!(!HolidayRegion::BadenWuerttemberg.is_excluded(date!(2023:05:02)));
        assert!(!HolidayRegion::None.is_excluded(date!(2023:05:01)));
    }

    #[test]
    fn test_collections() {
        let vacation = vec![date!(2023:08:14), date!(2023:08:15)];
        let set = vacation.iter().copied().collect::<HashSet<_>>();

        assert!(vacation.is_excluded(date!(2023:08:15)));
        assert!(set.is_excluded(date!(2023:08:14)));
        assert!(!set.is_excluded(date!(2023:08:16)));
        assert!(!().is_excluded(date!(2023:08:14)));
    }

    #[test]
    fn test_tuple_excludes_if_any_member_does() {
        let vacation = BTreeSet::from([date!(2023:05:02)]);
        let source = (HolidayRegion::BadenWuerttemberg, &vacation);

        assert!(source.is_excluded(date!(2023:05:01)));
        assert!(source.is_excluded(date!(2023:05:02)));
        assert!(!source.is_excluded(date!(2023:05:03)));
    }

    #[test]
    fn test_deserialize_region() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            state: HolidayRegion,
        }

        let parse = |input: &str| toml::from_str::<Wrapper>(input).map(|w| w.state);

        assert_eq!(parse("state = \"BW\"").ok(), Some(HolidayRegion::BadenWuerttemberg));
        assert_eq!(parse("state = \"none\"").ok(), Some(HolidayRegion::None));
        assert!(parse("state = \"BY\"").is_err());
    }
}
