use proptest::prelude::*;
use skyconv_time::{
    datetime_to_jd, jd_to_calendar, jd_to_mjd, mjd_to_jd, ymd_to_jd, JulianDate,
    ModifiedJulianDate,
};

proptest! {
    #[test]
    fn prop_mjd_round_trip_in_historic_range(jd in 1.2e6..4.8e6f64) {
        prop_assert_eq!(mjd_to_jd(jd_to_mjd(jd)), jd);
    }

    #[test]
    fn prop_typed_mjd_round_trip_is_exact(mjd in -1e9..1e9f64) {
        let jd = JulianDate::from(ModifiedJulianDate::new(mjd));
        prop_assert_eq!(ModifiedJulianDate::from(jd).value(), mjd);
    }

    #[test]
    fn prop_typed_jd_round_trip_is_exact(jd in -1e9..1e9f64) {
        let mjd = ModifiedJulianDate::from(JulianDate::from_f64(jd));
        prop_assert_eq!(JulianDate::from(mjd).to_f64(), jd);
    }

    #[test]
    fn prop_gregorian_midnight_round_trip(y in 1583i32..3000, m in 1u32..=12, d in 1u32..=28) {
        let ts = jd_to_calendar(ymd_to_jd(y, m, f64::from(d))).unwrap();
        prop_assert_eq!((ts.year(), ts.month(), ts.day()), (y, m, d));
        prop_assert_eq!((ts.hour(), ts.minute(), ts.second()), (0, 0, 0));
    }

    #[test]
    fn prop_jd_calendar_jd(jd in 2.3e6..2.6e6f64) {
        let ts = jd_to_calendar(jd).unwrap();
        let back = datetime_to_jd(&ts, None).unwrap();
        prop_assert!((back - jd).abs() < 1e-8, "{} -> {} -> {}", jd, ts, back);
    }
}
