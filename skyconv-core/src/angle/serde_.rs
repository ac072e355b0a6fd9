use super::Angle;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.radians())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = f64::deserialize(d)?;
        if !r.is_finite() {
            return Err(D::Error::custom(format!("angle must be finite, got {}", r)));
        }
        Ok(Angle::from_radians(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_serializes_as_radians() {
        let a = Angle::from_radians(1.25);
        assert_eq!(serde_json::to_string(&a).unwrap(), "1.25");
        let back: Angle = serde_json::from_str("1.25").unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_options_from_json() {
        let opts: crate::angle::FormatOptions =
            serde_json::from_str(r#"{"unit": "degrees", "separator": ["d ", "m "], "precision": 2}"#)
                .unwrap();
        assert_eq!(opts.unit, crate::angle::AngleUnit::Degrees);
        assert!(!opts.pad);
        assert_eq!(Angle::from_degrees(10.5).to_string_with(&opts), "10d 30m 00.00");
    }

    #[test]
    fn test_bad_separator_rejected() {
        let res: Result<crate::angle::FormatOptions, _> =
            serde_json::from_str(r#"{"separator": "abcd"}"#);
        assert!(res.is_err());
    }
}
