use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rating in [0.0, 5.0] kept as whole tenths so it always carries exactly one fractional digit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BookRating(u8);

impl BookRating {
    pub const MAX_TENTHS: u8 = 50;

    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.min(Self::MAX_TENTHS))
    }

    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            return Self(0);
        }
        let tenths = (score * 10.0)
            .round()
            .clamp(0.0, f64::from(Self::MAX_TENTHS));
        Self(tenths as u8)
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn score(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Serialize for BookRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.score())
    }
}

impl<'de> Deserialize<'de> for BookRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::from_score)
    }
}

#[cfg(test)]
mod test {
    use super::BookRating;

    #[test]
    fn score_is_rounded_and_clamped() {
        assert_eq!(BookRating::from_score(4.26).tenths(), 43);
        assert_eq!(BookRating::from_score(7.0).tenths(), 50);
        assert_eq!(BookRating::from_score(-1.0).tenths(), 0);
        assert_eq!(BookRating::from_score(f64::NAN).tenths(), 0);
        assert_eq!(BookRating::from_tenths(120).score(), 5.0);
    }

    #[test]
    fn serializes_as_decimal() {
        let json = serde_json::to_string(&BookRating::from_tenths(47)).unwrap();
        assert_eq!(json, "4.7");
        let parsed: BookRating = serde_json::from_str("3.9").unwrap();
        assert_eq!(parsed.tenths(), 39);
    }
}
