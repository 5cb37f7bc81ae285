//! Typed views of cvar strings

/// Trait for types a cvar string can be read as
///
/// Implement this trait for custom types that should be readable through
/// [`CvarRegistry::get`](super::CvarRegistry::get).
pub trait CvarValue: Sized {
    /// Parse from a string
    fn parse_value(s: &str) -> Option<Self>;

    /// Convert to a string representation
    fn to_value_string(&self) -> String;
}

impl CvarValue for bool {
    fn parse_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    fn to_value_string(&self) -> String {
        (if *self { "1" } else { "0" }).to_string()
    }
}

impl CvarValue for i32 {
    fn parse_value(s: &str) -> Option<Self> {
        let s = s.trim();
        // "1.0" style values are common in config files
        s.parse()
            .ok()
            .or_else(|| s.parse::<f32>().ok().map(|f| f as i32))
    }

    fn to_value_string(&self) -> String {
        ToString::to_string(self)
    }
}

impl CvarValue for f32 {
    fn parse_value(s: &str) -> Option<Self> {
        s.trim().parse().ok().filter(|f: &f32| f.is_finite())
    }

    fn to_value_string(&self) -> String {
        ToString::to_string(self)
    }
}

impl CvarValue for String {
    fn parse_value(s: &str) -> Option<Self> {
        Some(s.to_string())
    }

    fn to_value_string(&self) -> String {
        self.clone()
    }
}

/// Numeric value of a cvar string; unparsable strings read as zero
pub(crate) fn numeric(s: &str) -> f32 {
    f32::parse_value(s).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvar_value_bool() {
        assert_eq!(bool::parse_value("1"), Some(true));
        assert_eq!(bool::parse_value("true"), Some(true));
        assert_eq!(bool::parse_value("On"), Some(true));
        assert_eq!(bool::parse_value("0"), Some(false));
        assert_eq!(bool::parse_value("no"), Some(false));
        assert_eq!(bool::parse_value("maybe"), None);
    }

    #[test]
    fn test_cvar_value_i32() {
        assert_eq!(i32::parse_value("42"), Some(42));
        assert_eq!(i32::parse_value("-10"), Some(-10));
        assert_eq!(i32::parse_value("2.0"), Some(2));
        assert_eq!(i32::parse_value("wide"), None);
    }

    #[test]
    fn test_cvar_value_f32() {
        assert_eq!(f32::parse_value("1.5"), Some(1.5));
        assert_eq!(f32::parse_value("inf"), None);
        assert_eq!(numeric("garbage"), 0.0);
        assert_eq!(numeric("2"), 2.0);
    }
}
