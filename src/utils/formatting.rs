/// Payload mass without a trailing ".0" for whole kilograms.
pub fn format_mass(kg: f64) -> String {
    if kg.fract() == 0.0 && kg.abs() < 1e15 {
        format!("{}", kg as i64)
    } else {
        format!("{:.1}", kg)
    }
}

pub fn format_share(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn format_range(min: f64, max: f64) -> String {
    format!("{} - {} kg", format_mass(min), format_mass(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mass() {
        assert_eq!(format_mass(2500.0), "2500");
        assert_eq!(format_mass(0.0), "0");
        assert_eq!(format_mass(525.3), "525.3");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(0.5), "50.0%");
        assert_eq!(format_share(1.0 / 3.0), "33.3%");
        assert_eq!(format_share(0.0), "0.0%");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(0.0, 9600.0), "0 - 9600 kg");
    }
}
