//! Country -> city dependency

use regform_types::reference::find_country;
use regform_types::FormData;
use tracing::debug;

/// Ordered city choices for a country; empty for an unknown or blank country
pub fn cities_for(country: &str) -> &'static [&'static str] {
    find_country(country.trim()).map(|c| c.cities).unwrap_or(&[])
}

/// Clears `city` when it no longer belongs to the selected country
///
/// Returns true when the city was cleared. Called after every mutation so
/// the city is always empty or one of the current country's cities.
pub fn resolve(data: &mut FormData) -> bool {
    let city = data.city.trim();
    if city.is_empty() || cities_for(&data.country).contains(&city) {
        return false;
    }

    debug!(country = %data.country, city = %data.city, "clearing city outside selected country");
    data.city.clear();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_types::{Field, COUNTRIES};

    #[test]
    fn test_cities_match_reference_lists() {
        for country in COUNTRIES {
            assert_eq!(cities_for(country.name), country.cities);
        }
        assert!(cities_for("").is_empty());
        assert!(cities_for("Narnia").is_empty());
    }

    #[test]
    fn test_changing_country_clears_city() {
        let mut data = FormData {
            country: "India".into(),
            city: "Mumbai".into(),
            ..FormData::default()
        };
        assert!(!resolve(&mut data));
        assert_eq!(data.city, "Mumbai");

        data.country = "UK".into();
        assert!(resolve(&mut data));
        assert_eq!(data.city, "");
    }

    #[test]
    fn test_clearing_country_clears_city() {
        let mut data = FormData {
            country: String::new(),
            city: "Toronto".into(),
            ..FormData::default()
        };
        assert!(resolve(&mut data));
        assert!(data.city.is_empty());
        assert!(!resolve(&mut data));
    }

    #[test]
    fn test_padded_city_judged_like_the_validator() {
        let mut data = FormData {
            country: "Canada".into(),
            city: " Toronto ".into(),
            ..FormData::default()
        };
        assert!(!resolve(&mut data));
        assert_eq!(data.city, " Toronto ");
        assert_eq!(crate::validator::check_field(Field::City, &data), Ok(()));

        data.city = "   ".into();
        assert!(!resolve(&mut data));
        assert_eq!(
            crate::validator::check_field(Field::City, &data),
            Err("City is required.".to_string())
        );
    }
}
