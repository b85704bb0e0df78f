//! Static reference data: countries with their cities, and dialing codes

#[derive(Debug, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct PhoneCode {
    pub code: &'static str,
    pub name: &'static str,
}

pub static COUNTRIES: &[Country] = &[
    Country {
        name: "India",
        cities: &["Delhi", "Mumbai", "Bangalore", "Chennai"],
    },
    Country {
        name: "USA",
        cities: &["New York", "Los Angeles", "Chicago", "Houston"],
    },
    Country {
        name: "Canada",
        cities: &["Toronto", "Vancouver", "Montreal"],
    },
    Country {
        name: "UK",
        cities: &["London", "Manchester", "Birmingham"],
    },
];

pub static PHONE_CODES: &[PhoneCode] = &[
    PhoneCode { code: "+91", name: "India" },
    PhoneCode { code: "+1", name: "USA/Canada" },
    PhoneCode { code: "+44", name: "UK" },
    PhoneCode { code: "+61", name: "Australia" },
    PhoneCode { code: "+81", name: "Japan" },
    PhoneCode { code: "+49", name: "Germany" },
    PhoneCode { code: "+33", name: "France" },
];

pub fn find_country(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.name == name)
}

pub fn find_phone_code(code: &str) -> Option<&'static PhoneCode> {
    PHONE_CODES.iter().find(|c| c.code == code)
}

pub fn country_names() -> Vec<&'static str> {
    COUNTRIES.iter().map(|c| c.name).collect()
}

pub fn phone_code_values() -> Vec<&'static str> {
    PHONE_CODES.iter().map(|c| c.code).collect()
}

impl Country {
    pub fn has_city(&self, city: &str) -> bool {
        self.cities.contains(&city)
    }
}

impl PhoneCode {
    /// Option text, e.g. `+91 (India)`
    pub fn display(&self) -> String {
        format!("{} ({})", self.code, self.name)
    }
}
