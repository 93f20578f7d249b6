//! The bundled road network: major cities of Pakistan

use crate::network::{City, Road, RoadNetwork};

const CITIES: &[(&str, f64, f64)] = &[
    ("Karachi", 24.8607, 67.0011),
    ("Hyderabad", 25.3960, 68.3578),
    ("Sukkur", 27.7052, 68.8574),
    ("Quetta", 30.1798, 66.9750),
    ("Multan", 30.1575, 71.5249),
    ("Bahawalpur", 29.3544, 71.6911),
    ("Lahore", 31.5204, 74.3587),
    ("Faisalabad", 31.4180, 73.0790),
    ("Gujranwala", 32.1877, 74.1945),
    ("Gujrat", 32.5731, 74.0750),
    ("Sialkot", 32.4945, 74.5229),
    ("Jhelum", 32.9331, 73.7264),
    ("Sargodha", 32.0836, 72.6711),
    ("Islamabad", 33.6844, 73.0479),
    ("Rawalpindi", 33.5651, 73.0169),
    ("Peshawar", 34.0151, 71.5249),
    ("Mardan", 34.1986, 72.0404),
    ("Abbottabad", 34.1688, 73.2215),
    ("Muzaffarabad", 34.3700, 73.4700),
    ("Gilgit", 35.9208, 74.3080),
];

const ROADS: &[(&str, &str)] = &[
    // Sindh
    ("Karachi", "Hyderabad"),
    ("Hyderabad", "Sukkur"),
    // Balochistan
    ("Karachi", "Quetta"),
    ("Sukkur", "Quetta"),
    // Punjab
    ("Sukkur", "Multan"),
    ("Multan", "Bahawalpur"),
    ("Bahawalpur", "Lahore"),
    ("Multan", "Faisalabad"),
    ("Faisalabad", "Lahore"),
    ("Lahore", "Gujranwala"),
    ("Gujranwala", "Gujrat"),
    ("Gujranwala", "Sialkot"),
    ("Gujrat", "Jhelum"),
    // Capital and north
    ("Islamabad", "Rawalpindi"),
    ("Rawalpindi", "Jhelum"),
    ("Islamabad", "Abbottabad"),
    ("Abbottabad", "Muzaffarabad"),
    ("Muzaffarabad", "Gilgit"),
    // Khyber Pakhtunkhwa
    ("Islamabad", "Peshawar"),
    ("Peshawar", "Mardan"),
    ("Mardan", "Abbottabad"),
    // Cross links
    ("Sargodha", "Faisalabad"),
    ("Sargodha", "Jhelum"),
    ("Sargodha", "Islamabad"),
];

pub(crate) fn network() -> RoadNetwork {
    RoadNetwork {
        cities: CITIES
            .iter()
            .map(|&(id, lat, lon)| City {
                id: id.to_string(),
                lat,
                lon,
            })
            .collect(),
        roads: ROADS.iter().map(|&(a, b)| Road::new(a, b)).collect(),
    }
}
