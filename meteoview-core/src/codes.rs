//! Translation of WMO weather codes into human-readable descriptions.
//!
//! Open-Meteo reports conditions as WMO interpretation codes; see
//! <https://open-meteo.com/en/docs> for the reference table.

/// Describe a WMO weather code.
///
/// Total over integers: codes outside the known table degrade to an
/// `"unknown weather code: {code}"` string rather than failing, so the
/// caller always receives some description.
pub fn describe(code: i64) -> String {
    known(code).map_or_else(|| format!("unknown weather code: {code}"), str::to_string)
}

fn known(code: i64) -> Option<&'static str> {
    let description = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => return None,
    };

    Some(description)
}
