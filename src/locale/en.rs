//! Embedded default English locale.
//!
//! Prompt keys double as their own English translation wherever possible, so
//! only formats and separators carry distinct values. Internal keys (leading
//! underscore) configure number/date rendering rather than UI text.

use super::locale::Locale;

/// English ordinal-day suffix: 1st, 2nd, 3rd, 4th, ... 11th-13th.
#[must_use]
pub fn date_ordinal(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

const FORMATS: &[(&str, &str)] = &[
    ("_decimalSeparator", "."),
    ("_thousandSeparator", ","),
    ("_date_millisecond", "mm:ss SSS"),
    ("_date_second", "HH:mm:ss"),
    ("_date_minute", "HH:mm"),
    ("_date_hour", "HH:mm"),
    ("_date_day", "MMM dd"),
    ("_date_week", "ww"),
    ("_date_month", "MMM"),
    ("_date_year", "yyyy"),
    ("_duration_millisecond", "mm:ss SSS"),
    ("_duration_second", "mm:ss"),
    ("_duration_minute", "mm:ss"),
    ("_duration_hour", "hh:mm:ss"),
    ("_duration_day", "dd'd' hh'h' mm'min'"),
    ("_duration_week", "ww'w' dd'd'"),
    ("_duration_month", "MM'm' dd'd'"),
    ("_duration_year", "yyyy'y' MM'm'"),
    ("_era_ad", "AD"),
    ("_era_bc", "BC"),
];

const IDENTITY_PROMPTS: &[&str] = &[
    "A",
    "P",
    "AM",
    "PM",
    "A.M.",
    "P.M.",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "Jan",
    "Feb",
    "Mar",
    "Apr",
    "Jun",
    "Jul",
    "Aug",
    "Sep",
    "Oct",
    "Nov",
    "Dec",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sun",
    "Mon",
    "Tue",
    "Wed",
    "Thu",
    "Fri",
    "Sat",
    "Zoom Out",
    "Play",
    "Stop",
    "Legend",
    "Click, tap or press ENTER to toggle",
    "Loading",
    "Home",
    "Chart",
    "Serial chart",
    "X/Y chart",
    "Pie chart",
    "Gauge chart",
    "Radar chart",
    "Sankey diagram",
    "TreeMap chart",
    "Series",
    "Candlestick Series",
    "Column Series",
    "Line Series",
    "Pie Slice Series",
    "X/Y Series",
    "Map",
    "Press ENTER to zoom in",
    "Press ENTER to zoom out",
    "Use arrow keys to zoom in and out",
    "Use plus and minus keys on your keyboard to zoom in and out",
    "Export",
    "Image",
    "Data",
    "Print",
    "Click, tap or press ENTER to open",
    "Click, tap or press ENTER to print.",
    "Click, tap or press ENTER to export as %1.",
    "To save the image, right-click this link and choose \"Save picture as...\"",
    "To save the image, right-click thumbnail on the left and choose \"Save picture as...\"",
    "(Press ESC to close this message)",
    "Image Export Complete",
    "Export operation took longer than expected. Something might have gone wrong.",
    "Saved from",
    "PNG",
    "JPG",
    "GIF",
    "SVG",
    "PDF",
    "JSON",
    "CSV",
    "XLSX",
    "Use TAB to select grip buttons or left and right arrows to change selection",
    "Use left and right arrows to move selection",
    "Use left and right arrows to move left selection",
    "Use left and right arrows to move right selection",
    "Use TAB select grip buttons or up and down arrows to change selection",
    "Use up and down arrows to move selection",
    "Use up and down arrows to move lower selection",
    "Use up and down arrows to move upper selection",
    "From %1 to %2",
    "From %1",
    "To %1",
    "No parser available for file: %1",
    "Error parsing file: %1",
    "Unable to load file: %1",
    "Invalid date",
];

// "May" short form collides with the full month name; it keys differently.
const ALIASED_PROMPTS: &[(&str, &str)] = &[("May(short)", "May")];

/// Builds the default English locale.
#[must_use]
pub fn locale() -> Locale {
    let mut locale = Locale::new();
    for (prompt, translation) in FORMATS {
        locale.insert(*prompt, *translation);
    }
    for prompt in IDENTITY_PROMPTS {
        locale.insert(*prompt, *prompt);
    }
    for (prompt, translation) in ALIASED_PROMPTS {
        locale.insert(*prompt, *translation);
    }
    locale.set_date_ordinal(date_ordinal);
    locale
}

#[cfg(test)]
mod tests {
    use super::{date_ordinal, locale};

    #[test]
    fn ordinal_suffixes_cover_teen_exceptions() {
        assert_eq!(date_ordinal(1), "st");
        assert_eq!(date_ordinal(2), "nd");
        assert_eq!(date_ordinal(3), "rd");
        assert_eq!(date_ordinal(4), "th");
        assert_eq!(date_ordinal(11), "th");
        assert_eq!(date_ordinal(12), "th");
        assert_eq!(date_ordinal(13), "th");
        assert_eq!(date_ordinal(21), "st");
        assert_eq!(date_ordinal(111), "th");
    }

    #[test]
    fn default_locale_carries_formats_and_prompts() {
        let en = locale();
        assert_eq!(en.get("_decimalSeparator"), Some("."));
        assert_eq!(en.get("Home"), Some("Home"));
        assert_eq!(en.get("May(short)"), Some("May"));
        assert!(en.date_ordinal().is_some());
        assert!(en.len() > 100);
    }
}
