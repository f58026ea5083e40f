//! Month and weekday names (English and French).

/// Month number for a lowercased month name or abbreviation.
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.trim_end_matches('.');
    let month = match name {
        "january" | "jan" | "janvier" | "janv" => 1,
        "february" | "feb" | "février" | "fevrier" | "fév" | "fev" | "févr" | "fevr" => 2,
        "march" | "mar" | "mars" => 3,
        "april" | "apr" | "avril" | "avr" => 4,
        "may" | "mai" => 5,
        "june" | "jun" | "juin" => 6,
        "july" | "jul" | "juillet" | "juil" => 7,
        "august" | "aug" | "août" | "aout" => 8,
        "september" | "sep" | "sept" | "septembre" => 9,
        "october" | "oct" | "octobre" => 10,
        "november" | "nov" | "novembre" => 11,
        "december" | "dec" | "décembre" | "decembre" | "déc" => 12,
        _ => return None,
    };
    Some(month)
}

/// Strip a leading weekday name ("lundi ", "Sat, ") from lowercased `text`.
pub fn strip_weekday(text: &str) -> &str {
    let re = regex!(
        r"^(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tue|tues|wed|thu|thur|thurs|fri|sat|sun|lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche)\.?,?\s+"
    );
    match re.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_and_english_names() {
        assert_eq!(month_from_name("mars"), Some(3));
        assert_eq!(month_from_name("march"), Some(3));
        assert_eq!(month_from_name("févr."), Some(2));
        assert_eq!(month_from_name("août"), Some(8));
        assert_eq!(month_from_name("sept"), Some(9));
        assert_eq!(month_from_name("smarch"), None);
    }

    #[test]
    fn weekday_prefix() {
        assert_eq!(strip_weekday("lundi 1er septembre 2025"), "1er septembre 2025");
        assert_eq!(strip_weekday("sat, march 15, 2025"), "march 15, 2025");
        // "mars" is a month, not "mardi"
        assert_eq!(strip_weekday("mars 15, 2025"), "mars 15, 2025");
    }
}
