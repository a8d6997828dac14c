// src/utils/date_utils.rs

use chrono::{DateTime, Local, Locale, NaiveDateTime, TimeZone};

/// Pattern the form reads and echoes, e.g. "01/01/2030 10:00".
pub const FORM_PATTERN: &str = "%d/%m/%Y %H:%M";

// listing cards spell the moment out, e.g. "quarta, 1 de janeiro às 10:00"
const CARD_PATTERN: &str = "%A, %-d de %B às %H:%M";

pub fn format_card(moment: &DateTime<Local>) -> String {
    moment
        .format_localized(CARD_PATTERN, Locale::pt_BR)
        .to_string()
}

pub fn format_short(moment: &DateTime<Local>) -> String {
    moment.format(FORM_PATTERN).to_string()
}

/// Parses form input as a local moment. None for anything that is not a
/// valid "dd/mm/aaaa hh:mm".
pub fn parse_form_input(input: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), FORM_PATTERN).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_echoes_the_form_pattern() {
        let moment = parse_form_input("01/01/2030 10:00").unwrap();
        assert_eq!(format_short(&moment), "01/01/2030 10:00");
        assert_eq!(parse_form_input(" 02/03/2030 23:59 ").map(|m| format_short(&m)),
            Some("02/03/2030 23:59".to_string()));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert!(parse_form_input("amanhã").is_none());
        assert!(parse_form_input("2030-01-01 10:00").is_none());
        assert!(parse_form_input("32/01/2030 10:00").is_none());
        assert!(parse_form_input("").is_none());
    }

    #[test]
    fn cards_use_the_pt_br_spelling() {
        // 2025-01-01 was a Wednesday
        let moment = parse_form_input("01/01/2025 10:00").unwrap();
        let card = format_card(&moment);
        assert!(card.starts_with("quarta"), "got {card}");
        assert!(card.ends_with("1 de janeiro às 10:00"), "got {card}");
    }
}
