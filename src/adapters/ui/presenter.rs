//! Turns an EstimationResult into the text shown on the result card.

use crate::domain::EstimationResult;

/// Card heading above the message.
pub const RESULT_TITLE: &str = "Estimated Creation Date";

/// "You were likely conceived on <Month DD, YYYY>, which was a <Weekday> <time>. It was probably a <mood> moment!"
pub fn format_message(result: &EstimationResult) -> String {
    format!(
        "You were likely conceived on {}, which was a {} {}. It was probably a {} moment!",
        result.date().long_format(),
        result.day_of_week_label(),
        result.time_of_day(),
        result.mood()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarDate, Mood, TimeOfDay};

    #[test]
    fn test_message_template() {
        let date = CalendarDate::new(2024, 4, 3).unwrap();
        let result = EstimationResult::new(date, TimeOfDay::Evening, Mood::Passionate);
        assert_eq!(
            format_message(&result),
            "You were likely conceived on April 03, 2024, which was a Wednesday evening. \
             It was probably a passionate moment!"
        );
    }

    #[test]
    fn test_message_single_digit_day_and_weekend() {
        // 2023-07-01 was a Saturday.
        let date = CalendarDate::new(2023, 7, 1).unwrap();
        let result = EstimationResult::new(date, TimeOfDay::Morning, Mood::Magical);
        let msg = format_message(&result);
        assert!(msg.contains("July 01, 2023"));
        assert!(msg.contains("a Saturday morning."));
        assert!(msg.ends_with("a magical moment!"));
    }
}
