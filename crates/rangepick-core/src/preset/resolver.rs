use crate::date::DateValue;
use crate::granularity::Granularity;

use super::token::{PresetToken, TokenKind};

/// Resolves preset tokens against a fixed "today" for one granularity.
#[derive(Debug, Clone)]
pub struct PresetResolver {
    granularity: Granularity,
    today: DateValue,
}

impl PresetResolver {
    pub fn new(granularity: Granularity, today: DateValue) -> Self {
        Self { granularity, today }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Resolve a boundary pair to formatted strings.
    ///
    /// A missing end mirrors the start and vice versa; with both missing the
    /// pair is `current`..`current`.
    pub fn resolve(
        &self,
        start: Option<&PresetToken>,
        end: Option<&PresetToken>,
    ) -> (String, String) {
        let current = PresetToken::current();
        let start_token = start.or(end).unwrap_or(&current);
        let end_token = end.unwrap_or(start_token);
        (
            self.resolve_token(start_token, true),
            self.resolve_token(end_token, false),
        )
    }

    fn resolve_token(&self, token: &PresetToken, is_start: bool) -> String {
        let unit = self.granularity.unit();
        let value = match token.classify(self.granularity) {
            TokenKind::Named(named) if is_start => self.today.first_of(named.period()),
            TokenKind::Named(named) => self.today.last_of(named.period()),
            TokenKind::Offset(n) => self.today.add(n, unit),
            TokenKind::Literal(text) => DateValue::parse(text),
        };
        value.format(self.granularity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::INVALID_DATE;

    fn resolver(g: Granularity) -> PresetResolver {
        PresetResolver::new(g, DateValue::parse("2024-06-15"))
    }

    fn tok(s: &str) -> PresetToken {
        PresetToken::from(s)
    }

    #[test]
    fn yesterday_offsets() {
        let r = resolver(Granularity::Day);
        let (s, e) = r.resolve(Some(&PresetToken::Offset(-1)), Some(&PresetToken::Offset(-1)));
        assert_eq!((s.as_str(), e.as_str()), ("2024-06-14", "2024-06-14"));
    }

    #[test]
    fn this_week_runs_from_sunday_to_today() {
        let r = resolver(Granularity::Day);
        let (s, e) = r.resolve(Some(&tok("week")), Some(&tok("current")));
        assert_eq!((s.as_str(), e.as_str()), ("2024-06-09", "2024-06-15"));
    }

    #[test]
    fn named_end_uses_the_last_day_of_the_period() {
        let r = resolver(Granularity::Day);
        let (s, e) = r.resolve(Some(&tok("month")), Some(&tok("month")));
        assert_eq!((s.as_str(), e.as_str()), ("2024-06-01", "2024-06-30"));
        let (s, e) = r.resolve(Some(&tok("year")), None);
        assert_eq!((s.as_str(), e.as_str()), ("2024-01-01", "2024-12-31"));
    }

    #[test]
    fn missing_sides_mirror_each_other() {
        let r = resolver(Granularity::Day);
        assert_eq!(
            r.resolve(None, Some(&PresetToken::Offset(-2))),
            ("2024-06-13".to_string(), "2024-06-13".to_string())
        );
        assert_eq!(
            r.resolve(None, None),
            ("2024-06-15".to_string(), "2024-06-15".to_string())
        );
    }

    #[test]
    fn offsets_step_in_the_granularity_unit() {
        let (s, e) = resolver(Granularity::Month).resolve(Some(&tok("-3")), Some(&tok("current")));
        assert_eq!((s.as_str(), e.as_str()), ("2024-03", "2024-06"));
        let (s, _) = resolver(Granularity::Year).resolve(Some(&PresetToken::Offset(-1)), None);
        assert_eq!(s, "2023");
    }

    #[test]
    fn day_vocabulary_is_not_named_at_month_granularity() {
        let (s, _) = resolver(Granularity::Month).resolve(Some(&tok("week")), None);
        assert_eq!(s, INVALID_DATE);
    }

    #[test]
    fn explicit_dates_are_parsed_and_reformatted() {
        let (s, e) = resolver(Granularity::Month).resolve(Some(&tok("2023-02-11")), Some(&tok("2023-09")));
        assert_eq!((s.as_str(), e.as_str()), ("2023-02", "2023-09"));
    }
}
