use chrono::{Days, NaiveDate};

/// Number of days the slider can reach, today included.
pub const DAY_COUNT: u8 = 4;

/// Highest slider position (`DAY_COUNT * 8 - 1`).
pub const MAX_SLIDER_POSITION: u8 = DAY_COUNT * TimePeriod::COUNT - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TimePeriod {
    Night,
    PreDawn,
    Dawn,
    Morning,
    Midday,
    Afternoon,
    Dusk,
    Evening,
}

impl TimePeriod {
    pub const COUNT: u8 = 8;

    pub const ALL: [Self; 8] = [
        Self::Night,
        Self::PreDawn,
        Self::Dawn,
        Self::Morning,
        Self::Midday,
        Self::Afternoon,
        Self::Dusk,
        Self::Evening,
    ];

    /// The label used by the dataset's `time_period` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Night => "00:00 to 03:00",
            Self::PreDawn => "03:00 to 06:00",
            Self::Dawn => "06:00 to 09:00",
            Self::Morning => "09:00 to 11:00",
            Self::Midday => "11:00 to 14:00",
            Self::Afternoon => "14:00 to 17:00",
            Self::Dusk => "17:00 to 21:00",
            Self::Evening => "21:00 to 24:00",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Night => 0,
            Self::PreDawn => 1,
            Self::Dawn => 2,
            Self::Morning => 3,
            Self::Midday => 4,
            Self::Afternoon => 5,
            Self::Dusk => 6,
            Self::Evening => 7,
        }
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Night),
            1 => Some(Self::PreDawn),
            2 => Some(Self::Dawn),
            3 => Some(Self::Morning),
            4 => Some(Self::Midday),
            5 => Some(Self::Afternoon),
            6 => Some(Self::Dusk),
            7 => Some(Self::Evening),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|period| period.as_str() == value)
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active (day offset, time period) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Selection {
    pub day_offset: u8,
    pub period: TimePeriod,
}

impl Selection {
    /// Day offset 0, `06:00 to 09:00`.
    pub const DEFAULT: Self = Self {
        day_offset: 0,
        period: TimePeriod::Dawn,
    };

    /// Decodes a slider position; positions past the end clamp to the last one.
    pub const fn from_slider(position: u8) -> Self {
        let position = if position > MAX_SLIDER_POSITION {
            MAX_SLIDER_POSITION
        } else {
            position
        };
        let period = match TimePeriod::from_index(position % TimePeriod::COUNT) {
            Some(period) => period,
            None => TimePeriod::Dawn,
        };

        Self {
            day_offset: position / TimePeriod::COUNT,
            period,
        }
    }

    pub const fn slider_position(self) -> u8 {
        self.day_offset * TimePeriod::COUNT + self.period.index()
    }

    /// Calendar date this selection points at, counted from `today`.
    pub fn date(self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.day_offset)))
            .unwrap_or(today)
    }

    /// `YYYY-MM-DD`, the form the dataset's `date` field uses.
    ///
    /// Uses the local calendar date, not the UTC one, so it always agrees
    /// with [`Self::label`] even late in the evening.
    pub fn target_date(self, today: NaiveDate) -> String {
        self.date(today).format("%Y-%m-%d").to_string()
    }

    /// Human readable label, e.g. `Saturday, 1 June - 06:00 to 09:00`.
    pub fn label(self, today: NaiveDate) -> String {
        format!("{} - {}", self.date(today).format("%A, %-d %B"), self.period)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Holds the selection behind a single mutation point.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub const fn new() -> Self {
        Self {
            current: Selection::DEFAULT,
        }
    }

    pub const fn current(&self) -> Selection {
        self.current
    }

    /// Moves the slider and returns the selection the caller should render.
    pub fn set_slider_position(&mut self, position: u8) -> Selection {
        self.current = Selection::from_slider(position);
        self.current
    }

    pub fn step_forward(&mut self) -> Selection {
        let position = self.current.slider_position();
        let next = if position >= MAX_SLIDER_POSITION {
            MAX_SLIDER_POSITION
        } else {
            position + 1
        };
        self.set_slider_position(next)
    }

    pub fn step_back(&mut self) -> Selection {
        let position = self.current.slider_position();
        self.set_slider_position(position.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
    }

    #[test]
    fn slider_positions_round_trip() {
        for day_offset in 0..DAY_COUNT {
            for period_index in 0..TimePeriod::COUNT {
                let position = day_offset * 8 + period_index;
                let selection = Selection::from_slider(position);
                assert_eq!(selection.day_offset, day_offset);
                assert_eq!(selection.period.index(), period_index);
                assert_eq!(selection.slider_position(), position);
            }
        }
    }

    #[test]
    fn positions_past_the_end_clamp() {
        let selection = Selection::from_slider(200);
        assert_eq!(selection.day_offset, 3);
        assert_eq!(selection.period, TimePeriod::Evening);
    }

    #[test]
    fn default_is_dawn_today() {
        let state = SelectionState::new();
        assert_eq!(state.current().day_offset, 0);
        assert_eq!(state.current().period.as_str(), "06:00 to 09:00");
        assert_eq!(state.current().slider_position(), 2);
    }

    #[test]
    fn labels_parse_back() {
        for period in TimePeriod::ALL {
            assert_eq!(TimePeriod::parse(period.as_str()), Some(period));
        }
        assert_eq!(TimePeriod::parse(" 21:00 to 24:00 "), Some(TimePeriod::Evening));
        assert_eq!(TimePeriod::parse("21:00-24:00"), None);
    }

    #[test]
    fn target_date_adds_offset() {
        let selection = Selection::from_slider(10);
        assert_eq!(selection.target_date(june_first()), "2024-06-02");

        let month_end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default();
        assert_eq!(Selection::from_slider(31).target_date(month_end), "2024-07-03");
    }

    #[test]
    fn label_uses_long_weekday_and_month() {
        assert_eq!(
            Selection::DEFAULT.label(june_first()),
            "Saturday, 1 June - 06:00 to 09:00"
        );
    }

    #[test]
    fn stepping_stays_in_range() {
        let mut state = SelectionState::new();
        state.set_slider_position(0);
        assert_eq!(state.step_back().slider_position(), 0);

        state.set_slider_position(MAX_SLIDER_POSITION);
        assert_eq!(state.step_forward().slider_position(), MAX_SLIDER_POSITION);

        state.set_slider_position(7);
        let next = state.step_forward();
        assert_eq!(next.day_offset, 1);
        assert_eq!(next.period, TimePeriod::Night);
    }
}
