//! Candle time frames

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "3m")]
    ThreeMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "8h")]
    EightHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::OneMinute => "1m",
            TimeFrame::ThreeMinutes => "3m",
            TimeFrame::FiveMinutes => "5m",
            TimeFrame::FifteenMinutes => "15m",
            TimeFrame::ThirtyMinutes => "30m",
            TimeFrame::OneHour => "1h",
            TimeFrame::TwoHours => "2h",
            TimeFrame::FourHours => "4h",
            TimeFrame::SixHours => "6h",
            TimeFrame::EightHours => "8h",
            TimeFrame::TwelveHours => "12h",
            TimeFrame::OneDay => "1d",
            TimeFrame::ThreeDays => "3d",
            TimeFrame::OneWeek => "1w",
            TimeFrame::OneMonth => "1M",
        }
    }

    /// Length of one candle in minutes. A month counts as 30 days.
    pub fn minutes(&self) -> i64 {
        match self {
            TimeFrame::OneMinute => 1,
            TimeFrame::ThreeMinutes => 3,
            TimeFrame::FiveMinutes => 5,
            TimeFrame::FifteenMinutes => 15,
            TimeFrame::ThirtyMinutes => 30,
            TimeFrame::OneHour => 60,
            TimeFrame::TwoHours => 120,
            TimeFrame::FourHours => 240,
            TimeFrame::SixHours => 360,
            TimeFrame::EightHours => 480,
            TimeFrame::TwelveHours => 720,
            TimeFrame::OneDay => 1_440,
            TimeFrame::ThreeDays => 4_320,
            TimeFrame::OneWeek => 10_080,
            TimeFrame::OneMonth => 43_200,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.minutes())
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tf = match s {
            "1m" => TimeFrame::OneMinute,
            "3m" => TimeFrame::ThreeMinutes,
            "5m" => TimeFrame::FiveMinutes,
            "15m" => TimeFrame::FifteenMinutes,
            "30m" => TimeFrame::ThirtyMinutes,
            "1h" => TimeFrame::OneHour,
            "2h" => TimeFrame::TwoHours,
            "4h" => TimeFrame::FourHours,
            "6h" => TimeFrame::SixHours,
            "8h" => TimeFrame::EightHours,
            "12h" => TimeFrame::TwelveHours,
            "1d" => TimeFrame::OneDay,
            "3d" => TimeFrame::ThreeDays,
            "1w" => TimeFrame::OneWeek,
            "1M" => TimeFrame::OneMonth,
            other => return Err(format!("Unknown time frame: {}", other)),
        };
        Ok(tf)
    }
}
