//! Post dates, normalized to UTC.
//!
//! Front matter dates come in a few shapes:
//!
//! ```text
//! 2024-06-15
//! 2024-06-15 14:30:45
//! 2024-06-15T14:30:45Z
//! 2024-06-15T14:30:45.123+02:00
//! ```
//!
//! All of them parse into a [`PostDate`], which orders chronologically and
//! formats as RFC 2822 (RSS) or RFC 3339 (Atom).

use anyhow::{Result, bail};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// UTC timestamp with second precision.
///
/// Field order matters: the derived `Ord` is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl PostDate {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a date or datetime, converting any UTC offset away.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let date = Self::from_ymd(year, month, day);
            return date.validate().ok().map(|()| date);
        }

        if !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }
        let (hour, minute, second, offset) = parse_time(&s[11..])?;

        let local = Self::new(year, month, day, hour, minute, second);
        local.validate().ok()?;
        Some(local.shift_seconds(-i64::from(offset)))
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        let max_days = days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }
        Ok(())
    }

    /// Format as RFC 3339 for Atom feeds: `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Format as RFC 2822 for RSS: `Sat, 15 Jun 2024 14:30:45 GMT`.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let weekday = self.days_since_epoch().rem_euclid(7) as usize;

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[weekday],
            self.day,
            MONTHS[usize::from(self.month - 1)],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    /// Days since 1970-01-01 (proleptic Gregorian).
    fn days_since_epoch(self) -> i64 {
        let month = i64::from(self.month);
        let year = i64::from(self.year) - i64::from(month <= 2);
        let era = year.div_euclid(400);
        let yoe = year - era * 400;
        let mp = (month + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    fn from_days_since_epoch(days: i64) -> (i64, u8, u8) {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        (year, month as u8, day as u8)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shift_seconds(self, delta: i64) -> Self {
        if delta == 0 {
            return self;
        }
        let total = self.days_since_epoch() * 86_400
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
            + delta;

        let days = total.div_euclid(86_400);
        let secs = total.rem_euclid(86_400);
        let (year, month, day) = Self::from_days_since_epoch(days);

        Self::new(
            year.clamp(0, 9999) as u16,
            month,
            day,
            (secs / 3600) as u8,
            ((secs / 60) % 60) as u8,
            (secs % 60) as u8,
        )
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for PostDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PostDateVisitor)
    }
}

struct PostDateVisitor;

impl<'de> Visitor<'de> for PostDateVisitor {
    type Value = PostDate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date like 2024-06-15 or 2024-06-15T14:30:45Z")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PostDate, E> {
        PostDate::parse(v).ok_or_else(|| E::custom(format!("invalid date `{v}`")))
    }

    /// TOML datetimes arrive as a single-entry map wrapping the string form.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PostDate, A::Error> {
        let Some((_, value)) = map.next_entry::<String, String>()? else {
            return Err(de::Error::custom("empty date"));
        };
        self.visit_str(&value)
    }
}

/// Parse `HH:MM[:SS][.fff][Z|±HH:MM]`, returning the offset in seconds.
fn parse_time(s: &str) -> Option<(u8, u8, u8, i32)> {
    let bytes = s.as_bytes();
    if bytes.len() < 5 || bytes[2] != b':' {
        return None;
    }
    let hour = parse_u8(&bytes[0..2])?;
    let minute = parse_u8(&bytes[3..5])?;
    let mut rest = &s[5..];

    let mut second = 0;
    if let Some(tail) = rest.strip_prefix(':') {
        second = parse_u8(tail.as_bytes().get(0..2)?)?;
        rest = &tail[2..];
    }
    if let Some(tail) = rest.strip_prefix('.') {
        let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        rest = &tail[digits..];
    }

    let offset = parse_offset(rest)?;
    Some((hour, minute, second, offset))
}

fn parse_offset(s: &str) -> Option<i32> {
    match s {
        "" | "Z" | "z" => return Some(0),
        _ => {}
    }
    let sign = match s.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = s[1..].replace(':', "");
    if digits.len() != 4 {
        return None;
    }
    let hours = parse_u8(&digits.as_bytes()[0..2])?;
    let minutes = parse_u8(&digits.as_bytes()[2..4])?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (i32::from(hours) * 3600 + i32::from(minutes) * 60))
}

#[inline]
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
