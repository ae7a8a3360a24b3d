//! Time service trait and desktop implementation.

use std::time::Instant;

use folio_types::error::Result;

// ---------------------------------------------------------------------------
// Wall-clock timestamp
// ---------------------------------------------------------------------------

/// A simple UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Default for SystemTime {
    /// The Unix epoch.
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl SystemTime {
    /// Break seconds since the Unix epoch into a UTC timestamp.
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let (year, month, day) = days_to_ymd(days);
        Self {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
        }
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        // Tomohiko Sakamoto's algorithm.
        let t = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let month = self.month.clamp(1, 12) as usize;
        let y = if month < 3 {
            i32::from(self.year) - 1
        } else {
            i32::from(self.year)
        };
        let dow = (y + y / 4 - y / 100 + y / 400 + t[month - 1] + i32::from(self.day)) % 7;
        Weekday::from_index(dow as u8)
    }

    /// Three-letter English month abbreviation.
    pub fn month_abbrev(&self) -> &'static str {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        MONTHS[usize::from(self.month.clamp(1, 12)) - 1]
    }

    /// `HH:MM:SS`.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// `date`-style rendering, e.g. `Mon Oct 19 14:03:07 UTC 2026`.
    pub fn long_format(&self) -> String {
        format!(
            "{} {} {:02} {} UTC {}",
            self.weekday(),
            self.month_abbrev(),
            self.day,
            self.clock(),
            self.year,
        )
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    fn from_index(i: u8) -> Self {
        match i % 7 {
            0 => Self::Sun,
            1 => Self::Mon,
            2 => Self::Tue,
            3 => Self::Wed,
            4 => Self::Thu,
            5 => Self::Fri,
            _ => Self::Sat,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;

    /// Seconds since the process started.
    fn uptime_secs(&self) -> Result<u64>;
}

/// Desktop clock backed by the OS.
pub struct DesktopClock {
    start_time: Instant,
}

impl DesktopClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for DesktopClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopClock {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let secs = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Ok(SystemTime::from_unix_secs(secs))
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(self.start_time.elapsed().as_secs())
    }
}

/// A clock frozen at one instant. Used by tests and headless hosts.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: SystemTime,
    pub uptime: u64,
}

impl FixedClock {
    pub fn new(now: SystemTime) -> Self {
        Self { now, uptime: 0 }
    }
}

impl TimeService for FixedClock {
    fn now(&self) -> Result<SystemTime> {
        Ok(self.now)
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(self.uptime)
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 12u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    (year, month, (days + 1) as u8)
}

fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}
