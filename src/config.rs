//! Runtime configuration read from the environment
//!
//! | variable           | effect                                             |
//! |--------------------|----------------------------------------------------|
//! | `GIT_AUTHOR_NAME`  | commit author (falls back to `USER`, then unknown) |
//! | `GIT_AUTHOR_EMAIL` | appended to the author as `Name <email>`           |
//! | `GIT_AUTHOR_DATE`  | fixed commit timestamp instead of the clock        |
//! | `TWIG_LOG`         | tracing filter, read by the binary                 |

use chrono::{DateTime, FixedOffset};

pub const LOG_ENV_VAR: &str = "TWIG_LOG";

const UNKNOWN_AUTHOR: &str = "unknown";
const ALTERNATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    author: String,
    author_date: Option<DateTime<FixedOffset>>,
}

impl Config {
    pub fn new(author: impl Into<String>, author_date: Option<DateTime<FixedOffset>>) -> Self {
        Config {
            author: author.into(),
            author_date,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through `lookup` instead of the process
    /// environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let name = non_empty("GIT_AUTHOR_NAME")
            .or_else(|| non_empty("USER"))
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        let author = match non_empty("GIT_AUTHOR_EMAIL") {
            Some(email) => format!("{name} <{email}>"),
            None => name,
        };

        let author_date = non_empty("GIT_AUTHOR_DATE").and_then(|date| {
            let parsed = Self::parse_date(&date);
            if parsed.is_none() {
                tracing::warn!(date = %date, "ignoring unparsable GIT_AUTHOR_DATE");
            }
            parsed
        });

        Config {
            author,
            author_date,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn author_date(&self) -> Option<DateTime<FixedOffset>> {
        self.author_date
    }

    /// The timestamp for a commit made right now
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        self.author_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    fn parse_date(date: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date)
            .or_else(|_| DateTime::parse_from_str(date, ALTERNATE_DATE_FORMAT))
            .ok()
    }
}
