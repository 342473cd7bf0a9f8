//! Tool-wide constants.

use chrono_tz::Tz;

/// Pause between paginated Azure Graph calls, in milliseconds.
pub const SLEEP_MSEC: u64 = 100;

/// Environment variable holding the comma-separated dedicated CIDR list.
pub const ENV_DEDICATED_CIDRS: &str = "DEDICATED_CIDRS";

/// Timezone used to date-stamp cache and report filenames.
pub const LOCAL_TZ: Tz = chrono_tz::Pacific::Auckland;
