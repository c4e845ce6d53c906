use std::fmt;

use chrono::DateTime;
use ethers_core::types::{Address, U256};
use ethers_core::utils::{parse_ether, to_checksum};

use crate::consts::{BPS_DENOMINATOR, ETH_DECIMALS, PLATFORM_FEE_BPS};
use crate::error::ClientError;

/// Percentage of correct predictions with one decimal, `"0"` when nothing was predicted.
pub fn accuracy(correct: u64, total: u64) -> String {
    if total == 0 {
        return "0".to_string();
    }
    // Half tenths round up.
    let tenths = (correct as u128 * 1_000 + total as u128 / 2) / total as u128;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Accuracy as a plain percentage, for progress bars.
pub fn accuracy_ratio(correct: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (correct as f64 / total as f64) * 100.0
}

/// The combined pot of a duel and how the contract splits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotSplit {
    pub stake: U256,
    pub pot: U256,
    pub fee: U256,
    pub winner: U256,
}

impl PotSplit {
    pub fn from_stake(stake: U256) -> Self {
        let pot = stake.saturating_mul(U256::from(2));
        let fee = pot.saturating_mul(U256::from(PLATFORM_FEE_BPS)) / U256::from(BPS_DENOMINATOR);
        Self {
            stake,
            pot,
            fee,
            winner: pot - fee,
        }
    }
}

/// Time left until a deadline, at minute granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Ended,
    Remaining { days: u64, hours: u64, minutes: u64 },
}

impl Countdown {
    pub fn until(end: u64, now: u64) -> Self {
        if end <= now {
            return Countdown::Ended;
        }
        let remaining = end - now;
        Countdown::Remaining {
            days: remaining / 86_400,
            hours: (remaining % 86_400) / 3_600,
            minutes: (remaining % 3_600) / 60,
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Countdown::Ended)
    }

    pub fn total_minutes(&self) -> u64 {
        match *self {
            Countdown::Ended => 0,
            Countdown::Remaining {
                days,
                hours,
                minutes,
            } => days * 1_440 + hours * 60 + minutes,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Countdown::Ended => write!(f, "Ended"),
            Countdown::Remaining {
                days,
                hours,
                minutes,
            } if days > 0 => write!(f, "{days}d {hours}h {minutes}m"),
            Countdown::Remaining { hours, minutes, .. } if hours > 0 => {
                write!(f, "{hours}h {minutes}m")
            }
            Countdown::Remaining { minutes, .. } => write!(f, "{minutes}m"),
        }
    }
}

pub fn countdown(end: u64, now: u64) -> String {
    Countdown::until(end, now).to_string()
}

/// Hours and minutes until a prediction can be resolved, `None` once it can.
pub fn resolves_in(resolution_time: u64, now: u64) -> Option<String> {
    if resolution_time <= now {
        return None;
    }
    let left = resolution_time - now;
    Some(format!("{}h {}m", left / 3_600, (left % 3_600) / 60))
}

/// Renders a fixed-point integer with exactly `precision` decimals, rounding half up.
pub fn format_fixed(value: U256, decimals: u32, precision: u32) -> String {
    let precision = precision.min(decimals);
    let unit = U256::exp10((decimals - precision) as usize);
    let scaled = value.saturating_add(unit / 2) / unit;
    if precision == 0 {
        return scaled.to_string();
    }
    let base = U256::exp10(precision as usize);
    format!(
        "{}.{:0>width$}",
        scaled / base,
        (scaled % base).to_string(),
        width = precision as usize
    )
}

/// Wei as a decimal ETH amount without trailing zeros.
pub fn format_ether(wei: U256) -> String {
    let full = format_fixed(wei, ETH_DECIMALS, ETH_DECIMALS);
    full.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn format_ether_fixed(wei: U256, precision: u32) -> String {
    format_fixed(wei, ETH_DECIMALS, precision)
}

/// Oracle price as `$x.xx`.
pub fn format_price(price: U256, decimals: u8) -> String {
    format!("${}", format_fixed(price, decimals as u32, 2))
}

/// Parses a stake typed by the user into wei.
pub fn parse_stake(input: &str) -> Result<U256, ClientError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidStake("enter an amount".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(ClientError::InvalidStake(format!("{trimmed} is negative")));
    }
    let wei = parse_ether(trimmed)
        .map_err(|e| ClientError::InvalidStake(format!("{trimmed}: {e}")))?;
    if wei.is_zero() {
        return Err(ClientError::InvalidStake(
            "stake must be greater than zero".to_string(),
        ));
    }
    Ok(wei)
}

/// Payout preview under the create-duel form.
pub fn winner_takes_preview(input: &str) -> String {
    let stake = parse_stake(input).unwrap_or_default();
    format_ether_fixed(PotSplit::from_stake(stake).winner, 4)
}

/// `0x1234...abcd` form of the checksummed address.
pub fn short_address(address: &Address) -> String {
    let full = to_checksum(address, None);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

pub fn checksum(address: &Address) -> String {
    to_checksum(address, None)
}

/// `Oct 19, 02:30 PM`
pub fn format_timestamp(timestamp: u64) -> String {
    render_utc(timestamp, "%b %-d, %I:%M %p")
}

/// `Oct 19, 2026`
pub fn format_date(timestamp: u64) -> String {
    render_utc(timestamp, "%b %-d, %Y")
}

fn render_utc(timestamp: u64, pattern: &str) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|time| time.format(pattern).to_string())
        .unwrap_or_else(|| "-".to_string())
}
