use crate::domain::state::Player;

/// Bonus added to the trick count on an exact forecast.
pub const EXACT_BID_BONUS: i32 = 2;

/// Reward for one seat: `tricks_won + 2` on an exact forecast, otherwise
/// minus the distance between forecast and tricks won.
pub fn score(tricks_won: u8, forecast: u8) -> i32 {
    let won = i32::from(tricks_won);
    let bid = i32::from(forecast);
    if won == bid {
        won + EXACT_BID_BONUS
    } else {
        -(bid - won).abs()
    }
}

/// Per-seat rewards in seat order. An unset forecast counts as zero.
pub fn judge_payoffs(players: &[Player]) -> Vec<i32> {
    players
        .iter()
        .map(|p| score(p.tricks_won, p.forecast.unwrap_or(0)))
        .collect()
}

/// Element-wise sum of running totals and one match's points.
///
/// The result is as long as the longer input; missing entries count as zero.
pub fn accumulate(total_points: &[i32], round_points: &[i32]) -> Vec<i32> {
    let len = total_points.len().max(round_points.len());
    (0..len)
        .map(|i| {
            total_points.get(i).copied().unwrap_or(0) + round_points.get(i).copied().unwrap_or(0)
        })
        .collect()
}
