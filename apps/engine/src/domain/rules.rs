//! Table constants and the legal bid grid.

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 40;
pub const HAND_SIZE: usize = 9;
pub const STOCK_SIZE: usize = 4;
/// Cards the bid winner hands back after taking the stock.
pub const RETURN_COUNT: usize = 3;
pub const TRICKS_PER_ROUND: u8 = 10;

pub const MIN_BID: u16 = 100;
/// Ceiling for bids. The grid itself tops out at 185.
pub const MAX_BID: u16 = 187;
pub const BID_STEP: u16 = 5;
/// Walkover contract when every seat passes.
pub const WALKOVER_BID: u16 = MIN_BID;

/// Any dealt hand below this forces a redeal.
pub const MIN_HAND_POINTS: u16 = 12;
pub const NON_BIDDER_CAP: u16 = 50;
pub const WIN_SCORE: i32 = 302;
pub const LOSE_SCORE: i32 = -302;

pub const DECK_POINTS: u16 = 187;

/// Every value a seat may ever bid, ascending.
pub fn bid_grid() -> impl Iterator<Item = u16> {
    (MIN_BID..=MAX_BID).step_by(BID_STEP as usize)
}

pub fn is_on_grid(value: u16) -> bool {
    (MIN_BID..=MAX_BID).contains(&value) && (value - MIN_BID) % BID_STEP == 0
}

/// Lowest bid that would beat `current_bid` (0 means no bid yet).
pub fn min_bid_above(current_bid: u16) -> Option<u16> {
    if current_bid == 0 {
        return Some(MIN_BID);
    }
    bid_grid().find(|&v| v > current_bid)
}
