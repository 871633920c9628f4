mod game_card;
mod game_detail;

pub use game_card::GameCard;
pub use game_detail::GameDetail;
