pub use super::advent::Entity as Advent;
pub use super::chart::Entity as Chart;
pub use super::emoji_log::Entity as EmojiLog;
pub use super::friend_code::Entity as FriendCode;
pub use super::friend_code_game::Entity as FriendCodeGame;
pub use super::game::Entity as Game;
pub use super::message_log::Entity as MessageLog;
pub use super::song::Entity as Song;
