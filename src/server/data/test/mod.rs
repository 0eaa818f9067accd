mod advent;
mod emoji;
mod friend_code;
mod game_title;
mod message;
