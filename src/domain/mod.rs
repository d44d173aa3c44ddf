pub mod autopost;
