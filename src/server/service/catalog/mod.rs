//! Services for the planets, characters & starships users can favorite.

pub mod character;
pub mod planet;
pub mod starship;
