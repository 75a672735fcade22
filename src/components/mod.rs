//! UI Components
//!
//! Page views and shared pieces.

mod detail_row;
mod favorites_list;
mod house_detail;
mod houses_list;
mod spell_detail;
mod spells_list;

pub use detail_row::DetailRow;
pub use favorites_list::FavoritesList;
pub use house_detail::HouseDetail;
pub use houses_list::HousesList;
pub use spell_detail::SpellDetail;
pub use spells_list::SpellsList;
