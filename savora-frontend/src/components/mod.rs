mod background;
mod city_select;
mod footer;
mod navbar;
mod reservation_card;
mod restaurant_card;

pub use self::{
    background::*, city_select::*, footer::*, navbar::*, reservation_card::*, restaurant_card::*,
};
