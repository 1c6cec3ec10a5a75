mod home;
mod profile;
mod reservations;
mod restaurants;

pub use self::{home::*, profile::*, reservations::*, restaurants::*};
