mod auth;
mod booking;
mod payment;
mod place;
mod review;
mod user;
